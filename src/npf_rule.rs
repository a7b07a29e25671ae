//! # NPF rule
//!
//! The NPF rule is an empirical formula giving the longest
//! exposure before stars start to trail on the sensor, as a function of the aperture
//! `N`, the focal length `f` and the pixel pitch `p`:
//!
//! ```text
//! t = k · (16.856 N + 0.0997 f + 13.713 p) / (f · cos δ)
//! ```
//!
//! where `k` is the [`TrailTolerance`](crate::trail::TrailTolerance) coefficient and
//! `δ` the declination of the target, fixed at zero.
//!
//! ## Zero inputs
//!
//! Focal length and pixel width may transiently be zero while the user edits them.
//! Both propagate IEEE semantics instead of failing:
//!
//! - `pixel_width = 0` gives an infinite pitch and an infinite exposure time.
//! - `focal_length = 0` divides a positive numerator by zero, which is `+∞`.
//!
//! A valid [`ParameterSet`] never yields `NaN`.
//!
//! ## Precision
//!
//! [`exposure_time`] returns the full-precision value. Rounding to one decimal is done
//! only for display, through [`round_for_display`].
use crate::{
    constants::{
        Micrometer, Pixels, Second, DECLINATION_OFFSET, NPF_APERTURE_COEFF, NPF_FOCAL_COEFF,
        NPF_PITCH_COEFF,
    },
    parameters::ParameterSet,
    sensor::SensorSize,
};

/// Distance between photosites: sensor width over horizontal resolution.
pub fn pixel_pitch(sensor_size: SensorSize, pixel_width: Pixels) -> Micrometer {
    sensor_size.physical_width() / f64::from(pixel_width)
}

/// Maximum exposure time in seconds for the given parameters.
///
/// Pure and deterministic; recomputed by every caller instead of cached.
pub fn exposure_time(params: &ParameterSet) -> Second {
    let pitch = pixel_pitch(params.sensor_size, params.pixel_width);
    let focal = f64::from(params.focal_length);
    let k = params.trail_tolerance.coefficient();

    k * (NPF_APERTURE_COEFF * params.f_number + NPF_FOCAL_COEFF * focal + NPF_PITCH_COEFF * pitch)
        / (focal * DECLINATION_OFFSET.cos())
}

/// Round an exposure time to one decimal place for display.
pub fn round_for_display(seconds: Second) -> Second {
    (seconds * 10.0).round() / 10.0
}
