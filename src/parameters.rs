//! # Photographic parameters
//!
//! [`ParameterSet`] is the canonical state behind the calculator: the five values the
//! NPF rule needs. A fresh set holds the defaults
//!
//! ```text
//! full frame, 6000 px, 50 mm, f/1.4, pin-point
//! ```
//!
//! Custom starting values go through [`ParameterSet::builder`], which validates the
//! numeric fields before handing out a set:
//!
//! ```rust
//! use npf::parameters::ParameterSet;
//! use npf::sensor::SensorSize;
//!
//! let params = ParameterSet::builder()
//!     .sensor_size(SensorSize::MicroFourThirds)
//!     .focal_length(12)
//!     .f_number(2.8)
//!     .build()
//!     .unwrap();
//! assert_eq!(params.pixel_width, 6000);
//! ```
//!
//! The set is `serde` (de)serializable using the same keys as the select controls, so
//! a host application can keep it in its own configuration.
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        FNumber, Millimeter, Pixels, Second, DEFAULT_FOCAL_LENGTH, DEFAULT_F_NUMBER,
        DEFAULT_PIXEL_WIDTH,
    },
    input::round_to_tenth,
    npf_errors::NpfError,
    npf_rule,
    sensor::SensorSize,
    trail::TrailTolerance,
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSet {
    pub sensor_size: SensorSize,
    /// Horizontal image resolution, in pixels.
    pub pixel_width: Pixels,
    /// Effective focal length, in millimeters.
    pub focal_length: Millimeter,
    /// Aperture, quantized to a tenth of a stop.
    pub f_number: FNumber,
    pub trail_tolerance: TrailTolerance,
}

impl Default for ParameterSet {
    fn default() -> Self {
        ParameterSet {
            sensor_size: SensorSize::Full,
            pixel_width: DEFAULT_PIXEL_WIDTH,
            focal_length: DEFAULT_FOCAL_LENGTH,
            f_number: DEFAULT_F_NUMBER,
            trail_tolerance: TrailTolerance::PinPoint,
        }
    }
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a [`ParameterSetBuilder`] starting from the defaults.
    pub fn builder() -> ParameterSetBuilder {
        ParameterSetBuilder::new()
    }

    /// Pixel pitch in micrometers, see [`npf_rule::pixel_pitch`].
    pub fn pixel_pitch(&self) -> f64 {
        npf_rule::pixel_pitch(self.sensor_size, self.pixel_width)
    }

    /// Maximum exposure time in seconds, see [`npf_rule::exposure_time`].
    pub fn exposure_time(&self) -> Second {
        npf_rule::exposure_time(self)
    }
}

/// Builder for [`ParameterSet`], with validation.
#[derive(Debug, Clone)]
pub struct ParameterSetBuilder {
    params: ParameterSet,
}

impl Default for ParameterSetBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterSetBuilder {
    pub fn new() -> Self {
        Self {
            params: ParameterSet::default(),
        }
    }

    pub fn sensor_size(mut self, v: SensorSize) -> Self {
        self.params.sensor_size = v;
        self
    }
    pub fn pixel_width(mut self, v: Pixels) -> Self {
        self.params.pixel_width = v;
        self
    }
    pub fn focal_length(mut self, v: Millimeter) -> Self {
        self.params.focal_length = v;
        self
    }
    pub fn f_number(mut self, v: FNumber) -> Self {
        self.params.f_number = v;
        self
    }
    pub fn trail_tolerance(mut self, v: TrailTolerance) -> Self {
        self.params.trail_tolerance = v;
        self
    }

    /// Validate and return the parameter set.
    ///
    /// Checks
    /// -----------------
    /// * `pixel_width` and `focal_length` are strictly positive.
    /// * `f_number` is finite and strictly positive.
    ///
    /// The f-number is then rounded to the nearest tenth.
    ///
    /// Return
    /// ----------
    /// * `Ok(ParameterSet)` on success.
    /// * `Err(NpfError::InvalidParameter)` naming the first offending field.
    pub fn build(self) -> Result<ParameterSet, NpfError> {
        let mut p = self.params;

        if p.pixel_width == 0 {
            return Err(NpfError::InvalidParameter(
                "pixel_width must be > 0".into(),
            ));
        }
        if p.focal_length == 0 {
            return Err(NpfError::InvalidParameter(
                "focal_length must be > 0".into(),
            ));
        }
        if !p.f_number.is_finite() || p.f_number <= 0.0 {
            return Err(NpfError::InvalidParameter(format!(
                "f_number must be finite and > 0 (got {})",
                p.f_number
            )));
        }

        p.f_number = round_to_tenth(p.f_number);
        Ok(p)
    }
}
