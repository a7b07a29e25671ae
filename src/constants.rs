//! # Constants and type definitions for the NPF calculator
//!
//! This module centralizes the **empirical coefficients** of the NPF rule, the
//! **physical sensor widths**, the **default parameter values** and the **input
//! ranges** used by range controls.
//!
//! ## Overview
//!
//! - NPF rule coefficients (aperture, focal length and pixel pitch terms)
//! - Physical horizontal sensor widths, in micrometers
//! - Star trail coefficients
//! - Default parameters of a fresh [`crate::store::ParameterStore`]
//! - Unit aliases used across the crate
//!
//! The NPF rule itself is described in [`crate::npf_rule`].

use crate::input::InputRange;

// -------------------------------------------------------------------------------------------------
// Unit aliases
// -------------------------------------------------------------------------------------------------

/// Length in micrometers
pub type Micrometer = f64;
/// Length in millimeters
pub type Millimeter = u32;
/// Angle in radians
pub type Radian = f64;
/// Duration in seconds
pub type Second = f64;
/// Aperture as an f-number (f/N)
pub type FNumber = f64;
/// Horizontal image resolution in pixels
pub type Pixels = u32;

// -------------------------------------------------------------------------------------------------
// NPF rule coefficients
// -------------------------------------------------------------------------------------------------

/// Aperture term coefficient (seconds per f-stop, before division by focal length)
pub const NPF_APERTURE_COEFF: f64 = 16.856;

/// Focal length term coefficient
pub const NPF_FOCAL_COEFF: f64 = 0.0997;

/// Pixel pitch term coefficient (per micrometer)
pub const NPF_PITCH_COEFF: f64 = 13.713;

/// Declination of the target. Always zero: latitude input is not wired up.
pub const DECLINATION_OFFSET: Radian = 0.0;

// -------------------------------------------------------------------------------------------------
// Lookup table values
// -------------------------------------------------------------------------------------------------

/// 36 mm full-frame sensor width
pub const FULL_FRAME_WIDTH: Micrometer = 36_000.0;

/// Canon APS-C sensor width (22.3 mm)
pub const APSC_CANON_WIDTH: Micrometer = 22_300.0;

/// APS-C width used by other manufacturers (23.6 mm)
pub const APSC_OTHER_WIDTH: Micrometer = 23_600.0;

/// Micro Four Thirds sensor width (17.3 mm)
pub const MICRO_FOUR_THIRDS_WIDTH: Micrometer = 17_300.0;

pub const PIN_POINT_COEFF: f64 = 1.0;
pub const SLIGHT_TRAIL_COEFF: f64 = 2.0;
pub const VISIBLE_TRAIL_COEFF: f64 = 3.0;

// -------------------------------------------------------------------------------------------------
// Defaults
// -------------------------------------------------------------------------------------------------

pub const DEFAULT_PIXEL_WIDTH: Pixels = 6000;
pub const DEFAULT_FOCAL_LENGTH: Millimeter = 50;
pub const DEFAULT_F_NUMBER: FNumber = 1.4;

// -------------------------------------------------------------------------------------------------
// Range controls
// -------------------------------------------------------------------------------------------------

/// Bounds of the pixel width range control
pub const PIXEL_WIDTH_RANGE: InputRange<Pixels> = InputRange::new(1, 10_000, 1);

/// Bounds of the focal length range control
pub const FOCAL_LENGTH_RANGE: InputRange<Millimeter> = InputRange::new(1, 1_000, 1);

/// Bounds of the f-number range control, in tenth of a stop steps
pub const F_NUMBER_RANGE: InputRange<FNumber> = InputRange::new(1.0, 36.0, 0.1);
