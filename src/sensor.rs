//! # Sensor size classes
//!
//! [`SensorSize`] enumerates the sensor formats offered by the calculator and maps
//! each one to its **physical horizontal width** in micrometers. Together with the
//! horizontal pixel count this gives the pixel pitch used by the NPF rule.
//!
//! | Variant | Key | Width (µm) |
//! |---|---|---|
//! | [`SensorSize::Full`] | `full` | 36 000 |
//! | [`SensorSize::ApscCanon`] | `apsc-c` | 22 300 |
//! | [`SensorSize::ApscOther`] | `apsc-x` | 23 600 |
//! | [`SensorSize::MicroFourThirds`] | `mft` | 17 300 |
//!
//! Keys are what a select control carries as option value. The long forms
//! `apsc-canon`, `apsc-other` and `micro-four-thirds` are accepted as aliases.
//!
//! ```rust
//! use npf::sensor::SensorSize;
//!
//! let sensor: SensorSize = "apsc-c".parse().unwrap();
//! assert_eq!(sensor.physical_width(), 22_300.0);
//! ```
use std::{fmt, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{
        Micrometer, APSC_CANON_WIDTH, APSC_OTHER_WIDTH, FULL_FRAME_WIDTH, MICRO_FOUR_THIRDS_WIDTH,
    },
    npf_errors::NpfError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SensorSize {
    #[default]
    #[serde(rename = "full")]
    Full,
    #[serde(rename = "apsc-c", alias = "apsc-canon")]
    ApscCanon,
    #[serde(rename = "apsc-x", alias = "apsc-other")]
    ApscOther,
    #[serde(rename = "mft", alias = "micro-four-thirds")]
    MicroFourThirds,
}

impl SensorSize {
    /// Every sensor class, in the order a selector lists them.
    pub const ALL: [SensorSize; 4] = [
        SensorSize::Full,
        SensorSize::ApscCanon,
        SensorSize::ApscOther,
        SensorSize::MicroFourThirds,
    ];

    /// Physical horizontal width of the sensor, in micrometers.
    pub const fn physical_width(self) -> Micrometer {
        match self {
            SensorSize::Full => FULL_FRAME_WIDTH,
            SensorSize::ApscCanon => APSC_CANON_WIDTH,
            SensorSize::ApscOther => APSC_OTHER_WIDTH,
            SensorSize::MicroFourThirds => MICRO_FOUR_THIRDS_WIDTH,
        }
    }

    /// Short key used as option value and in serialized form.
    pub const fn key(self) -> &'static str {
        match self {
            SensorSize::Full => "full",
            SensorSize::ApscCanon => "apsc-c",
            SensorSize::ApscOther => "apsc-x",
            SensorSize::MicroFourThirds => "mft",
        }
    }

    /// Human readable name.
    pub const fn label(self) -> &'static str {
        match self {
            SensorSize::Full => "Full frame",
            SensorSize::ApscCanon => "APS-C (Canon)",
            SensorSize::ApscOther => "APS-C (other)",
            SensorSize::MicroFourThirds => "Micro Four Thirds",
        }
    }
}

impl fmt::Display for SensorSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SensorSize {
    type Err = NpfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(SensorSize::Full),
            "apsc-c" | "apsc-canon" => Ok(SensorSize::ApscCanon),
            "apsc-x" | "apsc-other" => Ok(SensorSize::ApscOther),
            "mft" | "micro-four-thirds" => Ok(SensorSize::MicroFourThirds),
            _ => Err(NpfError::UnknownSensorSize {
                given: s.to_string(),
                expected: SensorSize::ALL.iter().map(|v| v.key()).join(", "),
            }),
        }
    }
}
