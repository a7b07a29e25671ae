//! # Star trail tolerance
//!
//! [`TrailTolerance`] is how much apparent star motion the photographer accepts.
//! Its coefficient multiplies the NPF exposure time linearly: a slight trail allows
//! twice the pin-point exposure, a visible trail three times.
use std::{fmt, str::FromStr};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    constants::{PIN_POINT_COEFF, SLIGHT_TRAIL_COEFF, VISIBLE_TRAIL_COEFF},
    npf_errors::NpfError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrailTolerance {
    #[default]
    PinPoint,
    Slight,
    Visible,
}

impl TrailTolerance {
    /// Every tolerance, from the strictest to the loosest.
    pub const ALL: [TrailTolerance; 3] = [
        TrailTolerance::PinPoint,
        TrailTolerance::Slight,
        TrailTolerance::Visible,
    ];

    /// Dimensionless factor applied to the NPF exposure time.
    pub const fn coefficient(self) -> f64 {
        match self {
            TrailTolerance::PinPoint => PIN_POINT_COEFF,
            TrailTolerance::Slight => SLIGHT_TRAIL_COEFF,
            TrailTolerance::Visible => VISIBLE_TRAIL_COEFF,
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            TrailTolerance::PinPoint => "pin-point",
            TrailTolerance::Slight => "slight",
            TrailTolerance::Visible => "visible",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TrailTolerance::PinPoint => "Pin point",
            TrailTolerance::Slight => "Slight trail",
            TrailTolerance::Visible => "Visible trail",
        }
    }
}

impl fmt::Display for TrailTolerance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TrailTolerance {
    type Err = NpfError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TrailTolerance::ALL
            .into_iter()
            .find(|t| t.key() == s)
            .ok_or_else(|| NpfError::UnknownTrailTolerance {
                given: s.to_string(),
                expected: TrailTolerance::ALL.iter().map(|t| t.key()).join(", "),
            })
    }
}
