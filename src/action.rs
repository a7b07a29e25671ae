//! # Store actions
//!
//! [`Action`] is the closed set of mutations accepted by
//! [`ParameterStore::dispatch`](crate::store::ParameterStore::dispatch). Each variant
//! carries the raw payload of the control that produced it:
//!
//! | Action | Payload |
//! |---|---|
//! | [`Action::SetSensorSize`] | [`SensorSize`] |
//! | [`Action::SetPixelWidth`] | [`Entry<u32>`] (text or range) |
//! | [`Action::SetFocalLength`] | [`Entry<u32>`] (text or range) |
//! | [`Action::SetFNumber`] | [`Entry<f64>`] (text or range) |
//! | [`Action::SetTrailTolerance`] | [`TrailTolerance`] |
use crate::{
    constants::{FNumber, Millimeter, Pixels},
    input::Entry,
    sensor::SensorSize,
    trail::TrailTolerance,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    SetSensorSize(SensorSize),
    SetPixelWidth(Entry<Pixels>),
    SetFocalLength(Entry<Millimeter>),
    SetFNumber(Entry<FNumber>),
    SetTrailTolerance(TrailTolerance),
}

impl Action {
    /// Short name of the action, for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SetSensorSize(_) => "setSensorSize",
            Action::SetPixelWidth(_) => "setPixelWidth",
            Action::SetFocalLength(_) => "setFocalLength",
            Action::SetFNumber(_) => "setFNumber",
            Action::SetTrailTolerance(_) => "setTrailTolerance",
        }
    }
}

impl From<SensorSize> for Action {
    fn from(value: SensorSize) -> Self {
        Action::SetSensorSize(value)
    }
}

impl From<TrailTolerance> for Action {
    fn from(value: TrailTolerance) -> Self {
        Action::SetTrailTolerance(value)
    }
}

/// What a dispatch did to the canonical state.
///
/// This is informational; a dispatch never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The canonical state changed.
    Updated,
    /// The payload was valid but equal to the current state.
    Unchanged,
    /// The text did not parse; it was kept for redisplay, the value was not touched.
    TextRetained,
    /// A range value outside the field's domain (`NaN`, `∞`, f/0); nothing was stored.
    Rejected,
}
