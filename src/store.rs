//! # Parameter store
//!
//! [`ParameterStore`] owns the canonical [`ParameterSet`] of one calculator session and
//! the derived exposure time. It is the only place where state changes, and the only
//! way to change it is [`ParameterStore::dispatch`].
//!
//! ## Flow
//!
//! ```text
//! control ──Action──▶ dispatch ──▶ canonical state ──▶ exposure time ──▶ accessors
//! ```
//!
//! Every dispatch runs to completion, state update and recomputation included, before
//! it returns. The store is a plain owned value: create one per session and pass it by
//! reference (or behind a single lock if events come from several threads) to whatever
//! renders it.
//!
//! ## Numeric fields
//!
//! Pixel width, focal length and f-number are held as [`TextField`]s. The store exposes
//! both the canonical value and the raw text so a text box can echo exactly what was
//! typed. Text that does not parse is kept but leaves the value, and therefore the
//! exposure time, untouched. No error ever leaves `dispatch`.
//!
//! ## Example
//!
//! ```rust
//! use npf::action::Action;
//! use npf::store::ParameterStore;
//! use npf::trail::TrailTolerance;
//!
//! let mut store = ParameterStore::new();
//! assert_eq!(store.exposure_time_rounded(), 2.2);
//!
//! store.dispatch(Action::SetFocalLength("2".into()));
//! store.dispatch(Action::SetFocalLength("24".into()));
//! store.dispatch(TrailTolerance::Slight);
//! assert_eq!(store.focal_length(), 24);
//! ```
use hifitime::{Duration, Unit};
use log::{debug, trace};

use crate::{
    action::{Action, DispatchOutcome},
    constants::{FNumber, Micrometer, Millimeter, Pixels, Second},
    input::TextField,
    npf_rule,
    parameters::ParameterSet,
    sensor::SensorSize,
    trail::TrailTolerance,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ParameterStore {
    sensor_size: SensorSize,
    pixel_width: TextField<Pixels>,
    focal_length: TextField<Millimeter>,
    f_number: TextField<FNumber>,
    trail_tolerance: TrailTolerance,
    exposure_time: Second,
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ParameterSet> for ParameterStore {
    fn from(params: ParameterSet) -> Self {
        Self::with_parameters(params)
    }
}

impl ParameterStore {
    /// Store initialized with the default parameters.
    pub fn new() -> Self {
        Self::with_parameters(ParameterSet::default())
    }

    /// Store initialized with custom parameters, typically from
    /// [`ParameterSet::builder`].
    pub fn with_parameters(params: ParameterSet) -> Self {
        ParameterStore {
            sensor_size: params.sensor_size,
            pixel_width: TextField::new(params.pixel_width),
            focal_length: TextField::new(params.focal_length),
            f_number: TextField::new(params.f_number),
            trail_tolerance: params.trail_tolerance,
            exposure_time: npf_rule::exposure_time(&params),
        }
    }

    /// Apply one action to the canonical state.
    ///
    /// Arguments
    /// -----------------
    /// * `action`: the mutation to apply. Enums convert directly, e.g.
    ///   `store.dispatch(SensorSize::ApscCanon)`.
    ///
    /// Return
    /// ----------
    /// * [`DispatchOutcome::Updated`] if the state changed; the exposure time has been
    ///   recomputed by the time this returns.
    /// * [`DispatchOutcome::Unchanged`] if the payload equals the current state.
    /// * [`DispatchOutcome::TextRetained`] if numeric text did not parse; only the raw
    ///   text was stored.
    /// * [`DispatchOutcome::Rejected`] if a range value was outside the field's domain
    ///   (a `NaN`, infinite or non-positive f-number); nothing was stored.
    pub fn dispatch(&mut self, action: impl Into<Action>) -> DispatchOutcome {
        let action = action.into();
        let kind = action.kind();

        let outcome = match action {
            Action::SetSensorSize(value) => replace(&mut self.sensor_size, value),
            Action::SetPixelWidth(entry) => self.pixel_width.apply(entry),
            Action::SetFocalLength(entry) => self.focal_length.apply(entry),
            Action::SetFNumber(entry) => self.f_number.apply(entry),
            Action::SetTrailTolerance(value) => replace(&mut self.trail_tolerance, value),
        };

        match outcome {
            DispatchOutcome::Updated => {
                self.exposure_time = npf_rule::exposure_time(&self.parameters());
                debug!(
                    "{kind}: {:?} -> exposure time {:.4} s",
                    self.parameters(),
                    self.exposure_time
                );
            }
            DispatchOutcome::Unchanged => trace!("{kind}: no change"),
            DispatchOutcome::TextRetained => {
                trace!("{kind}: kept unparsed text, value left as is")
            }
            DispatchOutcome::Rejected => debug!("{kind}: range value rejected"),
        }

        outcome
    }

    /// Snapshot of the canonical parameters.
    pub fn parameters(&self) -> ParameterSet {
        ParameterSet {
            sensor_size: self.sensor_size,
            pixel_width: self.pixel_width.value(),
            focal_length: self.focal_length.value(),
            f_number: self.f_number.value(),
            trail_tolerance: self.trail_tolerance,
        }
    }

    pub fn sensor_size(&self) -> SensorSize {
        self.sensor_size
    }

    pub fn pixel_width(&self) -> Pixels {
        self.pixel_width.value()
    }

    pub fn focal_length(&self) -> Millimeter {
        self.focal_length.value()
    }

    pub fn f_number(&self) -> FNumber {
        self.f_number.value()
    }

    pub fn trail_tolerance(&self) -> TrailTolerance {
        self.trail_tolerance
    }

    /// Raw text last entered for the pixel width.
    pub fn pixel_width_text(&self) -> &str {
        self.pixel_width.text()
    }

    /// Raw text last entered for the focal length.
    pub fn focal_length_text(&self) -> &str {
        self.focal_length.text()
    }

    /// Raw text last entered for the f-number.
    pub fn f_number_text(&self) -> &str {
        self.f_number.text()
    }

    pub fn pixel_pitch(&self) -> Micrometer {
        npf_rule::pixel_pitch(self.sensor_size, self.pixel_width.value())
    }

    /// Maximum exposure time in seconds, full precision.
    ///
    /// `+∞` when the focal length or the pixel width is zero.
    pub fn exposure_time(&self) -> Second {
        self.exposure_time
    }

    /// Exposure time rounded to one decimal place, as displayed.
    pub fn exposure_time_rounded(&self) -> Second {
        npf_rule::round_for_display(self.exposure_time)
    }

    /// Exposure time as a [`hifitime::Duration`], `None` when it is not finite.
    pub fn exposure_duration(&self) -> Option<Duration> {
        self.exposure_time
            .is_finite()
            .then(|| self.exposure_time * Unit::Second)
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> DispatchOutcome {
    if *slot == value {
        DispatchOutcome::Unchanged
    } else {
        *slot = value;
        DispatchOutcome::Updated
    }
}
