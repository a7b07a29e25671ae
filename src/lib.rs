//! # npf
//!
//! Maximum exposure time for astrophotography under the **NPF rule**.
//!
//! The crate holds the adjustable photographic parameters of one calculator session
//! in a [`ParameterStore`], reconciles the text and range representations of its
//! numeric fields, and recomputes the exposure time after every change.
//!
//! ```rust
//! use npf::{Action, ParameterStore, SensorSize};
//!
//! let mut store = ParameterStore::new();
//! store.dispatch(SensorSize::ApscCanon);
//! store.dispatch(Action::SetFocalLength("abc".into())); // ignored, text kept
//! assert_eq!(store.focal_length(), 50);
//! assert_eq!(store.focal_length_text(), "abc");
//! ```
pub mod action;
pub mod constants;
pub mod display;
pub mod input;
pub mod npf_errors;
pub mod npf_rule;
pub mod parameters;
pub mod sensor;
pub mod store;
pub mod trail;

pub use action::{Action, DispatchOutcome};
pub use input::Entry;
pub use npf_errors::NpfError;
pub use parameters::ParameterSet;
pub use sensor::SensorSize;
pub use store::ParameterStore;
pub use trail::TrailTolerance;
