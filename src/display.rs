//! # Tabular display of a calculator session
//!
//! Display adaptors that **borrow** a [`ParameterStore`] and render it as a
//! `comfy-table` table when formatted with `{}`.
//!
//! - [`StoreDisplay`]: one row per parameter, then pixel pitch and exposure time.
//! - [`TrailComparison`]: exposure time at the current parameters for every
//!   [`TrailTolerance`].
//!
//! Exposure times are printed to one decimal place, the same rounding as
//! [`ParameterStore::exposure_time_rounded`]. Infinite times print as `∞`.
//!
//! ```rust
//! use npf::display::StoreDisplayExt;
//! use npf::store::ParameterStore;
//!
//! let store = ParameterStore::new();
//! let table = store.show().to_string();
//! assert!(table.contains("2.2 s"));
//! ```
use std::fmt;

use comfy_table::{presets::UTF8_FULL, Cell, CellAlignment, ContentArrangement, Row, Table};

use crate::{
    constants::Second, npf_rule, parameters::ParameterSet, store::ParameterStore,
    trail::TrailTolerance,
};

fn fmt_seconds(seconds: Second) -> String {
    if seconds.is_finite() {
        format!("{:.1} s", npf_rule::round_for_display(seconds))
    } else {
        "∞".to_string()
    }
}

fn new_table(header: [&str; 2]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![Cell::new(header[0]), Cell::new(header[1])]);
    table
}

fn right(value: impl fmt::Display) -> Cell {
    Cell::new(value).set_alignment(CellAlignment::Right)
}

/// Parameter summary of a [`ParameterStore`].
pub struct StoreDisplay<'a> {
    store: &'a ParameterStore,
}

impl fmt::Display for StoreDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.store;
        let mut table = new_table(["Parameter", "Value"]);

        table.add_row(Row::from(vec![
            Cell::new("Sensor size"),
            right(s.sensor_size().label()),
        ]));
        table.add_row(Row::from(vec![
            Cell::new("Pixel width"),
            right(format!("{} px", s.pixel_width())),
        ]));
        table.add_row(Row::from(vec![
            Cell::new("Focal length"),
            right(format!("{} mm", s.focal_length())),
        ]));
        table.add_row(Row::from(vec![
            Cell::new("Aperture"),
            right(format!("f/{:.1}", s.f_number())),
        ]));
        table.add_row(Row::from(vec![
            Cell::new("Trail tolerance"),
            right(s.trail_tolerance().label()),
        ]));
        table.add_row(Row::from(vec![
            Cell::new("Pixel pitch"),
            right(format!("{:.2} µm", s.pixel_pitch())),
        ]));
        table.add_row(Row::from(vec![
            Cell::new("Exposure time"),
            right(fmt_seconds(s.exposure_time())),
        ]));

        write!(f, "{table}")
    }
}

/// Exposure time for every trail tolerance at the store's current parameters.
pub struct TrailComparison<'a> {
    store: &'a ParameterStore,
}

impl fmt::Display for TrailComparison<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = self.store.parameters();
        let mut table = new_table(["Trail tolerance", "Exposure time"]);

        for tolerance in TrailTolerance::ALL {
            let params = ParameterSet {
                trail_tolerance: tolerance,
                ..base
            };
            let marker = if tolerance == base.trail_tolerance {
                " *"
            } else {
                ""
            };
            table.add_row(Row::from(vec![
                Cell::new(format!("{}{marker}", tolerance.label())),
                right(fmt_seconds(params.exposure_time())),
            ]));
        }

        write!(f, "{table}")
    }
}

/// Builders for the display adaptors.
pub trait StoreDisplayExt {
    fn show(&self) -> StoreDisplay<'_>;
    fn compare_trails(&self) -> TrailComparison<'_>;
}

impl StoreDisplayExt for ParameterStore {
    fn show(&self) -> StoreDisplay<'_> {
        StoreDisplay { store: self }
    }

    fn compare_trails(&self) -> TrailComparison<'_> {
        TrailComparison { store: self }
    }
}

#[cfg(test)]
mod display_test {
    use super::*;
    use crate::action::Action;

    #[test]
    fn test_fmt_seconds() {
        assert_eq!(fmt_seconds(2.217228), "2.2 s");
        assert_eq!(fmt_seconds(13.26), "13.3 s");
        assert_eq!(fmt_seconds(f64::INFINITY), "∞");
    }

    #[test]
    fn test_summary_rows() {
        let store = ParameterStore::new();
        let out = store.show().to_string();
        assert!(out.contains("Full frame"));
        assert!(out.contains("6000 px"));
        assert!(out.contains("50 mm"));
        assert!(out.contains("f/1.4"));
        assert!(out.contains("6.00 µm"));
        assert!(out.contains("2.2 s"));
    }

    #[test]
    fn test_trail_comparison_marks_current() {
        let mut store = ParameterStore::new();
        store.dispatch(TrailTolerance::Slight);
        let out = store.compare_trails().to_string();
        assert!(out.contains("Slight trail *"));
        assert!(out.contains("2.2 s"));
        assert!(out.contains("4.4 s"));
        assert!(out.contains("6.7 s"));
    }

    #[test]
    fn test_infinite_exposure() {
        let mut store = ParameterStore::new();
        store.dispatch(Action::SetPixelWidth("0".into()));
        assert!(store.show().to_string().contains('∞'));
    }
}
