//! Walk a calculator session through a few edits and print the result.
//!
//! ```text
//! RUST_LOG=debug cargo run --example npf_table
//! ```
use npf::display::StoreDisplayExt;
use npf::{Action, Entry, ParameterStore, SensorSize, TrailTolerance};

fn main() {
    env_logger::init();

    let mut store = ParameterStore::new();

    // Wide-angle Milky Way setup on an APS-C body, typed one keystroke at a time.
    store.dispatch(SensorSize::ApscOther);
    for text in ["", "1", "16"] {
        store.dispatch(Action::SetFocalLength(text.into()));
    }
    store.dispatch(Action::SetFNumber("2.8".into()));
    store.dispatch(Action::SetPixelWidth(Entry::Range(6240)));
    store.dispatch(TrailTolerance::Slight);

    println!("{}", store.show());
    println!("{}", store.compare_trails());

    match store.exposure_duration() {
        Some(duration) => println!("Maximum exposure: {duration}"),
        None => println!("Maximum exposure: unbounded"),
    }
}
