mod common;

use approx::assert_relative_eq;
use common::{assert_exposure_consistent, store_after};
use npf::{
    Action, DispatchOutcome, Entry, ParameterSet, ParameterStore, SensorSize, TrailTolerance,
};

#[test]
fn test_invalid_text_is_idempotent() {
    let mut store = ParameterStore::new();
    store.dispatch(Action::SetFocalLength("50".into()));
    let before = store.exposure_time();

    let outcome = store.dispatch(Action::SetFocalLength("abc".into()));

    assert_eq!(outcome, DispatchOutcome::TextRetained);
    assert_eq!(store.focal_length(), 50);
    assert_eq!(store.focal_length_text(), "abc");
    assert_eq!(store.exposure_time(), before);
}

#[test]
fn test_f_number_quantization() {
    let store = store_after([Action::SetFNumber("1.37".into())]);
    assert_eq!(store.f_number(), 1.4);
    assert_eq!(store.f_number_text(), "1.37");

    let store = store_after([Action::SetFNumber("5.65".into())]);
    assert_eq!(store.f_number(), 5.7);
}

#[test]
fn test_keystroke_sequence_only_moves_on_valid_states() {
    // Typing "14" into a box holding "50": clear, "1", "14".
    let mut store = ParameterStore::new();
    let mut seen = vec![store.exposure_time()];

    for text in ["", "1", "1a", "14"] {
        let before = store.exposure_time();
        let outcome = store.dispatch(Action::SetFocalLength(text.into()));
        if outcome == DispatchOutcome::TextRetained {
            assert_eq!(store.exposure_time(), before);
        } else {
            seen.push(store.exposure_time());
        }
        assert_eq!(store.focal_length_text(), text);
        assert_exposure_consistent(&store);
    }

    assert_eq!(store.focal_length(), 14);
    let expected: Vec<f64> = [50, 1, 14]
        .into_iter()
        .map(|f| {
            ParameterSet::builder()
                .focal_length(f)
                .build()
                .unwrap()
                .exposure_time()
        })
        .collect();
    assert_eq!(seen, expected);
}

#[test]
fn test_text_is_not_range_clamped() {
    let store = store_after([
        Action::SetPixelWidth("50000".into()),
        Action::SetFocalLength("5000".into()),
        Action::SetFNumber("64".into()),
    ]);
    assert_eq!(store.pixel_width(), 50_000);
    assert_eq!(store.focal_length(), 5_000);
    assert_eq!(store.f_number(), 64.0);
    assert_exposure_consistent(&store);
}

#[test]
fn test_range_entry_syncs_text() {
    let mut store = ParameterStore::new();
    store.dispatch(Action::SetPixelWidth("60".into()));
    assert_eq!(
        store.dispatch(Action::SetPixelWidth(Entry::Range(8256))),
        DispatchOutcome::Updated
    );
    assert_eq!(store.pixel_width(), 8256);
    assert_eq!(store.pixel_width_text(), "8256");

    store.dispatch(Action::SetFNumber(Entry::Range(2.0)));
    assert_eq!(store.f_number(), 2.0);
    assert_eq!(store.f_number_text(), "2");
}

#[test]
fn test_same_value_is_a_no_op() {
    let mut store = store_after([
        Action::SetSensorSize(SensorSize::ApscOther),
        Action::SetFNumber("2.8".into()),
        Action::SetTrailTolerance(TrailTolerance::Visible),
    ]);
    let params = store.parameters();
    let exposure = store.exposure_time();

    let replay = [
        Action::SetSensorSize(params.sensor_size),
        Action::SetPixelWidth(Entry::Range(params.pixel_width)),
        Action::SetFocalLength(params.focal_length.to_string().into()),
        Action::SetFNumber(Entry::Range(params.f_number)),
        Action::SetTrailTolerance(params.trail_tolerance),
    ];
    for action in replay {
        assert_eq!(store.dispatch(action), DispatchOutcome::Unchanged);
    }

    assert_eq!(store.parameters(), params);
    assert_eq!(store.exposure_time(), exposure);
}

#[test]
fn test_zero_focal_length_is_infinite() {
    let mut store = ParameterStore::new();
    assert_eq!(
        store.dispatch(Action::SetFocalLength("0".into())),
        DispatchOutcome::Updated
    );
    assert_eq!(store.focal_length(), 0);
    assert_eq!(store.exposure_time(), f64::INFINITY);
    assert!(!store.exposure_time().is_nan());

    store.dispatch(Action::SetFocalLength("24".into()));
    assert!(store.exposure_time().is_finite());
}

#[test]
fn test_zero_pixel_width_is_infinite() {
    let store = store_after([Action::SetPixelWidth(Entry::Range(0))]);
    assert!(store.pixel_pitch().is_infinite());
    assert_eq!(store.exposure_time(), f64::INFINITY);
}

#[test]
fn test_nan_text_never_reaches_formula() {
    let mut store = ParameterStore::new();
    for text in ["NaN", "inf", "-infinity", "-2.8"] {
        assert_eq!(
            store.dispatch(Action::SetFNumber(text.into())),
            DispatchOutcome::TextRetained
        );
    }
    assert_eq!(store.f_number(), 1.4);
    assert!(store.exposure_time().is_finite());
}

#[test]
fn test_nan_range_never_reaches_formula() {
    let mut store = ParameterStore::new();
    let before = store.exposure_time();

    for value in [f64::NAN, f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 0.0, 0.04] {
        assert_eq!(
            store.dispatch(Action::SetFNumber(Entry::Range(value))),
            DispatchOutcome::Rejected
        );
        assert_eq!(store.f_number(), 1.4);
        assert_eq!(store.f_number_text(), "1.4");
        assert_eq!(store.exposure_time(), before);
    }
    assert_exposure_consistent(&store);
}

#[test]
fn test_f_number_text_must_stay_positive() {
    let mut store = ParameterStore::new();
    for text in ["0", "0.0", "0.04", "-0"] {
        assert_eq!(
            store.dispatch(Action::SetFNumber(text.into())),
            DispatchOutcome::TextRetained
        );
        assert_eq!(store.f_number(), 1.4);
        assert_eq!(store.f_number_text(), text);
    }

    assert_eq!(
        store.dispatch(Action::SetFNumber("0.05".into())),
        DispatchOutcome::Updated
    );
    assert_eq!(store.f_number(), 0.1);
    assert!(store.exposure_time() > 0.0);
}

#[test]
fn test_custom_initial_parameters() {
    let params = ParameterSet::builder()
        .sensor_size(SensorSize::MicroFourThirds)
        .pixel_width(5184)
        .focal_length(12)
        .f_number(1.7)
        .build()
        .unwrap();
    let store = ParameterStore::from(params);

    assert_eq!(store.parameters(), params);
    assert_eq!(store.pixel_width_text(), "5184");
    assert_eq!(store.f_number_text(), "1.7");
    let pitch = 17300.0 / 5184.0;
    assert_relative_eq!(
        store.exposure_time(),
        (16.856 * 1.7 + 0.0997 * 12.0 + 13.713 * pitch) / 12.0,
        max_relative = 1e-12
    );
}

#[test]
fn test_parameter_set_serde() {
    let json = r#"{
        "sensorSize": "apsc-canon",
        "pixelWidth": 6000,
        "focalLength": 24,
        "fNumber": 2.8,
        "trailTolerance": "slight"
    }"#;
    let params: ParameterSet = serde_json::from_str(json).unwrap();
    assert_eq!(params.sensor_size, SensorSize::ApscCanon);
    assert_eq!(params.trail_tolerance, TrailTolerance::Slight);

    let out = serde_json::to_value(params).unwrap();
    assert_eq!(out["sensorSize"], "apsc-c");
    assert_eq!(out["trailTolerance"], "slight");
    assert_eq!(out["focalLength"], 24);
}

#[test]
fn test_store_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ParameterStore>();
}
