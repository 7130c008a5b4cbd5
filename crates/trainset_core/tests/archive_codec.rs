use trainset_core::codec::archive::{load, load_into, save};
use trainset_core::{CodecError, Train, TrainKind, ARCHIVE_FORMAT, ARCHIVE_VERSION};

fn unnamed_local() -> Train {
    Train::new("Unnamed", TrainKind::Local)
}

#[test]
fn archive_uses_expected_wire_fields() {
    let train = Train::new("Sunrise Izumo", TrainKind::LimitedExpress);

    let json: serde_json::Value = serde_json::from_str(&save(&train).unwrap()).unwrap();

    assert_eq!(json["format"], ARCHIVE_FORMAT);
    assert_eq!(json["version"], ARCHIVE_VERSION);
    assert_eq!(json["name"], "Sunrise Izumo");
    assert_eq!(json["kind"], 2);
}

#[test]
fn archive_round_trip_restores_train() {
    let original = Train::new(" Tottori\r\nLiner ", TrainKind::Rapid);

    let restored = load(&save(&original).unwrap()).unwrap();

    assert_eq!(restored.name(), "Tottori Liner");
    assert_eq!(restored.kind().unwrap(), TrainKind::Rapid);
}

#[test]
fn save_of_corrupted_train_fails() {
    let mut corrupted = unnamed_local();
    corrupted.set_kind_code_unchecked(3);

    let err = save(&corrupted).unwrap_err();
    assert_eq!(err.to_string(), "Invalid number 3");
}

#[test]
fn invalid_kind_code_rolls_back_target() {
    let mut target = unnamed_local();
    let text = serde_json::json!({
        "format": ARCHIVE_FORMAT,
        "version": ARCHIVE_VERSION,
        "name": "Replaced",
        "kind": 3
    })
    .to_string();

    let err = load_into(&text, &mut target).unwrap_err();

    assert_eq!(err.to_string(), "Invalid number 3");
    assert_eq!(target, unnamed_local());
}

#[test]
fn malformed_archive_is_stream_error() {
    let mut target = unnamed_local();
    let text = r#"{"format":"trainset","version":1,"name":"Replaced","kind":"A"}"#;

    let err = load_into(text, &mut target).unwrap_err();

    assert!(matches!(err, CodecError::Stream(_)));
    assert!(err.to_string().starts_with("input stream error"));
    assert_eq!(target, unnamed_local());
}

#[test]
fn truncated_archive_is_stream_error() {
    let mut full = save(&unnamed_local()).unwrap();
    full.truncate(full.len() / 2);

    let err = load(&full).unwrap_err();
    assert!(matches!(err, CodecError::Stream(_)));
}
