//! JSON round-trips for the configuration types.
//!
//! Run: cargo test -p boxkit-layout --features serde --test config_serde

#![cfg(feature = "serde")]

use boxkit_layout::prelude::*;

#[test]
fn test_box_config_defaults_fill_missing_fields() {
    let config: BoxConfig = serde_json::from_str(r#"{ "align": "right" }"#).unwrap();
    assert_eq!(config, BoxConfig::new().align(Align::End));
}

#[test]
fn test_align_accepts_physical_names() {
    for (name, align) in [
        ("\"left\"", Align::Start),
        ("\"top\"", Align::Start),
        ("\"middle\"", Align::Center),
        ("\"bottom\"", Align::End),
        ("\"center\"", Align::Center),
    ] {
        assert_eq!(serde_json::from_str::<Align>(name).unwrap(), align, "{name}");
    }
    assert_eq!(serde_json::to_string(&Align::End).unwrap(), "\"end\"");
}

#[test]
fn test_layout_properties_partial() {
    let props: LayoutProperties =
        serde_json::from_str(r#"{ "flex": 2.0, "margin_leading": -4 }"#).unwrap();
    assert_eq!(props, LayoutProperties::new().flex(2.0).margin_leading(-4));
}

#[test]
fn test_size_hint_round_trip() {
    let hint = SizeHint::new(1, 2, 3, 4, 5, 6);
    let json = serde_json::to_string(&hint).unwrap();
    assert_eq!(serde_json::from_str::<SizeHint>(&json).unwrap(), hint);
}
