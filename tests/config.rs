use tintshade::{Color, Palette, PaletteKind, PaletteOptions, PaletteRequest};

#[test]
fn request_from_json_with_every_key() {
    let request: PaletteRequest = serde_json::from_str(
        r##"{
            "type": "tintsAndShades",
            "baseColor": "#3366CC",
            "length": 4,
            "increment": 0.2,
            "includeBaseColor": true,
            "reversed": true
        }"##,
    )
    .unwrap();

    assert_eq!(request.kind, PaletteKind::TintsAndShades);
    assert_eq!(request.base, Color::from_rgb(51, 102, 204));
    assert_eq!(
        request.options,
        PaletteOptions {
            length: 4,
            increment: 0.2,
            include_base_color: true,
            reversed: true,
        }
    );
}

#[test]
fn missing_options_use_defaults() {
    let request: PaletteRequest =
        serde_json::from_str(r#"{ "type": "darken", "baseColor": "rebeccapurple" }"#).unwrap();

    assert_eq!(request.kind, PaletteKind::Darken);
    assert_eq!(request.base, Color::from_rgb(102, 51, 153));
    assert_eq!(request.options, PaletteOptions::default());

    let options: PaletteOptions = serde_json::from_str(r#"{ "reversed": true }"#).unwrap();
    assert_eq!(
        options,
        PaletteOptions {
            reversed: true,
            ..Default::default()
        }
    );
}

#[test]
fn invalid_values_are_rejected() {
    let unknown_kind =
        serde_json::from_str::<PaletteRequest>(r##"{ "type": "sepia", "baseColor": "#fff" }"##);
    assert!(unknown_kind.is_err());

    let bad_color =
        serde_json::from_str::<PaletteRequest>(r##"{ "type": "tints", "baseColor": "#ff" }"##);
    let message = bad_color.unwrap_err().to_string();
    assert!(message.contains("Invalid color format"), "{message}");
}

#[test]
fn palettes_serialize_as_hex_arrays() {
    let request = PaletteRequest::new(PaletteKind::Shades, Color::WHITE).with_options(
        PaletteOptions {
            length: 2,
            increment: 0.5,
            ..Default::default()
        },
    );
    let palette = request.generate().unwrap();

    let json = serde_json::to_string(&palette).unwrap();
    assert_eq!(json, r##"["#808080","#000000"]"##);

    let back: Palette = serde_json::from_str(&json).unwrap();
    assert_eq!(back, palette);
}

#[test]
fn request_serializes_with_the_same_keys() {
    let request = PaletteRequest::new(PaletteKind::Lighten, Color::from_rgb(0, 128, 128));
    let value = serde_json::to_value(request).unwrap();

    assert_eq!(value["type"], "lighten");
    assert_eq!(value["baseColor"], "#008080");
    assert_eq!(value["length"], 10);
    assert_eq!(value["includeBaseColor"], false);
    assert_eq!(value["reversed"], false);
}
