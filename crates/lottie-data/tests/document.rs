use lottie_data::model::Node;
use lottie_data::{Document, DocumentError};
use serde_json::json;

fn sample() -> serde_json::Value {
    json!({
        "v": "5.7.4",
        "fr": 30,
        "ip": 0,
        "op": 90,
        "w": 512,
        "h": 512,
        "assets": [
            { "id": "comp_2", "layers": [ { "nm": "Glow", "ty": 4 } ] }
        ],
        "layers": [
            {
                "ty": 4,
                "nm": "Heart",
                "shapes": [
                    { "ty": "fl", "c": { "a": 0, "k": [0.9, 0.1, 0.1, 1] }, "o": { "a": 0, "k": 100 } }
                ]
            }
        ]
    })
}

#[test]
fn test_parse_and_reserialize_is_lossless() {
    let text = serde_json::to_string(&sample()).unwrap();
    let doc: Document = text.parse().unwrap();
    let mut out = Vec::new();
    doc.to_writer(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), text);
}

#[test]
fn test_root_must_be_object() {
    let err = "[1, 2, 3]".parse::<Document>().unwrap_err();
    assert!(matches!(err, DocumentError::NotAnObject { found: "array" }));

    let err = serde_json::from_str::<Document>("42").unwrap_err();
    assert!(err.to_string().contains("found number"));
}

#[test]
fn test_malformed_json_is_reported() {
    let err = Document::from_slice(b"{ \"v\": ").unwrap_err();
    assert!(matches!(err, DocumentError::Json(_)));
}

#[test]
fn test_missing_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");
    let err = Document::from_path(&missing).unwrap_err();
    assert!(err.to_string().contains("nope.json"));
}

#[test]
fn test_write_then_read_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("Animation.json");
    let doc: Document = serde_json::from_value(sample()).unwrap();

    doc.write_to_path(&path).unwrap();
    let reloaded = Document::from_path(&path).unwrap();

    assert_eq!(reloaded, doc);
    assert_eq!(reloaded.color_quads().len(), 1);
}

#[test]
fn test_accessors_reach_asset_layers() {
    let doc: Document = serde_json::from_value(sample()).unwrap();
    let assets = doc.get("assets").and_then(Node::as_array).unwrap();
    let layer_name = assets[0]
        .get("layers")
        .and_then(Node::as_array)
        .and_then(|layers| layers[0].get("nm"))
        .and_then(Node::as_str);
    assert_eq!(layer_name, Some("Glow"));
}

#[test]
fn test_every_byte_channel_survives_disk_round_trip() {
    for c in 0..=255u32 {
        let value = f64::from(c) / 255.0;
        let text = format!(r#"{{"layers":[{{"c":{{"k":[{value},0,0,1]}}}}]}}"#);
        let doc: Document = text.parse().unwrap();

        let reloaded: Document = doc.to_string_pretty().unwrap().parse().unwrap();

        assert_eq!(reloaded, doc, "channel {c} ({value}) changed on reload");
        let channel = reloaded.color_quads()[0].channels()[0].as_f64().unwrap();
        assert_eq!(channel.to_bits(), value.to_bits(), "channel {c}");
    }
}
