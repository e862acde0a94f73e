use lottie_data::model::Node;
use lottie_data::Document;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Selects layers inside a precomposition asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerMatch {
    /// Layer `nm` equals the name.
    Name(String),
    /// Layer `refId` equals the composition id.
    RefId(String),
    AnyOf(Vec<LayerMatch>),
}

impl LayerMatch {
    pub fn matches(&self, layer: &Node) -> bool {
        let field = |key: &str| layer.get(key).and_then(Node::as_str);
        match self {
            LayerMatch::Name(name) => field("nm") == Some(name.as_str()),
            LayerMatch::RefId(id) => field("refId") == Some(id.as_str()),
            LayerMatch::AnyOf(matchers) => matchers.iter().any(|m| m.matches(layer)),
        }
    }
}

/// Drop the layers of `assets[id == asset_id]` that match `drop`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElisionRule {
    pub asset_id: String,
    pub drop: LayerMatch,
}

impl ElisionRule {
    /// Removes the sparkle overlay from the bundled base animation.
    pub fn sparkles() -> Vec<ElisionRule> {
        vec![
            ElisionRule {
                asset_id: "comp_3".to_string(),
                drop: LayerMatch::Name("Shape Layer 1".to_string()),
            },
            ElisionRule {
                asset_id: "comp_2".to_string(),
                drop: LayerMatch::RefId("comp_3".to_string()),
            },
        ]
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElisionReport {
    pub removed: usize,
    /// Asset ids named by a rule but absent from the document.
    pub missing_assets: Vec<String>,
}

/// Returns a copy of `source` with matching asset layers removed.
///
/// A document without `assets`, without the named asset, or whose asset has
/// no `layers` has nothing to remove and comes back equal to the input.
pub fn elide_layers(source: &Document, rules: &[ElisionRule]) -> (Document, ElisionReport) {
    let mut document = source.clone();
    let mut report = ElisionReport::default();

    let Some(assets) = document.root_mut().get_mut("assets").and_then(Node::as_array_mut) else {
        report.missing_assets = rules.iter().map(|r| r.asset_id.clone()).collect();
        debug!("no assets present, nothing to elide");
        return (document, report);
    };

    for rule in rules {
        let mut found = false;
        for asset in assets.iter_mut() {
            if asset.get("id").and_then(Node::as_str) != Some(rule.asset_id.as_str()) {
                continue;
            }
            found = true;
            if let Some(layers) = asset.get_mut("layers").and_then(Node::as_array_mut) {
                let before = layers.len();
                layers.retain(|layer| !rule.drop.matches(layer));
                report.removed += before - layers.len();
            }
        }
        if !found {
            report.missing_assets.push(rule.asset_id.clone());
        }
    }

    debug!(
        removed = report.removed,
        missing = ?report.missing_assets,
        "elided asset layers"
    );
    (document, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Document {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_sparkle_rules_remove_expected_layers() {
        let source = doc(json!({
            "assets": [
                { "id": "comp_3", "layers": [
                    { "nm": "Shape Layer 1" },
                    { "nm": "Shape Layer 2" }
                ]},
                { "id": "comp_2", "layers": [
                    { "nm": "Sparkles", "refId": "comp_3" },
                    { "nm": "Heart", "refId": "comp_1" }
                ]}
            ]
        }));

        let (out, report) = elide_layers(&source, &ElisionRule::sparkles());

        assert_eq!(report.removed, 2);
        assert!(report.missing_assets.is_empty());
        let expected = doc(json!({
            "assets": [
                { "id": "comp_3", "layers": [ { "nm": "Shape Layer 2" } ] },
                { "id": "comp_2", "layers": [ { "nm": "Heart", "refId": "comp_1" } ] }
            ]
        }));
        assert_eq!(out, expected);
    }

    #[test]
    fn test_missing_assets_key_is_a_no_op() {
        let source = doc(json!({ "layers": [] }));
        let (out, report) = elide_layers(&source, &ElisionRule::sparkles());
        assert_eq!(out, source);
        assert_eq!(report.removed, 0);
        assert_eq!(report.missing_assets, vec!["comp_3", "comp_2"]);
    }

    #[test]
    fn test_asset_without_layers_is_skipped() {
        let source = doc(json!({ "assets": [ { "id": "comp_3", "p": "image.png" } ] }));
        let (out, report) = elide_layers(&source, &ElisionRule::sparkles());
        assert_eq!(out, source);
        assert_eq!(report.missing_assets, vec!["comp_2"]);
    }

    #[test]
    fn test_any_of_matcher() {
        let matcher = LayerMatch::AnyOf(vec![
            LayerMatch::Name("a".to_string()),
            LayerMatch::RefId("comp_9".to_string()),
        ]);
        let layer_a = doc(json!({ "nm": "a" }));
        let layer_ref = doc(json!({ "nm": "b", "refId": "comp_9" }));
        let layer_other = doc(json!({ "nm": "c" }));
        assert!(matcher.matches(layer_a.root()));
        assert!(matcher.matches(layer_ref.root()));
        assert!(!matcher.matches(layer_other.root()));
    }
}
