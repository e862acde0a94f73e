use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;

/// Key under which Lottie stores a property's static value or keyframes.
pub const VALUE_KEY: &str = "k";

/// A node of an animation document.
///
/// The tree mirrors the JSON exactly. Sequences bound to [`VALUE_KEY`] are
/// classified once while parsing: four numbers become a [`ColorQuad`],
/// anything else becomes [`Node::Keyframes`]. Both serialize back to the
/// same JSON array they were read from.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Node>),
    Object(IndexMap<String, Node>),
    /// Static `[r, g, b, a]` color, channels in `[0, 1]`.
    Color(ColorQuad),
    /// Any other sequence bound to `k` (animated keyframes, positions, ...).
    Keyframes(Vec<Node>),
}

/// Four numeric channels bound to `k`.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorQuad {
    channels: [Number; 4],
}

impl ColorQuad {
    /// Builds a quad from exactly four JSON numbers.
    pub fn from_values(values: &[serde_json::Value]) -> Option<Self> {
        if values.len() != 4 {
            return None;
        }
        let mut channels = Vec::with_capacity(4);
        for value in values {
            match value {
                serde_json::Value::Number(n) => channels.push(n.clone()),
                _ => return None,
            }
        }
        let channels: [Number; 4] = channels.try_into().ok()?;
        Some(Self { channels })
    }

    pub fn rgb(&self) -> [f64; 3] {
        [
            channel_f64(&self.channels[0]),
            channel_f64(&self.channels[1]),
            channel_f64(&self.channels[2]),
        ]
    }

    /// Alpha exactly as it appeared in the source.
    pub fn alpha(&self) -> &Number {
        &self.channels[3]
    }

    /// Replaces the color channels. Alpha is left untouched.
    pub fn set_rgb(&mut self, rgb: [f64; 3]) {
        for (slot, value) in self.channels.iter_mut().zip(rgb) {
            // Non-finite values have no JSON form.
            *slot = Number::from_f64(value).unwrap_or_else(|| Number::from(0));
        }
    }

    pub fn channels(&self) -> &[Number; 4] {
        &self.channels
    }
}

fn channel_f64(n: &Number) -> f64 {
    n.as_f64().unwrap_or(0.0)
}

/// Structural fingerprint of a node: key sets, nesting and sequence lengths,
/// with leaf values erased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shape {
    Leaf,
    Seq(Vec<Shape>),
    Map(Vec<(String, Shape)>),
}

impl Node {
    fn from_json(value: serde_json::Value, bound_to_value_key: bool) -> Node {
        match value {
            serde_json::Value::Null => Node::Null,
            serde_json::Value::Bool(b) => Node::Bool(b),
            serde_json::Value::Number(n) => Node::Number(n),
            serde_json::Value::String(s) => Node::String(s),
            serde_json::Value::Array(items) if bound_to_value_key => {
                match ColorQuad::from_values(&items) {
                    Some(quad) => Node::Color(quad),
                    None => Node::Keyframes(
                        items.into_iter().map(|v| Node::from_json(v, false)).collect(),
                    ),
                }
            }
            serde_json::Value::Array(items) => {
                Node::Array(items.into_iter().map(|v| Node::from_json(v, false)).collect())
            }
            serde_json::Value::Object(map) => Node::Object(
                map.into_iter()
                    .map(|(key, v)| {
                        let bound = key == VALUE_KEY;
                        (key, Node::from_json(v, bound))
                    })
                    .collect(),
            ),
        }
    }

    /// JSON type name, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Null => "null",
            Node::Bool(_) => "boolean",
            Node::Number(_) => "number",
            Node::String(_) => "string",
            Node::Array(_) | Node::Keyframes(_) | Node::Color(_) => "array",
            Node::Object(_) => "object",
        }
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_object().and_then(|map| map.get(key))
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Node> {
        match self {
            Node::Object(map) => map.get_mut(key),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Node>> {
        match self {
            Node::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Plain sequences only; `k`-bound sequences are reached through
    /// [`Node::Color`] and [`Node::Keyframes`].
    pub fn as_array(&self) -> Option<&Vec<Node>> {
        match self {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<&ColorQuad> {
        match self {
            Node::Color(quad) => Some(quad),
            _ => None,
        }
    }

    /// Visits every node in document order, parents before children.
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a Node)) {
        visit(self);
        match self {
            Node::Array(items) | Node::Keyframes(items) => {
                for item in items {
                    item.walk(visit);
                }
            }
            Node::Object(map) => {
                for child in map.values() {
                    child.walk(visit);
                }
            }
            _ => {}
        }
    }

    /// Calls `visit` on every color quad in document order.
    pub fn for_each_color_mut(&mut self, visit: &mut impl FnMut(&mut ColorQuad)) {
        match self {
            Node::Color(quad) => visit(quad),
            Node::Array(items) | Node::Keyframes(items) => {
                for item in items {
                    item.for_each_color_mut(visit);
                }
            }
            Node::Object(map) => {
                for child in map.values_mut() {
                    child.for_each_color_mut(visit);
                }
            }
            _ => {}
        }
    }

    pub fn color_quads(&self) -> Vec<&ColorQuad> {
        let mut quads = Vec::new();
        self.walk(&mut |node| {
            if let Node::Color(quad) = node {
                quads.push(quad);
            }
        });
        quads
    }

    pub fn shape(&self) -> Shape {
        match self {
            Node::Null | Node::Bool(_) | Node::Number(_) | Node::String(_) => Shape::Leaf,
            Node::Color(_) => Shape::Seq(vec![Shape::Leaf; 4]),
            Node::Array(items) | Node::Keyframes(items) => {
                Shape::Seq(items.iter().map(Node::shape).collect())
            }
            Node::Object(map) => Shape::Map(
                map.iter()
                    .map(|(key, child)| (key.clone(), child.shape()))
                    .collect(),
            ),
        }
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let v = serde_json::Value::deserialize(deserializer)?;
        Ok(Node::from_json(v, false))
    }
}

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Node::Null => serializer.serialize_unit(),
            Node::Bool(b) => serializer.serialize_bool(*b),
            Node::Number(n) => n.serialize(serializer),
            Node::String(s) => serializer.serialize_str(s),
            Node::Array(items) | Node::Keyframes(items) => serializer.collect_seq(items),
            Node::Object(map) => serializer.collect_map(map),
            Node::Color(quad) => serializer.collect_seq(quad.channels()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> Node {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_static_color_under_k_is_a_quad() {
        let node = parse(json!({ "c": { "a": 0, "k": [1, 0.5, 0, 1] } }));
        let quad = node.get("c").and_then(|c| c.get("k")).and_then(Node::as_color);
        let quad = quad.expect("k should hold a color quad");
        assert_eq!(quad.rgb(), [1.0, 0.5, 0.0]);
        assert_eq!(quad.alpha(), &Number::from(1));
    }

    #[test]
    fn test_four_numbers_elsewhere_stay_plain() {
        let node = parse(json!({ "fc": [1, 0, 0, 1] }));
        assert!(matches!(node.get("fc"), Some(Node::Array(_))));
        assert!(node.color_quads().is_empty());
    }

    #[test]
    fn test_non_qualifying_k_sequences_are_keyframes() {
        let node = parse(json!({
            "p": { "k": [250, 250, 0] },
            "g": { "k": [0, 1, 0, 0, 0.5, 0.2, 0.3, 0.4, 1, 0, 0, 1] },
            "m": { "k": [1, "x", 0, 1] }
        }));
        for key in ["p", "g", "m"] {
            let k = node.get(key).and_then(|n| n.get(VALUE_KEY)).unwrap();
            assert!(matches!(k, Node::Keyframes(_)), "{key} should be keyframes");
        }
    }

    #[test]
    fn test_quads_inside_keyframe_objects_are_found() {
        let node = parse(json!({
            "c": { "a": 1, "k": [
                { "t": 0, "s": [1, 0, 0, 1] },
                { "t": 10, "s": [0, 1, 0, 1], "k": [0.2, 0.2, 0.2, 1] }
            ]}
        }));
        assert_eq!(node.color_quads().len(), 1);
    }

    #[test]
    fn test_set_rgb_keeps_alpha() {
        let mut node = parse(json!({ "k": [0.9, 0.1, 0.1, 0.5] }));
        node.for_each_color_mut(&mut |quad| quad.set_rgb([0.0, 0.0, 1.0]));
        assert_eq!(serde_json::to_value(&node).unwrap(), json!({ "k": [0.0, 0.0, 1.0, 0.5] }));
    }

    #[test]
    fn test_round_trip_preserves_key_order_and_integers() {
        let text = r#"{"z":1,"a":{"k":[1,0,0,1]},"m":[1,2.5,"s",null,true]}"#;
        let node: Node = serde_json::from_str(text).unwrap();
        assert_eq!(serde_json::to_string(&node).unwrap(), text);
    }

    #[test]
    fn test_shape_erases_leaf_values() {
        let a = parse(json!({ "x": [1, 2], "k": [0, 0, 0, 1] }));
        let b = parse(json!({ "x": ["a", null], "k": [1, 1, 1, 0.2] }));
        let c = parse(json!({ "x": [1], "k": [0, 0, 0, 1] }));
        assert_eq!(a.shape(), b.shape());
        assert_ne!(a.shape(), c.shape());
    }
}
