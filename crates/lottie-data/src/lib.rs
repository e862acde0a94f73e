//! # lottie-data
//!
//! Loads Lottie animation JSON into a tree that round-trips byte-for-byte
//! in structure: same keys in the same order, same nesting, same sequence
//! lengths. Static colors bound to `k` are recognised during parsing so
//! later passes can pattern-match on them instead of sniffing arrays.

pub mod model;

use model::Node;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fs;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

pub use model::{ColorQuad, Shape, VALUE_KEY};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("invalid animation JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("animation root must be a JSON object, found {found}")]
    NotAnObject { found: &'static str },
}

/// A parsed animation document. The root is always an object.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Node,
}

impl Document {
    pub fn from_node(root: Node) -> Result<Self, DocumentError> {
        match root {
            Node::Object(_) => Ok(Self { root }),
            other => Err(DocumentError::NotAnObject {
                found: other.kind(),
            }),
        }
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, DocumentError> {
        Self::from_node(serde_json::from_slice(bytes)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DocumentError> {
        Self::from_node(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_slice(&bytes)
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Node {
        &mut self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.root.get(key)
    }

    pub fn shape(&self) -> Shape {
        self.root.shape()
    }

    pub fn color_quads(&self) -> Vec<&ColorQuad> {
        self.root.color_quads()
    }

    pub fn to_string_pretty(&self) -> Result<String, DocumentError> {
        Ok(serde_json::to_string_pretty(&self.root)?)
    }

    pub fn to_writer<W: Write>(&self, writer: W) -> Result<(), DocumentError> {
        serde_json::to_writer(writer, &self.root)?;
        Ok(())
    }

    /// Writes pretty-printed JSON, creating parent directories as needed.
    pub fn write_to_path(&self, path: impl AsRef<Path>) -> Result<(), DocumentError> {
        let path = path.as_ref();
        let io_err = |source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = self.to_string_pretty()?;
        fs::write(path, text).map_err(io_err)
    }
}

impl FromStr for Document {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_node(serde_json::from_str(s)?)
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let root = Node::deserialize(deserializer)?;
        Document::from_node(root).map_err(de::Error::custom)
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.root.serialize(serializer)
    }
}
