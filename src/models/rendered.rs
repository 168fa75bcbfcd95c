//! Deserializers for WordPress `{"rendered": "..."}` fields.
//!
//! Title and excerpt come wrapped in an object on the wire. Plain strings are
//! accepted too so serialized models read back unchanged.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum RenderedField {
    Rendered { rendered: String },
    Plain(String),
}

impl RenderedField {
    fn into_string(self) -> String {
        match self {
            RenderedField::Rendered { rendered } => rendered,
            RenderedField::Plain(s) => s,
        }
    }
}

pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    RenderedField::deserialize(deserializer).map(RenderedField::into_string)
}

/// Like [`text`], with surrounding whitespace removed.
pub(crate) fn trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    text(deserializer).map(|s| s.trim().to_string())
}
