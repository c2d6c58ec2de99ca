//! Renderable fragments of a widget tree

use serde::{Deserialize, Serialize};

/// One renderable fragment of a server-rendered widget tree.
///
/// A snapshot is a closed tree: every node is literal text, a binding into
/// the current row, or a group of nested fragments. Facet slots and cell
/// templates are both made of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Component {
    /// Literal text, rendered as-is
    Text(String),
    /// Bound to a field of the current row by name
    Field { name: String },
    /// Field binding with a date format pattern applied to the value
    Formatted { name: String, pattern: String },
    /// Nested fragments, rendered in order and concatenated
    Group(Vec<Component>),
}

impl Component {
    /// Literal text fragment
    pub fn text(value: impl Into<String>) -> Self {
        Component::Text(value.into())
    }

    /// Field binding fragment
    pub fn field(name: impl Into<String>) -> Self {
        Component::Field { name: name.into() }
    }

    /// Field binding with a chrono-style format pattern
    pub fn formatted(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        Component::Formatted {
            name: name.into(),
            pattern: pattern.into(),
        }
    }

    /// Group of nested fragments
    pub fn group(children: Vec<Component>) -> Self {
        Component::Group(children)
    }
}
