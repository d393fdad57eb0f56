//! Mirrored Attribute Value Objects
//!
//! The fixed set of attributes a proxy mirrors from its source node, and the
//! values carried along each attribute's change notification.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single observable attribute of a menu node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Item text, or the title of a submenu
    Label,
    Checkable,
    Checked,
    Enabled,
    /// Icon name or source
    IconRef,
    Shortcut,
    Visible,
}

impl Attribute {
    /// Every attribute that binding considers, in binding order
    pub const ALL: [Attribute; 7] = [
        Attribute::Label,
        Attribute::Checkable,
        Attribute::Checked,
        Attribute::Enabled,
        Attribute::IconRef,
        Attribute::Shortcut,
        Attribute::Visible,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Attribute::Label => "label",
            Attribute::Checkable => "checkable",
            Attribute::Checked => "checked",
            Attribute::Enabled => "enabled",
            Attribute::IconRef => "icon",
            Attribute::Shortcut => "shortcut",
            Attribute::Visible => "visible",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference to an icon, either a theme name or a resource location
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IconRef(String);

impl IconRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for IconRef {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// A value travelling along one attribute's binding
///
/// Each variant names its attribute so an assignment can never land on a
/// field of the wrong type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Label(String),
    Checkable(bool),
    Checked(bool),
    Enabled(bool),
    IconRef(Option<IconRef>),
    Shortcut(Option<String>),
    Visible(bool),
}

impl AttributeValue {
    /// The attribute this value belongs to
    pub fn attribute(&self) -> Attribute {
        match self {
            AttributeValue::Label(_) => Attribute::Label,
            AttributeValue::Checkable(_) => Attribute::Checkable,
            AttributeValue::Checked(_) => Attribute::Checked,
            AttributeValue::Enabled(_) => Attribute::Enabled,
            AttributeValue::IconRef(_) => Attribute::IconRef,
            AttributeValue::Shortcut(_) => Attribute::Shortcut,
            AttributeValue::Visible(_) => Attribute::Visible,
        }
    }
}
