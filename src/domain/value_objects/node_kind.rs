//! Node Kind Value Object
//!
//! Discriminator for menu nodes, plus the statically declared list of
//! attributes each kind exposes for binding.

use std::fmt;

use serde::Serialize;

use super::attribute::Attribute;

/// Kind of a menu node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Action,
    Menu,
    Separator,
    /// A host node kind this crate does not mirror
    Unsupported,
}

impl NodeKind {
    /// Attributes a node of this kind exposes
    pub fn attributes(&self) -> &'static [Attribute] {
        match self {
            NodeKind::Action => &Attribute::ALL,
            NodeKind::Menu => &[
                Attribute::Label,
                Attribute::Enabled,
                Attribute::IconRef,
                Attribute::Visible,
            ],
            NodeKind::Separator | NodeKind::Unsupported => &[],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Action => "action",
            NodeKind::Menu => "menu",
            NodeKind::Separator => "separator",
            NodeKind::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
