//! Menu description documents
//!
//! A menu document is a TOML or JSON file describing a source menu tree.
//! The format is picked from the file extension.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::entities::{ActionItem, GroupRegistry, SourceNode, SubMenu};
use crate::error::{MirrorError, MirrorResult};

/// Supported on-disk formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Toml,
    Json,
}

impl DocumentFormat {
    /// Detect the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// A key present in the document that no item understands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentWarning {
    /// Dotted location, e.g. `items.0.lable`
    pub path: String,
    pub file: PathBuf,
}

impl DocumentWarning {
    /// Last segment of the dotted location
    pub fn key(&self) -> &str {
        self.path.rsplit('.').next().unwrap_or(&self.path)
    }
}

/// Root of a menu document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuDocument {
    pub title: String,

    #[serde(default)]
    pub items: Vec<ItemSpec>,
}

/// One entry of a menu document
///
/// `kind` selects the node type: `action`, `menu` or `separator`. Any other
/// value produces an unsupported node, which the cloner skips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemSpec {
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Submenu title; `label` is accepted as a fallback
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shortcut: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkable: Option<bool>,

    #[serde(default)]
    pub checked: bool,

    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_true")]
    pub visible: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ItemSpec>,
}

fn default_true() -> bool {
    true
}

impl MenuDocument {
    /// Load a document, collecting unknown keys as warnings
    pub fn load(path: &Path) -> MirrorResult<(Self, Vec<DocumentWarning>)> {
        let format =
            DocumentFormat::from_path(path).ok_or_else(|| MirrorError::UnknownDocumentFormat {
                file: path.to_path_buf(),
            })?;
        let content = fs::read_to_string(path)?;
        Self::parse(&content, format, path)
    }

    /// Parse document text; `file` is only used for diagnostics
    pub fn parse(
        content: &str,
        format: DocumentFormat,
        file: &Path,
    ) -> MirrorResult<(Self, Vec<DocumentWarning>)> {
        let mut unknown: Vec<String> = Vec::new();

        let parsed: Result<Self, String> = match format {
            DocumentFormat::Toml => {
                let deserializer = toml::de::Deserializer::new(content);
                serde_ignored::deserialize(deserializer, |p| unknown.push(p.to_string()))
                    .map_err(|e| e.to_string())
            }
            DocumentFormat::Json => {
                let mut deserializer = serde_json::Deserializer::from_str(content);
                serde_ignored::deserialize(&mut deserializer, |p| unknown.push(p.to_string()))
                    .and_then(|doc| deserializer.end().map(|()| doc))
                    .map_err(|e| e.to_string())
            }
        };

        let document = parsed.map_err(|message| MirrorError::InvalidDocument {
            file: file.to_path_buf(),
            message,
        })?;

        let warnings = unknown
            .into_iter()
            .map(|path| DocumentWarning {
                path,
                file: file.to_path_buf(),
            })
            .collect();

        Ok((document, warnings))
    }

    /// Build a fresh source tree from this document
    pub fn build(&self) -> SubMenu {
        let root = SubMenu::new(self.title.clone());
        let groups = GroupRegistry::new();
        for item in &self.items {
            root.push(item.build(&groups));
        }
        root
    }
}

impl ItemSpec {
    /// Build this item; grouped actions join the group for their key in `groups`
    pub fn build(&self, groups: &GroupRegistry) -> SourceNode {
        match self.kind.as_str() {
            "action" => SourceNode::Action(self.build_action(groups).into()),
            "menu" => {
                let title = self.title.as_ref().or(self.label.as_ref());
                let menu = SubMenu::new(title.cloned().unwrap_or_default());
                menu.set_enabled(self.enabled);
                menu.set_visible(self.visible);
                menu.set_icon(self.icon.as_deref().map(Into::into));
                for child in &self.items {
                    menu.push(child.build(groups));
                }
                SourceNode::Menu(menu.into())
            }
            "separator" => SourceNode::Separator,
            other => {
                debug!(kind = other, "document item of unsupported kind");
                SourceNode::unsupported(other)
            }
        }
    }

    fn build_action(&self, groups: &GroupRegistry) -> ActionItem {
        let mut item = ActionItem::new(self.label.clone().unwrap_or_default());
        if let Some(group) = &self.group {
            item = item.in_group(&groups.group(group.as_str()));
        }
        if let Some(checkable) = self.checkable {
            item = item.with_checkable(checkable);
        }
        if let Some(shortcut) = &self.shortcut {
            item = item.with_shortcut(shortcut.as_str());
        }
        if let Some(icon) = &self.icon {
            item = item.with_icon(icon.as_str());
        }
        item.with_checked(self.checked)
            .with_enabled(self.enabled)
            .with_visible(self.visible)
    }
}
