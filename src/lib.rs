//! menu-mirror - live proxy copies of hierarchical command menus
//!
//! Given a source menu tree, menu-mirror builds a structurally identical
//! proxy tree whose attributes follow the source, whose activations are
//! forwarded back to the source, and whose radio groups are rebuilt on the
//! proxy side.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;
pub mod util;

// Re-exports for convenience
pub use config::MirrorConfig;
pub use domain::entities::{
    ActionItem, ExclusiveGroup, GroupRegistry, ProxyAction, ProxyMenu, ProxyNode, ShapeNode,
    SourceGroup, SourceNode, SubMenu,
};
pub use domain::ports::{CloneEvent, CloneEventSink, NoopEventSink};
pub use domain::services::{clone_menu, CloneSummary, MenuCloner, DEFAULT_MAX_DEPTH};
pub use domain::signal::{Property, Signal, Subscription};
pub use domain::value_objects::{Attribute, AttributeValue, GroupKey, IconRef, NodeKind};
pub use error::{MirrorError, MirrorResult, StructuralError};
pub use infrastructure::{JsonEventSink, MenuDocument, RecordingEventSink};
pub use presentation::TreeRenderer;
