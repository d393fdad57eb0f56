//! Domain Entities
//!
//! - `source` - the authoritative menu tree (ActionItem, SubMenu)
//! - `proxy` - the mirror tree (ProxyAction, ProxyMenu)
//! - `source_group` - source-side mutual exclusion and its key registry
//! - `exclusive_group` - proxy-side mutual exclusion
//! - `shape` - comparable structural snapshots

pub mod exclusive_group;
pub mod proxy;
pub mod shape;
pub mod source;
pub mod source_group;

pub use exclusive_group::ExclusiveGroup;
pub use proxy::{BindingSet, ProxyAction, ProxyMenu, ProxyNode, WeakProxyNode};
pub use shape::{count_nodes, without_unsupported, ShapeNode};
pub use source::{ActionItem, AttributeHandler, ObservableNode, SourceNode, SubMenu};
pub use source_group::{GroupRegistry, SourceGroup};
