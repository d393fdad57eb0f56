//! Domain Services
//!
//! - `attribute_binder` - one-directional per-attribute binding
//! - `activation_forwarder` - proxy activation to source trigger
//! - `group_rebuilder` - deferred exclusive group reconstruction
//! - `menu_cloner` - the two-phase tree walk tying them together

pub mod activation_forwarder;
pub mod attribute_binder;
pub mod group_rebuilder;
pub mod menu_cloner;

pub use activation_forwarder::forward_activation;
pub use attribute_binder::bind_attributes;
pub use group_rebuilder::{rebuild_groups, PendingGroups};
pub use menu_cloner::{clone_menu, CloneSummary, MenuCloner, DEFAULT_MAX_DEPTH};
