//! Value Objects
//!
//! Immutable value types with no identity of their own.

pub mod attribute;
pub mod group_key;
pub mod node_kind;

pub use attribute::{Attribute, AttributeValue, IconRef};
pub use group_key::GroupKey;
pub use node_kind::NodeKind;
