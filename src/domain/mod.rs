//! Domain Layer
//!
//! Menu trees, the change notification primitive, and the services that
//! mirror one tree into another. No I/O happens here.
//!
//! ## Structure
//!
//! - `signal` - Signal, Subscription and Property
//! - `entities/` - source and proxy trees, exclusive groups
//! - `value_objects/` - Attribute, GroupKey, NodeKind
//! - `services/` - binder, forwarder, group rebuilder, cloner
//! - `ports/` - clone event sink

pub mod entities;
pub mod ports;
pub mod services;
pub mod signal;
pub mod value_objects;
