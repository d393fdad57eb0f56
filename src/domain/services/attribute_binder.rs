//! Attribute Binder
//!
//! One-directional live binding from a source node to its proxy. For each
//! attribute the source exposes, the proxy receives the current value and
//! then every subsequent change. The proxy owns the subscriptions; the
//! handlers hold the proxy weakly.
//!
//! The source's action is never bound. The mirrored attributes already
//! cover what it would carry, and binding it would create an update loop.

use tracing::trace;

use crate::domain::entities::{ProxyNode, SourceNode};
use crate::domain::value_objects::Attribute;

/// Bind every attribute `source` exposes onto `proxy`.
///
/// Returns the number of attributes bound. Attributes the source lacks are
/// skipped without error.
pub fn bind_attributes(source: &SourceNode, proxy: &ProxyNode) -> usize {
    let Some(bindings) = proxy.bindings() else {
        return 0;
    };

    let mut bound = 0;
    for attribute in Attribute::ALL {
        let Some(current) = source.value(attribute) else {
            trace!(%attribute, kind = %source.kind(), "attribute unavailable, not bound");
            continue;
        };

        proxy.assign(current);

        let target = proxy.downgrade();
        let subscription = source.observe(
            attribute,
            Box::new(move |value| {
                if let Some(proxy) = target.upgrade() {
                    proxy.assign(value);
                }
            }),
        );

        if let Some(subscription) = subscription {
            bindings.install(attribute, subscription);
            bound += 1;
        }
    }

    bound
}
