//! Activation Forwarder
//!
//! Connects a proxy item's activation to the source item's trigger.

use crate::domain::entities::{ProxyNode, SourceNode};

/// Forward activations of `proxy` to `source`.
///
/// Returns false, registering nothing, when the proxy cannot be activated or
/// the source has nothing to trigger. Each activation triggers the source
/// exactly once; forwarding the same pair again replaces the old handler.
pub fn forward_activation(source: &SourceNode, proxy: &ProxyNode) -> bool {
    let Some(activation) = proxy.activation() else {
        return false;
    };
    let Some(target) = source.trigger_target() else {
        return false;
    };

    let subscription = activation.connect(move |_| {
        if let Some(item) = target.upgrade() {
            item.trigger();
        }
    });

    proxy.set_forwarding(subscription)
}
