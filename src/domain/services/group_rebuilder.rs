//! Exclusive Group Rebuilder
//!
//! Collects group membership during the tree walk and creates the proxy
//! groups afterwards. Members of one group can be anywhere in the tree, in
//! any walk order, so a group can only be created once all of them are
//! known: exactly one group per key.

use std::collections::BTreeMap;
use std::rc::Rc;

use tracing::debug;

use crate::domain::entities::{ExclusiveGroup, ProxyAction, ProxyMenu};
use crate::domain::value_objects::GroupKey;

/// Group membership recorded during a walk, in walk order per key
#[derive(Debug, Default)]
pub struct PendingGroups {
    members: BTreeMap<GroupKey, Vec<Rc<ProxyAction>>>,
}

impl PendingGroups {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, key: GroupKey, item: Rc<ProxyAction>) {
        self.members.entry(key).or_default().push(item);
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn member_count(&self, key: &GroupKey) -> usize {
        self.members.get(key).map_or(0, Vec::len)
    }
}

/// Create one group per pending key, scoped to `target`.
///
/// Every recorded member joins its key's group. If several members are
/// already checked, the last one in walk order keeps the check.
pub fn rebuild_groups(pending: PendingGroups, target: &ProxyMenu) -> Vec<Rc<ExclusiveGroup>> {
    let mut groups = Vec::with_capacity(pending.len());

    for (key, members) in pending.members {
        let group = ExclusiveGroup::new(key);
        for member in &members {
            group.add_member(member);
        }
        debug!(key = %group.key(), members = members.len(), "rebuilt exclusive group");

        target.adopt_group(Rc::clone(&group));
        groups.push(group);
    }

    groups
}
