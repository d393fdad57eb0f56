//! Source Exclusive Groups
//!
//! Mutual exclusion among source items. Members hand the group a weak
//! handle to their `checked` property; checking one member unchecks the
//! rest. Items hold their group strongly.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::domain::signal::Property;
use crate::domain::value_objects::GroupKey;

pub struct SourceGroup {
    key: GroupKey,
    members: RefCell<Vec<Weak<Property<bool>>>>,
}

impl SourceGroup {
    pub fn new(key: impl Into<GroupKey>) -> Rc<Self> {
        Rc::new(Self {
            key: key.into(),
            members: RefCell::new(Vec::new()),
        })
    }

    pub fn key(&self) -> &GroupKey {
        &self.key
    }

    pub(crate) fn enlist(&self, checked: &Rc<Property<bool>>) {
        let mut members = self.members.borrow_mut();
        members.retain(|m| m.strong_count() > 0);
        if !members.iter().any(|m| m.as_ptr() == Rc::as_ptr(checked)) {
            members.push(Rc::downgrade(checked));
        }
    }

    pub(crate) fn withdraw(&self, checked: &Rc<Property<bool>>) {
        self.members
            .borrow_mut()
            .retain(|m| m.strong_count() > 0 && m.as_ptr() != Rc::as_ptr(checked));
    }

    /// Uncheck every member except `chosen`
    pub(crate) fn select(&self, chosen: &Rc<Property<bool>>) {
        // Snapshot first: unchecking notifies observers, which may touch the group.
        let others: Vec<_> = self
            .members
            .borrow()
            .iter()
            .filter_map(Weak::upgrade)
            .filter(|m| !Rc::ptr_eq(m, chosen))
            .collect();
        for member in others {
            member.set(false);
        }
    }

    /// Number of live members
    pub fn len(&self) -> usize {
        self.members
            .borrow()
            .iter()
            .filter(|m| m.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn checked_count(&self) -> usize {
        self.members
            .borrow()
            .iter()
            .filter_map(Weak::upgrade)
            .filter(|m| m.get())
            .count()
    }
}

impl fmt::Debug for SourceGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SourceGroup")
            .field("key", &self.key)
            .field("members", &self.len())
            .finish()
    }
}

/// Hands out one shared [`SourceGroup`] per key
#[derive(Debug, Default)]
pub struct GroupRegistry {
    groups: RefCell<BTreeMap<GroupKey, Rc<SourceGroup>>>,
}

impl GroupRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The group for `key`, created on first use
    pub fn group(&self, key: impl Into<GroupKey>) -> Rc<SourceGroup> {
        let key = key.into();
        let mut groups = self.groups.borrow_mut();
        Rc::clone(
            groups
                .entry(key.clone())
                .or_insert_with(|| SourceGroup::new(key)),
        )
    }

    /// Number of distinct keys handed out
    pub fn len(&self) -> usize {
        self.groups.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.borrow().is_empty()
    }
}
