//! Exclusive Group
//!
//! Proxy-side mutual exclusion: at most one member is checked at a time.
//! Checking a member unchecks the others. The owning menu holds the group
//! strongly; members point at it strongly and the group points back weakly.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::domain::value_objects::GroupKey;

use super::proxy::ProxyAction;

pub struct ExclusiveGroup {
    key: GroupKey,
    members: RefCell<Vec<Weak<ProxyAction>>>,
}

impl ExclusiveGroup {
    pub fn new(key: GroupKey) -> Rc<Self> {
        Rc::new(Self {
            key,
            members: RefCell::new(Vec::new()),
        })
    }

    pub fn key(&self) -> &GroupKey {
        &self.key
    }

    /// Make `item` a member, leaving any group it was in before.
    ///
    /// A checked newcomer takes the selection from the current holder.
    pub fn add_member(self: &Rc<Self>, item: &Rc<ProxyAction>) {
        if let Some(previous) = item.set_group(Some(Rc::clone(self))) {
            if !Rc::ptr_eq(&previous, self) {
                previous.remove_member(item);
            } else {
                return;
            }
        }

        self.members.borrow_mut().push(Rc::downgrade(item));

        if item.is_checked() {
            self.select(item);
        }
    }

    fn remove_member(&self, item: &ProxyAction) {
        let target: *const ProxyAction = item;
        self.members
            .borrow_mut()
            .retain(|member| member.as_ptr() != target);
    }

    /// Uncheck every member except `chosen`
    pub(crate) fn select(&self, chosen: &ProxyAction) {
        for member in self.members() {
            if !std::ptr::eq(Rc::as_ptr(&member), chosen) {
                member.clear_checked();
            }
        }
    }

    /// Live members in insertion order
    pub fn members(&self) -> Vec<Rc<ProxyAction>> {
        self.members
            .borrow()
            .iter()
            .filter_map(Weak::upgrade)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.members().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The member currently checked, if any
    pub fn checked_member(&self) -> Option<Rc<ProxyAction>> {
        self.members().into_iter().find(|m| m.is_checked())
    }

    pub fn contains(&self, item: &ProxyAction) -> bool {
        let target: *const ProxyAction = item;
        self.members
            .borrow()
            .iter()
            .any(|member| member.as_ptr() == target)
    }
}

impl fmt::Debug for ExclusiveGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExclusiveGroup")
            .field("key", &self.key)
            .field("members", &self.len())
            .finish()
    }
}
