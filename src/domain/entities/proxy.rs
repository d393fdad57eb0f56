//! Proxy Menu Tree
//!
//! The mirror side. Proxy nodes hold display values that are only ever
//! written through [`ProxyNode::assign`] (by a binding) or by the proxy's own
//! setters; nothing here writes back into the source tree. Each proxy keeps
//! a weak reference to the node it mirrors and owns its binding
//! subscriptions, so dropping a proxy tree tears down every update path into
//! it.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::domain::signal::{Signal, Subscription};
use crate::domain::value_objects::{Attribute, AttributeValue, IconRef, NodeKind};

use super::exclusive_group::ExclusiveGroup;
use super::shape::ShapeNode;
use super::source::{ActionItem, SubMenu};

/// Binding subscriptions owned by one proxy node, at most one per attribute
#[derive(Default)]
pub struct BindingSet {
    bindings: RefCell<BTreeMap<Attribute, Subscription>>,
}

impl BindingSet {
    /// Install `subscription` for `attribute`, disposing any previous one
    pub fn install(&self, attribute: Attribute, subscription: Subscription) {
        let previous = self.bindings.borrow_mut().insert(attribute, subscription);
        drop(previous);
    }

    pub fn is_bound(&self, attribute: Attribute) -> bool {
        self.bindings.borrow().contains_key(&attribute)
    }

    pub fn len(&self) -> usize {
        self.bindings.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.borrow().is_empty()
    }

    /// Dispose every binding
    pub fn clear(&self) {
        let drained = std::mem::take(&mut *self.bindings.borrow_mut());
        drop(drained);
    }
}

impl fmt::Debug for BindingSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.bindings.borrow().keys()).finish()
    }
}

/// Proxy for an [`ActionItem`]
pub struct ProxyAction {
    label: RefCell<String>,
    checkable: Cell<bool>,
    checked: Cell<bool>,
    enabled: Cell<bool>,
    icon: RefCell<Option<IconRef>>,
    shortcut: RefCell<Option<String>>,
    visible: Cell<bool>,
    group: RefCell<Option<Rc<ExclusiveGroup>>>,
    activated: Signal<()>,
    forwarding: RefCell<Option<Subscription>>,
    bindings: BindingSet,
    source: Weak<ActionItem>,
}

impl ProxyAction {
    /// Standalone item with no source
    pub fn new(label: impl Into<String>) -> Self {
        Self::with_source(label.into(), Weak::new())
    }

    /// Item mirroring `source`; attributes stay at defaults until bound
    pub fn mirroring(source: &Rc<ActionItem>) -> Self {
        Self::with_source(source.label(), Rc::downgrade(source))
    }

    fn with_source(label: String, source: Weak<ActionItem>) -> Self {
        Self {
            label: RefCell::new(label),
            checkable: Cell::new(false),
            checked: Cell::new(false),
            enabled: Cell::new(true),
            icon: RefCell::new(None),
            shortcut: RefCell::new(None),
            visible: Cell::new(true),
            group: RefCell::new(None),
            activated: Signal::new(),
            forwarding: RefCell::new(None),
            bindings: BindingSet::default(),
            source,
        }
    }

    pub fn label(&self) -> String {
        self.label.borrow().clone()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        *self.label.borrow_mut() = label.into();
    }

    pub fn is_checkable(&self) -> bool {
        self.checkable.get()
    }

    pub fn set_checkable(&self, checkable: bool) {
        self.checkable.set(checkable);
    }

    pub fn is_checked(&self) -> bool {
        self.checked.get()
    }

    /// Set the check state; checking a grouped item unchecks its peers
    pub fn set_checked(&self, checked: bool) {
        self.checked.set(checked);
        if checked {
            let group = self.group.borrow().clone();
            if let Some(group) = group {
                group.select(self);
            }
        }
    }

    /// Uncheck without consulting the group
    pub(crate) fn clear_checked(&self) {
        self.checked.set(false);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    pub fn icon(&self) -> Option<IconRef> {
        self.icon.borrow().clone()
    }

    pub fn set_icon(&self, icon: Option<IconRef>) {
        *self.icon.borrow_mut() = icon;
    }

    pub fn shortcut(&self) -> Option<String> {
        self.shortcut.borrow().clone()
    }

    pub fn set_shortcut(&self, shortcut: Option<String>) {
        *self.shortcut.borrow_mut() = shortcut;
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }

    /// Group this item currently belongs to
    pub fn exclusive_group(&self) -> Option<Rc<ExclusiveGroup>> {
        self.group.borrow().clone()
    }

    pub(crate) fn set_group(&self, group: Option<Rc<ExclusiveGroup>>) -> Option<Rc<ExclusiveGroup>> {
        std::mem::replace(&mut *self.group.borrow_mut(), group)
    }

    /// The item this proxy mirrors, if it is still alive
    pub fn source(&self) -> Option<Rc<ActionItem>> {
        self.source.upgrade()
    }

    /// Simulate a user activation
    pub fn activate(&self) {
        self.activated.emit(&());
    }

    pub fn activation(&self) -> &Signal<()> {
        &self.activated
    }

    pub fn bindings(&self) -> &BindingSet {
        &self.bindings
    }

    pub fn is_forwarding(&self) -> bool {
        self.forwarding.borrow().is_some()
    }

    fn assign(&self, value: AttributeValue) {
        match value {
            AttributeValue::Label(label) => self.set_label(label),
            AttributeValue::Checkable(checkable) => self.set_checkable(checkable),
            AttributeValue::Checked(checked) => self.set_checked(checked),
            AttributeValue::Enabled(enabled) => self.set_enabled(enabled),
            AttributeValue::IconRef(icon) => self.set_icon(icon),
            AttributeValue::Shortcut(shortcut) => self.set_shortcut(shortcut),
            AttributeValue::Visible(visible) => self.set_visible(visible),
        }
    }
}

impl fmt::Debug for ProxyAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyAction")
            .field("label", &self.label.borrow())
            .field("checked", &self.checked.get())
            .field("enabled", &self.enabled.get())
            .field("bindings", &self.bindings)
            .finish()
    }
}

/// Proxy for a [`SubMenu`], and the container type of a whole proxy tree
pub struct ProxyMenu {
    title: RefCell<String>,
    enabled: Cell<bool>,
    icon: RefCell<Option<IconRef>>,
    visible: Cell<bool>,
    items: RefCell<Vec<ProxyNode>>,
    groups: RefCell<Vec<Rc<ExclusiveGroup>>>,
    bindings: BindingSet,
    source: Weak<SubMenu>,
}

impl ProxyMenu {
    /// Empty root container
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_source(title.into(), Weak::new())
    }

    /// Empty submenu mirroring `source`
    pub fn mirroring(source: &Rc<SubMenu>) -> Self {
        Self::with_source(source.title(), Rc::downgrade(source))
    }

    fn with_source(title: String, source: Weak<SubMenu>) -> Self {
        Self {
            title: RefCell::new(title),
            enabled: Cell::new(true),
            icon: RefCell::new(None),
            visible: Cell::new(true),
            items: RefCell::new(Vec::new()),
            groups: RefCell::new(Vec::new()),
            bindings: BindingSet::default(),
            source,
        }
    }

    pub fn title(&self) -> String {
        self.title.borrow().clone()
    }

    pub fn set_title(&self, title: impl Into<String>) {
        *self.title.borrow_mut() = title.into();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    pub fn icon(&self) -> Option<IconRef> {
        self.icon.borrow().clone()
    }

    pub fn set_icon(&self, icon: Option<IconRef>) {
        *self.icon.borrow_mut() = icon;
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }

    pub fn source(&self) -> Option<Rc<SubMenu>> {
        self.source.upgrade()
    }

    pub fn bindings(&self) -> &BindingSet {
        &self.bindings
    }

    pub fn add_item(&self, label: impl Into<String>) -> Rc<ProxyAction> {
        let item = Rc::new(ProxyAction::new(label));
        self.append(ProxyNode::Action(Rc::clone(&item)));
        item
    }

    pub fn add_menu(&self, title: impl Into<String>) -> Rc<ProxyMenu> {
        let menu = Rc::new(ProxyMenu::new(title));
        self.append(ProxyNode::Menu(Rc::clone(&menu)));
        menu
    }

    pub fn add_separator(&self) {
        self.append(ProxyNode::Separator);
    }

    pub fn append(&self, node: ProxyNode) {
        self.items.borrow_mut().push(node);
    }

    /// Remove and return the item at `index`
    pub fn remove_item(&self, index: usize) -> Option<ProxyNode> {
        let mut items = self.items.borrow_mut();
        if index < items.len() {
            Some(items.remove(index))
        } else {
            None
        }
    }

    /// Remove every item, front first, then drop the groups scoped here.
    ///
    /// Removed nodes are detached, so proxies still held elsewhere stop
    /// following their sources.
    pub fn clear(&self) {
        while let Some(item) = self.remove_item(0) {
            item.detach();
        }
        self.groups.borrow_mut().clear();
    }

    /// Drop this menu's bindings and those of everything below it
    pub fn detach(&self) {
        self.bindings.clear();
        for item in self.items() {
            item.detach();
        }
    }

    pub fn items(&self) -> Vec<ProxyNode> {
        self.items.borrow().clone()
    }

    pub fn item(&self, index: usize) -> Option<ProxyNode> {
        self.items.borrow().get(index).cloned()
    }

    pub fn item_count(&self) -> usize {
        self.items.borrow().len()
    }

    /// Take ownership of a group scoped to this menu
    pub fn adopt_group(&self, group: Rc<ExclusiveGroup>) {
        self.groups.borrow_mut().push(group);
    }

    pub fn groups(&self) -> Vec<Rc<ExclusiveGroup>> {
        self.groups.borrow().clone()
    }

    /// First action with `label`, searching depth first
    pub fn find_action(&self, label: &str) -> Option<Rc<ProxyAction>> {
        for item in self.items.borrow().iter() {
            match item {
                ProxyNode::Action(action) if action.label() == label => {
                    return Some(Rc::clone(action));
                }
                ProxyNode::Menu(menu) => {
                    if let Some(found) = menu.find_action(label) {
                        return Some(found);
                    }
                }
                _ => {}
            }
        }
        None
    }

    /// First submenu titled `title`, searching depth first
    pub fn find_menu(&self, title: &str) -> Option<Rc<ProxyMenu>> {
        for item in self.items.borrow().iter() {
            if let ProxyNode::Menu(menu) = item {
                if menu.title() == title {
                    return Some(Rc::clone(menu));
                }
                if let Some(found) = menu.find_menu(title) {
                    return Some(found);
                }
            }
        }
        None
    }

    pub fn shape(&self) -> Vec<ShapeNode> {
        self.items.borrow().iter().map(ProxyNode::shape).collect()
    }

    fn assign(&self, value: AttributeValue) {
        match value {
            AttributeValue::Label(title) => self.set_title(title),
            AttributeValue::Enabled(enabled) => self.set_enabled(enabled),
            AttributeValue::IconRef(icon) => self.set_icon(icon),
            AttributeValue::Visible(visible) => self.set_visible(visible),
            AttributeValue::Checkable(_)
            | AttributeValue::Checked(_)
            | AttributeValue::Shortcut(_) => {}
        }
    }
}

impl fmt::Debug for ProxyMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProxyMenu")
            .field("title", &self.title.borrow())
            .field("items", &self.items.borrow())
            .field("groups", &self.groups.borrow().len())
            .finish()
    }
}

/// A node of the proxy tree
#[derive(Debug, Clone)]
pub enum ProxyNode {
    Action(Rc<ProxyAction>),
    Menu(Rc<ProxyMenu>),
    Separator,
}

impl ProxyNode {
    pub fn kind(&self) -> NodeKind {
        match self {
            ProxyNode::Action(_) => NodeKind::Action,
            ProxyNode::Menu(_) => NodeKind::Menu,
            ProxyNode::Separator => NodeKind::Separator,
        }
    }

    /// One-directional write of a mirrored value
    pub fn assign(&self, value: AttributeValue) {
        match self {
            ProxyNode::Action(action) => action.assign(value),
            ProxyNode::Menu(menu) => menu.assign(value),
            ProxyNode::Separator => {}
        }
    }

    pub fn bindings(&self) -> Option<&BindingSet> {
        match self {
            ProxyNode::Action(action) => Some(&action.bindings),
            ProxyNode::Menu(menu) => Some(&menu.bindings),
            ProxyNode::Separator => None,
        }
    }

    /// Activation signal, for nodes a user can activate
    pub fn activation(&self) -> Option<&Signal<()>> {
        match self {
            ProxyNode::Action(action) => Some(&action.activated),
            ProxyNode::Menu(_) | ProxyNode::Separator => None,
        }
    }

    /// Keep `subscription` as this node's activation forwarding, replacing
    /// any earlier one. Returns false for nodes that cannot be activated.
    pub fn set_forwarding(&self, subscription: Subscription) -> bool {
        match self {
            ProxyNode::Action(action) => {
                let previous = action.forwarding.borrow_mut().replace(subscription);
                drop(previous);
                true
            }
            ProxyNode::Menu(_) | ProxyNode::Separator => false,
        }
    }

    /// Dispose bindings and activation forwarding
    pub fn detach(&self) {
        match self {
            ProxyNode::Action(action) => {
                action.bindings.clear();
                let forwarding = action.forwarding.borrow_mut().take();
                drop(forwarding);
            }
            ProxyNode::Menu(menu) => menu.detach(),
            ProxyNode::Separator => {}
        }
    }

    pub fn downgrade(&self) -> WeakProxyNode {
        match self {
            ProxyNode::Action(action) => WeakProxyNode::Action(Rc::downgrade(action)),
            ProxyNode::Menu(menu) => WeakProxyNode::Menu(Rc::downgrade(menu)),
            ProxyNode::Separator => WeakProxyNode::Separator,
        }
    }

    pub fn label(&self) -> Option<String> {
        match self {
            ProxyNode::Action(action) => Some(action.label()),
            ProxyNode::Menu(menu) => Some(menu.title()),
            ProxyNode::Separator => None,
        }
    }

    pub fn as_action(&self) -> Option<&Rc<ProxyAction>> {
        match self {
            ProxyNode::Action(action) => Some(action),
            _ => None,
        }
    }

    pub fn as_menu(&self) -> Option<&Rc<ProxyMenu>> {
        match self {
            ProxyNode::Menu(menu) => Some(menu),
            _ => None,
        }
    }

    pub fn shape(&self) -> ShapeNode {
        match self {
            ProxyNode::Action(action) => ShapeNode::leaf(NodeKind::Action, Some(action.label())),
            ProxyNode::Menu(menu) => ShapeNode::branch(menu.title(), menu.shape()),
            ProxyNode::Separator => ShapeNode::leaf(NodeKind::Separator, None),
        }
    }
}

/// Non-owning handle to a proxy node, captured by binding handlers
#[derive(Debug, Clone)]
pub enum WeakProxyNode {
    Action(Weak<ProxyAction>),
    Menu(Weak<ProxyMenu>),
    Separator,
}

impl WeakProxyNode {
    pub fn upgrade(&self) -> Option<ProxyNode> {
        match self {
            WeakProxyNode::Action(action) => action.upgrade().map(ProxyNode::Action),
            WeakProxyNode::Menu(menu) => menu.upgrade().map(ProxyNode::Menu),
            WeakProxyNode::Separator => Some(ProxyNode::Separator),
        }
    }
}
