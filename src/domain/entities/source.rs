//! Source Menu Tree
//!
//! The authoritative menu that proxies mirror. Every attribute is a
//! [`Property`] with its own change signal, so a binding can follow exactly
//! one attribute. Source nodes know nothing about their proxies.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::domain::signal::{Property, Signal, Subscription};
use crate::domain::value_objects::{Attribute, AttributeValue, GroupKey, IconRef, NodeKind};

use super::shape::ShapeNode;
use super::source_group::SourceGroup;

/// Callback receiving the new value of one attribute
pub type AttributeHandler = Box<dyn Fn(AttributeValue)>;

/// A source node whose attributes can be read and observed one at a time
pub trait ObservableNode {
    fn kind(&self) -> NodeKind;

    /// Current value of `attribute`, or `None` if this node does not have it
    fn value(&self, attribute: Attribute) -> Option<AttributeValue>;

    /// Subscribe to changes of `attribute`, or `None` if this node does not
    /// have it
    fn observe(&self, attribute: Attribute, handler: AttributeHandler) -> Option<Subscription>;
}

/// Leaf command node
#[derive(Debug)]
pub struct ActionItem {
    label: Property<String>,
    checkable: Property<bool>,
    checked: Rc<Property<bool>>,
    enabled: Property<bool>,
    icon: Property<Option<IconRef>>,
    shortcut: Property<Option<String>>,
    visible: Property<bool>,
    group: RefCell<Option<Rc<SourceGroup>>>,
    triggered: Signal<()>,
}

impl ActionItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: Property::new(label.into()),
            checkable: Property::new(false),
            checked: Rc::new(Property::new(false)),
            enabled: Property::new(true),
            icon: Property::new(None),
            shortcut: Property::new(None),
            visible: Property::new(true),
            group: RefCell::new(None),
            triggered: Signal::new(),
        }
    }

    pub fn with_shortcut(self, shortcut: impl Into<String>) -> Self {
        self.shortcut.set(Some(shortcut.into()));
        self
    }

    pub fn with_icon(self, icon: impl Into<IconRef>) -> Self {
        self.icon.set(Some(icon.into()));
        self
    }

    pub fn with_checkable(self, checkable: bool) -> Self {
        self.checkable.set(checkable);
        self
    }

    pub fn with_checked(self, checked: bool) -> Self {
        self.set_checked(checked);
        self
    }

    pub fn with_enabled(self, enabled: bool) -> Self {
        self.enabled.set(enabled);
        self
    }

    pub fn with_visible(self, visible: bool) -> Self {
        self.visible.set(visible);
        self
    }

    /// Place the item in an exclusive group; implies checkable
    pub fn in_group(self, group: &Rc<SourceGroup>) -> Self {
        self.checkable.set(true);
        self.set_exclusive_group(Some(group));
        self
    }

    pub fn label(&self) -> String {
        self.label.get()
    }

    pub fn set_label(&self, label: impl Into<String>) {
        self.label.set(label.into());
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
        if checked {
            if let Some(group) = self.source_group() {
                group.select(&self.checked);
            }
        }
        self.checked.set(checked);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    pub fn icon(&self) -> Option<IconRef> {
        self.icon.get()
    }

    pub fn set_icon(&self, icon: Option<IconRef>) {
        self.icon.set(icon);
    }

    pub fn shortcut(&self) -> Option<String> {
        self.shortcut.get()
    }

    pub fn set_shortcut(&self, shortcut: Option<String>) {
        self.shortcut.set(shortcut);
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }

    /// Key of the group this item belongs to
    pub fn exclusive_group(&self) -> Option<GroupKey> {
        self.group.borrow().as_ref().map(|g| g.key().clone())
    }

    pub fn source_group(&self) -> Option<Rc<SourceGroup>> {
        self.group.borrow().clone()
    }

    /// Move the item to `group`, or out of any group.
    ///
    /// A checked item joining a group takes the selection from its peers.
    pub fn set_exclusive_group(&self, group: Option<&Rc<SourceGroup>>) {
        let previous = std::mem::replace(&mut *self.group.borrow_mut(), group.cloned());
        if let Some(previous) = previous {
            previous.withdraw(&self.checked);
        }
        if let Some(group) = group {
            group.enlist(&self.checked);
            if self.is_checked() {
                group.select(&self.checked);
            }
        }
    }

    /// Run the item's action.
    ///
    /// Disabled items ignore the request. A checkable item toggles its check
    /// state first; an item in an exclusive group can only become checked.
    /// Returns true if the action fired.
    pub fn trigger(&self) -> bool {
        if !self.is_enabled() {
            return false;
        }

        if self.is_checkable() {
            let next = self.group.borrow().is_some() || !self.is_checked();
            self.set_checked(next);
        }

        self.triggered.emit(&());
        true
    }

    /// Subscribe to the item's action
    pub fn on_triggered<F>(&self, handler: F) -> Subscription
    where
        F: Fn() + 'static,
    {
        self.triggered.connect(move |_| handler())
    }

    /// Number of live subscriptions across all attributes
    pub fn subscriber_count(&self) -> usize {
        self.label.subscriber_count()
            + self.checkable.subscriber_count()
            + self.checked.subscriber_count()
            + self.enabled.subscriber_count()
            + self.icon.subscriber_count()
            + self.shortcut.subscriber_count()
            + self.visible.subscriber_count()
    }
}

impl ObservableNode for ActionItem {
    fn kind(&self) -> NodeKind {
        NodeKind::Action
    }

    fn value(&self, attribute: Attribute) -> Option<AttributeValue> {
        Some(match attribute {
            Attribute::Label => AttributeValue::Label(self.label.get()),
            Attribute::Checkable => AttributeValue::Checkable(self.checkable.get()),
            Attribute::Checked => AttributeValue::Checked(self.checked.get()),
            Attribute::Enabled => AttributeValue::Enabled(self.enabled.get()),
            Attribute::IconRef => AttributeValue::IconRef(self.icon.get()),
            Attribute::Shortcut => AttributeValue::Shortcut(self.shortcut.get()),
            Attribute::Visible => AttributeValue::Visible(self.visible.get()),
        })
    }

    fn observe(&self, attribute: Attribute, handler: AttributeHandler) -> Option<Subscription> {
        Some(match attribute {
            Attribute::Label => self
                .label
                .on_changed(move |v| handler(AttributeValue::Label(v.clone()))),
            Attribute::Checkable => self
                .checkable
                .on_changed(move |v| handler(AttributeValue::Checkable(*v))),
            Attribute::Checked => self
                .checked
                .on_changed(move |v| handler(AttributeValue::Checked(*v))),
            Attribute::Enabled => self
                .enabled
                .on_changed(move |v| handler(AttributeValue::Enabled(*v))),
            Attribute::IconRef => self
                .icon
                .on_changed(move |v| handler(AttributeValue::IconRef(v.clone()))),
            Attribute::Shortcut => self
                .shortcut
                .on_changed(move |v| handler(AttributeValue::Shortcut(v.clone()))),
            Attribute::Visible => self
                .visible
                .on_changed(move |v| handler(AttributeValue::Visible(*v))),
        })
    }
}

/// Container node holding an ordered list of children
pub struct SubMenu {
    title: Property<String>,
    enabled: Property<bool>,
    icon: Property<Option<IconRef>>,
    visible: Property<bool>,
    children: RefCell<Vec<SourceNode>>,
}

impl SubMenu {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Property::new(title.into()),
            enabled: Property::new(true),
            icon: Property::new(None),
            visible: Property::new(true),
            children: RefCell::new(Vec::new()),
        }
    }

    pub fn title(&self) -> String {
        self.title.get()
    }

    pub fn set_title(&self, title: impl Into<String>) {
        self.title.set(title.into());
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    pub fn icon(&self) -> Option<IconRef> {
        self.icon.get()
    }

    pub fn set_icon(&self, icon: Option<IconRef>) {
        self.icon.set(icon);
    }

    pub fn is_visible(&self) -> bool {
        self.visible.get()
    }

    pub fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }

    /// Append an action and return a shared handle to it
    pub fn add_action(&self, item: ActionItem) -> Rc<ActionItem> {
        let item = Rc::new(item);
        self.push(SourceNode::Action(Rc::clone(&item)));
        item
    }

    /// Append a submenu and return a shared handle to it
    pub fn add_menu(&self, menu: SubMenu) -> Rc<SubMenu> {
        let menu = Rc::new(menu);
        self.push(SourceNode::Menu(Rc::clone(&menu)));
        menu
    }

    pub fn add_separator(&self) {
        self.push(SourceNode::Separator);
    }

    /// Append an arbitrary node, including one shared with another menu
    pub fn push(&self, node: SourceNode) {
        self.children.borrow_mut().push(node);
    }

    /// Remove and return the child at `index`
    pub fn remove(&self, index: usize) -> Option<SourceNode> {
        let mut children = self.children.borrow_mut();
        if index < children.len() {
            Some(children.remove(index))
        } else {
            None
        }
    }

    /// Snapshot of the children; cheap, every node is reference counted
    pub fn children(&self) -> Vec<SourceNode> {
        self.children.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.children.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.borrow().is_empty()
    }

    /// Structural shape of the children. Must only be called on acyclic
    /// trees.
    pub fn shape(&self) -> Vec<ShapeNode> {
        self.children.borrow().iter().map(SourceNode::shape).collect()
    }
}

// Children may form a cycle, so Debug stays shallow.
impl fmt::Debug for SubMenu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubMenu")
            .field("title", &self.title.get())
            .field("children", &self.children.borrow().len())
            .finish()
    }
}

impl ObservableNode for SubMenu {
    fn kind(&self) -> NodeKind {
        NodeKind::Menu
    }

    fn value(&self, attribute: Attribute) -> Option<AttributeValue> {
        match attribute {
            Attribute::Label => Some(AttributeValue::Label(self.title.get())),
            Attribute::Enabled => Some(AttributeValue::Enabled(self.enabled.get())),
            Attribute::IconRef => Some(AttributeValue::IconRef(self.icon.get())),
            Attribute::Visible => Some(AttributeValue::Visible(self.visible.get())),
            Attribute::Checkable | Attribute::Checked | Attribute::Shortcut => None,
        }
    }

    fn observe(&self, attribute: Attribute, handler: AttributeHandler) -> Option<Subscription> {
        match attribute {
            Attribute::Label => Some(
                self.title
                    .on_changed(move |v| handler(AttributeValue::Label(v.clone()))),
            ),
            Attribute::Enabled => Some(
                self.enabled
                    .on_changed(move |v| handler(AttributeValue::Enabled(*v))),
            ),
            Attribute::IconRef => Some(
                self.icon
                    .on_changed(move |v| handler(AttributeValue::IconRef(v.clone()))),
            ),
            Attribute::Visible => Some(
                self.visible
                    .on_changed(move |v| handler(AttributeValue::Visible(*v))),
            ),
            Attribute::Checkable | Attribute::Checked | Attribute::Shortcut => None,
        }
    }
}

/// A node of the source tree
#[derive(Debug, Clone)]
pub enum SourceNode {
    Action(Rc<ActionItem>),
    Menu(Rc<SubMenu>),
    Separator,
    /// A host node kind that is not mirrored
    Unsupported { kind: String },
}

impl SourceNode {
    pub fn unsupported(kind: impl Into<String>) -> Self {
        SourceNode::Unsupported { kind: kind.into() }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            SourceNode::Action(_) => NodeKind::Action,
            SourceNode::Menu(_) => NodeKind::Menu,
            SourceNode::Separator => NodeKind::Separator,
            SourceNode::Unsupported { .. } => NodeKind::Unsupported,
        }
    }

    pub fn value(&self, attribute: Attribute) -> Option<AttributeValue> {
        match self {
            SourceNode::Action(item) => item.value(attribute),
            SourceNode::Menu(menu) => menu.value(attribute),
            SourceNode::Separator | SourceNode::Unsupported { .. } => None,
        }
    }

    pub fn observe(&self, attribute: Attribute, handler: AttributeHandler) -> Option<Subscription> {
        match self {
            SourceNode::Action(item) => item.observe(attribute, handler),
            SourceNode::Menu(menu) => menu.observe(attribute, handler),
            SourceNode::Separator | SourceNode::Unsupported { .. } => None,
        }
    }

    /// Non-owning handle to the item whose action this node runs
    pub fn trigger_target(&self) -> Option<Weak<ActionItem>> {
        match self {
            SourceNode::Action(item) => Some(Rc::downgrade(item)),
            _ => None,
        }
    }

    /// Label of an action or title of a submenu
    pub fn label(&self) -> Option<String> {
        match self {
            SourceNode::Action(item) => Some(item.label()),
            SourceNode::Menu(menu) => Some(menu.title()),
            SourceNode::Separator | SourceNode::Unsupported { .. } => None,
        }
    }

    pub fn shape(&self) -> ShapeNode {
        match self {
            SourceNode::Action(item) => ShapeNode::leaf(NodeKind::Action, Some(item.label())),
            SourceNode::Menu(menu) => ShapeNode::branch(menu.title(), menu.shape()),
            SourceNode::Separator => ShapeNode::leaf(NodeKind::Separator, None),
            SourceNode::Unsupported { .. } => ShapeNode::leaf(NodeKind::Unsupported, None),
        }
    }
}
