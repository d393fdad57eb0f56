//! Menu Tree Cloner
//!
//! Builds a live proxy of a source menu inside a target menu.
//!
//! The clone runs in two phases:
//!
//! 1. **Stage** - walk the source pre-order and build a detached proxy tree,
//!    remembering every (source, proxy) pair and the pending group
//!    membership. Cycles and excessive depth abort here, before the target
//!    is touched.
//! 2. **Commit** - clear the target item by item, move the staged nodes in,
//!    install attribute bindings and activation forwarding, then rebuild the
//!    exclusive groups once for the whole tree.
//!
//! Events describing the staged tree are only sent once it is committed; a
//! failed clone reports `Started` then `Failed` and nothing in between.

use std::rc::Rc;

use serde::Serialize;
use tracing::{debug, info_span};

use crate::domain::entities::{ProxyAction, ProxyMenu, ProxyNode, SourceNode, SubMenu};
use crate::domain::ports::{CloneEvent, CloneEventSink, NoopEventSink};
use crate::error::{MirrorResult, StructuralError};

use super::activation_forwarder::forward_activation;
use super::attribute_binder::bind_attributes;
use super::group_rebuilder::{rebuild_groups, PendingGroups};

/// Default bound on submenu nesting
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Counts describing one completed clone
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CloneSummary {
    pub actions: usize,
    pub menus: usize,
    pub separators: usize,
    /// Source nodes of unsupported kinds left out of the proxy tree
    pub skipped: usize,
    /// Attribute subscriptions installed
    pub bindings: usize,
    /// Proxy items forwarding activation
    pub forwarded: usize,
    /// Exclusive groups created
    pub groups: usize,
}

impl CloneSummary {
    /// Number of proxy nodes created
    pub fn node_count(&self) -> usize {
        self.actions + self.menus + self.separators
    }
}

/// Mirrors source menus into proxy menus
pub struct MenuCloner {
    max_depth: usize,
    report_unsupported: bool,
    events: Rc<dyn CloneEventSink>,
}

impl Default for MenuCloner {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuCloner {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            report_unsupported: true,
            events: Rc::new(NoopEventSink),
        }
    }

    /// Deepest allowed submenu nesting below the root
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Whether skipped node kinds are logged and reported as events
    pub fn with_report_unsupported(mut self, report: bool) -> Self {
        self.report_unsupported = report;
        self
    }

    pub fn with_event_sink(mut self, events: Rc<dyn CloneEventSink>) -> Self {
        self.events = events;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Replace the contents of `target` with a live proxy of `source`.
    ///
    /// On error the target is left exactly as it was.
    pub fn clone_menu(&self, source: &SubMenu, target: &ProxyMenu) -> MirrorResult<CloneSummary> {
        let title = source.title();
        let _span = info_span!("clone_menu", menu = %title).entered();
        self.events.on_event(CloneEvent::Started {
            title: title.clone(),
        });

        let mut stage = Stage::default();
        let mut ancestors = vec![Ancestor {
            menu: source as *const SubMenu,
            title,
        }];

        let staged = match self.stage_children(source, &mut ancestors, &mut stage) {
            Ok(staged) => staged,
            Err(error) => {
                debug!(%error, "clone aborted");
                self.events.on_event(CloneEvent::Failed {
                    error: error.to_string(),
                });
                return Err(error.into());
            }
        };

        let Stage {
            pairs,
            pending,
            mut summary,
            skipped,
        } = stage;

        target.clear();
        for node in staged {
            target.append(node);
        }
        for event in skipped {
            self.events.on_event(event);
        }

        for (source_node, proxy_node) in &pairs {
            summary.bindings += bind_attributes(source_node, proxy_node);
            if forward_activation(source_node, proxy_node) {
                summary.forwarded += 1;
            }
        }

        let groups = rebuild_groups(pending, target);
        summary.groups = groups.len();
        if self.events.wants_detailed_events() {
            for group in &groups {
                self.events.on_event(CloneEvent::GroupRebuilt {
                    key: group.key().clone(),
                    members: group.len(),
                });
            }
        }

        debug!(
            nodes = summary.node_count(),
            skipped = summary.skipped,
            groups = summary.groups,
            "clone committed"
        );
        self.events.on_event(CloneEvent::Completed {
            summary: summary.clone(),
        });

        Ok(summary)
    }

    fn stage_children(
        &self,
        menu: &SubMenu,
        ancestors: &mut Vec<Ancestor>,
        stage: &mut Stage,
    ) -> Result<Vec<ProxyNode>, StructuralError> {
        let mut staged = Vec::with_capacity(menu.len());

        for (index, child) in menu.children().into_iter().enumerate() {
            match &child {
                SourceNode::Action(item) => {
                    let proxy = Rc::new(ProxyAction::mirroring(item));
                    if let Some(key) = item.exclusive_group() {
                        stage.pending.record(key, Rc::clone(&proxy));
                    }
                    let node = ProxyNode::Action(proxy);
                    stage.summary.actions += 1;
                    stage.pairs.push((child.clone(), node.clone()));
                    staged.push(node);
                }
                SourceNode::Menu(submenu) => {
                    self.enter(submenu, ancestors)?;
                    let proxy = Rc::new(ProxyMenu::mirroring(submenu));
                    for grandchild in self.stage_children(submenu, ancestors, stage)? {
                        proxy.append(grandchild);
                    }
                    ancestors.pop();

                    let node = ProxyNode::Menu(proxy);
                    stage.summary.menus += 1;
                    stage.pairs.push((child.clone(), node.clone()));
                    staged.push(node);
                }
                SourceNode::Separator => {
                    stage.summary.separators += 1;
                    staged.push(ProxyNode::Separator);
                }
                SourceNode::Unsupported { kind } => {
                    stage.summary.skipped += 1;
                    if self.report_unsupported {
                        let path = titles(ancestors);
                        debug!(%kind, index, path = %path.join(" > "), "skipping unsupported menu node");
                        if self.events.wants_detailed_events() {
                            stage.skipped.push(CloneEvent::UnsupportedNodeSkipped {
                                kind: kind.clone(),
                                path,
                                index,
                            });
                        }
                    }
                }
            }
        }

        Ok(staged)
    }

    /// Push `submenu` onto the ancestor chain, rejecting cycles and
    /// excessive depth
    fn enter(&self, submenu: &Rc<SubMenu>, ancestors: &mut Vec<Ancestor>) -> Result<(), StructuralError> {
        let ptr = Rc::as_ptr(submenu);
        let title = submenu.title();

        if ancestors.iter().any(|a| std::ptr::eq(a.menu, ptr)) {
            let mut path = titles(ancestors);
            path.push(title);
            return Err(StructuralError::Cycle { path });
        }

        // The root sits at index 0, so a direct child of the root is depth 1.
        let depth = ancestors.len();
        if depth > self.max_depth {
            let mut path = titles(ancestors);
            path.push(title);
            return Err(StructuralError::DepthExceeded {
                depth,
                limit: self.max_depth,
                path,
            });
        }

        ancestors.push(Ancestor { menu: ptr, title });
        Ok(())
    }
}

/// Replace the contents of `target` with a live proxy of `source`, using
/// default options
pub fn clone_menu(source: &SubMenu, target: &ProxyMenu) -> MirrorResult<CloneSummary> {
    MenuCloner::new().clone_menu(source, target)
}

struct Ancestor {
    /// Identity only, never dereferenced
    menu: *const SubMenu,
    title: String,
}

fn titles(ancestors: &[Ancestor]) -> Vec<String> {
    ancestors.iter().map(|a| a.title.clone()).collect()
}

#[derive(Default)]
struct Stage {
    pairs: Vec<(SourceNode, ProxyNode)>,
    pending: PendingGroups,
    summary: CloneSummary,
    /// Skip reports, held back until the clone commits
    skipped: Vec<CloneEvent>,
}
