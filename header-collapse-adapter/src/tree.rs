use alloc::collections::{BTreeMap, BTreeSet};
use alloc::string::String;
use alloc::vec::Vec;

use header_collapse::{HeaderHost, Scale3d, StyleWrite, TitleSize, TransformOrigin, Transition};

/// A handle into an [`ElementTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeKind {
    Header,
    Toolbar,
    Title { size: TitleSize },
    /// The scalable text node inside a title's encapsulated structure.
    TitleText,
    ButtonGroup,
    Button { collapsible: bool },
    ScrollContainer,
    Other,
}

/// The latest value of every property the engine writes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ComputedStyle {
    pub opacity: Option<f32>,
    /// `None` when the transition was never set or was cleared.
    pub transition: Option<Transition>,
    pub transform_origin: Option<TransformOrigin>,
    pub transform: Option<Scale3d>,
    pub properties: BTreeMap<&'static str, String>,
    pub classes: BTreeSet<&'static str>,
    /// Number of writes applied to this node.
    pub writes: usize,
}

impl ComputedStyle {
    pub fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn has_class(&self, name: &str) -> bool {
        self.classes.contains(name)
    }

    fn apply(&mut self, write: StyleWrite) {
        self.writes += 1;
        match write {
            StyleWrite::Transition(t) => self.transition = t,
            StyleWrite::Opacity(v) => self.opacity = Some(v),
            StyleWrite::TransformOrigin(o) => self.transform_origin = Some(o),
            StyleWrite::Transform(s) => self.transform = Some(s),
            StyleWrite::Property { name, value } => {
                self.properties.insert(name, value);
            }
            StyleWrite::ClassFlag { name, present } => {
                if present {
                    self.classes.insert(name);
                } else {
                    self.classes.remove(name);
                }
            }
        }
    }
}

#[derive(Clone, Debug)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    shadow: Option<NodeId>,
    height: f32,
    scroll_top: f32,
    style: ComputedStyle,
}

/// A small retained element tree implementing [`HeaderHost`].
///
/// Hosts without a real DOM can mirror their header structure here and read the resulting
/// styles back from [`ElementTree::style`]. Unknown handles are treated as empty elements.
#[derive(Clone, Debug, Default)]
pub struct ElementTree {
    nodes: Vec<Node>,
}

impl ElementTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Appends a node as the last child of `parent` (or as a detached root).
    pub fn insert(&mut self, parent: Option<NodeId>, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node {
            kind,
            parent: None,
            children: Vec::new(),
            shadow: None,
            height: 0.0,
            scroll_top: 0.0,
            style: ComputedStyle::default(),
        });
        if let Some(parent) = parent {
            self.append_child(parent, id);
        }
        id
    }

    /// Moves `child` to the end of `parent`'s children.
    ///
    /// Returns `false` (leaving the tree unchanged) for unknown handles, or when `child` is
    /// `parent` itself or one of its ancestors.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if parent.index() >= self.nodes.len() || child.index() >= self.nodes.len() {
            return false;
        }
        if self.is_ancestor_or_self(child, parent) {
            actrace!(parent = parent.0, child = child.0, "ElementTree::append_child: cycle");
            return false;
        }
        self.detach(child);
        self.nodes[parent.index()].children.push(child);
        self.nodes[child.index()].parent = Some(parent);
        true
    }

    fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cursor = Some(node);
        while let Some(id) = cursor {
            if id == ancestor {
                return true;
            }
            cursor = self.node(id).and_then(|n| n.parent);
        }
        false
    }

    /// Removes `node` (and its subtree) from its parent. The handle stays valid.
    pub fn detach(&mut self, node: NodeId) {
        let Some(parent) = self.node(node).and_then(|n| n.parent) else {
            return;
        };
        self.nodes[parent.index()].children.retain(|&c| c != node);
        self.nodes[node.index()].parent = None;
    }

    pub fn header(&mut self) -> NodeId {
        self.insert(None, NodeKind::Header)
    }

    pub fn toolbar(&mut self, parent: NodeId) -> NodeId {
        self.insert(Some(parent), NodeKind::Toolbar)
    }

    /// Adds a title with its encapsulated text node. Returns `(title, text)`.
    pub fn add_title(&mut self, toolbar: NodeId, size: TitleSize) -> (NodeId, NodeId) {
        let title = self.insert(Some(toolbar), NodeKind::Title { size });
        let text = self.insert(None, NodeKind::TitleText);
        self.nodes[title.index()].shadow = Some(text);
        (title, text)
    }

    pub fn button_group(&mut self, toolbar: NodeId) -> NodeId {
        self.insert(Some(toolbar), NodeKind::ButtonGroup)
    }

    pub fn button(&mut self, group: NodeId, collapsible: bool) -> NodeId {
        self.insert(Some(group), NodeKind::Button { collapsible })
    }

    pub fn scroll_container(&mut self) -> NodeId {
        self.insert(None, NodeKind::ScrollContainer)
    }

    pub fn kind(&self, node: NodeId) -> Option<NodeKind> {
        self.node(node).map(|n| n.kind)
    }

    pub fn set_height(&mut self, node: NodeId, height: f32) {
        if let Some(n) = self.node_mut(node) {
            n.height = height;
        }
    }

    pub fn set_scroll_top(&mut self, node: NodeId, scroll_top: f32) {
        if let Some(n) = self.node_mut(node) {
            n.scroll_top = scroll_top;
        }
    }

    /// Replaces a title's size variant. No-op for non-title nodes.
    pub fn set_title_size(&mut self, title: NodeId, size: TitleSize) {
        if let Some(Node {
            kind: NodeKind::Title { size: s },
            ..
        }) = self.node_mut(title)
        {
            *s = size;
        }
    }

    /// Replaces a button's collapsible flag. No-op for non-button nodes.
    pub fn set_collapsible(&mut self, button: NodeId, collapsible: bool) {
        if let Some(Node {
            kind: NodeKind::Button { collapsible: c },
            ..
        }) = self.node_mut(button)
        {
            *c = collapsible;
        }
    }

    /// Drops the encapsulated text node of a title (e.g. before its shadow tree renders).
    pub fn clear_shadow(&mut self, title: NodeId) {
        if let Some(n) = self.node_mut(title) {
            n.shadow = None;
        }
    }

    pub fn style(&self, node: NodeId) -> Option<&ComputedStyle> {
        self.node(node).map(|n| &n.style)
    }

    /// Total number of style writes applied across the tree.
    pub fn total_writes(&self) -> usize {
        self.nodes.iter().map(|n| n.style.writes).sum()
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Descendants of `root` in document (pre-)order matching `pred`.
    fn query_all(&self, root: NodeId, pred: impl Fn(NodeKind) -> bool) -> Vec<NodeId> {
        let mut out = Vec::new();
        let Some(root) = self.node(root) else {
            return out;
        };
        let mut stack: Vec<NodeId> = root.children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.index()];
            if pred(node.kind) {
                out.push(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        out
    }
}

impl HeaderHost for ElementTree {
    type Element = NodeId;

    fn toolbars(&self, header: &NodeId) -> Vec<NodeId> {
        self.query_all(*header, |k| k == NodeKind::Toolbar)
    }

    fn title(&self, toolbar: &NodeId) -> Option<NodeId> {
        self.query_all(*toolbar, |k| matches!(k, NodeKind::Title { .. }))
            .into_iter()
            .next()
    }

    fn title_inner(&self, title: &NodeId) -> Option<NodeId> {
        self.node(*title).and_then(|n| n.shadow)
    }

    fn button_groups(&self, toolbar: &NodeId) -> Vec<NodeId> {
        self.query_all(*toolbar, |k| k == NodeKind::ButtonGroup)
    }

    fn buttons(&self, group: &NodeId) -> Vec<NodeId> {
        self.query_all(*group, |k| matches!(k, NodeKind::Button { .. }))
    }

    fn is_collapsible(&self, button: &NodeId) -> bool {
        matches!(
            self.kind(*button),
            Some(NodeKind::Button { collapsible: true })
        )
    }

    fn title_size(&self, title: &NodeId) -> TitleSize {
        match self.kind(*title) {
            Some(NodeKind::Title { size }) => size,
            _ => TitleSize::Default,
        }
    }

    fn scroll_top(&self, scroll: &NodeId) -> f32 {
        self.node(*scroll).map_or(0.0, |n| n.scroll_top)
    }

    fn client_height(&self, el: &NodeId) -> f32 {
        self.node(*el).map_or(0.0, |n| n.height)
    }

    fn apply(&mut self, el: &NodeId, write: StyleWrite) {
        if let Some(n) = self.node_mut(*el) {
            n.style.apply(write);
        }
    }
}
