//! Element tree and document state
//!
//! A `Document` owns every element on the page. Nodes are addressed by
//! `NodeId`; a removed node's id simply stops resolving, so stale ids
//! held by timers or controllers degrade to no-ops.

use rustc_hash::FxHashMap;
use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;

new_key_type! {
    /// Unique identifier for a document node
    pub struct NodeId;
}

/// A single element: tag, optional id, attributes, classes, and text.
#[derive(Debug)]
pub struct Element {
    tag: String,
    id: Option<String>,
    attributes: FxHashMap<String, String>,
    classes: Vec<String>,
    text: String,
    children: SmallVec<[NodeId; 8]>,
    parent: Option<NodeId>,
    /// Vertical position of the element's top edge, in pixels.
    offset_top: f32,
}

impl Element {
    fn new(tag: String) -> Self {
        Self {
            tag,
            id: None,
            attributes: FxHashMap::default(),
            classes: Vec::new(),
            text: String::new(),
            children: SmallVec::new(),
            parent: None,
            offset_top: 0.0,
        }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(|v| v.as_str())
    }

    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn offset_top(&self) -> f32 {
        self.offset_top
    }
}

/// Builder for new elements, consumed by [`Document::append`].
#[derive(Debug, Default)]
pub struct ElementBuilder {
    tag: String,
    id: Option<String>,
    attributes: Vec<(String, String)>,
    classes: Vec<String>,
    text: Option<String>,
    offset_top: f32,
}

impl ElementBuilder {
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn placeholder(self, value: impl Into<String>) -> Self {
        self.attr("placeholder", value)
    }

    pub fn offset_top(mut self, offset: f32) -> Self {
        self.offset_top = offset;
        self
    }
}

/// Create an element builder for the given tag.
pub fn element(tag: impl Into<String>) -> ElementBuilder {
    ElementBuilder {
        tag: tag.into(),
        ..Default::default()
    }
}

/// The page document: element tree plus focus and scroll state.
pub struct Document {
    nodes: SlotMap<NodeId, Element>,
    ids: FxHashMap<String, NodeId>,
    root: NodeId,
    body: NodeId,
    focused: Option<NodeId>,
    scroll_y: f32,
}

impl Document {
    /// Create a document with an `html` root and a `body` child.
    pub fn new() -> Self {
        let mut nodes = SlotMap::with_key();
        let root = nodes.insert(Element::new("html".to_string()));
        let body = nodes.insert(Element::new("body".to_string()));
        nodes[body].parent = Some(root);
        nodes[root].children.push(body);
        Self {
            nodes,
            ids: FxHashMap::default(),
            root,
            body,
            focused: None,
            scroll_y: 0.0,
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Build an element and append it to `parent`'s children.
    ///
    /// Appending under a node that no longer exists attaches to the body
    /// instead, so late timers never lose content silently.
    pub fn append(&mut self, parent: NodeId, builder: ElementBuilder) -> NodeId {
        let parent = if self.nodes.contains_key(parent) {
            parent
        } else {
            self.body
        };
        let mut el = Element::new(builder.tag);
        for (name, value) in builder.attributes {
            el.attributes.insert(name, value);
        }
        el.classes = builder.classes;
        if let Some(text) = builder.text {
            el.text = text;
        }
        el.offset_top = builder.offset_top;
        el.parent = Some(parent);
        let node = self.nodes.insert(el);
        self.nodes[parent].children.push(node);
        if let Some(id) = builder.id {
            self.set_id(node, id);
        }
        node
    }

    /// Remove a node and its subtree. Focus inside the subtree is cleared.
    pub fn remove(&mut self, node: NodeId) {
        if !self.nodes.contains_key(node) {
            return;
        }
        if let Some(parent) = self.nodes[node].parent {
            if let Some(p) = self.nodes.get_mut(parent) {
                p.children.retain(|c| *c != node);
            }
        }
        let mut stack = vec![node];
        while let Some(n) = stack.pop() {
            if let Some(el) = self.nodes.remove(n) {
                if let Some(id) = el.id {
                    self.ids.remove(&id);
                }
                if self.focused == Some(n) {
                    self.focused = None;
                }
                stack.extend(el.children);
            }
        }
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains_key(node)
    }

    pub fn get(&self, node: NodeId) -> Option<&Element> {
        self.nodes.get(node)
    }

    pub fn get_by_id(&self, id: &str) -> Option<NodeId> {
        self.ids.get(id).copied()
    }

    /// Assign an id, replacing any previous registration for that id.
    pub fn set_id(&mut self, node: NodeId, id: impl Into<String>) {
        let id = id.into();
        if let Some(el) = self.nodes.get_mut(node) {
            if let Some(old) = el.id.take() {
                self.ids.remove(&old);
            }
            el.id = Some(id.clone());
            self.ids.insert(id, node);
        }
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node).and_then(|el| el.parent)
    }

    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes.get(node).map(|el| &el.children[..]).unwrap_or(&[])
    }

    /// All nodes under `node` (inclusive), in document order.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![node];
        while let Some(n) = stack.pop() {
            if let Some(el) = self.nodes.get(n) {
                out.push(n);
                stack.extend(el.children.iter().rev().copied());
            }
        }
        out
    }

    /// Every node carrying the attribute, in document order.
    pub fn query_attr(&self, name: &str) -> Vec<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .filter(|n| self.nodes[*n].has_attr(name))
            .collect()
    }

    /// Every node with the tag, in document order.
    pub fn query_tag(&self, tag: &str) -> Vec<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .filter(|n| self.nodes[*n].tag == tag)
            .collect()
    }

    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        self.nodes.get(node).and_then(|el| el.attr(name))
    }

    pub fn set_attr(&mut self, node: NodeId, name: impl Into<String>, value: impl Into<String>) {
        if let Some(el) = self.nodes.get_mut(node) {
            el.attributes.insert(name.into(), value.into());
        }
    }

    pub fn remove_attr(&mut self, node: NodeId, name: &str) {
        if let Some(el) = self.nodes.get_mut(node) {
            el.attributes.remove(name);
        }
    }

    pub fn text(&self, node: NodeId) -> &str {
        self.nodes.get(node).map(|el| el.text()).unwrap_or("")
    }

    pub fn set_text(&mut self, node: NodeId, text: impl Into<String>) {
        if let Some(el) = self.nodes.get_mut(node) {
            el.text = text.into();
        }
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes.get(node).is_some_and(|el| el.has_class(class))
    }

    pub fn add_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.nodes.get_mut(node) {
            if !el.has_class(class) {
                el.classes.push(class.to_string());
            }
        }
    }

    pub fn remove_class(&mut self, node: NodeId, class: &str) {
        if let Some(el) = self.nodes.get_mut(node) {
            el.classes.retain(|c| c != class);
        }
    }

    /// Drop one class and add another in a single step. The two are
    /// mutually exclusive afterwards.
    pub fn replace_class(&mut self, node: NodeId, remove: &str, add: &str) {
        self.remove_class(node, remove);
        self.add_class(node, add);
    }

    // ---- semantic attribute helpers ----

    pub fn is_hidden(&self, node: NodeId) -> bool {
        self.attr(node, "hidden").is_some()
    }

    pub fn set_hidden(&mut self, node: NodeId, hidden: bool) {
        if hidden {
            self.set_attr(node, "hidden", "");
        } else {
            self.remove_attr(node, "hidden");
        }
    }

    pub fn value(&self, node: NodeId) -> &str {
        self.attr(node, "value").unwrap_or("")
    }

    pub fn set_value(&mut self, node: NodeId, value: impl Into<String>) {
        self.set_attr(node, "value", value);
    }

    pub fn is_checked(&self, node: NodeId) -> bool {
        self.attr(node, "checked").is_some()
    }

    pub fn set_checked(&mut self, node: NodeId, checked: bool) {
        if checked {
            self.set_attr(node, "checked", "");
        } else {
            self.remove_attr(node, "checked");
        }
    }

    pub fn placeholder(&self, node: NodeId) -> Option<&str> {
        self.attr(node, "placeholder")
    }

    pub fn set_placeholder(&mut self, node: NodeId, value: impl Into<String>) {
        self.set_attr(node, "placeholder", value);
    }

    pub fn is_disabled(&self, node: NodeId) -> bool {
        self.attr(node, "disabled").is_some()
    }

    pub fn set_disabled(&mut self, node: NodeId, disabled: bool) {
        if disabled {
            self.set_attr(node, "disabled", "");
        } else {
            self.remove_attr(node, "disabled");
        }
    }

    // ---- focus ----

    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    pub fn set_focus(&mut self, node: Option<NodeId>) {
        self.focused = node.filter(|n| self.nodes.contains_key(*n));
    }

    // ---- scroll ----

    pub fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    /// Scroll to a vertical position, clamped at the top of the page.
    pub fn scroll_to(&mut self, y: f32) {
        self.scroll_y = y.max(0.0);
    }

    pub fn offset_top(&self, node: NodeId) -> f32 {
        self.nodes.get(node).map(|el| el.offset_top).unwrap_or(0.0)
    }

    pub fn set_offset_top(&mut self, node: NodeId, offset: f32) {
        if let Some(el) = self.nodes.get_mut(node) {
            el.offset_top = offset;
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
