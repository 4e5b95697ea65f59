// memory.rs
//
// In-memory VisualTree backend. Stands in for the browser DOM in unit tests
// and headless runs: every attribute, style and text write is recorded and
// can be inspected afterwards.

use std::collections::HashMap;

use crate::tree::{BoundingBox, NodeId, NodeKind, VisualTree};

#[derive(Debug, Default, Clone)]
pub struct MemoryNode {
    pub kind: Option<NodeKind>,
    pub attributes: HashMap<String, String>,
    pub styles: HashMap<String, String>,
    pub text: String,
    pub children: Vec<NodeId>,
}

/// Recording tree backend.
pub struct MemoryTree {
    nodes: Vec<MemoryNode>,
    /// Height reported for nodes with no explicit "height" style, standing in
    /// for real text layout.
    default_box_height: f32,
    mutations: u64,
}

impl MemoryTree {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            default_box_height: 0.0,
            mutations: 0,
        }
    }

    pub fn with_box_height(height: f32) -> Self {
        let mut tree = Self::new();
        tree.default_box_height = height;
        tree
    }

    pub fn node(&self, id: NodeId) -> &MemoryNode {
        &self.nodes[id.0 as usize]
    }

    pub fn attribute(&self, id: NodeId, key: &str) -> Option<&str> {
        self.node(id).attributes.get(key).map(String::as_str)
    }

    pub fn style(&self, id: NodeId, key: &str) -> Option<&str> {
        self.node(id).styles.get(key).map(String::as_str)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    /// Total number of attribute/style/text writes so far. Lets tests assert
    /// that nothing mutated the tree after some point.
    pub fn mutation_count(&self) -> u64 {
        self.mutations
    }

    /// Depth-first search for descendants of `root` with the given kind.
    pub fn find_by_kind(&self, root: NodeId, kind: NodeKind) -> Vec<NodeId> {
        let mut found = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if node.kind == Some(kind) {
                found.push(id);
            }
            for &child in node.children.iter().rev() {
                stack.push(child);
            }
        }
        found
    }

    fn style_px(&self, id: NodeId, key: &str) -> f32 {
        self.style(id, key)
            .and_then(|v| v.strip_suffix("px"))
            .and_then(|v| v.parse().ok())
            .unwrap_or(0.0)
    }
}

impl Default for MemoryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl VisualTree for MemoryTree {
    fn create_node(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(MemoryNode {
            kind: Some(kind),
            ..MemoryNode::default()
        });
        id
    }

    fn attach_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0 as usize].children.push(child);
    }

    fn set_attribute(&mut self, node: NodeId, key: &str, value: &str) {
        self.mutations += 1;
        self.nodes[node.0 as usize]
            .attributes
            .insert(key.to_string(), value.to_string());
    }

    fn set_style(&mut self, node: NodeId, key: &str, value: &str) {
        self.mutations += 1;
        self.nodes[node.0 as usize]
            .styles
            .insert(key.to_string(), value.to_string());
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        self.mutations += 1;
        self.nodes[node.0 as usize].text = text.to_string();
    }

    fn bounding_box(&self, node: NodeId) -> BoundingBox {
        let height = self
            .style(node, "height")
            .and_then(|v| v.strip_suffix("px"))
            .and_then(|v| v.parse().ok())
            .unwrap_or(self.default_box_height);
        BoundingBox {
            top: self.style_px(node, "top"),
            left: self.style_px(node, "left"),
            height,
        }
    }

    fn is_attachable(&self, node: NodeId) -> bool {
        (node.0 as usize) < self.nodes.len()
    }
}
