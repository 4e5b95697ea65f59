//! Visual-tree abstraction.
//!
//! The renderer never talks to a concrete display API. It builds its output
//! through this factory trait, which a backend implements over whatever node
//! technology it has: the browser DOM in `orbit-web`, or the in-memory tree
//! in [`crate::memory`] for headless use and unit tests.

/// Kind of node a factory can create.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    // SVG namespace
    Svg,
    Defs,
    RadialGradient,
    Stop,
    Mask,
    Rect,
    Ellipse,
    // HTML namespace
    Block,
    Label,
}

impl NodeKind {
    /// Element tag name for this kind.
    pub fn tag(self) -> &'static str {
        match self {
            NodeKind::Svg => "svg",
            NodeKind::Defs => "defs",
            NodeKind::RadialGradient => "radialGradient",
            NodeKind::Stop => "stop",
            NodeKind::Mask => "mask",
            NodeKind::Rect => "rect",
            NodeKind::Ellipse => "ellipse",
            NodeKind::Block => "div",
            NodeKind::Label => "label",
        }
    }

    /// Whether this kind lives in the SVG namespace.
    pub fn is_svg(self) -> bool {
        !matches!(self, NodeKind::Block | NodeKind::Label)
    }
}

/// Handle to a node minted by a [`VisualTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

/// Position and extent of a laid-out node, in display-surface pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBox {
    pub top: f32,
    pub left: f32,
    pub height: f32,
}

/// Factory and mutation surface for a tree of visual nodes.
pub trait VisualTree {
    /// Create a detached node of the given kind.
    fn create_node(&mut self, kind: NodeKind) -> NodeId;

    /// Append `child` under `parent`.
    fn attach_child(&mut self, parent: NodeId, child: NodeId);

    fn set_attribute(&mut self, node: NodeId, key: &str, value: &str);

    fn set_style(&mut self, node: NodeId, key: &str, value: &str);

    fn set_text(&mut self, node: NodeId, text: &str);

    /// Layout box of the node as the backend currently measures it.
    fn bounding_box(&self, node: NodeId) -> BoundingBox;

    /// Whether `node` is a live node that children can be attached under.
    fn is_attachable(&self, node: NodeId) -> bool;
}
