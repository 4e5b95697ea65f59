// dom.rs
//
// VisualTree backend over the browser DOM. SVG kinds are created in the SVG
// namespace, HTML kinds in the default one; node handles index into a local
// element table so the engine never sees a web-sys type.

use orbit_engine::{BoundingBox, NodeId, NodeKind, VisualTree};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

pub struct DomTree {
    document: Document,
    nodes: Vec<Element>,
}

impl DomTree {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            nodes: Vec::new(),
        }
    }

    /// Register an existing element (e.g. the mount point looked up by id) so
    /// the engine can address it.
    pub fn adopt(&mut self, element: Element) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(element);
        id
    }

    fn element(&self, node: NodeId) -> &Element {
        &self.nodes[node.0 as usize]
    }
}

impl VisualTree for DomTree {
    fn create_node(&mut self, kind: NodeKind) -> NodeId {
        let element = if kind.is_svg() {
            self.document.create_element_ns(Some(SVG_NS), kind.tag())
        } else {
            self.document.create_element(kind.tag())
        }
        .unwrap_or_else(|_| panic!("failed to create <{}> element", kind.tag()));
        self.adopt(element)
    }

    fn attach_child(&mut self, parent: NodeId, child: NodeId) {
        let child = self.element(child).clone();
        if self.element(parent).append_child(&child).is_err() {
            log::error!("failed to attach child node");
        }
    }

    fn set_attribute(&mut self, node: NodeId, key: &str, value: &str) {
        if self.element(node).set_attribute(key, value).is_err() {
            log::error!("failed to set attribute {key}={value}");
        }
    }

    fn set_style(&mut self, node: NodeId, key: &str, value: &str) {
        if let Some(html) = self.element(node).dyn_ref::<HtmlElement>() {
            if html.style().set_property(key, value).is_err() {
                log::error!("failed to set style {key}={value}");
            }
        }
    }

    fn set_text(&mut self, node: NodeId, text: &str) {
        self.element(node).set_text_content(Some(text));
    }

    fn bounding_box(&self, node: NodeId) -> BoundingBox {
        let element = self.element(node);
        let rect = element.get_bounding_client_rect();
        // Offsets within the offset parent, matching how the moon container
        // is positioned; fall back to viewport coordinates for non-HTML nodes.
        let (top, left) = match element.dyn_ref::<HtmlElement>() {
            Some(html) => (html.offset_top() as f32, html.offset_left() as f32),
            None => (rect.top() as f32, rect.left() as f32),
        };
        BoundingBox {
            top,
            left,
            height: rect.height() as f32,
        }
    }

    fn is_attachable(&self, node: NodeId) -> bool {
        (node.0 as usize) < self.nodes.len() && self.element(node).is_connected()
    }
}
