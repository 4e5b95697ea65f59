// orbit.rs
//
// One orbit: a masked gradient ellipse plus a moon marker with a text label.
// The renderer builds its nodes through the injected VisualTree and exposes a
// single mutator, `change_angle`, which repositions only the moon container.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, OrbitResult};
use crate::geometry::position_on_ellipse;
use crate::gradient::GradientSpec;
use crate::tree::{NodeId, NodeKind, VisualTree};

/// Radius of the moon marker disc, in pixels.
pub const MOON_RADIUS: f32 = 10.0;

/// Static description of one orbit. Immutable once the orbit is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrbitConfig {
    /// Bounding-box width of the ellipse, in pixels.
    pub width: f32,
    /// Bounding-box height of the ellipse, in pixels.
    pub height: f32,
    /// Radial gradient descriptor, see [`GradientSpec::parse`].
    pub gradient: String,
    /// Stroke width of the orbit outline.
    pub border_width: f32,
    /// Where the moon starts, in degrees.
    pub start_angle_degrees: f32,
    /// Where the moon settles, in degrees.
    pub target_angle_degrees: f32,
    /// Accent-colored label line.
    pub title: String,
    /// Secondary label line.
    pub subtitle: String,
}

impl OrbitConfig {
    /// Reject non-finite and out-of-range numeric fields before any node is
    /// created. Values smuggled in through JSON (NaN, infinities, zero sizes)
    /// surface here instead of as silently broken output.
    pub fn validate(&self) -> OrbitResult<()> {
        for (field, value) in [
            ("width", self.width),
            ("height", self.height),
            ("border_width", self.border_width),
            ("start_angle_degrees", self.start_angle_degrees),
            ("target_angle_degrees", self.target_angle_degrees),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field, value });
            }
        }
        for (field, value) in [("width", self.width), ("height", self.height)] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.border_width < 0.0 {
            return Err(ConfigError::NegativeBorder(self.border_width));
        }
        Ok(())
    }
}

/// Handle to a rendered orbit. The only exposed mutation is [`Self::change_angle`].
#[derive(Debug)]
pub struct OrbitRenderer {
    width: f32,
    height: f32,
    mount: NodeId,
    moon_container: NodeId,
    /// Measured once at construction; the label column is vertically centered
    /// on the moon using it.
    container_height: f32,
}

impl OrbitRenderer {
    /// Build the orbit's visual structure under `mount` and place the moon at
    /// `initial_angle`.
    pub fn create(
        tree: &mut dyn VisualTree,
        mount: NodeId,
        config: &OrbitConfig,
        initial_angle: f32,
    ) -> OrbitResult<Self> {
        config.validate()?;
        if !tree.is_attachable(mount) {
            return Err(ConfigError::InvalidMount);
        }
        let gradient = GradientSpec::parse(&config.gradient)?;

        let svg = Self::build_ellipse(tree, config, &gradient);
        let (moon_container, description) = Self::build_moon(tree, config);

        tree.attach_child(mount, svg);
        tree.attach_child(mount, moon_container);
        tree.attach_child(moon_container, description);

        let container_height = tree.bounding_box(moon_container).height;

        let renderer = Self {
            width: config.width,
            height: config.height,
            mount,
            moon_container,
            container_height,
        };
        renderer.change_angle(tree, initial_angle);
        Ok(renderer)
    }

    /// Move the moon (and its label) to a new angle on the ellipse. Nothing
    /// else in the structure is touched.
    pub fn change_angle(&self, tree: &mut dyn VisualTree, angle_degrees: f32) {
        let pos = position_on_ellipse(self.width, self.height, angle_degrees);
        let origin = tree.bounding_box(self.mount);
        tree.set_style(
            self.moon_container,
            "left",
            &format!("{}px", pos.x - MOON_RADIUS + origin.left),
        );
        tree.set_style(
            self.moon_container,
            "top",
            &format!("{}px", pos.y - self.container_height / 2.0 + origin.top),
        );
    }

    pub fn moon_container(&self) -> NodeId {
        self.moon_container
    }

    /// The svg with defs (radial gradient, outline mask) and the masked
    /// gradient-filled ellipse.
    fn build_ellipse(
        tree: &mut dyn VisualTree,
        config: &OrbitConfig,
        gradient: &GradientSpec,
    ) -> NodeId {
        let w = config.width;
        let h = config.height;

        let svg = tree.create_node(NodeKind::Svg);
        tree.set_attribute(svg, "width", &w.to_string());
        tree.set_attribute(svg, "height", &h.to_string());
        tree.set_attribute(svg, "viewBox", &format!("0 0 {w} {h}"));

        let defs = tree.create_node(NodeKind::Defs);
        tree.attach_child(svg, defs);

        // Ids derived from the svg node so orbits sharing a document never
        // shadow each other's defs.
        let gradient_id = format!("orbit-gradient-{}", svg.0);
        let mask_id = format!("orbit-mask-{}", svg.0);

        let radial = tree.create_node(NodeKind::RadialGradient);
        tree.set_attribute(radial, "id", &gradient_id);
        tree.set_attribute(radial, "cx", &gradient.center_x.to_string());
        tree.set_attribute(radial, "cy", &gradient.center_y.to_string());
        tree.set_attribute(
            radial,
            "gradientTransform",
            &format!(
                "scale({} {}) translate({} {})",
                gradient.scale_x,
                gradient.scale_y,
                (1.0 - gradient.scale_x) / 2.0,
                (1.0 - gradient.scale_y) / 2.0
            ),
        );
        tree.attach_child(defs, radial);

        for stop in &gradient.stops {
            let stop_el = tree.create_node(NodeKind::Stop);
            tree.set_attribute(stop_el, "offset", &stop.offset.to_string());
            tree.set_attribute(stop_el, "stop-color", &stop.color);
            tree.attach_child(radial, stop_el);
        }

        // Mask: black field with a white-stroked ellipse, so only the outline
        // of the gradient fill shows through.
        let mask = tree.create_node(NodeKind::Mask);
        tree.set_attribute(mask, "id", &mask_id);
        tree.set_attribute(mask, "x", "0");
        tree.set_attribute(mask, "y", "0");
        tree.set_attribute(mask, "width", &w.to_string());
        tree.set_attribute(mask, "height", &h.to_string());

        let field = tree.create_node(NodeKind::Rect);
        tree.set_attribute(field, "x", "0");
        tree.set_attribute(field, "y", "0");
        tree.set_attribute(field, "width", &w.to_string());
        tree.set_attribute(field, "height", &h.to_string());
        tree.set_attribute(field, "fill", "#000");
        tree.attach_child(mask, field);

        let outline = tree.create_node(NodeKind::Ellipse);
        Self::ellipse_geometry(tree, outline, w, h);
        tree.set_attribute(outline, "stroke", "#FFF");
        tree.set_attribute(outline, "stroke-width", &config.border_width.to_string());
        tree.attach_child(mask, outline);
        tree.attach_child(defs, mask);

        let fill = tree.create_node(NodeKind::Ellipse);
        Self::ellipse_geometry(tree, fill, w, h);
        tree.set_attribute(fill, "mask", &format!("url(#{mask_id})"));
        tree.set_attribute(fill, "fill", &format!("url(#{gradient_id})"));
        tree.attach_child(svg, fill);

        svg
    }

    fn ellipse_geometry(tree: &mut dyn VisualTree, ellipse: NodeId, w: f32, h: f32) {
        tree.set_attribute(ellipse, "rx", &(w / 2.0).to_string());
        tree.set_attribute(ellipse, "ry", &(h / 2.0).to_string());
        tree.set_attribute(ellipse, "cx", &(w / 2.0).to_string());
        tree.set_attribute(ellipse, "cy", &(h / 2.0).to_string());
    }

    /// The moon disc plus the title/subtitle column, grouped in an
    /// absolutely-positioned flex container. Returns (container, description);
    /// the description still needs attaching after the container is mounted.
    fn build_moon(tree: &mut dyn VisualTree, config: &OrbitConfig) -> (NodeId, NodeId) {
        let moon = tree.create_node(NodeKind::Block);
        tree.set_attribute(moon, "class", "orbit-moon");
        tree.set_style(moon, "width", &format!("{}px", MOON_RADIUS * 2.0));
        tree.set_style(moon, "height", &format!("{}px", MOON_RADIUS * 2.0));

        let container = tree.create_node(NodeKind::Block);
        tree.set_attribute(container, "class", "orbit-moon-container");
        tree.set_style(container, "display", "flex");
        tree.set_style(container, "gap", "10px");
        tree.set_style(container, "align-items", "center");
        tree.set_style(container, "position", "absolute");
        tree.attach_child(container, moon);

        let description = tree.create_node(NodeKind::Block);
        tree.set_attribute(description, "class", "orbit-moon-description");
        tree.set_style(description, "display", "flex");
        tree.set_style(description, "flex-direction", "column");

        let title = tree.create_node(NodeKind::Label);
        tree.set_attribute(title, "class", "description-title");
        tree.set_text(title, &config.title);

        let subtitle = tree.create_node(NodeKind::Label);
        tree.set_attribute(subtitle, "class", "description-subtitle");
        tree.set_text(subtitle, &config.subtitle);

        tree.attach_child(description, title);
        tree.attach_child(description, subtitle);

        (container, description)
    }
}
