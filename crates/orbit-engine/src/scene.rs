// scene.rs
//
// Assembles a set of orbits into one shared mount point, centered on the
// largest orbit's bounding box, and pairs each renderer with its angle
// interpolator. One scene is the unit the animation driver works on: a
// single orbit is just a scene of length one.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, OrbitResult};
use crate::interp::AngleInterpolator;
use crate::orbit::{OrbitConfig, OrbitRenderer};
use crate::tree::{NodeId, NodeKind, VisualTree};

/// Full animation run description: every orbit plus the shared sweep speed.
/// Read once at scene creation, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Initial sweep speed shared by all orbits, degrees per tick.
    pub max_speed: f32,
    pub orbits: Vec<OrbitConfig>,
}

impl SceneConfig {
    /// Parse a scene config from a JSON string.
    pub fn from_json(json: &str) -> OrbitResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

#[derive(Debug)]
pub(crate) struct SceneOrbit {
    pub renderer: OrbitRenderer,
    pub interp: AngleInterpolator,
}

/// All rendered orbits of one animation run, in registration order.
#[derive(Debug)]
pub struct OrbitScene {
    pub(crate) orbits: Vec<SceneOrbit>,
}

impl OrbitScene {
    /// Render every configured orbit under `mount`. Each orbit gets its own
    /// absolutely-positioned wrapper offset by `((max_w - w)/2, (max_h - h)/2)`
    /// so smaller orbits nest concentrically inside the largest one.
    ///
    /// All-or-nothing: the first invalid orbit aborts scene creation.
    pub fn create(
        tree: &mut dyn VisualTree,
        mount: NodeId,
        config: &SceneConfig,
    ) -> OrbitResult<Self> {
        if !(config.max_speed > 0.0) || !config.max_speed.is_finite() {
            return Err(ConfigError::InvalidSpeed(config.max_speed));
        }
        if !tree.is_attachable(mount) {
            return Err(ConfigError::InvalidMount);
        }
        for orbit in &config.orbits {
            orbit.validate()?;
            crate::gradient::GradientSpec::parse(&orbit.gradient)?;
        }

        let max_w = config.orbits.iter().map(|o| o.width).fold(0.0, f32::max);
        let max_h = config.orbits.iter().map(|o| o.height).fold(0.0, f32::max);

        let mut orbits = Vec::with_capacity(config.orbits.len());
        for orbit in &config.orbits {
            let wrapper = tree.create_node(NodeKind::Block);
            tree.set_attribute(wrapper, "class", "orbit-wrapper");
            tree.set_style(wrapper, "position", "absolute");
            tree.set_style(wrapper, "left", &format!("{}px", (max_w - orbit.width) / 2.0));
            tree.set_style(wrapper, "top", &format!("{}px", (max_h - orbit.height) / 2.0));
            tree.attach_child(mount, wrapper);

            let renderer =
                OrbitRenderer::create(tree, wrapper, orbit, orbit.start_angle_degrees)?;
            let interp = AngleInterpolator::new(
                orbit.start_angle_degrees,
                orbit.target_angle_degrees,
                config.max_speed,
            );
            orbits.push(SceneOrbit { renderer, interp });
        }

        log::info!(
            "scene: {} orbit(s) created, max_speed {}",
            orbits.len(),
            config.max_speed
        );
        Ok(Self { orbits })
    }

    pub fn len(&self) -> usize {
        self.orbits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orbits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryTree;

    const GRADIENT: &str = "65% 50% at 50% 50%, #6E40F2 0%, rgba(110, 64, 242, 0) 100%";

    fn orbit(size: f32, target: f32) -> OrbitConfig {
        OrbitConfig {
            width: size,
            height: size,
            gradient: GRADIENT.into(),
            border_width: 2.0,
            start_angle_degrees: 90.0,
            target_angle_degrees: target,
            title: "title".into(),
            subtitle: "subtitle".into(),
        }
    }

    fn three_orbit_config() -> SceneConfig {
        SceneConfig {
            max_speed: 5.0,
            orbits: vec![orbit(736.0, 130.0), orbit(976.0, 170.0), orbit(1238.0, 190.0)],
        }
    }

    #[test]
    fn orbits_are_centered_on_the_largest() {
        let mut tree = MemoryTree::new();
        let mount = tree.create_node(NodeKind::Block);
        let scene = OrbitScene::create(&mut tree, mount, &three_orbit_config()).unwrap();
        assert_eq!(scene.len(), 3);

        let wrappers = tree.children(mount);
        assert_eq!(wrappers.len(), 3);
        assert_eq!(tree.style(wrappers[0], "left"), Some("251px")); // (1238-736)/2
        assert_eq!(tree.style(wrappers[1], "left"), Some("131px")); // (1238-976)/2
        assert_eq!(tree.style(wrappers[2], "left"), Some("0px"));
        assert_eq!(tree.style(wrappers[0], "top"), Some("251px"));
    }

    #[test]
    fn invalid_speed_is_rejected() {
        let mut tree = MemoryTree::new();
        let mount = tree.create_node(NodeKind::Block);
        let mut config = three_orbit_config();
        config.max_speed = 0.0;
        let err = OrbitScene::create(&mut tree, mount, &config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSpeed(_)));
    }

    #[test]
    fn any_invalid_orbit_aborts_the_scene() {
        let mut tree = MemoryTree::new();
        let mount = tree.create_node(NodeKind::Block);
        let mut config = three_orbit_config();
        config.orbits[2].height = -1.0;
        let err = OrbitScene::create(&mut tree, mount, &config).unwrap_err();
        assert!(matches!(err, ConfigError::NonPositive { field: "height", .. }));
        // validation runs before any node is built
        assert!(tree.children(mount).is_empty());
    }

    #[test]
    fn bad_gradient_aborts_before_building() {
        let mut tree = MemoryTree::new();
        let mount = tree.create_node(NodeKind::Block);
        let mut config = three_orbit_config();
        config.orbits[1].gradient = "not a gradient".into();
        let err = OrbitScene::create(&mut tree, mount, &config).unwrap_err();
        assert!(matches!(err, ConfigError::Gradient(_)));
        assert!(tree.children(mount).is_empty());
    }

    #[test]
    fn scene_config_parses_from_json() {
        let json = r#"{
            "max_speed": 5.0,
            "orbits": [{
                "width": 736.0,
                "height": 736.0,
                "gradient": "65% 50% at 50% 50%, #6E40F2 0%, rgba(110, 64, 242, 0) 100%",
                "border_width": 2.0,
                "start_angle_degrees": 90.0,
                "target_angle_degrees": 130.0,
                "title": "3545",
                "subtitle": "users"
            }]
        }"#;
        let config = SceneConfig::from_json(json).unwrap();
        assert_eq!(config.orbits.len(), 1);
        assert_eq!(config.orbits[0].title, "3545");
    }
}
