// config.rs
//
// Static data for the marketing stats scene: three concentric orbits sharing
// one gradient, each settling at its own angle.

use orbit_engine::{OrbitConfig, SceneConfig};

pub const MAX_SPEED: f32 = 5.0;

const START_ANGLE: f32 = 90.0;
const GRADIENT: &str = "65% 50% at 50% 50%, #6E40F2 0%, rgba(110, 64, 242, 0) 100%";

pub fn scene_config() -> SceneConfig {
    let mut orbits = vec![
        stat_orbit(1238.0, 190.0, "5 years", "on the market"),
        stat_orbit(976.0, 170.0, "$864 000", "changed this month"),
        stat_orbit(736.0, 130.0, "3545", "users"),
    ];
    // smallest first, so inner moons stack above the outer ellipses
    orbits.reverse();

    SceneConfig {
        max_speed: MAX_SPEED,
        orbits,
    }
}

fn stat_orbit(size: f32, target_angle: f32, title: &str, subtitle: &str) -> OrbitConfig {
    OrbitConfig {
        width: size,
        height: size,
        gradient: GRADIENT.to_string(),
        border_width: 2.0,
        start_angle_degrees: START_ANGLE,
        target_angle_degrees: target_angle,
        title: title.to_string(),
        subtitle: subtitle.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orbit_engine::{GradientSpec, MemoryTree, NodeKind, OrbitScene, VisualTree};

    #[test]
    fn scene_is_three_orbits_smallest_first() {
        let config = scene_config();
        assert_eq!(config.orbits.len(), 3);
        assert_eq!(config.orbits[0].width, 736.0);
        assert_eq!(config.orbits[2].width, 1238.0);
        assert!(config.orbits.iter().all(|o| o.start_angle_degrees == 90.0));
    }

    #[test]
    fn shared_gradient_parses() {
        let gradient = GradientSpec::parse(GRADIENT).unwrap();
        assert_eq!(gradient.stops.len(), 2);
    }

    #[test]
    fn scene_renders_headless() {
        let mut tree = MemoryTree::new();
        let mount = tree.create_node(NodeKind::Block);
        let scene = OrbitScene::create(&mut tree, mount, &scene_config()).unwrap();
        assert_eq!(scene.len(), 3);
        // innermost 736px orbit is offset to the shared center
        let wrappers = tree.children(mount);
        assert_eq!(tree.style(wrappers[0], "left"), Some("251px"));
    }
}
