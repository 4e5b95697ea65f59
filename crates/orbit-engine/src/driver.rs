// driver.rs
//
// Tick engine for a scene. One external timer drives all orbits in lockstep:
// each tick advances every still-active interpolator and pushes the resulting
// angle into its renderer, in registration order. An orbit whose interpolator
// reports done goes inactive and stays at its terminal angle permanently.
//
// The driver itself never errors and owns no clock; whoever schedules the
// ticks (the interval runner in orbit-web, a test loop here) must stop
// calling once `tick` returns false.

use crate::scene::{OrbitScene, SceneOrbit};
use crate::tree::VisualTree;

struct ActiveOrbit {
    orbit: SceneOrbit,
    active: bool,
}

pub struct AnimationDriver {
    orbits: Vec<ActiveOrbit>,
}

impl AnimationDriver {
    pub fn new(scene: OrbitScene) -> Self {
        Self {
            orbits: scene
                .orbits
                .into_iter()
                .map(|orbit| ActiveOrbit { orbit, active: true })
                .collect(),
        }
    }

    /// Advance every active orbit by one step. Returns whether any orbit is
    /// still animating; once false, further calls do nothing.
    pub fn tick(&mut self, tree: &mut dyn VisualTree) -> bool {
        if self.is_finished() {
            return false;
        }

        for entry in self.orbits.iter_mut().filter(|e| e.active) {
            let step = entry.orbit.interp.step();
            if step.done {
                entry.active = false;
            } else {
                entry.orbit.renderer.change_angle(tree, step.angle);
            }
        }

        let running = !self.is_finished();
        if !running {
            log::debug!("driver: all orbits settled");
        }
        running
    }

    /// True once every orbit has reached its target angle.
    pub fn is_finished(&self) -> bool {
        self.orbits.iter().all(|e| !e.active)
    }

    /// Number of orbits still animating.
    pub fn active_count(&self) -> usize {
        self.orbits.iter().filter(|e| e.active).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryTree;
    use crate::orbit::OrbitConfig;
    use crate::scene::SceneConfig;
    use crate::tree::{NodeId, NodeKind};

    const GRADIENT: &str = "65% 50% at 50% 50%, #6E40F2 0%, rgba(110, 64, 242, 0) 100%";

    fn orbit(size: f32, target: f32) -> OrbitConfig {
        OrbitConfig {
            width: size,
            height: size,
            gradient: GRADIENT.into(),
            border_width: 2.0,
            start_angle_degrees: 90.0,
            target_angle_degrees: target,
            title: "t".into(),
            subtitle: "s".into(),
        }
    }

    fn driver_for(
        tree: &mut MemoryTree,
        orbits: Vec<OrbitConfig>,
        max_speed: f32,
    ) -> (AnimationDriver, NodeId) {
        let mount = tree.create_node(NodeKind::Block);
        let config = SceneConfig { max_speed, orbits };
        let scene = OrbitScene::create(tree, mount, &config).unwrap();
        (AnimationDriver::new(scene), mount)
    }

    #[test]
    fn finishes_after_the_expected_number_of_ticks() {
        let mut tree = MemoryTree::new();
        // distance 100 at speed 5 -> progress step 0.025 -> done on tick 40
        let (mut driver, _) = driver_for(&mut tree, vec![orbit(100.0, 190.0)], 5.0);

        for tick in 1..40 {
            assert!(driver.tick(&mut tree), "stopped early at tick {tick}");
        }
        assert!(!driver.tick(&mut tree));
        assert!(driver.is_finished());
    }

    #[test]
    fn orbits_retire_independently() {
        let mut tree = MemoryTree::new();
        // distances 40 and 100 -> 16 and 40 ticks
        let (mut driver, _) =
            driver_for(&mut tree, vec![orbit(80.0, 130.0), orbit(100.0, 190.0)], 5.0);

        for _ in 0..16 {
            driver.tick(&mut tree);
        }
        assert_eq!(driver.active_count(), 1);
        while driver.tick(&mut tree) {}
        assert_eq!(driver.active_count(), 0);
    }

    #[test]
    fn no_mutations_after_completion() {
        let mut tree = MemoryTree::new();
        let (mut driver, _) = driver_for(&mut tree, vec![orbit(100.0, 190.0)], 5.0);

        while driver.tick(&mut tree) {}
        let settled = tree.mutation_count();

        for _ in 0..10 {
            assert!(!driver.tick(&mut tree));
        }
        assert_eq!(tree.mutation_count(), settled);
    }

    #[test]
    fn finished_orbit_rests_at_terminal_angle() {
        let mut tree = MemoryTree::new();
        let (mut driver, mount) = driver_for(&mut tree, vec![orbit(100.0, 190.0)], 5.0);
        while driver.tick(&mut tree) {}

        // last applied angle is the step just before done, within a step of 190
        let wrapper = tree.children(mount)[0];
        let containers: Vec<_> = tree
            .find_by_kind(wrapper, NodeKind::Block)
            .into_iter()
            .filter(|&id| tree.attribute(id, "class") == Some("orbit-moon-container"))
            .collect();
        assert_eq!(containers.len(), 1);
        let left = tree.bounding_box(containers[0]).left;
        let expected = crate::geometry::position_on_ellipse(100.0, 100.0, 190.0).x - 10.0;
        assert!((left - expected).abs() < 0.5, "left {left}, expected near {expected}");
    }

    #[test]
    fn zero_distance_orbit_never_moves() {
        let mut tree = MemoryTree::new();
        let (mut driver, _) = driver_for(&mut tree, vec![orbit(100.0, 90.0)], 5.0);
        let created = tree.mutation_count();
        assert!(!driver.tick(&mut tree));
        assert_eq!(tree.mutation_count(), created);
    }
}
