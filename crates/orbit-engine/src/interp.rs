// interp.rs
//
// Quadratic ease-out angle interpolation.
//
// Models motion that starts at the configured maximum speed and slows
// linearly to zero at the target: v(t) = max_speed · (1 - t), which
// integrates to the quadratic position curve angle(t) = start + distance · (2t - t²).
// No wall clock is read; each `step()` advances a normalized progress value
// by a fixed increment chosen at construction, so the sequence of angles is
// deterministic and reaches the target in a bounded number of steps.

/// One interpolation step result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub angle: f32,
    pub done: bool,
}

/// Stateful generator of eased angle values from a start angle toward a
/// target angle. The direction of travel is fixed at construction.
#[derive(Debug, Clone)]
pub struct AngleInterpolator {
    start: f32,
    distance: f32,
    /// Fixed per-step progress increment.
    increment: f32,
    /// Normalized progress in [0, 1].
    progress: f32,
}

impl AngleInterpolator {
    /// Build an interpolator sweeping from `start_angle` to `target_angle`
    /// with initial speed `max_speed` (degrees per step, must be positive).
    ///
    /// A zero-distance sweep is legal: the first `step()` reports the start
    /// angle with `done = true`.
    pub fn new(start_angle: f32, target_angle: f32, max_speed: f32) -> Self {
        debug_assert!(max_speed > 0.0, "max_speed must be positive, got {max_speed}");
        let distance = target_angle - start_angle;
        // d(angle)/d(step) at t=0 is distance · 2 · increment, so this
        // increment makes the first step move at exactly max_speed.
        let increment = if distance == 0.0 {
            1.0
        } else {
            max_speed / (2.0 * distance.abs())
        };
        Self {
            start: start_angle,
            distance,
            increment,
            progress: 0.0,
        }
    }

    /// Advance one step and return the eased angle.
    ///
    /// Once `done` has been reported, every further call returns the same
    /// terminal angle with `done = true`.
    pub fn step(&mut self) -> Step {
        self.progress = (self.progress + self.increment).min(1.0);
        let t = self.progress;
        Step {
            angle: self.start + self.distance * (2.0 * t - t * t),
            done: t >= 1.0,
        }
    }

    /// Whether the sweep has reached its target.
    pub fn is_done(&self) -> bool {
        self.progress >= 1.0
    }
}
