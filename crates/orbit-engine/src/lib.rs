pub mod driver;
pub mod error;
pub mod geometry;
pub mod gradient;
pub mod interp;
pub mod memory;
pub mod orbit;
pub mod scene;
pub mod tree;

// Re-export key types at crate root for convenience
pub use driver::AnimationDriver;
pub use error::{ConfigError, OrbitResult};
pub use geometry::position_on_ellipse;
pub use gradient::{GradientParseError, GradientSpec, GradientStop};
pub use interp::{AngleInterpolator, Step};
pub use memory::MemoryTree;
pub use orbit::{OrbitConfig, OrbitRenderer, MOON_RADIUS};
pub use scene::{OrbitScene, SceneConfig};
pub use tree::{BoundingBox, NodeId, NodeKind, VisualTree};
