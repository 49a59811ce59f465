//! Ready-made strategy implementations for common resource models.

mod additive;

pub use additive::{AdditiveExtension, ComponentwiseDominance, ResourceDelta, VertexWindows};
