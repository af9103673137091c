pub mod camera;
pub mod error;
pub mod math;
pub mod render;
pub mod scene;
pub mod shape;
pub mod tracer;

pub use math::*;
