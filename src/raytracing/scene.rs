use super::camera::ViewPlane;
use super::math::Vec3;
use super::shape::Shape;

/// Shapes are kept in insertion order: the tracer stops at the first one
/// that is hit, so order decides which shape wins where they overlap.
#[derive(Debug, Clone)]
pub struct Scene {
    pub shapes: Vec<Shape>,
    pub background_color: Vec3,
    pub view_plane: ViewPlane,
}

impl Scene {
    /// An empty scene with a black background.
    pub fn new(view_plane: ViewPlane) -> Self {
        Self {
            shapes: Vec::new(),
            background_color: Vec3::zero(),
            view_plane,
        }
    }

    pub fn with_background(mut self, color: Vec3) -> Self {
        self.background_color = color;
        self
    }

    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.add(shape);
        self
    }

    pub fn add(&mut self, shape: Shape) {
        log::debug!("adding {} #{}: {:?}", shape.name(), self.shapes.len(), shape);
        self.shapes.push(shape);
    }
}

impl Default for Scene {
    /// A 640x480 view of a single sphere of radius 20 at the origin.
    fn default() -> Self {
        Scene::new(ViewPlane::new(640, 480, 1.0)).with_shape(Shape::sphere(Vec3::zero(), 20.0))
    }
}
