use super::math::{Ray, Vec3};
use super::scene::Scene;
use super::shape::{HitRecord, Shape};

/// Color returned for any ray that hits a shape.
pub const HIT_COLOR: Vec3 = Vec3 {
    x: 1.0,
    y: 0.0,
    z: 0.0,
};

pub struct Tracer<'a> {
    scene: &'a Scene,
}

impl<'a> Tracer<'a> {
    pub fn new(scene: &'a Scene) -> Self {
        Self { scene }
    }

    /// Query the shapes in scene order and stop at the first hit, whatever
    /// its distance from the camera.
    pub fn first_hit(&self, ray: &Ray) -> Option<(&'a Shape, HitRecord)> {
        self.scene
            .shapes
            .iter()
            .find_map(|shape| shape.hit(ray).map(|record| (shape, record)))
    }

    /// Flat shading: `HIT_COLOR` if any shape is hit, the background otherwise.
    pub fn trace_ray(&self, ray: &Ray) -> Vec3 {
        match self.first_hit(ray) {
            Some(_) => HIT_COLOR,
            None => self.scene.background_color,
        }
    }
}
