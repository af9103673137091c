use super::math::{Ray, Vec3};

/// Distance of the eye plane from the origin along the z axis.
pub const EYE_DISTANCE: f64 = 100.0;

/// Column and row of a pixel, row 0 is the top of the image.
pub type Pixel = (u32, u32);

/// Orthographic camera: every pixel shoots a ray with the same direction,
/// starting from its own point on a plane at `z = EYE_DISTANCE`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewPlane {
    pub width: u32,
    pub height: u32,
    pub pixel_size: f64,
}

impl ViewPlane {
    pub fn new(width: u32, height: u32, pixel_size: f64) -> Self {
        Self {
            width,
            height,
            pixel_size,
        }
    }

    pub fn resolution(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn direction() -> Vec3 {
        Vec3::new(0.0, 0.0, -1.0)
    }

    /// Create the ray passing through the center of the given pixel.
    pub fn ray_for(&self, column: u32, row: u32) -> Ray {
        let half_width = self.width as f64 / 2.0;
        let half_height = self.height as f64 / 2.0;
        let origin = Vec3::new(
            self.pixel_size * (column as f64 - half_width + 0.5),
            self.pixel_size * (half_height - row as f64 - 0.5),
            EYE_DISTANCE,
        );
        Ray::new(origin, Self::direction())
    }

    pub fn row(&self, row: u32) -> impl Iterator<Item = (Ray, Pixel)> + '_ {
        (0..self.width).map(move |column| (self.ray_for(column, row), (column, row)))
    }

    /// Lazily enumerate the rows of the grid, top row first. Each call starts
    /// a new traversal.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = (Ray, Pixel)> + '_> + '_ {
        (0..self.height).map(move |row| self.row(row))
    }

    /// All the rays of the grid in row-major order.
    pub fn rays(&self) -> impl Iterator<Item = (Ray, Pixel)> + '_ {
        self.rows().flatten()
    }
}
