use image::{ImageBuffer, Rgb, RgbImage};

use super::math::Vec3;
use super::scene::Scene;
use super::tracer::Tracer;

impl From<Vec3> for Rgb<u8> {
    // channels are expected in [0, 1]; the cast truncates toward zero
    fn from(value: Vec3) -> Self {
        let r = (value.x * 255.0) as u8;
        let g = (value.y * 255.0) as u8;
        let b = (value.z * 255.0) as u8;
        Rgb([r, g, b])
    }
}

/// Trace every pixel of the scene's view plane and return the whole image.
pub fn render(scene: &Scene) -> RgbImage {
    let view_plane = &scene.view_plane;
    let (width, height) = view_plane.resolution();
    let mut buffer: RgbImage = ImageBuffer::new(width, height);
    let tracer = Tracer::new(scene);

    for (ray, (column, row)) in view_plane.rays() {
        let color = tracer.trace_ray(&ray);
        buffer.put_pixel(column, row, color.into());
        if column + 1 == width {
            log::trace!("row {}/{} done", row + 1, height);
        }
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::super::camera::ViewPlane;
    use super::super::shape::Shape;
    use super::*;

    #[test]
    fn test_color_conversion_truncates() {
        assert_eq!(Rgb::<u8>::from(Vec3::new(1.0, 0.0, 0.0)), Rgb([255, 0, 0]));
        assert_eq!(Rgb::<u8>::from(Vec3::new(0.5, 0.999, 0.1)), Rgb([127, 254, 25]));
    }

    #[test]
    fn test_buffer_has_scene_resolution() {
        let scene = Scene::new(ViewPlane::new(13, 7, 1.0));
        let image = render(&scene);
        assert_eq!(image.dimensions(), (13, 7));
        assert!(image.pixels().all(|pixel| *pixel == Rgb([0, 0, 0])));
    }

    #[test]
    fn test_background_fills_empty_scene() {
        let scene = Scene::new(ViewPlane::new(4, 4, 1.0)).with_background(Vec3::new(0.0, 0.0, 1.0));
        let image = render(&scene);
        assert!(image.pixels().all(|pixel| *pixel == Rgb([0, 0, 255])));
    }

    #[test]
    fn test_sphere_mask() {
        // 10x10 grid of unit pixels, sphere of radius 3 in the middle
        let scene = Scene::new(ViewPlane::new(10, 10, 1.0)).with_shape(Shape::sphere(Vec3::zero(), 3.0));
        let image = render(&scene);
        let red = Rgb([255, 0, 0]);
        let black = Rgb([0, 0, 0]);
        // pixel (4, 4) has its center at (-0.5, 0.5)
        assert_eq!(*image.get_pixel(4, 4), red);
        assert_eq!(*image.get_pixel(5, 5), red);
        assert_eq!(*image.get_pixel(0, 0), black);
        assert_eq!(*image.get_pixel(9, 9), black);

        let hits = image.pixels().filter(|pixel| **pixel == red).count();
        let expected = scene
            .view_plane
            .rays()
            .filter(|(ray, _)| {
                let (x, y) = (ray.origin.x, ray.origin.y);
                x * x + y * y <= 9.0
            })
            .count();
        assert_eq!(hits, expected);
    }

    #[test]
    fn test_every_pixel_matches_its_ray() {
        let scene = Scene::new(ViewPlane::new(9, 5, 0.75))
            .with_shape(Shape::sphere(Vec3::new(1.0, 0.5, 0.0), 2.0))
            .with_background(Vec3::new(0.0, 1.0, 0.0));
        let image = render(&scene);
        let tracer = Tracer::new(&scene);
        for (column, row, pixel) in image.enumerate_pixels() {
            let ray = scene.view_plane.ray_for(column, row);
            assert_eq!(*pixel, Rgb::<u8>::from(tracer.trace_ray(&ray)));
        }
    }

    #[test]
    fn test_top_row_is_positive_y() {
        // sphere shifted up, only the top row of pixels is covered
        let scene = Scene::new(ViewPlane::new(2, 2, 1.0)).with_shape(Shape::sphere(Vec3::new(0.0, 5.0, 0.0), 4.6));
        let image = render(&scene);
        assert_eq!(*image.get_pixel(0, 0), Rgb([255, 0, 0]));
        assert_eq!(*image.get_pixel(1, 0), Rgb([255, 0, 0]));
        assert_eq!(*image.get_pixel(0, 1), Rgb([0, 0, 0]));
        assert_eq!(*image.get_pixel(1, 1), Rgb([0, 0, 0]));
    }
}
