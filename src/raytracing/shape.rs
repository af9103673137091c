use super::math::{Ray, Vec3};

/// Tolerance used by the plane test, both for parallel rays and for hits too
/// close to the ray origin.
pub const EPSILON: f64 = 1e-4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    pub hit_point: Vec3,
    // no shape computes a normal yet, this is always None
    pub normal: Option<Vec3>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Sphere {
        center: Vec3,
        radius: f64,
        radius2: f64,
    },
    Plane {
        center: Vec3,
        normal: Vec3,
    },
    Box,
}

impl Shape {
    pub fn sphere(center: Vec3, radius: f64) -> Shape {
        Shape::Sphere {
            center,
            radius,
            radius2: radius * radius,
        }
    }

    /// A plane through `center`. The normal does not need to be unit length.
    pub fn plane(center: Vec3, normal: Vec3) -> Shape {
        Shape::Plane { center, normal }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shape::Sphere { .. } => "sphere",
            Shape::Plane { .. } => "plane",
            Shape::Box => "box",
        }
    }

    pub fn hit(&self, ray: &Ray) -> Option<HitRecord> {
        match self {
            Shape::Sphere {
                center, radius2, ..
            } => hit_sphere(*center, *radius2, ray),
            Shape::Plane { center, normal } => hit_plane(*center, *normal, ray),
            // placeholder, boxes are never hit
            Shape::Box => None,
        }
    }
}

fn hit_sphere(center: Vec3, radius2: f64, ray: &Ray) -> Option<HitRecord> {
    // geometric solution, see
    // https://www.scratchapixel.com/lessons/3d-basic-rendering/minimal-ray-tracer-rendering-simple-shapes/ray-sphere-intersection
    let l = center - ray.origin;
    let tca = l.dot(ray.direction);
    // the center projects behind the origin: treated as a miss even when the
    // origin is inside the sphere
    if tca < 0.0 {
        return None;
    }

    // squared distance between the center and the closest point on the ray
    let d2 = l.squared_len() - tca * tca;
    if d2 > radius2 {
        return None;
    }

    // only the near root, the far one (tca + thc) is never used
    let thc = (radius2 - d2).sqrt();
    let t0 = tca - thc;

    Some(HitRecord {
        hit_point: ray.at(t0),
        normal: None,
    })
}

fn hit_plane(center: Vec3, normal: Vec3, ray: &Ray) -> Option<HitRecord> {
    let denom = normal.dot(ray.direction);
    // ray and plane are parallel
    if denom.abs() <= EPSILON {
        return None;
    }
    let t = (center - ray.origin).dot(normal) / denom;
    if t <= EPSILON {
        return None;
    }
    Some(HitRecord {
        hit_point: ray.at(t),
        normal: None,
    })
}
