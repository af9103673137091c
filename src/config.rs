use std::path::PathBuf;
use std::str::FromStr;

use crate::raytracing::camera::ViewPlane;
use crate::raytracing::error::{ConfigError, Result};
use crate::raytracing::scene::Scene;
use crate::raytracing::shape::Shape;
use crate::raytracing::Vec3;

fn finite(name: &'static str, v: Vec3) -> Result<Vec3> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ConfigError::InvalidVector(name, v.x, v.y, v.z))
    }
}

fn parse_floats<const N: usize>(input: &str, expected: &'static str) -> Result<[f64; N]> {
    let error = || ConfigError::Parse {
        input: input.to_string(),
        expected,
    };
    let mut values = [0.0; N];
    let mut parts = input.split(',');
    for value in values.iter_mut() {
        let part = parts.next().ok_or_else(error)?;
        *value = part.trim().parse::<f64>().map_err(|_| error())?;
    }
    if parts.next().is_some() {
        return Err(error());
    }
    Ok(values)
}

/// `X,Y,Z,R`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereSpec {
    pub center: Vec3,
    pub radius: f64,
}

impl FromStr for SphereSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let [x, y, z, radius] = parse_floats::<4>(s, "a sphere 'X,Y,Z,R'")?;
        Ok(SphereSpec {
            center: Vec3::new(x, y, z),
            radius,
        })
    }
}

/// `CX,CY,CZ,NX,NY,NZ`: a point on the plane followed by its normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneSpec {
    pub center: Vec3,
    pub normal: Vec3,
}

impl FromStr for PlaneSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let [cx, cy, cz, nx, ny, nz] = parse_floats::<6>(s, "a plane 'CX,CY,CZ,NX,NY,NZ'")?;
        Ok(PlaneSpec {
            center: Vec3::new(cx, cy, cz),
            normal: Vec3::new(nx, ny, nz),
        })
    }
}

/// `R,G,B` with channels in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSpec(pub Vec3);

impl FromStr for ColorSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        let rgb = parse_floats::<3>(s, "a color 'R,G,B'")?;
        Ok(ColorSpec(rgb.into()))
    }
}

/// Everything needed to build a scene and save its rendering.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
    pub pixel_size: f64,
    pub background: ColorSpec,
    pub spheres: Vec<SphereSpec>,
    pub planes: Vec<PlaneSpec>,
    pub boxes: usize,
    /// Fall back to the default sphere when no sphere or plane is given.
    pub default_shape: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("output.bmp"),
            width: 640,
            height: 480,
            pixel_size: 1.0,
            background: ColorSpec(Vec3::zero()),
            spheres: Vec::new(),
            planes: Vec::new(),
            boxes: 0,
            default_shape: true,
        }
    }
}

impl RenderConfig {
    fn view_plane(&self) -> Result<ViewPlane> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyResolution(self.width, self.height));
        }
        if !self.pixel_size.is_finite() || self.pixel_size <= 0.0 {
            return Err(ConfigError::InvalidPixelSize(self.pixel_size));
        }
        Ok(ViewPlane::new(self.width, self.height, self.pixel_size))
    }

    fn background(&self) -> Result<Vec3> {
        let color = self.background.0;
        let in_range = |c: f64| (0.0..=1.0).contains(&c);
        if !(in_range(color.x) && in_range(color.y) && in_range(color.z)) {
            return Err(ConfigError::InvalidColor(color.x, color.y, color.z));
        }
        Ok(color)
    }

    /// Check every parameter and assemble the scene: spheres first, then
    /// planes, then boxes, each group in the given order. Without any sphere
    /// or plane the scene holds the default sphere, unless `default_shape`
    /// is off.
    pub fn build_scene(&self) -> Result<Scene> {
        let mut scene = Scene::new(self.view_plane()?).with_background(self.background()?);

        if self.default_shape && self.spheres.is_empty() && self.planes.is_empty() {
            scene.shapes = Scene::default().shapes;
        }
        for sphere in &self.spheres {
            if !sphere.radius.is_finite() || sphere.radius <= 0.0 {
                return Err(ConfigError::InvalidRadius(sphere.radius));
            }
            let center = finite("sphere center", sphere.center)?;
            scene.add(Shape::sphere(center, sphere.radius));
        }
        for plane in &self.planes {
            let center = finite("plane center", plane.center)?;
            let normal = finite("plane normal", plane.normal)?;
            if normal.len() == 0.0 {
                return Err(ConfigError::DegenerateNormal);
            }
            scene.add(Shape::plane(center, normal));
        }
        for _ in 0..self.boxes {
            scene.add(Shape::Box);
        }
        Ok(scene)
    }
}
