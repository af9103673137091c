use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;

mod config;
mod logging;
mod raytracing;
use config::{ColorSpec, PlaneSpec, RenderConfig, SphereSpec};
use raytracing::render::render;

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// the path where is saved the rendered image, the format follows the extension
    #[arg(short, long, default_value = "output.bmp")]
    output: PathBuf,
    /// horizontal resolution in pixels
    #[arg(long, default_value_t = 640)]
    width: u32,
    /// vertical resolution in pixels
    #[arg(long, default_value_t = 480)]
    height: u32,
    /// size of a pixel on the view plane, in world units
    #[arg(long, default_value_t = 1.0)]
    pixel_size: f64,
    /// background color as "R,G,B" with channels in [0, 1]
    #[arg(long, default_value = "0,0,0", allow_hyphen_values = true)]
    background: ColorSpec,
    /// add a sphere "X,Y,Z,R", can be repeated
    #[arg(long = "sphere", allow_hyphen_values = true)]
    spheres: Vec<SphereSpec>,
    /// add a plane "CX,CY,CZ,NX,NY,NZ", can be repeated
    #[arg(long = "plane", allow_hyphen_values = true)]
    planes: Vec<PlaneSpec>,
    /// number of placeholder boxes appended to the scene
    #[arg(long, default_value_t = 0)]
    boxes: usize,
    /// do not add the default sphere when no sphere or plane is given,
    /// an empty scene renders only the background
    #[arg(long)]
    no_default_shape: bool,
    /// increase logging verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl From<Args> for RenderConfig {
    fn from(args: Args) -> Self {
        RenderConfig {
            output: args.output,
            width: args.width,
            height: args.height,
            pixel_size: args.pixel_size,
            background: args.background,
            spheres: args.spheres,
            planes: args.planes,
            boxes: args.boxes,
            default_shape: !args.no_default_shape,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::init_logging(args.verbose);

    let config = RenderConfig::from(args);
    let scene = config.build_scene()?;
    let (width, height) = scene.view_plane.resolution();
    log::info!(
        "rendering {} shapes at {}x{} (pixel size {})",
        scene.shapes.len(),
        width,
        height,
        scene.view_plane.pixel_size
    );

    let start = Instant::now();
    let buffer = render(&scene);
    log::info!(
        "rendering is ready... it took {:.2} seconds",
        start.elapsed().as_secs_f64()
    );

    buffer
        .save(&config.output)
        .with_context(|| format!("cannot save the image to {}", config.output.display()))?;
    log::info!("saved {}", config.output.display());
    Ok(())
}
