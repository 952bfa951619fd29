//! Renders the escape-time map of the classic Mandelbrot view to a PNG.
//!
//! # Usage
//!
//! ```text
//! cargo run -p mandel-dynamics --example render -- -o mandelbrot_set.png
//! RUST_LOG=mandel_dynamics=debug cargo run -p mandel-dynamics --example render
//! ```
//!
//! Points that escape quickly are light and points that stay bounded for all
//! iterations are black. Row 0 of the map is the bottom of the image.

use std::{error::Error, path::PathBuf, time::Instant};

use image::{GrayImage, Luma};
use mandel_core::{ClipBound, Plane};
use mandel_dynamics::{Config, MandelbrotDynamics};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let output = parse_output().unwrap_or_else(|usage| {
        eprintln!("{usage}");
        std::process::exit(1);
    });

    let start = Instant::now();

    let plane = Plane::default();
    let config = Config::default();
    let dynamics = MandelbrotDynamics::new(
        Some(plane.origins()),
        Some(plane.offsets()),
        ClipBound::default(),
    );
    let map = dynamics.divergence_iters(&config)?;

    let max = config.max_iters().max(1) as f64;
    let (rows, cols) = map.dim();
    let image = GrayImage::from_fn(u32::try_from(cols)?, u32::try_from(rows)?, |x, y| {
        let value = f64::from(map[[rows - 1 - y as usize, x as usize]]);
        let shade = 255.0 * (1.0 - value / max);
        Luma([shade.round().clamp(0.0, 255.0) as u8])
    });

    println!("Saving Mandelbrot set image at {}", output.display());
    image.save(&output)?;
    println!("Program done in {:.3}s", start.elapsed().as_secs_f64());

    Ok(())
}

/// Reads the output path from `-o <path>` or `--output <path>`.
fn parse_output() -> Result<PathBuf, String> {
    let mut args = std::env::args().skip(1);
    let mut output = PathBuf::from("mandelbrot_set.png");

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-o" | "--output" => {
                output = args
                    .next()
                    .map(PathBuf::from)
                    .ok_or_else(|| format!("Missing value for {arg}"))?;
            }
            other => {
                return Err(format!(
                    "Unknown argument: {other}\nUsage: render [-o <output.png>]"
                ));
            }
        }
    }

    Ok(output)
}
