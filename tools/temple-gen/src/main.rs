//! temple-gen - Greek temple asset generator
//!
//! Builds the stylized temple scene, merges it into one mesh, converts it
//! to glTF's Y-up convention, grounds it, and exports a GLB file. The
//! exported file is reloaded afterwards to print its stats.

use anyhow::{Context, Result};
use clap::Parser;
use config::constants::{TempleParams, DEFAULT_OUTPUT_PATH};
use glam::DVec3;
use std::fs;
use std::path::PathBuf;
use temple_glb::{export_glb, inspect_glb};
use temple_layout::build_temple;
use temple_mesh::{align_to_ground, z_up_to_y_up, Alignment};

#[derive(Parser)]
#[command(name = "temple-gen")]
#[command(about = "Generates the Greek temple GLB asset")]
#[command(version)]
struct Cli {
    /// Output GLB path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Ground height the temple is aligned to
    #[arg(long, default_value_t = 0.0)]
    ground: f64,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    println!("Generating Greek temple 3D model...");

    let params = TempleParams::default();
    let scene = build_temple(&params).context("Failed to assemble temple scene")?;
    tracing::info!(primitives = scene.len(), "scene assembled");

    let mut mesh = scene.merge();
    tracing::info!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "scene merged"
    );

    z_up_to_y_up(&mut mesh);
    let alignment = align_to_ground(&mut mesh, DVec3::new(0.0, cli.ground, 0.0));
    match alignment {
        Alignment::BoundingBox { offset } => {
            tracing::info!(?offset, "aligned via bounding box")
        }
        Alignment::Direct => tracing::warn!("empty mesh, aligned via direct translation"),
    }

    if let Some(parent) = cli.output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create output directory {:?}", parent))?;
        }
    }
    export_glb(&mesh, &cli.output)
        .with_context(|| format!("Failed to export GLB to {:?}", cli.output))?;

    let summary = inspect_glb(&cli.output)
        .with_context(|| format!("Failed to reload exported GLB {:?}", cli.output))?;

    println!("Greek temple model generated successfully!");
    println!("Saved to: {}", cli.output.display());
    println!("Model stats:");
    println!("   - Vertices: {}", summary.vertex_count);
    println!("   - Triangles: {}", summary.triangle_count);
    println!(
        "   - Bounds: X {:.1} to {:.1}, Y {:.1} to {:.1}, Z {:.1} to {:.1}",
        summary.min[0], summary.max[0], summary.min[1], summary.max[1], summary.min[2], summary.max[2]
    );

    Ok(())
}
