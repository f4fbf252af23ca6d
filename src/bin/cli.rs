// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Polymass CLI

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use nalgebra::Vector3;
use polymass::cli::Reporter;
use polymass::{analyze_file, check_closed, io, AnalysisConfig, MassSpec, OutputFormat, Primitive};
use std::path::Path;
use tracing::Level;

const MAX_SUBDIVISIONS: i64 = 8;

#[derive(Parser)]
#[command(name = "polymass")]
#[command(about = "Polymass - exact mass properties of closed polyhedra", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute volume, center of mass and inertia tensor
    Analyze {
        /// Input polyhedron (.stl or plain-text format)
        input: String,

        /// Total mass of the solid
        #[arg(short, long, conflicts_with = "density")]
        mass: Option<f64>,

        /// Uniform density of the solid
        #[arg(short, long)]
        density: Option<f64>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Check closedness and winding before integrating
        #[arg(long)]
        check: bool,
    },

    /// Check whether a polyhedron is closed and consistently wound
    Check {
        /// Input polyhedron
        input: String,
    },

    /// Write a primitive in the plain-text format
    Generate {
        /// Shape to generate
        #[arg(value_enum)]
        shape: Shape,

        /// Edge length (cube) or radius (octahedron, icosphere)
        #[arg(short, long, default_value = "1.0")]
        size: f64,

        /// Subdivision levels for the icosphere (20·4ⁿ faces)
        #[arg(long, default_value = "2", value_parser = clap::value_parser!(u32).range(0..=MAX_SUBDIVISIONS))]
        subdivisions: u32,

        /// Output file
        #[arg(short, long)]
        output: String,
    },

    /// Show version information
    Version,
}

#[derive(Clone, Copy, ValueEnum)]
enum Shape {
    Cube,
    Octahedron,
    Icosphere,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Analyze {
            input,
            mass,
            density,
            json,
            check,
        } => {
            let spec = mass
                .map(MassSpec::Mass)
                .or_else(|| density.map(MassSpec::Density));
            analyze_command(input, spec, *json, *check)?;
        }
        Commands::Check { input } => {
            check_command(input)?;
        }
        Commands::Generate {
            shape,
            size,
            subdivisions,
            output,
        } => {
            generate_command(*shape, *size, *subdivisions, output, cli.verbose)?;
        }
        Commands::Version => {
            println!("Polymass v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn require_input(input: &str) {
    if !Path::new(input).exists() {
        Reporter::report_error(&format!("Input file not found: {}", input));
        std::process::exit(1);
    }
}

fn analyze_command(input: &str, spec: Option<MassSpec>, json: bool, check: bool) -> Result<()> {
    require_input(input);

    let mut config = AnalysisConfig::load()?;
    if check {
        config.check_closed = true;
    }
    if json {
        config.output = OutputFormat::Json;
    }

    let start = std::time::Instant::now();
    let analysis = match analyze_file(input, spec, &config) {
        Ok(analysis) => analysis,
        Err(e) => {
            Reporter::report_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };
    let elapsed = start.elapsed();

    match config.output {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&analysis)?);
        }
        OutputFormat::Text => {
            if let Some(report) = analysis.closedness.as_ref().filter(|r| !r.is_valid()) {
                Reporter::report_warning(&format!(
                    "surface is not closed and consistently wound ({} boundary, {} non-manifold, {} misoriented edges)",
                    report.boundary_edges, report.non_manifold_edges, report.misoriented_edges
                ));
            }
            Reporter::report_mass_properties(
                input,
                &analysis.properties,
                &analysis.bounding_box,
                elapsed,
            );
        }
    }

    Ok(())
}

fn check_command(input: &str) -> Result<()> {
    require_input(input);

    let poly = io::load_polyhedron(input)?;
    let report = check_closed(&poly);
    Reporter::report_closedness(input, &report);

    if !report.is_valid() {
        std::process::exit(1);
    }

    Ok(())
}

fn generate_command(shape: Shape, size: f64, subdivisions: u32, output: &str, verbose: bool) -> Result<()> {
    let primitive = match shape {
        Shape::Cube => Primitive::cuboid(Vector3::repeat(size), false),
        Shape::Octahedron => Primitive::octahedron(size),
        Shape::Icosphere => Primitive::icosphere(size, subdivisions),
    };

    let poly = primitive.to_polyhedron()?;
    io::write_polyhedron(&poly, output)?;

    if verbose {
        println!("Vertices: {}", poly.vertex_count());
        println!("Faces: {}", poly.face_count());
    }
    Reporter::success(&format!("Wrote {}", output));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(subdivisions: &str) -> Result<Cli, clap::Error> {
        Cli::try_parse_from([
            "polymass",
            "generate",
            "icosphere",
            "--subdivisions",
            subdivisions,
            "-o",
            "sphere.poly",
        ])
    }

    #[test]
    fn test_subdivisions_bounded() {
        assert!(generate("8").is_ok());
        assert!(generate("9").is_err());
        assert!(generate("20").is_err());
    }

    #[test]
    fn test_mass_conflicts_with_density() {
        let parsed = Cli::try_parse_from(["polymass", "analyze", "a.poly", "--mass", "1", "--density", "2"]);
        assert!(parsed.is_err());
    }
}
