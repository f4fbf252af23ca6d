// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! CLI output reporter with colored formatting

use crate::geometry::{BoundingBox, ClosednessReport};
use crate::mass::MassProperties;
use colored::*;
use std::time::Duration;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Report computed mass properties
    pub fn report_mass_properties(
        file: &str,
        props: &MassProperties,
        bbox: &BoundingBox,
        duration: Duration,
    ) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "File:".bold(), file.cyan());
        println!("{}", "━".repeat(80).bright_black());

        Self::print_value("Volume", &format!("{:.9}", props.volume));
        Self::print_value("Mass", &format!("{:.9}", props.mass));
        Self::print_value("Density", &format!("{:.9}", props.density));

        let c = &props.center_of_mass;
        Self::print_value(
            "Center of mass",
            &format!("({:.9}, {:.9}, {:.9})", c.x, c.y, c.z),
        );

        let size = bbox.size();
        Self::print_value(
            "Extent",
            &format!("{:.4} × {:.4} × {:.4}", size.x, size.y, size.z),
        );

        println!("\n{}", "Inertia tensor (about center of mass):".bold());
        for row in props.inertia.row_iter() {
            println!(
                "  [{} {} {}]",
                format!("{:>15.9}", row[0]).cyan(),
                format!("{:>15.9}", row[1]).cyan(),
                format!("{:>15.9}", row[2]).cyan()
            );
        }

        let principal = props.principal_inertia();
        Self::print_value(
            "Principal moments",
            &format!(
                "{:.9}, {:.9}, {:.9}",
                principal.moments.x, principal.moments.y, principal.moments.z
            ),
        );

        println!(
            "\n  {} {}",
            "Time:".bright_black(),
            Self::format_duration(duration).yellow()
        );
        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report closedness diagnostics
    pub fn report_closedness(file: &str, report: &ClosednessReport) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "File:".bold(), file.cyan());
        println!("{}", "━".repeat(80).bright_black());

        if report.is_valid() {
            println!(
                "{} {}",
                "✅".green(),
                "Surface is closed and consistently wound".green().bold()
            );
        } else {
            println!(
                "{} {}",
                "❌".red(),
                "Surface is not a valid closed solid".red().bold()
            );
        }

        Self::print_count("Edges", report.edge_count, false);
        Self::print_count("Boundary edges", report.boundary_edges, true);
        Self::print_count("Non-manifold edges", report.non_manifold_edges, true);
        Self::print_count("Misoriented edges", report.misoriented_edges, true);
        Self::print_value(
            "Euler characteristic",
            &report.euler_characteristic.to_string(),
        );

        println!("{}", "━".repeat(80).bright_black());
    }

    /// Report error
    pub fn report_error(message: &str) {
        eprintln!("\n{} {}", "❌ Error:".red().bold(), message);
    }

    /// Report warning
    pub fn report_warning(message: &str) {
        println!("\n{} {}", "⚠️  Warning:".yellow().bold(), message);
    }

    /// Print success message
    pub fn success(message: &str) {
        println!("{} {}", "✅".green(), message.green());
    }

    fn print_value(name: &str, value: &str) {
        println!("  {} {}", format!("{}:", name).bright_black(), value.cyan());
    }

    /// Counts that should be zero are red when they are not
    fn print_count(name: &str, count: usize, should_be_zero: bool) {
        let value = count.to_string();
        let formatted = if !should_be_zero {
            value.cyan()
        } else if count == 0 {
            value.green()
        } else {
            value.red()
        };
        println!("  {} {}", format!("{}:", name).bright_black(), formatted);
    }

    /// Format duration for display
    fn format_duration(duration: Duration) -> String {
        let micros = duration.as_micros();

        if micros < 1_000 {
            format!("{}µs", micros)
        } else if micros < 1_000_000 {
            format!("{:.2}ms", micros as f64 / 1_000.0)
        } else {
            format!("{:.2}s", micros as f64 / 1_000_000.0)
        }
    }
}
