use anyhow::{Context, Result};
use colored::Colorize;
use std::process::Command;
use std::time::Instant;

/// A `cargo` invocation checked by `xtask check`.
struct Step {
    label: &'static str,
    args: &'static [&'static str],
    /// Failing steps abort the run; advisory ones only report.
    required: bool,
}

const STEPS: &[Step] = &[
    Step {
        label: "layout crate (no_std, thumbv7em)",
        args: &[
            "check",
            "-p",
            "boxkit-layout",
            "--target",
            "thumbv7em-none-eabihf",
            "--no-default-features",
            "--features",
            "defmt",
        ],
        required: true,
    },
    Step {
        label: "workspace (host, all features)",
        args: &["check", "--workspace", "--all-features", "--all-targets"],
        required: true,
    },
    Step {
        label: "clippy lints",
        args: &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
        required: false,
    },
    Step {
        label: "code formatting",
        args: &["fmt", "--all", "--check"],
        required: false,
    },
];

pub fn run() -> Result<()> {
    println!();
    println!("{}", "🔍 Checking boxkit...".cyan().bold());
    println!();

    let total_start = Instant::now();
    let mut advisories = 0usize;

    for step in STEPS {
        println!("{}", format!("  Checking {}...", step.label).cyan());
        let start = Instant::now();

        let output = Command::new("cargo")
            .args(step.args)
            .output()
            .with_context(|| format!("Failed to run cargo for {}", step.label))?;

        if output.status.success() {
            println!(
                "{}",
                format!(
                    "  ✓ {} passed in {:.2}s",
                    step.label,
                    start.elapsed().as_secs_f64()
                )
                .green()
            );
        } else if step.required {
            eprintln!("{}", format!("  ✗ {} failed", step.label).red().bold());
            eprintln!();
            eprintln!("{}", String::from_utf8_lossy(&output.stderr));
            anyhow::bail!("{} failed", step.label);
        } else {
            advisories = advisories.saturating_add(1);
            eprintln!("{}", format!("  ⚠ {} reported issues", step.label).yellow().bold());
            eprintln!();
            eprintln!("{}", String::from_utf8_lossy(&output.stderr));
        }
        println!();
    }

    let summary = format!(
        "✓ All checks completed in {:.2}s ({advisories} advisory)",
        total_start.elapsed().as_secs_f64()
    );
    println!("{}", summary.green().bold());
    println!();

    Ok(())
}
