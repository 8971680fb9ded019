use anyhow::{Context, Result};
use colored::Colorize;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

/// Library crates with public API docs, as `(package, rustdoc dir)`.
const CRATES: &[(&str, &str)] = &[
    ("boxkit-layout", "boxkit_layout"),
    ("boxkit-testing", "boxkit_testing"),
];

pub fn run(open: bool) -> Result<()> {
    println!();
    println!("{}", "📚 Building API docs...".cyan().bold());
    println!();

    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.args(["doc", "--no-deps", "--all-features"])
        // Broken intra-doc links fail the build
        .env("RUSTDOCFLAGS", "-D warnings");
    for (package, _) in CRATES {
        cmd.args(["-p", package]);
    }
    if open {
        cmd.arg("--open");
    }

    let output = cmd.output().context("Failed to run cargo doc")?;
    if !output.status.success() {
        eprintln!("{}", "✗ rustdoc reported errors".red().bold());
        eprintln!();
        eprintln!("{}", String::from_utf8_lossy(&output.stderr));
        anyhow::bail!("Documentation build failed");
    }

    println!(
        "{}",
        format!("✓ Docs built in {:.2}s", start.elapsed().as_secs_f64()).green()
    );
    println!();

    let doc_root = Path::new("target").join("doc");
    for (package, index) in index_pages(&doc_root) {
        if index.exists() {
            println!("   {} {}", package.bold(), index.display().to_string().dimmed());
        } else {
            println!("   {} {}", package.bold(), "missing index.html".yellow());
        }
    }

    println!();

    Ok(())
}

/// Expected `index.html` of every documented crate under `doc_root`.
fn index_pages(doc_root: &Path) -> Vec<(&'static str, PathBuf)> {
    CRATES
        .iter()
        .map(|&(package, dir)| (package, doc_root.join(dir).join("index.html")))
        .collect()
}
