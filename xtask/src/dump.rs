//! xtask dump: lay out a JSON scenario and print where every child lands.
//!
//! ```json
//! {
//!   "axis": "horizontal",
//!   "width": 220,
//!   "height": 40,
//!   "config": { "spacing": 5, "align": "center" },
//!   "children": [
//!     { "label": "icon", "hint": { "fixed": [50, 20] } },
//!     { "label": "title", "hint": { "flexible": [50, 20] }, "props": { "flex": 1.0 } },
//!     { "label": "clock", "hint": { "min_width": 30, "width": 50, "max_width": 60,
//!                                   "min_height": 20, "height": 20, "max_height": 20 } }
//!   ]
//! }
//! ```
//!
//! `RUST_LOG=boxkit_layout=trace` prints the engine's flex and placement trace
//! to stderr.

use std::path::Path;

use anyhow::{Context, Result};
use boxkit_layout::prelude::*;
use colored::Colorize;
use embedded_graphics::primitives::Rectangle;
use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Largest scenario `dump` can lay out.
const DUMP_CAPACITY: usize = 64;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Scenario {
    axis: Axis,
    width: i32,
    height: i32,
    #[serde(default)]
    config: BoxConfig,
    #[serde(default)]
    children: Vec<ChildSpec>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ChildSpec {
    label: String,
    hint: HintSpec,
    #[serde(default)]
    props: LayoutProperties,
    /// Whether the child may be stretched along the container's axis.
    #[serde(default = "stretch_by_default")]
    stretch: bool,
}

fn stretch_by_default() -> bool {
    true
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum HintSpec {
    Fixed { fixed: (u32, u32) },
    Flexible { flexible: (u32, u32) },
    Full(SizeHint),
}

impl HintSpec {
    fn resolve(&self) -> Result<SizeHint, LayoutError> {
        match *self {
            Self::Fixed { fixed: (w, h) } => Ok(SizeHint::fixed(w, h)),
            Self::Flexible { flexible: (w, h) } => Ok(SizeHint::flexible(w, h)),
            Self::Full(h) => SizeHint::try_new(
                h.min_width,
                h.width,
                h.max_width,
                h.min_height,
                h.height,
                h.max_height,
            ),
        }
    }
}

/// Leaf widget standing in for a scenario child.
#[derive(Debug)]
struct DumpWidget {
    hint: SizeHint,
    stretch: bool,
}

impl Widget for DumpWidget {
    fn size_hint(&self) -> SizeHint {
        self.hint
    }

    fn can_stretch(&self, _axis: Axis) -> bool {
        self.stretch
    }

    // Placements are read from the layout result.
    fn set_rect(&mut self, _bounds: Rectangle) {}
}

#[derive(Debug, Serialize)]
pub(crate) struct Report {
    axis: Axis,
    available: (i32, i32),
    size_hint: SizeHint,
    used_main: i32,
    align_offset: i32,
    children: Vec<Row>,
}

#[derive(Debug, Serialize)]
struct Row {
    index: usize,
    label: String,
    bounds: Option<RowBounds>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
struct RowBounds {
    x: i32,
    y: i32,
    width: u32,
    height: u32,
}

impl From<Rectangle> for RowBounds {
    fn from(rect: Rectangle) -> Self {
        Self {
            x: rect.top_left.x,
            y: rect.top_left.y,
            width: rect.size.width,
            height: rect.size.height,
        }
    }
}

/// Entry point called from main.rs
pub fn run(path: &Path, json: bool) -> Result<()> {
    init_tracing();

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read scenario '{}'", path.display()))?;
    let scenario: Scenario = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse scenario '{}'", path.display()))?;
    let report = lay_out(&scenario)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Build the container described by `scenario` and lay it out.
pub(crate) fn lay_out(scenario: &Scenario) -> Result<Report> {
    if scenario.children.len() > DUMP_CAPACITY {
        anyhow::bail!(
            "Scenario has {} children; dump supports at most {DUMP_CAPACITY}",
            scenario.children.len()
        );
    }

    let mut container: BoxLayout<DumpWidget, DUMP_CAPACITY> =
        BoxLayout::with_config(scenario.axis, scenario.config);
    for child in &scenario.children {
        let hint = child.hint.resolve().map_err(|e| {
            anyhow::anyhow!("Child '{}' has a malformed size hint: {e}", child.label)
        })?;
        let widget = DumpWidget {
            hint,
            stretch: child.stretch,
        };
        if container.add(widget, child.props).is_err() {
            anyhow::bail!("Container full at child '{}'", child.label);
        }
    }

    let size_hint = container.size_hint();
    let result = container.layout(scenario.width, scenario.height);

    let children = result
        .placements
        .iter()
        .map(|p| Row {
            index: p.index,
            label: scenario
                .children
                .get(p.index)
                .map(|c| c.label.clone())
                .unwrap_or_default(),
            bounds: p.bounds.map(RowBounds::from),
        })
        .collect();

    Ok(Report {
        axis: scenario.axis,
        available: (scenario.width, scenario.height),
        size_hint,
        used_main: result.used_main,
        align_offset: result.align_offset,
        children,
    })
}

fn print_report(report: &Report) {
    println!();
    println!(
        "{}",
        format!(
            "📐 {} box in {}×{}",
            report.axis, report.available.0, report.available.1
        )
        .cyan()
        .bold()
    );
    let hint = report.size_hint;
    println!(
        "   {}",
        format!(
            "size hint: width {}/{}/{}, height {}/{}/{}",
            hint.min_width, hint.width, hint.max_width, hint.min_height, hint.height, hint.max_height
        )
        .dimmed()
    );
    println!(
        "   {}",
        format!(
            "used {} on the main axis, alignment offset {}",
            report.used_main, report.align_offset
        )
        .dimmed()
    );
    println!();

    let width = report
        .children
        .iter()
        .map(|row| row.label.len())
        .max()
        .unwrap_or(0);
    for row in &report.children {
        match row.bounds {
            Some(b) => println!(
                "  {} {:<width$}  x={:<5} y={:<5} w={:<5} h={}",
                "✓".green(),
                row.label,
                b.x,
                b.y,
                b.width,
                b.height
            ),
            None => println!(
                "  {} {:<width$}  {}",
                "✗".red(),
                row.label,
                "excluded".red()
            ),
        }
    }
    println!();
}
