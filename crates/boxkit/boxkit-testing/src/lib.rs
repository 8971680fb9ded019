//! Box Layout Testing Utilities
//!
//! Headless testing API for box layouts: recording widgets, label-based
//! queries and text golden files.
//!
//! # Quick start
//!
//! ```
//! use boxkit_testing::{TestHarness, TestWidget};
//! use boxkit_layout::prelude::*;
//!
//! let mut t: TestHarness = TestHarness::hbox();
//! t.push(TestWidget::fixed("logo", 40, 20)).unwrap();
//! t.push(TestWidget::flexible("title", 60, 20)).unwrap();
//! t.layout(200, 20);
//!
//! t.assert_bounds("logo", (0, 0), (40, 20)).unwrap();
//! t.assert_bounds("title", (45, 0), (155, 20)).unwrap();
//! ```
//!
//! # Golden layout dumps
//!
//! ```no_run
//! # use boxkit_testing::TestHarness;
//! # let mut t: TestHarness = TestHarness::hbox();
//! # t.layout(100, 20);
//! // First run: set UPDATE_GOLDEN=1 to create/update the reference file.
//! t.assert_matches_golden("tests/golden/my_row.txt").unwrap();
//! ```

#![warn(clippy::all)]
#![warn(clippy::dbg_macro)]
#![warn(clippy::print_stdout)]
#![allow(clippy::module_name_repetitions)]
// Testing lib: arithmetic is on small fixture values
#![allow(clippy::arithmetic_side_effects)]

use std::cell::Cell;
use std::fmt::Write as _;
use std::path::Path;

use boxkit_layout::align::Align;
use boxkit_layout::container::{BoxLayout, LayoutResult};
use boxkit_layout::props::LayoutProperties;
use boxkit_layout::size_hint::SizeHint;
use boxkit_layout::widget::{Axis, Widget};
use embedded_graphics::primitives::Rectangle;

/// Default child capacity of a [`TestHarness`].
pub const HARNESS_CAPACITY: usize = 16;

// ─────────────────────────────────────────────────────────────────────────────
// TestWidget
// ─────────────────────────────────────────────────────────────────────────────

/// A labelled widget that records everything the layout engine tells it.
#[derive(Debug, Clone, PartialEq)]
pub struct TestWidget {
    /// Identifier used by the harness queries.
    pub label: String,
    hint: SizeHint,
    stretch_horizontal: bool,
    stretch_vertical: bool,
    bounds: Option<Rectangle>,
    included: Option<bool>,
    set_rect_calls: usize,
    size_hint_calls: Cell<usize>,
}

impl TestWidget {
    /// Create a widget reporting an arbitrary hint.
    pub fn with_hint(label: &str, hint: SizeHint) -> Self {
        Self {
            label: label.to_string(),
            hint,
            stretch_horizontal: true,
            stretch_vertical: true,
            bounds: None,
            included: None,
            set_rect_calls: 0,
            size_hint_calls: Cell::new(0),
        }
    }

    /// Create a widget that cannot grow or shrink.
    pub fn fixed(label: &str, width: u32, height: u32) -> Self {
        Self::with_hint(label, SizeHint::fixed(width, height))
    }

    /// Create a widget with a preferred size, no minimum and no maximum.
    pub fn flexible(label: &str, width: u32, height: u32) -> Self {
        Self::with_hint(label, SizeHint::flexible(width, height))
    }

    /// Allow or forbid stretching along `axis`.
    pub fn stretch(mut self, axis: Axis, allowed: bool) -> Self {
        match axis {
            Axis::Horizontal => self.stretch_horizontal = allowed,
            Axis::Vertical => self.stretch_vertical = allowed,
        }
        self
    }

    /// Change the reported hint, as a widget whose content changed would.
    pub fn set_hint(&mut self, hint: SizeHint) {
        self.hint = hint;
    }

    /// Rectangle from the last `set_rect` call.
    pub fn bounds(&self) -> Option<Rectangle> {
        self.bounds
    }

    /// `Some(true)` if last included, `Some(false)` if last excluded,
    /// `None` if never laid out.
    pub fn included(&self) -> Option<bool> {
        self.included
    }

    /// Number of `set_rect` calls received.
    pub fn set_rect_calls(&self) -> usize {
        self.set_rect_calls
    }

    /// Number of times the hint was queried.
    pub fn size_hint_calls(&self) -> usize {
        self.size_hint_calls.get()
    }
}

impl Widget for TestWidget {
    fn size_hint(&self) -> SizeHint {
        self.size_hint_calls.set(self.size_hint_calls.get() + 1);
        self.hint
    }

    fn can_stretch(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.stretch_horizontal,
            Axis::Vertical => self.stretch_vertical,
        }
    }

    fn set_rect(&mut self, bounds: Rectangle) {
        self.bounds = Some(bounds);
        self.set_rect_calls += 1;
    }

    fn include(&mut self) {
        self.included = Some(true);
    }

    fn exclude(&mut self) {
        self.included = Some(false);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TestHarness
// ─────────────────────────────────────────────────────────────────────────────

/// Box container of [`TestWidget`]s with label-based assertions.
///
/// Derefs to [`BoxLayout`], so every container method is available.
pub struct TestHarness<const N: usize = HARNESS_CAPACITY> {
    inner: BoxLayout<TestWidget, N>,
    last: Option<LayoutResult<N>>,
    area: (i32, i32),
}

impl<const N: usize> TestHarness<N> {
    /// Wrap an existing container.
    pub fn new(container: BoxLayout<TestWidget, N>) -> Self {
        Self {
            inner: container,
            last: None,
            area: (0, 0),
        }
    }

    /// Harness around an empty HBox.
    pub fn hbox() -> Self {
        Self::new(BoxLayout::hbox())
    }

    /// Harness around an empty VBox.
    pub fn vbox() -> Self {
        Self::new(BoxLayout::vbox())
    }

    /// Add a widget with properties; fails with a message when full.
    pub fn add(&mut self, widget: TestWidget, props: LayoutProperties) -> Result<usize, String> {
        self.inner
            .add(widget, props)
            .map_err(|w| format!("Container full: cannot add '{}' (capacity {N})", w.label))
    }

    /// Add a widget with default properties.
    pub fn push(&mut self, widget: TestWidget) -> Result<usize, String> {
        self.add(widget, LayoutProperties::new())
    }

    /// Run a layout pass and keep its result.
    pub fn layout(&mut self, width: i32, height: i32) -> &LayoutResult<N> {
        self.area = (width, height);
        self.last.insert(self.inner.layout(width, height))
    }

    /// Result of the last layout pass.
    pub fn last_result(&self) -> Option<&LayoutResult<N>> {
        self.last.as_ref()
    }

    // ── Queries ─────────────────────────────────────────────────────────────

    /// Index of the widget with `label`.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.inner.children().iter().position(|w| w.label == label)
    }

    /// Widget with `label`.
    pub fn query(&self, label: &str) -> Option<&TestWidget> {
        self.inner.children().iter().find(|w| w.label == label)
    }

    /// Labels in layout order of the last pass.
    pub fn layout_order(&self) -> Vec<&str> {
        let Some(result) = &self.last else {
            return Vec::new();
        };
        result
            .placements
            .iter()
            .filter_map(|p| self.inner.child(p.index))
            .map(|w| w.label.as_str())
            .collect()
    }

    // ── Assertions ──────────────────────────────────────────────────────────

    fn require(&self, label: &str) -> Result<&TestWidget, String> {
        self.query(label)
            .ok_or_else(|| format!("Widget '{label}' not found"))
    }

    /// Assert that `label` was placed at `position` with `size`.
    pub fn assert_bounds(
        &self,
        label: &str,
        position: (i32, i32),
        size: (u32, u32),
    ) -> Result<(), String> {
        let widget = self.require(label)?;
        if widget.included() != Some(true) {
            return Err(format!("assert_bounds('{label}'): widget is not included"));
        }
        let bounds = widget
            .bounds()
            .ok_or_else(|| format!("assert_bounds('{label}'): widget was never placed"))?;
        let actual_position = (bounds.top_left.x, bounds.top_left.y);
        let actual_size = (bounds.size.width, bounds.size.height);
        if actual_position == position && actual_size == size {
            Ok(())
        } else {
            Err(format!(
                "assert_bounds('{label}'): expected {position:?} {size:?}, got {actual_position:?} {actual_size:?}"
            ))
        }
    }

    /// Assert that `label` was included by the last pass.
    pub fn assert_included(&self, label: &str) -> Result<(), String> {
        match self.require(label)?.included() {
            Some(true) => Ok(()),
            Some(false) => Err(format!("Widget '{label}' was excluded")),
            None => Err(format!("Widget '{label}' was never laid out")),
        }
    }

    /// Assert that `label` was excluded by the last pass.
    pub fn assert_excluded(&self, label: &str) -> Result<(), String> {
        match self.require(label)?.included() {
            Some(false) => Ok(()),
            Some(true) => Err(format!("Widget '{label}' was included")),
            None => Err(format!("Widget '{label}' was never laid out")),
        }
    }

    /// Assert the main-axis extent used by the last pass.
    pub fn assert_used_main(&self, expected: i32) -> Result<(), String> {
        let result = self
            .last
            .as_ref()
            .ok_or_else(|| "No layout pass has run".to_string())?;
        if result.used_main == expected {
            Ok(())
        } else {
            Err(format!(
                "assert_used_main: expected {expected}, got {}",
                result.used_main
            ))
        }
    }

    /// Assert the layout order of the last pass.
    pub fn assert_order(&self, expected: &[&str]) -> Result<(), String> {
        let actual = self.layout_order();
        if actual == expected {
            Ok(())
        } else {
            Err(format!("assert_order: expected {expected:?}, got {actual:?}"))
        }
    }

    // ── Golden dumps ────────────────────────────────────────────────────────

    /// Text dump of the last pass: one header line, then one line per child
    /// in layout order.
    pub fn snapshot(&self) -> String {
        let config = self.inner.config();
        let mut out = String::new();
        let kind = match self.inner.axis() {
            Axis::Horizontal => "hbox",
            Axis::Vertical => "vbox",
        };
        let _ = writeln!(
            out,
            "{kind} {}x{} spacing={} align={} reversed={}",
            self.area.0,
            self.area.1,
            config.spacing,
            align_name(config.align),
            config.reversed
        );

        let Some(result) = &self.last else {
            out.push_str("(not laid out)\n");
            return out;
        };
        let _ = writeln!(
            out,
            "used={} align_offset={}",
            result.used_main, result.align_offset
        );
        for placement in &result.placements {
            let label = self
                .inner
                .child(placement.index)
                .map_or("?", |w| w.label.as_str());
            match placement.bounds {
                Some(b) => {
                    let _ = writeln!(
                        out,
                        "[{}] {label} x={} y={} w={} h={}",
                        placement.index, b.top_left.x, b.top_left.y, b.size.width, b.size.height
                    );
                }
                None => {
                    let _ = writeln!(out, "[{}] {label} excluded", placement.index);
                }
            }
        }
        out
    }

    /// Write the current snapshot to `path`.
    pub fn save_golden(&self, path: impl AsRef<Path>) -> Result<(), Box<dyn std::error::Error>> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.snapshot())?;
        Ok(())
    }

    /// Compare the current snapshot against a golden file.
    ///
    /// Set the `UPDATE_GOLDEN=1` environment variable to **update** the golden
    /// file instead of comparing:
    ///
    /// ```text
    /// UPDATE_GOLDEN=1 cargo test
    /// ```
    pub fn assert_matches_golden(&self, golden_path: impl AsRef<Path>) -> Result<(), String> {
        let golden_path = golden_path.as_ref();

        if std::env::var("UPDATE_GOLDEN").is_ok() {
            return self.save_golden(golden_path).map_err(|e| {
                format!(
                    "Failed to save golden '{p}': {e}",
                    p = golden_path.display()
                )
            });
        }

        let golden = std::fs::read_to_string(golden_path).map_err(|e| {
            format!(
                "Failed to open golden '{}': {e}\nRun with UPDATE_GOLDEN=1 to create it.",
                golden_path.display()
            )
        })?;

        let current = self.snapshot();
        let golden = golden.replace("\r\n", "\n");
        if current == golden {
            return Ok(());
        }

        let mut report = format!("Snapshot differs from golden '{}':\n", golden_path.display());
        for (line, (want, got)) in golden.lines().zip(current.lines()).enumerate() {
            if want != got {
                let _ = writeln!(report, "  line {}: expected `{want}`, got `{got}`", line + 1);
            }
        }
        let (want, got) = (golden.lines().count(), current.lines().count());
        if want != got {
            let _ = writeln!(report, "  expected {want} lines, got {got}");
        }
        Err(report)
    }

    /// The wrapped container.
    pub fn container(&self) -> &BoxLayout<TestWidget, N> {
        &self.inner
    }

    /// The wrapped container, mutably.
    pub fn container_mut(&mut self) -> &mut BoxLayout<TestWidget, N> {
        &mut self.inner
    }
}

impl<const N: usize> std::ops::Deref for TestHarness<N> {
    type Target = BoxLayout<TestWidget, N>;
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<const N: usize> std::ops::DerefMut for TestHarness<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

fn align_name(align: Align) -> &'static str {
    match align {
        Align::Start => "start",
        Align::Center => "center",
        Align::End => "end",
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_records_layout() {
        let mut w = TestWidget::fixed("a", 10, 10);
        assert_eq!(w.included(), None);
        w.set_rect(Rectangle::default());
        w.include();
        assert_eq!(w.included(), Some(true));
        assert_eq!(w.set_rect_calls(), 1);
        w.exclude();
        assert_eq!(w.included(), Some(false));
    }

    #[test]
    fn test_widget_counts_hint_queries() {
        let w = TestWidget::flexible("a", 10, 10);
        let _ = w.size_hint();
        let _ = w.size_hint();
        assert_eq!(w.size_hint_calls(), 2);
    }

    #[test]
    fn test_widget_stretch_flags() {
        let w = TestWidget::fixed("a", 1, 1).stretch(Axis::Vertical, false);
        assert!(w.can_stretch(Axis::Horizontal));
        assert!(!w.can_stretch(Axis::Vertical));
    }

    #[test]
    fn test_harness_full_reports_label() {
        let mut t: TestHarness<1> = TestHarness::hbox();
        assert!(t.push(TestWidget::fixed("a", 1, 1)).is_ok());
        let err = t.push(TestWidget::fixed("b", 1, 1)).unwrap_err();
        assert!(err.contains("'b'"), "{err}");
    }

    #[test]
    fn test_snapshot_before_layout() {
        let t: TestHarness = TestHarness::vbox();
        assert_eq!(
            t.snapshot(),
            "vbox 0x0 spacing=5 align=start reversed=false\n(not laid out)\n"
        );
    }

    #[test]
    fn test_assertions_report_mismatch() {
        let mut t: TestHarness = TestHarness::hbox();
        t.push(TestWidget::fixed("a", 10, 10)).unwrap();
        t.layout(100, 10);
        assert!(t.assert_bounds("a", (0, 0), (10, 10)).is_ok());
        let err = t.assert_bounds("a", (1, 0), (10, 10)).unwrap_err();
        assert!(err.contains("expected (1, 0)"), "{err}");
        assert!(t.assert_bounds("missing", (0, 0), (0, 0)).is_err());
        assert!(t.assert_excluded("a").is_err());
    }
}
