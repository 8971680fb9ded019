//! Box Layout System
//!
//! One-dimensional box layout for embedded and desktop UIs: children are
//! arranged in a row (HBox) or a column (VBox), stretched by flex weight
//! and aligned on both axes.
//!
//! # Architecture
//!
//! - Core types: [`SizeHint`](size_hint::SizeHint), [`Align`](align::Align),
//!   [`LayoutProperties`](props::LayoutProperties), [`BoxConfig`](config::BoxConfig)
//! - Algorithms: flex distribution, margin collapsing, alignment
//! - Containers: [`BoxLayout`](container::BoxLayout) for both orientations
//! - Widgets: the [`Widget`](widget::Widget) trait and a [`Spacer`](widget::Spacer)
//!
//! # Example
//!
//! ```
//! use boxkit_layout::prelude::*;
//!
//! let mut row: BoxLayout<Spacer, 4> = BoxLayout::hbox();
//! row.push(Spacer::new(50, 20)).unwrap();
//! row.add(Spacer::flexible(), LayoutProperties::new().flex(1.0)).unwrap();
//! row.push(Spacer::new(50, 20)).unwrap();
//!
//! let result = row.layout(240, 20);
//! assert_eq!(result.bounds(2).unwrap().top_left.x, 190);
//! ```
//!
//! # Features
//!
//! - `std`: links the standard library
//! - `serde`: `Serialize`/`Deserialize` for the configuration types
//! - `defmt`: `defmt::Format` for the configuration types

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod align;
pub mod config;
pub mod container;
pub mod error;
pub mod flex;
pub mod margin;
pub mod props;
pub mod size_hint;
pub mod widget;

pub mod prelude {
    //! Commonly used types.

    pub use crate::align::Align;
    pub use crate::config::{BoxConfig, MAX_SIZE};
    pub use crate::container::{BoxLayout, ChildPlacement, LayoutResult};
    pub use crate::error::LayoutError;
    pub use crate::props::LayoutProperties;
    pub use crate::size_hint::SizeHint;
    pub use crate::widget::{Axis, Spacer, Widget};
}

pub use error::LayoutError;
