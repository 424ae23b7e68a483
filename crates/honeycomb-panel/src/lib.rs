//! Honeycomb Panel
//!
//! Turns a data frame into a honeycomb: one hexagon per row, packed as large
//! as the panel allows, colored and sized by field values.
//!
//! # Architecture
//!
//! - **Grouping**: split rows by a categorical field, or keep them in "All"
//! - **Grid**: tile the panel into one cell per group
//! - **Packing**: run the optimizer on each cell's hexagon area
//! - **Styling**: color, size and links through a [`FieldDisplay`]
//!
//! Drawing is left to the caller. [`PanelLayout`] carries every position,
//! radius and color, and serializes to JSON for a browser front end.
//!
//! # Usage
//!
//! ```
//! use honeycomb_panel::{compose, DataFrame, Field, PanelOptions};
//!
//! let frame = DataFrame::new(vec![
//!     Field::text("host", ["a", "b", "c"]),
//!     Field::number("cpu", vec![0.2, 0.9, 0.5]),
//! ]);
//! let panel = compose(&frame, &PanelOptions::default(), 400.0, 300.0)?;
//! assert_eq!(panel.hexagon_count(), 3);
//! # Ok::<(), honeycomb_panel::PanelError>(())
//! ```

mod compose;
mod display;
mod error;
mod frame;
mod grouping;
mod menu;
mod options;

pub use compose::{
    cell_at, cell_center, cell_for, compose, grid_columns, size_factor, ApproxTextMeasure,
    ComposeConfig, Composer, GroupContent, GroupGrid, GroupLayout, PanelLayout, Rect,
    StyledHexagon, TextMeasure,
};
pub use display::{normalize, DataLink, DisplayValue, FieldDisplay, LinkTarget, PlainDisplay};
pub use error::{PanelError, Result};
pub use frame::{DataFrame, Field, FieldConfig, FieldType, FieldValues, LinkTemplate};
pub use grouping::{group_indexes, Group, Groups, ALL_GROUP};
pub use menu::{ContextMenu, MenuGroup, MenuItem};
pub use options::PanelOptions;
