//! Panel composition: groups → sub-rectangles → packed, styled hexagons.
//!
//! The panel is tiled into one cell per group. Inside each cell a margin and
//! a label band are reserved, the optimizer packs the group's items into the
//! rest, and item `i` takes grid cell `(i mod cols, i div cols)`.

use honeycomb_geometry::{
    axial_to_pixel, cube_to_offset, hexagon_corners, offset_to_cube, pixel_to_axial, Cube, Layout,
    Optimizer, Point, SearchConfig, HEXAGON_CORNERS,
};
use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::display::{normalize, DataLink, DisplayValue, FieldDisplay, PlainDisplay};
use crate::error::{PanelError, Result};
use crate::frame::{DataFrame, Field};
use crate::grouping::{group_indexes, Group, Groups};
use crate::options::PanelOptions;

/// Fixed dimensions of a group cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComposeConfig {
    /// Inset on every side of a group cell, in pixels
    pub margin: f64,
    /// Height of the label band above the hexagons, in pixels
    pub label_height: f64,
    /// Font size used to center the label, in pixels
    pub font_size: f64,
    /// Radius search used for every group; staggered so odd rows stay
    /// inside the hexagon area
    pub search: SearchConfig,
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            margin: 10.0,
            label_height: 20.0,
            font_size: 14.0,
            search: SearchConfig::staggered(),
        }
    }
}

/// Measures label widths for centering.
pub trait TextMeasure {
    fn width(&self, text: &str, font_size: f64) -> f64;
}

/// Average advance of a proportional sans-serif glyph, relative to font size.
const AVERAGE_ADVANCE: f64 = 0.55;

/// Width estimate without font metrics.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxTextMeasure;

impl TextMeasure for ApproxTextMeasure {
    fn width(&self, text: &str, font_size: f64) -> f64 {
        text.chars().count() as f64 * font_size * AVERAGE_ADVANCE
    }
}

/// An axis-aligned rectangle in panel space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Shrink by `amount` on every side.
    pub fn inset(&self, amount: f64) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            width: self.width - 2.0 * amount,
            height: self.height - 2.0 * amount,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }
}

/// Number of group columns for a panel of the given aspect ratio.
///
/// Tall panels (aspect < 0.5) stack groups in one column. Otherwise one
/// more column than the rounded-up aspect ratio, capped at the group count.
/// Never zero, so an empty panel still divides cleanly.
pub fn grid_columns(aspect_ratio: f64, group_count: usize) -> usize {
    if aspect_ratio.is_nan() || aspect_ratio < 0.5 {
        return 1;
    }
    let by_aspect = if aspect_ratio.is_finite() {
        (aspect_ratio.ceil() as usize).saturating_add(1)
    } else {
        usize::MAX
    };
    by_aspect.min(group_count).max(1)
}

/// Tiling of the panel into equal group cells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GroupGrid {
    pub columns: usize,
    pub rows: usize,
    pub cell_width: f64,
    pub cell_height: f64,
}

impl GroupGrid {
    pub fn new(width: f64, height: f64, group_count: usize) -> Self {
        let columns = grid_columns(width / height, group_count);
        let rows = group_count.div_ceil(columns).max(1);
        Self {
            columns,
            rows,
            cell_width: width / columns as f64,
            cell_height: height / rows as f64,
        }
    }

    /// Rectangle of the `index`-th group, filled row by row.
    pub fn cell(&self, index: usize) -> Rect {
        Rect {
            x: (index % self.columns) as f64 * self.cell_width,
            y: (index / self.columns) as f64 * self.cell_height,
            width: self.cell_width,
            height: self.cell_height,
        }
    }
}

/// Grid cell of the `index`-th item for a layout `cols` wide.
pub fn cell_for(index: usize, cols: usize) -> Cube {
    Cube::from_xz((index % cols) as i64, (index / cols) as i64)
}

/// Offset that keeps the first column and the first row inside the area.
/// Odd rows shift left by r, so multi-row grids move right by a full column.
fn grid_shift(layout: &Layout) -> (f64, f64) {
    let dx = if layout.rows > 1 {
        2.0 * layout.inner_radius
    } else {
        layout.inner_radius
    };
    (dx, layout.outer_radius)
}

/// Center of `cell` relative to the top-left corner of the hexagon area.
pub fn cell_center(cell: Cube, layout: &Layout) -> Point {
    let (dx, dy) = grid_shift(layout);
    axial_to_pixel(cube_to_offset(cell), layout.outer_radius).translate(dx, dy)
}

/// Grid cell under `local`, a point relative to the hexagon area.
pub fn cell_at(local: Point, layout: &Layout) -> Option<Cube> {
    let (dx, dy) = grid_shift(layout);
    let hex = pixel_to_axial(local.translate(-dx, -dy), layout.outer_radius).round();
    let cell = offset_to_cube(hex);

    let in_cols = (0..layout.cols as i64).contains(&cell.x);
    let in_rows = (0..layout.rows as i64).contains(&cell.z);
    (in_cols && in_rows).then_some(cell)
}

/// Normalized size of `row` in [0, 1]; 1 when it cannot be normalized.
pub fn size_factor(field: &Field, row: usize) -> f64 {
    field
        .values
        .number(row)
        .zip(field.range())
        .and_then(|(v, (min, max))| normalize(v, min, max))
        .map_or(1.0, |t| t.clamp(0.0, 1.0))
}

/// One item ready to draw.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledHexagon {
    /// Row of the item in the data frame
    pub row_index: usize,
    pub cell: Cube,
    /// Center in panel space
    pub center: Point,
    /// Circumradius after size scaling and padding
    pub radius: f64,
    /// Circumradius of the background hexagon, when enabled
    pub background_radius: Option<f64>,
    pub color: String,
    pub value: DisplayValue,
    pub links: Vec<DataLink>,
}

impl StyledHexagon {
    pub fn corners(&self) -> [Point; HEXAGON_CORNERS] {
        hexagon_corners(self.center, self.radius)
    }

    pub fn background_corners(&self) -> Option<[Point; HEXAGON_CORNERS]> {
        self.background_radius
            .map(|radius| hexagon_corners(self.center, radius))
    }
}

/// Result of packing one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum GroupContent {
    /// The group fit; one hexagon per item in group order.
    Placed {
        layout: Layout,
        hexagons: Vec<StyledHexagon>,
    },
    /// The group is too small for its items ("Unable to display").
    Unfit,
}

/// A group's share of the panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupLayout {
    pub label: String,
    /// Whole cell assigned by the grid
    pub cell: Rect,
    /// Cell minus the margin
    pub chart: Rect,
    /// Chart minus the label band; hexagons are packed here
    pub hex_area: Rect,
    /// Baseline start of the centered label
    pub label_position: Point,
    pub content: GroupContent,
}

impl GroupLayout {
    pub fn layout(&self) -> Option<&Layout> {
        match &self.content {
            GroupContent::Placed { layout, .. } => Some(layout),
            GroupContent::Unfit => None,
        }
    }

    pub fn hexagons(&self) -> &[StyledHexagon] {
        match &self.content {
            GroupContent::Placed { hexagons, .. } => hexagons,
            GroupContent::Unfit => &[],
        }
    }

    pub fn is_unfit(&self) -> bool {
        matches!(self.content, GroupContent::Unfit)
    }

    /// Hexagon whose grid cell contains `point` (panel space).
    ///
    /// Points outside the hexagon area never hit.
    pub fn hexagon_at(&self, point: Point) -> Option<&StyledHexagon> {
        if !self.hex_area.contains(point) {
            return None;
        }
        let layout = self.layout()?;
        let origin = self.hex_area.origin();
        let cell = cell_at(point.translate(-origin.x, -origin.y), layout)?;
        let index = cell.z as usize * layout.cols + cell.x as usize;
        self.hexagons().get(index)
    }
}

/// Everything a presentation layer needs to draw the panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelLayout {
    pub width: f64,
    pub height: f64,
    /// Raw name of the value field
    pub value_field: String,
    /// Display name of the value field
    pub value_field_display: String,
    pub grid: GroupGrid,
    pub groups: Vec<GroupLayout>,
    /// Bounding boxes to draw when guides are enabled
    pub guides: Vec<Rect>,
}

impl PanelLayout {
    pub fn hexagon_count(&self) -> usize {
        self.groups.iter().map(|g| g.hexagons().len()).sum()
    }

    /// Group and hexagon under `point` (panel space).
    pub fn hexagon_at(&self, point: Point) -> Option<(&GroupLayout, &StyledHexagon)> {
        self.groups
            .iter()
            .find_map(|group| group.hexagon_at(point).map(|hex| (group, hex)))
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Fields resolved from the options.
struct Fields<'f> {
    value: &'f Field,
    color: &'f Field,
    size: Option<&'f Field>,
}

fn ensure_numeric(field: &Field) -> Result<&Field> {
    if field.is_numeric() {
        Ok(field)
    } else {
        Err(PanelError::NotNumeric(field.name.clone()))
    }
}

fn field_or_value<'f>(
    frame: &'f DataFrame,
    name: Option<&str>,
    value: &'f Field,
    role: &str,
) -> Result<&'f Field> {
    let Some(name) = name else {
        return Ok(value);
    };
    match frame.field(name) {
        Some(field) => ensure_numeric(field),
        None => {
            warn!("{} field {:?} not found, using value field {:?}", role, name, value.name);
            Ok(value)
        }
    }
}

impl<'f> Fields<'f> {
    fn resolve(frame: &'f DataFrame, options: &PanelOptions) -> Result<Self> {
        let value = match options.value_field_name.as_deref() {
            Some(name) => frame
                .field(name)
                .ok_or_else(|| PanelError::UnknownField(name.to_string()))?,
            None => frame.first_numeric().ok_or(PanelError::MissingValueField)?,
        };
        let value = ensure_numeric(value)?;

        let color = field_or_value(frame, options.color_by_field.as_deref(), value, "color")?;
        let size = if options.enable_size_by_field {
            Some(field_or_value(frame, options.size_by_field.as_deref(), value, "size")?)
        } else {
            None
        };

        Ok(Self { value, color, size })
    }
}

fn groups_for(frame: &DataFrame, options: &PanelOptions) -> Result<Groups> {
    let Some(name) = options.group_by_field.as_deref() else {
        return Ok(Groups::all(frame.len()));
    };
    let field = frame
        .field(name)
        .ok_or_else(|| PanelError::UnknownField(name.to_string()))?;
    Ok(group_indexes(
        (0..frame.len()).map(|row| field.values.label(row).unwrap_or_default()),
    ))
}

/// Builds [`PanelLayout`]s from frames and options.
#[derive(Debug, Clone)]
pub struct Composer<D = PlainDisplay, M = ApproxTextMeasure> {
    config: ComposeConfig,
    optimizer: Optimizer,
    display: D,
    measure: M,
}

impl Composer {
    /// Create a composer with the built-in display and text measure.
    pub fn new(config: ComposeConfig) -> Result<Self> {
        Ok(Self {
            optimizer: Optimizer::new(config.search)?,
            config,
            display: PlainDisplay,
            measure: ApproxTextMeasure,
        })
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self {
            config: ComposeConfig::default(),
            optimizer: Optimizer::default(),
            display: PlainDisplay,
            measure: ApproxTextMeasure,
        }
    }
}

impl<D: FieldDisplay, M: TextMeasure> Composer<D, M> {
    /// Swap in the host's formatting.
    pub fn with_display<E: FieldDisplay>(self, display: E) -> Composer<E, M> {
        Composer {
            config: self.config,
            optimizer: self.optimizer,
            display,
            measure: self.measure,
        }
    }

    /// Swap in real font metrics.
    pub fn with_measure<N: TextMeasure>(self, measure: N) -> Composer<D, N> {
        Composer {
            config: self.config,
            optimizer: self.optimizer,
            display: self.display,
            measure,
        }
    }

    pub fn config(&self) -> &ComposeConfig {
        &self.config
    }

    /// Lay out `frame` in a `width` × `height` panel.
    ///
    /// Fails only when the options cannot be applied to the frame. Groups
    /// that do not fit come back as [`GroupContent::Unfit`].
    pub fn compose(
        &self,
        frame: &DataFrame,
        options: &PanelOptions,
        width: f64,
        height: f64,
    ) -> Result<PanelLayout> {
        options.validate()?;
        let fields = Fields::resolve(frame, options)?;
        let groups = groups_for(frame, options)?;
        let grid = GroupGrid::new(width, height, groups.len());

        debug!(
            "Composing {} rows in {} groups on a {}x{} grid ({}x{} px)",
            frame.len(),
            groups.len(),
            grid.columns,
            grid.rows,
            width,
            height
        );

        let groups: Vec<GroupLayout> = groups
            .iter()
            .enumerate()
            .map(|(i, group)| self.compose_group(group, grid.cell(i), &fields, options))
            .collect();

        let guides = if options.guides {
            std::iter::once(Rect::new(0.0, 0.0, width, height))
                .chain(groups.iter().flat_map(|g| [g.chart, g.hex_area]))
                .collect()
        } else {
            Vec::new()
        };

        Ok(PanelLayout {
            width,
            height,
            value_field: fields.value.name.clone(),
            value_field_display: fields.value.display_name().to_string(),
            grid,
            groups,
            guides,
        })
    }

    fn compose_group(
        &self,
        group: &Group,
        cell: Rect,
        fields: &Fields<'_>,
        options: &PanelOptions,
    ) -> GroupLayout {
        let chart = cell.inset(self.config.margin);
        let hex_area = Rect {
            y: chart.y + self.config.label_height,
            height: chart.height - self.config.label_height,
            ..chart
        };

        let label_width = self.measure.width(&group.label, self.config.font_size);
        let label_position = Point::new(
            chart.x + chart.width / 2.0 - label_width / 2.0,
            chart.y + self.config.label_height * 0.75,
        );

        let content = match self
            .optimizer
            .optimize(hex_area.width, hex_area.height, group.indexes.len())
        {
            Some(layout) => {
                trace!(
                    "Group {:?}: {} items in {}x{} cells, R = {:.2}",
                    group.label,
                    group.indexes.len(),
                    layout.cols,
                    layout.rows,
                    layout.outer_radius
                );
                let hexagons = group
                    .indexes
                    .iter()
                    .enumerate()
                    .map(|(i, &row)| self.style_hexagon(i, row, &layout, hex_area, fields, options))
                    .collect();
                GroupContent::Placed { layout, hexagons }
            }
            None => {
                warn!(
                    "Group {:?}: {} items do not fit {:.1}x{:.1}",
                    group.label,
                    group.indexes.len(),
                    hex_area.width,
                    hex_area.height
                );
                GroupContent::Unfit
            }
        };

        GroupLayout {
            label: group.label.clone(),
            cell,
            chart,
            hex_area,
            label_position,
            content,
        }
    }

    fn style_hexagon(
        &self,
        position: usize,
        row: usize,
        layout: &Layout,
        hex_area: Rect,
        fields: &Fields<'_>,
        options: &PanelOptions,
    ) -> StyledHexagon {
        let cell = cell_for(position, layout.cols);
        let center = cell_center(cell, layout).translate(hex_area.x, hex_area.y);

        let factor = fields.size.map_or(1.0, |field| size_factor(field, row));
        let radius = layout.outer_radius * factor * (1.0 - options.padding);

        StyledHexagon {
            row_index: row,
            cell,
            center,
            radius,
            background_radius: options.background.then_some(layout.outer_radius),
            color: self.display.display(fields.color, row).color,
            value: self.display.display(fields.value, row),
            links: self.display.links(fields.value, row),
        }
    }
}

/// Compose with the default configuration, display and text measure.
pub fn compose(
    frame: &DataFrame,
    options: &PanelOptions,
    width: f64,
    height: f64,
) -> Result<PanelLayout> {
    <Composer>::default().compose(frame, options, width, height)
}
