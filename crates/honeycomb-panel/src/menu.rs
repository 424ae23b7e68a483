//! Context menu state for a clicked hexagon.
//!
//! Owned by whoever draws the panel. Composition never reads or writes it.

use honeycomb_geometry::Point;
use serde::Serialize;

use crate::compose::{PanelLayout, StyledHexagon};
use crate::display::{DataLink, LinkTarget};

/// Icon for links that stay in the current tab.
pub const ICON_INTERNAL: &str = "link";

/// Icon for links that open elsewhere.
pub const ICON_EXTERNAL: &str = "external-link-alt";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuItem {
    pub label: String,
    pub url: String,
    pub target: LinkTarget,
    pub icon: &'static str,
}

impl From<&DataLink> for MenuItem {
    fn from(link: &DataLink) -> Self {
        Self {
            label: link.title.clone(),
            url: link.href.clone(),
            target: link.target,
            icon: match link.target {
                LinkTarget::SameTab => ICON_INTERNAL,
                LinkTarget::NewTab => ICON_EXTERNAL,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuGroup {
    pub label: String,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ContextMenu {
    /// Where the menu opens, in client coordinates
    pub position: Point,
    pub visible: bool,
    pub header: String,
    pub groups: Vec<MenuGroup>,
}

impl ContextMenu {
    /// Show the menu for `hexagon` at `position`.
    ///
    /// The header reads `<value field>: <value> <suffix>`; the single group is
    /// labeled with the raw value field name and lists the hexagon's links.
    pub fn open(&mut self, panel: &PanelLayout, hexagon: &StyledHexagon, position: Point) {
        let value = &hexagon.value;
        let header = format!(
            "{}: {} {}",
            panel.value_field_display,
            value.text,
            value.suffix.as_deref().unwrap_or_default()
        );

        self.position = position;
        self.visible = true;
        self.header = header.trim_end().to_string();
        self.groups = vec![MenuGroup {
            label: panel.value_field.clone(),
            items: hexagon.links.iter().map(MenuItem::from).collect(),
        }];
    }

    /// Hit-test `position` against `panel` and open the menu on a hit.
    ///
    /// `local` is the click relative to the panel; `position` is where the
    /// menu should appear. Returns whether a hexagon was hit.
    pub fn open_at(&mut self, panel: &PanelLayout, local: Point, position: Point) -> bool {
        match panel.hexagon_at(local) {
            Some((_, hexagon)) => {
                self.open(panel, hexagon, position);
                true
            }
            None => false,
        }
    }

    pub fn close(&mut self) {
        self.visible = false;
    }
}
