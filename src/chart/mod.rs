//! Interactive state of one chart view.
//!
//! Zoom, selection and the expansion map are three independent axes. Every
//! action touches exactly one of them.

mod expansion;
mod layout;
mod selection;
mod viewport;

use tracing::debug;

use crate::org::OrgChart;

pub use expansion::ExpansionState;
pub use layout::{CardLayout, ChartHit, ChartLayout, EdgeKind};
pub use selection::Selection;
pub use viewport::Viewport;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChartAction {
    ZoomIn,
    ZoomOut,
    ResetZoom,
    SetZoom(u32),
    Select(String),
    ClearSelection,
    Toggle(String),
    CollapseAll,
    ExpandAll,
    /// Expands the ancestors of the given employee.
    Reveal(String),
}

impl From<ChartHit> for ChartAction {
    fn from(hit: ChartHit) -> Self {
        match hit {
            ChartHit::Toggle(id) => Self::Toggle(id),
            ChartHit::Card(id) => Self::Select(id),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ChartState {
    pub expansion: ExpansionState,
    pub viewport: Viewport,
    pub selection: Selection,
}

impl ChartState {
    pub fn new(chart: &OrgChart, expanded_levels: usize) -> Self {
        let expansion = match &chart.expanded_seed {
            Some(seed) => ExpansionState::from_map(seed.clone()),
            None => ExpansionState::seeded(&chart.root, expanded_levels),
        };

        Self {
            expansion,
            viewport: Viewport::default(),
            selection: Selection::default(),
        }
    }

    /// Applies one action and reports whether anything changed.
    pub fn apply(&mut self, chart: &OrgChart, action: ChartAction) -> bool {
        debug!(?action, "chart action");

        match action {
            ChartAction::ZoomIn => self.update_viewport(Viewport::zoom_in),
            ChartAction::ZoomOut => self.update_viewport(Viewport::zoom_out),
            ChartAction::ResetZoom => self.update_viewport(Viewport::reset),
            ChartAction::SetZoom(zoom) => self.update_viewport(|viewport| viewport.set_zoom(zoom)),
            ChartAction::Select(id) => {
                let changed = !self.selection.is_selected(&id);
                self.selection.select(&id);
                changed
            }
            ChartAction::ClearSelection => {
                let changed = self.selection.selected().is_some();
                self.selection.clear();
                changed
            }
            ChartAction::Toggle(id) => {
                self.expansion.toggle(&id);
                true
            }
            ChartAction::CollapseAll => {
                self.update_expansion(|expansion| expansion.collapse_all())
            }
            ChartAction::ExpandAll => {
                self.update_expansion(|expansion| expansion.expand_all(&chart.root))
            }
            ChartAction::Reveal(id) => {
                let Some(path) = chart.path_to(&id) else {
                    return false;
                };
                let ancestors = &path[..path.len().saturating_sub(1)];
                self.update_expansion(|expansion| {
                    expansion.reveal(ancestors.iter().map(|node| node.id.as_str()));
                })
            }
        }
    }

    fn update_viewport(&mut self, update: impl FnOnce(&mut Viewport)) -> bool {
        let before = self.viewport;
        update(&mut self.viewport);
        before != self.viewport
    }

    fn update_expansion(&mut self, update: impl FnOnce(&mut ExpansionState)) -> bool {
        let before = self.expansion.clone();
        update(&mut self.expansion);
        before != self.expansion
    }
}
