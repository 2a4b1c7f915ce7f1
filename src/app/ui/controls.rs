use eframe::egui::{self, RichText, Ui};

use crate::chart::ChartAction;
use crate::util::truncate_label;

use super::super::ViewModel;
use super::super::search::MAX_SEARCH_RESULTS;

impl ViewModel {
    pub(in crate::app) fn draw_controls(&mut self, ui: &mut Ui) {
        ui.heading("Directory");
        ui.separator();
        ui.add_space(4.0);

        ui.label("Search employees")
            .on_hover_text("Fuzzy match on name, title, department or email.");
        ui.text_edit_singleline(&mut self.search)
            .on_hover_text("Matching cards are highlighted; click a result to select it.");

        let hits = self.cached_search_hits();
        if !self.search.trim().is_empty() {
            ui.add_space(4.0);
            if hits.is_empty() {
                ui.label("No employees match this search.");
            } else {
                ui.small(format!("{} matches", hits.len()));
                egui::ScrollArea::vertical()
                    .id_salt("search_results_scroll")
                    .max_height(260.0)
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        for hit in hits.iter().take(MAX_SEARCH_RESULTS) {
                            let Some(node) = self.chart.find(&hit.id) else {
                                continue;
                            };
                            let label = format!(
                                "{}  ({})",
                                node.name,
                                truncate_label(&node.title, 28)
                            );
                            let selected = self.chart_state.selection.is_selected(&node.id);
                            if ui
                                .selectable_label(selected, label)
                                .on_hover_text(node.department.as_str())
                                .clicked()
                            {
                                self.pending_actions.push(ChartAction::Select(node.id.clone()));
                            }
                        }
                    });
            }
        }

        ui.separator();

        let department_text = self
            .department_filter
            .clone()
            .unwrap_or_else(|| "All departments".to_owned());
        egui::ComboBox::from_label("Highlight department")
            .selected_text(department_text)
            .show_ui(ui, |ui| {
                ui.selectable_value(&mut self.department_filter, None, "All departments");
                for department in &self.departments {
                    ui.selectable_value(
                        &mut self.department_filter,
                        Some(department.clone()),
                        department.as_str(),
                    );
                }
            });

        ui.separator();
        ui.label(RichText::new("Tree").strong());
        ui.horizontal(|ui| {
            if ui
                .button("Expand all")
                .on_hover_text("Show every reporting line.")
                .clicked()
            {
                self.dispatch(ChartAction::ExpandAll);
            }
            if ui
                .button("Collapse all")
                .on_hover_text("Collapse every node that has been expanded or seeded.")
                .clicked()
            {
                self.dispatch(ChartAction::CollapseAll);
            }
        });

        ui.add_space(8.0);
        ui.small("Click a card to select it. Use the chevron to expand or collapse its reports.");
        ui.small("Ctrl+scroll or Ctrl +/- zooms; scroll to pan.");
    }
}
