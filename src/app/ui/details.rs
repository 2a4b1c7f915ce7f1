use eframe::egui::{self, RichText, Sense, Ui, vec2};
use tracing::info;

use crate::chart::ChartAction;
use crate::org::{avatar_url, mailto_uri, schedule_uri};

use super::super::ViewModel;
use super::super::render_utils::paint_avatar;

impl ViewModel {
    pub(in crate::app) fn draw_details(&mut self, ui: &mut Ui) {
        ui.heading("Selection Details");
        ui.add_space(6.0);

        let Some(selected_id) = self.chart_state.selection.selected() else {
            ui.label("Select an employee from the chart or the search results.");
            return;
        };

        let Some(node) = self.chart.find(selected_id) else {
            ui.label("Selected employee is not part of this organization chart.");
            return;
        };

        let mut actions = Vec::new();

        ui.horizontal(|ui| {
            let (rect, _) = ui.allocate_exact_size(vec2(64.0, 64.0), Sense::hover());
            paint_avatar(ui, ui.painter(), rect.center(), 30.0, node);

            ui.vertical(|ui| {
                ui.label(RichText::new(node.name.as_str()).strong().size(17.0));
                ui.label(node.title.as_str());
                ui.weak(node.department.as_str());
            });
        });
        ui.add_space(6.0);

        if !node.email.is_empty() {
            ui.label(format!("Email: {}", node.email));
        }
        if let Some(phone) = &node.phone {
            ui.label(format!("Phone: {phone}"));
        }
        if let Some(location) = &node.location {
            ui.label(format!("Location: {location}"));
        }
        let avatar = avatar_url(node);
        ui.hyperlink_to("Avatar image", avatar.as_str())
            .on_hover_text(avatar.as_str());

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            if ui.button("Email").clicked() {
                let uri = mailto_uri(&node.email);
                info!(%uri, "opening email composer");
                ui.ctx().open_url(egui::OpenUrl::new_tab(uri));
            }
            if ui.button("Schedule").clicked() {
                let uri = schedule_uri(&self.schedule_template, &node.email);
                info!(%uri, "opening scheduler");
                ui.ctx().open_url(egui::OpenUrl::new_tab(uri));
            }
            if ui
                .button("Reveal in chart")
                .on_hover_text("Expand every manager above this employee.")
                .clicked()
            {
                actions.push(ChartAction::Reveal(node.id.clone()));
            }
            if ui.button("Clear selection").clicked() {
                actions.push(ChartAction::ClearSelection);
            }
        });

        ui.separator();
        ui.label(RichText::new("Reporting line").strong());
        if let Some(path) = self.chart.path_to(&node.id) {
            let rendered = path
                .iter()
                .map(|manager| manager.name.as_str())
                .collect::<Vec<_>>()
                .join(" -> ");
            ui.label(rendered);
        }

        ui.separator();
        ui.label(RichText::new(format!("Direct reports ({})", node.children.len())).strong());
        if node.children.is_empty() {
            ui.label("No direct reports.");
        } else {
            egui::ScrollArea::vertical()
                .id_salt("direct_reports_scroll")
                .max_height(320.0)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    for report in &node.children {
                        let label = format!("{}  ({})", report.name, report.title);
                        if ui.link(label).on_hover_text(report.department.as_str()).clicked() {
                            actions.push(ChartAction::Select(report.id.clone()));
                        }
                    }
                });
        }

        self.pending_actions.extend(actions);
    }
}
