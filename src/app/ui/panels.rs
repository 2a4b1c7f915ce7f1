use eframe::egui::{self, Align, Context, Layout, Ui};

use crate::chart::{ChartAction, Viewport};

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn show(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Organization Chart");
                    ui.separator();
                    ui.label(format!("data: {}", self.data_label));
                    ui.label(format!("employees: {}", self.chart.node_count()));
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        self.draw_zoom_controls(ui);
                        ui.separator();
                        ui.label(self.rendered_chart_text());
                    });
                });
            });

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(300.0)
            .show(ctx, |ui| self.draw_controls(ui));

        egui::SidePanel::right("details")
            .resizable(true)
            .default_width(340.0)
            .show(ctx, |ui| self.draw_details(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.draw_chart(ui));

        self.flush_actions(ctx);
    }

    /// Laid out right to left: reset, plus, slider, minus.
    fn draw_zoom_controls(&mut self, ui: &mut Ui) {
        let viewport = self.chart_state.viewport;

        if ui
            .button("Reset")
            .on_hover_text("Reset View (Ctrl+0)")
            .clicked()
        {
            self.dispatch(ChartAction::ResetZoom);
        }

        if ui
            .add_enabled(viewport.can_zoom_in(), egui::Button::new("+"))
            .on_hover_text("Zoom In (Ctrl++)")
            .clicked()
        {
            self.dispatch(ChartAction::ZoomIn);
        }

        let mut zoom = viewport.zoom();
        let slider = ui.add(
            egui::Slider::new(&mut zoom, Viewport::MIN_ZOOM..=Viewport::MAX_ZOOM)
                .step_by(f64::from(Viewport::ZOOM_STEP))
                .suffix("%"),
        );
        if slider.changed() {
            self.dispatch(ChartAction::SetZoom(zoom));
        }

        if ui
            .add_enabled(viewport.can_zoom_out(), egui::Button::new("-"))
            .on_hover_text("Zoom Out (Ctrl+-)")
            .clicked()
        {
            self.dispatch(ChartAction::ZoomOut);
        }
    }

    fn rendered_chart_text(&self) -> String {
        format!(
            "rendered: {} cards / {} edges",
            self.rendered_card_count, self.rendered_edge_count
        )
    }
}
