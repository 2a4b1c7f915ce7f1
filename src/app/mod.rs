use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver};
use std::thread;

use eframe::egui::{self, Context};
use tracing::error;

use crate::chart::{ChartAction, ChartState};
use crate::org::{OrgChart, load_org_chart};

mod canvas;
mod render_utils;
mod search;
mod ui;

use canvas::GestureZoom;
use search::SearchCache;

#[derive(Clone, Debug)]
pub struct ChartOptions {
    pub data_path: PathBuf,
    pub expanded_levels: usize,
    pub schedule_template: String,
}

pub struct OrgChartApp {
    options: ChartOptions,
    state: AppState,
}

enum AppState {
    Loading {
        rx: Receiver<Result<OrgChart, String>>,
    },
    Ready(Box<ViewModel>),
    Error(String),
}

struct ViewModel {
    chart: OrgChart,
    chart_state: ChartState,
    data_label: String,
    schedule_template: String,
    departments: Vec<String>,
    search: String,
    department_filter: Option<String>,
    search_cache: Option<SearchCache>,
    highlight_cache: Option<HighlightCache>,
    pending_actions: Vec<ChartAction>,
    gesture_zoom: GestureZoom,
    rendered_card_count: usize,
    rendered_edge_count: usize,
}

struct HighlightCache {
    query: String,
    department: Option<String>,
    ids: Arc<HashSet<String>>,
}

impl OrgChartApp {
    pub fn new(cc: &eframe::CreationContext<'_>, options: ChartOptions) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        let state = Self::start_load(options.data_path.clone());
        Self { options, state }
    }

    fn start_load(data_path: PathBuf) -> AppState {
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let result = load_org_chart(&data_path).map_err(|error| format!("{error:#}"));
            let _ = tx.send(result);
        });

        AppState::Loading { rx }
    }
}

impl eframe::App for OrgChartApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut transition = None;

        match &mut self.state {
            AppState::Loading { rx } => {
                if let Ok(result) = rx.try_recv() {
                    transition = Some(match result {
                        Ok(chart) => {
                            AppState::Ready(Box::new(ViewModel::new(chart, &self.options)))
                        }
                        Err(message) => {
                            error!(%message, "failed to load organization chart");
                            AppState::Error(message)
                        }
                    });
                } else {
                    ctx.request_repaint();
                }

                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.add_space(120.0);
                        ui.heading("Loading organization chart...");
                        ui.add_space(8.0);
                        ui.spinner();
                    });
                });
            }
            AppState::Error(message) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load organization chart");
                    ui.add_space(6.0);
                    ui.label(message.as_str());
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        transition = Some(Self::start_load(self.options.data_path.clone()));
                    }
                });
            }
            AppState::Ready(model) => model.show(ctx),
        }

        if let Some(next_state) = transition {
            self.state = next_state;
        }
    }
}

impl ViewModel {
    fn new(chart: OrgChart, options: &ChartOptions) -> Self {
        let chart_state = ChartState::new(&chart, options.expanded_levels);
        let departments = chart.departments();

        Self {
            chart_state,
            departments,
            data_label: options.data_path.display().to_string(),
            schedule_template: options.schedule_template.clone(),
            search: String::new(),
            department_filter: None,
            search_cache: None,
            highlight_cache: None,
            pending_actions: Vec::new(),
            gesture_zoom: GestureZoom::default(),
            rendered_card_count: 0,
            rendered_edge_count: 0,
            chart,
        }
    }

    fn dispatch(&mut self, action: ChartAction) {
        self.pending_actions.push(action);
    }

    /// Applies queued actions and schedules a redraw when state changed.
    fn flush_actions(&mut self, ctx: &Context) {
        let mut changed = false;
        for action in std::mem::take(&mut self.pending_actions) {
            changed |= self.chart_state.apply(&self.chart, action);
        }

        if changed {
            ctx.request_repaint();
        }
    }
}
