mod app;
mod chart;
mod org;
mod util;

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// JSON file holding the root employee or an `{ root, expanded }` document.
    #[arg(long, default_value = "data/sample-org.json")]
    data: PathBuf,
    /// Levels below the root expanded on open when the data file has no
    /// expansion map; the root itself is always expanded.
    #[arg(long, default_value_t = 2)]
    expanded_levels: usize,
    /// URL opened by the Schedule action; `{email}` is replaced.
    #[arg(
        long,
        default_value = "https://outlook.office.com/calendar/deeplink/compose?to={email}"
    )]
    schedule_url: String,
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(args.log_level)
        .init();

    let options = app::ChartOptions {
        data_path: args.data,
        expanded_levels: args.expanded_levels,
        schedule_template: args.schedule_url,
    };
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1440.0, 920.0]),
        ..Default::default()
    };

    eframe::run_native(
        "orgviz",
        native_options,
        Box::new(move |cc| Ok(Box::new(app::OrgChartApp::new(cc, options)))),
    )
}
