mod app;
mod dataset;
mod layout;
mod util;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Graph data written by the analyzer (`visualization-data.js` or plain JSON).
    data: PathBuf,
    /// Seed for cluster colours and placement; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = 1440.0)]
    width: f32,
    #[arg(long, default_value_t = 920.0)]
    height: f32,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([args.width, args.height]),
        ..Default::default()
    };

    eframe::run_native(
        "cluster-canvas",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::ClusterCanvasApp::new(
                cc,
                args.data.clone(),
                args.seed,
            )))
        }),
    )
}
