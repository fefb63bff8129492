use arbor::app::Arbor;
use arbor::config::Config;
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("arbor=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> eframe::Result<()> {
    init_tracing();

    let (config, config_path) = Config::load();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_title("Arbor"),
        ..Default::default()
    };

    eframe::run_native(
        "Arbor",
        options,
        Box::new(|cc| Ok(Box::new(Arbor::new(cc, config, config_path)))),
    )
}
