use anyhow::Context;

mod app;
mod error;
mod input;
mod renderer;
mod scene;
mod settings;
mod texture;

use settings::ViewerSettings;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut settings = ViewerSettings::load();

    // Optional first argument overrides the texture source for this run
    if let Some(source) = std::env::args().nth(1) {
        settings.texture_source = source;
    }

    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;
    app::run(settings, runtime).context("failed to start viewer")
}
