use std::io::IsTerminal;

use stardrift_config::Config;

mod app;
mod control;
mod logging;
mod scheduler;

use app::App;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let _log_guard = logging::init();

    // No terminal to draw on: nothing to animate.
    if !std::io::stdout().is_terminal() {
        tracing::info!("stdout is not a terminal, starfield disabled");
        return Ok(());
    }

    let config_path = Config::default_path();
    let config = match &config_path {
        Some(path) => Config::load_from(path)?,
        None => Config::default(),
    };
    tracing::info!(?config_path, star_count = config.star_count, "starting");

    let terminal = ratatui::init();
    let result = App::new(config, config_path).run(terminal);
    ratatui::restore();
    result
}
