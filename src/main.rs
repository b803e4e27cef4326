// src/main.rs
use folio_term::core::config::Config;
use folio_term::core::constants::LOG_FILE;
use folio_term::output::logging;
use folio_term::setup::setup_toml;
use folio_term::ui::terminal::restore_terminal;
use folio_term::Result;

#[tokio::main]
async fn main() -> Result<()> {
    match setup_toml::app_dir() {
        Ok(dir) => {
            if let Err(e) = logging::init(log::LevelFilter::Info, &dir.join(LOG_FILE)) {
                eprintln!("Logging disabled: {}", e);
            }
        }
        Err(e) => eprintln!("Logging disabled: {}", e),
    }

    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        log::error!("Panic: {}", panic_info);
        default_hook(panic_info);
    }));

    let config = Config::load().await?;
    logging::set_level(config.log_level_filter());

    let result = folio_term::run_with_config(config).await;
    if let Err(e) = &result {
        log::error!("Terminal exited with error: {}", e);
    }
    log::logger().flush();
    result
}
