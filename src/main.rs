mod app_callbacks;
mod app_context;
mod app_runtime;
mod config;
mod config_persistence;
mod db_manager;
mod dialogs;
mod errors;
mod playlist;
mod protocol;
mod ui;

use app_runtime::AppRuntime;
use log::info;

slint::include_modules!();

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut clog = colog::default_builder();
    clog.filter(None, log::LevelFilter::Trace);
    clog.init();
    // Narrowed again once config.toml is loaded.
    log::set_max_level(log::LevelFilter::Info);

    std::panic::set_hook(Box::new(|panic_info| {
        let current_thread = std::thread::current();
        let thread_name = current_thread.name().unwrap_or("unnamed");
        log::error!("panic in thread '{}': {}", thread_name, panic_info);
    }));

    let runtime = AppRuntime::build()?;
    runtime.run()?;

    info!("Application exiting");
    Ok(())
}
