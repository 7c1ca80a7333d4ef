#![allow(warnings)]
//! Todo Widget Entry Point

mod models;
mod todo;
mod error;
mod config;
mod store;
mod context;
mod components;
mod widget;

use any_spawner::Executor;
use log::LevelFilter;

/// Lines kept by the console logger
const LOG_CAPACITY: usize = 256;

fn main() {
    // Panic message first, then the log lines leading up to it
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        if let Some(report) = console_logger::recent_report() {
            web_sys::console::error_1(&report.into());
        }
    }));

    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(err) = console_logger::init(level, LOG_CAPACITY) {
        web_sys::console::warn_1(&format!("[TODO] logger init failed: {}", err).into());
    }
    let _ = Executor::init_wasm_bindgen();

    match widget::bind_page() {
        Ok(widgets) => {
            for w in widgets {
                log::info!("[TODO#{}] bound with {} item(s)", w.instance(), w.items().len());
            }
        }
        Err(err) => log::error!("[TODO] {}", err),
    }
}
