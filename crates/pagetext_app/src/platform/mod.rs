mod app;
mod effects;
mod export;
mod logging;
mod ui;

pub use app::run_app;
