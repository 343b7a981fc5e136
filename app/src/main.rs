use leptos::prelude::*;
use param_extractor::Config;
use param_extractor_app::App;

pub fn main() {
    let config = Config::from_build_env();
    let level = config.as_ref().copied().unwrap_or_default().log_level;
    _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();

    match config {
        Ok(config) => log::debug!("starting with {config:?}"),
        Err(e) => log::warn!("{e}; using the default configuration"),
    }

    mount_to_body(App)
}
