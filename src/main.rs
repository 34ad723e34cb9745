// SPDX-License-Identifier: MPL-2.0
use iced_toast::app::{self, Flags};
use iced_toast::config::{self, StylePreset};
use std::path::PathBuf;
use tracing::Level;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let verbose = args.contains(["-v", "--verbose"]);
    let config_path: Option<PathBuf> = args.opt_value_from_str("--config").unwrap_or_else(|err| {
        eprintln!("Ignoring --config: {err}");
        None
    });
    let style: Option<StylePreset> = args.opt_value_from_str("--style").unwrap_or_else(|err| {
        eprintln!("Ignoring --style: {err}");
        None
    });

    tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
        .with_target(false)
        .init();

    let loaded = match &config_path {
        Some(path) => config::load_from_path(path),
        None => config::load(),
    };
    let config = loaded.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "could not read settings, using defaults");
        config::Config::default()
    });

    app::run(Flags { config, style })
}
