use std::path::PathBuf;

mod backend_bridge;
mod config;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::config::{build_roster_source, load_settings, Settings, DEFAULT_CONFIG_PATH};
use crate::controller::events::UiEvent;
use crate::controller::watchlist::{Watchlist, WATCHLIST_STORAGE_KEY};
use crate::ui::ChampdexApp;

#[derive(Parser, Debug)]
#[command(
    name = "champdex",
    about = "Browse League of Legends champions and keep a watchlist"
)]
struct Cli {
    /// Settings file; defaults to ./champdex.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Load champions from a JSON file instead of the Pandascore API.
    #[arg(long)]
    roster_file: Option<PathBuf>,
    #[arg(long)]
    api_base_url: Option<String>,
    #[arg(long)]
    api_token: Option<String>,
}

impl Cli {
    fn apply_to(self, settings: &mut Settings) {
        if let Some(v) = self.roster_file {
            settings.roster_file = Some(v);
        }
        if let Some(v) = self.api_base_url {
            settings.api_base_url = v;
        }
        if let Some(v) = self.api_token {
            settings.api_token = Some(v);
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut cli = Cli::parse();
    let (config_path, required) = match cli.config.take() {
        Some(path) => (path, true),
        None => (PathBuf::from(DEFAULT_CONFIG_PATH), false),
    };
    let mut settings = load_settings(&config_path, required)?;
    cli.apply_to(&mut settings);

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(64);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(256);
    backend_bridge::runtime::launch(build_roster_source(&settings), cmd_rx, ui_tx);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("champdex")
            .with_inner_size([1180.0, 760.0])
            .with_min_inner_size([760.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        "champdex",
        options,
        Box::new(|cc| {
            let watchlist = cc
                .storage
                .and_then(|storage| storage.get_string(WATCHLIST_STORAGE_KEY))
                .and_then(|raw| Watchlist::from_json(&raw).ok())
                .unwrap_or_default();
            Ok(Box::new(ChampdexApp::new(cmd_tx, ui_rx, watchlist)))
        }),
    )
    .map_err(|err| anyhow::anyhow!("desktop app exited with error: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_flags_override_loaded_settings() {
        let cli = Cli::try_parse_from([
            "champdex",
            "--roster-file",
            "champions.json",
            "--api-token",
            "cli-token",
        ])
        .expect("parse");
        assert!(cli.config.is_none());

        let mut settings = Settings {
            api_token: Some("env-token".to_string()),
            ..Settings::default()
        };
        cli.apply_to(&mut settings);

        assert_eq!(settings.roster_file, Some(PathBuf::from("champions.json")));
        assert_eq!(settings.api_token.as_deref(), Some("cli-token"));
        assert_eq!(settings.api_base_url, roster::DEFAULT_API_BASE_URL);
    }

    #[test]
    fn absent_flags_leave_settings_untouched() {
        let cli = Cli::try_parse_from(["champdex"]).expect("parse");
        let mut settings = Settings::default();
        cli.apply_to(&mut settings);
        assert_eq!(settings, Settings::default());
    }
}
