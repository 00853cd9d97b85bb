use std::{path::PathBuf, sync::Arc};

mod backend_bridge;
mod controller;
mod ui;

use clap::Parser;
use crossbeam_channel::bounded;
use eframe::egui;
use intake_core::{AppSettings, HttpRelayGateway, MissingRelayGateway, SubmissionGateway};
use shared::profile::ProfileData;
use tracing_subscriber::EnvFilter;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};
use crate::ui::{IntakeApp, StartupConfig};

#[derive(Parser, Debug)]
struct Args {
    /// Settings file; defaults to ./intake.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Profile JSON shown around the form. Overrides the settings file.
    #[arg(long)]
    profile: Option<PathBuf>,
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    let mut startup = StartupConfig::default();
    let settings = match intake_core::load_settings(args.config.as_deref()) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!("failed to load settings: {err:#}");
            startup.banner = Some(UiError::from_message(
                UiErrorContext::Settings,
                format!("Settings could not be loaded: {err:#}"),
            ));
            AppSettings::default()
        }
    };

    let gateway = build_gateway(&settings, &mut startup);

    if let Some(path) = args.profile.or_else(|| settings.profile_path.clone()) {
        match ProfileData::load(&path) {
            Ok(profile) => startup.profile = profile,
            Err(err) => {
                tracing::warn!("using placeholder profile: {err}");
                if startup.banner.is_none() {
                    startup.banner = Some(UiError::from_message(
                        UiErrorContext::Profile,
                        err.to_string(),
                    ));
                }
            }
        }
    }

    let (cmd_tx, cmd_rx) = bounded::<BackendCommand>(8);
    let (ui_tx, ui_rx) = bounded::<UiEvent>(64);
    backend_bridge::runtime::launch(cmd_rx, ui_tx, gateway);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!("{} – Contact", startup.profile.name))
            .with_inner_size([900.0, 860.0])
            .with_min_inner_size([420.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Practitioner Intake",
        options,
        Box::new(|_cc| Ok(Box::new(IntakeApp::new(cmd_tx, ui_rx, startup)))),
    )
}

fn build_gateway(settings: &AppSettings, startup: &mut StartupConfig) -> Arc<dyn SubmissionGateway> {
    if let Err(err) = settings.relay.validate() {
        tracing::warn!("relay disabled: {err}");
        startup.banner.get_or_insert_with(|| {
            UiError::from_message(UiErrorContext::Settings, format!("Relay not configured: {err}"))
        });
        return Arc::new(MissingRelayGateway);
    }

    match HttpRelayGateway::new(&settings.relay) {
        Ok(gateway) => {
            tracing::info!(endpoint = gateway.endpoint(), "relay gateway ready");
            Arc::new(gateway)
        }
        Err(err) => {
            tracing::error!("failed to build relay http client: {err:#}");
            startup.banner = Some(UiError::from_message(
                UiErrorContext::BackendStartup,
                format!("backend worker startup failure: {err:#}"),
            ));
            Arc::new(MissingRelayGateway)
        }
    }
}
