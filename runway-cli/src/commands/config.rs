use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;
use crate::settings::{Settings, SettingsSource, user_settings_path};

/// Show the effective settings and their source.
pub(crate) fn run_config_show(settings: &Settings, source: &SettingsSource) -> Result<(), CliError> {
    log::info!(
        "{}",
        "Runway Settings".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");
    match source.path() {
        Some(p) => log::info!(
            "  Loaded from: {} {}",
            p.display().if_supports_color(Stdout, |t| t.cyan()),
            format!("({source})").if_supports_color(Stdout, |t| t.dimmed()),
        ),
        None => log::info!(
            "  Loaded from: {}",
            "built-in defaults".if_supports_color(Stdout, |t| t.dimmed()),
        ),
    }
    log::info!("");

    let text = toml::to_string_pretty(settings).map_err(|e| CliError::config(e.to_string()))?;
    for line in text.lines() {
        log::info!("  {line}");
    }
    Ok(())
}

/// Print the settings file path that is (or would be) read.
pub(crate) fn run_config_path(source: &SettingsSource) {
    match source.path() {
        Some(p) => log::info!("{}", p.display()),
        None => match user_settings_path() {
            Some(p) => log::info!(
                "{} {}",
                p.display(),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            ),
            None => log::warn!("Could not determine the user config directory"),
        },
    }
}
