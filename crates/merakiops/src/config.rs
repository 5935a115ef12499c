//! Apply global CLI flags on top of the selected profile.

use merakiops_config::{ClientSettings, Config, Profile, load_config, profile_to_settings};

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Resolve client settings for the active profile with flag overrides.
pub fn build_settings(global: &GlobalOpts) -> Result<ClientSettings, CliError> {
    let cfg = load_config()?;
    let (name, profile) = cfg.profile(global.profile.as_deref());
    let profile = apply_overrides(profile, global);
    tracing::debug!(profile = %name, "resolved profile");

    Ok(profile_to_settings(
        &profile,
        &name,
        &cfg.defaults,
        global.api_key.as_deref(),
    )?)
}

/// The grouping keyword for the active profile, without needing credentials.
pub fn active_group(global: &GlobalOpts) -> Result<String, CliError> {
    let cfg: Config = load_config()?;
    let (_, profile) = cfg.profile(global.profile.as_deref());
    Ok(profile.group.unwrap_or(cfg.defaults.group))
}

fn apply_overrides(mut profile: Profile, global: &GlobalOpts) -> Profile {
    if let Some(ref url) = global.base_url {
        profile.base_url = Some(url.clone());
    }
    if let Some(timeout) = global.timeout {
        profile.timeout = Some(timeout);
    }
    if global.insecure {
        profile.insecure = Some(true);
    }
    profile
}
