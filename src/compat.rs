//! Host platform version gate
//!
//! Runs on each admin page load. A host older than the plugin's minimum
//! supported version gets the plugin deactivated and the request halted with
//! a remediation page; a compatible host passes through untouched. There is
//! no in-between: the plugin is either healthy or deactivated.

use crate::error::{Error, Result};
use crate::host::{PluginHost, PluginInfo};
use log::warn;
use semver::Version;

/// Fatal version-incompatibility report
///
/// Returned (inside [`Error::IncompatibleHost`]) after the plugin has been
/// deactivated. The host renders [`IncompatibleHost::to_html`] as the
/// response body and halts the request.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error(
    "{plugin_name} {plugin_version} not activated: host version {host_version} is older than required {required_version}"
)]
pub struct IncompatibleHost {
    pub plugin_name: String,
    pub plugin_version: String,
    pub host_version: String,
    pub required_version: String,
    /// Link target back to the admin home
    pub admin_home_url: String,
}

impl IncompatibleHost {
    /// Headline for the error page
    #[must_use]
    pub fn title(&self) -> String {
        format!("{} {} not activated", self.plugin_name, self.plugin_version)
    }

    /// Remediation text for the error page
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "You are running platform version {}. This plugin requires version {} \
             or higher, and has been deactivated! Please upgrade the platform and \
             try again.",
            self.host_version, self.required_version
        )
    }

    /// Full error page body the host renders before halting the request
    #[must_use]
    pub fn to_html(&self) -> String {
        format!(
            "<h1>{}</h1><p>{}</p><p><a href=\"{}\">Back to the admin area</a></p>",
            self.title(),
            self.message(),
            self.admin_home_url
        )
    }
}

/// Check host compatibility, deactivating the plugin when it fails
///
/// No-op on a compatible host, and on an incompatible host where the plugin
/// is already inactive. Otherwise deactivates the plugin through the host
/// handle and returns the fatal [`IncompatibleHost`] error.
pub fn check_host_compatibility(plugin: &PluginInfo, host: &dyn PluginHost) -> Result<()> {
    let host_version = host.version();
    let current = parse_lenient(&host_version)?;
    let required = parse_lenient(&plugin.min_host_version)?;

    if current >= required {
        return Ok(());
    }

    if !host.is_plugin_active(&plugin.basename) {
        return Ok(());
    }

    host.deactivate_plugin(&plugin.basename);
    warn!(
        "Deactivated {}: host version {host_version} is older than required {}",
        plugin.name, plugin.min_host_version
    );

    Err(Error::IncompatibleHost(IncompatibleHost {
        plugin_name: plugin.name.clone(),
        plugin_version: plugin.version.clone(),
        host_version,
        required_version: plugin.min_host_version.clone(),
        admin_home_url: host.admin_url(""),
    }))
}

/// Parse a host version string leniently
///
/// Host platforms report two-component versions ("4.5") and occasionally a
/// pre-release suffix ("6.5-RC1"); semver wants three components. Missing
/// components are padded with zeros before parsing.
fn parse_lenient(value: &str) -> Result<Version> {
    let trimmed = value.trim().trim_start_matches('v');
    let (core, pre) = match trimmed.split_once('-') {
        Some((core, pre)) => (core, Some(pre)),
        None => (trimmed, None),
    };

    let mut normalized = core.to_string();
    for _ in core.matches('.').count()..2 {
        normalized.push_str(".0");
    }
    if let Some(pre) = pre {
        normalized.push('-');
        normalized.push_str(pre);
    }

    Version::parse(&normalized).map_err(|e| Error::InvalidVersion {
        value: value.to_string(),
        source: e,
    })
}

// =============================================================================
// Tests
// =============================================================================
