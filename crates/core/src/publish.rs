use std::path::Path;

use anyhow::Result;

use crate::config::Config;

/// Fallback key in the publish command map when no module-specific entry exists.
pub const DEFAULT_PUBLISH_KEY: &str = "default";

/// Resolve the publish command for a module from config.
///
/// Module-specific entries win over the `"default"` entry. Signing,
/// credentials and upload transport all live inside the configured command;
/// this crate only hands it the computed version.
pub fn resolve_publish_command<'a>(module: Option<&str>, config: &'a Config) -> Option<&'a str> {
    if let Some(module) = module
        && let Some(cmd) = config.publish.get(module)
    {
        return Some(cmd.as_str());
    }
    config.publish.get(DEFAULT_PUBLISH_KEY).map(String::as_str)
}

/// Execute a publish command in the given directory.
///
/// The composed version string and the release code are exported as
/// `VERSION_NAME` and `VERSION_CODE` so the command can pass them to the
/// upload tooling.
///
/// # Errors
/// Returns an error carrying the command's stderr if it exits non-zero.
pub async fn run_publish_command(
    command: &str,
    working_dir: &Path,
    version_name: &str,
    version_code: u64,
) -> Result<()> {
    let mut cmd = if cfg!(target_os = "windows") {
        let mut c = tokio::process::Command::new("cmd");
        c.arg("/C").arg(command);
        c
    } else {
        let mut c = tokio::process::Command::new("sh");
        c.arg("-c").arg(command);
        c
    };
    cmd.current_dir(working_dir)
        .env("VERSION_NAME", version_name)
        .env("VERSION_CODE", version_code.to_string());
    let output = cmd.output().await?;
    if !output.status.success() {
        anyhow::bail!(
            "Publish command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }
    Ok(())
}
