//! Spawning the zenity binary

use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};
use tracing::debug;
use which::which;

use crate::config::Config;
use crate::error::ZenityError;
use crate::output::{DialogOutput, Outcome};

/// Environment that keeps GTK4 zenity from crashing on settings lookups
pub const GTK_WORKAROUND_ENV: [(&str, &str); 3] = [
    ("GSETTINGS_BACKEND", "memory"),
    ("GSETTINGS_SCHEMA_DIR", "/dev/null"),
    ("G_MESSAGES_DEBUG", ""),
];

/// Resolved binary plus the environment every invocation gets
#[derive(Debug, Clone)]
pub struct Runner {
    binary: PathBuf,
    env: BTreeMap<String, String>,
}

impl Runner {
    /// Resolve the configured binary on `PATH`
    pub fn from_config(config: &Config) -> Result<Self> {
        let binary = resolve_binary(&config.binary)?;

        let mut env = BTreeMap::new();
        if config.gtk_workaround {
            for (key, value) in GTK_WORKAROUND_ENV {
                env.insert(key.to_string(), value.to_string());
            }
        }
        env.extend(config.env.clone());

        Ok(Self { binary, env })
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }

    pub fn env(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    fn command(&self, args: &[String]) -> Command {
        debug!(binary = %self.binary.display(), ?args, "spawning zenity");

        let mut cmd = Command::new(&self.binary);
        cmd.args(args)
            .envs(&self.env)
            .stdout(Stdio::piped())
            .stderr(Stdio::null());
        cmd
    }

    /// Run a dialog to completion, optionally piping `input` on stdin
    pub fn run(&self, args: &[String], input: Option<&str>) -> Result<DialogOutput> {
        let mut cmd = self.command(args);
        cmd.stdin(if input.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        });

        let mut child = cmd.spawn().context("Failed to run zenity")?;

        if let Some(input) = input {
            if let Some(mut stdin) = child.stdin.take() {
                // A dialog that exits early closes its end; the exit status still matters
                if let Err(e) = stdin.write_all(input.as_bytes()) {
                    debug!(error = %e, "zenity stopped reading stdin");
                }
            }
        }

        let output = child
            .wait_with_output()
            .context("Failed to wait for zenity")?;
        let outcome = Outcome::from_status(output.status);
        debug!(?outcome, "zenity finished");

        Ok(DialogOutput::new(
            outcome,
            &String::from_utf8_lossy(&output.stdout),
        ))
    }

    /// Spawn a dialog that keeps running with a writable stdin
    pub fn spawn_interactive(&self, args: &[String]) -> Result<Child> {
        let mut cmd = self.command(args);
        cmd.stdin(Stdio::piped());
        cmd.spawn().context("Failed to create progress dialog")
    }
}

/// Find the binary by name on `PATH`, or check an explicit path
pub fn resolve_binary(binary: &str) -> Result<PathBuf> {
    match which(binary) {
        Ok(path) => Ok(path),
        Err(_) => bail!(ZenityError::BinaryNotFound(binary.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_binary() {
        let err = resolve_binary("zenity-wrapper-definitely-missing").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ZenityError>(),
            Some(ZenityError::BinaryNotFound(name)) if name == "zenity-wrapper-definitely-missing"
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_env_overrides() {
        let config = Config {
            binary: "sh".to_string(),
            gtk_workaround: true,
            env: BTreeMap::from([("EXTRA".to_string(), "1".to_string())]),
        };
        let runner = Runner::from_config(&config).unwrap();
        assert_eq!(runner.env().get("GSETTINGS_BACKEND").map(String::as_str), Some("memory"));
        assert_eq!(runner.env().get("GSETTINGS_SCHEMA_DIR").map(String::as_str), Some("/dev/null"));
        assert_eq!(runner.env().get("G_MESSAGES_DEBUG").map(String::as_str), Some(""));
        assert_eq!(runner.env().get("EXTRA").map(String::as_str), Some("1"));

        let plain = Runner::from_config(&Config {
            gtk_workaround: false,
            ..config
        })
        .unwrap();
        assert!(!plain.env().contains_key("GSETTINGS_BACKEND"));
    }
}
