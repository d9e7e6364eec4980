//! Parsing zenity's exit status and stdout into typed values

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::process::ExitStatus;

use crate::error::{ZenityError, EXIT_CANCELLED, EXIT_TIMEOUT};

/// zenity's own separator for multi-value output
pub const DEFAULT_SEPARATOR: &str = "|";

/// How a dialog process ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Exit 0: OK/Yes
    Confirmed,
    /// Exit 1: Cancel/No, window closed, or extra button
    Cancelled,
    /// Exit 5: `--timeout` expired
    TimedOut,
    /// Any other exit code
    Failed(i32),
    /// Killed by a signal
    Terminated,
}

impl Outcome {
    pub fn from_code(code: Option<i32>) -> Self {
        match code {
            Some(0) => Self::Confirmed,
            Some(EXIT_CANCELLED) => Self::Cancelled,
            Some(EXIT_TIMEOUT) => Self::TimedOut,
            Some(code) => Self::Failed(code),
            None => Self::Terminated,
        }
    }

    pub fn from_status(status: ExitStatus) -> Self {
        Self::from_code(status.code())
    }

    /// Turn unexpected outcomes into errors; `Ok(true)` means confirmed
    pub fn confirmed(self) -> Result<bool> {
        match self {
            Self::Confirmed => Ok(true),
            Self::Cancelled => Ok(false),
            Self::TimedOut => bail!(ZenityError::TimedOut),
            Self::Failed(code) => bail!(ZenityError::Failed(code)),
            Self::Terminated => bail!(ZenityError::Terminated),
        }
    }
}

/// Captured result of a finished dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogOutput {
    pub outcome: Outcome,
    /// Stdout with surrounding whitespace trimmed
    pub stdout: String,
}

impl DialogOutput {
    pub fn new(outcome: Outcome, stdout: &str) -> Self {
        Self {
            outcome,
            stdout: stdout.trim().to_string(),
        }
    }

    /// Stdout when confirmed, `None` when cancelled, an error otherwise
    pub fn into_value(self) -> Result<Option<String>> {
        if self.outcome.confirmed()? {
            Ok(Some(self.stdout))
        } else {
            Ok(None)
        }
    }
}

/// Rows or files picked in a list or file selection dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Selection {
    Single(String),
    Multiple(Vec<String>),
}

impl Selection {
    /// Split only when multiple selection is active; otherwise keep verbatim
    pub fn parse(output: &str, multiple: bool, separator: Option<&str>) -> Self {
        if !multiple {
            return Self::Single(output.to_string());
        }
        if output.is_empty() {
            return Self::Multiple(Vec::new());
        }
        let separator = separator.unwrap_or(DEFAULT_SEPARATOR);
        Self::Multiple(output.split(separator).map(str::to_string).collect())
    }

    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::Single(value) => vec![value],
            Self::Multiple(values) => values,
        }
    }

    /// The first picked value, if any
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::Multiple(values) => values.first().map(String::as_str),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Multiple(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Parse scale output; empty output yields `None`
///
/// With `--print-partial` every intermediate value is on its own line, so
/// the last non-empty line is the final one.
pub fn parse_scale(output: &str) -> Result<Option<i32>> {
    let last = match output.lines().map(str::trim).filter(|l| !l.is_empty()).last() {
        Some(line) => line,
        None => return Ok(None),
    };
    match last.parse::<i32>() {
        Ok(value) => Ok(Some(value)),
        Err(_) => bail!(ZenityError::InvalidOutput(last.to_string())),
    }
}

/// Username and password from a password dialog with `--username`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl Credentials {
    /// Split `username|password` at the first separator
    pub fn parse(output: &str) -> Result<Self> {
        match output.split_once(DEFAULT_SEPARATOR) {
            Some((username, password)) => Ok(Self {
                username: username.to_string(),
                password: password.to_string(),
            }),
            None => bail!(ZenityError::InvalidOutput(
                "expected username|password".to_string()
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_code() {
        assert_eq!(Outcome::from_code(Some(0)), Outcome::Confirmed);
        assert_eq!(Outcome::from_code(Some(1)), Outcome::Cancelled);
        assert_eq!(Outcome::from_code(Some(5)), Outcome::TimedOut);
        assert_eq!(Outcome::from_code(Some(255)), Outcome::Failed(255));
        assert_eq!(Outcome::from_code(None), Outcome::Terminated);
    }

    #[test]
    fn test_outcome_confirmed() {
        assert!(Outcome::Confirmed.confirmed().unwrap());
        assert!(!Outcome::Cancelled.confirmed().unwrap());

        let err = Outcome::Failed(2).confirmed().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ZenityError>(),
            Some(ZenityError::Failed(2))
        ));
        let err = Outcome::TimedOut.confirmed().unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ZenityError>(),
            Some(ZenityError::TimedOut)
        ));
    }

    #[test]
    fn test_dialog_output_trims() {
        let out = DialogOutput::new(Outcome::Confirmed, "  hello world \n");
        assert_eq!(out.into_value().unwrap().as_deref(), Some("hello world"));

        let cancelled = DialogOutput::new(Outcome::Cancelled, "ignored\n");
        assert_eq!(cancelled.into_value().unwrap(), None);
    }

    #[test]
    fn test_selection_single_is_verbatim() {
        assert_eq!(
            Selection::parse("a|b", false, Some("|")),
            Selection::Single("a|b".to_string())
        );
    }

    #[test]
    fn test_selection_multiple_splits() {
        assert_eq!(
            Selection::parse("a|b|c", true, None),
            Selection::Multiple(vec!["a".into(), "b".into(), "c".into()])
        );
        assert_eq!(
            Selection::parse("/tmp/a:/tmp/b", true, Some(":")),
            Selection::Multiple(vec!["/tmp/a".into(), "/tmp/b".into()])
        );
        assert_eq!(Selection::parse("", true, None), Selection::Multiple(Vec::new()));
        assert!(Selection::parse("", true, None).is_empty());
    }

    #[test]
    fn test_parse_scale() {
        assert_eq!(parse_scale("42").unwrap(), Some(42));
        assert_eq!(parse_scale("-7").unwrap(), Some(-7));
        assert_eq!(parse_scale("").unwrap(), None);
        assert_eq!(parse_scale("10\n20\n30").unwrap(), Some(30));
        assert!(parse_scale("abc").is_err());
    }

    #[test]
    fn test_credentials() {
        let creds = Credentials::parse("alice|s3cr|et").unwrap();
        assert_eq!(creds.username, "alice");
        assert_eq!(creds.password, "s3cr|et");
        assert!(!format!("{:?}", creds).contains("s3cr"));
        assert!(Credentials::parse("nopipe").is_err());
    }
}
