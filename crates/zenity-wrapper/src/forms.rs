//! Forms dialog fields and result classification

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::EXIT_CANCELLED;
use crate::output::DEFAULT_SEPARATOR;

/// Separator zenity expects inside `--list-values`, `--column-values` and `--combo-values`
const VALUES_SEPARATOR: &str = "|";

/// A single field of a forms dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FormField {
    Entry {
        label: String,
    },
    Password {
        label: String,
    },
    Multiline {
        label: String,
    },
    Calendar {
        label: String,
    },
    List {
        label: String,
        #[serde(default)]
        header: Option<String>,
        #[serde(default)]
        values: Vec<String>,
        #[serde(default)]
        column_values: Vec<String>,
    },
    Combo {
        label: String,
        #[serde(default)]
        values: Vec<String>,
    },
}

impl FormField {
    pub fn entry(label: impl Into<String>) -> Self {
        Self::Entry { label: label.into() }
    }

    pub fn password(label: impl Into<String>) -> Self {
        Self::Password { label: label.into() }
    }

    pub fn multiline(label: impl Into<String>) -> Self {
        Self::Multiline { label: label.into() }
    }

    pub fn calendar(label: impl Into<String>) -> Self {
        Self::Calendar { label: label.into() }
    }

    pub fn combo<I, S>(label: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Combo {
            label: label.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn list<I, S>(label: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List {
            label: label.into(),
            header: None,
            values: values.into_iter().map(Into::into).collect(),
            column_values: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Entry { label }
            | Self::Password { label }
            | Self::Multiline { label }
            | Self::Calendar { label }
            | Self::List { label, .. }
            | Self::Combo { label, .. } => label,
        }
    }

    /// Append the flags describing this field
    pub(crate) fn push_args(&self, args: &mut Vec<String>) {
        match self {
            Self::Entry { label } => args.push(format!("--add-entry={}", label)),
            Self::Password { label } => args.push(format!("--add-password={}", label)),
            Self::Multiline { label } => args.push(format!("--add-multiline-entry={}", label)),
            Self::Calendar { label } => args.push(format!("--add-calendar={}", label)),
            Self::List {
                label,
                header,
                values,
                column_values,
            } => {
                match header {
                    Some(header) => args.push(format!("--add-list={}:{}", label, header)),
                    None => args.push(format!("--add-list={}", label)),
                }
                if !values.is_empty() {
                    args.push(format!("--list-values={}", values.join(VALUES_SEPARATOR)));
                }
                if !column_values.is_empty() {
                    args.push(format!(
                        "--column-values={}",
                        column_values.join(VALUES_SEPARATOR)
                    ));
                }
            }
            Self::Combo { label, values } => {
                args.push(format!("--add-combo={}", label));
                if !values.is_empty() {
                    args.push(format!("--combo-values={}", values.join(VALUES_SEPARATOR)));
                }
            }
        }
    }
}

impl FromStr for FormField {
    type Err = anyhow::Error;

    /// Parse `kind:label[=v1|v2]`, or `list:label:header=v1|v2` for lists
    fn from_str(s: &str) -> Result<Self> {
        let (kind, rest) = match s.split_once(':') {
            Some(parts) => parts,
            None => bail!("Invalid field '{}': expected kind:label", s),
        };
        let (label, values) = match rest.split_once('=') {
            Some((label, values)) => (
                label,
                values
                    .split(VALUES_SEPARATOR)
                    .filter(|v| !v.is_empty())
                    .map(str::to_string)
                    .collect::<Vec<_>>(),
            ),
            None => (rest, Vec::new()),
        };
        if label.is_empty() {
            bail!("Invalid field '{}': label is empty", s);
        }

        let field = match kind.to_lowercase().as_str() {
            "entry" => Self::entry(label),
            "password" => Self::password(label),
            "multiline" => Self::multiline(label),
            "calendar" => Self::calendar(label),
            "combo" => Self::combo(label, values),
            "list" => {
                let (label, header) = match label.split_once(':') {
                    Some((label, header)) => (label, Some(header.to_string())),
                    None => (label, None),
                };
                Self::List {
                    label: label.to_string(),
                    header,
                    values,
                    column_values: Vec::new(),
                }
            }
            other => bail!(
                "Unknown field kind '{}'. Use entry, password, multiline, calendar, list or combo.",
                other
            ),
        };
        Ok(field)
    }
}

/// Which button closed a forms dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    Ok,
    Cancel,
    Extra,
}

impl Button {
    pub fn as_str(&self) -> &'static str {
        match self {
            Button::Ok => "ok",
            Button::Cancel => "cancel",
            Button::Extra => "extra",
        }
    }
}

/// Outcome of a forms dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormsResult {
    pub button: Button,
    /// One value per field, in field order; `None` unless submitted
    pub values: Option<Vec<String>>,
}

impl FormsResult {
    pub fn cancelled() -> Self {
        Self {
            button: Button::Cancel,
            values: None,
        }
    }

    fn submitted(output: &str, separator: &str) -> Self {
        Self {
            button: Button::Ok,
            values: Some(output.split(separator).map(str::to_string).collect()),
        }
    }

    pub fn is_submitted(&self) -> bool {
        self.button == Button::Ok && self.values.is_some()
    }
}

/// Interpret a finished forms dialog
///
/// Exit 0 is a submission. Exit 1 is either the extra button (zenity prints
/// its label and no values), a submission when the output still looks like
/// form data, or a plain cancel. `output` must already be trimmed.
pub fn classify_forms(
    exit_code: i32,
    output: &str,
    separator: Option<&str>,
    extra_button: Option<&str>,
) -> FormsResult {
    let separator = separator.unwrap_or(DEFAULT_SEPARATOR);

    if exit_code == 0 {
        return FormsResult::submitted(output, separator);
    }

    if exit_code != EXIT_CANCELLED || output.is_empty() {
        return FormsResult::cancelled();
    }

    match extra_button {
        Some(extra) if output == extra => FormsResult {
            button: Button::Extra,
            values: None,
        },
        Some(_) if !output.contains(separator) => FormsResult::cancelled(),
        _ => FormsResult::submitted(output, separator),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_of(field: &FormField) -> Vec<String> {
        let mut args = Vec::new();
        field.push_args(&mut args);
        args
    }

    #[test]
    fn test_field_args() {
        assert_eq!(args_of(&FormField::entry("Name")), ["--add-entry=Name"]);
        assert_eq!(args_of(&FormField::password("Pass")), ["--add-password=Pass"]);
        assert_eq!(
            args_of(&FormField::multiline("Notes")),
            ["--add-multiline-entry=Notes"]
        );
        assert_eq!(args_of(&FormField::calendar("Date")), ["--add-calendar=Date"]);
        assert_eq!(
            args_of(&FormField::combo("Role", ["Admin", "User"])),
            ["--add-combo=Role", "--combo-values=Admin|User"]
        );
        assert_eq!(
            args_of(&FormField::combo("Empty", Vec::<String>::new())),
            ["--add-combo=Empty"]
        );
    }

    #[test]
    fn test_list_field_args() {
        let field = FormField::List {
            label: "Files".to_string(),
            header: Some("Name".to_string()),
            values: vec!["a".to_string(), "b".to_string()],
            column_values: vec!["Col".to_string()],
        };
        assert_eq!(
            args_of(&field),
            [
                "--add-list=Files:Name",
                "--list-values=a|b",
                "--column-values=Col"
            ]
        );
        assert_eq!(
            args_of(&FormField::list("Plain", Vec::<String>::new())),
            ["--add-list=Plain"]
        );
    }

    #[test]
    fn test_parse_field() {
        assert_eq!("entry:Name".parse::<FormField>().unwrap(), FormField::entry("Name"));
        assert_eq!(
            "combo:Role=Dev|Ops".parse::<FormField>().unwrap(),
            FormField::combo("Role", ["Dev", "Ops"])
        );
        let list: FormField = "list:Files:Header=a|b".parse().unwrap();
        assert_eq!(
            list,
            FormField::List {
                label: "Files".to_string(),
                header: Some("Header".to_string()),
                values: vec!["a".to_string(), "b".to_string()],
                column_values: Vec::new(),
            }
        );
        assert!("Name".parse::<FormField>().is_err());
        assert!("slider:Volume".parse::<FormField>().is_err());
        assert!("entry:".parse::<FormField>().is_err());
    }

    #[test]
    fn test_classify_ok() {
        let result = classify_forms(0, "Ada|ada@example.com", None, None);
        assert_eq!(result.button, Button::Ok);
        assert_eq!(
            result.values,
            Some(vec!["Ada".to_string(), "ada@example.com".to_string()])
        );
        assert!(result.is_submitted());

        let custom = classify_forms(0, "a;b", Some(";"), None);
        assert_eq!(custom.values, Some(vec!["a".to_string(), "b".to_string()]));
    }

    #[test]
    fn test_classify_cancel_and_extra() {
        assert_eq!(classify_forms(1, "", None, Some("Skip")), FormsResult::cancelled());
        assert_eq!(classify_forms(1, "", None, None), FormsResult::cancelled());

        let extra = classify_forms(1, "Skip", None, Some("Skip"));
        assert_eq!(extra.button, Button::Extra);
        assert!(extra.values.is_none());

        // Unknown output with an extra button configured is a cancel
        assert_eq!(
            classify_forms(1, "something", None, Some("Skip")),
            FormsResult::cancelled()
        );
    }

    #[test]
    fn test_classify_exit_one_with_form_data() {
        let with_separator = classify_forms(1, "a|b", None, Some("Skip"));
        assert_eq!(with_separator.button, Button::Ok);

        let no_extra = classify_forms(1, "single", None, None);
        assert_eq!(no_extra.button, Button::Ok);
        assert_eq!(no_extra.values, Some(vec!["single".to_string()]));
    }
}
