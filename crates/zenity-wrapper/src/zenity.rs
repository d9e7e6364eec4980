//! The dialog dispatcher

use anyhow::{bail, Result};
use chrono::NaiveDate;
use tracing::warn;

use crate::color::Rgb;
use crate::config::Config;
use crate::dialog::Dialog;
use crate::error::{ZenityError, EXIT_CANCELLED};
use crate::forms::{classify_forms, FormField, FormsResult};
use crate::options::{
    CalendarOptions, ColorSelectionOptions, EntryOptions, FileSelectionOptions, FormsOptions,
    ListOptions, MessageOptions, PasswordOptions, ProgressOptions, QuestionOptions, ScaleOptions,
    TextOptions,
};
use crate::output::{parse_scale, Credentials, Outcome, Selection};
use crate::progress::ProgressHandle;
use crate::runner::Runner;

/// Date format `calendar_date` asks zenity for
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Main interface for showing zenity dialogs
///
/// Construction resolves the binary, so a missing zenity is reported before
/// any dialog is shown.
#[derive(Debug, Clone)]
pub struct Zenity {
    runner: Runner,
}

impl Zenity {
    /// Create a wrapper around `zenity` on `PATH` with default settings
    pub fn new() -> Result<Self> {
        Self::from_config(&Config::default())
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            runner: Runner::from_config(config)?,
        })
    }

    /// Use a specific binary name or path
    pub fn with_binary(binary: &str) -> Result<Self> {
        Self::from_config(&Config::default().with_binary(binary))
    }

    pub fn runner(&self) -> &Runner {
        &self.runner
    }

    /// Show an information dialog
    pub fn info(&self, message: &str, options: &MessageOptions) {
        self.message(Dialog::Info {
            text: message,
            options,
        });
    }

    /// Show a warning dialog
    pub fn warning(&self, message: &str, options: &MessageOptions) {
        self.message(Dialog::Warning {
            text: message,
            options,
        });
    }

    /// Show an error dialog
    pub fn error(&self, message: &str, options: &MessageOptions) {
        self.message(Dialog::Error {
            text: message,
            options,
        });
    }

    /// Message dialogs are best-effort notifications: failures are logged, not returned
    fn message(&self, dialog: Dialog<'_>) {
        let kind = dialog.kind().name();
        match self.runner.run(&dialog.args(), None) {
            Ok(output) => match output.outcome {
                Outcome::Confirmed | Outcome::Cancelled => {}
                other => warn!(kind, outcome = ?other, "message dialog did not complete"),
            },
            Err(e) => warn!(kind, error = %e, "message dialog failed"),
        }
    }

    /// Ask a yes/no question; `false` when declined
    pub fn question(&self, message: &str, options: &QuestionOptions) -> Result<bool> {
        let dialog = Dialog::Question {
            text: message,
            options,
        };
        self.runner.run(&dialog.args(), None)?.outcome.confirmed()
    }

    /// Single-line text entry
    pub fn entry(&self, text: &str, options: &EntryOptions) -> Result<Option<String>> {
        self.value(Dialog::Entry { text, options })
    }

    /// Password entry; with `username` set the output is `username|password`
    pub fn password(&self, options: &PasswordOptions) -> Result<Option<String>> {
        self.value(Dialog::Password { options })
    }

    /// Username and password entry
    pub fn credentials(&self, options: &PasswordOptions) -> Result<Option<Credentials>> {
        let options = PasswordOptions {
            username: true,
            ..options.clone()
        };
        match self.password(&options)? {
            Some(output) => Ok(Some(Credentials::parse(&output)?)),
            None => Ok(None),
        }
    }

    /// Pick rows from a list
    ///
    /// Each row contributes one cell per column. Checklist and radiolist rows
    /// start with `TRUE`/`FALSE`.
    pub fn list<C, R, S>(
        &self,
        text: &str,
        columns: C,
        rows: R,
        options: &ListOptions,
    ) -> Result<Option<Selection>>
    where
        C: IntoIterator,
        C::Item: Into<String>,
        R: IntoIterator,
        R::Item: IntoIterator<Item = S>,
        S: ToString,
    {
        let columns: Vec<String> = columns.into_iter().map(Into::into).collect();
        let rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|row| row.into_iter().map(|cell| cell.to_string()).collect())
            .collect();

        let dialog = Dialog::List {
            text,
            columns: &columns,
            rows: &rows,
            options,
        };
        Ok(self.value(dialog)?.map(|output| {
            Selection::parse(
                &output,
                options.is_multi_select(),
                options.separator.as_deref(),
            )
        }))
    }

    /// Pick one or more files or directories
    pub fn file_selection(&self, options: &FileSelectionOptions) -> Result<Option<Selection>> {
        Ok(self
            .value(Dialog::FileSelection { options })?
            .map(|output| Selection::parse(&output, options.multiple, options.separator.as_deref())))
    }

    /// Pick a colour; zenity prints it as `rgb(r,g,b)` with 8-bit channels
    pub fn color_selection(&self, options: &ColorSelectionOptions) -> Result<Option<String>> {
        self.value(Dialog::ColorSelection { options })
    }

    /// Pick a colour as a typed value
    pub fn color_rgb(&self, options: &ColorSelectionOptions) -> Result<Option<Rgb>> {
        match self.color_selection(options)? {
            Some(output) => Ok(Some(output.parse::<Rgb>()?)),
            None => Ok(None),
        }
    }

    /// Pick a date, formatted per `date_format`
    pub fn calendar(&self, text: &str, options: &CalendarOptions) -> Result<Option<String>> {
        self.value(Dialog::Calendar { text, options })
    }

    /// Pick a date as a typed value
    pub fn calendar_date(&self, text: &str, options: &CalendarOptions) -> Result<Option<NaiveDate>> {
        let options = CalendarOptions {
            date_format: Some(ISO_DATE_FORMAT.to_string()),
            ..options.clone()
        };
        match self.calendar(text, &options)? {
            Some(output) => match NaiveDate::parse_from_str(&output, ISO_DATE_FORMAT) {
                Ok(date) => Ok(Some(date)),
                Err(_) => bail!(ZenityError::InvalidOutput(output)),
            },
            None => Ok(None),
        }
    }

    /// Pick a number on a slider; `None` when cancelled or nothing printed
    pub fn scale(&self, text: &str, options: &ScaleOptions) -> Result<Option<i32>> {
        match self.value(Dialog::Scale { text, options })? {
            Some(output) => parse_scale(&output),
            None => Ok(None),
        }
    }

    /// Multi-field form, reporting which button closed it
    pub fn forms(&self, fields: &[FormField], options: &FormsOptions) -> Result<FormsResult> {
        let dialog = Dialog::Forms { fields, options };
        let output = self.runner.run(&dialog.args(), None)?;

        let code = match output.outcome {
            Outcome::Confirmed => 0,
            Outcome::Cancelled => EXIT_CANCELLED,
            Outcome::TimedOut => bail!(ZenityError::TimedOut),
            Outcome::Failed(code) => bail!(ZenityError::Failed(code)),
            Outcome::Terminated => bail!(ZenityError::Terminated),
        };
        Ok(classify_forms(
            code,
            &output.stdout,
            options.separator.as_deref(),
            options.common.extra_button.as_deref(),
        ))
    }

    /// Show `message` in a scrollable text box; returns the (possibly edited) text
    pub fn text(&self, message: &str, options: &TextOptions) -> Result<Option<String>> {
        let dialog = Dialog::TextInfo { options };
        self.runner.run(&dialog.args(), Some(message))?.into_value()
    }

    /// Open a progress dialog and return its live handle
    pub fn progress(&self, text: &str, options: &ProgressOptions) -> Result<ProgressHandle> {
        let dialog = Dialog::Progress { text, options };
        let child = self.runner.spawn_interactive(&dialog.args())?;
        ProgressHandle::new(child)
    }

    /// Run `f` with a progress dialog that is closed on every exit path
    pub fn with_progress<T, F>(&self, text: &str, options: &ProgressOptions, f: F) -> Result<T>
    where
        F: FnOnce(&mut ProgressHandle) -> Result<T>,
    {
        let mut handle = self.progress(text, options)?;
        let result = f(&mut handle)?;
        handle.close()?;
        Ok(result)
    }

    fn value(&self, dialog: Dialog<'_>) -> Result<Option<String>> {
        self.runner.run(&dialog.args(), None)?.into_value()
    }
}
