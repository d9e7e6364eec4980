//! Per-dialog option records
//!
//! Every record embeds [`CommonOptions`] and adds the fields specific to its
//! dialog kind. Default values never produce a flag.

use serde::{Deserialize, Serialize};

/// Options shared by every dialog kind
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonOptions {
    /// Dialog window title
    pub title: Option<String>,
    /// Dialog width in pixels
    pub width: Option<u32>,
    /// Dialog height in pixels
    pub height: Option<u32>,
    /// Auto-close after N seconds
    pub timeout: Option<u32>,
    /// Custom OK button label
    pub ok_label: Option<String>,
    /// Custom Cancel button label
    pub cancel_label: Option<String>,
    /// Extra button label
    pub extra_button: Option<String>,
    /// Make the dialog modal
    pub modal: bool,
    /// Attach to a parent window (XID)
    pub attach: Option<u32>,
}

/// Explicit access to the [`CommonOptions`] embedded in an options record
///
/// The provided methods are chainable setters for the shared fields.
pub trait CommonFields: Sized {
    fn common(&self) -> &CommonOptions;
    fn common_mut(&mut self) -> &mut CommonOptions;

    fn with_title(mut self, title: impl Into<String>) -> Self {
        self.common_mut().title = Some(title.into());
        self
    }

    fn with_width(mut self, width: u32) -> Self {
        self.common_mut().width = Some(width);
        self
    }

    fn with_height(mut self, height: u32) -> Self {
        self.common_mut().height = Some(height);
        self
    }

    fn with_timeout(mut self, seconds: u32) -> Self {
        self.common_mut().timeout = Some(seconds);
        self
    }

    fn with_ok_label(mut self, label: impl Into<String>) -> Self {
        self.common_mut().ok_label = Some(label.into());
        self
    }

    fn with_cancel_label(mut self, label: impl Into<String>) -> Self {
        self.common_mut().cancel_label = Some(label.into());
        self
    }

    fn with_extra_button(mut self, label: impl Into<String>) -> Self {
        self.common_mut().extra_button = Some(label.into());
        self
    }

    fn modal(mut self) -> Self {
        self.common_mut().modal = true;
        self
    }

    fn attach_to(mut self, window: u32) -> Self {
        self.common_mut().attach = Some(window);
        self
    }

    /// Replace all shared fields at once
    fn with_common(mut self, common: CommonOptions) -> Self {
        *self.common_mut() = common;
        self
    }
}

impl CommonFields for CommonOptions {
    fn common(&self) -> &CommonOptions {
        self
    }

    fn common_mut(&mut self) -> &mut CommonOptions {
        self
    }
}

macro_rules! impl_common_fields {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl CommonFields for $ty {
                fn common(&self) -> &CommonOptions {
                    &self.common
                }

                fn common_mut(&mut self) -> &mut CommonOptions {
                    &mut self.common
                }
            }
        )+
    };
}

impl_common_fields!(
    MessageOptions,
    QuestionOptions,
    EntryOptions,
    PasswordOptions,
    ListOptions,
    FileSelectionOptions,
    ColorSelectionOptions,
    CalendarOptions,
    ScaleOptions,
    FormsOptions,
    TextOptions,
    ProgressOptions,
);

/// Text layout flags shared by message and question dialogs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextLayout {
    /// Disable text wrapping
    pub no_wrap: bool,
    /// Disable Pango markup
    pub no_markup: bool,
    /// Enable text ellipsization
    pub ellipsize: bool,
}

/// Options for info/warning/error dialogs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageOptions {
    #[serde(flatten)]
    pub common: CommonOptions,
    #[serde(flatten)]
    pub layout: TextLayout,
    /// Custom icon name
    pub icon_name: Option<String>,
}

pub type InfoOptions = MessageOptions;
pub type WarningOptions = MessageOptions;
pub type ErrorOptions = MessageOptions;

impl MessageOptions {
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon_name = Some(icon.into());
        self
    }

    pub fn no_wrap(mut self) -> Self {
        self.layout.no_wrap = true;
        self
    }
}

/// Options for question dialogs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuestionOptions {
    #[serde(flatten)]
    pub common: CommonOptions,
    #[serde(flatten)]
    pub layout: TextLayout,
    /// Make Cancel the default button
    pub default_cancel: bool,
}

/// Options for single-line entry dialogs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryOptions {
    #[serde(flatten)]
    pub common: CommonOptions,
    /// Pre-filled entry text
    pub entry_text: Option<String>,
    /// Mask the typed text
    pub hide_text: bool,
}

impl EntryOptions {
    pub fn with_entry_text(mut self, text: impl Into<String>) -> Self {
        self.entry_text = Some(text.into());
        self
    }
}

/// Options for password dialogs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordOptions {
    #[serde(flatten)]
    pub common: CommonOptions,
    /// Also ask for a username; output becomes `username|password`
    pub username: bool,
}

/// Options for list dialogs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListOptions {
    #[serde(flatten)]
    pub common: CommonOptions,
    /// First column holds checkboxes
    pub checklist: bool,
    /// First column holds radio buttons
    pub radiolist: bool,
    /// First column holds image paths
    pub imagelist: bool,
    /// Allow selecting several rows
    pub multiple: bool,
    /// Allow editing cells
    pub editable: bool,
    /// Output separator for multiple selections
    pub separator: Option<String>,
    /// Column to print (a 1-based index or `ALL`)
    pub print_column: Option<String>,
    /// Column to hide (1-based)
    pub hide_column: Option<u32>,
    /// Hide the column headers
    pub hide_header: bool,
}

impl ListOptions {
    /// A checklist that returns every ticked row
    pub fn checklist() -> Self {
        Self {
            checklist: true,
            multiple: true,
            ..Default::default()
        }
    }

    /// A radio list that returns the chosen row
    pub fn radiolist() -> Self {
        Self {
            radiolist: true,
            ..Default::default()
        }
    }

    /// Whether the dialog can return more than one row
    pub fn is_multi_select(&self) -> bool {
        self.multiple || self.checklist
    }
}

/// Options for file selection dialogs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSelectionOptions {
    #[serde(flatten)]
    pub common: CommonOptions,
    /// Allow selecting several files
    pub multiple: bool,
    /// Select directories only
    pub directory: bool,
    /// Save mode
    pub save: bool,
    /// Default file or directory
    pub filename: Option<String>,
    /// Confirm before overwriting in save mode
    pub confirm_overwrite: bool,
    /// Output separator for multiple selections
    pub separator: Option<String>,
}

/// Options for colour picker dialogs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorSelectionOptions {
    #[serde(flatten)]
    pub common: CommonOptions,
    /// Initial colour (`#RRGGBB` is converted to zenity's 16-bit form)
    pub color: Option<String>,
    /// Show the palette
    pub show_palette: bool,
}

/// Options for calendar dialogs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarOptions {
    #[serde(flatten)]
    pub common: CommonOptions,
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<u32>,
    /// strftime-style output format
    pub date_format: Option<String>,
}

/// Options for scale (slider) dialogs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleOptions {
    #[serde(flatten)]
    pub common: CommonOptions,
    /// Initial value
    pub value: Option<i32>,
    pub min_value: Option<i32>,
    pub max_value: Option<i32>,
    pub step: Option<i32>,
    /// Print each intermediate value
    pub print_partial: bool,
    /// Hide the value next to the slider
    pub hide_value: bool,
}

/// Options for forms dialogs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormsOptions {
    #[serde(flatten)]
    pub common: CommonOptions,
    /// Text shown above the fields
    pub text: Option<String>,
    /// Output separator between field values
    pub separator: Option<String>,
    /// strftime-style format for calendar fields
    pub forms_date_format: Option<String>,
    /// Show column headers on list fields
    pub show_header: bool,
}

impl FormsOptions {
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }
}

/// Options for text info dialogs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextOptions {
    #[serde(flatten)]
    pub common: CommonOptions,
    /// Load the text from this file instead of the message
    pub filename: Option<String>,
    /// Allow editing; the edited text is returned
    pub editable: bool,
    pub font_name: Option<String>,
    /// Add a checkbox with this label (OK stays disabled until ticked)
    pub checkbox: Option<String>,
    /// Render as HTML
    pub html: bool,
    /// Load content from this URL (HTML mode)
    pub url: Option<String>,
    /// Scroll to the end as text arrives
    pub auto_scroll: bool,
}

/// Options for progress dialogs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressOptions {
    #[serde(flatten)]
    pub common: CommonOptions,
    /// Initial percentage
    pub percentage: Option<u32>,
    /// Indeterminate bouncing bar
    pub pulsate: bool,
    /// Close the dialog once 100% is reached
    pub auto_close: bool,
    /// Kill the parent process when Cancel is pressed
    pub auto_kill: bool,
    /// Hide the Cancel button
    pub no_cancel: bool,
    /// Show an estimate of the remaining time
    pub time_remaining: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_setters_chain() {
        let opts = EntryOptions::default()
            .with_title("Name")
            .with_width(300)
            .with_ok_label("Save")
            .modal();

        assert_eq!(opts.common.title.as_deref(), Some("Name"));
        assert_eq!(opts.common.width, Some(300));
        assert_eq!(opts.common.ok_label.as_deref(), Some("Save"));
        assert!(opts.common.modal);
        assert!(opts.common.height.is_none());
    }

    #[test]
    fn test_list_multi_select() {
        assert!(!ListOptions::default().is_multi_select());
        assert!(!ListOptions::radiolist().is_multi_select());
        assert!(ListOptions::checklist().is_multi_select());

        let checklist_only = ListOptions {
            checklist: true,
            ..Default::default()
        };
        assert!(checklist_only.is_multi_select());
    }

    #[test]
    fn test_options_deserialize_flattened() {
        let opts: MessageOptions =
            serde_json::from_str(r#"{"title":"Hi","no_wrap":true,"icon_name":"dialog-ok"}"#).unwrap();
        assert_eq!(opts.common.title.as_deref(), Some("Hi"));
        assert!(opts.layout.no_wrap);
        assert!(!opts.layout.ellipsize);
        assert_eq!(opts.icon_name.as_deref(), Some("dialog-ok"));
    }
}
