//! zenity-wrapper - Typed dialogs on top of the `zenity` command-line tool
//!
//! Every dialog call follows the same shape: an options record is translated
//! into zenity flags, the binary is spawned, and its exit code and stdout are
//! parsed into a typed value. Exit code 1 (Cancel/No/closed window) is always
//! reported as a value, never as an error.
//!
//! ```no_run
//! use zenity_wrapper::{CommonFields, EntryOptions, Zenity};
//!
//! let zenity = Zenity::new()?;
//! let options = EntryOptions::default().with_title("Greeting");
//! if let Some(name) = zenity.entry("Enter your name:", &options)? {
//!     println!("Hello, {}", name);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod color;
pub mod config;
pub mod dialog;
pub mod error;
pub mod forms;
pub mod options;
pub mod output;
pub mod progress;
pub mod runner;
mod zenity;

pub use color::{normalize_color, Rgb};
pub use config::Config;
pub use dialog::{Dialog, DialogKind};
pub use error::ZenityError;
pub use forms::{Button, FormField, FormsResult};
pub use options::{
    CalendarOptions, ColorSelectionOptions, CommonFields, CommonOptions, EntryOptions,
    ErrorOptions, FileSelectionOptions, FormsOptions, InfoOptions, ListOptions, MessageOptions,
    PasswordOptions, ProgressOptions, QuestionOptions, ScaleOptions, TextLayout, TextOptions,
    WarningOptions,
};
pub use output::{Credentials, Outcome, Selection};
pub use progress::ProgressHandle;
pub use zenity::Zenity;
