//! Dialog kinds and their command-line arguments
//!
//! [`Dialog`] is a tagged union with one variant per zenity dialog kind.
//! [`Dialog::args`] translates a variant into the exact argument vector
//! passed to the binary: the kind flag first, then one flag per non-default
//! option, in zenity-wrapper's fixed order.

use crate::color::normalize_color;
use crate::forms::FormField;
use crate::options::{
    CalendarOptions, ColorSelectionOptions, CommonOptions, EntryOptions, FileSelectionOptions,
    FormsOptions, ListOptions, MessageOptions, PasswordOptions, ProgressOptions, QuestionOptions,
    ScaleOptions, TextLayout, TextOptions,
};

/// The fixed set of dialog modes zenity supports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogKind {
    Info,
    Warning,
    Error,
    Question,
    Entry,
    Password,
    List,
    FileSelection,
    ColorSelection,
    Calendar,
    Scale,
    Forms,
    TextInfo,
    Progress,
}

impl DialogKind {
    /// The flag selecting this dialog
    pub fn flag(&self) -> &'static str {
        match self {
            DialogKind::Info => "--info",
            DialogKind::Warning => "--warning",
            DialogKind::Error => "--error",
            DialogKind::Question => "--question",
            DialogKind::Entry => "--entry",
            DialogKind::Password => "--password",
            DialogKind::List => "--list",
            DialogKind::FileSelection => "--file-selection",
            DialogKind::ColorSelection => "--color-selection",
            DialogKind::Calendar => "--calendar",
            DialogKind::Scale => "--scale",
            DialogKind::Forms => "--forms",
            DialogKind::TextInfo => "--text-info",
            DialogKind::Progress => "--progress",
        }
    }

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        &self.flag()[2..]
    }
}

/// A fully described dialog, ready to be turned into arguments
#[derive(Debug, Clone, Copy)]
pub enum Dialog<'a> {
    Info {
        text: &'a str,
        options: &'a MessageOptions,
    },
    Warning {
        text: &'a str,
        options: &'a MessageOptions,
    },
    Error {
        text: &'a str,
        options: &'a MessageOptions,
    },
    Question {
        text: &'a str,
        options: &'a QuestionOptions,
    },
    Entry {
        text: &'a str,
        options: &'a EntryOptions,
    },
    Password {
        options: &'a PasswordOptions,
    },
    List {
        text: &'a str,
        columns: &'a [String],
        rows: &'a [Vec<String>],
        options: &'a ListOptions,
    },
    FileSelection {
        options: &'a FileSelectionOptions,
    },
    ColorSelection {
        options: &'a ColorSelectionOptions,
    },
    Calendar {
        text: &'a str,
        options: &'a CalendarOptions,
    },
    Scale {
        text: &'a str,
        options: &'a ScaleOptions,
    },
    Forms {
        fields: &'a [FormField],
        options: &'a FormsOptions,
    },
    /// The body is not an argument; it is piped on stdin
    TextInfo {
        options: &'a TextOptions,
    },
    Progress {
        text: &'a str,
        options: &'a ProgressOptions,
    },
}

impl Dialog<'_> {
    pub fn kind(&self) -> DialogKind {
        match self {
            Dialog::Info { .. } => DialogKind::Info,
            Dialog::Warning { .. } => DialogKind::Warning,
            Dialog::Error { .. } => DialogKind::Error,
            Dialog::Question { .. } => DialogKind::Question,
            Dialog::Entry { .. } => DialogKind::Entry,
            Dialog::Password { .. } => DialogKind::Password,
            Dialog::List { .. } => DialogKind::List,
            Dialog::FileSelection { .. } => DialogKind::FileSelection,
            Dialog::ColorSelection { .. } => DialogKind::ColorSelection,
            Dialog::Calendar { .. } => DialogKind::Calendar,
            Dialog::Scale { .. } => DialogKind::Scale,
            Dialog::Forms { .. } => DialogKind::Forms,
            Dialog::TextInfo { .. } => DialogKind::TextInfo,
            Dialog::Progress { .. } => DialogKind::Progress,
        }
    }

    pub fn common(&self) -> &CommonOptions {
        match self {
            Dialog::Info { options, .. }
            | Dialog::Warning { options, .. }
            | Dialog::Error { options, .. } => &options.common,
            Dialog::Question { options, .. } => &options.common,
            Dialog::Entry { options, .. } => &options.common,
            Dialog::Password { options } => &options.common,
            Dialog::List { options, .. } => &options.common,
            Dialog::FileSelection { options } => &options.common,
            Dialog::ColorSelection { options } => &options.common,
            Dialog::Calendar { options, .. } => &options.common,
            Dialog::Scale { options, .. } => &options.common,
            Dialog::Forms { options, .. } => &options.common,
            Dialog::TextInfo { options } => &options.common,
            Dialog::Progress { options, .. } => &options.common,
        }
    }

    /// Build the argument vector (without the binary name)
    pub fn args(&self) -> Vec<String> {
        let mut args = vec![self.kind().flag().to_string()];

        match *self {
            Dialog::Info { text, options }
            | Dialog::Warning { text, options }
            | Dialog::Error { text, options } => {
                args.push(format!("--text={}", text));
                push_common(&mut args, &options.common);
                push_layout(&mut args, &options.layout);
                push_value(&mut args, "--icon-name", &options.icon_name);
            }
            Dialog::Question { text, options } => {
                args.push(format!("--text={}", text));
                push_common(&mut args, &options.common);
                push_flag(&mut args, "--default-cancel", options.default_cancel);
                push_layout(&mut args, &options.layout);
            }
            Dialog::Entry { text, options } => {
                push_text(&mut args, text);
                push_value(&mut args, "--entry-text", &options.entry_text);
                push_flag(&mut args, "--hide-text", options.hide_text);
                push_common(&mut args, &options.common);
            }
            Dialog::Password { options } => {
                push_flag(&mut args, "--username", options.username);
                push_common(&mut args, &options.common);
            }
            Dialog::List {
                text,
                columns,
                rows,
                options,
            } => {
                push_text(&mut args, text);
                push_flag(&mut args, "--checklist", options.checklist);
                push_flag(&mut args, "--radiolist", options.radiolist);
                push_flag(&mut args, "--imagelist", options.imagelist);
                push_flag(&mut args, "--multiple", options.multiple);
                push_flag(&mut args, "--editable", options.editable);
                push_value(&mut args, "--separator", &options.separator);
                push_value(&mut args, "--print-column", &options.print_column);
                push_value(&mut args, "--hide-column", &options.hide_column);
                push_flag(&mut args, "--hide-header", options.hide_header);
                push_common(&mut args, &options.common);

                args.extend(columns.iter().map(|col| format!("--column={}", col)));
                args.extend(rows.iter().flatten().cloned());
            }
            Dialog::FileSelection { options } => {
                push_flag(&mut args, "--multiple", options.multiple);
                push_flag(&mut args, "--directory", options.directory);
                push_flag(&mut args, "--save", options.save);
                push_value(&mut args, "--filename", &options.filename);
                push_flag(&mut args, "--confirm-overwrite", options.confirm_overwrite);
                push_value(&mut args, "--separator", &options.separator);
                push_common(&mut args, &options.common);
            }
            Dialog::ColorSelection { options } => {
                if let Some(color) = &options.color {
                    args.push(format!("--color={}", normalize_color(color)));
                }
                push_flag(&mut args, "--show-palette", options.show_palette);
                push_common(&mut args, &options.common);
            }
            Dialog::Calendar { text, options } => {
                push_text(&mut args, text);
                push_value(&mut args, "--day", &options.day);
                push_value(&mut args, "--month", &options.month);
                push_value(&mut args, "--year", &options.year);
                push_value(&mut args, "--date-format", &options.date_format);
                push_common(&mut args, &options.common);
            }
            Dialog::Scale { text, options } => {
                push_text(&mut args, text);
                push_value(&mut args, "--value", &options.value);
                push_value(&mut args, "--min-value", &options.min_value);
                push_value(&mut args, "--max-value", &options.max_value);
                push_value(&mut args, "--step", &options.step);
                push_flag(&mut args, "--print-partial", options.print_partial);
                push_flag(&mut args, "--hide-value", options.hide_value);
                push_common(&mut args, &options.common);
            }
            Dialog::Forms { fields, options } => {
                push_value(&mut args, "--text", &options.text);
                push_value(&mut args, "--separator", &options.separator);
                push_value(&mut args, "--forms-date-format", &options.forms_date_format);
                push_flag(&mut args, "--show-header", options.show_header);
                push_common(&mut args, &options.common);

                for field in fields {
                    field.push_args(&mut args);
                }
            }
            Dialog::TextInfo { options } => {
                push_value(&mut args, "--filename", &options.filename);
                push_flag(&mut args, "--editable", options.editable);
                push_flag(&mut args, "--html", options.html);
                push_value(&mut args, "--url", &options.url);
                push_value(&mut args, "--font", &options.font_name);
                push_value(&mut args, "--checkbox", &options.checkbox);
                push_flag(&mut args, "--auto-scroll", options.auto_scroll);
                push_common(&mut args, &options.common);
            }
            Dialog::Progress { text, options } => {
                push_text(&mut args, text);
                push_value(&mut args, "--percentage", &options.percentage);
                push_flag(&mut args, "--auto-close", options.auto_close);
                push_flag(&mut args, "--auto-kill", options.auto_kill);
                push_flag(&mut args, "--pulsate", options.pulsate);
                push_flag(&mut args, "--no-cancel", options.no_cancel);
                push_flag(&mut args, "--time-remaining", options.time_remaining);
                push_common(&mut args, &options.common);
            }
        }

        args
    }
}

fn push_flag(args: &mut Vec<String>, flag: &str, enabled: bool) {
    if enabled {
        args.push(flag.to_string());
    }
}

fn push_value<T: std::fmt::Display>(args: &mut Vec<String>, flag: &str, value: &Option<T>) {
    if let Some(value) = value {
        args.push(format!("{}={}", flag, value));
    }
}

/// `--text=` for dialogs where an empty prompt means no flag
fn push_text(args: &mut Vec<String>, text: &str) {
    if !text.is_empty() {
        args.push(format!("--text={}", text));
    }
}

fn push_common(args: &mut Vec<String>, common: &CommonOptions) {
    push_value(args, "--title", &common.title);
    push_value(args, "--width", &common.width);
    push_value(args, "--height", &common.height);
    push_value(args, "--timeout", &common.timeout);
    push_value(args, "--ok-label", &common.ok_label);
    push_value(args, "--cancel-label", &common.cancel_label);
    push_value(args, "--extra-button", &common.extra_button);
    push_flag(args, "--modal", common.modal);
    push_value(args, "--attach", &common.attach);
}

fn push_layout(args: &mut Vec<String>, layout: &TextLayout) {
    push_flag(args, "--no-wrap", layout.no_wrap);
    push_flag(args, "--no-markup", layout.no_markup);
    push_flag(args, "--ellipsize", layout.ellipsize);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_common() -> CommonOptions {
        CommonOptions {
            title: Some("T".to_string()),
            width: Some(400),
            height: Some(300),
            timeout: Some(10),
            ok_label: Some("Go".to_string()),
            cancel_label: Some("Stop".to_string()),
            extra_button: Some("Later".to_string()),
            modal: true,
            attach: Some(42),
        }
    }

    const COMMON_ARGS: [&str; 9] = [
        "--title=T",
        "--width=400",
        "--height=300",
        "--timeout=10",
        "--ok-label=Go",
        "--cancel-label=Stop",
        "--extra-button=Later",
        "--modal",
        "--attach=42",
    ];

    fn with_common(head: &[&str], tail: &[&str]) -> Vec<String> {
        head.iter()
            .chain(COMMON_ARGS.iter())
            .chain(tail.iter())
            .map(|s| s.to_string())
            .collect()
    }

    #[test]
    fn test_kind_flags() {
        assert_eq!(DialogKind::FileSelection.flag(), "--file-selection");
        assert_eq!(DialogKind::TextInfo.flag(), "--text-info");
        assert_eq!(DialogKind::ColorSelection.name(), "color-selection");
    }

    #[test]
    fn test_message_defaults() {
        let options = MessageOptions::default();
        let dialog = Dialog::Warning {
            text: "Careful",
            options: &options,
        };
        assert_eq!(dialog.args(), ["--warning", "--text=Careful"]);
    }

    #[test]
    fn test_message_full() {
        let options = MessageOptions {
            common: full_common(),
            layout: TextLayout {
                no_wrap: true,
                no_markup: true,
                ellipsize: true,
            },
            icon_name: Some("dialog-information".to_string()),
        };
        let dialog = Dialog::Info {
            text: "Hello",
            options: &options,
        };
        assert_eq!(
            dialog.args(),
            with_common(
                &["--info", "--text=Hello"],
                &[
                    "--no-wrap",
                    "--no-markup",
                    "--ellipsize",
                    "--icon-name=dialog-information"
                ]
            )
        );
    }

    #[test]
    fn test_question_full() {
        let options = QuestionOptions {
            common: full_common(),
            layout: TextLayout {
                no_wrap: true,
                no_markup: true,
                ellipsize: true,
            },
            default_cancel: true,
        };
        let dialog = Dialog::Question {
            text: "Sure?",
            options: &options,
        };
        assert_eq!(
            dialog.args(),
            with_common(
                &["--question", "--text=Sure?"],
                &["--default-cancel", "--no-wrap", "--no-markup", "--ellipsize"]
            )
        );
    }

    #[test]
    fn test_entry_and_password() {
        let options = EntryOptions {
            common: full_common(),
            entry_text: Some("John".to_string()),
            hide_text: true,
        };
        let dialog = Dialog::Entry {
            text: "Name:",
            options: &options,
        };
        assert_eq!(
            dialog.args(),
            with_common(&["--entry", "--text=Name:", "--entry-text=John", "--hide-text"], &[])
        );

        let empty = EntryOptions::default();
        let dialog = Dialog::Entry {
            text: "",
            options: &empty,
        };
        assert_eq!(dialog.args(), ["--entry"]);

        let password = PasswordOptions {
            common: CommonOptions::default(),
            username: true,
        };
        assert_eq!(
            Dialog::Password { options: &password }.args(),
            ["--password", "--username"]
        );
    }

    #[test]
    fn test_list_full() {
        let options = ListOptions {
            common: full_common(),
            checklist: true,
            radiolist: true,
            imagelist: true,
            multiple: true,
            editable: true,
            separator: Some(";".to_string()),
            print_column: Some("ALL".to_string()),
            hide_column: Some(2),
            hide_header: true,
        };
        let columns = vec!["Pick".to_string(), "Fruit".to_string()];
        let rows = vec![
            vec!["FALSE".to_string(), "Apple".to_string()],
            vec!["TRUE".to_string(), "Banana".to_string()],
        ];
        let dialog = Dialog::List {
            text: "Choose",
            columns: &columns,
            rows: &rows,
            options: &options,
        };
        assert_eq!(
            dialog.args(),
            with_common(
                &[
                    "--list",
                    "--text=Choose",
                    "--checklist",
                    "--radiolist",
                    "--imagelist",
                    "--multiple",
                    "--editable",
                    "--separator=;",
                    "--print-column=ALL",
                    "--hide-column=2",
                    "--hide-header",
                ],
                &[
                    "--column=Pick",
                    "--column=Fruit",
                    "FALSE",
                    "Apple",
                    "TRUE",
                    "Banana"
                ]
            )
        );
    }

    #[test]
    fn test_file_selection() {
        let options = FileSelectionOptions {
            common: full_common(),
            multiple: true,
            directory: true,
            save: true,
            filename: Some("/tmp/doc.txt".to_string()),
            confirm_overwrite: true,
            separator: Some(":".to_string()),
        };
        assert_eq!(
            Dialog::FileSelection { options: &options }.args(),
            with_common(
                &[
                    "--file-selection",
                    "--multiple",
                    "--directory",
                    "--save",
                    "--filename=/tmp/doc.txt",
                    "--confirm-overwrite",
                    "--separator=:",
                ],
                &[]
            )
        );
        let defaults = FileSelectionOptions::default();
        assert_eq!(
            Dialog::FileSelection { options: &defaults }.args(),
            ["--file-selection"]
        );
    }

    #[test]
    fn test_color_selection_normalizes_hex() {
        let options = ColorSelectionOptions {
            common: CommonOptions::default(),
            color: Some("#FF5733".to_string()),
            show_palette: true,
        };
        assert_eq!(
            Dialog::ColorSelection { options: &options }.args(),
            [
                "--color-selection",
                "--color=rgb(65535,22359,13107)",
                "--show-palette"
            ]
        );
    }

    #[test]
    fn test_calendar_and_scale() {
        let calendar = CalendarOptions {
            common: CommonOptions::default(),
            day: Some(21),
            month: Some(11),
            year: Some(2025),
            date_format: Some("%Y-%m-%d".to_string()),
        };
        assert_eq!(
            Dialog::Calendar {
                text: "When?",
                options: &calendar
            }
            .args(),
            [
                "--calendar",
                "--text=When?",
                "--day=21",
                "--month=11",
                "--year=2025",
                "--date-format=%Y-%m-%d"
            ]
        );

        let scale = ScaleOptions {
            common: CommonOptions::default(),
            value: Some(0),
            min_value: Some(-10),
            max_value: Some(10),
            step: Some(2),
            print_partial: true,
            hide_value: true,
        };
        assert_eq!(
            Dialog::Scale {
                text: "Level",
                options: &scale
            }
            .args(),
            [
                "--scale",
                "--text=Level",
                "--value=0",
                "--min-value=-10",
                "--max-value=10",
                "--step=2",
                "--print-partial",
                "--hide-value"
            ]
        );
    }

    #[test]
    fn test_forms() {
        let options = FormsOptions {
            common: CommonOptions::default(),
            text: Some("Login".to_string()),
            separator: Some(",".to_string()),
            forms_date_format: Some("%d/%m".to_string()),
            show_header: true,
        };
        let fields = vec![
            FormField::entry("Name"),
            FormField::password("Password"),
            FormField::combo("Role", ["Admin", "User"]),
        ];
        assert_eq!(
            Dialog::Forms {
                fields: &fields,
                options: &options
            }
            .args(),
            [
                "--forms",
                "--text=Login",
                "--separator=,",
                "--forms-date-format=%d/%m",
                "--show-header",
                "--add-entry=Name",
                "--add-password=Password",
                "--add-combo=Role",
                "--combo-values=Admin|User"
            ]
        );
    }

    #[test]
    fn test_text_info() {
        let options = TextOptions {
            common: CommonOptions::default(),
            filename: Some("notes.txt".to_string()),
            editable: true,
            font_name: Some("Monospace 10".to_string()),
            checkbox: Some("I agree".to_string()),
            html: true,
            url: Some("https://example.com".to_string()),
            auto_scroll: true,
        };
        assert_eq!(
            Dialog::TextInfo { options: &options }.args(),
            [
                "--text-info",
                "--filename=notes.txt",
                "--editable",
                "--html",
                "--url=https://example.com",
                "--font=Monospace 10",
                "--checkbox=I agree",
                "--auto-scroll"
            ]
        );
    }

    #[test]
    fn test_progress() {
        let options = ProgressOptions {
            common: full_common(),
            percentage: Some(0),
            pulsate: true,
            auto_close: true,
            auto_kill: true,
            no_cancel: true,
            time_remaining: true,
        };
        assert_eq!(
            Dialog::Progress {
                text: "Working",
                options: &options
            }
            .args(),
            with_common(
                &[
                    "--progress",
                    "--text=Working",
                    "--percentage=0",
                    "--auto-close",
                    "--auto-kill",
                    "--pulsate",
                    "--no-cancel",
                    "--time-remaining",
                ],
                &[]
            )
        );
    }

    #[test]
    fn test_default_options_emit_only_kind_flag() {
        let scale = ScaleOptions::default();
        let progress = ProgressOptions::default();
        let forms = FormsOptions::default();
        let text = TextOptions::default();
        let dialogs = [
            Dialog::Scale {
                text: "",
                options: &scale,
            },
            Dialog::Progress {
                text: "",
                options: &progress,
            },
            Dialog::Forms {
                fields: &[],
                options: &forms,
            },
            Dialog::TextInfo { options: &text },
        ];
        for dialog in dialogs {
            assert_eq!(dialog.args(), [dialog.kind().flag()]);
        }
    }
}
