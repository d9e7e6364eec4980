//! zenity-wrapper - Typed zenity dialogs from the command line
//!
//! Each subcommand shows one dialog and prints its result on stdout, either
//! as plain text or as JSON. A cancelled dialog exits with status 1, the same
//! as zenity itself.

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io::{self, BufRead, Read};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use zenity_wrapper::error::EXIT_CANCELLED;
use zenity_wrapper::{
    Button, CalendarOptions, ColorSelectionOptions, CommonOptions, Config, EntryOptions,
    FileSelectionOptions, FormField, FormsOptions, ListOptions, MessageOptions, PasswordOptions,
    ProgressOptions, QuestionOptions, ScaleOptions, Selection, TextLayout, TextOptions, Zenity,
    ZenityError,
};

#[derive(Parser)]
#[command(name = "zenity-wrapper")]
#[command(about = "Typed zenity dialogs - build flags, run zenity, print parsed results")]
#[command(version)]
#[command(after_help = r#"EXAMPLES:
    zenity-wrapper info "Build complete" --title Build
    zenity-wrapper question "Deploy now?" --ok-label Deploy
    zenity-wrapper entry "Your name:" --entry-text John
    zenity-wrapper list "Pick fruit" --column Fruit --row Apple --row Banana
    zenity-wrapper list "Pick" --checklist --column Pick --column Fruit --row FALSE,Apple --row TRUE,Pear
    zenity-wrapper file --multiple --json
    zenity-wrapper color --color '#FF5733' --hex
    zenity-wrapper forms --field entry:Name --field combo:Role=Dev|Ops
    seq 0 10 100 | zenity-wrapper progress "Copying" --auto-close

EXIT STATUS:
    0   dialog confirmed, result printed
    1   dialog cancelled
    >1  zenity or wrapper failure

CONFIGURATION:
    ~/.config/zenity-wrapper/config.toml
        binary = "zenity"
        gtk_workaround = true
        [env]
        GDK_BACKEND = "x11"
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// zenity binary name or path (overrides config)
    #[arg(long, global = true)]
    binary: Option<String>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(flatten)]
    common: CommonArgs,
}

/// Options every dialog accepts
#[derive(Args)]
struct CommonArgs {
    /// Dialog window title
    #[arg(long, global = true)]
    title: Option<String>,

    /// Dialog width in pixels
    #[arg(long, global = true)]
    width: Option<u32>,

    /// Dialog height in pixels
    #[arg(long, global = true)]
    height: Option<u32>,

    /// Close the dialog after N seconds
    #[arg(long, global = true)]
    timeout: Option<u32>,

    /// OK button label
    #[arg(long, global = true)]
    ok_label: Option<String>,

    /// Cancel button label
    #[arg(long, global = true)]
    cancel_label: Option<String>,

    /// Extra button label
    #[arg(long, global = true)]
    extra_button: Option<String>,

    /// Make the dialog modal
    #[arg(long, global = true)]
    modal: bool,
}

impl CommonArgs {
    fn to_options(&self) -> CommonOptions {
        CommonOptions {
            title: self.title.clone(),
            width: self.width,
            height: self.height,
            timeout: self.timeout,
            ok_label: self.ok_label.clone(),
            cancel_label: self.cancel_label.clone(),
            extra_button: self.extra_button.clone(),
            modal: self.modal,
            attach: None,
        }
    }
}

#[derive(Args)]
struct LayoutArgs {
    /// Disable text wrapping
    #[arg(long)]
    no_wrap: bool,

    /// Disable Pango markup
    #[arg(long)]
    no_markup: bool,

    /// Ellipsize long text
    #[arg(long)]
    ellipsize: bool,
}

impl LayoutArgs {
    fn to_layout(&self) -> TextLayout {
        TextLayout {
            no_wrap: self.no_wrap,
            no_markup: self.no_markup,
            ellipsize: self.ellipsize,
        }
    }
}

#[derive(Args)]
struct MessageArgs {
    /// Message text
    text: String,

    #[command(flatten)]
    layout: LayoutArgs,

    /// Icon name
    #[arg(long)]
    icon: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show an information message
    Info(MessageArgs),

    /// Show a warning message
    Warning(MessageArgs),

    /// Show an error message
    Error(MessageArgs),

    /// Ask a yes/no question (exit 1 on No)
    Question {
        /// Question text
        text: String,

        #[command(flatten)]
        layout: LayoutArgs,

        /// Make Cancel the default button
        #[arg(long)]
        default_cancel: bool,
    },

    /// Ask for a line of text
    Entry {
        /// Prompt text
        #[arg(default_value = "")]
        text: String,

        /// Pre-filled value
        #[arg(long)]
        entry_text: Option<String>,

        /// Mask the typed text
        #[arg(long)]
        hide_text: bool,
    },

    /// Ask for a password
    Password {
        /// Also ask for a username
        #[arg(long)]
        username: bool,
    },

    /// Pick rows from a list
    List {
        /// Prompt text
        #[arg(default_value = "")]
        text: String,

        /// Column header (repeatable)
        #[arg(long = "column", required = true)]
        columns: Vec<String>,

        /// Row cells joined by --delimiter (repeatable)
        #[arg(long = "row")]
        rows: Vec<String>,

        /// Delimiter between cells in --row
        #[arg(long, default_value = ",")]
        delimiter: String,

        /// First column holds checkboxes
        #[arg(long)]
        checklist: bool,

        /// First column holds radio buttons
        #[arg(long)]
        radiolist: bool,

        /// Allow several rows
        #[arg(long)]
        multiple: bool,

        /// Allow editing cells
        #[arg(long)]
        editable: bool,

        /// Output separator
        #[arg(long)]
        separator: Option<String>,

        /// Column to print (number or ALL)
        #[arg(long)]
        print_column: Option<String>,

        /// Column to hide
        #[arg(long)]
        hide_column: Option<u32>,

        /// Hide column headers
        #[arg(long)]
        hide_header: bool,
    },

    /// Pick files or directories
    File {
        /// Allow several files
        #[arg(long)]
        multiple: bool,

        /// Pick directories
        #[arg(long)]
        directory: bool,

        /// Save mode
        #[arg(long)]
        save: bool,

        /// Default file name
        #[arg(long)]
        filename: Option<String>,

        /// Confirm overwriting in save mode
        #[arg(long)]
        confirm_overwrite: bool,

        /// Output separator
        #[arg(long)]
        separator: Option<String>,
    },

    /// Pick a colour
    Color {
        /// Initial colour (#RRGGBB or rgb(...))
        #[arg(long)]
        color: Option<String>,

        /// Show the palette
        #[arg(long)]
        show_palette: bool,

        /// Print the picked colour as #RRGGBB
        #[arg(long)]
        hex: bool,
    },

    /// Pick a date
    Calendar {
        /// Prompt text
        #[arg(default_value = "")]
        text: String,

        #[arg(long)]
        day: Option<u32>,

        #[arg(long)]
        month: Option<u32>,

        #[arg(long)]
        year: Option<u32>,

        /// strftime-style output format
        #[arg(long)]
        date_format: Option<String>,
    },

    /// Pick a number on a slider
    Scale {
        /// Prompt text
        #[arg(default_value = "")]
        text: String,

        /// Initial value
        #[arg(long, allow_hyphen_values = true)]
        value: Option<i32>,

        #[arg(long, allow_hyphen_values = true)]
        min_value: Option<i32>,

        #[arg(long, allow_hyphen_values = true)]
        max_value: Option<i32>,

        #[arg(long)]
        step: Option<i32>,

        /// Print intermediate values
        #[arg(long)]
        print_partial: bool,

        /// Hide the value label
        #[arg(long)]
        hide_value: bool,
    },

    /// Fill in a multi-field form
    Forms {
        /// Field as kind:label[=v1|v2] (entry, password, multiline, calendar, list, combo)
        #[arg(long = "field", required = true)]
        fields: Vec<FormField>,

        /// Text above the fields
        #[arg(long)]
        text: Option<String>,

        /// Output separator
        #[arg(long)]
        separator: Option<String>,

        /// Date format for calendar fields
        #[arg(long)]
        date_format: Option<String>,

        /// Show list headers
        #[arg(long)]
        show_header: bool,
    },

    /// Show text from stdin (or --filename/--url) in a scrollable box
    Text {
        /// Load text from this file instead of stdin
        #[arg(long)]
        filename: Option<PathBuf>,

        /// Allow editing and print the edited text
        #[arg(long)]
        editable: bool,

        /// Render as HTML
        #[arg(long)]
        html: bool,

        /// Load this URL (HTML mode)
        #[arg(long)]
        url: Option<String>,

        /// Font name
        #[arg(long)]
        font: Option<String>,

        /// Require ticking a checkbox with this label
        #[arg(long)]
        checkbox: Option<String>,

        /// Keep scrolled to the end
        #[arg(long)]
        auto_scroll: bool,
    },

    /// Show a progress bar driven by "<percent> [message]" lines on stdin
    Progress {
        /// Initial status text
        #[arg(default_value = "")]
        text: String,

        /// Initial percentage
        #[arg(long)]
        percentage: Option<u32>,

        /// Indeterminate bar
        #[arg(long)]
        pulsate: bool,

        /// Close at 100%
        #[arg(long)]
        auto_close: bool,

        /// Kill the parent on Cancel
        #[arg(long)]
        auto_kill: bool,

        /// Hide the Cancel button
        #[arg(long)]
        no_cancel: bool,

        /// Estimate remaining time
        #[arg(long)]
        time_remaining: bool,
    },

    /// Show the resolved zenity binary and configuration
    Check,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(binary) = &cli.binary {
        config = config.with_binary(binary);
    }
    let zenity = Zenity::from_config(&config)?;
    let common = cli.common.to_options();
    let json = cli.json;

    match cli.command {
        Commands::Info(args) => {
            zenity.info(&args.text, &message_options(common, args.layout, args.icon));
            Ok(())
        }
        Commands::Warning(args) => {
            zenity.warning(&args.text, &message_options(common, args.layout, args.icon));
            Ok(())
        }
        Commands::Error(args) => {
            zenity.error(&args.text, &message_options(common, args.layout, args.icon));
            Ok(())
        }
        Commands::Question {
            text,
            layout,
            default_cancel,
        } => {
            let options = QuestionOptions {
                common,
                layout: layout.to_layout(),
                default_cancel,
            };
            let answer = zenity.question(&text, &options)?;
            if json {
                println!("{}", answer);
            }
            if !answer {
                std::process::exit(EXIT_CANCELLED);
            }
            Ok(())
        }
        Commands::Entry {
            text,
            entry_text,
            hide_text,
        } => {
            let options = EntryOptions {
                common,
                entry_text,
                hide_text,
            };
            emit(json, zenity.entry(&text, &options)?, |v| v.clone())
        }
        Commands::Password { username } => {
            let options = PasswordOptions { common, username };
            if username {
                emit(json, zenity.credentials(&options)?, |c| {
                    format!("{}\n{}", c.username, c.password)
                })
            } else {
                emit(json, zenity.password(&options)?, |v| v.clone())
            }
        }
        Commands::List {
            text,
            columns,
            rows,
            delimiter,
            checklist,
            radiolist,
            multiple,
            editable,
            separator,
            print_column,
            hide_column,
            hide_header,
        } => {
            let options = ListOptions {
                common,
                checklist,
                radiolist,
                imagelist: false,
                multiple,
                editable,
                separator,
                print_column,
                hide_column,
                hide_header,
            };
            let rows = split_rows(&rows, &delimiter, columns.len())?;
            emit(json, zenity.list(&text, columns, rows, &options)?, format_selection)
        }
        Commands::File {
            multiple,
            directory,
            save,
            filename,
            confirm_overwrite,
            separator,
        } => {
            let options = FileSelectionOptions {
                common,
                multiple,
                directory,
                save,
                filename,
                confirm_overwrite,
                separator,
            };
            emit(json, zenity.file_selection(&options)?, format_selection)
        }
        Commands::Color {
            color,
            show_palette,
            hex,
        } => {
            let options = ColorSelectionOptions {
                common,
                color,
                show_palette,
            };
            if hex {
                emit(json, zenity.color_rgb(&options)?.map(|c| c.to_hex()), |v| v.clone())
            } else {
                emit(json, zenity.color_rgb(&options)?, |c| c.to_string())
            }
        }
        Commands::Calendar {
            text,
            day,
            month,
            year,
            date_format,
        } => {
            let options = CalendarOptions {
                common,
                day,
                month,
                year,
                date_format,
            };
            emit(json, zenity.calendar(&text, &options)?, |v| v.clone())
        }
        Commands::Scale {
            text,
            value,
            min_value,
            max_value,
            step,
            print_partial,
            hide_value,
        } => {
            let options = ScaleOptions {
                common,
                value,
                min_value,
                max_value,
                step,
                print_partial,
                hide_value,
            };
            emit(json, zenity.scale(&text, &options)?, |v| v.to_string())
        }
        Commands::Forms {
            fields,
            text,
            separator,
            date_format,
            show_header,
        } => {
            let options = FormsOptions {
                common,
                text,
                separator,
                forms_date_format: date_format,
                show_header,
            };
            let result = zenity.forms(&fields, &options)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else if let Some(values) = &result.values {
                for (field, value) in fields.iter().zip(values) {
                    println!("{}: {}", field.label(), value);
                }
            } else if result.button == Button::Extra {
                println!("{}", options.common.extra_button.as_deref().unwrap_or_default());
            }
            if result.button != Button::Ok {
                std::process::exit(EXIT_CANCELLED);
            }
            Ok(())
        }
        Commands::Text {
            filename,
            editable,
            html,
            url,
            font,
            checkbox,
            auto_scroll,
        } => {
            let body = if filename.is_none() && url.is_none() {
                let mut body = String::new();
                io::stdin()
                    .read_to_string(&mut body)
                    .context("Failed to read text from stdin")?;
                body
            } else {
                String::new()
            };
            let options = TextOptions {
                common,
                filename: filename.map(|p| p.to_string_lossy().to_string()),
                editable,
                font_name: font,
                checkbox,
                html,
                url,
                auto_scroll,
            };
            emit(json, zenity.text(&body, &options)?, |v| v.clone())
        }
        Commands::Progress {
            text,
            percentage,
            pulsate,
            auto_close,
            auto_kill,
            no_cancel,
            time_remaining,
        } => {
            let options = ProgressOptions {
                common,
                percentage,
                pulsate,
                auto_close,
                auto_kill,
                no_cancel,
                time_remaining,
            };
            cmd_progress(&zenity, &text, &options)
        }
        Commands::Check => cmd_check(&zenity, &config, json),
    }
}

fn message_options(common: CommonOptions, layout: LayoutArgs, icon: Option<String>) -> MessageOptions {
    MessageOptions {
        common,
        layout: layout.to_layout(),
        icon_name: icon,
    }
}

/// Print a dialog result; a cancelled dialog exits with status 1 like zenity
fn emit<T, F>(json: bool, value: Option<T>, plain: F) -> Result<()>
where
    T: Serialize,
    F: FnOnce(&T) -> String,
{
    match value {
        Some(value) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("{}", plain(&value));
            }
            Ok(())
        }
        None => {
            if json {
                println!("null");
            }
            std::process::exit(EXIT_CANCELLED);
        }
    }
}

fn format_selection(selection: &Selection) -> String {
    match selection {
        Selection::Single(value) => value.clone(),
        Selection::Multiple(values) => values.join("\n"),
    }
}

/// Split `--row` values into cells, checking each row fills every column
fn split_rows(rows: &[String], delimiter: &str, columns: usize) -> Result<Vec<Vec<String>>> {
    rows.iter()
        .map(|row| {
            let cells: Vec<String> = row.split(delimiter).map(str::to_string).collect();
            if cells.len() != columns {
                bail!(
                    "Row '{}' has {} cells but there are {} columns",
                    row,
                    cells.len(),
                    columns
                );
            }
            Ok(cells)
        })
        .collect()
}

/// Parse a progress line: `<percent> [message]`, or `# message`
fn parse_progress_line(line: &str) -> Option<(Option<u32>, Option<&str>)> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if let Some(message) = line.strip_prefix('#') {
        return Some((None, Some(message.trim())));
    }
    let (number, message) = match line.split_once(char::is_whitespace) {
        Some((number, message)) => (number, Some(message.trim())),
        None => (line, None),
    };
    match number.parse::<u32>() {
        Ok(percent) => Some((Some(percent), message.filter(|m| !m.is_empty()))),
        Err(_) => Some((None, Some(line))),
    }
}

fn cmd_progress(zenity: &Zenity, text: &str, options: &ProgressOptions) -> Result<()> {
    let mut handle = zenity.progress(text, options)?;

    for line in io::stdin().lock().lines() {
        let line = line.context("Failed to read progress from stdin")?;
        let sent = match parse_progress_line(&line) {
            Some((Some(percent), message)) => handle.update(percent, message),
            Some((None, Some(message))) => handle.message(message),
            _ => Ok(()),
        };
        if let Err(e) = sent {
            // Cancelled by the user; close() reports it
            if matches!(e.downcast_ref::<ZenityError>(), Some(ZenityError::ProgressClosed)) {
                break;
            }
            return Err(e);
        }
    }

    if !handle.close()? {
        std::process::exit(EXIT_CANCELLED);
    }
    Ok(())
}

fn cmd_check(zenity: &Zenity, config: &Config, json: bool) -> Result<()> {
    let runner = zenity.runner();

    if json {
        let report = serde_json::json!({
            "binary": runner.binary(),
            "config_path": Config::config_path(),
            "config": config,
            "env": runner.env(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("zenity-wrapper check");
    println!("  Binary: {}", runner.binary().display());
    println!("  Config: {}", Config::config_path().display());
    if runner.env().is_empty() {
        println!("  Env:    (none)");
    } else {
        for (key, value) in runner.env() {
            println!("  Env:    {}={:?}", key, value);
        }
    }
    Ok(())
}
