//! zenity-forms - Pick and fill developer forms

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use zenity_forms::{find_preset, presets, FormCollection};
use zenity_wrapper::{CommonFields, Config, ListOptions, MessageOptions, Zenity};

#[derive(Parser)]
#[command(name = "zenity-forms")]
#[command(about = "Developer forms collection - package setup, commits, configs and more")]
#[command(version)]
#[command(after_help = r#"EXAMPLES:
    zenity-forms                  # Pick a form from a list dialog
    zenity-forms list             # Show all forms
    zenity-forms run git-commit   # Fill one form, print JSON
    zenity-forms run docker --title "Deploy API"
"#)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// zenity binary name or path (overrides config)
    #[arg(long, global = true)]
    binary: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available forms
    List,

    /// Fill one form and print its values as JSON
    Run {
        /// Form id or name
        form: String,

        /// Window title instead of the form's own
        #[arg(long)]
        title: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::List) => {
            cmd_list();
            Ok(())
        }
        Some(Commands::Run { form, title }) => {
            cmd_run(&zenity(cli.binary)?, &form, title.as_deref())
        }
        None => cmd_pick(&zenity(cli.binary)?),
    }
}

fn zenity(binary: Option<String>) -> Result<Zenity> {
    let mut config = Config::load()?;
    if let Some(binary) = binary {
        config = config.with_binary(binary);
    }
    Zenity::from_config(&config)
}

fn cmd_list() {
    let mut category = "";
    for preset in presets() {
        if preset.category != category {
            category = preset.category;
            println!("{}:", category);
        }
        println!("  {:<20} {}", preset.id, preset.name);
    }
}

fn cmd_run(zenity: &Zenity, form: &str, title: Option<&str>) -> Result<()> {
    let preset = match find_preset(form) {
        Some(preset) => preset,
        None => bail!("Unknown form '{}'. Run 'zenity-forms list' to see all forms.", form),
    };

    match FormCollection::new(zenity).run(&preset, title)? {
        Some(values) => {
            println!("{}", serde_json::to_string_pretty(&values)?);
            Ok(())
        }
        None => {
            eprintln!("Form cancelled");
            std::process::exit(1);
        }
    }
}

fn cmd_pick(zenity: &Zenity) -> Result<()> {
    let presets = presets();
    let rows: Vec<[&str; 2]> = presets.iter().map(|p| [p.name, p.category]).collect();
    let options = ListOptions::default()
        .with_title("Developer Forms Collection")
        .with_width(500)
        .with_height(600);

    let selection = match zenity.list("Select a form:", ["Form", "Category"], rows, &options)? {
        Some(selection) => selection,
        None => return Ok(()),
    };
    let name = selection.first().unwrap_or_default();
    let preset = match presets.iter().find(|p| p.name == name) {
        Some(preset) => preset,
        None => bail!("Unknown form '{}'", name),
    };

    match FormCollection::new(zenity).run(preset, None)? {
        Some(values) => {
            let json = serde_json::to_string_pretty(&values)?;
            println!("{}", json);
            let options = MessageOptions::default().with_title("Result").with_width(500);
            zenity.info(&format!("<b>Form Data:</b>\n\n{}", json), &options);
        }
        None => eprintln!("Form cancelled"),
    }
    Ok(())
}
