mod commands;

use std::path::PathBuf;

use cc_core::config::LogFormat;
use cc_core::settings::SettingsManager;
use cc_core::types::ItemId;
use cc_telemetry::LogOutput;
use clap::{Parser, Subcommand};

use commands::{Collection, Slot};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

/// command-center CLI -- browse agent cards, tasks and the workforce roster.
#[derive(Parser)]
#[command(name = "cc", version, about)]
struct Cli {
    /// Settings file (default: ~/.config/command-center/settings.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a collection grouped by category. Running `cc` with no
    /// subcommand renders the attention collection.
    View {
        collection: Collection,
        #[command(flatten)]
        opts: commands::view::ViewOptions,
    },

    /// Press a card's button and print where it leads.
    Action {
        collection: Collection,
        /// Card id.
        id: ItemId,
        slot: Slot,
        /// Load items from a JSON array instead of the built-in data.
        #[arg(long)]
        file: Option<PathBuf>,
        /// Print the outcome as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the sidebar pages and their routes.
    Pages,

    /// Inspect or create the settings file.
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Print the effective configuration as TOML.
    Show,
    /// Write the default configuration to the settings file.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => SettingsManager::new(path),
        None => SettingsManager::default_path(),
    };
    let config = settings.load_or_default();

    let output = match config.general.log_format {
        LogFormat::Human => LogOutput::Human,
        LogFormat::Json => LogOutput::Json,
    };
    cc_telemetry::init("cc", &config.general.log_level, output);

    match cli.command {
        None => {
            commands::view::run(&config, Collection::Attention, &Default::default())?;
        }
        Some(Commands::View { collection, opts }) => {
            commands::view::run(&config, collection, &opts)?;
        }
        Some(Commands::Action {
            collection,
            id,
            slot,
            file,
            json,
        }) => {
            commands::action::run(&config, collection, &id, slot, file.as_deref(), json)?;
        }
        Some(Commands::Pages) => {
            print!("{}", commands::pages::render());
        }
        Some(Commands::Config { command }) => match command {
            ConfigCommand::Show => commands::config::show(&settings, &config)?,
            ConfigCommand::Init { force } => commands::config::init(&settings, force)?,
        },
    }

    Ok(())
}
