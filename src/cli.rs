use clap::{Parser, Subcommand};

/// QuickConsume — instant food consumption decisions with buff-safety rules.
#[derive(Parser, Debug)]
#[command(name = "quick_consume")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the settings JSON file.
    #[arg(short, long, default_value = "quick_consume_settings.json")]
    pub config: String,

    /// CSV buff table to use instead of the built-in data.
    #[arg(long)]
    pub buff_table: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decide whether a single item may be instantly consumed.
    Eval {
        /// Item name, matched case-insensitively against the buff table.
        name: String,

        /// The item's edibility rating; zero or below means not food.
        edibility: i32,

        /// Evaluate as if health and stamina were both full.
        #[arg(long)]
        full: bool,

        /// Block consumption when full, overriding the settings file.
        #[arg(long)]
        no_allow_when_full: bool,
    },

    /// Interactive consumption session over an inventory file.
    Consume {
        /// Path to the inventory JSON file.
        #[arg(short, long, default_value = "inventory.json")]
        items: String,
    },

    /// Inspect the buff knowledge table.
    Buffs {
        #[command(subcommand)]
        command: BuffsCommand,
    },

    /// Show or edit settings.
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum BuffsCommand {
    /// List every buff-granting food.
    List,

    /// Show buff details for one food.
    Info { name: String },

    /// Write the active buff table as CSV, the format `--buff-table` reads.
    Export { path: String },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Print the current settings.
    Show,

    /// Edit settings interactively and save.
    Edit,

    /// Restore default settings.
    Reset,
}
