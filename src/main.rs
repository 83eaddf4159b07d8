use clap::Parser;
use std::path::Path;

use quick_consume_rs::buffs::{BuffLookup, BuffSource};
use quick_consume_rs::cli::{BuffsCommand, Cli, Command, ConfigCommand};
use quick_consume_rs::config::{load_settings_or_default, save_settings, Settings};
use quick_consume_rs::decision::evaluate;
use quick_consume_rs::error::Result;
use quick_consume_rs::interface::{
    display_blocked, display_buff_info, display_buff_list, display_consumed,
    display_ineligible, display_inventory, display_settings, edit_settings,
    prompt_item_choice, prompt_yes_no, suggest_name,
};
use quick_consume_rs::models::ConsumptionOutcome;
use quick_consume_rs::state::{load_items, save_items, Inventory, PlayerState};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let buffs = BuffSource::new(cli.buff_table.as_deref().map(Path::new))?;

    match cli.command {
        Command::Eval {
            name,
            edibility,
            full,
            no_allow_when_full,
        } => cmd_eval(&cli.config, &buffs, &name, edibility, full, no_allow_when_full),
        Command::Consume { items } => cmd_consume(&cli.config, &buffs, &items),
        Command::Buffs { command } => match command {
            BuffsCommand::List => cmd_buffs_list(&buffs),
            BuffsCommand::Info { name } => cmd_buffs_info(&buffs, &name),
            BuffsCommand::Export { path } => cmd_buffs_export(&buffs, &path),
        },
        Command::Config { command } => match command {
            ConfigCommand::Show => cmd_config_show(&cli.config),
            ConfigCommand::Edit => cmd_config_edit(&cli.config),
            ConfigCommand::Reset => cmd_config_reset(&cli.config),
        },
    }
}

/// Run one decision and print the outcome.
fn cmd_eval(
    config_path: &str,
    buffs: &BuffSource,
    name: &str,
    edibility: i32,
    full: bool,
    no_allow_when_full: bool,
) -> Result<()> {
    let settings = load_settings_or_default(config_path);
    let allow_when_full = !no_allow_when_full && settings.allow_when_full;

    match evaluate(name, edibility, full, allow_when_full, buffs) {
        ConsumptionOutcome::Ineligible(reason) => display_ineligible(name, reason),
        ConsumptionOutcome::BlockedHasBuffs => display_blocked(name, buffs.lookup(name)),
        ConsumptionOutcome::Applied {
            health_gain,
            stamina_gain,
        } => {
            println!(
                "{} can be quickly consumed: +{} Health, +{} Energy",
                name, health_gain, stamina_gain
            );
        }
    }

    Ok(())
}

/// Interactive session: decide, apply clamped gains, decrement the stack.
fn cmd_consume(config_path: &str, buffs: &BuffSource, items_path: &str) -> Result<()> {
    let settings = load_settings_or_default(config_path);
    let path = Path::new(items_path);

    if !path.exists() {
        eprintln!("Inventory file not found: {}", items_path);
        return Ok(());
    }

    let items = load_items(path)?;
    let mut inventory = Inventory::new(items);
    let mut player = PlayerState::default();
    let mut changed = false;

    if settings.require_modifier {
        println!(
            "Note: in-game this requires holding {}; assumed held here.",
            settings.modifier_key.label()
        );
    }

    loop {
        let carried = inventory.carried();
        display_inventory(&carried, &player);

        if carried.is_empty() {
            break;
        }

        let Some(name) = prompt_item_choice(&carried)? else {
            break;
        };

        // Carried items always resolve; the choice came from this inventory.
        let Some(item) = inventory.get(&name) else {
            continue;
        };

        let outcome = evaluate(
            &item.name,
            item.edibility,
            player.is_full(),
            settings.allow_when_full,
            buffs,
        );

        match outcome {
            ConsumptionOutcome::Ineligible(reason) => display_ineligible(&name, reason),
            ConsumptionOutcome::BlockedHasBuffs => display_blocked(&name, buffs.lookup(&name)),
            ConsumptionOutcome::Applied { .. } => {
                let gains = player.apply(&outcome);
                display_consumed(&name, gains, &settings);

                let remaining = inventory.consume_one(&name)?;
                if remaining == 0 {
                    println!("{} used up", name);
                }
                changed = true;
            }
        }
    }

    if changed {
        let save = prompt_yes_no("Save updated inventory?", true)?;
        if save {
            save_items(path, &inventory.to_items())?;
            println!("Inventory saved.");
        }
    }

    Ok(())
}

/// List every buff-granting food in the active table.
fn cmd_buffs_list(buffs: &BuffSource) -> Result<()> {
    let names = buffs.names();
    let entries = names
        .iter()
        .filter_map(|name| buffs.lookup(name).map(|entry| (name.as_str(), entry)));

    display_buff_list(entries, buffs.len());
    Ok(())
}

/// Show buff details for one food, suggesting close names when unknown.
fn cmd_buffs_info(buffs: &BuffSource, name: &str) -> Result<()> {
    if let Some(entry) = buffs.lookup(name) {
        display_buff_info(name, Some(entry));
        return Ok(());
    }

    let names = buffs.names();
    if let Some(suggestion) = suggest_name(name, names.iter().map(String::as_str)) {
        let confirm = prompt_yes_no(&format!("Did you mean '{}'?", suggestion), true)?;
        if confirm {
            display_buff_info(&suggestion, buffs.lookup(&suggestion));
            return Ok(());
        }
    }

    display_buff_info(name, None);
    Ok(())
}

/// Export the active table to CSV.
fn cmd_buffs_export(buffs: &BuffSource, path: &str) -> Result<()> {
    buffs.export_csv(path)?;
    println!("Exported {} entries to {}", buffs.len(), path);
    Ok(())
}

fn cmd_config_show(config_path: &str) -> Result<()> {
    let settings = load_settings_or_default(config_path);
    display_settings(&settings);
    Ok(())
}

fn cmd_config_edit(config_path: &str) -> Result<()> {
    let mut settings = load_settings_or_default(config_path);

    let save = edit_settings(&mut settings)?;
    if save {
        save_settings(config_path, &settings)?;
        println!("Settings saved to {}", config_path);
    } else {
        println!("Changes discarded.");
    }

    Ok(())
}

fn cmd_config_reset(config_path: &str) -> Result<()> {
    save_settings(config_path, &Settings::default())?;
    println!("Settings reset to defaults.");
    Ok(())
}
