use crate::buffs::FoodBuffEntry;
use crate::config::Settings;
use crate::models::{ConsumableItem, IneligibleReason};
use crate::state::{AppliedGains, PlayerState};

/// The notice shown when a buff-granting food is blocked.
pub fn display_blocked(name: &str, entry: Option<&FoodBuffEntry>) {
    println!("Buffed consumables can't be consumed quickly");
    if let Some(entry) = entry {
        println!(
            "  {} grants {} for {}",
            name,
            entry.description(),
            entry.duration_string()
        );
    }
}

/// The messages shown after a successful instant consumption, honoring the
/// per-message settings toggles.
pub fn display_consumed(name: &str, gains: AppliedGains, settings: &Settings) {
    if settings.play_eat_sound {
        println!("*eat*");
    }

    if settings.show_quick_consume_dialog {
        println!("Quickly consumed {}", name);
    }

    if settings.show_health_gain {
        if gains.health > 0 {
            println!("+{} Health", gains.health);
        }
        if gains.stamina > 0 {
            println!("+{} Energy", gains.stamina);
        }
    }
}

pub fn display_ineligible(name: &str, reason: IneligibleReason) {
    match reason {
        IneligibleReason::NotFood => println!("{} is not edible", name),
        IneligibleReason::AlreadyFull => {
            println!("Health and energy are already full")
        }
    }
}

/// List every table entry with its buffs and duration.
pub fn display_buff_list<'a, I>(entries: I, count: usize)
where
    I: Iterator<Item = (&'a str, &'a FoodBuffEntry)>,
{
    println!();
    println!("=== Buff-granting foods ({} entries) ===", count);
    println!();

    let rows: Vec<(&str, String, String)> = entries
        .map(|(name, entry)| (name, entry.description(), entry.duration_string()))
        .collect();
    let max_name_len = rows.iter().map(|(name, _, _)| name.len()).max().unwrap_or(10);

    for (name, description, duration) in rows {
        println!(
            "  {:<width$}  {:>7}  {}",
            name,
            duration,
            description,
            width = max_name_len
        );
    }

    println!();
}

/// Detail view for one food.
pub fn display_buff_info(name: &str, entry: Option<&FoodBuffEntry>) {
    match entry {
        Some(entry) => {
            println!("{}", name);
            println!("  Buffs:    {}", entry.description());
            println!("  Duration: {}", entry.duration_string());
            println!("  Blocked from instant consumption.");
        }
        None => {
            println!("{}: no known buffs; safe for instant consumption.", name);
        }
    }
}

/// Current inventory and player vitals for the consume session.
pub fn display_inventory(items: &[&ConsumableItem], player: &PlayerState) {
    println!();
    println!(
        "Health {}/{}  Energy {}/{}",
        player.health, player.max_health, player.stamina, player.max_stamina
    );

    if items.is_empty() {
        println!("Inventory: (empty)");
        return;
    }

    println!("Inventory:");
    for item in items {
        println!(
            "  {} x{} (edibility {})",
            item.name, item.stack, item.edibility
        );
    }
}

/// Current settings, one line per field.
pub fn display_settings(settings: &Settings) {
    println!();
    println!("=== Settings ===");
    println!("  Require modifier key:      {}", settings.require_modifier);
    println!("  Modifier key:              {}", settings.modifier_key.label());
    println!("  Allow when full:           {}", settings.allow_when_full);
    println!("  Play eat sound:            {}", settings.play_eat_sound);
    println!("  Show health/energy gain:   {}", settings.show_health_gain);
    println!(
        "  Show quick consume dialog: {}",
        settings.show_quick_consume_dialog
    );
    println!();
}
