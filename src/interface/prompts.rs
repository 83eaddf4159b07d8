use dialoguer::{Confirm, Select};
use strsim::jaro_winkler;

use crate::config::{ModifierKey, Settings};
use crate::error::Result;
use crate::models::ConsumableItem;

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Interactive settings editor, one entry per field.
///
/// The same option set the in-game configuration menu exposes: five boolean
/// toggles plus the modifier key binding. Returns true when the player chose
/// to save the result.
pub fn edit_settings(settings: &mut Settings) -> Result<bool> {
    loop {
        let options = vec![
            format!("Require modifier key: {}", settings.require_modifier),
            format!("Modifier key: {}", settings.modifier_key.label()),
            format!("Allow when full: {}", settings.allow_when_full),
            format!("Play eat sound: {}", settings.play_eat_sound),
            format!("Show health/energy gain: {}", settings.show_health_gain),
            format!(
                "Show quick consume dialog: {}",
                settings.show_quick_consume_dialog
            ),
            "Save and exit".to_string(),
            "Discard changes".to_string(),
        ];

        let selection = Select::new()
            .with_prompt("Edit settings")
            .items(&options)
            .default(0)
            .interact()?;

        match selection {
            0 => settings.require_modifier = !settings.require_modifier,
            1 => settings.modifier_key = prompt_modifier_key(settings.modifier_key)?,
            2 => settings.allow_when_full = !settings.allow_when_full,
            3 => settings.play_eat_sound = !settings.play_eat_sound,
            4 => settings.show_health_gain = !settings.show_health_gain,
            5 => settings.show_quick_consume_dialog = !settings.show_quick_consume_dialog,
            6 => return Ok(true),
            _ => return Ok(false),
        }
    }
}

/// Prompt for the modifier key binding.
fn prompt_modifier_key(current: ModifierKey) -> Result<ModifierKey> {
    let labels: Vec<&str> = ModifierKey::ALL.iter().map(|k| k.label()).collect();
    let default = ModifierKey::ALL
        .iter()
        .position(|k| *k == current)
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("Modifier key to hold for instant consumption")
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(ModifierKey::ALL[selection])
}

/// Pick an item from the inventory, or None to stop.
pub fn prompt_item_choice(items: &[&ConsumableItem]) -> Result<Option<String>> {
    let mut options: Vec<String> = items
        .iter()
        .map(|i| format!("{} x{} (edibility {})", i.name, i.stack, i.edibility))
        .collect();
    options.push("Done".to_string());

    let selection = Select::new()
        .with_prompt("Consume which item?")
        .items(&options)
        .default(0)
        .interact()?;

    if selection < items.len() {
        Ok(Some(items[selection].name.clone()))
    } else {
        Ok(None)
    }
}

/// Fuzzy-match an unrecognized name against known names.
///
/// Returns the closest candidate above the similarity bar, for "did you
/// mean" suggestions.
pub fn suggest_name<'a, I>(input: &str, candidates: I) -> Option<String>
where
    I: Iterator<Item = &'a str>,
{
    let input = input.to_lowercase();

    candidates
        .map(|name| (name, jaro_winkler(&name.to_lowercase(), &input)))
        .filter(|(_, score)| *score > 0.7)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(name, _)| name.to_string())
}
