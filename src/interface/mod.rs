pub mod prompts;
pub mod render;

pub use prompts::{edit_settings, prompt_item_choice, prompt_yes_no, suggest_name};
pub use render::{
    display_blocked, display_buff_info, display_buff_list, display_consumed,
    display_ineligible, display_inventory, display_settings,
};
