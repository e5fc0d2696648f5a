pub mod prompts;
pub mod render;
pub mod session;

#[cfg(test)]
pub(crate) mod scripted;

pub use prompts::{
    prompt_food_name, prompt_nutrient_record, prompt_nutrient_value, prompt_quantity,
    prompt_yes_no, Console, TerminalConsole,
};
pub use render::{entry_line, summary_lines};
pub use session::Session;
