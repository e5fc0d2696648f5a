use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Input;
use log::debug;

use crate::error::Result;
use crate::models::{parse_amount, Nutrient, NutrientRecord};

pub const INVALID_QUANTITY_MSG: &str = "❌ Invalid quantity. Please enter a number.\n";
pub const INVALID_NUMBER_MSG: &str =
    "⚠️ Please enter valid numbers (whole or decimal values only).\n";
pub const EMPTY_NAME_MSG: &str = "❌ Please enter a food name.";

/// Line-oriented input and output for the interactive session.
pub trait Console {
    /// Show `prompt` and read one line of input.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Print a line of output.
    fn print(&mut self, text: &str);
}

/// Console on the real terminal.
///
/// Uses dialoguer when stdin is a terminal and plain line reads otherwise,
/// so input can be piped in.
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for TerminalConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        if io::stdin().is_terminal() {
            let input: String = Input::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()?;
            return Ok(input);
        }

        print!("{}: ", prompt);
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed").into());
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn print(&mut self, text: &str) {
        println!("{}", text);
    }
}

/// Prompt for a food name until a non-empty one is entered.
pub fn prompt_food_name<C: Console + ?Sized>(console: &mut C) -> Result<String> {
    loop {
        let name = console.read_line("Enter food item")?;
        let name = name.trim();
        if !name.is_empty() {
            return Ok(name.to_string());
        }
        console.print(EMPTY_NAME_MSG);
    }
}

/// Prompt for a quantity of `food` until a valid number is entered.
pub fn prompt_quantity<C: Console + ?Sized>(console: &mut C, food: &str) -> Result<f64> {
    let prompt = format!("Enter quantity for {}", food);
    loop {
        let raw = console.read_line(&prompt)?;
        match parse_amount(&raw) {
            Ok(quantity) => return Ok(quantity),
            Err(e) => {
                debug!("Rejected quantity: {}", e);
                console.print(INVALID_QUANTITY_MSG);
            }
        }
    }
}

/// Prompt for one per-100g value of a new food until it parses.
pub fn prompt_nutrient_value<C: Console + ?Sized>(
    console: &mut C,
    food: &str,
    nutrient: Nutrient,
) -> Result<f64> {
    let prompt = format!("Enter {} for {} every 100 g", nutrient.prompt_name(), food);
    loop {
        let raw = console.read_line(&prompt)?;
        match parse_amount(&raw) {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!("Rejected {} value: {}", nutrient.key(), e);
                console.print(INVALID_NUMBER_MSG);
            }
        }
    }
}

/// Collect a full per-100g record for a new food.
pub fn prompt_nutrient_record<C: Console + ?Sized>(
    console: &mut C,
    food: &str,
) -> Result<NutrientRecord> {
    let mut record = NutrientRecord::default();
    for nutrient in Nutrient::ALL {
        let value = prompt_nutrient_value(console, food, nutrient)?;
        record.set(nutrient, value);
    }
    Ok(record)
}

/// Ask a y/n question until the answer is `y` or `n`.
///
/// `hint` completes the correction message: "Please enter 'y' to {hint}".
pub fn prompt_yes_no<C: Console + ?Sized>(
    console: &mut C,
    question: &str,
    hint: &str,
) -> Result<bool> {
    loop {
        let answer = console.read_line(question)?;
        match answer.trim().to_lowercase().as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => console.print(&format!(
                "❌ Invalid input. Please enter 'y' to {}, otherwise enter 'n'.",
                hint
            )),
        }
    }
}
