use log::{error, info};

use crate::error::Result;
use crate::interface::prompts::{
    prompt_food_name, prompt_nutrient_record, prompt_quantity, prompt_yes_no, Console,
};
use crate::interface::render::{entry_line, summary_lines};
use crate::models::{MealAccumulator, NutritionSummary};
use crate::state::DatasetStore;
use crate::summary::Summarizer;

/// Read-compute-print loop over a dataset store.
///
/// Each round reads one food and quantity, offers to save foods missing
/// from the dataset, and prints the running total recomputed from scratch.
pub struct Session<'a, C: Console> {
    store: &'a mut DatasetStore,
    summarizer: Summarizer,
    console: C,
    meal: MealAccumulator,
    show_breakdown: bool,
}

impl<'a, C: Console> Session<'a, C> {
    pub fn new(store: &'a mut DatasetStore, summarizer: Summarizer, console: C) -> Self {
        Self {
            store,
            summarizer,
            console,
            meal: MealAccumulator::new(),
            show_breakdown: false,
        }
    }

    /// Also print how each entry was resolved under every summary.
    pub fn with_breakdown(mut self, show: bool) -> Self {
        self.show_breakdown = show;
        self
    }

    pub fn meal(&self) -> &MealAccumulator {
        &self.meal
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    pub fn into_console(self) -> C {
        self.console
    }

    /// Run until the user declines to add more food; returns the final summary.
    pub fn run(&mut self) -> Result<NutritionSummary> {
        self.print_intro();

        let summary = loop {
            let summary = self.step()?;

            self.console.print("");
            let more = prompt_yes_no(
                &mut self.console,
                "➕ Would you like to add more food (y/n)",
                "continue",
            )?;
            if !more {
                break summary;
            }
        };

        self.console.print("");
        self.console.print("✅ Final Nutritional Summary:");
        self.print_summary(&summary);
        info!("Session finished with {} entries", self.meal.len());
        Ok(summary)
    }

    /// One round: read an entry, maybe save a new food, print the total.
    pub fn step(&mut self) -> Result<NutritionSummary> {
        let food = prompt_food_name(&mut self.console)?;
        let quantity = prompt_quantity(&mut self.console, &food)?;
        self.meal.add(&food, quantity)?;

        if !self.store.contains(&food) {
            self.offer_to_save(&food)?;
        }

        let summary = self.current_summary();
        self.console.print("");
        self.console.print("🟢 Current Total:");
        self.print_summary(&summary);
        Ok(summary)
    }

    /// Totals for everything entered so far.
    pub fn current_summary(&self) -> NutritionSummary {
        self.summarizer.summarize(self.store.foods(), &self.meal)
    }

    fn offer_to_save(&mut self, food: &str) -> Result<()> {
        self.console
            .print(&format!("⚠️ {} was not found in database.\n", food));

        let save = prompt_yes_no(
            &mut self.console,
            "💾 Would you like to save food (y/n)",
            "save new food",
        )?;
        if !save {
            return Ok(());
        }

        let record = prompt_nutrient_record(&mut self.console, food)?;
        match self.store.add_food(food, record) {
            Ok(()) => self.console.print("✅ New food added successfully!"),
            Err(e) => {
                error!("Saving {} failed: {}", food, e);
                self.console
                    .print(&format!("❌ Could not save {}: {}", food, e));
            }
        }
        Ok(())
    }

    fn print_intro(&mut self) {
        for line in [
            "Welcome to Calorie Intake Calculator! 😊 \n",
            "How to use? 🤔\n",
            "Just enter food   🥑🍕🍔🍣🥩🥕🍩🍇🌮🧀",
            "and quantity (grams/units) ⚖️ 🔢📐📊📏🥄\n",
            "That's it! 😎 \n",
        ] {
            self.console.print(line);
        }
    }

    fn print_summary(&mut self, summary: &NutritionSummary) {
        for line in summary_lines(&summary.totals) {
            self.console.print(&line);
        }
        if self.show_breakdown {
            for entry in &summary.entries {
                self.console.print(&entry_line(entry));
            }
        }
    }
}
