use std::collections::VecDeque;
use std::io;

use crate::error::{NutritionError, Result};
use crate::interface::prompts::Console;

/// Console fed from a fixed list of answers, recording everything shown.
///
/// Running out of answers is an `UnexpectedEof` I/O error.
#[derive(Debug, Default)]
pub(crate) struct ScriptedConsole {
    inputs: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub(crate) fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Printed lines and answered prompts, in order.
    pub(crate) fn output(&self) -> &[String] {
        &self.output
    }

    pub(crate) fn transcript(&self) -> String {
        self.output.join("\n")
    }

    /// Answers not consumed yet.
    pub(crate) fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        let input = self.inputs.pop_front().ok_or_else(|| {
            NutritionError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!("no scripted answer for '{}'", prompt),
            ))
        })?;
        self.output.push(format!("{}: {}", prompt, input));
        Ok(input)
    }

    fn print(&mut self, text: &str) {
        self.output.push(text.to_string());
    }
}
