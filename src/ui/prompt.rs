//! Terminal prompt boundary.

use anyhow::{Context, Result, bail};
use dialoguer::{Confirm, Input, Select};

/// Interactive choices the selection flow needs from the user.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Pick one of `options`; returns its index. `options` is never empty.
    fn select(&self, prompt: &str, options: &[String]) -> Result<usize>;

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool>;

    fn input(&self, prompt: &str) -> Result<String>;
}

/// [`Prompter`] drawing on the terminal with dialoguer.
#[derive(Debug, Clone)]
pub struct DialoguerPrompter {
    page_size: usize,
}

impl DialoguerPrompter {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new(15)
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, prompt: &str, options: &[String]) -> Result<usize> {
        if options.is_empty() {
            bail!("Nothing to choose from for \"{}\"", prompt);
        }

        let prompt = if options.len() > self.page_size {
            format!("{prompt} [Some options hidden, use arrow keys to reveal]")
        } else {
            prompt.to_string()
        };

        Select::new()
            .with_prompt(prompt)
            .items(options)
            .default(0)
            .max_length(self.page_size)
            .interact()
            .context("Selection prompt failed")
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        Confirm::new()
            .with_prompt(prompt)
            .default(default)
            .interact()
            .context("Confirmation prompt failed")
    }

    fn input(&self, prompt: &str) -> Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .interact_text()
            .context("Text prompt failed")
    }
}
