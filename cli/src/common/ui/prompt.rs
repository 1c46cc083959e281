//! # docsetup Prompts
//!
//! File: cli/src/common/ui/prompt.rs
//! Author: Christi Mahu
//! Repository: https://github.com/christimahu/docsetup
//!
//! Two `Prompter`s sit behind the same trait:
//! - `DialoguerPrompter`: line editing through `dialoguer`, used when stdin
//!   is a terminal.
//! - `LinePrompter`: plain line-at-a-time reads over any `BufRead`/`Write`
//!   pair. Used when answers are piped in (`printf 'Foo\n...' | docsetup`)
//!   and by the tests, which wire it to an in-memory cursor and buffer.
//!
//! Both accept empty answers, and menu choices are typed rather than
//! selected so an unknown choice reaches the collector unchanged.
//!
use crate::core::error::{DocsError, Result};
use anyhow::Context;
use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal, Stdout, StdinLock, Write};
use tracing::debug;

/// Asks the operator questions and shows them text.
pub trait Prompter {
    /// Prints `question` without a trailing newline and returns the answer
    /// line with its line ending removed. Other whitespace is preserved.
    fn ask(&mut self, question: &str) -> Result<String>;

    /// Prints one informational line.
    fn say(&mut self, line: &str) -> Result<()>;
}

/// A `Prompter` reading answers one line at a time.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Everything written so far (questions and informational lines).
    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }
}

impl LinePrompter<StdinLock<'static>, Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{question}").context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read answer")?;
        if read == 0 {
            anyhow::bail!(DocsError::InputClosed {
                prompt: question.to_string(),
            });
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}").context("Failed to write to output")
    }
}

/// Interactive prompts on the terminal.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn ask(&mut self, question: &str) -> Result<String> {
        let (blank_lines, label) = split_question(question);
        for _ in 0..blank_lines {
            println!();
        }
        Input::<String>::new()
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()
            .with_context(|| format!("Failed to read answer to '{label}'"))
    }

    fn say(&mut self, line: &str) -> Result<()> {
        println!("{line}");
        Ok(())
    }
}

/// Picks the terminal prompter when stdin is a TTY, the line reader otherwise.
pub fn stdin_prompter() -> Box<dyn Prompter> {
    if io::stdin().is_terminal() {
        debug!("stdin is a terminal, using interactive prompts");
        Box::new(DialoguerPrompter::new())
    } else {
        debug!("stdin is not a terminal, reading answers line by line");
        Box::new(LinePrompter::stdio())
    }
}

/// Separates a question's leading newlines from its label. `dialoguer` adds
/// its own `: ` after the label, so a trailing colon is dropped.
fn split_question(question: &str) -> (usize, &str) {
    let label = question.trim_start_matches('\n');
    let blank_lines = question.len() - label.len();
    (blank_lines, label.trim_end().trim_end_matches(':').trim_end())
}

/// Asks a yes/no question. Only `y` or `Y` counts as yes.
pub fn confirm(prompter: &mut dyn Prompter, question: &str) -> Result<bool> {
    let answer = prompter.ask(question)?;
    Ok(answer.eq_ignore_ascii_case("y"))
}
