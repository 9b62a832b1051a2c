//! Line-oriented input/output for the prompt wizard

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use crate::error::{SignupError, SignupResult};

/// Where the wizard reads answers from and writes text to
pub trait Prompter {
    /// Print one line
    fn say(&mut self, line: &str) -> SignupResult<()>;

    /// Ask a question and return the trimmed answer
    fn ask(&mut self, prompt: &str) -> SignupResult<String>;

    /// Ask for a secret without echoing it
    fn ask_secret(&mut self, prompt: &str) -> SignupResult<String>;
}

/// Prompter bound to the process's stdin/stdout
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn say(&mut self, line: &str) -> SignupResult<()> {
        println!("{}", line);
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> SignupResult<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().lock().read_line(&mut input)? == 0 {
            return Err(SignupError::Io("Input closed".into()));
        }

        Ok(input.trim().to_string())
    }

    fn ask_secret(&mut self, prompt: &str) -> SignupResult<String> {
        rpassword::prompt_password(prompt).map_err(|e| SignupError::Io(e.to_string()))
    }
}

/// Prompter that replays canned answers and records everything said
///
/// Used for non-interactive runs and tests.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    /// Every line printed and every prompt asked, in order
    pub transcript: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            transcript: Vec::new(),
        }
    }

    fn next_answer(&mut self, prompt: &str) -> SignupResult<String> {
        self.transcript.push(prompt.to_string());
        self.answers
            .pop_front()
            .map(|a| a.trim().to_string())
            .ok_or_else(|| SignupError::Io("Input closed".into()))
    }

    /// Whether any transcript line contains `needle`
    pub fn saw(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }
}

impl Prompter for ScriptedPrompter {
    fn say(&mut self, line: &str) -> SignupResult<()> {
        self.transcript.push(line.to_string());
        Ok(())
    }

    fn ask(&mut self, prompt: &str) -> SignupResult<String> {
        self.next_answer(prompt)
    }

    fn ask_secret(&mut self, prompt: &str) -> SignupResult<String> {
        self.next_answer(prompt)
    }
}
