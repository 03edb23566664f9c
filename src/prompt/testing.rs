use std::collections::VecDeque;

use crate::prompt::{PromptError, PromptResult, Prompter};

#[derive(Debug, Clone)]
pub enum Answer {
    /// Select the first choice starting with the text.
    Pick(&'static str),
    /// Check the choices at these indices.
    Check(Vec<usize>),
    Text(&'static str),
    Confirm(bool),
}

/// Replays canned answers and records everything shown.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub transcript: Vec<String>,
    pub choices_seen: Vec<Vec<String>>,
    pub output: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            ..Default::default()
        }
    }

    pub fn said(&self, fragment: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(fragment))
    }

    pub fn finished(&self) -> bool {
        self.answers.is_empty()
    }

    fn next(&mut self, message: &str) -> PromptResult<Answer> {
        self.transcript.push(format!("? {message}"));
        self.answers.pop_front().ok_or(PromptError::Interrupted)
    }
}

impl Prompter for ScriptedPrompter {
    fn select(
        &mut self,
        message: &str,
        _header: Option<&str>,
        choices: &[String],
    ) -> PromptResult<usize> {
        self.choices_seen.push(choices.to_vec());
        match self.next(message)? {
            Answer::Pick(text) => Ok(choices
                .iter()
                .position(|c| c.starts_with(text))
                .unwrap_or_else(|| panic!("no choice {text:?} in {choices:?}"))),
            other => panic!("expected a pick for {message:?}, got {other:?}"),
        }
    }

    fn multi_select(
        &mut self,
        message: &str,
        _header: Option<&str>,
        choices: &[String],
    ) -> PromptResult<Vec<usize>> {
        self.choices_seen.push(choices.to_vec());
        match self.next(message)? {
            Answer::Check(indices) => Ok(indices),
            other => panic!("expected checks for {message:?}, got {other:?}"),
        }
    }

    fn input<T>(
        &mut self,
        message: &str,
        default: Option<&str>,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> PromptResult<T> {
        loop {
            let text = match self.next(message)? {
                Answer::Text("") => default.unwrap_or_default(),
                Answer::Text(text) => text,
                other => panic!("expected text for {message:?}, got {other:?}"),
            };
            match parse(text) {
                Ok(value) => return Ok(value),
                Err(reason) => self.transcript.push(format!(">> {reason}")),
            }
        }
    }

    fn confirm(&mut self, message: &str, _default: bool) -> PromptResult<bool> {
        match self.next(message)? {
            Answer::Confirm(yes) => Ok(yes),
            other => panic!("expected confirmation for {message:?}, got {other:?}"),
        }
    }

    fn say(&mut self, text: &str) {
        self.transcript.push(text.to_string());
    }

    fn output(&mut self, text: &str) {
        self.output.push(text.to_string());
    }
}
