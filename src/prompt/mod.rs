mod error;
mod terminal;
pub mod validate;

#[cfg(test)]
pub(crate) mod testing;

pub use error::{PromptError, PromptResult};
pub use terminal::TerminalPrompter;

/// Interactive questions asked of the operator.
pub trait Prompter {
    /// Index of the chosen entry.
    fn select(&mut self, message: &str, header: Option<&str>, choices: &[String])
        -> PromptResult<usize>;

    /// Indices of the checked entries, ascending. Empty when nothing was checked.
    fn multi_select(
        &mut self,
        message: &str,
        header: Option<&str>,
        choices: &[String],
    ) -> PromptResult<Vec<usize>>;

    /// Free text, re-asked until `parse` accepts it. An empty answer takes `default`.
    fn input<T>(
        &mut self,
        message: &str,
        default: Option<&str>,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> PromptResult<T>;

    fn confirm(&mut self, message: &str, default: bool) -> PromptResult<bool>;

    /// Informational output between questions.
    fn say(&mut self, text: &str);

    /// Machine-readable result, kept apart from the interaction.
    fn output(&mut self, text: &str);
}
