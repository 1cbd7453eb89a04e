use inquire::{Confirm, InquireError, Password, PasswordDisplayMode, Select, Text};

use crate::app_err::{AppResult, ApplicationError};

/// Terminal prompts the context flow depends on.
///
/// Every method reports a user interrupt as [`ApplicationError::Canceled`].
pub trait Prompt {
    /// Index of the chosen option.
    fn select(&self, title: &str, options: &[String]) -> AppResult<usize>;
    fn input(&self, title: &str, suggestion: &str) -> AppResult<String>;
    /// Masked input.
    fn password(&self, title: &str) -> AppResult<String>;
    fn confirm(&self, title: &str, default: bool) -> AppResult<bool>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct InquirePrompt;

impl Prompt for InquirePrompt {
    fn select(&self, title: &str, options: &[String]) -> AppResult<usize> {
        Select::new(title, options.to_vec())
            .raw_prompt()
            .map(|choice| choice.index)
            .map_err(prompt_err)
    }

    fn input(&self, title: &str, suggestion: &str) -> AppResult<String> {
        let mut text = Text::new(title);
        if !suggestion.is_empty() {
            text = text.with_default(suggestion);
        }

        text.prompt().map_err(prompt_err)
    }

    fn password(&self, title: &str) -> AppResult<String> {
        Password::new(title)
            .without_confirmation()
            .with_display_mode(PasswordDisplayMode::Masked)
            .prompt()
            .map_err(prompt_err)
    }

    fn confirm(&self, title: &str, default: bool) -> AppResult<bool> {
        Confirm::new(title)
            .with_default(default)
            .prompt()
            .map_err(prompt_err)
    }
}

fn prompt_err(err: InquireError) -> ApplicationError {
    match err {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            ApplicationError::Canceled
        }
        other => ApplicationError::Prompt(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interrupts_become_cancellation() {
        assert!(prompt_err(InquireError::OperationInterrupted).is_canceled());
        assert!(prompt_err(InquireError::OperationCanceled).is_canceled());
        assert!(matches!(
            prompt_err(InquireError::NotTTY),
            ApplicationError::Prompt(_)
        ));
    }
}
