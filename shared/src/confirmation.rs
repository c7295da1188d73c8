use crate::types::Result;
use dialoguer::{theme::ColorfulTheme, Confirm};

/// Yes/no prompt shared by the interactive practice flow.
pub fn ask_confirmation(prompt: &str, default_yes: bool) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default_yes)
        .show_default(true)
        .interact()?)
}

/// Offered after a backend failure; retrying is the default.
pub fn ask_retry() -> Result<bool> {
    ask_confirmation("Tentar novamente?", true)
}
