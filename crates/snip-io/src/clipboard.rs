use anyhow::{Context, Result};
use arboard::Clipboard;

/// Place text on the system clipboard.
pub fn copy_text(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to open clipboard")?;
    clipboard
        .set_text(text)
        .context("Failed to write clipboard")?;
    Ok(())
}
