//! Output routing for conversion results.

use anyhow::{bail, Context, Result};

/// Where the converted result is sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputTarget {
    #[default]
    Console,
    Clipboard,
}

impl OutputTarget {
    /// Case-insensitive target name lookup; an empty name means the
    /// console.
    pub fn resolve(name: &str) -> Result<Self> {
        if name.is_empty() || name.eq_ignore_ascii_case("console") {
            Ok(OutputTarget::Console)
        } else if name.eq_ignore_ascii_case("clipboard") {
            Ok(OutputTarget::Clipboard)
        } else {
            bail!("unknown output target name: {name}");
        }
    }

    /// Delivers the final output text.
    pub fn deliver(self, text: &str) -> Result<()> {
        match self {
            OutputTarget::Console => {
                println!("{text}");
                Ok(())
            }
            OutputTarget::Clipboard => {
                let mut clipboard =
                    arboard::Clipboard::new().context("unable to open the system clipboard")?;
                clipboard
                    .set_text(text.to_string())
                    .context("unable to write to the system clipboard")
            }
        }
    }
}
