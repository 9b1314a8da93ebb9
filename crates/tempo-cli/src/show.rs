//! The `show` subcommand: format and entity listings, stored defaults.

use std::fmt::Write as _;

use anyhow::Result;
use tempo_core::catalog::FormatKind;
use tempo_core::layout::ENTITY_HELP;

use crate::args::ShowArgs;
use crate::config;
use crate::renderer::Renderer;

/// Markdown listing of every catalog format.
pub fn time_formats_markdown() -> String {
    let mut text = String::from(
        "# Time Formats\n\nFormat names are not case sensitive.\n\n|:-|:-|\n|**Name**|**Layout**|\n",
    );
    for kind in FormatKind::ALL.iter().copied() {
        let _ = writeln!(text, "|{}|{}|", kind.name(), kind.describe());
    }
    text.push_str("|-\n");
    text
}

/// Markdown listing of the custom layout entities.
pub fn custom_entities_markdown() -> String {
    let mut text = String::from(
        "# Custom Layout Entities\n\nEntity spellings are not case sensitive.\n\n|:-|:-|\n|**Entity**|**Description**|\n",
    );
    for (entity, description) in ENTITY_HELP {
        let _ = writeln!(text, "|{entity}|{description}|");
    }
    text.push_str("|-\n");
    text
}

/// Prints the requested listings.
pub fn run(show_args: &ShowArgs, renderer: &Renderer) -> Result<()> {
    if show_args.time_formats {
        renderer.render(&time_formats_markdown());
    }

    if show_args.custom_entities {
        renderer.render(&custom_entities_markdown());
    }

    if show_args.local_defaults {
        match config::raw_local()? {
            Some(content) => {
                renderer.render("# Local Config Data");
                println!("{content}");
            }
            None => println!("Local defaults are not currently set"),
        }
    }

    if show_args.global_defaults {
        match config::raw_global()? {
            Some(content) => {
                renderer.render("# Global Config Data");
                println!("{content}");
            }
            None => println!("Global defaults are not currently set"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_listing_names_every_kind_once() {
        let listing = time_formats_markdown();
        for kind in FormatKind::ALL.iter().copied() {
            let needle = format!("|{}|", kind.name());
            assert_eq!(
                listing.matches(&needle).count(),
                1,
                "{} should be listed exactly once",
                kind.name()
            );
        }
    }

    #[test]
    fn entity_listing_covers_the_reference_table() {
        let listing = custom_entities_markdown();
        for (entity, _) in ENTITY_HELP {
            assert!(listing.contains(entity), "missing entity {entity}");
        }
    }
}
