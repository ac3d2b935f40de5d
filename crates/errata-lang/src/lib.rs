//! Number verbalizers for errata.
//!
//! Each language implements [`errata_core::Verbalizer`]. Only Dutch ships
//! today; swapping the language means swapping the verbalizer and nothing
//! else, since the hundred suffix used for alternate readings comes with it.

pub mod dutch;

pub use dutch::{DutchVerbalizer, DUTCH_MAX};

use errata_core::{ErrataError, Result};

/// Looks up a verbalizer by its configured language name.
///
/// # Errors
///
/// Returns [`ErrataError::Config`] for languages that are not available.
pub fn verbalizer_for(language: &str) -> Result<DutchVerbalizer> {
    match language.trim().to_ascii_lowercase().as_str() {
        "dutch" | "nl" => Ok(DutchVerbalizer),
        other => Err(ErrataError::Config(format!("no verbalizer for language '{other}'"))),
    }
}
