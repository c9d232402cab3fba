//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::{ContentError, FetchError};

/// Map content errors to a string for CLI output.
pub fn map_error(e: &ContentError) -> String {
    match e {
        ContentError::Fetch(FetchError::Status { status, .. }) if *status == 401 => {
            format!("{} (check the API token)", e)
        }
        ContentError::Enumeration(inner) => format!(
            "{}\nNo paths were produced; fix the '{}' listing and retry.",
            e, inner.locale
        ),
        _ => e.to_string(),
    }
}
