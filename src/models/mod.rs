mod news;
mod product;
mod video;

pub use news::*;
pub use product::*;
pub use video::*;

pub(crate) fn default_true() -> bool {
    true
}

/// Trims a field from the request body, mapping empty strings to NULL the way
/// the admin frontend expects.
pub(crate) fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
