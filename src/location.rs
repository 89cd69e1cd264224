//! Base path derivation from the host's current location.
//!
//! Documentation sites with client-side routing keep their route in the fragment, so a link to
//! a heading has to carry the route too: `#/guide/button#usage`. The base path is the part of
//! the fragment before the second `#`; a fragment with a single `#` has no base path.

use crate::error::{Result, TocError};
use url::Url;

/// Extracts the fragment (without its leading `#`) from a location.
///
/// Accepts an absolute URL or a bare fragment. A URL without a fragment has an empty one.
///
/// # Errors
///
/// Returns [`TocError::MalformedLocation`] when the location is neither.
pub fn fragment(location: &str) -> Result<String> {
    if let Some(bare) = location.strip_prefix('#') {
        return Ok(bare.to_string());
    }
    if location.is_empty() {
        return Ok(String::new());
    }
    let url = Url::parse(location).map_err(|e| TocError::MalformedLocation {
        location: location.to_string(),
        reason: e.to_string(),
    })?;
    Ok(url.fragment().unwrap_or_default().to_string())
}

/// Derives the virtual-route base path from a location.
///
/// # Errors
///
/// Returns [`TocError::MalformedLocation`] when the location cannot be interpreted.
pub fn base_path(location: &str) -> Result<String> {
    let fragment = fragment(location)?;
    Ok(fragment
        .split_once('#')
        .map(|(base, _)| base.to_string())
        .unwrap_or_default())
}

#[must_use]
/// Like [`base_path`], but a malformed location degrades to an empty base path.
pub fn base_path_or_empty(location: &str) -> String {
    base_path(location).unwrap_or_else(|e| {
        log::warn!("falling back to empty base path: {e}");
        String::new()
    })
}

#[must_use]
/// Heading anchor a location points at, if any.
///
/// This is the part after the second `#`, or a whole fragment that is not a route.
pub fn anchor(location: &str) -> Option<String> {
    let fragment = fragment(location).ok()?;
    let anchor = match fragment.split_once('#') {
        Some((_, anchor)) => anchor,
        None if fragment.starts_with('/') => return None,
        None => fragment.as_str(),
    };
    (!anchor.is_empty()).then(|| anchor.to_string())
}

#[must_use]
/// Builds the link target for an anchor under an optional base path.
pub fn link_target(base_path: &str, anchor: &str) -> String {
    if base_path.is_empty() {
        format!("#{anchor}")
    } else {
        format!("#{base_path}#{anchor}")
    }
}

#[must_use]
/// Replaces the fragment of a location, keeping everything before it.
pub fn with_fragment(location: &str, target: &str) -> String {
    let prefix = location.split('#').next().unwrap_or_default();
    format!("{prefix}{target}")
}

#[cfg(test)]
#[path = "tests/location.rs"]
mod tests;
