//! URL handling module for url-extractor
//!
//! This module provides href classification and relative link resolution.
//! Both operate on the URL text directly: the base URL is never parsed into
//! scheme, host or path.

mod classify;
mod resolve;

// Re-export main functions
pub use classify::{is_own_domain, is_relative};
pub use resolve::resolve_link;

/// Link classification types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkClass {
    /// Relative link - resolved against the base URL
    Relative,
    /// Absolute link containing the base URL - kept verbatim
    OwnDomain,
    /// Anything else (other sites, mailto:, ...) - dropped
    External,
}

impl LinkClass {
    /// Returns true if the link belongs in the extraction result
    pub fn is_kept(&self) -> bool {
        matches!(self, Self::Relative | Self::OwnDomain)
    }
}

/// Classifies an href against the base URL
///
/// The checks run in the following priority order:
/// 1. Relative (no `http` prefix and no `@`)
/// 2. Own domain (base URL occurs in the href)
/// 3. External (default)
///
/// # Arguments
///
/// * `href` - The raw href attribute value
/// * `base_url` - The URL of the page the href was found on
///
/// # Examples
///
/// ```
/// use url_extractor::url::{classify_link, LinkClass};
///
/// let base = "https://example.com";
/// assert_eq!(classify_link("home", base), LinkClass::Relative);
/// assert_eq!(classify_link("https://example.com/1", base), LinkClass::OwnDomain);
/// assert_eq!(classify_link("https://external.com/1", base), LinkClass::External);
/// assert_eq!(classify_link("mailto:contact@example.com", base), LinkClass::External);
/// ```
pub fn classify_link(href: &str, base_url: &str) -> LinkClass {
    if is_relative(href) {
        return LinkClass::Relative;
    }

    if is_own_domain(href, base_url) {
        return LinkClass::OwnDomain;
    }

    LinkClass::External
}
