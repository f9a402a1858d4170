/// Checks whether an href is a relative link
///
/// An href is relative when it does not start with `http` and does not
/// contain an `@`. The second rule keeps `mailto:user@domain` links out of
/// resolution.
///
/// Relative paths that contain `@` (e.g. `/users/@me`) are reported as not
/// relative, and so are paths that begin with the letters `http`.
///
/// # Examples
///
/// ```
/// use url_extractor::url::is_relative;
///
/// assert!(is_relative("home"));
/// assert!(is_relative("/docs/intro"));
/// assert!(!is_relative("https://example.com/1"));
/// assert!(!is_relative("mailto:contact@example.com"));
/// ```
pub fn is_relative(href: &str) -> bool {
    !href.starts_with("http") && !href.contains('@')
}

/// Checks whether an absolute href belongs to the same site as `base_url`
///
/// This is a plain substring test: the href is same-site when `base_url`
/// appears anywhere inside it. A foreign host carrying the base URL in its
/// query string passes, and a same-host link whose scheme or trailing slash
/// differs from `base_url` does not.
///
/// # Examples
///
/// ```
/// use url_extractor::url::is_own_domain;
///
/// assert!(is_own_domain("https://example.com/1", "https://example.com"));
/// assert!(!is_own_domain("https://external.com/1", "https://example.com"));
/// ```
pub fn is_own_domain(href: &str, base_url: &str) -> bool {
    href.contains(base_url)
}
