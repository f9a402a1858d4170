/// Resolves a relative href against the base URL
///
/// Rooted hrefs (`/path`) are appended to `base_url` directly, anything else
/// gets a `/` in between. The base is not trimmed and dot segments are not
/// interpreted.
///
/// # Arguments
///
/// * `href` - A relative href (see [`is_relative`](super::is_relative))
/// * `base_url` - The URL of the page the href was found on
///
/// # Examples
///
/// ```
/// use url_extractor::url::resolve_link;
///
/// assert_eq!(resolve_link("home", "https://example.com"), "https://example.com/home");
/// assert_eq!(resolve_link("/home", "https://example.com"), "https://example.com/home");
/// ```
pub fn resolve_link(href: &str, base_url: &str) -> String {
    if href.starts_with('/') {
        format!("{}{}", base_url, href)
    } else {
        format!("{}/{}", base_url, href)
    }
}
