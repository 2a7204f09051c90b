//! CSRF token lookup for state-changing requests.

/// Picks the token to send with a POST.
///
/// An explicit form value wins; otherwise the named cookie is read from a
/// `Cookie` header value such as `sessionid=abc; csrftoken=xyz`.
pub fn resolve_csrf_token(
    form_value: Option<&str>,
    cookie_header: Option<&str>,
    cookie_name: &str,
) -> Option<String> {
    if let Some(token) = form_value.map(str::trim).filter(|t| !t.is_empty()) {
        return Some(token.to_string());
    }

    cookie_header?
        .split(';')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| name.trim() == cookie_name)
        .map(|(_, value)| value.trim().trim_matches('"').to_string())
        .filter(|value| !value.is_empty())
}
