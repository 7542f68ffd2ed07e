//! Shop subdomain derivation and navigation.

/// First label of the hostname: the shop identifier when running on a shop
/// origin. `acme.example.com` gives `acme`; a bare `example.com` gives
/// `example` with no special-casing.
pub fn current_shop(hostname: &str) -> &str {
    hostname.split('.').next().unwrap_or("")
}

/// Reduce a display shop name to a host label: keep ASCII letters, digits,
/// and hyphens, then lowercase.
pub fn sanitize_shop_label(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect::<String>()
        .to_ascii_lowercase()
}

/// Absolute URL of a shop's guarded page on its own subdomain.
pub fn shop_url(protocol: &str, hostname: &str, port: &str, label: &str) -> String {
    if port.is_empty() {
        format!("{protocol}//{label}.{hostname}/shop/{label}")
    } else {
        format!("{protocol}//{label}.{hostname}:{port}/shop/{label}")
    }
}

/// Full-page navigation to a shop's subdomain. This is a hard origin
/// change: the new origin re-runs the route guard, and only the
/// parent-scoped credential keeps the user signed in across the hop.
pub fn navigate_to_shop(raw_name: &str) {
    let label = sanitize_shop_label(raw_name);
    if label.is_empty() {
        tracing::warn!(raw_name, "shop name sanitized to nothing; staying put");
        return;
    }

    let Some(window) = web_sys::window() else {
        return;
    };
    let location = window.location();
    let (Ok(protocol), Ok(hostname), Ok(port)) =
        (location.protocol(), location.hostname(), location.port())
    else {
        tracing::warn!("could not read current location");
        return;
    };

    let url = shop_url(&protocol, &hostname, &port, &label);
    if let Err(err) = location.set_href(&url) {
        tracing::warn!(?err, %url, "navigation failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_current_shop_takes_first_label() {
        assert_eq!(current_shop("acme.example.com"), "acme");
        assert_eq!(current_shop("example.com"), "example");
        assert_eq!(current_shop("localhost"), "localhost");
        assert_eq!(current_shop(""), "");
    }

    #[test]
    fn test_sanitize_strips_punctuation_and_lowercases() {
        assert_eq!(sanitize_shop_label("My Shop!"), "myshop");
        assert_eq!(sanitize_shop_label("ac-me_99"), "ac-me99");
        assert_eq!(sanitize_shop_label("BOOKS"), "books");
        assert_eq!(sanitize_shop_label("!!!"), "");
    }

    #[test]
    fn test_shop_url_with_and_without_port() {
        assert_eq!(
            shop_url("http:", "localhost", "5173", "myshop"),
            "http://myshop.localhost:5173/shop/myshop"
        );
        assert_eq!(
            shop_url("https:", "example.com", "", "books"),
            "https://books.example.com/shop/books"
        );
    }
}
