/// Statuses that mean the fetcher itself was refused.
const BLOCK_STATUSES: [u16; 2] = [403, 429];

/// Phrases that mark a WAF interstitial, captcha wall or denial page.
/// Matched case-insensitively anywhere in the body, markup included.
pub const BLOCK_INDICATORS: &[&str] = &[
    "access denied",
    "403 forbidden",
    "captcha",
    "blocked",
    "cloudflare",
    "security challenge",
];

/// Soft-block check for a seed response.
pub fn is_blocked(body: &str, status: u16) -> bool {
    if BLOCK_STATUSES.contains(&status) {
        return true;
    }

    let body_lower = body.to_lowercase();
    BLOCK_INDICATORS
        .iter()
        .any(|indicator| body_lower.contains(indicator))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocking_statuses() {
        assert!(is_blocked("<html><body>Welcome</body></html>", 403));
        assert!(is_blocked("", 429));
        assert!(!is_blocked("<html><body>Welcome</body></html>", 200));
        assert!(!is_blocked("<html><body>Not here</body></html>", 404));
    }

    #[test]
    fn test_indicator_phrases_any_case() {
        for body in [
            "<h1>Access Denied</h1>",
            "<title>403 Forbidden</title>",
            "Please solve the CAPTCHA below",
            "Your request was Blocked",
            "Checking your browser - Cloudflare",
            "<div>Security Challenge in progress</div>",
        ] {
            assert!(is_blocked(body, 200), "expected block for {body:?}");
        }
    }

    #[test]
    fn test_clean_page_passes() {
        let body = "<html><head><title>About us</title></head>\
                    <body><p>Founded in 1856 in Paris.</p></body></html>";
        assert!(!is_blocked(body, 200));
    }
}
