use encoding_rs::Encoding;
use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

static CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap());

/// Only the head of the document is sniffed for a `<meta>` declaration.
const SNIFF_WINDOW: usize = 4096;

/// Decode a response body to UTF-8.
///
/// Resolution order: `Content-Type` header charset, `<meta charset>` (which
/// also covers the `http-equiv` form), then `chardetng` guessing. Malformed
/// sequences become U+FFFD; a page with a few bad bytes is still a page.
pub fn decode_body(content_type: &str, body: &[u8]) -> (String, &'static Encoding) {
    let encoding = detect_encoding(content_type, body);
    let (decoded, _, had_errors) = encoding.decode(body);

    if had_errors {
        warn!(encoding = encoding.name(), "body contained malformed sequences, replaced");
    }

    (decoded.into_owned(), encoding)
}

fn detect_encoding(content_type: &str, body: &[u8]) -> &'static Encoding {
    if let Some(encoding) = label_from(&CHARSET_REGEX, content_type) {
        return encoding;
    }

    let head = &body[..body.len().min(SNIFF_WINDOW)];
    let head_str = String::from_utf8_lossy(head);
    if let Some(encoding) = label_from(&META_CHARSET_REGEX, &head_str) {
        return encoding;
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(head, false);
    detector.guess(None, true)
}

fn label_from(regex: &Regex, haystack: &str) -> Option<&'static Encoding> {
    let label = regex.captures(haystack)?.get(1)?.as_str().to_lowercase();
    Encoding::for_label(label.as_bytes())
}
