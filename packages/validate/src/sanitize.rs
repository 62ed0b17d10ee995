//! String-safety helpers for user-entered and scraped text.
//!
//! [`sanitize`] strips a denylist of script-injection patterns; it is a
//! best-effort filter, not a parser-based sanitizer, and obfuscated or
//! re-assembled payloads can defeat it. Callers rendering untrusted content
//! must not rely on it alone. [`is_safe_url`] allow-lists link protocols.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Maximum length of sanitized output, in characters.
pub const MAX_SANITIZED_LEN: usize = 500;

/// Regex matching the `javascript:` protocol prefix, case-insensitively.
static JS_PROTOCOL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)javascript:").expect("valid regex"));

/// Regex matching inline event-handler attributes (`onclick=`, `onload=`,
/// ...), case-insensitively.
static EVENT_HANDLER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)on\w+=").expect("valid regex"));

/// Strips script-injection patterns from arbitrary text.
///
/// The pipeline, in fixed order:
/// 1. Remove every `<` and `>`
/// 2. Remove every case-insensitive `javascript:`
/// 3. Remove every case-insensitive `on<word>=` event-handler pattern
/// 4. Trim leading/trailing whitespace
/// 5. Truncate to at most [`MAX_SANITIZED_LEN`] characters
#[must_use]
pub fn sanitize(input: &str) -> String {
    let no_brackets: String = input.chars().filter(|c| !matches!(c, '<' | '>')).collect();
    let no_protocol = JS_PROTOCOL_RE.replace_all(&no_brackets, "");
    let no_handlers = EVENT_HANDLER_RE.replace_all(&no_protocol, "");
    no_handlers.trim().chars().take(MAX_SANITIZED_LEN).collect()
}

/// Whether a string is an absolute `http` or `https` URL.
///
/// Any parse failure (relative URL, garbage input) yields `false`; this
/// never panics or returns an error.
#[must_use]
pub fn is_safe_url(input: &str) -> bool {
    Url::parse(input).is_ok_and(|url| matches!(url.scheme(), "http" | "https"))
}
