//! Java version banner parsing.

use regex::Regex;
use std::sync::OnceLock;

fn quoted_version_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"version "([^"]*)""#).expect("Invalid regex pattern"))
}

fn digits_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").expect("Invalid regex pattern"))
}

/// Parse the major Java version from `java -version` output.
///
/// Handles both banner formats:
///
/// - `java version "1.8.0_202"` -> 8 (legacy `1.<major>` scheme)
/// - `openjdk version "11.0.2" 2019-01-15` -> 11
/// - `openjdk version "17" 2021-09-14` -> 17
///
/// Returns 0 when no quoted version token is found or the token holds no
/// digits. Callers treat 0 as "too old" rather than as an error.
pub fn parse_major_version(output: &str) -> u32 {
    let Some(caps) = quoted_version_re().captures(output) else {
        return 0;
    };
    let token = caps.get(1).map_or("", |m| m.as_str());

    // "1.8.0_202" -> "8.0_202"
    let token = token.strip_prefix("1.").unwrap_or(token);

    digits_re()
        .find(token)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}
