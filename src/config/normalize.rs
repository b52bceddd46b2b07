//! Section-specific value cleanup applied after defaulting.

use super::settings::AppConfig;

/// Cache URL schemes stripped from the Redis address.
///
/// `rediss://` signals TLS; it is stripped like the plain scheme and does not
/// enable TLS.
pub const CACHE_SCHEMES: &[&str] = &["redis://", "rediss://"];

pub fn normalize(mut config: AppConfig) -> AppConfig {
    if !config.redis.address.is_empty() {
        config.redis.address = normalize_cache_address(&config.redis.address);
    }
    config
}

/// Trim the address and strip known schemes, leaving `host:port`.
///
/// Stripping repeats until no known scheme remains, so applying this twice
/// gives the same result as applying it once. Unknown schemes are kept.
pub fn normalize_cache_address(address: &str) -> String {
    let mut rest = address.trim();
    while let Some(stripped) = strip_scheme(rest) {
        rest = stripped.trim();
    }
    rest.to_string()
}

fn strip_scheme(address: &str) -> Option<&str> {
    CACHE_SCHEMES
        .iter()
        .find_map(|scheme| address.strip_prefix(scheme))
}
