//! Constants for the spo-api client.

/// User-Agent header value for platform API requests
pub const USER_AGENT: &str = concat!("spo-cli/", env!("CARGO_PKG_VERSION"));
