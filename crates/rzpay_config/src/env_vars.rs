//! Environment variable names used by rzpay.
//!
//! The service keeps the flat variable names it has always been deployed with
//! (`RZKEY`, `RZPASS`, `MONGO_URI`, `PORT`). Every other setting can be
//! overridden through the prefixed form, e.g. `RZPAY__DATABASE__NAME`.

use std::collections::HashMap;

/// The prefix for structured configuration environment variables
pub const CONFIG_PREFIX: &str = "RZPAY";

/// The separator for structured configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// Razorpay key id.
pub const RZKEY: &str = "RZKEY";
/// Razorpay key secret.
pub const RZPASS: &str = "RZPASS";
/// MongoDB connection string.
pub const MONGO_URI: &str = "MONGO_URI";
/// Listen port.
pub const PORT: &str = "PORT";

/// Maps a flat environment variable to the configuration path it overrides.
pub const LEGACY_OVERRIDES: [(&str, &str); 4] = [
    (RZKEY, "razorpay.key_id"),
    (RZPASS, "razorpay.key_secret"),
    (MONGO_URI, "database.uri"),
    (PORT, "server.port"),
];

/// Convert a configuration path to its prefixed environment variable name
///
/// # Arguments
///
/// * `path` - The configuration path (e.g., "database.name")
///
/// # Returns
///
/// The environment variable name (e.g., "RZPAY__DATABASE__NAME")
pub fn config_path_to_env_var(path: &str) -> String {
    let path = path.replace('.', CONFIG_SEPARATOR);
    format!("{}{}{}", CONFIG_PREFIX, CONFIG_SEPARATOR, path).to_uppercase()
}

/// Look up a variable, treating empty and whitespace-only values as unset.
pub fn non_empty<'a>(vars: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    vars.get(name)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}
