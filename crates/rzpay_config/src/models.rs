// --- File: crates/rzpay_config/src/models.rs ---

use serde::{Deserialize, Serialize};
use std::fmt;

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16, // Loaded via PORT or RZPAY__SERVER__PORT
}

// --- Razorpay Config ---
// Credentials come from RZKEY / RZPASS. The secret is never serialized.
#[derive(Deserialize, Serialize, Clone)]
pub struct RazorpayConfig {
    #[serde(default)]
    pub key_id: String,
    #[serde(default, skip_serializing)]
    pub key_secret: String,
    pub base_url: String,
    /// Request timeout for order creation, in seconds.
    pub timeout_secs: u64,
}

impl fmt::Debug for RazorpayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RazorpayConfig")
            .field("key_id", &self.key_id)
            .field("key_secret", &"***")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

// --- Database Config ---
#[derive(Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    #[serde(default, skip_serializing)]
    pub uri: String, // MONGO_URI, may embed credentials
    pub name: String,
    pub collection: String,
    pub connect_timeout_secs: u64,
    pub insert_timeout_secs: u64,
    pub find_timeout_secs: u64,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("uri", &"***")
            .field("name", &self.name)
            .field("collection", &self.collection)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("insert_timeout_secs", &self.insert_timeout_secs)
            .field("find_timeout_secs", &self.find_timeout_secs)
            .finish()
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub razorpay: RazorpayConfig,
    pub database: DatabaseConfig,
}
