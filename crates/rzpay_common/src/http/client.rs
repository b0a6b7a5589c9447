// --- File: crates/rzpay_common/src/http/client.rs ---
use reqwest::{redirect::Policy, Client};
use std::time::Duration;

/// User agent sent on every outbound gateway call.
pub const USER_AGENT: &str = concat!("rzpay/", env!("CARGO_PKG_VERSION"));

/// Builds the pooled client used for gateway calls.
///
/// `timeout_secs` bounds the whole request, connect included. Redirects are
/// not followed; a gateway answering 3xx is reported as an error response.
pub fn create_client(timeout_secs: u64) -> Result<Client, reqwest::Error> {
    let timeout = Duration::from_secs(timeout_secs);
    Client::builder()
        .timeout(timeout)
        .connect_timeout(timeout)
        .user_agent(USER_AGENT)
        .redirect(Policy::none())
        .build()
}
