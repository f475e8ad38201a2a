//! Proxy block written by the `proxy` rule.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyConfig {
    /// Proxy URL, e.g. `http://proxy.internal:3128`.
    pub address: String,
    /// Hosts that bypass the proxy.
    #[serde(default)]
    pub no_proxy: Vec<String>,
}
