//! Wire types for coin responses (REST).

use serde::{Deserialize, Serialize};

/// Raw coin from the catalog endpoint.
///
/// The endpoint returns a bare JSON array of these, with no envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CoinResponse {
    pub name: String,
    pub symbol: String,
    #[serde(rename = "type")]
    pub coin_type: String,
    pub is_active: bool,
    pub is_new: bool,
}
