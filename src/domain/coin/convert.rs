//! Conversions from wire types to domain types for coins.

use super::wire::CoinResponse;
use super::Coin;

impl From<CoinResponse> for Coin {
    fn from(c: CoinResponse) -> Self {
        Self {
            name: c.name,
            symbol: c.symbol,
            coin_type: c.coin_type,
            is_active: c.is_active,
            is_new: c.is_new,
        }
    }
}
