//! Coins sub-client — catalog queries.

use crate::client::CoinsClient;
use crate::domain::coin::Coin;
use crate::error::SdkError;

pub struct Coins<'a> {
    pub(crate) client: &'a CoinsClient,
}

impl<'a> Coins<'a> {
    /// Fetch the whole catalog (never cached — always fresh).
    pub async fn all(&self) -> Result<Vec<Coin>, SdkError> {
        let resp = self.client.http.get_coins().await?;
        Ok(resp.into_iter().map(Coin::from).collect())
    }
}
