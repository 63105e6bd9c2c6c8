use super::{Client, ClientError};
use crate::objects::Transaction;

impl Client {
    /// `GET merchants/{merchant_id}/reports/transactions/{id}/details` —
    /// fetch the detailed report of a transaction.
    pub async fn get_transaction(&self, id: &str) -> Result<Transaction, ClientError> {
        let url = self.merchant_url(&format!(
            "reports/transactions/{}/details",
            urlencoding::encode(id)
        ));
        self.get_json(url).await
    }
}
