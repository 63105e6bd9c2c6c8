//! Subscription lookups.
//!
//! Subscriptions live on both tiers: the merchant-scoped path returns the
//! raw record (used here only to extract the owning user id), the
//! project-scoped path returns the full typed record.

use serde::Deserialize;

use super::{Client, ClientError};
use crate::objects::Subscription;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SubscriptionUserPayload {
    user: SubscriptionUserRef,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SubscriptionUserRef {
    id: String,
}

impl Client {
    /// `GET merchants/{merchant_id}/subscriptions/{id}` — extract the id
    /// of the user owning a subscription.
    pub async fn get_subscription_user_id(
        &self,
        subscription_id: &str,
    ) -> Result<String, ClientError> {
        let url = self.merchant_url(&format!(
            "subscriptions/{}",
            urlencoding::encode(subscription_id)
        ));
        let payload: SubscriptionUserPayload = self.get_json(url).await?;
        Ok(payload.user.id)
    }

    /// `GET projects/{project_id}/subscriptions/{id}` — fetch a
    /// subscription.
    pub async fn get_subscription(&self, id: i64) -> Result<Subscription, ClientError> {
        let url = self.project_url(&format!("subscriptions/{id}"));
        self.get_json(url).await
    }
}
