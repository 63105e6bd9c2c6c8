//! Subscription records for the project-scoped subscription API.

use serde::{Deserialize, Serialize};

use super::user::User;
use crate::time::Timestamp;

/// Lifecycle status of a subscription.
///
/// The upstream API evolves independently, so unknown statuses decode as
/// [`SubscriptionStatus::Other`] with the original text preserved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    Active,
    Canceled,
    Ended,
    NonRenewing,
    #[serde(untagged)]
    Other(String),
}

impl Default for SubscriptionStatus {
    // Zero value for empty or non-JSON success bodies.
    fn default() -> Self {
        Self::Other(String::new())
    }
}

/// A recurring subscription as returned by `GET subscriptions/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscription {
    pub charge_amount: f64,
    pub comment: String,
    pub currency: String,
    pub date_create: Timestamp,
    pub date_end: Timestamp,
    pub date_next_charge: Timestamp,
    pub id: i64,
    pub plan: Plan,
    pub status: SubscriptionStatus,
    pub tags: Vec<String>,
    pub trial: Trial,
    pub user: User,
}

/// The plan a subscription charges against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Plan {
    pub external_id: String,
    pub id: i64,
}

/// Trial period attached to a subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trial {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use time::macros::datetime;

    #[test]
    fn decodes_a_full_subscription() {
        let body = json!({
            "charge_amount": 9.99,
            "currency": "USD",
            "date_create": "2021-03-01T10:00:00-05:00",
            "date_next_charge": "2021-04-01T10:00:00-0500",
            "date_end": null,
            "id": 123,
            "plan": {"external_id": "monthly", "id": 4},
            "status": "active",
            "tags": ["vip"],
            "trial": {"type": "day", "value": 7},
            "user": {"id": "user_2", "email": "john.smith@mail.com"}
        });

        let sub: Subscription = serde_json::from_value(body).unwrap();
        assert_eq!(sub.id, 123);
        assert_eq!(sub.status, SubscriptionStatus::Active);
        assert_eq!(
            sub.date_create,
            Timestamp(Some(datetime!(2021-03-01 10:00:00 -5)))
        );
        assert_eq!(
            sub.date_next_charge,
            Timestamp(Some(datetime!(2021-04-01 10:00:00 -5)))
        );
        assert_eq!(sub.date_end, Timestamp(None));
        assert_eq!(sub.plan.external_id, "monthly");
        assert_eq!(sub.trial.kind, "day");
        assert_eq!(sub.user.id, "user_2");
        // comment was absent, tolerated via defaults
        assert_eq!(sub.comment, "");
    }

    #[test]
    fn unknown_status_decodes_as_opaque_string() {
        let known: SubscriptionStatus = serde_json::from_value(json!("non_renewing")).unwrap();
        assert_eq!(known, SubscriptionStatus::NonRenewing);

        let unknown: SubscriptionStatus = serde_json::from_value(json!("frozen")).unwrap();
        assert_eq!(unknown, SubscriptionStatus::Other("frozen".to_owned()));
        assert_eq!(serde_json::to_value(&unknown).unwrap(), json!("frozen"));
    }
}
