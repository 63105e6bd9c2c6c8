//! Webhook notification types.
//!
//! A webhook body carries a `notification_type` discriminator and a
//! type-specific nested payload.  Decoding is uniform: every notification
//! lands in [`Webhook`] and the caller dispatches on
//! [`Webhook::notification_type`]; this crate never branches on it.

use serde::{Deserialize, Serialize};

use super::Params;
use super::subscription::{SubscriptionStatus, Trial};
use super::user::User;
use crate::time::Timestamp;

/// Kind of event a webhook announces.
///
/// Unknown upstream types decode as [`NotificationType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    AfsBlackList,
    AfsReject,
    CancelSubscription,
    CreateSubscription,
    #[serde(rename = "get_pincode")]
    GetPinCode,
    NonRenewalSubscription,
    Payment,
    PaymentAccountAdd,
    PaymentAccountRemove,
    RedeemKey,
    Refund,
    UpdateSubscription,
    UpgradeRefund,
    UserBalanceOperation,
    UserSearch,
    UserValidation,
    #[serde(untagged)]
    Other(String),
}

impl Default for NotificationType {
    // Missing discriminator decodes as an empty opaque type.
    fn default() -> Self {
        Self::Other(String::new())
    }
}

/// A decoded, signature-verified webhook notification.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Webhook {
    /// The raw body text the notification was decoded from, kept for
    /// audit and debugging.  Never serialized.
    #[serde(skip)]
    pub raw: String,

    #[serde(rename = "custom_parameters")]
    pub custom_params: Params,
    pub notification_type: NotificationType,
    pub payment_details: Params,
    pub purchase: Params,
    #[serde(rename = "refund_details")]
    pub refund: Params,
    pub subscription: Option<WebhookSubscription>,
    pub transaction: Params,
    pub user: Option<User>,
}

/// Subscription payload as it appears inside a webhook.
///
/// This is the reduced webhook-specific shape (flat `subscription_id`,
/// `plan_id`, `product_id`), which differs from the record the regular
/// subscription API returns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookSubscription {
    pub charge_amount: f64,
    pub comment: String,
    pub currency: String,
    pub date_create: Timestamp,
    pub date_end: Timestamp,
    pub date_next_charge: Timestamp,
    pub subscription_id: i64,
    pub plan_id: String,
    pub product_id: String,
    pub status: SubscriptionStatus,
    pub tags: Vec<String>,
    pub trial: Trial,
    pub user: User,
}

/// Error code a webhook receiver returns to Xsolla when rejecting a
/// notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WebhookErrorCode {
    InvalidUser,
    InvalidParameter,
    InvalidSignature,
    IncorrectAmount,
    IncorrectInvoice,
    #[serde(untagged)]
    Other(String),
}

/// JSON error body a webhook receiver sends back to Xsolla.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookError {
    pub code: WebhookErrorCode,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn notification_types_decode_by_name() {
        let payment: NotificationType = serde_json::from_value(json!("payment")).unwrap();
        assert_eq!(payment, NotificationType::Payment);
        let pincode: NotificationType = serde_json::from_value(json!("get_pincode")).unwrap();
        assert_eq!(pincode, NotificationType::GetPinCode);
        let afs: NotificationType = serde_json::from_value(json!("afs_black_list")).unwrap();
        assert_eq!(afs, NotificationType::AfsBlackList);
    }

    #[test]
    fn future_notification_types_stay_opaque() {
        let unknown: NotificationType =
            serde_json::from_value(json!("partial_refund")).unwrap();
        assert_eq!(unknown, NotificationType::Other("partial_refund".to_owned()));
        assert_eq!(
            serde_json::to_value(&unknown).unwrap(),
            json!("partial_refund")
        );
    }

    #[test]
    fn webhook_error_codes_round_trip() {
        let err = WebhookError {
            code: WebhookErrorCode::InvalidSignature,
            message: "signature mismatch".to_owned(),
        };
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({"code": "INVALID_SIGNATURE", "message": "signature mismatch"})
        );
    }

    #[test]
    fn subscription_webhook_decodes_the_reduced_shape() {
        let body = json!({
            "notification_type": "create_subscription",
            "subscription": {
                "subscription_id": 10,
                "plan_id": "monthly",
                "product_id": "pro",
                "status": "active",
                "date_create": "2021-03-01T10:00:00-0500",
                "charge_amount": 4.99,
                "currency": "USD",
                "trial": {"type": "day", "value": 14},
                "user": {"id": "user_2"}
            },
            "user": {"id": "user_2", "email": "john.smith@mail.com"}
        });

        let hook: Webhook = serde_json::from_value(body).unwrap();
        assert_eq!(hook.notification_type, NotificationType::CreateSubscription);
        let sub = hook.subscription.unwrap();
        assert_eq!(sub.subscription_id, 10);
        assert_eq!(sub.plan_id, "monthly");
        assert_eq!(sub.status, SubscriptionStatus::Active);
        assert_eq!(sub.trial.value, 14);
        assert_eq!(hook.user.unwrap().id, "user_2");
        assert!(hook.payment_details.is_empty());
    }
}
