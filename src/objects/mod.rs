//! Request and response types for the Xsolla API.
//!
//! All types here are plain data transfer records: JSON-tagged, no
//! behavior, constructed per call and discarded after use.  Response types
//! decode permissively (`#[serde(default)]` at the container level) so new
//! upstream fields and omitted fields never break decoding.

pub mod subscription;
pub mod token;
pub mod transaction;
pub mod user;
pub mod webhook;

pub use subscription::{Plan, Subscription, SubscriptionStatus, Trial};
pub use token::{
    PurchaseCouponCode, PurchaseDescription, PurchaseSettings, PurchaseSubscription, Token,
    TokenSettings, new_custom_params, new_ui_settings, new_user_data, new_utm,
};
pub use transaction::{Transaction, TransactionSubscriptionDetails};
pub use user::User;
pub use webhook::{NotificationType, Webhook, WebhookError, WebhookErrorCode, WebhookSubscription};

/// Unordered string-keyed JSON map for the loosely structured payload
/// fragments (custom parameters, UI settings, UTM tags, user attributes)
/// where the API's shape is not worth a fixed record.
pub type Params = serde_json::Map<String, serde_json::Value>;
