use serde::{Deserialize, Serialize};

use super::Params;

/// A transaction as returned by the merchant-scoped transaction report.
///
/// Customer and transaction details are free-form maps upstream, so they
/// stay [`Params`] rather than fixed records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    pub customer_details: Params,
    pub transaction_details: Params,
    pub subscription_details: TransactionSubscriptionDetails,
}

/// Subscription-payment flags attached to a transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionSubscriptionDetails {
    pub is_payment_from_subscription: bool,
    pub is_subscription_created: bool,
}
