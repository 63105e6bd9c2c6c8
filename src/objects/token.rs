//! Payment token request types and the payload helpers for building them.
//!
//! A token is the opaque string handed to the hosted checkout UI; the
//! request body nests user data, custom parameters, UI settings, and an
//! optional purchase description.  The loosely structured fragments are
//! [`Params`] maps with helper constructors producing the shapes the token
//! endpoint expects.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use super::Params;

/// Mode string sent to the token endpoint when the client is in sandbox.
pub const MODE_SANDBOX: &str = "sandbox";

/// Request body for `POST token`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub user: Params,
    #[serde(
        rename = "custom_parameters",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_params: Option<Params>,
    pub settings: TokenSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase: Option<PurchaseSettings>,
}

/// Settings block of a token request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TokenSettings {
    pub project_id: u32,
    pub ui: Params,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_url: Option<String>,
}

/// Purchase block of a token request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseSettings {
    pub subscription: PurchaseSubscription,
    pub description: PurchaseDescription,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_code: Option<PurchaseCouponCode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseDescription {
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseCouponCode {
    pub value: String,
}

/// Subscription purchase parameters shown in the payment UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchaseSubscription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,

    /// Subscription plans to show in the payment UI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_plans: Option<Vec<String>>,

    /// Operation applied to the user's subscription plan.  Pass
    /// `change_plan` together with the new plan id in `plan_id` to switch
    /// plans.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,

    /// Currency of the subscription plan to use in all calculations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,

    /// Trial period in days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trial_days: Option<u32>,
}

/// Build the `user` fragment of a token request.
///
/// A non-empty `promo` is folded into `attributes` under the `promo` key;
/// empty `utm` and `attributes` maps are omitted entirely.
pub fn new_user_data(
    id: &str,
    email: &str,
    promo: &str,
    utm: Params,
    mut attributes: Params,
) -> Params {
    let mut data = Params::new();
    data.insert("id".to_owned(), json!({"value": id, "hidden": true}));
    data.insert("email".to_owned(), json!({"value": email}));
    data.insert("country".to_owned(), json!({"allow_modify": true}));

    if !promo.is_empty() {
        attributes.insert("promo".to_owned(), json!(promo));
    }
    if !attributes.is_empty() {
        data.insert("attributes".to_owned(), Value::Object(attributes));
    }
    if !utm.is_empty() {
        data.insert("utm".to_owned(), Value::Object(utm));
    }
    data
}

/// Build the `custom_parameters` fragment of a token request.
pub fn new_custom_params(
    active: OffsetDateTime,
    registration: OffsetDateTime,
    additional_verification: bool,
) -> Params {
    let mut params = Params::new();
    params.insert("registration_date".to_owned(), datetime_value(registration));
    params.insert("active_date".to_owned(), datetime_value(active));
    params.insert(
        "additional_verification".to_owned(),
        json!(additional_verification),
    );
    params
}

fn datetime_value(instant: OffsetDateTime) -> Value {
    instant.format(&Rfc3339).map(Value::String).unwrap_or(Value::Null)
}

/// Default UI settings for the hosted checkout: compact desktop header,
/// hidden mobile footer, virtual currency component hidden.
pub fn new_ui_settings() -> Params {
    let mut ui = Params::new();
    ui.insert("version".to_owned(), json!("desktop"));
    ui.insert(
        "desktop".to_owned(),
        json!({
            "header": {"type": "compact", "visible_name": true},
            "subscription_list": {}
        }),
    );
    ui.insert("mobile".to_owned(), json!({"footer": {"is_visible": false}}));
    ui.insert(
        "components".to_owned(),
        json!({"virtual_currency": {"hidden": true}}),
    );
    ui
}

/// Build the `utm` fragment of a token request.
pub fn new_utm(source: &str, campaign: &str, term: &str, content: &str) -> Params {
    let mut utm = Params::new();
    utm.insert("utm_source".to_owned(), json!(source));
    utm.insert("utm_campaign".to_owned(), json!(campaign));
    utm.insert("utm_term".to_owned(), json!(term));
    utm.insert("utm_content".to_owned(), json!(content));
    utm
}
