//! Rust SDK for the Xsolla Pay Station API.
//!
//! Two collaborating parts:
//!
//! * [`client::Client`] — authenticated JSON-over-HTTP calls against the
//!   two Xsolla endpoint tiers (merchant-scoped and project-scoped):
//!   subscriptions, users, transaction reports, and payment token creation.
//! * [`webhook::parse_webhook`] — verification and decoding of inbound
//!   webhook notifications.  The wire format for the signature header is:
//!
//!   ```text
//!   Authorization: Signature {lowercase_hex(sha1(raw_body || project_secret))}
//!   ```
//!
//! The client is gated behind the `client` cargo feature (enabled by
//! default) so webhook-only embedders do not pull in `reqwest`.
//!
//! # Example
//!
//! ```ignore
//! use xsolla::client::{Client, Credentials};
//!
//! let client = Client::new(Credentials {
//!     merchant_id: 7,
//!     merchant_secret: "merchant-secret".into(),
//!     project_id: 42,
//!     project_secret: "project-secret".into(),
//! })
//! .sandbox(true);
//!
//! let mut token = xsolla::objects::Token::default();
//! token.settings = client.new_token_settings();
//! let token_string = client.create_token(&token).await?;
//! ```

#[cfg(feature = "client")]
pub mod client;
pub mod objects;
pub mod signature;
pub mod time;
pub mod webhook;

#[cfg(feature = "client")]
pub use client::{Client, ClientError, Credentials, RequestError};
pub use self::time::Timestamp;
pub use webhook::{WebhookParseError, parse_webhook};
