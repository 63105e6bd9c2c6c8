//! Verification and decoding of inbound webhook notifications.
//!
//! The verifier is not a server: the embedding application reads the
//! request body (exactly once — the stream is not re-readable) and hands
//! the header value and raw bytes to [`parse_webhook`].  The body is never
//! decoded before its signature has been verified.

use tracing::debug;

use crate::objects::Webhook;
use crate::signature::{SignatureError, strip_signature_prefix, verify_signature};

/// Errors produced while verifying and decoding a webhook.
#[derive(Debug, thiserror::Error)]
pub enum WebhookParseError {
    /// The header-supplied signature does not match the body.  Terminal;
    /// the body was not decoded.
    #[error(transparent)]
    Signature(#[from] SignatureError),

    /// The body failed to decode after its signature was verified.
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Verify and decode an inbound Xsolla webhook.
///
/// * `signature_header` – value of the `Authorization` request header
///   (`Signature {hex}`; a missing scheme prefix is tolerated).
/// * `body` – the raw request body bytes, read exactly once by the caller.
/// * `project_secret` – the project secret shared with Xsolla.
///
/// On success the returned [`Webhook`] carries the original body text in
/// [`Webhook::raw`].  Dispatching on
/// [`notification_type`](Webhook::notification_type) is the caller's job.
///
/// # Example
///
/// ```ignore
/// use xsolla::objects::NotificationType;
///
/// let hook = xsolla::parse_webhook(auth_header, &body, project_secret)?;
/// match hook.notification_type {
///     NotificationType::Payment => credit_the_user(&hook),
///     NotificationType::CancelSubscription => revoke_access(&hook),
///     _ => {}
/// }
/// ```
pub fn parse_webhook(
    signature_header: &str,
    body: &[u8],
    project_secret: &str,
) -> Result<Webhook, WebhookParseError> {
    let provided = strip_signature_prefix(signature_header);
    verify_signature(provided, body, project_secret)?;

    let mut hook: Webhook = serde_json::from_slice(body)?;
    hook.raw = String::from_utf8_lossy(body).into_owned();
    debug!(notification_type = ?hook.notification_type, "verified inbound webhook");
    Ok(hook)
}
