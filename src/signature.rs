//! Signature primitives for the Xsolla webhook API.
//!
//! Xsolla signs every webhook it delivers by hashing the concatenation of
//! the raw request body and the project secret:
//!
//! ```text
//! Authorization: Signature {lowercase_hex(sha1(raw_body || project_secret))}
//! ```
//!
//! There is no timestamp and no HMAC — the scheme is a plain keyed digest,
//! so verification is a recompute-and-compare over the exact body bytes.

use ring::digest;

/// Header the signature arrives in.
pub const SIGNATURE_HEADER: &str = "Authorization";

/// Scheme prefix in front of the hex digest.
pub const SIGNATURE_PREFIX: &str = "Signature ";

/// Errors produced by signature verification.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("invalid webhook signature")]
    Mismatch,
}

/// Compute the webhook signature for a raw body and project secret,
/// rendered as lowercase hex.
pub fn compute_signature(body: &[u8], project_secret: &str) -> String {
    let mut ctx = digest::Context::new(&digest::SHA1_FOR_LEGACY_USE_ONLY);
    ctx.update(body);
    ctx.update(project_secret.as_bytes());
    hex::encode(ctx.finish())
}

/// Strip the `"Signature "` scheme prefix from an `Authorization` header
/// value, returning the value unchanged if the prefix is absent.
pub fn strip_signature_prefix(header_value: &str) -> &str {
    header_value
        .strip_prefix(SIGNATURE_PREFIX)
        .unwrap_or(header_value)
}

/// Verify a header-supplied signature against the raw body and secret.
///
/// The comparison is exact string equality on the hex rendering, matching
/// what Xsolla documents for the scheme.
pub fn verify_signature(
    provided: &str,
    body: &[u8],
    project_secret: &str,
) -> Result<(), SignatureError> {
    if provided != compute_signature(body, project_secret) {
        return Err(SignatureError::Mismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // sha1("") and sha1("abc") reference vectors.
    #[test]
    fn known_digests() {
        assert_eq!(
            compute_signature(b"", ""),
            "da39a3ee5e6b4b0d3255bfef95601890afd80709"
        );
        assert_eq!(
            compute_signature(b"ab", "c"),
            "a9993e364706816aba3e25717850c26c9cd0d89d"
        );
        // The secret is appended, not mixed: sha1(body || secret).
        assert_eq!(compute_signature(b"a", "bc"), compute_signature(b"ab", "c"));
    }

    #[test]
    fn verify_round_trip() {
        let body = br#"{"notification_type":"payment"}"#;
        let sig = compute_signature(body, "project-secret");
        assert_eq!(verify_signature(&sig, body, "project-secret"), Ok(()));
        assert_eq!(
            verify_signature(&sig, body, "other-secret"),
            Err(SignatureError::Mismatch)
        );
        assert_eq!(
            verify_signature(&sig, b"tampered", "project-secret"),
            Err(SignatureError::Mismatch)
        );
    }

    #[test]
    fn prefix_stripping() {
        assert_eq!(strip_signature_prefix("Signature abc123"), "abc123");
        assert_eq!(strip_signature_prefix("abc123"), "abc123");
    }
}
