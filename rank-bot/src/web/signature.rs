//! Discord interaction signature verification.
//!
//! Discord signs every interaction request with Ed25519 over `timestamp + body`.
//! Reference: https://discord.com/developers/docs/interactions/overview#setting-up-an-endpoint-validating-security-request-headers

use ed25519_dalek::{Signature, Verifier, VerifyingKey};
use tracing::warn;

/// Header carrying the hex-encoded Ed25519 signature.
pub const SIGNATURE_HEADER: &str = "X-Signature-Ed25519";

/// Header carrying the timestamp that was signed together with the body.
pub const TIMESTAMP_HEADER: &str = "X-Signature-Timestamp";

/// Verify a Discord interaction signature.
///
/// # Arguments
///
/// * `public_key_hex` - The application's public key, hex encoded
/// * `signature_hex` - The `X-Signature-Ed25519` header value
/// * `timestamp` - The `X-Signature-Timestamp` header value
/// * `body` - The raw, unparsed request body
///
/// # Returns
///
/// `true` only if every input decodes and the signature matches.
pub fn verify_interaction_signature(
    public_key_hex: &str,
    signature_hex: &str,
    timestamp: &str,
    body: &[u8],
) -> bool {
    if public_key_hex.is_empty() || signature_hex.is_empty() || timestamp.is_empty() {
        warn!(
            has_public_key = !public_key_hex.is_empty(),
            has_signature = !signature_hex.is_empty(),
            has_timestamp = !timestamp.is_empty(),
            "signature_missing_fields"
        );
        return false;
    }

    let public_key = match decode_public_key(public_key_hex) {
        Some(k) => k,
        None => {
            warn!("signature_invalid_public_key");
            return false;
        }
    };

    let signature = match hex::decode(signature_hex)
        .ok()
        .and_then(|bytes| Signature::from_slice(&bytes).ok())
    {
        Some(s) => s,
        None => {
            warn!(signature_length = signature_hex.len(), "signature_invalid_encoding");
            return false;
        }
    };

    let mut message = Vec::with_capacity(timestamp.len() + body.len());
    message.extend_from_slice(timestamp.as_bytes());
    message.extend_from_slice(body);

    let valid = public_key.verify(&message, &signature).is_ok();

    if !valid {
        warn!(body_length = body.len(), "signature_mismatch");
    }

    valid
}

fn decode_public_key(public_key_hex: &str) -> Option<VerifyingKey> {
    let bytes = hex::decode(public_key_hex).ok()?;
    let bytes: [u8; 32] = bytes.as_slice().try_into().ok()?;
    VerifyingKey::from_bytes(&bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signer, SigningKey};

    fn keypair() -> (SigningKey, String) {
        let signing_key = SigningKey::from_bytes(&[7u8; 32]);
        let public_hex = hex::encode(signing_key.verifying_key().to_bytes());
        (signing_key, public_hex)
    }

    fn sign(key: &SigningKey, timestamp: &str, body: &[u8]) -> String {
        let mut message = timestamp.as_bytes().to_vec();
        message.extend_from_slice(body);
        hex::encode(key.sign(&message).to_bytes())
    }

    #[test]
    fn test_verify_signature_valid() {
        let (key, public_hex) = keypair();
        let body = br#"{"type":1}"#;
        let signature = sign(&key, "1700000000", body);

        assert!(verify_interaction_signature(
            &public_hex,
            &signature,
            "1700000000",
            body
        ));
    }

    #[test]
    fn test_verify_signature_tampered_body() {
        let (key, public_hex) = keypair();
        let signature = sign(&key, "1700000000", br#"{"type":1}"#);

        assert!(!verify_interaction_signature(
            &public_hex,
            &signature,
            "1700000000",
            br#"{"type":2}"#
        ));
    }

    #[test]
    fn test_verify_signature_wrong_timestamp() {
        let (key, public_hex) = keypair();
        let body = br#"{"type":1}"#;
        let signature = sign(&key, "1700000000", body);

        assert!(!verify_interaction_signature(
            &public_hex,
            &signature,
            "1700000001",
            body
        ));
    }

    #[test]
    fn test_verify_signature_missing_fields() {
        let (_, public_hex) = keypair();
        assert!(!verify_interaction_signature("", "ab", "1", b"{}"));
        assert!(!verify_interaction_signature(&public_hex, "", "1", b"{}"));
        assert!(!verify_interaction_signature(&public_hex, "ab", "", b"{}"));
    }

    #[test]
    fn test_verify_signature_bad_encoding() {
        let (_, public_hex) = keypair();
        assert!(!verify_interaction_signature(&public_hex, "not-hex", "1", b"{}"));
        assert!(!verify_interaction_signature(&public_hex, "abcd", "1", b"{}"));
        assert!(!verify_interaction_signature("abcd", &"00".repeat(64), "1", b"{}"));
    }
}
