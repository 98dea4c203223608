//! Session Token
//!
//! Cookie value format: `<session uuid>.<base64url(HMAC-SHA256(uuid))>`.
//! The signature lets the guard reject forged cookies without a database hit.

use platform::crypto::{from_base64_url, hmac_sha256, to_base64_url, verify_hmac_sha256};
use uuid::Uuid;

pub fn sign(session_id: Uuid, secret: &[u8; 32]) -> String {
    let id = session_id.to_string();
    let tag = hmac_sha256(secret, id.as_bytes());
    format!("{}.{}", id, to_base64_url(&tag))
}

/// Session id if the signature checks out
pub fn verify(token: &str, secret: &[u8; 32]) -> Option<Uuid> {
    let (id, signature) = token.split_once('.')?;
    let tag = from_base64_url(signature).ok()?;

    if !verify_hmac_sha256(secret, id.as_bytes(), &tag) {
        return None;
    }

    id.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: [u8; 32] = [9u8; 32];

    #[test]
    fn test_sign_then_verify() {
        let id = Uuid::new_v4();
        let token = sign(id, &SECRET);
        assert!(token.starts_with(&id.to_string()));
        assert_eq!(verify(&token, &SECRET), Some(id));
    }

    #[test]
    fn test_wrong_secret() {
        let token = sign(Uuid::new_v4(), &SECRET);
        assert_eq!(verify(&token, &[1u8; 32]), None);
    }

    #[test]
    fn test_tampered_id() {
        let token = sign(Uuid::new_v4(), &SECRET);
        let (_, sig) = token.split_once('.').unwrap();
        let forged = format!("{}.{}", Uuid::new_v4(), sig);
        assert_eq!(verify(&forged, &SECRET), None);
    }

    #[test]
    fn test_malformed() {
        assert_eq!(verify("", &SECRET), None);
        assert_eq!(verify("no-dot", &SECRET), None);
        assert_eq!(verify("abc.!!!", &SECRET), None);
    }
}
