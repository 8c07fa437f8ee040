//! Session Token
//!
//! Cookie value format: `<session-uuid>.<base64url(HMAC-SHA256(secret, uuid))>`.
//! The signature lets forged or truncated cookies be rejected without a
//! database round trip.

use kernel::id::SessionId;

/// Generate signed session token
pub fn issue(session_id: &SessionId, secret: &[u8]) -> String {
    let session_id = session_id.to_string();
    let signature = platform::crypto::sign(secret, session_id.as_bytes());
    format!("{}.{}", session_id, signature)
}

/// Parse and verify session token. Any malformed or forged token yields `None`.
pub fn parse(token: &str, secret: &[u8]) -> Option<SessionId> {
    let (session_id, signature) = token.split_once('.')?;

    if !platform::crypto::verify(secret, session_id.as_bytes(), signature) {
        tracing::debug!("Session token signature mismatch");
        return None;
    }

    session_id.parse().ok()
}
