use hmac::{Hmac, Mac};
use sha2::Sha256;

use super::errors::AlertError;

type HmacSha256 = Hmac<Sha256>;

/// Header the receiver checks the body signature against.
pub const SIGNATURE_HEADER: &str = "x-signature";

/// Lowercase hex HMAC-SHA256 of the exact request body.
pub fn sign_body(secret: &str, body: &[u8]) -> Result<String, AlertError> {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .map_err(|e| AlertError::SigningKey(e.to_string()))?;
    mac.update(body);
    Ok(hex::encode(mac.finalize().into_bytes()))
}
