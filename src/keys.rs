use data_encoding::HEXLOWER_PERMISSIVE;
use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::EncodingError;

// RFC 4226 section 4 recommends a 160-bit shared secret.
const KEY_LEN: usize = 20;

// Generate a 20 byte random key, hex encoded
pub fn generate_key() -> String {
    let mut dest = [0u8; KEY_LEN];
    OsRng.fill_bytes(&mut dest);
    HEXLOWER_PERMISSIVE.encode(&dest)
}

/// Decode a hex-encoded key to raw bytes. Accepts either case.
pub fn decode_key(value: &str) -> Result<Vec<u8>, EncodingError> {
    if value.is_empty() {
        return Err(EncodingError::Empty);
    }
    let bytes = HEXLOWER_PERMISSIVE.decode(value.as_bytes())?;
    Ok(bytes)
}

// Validate key provided in arguments is a valid hex encoding
pub fn is_hex_key(value: &str) -> Result<(), String> {
    match decode_key(value) {
        Ok(_) => Ok(()),
        Err(_) => Err(String::from("the key is not a valid hex encoding")),
    }
}
