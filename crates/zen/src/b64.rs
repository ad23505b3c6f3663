//! Standard base64 (RFC 4648, with padding) helpers.
//!
//! ```
//! use zen::b64;
//!
//! assert_eq!(b64::encode("foo"), "Zm9v");
//! assert_eq!(b64::decode("Zm9v").unwrap(), b"foo");
//! assert_eq!(b64::decode_string("Zm9v").unwrap(), "foo");
//! ```

use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::{Error, Result};

/// Encodes bytes (or a string's bytes) to base64.
pub fn encode<T: AsRef<[u8]>>(value: T) -> String {
    STANDARD.encode(value)
}

/// Decodes base64 into bytes.
///
/// # Errors
///
/// Returns [`Error::Base64`] if `input` is not valid base64.
pub fn decode(input: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(input)?)
}

/// Decodes base64 into a UTF-8 string.
///
/// # Errors
///
/// Returns [`Error::Base64`] if `input` is not valid base64 or the decoded
/// bytes are not UTF-8.
pub fn decode_string(input: &str) -> Result<String> {
    String::from_utf8(decode(input)?).map_err(|e| Error::Base64(e.to_string()))
}
