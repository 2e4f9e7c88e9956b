//! URL-safe Base64 encoding of identifier bytes.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::error::ClusterIdError;
use crate::identifier::ID_LEN;

/// Length of an encoded identifier: 16 bytes become 22 Base64 symbols once
/// the two `=` padding characters are dropped.
pub const ENCODED_LEN: usize = 22;

/// Encodes 16 identifier bytes as URL-safe Base64 without padding.
///
/// The alphabet is `A–Z a–z 0–9 - _`, the form Kafka's `Uuid.toString()`
/// produces. Deterministic: the same bytes always encode to the same
/// string.
///
/// # Errors
///
/// Returns [`ClusterIdError::Encoding`] when `bytes` is not exactly 16
/// bytes long. Unreachable through the generator, which always produces
/// 16 bytes.
pub fn encode(bytes: &[u8]) -> Result<String, ClusterIdError> {
    if bytes.len() != ID_LEN {
        return Err(ClusterIdError::Encoding { len: bytes.len() });
    }
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_is_22_chars_without_padding() {
        let encoded = encode(&[0x5A; 16]).expect("16 bytes encode");
        assert_eq!(encoded.len(), ENCODED_LEN);
        assert!(!encoded.contains('='));
    }

    #[test]
    fn all_zero_bytes_encode_to_all_a() {
        let encoded = encode(&[0u8; 16]).expect("16 bytes encode");
        assert_eq!(encoded, "AAAAAAAAAAAAAAAAAAAAAA");
    }

    #[test]
    fn encoding_is_deterministic() {
        let bytes = [0xC4, 0x10, 0x55, 0x2E, 0x90, 0x07, 0x4D, 0x13, 0x81, 0x6F, 0x22, 0xA0,
            0x3B, 0xDA, 0x64, 0x9C];
        assert_eq!(encode(&bytes).expect("16 bytes encode"), encode(&bytes).expect("16 bytes encode"));
    }

    #[test]
    fn uses_the_url_safe_alphabet() {
        // All-0xFB input yields '-' and '_' where standard Base64 has '+' and '/'.
        let encoded = encode(&[0xFB; 16]).expect("16 bytes encode");
        assert!(encoded.chars().all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
        assert!(!encoded.contains('+'));
        assert!(!encoded.contains('/'));
    }

    #[test]
    fn round_trips_through_decode() {
        let bytes = [0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0xFE, 0xDC, 0xBA, 0x98,
            0x76, 0x54, 0x32, 0x10];
        let encoded = encode(&bytes).expect("16 bytes encode");
        let decoded = URL_SAFE_NO_PAD.decode(&encoded).expect("valid base64");
        assert_eq!(decoded, bytes);
    }

    #[test]
    fn rejects_lengths_other_than_16() {
        for len in [0usize, 15, 17] {
            let bytes = vec![0u8; len];
            let err = encode(&bytes).expect_err("length must be rejected");
            assert!(matches!(err, ClusterIdError::Encoding { len: l } if l == len));
        }
    }
}
