//! Numeric decoding of VM return data.

use crate::contract::types::DecodeError;

/// Decode the first return value as a big-endian unsigned integer.
///
/// An empty `buff` decodes to 0, as does an empty first value. Leading zero
/// bytes are insignificant, so any width is accepted as long as the value
/// itself fits in a `u64`.
pub fn decode_u64(buff: &[Vec<u8>]) -> Result<u64, DecodeError> {
    let Some(bytes) = buff.first() else {
        return Ok(0);
    };

    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    let significant = &bytes[start..];
    if significant.len() > 8 {
        return Err(DecodeError::ValueOutOfRange(hex::encode(significant)));
    }

    let mut widened = [0u8; 8];
    widened[8 - significant.len()..].copy_from_slice(significant);
    Ok(u64::from_be_bytes(widened))
}

/// Hex-encode a view-call argument, padding to whole bytes.
pub fn encode_u64_arg(value: u64) -> String {
    let hex = format!("{value:x}");
    if hex.len() % 2 != 0 {
        format!("0{hex}")
    } else {
        hex
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_zero() {
        assert_eq!(decode_u64(&[]), Ok(0));
        assert_eq!(decode_u64(&[vec![]]), Ok(0));
    }

    #[test]
    fn test_big_endian() {
        assert_eq!(decode_u64(&[vec![0x00, 0x64]]), Ok(100));
        assert_eq!(decode_u64(&[vec![0x01, 0x00]]), Ok(256));
        assert_eq!(decode_u64(&[vec![0xff; 8]]), Ok(u64::MAX));
    }

    #[test]
    fn test_only_first_value_is_read() {
        assert_eq!(decode_u64(&[vec![0x2a], vec![0xff; 16]]), Ok(42));
    }

    #[test]
    fn test_leading_zeros_beyond_eight_bytes() {
        let mut bytes = vec![0u8; 24];
        bytes.push(0x07);
        assert_eq!(decode_u64(&[bytes]), Ok(7));
    }

    #[test]
    fn test_overflow() {
        // 2^64
        let two_pow_64 = vec![0x01, 0, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(
            decode_u64(&[two_pow_64]),
            Err(DecodeError::ValueOutOfRange("010000000000000000".to_string()))
        );
    }

    #[test]
    fn test_arg_encoding() {
        assert_eq!(encode_u64_arg(0), "00");
        assert_eq!(encode_u64_arg(10), "0a");
        assert_eq!(encode_u64_arg(255), "ff");
        assert_eq!(encode_u64_arg(256), "0100");
        assert_eq!(encode_u64_arg(u64::MAX), "ffffffffffffffff");
    }

    #[test]
    fn test_arg_round_trip() {
        let samples = [0u64, 1, 15, 16, 4095, 4096, 1 << 32, 123_456_789_012, u64::MAX];
        for id in samples {
            let arg = encode_u64_arg(id);
            assert_eq!(arg.len() % 2, 0, "odd length for {id}");
            let bytes = hex::decode(&arg).unwrap();
            assert_eq!(decode_u64(&[bytes]), Ok(id));
        }
    }
}
