use hmac::{Hmac, Mac};
use sha1::Sha1;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::TotpError;

// TOTP https://datatracker.ietf.org/doc/html/rfc6238
// HOTP https://datatracker.ietf.org/doc/html/rfc4226

// TOTP = HOTP(K, T) where T = (Current Unix time - T0) / X
// T0 is the Unix epoch and X is the time step in seconds.

type HmacSha1 = Hmac<Sha1>;

const TIME_STEP: u64 = 30;
const DIGITS: u32 = 6;
const DIGEST_LEN: usize = 20;

pub trait GetTime {
    fn get_now(&self) -> SystemTime;
}

pub struct Clock {}

impl Clock {
    pub fn new() -> Self {
        Clock {}
    }
}

impl GetTime for Clock {
    fn get_now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Compute the 6-digit code for a shared key at a point in time.
///
/// The key is raw bytes, already decoded from whatever representation
/// the caller stores it in. Fails on an empty key, on a timestamp
/// before the Unix epoch, and on nothing else.
pub fn generate_code(key: &[u8], now: SystemTime) -> Result<String, TotpError> {
    if key.is_empty() {
        return Err(TotpError::InvalidKey);
    }

    let counter = compute_counter(now)?;
    let digest = hmac_sha1(key, &counter.to_be_bytes())?;
    let value = truncate(&digest)?;

    Ok(format_code(value))
}

// The moving factor: whole seconds since the epoch, floor-divided by
// the step. Sub-second fractions are dropped before the division.
pub fn compute_counter(now: SystemTime) -> Result<u64, TotpError> {
    let elapsed = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| TotpError::InvalidTimestamp)?;
    Ok(elapsed.as_secs() / TIME_STEP)
}

// HMAC_SHA-1 -> 20 byte string
// The key, the counter, and data values are hashed high-order byte first.
fn hmac_sha1(key: &[u8], message: &[u8]) -> Result<Vec<u8>, TotpError> {
    let mut mac = HmacSha1::new_from_slice(key).map_err(|_| TotpError::KeyError)?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

// DT(String) // String = String[0]...String[19]
// Let OffsetBits be the low-order 4 bits of String[19]
// Offset = StToNum(OffsetBits) // 0 <= OffSet <= 15
// Let P = String[OffSet]...String[OffSet+3]
// Return the Last 31 bits of P
//
// The 4 bytes at the offset are read as an unsigned big-endian u32 and
// the top bit is cleared, rather than reading a signed value and
// masking the sign away afterwards. Offset 15 touches indices 15..=18,
// so a 20-byte digest always satisfies the read.
fn truncate(digest: &[u8]) -> Result<u32, TotpError> {
    if digest.len() < DIGEST_LEN {
        return Err(TotpError::DigestTooShort(digest.len()));
    }

    let offset = (digest[DIGEST_LEN - 1] & 0xf) as usize;
    let word = [
        digest[offset],
        digest[offset + 1],
        digest[offset + 2],
        digest[offset + 3],
    ];

    Ok(u32::from_be_bytes(word) & 0x7fff_ffff)
}

// Last step of RFC 4226 section 5.3: mod 10^Digit, then zero-pad the
// decimal representation out to Digit characters.
fn format_code(value: u32) -> String {
    format!("{:0>6}", value % u32::pow(10, DIGITS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ops::Add;
    use std::time::Duration;

    // RFC 6238 Appendix B key: the ASCII bytes of "12345678901234567890".
    const KEY: &[u8] = b"12345678901234567890";

    fn at(secs: u64) -> SystemTime {
        UNIX_EPOCH.add(Duration::new(secs, 0))
    }

    #[test]
    fn matches_rfc_6238_appendix_b_vectors() {
        // Appendix B lists 8-digit codes; these are the low-order 6
        // digits of the same truncated values.
        let vectors = [
            (59, "287082"),
            (1111111109, "081804"),
            (1111111111, "050471"),
            (1234567890, "005924"),
            (2000000000, "279037"),
            (20000000000, "353130"),
        ];

        for (secs, expected) in vectors {
            assert_eq!(generate_code(KEY, at(secs)).unwrap(), expected);
        }
    }

    #[test]
    fn matches_rfc_4226_hotp_vectors() {
        // RFC 4226 Appendix D, counters 0 through 9. Driving the clock
        // in 30-second steps walks the same counter sequence.
        let codes = [
            "755224", "287082", "359152", "969429", "338314", "254676", "287922", "162583",
            "399871", "520489",
        ];

        for (counter, expected) in codes.iter().enumerate() {
            let code = generate_code(KEY, at(counter as u64 * TIME_STEP)).unwrap();
            assert_eq!(&code, expected, "counter {}", counter);
        }
    }

    #[test]
    fn is_deterministic_for_a_fixed_key_and_time() {
        let first = generate_code(KEY, at(59)).unwrap();
        let second = generate_code(KEY, at(59)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn always_produces_six_ascii_digits() {
        for secs in (0u64..3000).step_by(17) {
            let code = generate_code(KEY, at(secs)).unwrap();
            assert_eq!(code.len(), 6);
            assert!(code.bytes().all(|b| b.is_ascii_digit()), "{}", code);
            assert!(code.parse::<u32>().unwrap() < 1_000_000);
        }
    }

    #[test]
    fn same_window_yields_the_same_code() {
        let code = generate_code(KEY, at(60)).unwrap();
        assert_eq!(generate_code(KEY, at(61)).unwrap(), code);
        assert_eq!(generate_code(KEY, at(89)).unwrap(), code);
    }

    #[test]
    fn counter_advances_once_per_window() {
        assert_eq!(compute_counter(at(0)).unwrap(), 0);
        assert_eq!(compute_counter(at(29)).unwrap(), 0);
        assert_eq!(compute_counter(at(30)).unwrap(), 1);
        assert_eq!(compute_counter(at(59)).unwrap(), 1);
        assert_eq!(compute_counter(at(60)).unwrap(), 2);
    }

    #[test]
    fn truncates_sub_second_fractions() {
        let now = UNIX_EPOCH.add(Duration::new(59, 999_999_999));
        assert_eq!(compute_counter(now).unwrap(), 1);
    }

    #[test]
    fn rejects_timestamps_before_the_epoch() {
        let before = UNIX_EPOCH - Duration::new(1, 0);
        assert_eq!(
            generate_code(KEY, before).unwrap_err(),
            TotpError::InvalidTimestamp
        );
    }

    #[test]
    fn rejects_an_empty_key() {
        assert_eq!(
            generate_code(&[], at(59)).unwrap_err(),
            TotpError::InvalidKey
        );
    }

    #[test]
    fn truncation_matches_the_rfc_4226_worked_example() {
        // Digest from RFC 4226 section 5.4; offset nibble is 0xa and
        // the HOTP value is 872921.
        let digest: [u8; 20] = [
            0x1f, 0x86, 0x98, 0x69, 0x0e, 0x02, 0xca, 0x16, 0x61, 0x85, 0x50, 0xef, 0x7f, 0x19,
            0xda, 0x8e, 0x94, 0x5b, 0x55, 0x5a,
        ];
        let value = truncate(&digest).unwrap();
        assert_eq!(value, 0x50ef7f19);
        assert_eq!(format_code(value), "872921");
    }

    #[test]
    fn truncation_offset_stays_in_bounds() {
        // Exercise every possible offset nibble, including 15, the
        // highest one, which reads indices 15 through 18.
        for nibble in 0u8..16 {
            let mut digest = [0xffu8; 20];
            digest[19] = 0xf0 | nibble;
            let value = truncate(&digest).unwrap();
            assert!(value <= 0x7fff_ffff);
        }
    }

    #[test]
    fn truncation_clears_the_sign_bit() {
        let mut digest = [0xffu8; 20];
        digest[19] = 0xf0; // offset 0, all-ones word
        assert_eq!(truncate(&digest).unwrap(), 0x7fff_ffff);
    }

    #[test]
    fn rejects_a_short_digest() {
        let digest = [0u8; 19];
        assert_eq!(
            truncate(&digest).unwrap_err(),
            TotpError::DigestTooShort(19)
        );
    }

    #[test]
    fn pads_short_codes_with_leading_zeros() {
        assert_eq!(format_code(7), "000007");
        assert_eq!(format_code(1_000_007), "000007");
        assert_eq!(format_code(999_999), "999999");
    }
}
