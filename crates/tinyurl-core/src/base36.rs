//! Lowercase base-36 rendering of unsigned integers.

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Longest possible rendering of a `u64` (`u64::MAX` is `3w5e11264sgsf`).
pub const MAX_ENCODED_LEN: usize = 13;

/// Encodes `value` as a lowercase base-36 string without leading zeros.
///
/// Zero encodes as `"0"`.
pub fn encode(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut buf = [0u8; MAX_ENCODED_LEN];
    let mut pos = MAX_ENCODED_LEN;
    while value > 0 {
        pos -= 1;
        buf[pos] = ALPHABET[(value % 36) as usize];
        value /= 36;
    }

    buf[pos..].iter().map(|&b| b as char).collect()
}

/// Returns `true` if `c` belongs to the base-36 alphabet.
pub fn is_digit(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero() {
        assert_eq!(encode(0), "0");
    }

    #[test]
    fn small_values() {
        assert_eq!(encode(9), "9");
        assert_eq!(encode(10), "a");
        assert_eq!(encode(35), "z");
        assert_eq!(encode(36), "10");
    }

    #[test]
    fn max_value_fills_width() {
        let encoded = encode(u64::MAX);
        assert_eq!(encoded, "3w5e11264sgsf");
        assert_eq!(encoded.len(), MAX_ENCODED_LEN);
    }

    #[test]
    fn matches_radix_parse() {
        for value in [1_u64, 1295, 46_656, 2_893_183_417_099_344_176] {
            let encoded = encode(value);
            assert_eq!(u64::from_str_radix(&encoded, 36).unwrap(), value);
        }
    }

    #[test]
    fn alphabet_membership() {
        assert!(is_digit('0'));
        assert!(is_digit('z'));
        assert!(!is_digit('A'));
        assert!(!is_digit('-'));
    }
}
