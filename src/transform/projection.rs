// Numeric projection.
//
// Turns the raw input of either mode into the `i64` sample domain the delta
// stage works on. Text is projected byte-wise by default (0..=255); the
// code-point projection is available for UTF-8 text where one sample per
// character is wanted instead of one per byte.

/// How text input is mapped to samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    /// One sample per byte, valued 0..=255.
    #[default]
    Bytes,
    /// One sample per Unicode scalar value.
    CodePoints,
}

impl Projection {
    pub fn name(self) -> &'static str {
        match self {
            Self::Bytes => "bytes",
            Self::CodePoints => "code-points",
        }
    }
}

/// Project every byte to its numeric value.
pub fn project_bytes(data: &[u8]) -> Vec<i64> {
    data.iter().map(|&b| i64::from(b)).collect()
}

/// Project every character to its code point.
pub fn project_chars(text: &str) -> Vec<i64> {
    text.chars().map(|c| i64::from(u32::from(c))).collect()
}

/// Log values are already numeric.
#[inline]
pub fn project_log(values: Vec<i64>) -> Vec<i64> {
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_map_to_their_values() {
        assert_eq!(
            project_bytes(b"aaabbbccd"),
            vec![97, 97, 97, 98, 98, 98, 99, 99, 100]
        );
    }

    #[test]
    fn high_bytes_stay_non_negative() {
        assert_eq!(project_bytes(&[0x00, 0x7F, 0x80, 0xFF]), vec![0, 127, 128, 255]);
    }

    #[test]
    fn newlines_are_projected_like_any_byte() {
        assert_eq!(project_bytes(b"a\nb\r\n"), vec![97, 10, 98, 13, 10]);
    }

    #[test]
    fn chars_use_code_points() {
        // "é" is two bytes but one code point.
        assert_eq!(project_chars("aé€"), vec![97, 0xE9, 0x20AC]);
        assert_eq!(project_bytes("aé".as_bytes()).len(), 3);
    }

    #[test]
    fn empty_inputs() {
        assert!(project_bytes(b"").is_empty());
        assert!(project_chars("").is_empty());
        assert!(project_log(Vec::new()).is_empty());
    }

    #[test]
    fn log_projection_is_identity() {
        let values = vec![10, -3, i64::MAX, i64::MIN];
        assert_eq!(project_log(values.clone()), values);
    }
}
