// Delta transform.
//
// out[0] = in[0], out[i] = in[i] - in[i - 1]. Arithmetic wraps on overflow
// in both directions, so `decode(encode(s)) == s` for every i64 sequence,
// including ones whose adjacent differences do not fit in an i64.

/// Replace every sample after the first with its difference from the
/// previous sample.
pub fn encode(samples: &[i64]) -> Vec<i64> {
    let Some(&first) = samples.first() else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(samples.len());
    out.push(first);
    out.extend(samples.windows(2).map(|w| w[1].wrapping_sub(w[0])));
    out
}

/// Prefix-sum inverse of [`encode`].
pub fn decode(deltas: &[i64]) -> Vec<i64> {
    let mut acc = 0i64;
    deltas
        .iter()
        .map(|&d| {
            acc = acc.wrapping_add(d);
            acc
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_value_kept_verbatim() {
        assert_eq!(encode(&[42]), vec![42]);
        assert_eq!(encode(&[-7, -7]), vec![-7, 0]);
    }

    #[test]
    fn encode_known_vectors() {
        assert_eq!(
            encode(&[97, 97, 97, 98, 98, 98, 99, 99, 100]),
            vec![97, 0, 0, 1, 0, 0, 1, 0, 1]
        );
        assert_eq!(encode(&[10, 10, 10, 20, 20, 5]), vec![10, 0, 0, 10, 0, -15]);
        assert_eq!(encode(&[100, 110, 115, 112, 122]), vec![100, 10, 5, -3, 10]);
    }

    #[test]
    fn decode_inverts_encode() {
        let original = vec![100, 110, 115, 112, 122];
        assert_eq!(decode(&encode(&original)), original);
    }

    #[test]
    fn empty_in_empty_out() {
        assert!(encode(&[]).is_empty());
        assert!(decode(&[]).is_empty());
    }

    #[test]
    fn extreme_neighbours_wrap_and_still_roundtrip() {
        let original = vec![i64::MIN, i64::MAX, i64::MIN, 0, i64::MAX];
        let deltas = encode(&original);
        assert_eq!(deltas[1], i64::MAX.wrapping_sub(i64::MIN));
        assert_eq!(decode(&deltas), original);
    }
}
