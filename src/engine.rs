// Pipeline engine: ties projection, delta, RLE and size accounting together.
//
// Provides high-level APIs that orchestrate:
//   - Numeric projection of text or log input into i64 samples
//   - Delta transform of the samples
//   - Run-length encoding of the deltas
//   - Unit-cost size metrics and the compression ratio
//
// `Analysis::verify` runs the inverse transforms and checks that they
// reproduce the original samples.

use log::debug;
use thiserror::Error;

use crate::stats::SizeMetrics;
use crate::transform::{Run, delta, projection, rle};

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// One finite, fully materialized input for the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Raw text, projected byte-wise.
    Text(Vec<u8>),
    /// UTF-8 text, projected per code point.
    Utf8(String),
    /// Integers read from a numeric log.
    Log(Vec<i64>),
}

impl Input {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) | Self::Utf8(_) => "text",
            Self::Log(_) => "log",
        }
    }

    /// Project the input into the sample domain.
    pub fn into_samples(self) -> Vec<i64> {
        match self {
            Self::Text(bytes) => projection::project_bytes(&bytes),
            Self::Utf8(text) => projection::project_chars(&text),
            Self::Log(values) => projection::project_log(values),
        }
    }
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

/// Everything one pipeline invocation produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    samples: Vec<i64>,
    deltas: Vec<i64>,
    runs: Vec<Run>,
    metrics: SizeMetrics,
}

impl Analysis {
    /// Projected input samples.
    pub fn samples(&self) -> &[i64] {
        &self.samples
    }

    pub fn deltas(&self) -> &[i64] {
        &self.deltas
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn metrics(&self) -> SizeMetrics {
        self.metrics
    }

    pub fn ratio(&self) -> f64 {
        self.metrics.ratio()
    }

    /// Expand the runs and prefix-sum the deltas, checking every step
    /// against the forward outputs.
    pub fn verify(&self) -> Result<(), VerifyError> {
        if !rle::is_maximal(&self.runs) {
            return Err(VerifyError::NonMaximalRuns);
        }

        let expanded = rle::expand(&self.runs);
        compare(&expanded, &self.deltas, VerifyError::RunMismatch)?;

        let restored = delta::decode(&expanded);
        compare(&restored, &self.samples, VerifyError::DeltaMismatch)?;

        Ok(())
    }
}

fn compare(
    actual: &[i64],
    expected: &[i64],
    mismatch: fn(usize) -> VerifyError,
) -> Result<(), VerifyError> {
    if actual.len() != expected.len() {
        return Err(VerifyError::LengthMismatch {
            expected: expected.len(),
            actual: actual.len(),
        });
    }
    match actual.iter().zip(expected).position(|(a, e)| a != e) {
        Some(index) => Err(mismatch(index)),
        None => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// A round-trip check failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error("adjacent runs share a value or a run is empty")]
    NonMaximalRuns,
    #[error("run expansion differs from delta stream at index {0}")]
    RunMismatch(usize),
    #[error("prefix sum differs from input at index {0}")]
    DeltaMismatch(usize),
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

// ---------------------------------------------------------------------------
// High-level analyze
// ---------------------------------------------------------------------------

/// Run the full pipeline over `input`.
pub fn analyze(input: Input) -> Analysis {
    let kind = input.kind();
    let samples = input.into_samples();
    debug!("{kind} input projected to {} samples", samples.len());
    analyze_samples(samples)
}

/// Run delta + RLE + accounting over already-projected samples.
pub fn analyze_samples(samples: Vec<i64>) -> Analysis {
    let deltas = delta::encode(&samples);
    let runs = rle::encode(&deltas);
    let metrics = SizeMetrics::from_runs(samples.len(), &runs);

    debug!(
        "deltas: {}, runs: {}, original: {}, compressed: {}",
        deltas.len(),
        runs.len(),
        metrics.original_size,
        metrics.compressed_size
    );

    Analysis {
        samples,
        deltas,
        runs,
        metrics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_input_uses_byte_projection() {
        let a = analyze(Input::Text(b"aaabbbccd".to_vec()));
        assert_eq!(a.samples(), &[97, 97, 97, 98, 98, 98, 99, 99, 100]);
        assert_eq!(a.metrics(), SizeMetrics::new(9, 14));
        assert!(a.verify().is_ok());
    }

    #[test]
    fn utf8_input_counts_characters() {
        let a = analyze(Input::Utf8("ééé".to_string()));
        assert_eq!(a.samples(), &[0xE9, 0xE9, 0xE9]);
        assert_eq!(a.runs(), &[Run::new(0xE9, 1), Run::new(0, 2)]);
        assert_eq!(a.metrics().original_size, 3);
    }

    #[test]
    fn empty_input_is_degenerate_not_an_error() {
        let a = analyze(Input::Log(Vec::new()));
        assert!(a.deltas().is_empty());
        assert!(a.runs().is_empty());
        assert_eq!(a.metrics(), SizeMetrics::new(0, 0));
        assert_eq!(a.ratio(), 0.0);
        assert!(a.verify().is_ok());
    }

    #[test]
    fn verify_detects_tampered_runs() {
        let mut a = analyze_samples(vec![1, 2, 3, 3]);
        a.runs[0].length += 1;
        assert!(matches!(
            a.verify(),
            Err(VerifyError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn verify_detects_tampered_samples() {
        let mut a = analyze_samples(vec![1, 2, 3, 3]);
        a.samples[2] = 9;
        assert_eq!(a.verify(), Err(VerifyError::DeltaMismatch(2)));
    }

    #[test]
    fn verify_detects_split_runs() {
        let mut a = analyze_samples(vec![5, 5, 5]);
        a.runs = vec![Run::new(5, 1), Run::new(0, 1), Run::new(0, 1)];
        assert_eq!(a.verify(), Err(VerifyError::NonMaximalRuns));
    }

    #[test]
    fn input_kind_names() {
        assert_eq!(Input::Text(Vec::new()).kind(), "text");
        assert_eq!(Input::Utf8(String::new()).kind(), "text");
        assert_eq!(Input::Log(Vec::new()).kind(), "log");
    }
}
