// Human-readable and JSON renderings of an `Analysis`.

use std::fmt::Write;

use crate::engine::Analysis;
use crate::transform::Run;

/// Space-separated delta values.
pub fn format_deltas(deltas: &[i64]) -> String {
    let mut out = String::new();
    for (i, d) in deltas.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{d}");
    }
    out
}

/// Space-separated `(value,count)` pairs.
pub fn format_runs(runs: &[Run]) -> String {
    let mut out = String::new();
    for (i, run) in runs.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        let _ = write!(out, "{run}");
    }
    out
}

/// The console report: deltas, runs, then the size triple.
pub fn render_text(analysis: &Analysis) -> String {
    let metrics = analysis.metrics();
    let mut out = String::new();
    let _ = writeln!(out, "DELTA ENCODING RESULTS");
    let _ = writeln!(out, "{}", format_deltas(analysis.deltas()));
    let _ = writeln!(out);
    let _ = writeln!(out, "RUN-LENGTH ENCODING RESULTS");
    let _ = writeln!(out, "{}", format_runs(analysis.runs()));
    let _ = writeln!(out);
    let _ = writeln!(out, "Original Size: {}", metrics.original_size);
    let _ = writeln!(out, "Compressed Size: {}", metrics.compressed_size);
    let _ = writeln!(out, "COMPRESSION RATIO: {:.3}", metrics.ratio());
    out
}

/// Machine-readable report.
#[cfg(feature = "json")]
pub fn to_json(analysis: &Analysis) -> serde_json::Value {
    let metrics = analysis.metrics();
    let runs: Vec<serde_json::Value> = analysis
        .runs()
        .iter()
        .map(|r| serde_json::json!({ "value": r.value, "count": r.length }))
        .collect();
    serde_json::json!({
        "deltas": analysis.deltas(),
        "runs": runs,
        "original_size": metrics.original_size,
        "compressed_size": metrics.compressed_size,
        "ratio": metrics.ratio(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::analyze_samples;

    #[test]
    fn deltas_are_space_separated() {
        assert_eq!(format_deltas(&[10, 0, 0, 10, 0, -15]), "10 0 0 10 0 -15");
        assert_eq!(format_deltas(&[]), "");
    }

    #[test]
    fn runs_are_pairs() {
        let runs = [Run::new(4, 1), Run::new(0, 3)];
        assert_eq!(format_runs(&runs), "(4,1) (0,3)");
    }

    #[test]
    fn text_report_layout() {
        let analysis = analyze_samples(vec![10, 10, 10, 20, 20, 5]);
        let text = render_text(&analysis);
        assert!(text.contains("DELTA ENCODING RESULTS\n10 0 0 10 0 -15\n"));
        assert!(text.contains("RUN-LENGTH ENCODING RESULTS\n(10,1) (0,2) (10,1) (0,1) (-15,1)\n"));
        assert!(text.contains("Original Size: 6\n"));
        assert!(text.contains("Compressed Size: 10\n"));
        assert!(text.contains("COMPRESSION RATIO: 0.600\n"));
    }

    #[test]
    fn empty_report() {
        let text = render_text(&analyze_samples(Vec::new()));
        assert!(text.contains("Compressed Size: 0\n"));
        assert!(text.contains("COMPRESSION RATIO: 0.000\n"));
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_report_fields() {
        let json = to_json(&analyze_samples(vec![4, 4, 4, 4]));
        assert_eq!(json["deltas"], serde_json::json!([4, 0, 0, 0]));
        assert_eq!(json["runs"][1]["value"], 0);
        assert_eq!(json["runs"][1]["count"], 3);
        assert_eq!(json["compressed_size"], 4);
        assert_eq!(json["ratio"], 1.0);
    }
}
