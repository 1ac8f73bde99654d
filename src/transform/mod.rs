// Forward transforms and their inverses.
//
// The pipeline runs leaf-first:
//
// - `projection` — Map text bytes / code points / log values to `i64` samples
// - `delta`      — Successive differences, first sample kept verbatim
// - `rle`        — Collapse runs of equal values into `Run { value, length }`
//
// Every function here is pure and total: empty input yields empty output.

pub mod delta;
pub mod projection;
pub mod rle;

pub use projection::Projection;
pub use rle::Run;
