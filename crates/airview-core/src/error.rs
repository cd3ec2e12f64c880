// ── Chart error types ──
//
// The chart operations themselves never fail: a missing surface at init
// time degrades to an inert chart, and malformed update payloads default
// to empty sequences. Typed errors exist only at the parse edges where
// external text enters the model.

use thiserror::Error;

/// Errors raised when parsing externally supplied chart inputs.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("Unknown band label: {value:?} (expected \"2.4\" or \"5\")")]
    UnknownBand { value: String },

    #[error("Invalid color literal: {value:?} (expected \"#rrggbb\")")]
    InvalidColor { value: String },
}
