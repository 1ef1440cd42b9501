use thiserror::Error;

/// Engine-level error type.
///
/// The engine never fails on missing optional data: every optional field
/// has a documented fallback (empty token bag, zero similarity, baseline
/// score, unit recency multiplier). The only failure mode is a caller
/// handing in a record that violates the input contract.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
