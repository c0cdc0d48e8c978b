/// Error handling for the belief-score engine
///
/// Failure policy: upstream problems never surface to the caller. A
/// non-success HTTP status or network error degrades to an empty result
/// set, an unparseable payload item is skipped, and a non-numeric field
/// becomes 0. The engine always returns a structurally complete
/// `BeliefScoreResult` for any token address it is given.
///
/// The one exception is missing caller input: scoring without a token
/// address is a caller error and is reported as such.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// No token contract address was provided
    MissingAddress,
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::MissingAddress => {
                write!(f, "Contract address is required")
            }
        }
    }
}

impl std::error::Error for EngineError {}
