/// Upstream HTTP clients
///
/// Each client owns its own rate limiter and stats tracker. Clients report
/// failures as `Result<_, String>`; degradation to empty results is the
/// caller's decision, not the client's.

pub mod client;
pub mod geckoterminal;
pub mod stats;
pub mod twitter;
