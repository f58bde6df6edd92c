/// Three-way result of one fetch attempt against the catalogue.
///
/// Exactly one variant per attempt; a new attempt replaces the previous
/// outcome wholesale, never merges into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The attempt succeeded and every record mapped.
    Success(T),
    /// The attempt was made and failed. `code` is the HTTP status, or -1
    /// when no response was received.
    Error { code: i32, message: Option<String> },
    /// The connectivity check failed; no attempt was made.
    NetworkUnavailable,
}
