//! The consumer side of a streaming completion.

/// Boxed error type used across the sink boundary.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Consumer of streaming text increments.
///
/// The streaming operation calls [`accept`] once per non-empty text delta,
/// in wire order. Returning an error aborts the stream immediately: no
/// further increments are delivered and the operation fails with
/// `ChatError::Sink`.
///
/// Any `FnMut(&str) -> Result<(), E>` closure is a sink, as is
/// `Vec<String>` (which collects increments).
///
/// [`accept`]: DeltaSink::accept
pub trait DeltaSink {
    /// Accept one text increment.
    fn accept(&mut self, delta: &str) -> Result<(), BoxError>;
}

impl<F, E> DeltaSink for F
where
    F: FnMut(&str) -> Result<(), E>,
    E: Into<BoxError>,
{
    fn accept(&mut self, delta: &str) -> Result<(), BoxError> {
        self(delta).map_err(Into::into)
    }
}

/// Collects every increment. Handy for tests and buffered consumers.
impl DeltaSink for Vec<String> {
    fn accept(&mut self, delta: &str) -> Result<(), BoxError> {
        self.push(delta.to_string());
        Ok(())
    }
}
