/// A deterministic relation from a typed input to a typed output.
///
/// The same input must always give the same output: a solver reports the
/// residual it saw at the root, and callers re-evaluating there must get it
/// back.
pub trait Model {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// # Errors
    ///
    /// Returns [`Self::Error`] when the input is outside the relation's domain.
    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error>;
}

/// One model call: what went in and what came out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Snapshot<I, O> {
    pub input: I,
    pub output: O,
}

impl<I, O> Snapshot<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}
