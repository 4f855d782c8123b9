/// What an observer can ask Brent's method to do.
///
/// Interpolation needs a residual at every point, so unlike bisection there
/// is no way to continue past a failed evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Halt and report the best evaluation so far.
    StopEarly,
}
