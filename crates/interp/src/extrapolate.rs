use ninterp::interpolator::Extrapolate as Ninterp;

/// What a lookup outside the table returns.
///
/// Gas tables clamp by default: a query past either end gets that end's
/// value.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Extrapolate<T> {
    /// Extend the first or last segment.
    Enable,
    /// Return the given value.
    Fill(T),
    /// Return the value at the nearest end of the table.
    #[default]
    Clamp,
    /// Fail the lookup.
    Error,
}

impl<T> From<Extrapolate<T>> for Ninterp<T> {
    fn from(value: Extrapolate<T>) -> Self {
        match value {
            Extrapolate::Enable => Ninterp::Enable,
            Extrapolate::Fill(fill) => Ninterp::Fill(fill),
            Extrapolate::Clamp => Ninterp::Clamp,
            Extrapolate::Error => Ninterp::Error,
        }
    }
}
