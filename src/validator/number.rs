//! Validators for ordered numeric values
//!
//! Both bounds are inclusive. With floats, `NaN` fails every bound.

use super::{custom, Validator};

/// Greater than or equal to `bound`.
pub fn min<N>(message: impl Into<String>, bound: N) -> Validator<N>
where
    N: PartialOrd + Send + Sync + 'static,
{
    custom(move |value: &N| *value >= bound, message)
}

/// Less than or equal to `bound`.
pub fn max<N>(message: impl Into<String>, bound: N) -> Validator<N>
where
    N: PartialOrd + Send + Sync + 'static,
{
    custom(move |value: &N| *value <= bound, message)
}
