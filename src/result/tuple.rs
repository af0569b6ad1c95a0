//! Sequencing fixed-size tuples of results with per-slot payload types.

/// A tuple of `Result`s sharing one error type.
///
/// Implemented for arities 1 through 6. Wider fan-ins should use
/// [`sequence`](super::sequence) over a `Vec`.
pub trait SequenceResults<E> {
    /// The tuple of success payloads.
    type Output;

    /// Collect every payload, or return the first error from the left.
    fn sequence(self) -> Result<Self::Output, E>;
}

macro_rules! impl_sequence_results {
    ($($T:ident),+) => {
        impl<E, $($T),+> SequenceResults<E> for ($(Result<$T, E>,)+) {
            type Output = ($($T,)+);

            #[allow(non_snake_case)]
            fn sequence(self) -> Result<Self::Output, E> {
                let ($($T,)+) = self;
                Ok(($($T?,)+))
            }
        }
    };
}

impl_sequence_results!(A);
impl_sequence_results!(A, B);
impl_sequence_results!(A, B, C);
impl_sequence_results!(A, B, C, D);
impl_sequence_results!(A, B, C, D, F);
impl_sequence_results!(A, B, C, D, F, G);
