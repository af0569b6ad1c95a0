//! Sequencing fixed-size tuples of remote data.

use super::RemoteData;

/// A tuple of `RemoteData` values sharing one error type.
///
/// Implemented for arities 1 through 6. The first slot (left to right) that is
/// not `Success` decides the outcome and keeps its own tag, so a `NotAsked`
/// slot is never reported as `Loading` or vice versa.
pub trait SequenceRemote<E> {
    /// The tuple of success payloads.
    type Output;

    /// Collect every payload, or return the first non-success state.
    fn sequence(self) -> RemoteData<Self::Output, E>;
}

macro_rules! impl_sequence_remote {
    ($($T:ident),+) => {
        impl<E, $($T),+> SequenceRemote<E> for ($(RemoteData<$T, E>,)+) {
            type Output = ($($T,)+);

            #[allow(non_snake_case)]
            fn sequence(self) -> RemoteData<Self::Output, E> {
                let ($($T,)+) = self;
                $(
                    let $T = match $T.into_success() {
                        Ok(value) => value,
                        Err(other) => return other,
                    };
                )+
                RemoteData::Success(($($T,)+))
            }
        }
    };
}

impl_sequence_remote!(A);
impl_sequence_remote!(A, B);
impl_sequence_remote!(A, B, C);
impl_sequence_remote!(A, B, C, D);
impl_sequence_remote!(A, B, C, D, F);
impl_sequence_remote!(A, B, C, D, F, G);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_do_not_collapse() {
        let with_not_asked = (
            RemoteData::<_, ()>::Success("a"),
            RemoteData::<u8, ()>::NotAsked,
            RemoteData::<_, ()>::Success(true),
        );
        assert_eq!(with_not_asked.sequence(), RemoteData::NotAsked);

        let with_loading = (
            RemoteData::<_, ()>::Success("a"),
            RemoteData::<u8, ()>::Loading,
            RemoteData::<_, ()>::Success(true),
        );
        assert_eq!(with_loading.sequence(), RemoteData::Loading);
    }

    #[test]
    fn test_leftmost_wins() {
        let pair = (
            RemoteData::<u8, &str>::Failure("first"),
            RemoteData::<u8, &str>::Loading,
        );
        assert_eq!(pair.sequence(), RemoteData::Failure("first"));
    }

    #[test]
    fn test_all_success() {
        let four = (
            RemoteData::<_, ()>::Success(1),
            RemoteData::<_, ()>::Success('b'),
            RemoteData::<_, ()>::Success("c"),
            RemoteData::<_, ()>::Success(4.0),
        );
        assert_eq!(four.sequence(), RemoteData::Success((1, 'b', "c", 4.0)));
    }
}
