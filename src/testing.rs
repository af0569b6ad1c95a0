//! Testing utilities for code built on Tidemark
//!
//! Assertion macros for [`Validated`](crate::Validated) and
//! [`RemoteData`](crate::RemoteData) values, and property-based testing
//! support behind the `proptest` feature.
//!
//! # Examples
//!
//! ```rust
//! use tidemark::validator::string;
//! use tidemark::{assert_failure, assert_success, assert_validation_errors};
//!
//! let short = string::max("too long", 3);
//! assert_success!(short.validate("abc".to_string()));
//! assert_failure!(short.validate("abcd".to_string()));
//! assert_validation_errors!(short.validate("abcd".to_string()), vec!["too long"]);
//! ```

/// Assert that a validated value is `Ok`.
///
/// Panics with the accumulated messages otherwise.
///
/// # Example
///
/// ```rust
/// use tidemark::assert_success;
///
/// assert_success!(Ok::<_, Vec<String>>(42));
/// ```
#[macro_export]
macro_rules! assert_success {
    ($validated:expr) => {
        match $validated {
            ::core::result::Result::Ok(_) => {}
            ::core::result::Result::Err(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validated value is `Err`.
///
/// # Example
///
/// ```rust
/// use tidemark::assert_failure;
///
/// assert_failure!(Err::<i32, _>(vec!["error".to_string()]));
/// ```
#[macro_export]
macro_rules! assert_failure {
    ($validated:expr) => {
        match $validated {
            ::core::result::Result::Err(_) => {}
            ::core::result::Result::Ok(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a validated value failed with exactly these messages, in order.
///
/// # Example
///
/// ```rust
/// use tidemark::assert_validation_errors;
///
/// let validated = Err::<i32, _>(vec!["error1".to_string(), "error2".to_string()]);
/// assert_validation_errors!(validated, vec!["error1", "error2"]);
/// ```
#[macro_export]
macro_rules! assert_validation_errors {
    ($validated:expr, $expected:expr) => {
        match $validated {
            ::core::result::Result::Err(errors) => {
                assert_eq!(errors, $expected);
            }
            ::core::result::Result::Ok(v) => {
                panic!(
                    "Expected Failure with errors {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

/// Assert that a [`RemoteData`](crate::RemoteData) is in the named state.
///
/// # Example
///
/// ```rust
/// use tidemark::{assert_remote, RemoteData};
///
/// assert_remote!(RemoteData::<i32, ()>::Loading, Loading);
/// assert_remote!(RemoteData::<i32, ()>::Success(1), Success);
/// ```
#[macro_export]
macro_rules! assert_remote {
    ($remote:expr, $state:ident) => {{
        let remote = &$remote;
        let actual = $crate::RemoteData::tag(remote);
        assert!(
            actual == stringify!($state),
            "Expected {}, got {}",
            stringify!($state),
            actual
        );
    }};
}

#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
use proptest::strategy::LazyJust;

#[cfg(feature = "proptest")]
use crate::RemoteData;

#[cfg(feature = "proptest")]
impl<T, E> Arbitrary for RemoteData<T, E>
where
    T: Arbitrary + 'static,
    E: Arbitrary + 'static,
{
    type Parameters = (T::Parameters, E::Parameters);
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        let (t_params, e_params) = args;
        prop_oneof![
            LazyJust::new(|| RemoteData::NotAsked),
            LazyJust::new(|| RemoteData::Loading),
            any_with::<E>(e_params).prop_map(RemoteData::Failure),
            any_with::<T>(t_params).prop_map(RemoteData::Success),
        ]
        .boxed()
    }
}
