//! In-band absence for values that can be "present but meaningless"
//!
//! `Option` already models a missing value. Some types additionally carry a
//! sentinel that should be treated as missing when lifting into a container:
//! floating point `NaN` is the canonical case. The [`Nullable`] trait lets
//! [`result::from_nullable`](crate::result::from_nullable) and
//! [`remote::from_nullable`](crate::remote::from_nullable) recognise both.
//!
//! # Examples
//!
//! ```
//! use tidemark::Nullable;
//!
//! assert!(0_i32.is_present());
//! assert!(!f64::NAN.is_present());
//! assert!("".is_present());
//! ```

/// A value that may carry an in-band "absent" marker.
///
/// The default implementation reports every value as present. Types with a
/// sentinel (floating point `NaN`) override [`is_present`](Nullable::is_present).
/// Falsy values such as `0`, `false` or `""` are always present.
///
/// Implement it with an empty body for your own payload types:
///
/// ```
/// use tidemark::Nullable;
///
/// struct UserId(u64);
/// impl Nullable for UserId {}
///
/// assert!(UserId(0).is_present());
/// ```
pub trait Nullable {
    /// Returns `false` when this value must be treated as missing.
    #[inline]
    fn is_present(&self) -> bool {
        true
    }
}

impl Nullable for f32 {
    #[inline]
    fn is_present(&self) -> bool {
        !self.is_nan()
    }
}

impl Nullable for f64 {
    #[inline]
    fn is_present(&self) -> bool {
        !self.is_nan()
    }
}

macro_rules! always_present {
    ($($t:ty),* $(,)?) => {
        $(impl Nullable for $t {})*
    };
}

always_present!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, String, ()
);

impl Nullable for &str {}

impl<T> Nullable for Vec<T> {}

impl<T: Nullable> Nullable for Box<T> {
    #[inline]
    fn is_present(&self) -> bool {
        (**self).is_present()
    }
}

#[cfg(feature = "json")]
impl Nullable for serde_json::Value {
    /// `null` and non-finite numbers count as absent.
    #[inline]
    fn is_present(&self) -> bool {
        match self {
            serde_json::Value::Null => false,
            serde_json::Value::Number(n) => n.as_f64().is_none_or(|f| !f.is_nan()),
            _ => true,
        }
    }
}
