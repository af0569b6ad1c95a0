//! Validators for `Vec` values
//!
//! Element validators see clones of the elements; on success the original
//! vector is returned untouched.

use super::{keep_first, Validated, Validator};

fn check_length(message: &str, expected: usize, actual: usize) -> Validated<()> {
    if actual == expected {
        Ok(())
    } else {
        Err(vec![message.to_string()])
    }
}

/// Exactly `amount` elements.
pub fn length<T: 'static>(message: impl Into<String>, amount: usize) -> Validator<Vec<T>> {
    let message = message.into();
    Validator::new(move |items: Vec<T>| check_length(&message, amount, items.len()).map(|()| items))
}

/// Every element passes `validator`.
///
/// All elements are checked and their messages accumulate in element order.
///
/// # Examples
///
/// ```
/// use tidemark::validator::{array, string};
///
/// let short = array::every(string::max("too long", 4));
/// let words = vec!["abc".to_string(), "defdef".to_string(), "ghi".to_string()];
/// assert_eq!(short.validate(words), Err(vec!["too long".to_string()]));
/// ```
pub fn every<T>(validator: Validator<T>) -> Validator<Vec<T>>
where
    T: Clone + 'static,
{
    Validator::new(move |items: Vec<T>| {
        items
            .iter()
            .cloned()
            .map(|item| validator.validate(item))
            .fold(Ok(()), keep_first)
            .map(|()| items)
    })
}

/// Check elements positionally: element `i` against `validators[i]`.
///
/// The element count must equal `validators.len()`, otherwise `message` is
/// the first reported error. Elements that do have a validator are still
/// checked and their messages follow.
pub fn each<T>(message: impl Into<String>, validators: Vec<Validator<T>>) -> Validator<Vec<T>>
where
    T: Clone + 'static,
{
    let message = message.into();
    Validator::new(move |items: Vec<T>| {
        let seed = check_length(&message, validators.len(), items.len());
        items
            .iter()
            .cloned()
            .zip(&validators)
            .map(|(item, validator)| validator.validate(item))
            .fold(seed, keep_first)
            .map(|()| items)
    })
}
