//! Accumulating failure channel.
//!
//! A failed validation carries a [`NonEmpty`] list of errors in the order
//! they were found. Independent results are merged with [`combine`] or a
//! [`Violations`] collector; both concatenate in encounter order.

use std::{fmt, iter, slice, vec};

use crate::error::SchemaError;

/// Outcome of checking one statement against a schema snapshot.
pub type Validated = Result<(), NonEmpty<SchemaError>>;

/// An ordered sequence holding at least one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NonEmpty<T> {
    head: T,
    tail: Vec<T>,
}

impl<T> NonEmpty<T> {
    pub fn new(head: T) -> Self {
        Self {
            head,
            tail: Vec::new(),
        }
    }

    /// Returns `None` for an empty vector.
    pub fn from_vec(values: Vec<T>) -> Option<Self> {
        let mut values = values.into_iter();
        let head = values.next()?;
        Some(Self {
            head,
            tail: values.collect(),
        })
    }

    pub fn push(&mut self, value: T) {
        self.tail.push(value);
    }

    /// Move every element of `other` to the end of `self`.
    pub fn append(&mut self, other: NonEmpty<T>) {
        self.tail.push(other.head);
        self.tail.extend(other.tail);
    }

    pub fn first(&self) -> &T {
        &self.head
    }

    pub fn len(&self) -> usize {
        1 + self.tail.len()
    }

    pub fn iter(&self) -> iter::Chain<iter::Once<&T>, slice::Iter<'_, T>> {
        iter::once(&self.head).chain(self.tail.iter())
    }

    pub fn into_vec(self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        out.push(self.head);
        out.extend(self.tail);
        out
    }
}

impl<T> From<T> for NonEmpty<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> IntoIterator for NonEmpty<T> {
    type Item = T;
    type IntoIter = iter::Chain<iter::Once<T>, vec::IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        iter::once(self.head).chain(self.tail)
    }
}

impl<'a, T> IntoIterator for &'a NonEmpty<T> {
    type Item = &'a T;
    type IntoIter = iter::Chain<iter::Once<&'a T>, slice::Iter<'a, T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for NonEmpty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Merge two results, keeping every error of `first` before those of `second`.
pub fn combine(first: Validated, second: Validated) -> Validated {
    match (first, second) {
        (Ok(()), Ok(())) => Ok(()),
        (Err(errors), Ok(())) | (Ok(()), Err(errors)) => Err(errors),
        (Err(mut errors), Err(more)) => {
            errors.append(more);
            Err(errors)
        }
    }
}

/// Collects violations while a check walks a statement.
#[derive(Debug, Default)]
pub struct Violations {
    errors: Vec<SchemaError>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: impl Into<SchemaError>) {
        self.errors.push(error.into());
    }

    /// Record a [`SchemaValidatorError`](crate::SchemaValidatorError) with `message`.
    pub fn report(&mut self, message: impl Into<String>) {
        self.errors.push(SchemaError::validator(message));
    }

    /// Absorb the errors of another check's result.
    pub fn merge(&mut self, result: Validated) {
        if let Err(errors) = result {
            self.errors.extend(errors);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn finish(self) -> Validated {
        match NonEmpty::from_vec(self.errors) {
            Some(errors) => Err(errors),
            None => Ok(()),
        }
    }
}
