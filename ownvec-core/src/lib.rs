//! Exclusive-ownership array and domain error taxonomy
//!
//! This crate provides [`OwningArray`], an append-only array whose elements
//! each live in their own heap allocation and are owned by the array alone,
//! and the [`Error`] / [`DomainError`] types used to report failures.
//!
//! # Example
//!
//! ```
//! use ownvec_core::{Error, OwningArray};
//!
//! let mut array = OwningArray::new();
//! array.emplace(10);
//! array.emplace(20);
//!
//! assert_eq!(array.get(1), Ok(&20));
//! assert_eq!(
//!     array.get(5),
//!     Err(Error::IndexOutOfRange { index: 5, size: 2 })
//! );
//!
//! array.clear();
//! assert!(array.is_empty());
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod owning_array;

pub use error::{DomainError, Error, Result};
pub use owning_array::{Iter, IterMut, OwningArray};
