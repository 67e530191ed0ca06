//! Append-only array of exclusively owned, heap-allocated elements

use core::mem;
use core::slice;

use crate::error::{Error, Result};

/// Array that owns every element it holds, each in its own heap allocation.
///
/// Elements are appended with [`emplace`](Self::emplace),
/// [`try_emplace`](Self::try_emplace) or [`adopt`](Self::adopt) and released
/// all at once by [`clear`](Self::clear) or by dropping the array. There is
/// no single-element removal. The type is not `Clone`; use a plain move or
/// [`take`](Self::take) to hand the contents to another owner.
#[derive(Debug)]
pub struct OwningArray<T> {
    slots: Vec<Box<T>>,
}

impl<T> OwningArray<T> {
    /// Create an empty array
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Create an empty array with room for `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Take ownership of an already allocated element.
    ///
    /// `None` stands for a null pointer and is rejected with
    /// [`Error::InvalidArgument`], leaving the array untouched.
    pub fn adopt(&mut self, element: Option<Box<T>>) -> Result<&mut T> {
        let element = element.ok_or_else(|| Error::invalid_argument("null pointer passed"))?;
        Ok(self.push_slot(element))
    }

    /// Allocate `value` on the heap and append it
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.push_slot(Box::new(value))
    }

    /// Construct an element with a fallible constructor and append it.
    ///
    /// A constructor error is returned unchanged and nothing is stored.
    pub fn try_emplace<E, F>(&mut self, construct: F) -> core::result::Result<&mut T, E>
    where
        F: FnOnce() -> core::result::Result<T, E>,
    {
        let value = construct()?;
        Ok(self.emplace(value))
    }

    /// Drop every element. Calling it on an empty array is a no-op.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Number of live elements
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no element is held
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of element slots reserved in the backing storage
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Borrow the element at `index`
    pub fn get(&self, index: usize) -> Result<&T> {
        let size = self.len();
        self.slots
            .get(index)
            .map(|slot| &**slot)
            .ok_or(Error::IndexOutOfRange { index, size })
    }

    /// Mutably borrow the element at `index`
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let size = self.len();
        self.slots
            .get_mut(index)
            .map(|slot| &mut **slot)
            .ok_or(Error::IndexOutOfRange { index, size })
    }

    /// Borrow the element at `index`, or `None` past the end
    pub fn try_get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).map(|slot| &**slot)
    }

    /// Mutably borrow the element at `index`, or `None` past the end
    pub fn try_get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).map(|slot| &mut **slot)
    }

    /// Move every element into a new array, leaving this one empty.
    ///
    /// The elements themselves are not reallocated; only ownership of their
    /// boxes changes hands. The source stays usable.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Iterate over borrowed elements in index order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.slots.iter(),
        }
    }

    /// Iterate over mutably borrowed elements in index order
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            inner: self.slots.iter_mut(),
        }
    }

    fn push_slot(&mut self, slot: Box<T>) -> &mut T {
        self.slots.push(slot);
        let last = self.slots.len() - 1;
        &mut self.slots[last]
    }
}

impl<T> Default for OwningArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Borrowing iterator returned by [`OwningArray::iter`]
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, Box<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|slot| &**slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Mutably borrowing iterator returned by [`OwningArray::iter_mut`]
#[derive(Debug)]
pub struct IterMut<'a, T> {
    inner: slice::IterMut<'a, Box<T>>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|slot| &mut **slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<'a, T> IntoIterator for &'a OwningArray<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut OwningArray<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
