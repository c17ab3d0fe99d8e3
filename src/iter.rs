use core::fmt;
use core::iter::FusedIterator;
use core::mem;
use core::ops::Range;
use core::slice;

use crate::container::GrowVec;
use crate::raw_buffer::RawBuffer;

/// Owning iterator over the elements of a `GrowVec`.
///
/// Takes over the vector's buffer. Elements not yielded are destroyed when
/// the iterator is dropped.
pub struct IntoIter<T> {
    buf: RawBuffer<T>,
    live: Range<usize>,
}

// SAFETY: `IntoIter` owns its remaining elements exactly like `Vec`'s does.
unsafe impl<T: Send> Send for IntoIter<T> {}
// SAFETY: shared access only hands out `&T` through `as_slice`.
unsafe impl<T: Sync> Sync for IntoIter<T> {}

impl<T> IntoIter<T> {
    /// Remaining elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: the slots in `live` have not been yielded yet.
        unsafe { slice::from_raw_parts(self.buf.slot(self.live.start), self.live.len()) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let index = self.live.next()?;
        // SAFETY: `index` just left the live range and is read exactly once.
        Some(unsafe { self.buf.take_at(index) })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.live.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        let index = self.live.next_back()?;
        // SAFETY: as in `next`.
        Some(unsafe { self.buf.take_at(index) })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let Range { start, end } = mem::replace(&mut self.live, 0..0);
        // SAFETY: slots in [start, end) were never yielded.
        unsafe { self.buf.destroy_range(start, end) };
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> IntoIterator for GrowVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let live = 0..self.len();
        IntoIter {
            buf: self.take_buffer(),
            live,
        }
    }
}

impl<'a, T> IntoIterator for &'a GrowVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowVec<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
