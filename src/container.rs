use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::mem;
use core::ops::{Bound, Deref, DerefMut, Range, RangeBounds};
use core::slice;

use crate::cursor::{Cursor, CursorMut, Direction, Reverse};
use crate::error::GrowVecError;
use crate::raw_buffer::{capacity_overflow, RawBuffer};

/// Capacity of the first allocation made by a growing operation.
const INITIAL_CAPACITY: usize = 1;

/// Capacity halves while `len <= capacity >> SHRINK_SHIFT`.
const SHRINK_SHIFT: u32 = 2;

/// A growable, contiguous vector that owns one raw buffer.
///
/// Slots `[0, len)` hold live elements and slots `[len, capacity)` are raw
/// memory. Appends double the capacity when it runs out (`0` grows to `1`),
/// and every removal halves it while `len <= capacity >> 2`, so a bulk
/// removal can halve several times and popping to empty always ends at a
/// capacity of zero.
///
/// Any reallocation moves every element. Cursors and references borrow the
/// vector, so the borrow checker retires them before a mutating call runs.
pub struct GrowVec<T> {
    buf: RawBuffer<T>,
    len: usize,
}

// SAFETY: `GrowVec` owns its elements exactly like `Vec` does.
unsafe impl<T: Send> Send for GrowVec<T> {}
// SAFETY: shared access only hands out `&T`.
unsafe impl<T: Sync> Sync for GrowVec<T> {}

impl<T> GrowVec<T> {
    /// Creates an empty vector. Nothing is allocated until the first append.
    ///
    /// ```
    /// use growvec::GrowVec;
    ///
    /// let v = GrowVec::<i32>::new();
    /// assert_eq!(v.len(), 0);
    /// assert_eq!(v.capacity(), 0);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: RawBuffer::new(),
            len: 0,
        }
    }

    /// Creates an empty vector with exactly `capacity` raw slots.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: RawBuffer::with_capacity(capacity),
            len: 0,
        }
    }

    /// Clones the elements between two cursors of another vector, in the
    /// cursors' direction of travel.
    ///
    /// ```
    /// use growvec::{growvec, GrowVec};
    ///
    /// let source = growvec![1, 2, 3, 4];
    /// let middle = GrowVec::from_cursors(source.begin() + 1, source.end() - 1);
    /// assert_eq!(middle, [2, 3]);
    ///
    /// let reversed = GrowVec::from_cursors(source.rbegin(), source.rend());
    /// assert_eq!(reversed, [4, 3, 2, 1]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics under the same conditions as [`Cursor::until`].
    #[must_use]
    pub fn from_cursors<'a, D: Direction>(first: Cursor<'a, T, D>, last: Cursor<'a, T, D>) -> Self
    where
        T: Clone + 'a,
    {
        let mut vec = Self::new();
        vec.insert_iter(0, first.until(last).cloned());
        vec
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots, live or raw.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Reallocates to exactly `new_capacity` slots if that is more than the
    /// current capacity. Never shrinks.
    ///
    /// Unlike `Vec::reserve`, the argument is the total capacity wanted, not
    /// an additional amount.
    ///
    /// ```
    /// use growvec::GrowVec;
    ///
    /// let mut v = GrowVec::<u8>::new();
    /// v.reserve(10);
    /// assert_eq!(v.capacity(), 10);
    /// v.reserve(4);
    /// assert_eq!(v.capacity(), 10);
    /// ```
    pub fn reserve(&mut self, new_capacity: usize) {
        if new_capacity > self.capacity() {
            self.reallocate(new_capacity);
        }
    }

    /// Reallocates to exactly `len` slots.
    pub fn shrink_to_fit(&mut self) {
        if self.capacity() != self.len {
            self.reallocate(self.len);
        }
    }

    /// Moves the live prefix into a buffer of exactly `new_capacity` slots.
    ///
    /// Elements that do not fit are destroyed. Every element address changes.
    fn reallocate(&mut self, new_capacity: usize) {
        let kept = self.len.min(new_capacity);
        let live = mem::replace(&mut self.len, kept);
        // SAFETY: [kept, live) is live and already outside `len`, so a
        // panicking destructor leaks instead of double-dropping. [0, kept)
        // stays live and fits the new buffer.
        unsafe {
            self.buf.destroy_range(kept, live);
            self.buf.relocate(kept, new_capacity);
        }
    }

    fn grow(&mut self) {
        let next = match self.capacity() {
            0 => INITIAL_CAPACITY,
            capacity => match capacity.checked_mul(2) {
                Some(doubled) => doubled,
                None => capacity_overflow(),
            },
        };
        self.reallocate(next);
    }

    fn grow_to_fit(&mut self, required: usize) {
        while self.capacity() < required {
            self.grow();
        }
    }

    fn shrink_after_removal(&mut self) {
        while self.capacity() != 0 && self.len <= self.capacity() >> SHRINK_SHIFT {
            self.reallocate(self.capacity() >> 1);
        }
    }

    fn required_len(&self, additional: usize) -> usize {
        match self.len.checked_add(additional) {
            Some(required) => required,
            None => capacity_overflow(),
        }
    }

    /// Appends an element, doubling the capacity first if it is exhausted.
    ///
    /// ```
    /// use growvec::GrowVec;
    ///
    /// let mut v = GrowVec::new();
    /// for i in 0..5 {
    ///     v.push(i);
    /// }
    /// assert_eq!(v.len(), 5);
    /// assert_eq!(v.capacity(), 8);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        // SAFETY: `len < capacity` after growing and slot `len` is raw.
        unsafe { self.buf.construct_at(self.len, value) };
        self.len += 1;
    }

    /// Grows if needed, then builds the new last element in its slot.
    pub fn emplace_with<F>(&mut self, make: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        if self.len == self.capacity() {
            self.grow();
        }
        let index = self.len;
        let value = make();
        // SAFETY: `index < capacity` and slot `index` is raw.
        unsafe { self.buf.construct_at(index, value) };
        self.len += 1;
        // SAFETY: slot `index` was just constructed.
        unsafe { &mut *self.buf.slot(index) }
    }

    /// Appends a clone of the element at `index`.
    ///
    /// The clone is taken before any growth, so the source is never read
    /// from a freed buffer.
    ///
    /// ```
    /// use growvec::growvec;
    ///
    /// let mut v = growvec![1, 2];
    /// v.push_within(1);
    /// v.push_within(3);
    /// assert_eq!(v, [1, 2, 2, 2]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[track_caller]
    pub fn push_within(&mut self, index: usize)
    where
        T: Clone,
    {
        let snapshot = self.as_slice()[index].clone();
        self.push(snapshot);
    }

    /// Removes the last element, then applies the shrink policy.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` was the last live slot and is now outside `len`.
        let value = unsafe { self.buf.take_at(self.len) };
        self.shrink_after_removal();
        Some(value)
    }

    /// Inserts `value` at `index`, shifting the tail one slot towards the
    /// back. Returns a cursor at the inserted element.
    ///
    /// ```
    /// use growvec::growvec;
    ///
    /// let mut v = growvec![1, 3];
    /// let cursor = v.insert(1, 2);
    /// assert_eq!(*cursor, 2);
    /// assert_eq!(v, [1, 2, 3]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) -> CursorMut<'_, T> {
        self.check_insertion_index(index);
        if self.len == self.capacity() {
            self.grow();
        }
        let tail = self.len - index;
        // SAFETY: the tail fits one slot further back because `len < capacity`.
        // The move leaves slot `index` raw, so the value is constructed there.
        unsafe {
            self.buf.move_within(index, index + 1, tail);
            self.buf.construct_at(index, value);
        }
        self.len += 1;
        self.cursor_mut_at(index)
    }

    /// Inserts every element of `values` at `index`, keeping their order.
    /// Returns a cursor at the first inserted element.
    ///
    /// Capacity doubles as many times as needed to fit `len + values.len()`.
    /// If the iterator yields fewer items than it reported, the gap is
    /// closed; extra items are left unconsumed.
    ///
    /// ```
    /// use growvec::growvec;
    ///
    /// let mut v = growvec![1, 2, 3];
    /// let first = v.insert_iter(1, [10, 20]).slot();
    /// assert_eq!(first, 1);
    /// assert_eq!(v, [1, 10, 20, 2, 3]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    #[track_caller]
    pub fn insert_iter<I>(&mut self, index: usize, values: I) -> CursorMut<'_, T>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        self.check_insertion_index(index);
        let mut values = values.into_iter();
        let count = values.len();
        self.grow_to_fit(self.required_len(count));

        let tail = self.len - index;
        // The tail is parked behind the gap and `len` drops to `index`, so a
        // panicking source leaks the tail rather than dropping it twice.
        self.len = index;
        // SAFETY: `index + count + tail <= capacity` after growing.
        unsafe { self.buf.move_within(index, index + count, tail) };

        let mut filled = 0;
        while filled < count {
            let Some(value) = values.next() else {
                break;
            };
            // SAFETY: slots in the gap are raw since the tail moved out.
            unsafe { self.buf.construct_at(index + filled, value) };
            filled += 1;
            self.len += 1;
        }

        if filled < count {
            // SAFETY: the parked tail moves down onto raw slots.
            unsafe { self.buf.move_within(index + count, index + filled, tail) };
        }
        self.len = index + filled + tail;
        self.cursor_mut_at(index)
    }

    /// Inserts clones of `values` at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    #[track_caller]
    pub fn insert_from_slice(&mut self, index: usize, values: &[T]) -> CursorMut<'_, T>
    where
        T: Clone,
    {
        self.insert_iter(index, values.iter().cloned())
    }

    /// Appends clones of `values`.
    pub fn extend_from_slice(&mut self, values: &[T])
    where
        T: Clone,
    {
        self.insert_iter(self.len, values.iter().cloned());
    }

    /// Moves the element at `index` out and closes the gap, without
    /// applying the shrink policy.
    fn detach(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "removal index (is {index}) should be < len (is {})",
            self.len
        );
        // SAFETY: `index < len`, so the slot is live. After the read it is
        // raw and the live tail moves down over it.
        unsafe {
            let value = self.buf.take_at(index);
            self.buf.move_within(index + 1, index, self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Removes and returns the element at `index`, shifting the tail one
    /// slot towards the front, then applies the shrink policy.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        let value = self.detach(index);
        self.shrink_after_removal();
        value
    }

    /// Destroys the element at `index` and returns a cursor at the element
    /// that followed it, which is the end cursor if it was the last one.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`.
    #[track_caller]
    pub fn erase(&mut self, index: usize) -> CursorMut<'_, T> {
        drop(self.detach(index));
        self.shrink_after_removal();
        self.cursor_mut_at(index)
    }

    /// Destroys the elements in `range` and returns a cursor at the first
    /// element after it, which is the end cursor if the range reached it.
    ///
    /// ```
    /// use growvec::growvec;
    ///
    /// let mut v = growvec![1, 2, 3, 4, 5];
    /// let next = v.erase_range(1..4).slot();
    /// assert_eq!(v, [1, 5]);
    /// assert_eq!(next, 1);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if the range is decreasing or ends past `len`.
    #[track_caller]
    pub fn erase_range<R>(&mut self, range: R) -> CursorMut<'_, T>
    where
        R: RangeBounds<usize>,
    {
        let Range { start, end } = self.live_range(range);
        let tail = self.len - end;
        self.len = start;
        // SAFETY: [start, end) is live and outside `len` while it is
        // destroyed; the live tail then moves down onto those raw slots.
        unsafe {
            self.buf.destroy_range(start, end);
            self.buf.move_within(end, start, tail);
        }
        self.len = start + tail;
        self.shrink_after_removal();
        self.cursor_mut_at(start)
    }

    /// Resizes to `new_len`, filling new slots with values from `fill`.
    ///
    /// Shrinking follows [`erase_range`](Self::erase_range), including the
    /// shrink policy. Growing doubles the capacity until `new_len` fits.
    pub fn resize_with<F>(&mut self, new_len: usize, mut fill: F)
    where
        F: FnMut() -> T,
    {
        if new_len < self.len {
            self.erase_range(new_len..);
            return;
        }
        self.grow_to_fit(new_len);
        while self.len < new_len {
            let value = fill();
            // SAFETY: `len < new_len <= capacity` and slot `len` is raw.
            unsafe { self.buf.construct_at(self.len, value) };
            self.len += 1;
        }
    }

    /// Resizes to `new_len`, filling new slots with clones of `value`.
    ///
    /// ```
    /// use growvec::growvec;
    ///
    /// let mut v = growvec![1];
    /// v.resize(3, 7);
    /// assert_eq!(v, [1, 7, 7]);
    /// v.resize(1, 0);
    /// assert_eq!(v, [1]);
    /// ```
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        self.resize_with(new_len, || value.clone());
    }

    /// Resizes to `new_len`, filling new slots with `T::default()`.
    pub fn resize_default(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Destroys every element and releases the buffer.
    ///
    /// Unlike `resize(0, ..)`, the buffer goes away unconditionally.
    pub fn clear(&mut self) {
        let live = mem::replace(&mut self.len, 0);
        // SAFETY: [0, live) was live and is now outside `len`.
        unsafe { self.buf.destroy_range(0, live) };
        self.buf.release();
    }

    /// Exchanges buffers, lengths and capacities with `other`.
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Bounds-checked access.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::IndexOutOfBounds` if `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T, GrowVecError> {
        let length = self.len;
        self.as_slice()
            .get(index)
            .ok_or(GrowVecError::IndexOutOfBounds { index, length })
    }

    /// Bounds-checked mutable access.
    ///
    /// # Errors
    ///
    /// Returns `GrowVecError::IndexOutOfBounds` if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, GrowVecError> {
        let length = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(GrowVecError::IndexOutOfBounds { index, length })
    }

    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[must_use]
    #[track_caller]
    pub fn front(&self) -> &T {
        match self.as_slice().first() {
            Some(element) => element,
            None => empty_access("front"),
        }
    }

    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[track_caller]
    pub fn front_mut(&mut self) -> &mut T {
        match self.as_mut_slice().first_mut() {
            Some(element) => element,
            None => empty_access("front_mut"),
        }
    }

    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[must_use]
    #[track_caller]
    pub fn back(&self) -> &T {
        match self.as_slice().last() {
            Some(element) => element,
            None => empty_access("back"),
        }
    }

    /// # Panics
    ///
    /// Panics if the vector is empty.
    #[track_caller]
    pub fn back_mut(&mut self) -> &mut T {
        match self.as_mut_slice().last_mut() {
            Some(element) => element,
            None => empty_access("back_mut"),
        }
    }

    /// # Errors
    ///
    /// Returns `GrowVecError::EmptyVector` if the vector is empty.
    pub fn try_front(&self) -> Result<&T, GrowVecError> {
        self.as_slice().first().ok_or(GrowVecError::EmptyVector)
    }

    /// # Errors
    ///
    /// Returns `GrowVecError::EmptyVector` if the vector is empty.
    pub fn try_back(&self) -> Result<&T, GrowVecError> {
        self.as_slice().last().ok_or(GrowVecError::EmptyVector)
    }

    /// Pointer to the first slot. Dangling, never null, while the capacity
    /// is zero.
    #[must_use]
    pub const fn data(&self) -> *const T {
        self.buf.as_ptr()
    }

    #[must_use]
    pub fn data_mut(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: [0, len) is live and the pointer is aligned and non-null.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, and `&mut self` makes the borrow unique.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator over mutable references to the elements.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns an iterator over the elements from back to front.
    pub fn iter_rev(&self) -> core::iter::Rev<slice::Iter<'_, T>> {
        self.as_slice().iter().rev()
    }

    /// Cursor at the first element.
    #[must_use]
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), 0)
    }

    /// Cursor one past the last element.
    #[must_use]
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), self.signed_len())
    }

    /// Reverse cursor at the last element.
    #[must_use]
    pub fn rbegin(&self) -> Cursor<'_, T, Reverse> {
        Cursor::new(self.as_slice(), self.signed_len() - 1)
    }

    /// Reverse cursor one before the first element.
    #[must_use]
    pub fn rend(&self) -> Cursor<'_, T, Reverse> {
        Cursor::new(self.as_slice(), -1)
    }

    pub fn begin_mut(&mut self) -> CursorMut<'_, T> {
        self.cursor_mut_at(0)
    }

    pub fn end_mut(&mut self) -> CursorMut<'_, T> {
        let slot = self.signed_len();
        CursorMut::new(self.as_mut_slice(), slot)
    }

    pub fn rbegin_mut(&mut self) -> CursorMut<'_, T, Reverse> {
        let slot = self.signed_len() - 1;
        CursorMut::new(self.as_mut_slice(), slot)
    }

    pub fn rend_mut(&mut self) -> CursorMut<'_, T, Reverse> {
        CursorMut::new(self.as_mut_slice(), -1)
    }

    /// Hands the buffer and its live prefix over to the caller, leaving the
    /// vector empty with no allocation.
    pub(crate) fn take_buffer(&mut self) -> RawBuffer<T> {
        self.len = 0;
        mem::replace(&mut self.buf, RawBuffer::new())
    }

    fn cursor_mut_at(&mut self, index: usize) -> CursorMut<'_, T> {
        debug_assert!(index <= self.len);
        #[allow(clippy::cast_possible_wrap)] // index <= len <= isize::MAX
        let slot = index as isize;
        CursorMut::new(self.as_mut_slice(), slot)
    }

    /// Capacity never exceeds `isize::MAX`, so neither does `len`.
    #[allow(clippy::cast_possible_wrap)]
    fn signed_len(&self) -> isize {
        self.len as isize
    }

    #[track_caller]
    fn check_insertion_index(&self, index: usize) {
        assert!(
            index <= self.len,
            "insertion index (is {index}) should be <= len (is {})",
            self.len
        );
    }

    #[track_caller]
    fn live_range<R>(&self, range: R) -> Range<usize>
    where
        R: RangeBounds<usize>,
    {
        let start = match range.start_bound() {
            Bound::Included(&start) => start,
            Bound::Excluded(&start) => match start.checked_add(1) {
                Some(start) => start,
                None => panic!("range start overflows usize"),
            },
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&end) => match end.checked_add(1) {
                Some(end) => end,
                None => panic!("range end overflows usize"),
            },
            Bound::Excluded(&end) => end,
            Bound::Unbounded => self.len,
        };
        assert!(
            start <= end,
            "range start (is {start}) should be <= range end (is {end})"
        );
        assert!(
            end <= self.len,
            "range end (is {end}) should be <= len (is {})",
            self.len
        );
        start..end
    }
}

#[cold]
#[track_caller]
fn empty_access(accessor: &str) -> ! {
    panic!("{accessor}() called on an empty GrowVec");
}

impl<T> Drop for GrowVec<T> {
    fn drop(&mut self) {
        let live = mem::replace(&mut self.len, 0);
        // SAFETY: [0, live) was live; the buffer frees itself afterwards.
        unsafe { self.buf.destroy_range(0, live) };
    }
}

impl<T> Default for GrowVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Clones element by element; the clone's capacity follows the growth
/// policy rather than copying the source's slack.
impl<T: Clone> Clone for GrowVec<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::new();
        vec.insert_iter(0, self.iter().cloned());
        vec
    }
}

impl<T> Deref for GrowVec<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for GrowVec<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for GrowVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for GrowVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> From<[T; N]> for GrowVec<T> {
    fn from(values: [T; N]) -> Self {
        let mut vec = Self::new();
        vec.insert_iter(0, values);
        vec
    }
}

impl<T: Clone> From<&[T]> for GrowVec<T> {
    fn from(values: &[T]) -> Self {
        let mut vec = Self::new();
        vec.insert_iter(0, values.iter().cloned());
        vec
    }
}

impl<T> From<Vec<T>> for GrowVec<T> {
    fn from(values: Vec<T>) -> Self {
        let mut vec = Self::new();
        vec.insert_iter(0, values);
        vec
    }
}

impl<T> From<GrowVec<T>> for Vec<T> {
    fn from(values: GrowVec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T> FromIterator<T> for GrowVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<T> Extend<T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for GrowVec<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for value in iter {
            self.push(*value);
        }
    }
}

impl<T, U> PartialEq<GrowVec<U>> for GrowVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &GrowVec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U> PartialEq<[U]> for GrowVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U> PartialEq<&[U]> for GrowVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for GrowVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, const N: usize> PartialEq<&[U; N]> for GrowVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&[U; N]) -> bool {
        self.as_slice() == *other
    }
}

impl<T, U> PartialEq<Vec<U>> for GrowVec<T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowVec<T> {}

/// Lexicographic; a strict prefix orders before the longer vector.
impl<T: PartialOrd> PartialOrd for GrowVec<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for GrowVec<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for GrowVec<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
