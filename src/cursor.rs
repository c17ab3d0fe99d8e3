//! Random-access cursors over the live region of a `GrowVec`.
//!
//! A cursor is a signed slot position plus a borrow of the live elements.
//! Forward cursors run from slot `0` to the end slot `len`; reverse cursors
//! run from slot `len - 1` down to the end slot `-1`, one before the front.
//! Both flavours share one position type and differ only in the sign of a step.
//!
//! Cursors do not bounds-check their arithmetic. Dereferencing or
//! subscripting a position outside `[0, len)` panics, and [`Cursor::get`]
//! is the non-panicking way to look.

use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ops::{Add, AddAssign, Deref, DerefMut, Index, IndexMut, Sub, SubAssign};

mod sealed {
    pub trait Sealed {}
}

/// Travel direction of a cursor.
pub trait Direction: sealed::Sealed {
    /// Slot offset applied by a single increment.
    const STEP: isize;
}

/// Cursors that move from the front towards the back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Forward;

/// Cursors that move from the back towards the front.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Reverse;

impl sealed::Sealed for Forward {}
impl sealed::Sealed for Reverse {}

impl Direction for Forward {
    const STEP: isize = 1;
}

impl Direction for Reverse {
    const STEP: isize = -1;
}

/// Signed slot index shared by every cursor flavour.
pub(crate) struct Position<D> {
    slot: isize,
    _direction: PhantomData<D>,
}

impl<D> Clone for Position<D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<D> Copy for Position<D> {}

impl<D: Direction> Position<D> {
    pub(crate) const fn new(slot: isize) -> Self {
        Self {
            slot,
            _direction: PhantomData,
        }
    }

    fn shifted(self, steps: isize) -> Self {
        Self::new(self.slot + steps * D::STEP)
    }

    fn steps_from(self, origin: Self) -> isize {
        (self.slot - origin.slot) * D::STEP
    }

    /// Position along the direction of travel, for ordering.
    fn rank(self) -> isize {
        self.slot * D::STEP
    }

    fn resolve(self, len: usize) -> Option<usize> {
        usize::try_from(self.slot).ok().filter(|&index| index < len)
    }
}

#[cold]
#[track_caller]
fn outside_live_region(slot: isize, len: usize) -> ! {
    panic!("cursor at slot {slot} is outside the live region of length {len}");
}

/// Read-only random-access cursor.
///
/// `Cursor` is `Copy`, so the post-increment idiom is just a copy followed
/// by [`inc`](Cursor::inc); [`post_inc`](Cursor::post_inc) does both.
pub struct Cursor<'a, T, D = Forward> {
    slots: &'a [T],
    pos: Position<D>,
}

impl<T, D> Clone for Cursor<'_, T, D> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, D> Copy for Cursor<'_, T, D> {}

impl<'a, T, D: Direction> Cursor<'a, T, D> {
    pub(crate) fn new(slots: &'a [T], slot: isize) -> Self {
        Self {
            slots,
            pos: Position::new(slot),
        }
    }

    /// Absolute slot index; `-1` for the reverse end.
    #[must_use]
    pub fn slot(&self) -> isize {
        self.pos.slot
    }

    /// Element under the cursor, or `None` outside the live region.
    #[must_use]
    pub fn get(&self) -> Option<&'a T> {
        self.at_offset(0)
    }

    /// Element `steps` positions away in the direction of travel.
    #[must_use]
    pub fn at_offset(&self, steps: isize) -> Option<&'a T> {
        let slots = self.slots;
        self.pos
            .shifted(steps)
            .resolve(slots.len())
            .map(|index| &slots[index])
    }

    pub fn inc(&mut self) -> &mut Self {
        self.pos = self.pos.shifted(1);
        self
    }

    pub fn dec(&mut self) -> &mut Self {
        self.pos = self.pos.shifted(-1);
        self
    }

    /// Advances the cursor and returns its previous position.
    pub fn post_inc(&mut self) -> Self {
        let previous = *self;
        self.inc();
        previous
    }

    /// Steps the cursor back and returns its previous position.
    pub fn post_dec(&mut self) -> Self {
        let previous = *self;
        self.dec();
        previous
    }

    /// Iterates the elements from this cursor up to, not including, `last`.
    ///
    /// # Panics
    ///
    /// Panics if `last` belongs to another buffer, lies before this cursor,
    /// or if the span covers a slot outside the live region.
    ///
    /// Buffers are told apart by address and length. Vectors with no live
    /// elements share the same dangling address, so their cursors pass the
    /// buffer check and yield an empty span.
    #[must_use]
    pub fn until(self, last: Self) -> Span<'a, T, D> {
        assert!(
            self.same_buffer(&last),
            "cursor span endpoints belong to different buffers"
        );
        let count = last.pos.steps_from(self.pos);
        assert!(count >= 0, "cursor span ends before it starts");

        if count > 0 {
            let len = self.slots.len();
            for edge in [self.pos, last.pos.shifted(-1)] {
                if edge.resolve(len).is_none() {
                    outside_live_region(edge.slot, len);
                }
            }
        }

        Span {
            front: self,
            remaining: count.unsigned_abs(),
        }
    }

    fn same_buffer(&self, other: &Self) -> bool {
        core::ptr::eq(self.slots.as_ptr(), other.slots.as_ptr())
            && self.slots.len() == other.slots.len()
    }
}

impl<T, D: Direction> Deref for Cursor<'_, T, D> {
    type Target = T;

    #[track_caller]
    fn deref(&self) -> &T {
        match self.get() {
            Some(element) => element,
            None => outside_live_region(self.pos.slot, self.slots.len()),
        }
    }
}

impl<T, D: Direction> Index<isize> for Cursor<'_, T, D> {
    type Output = T;

    #[track_caller]
    fn index(&self, steps: isize) -> &T {
        match self.at_offset(steps) {
            Some(element) => element,
            None => outside_live_region(self.pos.shifted(steps).slot, self.slots.len()),
        }
    }
}

impl<T, D: Direction> Add<isize> for Cursor<'_, T, D> {
    type Output = Self;

    fn add(mut self, steps: isize) -> Self {
        self += steps;
        self
    }
}

impl<T, D: Direction> AddAssign<isize> for Cursor<'_, T, D> {
    fn add_assign(&mut self, steps: isize) {
        self.pos = self.pos.shifted(steps);
    }
}

impl<T, D: Direction> Sub<isize> for Cursor<'_, T, D> {
    type Output = Self;

    fn sub(mut self, steps: isize) -> Self {
        self -= steps;
        self
    }
}

impl<T, D: Direction> SubAssign<isize> for Cursor<'_, T, D> {
    fn sub_assign(&mut self, steps: isize) {
        self.pos = self.pos.shifted(-steps);
    }
}

/// Number of steps from `other` to `self` in the direction of travel.
impl<'a, T, D: Direction> Sub for Cursor<'a, T, D> {
    type Output = isize;

    fn sub(self, other: Self) -> isize {
        debug_assert!(self.same_buffer(&other));
        self.pos.steps_from(other.pos)
    }
}

/// Equal when both cursors view the same buffer at the same slot.
///
/// Cursors over two empty vectors compare equal at the same slot, since
/// neither view has an address of its own.
impl<T, D: Direction> PartialEq for Cursor<'_, T, D> {
    fn eq(&self, other: &Self) -> bool {
        self.same_buffer(other) && self.pos.slot == other.pos.slot
    }
}

impl<T, D: Direction> Eq for Cursor<'_, T, D> {}

/// Cursors over different buffers are unordered. Empty vectors are the
/// exception: their views are indistinguishable and order by slot.
impl<T, D: Direction> PartialOrd for Cursor<'_, T, D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.same_buffer(other)
            .then(|| self.pos.rank().cmp(&other.pos.rank()))
    }
}

impl<T, D> fmt::Debug for Cursor<'_, T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("slot", &self.pos.slot)
            .field("len", &self.slots.len())
            .field("direction", &core::any::type_name::<D>())
            .finish()
    }
}

/// Mutable random-access cursor.
///
/// Converts into a [`Cursor`] at the same position; there is no way back.
///
/// A `CursorMut` holds the only borrow of the elements, so it cannot be
/// copied and no second cursor exists to measure against. Post-increment,
/// differences and ordering are therefore provided on the read-only view:
/// take [`as_const`](CursorMut::as_const) and use [`Cursor`]'s operations.
pub struct CursorMut<'a, T, D = Forward> {
    slots: &'a mut [T],
    pos: Position<D>,
}

impl<'a, T, D: Direction> CursorMut<'a, T, D> {
    pub(crate) fn new(slots: &'a mut [T], slot: isize) -> Self {
        Self {
            slots,
            pos: Position::new(slot),
        }
    }

    /// Absolute slot index; `-1` for the reverse end.
    #[must_use]
    pub fn slot(&self) -> isize {
        self.pos.slot
    }

    /// Slot index as a container index, or `None` for the reverse end.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        usize::try_from(self.pos.slot).ok()
    }

    #[must_use]
    pub fn get(&self) -> Option<&T> {
        self.pos.resolve(self.slots.len()).map(|index| &self.slots[index])
    }

    #[must_use]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        let index = self.pos.resolve(self.slots.len())?;
        Some(&mut self.slots[index])
    }

    /// Consumes the cursor, keeping the borrow of the element under it.
    #[must_use]
    pub fn into_mut(self) -> Option<&'a mut T> {
        let index = self.pos.resolve(self.slots.len())?;
        Some(&mut self.slots[index])
    }

    pub fn inc(&mut self) -> &mut Self {
        self.pos = self.pos.shifted(1);
        self
    }

    pub fn dec(&mut self) -> &mut Self {
        self.pos = self.pos.shifted(-1);
        self
    }

    /// Read-only view at the same position, borrowed from this cursor.
    #[must_use]
    pub fn as_const(&self) -> Cursor<'_, T, D> {
        Cursor::new(&*self.slots, self.pos.slot)
    }
}

impl<'a, T, D: Direction> From<CursorMut<'a, T, D>> for Cursor<'a, T, D> {
    fn from(cursor: CursorMut<'a, T, D>) -> Self {
        Cursor::new(cursor.slots, cursor.pos.slot)
    }
}

impl<T, D: Direction> Deref for CursorMut<'_, T, D> {
    type Target = T;

    #[track_caller]
    fn deref(&self) -> &T {
        match self.pos.resolve(self.slots.len()) {
            Some(index) => &self.slots[index],
            None => outside_live_region(self.pos.slot, self.slots.len()),
        }
    }
}

impl<T, D: Direction> DerefMut for CursorMut<'_, T, D> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        match self.pos.resolve(self.slots.len()) {
            Some(index) => &mut self.slots[index],
            None => outside_live_region(self.pos.slot, self.slots.len()),
        }
    }
}

impl<T, D: Direction> Index<isize> for CursorMut<'_, T, D> {
    type Output = T;

    #[track_caller]
    fn index(&self, steps: isize) -> &T {
        let target = self.pos.shifted(steps);
        match target.resolve(self.slots.len()) {
            Some(index) => &self.slots[index],
            None => outside_live_region(target.slot, self.slots.len()),
        }
    }
}

impl<T, D: Direction> IndexMut<isize> for CursorMut<'_, T, D> {
    #[track_caller]
    fn index_mut(&mut self, steps: isize) -> &mut T {
        let target = self.pos.shifted(steps);
        match target.resolve(self.slots.len()) {
            Some(index) => &mut self.slots[index],
            None => outside_live_region(target.slot, self.slots.len()),
        }
    }
}

impl<T, D: Direction> Add<isize> for CursorMut<'_, T, D> {
    type Output = Self;

    fn add(mut self, steps: isize) -> Self {
        self += steps;
        self
    }
}

impl<T, D: Direction> AddAssign<isize> for CursorMut<'_, T, D> {
    fn add_assign(&mut self, steps: isize) {
        self.pos = self.pos.shifted(steps);
    }
}

impl<T, D: Direction> Sub<isize> for CursorMut<'_, T, D> {
    type Output = Self;

    fn sub(mut self, steps: isize) -> Self {
        self -= steps;
        self
    }
}

impl<T, D: Direction> SubAssign<isize> for CursorMut<'_, T, D> {
    fn sub_assign(&mut self, steps: isize) {
        self.pos = self.pos.shifted(-steps);
    }
}

impl<T, D> fmt::Debug for CursorMut<'_, T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("slot", &self.pos.slot)
            .field("len", &self.slots.len())
            .field("direction", &core::any::type_name::<D>())
            .finish()
    }
}

/// Elements between two cursors, in the cursors' direction of travel.
///
/// Created by [`Cursor::until`].
pub struct Span<'a, T, D = Forward> {
    front: Cursor<'a, T, D>,
    remaining: usize,
}

impl<T, D> Clone for Span<'_, T, D> {
    fn clone(&self) -> Self {
        Self {
            front: self.front,
            remaining: self.remaining,
        }
    }
}

impl<'a, T, D: Direction> Iterator for Span<'a, T, D> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let element = self.front.get()?;
        self.front.inc();
        self.remaining -= 1;
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, D: Direction> ExactSizeIterator for Span<'_, T, D> {}

impl<T, D: Direction> FusedIterator for Span<'_, T, D> {}
