use alloc::alloc::{alloc, dealloc, handle_alloc_error, Layout};
use core::marker::PhantomData;
use core::ptr::{self, NonNull};

/// Handles the single raw allocation behind a `GrowVec`.
///
/// The buffer knows how many slots it owns but not which of them are live;
/// the owning container tracks the constructed prefix with its own length.
/// Every slot primitive is `unsafe` and trusts the caller about the state of
/// the slots it touches.
///
/// A capacity of zero never holds an allocation. Zero-sized element types
/// never allocate either, but their capacity is still tracked so the growth
/// sequence looks the same for every `T`.
pub(crate) struct RawBuffer<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _marker: PhantomData<T>,
}

impl<T> RawBuffer<T> {
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _marker: PhantomData,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            ptr: Self::allocate(capacity),
            capacity,
            _marker: PhantomData,
        }
    }

    fn layout(capacity: usize) -> Layout {
        if capacity > isize::MAX as usize {
            capacity_overflow();
        }
        match Layout::array::<T>(capacity) {
            Ok(layout) => layout,
            Err(_) => capacity_overflow(),
        }
    }

    fn allocate(capacity: usize) -> NonNull<T> {
        let layout = Self::layout(capacity);
        if layout.size() == 0 {
            return NonNull::dangling();
        }

        // SAFETY: the layout has a non-zero size.
        let raw = unsafe { alloc(layout) };
        match NonNull::new(raw.cast::<T>()) {
            Some(ptr) => ptr,
            None => handle_alloc_error(layout),
        }
    }

    /// Frees the allocation without touching any slot contents.
    ///
    /// Live elements must have been destroyed or moved out beforehand.
    pub(crate) fn release(&mut self) {
        let layout = Self::layout(self.capacity);
        if layout.size() != 0 {
            // SAFETY: `ptr` was returned by `alloc` with exactly this layout.
            unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) };
        }
        self.ptr = NonNull::dangling();
        self.capacity = 0;
    }

    #[must_use]
    pub(crate) const fn capacity(&self) -> usize {
        self.capacity
    }

    #[must_use]
    pub(crate) const fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    #[must_use]
    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Address of slot `index`. One past the last slot is allowed.
    pub(crate) fn slot(&self, index: usize) -> *mut T {
        debug_assert!(index <= self.capacity);
        // SAFETY: `index <= capacity` keeps the offset inside the allocation
        // or one past its end.
        unsafe { self.ptr.as_ptr().add(index) }
    }

    /// Constructs `value` in a raw slot.
    ///
    /// # Safety
    ///
    /// `index < capacity` and the slot must not hold a live element.
    pub(crate) unsafe fn construct_at(&mut self, index: usize, value: T) {
        debug_assert!(index < self.capacity);
        ptr::write(self.slot(index), value);
    }

    /// Moves the element out of a live slot, leaving the slot raw.
    ///
    /// # Safety
    ///
    /// `index < capacity` and the slot must hold a live element.
    pub(crate) unsafe fn take_at(&mut self, index: usize) -> T {
        debug_assert!(index < self.capacity);
        ptr::read(self.slot(index))
    }

    /// Destroys the live elements in `[start, end)`, leaving those slots raw.
    ///
    /// # Safety
    ///
    /// `start <= end <= capacity` and every slot in the range must be live.
    pub(crate) unsafe fn destroy_range(&mut self, start: usize, end: usize) {
        debug_assert!(start <= end && end <= self.capacity);
        let doomed = ptr::slice_from_raw_parts_mut(self.slot(start), end - start);
        ptr::drop_in_place(doomed);
    }

    /// Relocates the live slots `[src, src + count)` to `[dst, dst + count)`.
    ///
    /// The ranges may overlap. Afterwards the destination range is live and
    /// the part of the source range it does not cover is raw.
    ///
    /// # Safety
    ///
    /// Both ranges must lie within capacity, the source range must be live,
    /// and destination slots outside the source range must be raw.
    pub(crate) unsafe fn move_within(&mut self, src: usize, dst: usize, count: usize) {
        debug_assert!(src + count <= self.capacity && dst + count <= self.capacity);
        ptr::copy(self.slot(src), self.slot(dst), count);
    }

    /// Moves the first `live` elements into a fresh allocation of exactly
    /// `new_capacity` slots and frees the old one.
    ///
    /// # Safety
    ///
    /// `live <= new_capacity`, `live <= capacity`, and slots `[0, live)` must
    /// be live. Any element past `live` must already have been destroyed.
    pub(crate) unsafe fn relocate(&mut self, live: usize, new_capacity: usize) {
        debug_assert!(live <= new_capacity && live <= self.capacity);
        let fresh = Self::allocate(new_capacity);
        ptr::copy_nonoverlapping(self.ptr.as_ptr(), fresh.as_ptr(), live);
        self.release();
        self.ptr = fresh;
        self.capacity = new_capacity;
    }
}

impl<T> Drop for RawBuffer<T> {
    fn drop(&mut self) {
        self.release();
    }
}

#[cold]
#[track_caller]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}
