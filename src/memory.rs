//! Constructing and destroying values in place.
//!
//! These are the only sanctioned transitions between an uninitialized slot
//! and a slot holding a live value. None of them check bounds; callers must
//! guarantee that every position written to is in bounds and uninitialized,
//! and that every position destroyed holds a live value.
//!
//! If producing a value panics partway through a range, the values already
//! constructed by that call are dropped again before unwinding continues, so
//! the destination range is left entirely uninitialized.

use crate::cursor::Cursor;

use core::ptr;

/// Drops the values constructed so far if a range construction unwinds.
struct ConstructionGuard<C: Cursor> {
    first: C,
    count: usize,
}

impl<C: Cursor> ConstructionGuard<C> {
    #[inline]
    fn new(first: &C) -> Self {
        ConstructionGuard {
            first: first.clone(),
            count: 0,
        }
    }

    #[inline]
    fn finish(self) {
        core::mem::forget(self);
    }
}

impl<C: Cursor> Drop for ConstructionGuard<C> {
    fn drop(&mut self) {
        unsafe {
            destroy_n(self.first.clone(), self.count);
        }
    }
}

/// Moves `value` into the uninitialized slot at `p`, returning `p`.
///
/// # Safety
/// `p` must be valid for writes and properly aligned. Any value previously
/// stored at `p` is overwritten without being dropped.
#[inline]
pub unsafe fn construct_at<T>(p: *mut T, value: T) -> *mut T {
    p.write(value);
    p
}

/// Moves every value produced by `source` into consecutive slots starting at
/// `dest`, returning the position one past the last slot written.
///
/// # Safety
/// The destination must have room for every value the iterator produces, and
/// all of those slots must be uninitialized.
///
/// # Examples
/// ```
/// use core::mem::MaybeUninit;
/// use fixcap::cursor::{distance, SliceCursor};
/// use fixcap::memory::uninitialized_copy;
///
/// let mut slots = [MaybeUninit::<u32>::uninit(); 4];
/// let first = SliceCursor::new(slots.as_mut_ptr() as *mut u32);
/// let last = unsafe { uninitialized_copy([4, 5, 6], first) };
/// assert_eq!(distance(&first, &last), 3);
/// assert_eq!(unsafe { slots[2].assume_init() }, 6);
/// ```
pub unsafe fn uninitialized_copy<I, C>(source: I, dest: C) -> C
where
    I: IntoIterator,
    C: Cursor<Item = I::Item>,
{
    let mut guard = ConstructionGuard::new(&dest);
    let mut cursor = dest;
    for value in source {
        cursor.as_ptr().write(value);
        cursor.advance();
        guard.count += 1;
    }

    guard.finish();
    cursor
}

/// Moves at most `n` values produced by `source` into consecutive slots
/// starting at `dest`, returning the position one past the last slot written.
///
/// Fewer than `n` slots are written if the iterator runs out first; the
/// remaining values of the iterator are left in it.
///
/// # Safety
/// The first `n` slots starting at `dest` must be in bounds and uninitialized.
pub unsafe fn uninitialized_copy_n<I, C>(source: I, n: usize, dest: C) -> C
where
    I: IntoIterator,
    C: Cursor<Item = I::Item>,
{
    uninitialized_copy(source.into_iter().take(n), dest)
}

/// Constructs clones of `value` in every slot of `[first, last)`.
///
/// # Safety
/// Every slot in the range must be in bounds and uninitialized, and `last`
/// must be reachable from `first`.
pub unsafe fn uninitialized_fill<C>(first: C, last: C, value: &C::Item)
where
    C: Cursor,
    C::Item: Clone,
{
    let mut guard = ConstructionGuard::new(&first);
    let mut cursor = first;
    while cursor != last {
        cursor.as_ptr().write(value.clone());
        cursor.advance();
        guard.count += 1;
    }

    guard.finish();
}

/// Constructs `n` clones of `value` starting at `first`, returning the
/// position one past the last slot written.
///
/// # Safety
/// The first `n` slots starting at `first` must be in bounds and uninitialized.
pub unsafe fn uninitialized_fill_n<C>(first: C, n: usize, value: &C::Item) -> C
where
    C: Cursor,
    C::Item: Clone,
{
    let mut guard = ConstructionGuard::new(&first);
    let mut cursor = first;
    while guard.count < n {
        cursor.as_ptr().write(value.clone());
        cursor.advance();
        guard.count += 1;
    }

    guard.finish();
    cursor
}

/// Default-constructs a value in every slot of `[first, last)`.
///
/// Rust has no indeterminate default initialization; this produces the same
/// values as [`uninitialized_value_construct`].
///
/// # Safety
/// Same as [`uninitialized_fill`].
#[inline]
pub unsafe fn uninitialized_default_construct<C>(first: C, last: C)
where
    C: Cursor,
    C::Item: Default,
{
    uninitialized_value_construct(first, last);
}

/// Default-constructs `n` values starting at `first`, returning the position
/// one past the last slot written.
///
/// # Safety
/// Same as [`uninitialized_fill_n`].
#[inline]
pub unsafe fn uninitialized_default_construct_n<C>(first: C, n: usize) -> C
where
    C: Cursor,
    C::Item: Default,
{
    uninitialized_value_construct_n(first, n)
}

/// Constructs `C::Item::default()` in every slot of `[first, last)`.
///
/// # Safety
/// Same as [`uninitialized_fill`].
pub unsafe fn uninitialized_value_construct<C>(first: C, last: C)
where
    C: Cursor,
    C::Item: Default,
{
    let mut guard = ConstructionGuard::new(&first);
    let mut cursor = first;
    while cursor != last {
        cursor.as_ptr().write(Default::default());
        cursor.advance();
        guard.count += 1;
    }

    guard.finish();
}

/// Constructs `n` default values starting at `first`, returning the position
/// one past the last slot written.
///
/// # Safety
/// Same as [`uninitialized_fill_n`].
///
/// # Examples
/// ```
/// use core::mem::MaybeUninit;
/// use fixcap::cursor::SliceCursor;
/// use fixcap::memory::{destroy_n, uninitialized_value_construct_n};
///
/// let mut slots = [MaybeUninit::<u64>::uninit(); 3];
/// let first = SliceCursor::new(slots.as_mut_ptr() as *mut u64);
/// unsafe {
///     uninitialized_value_construct_n(first, 3);
///     assert_eq!(slots[1].assume_init(), 0);
///     destroy_n(first, 3);
/// }
/// ```
pub unsafe fn uninitialized_value_construct_n<C>(first: C, n: usize) -> C
where
    C: Cursor,
    C::Item: Default,
{
    let mut guard = ConstructionGuard::new(&first);
    let mut cursor = first;
    while guard.count < n {
        cursor.as_ptr().write(Default::default());
        cursor.advance();
        guard.count += 1;
    }

    guard.finish();
    cursor
}

/// Drops the value at `p` in place, leaving the slot uninitialized.
///
/// # Safety
/// `p` must point to a live value, which must not be used afterwards.
#[inline]
pub unsafe fn destroy_at<T>(p: *mut T) {
    ptr::drop_in_place(p);
}

/// Drops every value in `[first, last)` in place.
///
/// # Safety
/// Every slot in the range must hold a live value, and `last` must be
/// reachable from `first`. The values must not be used afterwards.
pub unsafe fn destroy<C: Cursor>(first: C, last: C) {
    if !core::mem::needs_drop::<C::Item>() {
        return;
    }

    let mut cursor = first;
    while cursor != last {
        destroy_at(cursor.as_ptr());
        cursor.advance();
    }
}

/// Drops `n` values starting at `first` in place, returning the position one
/// past the last slot destroyed.
///
/// # Safety
/// Each of the first `n` slots starting at `first` must hold a live value.
/// The values must not be used afterwards.
pub unsafe fn destroy_n<C: Cursor>(first: C, n: usize) -> C {
    let mut cursor = first;
    if !core::mem::needs_drop::<C::Item>() {
        cursor.advance_by(n);
        return cursor;
    }

    for _ in 0..n {
        destroy_at(cursor.as_ptr());
        cursor.advance();
    }
    cursor
}
