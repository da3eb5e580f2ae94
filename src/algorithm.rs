//! Allocation-free range algorithms.
//!
//! Comparisons consume ordinary iterators and are safe. The mutating
//! algorithms operate on [cursors](crate::cursor) over live elements and are
//! `unsafe`, since a cursor range carries no proof that its elements are
//! initialized or that it does not alias anything borrowed elsewhere.
//!
//! [`rotate`] is built from three calls to [`reverse`], which is why it only
//! needs bidirectional cursors, and why rotating a [`Reversed`] range turns
//! the left rotation into a right rotation.

use crate::cursor::{distance, next, prev, BidirectionalCursor, Cursor, Reversed};

use core::cmp::Ordering;
use core::ptr;

/// Returns `true` if `a` and `b` yield equal elements.
///
/// Every element of `a` is compared against the element of `b` at the same
/// position; if `b` runs out first, the result is `false`. Elements of `b`
/// beyond the length of `a` are ignored.
///
/// # Examples
/// ```
/// use fixcap::algorithm::equal;
/// assert!(equal(&[1, 2, 3], &[1, 2, 3, 4]));
/// assert!(!equal(&[1, 2, 3], &[1, 2]));
/// ```
#[inline]
pub fn equal<A, B>(a: A, b: B) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: PartialEq<B::Item>,
{
    equal_by(a, b, |x, y| x == y)
}

/// Returns `true` if `pred` holds for every pair of elements of `a` and `b`
/// at the same position. See [`equal`].
pub fn equal_by<A, B, F>(a: A, b: B, mut pred: F) -> bool
where
    A: IntoIterator,
    B: IntoIterator,
    F: FnMut(&A::Item, &B::Item) -> bool,
{
    let mut b = b.into_iter();
    for x in a {
        match b.next() {
            Some(y) if pred(&x, &y) => {}
            _ => return false,
        }
    }
    true
}

/// Returns `true` if `a` orders strictly before `b`.
///
/// The first mismatching pair decides; if one sequence is a prefix of the
/// other, the shorter one orders first. Equal sequences are not less than
/// each other.
///
/// # Examples
/// ```
/// use fixcap::algorithm::lexicographical_compare;
/// assert!(lexicographical_compare(&[0, 1, 0, 3, 4], &[0, 1, 2, 3, 4]));
/// assert!(!lexicographical_compare(&[0, 1, 2, 3, 4], &[0, 1, 0, 3, 4]));
/// assert!(lexicographical_compare(&[1, 2], &[1, 2, 3]));
/// assert!(!lexicographical_compare(&[1, 2], &[1, 2]));
/// ```
#[inline]
pub fn lexicographical_compare<A, B>(a: A, b: B) -> bool
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
    A::Item: PartialOrd,
{
    lexicographical_compare_by(a, b, |x, y| x < y)
}

/// Returns `true` if `a` orders strictly before `b`, using `less` as the
/// strict weak ordering. See [`lexicographical_compare`].
pub fn lexicographical_compare_by<A, B, F>(a: A, b: B, mut less: F) -> bool
where
    A: IntoIterator,
    B: IntoIterator<Item = A::Item>,
    F: FnMut(&A::Item, &A::Item) -> bool,
{
    let mut b = b.into_iter();
    for x in a {
        let y = match b.next() {
            Some(y) => y,
            None => return false,
        };

        if less(&x, &y) {
            return true;
        }
        if less(&y, &x) {
            return false;
        }
    }
    b.next().is_some()
}

/// Compares two sequences lexicographically, returning `None` if any pair
/// of elements is unordered.
pub(crate) fn lexicographical_ordering<A, B>(a: A, b: B) -> Option<Ordering>
where
    A: IntoIterator,
    B: IntoIterator,
    A::Item: PartialOrd<B::Item>,
{
    let mut b = b.into_iter();
    for x in a {
        let y = match b.next() {
            Some(y) => y,
            None => return Some(Ordering::Greater),
        };
        match x.partial_cmp(&y)? {
            Ordering::Equal => {}
            decided => return Some(decided),
        }
    }

    match b.next() {
        Some(_) => Some(Ordering::Less),
        None => Some(Ordering::Equal),
    }
}

/// Swaps the elements at `a` and `b`.
///
/// # Safety
/// Both positions must hold live elements.
#[inline]
pub unsafe fn iter_swap<A, B>(a: &A, b: &B)
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    ptr::swap(a.as_ptr(), b.as_ptr());
}

/// Swaps each element of `[first1, last1)` with the element at the same
/// offset from `first2`, returning the position one past the last element
/// swapped in the second range.
///
/// # Safety
/// Both ranges must consist of live elements and must not overlap.
pub unsafe fn swap_ranges<A, B>(first1: A, last1: A, first2: B) -> B
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    let mut a = first1;
    let mut b = first2;
    while a != last1 {
        iter_swap(&a, &b);
        a.advance();
        b.advance();
    }
    b
}

/// Assigns clones of `value` to every element of `[first, last)`.
///
/// # Safety
/// Every position in the range must hold a live element.
pub unsafe fn fill<C>(first: C, last: C, value: &C::Item)
where
    C: Cursor,
    C::Item: Clone,
{
    let mut cursor = first;
    while cursor != last {
        *cursor.as_ptr() = value.clone();
        cursor.advance();
    }
}

/// Assigns clones of `value` to `n` elements starting at `first`, returning
/// the position one past the last element assigned.
///
/// # Safety
/// Each of the first `n` positions must hold a live element.
pub unsafe fn fill_n<C>(first: C, n: usize, value: &C::Item) -> C
where
    C: Cursor,
    C::Item: Clone,
{
    let mut cursor = first;
    for _ in 0..n {
        *cursor.as_ptr() = value.clone();
        cursor.advance();
    }
    cursor
}

/// Assigns every value produced by `source` to consecutive elements starting
/// at `dest`, returning the position one past the last element assigned.
///
/// # Safety
/// The destination must hold a live element for every value produced.
pub unsafe fn copy<I, C>(source: I, dest: C) -> C
where
    I: IntoIterator,
    C: Cursor<Item = I::Item>,
{
    let mut cursor = dest;
    for value in source {
        *cursor.as_ptr() = value;
        cursor.advance();
    }
    cursor
}

/// Assigns at most `n` values produced by `source` to consecutive elements
/// starting at `dest`, returning the position one past the last element
/// assigned.
///
/// # Safety
/// Each of the first `n` positions must hold a live element.
#[inline]
pub unsafe fn copy_n<I, C>(source: I, n: usize, dest: C) -> C
where
    I: IntoIterator,
    C: Cursor<Item = I::Item>,
{
    copy(source.into_iter().take(n), dest)
}

/// Reverses the order of the elements in `[first, last)`.
///
/// # Safety
/// Every position in the range must hold a live element, and `last` must be
/// reachable from `first`.
///
/// # Examples
/// ```
/// use fixcap::algorithm::reverse;
/// use fixcap::cursor::SliceCursor;
/// let mut xs = [1, 2, 3, 4, 5];
/// let p = xs.as_mut_ptr();
/// unsafe { reverse(SliceCursor::new(p), SliceCursor::at(p, 5)) };
/// assert_eq!(xs, [5, 4, 3, 2, 1]);
/// ```
pub unsafe fn reverse<C: BidirectionalCursor>(first: C, last: C) {
    let mut first = first;
    let mut last = last;
    while first != last {
        last.retreat();
        if first == last {
            break;
        }
        iter_swap(&first, &last);
        first.advance();
    }
}

/// Rotates `[first, last)` to the left, so that the element at `n_first`
/// becomes the first element.
///
/// Returns the new position of the element originally at `first`. If
/// `first == n_first`, nothing moves and `last` is returned; if
/// `n_first == last`, nothing moves and `first` is returned.
///
/// # Safety
/// Every position in the range must hold a live element, and `n_first` must
/// lie within `[first, last]`.
///
/// # Examples
/// ```
/// use fixcap::algorithm::rotate;
/// use fixcap::cursor::{Reversed, SliceCursor};
/// let mut xs = [1, 2, 3, 4, 5, 6];
/// let p = xs.as_mut_ptr();
///
/// let first = SliceCursor::new(p);
/// let last = SliceCursor::at(p, 6);
/// let moved = unsafe { rotate(first, SliceCursor::at(p, 2), last) };
/// assert_eq!(xs, [3, 4, 5, 6, 1, 2]);
/// assert_eq!(moved, SliceCursor::at(p, 4));
///
/// // on reversed cursors, this becomes a right rotation
/// let split = Reversed::new(SliceCursor::at(p, 5));
/// unsafe { rotate(Reversed::new(last), split, Reversed::new(first)) };
/// assert_eq!(xs, [2, 3, 4, 5, 6, 1]);
/// ```
pub unsafe fn rotate<C: BidirectionalCursor>(first: C, n_first: C, last: C) -> C {
    if first == n_first {
        return last;
    }
    if n_first == last {
        return first;
    }

    let tail_len = distance(&n_first, &last);
    reverse(first.clone(), n_first.clone());
    reverse(n_first, last.clone());
    reverse(first.clone(), last);

    next(first, tail_len)
}

/// Moves the last `count` elements of `[position, last)` to `position`,
/// shifting the elements in between towards the end.
///
/// # Safety
/// Same as [`rotate`]; `count` must not exceed the length of the range.
pub(crate) unsafe fn rotate_tail_to<C: BidirectionalCursor>(position: C, last: C, count: usize) {
    let split = prev(last.clone(), count);
    rotate(Reversed::new(last), Reversed::new(split), Reversed::new(position));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor::{RingCursor, SliceCursor};

    fn cursors<T, const N: usize>(xs: &mut [T; N]) -> (SliceCursor<T>, SliceCursor<T>) {
        let p = xs.as_mut_ptr();
        (SliceCursor::new(p), SliceCursor::at(p, N))
    }

    #[test]
    fn equality_over_iterators() {
        assert!(equal(&[1, 2, 3], &[1, 2, 3]));
        assert!(equal(core::iter::empty::<&i32>(), &[7]));
        assert!(!equal(&[1, 2, 3], &[1, 5, 3]));
        assert!(!equal(&[1, 2], &[1]));

        assert!(equal_by(&[1, 2, 3], &[-1, -2, -3], |a, b| **a == -**b));
        assert!(equal(&[1u8, 2], &[1u8, 2]));
    }

    #[test]
    fn lexicographical_ordering_example() {
        let a = [0, 1, 2, 3, 4];
        let b = [0, 1, 0, 3, 4];
        assert!(lexicographical_compare(&b, &a));
        assert!(!lexicographical_compare(&a, &b));
        assert!(!lexicographical_compare(&a, &a));

        assert!(lexicographical_compare(&[] as &[i32], &[0]));
        assert!(!lexicographical_compare(&[0], &[] as &[i32]));
        assert!(lexicographical_compare_by(&a, &b, |x, y| x > y));

        assert_eq!(lexicographical_ordering(&b, &a), Some(Ordering::Less));
        assert_eq!(lexicographical_ordering(&a, &a[..4]), Some(Ordering::Greater));
        assert_eq!(lexicographical_ordering(&a, &a), Some(Ordering::Equal));
        assert_eq!(lexicographical_ordering(&[f32::NAN], &[0.0]), None);
    }

    #[test]
    fn reverse_handles_odd_and_even_lengths() {
        let mut odd = [1, 2, 3, 4, 5];
        let (first, last) = cursors(&mut odd);
        unsafe { reverse(first, last) };
        assert_eq!(odd, [5, 4, 3, 2, 1]);

        let mut even = [1, 2, 3, 4];
        let (first, last) = cursors(&mut even);
        unsafe { reverse(first, last) };
        assert_eq!(even, [4, 3, 2, 1]);

        let mut empty: [i32; 0] = [];
        let (first, last) = cursors(&mut empty);
        unsafe { reverse(first, last) };
    }

    #[test]
    fn rotation_splits_and_restores() {
        for len in 0..8 {
            for k in 0..=len {
                let mut xs = [0usize; 8];
                for (i, x) in xs.iter_mut().enumerate() {
                    *x = i;
                }

                let p = xs.as_mut_ptr();
                let first = SliceCursor::new(p);
                let last = SliceCursor::at(p, len);
                let moved = unsafe { rotate(first, SliceCursor::at(p, k), last) };

                for i in 0..len {
                    assert_eq!(xs[i], (i + k) % len);
                }
                if k == 0 {
                    assert_eq!(moved, last);
                } else {
                    assert_eq!(moved, SliceCursor::at(p, len - k));
                }

                // rotating again at the complementary split restores the order
                unsafe { rotate(first, SliceCursor::at(p, len - k), last) };
                for (i, x) in xs[..len].iter().enumerate() {
                    assert_eq!(*x, i);
                }
            }
        }
    }

    #[test]
    fn rotation_across_ring_boundary() {
        // physical [c, d, e, a, b], head at 3
        let mut ring = ['c', 'd', 'e', 'a', 'b'];
        let p = ring.as_mut_ptr();
        let first = RingCursor::new(p, 5, 3, 0);
        let n_first = RingCursor::new(p, 5, 3, 2);
        let last = RingCursor::new(p, 5, 3, 5);

        let moved = unsafe { rotate(first, n_first, last) };
        assert_eq!(moved.position(), 3);
        // logical order is now c, d, e, a, b
        assert_eq!(ring, ['e', 'a', 'b', 'c', 'd']);
    }

    #[test]
    fn tail_rotation_moves_block_into_place() {
        let mut xs = [1, 2, 3, 4, 8, 9];
        let p = xs.as_mut_ptr();
        unsafe { rotate_tail_to(SliceCursor::at(p, 1), SliceCursor::at(p, 6), 2) };
        assert_eq!(xs, [1, 8, 9, 2, 3, 4]);

        let mut ys = [1, 2, 3];
        let p = ys.as_mut_ptr();
        unsafe { rotate_tail_to(SliceCursor::at(p, 3), SliceCursor::at(p, 3), 0) };
        assert_eq!(ys, [1, 2, 3]);
    }

    #[test]
    fn assigning_algorithms() {
        let mut xs = [0; 6];
        let (first, last) = cursors(&mut xs);
        unsafe { fill(first, last, &3) };
        assert_eq!(xs, [3; 6]);

        let after = unsafe { fill_n(first, 2, &1) };
        assert_eq!(after, SliceCursor::at(xs.as_mut_ptr(), 2));
        let after = unsafe { copy([7, 8], after) };
        let after = unsafe { copy_n(9..100, 2, after) };
        assert_eq!(after, last);
        assert_eq!(xs, [1, 1, 7, 8, 9, 10]);

        let mut ys = [-1, -2, -3];
        let (yfirst, ylast) = cursors(&mut ys);
        let end = unsafe { swap_ranges(yfirst, ylast, first) };
        assert_eq!(end, SliceCursor::at(xs.as_mut_ptr(), 3));
        assert_eq!(ys, [1, 1, 7]);
        assert_eq!(xs, [-1, -2, -3, 8, 9, 10]);

        unsafe { iter_swap(&first, &prev(last, 1)) };
        assert_eq!(xs, [10, -2, -3, 8, 9, -1]);
    }
}
