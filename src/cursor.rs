//! Movable positions into sequences.
//!
//! A cursor is a raw position: it knows how to step through a sequence and
//! where the element at its position lives, but it does not borrow the
//! sequence and does not know whether that element is initialized. This is
//! what lets the routines in [`memory`](crate::memory) and
//! [`algorithm`](crate::algorithm) work on uninitialized storage, and it is
//! also why dereferencing a cursor always takes `unsafe`.
//!
//! Cursors come in the capability levels described by [`Category`]. Input
//! sequences are represented by ordinary [`Iterator`]s; the traits in this
//! module cover the three levels that allow revisiting positions.

/// Traversal capabilities, ordered from weakest to strongest.
///
/// # Examples
/// ```
/// use fixcap::cursor::{Category, Cursor, SliceCursor};
/// assert!(Category::Input < Category::Forward);
/// assert!(Category::Bidirectional < Category::RandomAccess);
/// assert_eq!(<SliceCursor<u8> as Cursor>::CATEGORY, Category::RandomAccess);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    /// Single pass, forward only. Modelled by [`Iterator`].
    Input,
    /// Repeatable traversal in one direction.
    Forward,
    /// Forward traversal plus stepping backwards.
    Bidirectional,
    /// Bidirectional traversal plus constant-time jumps and differences.
    RandomAccess,
}

/// A position in a sequence that can be stepped forward.
///
/// Two cursors compare equal exactly when they denote the same position in
/// the same sequence.
pub trait Cursor: Clone + PartialEq {
    /// The type of the elements in the sequence.
    type Item;

    /// The capabilities of this cursor type.
    const CATEGORY: Category;

    /// Moves the cursor to the next position.
    fn advance(&mut self);

    /// Returns a pointer to the element at the current position.
    ///
    /// Computing the pointer is always safe; reading or writing through it
    /// requires the position to be in bounds, and reading requires the
    /// element to be initialized.
    fn as_ptr(&self) -> *mut Self::Item;

    /// Moves the cursor `n` positions forward.
    #[inline]
    fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Counts the steps from `self` to `last`.
    ///
    /// The default implementation walks forward until it reaches `last`, so
    /// `last` must be reachable from `self`; otherwise this never returns.
    fn distance_to(&self, last: &Self) -> usize {
        let mut cursor = self.clone();
        let mut steps = 0;
        while cursor != *last {
            cursor.advance();
            steps += 1;
        }
        steps
    }
}

/// A cursor that can also be stepped backwards.
pub trait BidirectionalCursor: Cursor {
    /// Moves the cursor to the previous position.
    fn retreat(&mut self);

    /// Moves the cursor `n` positions backwards.
    #[inline]
    fn retreat_by(&mut self, n: usize) {
        for _ in 0..n {
            self.retreat();
        }
    }
}

/// A cursor that can jump by arbitrary offsets in constant time.
pub trait RandomAccessCursor: BidirectionalCursor {
    /// Moves the cursor by `offset` positions, backwards if negative.
    fn jump(&mut self, offset: isize);

    /// Returns the signed distance from `origin` to `self`.
    fn offset_from(&self, origin: &Self) -> isize;
}

/// Returns the number of steps from `first` to `last`.
///
/// Random access cursors answer in constant time; all others walk forward
/// from `first`, which must therefore reach `last`.
///
/// # Examples
/// ```
/// use fixcap::cursor::{distance, SliceCursor};
/// let mut xs = [1, 2, 3, 4];
/// let first = SliceCursor::new(xs.as_mut_ptr());
/// let last = SliceCursor::at(xs.as_mut_ptr(), 4);
/// assert_eq!(distance(&first, &last), 4);
/// ```
#[inline]
pub fn distance<C: Cursor>(first: &C, last: &C) -> usize {
    first.distance_to(last)
}

/// Returns `cursor` moved `n` positions forward.
#[inline]
pub fn next<C: Cursor>(mut cursor: C, n: usize) -> C {
    cursor.advance_by(n);
    cursor
}

/// Returns `cursor` moved `n` positions backwards.
#[inline]
pub fn prev<C: BidirectionalCursor>(mut cursor: C, n: usize) -> C {
    cursor.retreat_by(n);
    cursor
}

/// A random access cursor into contiguous memory.
pub struct SliceCursor<T> {
    base: *mut T,
    pos: isize,
}

impl<T> SliceCursor<T> {
    /// Creates a cursor at `base`.
    #[inline]
    pub fn new(base: *mut T) -> Self {
        SliceCursor { base, pos: 0 }
    }

    /// Creates a cursor `pos` elements past `base`.
    #[inline]
    pub fn at(base: *mut T, pos: usize) -> Self {
        SliceCursor {
            base,
            pos: pos as isize,
        }
    }
}

impl<T> Clone for SliceCursor<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SliceCursor<T> {}

impl<T> PartialEq for SliceCursor<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base && self.pos == other.pos
    }
}

impl<T> Eq for SliceCursor<T> {}

impl<T> core::fmt::Debug for SliceCursor<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SliceCursor")
            .field("base", &self.base)
            .field("pos", &self.pos)
            .finish()
    }
}

impl<T> Cursor for SliceCursor<T> {
    type Item = T;
    const CATEGORY: Category = Category::RandomAccess;

    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    fn as_ptr(&self) -> *mut T {
        self.base.wrapping_offset(self.pos)
    }

    #[inline]
    fn advance_by(&mut self, n: usize) {
        self.pos += n as isize;
    }

    #[inline]
    fn distance_to(&self, last: &Self) -> usize {
        debug_assert!(last.pos >= self.pos);
        (last.pos - self.pos) as usize
    }
}

impl<T> BidirectionalCursor for SliceCursor<T> {
    #[inline]
    fn retreat(&mut self) {
        self.pos -= 1;
    }

    #[inline]
    fn retreat_by(&mut self, n: usize) {
        self.pos -= n as isize;
    }
}

impl<T> RandomAccessCursor for SliceCursor<T> {
    #[inline]
    fn jump(&mut self, offset: isize) {
        self.pos += offset;
    }

    #[inline]
    fn offset_from(&self, origin: &Self) -> isize {
        self.pos - origin.pos
    }
}

/// A random access cursor over the logical positions of a ring buffer.
///
/// Position 0 is the slot at `head`; positions wrap around at `capacity`.
/// Cursors created for the same ring compare equal exactly when their logical
/// positions match, regardless of the physical wraparound point.
pub struct RingCursor<T> {
    data: *mut T,
    capacity: usize,
    head: usize,
    pos: isize,
}

impl<T> RingCursor<T> {
    /// Creates a cursor at logical position `pos` of the ring with `capacity`
    /// slots starting at `data`, whose logical front is the slot at `head`.
    #[inline]
    pub fn new(data: *mut T, capacity: usize, head: usize, pos: usize) -> Self {
        debug_assert!(head < capacity);
        RingCursor {
            data,
            capacity,
            head,
            pos: pos as isize,
        }
    }

    /// Returns the logical position of the cursor.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos as usize
    }

    #[inline]
    fn physical_index(&self) -> usize {
        let pos = self.pos as usize;
        let rollover = self.capacity - self.head;
        if pos < rollover {
            self.head + pos
        } else {
            pos - rollover
        }
    }
}

impl<T> Clone for RingCursor<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RingCursor<T> {}

impl<T> PartialEq for RingCursor<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data && self.pos == other.pos
    }
}

impl<T> Eq for RingCursor<T> {}

impl<T> core::fmt::Debug for RingCursor<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RingCursor")
            .field("data", &self.data)
            .field("capacity", &self.capacity)
            .field("head", &self.head)
            .field("pos", &self.pos)
            .finish()
    }
}

impl<T> Cursor for RingCursor<T> {
    type Item = T;
    const CATEGORY: Category = Category::RandomAccess;

    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }

    #[inline]
    fn as_ptr(&self) -> *mut T {
        self.data.wrapping_add(self.physical_index())
    }

    #[inline]
    fn advance_by(&mut self, n: usize) {
        self.pos += n as isize;
    }

    #[inline]
    fn distance_to(&self, last: &Self) -> usize {
        debug_assert!(last.pos >= self.pos);
        (last.pos - self.pos) as usize
    }
}

impl<T> BidirectionalCursor for RingCursor<T> {
    #[inline]
    fn retreat(&mut self) {
        self.pos -= 1;
    }

    #[inline]
    fn retreat_by(&mut self, n: usize) {
        self.pos -= n as isize;
    }
}

impl<T> RandomAccessCursor for RingCursor<T> {
    #[inline]
    fn jump(&mut self, offset: isize) {
        self.pos += offset;
    }

    #[inline]
    fn offset_from(&self, origin: &Self) -> isize {
        self.pos - origin.pos
    }
}

/// A cursor adaptor walking a bidirectional sequence back to front.
///
/// A reversed cursor wrapping position `p` denotes the element just before
/// `p`, so reversing `[first, last)` yields the range
/// `[Reversed::new(last), Reversed::new(first))`.
///
/// # Examples
/// ```
/// use fixcap::cursor::{Cursor, Reversed, SliceCursor};
/// let mut xs = [1, 2, 3];
/// let end = SliceCursor::at(xs.as_mut_ptr(), 3);
///
/// let mut rev = Reversed::new(end);
/// assert_eq!(unsafe { *rev.as_ptr() }, 3);
/// rev.advance();
/// assert_eq!(unsafe { *rev.as_ptr() }, 2);
/// assert_eq!(rev.base(), SliceCursor::at(xs.as_mut_ptr(), 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Reversed<C> {
    inner: C,
}

impl<C: BidirectionalCursor> Reversed<C> {
    /// Wraps `cursor`.
    #[inline]
    pub fn new(cursor: C) -> Self {
        Reversed { inner: cursor }
    }

    /// Returns a copy of the wrapped cursor.
    #[inline]
    pub fn base(&self) -> C {
        self.inner.clone()
    }

    /// Unwraps the cursor.
    #[inline]
    pub fn into_base(self) -> C {
        self.inner
    }
}

impl<C: BidirectionalCursor> Cursor for Reversed<C> {
    type Item = C::Item;
    const CATEGORY: Category = C::CATEGORY;

    #[inline]
    fn advance(&mut self) {
        self.inner.retreat();
    }

    #[inline]
    fn as_ptr(&self) -> *mut C::Item {
        prev(self.inner.clone(), 1).as_ptr()
    }

    #[inline]
    fn advance_by(&mut self, n: usize) {
        self.inner.retreat_by(n);
    }

    #[inline]
    fn distance_to(&self, last: &Self) -> usize {
        last.inner.distance_to(&self.inner)
    }
}

impl<C: BidirectionalCursor> BidirectionalCursor for Reversed<C> {
    #[inline]
    fn retreat(&mut self) {
        self.inner.advance();
    }

    #[inline]
    fn retreat_by(&mut self, n: usize) {
        self.inner.advance_by(n);
    }
}

impl<C: RandomAccessCursor> RandomAccessCursor for Reversed<C> {
    #[inline]
    fn jump(&mut self, offset: isize) {
        self.inner.jump(-offset);
    }

    #[inline]
    fn offset_from(&self, origin: &Self) -> isize {
        origin.inner.offset_from(&self.inner)
    }
}
