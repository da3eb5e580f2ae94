//! Double-ended queues implemented with a ring buffer.
//!
//! This queue has O(1) inserts and removals at both ends of the sequence,
//! and O(1) indexing like a vector. Interior insertion and erasure work the
//! same way as on [`Vector`](crate::Vector): new elements are constructed
//! after the last element and rotated into place, doomed elements are rotated
//! past the end and dropped there. The rotations run on [`RingCursor`]s, which
//! address logical positions and hide the wraparound point.
//!
//! As with vectors, an [`InlineDeque<T, N>`] dereferences to the
//! capacity-erased [`Deque<T>`], which implements every operation that
//! changes the length.
//!
//! Cursors are handed out through `&mut self` only; through a shared
//! reference, `iter()` and `iter().rev()` serve the same purpose.

use crate::algorithm::{self, rotate_tail_to};
use crate::cursor::{distance, Reversed, RingCursor};
use crate::memory;
use crate::storage::{normalize_range, ErasedStorage, InlineStorage, Storage};
use crate::vector::InlineVector;
use crate::{clamp_to_free, CapacityError};

use core::cmp::Ordering;
use core::fmt::{self, Debug, Formatter};
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem::MaybeUninit;
use core::ops::{Deref, DerefMut, Index, IndexMut, RangeBounds};
use core::ptr;
use core::slice;

/// A double-ended queue implemented with a ring buffer of constant capacity.
///
/// The "default" usage of this type as a queue is to use
/// [`push_back`](Deque::push_back) to add to the queue, and
/// [`pop_front`](Deque::pop_front) to remove from it.
///
/// Since `Deque` is a ring buffer, its elements are not necessarily
/// contiguous in memory. If you want to access the elements as a single
/// slice, such as for efficient sorting, you can use
/// [`make_contiguous`](Deque::make_contiguous).
///
/// # Examples
/// ```
/// let mut deque = fixcap::InlineDeque::<i32, 3>::new();
/// deque.push_back(1);
/// deque.push_back(2);
/// deque.push_back(3);
/// assert_eq!(deque.pop_front(), Some(1));
/// deque.push_back(4);
/// assert_eq!(deque, [2, 3, 4]);
/// ```
pub struct Deque<T, S: ?Sized + Storage<T> = ErasedStorage<T>> {
    len: usize,
    head: usize,
    tail: usize,
    elem: PhantomData<T>,
    buf: S,
}

/// A double-ended queue with inline storage for `N` elements.
pub type InlineDeque<T, const N: usize> = Deque<T, InlineStorage<T, N>>;

impl<T, S: ?Sized + Storage<T>> Deque<T, S> {
    /// Returns the number of elements the deque can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the largest length the deque can reach, which is its capacity.
    #[inline]
    pub fn max_size(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the number of elements in the deque.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the deque contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the deque contains the maximum number of elements.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.buf.capacity()
    }

    /// Maps the logical position `pos < capacity` to a slot index.
    #[inline]
    fn index_at(&self, pos: usize) -> usize {
        debug_assert!(pos < self.capacity());
        let rollover = self.capacity() - self.head;
        if pos < rollover {
            self.head + pos
        } else {
            pos - rollover
        }
    }

    #[inline]
    fn increment_index(&self, index: usize) -> usize {
        if index + 1 == self.capacity() {
            0
        } else {
            index + 1
        }
    }

    #[inline]
    fn decrement_index(&self, index: usize) -> usize {
        if index == 0 {
            self.capacity() - 1
        } else {
            index - 1
        }
    }

    #[inline]
    fn set_len(&mut self, len: usize) {
        self.len = len;
        self.tail = if len == 0 {
            self.decrement_index(self.head)
        } else {
            self.index_at(len - 1)
        };
    }

    #[inline]
    fn cursor_at(&mut self, pos: usize) -> RingCursor<T> {
        let capacity = self.capacity();
        let head = self.head;
        RingCursor::new(self.buf.get_mut_ptr(0), capacity, head, pos)
    }

    /// Returns a reference to the element at `index`, or [`None`] if the
    /// index is out of bounds.
    ///
    /// Element at index 0 is the front of the queue.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }

        unsafe { Some(&*self.buf.get_ptr(self.index_at(index))) }
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if
    /// the index is out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }

        let slot = self.index_at(index);
        unsafe { Some(&mut *self.buf.get_mut_ptr(slot)) }
    }

    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    /// `index` must be less than `len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        &*self.buf.get_ptr(self.index_at(index))
    }

    /// Returns a reference to the element at `index` modulo the capacity, or
    /// [`None`] if that position holds no element.
    ///
    /// # Examples
    /// ```
    /// let mut deque = fixcap::InlineDeque::<u8, 3>::new();
    /// deque.push_back(1);
    /// deque.push_back(2);
    /// assert_eq!(deque.at(4), Some(&2));
    /// assert_eq!(deque.at(2), None);
    /// deque.push_front(0);
    /// assert_eq!(deque.at(deque.len()), deque.front());
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Option<&T> {
        self.get(index % self.capacity())
    }

    /// Returns a mutable reference to the element at `index` modulo the
    /// capacity, or [`None`] if that position holds no element.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        let index = index % self.capacity();
        self.get_mut(index)
    }

    /// Returns a reference to the front element, or [`None`] if the deque is empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns a mutable reference to the front element, or [`None`] if the
    /// deque is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    /// Returns a reference to the back element, or [`None`] if the deque is empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }

        unsafe { Some(&*self.buf.get_ptr(self.tail)) }
    }

    /// Returns a mutable reference to the back element, or [`None`] if the
    /// deque is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        if self.is_empty() {
            return None;
        }

        let tail = self.tail;
        unsafe { Some(&mut *self.buf.get_mut_ptr(tail)) }
    }

    /// Returns `true` if the deque contains an element equal to the given value.
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        let (a, b) = self.as_slices();
        a.contains(x) || b.contains(x)
    }

    /// Swaps elements at indices `i` and `j`.
    ///
    /// `i` and `j` may be equal.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    #[track_caller]
    pub fn swap(&mut self, i: usize, j: usize) {
        #[cold]
        #[inline(never)]
        #[track_caller]
        fn assert_failed(index: usize, len: usize) -> ! {
            panic!("swap index (is {}) should be < len (is {})", index, len);
        }

        let len = self.len;
        if i >= len {
            assert_failed(i, len);
        }
        if j >= len {
            assert_failed(j, len);
        }

        let (i, j) = (self.index_at(i), self.index_at(j));
        unsafe {
            ptr::swap(self.buf.get_mut_ptr(i), self.buf.get_mut_ptr(j));
        }
    }

    /// Returns a pair of slices which contain, in order, the contents of the deque.
    ///
    /// # Examples
    /// ```
    /// let mut deque = fixcap::InlineDeque::<i32, 4>::new();
    /// deque.push_back(2);
    /// deque.push_back(1);
    /// deque.push_front(3);
    /// assert_eq!(deque.as_slices(), (&[3][..], &[2, 1][..]));
    /// ```
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let first_len = usize::min(self.len, self.capacity() - self.head);
        unsafe {
            (
                slice::from_raw_parts(self.buf.get_ptr(self.head), first_len),
                slice::from_raw_parts(self.buf.get_ptr(0), self.len - first_len),
            )
        }
    }

    /// Returns a pair of mutable slices which contain, in order, the contents
    /// of the deque.
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let len = self.len;
        let head = self.head;
        let first_len = usize::min(len, self.capacity() - head);

        let (wrapped, front) = self.buf.slots_mut().split_at_mut(head);
        unsafe {
            (
                slice::from_raw_parts_mut(front.as_mut_ptr().cast::<T>(), first_len),
                slice::from_raw_parts_mut(wrapped.as_mut_ptr().cast::<T>(), len - first_len),
            )
        }
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    /// ```
    /// let mut deque = fixcap::InlineDeque::<i32, 4>::new();
    /// deque.push_back(5);
    /// deque.push_back(3);
    /// deque.push_front(4);
    ///
    /// let mut it = deque.iter();
    /// assert_eq!(it.next(), Some(&4));
    /// assert_eq!(it.next_back(), Some(&3));
    /// assert_eq!(it.next(), Some(&5));
    /// assert!(it.next().is_none());
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        let (front, back) = self.as_slices();
        Iter {
            front: front.iter(),
            back: back.iter(),
        }
    }

    /// Returns a front-to-back iterator that returns mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (front, back) = self.as_mut_slices();
        IterMut {
            front: front.iter_mut(),
            back: back.iter_mut(),
        }
    }

    /// Returns a cursor at the front element.
    ///
    /// Cursors do not borrow the deque; they are invalidated by any operation
    /// that changes its length or moves its front.
    #[inline]
    pub fn begin(&mut self) -> RingCursor<T> {
        self.cursor_at(0)
    }

    /// Returns a cursor one past the back element.
    #[inline]
    pub fn end(&mut self) -> RingCursor<T> {
        let len = self.len;
        self.cursor_at(len)
    }

    /// Returns a reversed cursor at the back element.
    #[inline]
    pub fn rbegin(&mut self) -> Reversed<RingCursor<T>> {
        Reversed::new(self.end())
    }

    /// Returns a reversed cursor one before the front element.
    #[inline]
    pub fn rend(&mut self) -> Reversed<RingCursor<T>> {
        Reversed::new(self.begin())
    }
}

impl<T> Deque<T> {
    /// Appends an element to the back of the deque.
    ///
    /// If the deque is already full, `value` is dropped instead.
    #[inline]
    pub fn push_back(&mut self, value: T) {
        if self.try_push_back(value).is_err() {
            saturated!("push_back: deque is full (capacity {})", self.capacity());
        }
    }

    /// Appends an element to the back of the deque, returning `Err(value)` if
    /// it is already at capacity.
    pub fn try_push_back(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }

        let tail = self.increment_index(self.tail);
        unsafe {
            memory::construct_at(self.buf.get_mut_ptr(tail), value);
        }
        self.tail = tail;
        self.len += 1;
        Ok(())
    }

    /// Prepends an element to the front of the deque.
    ///
    /// If the deque is already full, `value` is dropped instead.
    ///
    /// # Examples
    /// ```
    /// let mut deque = fixcap::InlineDeque::<i32, 2>::new();
    /// deque.push_front(1);
    /// deque.push_front(2);
    /// deque.push_front(3);
    /// assert_eq!(deque, [2, 1]);
    /// ```
    #[inline]
    pub fn push_front(&mut self, value: T) {
        if self.try_push_front(value).is_err() {
            saturated!("push_front: deque is full (capacity {})", self.capacity());
        }
    }

    /// Prepends an element to the front of the deque, returning `Err(value)`
    /// if it is already at capacity.
    pub fn try_push_front(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }

        let head = self.decrement_index(self.head);
        unsafe {
            memory::construct_at(self.buf.get_mut_ptr(head), value);
        }
        self.head = head;
        self.len += 1;
        Ok(())
    }

    /// Removes the first element and returns it, or [`None`] if the deque is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let head = self.head;
        self.head = self.increment_index(head);
        self.len -= 1;
        unsafe { Some(self.buf.get_ptr(head).read()) }
    }

    /// Removes the last element and returns it, or [`None`] if the deque is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        let tail = self.tail;
        self.tail = self.decrement_index(tail);
        self.len -= 1;
        unsafe { Some(self.buf.get_ptr(tail).read()) }
    }

    /// Shortens the deque, keeping the first `len` elements and dropping the rest.
    ///
    /// If `len` is greater than or equal to the deque's current length, this
    /// has no effect.
    pub fn truncate(&mut self, len: usize) {
        let old_len = self.len;
        if len >= old_len {
            return;
        }

        let first = self.cursor_at(len);
        let last = self.cursor_at(old_len);
        self.set_len(len);
        unsafe {
            memory::destroy(first, last);
        }
    }

    /// Clears the deque, dropping all values.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Resizes the deque in place so that its length equals `new_len`.
    ///
    /// If `new_len` is greater than the current length, the deque is extended
    /// at the back by clones of `value`, up to its capacity. Otherwise, the
    /// deque is truncated.
    pub fn resize(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        let len = self.len;
        if new_len <= len {
            self.truncate(new_len);
            return;
        }

        let count = clamp_to_free(new_len - len, self.capacity() - len, "resize");
        unsafe {
            memory::uninitialized_fill_n(self.cursor_at(len), count, &value);
        }
        self.set_len(len + count);
    }

    /// Resizes the deque in place so that its length equals `new_len`,
    /// filling new positions with `T::default()`.
    pub fn resize_default(&mut self, new_len: usize)
    where
        T: Default,
    {
        let len = self.len;
        if new_len <= len {
            self.truncate(new_len);
            return;
        }

        let count = clamp_to_free(new_len - len, self.capacity() - len, "resize_default");
        unsafe {
            memory::uninitialized_value_construct_n(self.cursor_at(len), count);
        }
        self.set_len(len + count);
    }

    /// Inserts an element at position `index`, shifting all elements after
    /// it towards the back.
    ///
    /// If the deque is already full, `value` is dropped instead.
    ///
    /// # Panics
    /// Panics if `index > len`.
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) {
        if self.try_insert(index, value).is_err() {
            saturated!("insert: deque is full (capacity {})", self.capacity());
        }
    }

    /// Inserts an element at position `index`, or returns `Err(value)` if the
    /// deque is full.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// let mut deque = fixcap::InlineDeque::<char, 3>::new();
    /// deque.push_back('a');
    /// deque.push_back('c');
    /// assert_eq!(deque.try_insert(1, 'b'), Ok(()));
    /// assert_eq!(deque.try_insert(1, 'd'), Err('d'));
    /// assert_eq!(deque, ['a', 'b', 'c']);
    /// ```
    #[track_caller]
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), T> {
        #[cold]
        #[inline(never)]
        #[track_caller]
        fn assert_failed(index: usize, len: usize) -> ! {
            panic!(
                "insertion index (is {}) should be <= len (is {})",
                index, len
            );
        }

        let len = self.len;
        if index > len {
            assert_failed(index, len);
        }
        if self.is_full() {
            return Err(value);
        }

        let slot = self.index_at(len);
        unsafe {
            memory::construct_at(self.buf.get_mut_ptr(slot), value);
            self.set_len(len + 1);
            rotate_tail_to(self.cursor_at(index), self.cursor_at(len + 1), 1);
        }
        Ok(())
    }

    /// Inserts `count` clones of `value` at position `index`, returning the
    /// number of elements actually inserted.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// let mut deque = fixcap::InlineDeque::<i32, 4>::new();
    /// deque.push_back(1);
    /// assert_eq!(deque.insert_n(0, 5, &2), 3);
    /// assert_eq!(deque, [2, 2, 2, 1]);
    /// ```
    #[track_caller]
    pub fn insert_n(&mut self, index: usize, count: usize, value: &T) -> usize
    where
        T: Clone,
    {
        #[cold]
        #[inline(never)]
        #[track_caller]
        fn assert_failed(index: usize, len: usize) -> ! {
            panic!(
                "insertion index (is {}) should be <= len (is {})",
                index, len
            );
        }

        let len = self.len;
        if index > len {
            assert_failed(index, len);
        }

        let count = clamp_to_free(count, self.capacity() - len, "insert_n");
        unsafe {
            memory::uninitialized_fill_n(self.cursor_at(len), count, value);
            self.set_len(len + count);
            rotate_tail_to(self.cursor_at(index), self.cursor_at(len + count), count);
        }
        count
    }

    /// Inserts the elements produced by `iter` at position `index`, keeping
    /// their order, and returns the number of elements inserted.
    ///
    /// Elements that do not fit into the remaining capacity are dropped.
    ///
    /// # Panics
    /// Panics if `index > len`.
    #[track_caller]
    pub fn insert_iter<I: IntoIterator<Item = T>>(&mut self, index: usize, iter: I) -> usize {
        #[cold]
        #[inline(never)]
        #[track_caller]
        fn assert_failed(index: usize, len: usize) -> ! {
            panic!(
                "insertion index (is {}) should be <= len (is {})",
                index, len
            );
        }

        let len = self.len;
        if index > len {
            assert_failed(index, len);
        }

        let count = self.append_iter(iter, "insert_iter");
        unsafe {
            rotate_tail_to(self.cursor_at(index), self.cursor_at(len + count), count);
        }
        count
    }

    /// Clones and inserts all elements of `other` at position `index`,
    /// returning the number of elements inserted.
    ///
    /// # Panics
    /// Panics if `index > len`.
    #[inline]
    #[track_caller]
    pub fn insert_from_slice(&mut self, index: usize, other: &[T]) -> usize
    where
        T: Clone,
    {
        self.insert_iter(index, other.iter().cloned())
    }

    #[cfg_attr(not(feature = "log"), allow(unused_variables))]
    fn append_iter<I: IntoIterator<Item = T>>(&mut self, iter: I, op: &str) -> usize {
        let len = self.len;
        let free = self.capacity() - len;
        let mut iter = iter.into_iter();

        let count = unsafe {
            let first = self.cursor_at(len);
            let last = memory::uninitialized_copy_n(&mut iter, free, first);
            distance(&first, &last)
        };
        self.set_len(len + count);

        if count == free && iter.size_hint().0 > 0 {
            saturated!("{}: deque is full (capacity {})", op, self.capacity());
        }
        count
    }

    /// Removes the element at position `index`, shifting all elements after
    /// it towards the front.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    #[track_caller]
    pub fn erase(&mut self, index: usize) {
        drop(self.remove(index));
    }

    /// Removes and returns the element at position `index`, shifting all
    /// elements after it towards the front.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    #[track_caller]
    pub fn remove(&mut self, index: usize) -> T {
        #[cold]
        #[inline(never)]
        #[track_caller]
        fn assert_failed(index: usize, len: usize) -> ! {
            panic!("removal index (is {}) should be < len (is {})", index, len);
        }

        let len = self.len;
        if index >= len {
            assert_failed(index, len);
        }

        unsafe {
            algorithm::rotate(
                self.cursor_at(index),
                self.cursor_at(index + 1),
                self.cursor_at(len),
            );
            let tail = self.tail;
            self.set_len(len - 1);
            self.buf.get_ptr(tail).read()
        }
    }

    /// Removes the elements in `range`, shifting all elements after it
    /// towards the front.
    ///
    /// # Panics
    /// Panics if the range starts after it ends, or ends after the last element.
    ///
    /// # Examples
    /// ```
    /// let mut deque: fixcap::InlineDeque<u32, 6> = (1..=6).collect();
    /// deque.erase_range(1..4);
    /// assert_eq!(deque, [1, 5, 6]);
    /// ```
    #[track_caller]
    pub fn erase_range<R: RangeBounds<usize>>(&mut self, range: R) {
        let len = self.len;
        let range = normalize_range(range, len);
        unsafe {
            algorithm::rotate(
                self.cursor_at(range.start),
                self.cursor_at(range.end),
                self.cursor_at(len),
            );
        }
        self.truncate(len - range.len());
    }

    /// Removes an element from anywhere in the deque and returns it,
    /// replacing it with the back element.
    ///
    /// This does not preserve ordering, but is O(1).
    ///
    /// # Panics
    /// Panics if `index >= len`.
    #[track_caller]
    pub fn swap_remove(&mut self, index: usize) -> T {
        #[cold]
        #[inline(never)]
        #[track_caller]
        fn assert_failed(index: usize, len: usize) -> ! {
            panic!(
                "swap_remove index (is {}) should be < len (is {})",
                index, len
            );
        }

        let len = self.len;
        if index >= len {
            assert_failed(index, len);
        }

        let hole = self.index_at(index);
        let tail = self.tail;
        unsafe {
            let last = self.buf.get_ptr(tail).read();
            self.set_len(len - 1);
            ptr::replace(self.buf.get_mut_ptr(hole), last)
        }
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// Each element is visited exactly once, front to back, and the retained
    /// elements keep their order.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        let len = self.len;
        let mut del = 0;
        for pos in 0..len {
            let slot = self.index_at(pos);
            let p = self.buf.get_mut_ptr(slot);
            if !f(unsafe { &*p }) {
                del += 1;
            } else if del > 0 {
                let dst = self.index_at(pos - del);
                unsafe {
                    ptr::swap(p, self.buf.get_mut_ptr(dst));
                }
            }
        }
        self.truncate(len - del);
    }

    /// Replaces the contents of the deque with `count` clones of `value`,
    /// clamped to the capacity.
    pub fn assign_n(&mut self, count: usize, value: &T)
    where
        T: Clone,
    {
        let count = clamp_to_free(count, self.capacity(), "assign_n");
        self.truncate(count);

        let kept = self.len;
        unsafe {
            algorithm::fill(self.cursor_at(0), self.cursor_at(kept), value);
            memory::uninitialized_fill_n(self.cursor_at(kept), count - kept, value);
        }
        self.set_len(count);
    }

    /// Replaces the contents of the deque with the elements produced by
    /// `iter`, dropping those that exceed the capacity.
    pub fn assign_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.clear();
        self.append_iter(iter, "assign_iter");
    }

    /// Replaces the contents of the deque with converted clones of the
    /// elements of `other`.
    pub fn assign_from<U, S>(&mut self, other: &Deque<U, S>)
    where
        U: Clone + Into<T>,
        S: ?Sized + Storage<U>,
    {
        self.assign_iter(other.iter().cloned().map(Into::into));
    }

    /// Clones and appends all elements of `other` to the back, dropping those
    /// that exceed the capacity.
    #[inline]
    pub fn extend_from_slice(&mut self, other: &[T])
    where
        T: Clone,
    {
        self.append_iter(other.iter().cloned(), "extend_from_slice");
    }

    /// Clones and appends all elements of `other` to the back, or returns an
    /// error without modifying the deque if they do not all fit.
    pub fn try_extend_from_slice(&mut self, other: &[T]) -> crate::Result<()>
    where
        T: Clone,
    {
        if self.capacity() - self.len < other.len() {
            return Err(CapacityError);
        }

        self.append_iter(other.iter().cloned(), "try_extend_from_slice");
        Ok(())
    }

    /// Rearranges the internal storage of the deque so it is one contiguous
    /// slice, which is then returned.
    ///
    /// This does not change the order of the elements.
    ///
    /// # Examples
    /// ```
    /// let mut deque = fixcap::InlineDeque::<i32, 4>::new();
    /// deque.push_back(2);
    /// deque.push_back(1);
    /// deque.push_front(3);
    ///
    /// deque.make_contiguous().sort();
    /// assert_eq!(deque.as_slices(), (&[1, 2, 3][..], &[][..]));
    /// ```
    pub fn make_contiguous(&mut self) -> &mut [T] {
        let head = self.head;
        if head + self.len > self.capacity() {
            self.buf.slots_mut().rotate_left(head);
            self.head = 0;
            let len = self.len;
            self.set_len(len);
        }

        let (front, _) = self.as_mut_slices();
        front
    }
}

impl<T, const N: usize> Deque<T, InlineStorage<T, N>> {
    const NONZERO_CAPACITY: () = assert!(N > 0, "deque capacity must be at least 1");

    /// Constructs a new, empty deque.
    ///
    /// A capacity of zero is rejected at compile time:
    ///
    /// ```compile_fail
    /// let _ = fixcap::InlineDeque::<u8, 0>::new();
    /// ```
    #[inline]
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NONZERO_CAPACITY;
        Deque {
            len: 0,
            head: 0,
            tail: N - 1,
            elem: PhantomData,
            #[allow(clippy::uninit_assumed_init)]
            buf: unsafe { MaybeUninit::uninit().assume_init() },
        }
    }

    /// Constructs a deque holding `len` default values, clamped to the capacity.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut result = Self::new();
        result.resize_default(len);
        result
    }

    /// Constructs a deque holding `count` clones of `value`, clamped to the
    /// capacity.
    pub fn from_value(count: usize, value: &T) -> Self
    where
        T: Clone,
    {
        let mut result = Self::new();
        result.assign_n(count, value);
        result
    }

    /// Constructs a deque holding clones of the elements of `values`,
    /// dropping those that exceed the capacity.
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        let mut result = Self::new();
        result.extend_from_slice(values);
        result
    }
}

impl<T, const N: usize> Default for Deque<T, InlineStorage<T, N>> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for Deque<T, InlineStorage<T, N>> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign_from(source);
    }
}

impl<T, U, S, const N: usize> From<&Deque<U, S>> for Deque<T, InlineStorage<T, N>>
where
    U: Clone + Into<T>,
    S: ?Sized + Storage<U>,
{
    /// Converts clones of the elements of `other`, dropping those that exceed
    /// the capacity.
    fn from(other: &Deque<U, S>) -> Self {
        let mut result = Self::new();
        result.assign_from(other);
        result
    }
}

impl<T, const N: usize> From<InlineVector<T, N>> for Deque<T, InlineStorage<T, N>> {
    /// Moves the elements of a vector of the same capacity into a new deque.
    ///
    /// # Examples
    /// ```
    /// let vector = fixcap::InlineVector::<u8, 4>::from_slice(&[1, 2, 3]);
    /// let deque = fixcap::InlineDeque::from(vector);
    /// assert_eq!(deque.as_slices(), (&[1, 2, 3][..], &[][..]));
    /// ```
    fn from(vector: InlineVector<T, N>) -> Self {
        vector.into_iter().collect()
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for Deque<T, InlineStorage<T, N>> {
    type Error = CapacityError;

    /// Clones the elements of `values`, failing if they do not all fit.
    fn try_from(values: &[T]) -> crate::Result<Self> {
        let mut result = Self::new();
        result.try_extend_from_slice(values)?;
        Ok(result)
    }
}

impl<T, const N: usize> FromIterator<T> for Deque<T, InlineStorage<T, N>> {
    /// Collects the elements of `iter`, dropping those that exceed the capacity.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut result = Self::new();
        result.extend(iter);
        result
    }
}

impl<T, const N: usize> Deref for Deque<T, InlineStorage<T, N>> {
    type Target = Deque<T>;

    #[inline]
    fn deref(&self) -> &Deque<T> {
        self
    }
}

impl<T, const N: usize> DerefMut for Deque<T, InlineStorage<T, N>> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Deque<T> {
        self
    }
}

impl<T, S: ?Sized + Storage<T>> Drop for Deque<T, S> {
    fn drop(&mut self) {
        let len = self.len;
        unsafe {
            memory::destroy_n(self.cursor_at(0), len);
        }
    }
}

impl<T, S: ?Sized + Storage<T>> Index<usize> for Deque<T, S> {
    type Output = T;

    #[track_caller]
    fn index(&self, index: usize) -> &T {
        #[cold]
        #[inline(never)]
        #[track_caller]
        fn assert_failed(index: usize, len: usize) -> ! {
            panic!("index out of bounds: the len is {} but the index is {}", len, index);
        }

        match self.get(index) {
            Some(x) => x,
            None => assert_failed(index, self.len),
        }
    }
}

impl<T, S: ?Sized + Storage<T>> IndexMut<usize> for Deque<T, S> {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut T {
        #[cold]
        #[inline(never)]
        #[track_caller]
        fn assert_failed(index: usize, len: usize) -> ! {
            panic!("index out of bounds: the len is {} but the index is {}", len, index);
        }

        let len = self.len;
        match self.get_mut(index) {
            Some(x) => x,
            None => assert_failed(index, len),
        }
    }
}

impl<T: Debug, S: ?Sized + Storage<T>> Debug for Deque<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Hash, S: ?Sized + Storage<T>> Hash for Deque<T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for x in self.iter() {
            x.hash(state);
        }
    }
}

impl<T, U, S1, S2> PartialEq<Deque<U, S2>> for Deque<T, S1>
where
    T: PartialEq<U>,
    S1: ?Sized + Storage<T>,
    S2: ?Sized + Storage<U>,
{
    #[inline]
    fn eq(&self, other: &Deque<U, S2>) -> bool {
        self.len == other.len && algorithm::equal(self.iter(), other.iter())
    }
}

impl<T, U, S, const M: usize> PartialEq<[U; M]> for Deque<T, S>
where
    T: PartialEq<U>,
    S: ?Sized + Storage<T>,
{
    #[inline]
    fn eq(&self, other: &[U; M]) -> bool {
        self.len == M && algorithm::equal(self.iter(), other.iter())
    }
}

impl<T, U, S> PartialEq<[U]> for Deque<T, S>
where
    T: PartialEq<U>,
    S: ?Sized + Storage<T>,
{
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.len == other.len() && algorithm::equal(self.iter(), other.iter())
    }
}

impl<T, U, S> PartialEq<&[U]> for Deque<T, S>
where
    T: PartialEq<U>,
    S: ?Sized + Storage<T>,
{
    #[inline]
    fn eq(&self, other: &&[U]) -> bool {
        *self == **other
    }
}

impl<T: Eq, S: ?Sized + Storage<T>> Eq for Deque<T, S> {}

impl<T, U, S1, S2> PartialOrd<Deque<U, S2>> for Deque<T, S1>
where
    T: PartialOrd<U>,
    S1: ?Sized + Storage<T>,
    S2: ?Sized + Storage<U>,
{
    #[inline]
    fn partial_cmp(&self, other: &Deque<U, S2>) -> Option<Ordering> {
        algorithm::lexicographical_ordering(self.iter(), other.iter())
    }
}

impl<T: Ord, S: ?Sized + Storage<T>> Ord for Deque<T, S> {
    fn cmp(&self, other: &Self) -> Ordering {
        if algorithm::lexicographical_compare(self.iter(), other.iter()) {
            Ordering::Less
        } else if algorithm::lexicographical_compare(other.iter(), self.iter()) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl<T> Extend<T> for Deque<T> {
    /// Appends the elements of `iter` to the back, dropping those that exceed
    /// the capacity.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append_iter(iter, "extend");
    }
}

impl<T, const N: usize> Extend<T> for Deque<T, InlineStorage<T, N>> {
    /// Appends the elements of `iter` to the back, dropping those that exceed
    /// the capacity.
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        Extend::extend(&mut **self, iter);
    }
}

/// An iterator over the elements of a deque.
///
/// This `struct` is created by the [`iter`](Deque::iter) method on [`Deque`].
pub struct Iter<'a, T> {
    front: slice::Iter<'a, T>,
    back: slice::Iter<'a, T>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            front: self.front.clone(),
            back: self.back.clone(),
        }
    }
}

impl<T: Debug> Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter")
            .field(&self.front.as_slice())
            .field(&self.back.as_slice())
            .finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.front.next().or_else(|| self.back.next())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.front.len() + self.back.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        self.back.next_back().or_else(|| self.front.next_back())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// A mutable iterator over the elements of a deque.
///
/// This `struct` is created by the [`iter_mut`](Deque::iter_mut) method on [`Deque`].
pub struct IterMut<'a, T> {
    front: slice::IterMut<'a, T>,
    back: slice::IterMut<'a, T>,
}

impl<T: Debug> Debug for IterMut<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IterMut")
            .field(&self.front.as_slice())
            .field(&self.back.as_slice())
            .finish()
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        match self.front.next() {
            Some(x) => Some(x),
            None => self.back.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.front.len() + self.back.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        match self.back.next_back() {
            Some(x) => Some(x),
            None => self.front.next_back(),
        }
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator over the elements of an [`InlineDeque`].
///
/// This `struct` is created by the `into_iter` method on [`InlineDeque`]
/// (provided by the [`IntoIterator`] trait).
pub struct IntoIter<T, const N: usize> {
    inner: InlineDeque<T, N>,
}

impl<T: Debug, const N: usize> Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.inner).finish()
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.pop_back()
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T, const N: usize> IntoIterator for Deque<T, InlineStorage<T, N>> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    /// Converts the deque into a front-to-back iterator yielding elements by value.
    fn into_iter(self) -> IntoIter<T, N> {
        IntoIter { inner: self }
    }
}

impl<'a, T, S: ?Sized + Storage<T>> IntoIterator for &'a Deque<T, S> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T, S: ?Sized + Storage<T>> IntoIterator for &'a mut Deque<T, S> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn push_pop_at_both_ends() {
        let mut deque = InlineDeque::<i32, 8>::new();
        deque.push_back(1);
        assert_eq!(deque.insert_n(0, 3, &2), 3);
        assert_eq!(deque, [2, 2, 2, 1]);

        deque.push_front(4);
        deque.push_back(8);
        deque.push_front(16);
        deque.push_back(32);
        assert!(deque.is_full());

        deque.push_front(64);
        assert_eq!(deque, [16, 4, 2, 2, 2, 1, 8, 32]);
        assert_eq!(deque.len(), 8);
        assert_eq!(deque.try_push_back(64), Err(64));
        assert_eq!(deque.front(), Some(&16));
        assert_eq!(deque.back(), Some(&32));

        assert_eq!(deque.pop_front(), Some(16));
        assert_eq!(deque.pop_back(), Some(32));
        assert_eq!(deque, [4, 2, 2, 2, 1, 8]);
    }

    #[test]
    fn saturation_leaves_source_untouched() {
        let mut src = 0..10;
        let mut deque = InlineDeque::<u32, 3>::new();
        deque.push_back(100);
        assert_eq!(deque.pop_front(), Some(100));
        deque.extend(&mut src);
        assert_eq!(deque, [0, 1, 2]);
        assert_eq!(src.next(), Some(3));

        let mut src = 10..20;
        assert_eq!(deque.pop_back(), Some(2));
        assert_eq!(deque.insert_iter(1, &mut src), 1);
        assert_eq!(deque, [0, 10, 1]);
        assert_eq!(src.next(), Some(11));
    }

    #[test]
    fn wraps_around_the_ring() {
        let mut deque = InlineDeque::<i32, 3>::new();
        deque.push_back(1);
        deque.push_back(2);
        deque.push_back(3);
        assert_eq!(deque.pop_front(), Some(1));
        deque.push_back(4);

        assert_eq!(deque, [2, 3, 4]);
        assert_eq!(deque.as_slices(), (&[2, 3][..], &[4][..]));
        assert_eq!(deque.get(2), Some(&4));
        assert_eq!(deque.at(3), Some(&2));
        assert_eq!(deque.at(deque.len()), deque.front());
    }

    #[test]
    fn ring_index_helpers() {
        let mut deque = InlineDeque::<u8, 4>::new();
        assert_eq!(deque.tail, deque.decrement_index(deque.head));
        assert_eq!(deque.increment_index(3), 0);
        assert_eq!(deque.decrement_index(0), 3);

        deque.push_front(1);
        deque.push_front(2);
        assert_eq!(deque.head, 2);
        assert_eq!(deque.index_at(0), 2);
        assert_eq!(deque.index_at(1), 3);
        assert_eq!(deque.index_at(2), 0);
        assert_eq!(deque.tail, deque.index_at(deque.len() - 1));

        deque.clear();
        assert_eq!(deque.tail, deque.decrement_index(deque.head));
    }

    #[test]
    fn interior_edits_across_wraparound() {
        let mut deque = InlineDeque::<u32, 6>::new();
        for x in [3, 4, 5] {
            deque.push_back(x);
        }
        deque.push_front(2);
        deque.push_front(1);
        assert_eq!(deque.head, 4);

        deque.insert(2, 9);
        assert_eq!(deque, [1, 2, 9, 3, 4, 5]);
        deque.erase(2);
        assert_eq!(deque, [1, 2, 3, 4, 5]);

        assert_eq!(deque.insert_iter(1, [7, 8, 9]), 1);
        assert_eq!(deque, [1, 7, 2, 3, 4, 5]);
        deque.erase_range(..2);
        assert_eq!(deque, [2, 3, 4, 5]);
        assert_eq!(deque.remove(3), 5);
        assert_eq!(deque.swap_remove(0), 2);
        assert_eq!(deque, [4, 3]);

        deque.swap(0, 1);
        assert_eq!(deque, [3, 4]);
        assert!(deque.contains(&4));
        assert!(!deque.contains(&5));
    }

    #[test]
    #[should_panic]
    fn insert_past_the_end_panics() {
        let mut deque = InlineDeque::<u32, 4>::new();
        deque.push_back(1);
        deque.insert(2, 0);
    }

    #[test]
    #[should_panic]
    fn indexing_past_the_end_panics() {
        let deque = InlineDeque::<u32, 4>::from_slice(&[1, 2]);
        let _value = deque[2];
    }

    #[test]
    fn contiguous_views() {
        let mut deque = InlineDeque::<i32, 5>::new();
        for x in 0..5 {
            deque.push_back(x);
        }
        deque.pop_front();
        deque.pop_front();
        deque.push_back(5);
        deque.push_back(6);
        assert_eq!(deque.as_slices(), (&[2, 3, 4][..], &[5, 6][..]));

        {
            let (a, b) = deque.as_mut_slices();
            a[0] = 20;
            b[1] = 60;
        }
        for x in deque.iter_mut() {
            *x += 1;
        }
        assert_eq!(deque, [21, 4, 5, 6, 61]);

        assert_eq!(deque.make_contiguous(), &[21, 4, 5, 6, 61]);
        assert_eq!(deque.as_slices(), (&[21, 4, 5, 6, 61][..], &[][..]));
        assert_eq!(deque.back(), Some(&61));
        deque.push_front(0);
        assert_eq!(deque.len(), 5);
        deque.pop_back();
        deque.push_front(0);
        assert_eq!(deque, [0, 21, 4, 5, 6]);
    }

    #[test]
    fn cursors_address_logical_positions() {
        use crate::cursor::Cursor;

        let mut deque = InlineDeque::<u32, 4>::new();
        deque.push_back(3);
        deque.push_front(2);
        deque.push_front(1);

        let (first, last) = (deque.begin(), deque.end());
        assert_eq!(distance(&first, &last), 3);
        assert_eq!(unsafe { *deque.rbegin().as_ptr() }, 3);
        assert_eq!(distance(&deque.rbegin(), &deque.rend()), 3);

        unsafe { algorithm::reverse(first, last) };
        assert_eq!(deque, [3, 2, 1]);
    }

    #[test]
    fn resize_and_assign() {
        let mut deque = InlineDeque::<u32, 4>::new();
        deque.push_front(1);
        deque.resize(6, 7);
        assert_eq!(deque, [1, 7, 7, 7]);
        deque.resize(1, 0);
        assert_eq!(deque, [1]);
        deque.resize_default(3);
        assert_eq!(deque, [1, 0, 0]);

        deque.assign_n(2, &5);
        assert_eq!(deque, [5, 5]);
        deque.assign_iter(10..20);
        assert_eq!(deque, [10, 11, 12, 13]);
        deque.retain(|x| x % 2 == 1);
        assert_eq!(deque, [11, 13]);

        deque.extend_from_slice(&[1, 2, 3]);
        assert_eq!(deque, [11, 13, 1, 2]);
        deque.truncate(2);
        assert_eq!(deque.try_extend_from_slice(&[1, 2, 3]), Err(CapacityError));
        assert!(deque.try_extend_from_slice(&[1, 2]).is_ok());
        assert_eq!(deque, [11, 13, 1, 2]);
    }

    #[test]
    fn construction_and_conversion() {
        let deque = InlineDeque::<u8, 3>::with_len(5);
        assert_eq!(deque, [0, 0, 0]);
        let deque = InlineDeque::<u8, 3>::from_value(2, &9);
        assert_eq!(deque, [9, 9]);

        let wide = InlineDeque::<u32, 5>::from(&*deque);
        assert_eq!(wide, [9u32, 9]);
        assert!(InlineDeque::<u8, 1>::try_from(&[1u8, 2][..]).is_err());

        let vector = InlineVector::<u8, 3>::from_slice(&[1, 2, 3]);
        let from_vector = InlineDeque::from(vector);
        assert_eq!(from_vector, [1, 2, 3]);

        let mut copy = InlineDeque::<u8, 3>::new();
        copy.clone_from(&from_vector);
        assert_eq!(copy, from_vector);
        assert_eq!(from_vector.clone(), from_vector);
        assert!(deque > from_vector);
        assert_eq!(from_vector.cmp(&copy), Ordering::Equal);
    }

    #[test]
    fn hashes_like_an_equal_vector() {
        use core::hash::{BuildHasher, BuildHasherDefault};
        use rustc_hash::FxHasher;

        let build = BuildHasherDefault::<FxHasher>::default();

        let mut deque = InlineDeque::<u32, 4>::new();
        deque.push_back(2);
        deque.push_back(3);
        deque.push_front(1);
        let vector = InlineVector::<u32, 8>::from_slice(&[1, 2, 3]);

        assert_eq!(build.hash_one(&deque), build.hash_one(&vector));
        deque.pop_back();
        assert_ne!(build.hash_one(&deque), build.hash_one(&vector));
    }

    #[test]
    fn formats_as_a_list() {
        use std::format;

        let mut deque = InlineDeque::<u32, 3>::new();
        deque.push_back(2);
        deque.push_front(1);
        assert_eq!(format!("{:?}", deque), "[1, 2]");
    }

    #[test]
    fn elements_are_dropped_exactly_once() {
        let drop_count = DropCounter::new();
        {
            let mut deque = InlineDeque::<Droppable<'_, u32>, 4>::new();
            for i in 0..3 {
                deque.push_front(drop_count.new_droppable(i));
            }
            deque.push_back(drop_count.new_droppable(3));
            deque.push_back(drop_count.new_droppable(4));
            assert_eq!(drop_count.dropped(), 1);

            drop(deque.pop_front());
            assert_eq!(drop_count.dropped(), 2);

            deque.erase(1);
            assert_eq!(drop_count.dropped(), 3);

            let proto = drop_count.new_droppable(9);
            assert_eq!(deque.insert_n(1, 4, &proto), 2);
            drop(proto);
            assert_eq!(drop_count.dropped(), 4);
            assert!(deque.is_full());

            deque.truncate(1);
            assert_eq!(drop_count.dropped(), 7);
        }
        assert_eq!(drop_count.dropped(), 8);

        let drop_count = DropCounter::new();
        let mut deque = InlineDeque::<Droppable<'_, u32>, 4>::new();
        for i in 0..4 {
            deque.push_back(drop_count.new_droppable(i));
        }
        let mut iter = deque.into_iter();
        assert_eq!(iter.next().unwrap().value, 0);
        assert_eq!(iter.next_back().unwrap().value, 3);
        assert_eq!(drop_count.dropped(), 2);
        drop(iter);
        assert_eq!(drop_count.dropped(), 4);
    }

    #[test]
    fn randomized_against_std_vec_deque() {
        use rand::{rngs::SmallRng, Rng, SeedableRng};
        use std::collections::VecDeque;

        let mut rng = SmallRng::from_seed(RNG_SEED);
        let mut ours = InlineDeque::<u32, 12>::new();
        let mut reference: VecDeque<u32> = VecDeque::new();

        for step in 0..3000u32 {
            match rng.gen_range(0..8) {
                0 => {
                    ours.push_back(step);
                    if reference.len() < 12 {
                        reference.push_back(step);
                    }
                }
                1 => {
                    ours.push_front(step);
                    if reference.len() < 12 {
                        reference.push_front(step);
                    }
                }
                2 => assert_eq!(ours.pop_back(), reference.pop_back()),
                3 => assert_eq!(ours.pop_front(), reference.pop_front()),
                4 => {
                    let index = rng.gen_range(0..=reference.len());
                    ours.insert(index, step);
                    if reference.len() < 12 {
                        reference.insert(index, step);
                    }
                }
                5 if !reference.is_empty() => {
                    let index = rng.gen_range(0..reference.len());
                    assert_eq!(ours.remove(index), reference.remove(index).unwrap());
                }
                6 => {
                    let index = rng.gen_range(0..=reference.len());
                    let count = rng.gen_range(0..4);
                    let inserted = ours.insert_n(index, count, &step);
                    assert_eq!(inserted, count.min(12 - reference.len()));
                    for _ in 0..inserted {
                        reference.insert(index, step);
                    }
                }
                _ => {
                    let len = rng.gen_range(0..14);
                    ours.resize(len, step);
                    reference.resize(len.min(12), step);
                }
            }

            assert!(ours.len() <= ours.capacity());
            assert_eq!(ours.len(), reference.len());
            assert!(ours.iter().eq(reference.iter()));
            assert_eq!(ours.back(), reference.back());
        }
    }
}
