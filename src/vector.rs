//! Contiguous bounded vectors.
//!
//! An [`InlineVector<T, N>`] embeds storage for `N` elements and dereferences
//! to the capacity-erased [`Vector<T>`], which in turn dereferences to `[T]`.
//! All operations that change the length are implemented on `Vector<T>`, so
//! they exist once per element type rather than once per capacity.
//!
//! Live elements always occupy the slots `0..len()`; the slots after them are
//! uninitialized. Operations that would exceed the capacity saturate: the
//! elements that do not fit are dropped. Interior insertion constructs the new
//! elements after the last live element and rotates them into place, and
//! erasure rotates the doomed elements to the end before dropping them, so no
//! operation ever needs scratch space.
//!
//! Cursors are handed out through `&mut self` only; through a shared
//! reference, `iter()` and `iter().rev()` serve the same purpose.

use crate::algorithm::{self, rotate_tail_to};
use crate::cursor::{distance, Reversed, SliceCursor};
use crate::memory;
use crate::storage::{normalize_range, ErasedStorage, InlineStorage, Storage};
use crate::{clamp_to_free, CapacityError};

use core::cmp::Ordering;
use core::fmt::{self, Debug, Formatter};
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::mem::{ManuallyDrop, MaybeUninit};
use core::ops::{Deref, DerefMut, Index, IndexMut, RangeBounds};
use core::ptr;
use core::slice::{self, SliceIndex};

/// A contiguous growable array type with constant capacity.
///
/// Generic over the storage type `S`; see the
/// [module-level documentation](crate::vector) for the relationship between
/// [`InlineVector`] and the capacity-erased `Vector<T>`.
///
/// # Examples
/// ```
/// use fixcap::{InlineVector, Vector};
///
/// fn fill_up(v: &mut Vector<u32>) {
///     while !v.is_full() {
///         v.push_back(v.len() as u32);
///     }
/// }
///
/// let mut small = InlineVector::<u32, 3>::new();
/// let mut large = InlineVector::<u32, 8>::new();
/// fill_up(&mut small);
/// fill_up(&mut large);
/// assert_eq!(small, [0, 1, 2]);
/// assert_eq!(large.len(), 8);
/// ```
pub struct Vector<T, S: ?Sized + Storage<T> = ErasedStorage<T>> {
    len: usize,
    elem: PhantomData<T>,
    buf: S,
}

/// A vector with inline storage for `N` elements.
///
/// # Examples
/// ```
/// let mut v = fixcap::InlineVector::<char, 4>::new();
/// v.push_back('a');
/// v.insert(0, 'b');
/// assert_eq!(v, ['b', 'a']);
/// assert_eq!(v.capacity(), 4);
/// ```
pub type InlineVector<T, const N: usize> = Vector<T, InlineStorage<T, N>>;

impl<T, S: ?Sized + Storage<T>> Vector<T, S> {
    /// Returns the number of elements the vector can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the largest length the vector can reach, which is its capacity.
    #[inline]
    pub fn max_size(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the number of elements in the vector, also referred to as its *length*.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the vector contains the maximum number of elements.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.buf.capacity()
    }

    /// Returns a raw pointer to the vector's buffer.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.get_ptr(0)
    }

    /// Returns a raw mutable pointer to the vector's buffer.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.get_mut_ptr(0)
    }

    /// Extracts a slice containing the entire vector.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.as_ptr(), self.len) }
    }

    /// Extracts a mutable slice of the entire vector.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        unsafe { slice::from_raw_parts_mut(self.as_mut_ptr(), len) }
    }

    /// Returns a reference to the element at `index`, or [`None`] if the
    /// index is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }

    /// Returns a mutable reference to the element at `index`, or [`None`] if
    /// the index is out of bounds.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(index)
    }

    /// Returns a reference to the element at `index` modulo the capacity, or
    /// [`None`] if that slot holds no element.
    ///
    /// Indices past the capacity wrap around instead of being rejected, so
    /// `at(capacity())` refers to the first element.
    ///
    /// # Examples
    /// ```
    /// let v = fixcap::InlineVector::<u8, 4>::from_slice(&[1, 2, 3]);
    /// assert_eq!(v.at(1), Some(&2));
    /// assert_eq!(v.at(3), None);
    /// assert_eq!(v.at(5), Some(&2));
    /// ```
    #[inline]
    pub fn at(&self, index: usize) -> Option<&T> {
        self.get(index % self.capacity())
    }

    /// Returns a mutable reference to the element at `index` modulo the
    /// capacity, or [`None`] if that slot holds no element.
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Option<&mut T> {
        let index = index % self.capacity();
        self.get_mut(index)
    }

    /// Returns a reference to the first element, or [`None`] if the vector is empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns a mutable reference to the first element, or [`None`] if the
    /// vector is empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns a reference to the last element, or [`None`] if the vector is empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns a mutable reference to the last element, or [`None`] if the
    /// vector is empty.
    #[inline]
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Returns an iterator over the elements, front to back.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator that allows modifying each element.
    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    #[inline]
    fn cursor_at(&mut self, index: usize) -> SliceCursor<T> {
        SliceCursor::at(self.as_mut_ptr(), index)
    }

    /// Returns a cursor at the first element.
    ///
    /// Cursors do not borrow the vector; they are invalidated by any
    /// operation that changes its length.
    #[inline]
    pub fn begin(&mut self) -> SliceCursor<T> {
        self.cursor_at(0)
    }

    /// Returns a cursor one past the last element.
    #[inline]
    pub fn end(&mut self) -> SliceCursor<T> {
        let len = self.len;
        self.cursor_at(len)
    }

    /// Returns a reversed cursor at the last element.
    #[inline]
    pub fn rbegin(&mut self) -> Reversed<SliceCursor<T>> {
        Reversed::new(self.end())
    }

    /// Returns a reversed cursor one before the first element.
    #[inline]
    pub fn rend(&mut self) -> Reversed<SliceCursor<T>> {
        Reversed::new(self.begin())
    }
}

impl<T> Vector<T> {
    /// Appends an element to the back of the vector.
    ///
    /// If the vector is already full, `value` is dropped instead. See
    /// [`try_push_back`](Vector::try_push_back) for a version that reports
    /// this.
    ///
    /// # Examples
    /// ```
    /// let mut v = fixcap::InlineVector::<u32, 2>::new();
    /// v.push_back(1);
    /// v.push_back(2);
    /// v.push_back(3);
    /// assert_eq!(v, [1, 2]);
    /// ```
    #[inline]
    pub fn push_back(&mut self, value: T) {
        if self.try_push_back(value).is_err() {
            saturated!("push_back: vector is full (capacity {})", self.capacity());
        }
    }

    /// Appends an element to the back of the vector, returning `Err(value)` if
    /// it is already at capacity.
    ///
    /// # Examples
    /// ```
    /// let mut v = fixcap::InlineVector::<u32, 2>::new();
    /// assert!(v.try_push_back(1).is_ok());
    /// assert!(v.try_push_back(2).is_ok());
    /// assert_eq!(v.try_push_back(3), Err(3));
    /// ```
    #[inline]
    pub fn try_push_back(&mut self, value: T) -> Result<(), T> {
        if self.is_full() {
            return Err(value);
        }

        let len = self.len;
        unsafe {
            memory::construct_at(self.buf.get_mut_ptr(len), value);
        }
        self.len = len + 1;
        Ok(())
    }

    /// Removes the last element from the vector and returns it, or [`None`]
    /// if it is empty.
    #[inline]
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }

        self.len -= 1;
        unsafe { Some(self.buf.get_ptr(self.len).read()) }
    }

    /// Shortens the vector, keeping the first `len` elements and dropping the rest.
    ///
    /// If `len` is greater than or equal to the vector's current length, this
    /// has no effect.
    ///
    /// # Examples
    /// ```
    /// let mut v = fixcap::InlineVector::<u32, 4>::from_slice(&[1, 2, 3, 4]);
    /// v.truncate(6);
    /// assert_eq!(v, [1, 2, 3, 4]);
    /// v.truncate(2);
    /// assert_eq!(v, [1, 2]);
    /// ```
    pub fn truncate(&mut self, len: usize) {
        let old_len = self.len;
        if len >= old_len {
            return;
        }

        self.len = len;
        unsafe {
            memory::destroy(self.cursor_at(len), self.cursor_at(old_len));
        }
    }

    /// Clears the vector, dropping all values.
    #[inline]
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Resizes the vector in place so that its length equals `new_len`.
    ///
    /// If `new_len` is greater than the current length, the vector is
    /// extended by clones of `value`, up to its capacity. Otherwise, the
    /// vector is truncated.
    ///
    /// # Examples
    /// ```
    /// let mut v = fixcap::InlineVector::<&str, 4>::new();
    /// v.resize(2, "hello");
    /// assert_eq!(v, ["hello", "hello"]);
    /// v.resize(6, "world");
    /// assert_eq!(v, ["hello", "hello", "world", "world"]);
    /// v.resize(1, "unused");
    /// assert_eq!(v, ["hello"]);
    /// ```
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
        self.len = len + count;
    }

    /// Resizes the vector in place so that its length equals `new_len`,
    /// filling new slots with `T::default()`.
    ///
    /// Growth is clamped to the capacity, as with [`resize`](Vector::resize).
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
        self.len = len + count;
    }

    /// Inserts an element at position `index`, shifting all elements after
    /// it to the right.
    ///
    /// If the vector is already full, `value` is dropped instead. See
    /// [`try_insert`](Vector::try_insert) for a version that reports this.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// let mut v = fixcap::InlineVector::<u32, 4>::from_slice(&[1, 2, 3]);
    /// v.insert(1, 4);
    /// assert_eq!(v, [1, 4, 2, 3]);
    /// v.insert(4, 5);
    /// assert_eq!(v, [1, 4, 2, 3]);
    /// ```
    #[track_caller]
    pub fn insert(&mut self, index: usize, value: T) {
        if self.try_insert(index, value).is_err() {
            saturated!("insert: vector is full (capacity {})", self.capacity());
        }
    }

    /// Inserts an element at position `index`, shifting all elements after
    /// it to the right, or returns `Err(value)` if the vector is full.
    ///
    /// # Panics
    /// Panics if `index > len`.
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

        unsafe {
            memory::construct_at(self.buf.get_mut_ptr(len), value);
            self.len = len + 1;
            rotate_tail_to(self.cursor_at(index), self.cursor_at(len + 1), 1);
        }
        Ok(())
    }

    /// Inserts `count` clones of `value` at position `index`, returning the
    /// number of elements actually inserted.
    ///
    /// If fewer than `count` slots are free, only as many clones are inserted
    /// as fit.
    ///
    /// # Panics
    /// Panics if `index > len`.
    ///
    /// # Examples
    /// ```
    /// let mut v = fixcap::InlineVector::<u32, 6>::from_slice(&[1, 2, 3]);
    /// assert_eq!(v.insert_n(1, 2, &0), 2);
    /// assert_eq!(v, [1, 0, 0, 2, 3]);
    /// assert_eq!(v.insert_n(0, 3, &9), 1);
    /// assert_eq!(v, [9, 1, 0, 0, 2, 3]);
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
            self.len = len + count;
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
    ///
    /// # Examples
    /// ```
    /// let mut v = fixcap::InlineVector::<u32, 5>::from_slice(&[1, 5]);
    /// assert_eq!(v.insert_iter(1, 2..=4), 3);
    /// assert_eq!(v, [1, 2, 3, 4, 5]);
    /// assert_eq!(v.insert_iter(0, 6..10), 0);
    /// ```
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
        self.len = len + count;

        if count == free && iter.size_hint().0 > 0 {
            saturated!("{}: vector is full (capacity {})", op, self.capacity());
        }
        count
    }

    /// Removes the element at position `index`, shifting all elements after
    /// it to the left.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// let mut v = fixcap::InlineVector::<u32, 4>::from_slice(&[1, 2, 3]);
    /// v.erase(1);
    /// assert_eq!(v, [1, 3]);
    /// ```
    #[track_caller]
    pub fn erase(&mut self, index: usize) {
        drop(self.remove(index));
    }

    /// Removes and returns the element at position `index`, shifting all
    /// elements after it to the left.
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
            self.len = len - 1;
            self.buf.get_ptr(len - 1).read()
        }
    }

    /// Removes the elements in `range`, shifting all elements after it to the
    /// left.
    ///
    /// # Panics
    /// Panics if the range starts after it ends, or ends after the last element.
    ///
    /// # Examples
    /// ```
    /// let mut v = fixcap::InlineVector::<u32, 8>::from_slice(&[1, 2, 3, 4, 5]);
    /// v.erase_range(1..3);
    /// assert_eq!(v, [1, 4, 5]);
    /// v.erase_range(..);
    /// assert!(v.is_empty());
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

    /// Removes an element from the vector and returns it.
    ///
    /// The removed element is replaced by the last element of the vector.
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

        unsafe {
            let last = self.buf.get_ptr(len - 1).read();
            let hole = self.buf.get_mut_ptr(index);
            self.len = len - 1;
            ptr::replace(hole, last)
        }
    }

    /// Retains only the elements specified by the predicate.
    ///
    /// In other words, remove all elements `e` such that `f(&e)` returns
    /// `false`. This method operates in place, visiting each element exactly
    /// once in the original order, and preserves the order of the retained
    /// elements.
    ///
    /// # Examples
    /// ```
    /// let mut v = fixcap::InlineVector::<u32, 8>::from_slice(&[1, 2, 3, 4, 5, 6]);
    /// v.retain(|x| x % 3 != 0);
    /// assert_eq!(v, [1, 2, 4, 5]);
    /// ```
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> bool,
    {
        let len = self.len;
        let mut del = 0;
        unsafe {
            for idx in 0..len {
                let p = self.buf.get_mut_ptr(idx);
                if !f(&*p) {
                    del += 1;
                } else if del > 0 {
                    ptr::swap(p, p.sub(del));
                }
            }
        }
        self.truncate(len - del);
    }

    /// Replaces the contents of the vector with `count` clones of `value`.
    ///
    /// `count` is clamped to the capacity.
    ///
    /// # Examples
    /// ```
    /// let mut v = fixcap::InlineVector::<u32, 4>::from_slice(&[1, 2]);
    /// v.assign_n(3, &7);
    /// assert_eq!(v, [7, 7, 7]);
    /// v.assign_n(9, &1);
    /// assert_eq!(v, [1, 1, 1, 1]);
    /// ```
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
        self.len = count;
    }

    /// Replaces the contents of the vector with the elements produced by
    /// `iter`, dropping those that exceed the capacity.
    pub fn assign_iter<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.clear();
        self.append_iter(iter, "assign_iter");
    }

    /// Replaces the contents of the vector with converted clones of the
    /// elements of `other`, which may have a different capacity and element
    /// type.
    ///
    /// # Examples
    /// ```
    /// let small = fixcap::InlineVector::<u8, 3>::from_slice(&[1, 2, 3]);
    /// let mut wide = fixcap::InlineVector::<u32, 8>::from_slice(&[9; 5]);
    /// wide.assign_from(&small);
    /// assert_eq!(wide, [1, 2, 3]);
    /// ```
    pub fn assign_from<U, S>(&mut self, other: &Vector<U, S>)
    where
        U: Clone + Into<T>,
        S: ?Sized + Storage<U>,
    {
        self.assign_iter(other.iter().cloned().map(Into::into));
    }

    /// Clones and appends all elements of `other`, dropping those that exceed
    /// the capacity.
    #[inline]
    pub fn extend_from_slice(&mut self, other: &[T])
    where
        T: Clone,
    {
        self.append_iter(other.iter().cloned(), "extend_from_slice");
    }

    /// Clones and appends all elements of `other`, or returns an error without
    /// modifying the vector if they do not all fit.
    ///
    /// # Examples
    /// ```
    /// let mut v = fixcap::InlineVector::<u32, 4>::new();
    /// assert!(v.try_extend_from_slice(&[1, 2, 3]).is_ok());
    /// assert_eq!(v.try_extend_from_slice(&[4, 5]), Err(fixcap::CapacityError));
    /// assert_eq!(v, [1, 2, 3]);
    /// ```
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
}

impl<T, const N: usize> Vector<T, InlineStorage<T, N>> {
    const NONZERO_CAPACITY: () = assert!(N > 0, "vector capacity must be at least 1");

    /// Constructs a new, empty vector.
    ///
    /// A capacity of zero is rejected at compile time:
    ///
    /// ```compile_fail
    /// let _ = fixcap::InlineVector::<u8, 0>::new();
    /// ```
    #[inline]
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NONZERO_CAPACITY;
        Vector {
            len: 0,
            elem: PhantomData,
            #[allow(clippy::uninit_assumed_init)]
            buf: unsafe { MaybeUninit::uninit().assume_init() },
        }
    }

    /// Constructs a vector holding `len` default values, clamped to the capacity.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut result = Self::new();
        result.resize_default(len);
        result
    }

    /// Constructs a vector holding `count` clones of `value`, clamped to the
    /// capacity.
    ///
    /// # Examples
    /// ```
    /// let v = fixcap::InlineVector::<u8, 4>::from_value(6, &1);
    /// assert_eq!(v, [1, 1, 1, 1]);
    /// ```
    pub fn from_value(count: usize, value: &T) -> Self
    where
        T: Clone,
    {
        let mut result = Self::new();
        result.assign_n(count, value);
        result
    }

    /// Constructs a vector holding clones of the elements of `values`, dropping
    /// those that exceed the capacity.
    pub fn from_slice(values: &[T]) -> Self
    where
        T: Clone,
    {
        let mut result = Self::new();
        result.extend_from_slice(values);
        result
    }
}

impl<T, const N: usize> Default for Vector<T, InlineStorage<T, N>> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, const N: usize> Clone for Vector<T, InlineStorage<T, N>> {
    fn clone(&self) -> Self {
        Self::from_slice(self.as_slice())
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign_from(source);
    }
}

impl<T, U, S, const N: usize> From<&Vector<U, S>> for Vector<T, InlineStorage<T, N>>
where
    U: Clone + Into<T>,
    S: ?Sized + Storage<U>,
{
    /// Converts clones of the elements of `other`, dropping those that exceed
    /// the capacity.
    fn from(other: &Vector<U, S>) -> Self {
        let mut result = Self::new();
        result.assign_from(other);
        result
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for Vector<T, InlineStorage<T, N>> {
    type Error = CapacityError;

    /// Clones the elements of `values`, failing if they do not all fit.
    fn try_from(values: &[T]) -> crate::Result<Self> {
        let mut result = Self::new();
        result.try_extend_from_slice(values)?;
        Ok(result)
    }
}

impl<T, const N: usize> FromIterator<T> for Vector<T, InlineStorage<T, N>> {
    /// Collects the elements of `iter`, dropping those that exceed the capacity.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut result = Self::new();
        result.extend(iter);
        result
    }
}

impl<T, const N: usize> Deref for Vector<T, InlineStorage<T, N>> {
    type Target = Vector<T>;

    #[inline]
    fn deref(&self) -> &Vector<T> {
        self
    }
}

impl<T, const N: usize> DerefMut for Vector<T, InlineStorage<T, N>> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Vector<T> {
        self
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for Vector<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, S: ?Sized + Storage<T>> Drop for Vector<T, S> {
    fn drop(&mut self) {
        let len = self.len;
        unsafe {
            memory::destroy_n(self.cursor_at(0), len);
        }
    }
}

impl<T, S: ?Sized + Storage<T>> AsRef<[T]> for Vector<T, S> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, S: ?Sized + Storage<T>> AsMut<[T]> for Vector<T, S> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, S: ?Sized + Storage<T>, I: SliceIndex<[T]>> Index<I> for Vector<T, S> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        self.as_slice().index(index)
    }
}

impl<T, S: ?Sized + Storage<T>, I: SliceIndex<[T]>> IndexMut<I> for Vector<T, S> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        self.as_mut_slice().index_mut(index)
    }
}

impl<T: Debug, S: ?Sized + Storage<T>> Debug for Vector<T, S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Hash, S: ?Sized + Storage<T>> Hash for Vector<T, S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len);
        for x in self.iter() {
            x.hash(state);
        }
    }
}

impl<T, U, S1, S2> PartialEq<Vector<U, S2>> for Vector<T, S1>
where
    T: PartialEq<U>,
    S1: ?Sized + Storage<T>,
    S2: ?Sized + Storage<U>,
{
    #[inline]
    fn eq(&self, other: &Vector<U, S2>) -> bool {
        self.len == other.len && algorithm::equal(self.iter(), other.iter())
    }
}

impl<T, U, S, const M: usize> PartialEq<[U; M]> for Vector<T, S>
where
    T: PartialEq<U>,
    S: ?Sized + Storage<T>,
{
    #[inline]
    fn eq(&self, other: &[U; M]) -> bool {
        self.len == M && algorithm::equal(self.iter(), other.iter())
    }
}

impl<T, U, S> PartialEq<[U]> for Vector<T, S>
where
    T: PartialEq<U>,
    S: ?Sized + Storage<T>,
{
    #[inline]
    fn eq(&self, other: &[U]) -> bool {
        self.len == other.len() && algorithm::equal(self.iter(), other.iter())
    }
}

impl<T, U, S> PartialEq<&[U]> for Vector<T, S>
where
    T: PartialEq<U>,
    S: ?Sized + Storage<T>,
{
    #[inline]
    fn eq(&self, other: &&[U]) -> bool {
        *self == **other
    }
}

impl<T: Eq, S: ?Sized + Storage<T>> Eq for Vector<T, S> {}

impl<T, U, S1, S2> PartialOrd<Vector<U, S2>> for Vector<T, S1>
where
    T: PartialOrd<U>,
    S1: ?Sized + Storage<T>,
    S2: ?Sized + Storage<U>,
{
    #[inline]
    fn partial_cmp(&self, other: &Vector<U, S2>) -> Option<Ordering> {
        algorithm::lexicographical_ordering(self.iter(), other.iter())
    }
}

impl<T: Ord, S: ?Sized + Storage<T>> Ord for Vector<T, S> {
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

impl<T> Extend<T> for Vector<T> {
    /// Appends the elements of `iter`, dropping those that exceed the capacity.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.append_iter(iter, "extend");
    }
}

impl<T, const N: usize> Extend<T> for Vector<T, InlineStorage<T, N>> {
    /// Appends the elements of `iter`, dropping those that exceed the capacity.
    #[inline]
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        Extend::extend(&mut **self, iter);
    }
}

impl<'a, T, S: ?Sized + Storage<T>> IntoIterator for &'a Vector<T, S> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, S: ?Sized + Storage<T>> IntoIterator for &'a mut Vector<T, S> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An iterator that moves out of an [`InlineVector`].
///
/// This `struct` is created by the `into_iter` method on [`InlineVector`]
/// (provided by the [`IntoIterator`] trait).
///
/// # Examples
/// ```
/// let v = fixcap::InlineVector::<u32, 4>::from_slice(&[1, 2]);
/// let mut iter: fixcap::vector::IntoIter<_, 4> = v.into_iter();
/// assert_eq!(iter.next(), Some(1));
/// assert_eq!(iter.next(), Some(2));
/// assert_eq!(iter.next(), None);
/// ```
pub struct IntoIter<T, const N: usize> {
    start: usize,
    end: usize,
    buf: InlineStorage<T, N>,
}

impl<T, const N: usize> IntoIter<T, N> {
    /// Returns the remaining elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        let len = self.end - self.start;
        unsafe { slice::from_raw_parts(self.buf.get_ptr(self.start), len) }
    }
}

impl<T: Debug, const N: usize> Debug for IntoIter<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.start >= self.end {
            return None;
        }

        let ret = unsafe { self.buf.get_ptr(self.start).read() };
        self.start += 1;
        Some(ret)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.end - self.start;
        (size, Some(size))
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.start >= self.end {
            return None;
        }

        self.end -= 1;
        unsafe { Some(self.buf.get_ptr(self.end).read()) }
    }
}

impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}

impl<T, const N: usize> Drop for IntoIter<T, N> {
    fn drop(&mut self) {
        self.for_each(drop);
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, InlineStorage<T, N>> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        let this = ManuallyDrop::new(self);
        let buf = unsafe { ptr::read(&this.buf) };
        IntoIter {
            start: 0,
            end: this.len,
            buf,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn sizes_of_instantiated_types() {
        use core::mem::size_of;

        assert_eq!(size_of::<InlineVector<u8, 8>>(), size_of::<usize>() + 8);
        assert_eq!(size_of::<InlineVector<u64, 4>>(), size_of::<usize>() + 32);
        assert_eq!(size_of::<&Vector<u64>>(), 2 * size_of::<usize>());
    }

    #[test]
    fn saturation_leaves_source_untouched() {
        let mut src = 0..10;
        let mut v = InlineVector::<u32, 3>::new();
        v.extend(&mut src);
        assert_eq!(v, [0, 1, 2]);
        assert_eq!(src.next(), Some(3));

        let mut src = 10..20;
        v.clear();
        v.push_back(0);
        assert_eq!(v.insert_iter(0, &mut src), 2);
        assert_eq!(v, [10, 11, 0]);
        assert_eq!(src.next(), Some(12));
    }

    #[test]
    fn erased_view_shares_storage() {
        fn push_all(v: &mut Vector<u32>, values: &[u32]) {
            for &x in values {
                v.push_back(x);
            }
        }

        let mut a = InlineVector::<u32, 3>::new();
        let mut b = InlineVector::<u32, 5>::new();
        push_all(&mut a, &[1, 2, 3, 4]);
        push_all(&mut b, &[1, 2, 3, 4]);

        assert_eq!(a, [1, 2, 3]);
        assert_eq!(b, [1, 2, 3, 4]);
        assert_eq!(a.capacity(), 3);

        let view: &Vector<u32> = &b;
        assert_eq!(view.capacity(), 5);
        assert_eq!(&view[1..3], &[2, 3]);
        assert!(a < b);
    }

    #[test]
    fn capacity_invariant_holds_under_saturation() {
        let mut v = InlineVector::<u32, 4>::new();
        for i in 0..10 {
            v.push_back(i);
            assert!(v.len() <= v.max_size());
        }
        assert_eq!(v, [0, 1, 2, 3]);
        assert!(v.is_full());

        v.insert(2, 99);
        assert_eq!(v, [0, 1, 2, 3]);
        assert_eq!(v.try_insert(0, 7), Err(7));

        v.resize(10, 5);
        assert_eq!(v.len(), 4);
        assert_eq!(v.insert_n(0, 5, &1), 0);
    }

    #[test]
    fn overflowing_insert_is_clamped() {
        let mut v = InlineVector::<u32, 6>::from_slice(&[1, 2, 3, 4]);
        assert_eq!(v.insert_n(1, 5, &0), 2);
        assert_eq!(v.len(), v.max_size());
        assert_eq!(v, [1, 0, 0, 2, 3, 4]);

        let mut w = InlineVector::<u32, 6>::from_slice(&[1, 2]);
        assert_eq!(w.insert_iter(1, [7, 8, 9, 10, 11, 12]), 4);
        assert_eq!(w, [1, 7, 8, 9, 10, 2]);
    }

    #[test]
    fn insert_then_erase_restores() {
        let original = [10, 20, 30, 40, 50];
        for pos in 0..=original.len() {
            let mut v = InlineVector::<u32, 8>::from_slice(&original);
            v.insert(pos, 99);
            assert_eq!(v[pos], 99);
            assert_eq!(v.len(), 6);
            v.erase(pos);
            assert_eq!(v, original);
        }
    }

    #[test]
    fn range_erase_and_remove() {
        let mut v: InlineVector<u32, 8> = (0..8).collect();
        v.erase_range(2..5);
        assert_eq!(v, [0, 1, 5, 6, 7]);
        assert_eq!(v.remove(0), 0);
        assert_eq!(v.swap_remove(0), 1);
        assert_eq!(v, [7, 5, 6]);
        v.erase_range(3..);
        assert_eq!(v, [7, 5, 6]);
        v.erase_range(1..=1);
        assert_eq!(v, [7, 6]);
    }

    #[test]
    #[should_panic]
    fn insert_past_the_end_panics() {
        let mut v = InlineVector::<u32, 4>::new();
        v.insert(1, 0);
    }

    #[test]
    #[should_panic]
    fn erase_past_the_end_panics() {
        let mut v = InlineVector::<u32, 4>::from_slice(&[1]);
        v.erase(1);
    }

    #[test]
    fn wrapping_access() {
        let mut v = InlineVector::<u32, 4>::from_slice(&[1, 2, 3, 4]);
        assert_eq!(v.at(4), Some(&1));
        assert_eq!(v.at(7), Some(&4));
        *v.at_mut(9).unwrap() = 20;
        assert_eq!(v, [1, 20, 3, 4]);

        v.truncate(2);
        assert_eq!(v.at(6), None);
        assert_eq!(v.front(), Some(&1));
        assert_eq!(v.back(), Some(&20));
        assert_eq!(v.get(2), None);
    }

    #[test]
    fn cursors_span_live_elements() {
        use crate::cursor::Cursor;

        let mut v = InlineVector::<u32, 4>::from_slice(&[1, 2, 3]);
        let (first, last) = (v.begin(), v.end());
        assert_eq!(distance(&first, &last), 3);

        let (rfirst, rlast) = (v.rbegin(), v.rend());
        assert_eq!(distance(&rfirst, &rlast), 3);
        assert_eq!(unsafe { *rfirst.as_ptr() }, 3);

        unsafe { algorithm::reverse(first, last) };
        assert_eq!(v, [3, 2, 1]);
    }

    #[test]
    fn construction_and_conversion() {
        let v = InlineVector::<u8, 4>::with_len(2);
        assert_eq!(v, [0, 0]);

        let v: InlineVector<u8, 3> = (1..10).collect();
        assert_eq!(v, [1, 2, 3]);

        let wide = InlineVector::<u32, 2>::from(&v);
        assert_eq!(wide, [1, 2]);
        let wider = InlineVector::<u64, 8>::from(&*v);
        assert_eq!(wider, [1u64, 2, 3]);

        assert!(InlineVector::<u8, 2>::try_from(&[1u8, 2, 3][..]).is_err());
        let exact = InlineVector::<u8, 3>::try_from(&[1u8, 2, 3][..]).unwrap();
        assert_eq!(exact, v);
        assert_eq!(exact, &[1u8, 2, 3][..]);

        let mut copy = InlineVector::<u8, 3>::from_slice(&[9]);
        copy.clone_from(&exact);
        assert_eq!(copy, exact);
        assert_eq!(exact.clone(), exact);
    }

    #[test]
    fn ordering_and_formatting() {
        use std::format;

        let a = InlineVector::<i32, 8>::from_slice(&[0, 1, 2, 3, 4]);
        let b = InlineVector::<i32, 5>::from_slice(&[0, 1, 0, 3, 4]);
        assert!(b < a);
        assert!(!(a < b));
        assert!(a != b);
        assert_eq!(a.cmp(&a.clone()), Ordering::Equal);
        assert!(!(a < a.clone()) && !(a > a.clone()));

        let prefix = InlineVector::<i32, 8>::from_slice(&[0, 1]);
        assert_eq!(prefix.cmp(&a), Ordering::Less);

        assert_eq!(format!("{:?}", b), "[0, 1, 0, 3, 4]");
    }

    #[test]
    fn hashes_like_its_contents() {
        use core::hash::BuildHasher;
        use core::hash::BuildHasherDefault;
        use rustc_hash::FxHasher;

        let build = BuildHasherDefault::<FxHasher>::default();
        let a = InlineVector::<u32, 4>::from_slice(&[3, 1, 4]);
        let b = InlineVector::<u32, 8>::from_slice(&[3, 1, 4]);
        let c = InlineVector::<u32, 4>::from_slice(&[3, 1, 5]);

        assert_eq!(build.hash_one(&a), build.hash_one(&b));
        assert_ne!(build.hash_one(&a), build.hash_one(&c));
    }

    #[test]
    fn assignment() {
        let mut v = InlineVector::<u32, 5>::from_slice(&[1, 2, 3]);
        v.assign_n(2, &8);
        assert_eq!(v, [8, 8]);
        v.assign_iter(0..9);
        assert_eq!(v, [0, 1, 2, 3, 4]);
        v.resize_default(2);
        assert_eq!(v, [0, 1]);
        v.resize_default(3);
        assert_eq!(v, [0, 1, 0]);

        let other = InlineVector::<u16, 3>::from_slice(&[7, 7]);
        v.assign_from(&other);
        assert_eq!(v, [7, 7]);
    }

    #[test]
    fn elements_are_dropped_exactly_once() {
        let drop_count = DropCounter::new();
        {
            let mut v = InlineVector::<Droppable<'_, u32>, 6>::new();
            for i in 0..8 {
                v.push_back(drop_count.new_droppable(i));
            }
            // two rejected pushes
            assert_eq!(drop_count.dropped(), 2);

            v.erase(0);
            assert_eq!(drop_count.dropped(), 3);
            v.insert(2, drop_count.new_droppable(100));
            assert_eq!(v[2].value, 100);
            assert_eq!(drop_count.dropped(), 3);

            v.erase_range(3..);
            assert_eq!(drop_count.dropped(), 6);

            let proto = drop_count.new_droppable(7);
            assert_eq!(v.insert_n(0, 5, &proto), 3);
            drop(proto);
            assert_eq!(drop_count.dropped(), 7);
            assert!(v.is_full());

            v.retain(|d| d.value != 7);
            assert_eq!(drop_count.dropped(), 10);
            assert_eq!(v.len(), 3);
            assert_eq!(v[2].value, 100);

            v.truncate(1);
            assert_eq!(drop_count.dropped(), 12);
        }
        // the last element drops with the vector
        assert_eq!(drop_count.dropped(), 13);
    }

    #[test]
    fn iterators_take_and_drop_correctly() {
        let drop_count = DropCounter::new();
        let mut v = InlineVector::<Droppable<'_, usize>, 8>::new();
        for i in 1..=8 {
            v.push_back(drop_count.new_droppable(i));
        }

        let mut into_iter = v.into_iter();
        assert_eq!(into_iter.next().unwrap().value, 1);
        assert_eq!(into_iter.next_back().unwrap().value, 8);
        assert_eq!(into_iter.len(), 6);
        assert_eq!(drop_count.dropped(), 2);

        drop(into_iter);
        assert_eq!(drop_count.dropped(), 8);
    }

    #[test]
    fn randomized_against_std_vec() {
        use rand::{rngs::SmallRng, Rng, SeedableRng};
        use std::vec::Vec;

        let mut rng = SmallRng::from_seed(RNG_SEED);
        let mut ours = InlineVector::<u32, 16>::new();
        let mut reference: Vec<u32> = Vec::new();

        for step in 0..2000u32 {
            match rng.gen_range(0..6) {
                0 => {
                    ours.push_back(step);
                    if reference.len() < 16 {
                        reference.push(step);
                    }
                }
                1 => assert_eq!(ours.pop_back(), reference.pop()),
                2 => {
                    let index = rng.gen_range(0..=reference.len());
                    ours.insert(index, step);
                    if reference.len() < 16 {
                        reference.insert(index, step);
                    }
                }
                3 if !reference.is_empty() => {
                    let index = rng.gen_range(0..reference.len());
                    ours.erase(index);
                    reference.remove(index);
                }
                4 => {
                    let index = rng.gen_range(0..=reference.len());
                    let count = rng.gen_range(0..5);
                    let inserted = ours.insert_n(index, count, &step);
                    let inserted_ref = count.min(16 - reference.len());
                    assert_eq!(inserted, inserted_ref);
                    for _ in 0..inserted_ref {
                        reference.insert(index, step);
                    }
                }
                _ => {
                    let len = rng.gen_range(0..20);
                    ours.resize(len, step);
                    reference.resize(len.min(16), step);
                }
            }

            assert!(ours.len() <= ours.capacity());
            assert_eq!(ours.as_slice(), reference.as_slice());
        }
    }
}
