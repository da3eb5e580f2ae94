//! Raw storage for containers, alignment computation and type classification.
//!
//! The containers in this crate are generic over a [`Storage`] type, which is
//! either an owned array of slots ([`InlineStorage`]) or the unsized slice of
//! slots ([`ErasedStorage`]) that every inline array coerces to.

use core::any::TypeId;
use core::mem::{self, MaybeUninit};
use core::ops::{Bound, Range, RangeBounds};

/// An interface for a contiguous block of element slots for use by containers.
///
/// # Safety
/// Implementors must ensure that `slots` and `slots_mut` always return slices
/// over the same memory, and that the length of these slices never changes.
pub unsafe trait Storage<T> {
    /// Extracts a slice over the entire memory block.
    fn slots(&self) -> &[MaybeUninit<T>];
    /// Extracts a mutable slice over the entire memory block.
    fn slots_mut(&mut self) -> &mut [MaybeUninit<T>];

    /// Returns the size of the memory block in units of `T`.
    #[inline]
    fn capacity(&self) -> usize {
        self.slots().len()
    }

    /// Returns a pointer to the slot at position `index`.
    ///
    /// The resulting pointer does not need to be in bounds, but it is
    /// potentially hazardous to dereference (which requires `unsafe`). Even
    /// when in bounds, the value it points to may not be initialized.
    #[inline]
    fn get_ptr(&self, index: usize) -> *const T {
        debug_assert!(index <= self.capacity());
        self.slots().as_ptr().wrapping_add(index) as _
    }

    /// Returns a mutable pointer to the slot at position `index`.
    ///
    /// The resulting pointer does not need to be in bounds, but it is
    /// potentially hazardous to dereference (which requires `unsafe`). Even
    /// when in bounds, the value it points to may not be initialized.
    #[inline]
    fn get_mut_ptr(&mut self, index: usize) -> *mut T {
        debug_assert!(index <= self.capacity());
        self.slots_mut().as_mut_ptr().wrapping_add(index) as _
    }
}

/// Shorthand for `[MaybeUninit<T>; C]`, the storage embedded in inline containers.
pub type InlineStorage<T, const C: usize> = [MaybeUninit<T>; C];

/// Shorthand for `[MaybeUninit<T>]`, the storage of capacity-erased containers.
pub type ErasedStorage<T> = [MaybeUninit<T>];

unsafe impl<T, const C: usize> Storage<T> for InlineStorage<T, C> {
    #[inline]
    fn slots(&self) -> &[MaybeUninit<T>] {
        &self[..]
    }
    #[inline]
    fn slots_mut(&mut self) -> &mut [MaybeUninit<T>] {
        &mut self[..]
    }
    #[inline]
    fn capacity(&self) -> usize {
        C
    }
}

unsafe impl<T> Storage<T> for ErasedStorage<T> {
    #[inline]
    fn slots(&self) -> &[MaybeUninit<T>] {
        self
    }
    #[inline]
    fn slots_mut(&mut self) -> &mut [MaybeUninit<T>] {
        self
    }
}

/// Returns the required address alignment of `T`, in bytes.
///
/// The value is measured as the padding inserted in front of a `T` that
/// follows a single byte in a `#[repr(C)]` struct.
///
/// # Examples
/// ```
/// use fixcap::storage::alignment_of;
/// assert_eq!(alignment_of::<u8>(), 1);
/// assert_eq!(alignment_of::<u32>(), core::mem::align_of::<u32>());
/// assert_eq!(alignment_of::<[u16; 3]>(), core::mem::align_of::<u16>());
/// ```
pub const fn alignment_of<T>() -> usize {
    #[allow(dead_code)]
    #[repr(C)]
    struct Probe<T> {
        head: u8,
        tail: T,
    }

    mem::size_of::<Probe<T>>() - mem::size_of::<T>()
}

/// Type-level representation of an alignment requirement.
///
/// Only the alignments listed as implementors of [`SupportedAlignment`] can be
/// used with [`RawStorage`].
pub struct Alignment<const ALIGN: usize>;

mod sealed {
    pub trait Sealed {}
}

/// Marker trait for the alignments [`RawStorage`] can provide.
///
/// This is implemented for [`Alignment<ALIGN>`] with `ALIGN` in {1, 2, 4, 8,
/// 16}, 16 being the largest fundamental alignment on supported targets. Other
/// alignments fail to compile.
pub trait SupportedAlignment: sealed::Sealed {
    /// A zero-sized type with exactly the represented alignment.
    type Archetype: Copy;
}

macro_rules! supported_alignments {
    ($($align:literal => $name:ident),*) => {$(
        #[doc = concat!("Zero-sized marker type with an alignment of ", stringify!($align), ".")]
        #[derive(Copy, Clone, Debug)]
        #[repr(align($align))]
        pub struct $name;

        impl sealed::Sealed for Alignment<$align> {}
        impl SupportedAlignment for Alignment<$align> {
            type Archetype = $name;
        }
    )*};
}

supported_alignments!(1 => Align1, 2 => Align2, 4 => Align4, 8 => Align8, 16 => Align16);

/// A block of `SIZE` uninitialized bytes, aligned to `ALIGN`.
///
/// The block has no meaning of its own; its owner reinterprets it as storage
/// for values of some type and is responsible for their lifetimes.
///
/// Requests for an empty block, a block smaller than its alignment, or a size
/// that is not a multiple of the alignment are rejected at compile time:
///
/// ```compile_fail
/// let _ = fixcap::storage::RawStorage::<12, 8>::new();
/// ```
///
/// ```compile_fail
/// let _ = fixcap::storage::RawStorage::<16, 3>::new();
/// ```
///
/// ```compile_fail
/// let _ = fixcap::storage::RawStorage::<0, 1>::new();
/// ```
///
/// ```compile_fail
/// let _ = fixcap::storage::RawStorage::<4, 8>::new();
/// ```
///
/// # Examples
/// ```
/// use fixcap::storage::RawStorage;
/// let mut block = RawStorage::<16, 8>::new();
/// assert_eq!(core::mem::size_of_val(&block), 16);
/// assert_eq!(core::mem::align_of_val(&block), 8);
/// assert!(block.can_hold::<u64>(2));
/// assert!(!block.can_hold::<u64>(3));
///
/// let p = block.as_mut_ptr::<u64>();
/// unsafe {
///     p.write(7);
///     p.add(1).write(11);
///     assert_eq!(p.read() + p.add(1).read(), 18);
/// }
/// ```
#[repr(C)]
pub struct RawStorage<const SIZE: usize, const ALIGN: usize>
where
    Alignment<ALIGN>: SupportedAlignment,
{
    align: [<Alignment<ALIGN> as SupportedAlignment>::Archetype; 0],
    bytes: [MaybeUninit<u8>; SIZE],
}

impl<const SIZE: usize, const ALIGN: usize> RawStorage<SIZE, ALIGN>
where
    Alignment<ALIGN>: SupportedAlignment,
{
    const VALID: () = {
        assert!(SIZE != 0, "raw storage must not be empty");
        assert!(SIZE >= ALIGN, "raw storage must not be smaller than its alignment");
        assert!(SIZE % ALIGN == 0, "raw storage size must be a multiple of its alignment");
    };

    /// Creates a new, uninitialized block.
    #[inline]
    pub const fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::VALID;
        RawStorage {
            align: [],
            bytes: [MaybeUninit::uninit(); SIZE],
        }
    }

    /// Returns the size of the block in bytes.
    #[inline]
    pub const fn size(&self) -> usize {
        SIZE
    }

    /// Returns the alignment of the block in bytes.
    #[inline]
    pub const fn alignment(&self) -> usize {
        ALIGN
    }

    /// Returns `true` if the block is large and aligned enough to hold
    /// `count` consecutive values of type `T`.
    #[inline]
    pub fn can_hold<T>(&self, count: usize) -> bool {
        alignment_of::<T>() <= ALIGN
            && mem::size_of::<T>()
                .checked_mul(count)
                .map_or(false, |bytes| bytes <= SIZE)
    }

    /// Returns a pointer to the start of the block, cast to `*const T`.
    #[inline]
    pub fn as_ptr<T>(&self) -> *const T {
        self.bytes.as_ptr().cast()
    }

    /// Returns a mutable pointer to the start of the block, cast to `*mut T`.
    ///
    /// Check [`can_hold`](RawStorage::can_hold) before writing through the
    /// returned pointer.
    #[inline]
    pub fn as_mut_ptr<T>(&mut self) -> *mut T {
        self.bytes.as_mut_ptr().cast()
    }
}

impl<const SIZE: usize, const ALIGN: usize> Default for RawStorage<SIZE, ALIGN>
where
    Alignment<ALIGN>: SupportedAlignment,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<const SIZE: usize, const ALIGN: usize> core::fmt::Debug for RawStorage<SIZE, ALIGN>
where
    Alignment<ALIGN>: SupportedAlignment,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawStorage")
            .field("size", &SIZE)
            .field("align", &ALIGN)
            .finish()
    }
}

/// Marker trait for the built-in integer-like types.
///
/// This is implemented for `bool`, `char` and all signed and unsigned integer
/// types, and cannot be implemented outside this crate.
pub trait Integral: Copy + sealed_integral::Sealed + 'static {}

mod sealed_integral {
    pub trait Sealed {}
}

macro_rules! integral_types {
    ($($t:ty),*) => {
        $(
            impl sealed_integral::Sealed for $t {}
            impl Integral for $t {}
        )*

        /// Returns `true` if `T` is one of the built-in integer-like types
        /// implementing [`Integral`].
        ///
        /// # Examples
        /// ```
        /// use fixcap::storage::is_integral;
        /// assert!(is_integral::<bool>());
        /// assert!(is_integral::<u16>());
        /// assert!(!is_integral::<f32>());
        /// assert!(!is_integral::<&u8>());
        /// ```
        pub fn is_integral<T: ?Sized + 'static>() -> bool {
            let id = TypeId::of::<T>();
            $(id == TypeId::of::<$t>())||*
        }
    };
}

integral_types!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Resolves `range` against a sequence of length `len`.
///
/// # Panics
/// Panics if the range starts after it ends, or ends after `len`.
#[track_caller]
pub(crate) fn normalize_range<R: RangeBounds<usize>>(range: R, len: usize) -> Range<usize> {
    #[cold]
    #[inline(never)]
    #[track_caller]
    fn start_after_end(start: usize, end: usize) -> ! {
        panic!("range starts at {} but ends at {}", start, end);
    }

    #[cold]
    #[inline(never)]
    #[track_caller]
    fn end_out_of_bounds(end: usize, len: usize) -> ! {
        panic!("range ends at {} but length is only {}", end, len);
    }

    let start = match range.start_bound() {
        Bound::Included(&x) => x,
        Bound::Excluded(&x) => x.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let end = match range.end_bound() {
        Bound::Included(&x) => x.saturating_add(1),
        Bound::Excluded(&x) => x,
        Bound::Unbounded => len,
    };

    if start > end {
        start_after_end(start, end);
    }
    if end > len {
        end_out_of_bounds(end, len);
    }

    start..end
}
