//! The raw representation underneath [`Storage`].
//!
//! # Implementation details
//!
//! A type list is laid out as a hand-written chain of unions, one slot per
//! alternative, all overlapping at offset zero:
//!
//! ```rust,no_run
//! # use core::convert::Infallible;
//! # use core::mem::ManuallyDrop;
//!
//! struct Nil(Infallible);
//! union Cons<T, Next> {
//!     data: ManuallyDrop<T>,
//!     next: ManuallyDrop<Next>,
//! }
//!
//! // The representation of `T![bool, i32, String]`.
//! type Repr = Cons<bool, Cons<i32, Cons<String, Nil>>>;
//! ```
//!
//! The chain carries no discriminant of its own. Every operation takes one
//! and walks down the chain, decrementing it, until it reaches zero and acts
//! on the slot found there.
//!
//! [`Storage`]: crate::storage::Storage

use core::{any, convert::Infallible, mem::ManuallyDrop, ptr};

use crate::{
    index::{Index, UInt, UTerm},
    list::{Contains, TypeList},
    marker::NullVariant,
};

/// The terminator of the representation chain.
pub struct Nil(pub(crate) Infallible);

/// One link of the representation chain.
#[repr(C)]
pub union Cons<T, U> {
    pub(crate) data: ManuallyDrop<T>,
    pub(crate) next: ManuallyDrop<U>,
}

// `repr(C)` puts every union field at offset zero, so the casts below are
// plain reinterpretations of the same address.
impl<T, U> Cons<T, U> {
    pub(crate) fn head(this: *const Self) -> *const T {
        this.cast()
    }

    pub(crate) fn head_mut(this: *mut Self) -> *mut T {
        this.cast()
    }

    pub(crate) fn tail(this: *const Self) -> *const U {
        this.cast()
    }

    pub(crate) fn tail_mut(this: *mut Self) -> *mut U {
        this.cast()
    }
}

/// A type list with a tagged-union representation.
///
/// The discriminant-indexed operations never check the discriminant against
/// the contents of the cell; that bookkeeping belongs to the owner.
pub trait SumList: TypeList {
    /// The underlying union of all alternatives.
    type Repr;

    #[doc(hidden)]
    unsafe fn destruct(this: *mut Self::Repr, tag: u8);

    #[doc(hidden)]
    unsafe fn construct_move(this: *mut Self::Repr, source: *const Self::Repr, tag: u8);

    #[doc(hidden)]
    unsafe fn assign_move(this: *mut Self::Repr, source: *const Self::Repr, tag: u8);

    /// The name of the alternative at `tag`; one past the end names the
    /// [`NullVariant`] marker.
    fn type_name(tag: u8) -> &'static str;
}

impl SumList for () {
    type Repr = Nil;

    unsafe fn destruct(_: *mut Nil, tag: u8) {
        unreachable!("discriminant {tag} is out of range")
    }

    unsafe fn construct_move(_: *mut Nil, _: *const Nil, tag: u8) {
        unreachable!("discriminant {tag} is out of range")
    }

    unsafe fn assign_move(_: *mut Nil, _: *const Nil, tag: u8) {
        unreachable!("discriminant {tag} is out of range")
    }

    fn type_name(_: u8) -> &'static str {
        any::type_name::<NullVariant>()
    }
}

impl<Head, Tail> SumList for (Head, Tail)
where
    Tail: SumList,
{
    type Repr = Cons<Head, Tail::Repr>;

    unsafe fn destruct(this: *mut Self::Repr, tag: u8) {
        if tag == 0 {
            unsafe { ptr::drop_in_place(Cons::head_mut(this)) }
        } else {
            unsafe { Tail::destruct(Cons::tail_mut(this), tag - 1) }
        }
    }

    unsafe fn construct_move(this: *mut Self::Repr, source: *const Self::Repr, tag: u8) {
        if tag == 0 {
            unsafe { ptr::copy_nonoverlapping(Cons::head(source), Cons::head_mut(this), 1) }
        } else {
            unsafe { Tail::construct_move(Cons::tail_mut(this), Cons::tail(source), tag - 1) }
        }
    }

    unsafe fn assign_move(this: *mut Self::Repr, source: *const Self::Repr, tag: u8) {
        if tag == 0 {
            unsafe { *Cons::head_mut(this) = ptr::read(Cons::head(source)) }
        } else {
            unsafe { Tail::assign_move(Cons::tail_mut(this), Cons::tail(source), tag - 1) }
        }
    }

    fn type_name(tag: u8) -> &'static str {
        match tag {
            0 => any::type_name::<Head>(),
            _ => Tail::type_name(tag - 1),
        }
    }
}

/// The trait that type lists implement to address the slot of alternative
/// `T` at position `U` directly, without walking a runtime discriminant.
pub trait Split<T, U: Index>: SumList + Contains<T, U> {
    #[doc(hidden)]
    fn from_data(data: T) -> Self::Repr;

    #[doc(hidden)]
    fn as_ptr(this: *const Self::Repr) -> *const T;

    #[doc(hidden)]
    fn as_mut_ptr(this: *mut Self::Repr) -> *mut T;
}

impl<Head, Tail> Split<Head, UTerm> for (Head, Tail)
where
    Tail: SumList,
{
    fn from_data(data: Head) -> Self::Repr {
        Cons { data: ManuallyDrop::new(data) }
    }

    fn as_ptr(this: *const Self::Repr) -> *const Head {
        Cons::head(this)
    }

    fn as_mut_ptr(this: *mut Self::Repr) -> *mut Head {
        Cons::head_mut(this)
    }
}

impl<Head, Tail, T, U: Index> Split<T, UInt<U>> for (Head, Tail)
where
    Tail: Split<T, U>,
{
    fn from_data(data: T) -> Self::Repr {
        Cons {
            next: ManuallyDrop::new(Tail::from_data(data)),
        }
    }

    fn as_ptr(this: *const Self::Repr) -> *const T {
        let ptr = Tail::as_ptr(Cons::tail(this));
        debug_assert_eq!(ptr.cast(), this);
        ptr
    }

    fn as_mut_ptr(this: *mut Self::Repr) -> *mut T {
        let ptr = Tail::as_mut_ptr(Cons::tail_mut(this));
        debug_assert_eq!(ptr.cast(), this);
        ptr
    }
}

#[cfg(test)]
mod tests {
    use core::mem::{self, MaybeUninit};
    use std::string::{String, ToString};

    use super::*;

    type List = crate::T![u8, u64, String];

    #[test]
    fn layout_fits_largest() {
        type R = <List as SumList>::Repr;
        assert!(mem::size_of::<R>() >= mem::size_of::<String>());
        assert!(mem::size_of::<R>() >= mem::size_of::<u64>());
        assert!(mem::align_of::<R>() >= mem::align_of::<u64>());
    }

    #[test]
    fn slots_overlap() {
        let mut cell = MaybeUninit::<<List as SumList>::Repr>::uninit();
        let base = cell.as_mut_ptr();
        assert_eq!(<List as Split<u8, _>>::as_mut_ptr(base).cast(), base);
        assert_eq!(<List as Split<String, _>>::as_mut_ptr(base).cast(), base);
    }

    #[test]
    fn relocate_and_destruct() {
        let src = MaybeUninit::new(<List as Split<String, _>>::from_data("moved".to_string()));
        let mut dst = MaybeUninit::<<List as SumList>::Repr>::uninit();
        unsafe {
            List::construct_move(dst.as_mut_ptr(), src.as_ptr(), 2);
            assert_eq!(*<List as Split<String, _>>::as_ptr(dst.as_ptr()), "moved");
            List::destruct(dst.as_mut_ptr(), 2);
        }
    }

    #[test]
    fn names() {
        assert_eq!(List::type_name(0), "u8");
        assert_eq!(List::type_name(1), "u64");
        assert!(List::type_name(3).ends_with("NullVariant"));
    }
}
