//! The storage cell shared by [`Variant`] and [`OptVariant`].
//!
//! A [`Storage`] is raw memory large and aligned enough for any single
//! alternative of its type list. It does not know which alternative, if any,
//! is live: every operation trusts the discriminant passed in by the owner.
//! Passing a discriminant that does not match the last construction is
//! undefined behaviour, which is why almost everything here is `unsafe`.
//!
//! Rust's own vocabulary maps onto the cell like this:
//!
//! - copy construction is [`Clone::clone`], copy assignment is
//!   [`Clone::clone_from`];
//! - move construction relocates the bits and leaves the source cell
//!   uninitialised; move assignment drops the destination's value first;
//! - equality is [`PartialEq::eq`] / [`PartialEq::ne`] of the alternative.
//!
//! [`Variant`]: crate::Variant
//! [`OptVariant`]: crate::OptVariant

use core::{fmt, hash::Hasher, mem::MaybeUninit, ptr};

use crate::{
    derive::{ListClone, ListDebug, ListHash, ListPartialEq},
    index::Index,
    repr::{Split, SumList},
};

pub struct Storage<S: SumList> {
    cell: MaybeUninit<S::Repr>,
}

impl<S: SumList> Storage<S> {
    /// A cell with no live value.
    pub const fn uninit() -> Self {
        Storage {
            cell: MaybeUninit::uninit(),
        }
    }

    /// A cell holding `value`.
    pub fn new<T, U>(value: T) -> Self
    where
        S: Split<T, U>,
        U: Index,
    {
        Storage {
            cell: MaybeUninit::new(S::from_data(value)),
        }
    }

    /// Constructs `value` into the cell.
    ///
    /// # Safety
    ///
    /// The cell must hold no live value; a live one would be leaked.
    pub unsafe fn initialise<T, U>(&mut self, value: T)
    where
        S: Split<T, U>,
        U: Index,
    {
        unsafe { S::as_mut_ptr(self.cell.as_mut_ptr()).write(value) }
    }

    /// # Safety
    ///
    /// The cell must hold a live `T`.
    pub unsafe fn get<T, U>(&self) -> &T
    where
        S: Split<T, U>,
        U: Index,
    {
        unsafe { &*S::as_ptr(self.cell.as_ptr()) }
    }

    /// # Safety
    ///
    /// The cell must hold a live `T`.
    pub unsafe fn get_mut<T, U>(&mut self) -> &mut T
    where
        S: Split<T, U>,
        U: Index,
    {
        unsafe { &mut *S::as_mut_ptr(self.cell.as_mut_ptr()) }
    }

    /// Assigns `value` over the live `T` in place.
    ///
    /// # Safety
    ///
    /// The cell must hold a live `T`.
    pub unsafe fn assign<T, U>(&mut self, value: T)
    where
        S: Split<T, U>,
        U: Index,
    {
        unsafe { *self.get_mut::<T, U>() = value }
    }

    /// Moves the live `T` out, leaving the cell uninitialised.
    ///
    /// # Safety
    ///
    /// The cell must hold a live `T`, and must be treated as uninitialised
    /// afterwards.
    pub unsafe fn take<T, U>(&mut self) -> T
    where
        S: Split<T, U>,
        U: Index,
    {
        unsafe { ptr::read(S::as_ptr(self.cell.as_ptr())) }
    }

    /// Drops the live value at `tag`.
    ///
    /// # Safety
    ///
    /// The cell must hold a live value of alternative `tag`, and must be
    /// treated as uninitialised afterwards.
    pub unsafe fn destruct(&mut self, tag: u8) {
        unsafe { S::destruct(self.cell.as_mut_ptr(), tag) }
    }

    /// Relocates the value at `tag` out of `source` into this cell.
    ///
    /// # Safety
    ///
    /// This cell must hold no live value and `source` must hold a live value
    /// of alternative `tag`. `source` must be treated as uninitialised
    /// afterwards.
    pub unsafe fn construct_move(&mut self, tag: u8, source: &mut Self) {
        unsafe { S::construct_move(self.cell.as_mut_ptr(), source.cell.as_ptr(), tag) }
    }

    /// Drops the value at `tag` and relocates the one from `source` over it.
    ///
    /// # Safety
    ///
    /// Both cells must hold a live value of alternative `tag`. `source` must
    /// be treated as uninitialised afterwards.
    pub unsafe fn assign_move(&mut self, tag: u8, source: &mut Self) {
        unsafe { S::assign_move(self.cell.as_mut_ptr(), source.cell.as_ptr(), tag) }
    }

    /// The name of alternative `tag`.
    pub fn type_name(&self, tag: u8) -> &'static str {
        S::type_name(tag)
    }
}

impl<S: ListClone> Storage<S> {
    /// Clones the value at `tag` of `source` into this cell.
    ///
    /// # Safety
    ///
    /// This cell must hold no live value and `source` must hold a live value
    /// of alternative `tag`.
    pub unsafe fn construct_copy(&mut self, tag: u8, source: &Self) {
        unsafe { S::construct_copy(self.cell.as_mut_ptr(), source.cell.as_ptr(), tag) }
    }

    /// Clones the value at `tag` of `source` over this cell's in place.
    ///
    /// # Safety
    ///
    /// Both cells must hold a live value of alternative `tag`.
    pub unsafe fn assign_copy(&mut self, tag: u8, source: &Self) {
        unsafe { S::assign_copy(self.cell.as_mut_ptr(), source.cell.as_ptr(), tag) }
    }
}

impl<S: ListPartialEq> Storage<S> {
    /// # Safety
    ///
    /// Both cells must hold a live value of alternative `tag`.
    pub unsafe fn equals(&self, tag: u8, other: &Self) -> bool {
        unsafe { S::equals(self.cell.as_ptr(), other.cell.as_ptr(), tag) }
    }

    /// # Safety
    ///
    /// Both cells must hold a live value of alternative `tag`.
    pub unsafe fn not_equals(&self, tag: u8, other: &Self) -> bool {
        unsafe { S::not_equals(self.cell.as_ptr(), other.cell.as_ptr(), tag) }
    }
}

impl<S: ListDebug> Storage<S> {
    /// # Safety
    ///
    /// The cell must hold a live value of alternative `tag`.
    pub unsafe fn fmt_debug(&self, tag: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        unsafe { <S as ListDebug>::fmt(self.cell.as_ptr(), tag, f) }
    }
}

impl<S: ListHash> Storage<S> {
    /// # Safety
    ///
    /// The cell must hold a live value of alternative `tag`.
    pub unsafe fn hash<H: Hasher>(&self, tag: u8, state: &mut H) {
        unsafe { <S as ListHash>::hash(self.cell.as_ptr(), tag, state) }
    }
}

#[cfg(test)]
mod tests {
    use std::string::{String, ToString};

    use super::*;
    use crate::test_type::{Counters, Probe};

    type List = crate::T![u32, String, Probe];

    #[test]
    fn initialise_get_destruct() {
        let mut cell = Storage::<List>::uninit();
        unsafe {
            cell.initialise("cell".to_string());
            assert_eq!(cell.get::<String, _>(), "cell");
            cell.get_mut::<String, _>().push('!');
            cell.assign(cell.get::<String, _>().clone() + "?");
            assert_eq!(cell.get::<String, _>(), "cell!?");
            cell.destruct(1);
        }
    }

    #[test]
    fn copy_and_move() {
        let counters = Counters::default();
        let mut a = Storage::<List>::new(Probe::new(&counters, 7));
        let mut b = Storage::<List>::uninit();
        let mut c = Storage::<List>::uninit();
        unsafe {
            b.construct_copy(2, &a);
            assert_eq!(counters.clones(), 1);
            assert!(a.equals(2, &b));
            assert!(!a.not_equals(2, &b));

            b.get_mut::<Probe, _>().value = 8;
            assert!(a.not_equals(2, &b));

            b.assign_copy(2, &a);
            assert_eq!(counters.clone_froms(), 1);
            assert_eq!(b.get::<Probe, _>().value, 7);

            c.construct_move(2, &mut a);
            assert_eq!(counters.drops(), 0);
            c.assign_move(2, &mut b);
            assert_eq!(counters.drops(), 1);

            c.destruct(2);
        }
        assert_eq!(counters.clones(), 1);
        assert_eq!(counters.drops(), 2);
    }

    #[test]
    fn take() {
        let mut cell = Storage::<List>::new(5u32);
        assert_eq!(unsafe { cell.take::<u32, _>() }, 5);
        assert_eq!(cell.type_name(0), "u32");
    }
}
