//! Per-discriminant dispatch of the standard traits over a representation
//! chain. Each trait is implemented for a type list when every alternative
//! implements the corresponding standard trait.

use core::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::repr::{Cons, SumList};

pub trait ListClone: SumList {
    /// Clones the alternative at `tag` of `source` into the uninitialised
    /// `this`.
    #[doc(hidden)]
    unsafe fn construct_copy(this: *mut Self::Repr, source: *const Self::Repr, tag: u8);

    /// `Clone::clone_from` between two cells both holding alternative `tag`.
    #[doc(hidden)]
    unsafe fn assign_copy(this: *mut Self::Repr, source: *const Self::Repr, tag: u8);
}

impl ListClone for () {
    unsafe fn construct_copy(_: *mut Self::Repr, _: *const Self::Repr, tag: u8) {
        unreachable!("discriminant {tag} is out of range")
    }

    unsafe fn assign_copy(_: *mut Self::Repr, _: *const Self::Repr, tag: u8) {
        unreachable!("discriminant {tag} is out of range")
    }
}

impl<Head: Clone, Tail: ListClone> ListClone for (Head, Tail) {
    unsafe fn construct_copy(this: *mut Self::Repr, source: *const Self::Repr, tag: u8) {
        if tag == 0 {
            unsafe { Cons::head_mut(this).write((*Cons::head(source)).clone()) }
        } else {
            unsafe { Tail::construct_copy(Cons::tail_mut(this), Cons::tail(source), tag - 1) }
        }
    }

    unsafe fn assign_copy(this: *mut Self::Repr, source: *const Self::Repr, tag: u8) {
        if tag == 0 {
            unsafe { (*Cons::head_mut(this)).clone_from(&*Cons::head(source)) }
        } else {
            unsafe { Tail::assign_copy(Cons::tail_mut(this), Cons::tail(source), tag - 1) }
        }
    }
}

pub trait ListPartialEq: SumList {
    #[doc(hidden)]
    unsafe fn equals(this: *const Self::Repr, other: *const Self::Repr, tag: u8) -> bool;

    #[doc(hidden)]
    unsafe fn not_equals(this: *const Self::Repr, other: *const Self::Repr, tag: u8) -> bool;
}

impl ListPartialEq for () {
    unsafe fn equals(_: *const Self::Repr, _: *const Self::Repr, tag: u8) -> bool {
        unreachable!("discriminant {tag} is out of range")
    }

    unsafe fn not_equals(_: *const Self::Repr, _: *const Self::Repr, tag: u8) -> bool {
        unreachable!("discriminant {tag} is out of range")
    }
}

impl<Head: PartialEq, Tail: ListPartialEq> ListPartialEq for (Head, Tail) {
    unsafe fn equals(this: *const Self::Repr, other: *const Self::Repr, tag: u8) -> bool {
        if tag == 0 {
            unsafe { *Cons::head(this) == *Cons::head(other) }
        } else {
            unsafe { Tail::equals(Cons::tail(this), Cons::tail(other), tag - 1) }
        }
    }

    unsafe fn not_equals(this: *const Self::Repr, other: *const Self::Repr, tag: u8) -> bool {
        if tag == 0 {
            unsafe { *Cons::head(this) != *Cons::head(other) }
        } else {
            unsafe { Tail::not_equals(Cons::tail(this), Cons::tail(other), tag - 1) }
        }
    }
}

pub trait ListDebug: SumList {
    #[doc(hidden)]
    unsafe fn fmt(this: *const Self::Repr, tag: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl ListDebug for () {
    unsafe fn fmt(_: *const Self::Repr, tag: u8, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        unreachable!("discriminant {tag} is out of range")
    }
}

impl<Head: fmt::Debug, Tail: ListDebug> ListDebug for (Head, Tail) {
    unsafe fn fmt(this: *const Self::Repr, tag: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if tag == 0 {
            fmt::Debug::fmt(unsafe { &*Cons::head(this) }, f)
        } else {
            unsafe { Tail::fmt(Cons::tail(this), tag - 1, f) }
        }
    }
}

pub trait ListHash: SumList {
    #[doc(hidden)]
    unsafe fn hash<H: Hasher>(this: *const Self::Repr, tag: u8, state: &mut H);
}

impl ListHash for () {
    unsafe fn hash<H: Hasher>(_: *const Self::Repr, tag: u8, _: &mut H) {
        unreachable!("discriminant {tag} is out of range")
    }
}

impl<Head: Hash, Tail: ListHash> ListHash for (Head, Tail) {
    unsafe fn hash<H: Hasher>(this: *const Self::Repr, tag: u8, state: &mut H) {
        if tag == 0 {
            unsafe { (*Cons::head(this)).hash(state) }
        } else {
            unsafe { Tail::hash(Cons::tail(this), tag - 1, state) }
        }
    }
}
