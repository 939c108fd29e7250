//! Type-level discriminants.
//!
//! A position in a type list is spelled as a Peano number: [`UTerm`] is the
//! head, and every [`UInt`] steps one element further down the tail. These
//! types are only ever named in bounds and turbofish arguments; the runtime
//! discriminant of a variant is the matching [`Index::TAG`].

use core::marker::PhantomData;

/// Position zero of a type list.
pub struct UTerm;

/// The position right after `U`.
pub struct UInt<U>(PhantomData<U>);

/// A type-level position that lowers to a runtime discriminant.
pub trait Index {
    /// The discriminant value of this position.
    const TAG: u8;
}

impl Index for UTerm {
    const TAG: u8 = 0;
}

impl<U: Index> Index for UInt<U> {
    const TAG: u8 = 1 + U::TAG;
}

pub type U0 = UTerm;
pub type U1 = UInt<U0>;
pub type U2 = UInt<U1>;
pub type U3 = UInt<U2>;
pub type U4 = UInt<U3>;
pub type U5 = UInt<U4>;
pub type U6 = UInt<U5>;
pub type U7 = UInt<U6>;
pub type U8 = UInt<U7>;
pub type U9 = UInt<U8>;

pub type U10 = UInt<U9>;
pub type U11 = UInt<U10>;
pub type U12 = UInt<U11>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags() {
        assert_eq!(U0::TAG, 0);
        assert_eq!(U1::TAG, 1);
        assert_eq!(U7::TAG, 7);
        assert_eq!(U12::TAG, 12);
    }
}
