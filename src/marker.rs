//! Zero-sized markers: the empty value, and the tokens choosing between the
//! empty-capable and the never-empty flavour.

use core::marker::PhantomData;

use crate::{
    index::Index,
    repr::{Split, SumList},
    OptVariant, Variant,
};

/// The "no active alternative" value.
///
/// Converts into an empty [`OptVariant`] and compares equal to one. A
/// [`Variant`] has no empty state, so it accepts neither:
///
/// ```rust,compile_fail
/// use tvariant::{NullVariant, Variant};
///
/// let v: Variant![bool, i32] = NullVariant.into();
/// ```
///
/// ```rust,compile_fail
/// use tvariant::{NullVariant, Variant};
///
/// let v: Variant![bool, i32] = Variant::new(1i32);
/// assert!(v != NullVariant);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NullVariant;

/// Selects [`OptVariant`] in [`make_variant`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Nullable;

/// Selects [`Variant`] in [`make_variant`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NonNullable;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Nullable {}
    impl Sealed for super::NonNullable {}
}

/// Maps a capability token to the variant flavour it stands for.
pub trait Capability: sealed::Sealed {
    type Variant<S: SumList>;

    #[doc(hidden)]
    fn wrap<S, T, U>(value: T) -> Self::Variant<S>
    where
        S: Split<T, U>,
        U: Index;
}

impl Capability for Nullable {
    type Variant<S: SumList> = OptVariant<S>;

    fn wrap<S, T, U>(value: T) -> OptVariant<S>
    where
        S: Split<T, U>,
        U: Index,
    {
        OptVariant::new(value)
    }
}

impl Capability for NonNullable {
    type Variant<S: SumList> = Variant<S>;

    fn wrap<S, T, U>(value: T) -> Variant<S>
    where
        S: Split<T, U>,
        U: Index,
    {
        Variant::new(value)
    }
}

/// Names a type list at the value level.
pub type Signature<S> = PhantomData<S>;

/// Builds the variant flavour chosen by `capability` over the list named by
/// `signature`, holding `value`.
///
/// # Examples
///
/// ```rust
/// use core::marker::PhantomData;
/// use tvariant::{make_variant, NonNullable, NullVariant, Nullable, T};
///
/// let a = make_variant(42i32, PhantomData::<T![bool, i32]>, Nullable);
/// assert!(a != NullVariant);
///
/// let b = make_variant(true, a.type_marker(), NonNullable);
/// assert!(b.is::<bool, _>());
/// ```
pub fn make_variant<C, S, T, U>(value: T, _signature: Signature<S>, _capability: C) -> C::Variant<S>
where
    C: Capability,
    S: Split<T, U>,
    U: Index,
{
    C::wrap(value)
}

#[cfg(test)]
mod tests {
    use std::string::{String, ToString};

    use super::*;

    type List = crate::T![bool, i32, String];

    #[test]
    fn nullable() {
        let mut v = make_variant("text".to_string(), Signature::<List>::default(), Nullable);
        assert_eq!(v.get::<String, _>().map(String::as_str), Ok("text"));
        v.clear();
        assert_eq!(v, NullVariant);
    }

    #[test]
    fn non_nullable() {
        let v = make_variant(7i32, Signature::<List>::default(), NonNullable);
        assert_eq!(v.index(), 1);
        assert_eq!(v.get::<i32, _>(), Ok(&7));
    }
}
