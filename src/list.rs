//! Compile-time algorithms over type lists.
//!
//! A type list is a nested pair `(T0, (T1, (.., ())))`, usually spelled with
//! the [`T`](crate::T) macro. All of the traits here are resolved by the
//! compiler; none of them carry runtime state.
//!
//! | operation   | spelled as                          |
//! |-------------|-------------------------------------|
//! | length      | `<S as TypeList>::LEN`              |
//! | at(i)       | `Nth<S, Ui>`                        |
//! | has(X)      | the bound `S: Contains<X, _>`       |
//! | first(X)    | the `U` inferred for `Contains<X, U>` |
//!
//! Alternatives are expected to be distinct. If a type occurs twice, the
//! position can no longer be inferred and has to be named explicitly:
//!
//! ```rust
//! use tvariant::{T, index::{Index, U1}, list::Contains};
//!
//! fn position<S: Contains<X, U>, X, U: Index>() -> u8 {
//!     S::INDEX
//! }
//!
//! assert_eq!(position::<T![bool, i32], i32, _>(), 1);
//! assert_eq!(position::<T![i32, i32], i32, U1>(), 1);
//! ```

use crate::index::{Index, UInt, UTerm};

/// A type list with a known length.
pub trait TypeList {
    /// The length, as a type-level number.
    type Len: Index;

    /// The length, as a value.
    const LEN: u8 = <Self::Len as Index>::TAG;
}

impl TypeList for () {
    type Len = UTerm;
}

impl<Head, Tail: TypeList> TypeList for (Head, Tail) {
    type Len = UInt<Tail::Len>;
}

/// Looks up the type at position `U`.
///
/// Not implemented for positions past the end, so an out-of-range lookup is a
/// compile error:
///
/// ```rust,compile_fail
/// use tvariant::{T, index::U2, list::Nth};
///
/// let _: Nth<T![bool, i32], U2> = true;
/// ```
pub trait At<U: Index>: TypeList {
    /// The type found at position `U`.
    type Output;
}

impl<Head, Tail: TypeList> At<UTerm> for (Head, Tail) {
    type Output = Head;
}

impl<Head, Tail, U: Index> At<UInt<U>> for (Head, Tail)
where
    Tail: At<U>,
{
    type Output = Tail::Output;
}

/// The type at position `U` of the list `S`.
pub type Nth<S, U> = <S as At<U>>::Output;

/// Implemented when `T` sits at position `U` of the list.
///
/// With distinct alternatives there is exactly one such `U`, which is what
/// makes `_` work in place of an explicit position.
pub trait Contains<T, U: Index>: TypeList {
    /// The discriminant of `T` in this list.
    const INDEX: u8 = U::TAG;
}

impl<Head, Tail: TypeList> Contains<Head, UTerm> for (Head, Tail) {}

impl<Head, Tail, T, U: Index> Contains<T, UInt<U>> for (Head, Tail) where Tail: Contains<T, U> {}
