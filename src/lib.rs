#![doc = include_str!("../README.md")]
#![no_std]
#![deny(future_incompatible)]
#![deny(rust_2018_idioms)]
#![deny(rust_2024_compatibility)]
#![allow(edition_2024_expr_fragment_specifier)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod derive;
mod error;
pub mod index;
pub mod list;
mod marker;
mod opt;
pub mod repr;
pub mod storage;
#[cfg(test)]
mod test_type;
mod variant;

pub use self::{
    derive::{ListClone, ListDebug, ListHash, ListPartialEq},
    error::BadVariantAccess,
    marker::{make_variant, Capability, NonNullable, NullVariant, Nullable, Signature},
    opt::OptVariant,
    variant::Variant,
};

pub type Repr<S> = <S as repr::SumList>::Repr;
