use core::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem::ManuallyDrop,
};

use crate::{
    derive::{ListClone, ListDebug, ListHash, ListPartialEq},
    error::BadVariantAccess,
    index::Index,
    list::{Contains, TypeList},
    marker::NullVariant,
    repr::{Split, SumList},
    storage::Storage,
    variant::Variant,
};

/// A value of at most one of the types in the list `S`.
///
/// Besides one state per alternative, an `OptVariant` has an empty state,
/// which compares equal to [`NullVariant`]. Its discriminant is the length of
/// the list. Moves through [`take`](Self::take) and
/// [`move_from`](Self::move_from) are destructive: the source is left empty.
///
/// Usually spelled with the [`OptVariant!`](crate::OptVariant!) macro.
///
/// # Examples
///
/// ```rust
/// use tvariant::{NullVariant, OptVariant};
///
/// let mut v: OptVariant![bool, i32, String] = OptVariant::null();
/// assert_eq!(v, NullVariant);
///
/// v.set(7i32);
/// assert_eq!(v.get::<i32, _>(), Ok(&7));
///
/// let moved = v.take();
/// assert!(v.is_null());
/// assert!(v.get::<i32, _>().is_err());
/// assert_eq!(moved.get::<i32, _>(), Ok(&7));
/// ```
pub struct OptVariant<S: SumList> {
    tag: u8,
    storage: Storage<S>,
}

impl<S: SumList> OptVariant<S> {
    const EMPTY: u8 = <S as TypeList>::LEN;

    /// An empty variant.
    pub const fn null() -> Self {
        OptVariant {
            tag: Self::EMPTY,
            storage: Storage::uninit(),
        }
    }

    /// Constructs a variant holding `value`.
    pub fn new<T, U>(value: T) -> Self
    where
        S: Split<T, U>,
        U: Index,
    {
        OptVariant {
            tag: U::TAG,
            storage: Storage::new::<T, U>(value),
        }
    }

    /// Like [`OptVariant::new`], with the type list named by a marker.
    pub fn new_marked<T, U>(value: T, _: PhantomData<S>) -> Self
    where
        S: Split<T, U>,
        U: Index,
    {
        Self::new(value)
    }

    pub fn type_marker(&self) -> PhantomData<S> {
        PhantomData
    }

    /// The discriminant of the active alternative, or `None` when empty.
    pub fn index(&self) -> Option<u8> {
        (self.tag != Self::EMPTY).then_some(self.tag)
    }

    /// The type name of the active alternative, or of [`NullVariant`] when
    /// empty.
    pub fn type_name(&self) -> &'static str {
        self.storage.type_name(self.tag)
    }

    pub fn is_null(&self) -> bool {
        self.tag == Self::EMPTY
    }

    /// Whether `T` is the active alternative.
    pub fn is<T, U>(&self) -> bool
    where
        S: Contains<T, U>,
        U: Index,
    {
        self.tag == U::TAG
    }

    /// Drops the active value, if any, and leaves the variant empty.
    pub fn clear(&mut self) {
        let tag = self.tag;
        if tag != Self::EMPTY {
            self.tag = Self::EMPTY;
            unsafe { self.storage.destruct(tag) }
        }
    }

    /// Assigns `value`, replacing the active alternative.
    ///
    /// An empty variant constructs `value` in place. If `T` is already
    /// active the value is assigned in place; otherwise the old value is
    /// dropped first.
    pub fn set<T, U>(&mut self, value: T)
    where
        S: Split<T, U>,
        U: Index,
    {
        if self.tag == U::TAG {
            unsafe { self.storage.assign::<T, U>(value) }
            return;
        }
        self.clear();
        unsafe { self.storage.initialise::<T, U>(value) };
        self.tag = U::TAG;
    }

    fn mismatch<T>(&self) -> BadVariantAccess {
        BadVariantAccess::new(core::any::type_name::<T>(), self.type_name())
    }

    /// Returns the active `T`, or an error if another alternative is active
    /// or the variant is empty.
    pub fn get<T, U>(&self) -> Result<&T, BadVariantAccess>
    where
        S: Split<T, U>,
        U: Index,
    {
        if self.tag != U::TAG {
            return Err(self.mismatch::<T>());
        }
        Ok(unsafe { self.storage.get::<T, U>() })
    }

    /// Returns the active `T`, or an error if another alternative is active
    /// or the variant is empty.
    pub fn get_mut<T, U>(&mut self) -> Result<&mut T, BadVariantAccess>
    where
        S: Split<T, U>,
        U: Index,
    {
        if self.tag != U::TAG {
            return Err(self.mismatch::<T>());
        }
        Ok(unsafe { self.storage.get_mut::<T, U>() })
    }

    /// Returns the `T` without checking that it is active.
    ///
    /// # Safety
    ///
    /// `T` must be the active alternative.
    pub unsafe fn get_unchecked<T, U>(&self) -> &T
    where
        S: Split<T, U>,
        U: Index,
    {
        debug_assert_eq!(self.tag, U::TAG);
        unsafe { self.storage.get::<T, U>() }
    }

    /// Returns the `T` without checking that it is active.
    ///
    /// # Safety
    ///
    /// `T` must be the active alternative.
    pub unsafe fn get_unchecked_mut<T, U>(&mut self) -> &mut T
    where
        S: Split<T, U>,
        U: Index,
    {
        debug_assert_eq!(self.tag, U::TAG);
        unsafe { self.storage.get_mut::<T, U>() }
    }

    pub fn try_get<T, U>(&self) -> Option<&T>
    where
        S: Split<T, U>,
        U: Index,
    {
        (self.tag == U::TAG).then(|| unsafe { self.storage.get::<T, U>() })
    }

    pub fn try_get_mut<T, U>(&mut self) -> Option<&mut T>
    where
        S: Split<T, U>,
        U: Index,
    {
        (self.tag == U::TAG).then(|| unsafe { self.storage.get_mut::<T, U>() })
    }

    /// Moves the `T` out if it is active, leaving the variant empty.
    /// Otherwise nothing changes.
    pub fn try_take<T, U>(&mut self) -> Option<T>
    where
        S: Split<T, U>,
        U: Index,
    {
        if self.tag != U::TAG {
            return None;
        }
        self.tag = Self::EMPTY;
        Some(unsafe { self.storage.take::<T, U>() })
    }

    /// Moves the `T` out if it is active, or gives the variant back.
    pub fn try_unwrap<T, U>(mut self) -> Result<T, Self>
    where
        S: Split<T, U>,
        U: Index,
    {
        let value = self.try_take::<T, U>();
        value.ok_or(self)
    }

    /// Moves the whole value out, leaving this variant empty.
    pub fn take(&mut self) -> Self {
        let mut out = Self::null();
        out.move_from(self);
        out
    }

    /// Move-assigns from `source`, which is left empty.
    ///
    /// The discriminants decide what happens to the value held here: it is
    /// move-assigned in place when both hold the same alternative, dropped
    /// when they differ or when `source` is empty.
    pub fn move_from(&mut self, source: &mut Self) {
        let (tag, other) = (self.tag, source.tag);
        if other == Self::EMPTY {
            self.clear();
            return;
        }
        source.tag = Self::EMPTY;
        if tag == other {
            unsafe { self.storage.assign_move(tag, &mut source.storage) }
        } else {
            self.clear();
            unsafe { self.storage.construct_move(other, &mut source.storage) }
            self.tag = other;
        }
    }

    /// Converts into a [`Variant`], or `None` when empty.
    pub fn into_variant(self) -> Option<Variant<S>> {
        if self.is_null() {
            return None;
        }
        let this = ManuallyDrop::new(self);
        let storage = unsafe { core::ptr::read(&this.storage) };
        Some(unsafe { Variant::from_parts(this.tag, storage) })
    }
}

impl<S: SumList> Default for OptVariant<S> {
    fn default() -> Self {
        Self::null()
    }
}

impl<S: SumList> From<NullVariant> for OptVariant<S> {
    fn from(_: NullVariant) -> Self {
        Self::null()
    }
}

impl<S: SumList> From<Variant<S>> for OptVariant<S> {
    fn from(variant: Variant<S>) -> Self {
        let (tag, storage) = variant.into_parts();
        OptVariant { tag, storage }
    }
}

impl<S: SumList> Drop for OptVariant<S> {
    fn drop(&mut self) {
        if self.tag != Self::EMPTY {
            unsafe { self.storage.destruct(self.tag) }
        }
    }
}

impl<S: ListClone> Clone for OptVariant<S> {
    fn clone(&self) -> Self {
        let mut out = Self::null();
        if self.tag != Self::EMPTY {
            unsafe { out.storage.construct_copy(self.tag, &self.storage) };
            out.tag = self.tag;
        }
        out
    }

    /// Clones in place when both hold the same alternative; otherwise the
    /// value held here is dropped before the new one is cloned in.
    fn clone_from(&mut self, source: &Self) {
        let (tag, other) = (self.tag, source.tag);
        if other == Self::EMPTY {
            self.clear();
        } else if tag == other {
            unsafe { self.storage.assign_copy(tag, &source.storage) }
        } else {
            self.clear();
            unsafe { self.storage.construct_copy(other, &source.storage) };
            self.tag = other;
        }
    }
}

impl<S: ListPartialEq> PartialEq for OptVariant<S> {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag
            && (self.tag == Self::EMPTY || unsafe { self.storage.equals(self.tag, &other.storage) })
    }

    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, other: &Self) -> bool {
        self.tag != other.tag
            || (self.tag != Self::EMPTY
                && unsafe { self.storage.not_equals(self.tag, &other.storage) })
    }
}

impl<S: ListPartialEq + Eq> Eq for OptVariant<S> {}

impl<S: SumList> PartialEq<NullVariant> for OptVariant<S> {
    fn eq(&self, _: &NullVariant) -> bool {
        self.is_null()
    }
}

impl<S: SumList> PartialEq<OptVariant<S>> for NullVariant {
    fn eq(&self, other: &OptVariant<S>) -> bool {
        other.is_null()
    }
}

impl<S: ListHash> Hash for OptVariant<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag.hash(state);
        if self.tag != Self::EMPTY {
            unsafe { self.storage.hash(self.tag, state) }
        }
    }
}

impl<S: ListDebug> fmt::Debug for OptVariant<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.tag == Self::EMPTY {
            return fmt::Debug::fmt(&NullVariant, f);
        }
        unsafe { self.storage.fmt_debug(self.tag, f) }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        format,
        string::{String, ToString},
    };

    use super::*;
    use crate::test_type::{Counters, Probe};

    type V = crate::OptVariant![bool, i32, String];
    type P = crate::OptVariant![i32, Probe];

    #[test]
    fn empty_states() {
        let v = V::default();
        assert!(v.is_null());
        assert_eq!(v, NullVariant);
        assert_eq!(NullVariant, v);
        assert_eq!(v.index(), None);
        assert_eq!(V::from(NullVariant), V::null());

        let err = v.get::<bool, _>().unwrap_err();
        assert_eq!(err.requested(), "bool");
        assert!(err.active().ends_with("NullVariant"));
        assert!(v.try_get::<i32, _>().is_none());
    }

    #[test]
    fn null_round_trip() {
        let counters = Counters::default();
        let mut v = P::null();
        v.set(Probe::new(&counters, 7));
        assert!(v != NullVariant);
        assert_eq!(v.index(), Some(1));

        v.clear();
        assert_eq!(v, NullVariant);
        assert_eq!(counters.drops(), 1);

        v.clear();
        assert_eq!(counters.drops(), 1);
    }

    #[test]
    fn set_cases() {
        let counters = Counters::default();
        let mut v = P::new(1i32);

        v.set(Probe::new(&counters, 1));
        assert_eq!(counters.drops(), 0);

        v.set(Probe::new(&counters, 2));
        assert_eq!(v.index(), Some(1));
        assert_eq!(counters.drops(), 1);

        v.set(3i32);
        assert_eq!(counters.drops(), 2);
        assert_eq!(v.get::<i32, _>(), Ok(&3));
        assert_eq!(counters.clones(), 0);
    }

    #[test]
    fn take_is_destructive() {
        let mut v = V::new("moved".to_string());
        let w = v.take();
        assert!(v.is_null());
        assert!(v.get::<String, _>().is_err());
        assert!(v.get::<bool, _>().is_err());
        assert_eq!(w.get::<String, _>().map(String::as_str), Ok("moved"));

        let mut empty = V::null();
        assert!(empty.take().is_null());
    }

    #[test]
    fn move_from_cases() {
        let counters = Counters::default();
        let probe = |value| P::new(Probe::new(&counters, value));

        // empty <- empty
        let mut a = P::null();
        a.move_from(&mut P::null());
        assert!(a.is_null());

        // empty <- value
        let mut source = probe(1);
        a.move_from(&mut source);
        assert!(source.is_null());
        assert_eq!(a.get::<Probe, _>().map(|p| p.value), Ok(1));
        assert_eq!(counters.drops(), 0);

        // same alternative
        let mut source = probe(2);
        a.move_from(&mut source);
        assert!(source.is_null());
        assert_eq!(a.get::<Probe, _>().map(|p| p.value), Ok(2));
        assert_eq!(counters.drops(), 1);

        // different alternative
        let mut source = P::new(5i32);
        a.move_from(&mut source);
        assert!(source.is_null());
        assert_eq!(a.get::<i32, _>(), Ok(&5));
        assert_eq!(counters.drops(), 2);

        // value <- empty
        a.move_from(&mut P::null());
        assert!(a.is_null());
        assert_eq!(counters.clones(), 0);
    }

    #[test]
    fn clone_from_cases() {
        let counters = Counters::default();
        let source = P::new(Probe::new(&counters, 4));

        let mut a = P::null();
        a.clone_from(&source);
        assert_eq!(counters.clones(), 1);

        a.clone_from(&source);
        assert_eq!(counters.clones(), 1);
        assert_eq!(counters.clone_froms(), 1);

        a.clone_from(&P::new(0i32));
        assert_eq!(counters.drops(), 1);

        a.clone_from(&P::null());
        assert!(a.is_null());

        let b = source.clone();
        assert_eq!(b, source);
        assert_eq!(P::null().clone(), NullVariant);
    }

    #[test]
    fn equality() {
        let counters = Counters::default();
        let a = P::new(Probe::new(&counters, 1));
        let empty = P::null();

        assert!(empty == empty);
        assert!(!(empty != empty));
        assert!(a == a);
        assert!(a != empty);
        assert!(empty != a);
        assert_eq!(counters.comparisons(), 1);

        assert_ne!(P::new(1i32), P::new(2i32));
    }

    #[test]
    fn try_take_and_unwrap() {
        let mut v = V::new(9i32);
        assert_eq!(v.try_take::<bool, _>(), None);
        assert_eq!(v.index(), Some(1));
        assert_eq!(v.try_take::<i32, _>(), Some(9));
        assert!(v.is_null());

        let v = V::new(true);
        let v = v.try_unwrap::<i32, _>().unwrap_err();
        assert_eq!(v.try_unwrap::<bool, _>().ok(), Some(true));
    }

    #[test]
    fn variant_conversions() {
        let total = crate::Variant::<crate::T![bool, i32, String]>::new("x".to_string());
        let opt = V::from(total);
        assert_eq!(opt.get::<String, _>().map(String::as_str), Ok("x"));

        let back = opt.into_variant().unwrap();
        assert_eq!(back.index(), 2);
        assert!(V::null().into_variant().is_none());
    }

    #[test]
    fn debug() {
        assert_eq!(format!("{:?}", V::null()), "NullVariant");
        assert_eq!(format!("{:?}", V::new(false)), "false");
        assert_eq!(V::new(1i32).type_name(), "i32");
    }
}
