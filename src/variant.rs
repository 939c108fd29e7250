use core::{
    fmt,
    hash::{Hash, Hasher},
    marker::PhantomData,
    mem::ManuallyDrop,
    ops::{Deref, DerefMut},
    ptr,
};

use crate::{
    derive::{ListClone, ListDebug, ListHash, ListPartialEq},
    error::BadVariantAccess,
    index::{Index, UTerm},
    list::Contains,
    repr::{Split, SumList},
    storage::Storage,
};

/// A value of exactly one of the types in the list `S`, never empty.
///
/// Usually spelled with the [`Variant!`](crate::Variant!) macro.
///
/// Moving a `Variant` is an ordinary Rust move: the source is statically gone
/// afterwards, so there is no moved-from state to observe. For the flavour
/// that can be empty and supports destructive moves in place, see
/// [`OptVariant`](crate::OptVariant).
///
/// # Examples
///
/// ```rust
/// use tvariant::Variant;
///
/// let mut v: Variant![bool, i32, String] = Variant::new(42i32);
/// assert!(v.is::<i32, _>());
/// assert_eq!(v.get::<i32, _>(), Ok(&42));
/// assert!(v.get::<bool, _>().is_err());
///
/// v.set(String::from("hi"));
/// assert_eq!(v.get::<String, _>().map(String::as_str), Ok("hi"));
/// ```
///
/// Asking for a type outside the list does not compile:
///
/// ```rust,compile_fail
/// use tvariant::Variant;
///
/// let v: Variant![bool, i32] = Variant::new(true);
/// let _ = v.get::<u64, _>();
/// ```
///
/// Nor does constructing one without a value:
///
/// ```rust,compile_fail
/// use tvariant::Variant;
///
/// let v: Variant![bool, i32] = Default::default();
/// ```
pub struct Variant<S: SumList> {
    tag: u8,
    storage: Storage<S>,
}

impl<S: SumList> Variant<S> {
    /// Constructs a variant holding `value`.
    pub fn new<T, U>(value: T) -> Self
    where
        S: Split<T, U>,
        U: Index,
    {
        Variant {
            tag: U::TAG,
            storage: Storage::new::<T, U>(value),
        }
    }

    /// Like [`Variant::new`], with the type list named by a marker.
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

    /// The discriminant of the active alternative.
    pub fn index(&self) -> u8 {
        self.tag
    }

    /// The type name of the active alternative.
    pub fn type_name(&self) -> &'static str {
        self.storage.type_name(self.tag)
    }

    /// Whether `T` is the active alternative.
    pub fn is<T, U>(&self) -> bool
    where
        S: Contains<T, U>,
        U: Index,
    {
        self.tag == U::TAG
    }

    /// Assigns `value`, replacing the active alternative.
    ///
    /// If `T` is already active the value is assigned in place; otherwise
    /// the old value is dropped and `value` takes its place.
    pub fn set<T, U>(&mut self, value: T)
    where
        S: Split<T, U>,
        U: Index,
    {
        if self.tag == U::TAG {
            unsafe { self.storage.assign::<T, U>(value) }
        } else {
            *self = Self::new(value);
        }
    }

    fn mismatch<T>(&self) -> BadVariantAccess {
        BadVariantAccess::new(core::any::type_name::<T>(), self.type_name())
    }

    /// Returns the active `T`, or an error if another alternative is active.
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

    /// Returns the active `T`, or an error if another alternative is active.
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

    /// Moves the `T` out if it is active, or gives the variant back.
    pub fn try_unwrap<T, U>(self) -> Result<T, Self>
    where
        S: Split<T, U>,
        U: Index,
    {
        if self.tag != U::TAG {
            return Err(self);
        }
        let mut this = ManuallyDrop::new(self);
        Ok(unsafe { this.storage.take::<T, U>() })
    }

    pub(crate) fn into_parts(self) -> (u8, Storage<S>) {
        let this = ManuallyDrop::new(self);
        (this.tag, unsafe { ptr::read(&this.storage) })
    }

    /// # Safety
    ///
    /// `storage` must hold a live value of alternative `tag`.
    pub(crate) unsafe fn from_parts(tag: u8, storage: Storage<S>) -> Self {
        Variant { tag, storage }
    }
}

impl<T> From<T> for crate::Variant![T] {
    /// Construct a `Variant` of one type from a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tvariant::Variant;
    ///
    /// let v: Variant![i32] = 42.into();
    /// assert_eq!(*v, 42);
    /// ```
    fn from(value: T) -> Self {
        Variant::new(value)
    }
}

impl<T> Deref for crate::Variant![T] {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        unsafe { self.storage.get::<T, UTerm>() }
    }
}

impl<T> DerefMut for crate::Variant![T] {
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { self.storage.get_mut::<T, UTerm>() }
    }
}

impl<T> crate::Variant![T] {
    pub fn into_inner(self) -> T {
        let mut this = ManuallyDrop::new(self);
        unsafe { this.storage.take::<T, UTerm>() }
    }
}

impl<S: SumList> Drop for Variant<S> {
    fn drop(&mut self) {
        unsafe { self.storage.destruct(self.tag) }
    }
}

impl<S: ListClone> Clone for Variant<S> {
    fn clone(&self) -> Self {
        let mut storage = Storage::uninit();
        unsafe { storage.construct_copy(self.tag, &self.storage) };
        Variant {
            tag: self.tag,
            storage,
        }
    }

    /// Clones in place when both hold the same alternative; otherwise the
    /// new value is cloned first and the old one dropped after.
    fn clone_from(&mut self, source: &Self) {
        if self.tag == source.tag {
            unsafe { self.storage.assign_copy(self.tag, &source.storage) }
        } else {
            *self = source.clone();
        }
    }
}

impl<S: ListPartialEq> PartialEq for Variant<S> {
    fn eq(&self, other: &Self) -> bool {
        self.tag == other.tag && unsafe { self.storage.equals(self.tag, &other.storage) }
    }

    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, other: &Self) -> bool {
        self.tag != other.tag || unsafe { self.storage.not_equals(self.tag, &other.storage) }
    }
}

impl<S: ListPartialEq + Eq> Eq for Variant<S> {}

impl<S: ListHash> Hash for Variant<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag.hash(state);
        unsafe { self.storage.hash(self.tag, state) }
    }
}

impl<S: ListDebug> fmt::Debug for Variant<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        unsafe { self.storage.fmt_debug(self.tag, f) }
    }
}
