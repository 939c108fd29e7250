/// Constructs a [`struct@Variant`] type from a list of types.
///
/// # Examples
///
/// ```rust
/// use tvariant::Variant;
///
/// type MyVariant = Variant![i32, u32, f64];
/// let v: MyVariant = Variant::new(42u32);
/// ```
#[macro_export]
macro_rules! Variant {
    [$($t:ty),* $(,)?] => [$crate::Variant::<$crate::T![$($t,)*]>];
}

/// Constructs an [`struct@OptVariant`] type from a list of types.
///
/// # Examples
///
/// ```rust
/// use tvariant::OptVariant;
///
/// type MyVariant = OptVariant![i32, u32, f64];
/// let v: MyVariant = OptVariant::null();
/// ```
#[macro_export]
macro_rules! OptVariant {
    [$($t:ty),* $(,)?] => [$crate::OptVariant::<$crate::T![$($t,)*]>];
}

/// Constructs a tuple list (heterogeneous list) type from a list of types.
///
/// The value version of the macro is [`t`].
///
/// # Examples
///
/// ```rust
/// use tvariant::T;
///
/// type MyList = T![i32, u32, f64];
/// let list: MyList = (42i32, (42u32, (42.0f64, ())));
/// ```
#[macro_export]
macro_rules! T {
    [] => [()];
    [$head:ty $(, $t:ty)* $(,)?] => [($head, $crate::T!($($t,)*))];
}

/// Constructs a tuple list (heterogeneous list) value from a list of values.
///
/// The type version of the macro is [`T`].
///
/// # Examples
///
/// ```rust
/// use tvariant::t;
///
/// type MyList = (i32, (u32, (f64, ())));
/// let list: MyList = t![42i32, 42u32, 42.0f64];
/// ```
#[macro_export]
macro_rules! t {
    [] => [()];
    [$head:expr $(, $t:expr)* $(,)?] => [($head, $crate::t!($($t,)*))];
}
