use thiserror::Error;

/// A checked accessor asked for an alternative that is not the active one.
///
/// This is a logic error on the caller's side: the variant itself is left
/// untouched and remains usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid access on currently not active object: requested `{requested}`, active `{active}`")]
pub struct BadVariantAccess {
    requested: &'static str,
    active: &'static str,
}

impl BadVariantAccess {
    pub(crate) fn new(requested: &'static str, active: &'static str) -> Self {
        Self { requested, active }
    }

    /// The name of the alternative that was asked for.
    pub fn requested(&self) -> &'static str {
        self.requested
    }

    /// The name of the alternative that was active, or of
    /// [`NullVariant`](crate::NullVariant) when the variant was empty.
    pub fn active(&self) -> &'static str {
        self.active
    }
}
