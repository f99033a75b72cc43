use crate::refpart::RefPart;

/// An element of zero length.
///
/// The reference particle crosses a thin element instantaneously, so the
/// default reference push leaves it untouched. Thin elements are applied
/// in a single slice.
pub trait Thin {
    #[inline(always)]
    fn push_reference(&self, _refpart: &mut RefPart) {}
}
