//! Document rewriting over an injected element abstraction.
//!
//! The translation core knows nothing about any particular document tree.
//! A host embedding this crate (an HTML renderer, an XML editor, a crawler)
//! exposes each rewritable reference attribute (an anchor's hyperlink target,
//! an image's embedded source) as a [`ReferenceSlot`] and hands the slots
//! over; every slot is rewritten independently, in no guaranteed order.

use crate::iiif::to_equivalent_image;

/// One rewritable reference attribute on one document element.
pub trait ReferenceSlot {
    /// Current attribute value, or `None` if the element carries no value.
    fn get(&self) -> Option<String>;

    /// Replaces the attribute value.
    fn set(&mut self, value: String);
}

/// Rewrites a single element's reference through [`to_equivalent_image`].
///
/// Returns whether the value changed. Slots without a value and slots whose
/// value classifies as a legacy scaler URL but fails to translate are left
/// untouched; a failure is logged and never propagated, so one malformed
/// reference cannot stop a document sweep.
pub fn rewrite_element<S: ReferenceSlot + ?Sized>(slot: &mut S) -> bool {
    let Some(reference) = slot.get() else {
        return false;
    };

    match to_equivalent_image(&reference) {
        Ok(translated) => {
            let changed = translated != reference;
            slot.set(translated);
            changed
        }
        Err(error) => {
            tracing::warn!(url = %reference, %error, "leaving malformed scaler reference unchanged");
            false
        }
    }
}

/// Rewrites every slot in the iterator, returning how many values changed.
pub fn rewrite_all<'a, I, S>(slots: I) -> usize
where
    I: IntoIterator<Item = &'a mut S>,
    S: ReferenceSlot + 'a,
{
    slots
        .into_iter()
        .map(rewrite_element)
        .filter(|&changed| changed)
        .count()
}
