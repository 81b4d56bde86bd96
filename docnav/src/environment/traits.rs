//! Capability traits for the hosting environment.

/// Current-location provider.
///
/// The fragment is the sole navigation signal. Implementations return it
/// raw, leading `#` included, or an empty string when the location has no
/// fragment. The renderer re-reads it on every render; there is no cached
/// "current page" anywhere.
pub trait Location {
    fn fragment(&self) -> String;
}

/// Render-target sink: the single display region holding the active
/// content unit.
///
/// The renderer assumes exclusive ownership of the region while it runs:
/// `clear` discards everything currently held, not just units the
/// renderer itself appended, so the region must be dedicated to it.
pub trait Container<C> {
    /// Discard all held content.
    fn clear(&mut self);

    /// Append one content unit after whatever is currently held.
    fn append(&mut self, unit: &C);
}
