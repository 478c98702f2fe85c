//! Agent role classification.

/// What an agent does for the settlement.
///
/// Only [`Role::ShaftWorker`] changes routing behavior (it activates the
/// vertical-shaft override); the other roles route through the general
/// selector.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Role {
    Courier,
    Builder,
    /// Works along a vertical shaft; carries a [`ShaftSite`][crate::ShaftSite].
    ShaftWorker,
}
