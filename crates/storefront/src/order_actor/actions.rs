//! Custom actions for the Order actor.

/// Order writes that need the current row to decide what to do.
///
/// Plain field writes go through [`OrderUpdate`](crate::model::OrderUpdate) and are not
/// checked against the status lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderAction {
    /// Move to the next status in pending → preparing → ready → collected → completed.
    ///
    /// Refused when the order is completed, or when the next status is `collected`
    /// and the order is unpaid. Returns the new status.
    Advance,
}
