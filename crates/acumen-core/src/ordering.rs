//! Sibling-ordering rules shared by questions and choices.
//!
//! Siblings display in ascending `order`; an entity without an explicit
//! order sorts as if its order were 0. Ties are not prevented — sorting
//! is stable, so equal orders keep their original relative position.

/// Implemented by anything that ranks among siblings (questions under an
/// assessment, choices under a question).
pub trait Ordered {
    /// 1-based rank among siblings; missing order counts as 0.
    fn sort_order(&self) -> i32;
}

/// Sort siblings ascending by order, in place. Stable and idempotent.
pub fn sort_siblings<T: Ordered>(siblings: &mut [T]) {
    siblings.sort_by_key(Ordered::sort_order);
}

/// A sorted copy, leaving the input untouched.
pub fn sorted<T: Ordered + Clone>(siblings: &[T]) -> Vec<T> {
    let mut copy = siblings.to_vec();
    sort_siblings(&mut copy);
    copy
}

/// The order for an entity appended at the end of the list:
/// `max(existing order) + 1`, or 1 for an empty list.
pub fn next_order<T: Ordered>(siblings: &[T]) -> i32 {
    siblings
        .iter()
        .map(Ordered::sort_order)
        .max()
        .unwrap_or(0)
        + 1
}
