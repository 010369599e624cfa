use acumen_core::id::EntityId;
use acumen_core::models::{Choice, Question};
use acumen_core::ordering::{Ordered, next_order, sort_siblings};

/// Implemented by entities the editor can reorder among siblings:
/// questions under an assessment, choices under a question.
pub trait Reorderable: Ordered {
    fn id(&self) -> EntityId;
    fn order(&self) -> Option<i32>;
    fn set_order(&mut self, order: i32);
}

impl Reorderable for Question {
    fn id(&self) -> EntityId {
        self.id
    }

    fn order(&self) -> Option<i32> {
        self.order
    }

    fn set_order(&mut self, order: i32) {
        self.order = Some(order);
    }
}

impl Reorderable for Choice {
    fn id(&self) -> EntityId {
        self.id
    }

    fn order(&self) -> Option<i32> {
        self.order
    }

    fn set_order(&mut self, order: i32) {
        self.order = Some(order);
    }
}

/// Append a drafted entity at the end of the list, ranked after every
/// existing sibling.
pub fn append<T: Reorderable>(siblings: &mut Vec<T>, mut entity: T) {
    let order = next_order(siblings);
    entity.set_order(order);
    siblings.push(entity);
}

/// Replace the sibling with the matching id.
///
/// A plain field edit swaps the entity in place and leaves every order
/// untouched. An edit that changes `order` moves the entity instead: it
/// is removed, reinserted at position `new order - 1` (clamped to the
/// list bounds), and all siblings are renumbered to `index + 1`, keeping
/// orders dense and contiguous. When a user picks an order another
/// sibling already holds, the moved entity wins and the rest shift down.
///
/// Returns false when no sibling carries the id.
pub fn apply_edit<T: Reorderable>(siblings: &mut Vec<T>, updated: T) -> bool {
    let Some(position) = siblings.iter().position(|e| e.id() == updated.id()) else {
        return false;
    };

    if siblings[position].order() == updated.order() {
        siblings[position] = updated;
        return true;
    }

    let new_order = updated.order().unwrap_or(0);
    siblings.remove(position);
    // Bring the remaining siblings into display order so the insertion
    // index lines up with the order the user sees.
    sort_siblings(siblings);
    let index = (new_order - 1).clamp(0, siblings.len() as i32) as usize;
    siblings.insert(index, updated);
    renumber(siblings);
    true
}

/// Delete a sibling by id. Remaining orders are left alone — the gap is
/// allowed; only reorder operations renumber.
pub fn remove<T: Reorderable>(siblings: &mut Vec<T>, id: EntityId) -> bool {
    let before = siblings.len();
    siblings.retain(|e| e.id() != id);
    siblings.len() != before
}

/// Renumber every sibling's order to its list position plus one.
pub fn renumber<T: Reorderable>(siblings: &mut [T]) {
    for (index, entity) in siblings.iter_mut().enumerate() {
        entity.set_order(index as i32 + 1);
    }
}
