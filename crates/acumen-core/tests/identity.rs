use std::collections::HashSet;

use acumen_core::id::EntityId;

#[test]
fn fresh_ids_never_collide() {
    let ids: HashSet<EntityId> = (0..1000).map(|_| EntityId::fresh()).collect();
    assert_eq!(ids.len(), 1000);
}

#[test]
fn persisted_id_is_exposed() {
    assert_eq!(EntityId::persisted(42).as_persisted(), Some(42));
    assert!(!EntityId::persisted(42).is_pending());
}

#[test]
fn pending_id_has_no_server_id() {
    let id = EntityId::fresh();
    assert_eq!(id.as_persisted(), None);
    assert!(id.is_pending());
}

#[test]
fn persisted_serializes_with_kind_tag() {
    let json = serde_json::to_value(EntityId::persisted(7)).unwrap();
    assert_eq!(json["kind"], "persisted");
    assert_eq!(json["id"], 7);
}

#[test]
fn entity_id_round_trips_through_json() {
    for id in [EntityId::persisted(3), EntityId::fresh()] {
        let json = serde_json::to_string(&id).unwrap();
        let back: EntityId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
