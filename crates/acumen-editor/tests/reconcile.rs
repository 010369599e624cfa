use acumen_core::id::EntityId;
use acumen_core::models::{Choice, Question};
use acumen_editor::{append, apply_edit, remove};

fn question(id: i64, order: i32) -> Question {
    Question {
        id: EntityId::persisted(id),
        assessment_id: 1,
        text: format!("question {id}"),
        order: Some(order),
        choices: Vec::new(),
        created_at: None,
    }
}

fn orders(siblings: &[Question]) -> Vec<i32> {
    siblings.iter().map(|q| q.order.unwrap()).collect()
}

fn ids(siblings: &[Question]) -> Vec<EntityId> {
    siblings.iter().map(|q| q.id).collect()
}

#[test]
fn append_ranks_after_every_existing_sibling() {
    let mut siblings = vec![question(1, 1), question(2, 2)];
    append(&mut siblings, Question::draft(1, 0));

    assert_eq!(siblings.len(), 3);
    assert_eq!(siblings[2].order, Some(3));
    assert!(siblings[2].id.is_pending());
}

#[test]
fn append_to_empty_list_starts_at_one() {
    let mut siblings: Vec<Question> = Vec::new();
    append(&mut siblings, Question::draft(1, 0));
    assert_eq!(siblings[0].order, Some(1));
}

#[test]
fn field_edit_replaces_in_place_without_touching_order() {
    let mut siblings = vec![question(1, 1), question(2, 2), question(3, 3)];
    let mut edited = question(2, 2);
    edited.text = "rephrased".to_string();

    assert!(apply_edit(&mut siblings, edited));
    assert_eq!(siblings[1].text, "rephrased");
    assert_eq!(orders(&siblings), vec![1, 2, 3]);
}

#[test]
fn moving_last_item_to_second_shifts_the_middle_down() {
    let mut siblings = vec![
        question(1, 1),
        question(2, 2),
        question(3, 3),
        question(4, 4),
    ];
    let moved = question(4, 2);

    assert!(apply_edit(&mut siblings, moved));
    assert_eq!(orders(&siblings), vec![1, 2, 3, 4]);
    assert_eq!(
        ids(&siblings),
        vec![
            EntityId::persisted(1),
            EntityId::persisted(4),
            EntityId::persisted(2),
            EntityId::persisted(3)
        ]
    );
}

#[test]
fn colliding_order_lets_the_moved_item_win() {
    let mut siblings = vec![question(1, 1), question(2, 2), question(3, 3)];
    let moved = question(3, 1);

    assert!(apply_edit(&mut siblings, moved));
    assert_eq!(siblings[0].id, EntityId::persisted(3));
    assert_eq!(orders(&siblings), vec![1, 2, 3]);
}

#[test]
fn out_of_range_order_clamps_to_list_bounds() {
    let mut siblings = vec![question(1, 1), question(2, 2), question(3, 3)];
    let moved = question(1, 99);
    assert!(apply_edit(&mut siblings, moved));
    assert_eq!(siblings[2].id, EntityId::persisted(1));
    assert_eq!(orders(&siblings), vec![1, 2, 3]);

    let moved = question(1, 0);
    assert!(apply_edit(&mut siblings, moved));
    assert_eq!(siblings[0].id, EntityId::persisted(1));
    assert_eq!(orders(&siblings), vec![1, 2, 3]);
}

#[test]
fn reorder_normalizes_a_gapped_list() {
    // Deleting left a gap: orders 1, 3, 4.
    let mut siblings = vec![question(1, 1), question(3, 3), question(4, 4)];
    let moved = question(4, 2);

    assert!(apply_edit(&mut siblings, moved));
    assert_eq!(orders(&siblings), vec![1, 2, 3]);
    assert_eq!(siblings[1].id, EntityId::persisted(4));
}

#[test]
fn edit_for_unknown_id_is_rejected() {
    let mut siblings = vec![question(1, 1)];
    assert!(!apply_edit(&mut siblings, question(9, 1)));
    assert_eq!(siblings.len(), 1);
}

#[test]
fn delete_leaves_the_gap_in_place() {
    let mut siblings = vec![question(1, 1), question(2, 2), question(3, 3)];
    assert!(remove(&mut siblings, EntityId::persisted(2)));
    assert_eq!(orders(&siblings), vec![1, 3]);

    assert!(!remove(&mut siblings, EntityId::persisted(2)));
}

#[test]
fn choices_reconcile_the_same_way() {
    let parent = EntityId::persisted(5);
    let mut choices = vec![
        Choice {
            id: EntityId::persisted(10),
            question_id: parent,
            text: "never".to_string(),
            value: 0.0,
            order: Some(1),
            created_at: None,
        },
        Choice {
            id: EntityId::persisted(11),
            question_id: parent,
            text: "often".to_string(),
            value: 1.0,
            order: Some(2),
            created_at: None,
        },
    ];

    append(&mut choices, Choice::draft(parent, 0));
    assert_eq!(choices[2].order, Some(3));

    let mut moved = choices[2].clone();
    moved.order = Some(1);
    assert!(apply_edit(&mut choices, moved));
    assert!(choices[0].id.is_pending());
    assert_eq!(
        choices.iter().map(|c| c.order.unwrap()).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );
}
