//! End-to-end agenda scenarios.

use std::collections::BTreeSet;

use agenda_core::{
    active_sections, filter, group, AgendaBoard, AgendaItem, BoardConfig, DragEngine, DragEvent, DragOutcome,
    DropTargetId, ItemId, ItemStatus, Meeting, OverTarget,
};

fn child_ids(engine: &DragEngine, section: ItemId) -> Vec<ItemId> {
    engine
        .hierarchy()
        .group(section)
        .map(|g| g.children.iter().map(|c| c.id).collect())
        .unwrap_or_default()
}

#[test]
fn test_group_status_and_filter() {
    let items = vec![
        AgendaItem::section(1, "Opening", ItemStatus::NotStarted),
        AgendaItem::child(2, 1, "Roll call", ItemStatus::InProgress),
        AgendaItem::child(3, 1, "Minutes", ItemStatus::Completed),
    ];

    let grouped = group(&items).unwrap();
    let hierarchy = grouped.hierarchy;
    assert_eq!(hierarchy.len(), 1);
    assert_eq!(hierarchy.groups()[0].id(), 1);
    let children: Vec<_> = hierarchy.groups()[0].children.iter().map(|c| c.id).collect();
    assert_eq!(children, vec![2, 3]);

    assert_eq!(active_sections(&hierarchy), BTreeSet::from([0]));

    let view = filter(&hierarchy, false);
    assert_eq!(view.len(), 1);
    let visible: Vec<_> = view.groups()[0].children.iter().map(|c| c.id).collect();
    assert_eq!(visible, vec![2]);
}

#[test]
fn test_move_into_empty_section() {
    let items = vec![
        AgendaItem::section(1, "A", ItemStatus::NotStarted),
        AgendaItem::child(10, 1, "a1", ItemStatus::NotStarted),
        AgendaItem::child(11, 1, "a2", ItemStatus::NotStarted),
        AgendaItem::child(12, 1, "a3", ItemStatus::NotStarted),
        AgendaItem::section(2, "B", ItemStatus::NotStarted),
    ];
    let mut engine = DragEngine::new(group(&items).unwrap().hierarchy);

    assert_eq!(engine.handle(DragEvent::Start(11)), DragOutcome::Started);
    let over = Some(OverTarget::Container(DropTargetId(2)));
    assert_eq!(engine.handle(DragEvent::Over { active: 11, over }), DragOutcome::Previewed);
    let outcome = engine.handle(DragEvent::End { active: 11, over });

    assert!(outcome.committed().is_some());
    assert_eq!(child_ids(&engine, 1), vec![10, 12]);
    assert_eq!(child_ids(&engine, 2), vec![11]);
}

#[test]
fn test_swap_sections_keeps_children() {
    let items = vec![
        AgendaItem::section(1, "A", ItemStatus::NotStarted),
        AgendaItem::child(10, 1, "a1", ItemStatus::NotStarted),
        AgendaItem::section(2, "B", ItemStatus::NotStarted),
        AgendaItem::child(20, 2, "b1", ItemStatus::NotStarted),
        AgendaItem::child(21, 2, "b2", ItemStatus::NotStarted),
    ];
    let mut engine = DragEngine::new(group(&items).unwrap().hierarchy);

    engine.start(1);
    engine.end(1, Some(OverTarget::Item(2)));

    let order: Vec<_> = engine.hierarchy().iter().map(|g| g.id()).collect();
    assert_eq!(order, vec![2, 1]);
    assert_eq!(child_ids(&engine, 1), vec![10]);
    assert_eq!(child_ids(&engine, 2), vec![20, 21]);
}

#[test]
fn test_board_from_meeting_payload() {
    let json = r#"{
        "id": 5,
        "items": [
            {"id": 1, "parent_meeting_item_id": null, "status": "NOT_STARTED", "title_loc_key": "Opening"},
            {"id": 2, "parent_meeting_item_id": 1, "status": "IN_PROGRESS", "title_loc_key": "Roll call"},
            {"id": 3, "parent_meeting_item_id": 1, "status": "COMPLETED", "title_loc_key": "Minutes"}
        ]
    }"#;
    let meeting: Meeting = serde_json::from_str(json).unwrap();
    let config = BoardConfig::from_json(r#"{"show_completed": false}"#).unwrap();
    let (mut board, orphans) = AgendaBoard::new(&meeting, config).unwrap();

    assert!(orphans.is_empty());
    assert!(board.is_expanded(1));
    assert_eq!(board.view().groups()[0].children.len(), 1);

    board.select(2, true);
    assert_eq!(board.selection().selected_in(&5).map(|s| s.len()), Some(1));

    board.drag_start(3);
    board.drag_end(3, Some(OverTarget::Item(2)));
    let order: Vec<_> = board.hierarchy().groups()[0].children.iter().map(|c| c.id).collect();
    assert_eq!(order, vec![3, 2]);
}
