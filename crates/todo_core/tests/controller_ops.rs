mod common;

use common::{FailingStore, RecordingObserver, RecordingView};
use std::fs;
use todo_core::{
    render, CommandOutcome, IgnoreReason, JsonFileTodoStore, MemoryTodoStore, TodoCommand,
    TodoController, TodoEvent, TodoItem, TodoOp, TodoStore,
};
use uuid::Uuid;

type TestController = TodoController<FailingStore, RecordingView, RecordingObserver>;

fn controller_with(items: Vec<TodoItem>) -> TestController {
    let mut controller = TodoController::new(
        FailingStore::with_items(items),
        RecordingView::default(),
        RecordingObserver::default(),
    );
    controller.initialize();
    controller
}

fn texts(controller: &TestController) -> Vec<String> {
    controller
        .items()
        .iter()
        .map(|item| item.text.clone())
        .collect()
}

#[test]
fn initialize_loads_and_renders_persisted_list() {
    let first = TodoItem::new("one").unwrap();
    let second = TodoItem::new("two").unwrap();
    let controller = controller_with(vec![first.clone(), second.clone()]);

    assert_eq!(controller.items(), [first, second].as_slice());
    assert_eq!(controller.view().rows, render(controller.items()));
    assert_eq!(controller.view().renders, 1);
    assert!(controller
        .observer()
        .events()
        .contains(&TodoEvent::Loaded { count: 2 }));
}

#[test]
fn initialize_falls_back_to_empty_list_when_load_fails() {
    let store = FailingStore::with_items(vec![TodoItem::new("hidden").unwrap()]);
    store.fail_load.set(true);
    let mut controller =
        TodoController::new(store, RecordingView::default(), RecordingObserver::default());

    controller.initialize();

    assert!(controller.items().is_empty());
    assert!(controller.view().rows.is_empty());
    assert_eq!(
        controller
            .observer()
            .count(|event| matches!(event, TodoEvent::LoadFailed { .. })),
        1
    );
}

#[test]
fn failed_load_blocks_saves_until_a_load_succeeds() {
    let item = TodoItem::new("unread").unwrap();
    let store = FailingStore::with_items(vec![item.clone()]);
    store.fail_load.set(true);
    let mut controller =
        TodoController::new(store, RecordingView::default(), RecordingObserver::default());
    controller.initialize();
    assert!(!controller.is_loaded());

    assert!(matches!(
        controller.add_todo("new"),
        CommandOutcome::PersistFailed(_)
    ));
    assert!(controller.items().is_empty());
    assert_eq!(controller.store().inner.items(), [item.clone()].as_slice());
    assert!(controller.observer().events().iter().any(|event| matches!(
        event,
        TodoEvent::PersistFailed { op: TodoOp::Add, .. }
    )));

    controller.store().fail_load.set(false);
    controller.initialize();
    assert!(controller.is_loaded());
    assert!(controller.add_todo("new").is_applied());
    assert_eq!(texts(&controller), ["unread", "new"]);
}

#[test]
fn foreign_tasks_file_is_left_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.json");
    let foreign = r#"[{"id": 1, "title": "Pay rent", "completed": false, "created_at": "2024-01-01T10:00:00"}]"#;
    fs::write(&path, foreign).unwrap();

    let mut controller = TodoController::new(
        JsonFileTodoStore::new(&path),
        RecordingView::default(),
        RecordingObserver::default(),
    );
    controller.initialize();

    assert!(matches!(
        controller.add_todo("x"),
        CommandOutcome::PersistFailed(_)
    ));
    assert_eq!(fs::read_to_string(&path).unwrap(), foreign);
    assert!(!dir.path().join("tasks.json.tmp").exists());
}

#[test]
fn add_trims_appends_persists_and_clears_input() {
    let mut controller = controller_with(Vec::new());
    controller.view_mut().input = "  Buy milk  ".to_string();

    let outcome = controller.add_todo("  Buy milk  ");

    let CommandOutcome::Applied(id) = outcome else {
        panic!("expected applied outcome, got {outcome:?}");
    };
    assert_eq!(texts(&controller), ["Buy milk"]);
    assert_eq!(controller.find(id).map(|item| item.done), Some(false));
    assert_eq!(controller.store().load().unwrap(), controller.items());
    assert_eq!(controller.view().rows.len(), 1);
    assert!(controller.view().input.is_empty());
    assert!(controller
        .observer()
        .events()
        .contains(&TodoEvent::Added { id }));
}

#[test]
fn add_preserves_insertion_order() {
    let mut controller = controller_with(Vec::new());
    for text in ["a", "b", "c"] {
        assert!(controller.add_todo(text).is_applied());
    }
    assert_eq!(texts(&controller), ["a", "b", "c"]);
    let row_texts: Vec<&str> = controller
        .view()
        .rows
        .iter()
        .map(|row| row.text.as_str())
        .collect();
    assert_eq!(row_texts, ["a", "b", "c"]);
}

#[test]
fn blank_add_is_ignored_without_touching_view_or_store() {
    let mut controller = controller_with(Vec::new());
    controller.view_mut().input = "   ".to_string();
    let renders_before = controller.view().renders;

    assert_eq!(
        controller.add_todo(""),
        CommandOutcome::Ignored(IgnoreReason::EmptyText)
    );
    assert_eq!(
        controller.add_todo("   "),
        CommandOutcome::Ignored(IgnoreReason::EmptyText)
    );

    assert!(controller.items().is_empty());
    assert!(controller.store().load().unwrap().is_empty());
    assert_eq!(controller.view().renders, renders_before);
    assert_eq!(controller.view().input, "   ");
    assert_eq!(
        controller.observer().count(|event| matches!(
            event,
            TodoEvent::Ignored {
                op: TodoOp::Add,
                reason: IgnoreReason::EmptyText
            }
        )),
        2
    );
}

#[test]
fn submit_reads_the_input_field() {
    let mut controller = controller_with(Vec::new());
    controller.view_mut().input = " Walk dog ".to_string();

    assert!(controller.dispatch(TodoCommand::Submit).is_applied());

    assert_eq!(texts(&controller), ["Walk dog"]);
    assert!(controller.view().input.is_empty());
}

#[test]
fn toggle_flips_only_the_target_and_is_an_involution() {
    let first = TodoItem::new("one").unwrap();
    let second = TodoItem::new("two").unwrap();
    let mut controller = controller_with(vec![first.clone(), second.clone()]);

    assert!(controller.toggle_todo(first.id).is_applied());
    assert_eq!(controller.find(first.id).map(|item| item.done), Some(true));
    assert_eq!(controller.find(second.id), Some(&second));
    assert!(controller
        .observer()
        .events()
        .contains(&TodoEvent::Toggled {
            id: first.id,
            done: true
        }));

    assert!(controller.toggle_todo(first.id).is_applied());
    assert_eq!(controller.items(), [first, second].as_slice());
}

#[test]
fn delete_removes_exactly_one_item() {
    let first = TodoItem::new("one").unwrap();
    let second = TodoItem::new("two").unwrap();
    let mut controller = controller_with(vec![first.clone(), second.clone()]);

    assert!(controller.delete_todo(first.id).is_applied());

    assert_eq!(controller.items(), [second].as_slice());
    assert_eq!(controller.store().load().unwrap().len(), 1);
    assert_eq!(controller.view().rows.len(), 1);
}

#[test]
fn unknown_ids_are_ignored() {
    let item = TodoItem::new("keep").unwrap();
    let mut controller = controller_with(vec![item.clone()]);
    let missing = Uuid::new_v4();
    let renders_before = controller.view().renders;

    for command in [
        TodoCommand::Toggle(missing),
        TodoCommand::Delete(missing),
        TodoCommand::Edit {
            id: missing,
            text: "new".to_string(),
        },
    ] {
        assert_eq!(
            controller.dispatch(command),
            CommandOutcome::Ignored(IgnoreReason::UnknownId(missing))
        );
    }

    assert_eq!(controller.items(), [item].as_slice());
    assert_eq!(controller.view().renders, renders_before);
}

#[test]
fn edit_replaces_text_and_rejects_blank() {
    let item = TodoItem::new("draft").unwrap();
    let mut controller = controller_with(vec![item.clone()]);

    assert!(controller.edit_todo(item.id, "  final  ").is_applied());
    assert_eq!(texts(&controller), ["final"]);
    assert_eq!(
        controller.find(item.id).map(|found| found.created_at),
        Some(item.created_at)
    );

    assert_eq!(
        controller.edit_todo(item.id, "  "),
        CommandOutcome::Ignored(IgnoreReason::EmptyText)
    );
    assert_eq!(texts(&controller), ["final"]);
}

#[test]
fn persist_failure_keeps_previous_state() {
    let item = TodoItem::new("stable").unwrap();
    let mut controller = controller_with(vec![item.clone()]);
    controller.view_mut().input = "typed".to_string();
    let renders_before = controller.view().renders;
    controller.store().fail_save.set(true);

    assert!(matches!(
        controller.add_todo("typed"),
        CommandOutcome::PersistFailed(_)
    ));
    assert_eq!(
        controller.toggle_todo(item.id),
        CommandOutcome::PersistFailed(item.id)
    );
    assert_eq!(
        controller.delete_todo(item.id),
        CommandOutcome::PersistFailed(item.id)
    );
    assert_eq!(
        controller.edit_todo(item.id, "renamed"),
        CommandOutcome::PersistFailed(item.id)
    );

    assert_eq!(controller.items(), [item.clone()].as_slice());
    assert_eq!(controller.store().inner.items(), [item.clone()].as_slice());
    assert_eq!(controller.view().renders, renders_before);
    assert_eq!(controller.view().input, "typed");
    assert_eq!(
        controller.observer().count(|event| matches!(
            event,
            TodoEvent::PersistFailed { .. }
        )),
        4
    );

    controller.store().fail_save.set(false);
    assert!(controller.toggle_todo(item.id).is_applied());
    assert_eq!(controller.find(item.id).map(|found| found.done), Some(true));
}

#[test]
fn render_is_idempotent() {
    let mut controller = controller_with(Vec::new());
    controller.add_todo("one");
    controller.add_todo("two");

    let first = render(controller.items());
    let second = render(controller.items());
    assert_eq!(first, second);

    controller.render();
    let shown_once = controller.view().rows.clone();
    controller.render();
    assert_eq!(controller.view().rows, shown_once);
}

#[test]
fn buy_milk_scenario() {
    let mut controller = TodoController::new(
        MemoryTodoStore::new(),
        RecordingView::default(),
        RecordingObserver::default(),
    );
    controller.initialize();
    assert!(controller.items().is_empty());

    let CommandOutcome::Applied(id) = controller.dispatch(TodoCommand::Add("Buy milk".into()))
    else {
        panic!("add should apply");
    };
    assert_eq!(controller.items().len(), 1);
    assert_eq!(controller.items()[0].text, "Buy milk");
    assert!(!controller.items()[0].done);

    controller.dispatch(TodoCommand::Toggle(id));
    assert!(controller.items()[0].done);

    controller.dispatch(TodoCommand::Delete(id));
    assert!(controller.items().is_empty());
    assert!(controller.store().items().is_empty());
    assert!(controller.view().rows.is_empty());
}
