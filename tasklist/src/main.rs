//! Task list editor demo binary
//!
//! Walks the undo and edit state machines end to end with short timings so
//! the run finishes quickly.

use std::time::Duration;
use tasklist::{TaskListAction, TaskListEnvironment, TaskListReducer, TaskListState};
use tasklist_core::environment::SystemClock;
use tasklist_runtime::Store;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tasklist=debug,tasklist_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Task List Editor Demo ===\n");

    // Short timings so the demo does not sit on a 4 second undo window
    let env = TaskListEnvironment::new(SystemClock)
        .with_undo_window(Duration::from_millis(400))
        .with_animation(Duration::from_millis(20));
    let store = Store::new(TaskListState::new(), TaskListReducer::new(), env);

    println!(">>> Adding tasks");
    for text in ["Buy milk", "Water plants", "Write report"] {
        let _ = store
            .send(TaskListAction::AddTask {
                text: text.to_string(),
            })
            .await;
    }
    print_tasks(&store).await;

    println!("\n>>> Removing \"Water plants\" and undoing within the window");
    let _ = store.send(TaskListAction::RemoveTask { index: 1 }).await;
    print_tasks(&store).await;
    let _ = store.send(TaskListAction::UndoDelete).await;
    print_tasks(&store).await;

    println!("\n>>> Removing \"Buy milk\" and letting the undo window expire");
    let _ = store.send(TaskListAction::RemoveTask { index: 0 }).await;
    tokio::time::sleep(Duration::from_millis(600)).await;
    let _ = store.send(TaskListAction::UndoDelete).await;
    print_tasks(&store).await;

    println!("\n>>> Editing \"Write report\"");
    let _ = store.send(TaskListAction::StartEdit { index: 1 }).await;
    let _ = store
        .send(TaskListAction::DraftChanged {
            text: "Write quarterly report".to_string(),
        })
        .await;
    let _ = store.send(TaskListAction::SaveEdit).await;
    print_tasks(&store).await;

    if let Err(error) = store.shutdown(Duration::from_secs(2)).await {
        eprintln!("shutdown: {error}");
    }

    println!("\n=== Demo Complete ===");
}

async fn print_tasks(
    store: &Store<
        TaskListState,
        TaskListAction,
        TaskListEnvironment<SystemClock>,
        TaskListReducer<SystemClock>,
    >,
) {
    let texts = store
        .state(|s| s.texts().map(String::from).collect::<Vec<_>>())
        .await;
    println!("Tasks: {texts:?}");
}
