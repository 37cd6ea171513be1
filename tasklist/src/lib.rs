//! Task list editor built on the tasklist reducer architecture.
//!
//! A single-screen editor: an ordered task list, a compose field, a
//! single-slot undo window for removals (with an animated snackbar and an
//! auto-expiry timer), and one exclusive edit session. The reducer is pure;
//! timers and animation completions come back to it as feedback actions
//! scheduled through [`Effect::Delay`](tasklist_core::effect::Effect).
//!
//! # Quick Start
//!
//! ```no_run
//! use tasklist::{TaskListAction, TaskListEnvironment, TaskListReducer, TaskListState};
//! use tasklist_core::environment::SystemClock;
//! use tasklist_runtime::Store;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let env = TaskListEnvironment::new(SystemClock);
//! let store = Store::new(TaskListState::new(), TaskListReducer::new(), env);
//!
//! // Add a task
//! store.send(TaskListAction::AddTask {
//!     text: "Buy milk".to_string(),
//! }).await?;
//!
//! // Remove it; the snackbar appears and the undo window opens
//! store.send(TaskListAction::RemoveTask { index: 0 }).await?;
//!
//! // Change of heart
//! store.send(TaskListAction::UndoDelete).await?;
//!
//! let count = store.state(|s| s.len()).await;
//! println!("Tasks: {count}");
//! # Ok(())
//! # }
//! ```

pub mod reducer;
pub mod types;

// Re-export commonly used types
pub use reducer::{SNACKBAR_ANIMATION, TaskListEnvironment, TaskListReducer, UNDO_WINDOW};
pub use types::{
    EditSession, PendingDelete, SnackbarPhase, Task, TaskId, TaskListAction, TaskListState,
};
