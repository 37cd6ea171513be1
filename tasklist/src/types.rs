//! Domain types for the task list editor.
//!
//! The controller state is a single record: the ordered task list, the compose
//! field draft, and two explicit optional slots (pending delete, edit session).
//! There are no ambient globals; "at most one of each" is enforced by the
//! `Option` fields themselves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a task
///
/// Tasks are identified by a stable id assigned at creation, never by their
/// position. Positions are derived at render time and accepted at the API
/// boundary only, which keeps an edit session valid while earlier entries
/// come and go.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new random `TaskId`
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a `TaskId` from a UUID
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Returns the inner UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single task
///
/// Invariant: `text` is non-empty and equals its own trimming. Construction
/// goes through [`TaskListState::add_task`] which enforces this.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Stable identifier
    pub id: TaskId,
    /// Task text, non-empty and trimmed
    pub text: String,
    /// When the task was created
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task
    #[must_use]
    pub const fn new(id: TaskId, text: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            text,
            created_at,
        }
    }
}

/// A removed task held in its undo window
///
/// Single-slot buffer: a new removal replaces any existing instance, and the
/// replaced one is permanently lost. That is intended behavior, not a bug.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingDelete {
    /// The removed task, restored verbatim (same id) on undo
    pub task: Task,
    /// Position the task was removed from; undo reinserts here, clamped to
    /// the current list length
    pub original_index: usize,
}

/// The transient state of a task being edited but not yet committed
///
/// The list itself is untouched until a save commits the draft.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditSession {
    /// The task being edited
    pub task_id: TaskId,
    /// Current draft text, committed on save after trimming
    pub draft: String,
}

/// Phase of the undo snackbar's show/hide timeline
///
/// The bar is rendered whenever the phase is not `Hidden`; during the
/// animating phases the UI interpolates [`TaskListState::snackbar_progress`]
/// toward the phase target (1.0 for in, 0.0 for out).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnackbarPhase {
    /// Not rendered
    #[default]
    Hidden,
    /// Sliding/fading in after a removal
    AnimatingIn,
    /// Fully visible, undo timer running
    Visible,
    /// Sliding/fading out after undo or timer expiry
    AnimatingOut,
}

/// State of the task list editor
///
/// Owned exclusively by the reducer; the render layer reads it and never
/// mutates it directly.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TaskListState {
    /// Ordered tasks; insertion order is display order
    pub tasks: Vec<Task>,
    /// Draft text of the compose field
    pub input: String,
    /// The one undoable removal, if any
    pub pending_delete: Option<PendingDelete>,
    /// The one active edit session, if any
    pub edit: Option<EditSession>,
    /// Snackbar timeline phase
    pub snackbar: SnackbarPhase,
    /// Last settled animation value (0.0 hidden, 1.0 visible)
    pub snackbar_progress: f32,
    /// Cancellation token for scheduled follow-ups
    ///
    /// Bumped by every transition-initiating action (remove, undo, accepted
    /// timer expiry). Timer and animation completions carry the value current
    /// when they were scheduled; a mismatch on arrival means they were
    /// superseded and their finished side effects must not run.
    pub generation: u64,
}

impl TaskListState {
    /// Creates an empty editor state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tasks in the list
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends a task built from `raw` if it is non-empty after trimming
    ///
    /// Returns whether a task was appended. Rejection is silent by design:
    /// an empty compose field is ordinary, not an error.
    pub fn add_task(&mut self, raw: &str, created_at: DateTime<Utc>) -> bool {
        let text = raw.trim();
        if text.is_empty() {
            return false;
        }
        self.tasks
            .push(Task::new(TaskId::new(), text.to_string(), created_at));
        true
    }

    /// Removes the task at `index`, returning it with its position
    ///
    /// Out-of-range indices return `None` and leave the list untouched.
    pub fn remove_task(&mut self, index: usize) -> Option<(Task, usize)> {
        if index >= self.tasks.len() {
            return None;
        }
        Some((self.tasks.remove(index), index))
    }

    /// Reinserts a task at `index`, clamped to the current list length
    ///
    /// Used only for undo restoration. If the list shrank since the removal,
    /// the task lands at the end instead of erroring. The text was valid when
    /// removed, so no emptiness check is repeated here.
    pub fn insert_task_at(&mut self, index: usize, task: Task) {
        let at = index.min(self.tasks.len());
        self.tasks.insert(at, task);
    }

    /// Replaces the text of the task with the given id
    ///
    /// Requires non-empty trimmed text, else no-op (mirrors the add policy).
    /// Returns whether a task was updated; `false` also covers an id that no
    /// longer exists in the list.
    pub fn replace_task(&mut self, id: &TaskId, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        match self.tasks.iter_mut().find(|t| &t.id == id) {
            Some(task) => {
                task.text = trimmed.to_string();
                true
            },
            None => false,
        }
    }

    /// Current position of the task with the given id
    #[must_use]
    pub fn position_of(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| &t.id == id)
    }

    /// Task at a display position
    #[must_use]
    pub fn task_at(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Task texts in display order, for rendering
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.tasks.iter().map(|t| t.text.as_str())
    }

    /// Whether the undo snackbar should be rendered
    #[must_use]
    pub fn snackbar_visible(&self) -> bool {
        self.snackbar != SnackbarPhase::Hidden
    }

    /// Whether the edit modal should be rendered
    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    /// Current edit draft, if a session is active
    #[must_use]
    pub fn draft(&self) -> Option<&str> {
        self.edit.as_ref().map(|e| e.draft.as_str())
    }
}

/// Actions of the task list editor
///
/// One enum unifying the operations the presentation layer invokes and the
/// feedback actions produced by effects (timer expiry, animation completion).
/// Feedback actions carry the generation token current when they were
/// scheduled; the reducer ignores stale ones.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum TaskListAction {
    // ========== UI commands ==========
    /// Compose field text changed
    InputChanged {
        /// New draft text
        text: String,
    },

    /// Append a task; empty-after-trim input is silently ignored
    AddTask {
        /// Raw text, trimmed before insertion
        text: String,
    },

    /// Remove the task at a display position, opening its undo window
    RemoveTask {
        /// Display position of the task
        index: usize,
    },

    /// Restore the pending delete; no-op when none is pending
    UndoDelete,

    /// Begin editing the task at a display position
    StartEdit {
        /// Display position of the task
        index: usize,
    },

    /// Edit modal text changed
    DraftChanged {
        /// New draft text
        text: String,
    },

    /// Commit the edit draft; an empty draft is rejected, not cancelled
    SaveEdit,

    /// Discard the edit draft, list unchanged
    CancelEdit,

    // ========== Effect feedback ==========
    /// The undo window elapsed without an undo
    UndoWindowElapsed {
        /// Token captured when the timer was armed
        generation: u64,
    },

    /// The snackbar show animation finished
    SnackbarShown {
        /// Token captured when the animation started
        generation: u64,
    },

    /// The snackbar hide animation finished
    SnackbarHidden {
        /// Token captured when the animation started
        generation: u64,
    },
}
