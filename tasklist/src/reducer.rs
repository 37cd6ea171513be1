//! Reducer logic for the task list editor.
//!
//! Two state machines share the list: the undo subsystem (single-slot pending
//! delete with an auto-expiring window and an animated snackbar) and the edit
//! subsystem (one exclusive session). Rejected operations are silent no-ops
//! traced at debug level; nothing here returns an error to the caller.
//!
//! Timers and animations are `Effect::Delay` values whose follow-up actions
//! carry the generation token current at scheduling time. Bumping the token
//! is the cancellation mechanism: a superseded timer or hide animation still
//! fires, but its finished side effects are ignored on arrival.

use crate::types::{EditSession, PendingDelete, SnackbarPhase, TaskListAction, TaskListState};
use std::time::Duration;
use tasklist_core::{SmallVec, effect::Effect, environment::Clock, reducer::Reducer, smallvec};

/// How long a removal stays undoable
pub const UNDO_WINDOW: Duration = Duration::from_millis(4000);

/// Duration of the snackbar show and hide animations
pub const SNACKBAR_ANIMATION: Duration = Duration::from_millis(180);

/// Environment dependencies for the task list reducer
///
/// Carries the injected clock and the timing configuration. Tests shrink the
/// durations to milliseconds; production uses the defaults above.
#[derive(Clone, Debug)]
pub struct TaskListEnvironment<C: Clock> {
    /// Clock for task creation timestamps
    pub clock: C,
    /// How long a removal stays undoable
    pub undo_window: Duration,
    /// Snackbar show/hide animation duration
    pub animation: Duration,
}

impl<C: Clock> TaskListEnvironment<C> {
    /// Creates an environment with production timing defaults
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self {
            clock,
            undo_window: UNDO_WINDOW,
            animation: SNACKBAR_ANIMATION,
        }
    }

    /// Overrides the undo window duration
    #[must_use]
    pub const fn with_undo_window(mut self, duration: Duration) -> Self {
        self.undo_window = duration;
        self
    }

    /// Overrides the animation duration
    #[must_use]
    pub const fn with_animation(mut self, duration: Duration) -> Self {
        self.animation = duration;
        self
    }
}

/// Reducer for the task list editor
///
/// Generic over the clock type so tests can inject a fixed clock.
#[derive(Clone, Copy, Debug)]
pub struct TaskListReducer<C> {
    _phantom: std::marker::PhantomData<C>,
}

impl<C> TaskListReducer<C> {
    /// Creates a new `TaskListReducer`
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<C> Default for TaskListReducer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> TaskListReducer<C> {
    /// Starts the snackbar hide transition under a fresh generation
    ///
    /// Bumping the generation here also cancels any still-armed undo timer
    /// and any in-flight show animation.
    fn begin_hide(
        state: &mut TaskListState,
        env: &TaskListEnvironment<C>,
    ) -> SmallVec<[Effect<TaskListAction>; 4]> {
        state.generation += 1;
        let generation = state.generation;
        state.snackbar = SnackbarPhase::AnimatingOut;
        smallvec![Effect::delay(
            env.animation,
            TaskListAction::SnackbarHidden { generation }
        )]
    }
}

impl<C: Clock> Reducer for TaskListReducer<C> {
    type State = TaskListState;
    type Action = TaskListAction;
    type Environment = TaskListEnvironment<C>;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Compose field ==========
            TaskListAction::InputChanged { text } => {
                state.input = text;
                SmallVec::new()
            },

            TaskListAction::AddTask { text } => {
                if state.add_task(&text, env.clock.now()) {
                    // Only a successful add clears the compose field
                    state.input.clear();
                } else {
                    tracing::debug!("add rejected: text empty after trimming");
                }
                SmallVec::new()
            },

            // ========== Undo subsystem ==========
            TaskListAction::RemoveTask { index } => {
                let Some((task, original_index)) = state.remove_task(index) else {
                    tracing::debug!(index, "remove rejected: index out of range");
                    return SmallVec::new();
                };

                tracing::debug!(index, task_id = %task.id, "task removed, undo window open");

                // Supersedes any prior pending delete irrecoverably and
                // logically cancels its timer and animation
                state.generation += 1;
                let generation = state.generation;
                state.pending_delete = Some(PendingDelete {
                    task,
                    original_index,
                });
                // Re-triggers the in-animation even when the bar is already
                // visible or mid-hide
                state.snackbar = SnackbarPhase::AnimatingIn;

                smallvec![
                    Effect::delay(env.animation, TaskListAction::SnackbarShown { generation }),
                    Effect::delay(
                        env.undo_window,
                        TaskListAction::UndoWindowElapsed { generation }
                    ),
                ]
            },

            TaskListAction::UndoDelete => {
                let Some(pending) = state.pending_delete.take() else {
                    tracing::debug!("undo rejected: no pending delete");
                    return SmallVec::new();
                };

                tracing::debug!(task_id = %pending.task.id, "restoring removed task");
                state.insert_task_at(pending.original_index, pending.task);
                Self::begin_hide(state, env)
            },

            TaskListAction::UndoWindowElapsed { generation } => {
                if generation != state.generation {
                    tracing::trace!(
                        generation,
                        current = state.generation,
                        "stale undo timer ignored"
                    );
                    return SmallVec::new();
                }

                // The removal is now permanent
                state.pending_delete = None;
                Self::begin_hide(state, env)
            },

            TaskListAction::SnackbarShown { generation } => {
                if generation == state.generation && state.snackbar == SnackbarPhase::AnimatingIn {
                    state.snackbar = SnackbarPhase::Visible;
                    state.snackbar_progress = 1.0;
                }
                SmallVec::new()
            },

            TaskListAction::SnackbarHidden { generation } => {
                // A superseded hide must not run its finished side effects
                if generation == state.generation && state.snackbar == SnackbarPhase::AnimatingOut {
                    state.snackbar = SnackbarPhase::Hidden;
                    state.snackbar_progress = 0.0;
                }
                SmallVec::new()
            },

            // ========== Edit subsystem ==========
            TaskListAction::StartEdit { index } => {
                match state.task_at(index) {
                    Some(task) => {
                        state.edit = Some(EditSession {
                            task_id: task.id.clone(),
                            draft: task.text.clone(),
                        });
                    },
                    None => tracing::debug!(index, "edit rejected: index out of range"),
                }
                SmallVec::new()
            },

            TaskListAction::DraftChanged { text } => {
                if let Some(edit) = &mut state.edit {
                    edit.draft = text;
                } else {
                    tracing::debug!("draft change ignored: no edit session");
                }
                SmallVec::new()
            },

            TaskListAction::SaveEdit => {
                let Some(session) = &state.edit else {
                    tracing::debug!("save rejected: no edit session");
                    return SmallVec::new();
                };

                let draft = session.draft.clone();
                if draft.trim().is_empty() {
                    // Rejected, not cancelled: the session stays open
                    tracing::debug!("save rejected: draft empty after trimming");
                    return SmallVec::new();
                }

                let task_id = session.task_id.clone();
                if !state.replace_task(&task_id, &draft) {
                    // The task was removed during the session and its undo
                    // window lapsed; nothing left to commit to
                    tracing::debug!(%task_id, "edited task no longer exists, dropping session");
                }
                state.edit = None;
                SmallVec::new()
            },

            TaskListAction::CancelEdit => {
                // Idempotent when no session is active
                state.edit = None;
                SmallVec::new()
            },
        }
    }
}
