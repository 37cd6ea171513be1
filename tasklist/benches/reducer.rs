//! Reducer throughput benchmarks
//!
//! The reducer runs under the store's write lock, so per-action cost bounds
//! how fast the editor can absorb input.

#![allow(clippy::unwrap_used, clippy::expect_used)] // Bench code

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use tasklist::{TaskListAction, TaskListEnvironment, TaskListReducer, TaskListState};
use tasklist_core::reducer::Reducer;
use tasklist_testing::{FixedClock, test_clock};

fn populated_state(count: usize) -> TaskListState {
    let reducer: TaskListReducer<FixedClock> = TaskListReducer::new();
    let env = TaskListEnvironment::new(test_clock());
    let mut state = TaskListState::new();
    for i in 0..count {
        let _ = reducer.reduce(
            &mut state,
            TaskListAction::AddTask {
                text: format!("task {i}"),
            },
            &env,
        );
    }
    state
}

fn bench_add_task(c: &mut Criterion) {
    let reducer: TaskListReducer<FixedClock> = TaskListReducer::new();
    let env = TaskListEnvironment::new(test_clock());

    c.bench_function("add_task_into_100", |b| {
        let base = populated_state(100);
        b.iter(|| {
            let mut state = base.clone();
            let _ = reducer.reduce(
                &mut state,
                TaskListAction::AddTask {
                    text: black_box("another task".to_string()),
                },
                &env,
            );
            state
        });
    });
}

fn bench_remove_undo_cycle(c: &mut Criterion) {
    let reducer: TaskListReducer<FixedClock> = TaskListReducer::new();
    let env = TaskListEnvironment::new(test_clock());

    c.bench_function("remove_then_undo_in_100", |b| {
        let base = populated_state(100);
        b.iter(|| {
            let mut state = base.clone();
            let _ = reducer.reduce(
                &mut state,
                TaskListAction::RemoveTask {
                    index: black_box(50),
                },
                &env,
            );
            let _ = reducer.reduce(&mut state, TaskListAction::UndoDelete, &env);
            state
        });
    });
}

fn bench_save_edit(c: &mut Criterion) {
    let reducer: TaskListReducer<FixedClock> = TaskListReducer::new();
    let env = TaskListEnvironment::new(test_clock());

    c.bench_function("edit_and_save_in_100", |b| {
        let base = populated_state(100);
        b.iter(|| {
            let mut state = base.clone();
            let _ = reducer.reduce(
                &mut state,
                TaskListAction::StartEdit {
                    index: black_box(50),
                },
                &env,
            );
            let _ = reducer.reduce(
                &mut state,
                TaskListAction::DraftChanged {
                    text: "revised".to_string(),
                },
                &env,
            );
            let _ = reducer.reduce(&mut state, TaskListAction::SaveEdit, &env);
            state
        });
    });
}

criterion_group!(
    benches,
    bench_add_task,
    bench_remove_undo_cycle,
    bench_save_edit
);
criterion_main!(benches);
