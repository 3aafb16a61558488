use std::fmt;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Execution events emitted by the [`super::WorkerPool`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionEvent {
    TaskSubmitted { task_id: u64, name: String },
    TaskStarted { task_id: u64 },
    TaskFinished { task_id: u64, elapsed: Duration },
    TaskPanicked { task_id: u64, message: String },
}

/// Observer hook for execution events.
///
/// Called from worker threads, so implementations must be `Send + Sync`.
pub trait ExecutionObserver: Send + Sync {
    fn on_event(&self, event: &ExecutionEvent);
}

/// A simple stderr logger for execution events.
#[derive(Debug, Default)]
pub struct StdErrExecutionObserver;

impl ExecutionObserver for StdErrExecutionObserver {
    fn on_event(&self, event: &ExecutionEvent) {
        eprintln!("[pool] {event:?}");
    }
}

/// An observer that fans out events to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn ExecutionObserver>>,
}

impl CompositeObserver {
    pub fn new(observers: Vec<Arc<dyn ExecutionObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl ExecutionObserver for CompositeObserver {
    fn on_event(&self, event: &ExecutionEvent) {
        for o in &self.observers {
            o.on_event(event);
        }
    }
}

/// Live counters for a worker pool.
///
/// The pool updates these from worker threads; callers can snapshot them at any time.
pub struct ExecutionMetrics {
    tasks_submitted: AtomicU64,
    tasks_started: AtomicU64,
    tasks_finished: AtomicU64,
    tasks_panicked: AtomicU64,
    busy_ns: AtomicU64,

    active_tasks: AtomicUsize,
    max_active_tasks: AtomicUsize,
}

impl ExecutionMetrics {
    pub fn new() -> Self {
        Self {
            tasks_submitted: AtomicU64::new(0),
            tasks_started: AtomicU64::new(0),
            tasks_finished: AtomicU64::new(0),
            tasks_panicked: AtomicU64::new(0),
            busy_ns: AtomicU64::new(0),
            active_tasks: AtomicUsize::new(0),
            max_active_tasks: AtomicUsize::new(0),
        }
    }

    /// Returns the id assigned to the submitted task.
    pub(crate) fn on_submit(&self) -> u64 {
        self.tasks_submitted.fetch_add(1, Ordering::SeqCst) + 1
    }

    pub(crate) fn on_task_start(&self) {
        let _ = self.tasks_started.fetch_add(1, Ordering::SeqCst);
        let now = self.active_tasks.fetch_add(1, Ordering::SeqCst) + 1;
        update_max_usize(&self.max_active_tasks, now);
    }

    pub(crate) fn on_task_end(&self, elapsed: Duration, panicked: bool) {
        let add = elapsed.as_nanos().min(u64::MAX as u128) as u64;
        let _ = self.busy_ns.fetch_add(add, Ordering::SeqCst);
        if panicked {
            let _ = self.tasks_panicked.fetch_add(1, Ordering::SeqCst);
        }
        let _ = self.tasks_finished.fetch_add(1, Ordering::SeqCst);
        let _ = self.active_tasks.fetch_sub(1, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> ExecutionMetricsSnapshot {
        ExecutionMetricsSnapshot {
            tasks_submitted: self.tasks_submitted.load(Ordering::SeqCst),
            tasks_started: self.tasks_started.load(Ordering::SeqCst),
            tasks_finished: self.tasks_finished.load(Ordering::SeqCst),
            tasks_panicked: self.tasks_panicked.load(Ordering::SeqCst),
            busy: Duration::from_nanos(self.busy_ns.load(Ordering::SeqCst)),
            max_active_tasks: self.max_active_tasks.load(Ordering::SeqCst),
        }
    }
}

impl Default for ExecutionMetrics {
    fn default() -> Self {
        Self::new()
    }
}

fn update_max_usize(dst: &AtomicUsize, now: usize) {
    loop {
        let cur = dst.load(Ordering::SeqCst);
        if now <= cur {
            break;
        }
        if dst
            .compare_exchange(cur, now, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            break;
        }
    }
}

/// Immutable snapshot of [`ExecutionMetrics`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionMetricsSnapshot {
    pub tasks_submitted: u64,
    pub tasks_started: u64,
    /// Includes tasks that panicked.
    pub tasks_finished: u64,
    pub tasks_panicked: u64,
    /// Total wall time spent inside tasks.
    pub busy: Duration,
    pub max_active_tasks: usize,
}

impl fmt::Display for ExecutionMetricsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tasks={}/{}/{} (submitted/started/finished), ",
            self.tasks_submitted, self.tasks_started, self.tasks_finished,
        )?;
        write!(
            f,
            "panicked={}, max_active_tasks={}, busy={:?}",
            self.tasks_panicked, self.max_active_tasks, self.busy
        )
    }
}
