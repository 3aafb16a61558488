//! Fire-and-forget background execution.
//!
//! A [`WorkerPool`] wraps a fixed-size rayon thread pool. Work is submitted either as a value
//! implementing [`Task`] or as a plain closure (every `FnOnce() + Send + 'static` is a `Task`).
//! Submission never blocks and nothing is awaited: there is no result, no cancellation and no
//! ordering guarantee relative to the caller.
//!
//! The pool also provides:
//!
//! - observer hooks ([`ExecutionObserver`]) for logging task lifecycle events
//! - real-time [`ExecutionMetrics`]
//! - panic isolation: a panicking task is counted and reported, and the pool keeps running

mod observer;

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

use rayon::ThreadPool;
use rayon::ThreadPoolBuilder;

use crate::error::PipelineResult;

pub use observer::{
    CompositeObserver, ExecutionEvent, ExecutionMetrics, ExecutionMetricsSnapshot,
    ExecutionObserver, StdErrExecutionObserver,
};

/// A unit of background work.
pub trait Task: Send + 'static {
    /// Consume the task and run it on a worker thread.
    fn run(self);

    /// Label reported in [`ExecutionEvent::TaskSubmitted`].
    fn name(&self) -> String {
        std::any::type_name::<Self>().to_string()
    }
}

impl<F> Task for F
where
    F: FnOnce() + Send + 'static,
{
    fn run(self) {
        self()
    }

    fn name(&self) -> String {
        "closure".to_string()
    }
}

/// Configuration for the [`WorkerPool`].
#[derive(Debug, Clone)]
pub struct ExecutionOptions {
    /// Number of worker threads.
    ///
    /// If `None`, uses the platform's available parallelism.
    pub num_threads: Option<usize>,
}

impl ExecutionOptions {
    /// A pool with exactly one worker thread.
    pub fn single_threaded() -> Self {
        Self {
            num_threads: Some(1),
        }
    }
}

impl Default for ExecutionOptions {
    fn default() -> Self {
        let n = std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1);
        Self {
            num_threads: Some(n),
        }
    }
}

/// State shared between the pool handle and every in-flight task.
struct Shared {
    observer: Option<Arc<dyn ExecutionObserver>>,
    metrics: Arc<ExecutionMetrics>,
}

impl Shared {
    fn emit(&self, event: ExecutionEvent) {
        if let Some(obs) = &self.observer {
            obs.on_event(&event);
        }
    }
}

/// A fixed-size pool for fire-and-forget tasks.
pub struct WorkerPool {
    pool: ThreadPool,
    threads: usize,
    shared: Arc<Shared>,
}

impl WorkerPool {
    /// Create a new pool with the given options.
    ///
    /// # Panics
    ///
    /// Panics if `num_threads == Some(0)`.
    pub fn new(opts: ExecutionOptions) -> PipelineResult<Self> {
        if let Some(n) = opts.num_threads {
            assert!(n > 0, "num_threads must be > 0 when set");
        }

        let threads = opts
            .num_threads
            .unwrap_or_else(|| std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1))
            .max(1);

        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("record-pipeline-worker-{i}"))
            .build()?;

        Ok(Self {
            pool,
            threads,
            shared: Arc::new(Shared {
                observer: None,
                metrics: Arc::new(ExecutionMetrics::new()),
            }),
        })
    }

    /// Attach an observer for execution events (metrics/logging).
    ///
    /// Must be called before any task is submitted.
    pub fn with_observer(mut self, observer: Arc<dyn ExecutionObserver>) -> Self {
        let metrics = Arc::clone(&self.shared.metrics);
        self.shared = Arc::new(Shared {
            observer: Some(observer),
            metrics,
        });
        self
    }

    /// Number of worker threads.
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Get a handle to real-time execution metrics.
    pub fn metrics(&self) -> Arc<ExecutionMetrics> {
        Arc::clone(&self.shared.metrics)
    }

    /// Submit a task and return immediately with its id.
    ///
    /// The task runs at some later point on a worker thread. A panic inside the task is caught,
    /// counted in [`ExecutionMetricsSnapshot::tasks_panicked`] and reported as
    /// [`ExecutionEvent::TaskPanicked`].
    pub fn submit<T: Task>(&self, task: T) -> u64 {
        let task_id = self.shared.metrics.on_submit();
        self.shared.emit(ExecutionEvent::TaskSubmitted {
            task_id,
            name: task.name(),
        });

        let shared = Arc::clone(&self.shared);
        self.pool.spawn(move || run_task(&shared, task_id, task));
        task_id
    }
}

fn run_task<T: Task>(shared: &Shared, task_id: u64, task: T) {
    let start = Instant::now();
    shared.metrics.on_task_start();
    shared.emit(ExecutionEvent::TaskStarted { task_id });

    let outcome = panic::catch_unwind(AssertUnwindSafe(move || task.run()));

    let elapsed = start.elapsed();
    shared.metrics.on_task_end(elapsed, outcome.is_err());
    match outcome {
        Ok(()) => shared.emit(ExecutionEvent::TaskFinished { task_id, elapsed }),
        Err(payload) => shared.emit(ExecutionEvent::TaskPanicked {
            task_id,
            message: panic_message(payload.as_ref()),
        }),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}
