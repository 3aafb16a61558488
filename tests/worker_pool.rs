use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use record_pipeline::execution::{
    CompositeObserver, ExecutionEvent, ExecutionObserver, ExecutionOptions, Task, WorkerPool,
};

const WAIT: Duration = Duration::from_secs(5);

#[derive(Default)]
struct CountingObserver {
    events: Mutex<Vec<ExecutionEvent>>,
}

impl ExecutionObserver for CountingObserver {
    fn on_event(&self, event: &ExecutionEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

struct Greeting {
    to: &'static str,
    tx: mpsc::Sender<String>,
}

impl Task for Greeting {
    fn run(self) {
        let _ = self.tx.send(format!("hello, {}", self.to));
    }

    fn name(&self) -> String {
        "greeting".to_string()
    }
}

fn fail() {
    panic!("task failed");
}

fn wait_for_finished(pool: &WorkerPool, n: u64) {
    let metrics = pool.metrics();
    let deadline = Instant::now() + WAIT;
    while metrics.snapshot().tasks_finished < n && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(1));
    }
}

#[test]
fn submit_returns_before_task_runs() {
    let pool = WorkerPool::new(ExecutionOptions::single_threaded()).unwrap();
    let (gate_tx, gate_rx) = mpsc::channel::<()>();
    let (done_tx, done_rx) = mpsc::channel();

    pool.submit(move || {
        let _ = gate_rx.recv_timeout(WAIT);
        let _ = done_tx.send(());
    });

    // The task is blocked on the gate, yet submit has already returned.
    assert!(done_rx.try_recv().is_err());
    gate_tx.send(()).unwrap();
    done_rx.recv_timeout(WAIT).unwrap();
}

#[test]
fn composite_observer_fans_out_lifecycle_events() {
    let a = Arc::new(CountingObserver::default());
    let b = Arc::new(CountingObserver::default());
    let observers: Vec<Arc<dyn ExecutionObserver>> = vec![a.clone(), b.clone()];
    let composite = CompositeObserver::new(observers);
    let pool = WorkerPool::new(ExecutionOptions::single_threaded())
        .unwrap()
        .with_observer(Arc::new(composite));

    let (tx, rx) = mpsc::channel();
    let id = pool.submit(Greeting { to: "pool", tx });
    assert_eq!(rx.recv_timeout(WAIT).unwrap(), "hello, pool");
    wait_for_finished(&pool, 1);

    // TaskFinished is emitted right after the metrics update.
    let deadline = Instant::now() + WAIT;
    while b.events.lock().unwrap().len() < 3 && Instant::now() < deadline {
        std::thread::sleep(Duration::from_millis(1));
    }

    for obs in [&a, &b] {
        let events = obs.events.lock().unwrap().clone();
        assert_eq!(events.len(), 3);
        assert_eq!(
            events[0],
            ExecutionEvent::TaskSubmitted {
                task_id: id,
                name: "greeting".to_string()
            }
        );
        assert_eq!(events[1], ExecutionEvent::TaskStarted { task_id: id });
        assert!(matches!(events[2], ExecutionEvent::TaskFinished { task_id, .. } if task_id == id));
    }
}

#[test]
fn pool_keeps_running_after_a_panicking_task() {
    let pool = WorkerPool::new(ExecutionOptions::single_threaded()).unwrap();
    pool.submit(fail);

    let (tx, rx) = mpsc::channel();
    pool.submit(Greeting { to: "survivor", tx });
    assert_eq!(rx.recv_timeout(WAIT).unwrap(), "hello, survivor");

    wait_for_finished(&pool, 2);
    let snap = pool.metrics().snapshot();
    assert_eq!(snap.tasks_submitted, 2);
    assert_eq!(snap.tasks_panicked, 1);
    assert!(snap.to_string().contains("panicked=1"));
}

#[test]
fn multi_threaded_pool_runs_tasks_concurrently() {
    let pool = WorkerPool::new(ExecutionOptions {
        num_threads: Some(4),
    })
    .unwrap();
    let (tx, rx) = mpsc::channel();

    for i in 0..8 {
        let tx = tx.clone();
        pool.submit(move || {
            std::thread::sleep(Duration::from_millis(20));
            let _ = tx.send(i);
        });
    }
    drop(tx);

    let mut got: Vec<i32> = (0..8).map(|_| rx.recv_timeout(WAIT).unwrap()).collect();
    got.sort();
    assert_eq!(got, (0..8).collect::<Vec<_>>());

    wait_for_finished(&pool, 8);
    assert!(pool.metrics().snapshot().max_active_tasks > 1);
}
