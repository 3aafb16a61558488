//! Demonstrations of every pipeline operation over the fixed sample records.
//!
//! Each demonstration builds a fresh [`sample_records`] sequence and writes one record or value
//! per line to the supplied writer. Within a demonstration, sections are separated by a line of
//! dashes (text format only).

use std::fmt;
use std::io::Write;
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::PipelineResult;
use crate::execution::{ExecutionOptions, StdErrExecutionObserver, Task, WorkerPool};
use crate::processing::{
    filter, for_each, keep_last, limit, map, max_by_key, min_by_key, reduce, sorted_by, summarize,
    to_list, to_map, Predicate,
};
use crate::types::{sample_records, Record, FEMALE};

const SEPARATOR: &str = "------------------";

/// Which demonstration to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// Submit a named task object to a worker pool.
    AnonymousTask,
    /// Submit a closure to a worker pool.
    ClosureTask,
    ForEach,
    Filter,
    Limit,
    Sorted,
    Max,
    Min,
    Map,
    Reduce,
    Collect,
    SummaryStatistics,
    /// Every demonstration above, in order.
    All,
}

impl Demo {
    /// Every single demonstration, in the order [`Demo::All`] runs them.
    pub const EACH: [Demo; 12] = [
        Demo::AnonymousTask,
        Demo::ClosureTask,
        Demo::ForEach,
        Demo::Filter,
        Demo::Limit,
        Demo::Sorted,
        Demo::Max,
        Demo::Min,
        Demo::Map,
        Demo::Reduce,
        Demo::Collect,
        Demo::SummaryStatistics,
    ];
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(v) => f.write_str(v.get_name()),
            None => write!(f, "{self:?}"),
        }
    }
}

/// Output encoding for demonstration lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// One JSON value per line.
    Json,
}

/// Options controlling how demonstrations run and print.
#[derive(Debug, Clone)]
pub struct DemoOptions {
    pub format: OutputFormat,
    /// Worker threads for the task demonstrations.
    pub threads: usize,
    /// Log worker pool events to stderr.
    pub verbose: bool,
    /// How long the task demonstrations wait to relay the background task's message.
    ///
    /// Submission itself never waits; if the message does not arrive in time nothing is printed.
    pub task_timeout: Duration,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            threads: 1,
            verbose: false,
            task_timeout: Duration::from_secs(1),
        }
    }
}

/// Run one demonstration (or all of them), writing its lines to `out`.
pub fn run_demo<W: Write>(demo: Demo, opts: &DemoOptions, out: &mut W) -> PipelineResult<()> {
    let mut lines = Lines {
        out,
        format: opts.format,
    };
    run_single(demo, opts, &mut lines)
}

fn run_single<W: Write>(
    demo: Demo,
    opts: &DemoOptions,
    lines: &mut Lines<'_, W>,
) -> PipelineResult<()> {
    match demo {
        Demo::AnonymousTask => anonymous_task(opts, lines),
        Demo::ClosureTask => closure_task(opts, lines),
        Demo::ForEach => for_each_demo(lines),
        Demo::Filter => filter_demo(lines),
        Demo::Limit => limit_demo(lines),
        Demo::Sorted => sorted_demo(lines),
        Demo::Max => max_demo(lines),
        Demo::Min => min_demo(lines),
        Demo::Map => map_demo(lines),
        Demo::Reduce => reduce_demo(lines),
        Demo::Collect => collect_demo(lines),
        Demo::SummaryStatistics => summary_demo(lines),
        Demo::All => run_all(opts, lines),
    }
}

/// Runs every entry of [`Demo::EACH`] in order. `EACH` never contains `All`.
fn run_all<W: Write>(opts: &DemoOptions, lines: &mut Lines<'_, W>) -> PipelineResult<()> {
    for d in Demo::EACH {
        if lines.format == OutputFormat::Text {
            writeln!(lines.out, "== {d} ==")?;
        }
        run_single(d, opts, lines)?;
    }
    Ok(())
}

/// Line writer honoring the selected [`OutputFormat`].
struct Lines<'a, W: Write> {
    out: &'a mut W,
    format: OutputFormat,
}

impl<W: Write> Lines<'_, W> {
    fn emit<T: fmt::Display + Serialize + ?Sized>(&mut self, value: &T) -> PipelineResult<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{value}")?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *self.out, value)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    fn separator(&mut self) -> PipelineResult<()> {
        if self.format == OutputFormat::Text {
            writeln!(self.out, "{SEPARATOR}")?;
        }
        Ok(())
    }

    fn records<'r>(&mut self, records: impl IntoIterator<Item = &'r Record>) -> PipelineResult<()> {
        for r in records {
            self.emit(r)?;
        }
        Ok(())
    }
}

/// A `key:value` pair printed by the collect demonstration.
#[derive(Serialize)]
struct KeyValue<'a> {
    key: &'a str,
    value: &'a Record,
}

impl fmt::Display for KeyValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.key, self.value)
    }
}

/// A single labelled statistic, e.g. `average:2.5`.
#[derive(Serialize)]
struct Labelled<'a, T: Serialize> {
    label: &'a str,
    value: T,
}

impl<T: Serialize + fmt::Display> fmt::Display for Labelled<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.label, self.value)
    }
}

/// Background task that hands its message to whoever is listening.
struct AnnounceTask {
    message: &'static str,
    tx: mpsc::Sender<String>,
}

impl Task for AnnounceTask {
    fn run(self) {
        let _ = self.tx.send(self.message.to_string());
    }

    fn name(&self) -> String {
        "announce".to_string()
    }
}

fn worker_pool(opts: &DemoOptions) -> PipelineResult<WorkerPool> {
    let pool = WorkerPool::new(ExecutionOptions {
        num_threads: Some(opts.threads.max(1)),
    })?;
    Ok(if opts.verbose {
        pool.with_observer(Arc::new(StdErrExecutionObserver))
    } else {
        pool
    })
}

fn relay<W: Write>(
    rx: &mpsc::Receiver<String>,
    opts: &DemoOptions,
    lines: &mut Lines<'_, W>,
) -> PipelineResult<()> {
    if let Ok(message) = rx.recv_timeout(opts.task_timeout) {
        lines.emit(message.as_str())?;
    }
    Ok(())
}

fn anonymous_task<W: Write>(opts: &DemoOptions, lines: &mut Lines<'_, W>) -> PipelineResult<()> {
    let pool = worker_pool(opts)?;
    let (tx, rx) = mpsc::channel();
    pool.submit(AnnounceTask {
        message: "thread via task object",
        tx,
    });
    relay(&rx, opts, lines)
}

fn closure_task<W: Write>(opts: &DemoOptions, lines: &mut Lines<'_, W>) -> PipelineResult<()> {
    let pool = worker_pool(opts)?;
    let (tx, rx) = mpsc::channel();
    pool.submit(move || {
        let _ = tx.send("thread via closure".to_string());
    });
    relay(&rx, opts, lines)
}

fn for_each_demo<W: Write>(lines: &mut Lines<'_, W>) -> PipelineResult<()> {
    let mut records = sample_records();
    lines.records(&records)?;
    lines.separator()?;

    let change_age = |r: &mut Record| {
        let next = r.age() + 3;
        r.set_age(next);
    };
    for_each(records.iter_mut(), change_age);
    lines.records(&records)
}

fn filter_demo<W: Write>(lines: &mut Lines<'_, W>) -> PipelineResult<()> {
    let records = sample_records();
    lines.records(filter(&records, |r| r.age() > 1))?;
    lines.separator()?;

    // Chained: filter twice.
    lines.records(filter(filter(&records, |r| r.age() > 1), |r| r.sex() == FEMALE))?;
    lines.separator()?;

    // Composed: filter once with the conjunction.
    let age_filter = Predicate::new(|r: &Record| r.age() > 1);
    let sex_filter = Predicate::new(|r: &Record| r.sex() == FEMALE);
    let both = age_filter.and(sex_filter);
    lines.records(filter(&records, |r| both.test(r)))
}

fn limit_demo<W: Write>(lines: &mut Lines<'_, W>) -> PipelineResult<()> {
    let records = sample_records();
    lines.records(limit(&records, 2))
}

fn sorted_demo<W: Write>(lines: &mut Lines<'_, W>) -> PipelineResult<()> {
    let records = sample_records();
    lines.records(sorted_by(&records, |a, b| b.age().cmp(&a.age())))
}

fn max_demo<W: Write>(lines: &mut Lines<'_, W>) -> PipelineResult<()> {
    let records = sample_records();
    let oldest = max_by_key(&records, |r| r.age())?;
    lines.emit(oldest)
}

fn min_demo<W: Write>(lines: &mut Lines<'_, W>) -> PipelineResult<()> {
    let records = sample_records();
    let youngest = min_by_key(&records, |r| r.age())?;
    lines.emit(youngest)
}

fn map_demo<W: Write>(lines: &mut Lines<'_, W>) -> PipelineResult<()> {
    let mut records = sample_records();
    lines.records(&records)?;
    lines.separator()?;

    let bumped: Vec<String> = map(records.iter_mut(), |r| {
        let next = r.age() + 1;
        r.set_age(next);
        r.to_string()
    })
    .collect();
    match lines.format {
        OutputFormat::Text => {
            for line in &bumped {
                lines.emit(line.as_str())?;
            }
            Ok(())
        }
        // The mapped records are the updated originals.
        OutputFormat::Json => lines.records(&records),
    }
}

fn reduce_demo<W: Write>(lines: &mut Lines<'_, W>) -> PipelineResult<()> {
    let records = sample_records();
    let total = reduce(records.iter().map(Record::age), |sum, age| sum + age)?;
    lines.emit(&total)
}

fn collect_demo<W: Write>(lines: &mut Lines<'_, W>) -> PipelineResult<()> {
    let records = sample_records();
    let by_name = to_map(&records, |r| r.name().to_string(), |r| r, keep_last);

    let mut keys: Vec<&String> = by_name.keys().collect();
    keys.sort();
    for key in keys {
        lines.emit(&KeyValue {
            key,
            value: by_name[key],
        })?;
    }
    lines.separator()?;

    let names = to_list(&records, |r| r.name().to_string());
    for name in &names {
        lines.emit(name.as_str())?;
    }
    Ok(())
}

fn summary_demo<W: Write>(lines: &mut Lines<'_, W>) -> PipelineResult<()> {
    let records = sample_records();
    let stats = summarize(records.iter().map(Record::age));
    if lines.format == OutputFormat::Json {
        return lines.emit(&stats);
    }

    let undefined = || "undefined".to_string();
    lines.emit(&Labelled {
        label: "average",
        value: stats.average().map_or_else(undefined, |v| v.to_string()),
    })?;
    lines.emit(&Labelled {
        label: "count",
        value: stats.count(),
    })?;
    lines.emit(&Labelled {
        label: "max",
        value: stats.max().map_or_else(undefined, |v| v.to_string()),
    })?;
    lines.emit(&Labelled {
        label: "min",
        value: stats.min().map_or_else(undefined, |v| v.to_string()),
    })?;
    lines.emit(&Labelled {
        label: "sum",
        value: stats.sum(),
    })
}
