//! Worker-pool orchestration: one task per enabled tool, bounded fan-out,
//! channel fan-in.
//!
//! The thread pool size is the admission gate — at most `concurrency`
//! tasks hold a subprocess at any instant, the rest queue. Every task
//! funnels its issues into one mpsc channel; the scope join guarantees
//! all producers are done before the consumer drains, so channel
//! disconnection is the sole termination signal and nothing ever polls.

use crate::config::RunPlan;
use crate::extract::{extract, ExtractError};
use crate::issue::Issue;
use crate::tool::ResolvedTool;
use log::debug;
use std::sync::mpsc;
use std::time::Instant;
use thiserror::Error;

/// Error types for orchestration setup
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

/// Run every enabled tool against the plan's target and collect all
/// issues they produce.
///
/// Tasks are symmetric and independent; no ordering is imposed here —
/// the report formatter owns the final sort. Per-tool failures are soft:
/// a tool that cannot be launched contributes zero issues and the run
/// continues. A broken numeric capture mid-extraction is
/// configuration-class and aborts the whole process (see [`fatal`]).
pub fn run(plan: &RunPlan) -> Result<Vec<Issue>, RunnerError> {
    let start = Instant::now();
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(plan.run.concurrency)
        .build()?;

    let (tx, rx) = mpsc::channel();
    pool.scope(|scope| {
        for tool in &plan.tools {
            let tx = tx.clone();
            let target = plan.run.target.as_str();
            scope.spawn(move |_| run_tool(tool, target, &tx));
        }
    });
    drop(tx);

    let issues: Vec<Issue> = rx.iter().collect();
    debug!(
        "{} tool(s) produced {} issue(s) in {:.2?}",
        plan.tools.len(),
        issues.len(),
        start.elapsed()
    );
    Ok(issues)
}

fn run_tool(tool: &ResolvedTool, target: &str, tx: &mpsc::Sender<Issue>) {
    let start = Instant::now();
    debug!("running {}: {}", tool.spec.name, tool.spec.command);

    let output = match tool.spec.invoke(target) {
        Ok(output) => output,
        Err(err) => {
            // Launch failure is contained to this task: zero issues.
            debug!("{} failed to launch: {}", tool.spec.name, err);
            return;
        }
    };

    let issues = match extract(&output, &tool.matcher, &tool.spec) {
        Ok(issues) => issues,
        Err(err) => fatal(&err),
    };

    for issue in issues {
        // The receiver outlives the scope; send cannot fail while any
        // task is still running.
        let _ = tx.send(issue);
    }

    debug!("{} finished in {:.2?}", tool.spec.name, start.elapsed());
}

/// Abort the whole run from inside a task.
///
/// A matched-but-unparseable numeric field means the pattern is broken,
/// not the input; the run terminates immediately even while other tasks
/// are still running.
fn fatal(err: &ExtractError) -> ! {
    eprintln!("metalint: fatal: {}", err);
    std::process::exit(2);
}
