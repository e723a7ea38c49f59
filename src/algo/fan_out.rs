//! Worker fan-out over scoped threads.
//!
//! Workers are spawned and joined inside a single driver call; nothing outlives it.

use crate::error::{Result, SortError};
use std::panic;
use std::thread::{self, Scope, ScopedJoinHandle};

fn spawn<'scope, 'env, R, F>(
    scope: &'scope Scope<'scope, 'env>,
    id: usize,
    job: F,
) -> Result<ScopedJoinHandle<'scope, R>>
where
    R: Send + 'scope,
    F: FnOnce() -> R + Send + 'scope,
{
    thread::Builder::new()
        .name(format!("pradix-worker-{id}"))
        .spawn_scoped(scope, job)
        .map_err(SortError::Spawn)
}

/// Runs `f` over every item of `work`, split into contiguous groups.
///
/// Each of `min(threads, work.len())` workers receives `work.len() / workers`
/// consecutive items; the leftover tail runs on the calling thread. With a
/// single worker everything runs inline. A panic in any worker is resumed on
/// the calling thread once all workers have finished.
pub(crate) fn for_each_group<W, F>(work: Vec<W>, threads: usize, f: F) -> Result<()>
where
    W: Send,
    F: Fn(W) + Sync,
{
    let workers = threads.min(work.len());
    if workers <= 1 {
        work.into_iter().for_each(f);
        return Ok(());
    }

    let per_worker = work.len() / workers;
    let f = &f;
    let mut work = work.into_iter();
    thread::scope(|scope| {
        let handles = (0..workers)
            .map(|id| {
                let group: Vec<W> = work.by_ref().take(per_worker).collect();
                spawn(scope, id, move || group.into_iter().for_each(f))
            })
            .collect::<Result<Vec<_>>>()?;
        work.for_each(f);
        handles.into_iter().for_each(join);
        Ok(())
    })
}

fn join<R>(handle: ScopedJoinHandle<'_, R>) -> R {
    handle
        .join()
        .unwrap_or_else(|payload| panic::resume_unwind(payload))
}

/// Runs `f` once per input, one worker per input, and returns the results in input order.
pub(crate) fn map_workers<I, R, F>(inputs: Vec<I>, f: F) -> Result<Vec<R>>
where
    I: Send,
    R: Send,
    F: Fn(I) -> R + Sync,
{
    if inputs.len() <= 1 {
        return Ok(inputs.into_iter().map(f).collect());
    }

    let f = &f;
    thread::scope(|scope| {
        let handles = inputs
            .into_iter()
            .enumerate()
            .map(|(id, input)| spawn(scope, id, move || f(input)))
            .collect::<Result<Vec<_>>>()?;

        Ok(handles.into_iter().map(join).collect())
    })
}
