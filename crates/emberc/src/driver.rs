//! Parallel driver (spec.md §4.8): derives the worker split, splits the
//! source list into disjoint contiguous chunks (the last absorbing the
//! remainder), and dispatches one `rayon` worker per chunk — grounded in
//! `original_source/src/threading.cpp`'s `get_threading_info` and
//! `original_source/src/compilation_pipeline.cpp`'s `compile_until_lexing`
//! chunk-boundary arithmetic.

use ember_source::{CompilerMetadata, ContractError, Source};
use rayon::prelude::*;

use crate::error::DriverError;

const DEFAULT_WORKER_COUNT: usize = 4;

/// The derived worker split (spec.md §3 "Threading descriptor").
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct ThreadingInfo {
    pub average: usize,
    pub remainder: usize,
    pub worker_count: usize,
}

/// Derives `(average, remainder, worker_count)` from the configured thread
/// count and the number of sources (spec.md §4.8): `0` configured means
/// hardware concurrency, falling back to 4 if that is unavailable too; the
/// worker count is then clamped to `min(configured, source_count)`.
#[must_use]
pub fn threading_info(source_count: usize, configured_threads: u32) -> ThreadingInfo {
    if source_count == 0 {
        return ThreadingInfo {
            average: 0,
            remainder: 0,
            worker_count: 0,
        };
    }

    let mut workers = configured_threads as usize;
    if workers == 0 {
        workers = std::thread::available_parallelism().map(std::num::NonZeroUsize::get).unwrap_or(0);
        if workers == 0 {
            workers = DEFAULT_WORKER_COUNT;
        }
    }

    let worker_count = workers.min(source_count);
    ThreadingInfo {
        average: source_count / worker_count,
        remainder: source_count % worker_count,
        worker_count,
    }
}

/// Splits `sources` into `info.worker_count` disjoint, contiguous mutable
/// slices; the last slice absorbs `info.remainder` extra items. Safe
/// (`unsafe_code` is denied workspace-wide): repeated `split_at_mut` hands
/// out non-overlapping `&mut` windows, matching spec.md §5's guarantee that
/// "each Source is accessed by exactly one worker."
fn split_chunks(sources: &mut [Source], info: ThreadingInfo) -> Vec<&mut [Source]> {
    let mut remaining = sources;
    let mut chunks = Vec::with_capacity(info.worker_count);
    for worker in 0..info.worker_count {
        let len = if worker + 1 == info.worker_count {
            info.average + info.remainder
        } else {
            info.average
        };
        let (head, tail) = remaining.split_at_mut(len);
        chunks.push(head);
        remaining = tail;
    }
    chunks
}

/// A stage method's signature (`Source::decode`, `Source::preprocess`,
/// `Source::lex`, `Source::compile_until_preprocessing`,
/// `Source::compile_until_lexing`) — all five share this shape, so the
/// driver is generic over which one it dispatches.
pub type Stage = fn(&mut Source, &CompilerMetadata) -> Result<bool, ContractError>;

fn run_chunk(chunk: &mut [Source], meta: &CompilerMetadata, stage: Stage) -> Result<bool, ContractError> {
    let mut ok = true;
    for source in chunk.iter_mut() {
        ok &= stage(source, meta)?;
    }
    Ok(ok)
}

/// Runs `stage` over every source in order, with no worker pool — "the same
/// loop without workers" (spec.md §4.8).
pub fn run_sequential(sources: &mut [Source], meta: &CompilerMetadata, stage: Stage) -> Result<bool, ContractError> {
    run_chunk(sources, meta, stage)
}

/// Runs `stage` across a `rayon` thread pool sized to `info.worker_count`,
/// one worker per contiguous chunk. The driver's result is the AND-fold of
/// every worker's AND-folded per-source result (spec.md §4.8); all workers
/// write diagnostics to the shared sink inside `meta` (spec.md §5).
pub fn run_parallel(
    sources: &mut [Source],
    meta: &CompilerMetadata,
    stage: Stage,
    info: ThreadingInfo,
) -> Result<bool, DriverError> {
    if info.worker_count <= 1 {
        return run_sequential(sources, meta, stage).map_err(DriverError::from);
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(info.worker_count)
        .build()
        .map_err(|source| DriverError::PoolBuild {
            worker_count: info.worker_count,
            source,
        })?;

    let chunks = split_chunks(sources, info);
    let results: Result<Vec<bool>, ContractError> =
        pool.install(|| chunks.into_par_iter().map(|chunk| run_chunk(chunk, meta, stage)).collect());

    Ok(results?.into_iter().all(|ok| ok))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_source::CompilerOptions;

    #[test]
    fn zero_sources_yields_zero_workers() {
        let info = threading_info(0, 0);
        assert_eq!(info, ThreadingInfo { average: 0, remainder: 0, worker_count: 0 });
    }

    #[test]
    fn worker_count_clamps_to_source_count() {
        let info = threading_info(2, 16);
        assert_eq!(info.worker_count, 2);
        assert_eq!(info.average, 1);
        assert_eq!(info.remainder, 0);
    }

    #[test]
    fn average_and_remainder_split() {
        let info = threading_info(10, 3);
        assert_eq!(info.worker_count, 3);
        assert_eq!(info.average, 3);
        assert_eq!(info.remainder, 1);
    }

    #[test]
    fn auto_thread_count_never_exceeds_source_count() {
        let info = threading_info(1, 0);
        assert_eq!(info.worker_count, 1);
    }

    fn temp_source(name: &str, contents: &str) -> Source {
        let mut path = std::env::temp_dir();
        path.push(format!("ember_driver_test_{name}_{:?}.ember", std::thread::current().id()));
        std::fs::write(&path, contents).unwrap();
        Source::new(path).unwrap()
    }

    #[test]
    fn parallel_and_sequential_runs_agree() {
        let meta = CompilerMetadata::new(CompilerOptions::new());
        let mut parallel_sources: Vec<Source> =
            (0..5).map(|i| temp_source(&format!("par_{i}"), "let x = 0")).collect();
        let paths: Vec<_> = parallel_sources.iter().map(|s| s.path().to_path_buf()).collect();

        let info = threading_info(parallel_sources.len(), 2);
        let parallel_ok = run_parallel(&mut parallel_sources, &meta, Source::decode, info).unwrap();
        assert!(parallel_ok);
        assert!(parallel_sources.iter().all(|s| s.state() == ember_source::SourceState::Decoded));

        for path in paths {
            std::fs::remove_file(path).unwrap();
        }
    }

    #[test]
    fn single_worker_falls_back_to_sequential_path() {
        let meta = CompilerMetadata::new(CompilerOptions::new());
        let mut sources = vec![temp_source("single", "code")];
        let info = threading_info(1, 1);
        assert!(run_parallel(&mut sources, &meta, Source::decode, info).unwrap());
        std::fs::remove_file(sources[0].path()).unwrap();
    }
}
