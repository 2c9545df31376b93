#[cfg(test)]
#[path = "../../tests/unit/utils/parallel_test.rs"]
mod parallel_test;

use crate::utils::{GenericError, GenericResult};
use rayon::prelude::*;
use rayon::{ThreadPool as RayonThreadPool, ThreadPoolBuilder};
use std::sync::Arc;

/// Represents a thread pool wrapper.
pub struct ThreadPool {
    inner: RayonThreadPool,
}

impl ThreadPool {
    /// Creates a new instance of `ThreadPool`.
    pub fn new(num_threads: usize) -> GenericResult<Self> {
        ThreadPoolBuilder::new()
            .num_threads(num_threads)
            .build()
            .map(|inner| Self { inner })
            .map_err(|err| GenericError::from(format!("cannot build a thread pool: '{err}'")))
    }

    /// Executes given operation on thread pool.
    pub fn execute<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.inner.install(op)
    }
}

/// Specifies how data parallel operations are executed.
#[derive(Clone, Default)]
pub enum Parallelism {
    /// Runs on rayon's global thread pool.
    #[default]
    Global,
    /// Runs on a dedicated thread pool.
    Pool(Arc<ThreadPool>),
    /// Runs everything on the calling thread.
    Sequential,
}

impl Parallelism {
    /// Creates a parallelism backed by a dedicated pool with given amount of threads.
    pub fn new_with_threads(num_threads: usize) -> GenericResult<Self> {
        ThreadPool::new(num_threads).map(|pool| Self::Pool(Arc::new(pool)))
    }

    /// Returns true if operations can run on more than one thread.
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Sequential)
    }

    /// Maps collection and collects results into vector keeping the source order.
    pub fn collect<T, F, R>(&self, source: &[T], map_op: F) -> Vec<R>
    where
        T: Send + Sync,
        F: Fn(&T) -> R + Sync + Send,
        R: Send,
    {
        match self {
            Self::Global => parallel_collect(source, map_op),
            Self::Pool(pool) => pool.execute(|| parallel_collect(source, map_op)),
            Self::Sequential => source.iter().map(map_op).collect(),
        }
    }

    /// Performs map reduce operation. Reduce operation is expected to be associative and commutative.
    pub fn map_reduce<T, FM, FR, FD, R>(&self, source: &[T], map_op: FM, default_op: FD, reduce_op: FR) -> R
    where
        T: Send + Sync,
        FM: Fn(&T) -> R + Sync + Send,
        FR: Fn(R, R) -> R + Sync + Send,
        FD: Fn() -> R + Sync + Send,
        R: Send,
    {
        match self {
            Self::Global => map_reduce(source, map_op, default_op, reduce_op),
            Self::Pool(pool) => pool.execute(|| map_reduce(source, map_op, default_op, reduce_op)),
            Self::Sequential => source.iter().map(map_op).fold(default_op(), reduce_op),
        }
    }
}

/// Maps collection and collects results into vector in parallel.
pub fn parallel_collect<T, F, R>(source: &[T], map_op: F) -> Vec<R>
where
    T: Send + Sync,
    F: Fn(&T) -> R + Sync + Send,
    R: Send,
{
    source.par_iter().map(map_op).collect()
}

/// Performs map reduce operations in parallel.
pub fn map_reduce<T, FM, FR, FD, R>(source: &[T], map_op: FM, default_op: FD, reduce_op: FR) -> R
where
    T: Send + Sync,
    FM: Fn(&T) -> R + Sync + Send,
    FR: Fn(R, R) -> R + Sync + Send,
    FD: Fn() -> R + Sync + Send,
    R: Send,
{
    source.par_iter().map(map_op).reduce(default_op, reduce_op)
}
