use crate::utils::Parallelism;
use std::sync::Arc;

/// A logger type which is called with informative messages.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// Specifies how independent searches are distributed among threads.
    pub parallelism: Parallelism,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates an instance of `Environment`.
    pub fn new(parallelism: Parallelism, logger: InfoLogger) -> Self {
        Self { parallelism, logger }
    }

    /// Creates an environment which logs nothing.
    pub fn new_silent(parallelism: Parallelism) -> Self {
        Self::new(parallelism, Arc::new(|_: &str| {}))
    }

}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Parallelism::default(), Arc::new(|msg: &str| println!("{msg}")))
    }
}

/// Returns amount of CPUs.
pub fn get_cpus() -> usize {
    num_cpus::get()
}
