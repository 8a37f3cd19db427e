//! Worker error types

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WorkerError {
    #[error("Worker has shut down; the task was not accepted")]
    ShutDown,

    #[error("The task's result channel closed before a result arrived")]
    ResultLost,
}

pub type WorkerResult<T> = Result<T, WorkerError>;
