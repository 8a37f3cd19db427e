//! Single-threaded FIFO task execution
//!
//! All automation operations funnel through one worker thread so keystrokes,
//! clipboard traffic, and focus changes from different requests never
//! interleave. Submission order is execution order.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender};
use tracing::debug;

use crate::{WorkerError, WorkerResult};

type Job = Box<dyn FnOnce() + Send + 'static>;

/// Pending result of a submitted task
pub struct TaskHandle<T> {
    receiver: Receiver<T>,
    cancelled: Arc<AtomicBool>,
}

impl<T> TaskHandle<T> {
    /// Block until the task has run and yielded its value
    pub fn wait(self) -> WorkerResult<T> {
        self.receiver.recv().map_err(|_| WorkerError::ResultLost)
    }

    /// Drop the task if it has not started yet.
    ///
    /// A task already running cannot be interrupted; its bounded timeouts are
    /// the only escape. A cancelled task's `wait` reports
    /// [`WorkerError::ResultLost`].
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }
}

/// The dedicated automation worker thread.
///
/// Dropping the worker closes the queue and joins the thread; queued tasks
/// finish first.
pub struct Worker {
    sender: Option<Sender<Job>>,
    thread: Option<JoinHandle<()>>,
}

impl Worker {
    pub fn spawn() -> Self {
        let (sender, receiver) = crossbeam_channel::unbounded::<Job>();
        let thread = thread::spawn(move || {
            for job in receiver {
                job();
            }
            debug!("worker queue drained, thread exiting");
        });
        Self {
            sender: Some(sender),
            thread: Some(thread),
        }
    }

    /// Queue `task` behind everything already submitted.
    ///
    /// Returns a handle immediately; the caller decides whether to block on
    /// the result.
    pub fn submit<T, F>(&self, task: F) -> WorkerResult<TaskHandle<T>>
    where
        T: Send + 'static,
        F: FnOnce() -> T + Send + 'static,
    {
        let (tx, rx) = crossbeam_channel::bounded(1);
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&cancelled);
        let job: Job = Box::new(move || {
            if flag.load(Ordering::Acquire) {
                debug!("skipping cancelled task");
                return;
            }
            let _ = tx.send(task());
        });

        let Some(sender) = &self.sender else {
            return Err(WorkerError::ShutDown);
        };
        sender.send(job).map_err(|_| WorkerError::ShutDown)?;
        Ok(TaskHandle {
            receiver: rx,
            cancelled,
        })
    }

    /// Close the queue and wait for queued tasks to finish
    pub fn shutdown(mut self) {
        self.close_and_join();
    }

    fn close_and_join(&mut self) {
        self.sender.take();
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for Worker {
    fn drop(&mut self) {
        self.close_and_join();
    }
}
