//! Periodic refresh on a background thread.
//!
//! A [`RefreshSchedule`] is an owned handle: whoever starts it decides when it pauses,
//! resumes and stops. Dropping the handle stops the worker.

use std::io;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// How often the dashboard re-evaluates its background.
pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5 * 60);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Pause,
    Resume,
    Stop,
}

/// Handle to a task that runs once at start and then once per interval.
///
/// # Example
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use std::time::Duration;
/// use sky_clock::schedule::RefreshSchedule;
///
/// let runs = Arc::new(AtomicUsize::new(0));
/// let counter = Arc::clone(&runs);
/// let schedule = RefreshSchedule::start(Duration::from_secs(3600), move || {
///     counter.fetch_add(1, Ordering::SeqCst);
/// })
/// .unwrap();
///
/// schedule.stop().unwrap();
/// assert_eq!(runs.load(Ordering::SeqCst), 1);
/// ```
#[derive(Debug)]
pub struct RefreshSchedule {
    interval: Duration,
    commands: Sender<Command>,
    worker: Option<JoinHandle<()>>,
}

impl RefreshSchedule {
    /// Starts the worker thread. `task` runs immediately, then after every `interval`.
    ///
    /// # Errors
    /// Returns the OS error if the worker thread cannot be spawned.
    pub fn start<F>(interval: Duration, task: F) -> io::Result<Self>
    where
        F: FnMut() + Send + 'static,
    {
        let (commands, receiver) = mpsc::channel();
        let worker = thread::Builder::new()
            .name("sky-refresh".into())
            .spawn(move || run(interval, &receiver, task))?;

        log::info!("refresh started, every {}s", interval.as_secs_f64());

        Ok(Self {
            interval,
            commands,
            worker: Some(worker),
        })
    }

    /// Interval between scheduled runs.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Suspends scheduled runs until [`resume`](Self::resume) is called.
    pub fn pause(&self) {
        self.send(Command::Pause);
    }

    /// Runs the task right away if paused, then restarts the interval.
    pub fn resume(&self) {
        self.send(Command::Resume);
    }

    /// Checks if the worker thread is still alive.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.worker
            .as_ref()
            .is_some_and(|worker| !worker.is_finished())
    }

    /// Stops the worker and waits for it to exit.
    ///
    /// A task that is mid-run completes first.
    ///
    /// # Errors
    /// Returns the panic payload if the task panicked.
    pub fn stop(mut self) -> thread::Result<()> {
        self.shutdown()
    }

    fn send(&self, command: Command) {
        // The worker only hangs up after a stop or a panicking task
        if self.commands.send(command).is_err() {
            log::warn!("refresh worker is gone, dropping {command:?}");
        }
    }

    fn shutdown(&mut self) -> thread::Result<()> {
        let Some(worker) = self.worker.take() else {
            return Ok(());
        };
        let _ = self.commands.send(Command::Stop);
        let result = worker.join();
        log::info!("refresh stopped");
        result
    }
}

impl Drop for RefreshSchedule {
    fn drop(&mut self) {
        let _ = self.shutdown();
    }
}

fn run<F: FnMut()>(interval: Duration, commands: &Receiver<Command>, mut task: F) {
    task();

    let mut paused = false;
    let mut next_due = Instant::now() + interval;
    loop {
        let next = if paused {
            commands.recv().map_err(|_| RecvTimeoutError::Disconnected)
        } else {
            // Commands that change nothing must not push the deadline back
            commands.recv_timeout(next_due.saturating_duration_since(Instant::now()))
        };

        match next {
            Err(RecvTimeoutError::Timeout) => {
                task();
                next_due = Instant::now() + interval;
            }
            Ok(Command::Pause) => {
                if !paused {
                    log::debug!("refresh paused");
                    paused = true;
                }
            }
            Ok(Command::Resume) => {
                if paused {
                    log::debug!("refresh resumed");
                    paused = false;
                    task();
                    next_due = Instant::now() + interval;
                }
            }
            Ok(Command::Stop) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }
}
