//! Process shutdown signals.
//!
//! Handlers are registered in [`ShutdownSignal::install`], before the first
//! traversal starts, so a Ctrl+C during a traversal is queued instead of
//! killing the process. The scheduler picks it up at its next select point.

use nudge_common::error::NudgeResult;

/// Which request ended the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// SIGINT / Ctrl+C.
    Interrupt,
    /// SIGTERM.
    Terminate,
}

impl std::fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShutdownReason::Interrupt => f.write_str("interrupt"),
            ShutdownReason::Terminate => f.write_str("terminated"),
        }
    }
}

/// Registered interrupt and termination handlers.
#[cfg(unix)]
pub struct ShutdownSignal {
    interrupt: tokio::signal::unix::Signal,
    terminate: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl ShutdownSignal {
    /// Register the handlers. Must be called inside a tokio runtime.
    pub fn install() -> NudgeResult<Self> {
        use tokio::signal::unix::{signal, SignalKind};

        Ok(Self {
            interrupt: signal(SignalKind::interrupt())?,
            terminate: signal(SignalKind::terminate())?,
        })
    }

    /// Wait for the next shutdown request.
    pub async fn recv(&mut self) -> ShutdownReason {
        tokio::select! {
            _ = self.interrupt.recv() => ShutdownReason::Interrupt,
            _ = self.terminate.recv() => ShutdownReason::Terminate,
        }
    }
}

/// Registered Ctrl+C handler.
#[cfg(windows)]
pub struct ShutdownSignal {
    ctrl_c: tokio::signal::windows::CtrlC,
}

#[cfg(windows)]
impl ShutdownSignal {
    /// Register the handler. Must be called inside a tokio runtime.
    pub fn install() -> NudgeResult<Self> {
        Ok(Self {
            ctrl_c: tokio::signal::windows::ctrl_c()?,
        })
    }

    /// Wait for the next shutdown request.
    pub async fn recv(&mut self) -> ShutdownReason {
        self.ctrl_c.recv().await;
        ShutdownReason::Interrupt
    }
}
