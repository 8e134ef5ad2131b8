//! Thread-local context tracking for crash reports.
//!
//! Records which step of a classification the current thread is in, plus
//! global counters of classification outcomes. The panic hook reads both.
//!
//! Guards restore the previous context on drop, so phases nest.

use std::cell::RefCell;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};

static CLASSIFICATIONS_SUCCEEDED: AtomicUsize = AtomicUsize::new(0);
static CLASSIFICATIONS_FAILED: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static CURRENT_CONTEXT: RefCell<OperationContext> = const { RefCell::new(OperationContext::new()) };
}

/// Snapshot of what the current thread was doing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperationContext {
    pub phase: Option<ClassificationPhase>,
    /// Free-form detail, e.g. the input file being read
    pub detail: Option<String>,
}

impl OperationContext {
    pub const fn new() -> Self {
        Self {
            phase: None,
            detail: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassificationPhase {
    /// Reading parameters from flags, files or the session prompt
    InputParsing,
    /// Checking readings against catalog bounds
    Validation,
    /// Waiting on the classifier backend
    Classification,
    /// Writing results
    Rendering,
}

impl fmt::Display for ClassificationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputParsing => write!(f, "input_parsing"),
            Self::Validation => write!(f, "validation"),
            Self::Classification => write!(f, "classification"),
            Self::Rendering => write!(f, "rendering"),
        }
    }
}

/// Restores the previous context when dropped.
pub struct ContextGuard {
    previous: OperationContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

#[must_use]
pub fn set_phase(phase: ClassificationPhase) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        ctx.borrow_mut().phase = Some(phase);
        ContextGuard { previous }
    })
}

#[must_use]
pub fn set_detail(detail: impl Into<String>) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        ctx.borrow_mut().detail = Some(detail.into());
        ContextGuard { previous }
    })
}

#[must_use]
pub fn get_current_context() -> OperationContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}

/// Count a finished classification attempt.
pub fn record_classification(succeeded: bool) {
    let counter = if succeeded {
        &CLASSIFICATIONS_SUCCEEDED
    } else {
        &CLASSIFICATIONS_FAILED
    };
    counter.fetch_add(1, Ordering::Relaxed);
}

/// `(succeeded, failed)` classification counts for this process.
#[must_use]
pub fn classification_counts() -> (usize, usize) {
    (
        CLASSIFICATIONS_SUCCEEDED.load(Ordering::Relaxed),
        CLASSIFICATIONS_FAILED.load(Ordering::Relaxed),
    )
}
