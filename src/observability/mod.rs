//! Observability: log subscriber setup, crash reports and the per-thread
//! operation context they draw on.
//!
//! Install the panic hook and the subscriber at startup:
//!
//! ```ignore
//! use potability::observability::{init_tracing, install_panic_hook};
//!
//! fn main() {
//!     install_panic_hook();
//!     init_tracing(0);
//! }
//! ```

pub mod context;
pub mod panic_hook;
pub mod tracing;

pub use context::{
    classification_counts, get_current_context, record_classification, set_detail, set_phase,
    ClassificationPhase, ContextGuard, OperationContext,
};
pub use panic_hook::install_panic_hook;
pub use self::tracing::{init_tracing, LOG_ENV_VAR};
