//! # Raising and Recovering
//!
//! Runnable demonstrations of the three ways a failure can be treated:
//!
//! 1. **Propagate** - [`divide::divide_checked`] returns an error and the
//!    caller passes it up with `?` until `main` exits non-zero
//! 2. **Recover with a fallback** - [`divide::divide_or_fallback`] catches
//!    division by zero and substitutes a fixed string
//! 3. **Catch, log, continue** - the blocks in [`demos`] print a message
//!    and carry on
//!
//! [`catalogue`] lists the standard error categories and how they nest.
//!
//! ## Running
//!
//! ```bash
//! cargo run                      # whole script, ends with the unhandled raise
//! cargo run -- recover
//! cargo run -- inline
//! cargo run -- catalogue
//! cargo run -- raise             # exits non-zero
//! cargo run -- --config demo.toml inline
//! ```
//!
//! ## Key Dependencies
//!
//! - `thiserror` - Derive macro for the error types
//! - `anyhow` - Error reporting in the binary
//! - `tracing` - Logging recoveries and the unhandled failure
//! - `toml` / `serde` - Operand overrides

pub mod catalogue;
pub mod config;
pub mod demos;
pub mod divide;
pub mod logging;
pub mod script;

pub use catalogue::{Categorized, ErrorCategory};
pub use config::{ConfigError, DemoConfig};
pub use divide::{divide_checked, divide_or_fallback, DivideError, Quotient};
pub use script::{Runner, ScriptError, Step, SCRIPT};
