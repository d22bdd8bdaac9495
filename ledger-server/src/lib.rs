//! Ledger Server - record-keeping backend for a small organization
//!
//! # Architecture overview
//!
//! Three collections (members, expenses, donations) persisted in a document
//! store and exposed nearly verbatim over REST. Members carry the extra
//! invariants: a sequential server-assigned id, trimmed required fields, and
//! an embedded payment history that generic updates never touch.
//!
//! # Module structure
//!
//! ```text
//! ledger-server/src/
//! ├── core/          # configuration, state, HTTP server
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # storage bootstrap, models, repositories
//! └── utils/         # errors, logging, validation, time
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::{AppError, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
    __             __
   / /   ___  ____/ /___ ____  _____
  / /   / _ \/ __  / __ `/ _ \/ ___/
 / /___/  __/ /_/ / /_/ /  __/ /
/_____/\___/\__,_/\__, /\___/_/
                 /____/
    "#
    );
}
