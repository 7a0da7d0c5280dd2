//! pdfcombine - Collect, reorder and combine PDF files from the terminal.
//!
//! Paste or drop document paths into the running interface to build an
//! ordered list, rearrange it, save it for later and merge every page of
//! every listed document into a new `combined-<timestamp>.pdf`.
//!
//! The library side is usable without a terminal:
//!
//! ```no_run
//! use pdfcombine::config::Config;
//! use pdfcombine::session::Session;
//! use pdfcombine::workdir::WorkingDirectory;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let workdir = WorkingDirectory::from_current_dir()?;
//! let mut session = Session::new(Config::default(), workdir, tokio::runtime::Handle::current());
//!
//! session.ingest(r#"intro.pdf "chapter one.pdf" appendix.pdf"#);
//! session.move_down();
//! session.merge();
//! session.wait_merge().await;
//! println!("{}", session.status().unwrap_or_default());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod collection;
pub mod config;
pub mod error;
pub mod io;
pub mod merge;
pub mod persist;
pub mod session;
pub mod tokenizer;
pub mod tui;
pub mod utils;
pub mod workdir;

// Re-export commonly used types
pub use collection::Collection;
pub use config::Config;
pub use error::{CombineError, Result};
pub use session::{Session, SessionEvent};
pub use workdir::WorkingDirectory;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
