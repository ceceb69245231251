//! Command-line runner
//!
//! - init: write a default config file
//! - infer: load a knowledge base, chain, print the report and results
//! - query: load a knowledge base and query it without chaining
//!
//! Output is one JSON object on stdout; logs go to stderr.

mod args;
mod commands;
mod config;
mod errors;
mod io;
mod knowledge;

pub use args::{Cli, Command};
pub use commands::{atom_json, infer, init, query, run, run_command};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_response};
pub use knowledge::{AtomDecl, AtomRef, KnowledgeBase, LinkDecl, NodeDecl};
