//! CLI argument definitions using clap
//!
//! Commands:
//! - atomspace init --config <path>
//! - atomspace infer --config <path> --kb <path> [--target <name>] [--type <AtomType>]
//! - atomspace query --config <path> --kb <path> --type <AtomType>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::atomspace::AtomType;

/// Probabilistic-logic knowledge store
#[derive(Parser, Debug)]
#[command(name = "atomspace")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Also log per-pass TRACE events
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./atomspace.json")]
        config: PathBuf,
    },

    /// Load a knowledge base and run the rule engine over it
    Infer {
        /// Path to configuration file
        #[arg(long, default_value = "./atomspace.json")]
        config: PathBuf,

        /// Knowledge-base JSON file
        #[arg(long)]
        kb: PathBuf,

        /// Stop as soon as this atom (name or slot index) is derived
        #[arg(long)]
        target: Option<String>,

        /// Only report atoms of this type (default: every atom)
        #[arg(long = "type")]
        atom_type: Option<AtomType>,
    },

    /// Load a knowledge base and query it without chaining
    Query {
        /// Path to configuration file
        #[arg(long, default_value = "./atomspace.json")]
        config: PathBuf,

        /// Knowledge-base JSON file
        #[arg(long)]
        kb: PathBuf,

        /// Atom type to match
        #[arg(long = "type")]
        atom_type: AtomType,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_infer() {
        let cli = Cli::try_parse_from([
            "atomspace",
            "infer",
            "--kb",
            "kb.json",
            "--target",
            "Animal",
            "--type",
            "InheritanceLink",
        ])
        .unwrap();

        match cli.command {
            Command::Infer { config, kb, target, atom_type } => {
                assert_eq!(config, PathBuf::from("./atomspace.json"));
                assert_eq!(kb, PathBuf::from("kb.json"));
                assert_eq!(target.as_deref(), Some("Animal"));
                assert_eq!(atom_type, Some(AtomType::InheritanceLink));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_query_requires_type() {
        assert!(Cli::try_parse_from(["atomspace", "query", "--kb", "kb.json"]).is_err());
    }

    #[test]
    fn test_rejects_unknown_type() {
        let parsed = Cli::try_parse_from(["atomspace", "query", "--kb", "k", "--type", "Thing"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["atomspace", "init", "--verbose"]).unwrap();
        assert!(cli.verbose);
    }
}
