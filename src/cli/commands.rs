//! CLI command implementations
//!
//! Each command builds a fresh store from the config, loads the knowledge
//! base into it and writes exactly one JSON response.

use std::path::Path;

use serde_json::{json, Value};

use crate::atomspace::{AtomId, AtomShape, AtomSpace, AtomType};
use crate::observability::{Logger, Severity};
use crate::query::{query as match_pattern, Pattern};

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::write_response;
use super::knowledge::KnowledgeBase;

/// Main CLI entry point
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    if cli.verbose {
        Logger::set_min_severity(Severity::Trace);
    }
    run_command(cli.command)
}

pub fn run_command(cmd: Command) -> CliResult<()> {
    let data = match cmd {
        Command::Init { config } => init(&config)?,
        Command::Infer {
            config,
            kb,
            target,
            atom_type,
        } => infer(&config, &kb, target.as_deref(), atom_type)?,
        Command::Query {
            config,
            kb,
            atom_type,
        } => query(&config, &kb, atom_type)?,
    };
    write_response(data)
}

/// Write a default config to `config_path`. Refuses to overwrite.
pub fn init(config_path: &Path) -> CliResult<Value> {
    if config_path.exists() {
        return Err(CliError::already_initialized(config_path.display()));
    }

    let config = Config::default();
    config.save(config_path)?;

    Ok(json!({
        "initialized": true,
        "config": config,
    }))
}

/// Load, chain, and report.
///
/// With a target the run stops once that atom is derived. `atom_type`
/// restricts the reported atoms through the query matcher; without it
/// every atom is listed.
pub fn infer(
    config_path: &Path,
    kb_path: &Path,
    target: Option<&str>,
    atom_type: Option<AtomType>,
) -> CliResult<Value> {
    let config = Config::load(config_path)?;
    let kb = KnowledgeBase::load(kb_path)?;

    let mut space = config.build_space();
    let engine = config.build_engine()?;
    let declared = kb.load_into(&mut space)?.len();

    let report = match target {
        Some(reference) => {
            let target = resolve_target(&space, reference)?;
            engine.backward_chain_report(&mut space, target)
        }
        None => engine.forward_chain_report(&mut space, None),
    };

    let results: Vec<AtomId> = match atom_type {
        Some(atom_type) => match_pattern(&space, &Pattern::of_type(atom_type)),
        None => space.iter().map(|(id, _)| id).collect(),
    };

    Ok(json!({
        "report": report,
        "declared": declared,
        "atoms": space.len(),
        "capacity": space.capacity(),
        "rules": engine.rule_names(),
        "metrics": engine.metrics(),
        "results": atoms_json(&space, &results),
    }))
}

/// Load and query by type without chaining
pub fn query(config_path: &Path, kb_path: &Path, atom_type: AtomType) -> CliResult<Value> {
    let config = Config::load(config_path)?;
    let kb = KnowledgeBase::load(kb_path)?;

    let mut space = config.build_space();
    kb.load_into(&mut space)?;

    let matches = match_pattern(&space, &Pattern::of_type(atom_type));

    Ok(json!({
        "type": atom_type,
        "count": matches.len(),
        "results": atoms_json(&space, &matches),
    }))
}

/// JSON view of one atom, `null` for an unknown id
pub fn atom_json(space: &AtomSpace, id: AtomId) -> Value {
    let Some(atom) = space.get(id) else {
        return Value::Null;
    };

    let mut value = json!({
        "id": id,
        "type": atom.atom_type(),
        "tv": atom.tv(),
        "probability": atom.tv().to_probability(),
    });

    match atom.shape() {
        AtomShape::Node { name } => value["name"] = json!(name),
        AtomShape::Link { outgoing } => value["outgoing"] = json!(outgoing),
    }
    if let Some(payload) = atom.payload() {
        value["payload"] = payload.clone();
    }

    value
}

fn atoms_json(space: &AtomSpace, ids: &[AtomId]) -> Vec<Value> {
    ids.iter().map(|&id| atom_json(space, id)).collect()
}

/// A slot index or a node name
fn resolve_target(space: &AtomSpace, reference: &str) -> CliResult<AtomId> {
    if let Ok(slot) = reference.parse::<usize>() {
        let id = AtomId::new(slot);
        if space.contains(id) {
            return Ok(id);
        }
    }
    space.lookup(reference).ok_or_else(|| {
        CliError::knowledge_base_error(format!("Unknown target atom '{}'", reference))
    })
}
