//! Forward and backward chaining

use std::fmt;

use serde::Serialize;

use crate::atomspace::{AtomId, AtomSpace};
use crate::observability::{
    log_event, log_event_with_fields, Event, MetricsRegistry, MetricsSnapshot, ObservationScope,
};
use crate::rules::InferenceRule;

use super::config::UreConfig;
use super::errors::UreResult;

/// Why a chaining run stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// An accepted conclusion was the target atom
    TargetReached,
    /// A full pass accepted no conclusion
    Fixpoint,
    /// `max_iterations` passes ran
    IterationLimit,
}

impl Termination {
    pub fn as_str(self) -> &'static str {
        match self {
            Termination::TargetReached => "target_reached",
            Termination::Fixpoint => "fixpoint",
            Termination::IterationLimit => "iteration_limit",
        }
    }

    fn event(self) -> Event {
        match self {
            Termination::TargetReached => Event::ChainTargetReached,
            Termination::Fixpoint => Event::ChainFixpoint,
            Termination::IterationLimit => Event::ChainIterationLimit,
        }
    }
}

impl fmt::Display for Termination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one chaining run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChainReport {
    /// Accepted inferences
    pub inferences: usize,
    /// Passes started, including the one that hit the target
    pub passes: usize,
    pub termination: Termination,
}

/// Rule engine for one reasoning session
pub struct UnifiedRuleEngine {
    config: UreConfig,
    rules: Vec<Box<dyn InferenceRule>>,
    metrics: MetricsRegistry,
}

impl UnifiedRuleEngine {
    /// Create an engine with no rules. Fails if `config` does not validate.
    pub fn new(config: UreConfig) -> UreResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            rules: Vec::new(),
            metrics: MetricsRegistry::new(),
        })
    }

    pub fn config(&self) -> &UreConfig {
        &self.config
    }

    pub fn max_iterations(&self) -> usize {
        self.config.max_iterations
    }

    pub fn min_confidence(&self) -> f32 {
        self.config.min_confidence
    }

    /// Append a rule. Rules run in registration order; duplicates are kept.
    pub fn add_rule<R: InferenceRule + 'static>(&mut self, rule: R) {
        log_event_with_fields(
            Event::RuleRegistered,
            &[
                ("rule", rule.name()),
                ("position", self.rules.len().to_string().as_str()),
            ],
        );
        self.rules.push(Box::new(rule));
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    /// Forward chain until the target is derived, a fixpoint, or the
    /// iteration bound. Returns the number of accepted inferences.
    pub fn forward_chain(&self, space: &mut AtomSpace, target: Option<AtomId>) -> usize {
        self.forward_chain_report(space, target).inferences
    }

    /// [`UnifiedRuleEngine::forward_chain`] with pass count and stop reason
    pub fn forward_chain_report(
        &self,
        space: &mut AtomSpace,
        target: Option<AtomId>,
    ) -> ChainReport {
        let owned = self.begin_fields(space, target);
        let begin: Vec<(&str, &str)> = owned.iter().map(|(k, v)| (*k, v.as_str())).collect();
        let scope = ObservationScope::with_fields("FORWARD_CHAIN", &begin);

        self.metrics.increment_chain_runs();
        let report = self.run(space, target);

        match report.termination {
            Termination::TargetReached => self.metrics.increment_targets_reached(),
            Termination::Fixpoint => self.metrics.increment_fixpoints(),
            Termination::IterationLimit => {}
        }
        log_event(report.termination.event());

        scope.complete_with_fields(&[
            ("inferences", report.inferences.to_string().as_str()),
            ("passes", report.passes.to_string().as_str()),
            ("termination", report.termination.as_str()),
            ("atoms_after", space.len().to_string().as_str()),
        ]);

        report
    }

    /// Backward chaining toward `query`.
    ///
    /// Runs forward chaining with `query` as the target; there is no
    /// goal-directed subgoal search.
    pub fn backward_chain(&self, space: &mut AtomSpace, query: AtomId) -> usize {
        self.backward_chain_report(space, query).inferences
    }

    pub fn backward_chain_report(&self, space: &mut AtomSpace, query: AtomId) -> ChainReport {
        log_event_with_fields(Event::BackwardChainBegin, &[("query", query.to_string().as_str())]);
        self.forward_chain_report(space, Some(query))
    }

    /// Forward chain with no target
    pub fn inference_step(&self, space: &mut AtomSpace) -> usize {
        self.forward_chain(space, None)
    }

    fn run(&self, space: &mut AtomSpace, target: Option<AtomId>) -> ChainReport {
        let mut inferences = 0;

        for pass in 0..self.config.max_iterations {
            let accepted_before = inferences;

            for rule in &self.rules {
                // bounds are re-read every step: atoms created mid-pass
                // participate in later pairs of the same pass
                let mut i = 0;
                while i < space.len() {
                    let mut j = i + 1;
                    while j < space.len() {
                        let premises = [AtomId::new(i), AtomId::new(j)];
                        j += 1;

                        if !rule.precondition(space, &premises) {
                            continue;
                        }
                        let Some(conclusion) = rule.conclusion(space, &premises) else {
                            continue;
                        };
                        let Some(tv) = space.truth_value(conclusion) else {
                            continue;
                        };
                        if tv.confidence() < self.config.min_confidence {
                            self.metrics.increment_below_floor();
                            continue;
                        }

                        inferences += 1;
                        self.metrics.increment_inferences();

                        if Some(conclusion) == target {
                            self.metrics.increment_passes();
                            return ChainReport {
                                inferences,
                                passes: pass + 1,
                                termination: Termination::TargetReached,
                            };
                        }
                    }
                    i += 1;
                }
            }

            self.metrics.increment_passes();
            log_event_with_fields(
                Event::ChainPass,
                &[
                    ("pass", (pass + 1).to_string().as_str()),
                    ("accepted", (inferences - accepted_before).to_string().as_str()),
                    ("atoms", space.len().to_string().as_str()),
                ],
            );

            if inferences == accepted_before {
                return ChainReport {
                    inferences,
                    passes: pass + 1,
                    termination: Termination::Fixpoint,
                };
            }
        }

        ChainReport {
            inferences,
            passes: self.config.max_iterations,
            termination: Termination::IterationLimit,
        }
    }

    /// FORWARD_CHAIN_BEGIN fields; `target` only when one is set
    fn begin_fields(
        &self,
        space: &AtomSpace,
        target: Option<AtomId>,
    ) -> Vec<(&'static str, String)> {
        let mut fields = vec![
            ("rules", self.rules.len().to_string()),
            ("atoms", space.len().to_string()),
        ];
        if let Some(target) = target {
            fields.push(("target", target.to_string()));
        }
        fields
    }
}

impl fmt::Debug for UnifiedRuleEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnifiedRuleEngine")
            .field("config", &self.config)
            .field("rules", &self.rule_names())
            .finish()
    }
}
