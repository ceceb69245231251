//! Begin/complete logging around a unit of work

use std::cell::Cell;
use std::time::Instant;

use super::logger::Logger;

/// Logs `{name}_BEGIN` on creation and `{name}_COMPLETE` (with
/// `elapsed_us`) on [`ObservationScope::complete`]. Dropping an unfinished
/// scope logs `{name}_INCOMPLETE` at WARN.
pub struct ObservationScope<'a> {
    name: &'a str,
    started: Instant,
    completed: Cell<bool>,
    fields: Vec<(&'a str, String)>,
}

impl<'a> ObservationScope<'a> {
    pub fn new(name: &'a str) -> Self {
        Self::with_fields(name, &[])
    }

    /// Begin fields are repeated on the COMPLETE line
    pub fn with_fields(name: &'a str, fields: &[(&'a str, &str)]) -> Self {
        Logger::info(&format!("{}_BEGIN", name), fields);

        Self {
            name,
            started: Instant::now(),
            completed: Cell::new(false),
            fields: fields.iter().map(|(k, v)| (*k, v.to_string())).collect(),
        }
    }

    pub fn complete(self) {
        self.complete_with_fields(&[]);
    }

    pub fn complete_with_fields(self, extra: &[(&str, &str)]) {
        self.completed.set(true);
        let elapsed = self.started.elapsed().as_micros().to_string();

        let mut fields: Vec<(&str, &str)> = self
            .fields
            .iter()
            .map(|(k, v)| (*k, v.as_str()))
            .collect();
        fields.extend(extra.iter().copied());
        fields.push(("elapsed_us", elapsed.as_str()));

        Logger::info(&format!("{}_COMPLETE", self.name), &fields);
    }

    pub fn is_completed(&self) -> bool {
        self.completed.get()
    }
}

impl Drop for ObservationScope<'_> {
    fn drop(&mut self) {
        if !self.completed.get() {
            Logger::warn(
                &format!("{}_INCOMPLETE", self.name),
                &[("reason", "scope dropped without completion")],
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_complete() {
        let scope = ObservationScope::new("TEST");
        assert!(!scope.is_completed());
        scope.complete();
    }

    #[test]
    fn test_scope_with_fields() {
        let scope = ObservationScope::with_fields("TEST", &[("rules", "2")]);
        scope.complete_with_fields(&[("inferences", "1")]);
    }

    #[test]
    fn test_scope_drop_without_complete() {
        // logs a warning, must not panic
        let _scope = ObservationScope::new("DROPPED");
    }
}
