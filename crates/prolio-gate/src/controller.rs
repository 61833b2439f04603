//! Step bookkeeping for one review.
//!
//! At most one step is expanded at a time. A step can only be marked verified
//! while it is the expanded one, and verifying collapses it. The completed set
//! only grows until the controller is reset for a new entity.

use std::collections::BTreeSet;

use prolio_core::checklist::ChecklistStep;

use crate::error::GateError;

#[derive(Debug, Clone, Default)]
pub struct GateController {
    steps: Vec<ChecklistStep>,
    open: Option<usize>,
    completed: BTreeSet<usize>,
}

impl GateController {
    #[must_use]
    pub const fn new(steps: Vec<ChecklistStep>) -> Self {
        Self {
            steps,
            open: None,
            completed: BTreeSet::new(),
        }
    }

    /// Replace the checklist and clear all progress.
    pub fn reset(&mut self, steps: Vec<ChecklistStep>) {
        self.steps = steps;
        self.open = None;
        self.completed.clear();
    }

    #[must_use]
    pub fn steps(&self) -> &[ChecklistStep] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Index of the expanded step, if any.
    #[must_use]
    pub const fn open_index(&self) -> Option<usize> {
        self.open
    }

    #[must_use]
    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.contains(&index)
    }

    #[must_use]
    pub const fn completed(&self) -> &BTreeSet<usize> {
        &self.completed
    }

    /// True once every step has been verified.
    #[must_use]
    pub fn is_approvable(&self) -> bool {
        self.completed.len() == self.steps.len()
    }

    fn check_index(&self, index: usize) -> Result<(), GateError> {
        if index < self.steps.len() {
            Ok(())
        } else {
            Err(GateError::StepOutOfRange {
                index,
                len: self.steps.len(),
            })
        }
    }

    /// Expand `index`, or collapse it if it is already expanded.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::StepOutOfRange`] for an index past the checklist.
    pub fn open_step(&mut self, index: usize) -> Result<(), GateError> {
        self.check_index(index)?;
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        Ok(())
    }

    pub const fn collapse(&mut self) {
        self.open = None;
    }

    /// Mark the expanded step verified and collapse it.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::StepOutOfRange`] for an index past the checklist and
    /// [`GateError::StepNotOpen`] when `index` is not the expanded step.
    pub fn mark_verified(&mut self, index: usize) -> Result<(), GateError> {
        self.check_index(index)?;
        if self.open != Some(index) {
            return Err(GateError::StepNotOpen { index });
        }
        self.completed.insert(index);
        self.open = None;
        Ok(())
    }

    /// Handle to the expanded step; the only way to reach "verify and continue".
    pub fn open_step_handle(&mut self) -> Option<OpenStep<'_>> {
        let index = self.open?;
        Some(OpenStep {
            controller: self,
            index,
        })
    }
}

/// The currently expanded step.
#[derive(Debug)]
pub struct OpenStep<'a> {
    controller: &'a mut GateController,
    index: usize,
}

impl OpenStep<'_> {
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn step(&self) -> &ChecklistStep {
        &self.controller.steps[self.index]
    }

    /// Mark this step verified and collapse it. Returns the verified index.
    pub fn verify_and_continue(self) -> usize {
        self.controller.completed.insert(self.index);
        self.controller.open = None;
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use prolio_core::checklist::StepContent;
    use rstest::rstest;

    fn steps(n: usize) -> Vec<ChecklistStep> {
        (0..n)
            .map(|i| ChecklistStep {
                title: format!("Step {i}"),
                content: StepContent::Fields(Vec::new()),
            })
            .collect()
    }

    #[test]
    fn open_step_toggles() {
        let mut gate = GateController::new(steps(3));
        gate.open_step(1).unwrap();
        assert_eq!(gate.open_index(), Some(1));
        gate.open_step(1).unwrap();
        assert_eq!(gate.open_index(), None);
    }

    #[test]
    fn opening_another_step_collapses_the_first() {
        let mut gate = GateController::new(steps(3));
        gate.open_step(0).unwrap();
        gate.open_step(2).unwrap();
        assert_eq!(gate.open_index(), Some(2));
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    fn verifying_closes_the_step(#[case] index: usize) {
        let mut gate = GateController::new(steps(3));
        gate.open_step(index).unwrap();
        gate.mark_verified(index).unwrap();
        assert_eq!(gate.open_index(), None);
        assert!(gate.is_completed(index));
    }

    #[test]
    fn verify_requires_open_step() {
        let mut gate = GateController::new(steps(2));
        let err = gate.mark_verified(0).unwrap_err();
        assert!(matches!(err, GateError::StepNotOpen { index: 0 }));

        gate.open_step(1).unwrap();
        let err = gate.mark_verified(0).unwrap_err();
        assert!(matches!(err, GateError::StepNotOpen { index: 0 }));
        assert_eq!(gate.open_index(), Some(1));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut gate = GateController::new(steps(2));
        let err = gate.open_step(2).unwrap_err();
        assert!(matches!(err, GateError::StepOutOfRange { index: 2, len: 2 }));
        assert!(gate.mark_verified(5).is_err());
    }

    #[test]
    fn handle_exists_only_while_a_step_is_open() {
        let mut gate = GateController::new(steps(2));
        assert!(gate.open_step_handle().is_none());

        gate.open_step(1).unwrap();
        let handle = gate.open_step_handle().unwrap();
        assert_eq!(handle.step().title, "Step 1");
        assert_eq!(handle.verify_and_continue(), 1);
        assert!(gate.is_completed(1));
        assert!(gate.open_step_handle().is_none());
    }

    #[test]
    fn reverifying_does_not_double_count() {
        let mut gate = GateController::new(steps(2));
        gate.open_step(0).unwrap();
        gate.mark_verified(0).unwrap();
        gate.open_step(0).unwrap();
        gate.mark_verified(0).unwrap();
        assert_eq!(gate.completed().len(), 1);
        assert!(!gate.is_approvable());
    }

    #[test]
    fn reset_clears_progress() {
        let mut gate = GateController::new(steps(1));
        gate.open_step(0).unwrap();
        gate.mark_verified(0).unwrap();
        assert!(gate.is_approvable());

        gate.reset(steps(2));
        assert!(gate.completed().is_empty());
        assert!(!gate.is_approvable());
    }
}
