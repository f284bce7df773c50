use crate::state::step::StepDescriptor;

/// Position within a fixed, non-empty list of steps. Moves by one, never wraps.
#[derive(Debug, Clone)]
pub struct Flow {
    steps: &'static [StepDescriptor],
    current: usize,
}

impl Flow {
    pub fn new(steps: &'static [StepDescriptor]) -> Self {
        assert!(!steps.is_empty(), "a flow needs at least one step");
        Self { steps, current: 0 }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn steps(&self) -> &'static [StepDescriptor] {
        self.steps
    }

    pub fn current_step(&self) -> &'static StepDescriptor {
        &self.steps[self.current]
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.steps.len()
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.steps.len()
    }

    pub fn advance(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current += 1;
        true
    }

    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current -= 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::Flow;
    use crate::state::step::STEPS;

    #[test]
    fn advance_stops_at_last_step() {
        let mut flow = Flow::new(STEPS);
        for _ in 0..10 {
            flow.advance();
        }
        assert_eq!(flow.current_index(), STEPS.len() - 1);
        assert!(flow.is_last());
    }

    #[test]
    fn retreat_never_goes_below_zero() {
        let mut flow = Flow::new(STEPS);
        assert!(!flow.retreat());
        flow.advance();
        assert!(flow.retreat());
        for _ in 0..5 {
            assert!(!flow.retreat());
        }
        assert_eq!(flow.current_index(), 0);
    }
}
