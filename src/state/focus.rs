/// Which input of the current step has focus. Moves wrap around.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FocusState {
    len: usize,
    index: Option<usize>,
}

impl FocusState {
    pub fn with_len(len: usize) -> Self {
        Self {
            len,
            index: (len > 0).then_some(0),
        }
    }

    pub fn current(&self) -> Option<usize> {
        self.index
    }

    pub fn is_last(&self) -> bool {
        self.index.is_some_and(|i| i + 1 == self.len)
    }

    pub fn set(&mut self, index: usize) {
        if index < self.len {
            self.index = Some(index);
        }
    }

    pub fn next(&mut self) {
        if let Some(current) = self.index {
            self.index = Some((current + 1) % self.len);
        }
    }

    pub fn prev(&mut self) {
        if let Some(current) = self.index {
            self.index = Some((current + self.len - 1) % self.len);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FocusState;

    #[test]
    fn next_and_prev_wrap() {
        let mut focus = FocusState::with_len(3);
        focus.prev();
        assert_eq!(focus.current(), Some(2));
        assert!(focus.is_last());
        focus.next();
        assert_eq!(focus.current(), Some(0));
    }

    #[test]
    fn empty_focus_stays_empty() {
        let mut focus = FocusState::with_len(0);
        focus.next();
        focus.set(0);
        assert_eq!(focus.current(), None);
    }
}
