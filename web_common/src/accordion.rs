/// Which FAQ entry is expanded. At most one is open; the first starts open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccordionState {
    len: usize,
    open: Option<usize>,
}

impl AccordionState {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            open: if len > 0 { Some(0) } else { None },
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Opens `index` and closes the rest, or closes it when already open.
    /// Out-of-range indices are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            return;
        }
        self.open = if self.is_open(index) { None } else { Some(index) };
    }

    /// Chevron icon class for an entry.
    pub fn icon(&self, index: usize) -> &'static str {
        if self.is_open(index) {
            "fa-chevron-up"
        } else {
            "fa-chevron-down"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_item_starts_open() {
        let state = AccordionState::new(3);
        assert_eq!(state.open_index(), Some(0));
        assert_eq!(state.icon(0), "fa-chevron-up");
        assert_eq!(state.icon(1), "fa-chevron-down");
        assert_eq!(AccordionState::new(0).open_index(), None);
    }

    #[test]
    fn test_opening_one_closes_the_others() {
        let mut state = AccordionState::new(3);
        state.toggle(2);
        assert!(state.is_open(2));
        assert!(!state.is_open(0));

        state.toggle(2);
        assert_eq!(state.open_index(), None);

        state.toggle(7);
        assert_eq!(state.open_index(), None);
    }
}
