//! FAQ accordion state

/// At most one answer is open at a time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FaqState {
    open: Option<usize>,
}

impl FaqState {
    /// Open `index`, or close it if it is already the open one
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_open_entry() {
        let mut faq = FaqState::default();
        assert_eq!(faq.open_index(), None);

        faq.toggle(1);
        assert!(faq.is_open(1));

        faq.toggle(3);
        assert!(faq.is_open(3));
        assert!(!faq.is_open(1));
    }

    #[test]
    fn test_clicking_open_entry_closes_it() {
        let mut faq = FaqState::default();
        faq.toggle(0);
        faq.toggle(0);
        assert_eq!(faq.open_index(), None);
    }
}
