/// Single-open accordion: at most one panel is expanded at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accordion {
    open: Option<usize>,
}

impl Default for Accordion {
    /// First panel starts expanded.
    fn default() -> Self {
        Accordion { open: Some(0) }
    }
}

impl Accordion {
    pub fn collapsed() -> Self {
        Accordion { open: None }
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Clicking the open panel closes it; clicking any other opens it
    /// and closes the rest.
    pub fn toggle(self, index: usize) -> Self {
        if self.is_open(index) {
            Accordion { open: None }
        } else {
            Accordion { open: Some(index) }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn starts_with_first_open() {
        let accordion = Accordion::default();
        assert_eq!(accordion.open_index(), Some(0));
        assert!(accordion.is_open(0));
        assert!(!accordion.is_open(1));
    }

    #[test]
    fn reopening_after_close() {
        let accordion = Accordion::default().toggle(0);
        assert_eq!(accordion.open_index(), None);
        assert_eq!(accordion.toggle(0).open_index(), Some(0));
    }

    #[quickcheck]
    fn toggling_other_opens_exactly_it(start: Option<u8>, index: u8) -> bool {
        let start = Accordion { open: start.map(usize::from) };
        let index = usize::from(index);
        if start.is_open(index) {
            return true;
        }
        let next = start.toggle(index);
        next.open_index() == Some(index)
    }

    #[quickcheck]
    fn toggling_open_closes_all(index: u8) -> bool {
        let index = usize::from(index);
        let open = Accordion::collapsed().toggle(index);
        open.toggle(index).open_index().is_none()
    }

    #[quickcheck]
    fn never_more_than_one_open(clicks: Vec<u8>) -> bool {
        let accordion = clicks
            .iter()
            .fold(Accordion::default(), |acc, &i| acc.toggle(usize::from(i)));
        (0..=usize::from(u8::MAX)).filter(|i| accordion.is_open(*i)).count() <= 1
    }
}
