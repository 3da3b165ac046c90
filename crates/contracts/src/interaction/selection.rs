/// The entry currently inspected in an overlay (lightbox, detail dialog).
///
/// Last write wins; no check is made that the entry belongs to the view
/// it was clicked in.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<T> {
    current: Option<T>,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<T> Selection<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, entry: T) {
        self.current = Some(entry);
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }
}

impl<T: Clone> Selection<T> {
    pub fn cloned(&self) -> Option<T> {
        self.current.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let sel: Selection<u32> = Selection::new();
        assert!(!sel.is_open());
        assert_eq!(sel.current(), None);
    }

    #[test]
    fn test_select_then_dismiss() {
        for entry in ["a", "b", "c"] {
            let mut sel = Selection::new();
            sel.select(entry);
            assert_eq!(sel.current(), Some(&entry));
            sel.dismiss();
            assert!(!sel.is_open());
        }
    }

    #[test]
    fn test_last_select_wins() {
        let mut sel = Selection::new();
        sel.select("A".to_string());
        sel.select("B".to_string());
        assert_eq!(sel.cloned(), Some("B".to_string()));
    }

    #[test]
    fn test_dismiss_when_empty_is_noop() {
        let mut sel: Selection<u8> = Selection::new();
        sel.dismiss();
        sel.dismiss();
        assert!(!sel.is_open());
    }
}
