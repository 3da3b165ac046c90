/// Vertical offset (px) past which the navbar switches to its solid style
pub const SCROLL_THRESHOLD: f64 = 50.0;

/// "Has the page been scrolled" flag for the navbar.
///
/// Recomputed on every scroll event; the flag is set strictly above the
/// threshold, so an offset equal to it still counts as not scrolled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollFlag {
    threshold: f64,
    scrolled: bool,
}

impl Default for ScrollFlag {
    fn default() -> Self {
        Self::new(SCROLL_THRESHOLD)
    }
}

impl ScrollFlag {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            scrolled: false,
        }
    }

    /// Feed a new offset. Returns `true` when the flag changed.
    pub fn update(&mut self, offset: f64) -> bool {
        let scrolled = offset > self.threshold;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_down_and_back_up() {
        let mut flag = ScrollFlag::default();
        let mut seen = vec![];
        for offset in [0.0, 80.0, 20.0] {
            flag.update(offset);
            seen.push(flag.is_scrolled());
        }
        assert_eq!(seen, vec![false, true, false]);
    }

    #[test]
    fn test_boundary() {
        let mut flag = ScrollFlag::default();
        assert!(!flag.update(50.0));
        assert!(!flag.is_scrolled());
        assert!(flag.update(50.5));
        assert!(flag.is_scrolled());
        assert!(flag.update(50.0));
        assert!(!flag.is_scrolled());
    }

    #[test]
    fn test_update_reports_changes_only() {
        let mut flag = ScrollFlag::new(10.0);
        assert!(flag.update(11.0));
        assert!(!flag.update(300.0));
        assert!(!flag.update(12.0));
        assert!(flag.update(0.0));
    }
}
