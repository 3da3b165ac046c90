/// Share of an element that must be inside the viewport to reveal it
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Entrance-animation state of a section.
///
/// Goes `Hidden -> Visible` the first time the section intersects the
/// viewport and stays there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

impl RevealState {
    /// Feed one intersection observation. Returns `true` on the single
    /// `Hidden -> Visible` transition.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        match self {
            RevealState::Hidden if intersecting => {
                *self = RevealState::Visible;
                true
            }
            _ => false,
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, RevealState::Visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_once() {
        let mut state = RevealState::default();
        assert!(!state.observe(false));
        assert!(!state.is_visible());
        assert!(state.observe(true));
        assert!(state.is_visible());
        assert!(!state.observe(true));
    }

    #[test]
    fn test_never_hides_again() {
        let mut state = RevealState::Hidden;
        state.observe(true);
        for intersecting in [false, true, false] {
            state.observe(intersecting);
            assert_eq!(state, RevealState::Visible);
        }
    }
}
