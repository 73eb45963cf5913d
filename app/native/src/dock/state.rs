//! Dock state register.

use std::fmt;

use super::edge::Edge;

/// Where the attached window currently is in its auto-hide cycle.
///
/// For every edge the cycle is `Free → Preview(e) → Hidden(e) → Preview(e) → … → Free`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DockState {
    /// Fully visible and not forced topmost.
    #[default]
    Free,
    /// Docked against the edge, fully visible, forced topmost, waiting for
    /// the pointer to leave before hiding.
    Preview(Edge),
    /// Slid off-screen past the edge, waiting for the pointer to come back.
    Hidden(Edge),
}

impl DockState {
    /// Any state other than [`Self::Free`].
    #[must_use]
    pub const fn is_docked(self) -> bool { !matches!(self, Self::Free) }

    /// The nine-way state name (`None`, `PreviewTopHidden`, `TopHidden`, ...).
    #[must_use]
    pub fn name(self) -> String {
        match self {
            Self::Free => "None".to_string(),
            Self::Preview(edge) => format!("Preview{}Hidden", edge.title()),
            Self::Hidden(edge) => format!("{}Hidden", edge.title()),
        }
    }
}

impl fmt::Display for DockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.name()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_free() {
        assert_eq!(DockState::default(), DockState::Free);
        assert!(!DockState::Free.is_docked());
    }

    #[test]
    fn test_nine_state_names() {
        let mut names = vec![DockState::Free.name()];
        for edge in Edge::PRIORITY {
            names.push(DockState::Preview(edge).name());
            names.push(DockState::Hidden(edge).name());
        }
        assert_eq!(names, vec![
            "None",
            "PreviewTopHidden",
            "TopHidden",
            "PreviewRightHidden",
            "RightHidden",
            "PreviewBottomHidden",
            "BottomHidden",
            "PreviewLeftHidden",
            "LeftHidden",
        ]);
    }

    #[test]
    fn test_preview_and_hidden_are_docked() {
        assert!(DockState::Preview(Edge::Left).is_docked());
        assert!(DockState::Hidden(Edge::Left).is_docked());
    }
}
