use crate::core::data::screen::{ScreenPoint, ScreenRect};

/// Tracks a pointer-drag gesture. The two states make illegal reads
/// unrepresentable: there is no "current position" to ask for unless a drag
/// is actually in progress.
#[derive(Debug, Clone, PartialEq)]
pub enum RegionSelector {
    Idle,
    Dragging {
        start: ScreenPoint,
        current: ScreenPoint,
    },
}

impl RegionSelector {
    #[must_use]
    pub fn new() -> Self {
        Self::Idle
    }

    /// Drag-begin: anchors a new gesture at `position`. Restarting while a
    /// drag is active re-anchors the gesture.
    pub fn begin(&mut self, position: ScreenPoint) {
        *self = Self::Dragging {
            start: position,
            current: position,
        };
    }

    /// Drag-move: updates the moving corner. Ignored while idle, since
    /// pointer motion without a held button is not part of a gesture.
    pub fn update(&mut self, position: ScreenPoint) {
        if let Self::Dragging { current, .. } = self {
            *current = position;
        }
    }

    /// Drag-end: returns to idle and yields the normalized rectangle the
    /// gesture spanned, or `None` if no drag was active. The caller decides
    /// what to do with a zero-area result.
    pub fn finish(&mut self) -> Option<ScreenRect> {
        match std::mem::replace(self, Self::Idle) {
            Self::Idle => None,
            Self::Dragging { start, current } => Some(ScreenRect::from_corners(start, current)),
        }
    }

    /// The in-progress rectangle, for drawing the selection overlay.
    #[must_use]
    pub fn active_rect(&self) -> Option<ScreenRect> {
        match self {
            Self::Idle => None,
            Self::Dragging { start, current } => Some(ScreenRect::from_corners(*start, *current)),
        }
    }
}

impl Default for RegionSelector {
    fn default() -> Self {
        Self::new()
    }
}
