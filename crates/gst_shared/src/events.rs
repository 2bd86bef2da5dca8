//! Pointer events delivered by the host surface.
//!
//! The host translates its native input (DOM events, terminal mouse reports,
//! recorded streams) into these events. The cursor follower only ever sees
//! this vocabulary.

use serde::{Deserialize, Serialize};

use crate::math::Point;

/// Listener discriminator, one per event variant.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerEventKind {
    /// Pointer moved
    Move = 0,
    /// Pointer entered the surface
    Enter = 1,
    /// Pointer left the surface
    Leave = 2,
    /// Pointer moved onto an element
    Over = 3,
    /// Pointer moved off an element
    Out = 4,
}

impl PointerEventKind {
    /// Every kind, in registration order.
    pub const ALL: [Self; 5] = [Self::Move, Self::Enter, Self::Leave, Self::Over, Self::Out];
}

/// Element category as far as hover styling is concerned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    /// Hyperlink
    Anchor,
    /// Push button
    Button,
    /// Anything else
    #[default]
    Other,
}

/// What the pointer is over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementInfo {
    /// Element category
    pub kind: ElementKind,
    /// Element sits inside an anchor or a button
    #[serde(default)]
    pub inside_interactive: bool,
    /// Element is styled with a pointer cursor
    #[serde(default)]
    pub pointer_cursor: bool,
}

impl ElementInfo {
    /// A plain, non-interactive element.
    pub const PLAIN: Self = Self {
        kind: ElementKind::Other,
        inside_interactive: false,
        pointer_cursor: false,
    };

    /// Creates an element of the given kind.
    #[must_use]
    pub const fn of(kind: ElementKind) -> Self {
        Self {
            kind,
            inside_interactive: false,
            pointer_cursor: false,
        }
    }

    /// Returns true if hovering this element should emphasise the cursor.
    #[must_use]
    pub const fn is_interactive(self) -> bool {
        matches!(self.kind, ElementKind::Anchor | ElementKind::Button)
            || self.inside_interactive
            || self.pointer_cursor
    }
}

/// Input from the pointing device.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    /// Pointer moved to a new surface position
    Move {
        /// New position
        position: Point,
    },
    /// Pointer entered the surface
    Enter,
    /// Pointer left the surface
    Leave,
    /// Pointer moved onto an element
    Over {
        /// Element under the pointer
        target: ElementInfo,
    },
    /// Pointer moved off an element
    Out {
        /// Element the pointer left
        target: ElementInfo,
    },
}

impl PointerEvent {
    /// Shorthand for a move event.
    #[must_use]
    pub const fn moved(x: f64, y: f64) -> Self {
        Self::Move {
            position: Point::new(x, y),
        }
    }

    /// Listener kind that receives this event.
    #[must_use]
    pub const fn kind(&self) -> PointerEventKind {
        match self {
            Self::Move { .. } => PointerEventKind::Move,
            Self::Enter => PointerEventKind::Enter,
            Self::Leave => PointerEventKind::Leave,
            Self::Over { .. } => PointerEventKind::Over,
            Self::Out { .. } => PointerEventKind::Out,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interactive_elements() {
        assert!(ElementInfo::of(ElementKind::Anchor).is_interactive());
        assert!(ElementInfo::of(ElementKind::Button).is_interactive());
        assert!(!ElementInfo::PLAIN.is_interactive());

        let icon_in_button = ElementInfo {
            inside_interactive: true,
            ..ElementInfo::PLAIN
        };
        assert!(icon_in_button.is_interactive());

        let clickable_div = ElementInfo {
            pointer_cursor: true,
            ..ElementInfo::PLAIN
        };
        assert!(clickable_div.is_interactive());
    }

    #[test]
    fn test_event_kind() {
        assert_eq!(PointerEvent::moved(1.0, 2.0).kind(), PointerEventKind::Move);
        assert_eq!(PointerEvent::Leave.kind(), PointerEventKind::Leave);
    }
}
