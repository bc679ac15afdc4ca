//! Pointer Drag Utilities
//!
//! Free-form drag for absolutely positioned cards.
//! The state machine and clamping are plain Rust so they can be tested
//! without a browser; `GlobalPointerListeners` owns the document listeners
//! that exist only while a drag is in progress.

use wasm_bindgen::JsCast;

mod listeners;

pub use listeners::GlobalPointerListeners;

/// Primary (usually left) pointer button as reported by `MouseEvent::button`
pub const PRIMARY_BUTTON: i16 = 0;

/// Selector for children that must keep their own click behaviour
const INTERACTIVE_SELECTOR: &str = "input, button, textarea, select, [contenteditable='true']";

/// A point in CSS pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width/height in CSS pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Area a dragged item must stay inside
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragBounds {
    pub viewport: Size,
    pub item: Size,
}

impl DragBounds {
    pub fn new(viewport: Size, item: Size) -> Self {
        Self { viewport, item }
    }

    /// Clamp a top-left corner so the item's box stays on screen.
    ///
    /// When the viewport is smaller than the item the upper bound collapses
    /// to zero, so positions are never negative.
    pub fn clamp(&self, p: Point) -> Point {
        let max_x = (self.viewport.width - self.item.width).max(0.0);
        let max_y = (self.viewport.height - self.item.height).max(0.0);
        Point {
            x: p.x.min(max_x).max(0.0),
            y: p.y.min(max_y).max(0.0),
        }
    }
}

/// What the pointer went down on
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressTarget {
    /// The card body (title text, padding, todo labels)
    Surface,
    /// An input, button, checkbox or other control inside the card
    Control,
}

impl PressTarget {
    /// Classify a DOM event target.
    pub fn from_event_target(target: Option<web_sys::EventTarget>) -> Self {
        let Some(element) = target.and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return PressTarget::Surface;
        };
        match element.closest(INTERACTIVE_SELECTOR) {
            Ok(Some(_)) => PressTarget::Control,
            _ => PressTarget::Surface,
        }
    }
}

/// Drag lifecycle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    /// `offset` is pointer minus item position at press time
    Dragging { offset: Point },
}

/// Idle -> Dragging -> Idle
#[derive(Clone, Copy, Debug, Default)]
pub struct DragMachine {
    state: DragState,
}

impl DragMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Handle pointer-down. Returns true when a drag starts.
    pub fn press(&mut self, pointer: Point, position: Point, button: i16, target: PressTarget) -> bool {
        if button != PRIMARY_BUTTON || target == PressTarget::Control || self.is_dragging() {
            return false;
        }
        self.state = DragState::Dragging {
            offset: Point::new(pointer.x - position.x, pointer.y - position.y),
        };
        true
    }

    /// Handle pointer-move. Returns the new clamped position while dragging.
    pub fn drag_to(&self, pointer: Point, bounds: &DragBounds) -> Option<Point> {
        match self.state {
            DragState::Idle => None,
            DragState::Dragging { offset } => {
                Some(bounds.clamp(Point::new(pointer.x - offset.x, pointer.y - offset.y)))
            }
        }
    }

    /// Handle pointer-up. Always ends in Idle; returns whether a drag was active.
    pub fn release(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }
}
