//! Note placement
//!
//! Geometry for new notes: palette, random spawn positions that avoid the
//! navigation bar and the bottom-right control buttons, and drag bounds.

use pointer_drag::{DragBounds, Size};

use crate::ids::RandomSource;
use crate::models::Position;

/// Card size used for clamping
pub const NOTE_WIDTH: f64 = 300.0;
pub const NOTE_HEIGHT: f64 = 300.0;

pub const NOTE_COLORS: [&str; 5] = ["#f8e3a3", "#ffccd5", "#c9e4ff", "#c9ffcc", "#e6ccff"];
pub const WELCOME_COLOR: &str = "#f8e3a3";

/// Minimum distance of a spawned note from the top/left edge
const SPAWN_MARGIN: f64 = 50.0;
/// Spawn range is `[0, viewport - SPAWN_INSET)` on both axes
const SPAWN_INSET: f64 = 350.0;
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

const NAV_ZONE_WIDTH: f64 = 320.0;
const NAV_ZONE_HEIGHT: f64 = 80.0;
const CONTROL_ZONE_WIDTH: f64 = 360.0;
const CONTROL_ZONE_HEIGHT: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn note_bounds(&self) -> DragBounds {
        DragBounds::new(Size::new(self.width, self.height), Size::new(NOTE_WIDTH, NOTE_HEIGHT))
    }
}

/// Axis-aligned rectangle, half-open on the right/bottom edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, p: Position) -> bool {
        p.x >= self.x && p.x < self.x + self.width && p.y >= self.y && p.y < self.y + self.height
    }
}

/// Top-left logo and links
pub fn navigation_zone(_viewport: Viewport) -> Rect {
    Rect::new(0.0, 0.0, NAV_ZONE_WIDTH, NAV_ZONE_HEIGHT)
}

/// Bottom-right "+ New Note" / "Clear board" buttons
pub fn control_zone(viewport: Viewport) -> Rect {
    Rect::new(
        viewport.width - CONTROL_ZONE_WIDTH,
        viewport.height - CONTROL_ZONE_HEIGHT,
        CONTROL_ZONE_WIDTH,
        CONTROL_ZONE_HEIGHT,
    )
}

pub fn is_reserved(p: Position, viewport: Viewport) -> bool {
    navigation_zone(viewport).contains(p) || control_zone(viewport).contains(p)
}

pub fn random_note_color(rng: &mut impl RandomSource) -> &'static str {
    NOTE_COLORS[rng.next_index(NOTE_COLORS.len())]
}

/// Sample spawn positions until one clears both reserved zones.
///
/// Gives up after `MAX_PLACEMENT_ATTEMPTS` and returns the spot just below
/// the navigation zone, which only collides on viewports too small to hold
/// a free spot at all.
pub fn random_note_position(viewport: Viewport, rng: &mut impl RandomSource) -> Position {
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let candidate = Position::new(
            (rng.next_f64() * (viewport.width - SPAWN_INSET)).max(SPAWN_MARGIN),
            (rng.next_f64() * (viewport.height - SPAWN_INSET)).max(SPAWN_MARGIN),
        );
        if !is_reserved(candidate, viewport) {
            return candidate;
        }
    }
    log::warn!("[PLACEMENT] no free spot after {} attempts", MAX_PLACEMENT_ATTEMPTS);
    Position::new(SPAWN_MARGIN, NAV_ZONE_HEIGHT)
}

/// Centre of the screen for the welcome note
pub fn welcome_position(viewport: Viewport) -> Position {
    Position::new(
        (viewport.width / 2.0 - 150.0).max(0.0),
        (viewport.height / 2.0 - 100.0).max(0.0),
    )
}
