//! Per-depth look of the stacked content cards.
//!
//! Everything here is a pure function of the stack depth, the hover flag and
//! (for the bounce) the time elapsed since activation.

/// Scale and opacity lost per step of depth.
pub const DEPTH_STEP: f32 = 0.1;
/// Cards at this depth or deeper are fully transparent.
pub const VISIBLE_DEPTH: usize = 3;
/// Upward shift per depth while the selector bar is hovered.
pub const FAN_OFFSET: f32 = 50.0;
/// Peak downward displacement of the active card's bounce.
pub const BOUNCE_HEIGHT: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLook {
    pub scale: f32,
    /// Paint order; higher is drawn on top.
    pub z_order: i32,
    pub opacity: f32,
    /// Vertical displacement in points (negative = up).
    pub vertical_offset: f32,
}

impl PanelLook {
    pub fn at(depth: usize, hovering: bool) -> Self {
        let d = depth as f32;
        Self {
            scale: 1.0 - DEPTH_STEP * d,
            z_order: -(depth as i32),
            opacity: if depth < VISIBLE_DEPTH {
                1.0 - DEPTH_STEP * d
            } else {
                0.0
            },
            vertical_offset: if hovering { d * -FAN_OFFSET } else { 0.0 },
        }
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

/// Looks for a whole stack of `len` cards, front first.
pub fn stack_looks(len: usize, hovering: bool) -> Vec<PanelLook> {
    (0..len).map(|d| PanelLook::at(d, hovering)).collect()
}

/// Bounce displacement `elapsed` seconds after activation: rises from 0 to
/// [`BOUNCE_HEIGHT`] at the midpoint and settles back to 0 at `duration`.
pub fn bounce_offset(elapsed: f32, duration: f32) -> f32 {
    if duration <= 0.0 || !(0.0..duration).contains(&elapsed) {
        return 0.0;
    }
    let t = elapsed / duration;
    BOUNCE_HEIGHT * (std::f32::consts::PI * t).sin()
}
