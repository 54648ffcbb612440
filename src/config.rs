//! Configuration types for the tab switcher.

use eframe::egui::{self, Color32, CornerRadius, Frame, Margin, Stroke, Vec2};
use serde::{Deserialize, Serialize};

use crate::controllers::SelectionController;
use crate::error::Result;

// ─────────────────────────────────────────────────────────────────────────────
// Style
// ─────────────────────────────────────────────────────────────────────────────

/// Cosmetic hooks. None of these change selection behaviour.
#[derive(Clone, Debug, PartialEq)]
pub struct TabsStyle {
    /// Frame around the selector bar.
    pub container: Frame,
    /// Padding inside each selector button.
    pub tab_padding: Vec2,
    /// Horizontal gap between selector buttons.
    pub tab_spacing: f32,
    /// Label colour of inactive buttons.
    pub tab_text: Color32,
    /// Label colour of the active button.
    pub active_tab_text: Color32,
    /// Fill of the sliding highlight behind the active button.
    pub active_tab_fill: Color32,
    /// Frame drawn for each content card.
    pub content: Frame,
    /// Space between the selector bar and the top of the stack.
    pub content_gap: f32,
}

impl Default for TabsStyle {
    fn default() -> Self {
        Self {
            container: Frame::NONE,
            tab_padding: egui::vec2(16.0, 8.0),
            tab_spacing: 4.0,
            tab_text: Color32::BLACK,
            active_tab_text: Color32::WHITE,
            active_tab_fill: Color32::from_rgb(0x1b, 0x61, 0x7d),
            content: Frame::new()
                .fill(Color32::from_rgb(0xee, 0xef, 0xf1))
                .stroke(Stroke::new(1.0, Color32::from_gray(210)))
                .corner_radius(CornerRadius::same(16))
                .inner_margin(Margin::same(40)),
            content_gap: 32.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Animation
// ─────────────────────────────────────────────────────────────────────────────

/// Timings and sizes for the switcher's animations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Time for the active-button highlight to slide to a new button. Default: `0.5`.
    pub highlight_secs: f32,
    /// Duration of the active card's bounce. Default: `0.4`.
    pub bounce_secs: f32,
    /// Time for cards to settle into a new depth (scale, opacity, offset). Default: `0.3`.
    pub transition_secs: f32,
    /// Scale applied to a selector button while pressed. Default: `0.95`.
    pub press_scale: f32,
    /// Height of the content stack area in points. Default: `420.0`.
    pub content_height: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            highlight_secs: 0.5,
            bounce_secs: 0.4,
            transition_secs: 0.3,
            press_scale: 0.95,
            content_height: 420.0,
        }
    }
}

impl AnimationConfig {
    /// Parse from JSON; missing fields fall back to defaults.
    pub fn from_json(s: &str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// TabsConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for a [`crate::TabSwitcher`].
#[derive(Clone, Debug, Default)]
pub struct TabsConfig {
    pub style: TabsStyle,
    pub animation: AnimationConfig,
    /// Selection store updated whenever a selection commits.
    pub controller: Option<SelectionController>,
}
