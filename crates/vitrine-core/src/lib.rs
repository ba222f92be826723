//! Shared types for the vitrine terminal portfolio.
//!
//! These are the leaf types passed between the config layer, the
//! animation engines, and the application shell: animation speed
//! presets, particle color palettes, viewport dimensions, and the
//! per-frame input sampled by the host.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Animation speed presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnimationSpeed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl AnimationSpeed {
    /// Multiplier applied to per-frame particle motion.
    pub fn motion_multiplier(self) -> f32 {
        match self {
            AnimationSpeed::Slow => 0.5,
            AnimationSpeed::Normal => 1.0,
            AnimationSpeed::Fast => 2.0,
        }
    }

    /// Divisor applied to typewriter intervals (faster = shorter).
    pub fn interval_divisor(self) -> u64 {
        match self {
            AnimationSpeed::Slow => 1,
            AnimationSpeed::Normal => 1,
            AnimationSpeed::Fast => 2,
        }
    }

    /// Cycle to the next speed preset.
    pub fn next(self) -> Self {
        match self {
            AnimationSpeed::Slow => AnimationSpeed::Normal,
            AnimationSpeed::Normal => AnimationSpeed::Fast,
            AnimationSpeed::Fast => AnimationSpeed::Slow,
        }
    }
}

/// Named color palettes for the particle background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Palette {
    /// Electric blues, purples and magentas.
    #[default]
    Electric,
    /// Deep sea blues and teals.
    Ocean,
    /// Warm oranges and reds.
    Ember,
    /// Greys and whites.
    Mono,
}

impl Palette {
    /// The colors drawn from this palette at particle creation time.
    pub fn colors(self) -> &'static [Color] {
        match self {
            Palette::Electric => &[
                Color::Rgb(0, 212, 255),
                Color::Rgb(168, 85, 247),
                Color::Rgb(0, 255, 255),
                Color::Rgb(255, 0, 255),
                Color::Rgb(139, 92, 246),
                Color::Rgb(6, 182, 212),
            ],
            Palette::Ocean => &[
                Color::Rgb(20, 184, 166),
                Color::Rgb(59, 130, 246),
                Color::Rgb(14, 116, 144),
                Color::Rgb(99, 102, 241),
            ],
            Palette::Ember => &[
                Color::Rgb(249, 115, 22),
                Color::Rgb(239, 68, 68),
                Color::Rgb(234, 179, 8),
                Color::Rgb(251, 146, 60),
            ],
            Palette::Mono => &[
                Color::Rgb(229, 229, 229),
                Color::Rgb(163, 163, 163),
                Color::Rgb(115, 115, 115),
            ],
        }
    }

    pub fn next(self) -> Self {
        match self {
            Palette::Electric => Palette::Ocean,
            Palette::Ocean => Palette::Ember,
            Palette::Ember => Palette::Mono,
            Palette::Mono => Palette::Electric,
        }
    }
}

/// Host viewport dimensions, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }

    /// A viewport with no drawable area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// External perturbation inputs sampled by the host once per frame.
///
/// The pointer is in surface coordinates (origin top-left); the scroll
/// offset is the host's scroll progress, normalized to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    pub pointer: Option<(f32, f32)>,
    pub scroll: f32,
}

impl FrameInput {
    pub fn with_pointer(x: f32, y: f32) -> Self {
        Self {
            pointer: Some((x, y)),
            scroll: 0.0,
        }
    }
}
