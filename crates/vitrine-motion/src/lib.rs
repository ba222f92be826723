//! Animation engines for the vitrine terminal portfolio.
//!
//! Two independent components make up the decorative layer:
//!
//! - [`Typewriter`]: a timer-driven state machine that types, holds,
//!   deletes and cycles through a phrase list. It owns at most one
//!   pending deadline and is driven by the host clock through
//!   [`Typewriter::advance`], which makes it fully testable without
//!   real timers.
//! - [`ParticleField`]: a fixed-population 3D particle simulation,
//!   stepped once per frame and perspective-projected onto any
//!   [`Surface`] implementation.
//!
//! Neither component touches the terminal directly; the binary crate
//! adapts them onto ratatui.

mod field;
mod surface;
mod typewriter;

pub use field::{FieldConfig, ParticleField};
pub use surface::Surface;
pub use typewriter::{Mode, Typewriter, TypewriterConfig};

use thiserror::Error;

/// Construction-time configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MotionError {
    #[error("phrase list is empty")]
    EmptyPhrases,
    #[error("timer intervals must be non-zero")]
    ZeroInterval,
    #[error("color palette is empty")]
    EmptyPalette,
}
