//! Particle field simulation.
//!
//! A fixed set of particles drifts through a 3D box centered on the
//! viewport, wrapping at the box boundaries and accumulating a small
//! velocity nudge toward the pointer. Rendering perspective-projects
//! each particle onto a [`Surface`], with size and opacity attenuated
//! by depth.

use ratatui::style::Color;
use vitrine_core::{FrameInput, Viewport};

use crate::surface::Surface;
use crate::MotionError;

/// Particle field configuration.
#[derive(Debug, Clone)]
pub struct FieldConfig {
    /// Number of particles, fixed for the field's lifetime.
    pub count: usize,
    /// Half-extent of the z axis; x/y half-extents come from the viewport.
    pub depth: f32,
    /// Scale of the initial per-axis velocities.
    pub velocity_scale: f32,
    /// Focal length for the perspective divide.
    pub focal_length: f32,
    /// Strength of the pointer's pull on particle velocities.
    pub pointer_influence: f32,
    /// Colors assigned to particles at creation. Must be non-empty.
    pub palette: Vec<Color>,
    /// Seed for deterministic particle initialization.
    pub seed: u64,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            count: 150,
            depth: 500.0,
            velocity_scale: 0.5,
            focal_length: 800.0,
            pointer_influence: 0.0001,
            palette: vitrine_core::Palette::default().colors().to_vec(),
            seed: 0x5eed,
        }
    }
}

#[derive(Debug, Clone)]
struct Particle {
    position: [f32; 3],
    velocity: [f32; 3],
    color: Color,
    size: f32,
    opacity: f32,
}

/// The particle field simulation.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    /// Half-extents per axis; positions stay within `[-d, d]`.
    domain: [f32; 3],
    focal_length: f32,
    pointer_influence: f32,
    viewport: Viewport,
    disposed: bool,
}

/// Deterministic seed mixing for particle initialization.
fn mix(seed: u64, index: u64, salt: u64) -> u64 {
    index
        .wrapping_mul(31)
        .wrapping_add(seed)
        .wrapping_mul(0x9e37_79b9_7f4a_7c15)
        .wrapping_add(salt.wrapping_mul(17))
        .wrapping_mul(0xbf58_476d_1ce4_e5b9)
}

/// A value in `[0, 1)` derived from the mixed seed.
fn unit(seed: u64, index: u64, salt: u64) -> f32 {
    (mix(seed, index, salt) % 10_000) as f32 / 10_000.0
}

/// A value in `[-1, 1)` derived from the mixed seed.
fn signed_unit(seed: u64, index: u64, salt: u64) -> f32 {
    unit(seed, index, salt) * 2.0 - 1.0
}

impl ParticleField {
    /// Build a field sized to the viewport. Fails on an empty palette.
    pub fn new(config: FieldConfig, viewport: Viewport) -> Result<Self, MotionError> {
        if config.palette.is_empty() {
            return Err(MotionError::EmptyPalette);
        }
        let domain = [
            viewport.width / 2.0,
            viewport.height / 2.0,
            config.depth,
        ];
        let particles = (0..config.count as u64)
            .map(|i| Particle {
                position: [
                    signed_unit(config.seed, i, 1) * domain[0],
                    signed_unit(config.seed, i, 2) * domain[1],
                    signed_unit(config.seed, i, 3) * domain[2],
                ],
                velocity: [
                    signed_unit(config.seed, i, 4) * config.velocity_scale,
                    signed_unit(config.seed, i, 5) * config.velocity_scale,
                    signed_unit(config.seed, i, 6) * config.velocity_scale,
                ],
                color: config.palette[(mix(config.seed, i, 7) as usize) % config.palette.len()],
                size: 0.5 + unit(config.seed, i, 8) * 3.0,
                opacity: 0.2 + unit(config.seed, i, 9) * 0.8,
            })
            .collect();
        Ok(Self {
            particles,
            domain,
            focal_length: config.focal_length,
            pointer_influence: config.pointer_influence,
            viewport,
            disposed: false,
        })
    }

    /// Advance the simulation by one nominal frame.
    ///
    /// The step is a fixed nominal unit rather than a wall-clock delta,
    /// matching the per-refresh stepping of the animation loop; hosts
    /// running at a different refresh rate scale velocities instead.
    /// Of the frame input, only the pointer perturbs the step; the
    /// scroll component acts in [`ParticleField::render`].
    pub fn step(&mut self, input: FrameInput) {
        if self.disposed {
            return;
        }
        let (cx, cy) = self.viewport.center();
        for p in &mut self.particles {
            for axis in 0..3 {
                p.position[axis] += p.velocity[axis];
            }
            // Pointer pull accumulates into velocity, so the effect
            // drifts rather than snapping, and dissipates only through
            // boundary wrap.
            if let Some((px, py)) = input.pointer {
                p.velocity[0] += (px - cx) * self.pointer_influence;
                p.velocity[1] += (py - cy) * self.pointer_influence;
            }
            for axis in 0..3 {
                let d = self.domain[axis];
                if p.position[axis] > d {
                    p.position[axis] = -d;
                } else if p.position[axis] < -d {
                    p.position[axis] = d;
                }
            }
        }
    }

    /// Project and draw every particle, in index order.
    ///
    /// Takes the same per-frame input as [`ParticleField::step`]: the
    /// pointer perturbs the step, the scroll offset applies an
    /// aggregate scale and opacity boost here at render time and is
    /// never baked into particle state. A surface with a zero
    /// dimension drops the frame silently.
    pub fn render(&self, surface: &mut dyn Surface, input: FrameInput) {
        if self.disposed {
            return;
        }
        let (w, h) = surface.size();
        if w == 0 || h == 0 {
            return;
        }
        surface.clear();
        let cx = w as f32 / 2.0;
        let cy = h as f32 / 2.0;
        let scroll = input.scroll.clamp(0.0, 1.0);
        let zoom = 1.0 + scroll * 0.3;
        let glow = 0.8 + scroll * 0.2;
        for p in &self.particles {
            let depth = self.focal_length + p.position[2];
            if depth <= f32::EPSILON {
                continue;
            }
            let perspective = self.focal_length / depth;
            let x = cx + p.position[0] * perspective * zoom;
            let y = cy + p.position[1] * perspective * zoom;
            let size = p.size * perspective;
            let opacity = (p.opacity * perspective * glow).clamp(0.0, 1.0);
            surface.draw_point(x, y, size, p.color, opacity);
        }
    }

    /// Resize the x/y domain to a new viewport. Positions and
    /// velocities are untouched; anything now outside the domain wraps
    /// back in on the next step.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.domain[0] = viewport.width / 2.0;
        self.domain[1] = viewport.height / 2.0;
    }

    /// Drop the particle population and ignore further steps.
    /// Idempotent.
    pub fn dispose(&mut self) {
        self.particles.clear();
        self.disposed = true;
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Particle positions, exposed for inspection.
    pub fn positions(&self) -> impl Iterator<Item = [f32; 3]> + '_ {
        self.particles.iter().map(|p| p.position)
    }

    #[cfg(test)]
    fn particle_mut(&mut self, index: usize) -> &mut Particle {
        &mut self.particles[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSurface {
        width: u16,
        height: u16,
        cleared: usize,
        points: Vec<(f32, f32, f32, Color, f32)>,
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> (u16, u16) {
            (self.width, self.height)
        }

        fn clear(&mut self) {
            self.cleared += 1;
            self.points.clear();
        }

        fn draw_point(&mut self, x: f32, y: f32, size: f32, color: Color, opacity: f32) {
            self.points.push((x, y, size, color, opacity));
        }
    }

    fn field(count: usize) -> ParticleField {
        let config = FieldConfig {
            count,
            ..FieldConfig::default()
        };
        ParticleField::new(config, Viewport::new(80, 24)).unwrap()
    }

    #[test]
    fn test_empty_palette_rejected() {
        let config = FieldConfig {
            palette: Vec::new(),
            ..FieldConfig::default()
        };
        let err = ParticleField::new(config, Viewport::new(80, 24)).unwrap_err();
        assert_eq!(err, MotionError::EmptyPalette);
    }

    #[test]
    fn test_initialization_is_deterministic() {
        let a: Vec<_> = field(50).positions().collect();
        let b: Vec<_> = field(50).positions().collect();
        assert_eq!(a.len(), 50);
        assert_eq!(a, b);
    }

    #[test]
    fn test_positions_stay_in_domain() {
        let mut f = field(100);
        for _ in 0..1000 {
            f.step(FrameInput::with_pointer(80.0, 0.0));
        }
        for pos in f.positions() {
            assert!(pos[0] >= -40.0 && pos[0] <= 40.0, "x out of domain: {pos:?}");
            assert!(pos[1] >= -12.0 && pos[1] <= 12.0, "y out of domain: {pos:?}");
            assert!(pos[2] >= -500.0 && pos[2] <= 500.0, "z out of domain: {pos:?}");
        }
    }

    #[test]
    fn test_zero_velocity_is_fixed_point() {
        let mut f = field(10);
        for i in 0..10 {
            f.particle_mut(i).velocity = [0.0; 3];
        }
        let before: Vec<_> = f.positions().collect();
        for _ in 0..100 {
            f.step(FrameInput::default());
        }
        let after: Vec<_> = f.positions().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_wrap_rule_exact() {
        let mut f = field(1);
        {
            let p = f.particle_mut(0);
            p.position = [39.5, 0.0, 0.0];
            p.velocity = [1.0, 0.0, 0.0];
        }
        f.step(FrameInput::default());
        // 40.5 exceeds the half-extent of 40, so x resets to -40.
        let pos = f.positions().next().unwrap();
        assert_eq!(pos[0], -40.0);
        assert_eq!(pos[1], 0.0);
    }

    #[test]
    fn test_origin_projects_to_center() {
        let mut f = field(1);
        {
            let p = f.particle_mut(0);
            p.position = [0.0, 0.0, 0.0];
            p.velocity = [0.0; 3];
        }
        let mut surface = RecordingSurface {
            width: 80,
            height: 24,
            ..Default::default()
        };
        f.render(&mut surface, FrameInput::default());
        let (x, y, ..) = surface.points[0];
        assert_eq!((x, y), (40.0, 12.0));
    }

    #[test]
    fn test_depth_attenuates_size_and_opacity() {
        let mut f = field(2);
        {
            let near = f.particle_mut(0);
            near.position = [0.0, 0.0, -200.0];
            near.size = 2.0;
            near.opacity = 0.5;
        }
        {
            let far = f.particle_mut(1);
            far.position = [0.0, 0.0, 400.0];
            far.size = 2.0;
            far.opacity = 0.5;
        }
        let mut surface = RecordingSurface {
            width: 80,
            height: 24,
            ..Default::default()
        };
        f.render(&mut surface, FrameInput::default());
        let (.., near_size, _, near_opacity) = surface.points[0];
        let (.., far_size, _, far_opacity) = surface.points[1];
        assert!(near_size > far_size);
        assert!(near_opacity > far_opacity);
    }

    #[test]
    fn test_zero_sized_surface_drops_frame() {
        let f = field(10);
        let mut surface = RecordingSurface::default();
        f.render(&mut surface, FrameInput::default());
        assert_eq!(surface.cleared, 0);
        assert!(surface.points.is_empty());
    }

    #[test]
    fn test_step_ignores_scroll() {
        let mut plain = field(50);
        let mut scrolled = field(50);
        for _ in 0..50 {
            plain.step(FrameInput::default());
            scrolled.step(FrameInput {
                pointer: None,
                scroll: 1.0,
            });
        }
        let a: Vec<_> = plain.positions().collect();
        let b: Vec<_> = scrolled.positions().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_pointer_pull_accumulates() {
        let mut f = field(1);
        {
            let p = f.particle_mut(0);
            p.position = [0.0; 3];
            p.velocity = [0.0; 3];
        }
        // Pointer far to the right of center pulls velocity rightward.
        for _ in 0..100 {
            f.step(FrameInput::with_pointer(80.0, 12.0));
        }
        let pos = f.positions().next().unwrap();
        assert!(pos[0] > 0.0);
    }

    #[test]
    fn test_resize_keeps_particles_then_wraps() {
        let mut f = field(1);
        {
            let p = f.particle_mut(0);
            p.position = [39.0, 0.0, 0.0];
            p.velocity = [0.5, 0.0, 0.0];
        }
        // Shrink the viewport so the particle is outside the new domain.
        f.set_viewport(Viewport::new(40, 24));
        assert_eq!(f.positions().next().unwrap()[0], 39.0);
        f.step(FrameInput::default());
        // 39.5 > 20, so it wraps to the negative extreme.
        assert_eq!(f.positions().next().unwrap()[0], -20.0);
    }

    #[test]
    fn test_render_in_index_order() {
        let f = field(5);
        let mut surface = RecordingSurface {
            width: 80,
            height: 24,
            ..Default::default()
        };
        f.render(&mut surface, FrameInput::default());
        assert_eq!(surface.points.len(), 5);
        let colors: Vec<_> = surface.points.iter().map(|p| p.3).collect();
        let expected: Vec<_> = field(5)
            .particles
            .iter()
            .map(|p| p.color)
            .collect();
        assert_eq!(colors, expected);
    }

    #[test]
    fn test_dispose_is_idempotent() {
        let mut f = field(10);
        f.dispose();
        f.dispose();
        assert!(f.is_empty());
        f.step(FrameInput::default());
        let mut surface = RecordingSurface {
            width: 80,
            height: 24,
            ..Default::default()
        };
        f.render(&mut surface, FrameInput::default());
        assert_eq!(surface.cleared, 0);
    }

    #[test]
    fn test_scroll_scales_at_render_only() {
        let mut f = field(1);
        {
            let p = f.particle_mut(0);
            p.position = [10.0, 0.0, 0.0];
            p.velocity = [0.0; 3];
        }
        let mut plain = RecordingSurface {
            width: 80,
            height: 24,
            ..Default::default()
        };
        let mut scrolled = RecordingSurface {
            width: 80,
            height: 24,
            ..Default::default()
        };
        f.render(&mut plain, FrameInput::default());
        f.render(
            &mut scrolled,
            FrameInput {
                pointer: None,
                scroll: 1.0,
            },
        );
        assert!(scrolled.points[0].0 > plain.points[0].0);
        // Particle state itself is untouched by scroll.
        assert_eq!(f.positions().next().unwrap(), [10.0, 0.0, 0.0]);
    }
}
