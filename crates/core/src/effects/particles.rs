use folio_protocol::{Point, Rect, RenderCommand, Size, ThemeToken};
use rand::Rng;

use crate::config::EffectsConfig;
use crate::lifecycle::{FrameLoop, ListenerKind, Listeners, Subscription};

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
    pub alpha: f64,
}

impl Particle {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A connecting line between two particles closer than the link distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Link {
    pub a: usize,
    pub b: usize,
    pub distance: f64,
    pub alpha: f64,
}

/// Opacity of a link at `distance`: linear from `max_alpha` at zero down to
/// zero at `threshold`. `None` at or beyond the threshold.
pub fn link_alpha(distance: f64, threshold: f64, max_alpha: f64) -> Option<f64> {
    if distance < threshold {
        Some((threshold - distance) / threshold * max_alpha)
    } else {
        None
    }
}

/// Wrap one coordinate that left `[0, extent]` to the opposite edge.
fn wrap(value: f64, extent: f64) -> f64 {
    if value < 0.0 {
        extent
    } else if value > extent {
        0.0
    } else {
        value
    }
}

/// Sample `[low, high)`; an empty or unbounded band yields `low`.
fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    if !(low.is_finite() && high.is_finite()) || low >= high {
        return low;
    }
    rng.gen_range(low..high)
}

/// Fixed-size set of drifting particles inside a rectangular viewport.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Size,
}

impl ParticleField {
    pub fn new<R: Rng + ?Sized>(config: &EffectsConfig, bounds: Size, rng: &mut R) -> Self {
        let particles = (0..config.particle_count)
            .map(|_| Particle {
                x: uniform(rng, 0.0, bounds.width.max(0.0)),
                y: uniform(rng, 0.0, bounds.height.max(0.0)),
                vx: uniform(rng, -config.max_speed, config.max_speed),
                vy: uniform(rng, -config.max_speed, config.max_speed),
                radius: uniform(rng, 0.0, config.max_radius),
                alpha: uniform(rng, config.opacity_min, config.opacity_max),
            })
            .collect();
        Self { particles, bounds }
    }

    pub fn from_particles(particles: Vec<Particle>, bounds: Size) -> Self {
        Self { particles, bounds }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Follow a viewport resize. Positions are left alone and wrap on the
    /// next step if they now lie outside.
    pub fn resize(&mut self, bounds: Size) {
        self.bounds = bounds;
    }

    /// Advance every particle by its velocity, wrapping at the edges.
    pub fn step(&mut self) {
        let Size { width, height } = self.bounds;
        for p in &mut self.particles {
            p.x = wrap(p.x + p.vx, width);
            p.y = wrap(p.y + p.vy, height);
        }
    }

    /// Every unordered pair closer than `threshold`.
    pub fn links(&self, threshold: f64, max_alpha: f64) -> Vec<Link> {
        let mut links = Vec::new();
        for (a, pa) in self.particles.iter().enumerate() {
            for (offset, pb) in self.particles[a + 1..].iter().enumerate() {
                let distance = pa.position().distance(pb.position());
                if let Some(alpha) = link_alpha(distance, threshold, max_alpha) {
                    links.push(Link {
                        a,
                        b: a + 1 + offset,
                        distance,
                        alpha,
                    });
                }
            }
        }
        links
    }

    /// Commands for the current state: clear, dots, then links.
    pub fn render(&self, config: &EffectsConfig) -> Vec<RenderCommand> {
        let links = self.links(config.link_distance, config.link_alpha);
        let mut commands = Vec::with_capacity(self.particles.len() + links.len() + 5);
        commands.push(RenderCommand::Clear {
            rect: Rect::from_size(self.bounds),
        });

        commands.push(RenderCommand::BeginGroup {
            id: "particles".into(),
        });
        for p in &self.particles {
            commands.push(RenderCommand::FillCircle {
                center: p.position(),
                radius: p.radius,
                color: ThemeToken::Neon,
                alpha: p.alpha,
            });
        }
        commands.push(RenderCommand::EndGroup);

        commands.push(RenderCommand::BeginGroup { id: "links".into() });
        for link in links {
            commands.push(RenderCommand::DrawLine {
                from: self.particles[link.a].position(),
                to: self.particles[link.b].position(),
                color: ThemeToken::Neon,
                width: config.link_width,
                alpha: link.alpha,
            });
        }
        commands.push(RenderCommand::EndGroup);
        commands
    }
}

/// The mounted particle background: a field, its frame loop and its resize
/// listener.
#[derive(Debug)]
pub struct ParticleLayer {
    field: ParticleField,
    config: EffectsConfig,
    frames: FrameLoop,
    resize: Option<Subscription>,
}

impl ParticleLayer {
    /// Mount onto a drawing surface of the given size. A host without a
    /// surface passes `None` and the effect is skipped.
    pub fn mount<R: Rng + ?Sized>(
        listeners: &mut Listeners,
        config: &EffectsConfig,
        surface: Option<Size>,
        rng: &mut R,
    ) -> Option<Self> {
        let Some(bounds) = surface else {
            log::warn!("no drawing surface, particle background disabled");
            return None;
        };
        let field = ParticleField::new(config, bounds, rng);
        log::debug!(
            "particle layer mounted: {} particles in {}x{}",
            field.len(),
            bounds.width,
            bounds.height
        );
        Some(Self {
            field,
            config: config.clone(),
            frames: FrameLoop::start(listeners),
            resize: Some(listeners.register(ListenerKind::Resize)),
        })
    }

    /// Run one frame: advance, then emit the draw list. Returns nothing once
    /// the layer has been torn down.
    pub fn frame(&mut self, listeners: &mut Listeners) -> Vec<RenderCommand> {
        if !self.frames.fire(listeners) {
            return Vec::new();
        }
        self.field.step();
        self.field.render(&self.config)
    }

    pub fn resize(&mut self, bounds: Size) {
        self.field.resize(bounds);
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn frame_loop(&self) -> &FrameLoop {
        &self.frames
    }

    pub fn is_running(&self) -> bool {
        self.frames.is_running()
    }

    /// Cancel the pending frame and remove the resize listener.
    pub fn unmount(&mut self, listeners: &mut Listeners) {
        self.frames.cancel(listeners);
        if let Some(resize) = self.resize.take() {
            listeners.release(resize);
        }
    }
}
