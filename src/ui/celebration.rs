//! Confetti bursts for correct answers and finished sessions.

use crate::app::Celebration;
use rand::Rng;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

const CONFETTI: [&str; 6] = ["✦", "✧", "★", "•", "✿", "❀"];
const COLORS: [Color; 6] = [
    Color::Red,
    Color::Yellow,
    Color::Green,
    Color::Cyan,
    Color::Magenta,
    Color::LightBlue,
];

#[derive(Debug, Clone, Copy)]
struct Particle {
    /// Fractions of the area, 0.0..1.0.
    x: f64,
    y: f64,
    /// Fall speed in area heights per second.
    vy: f64,
    glyph: &'static str,
    color: Color,
}

/// A running burst. `lifetime` and `max_lifetime` are in seconds.
#[derive(Debug, Clone)]
pub struct CelebrationEffect {
    pub kind: Celebration,
    pub lifetime: f64,
    pub max_lifetime: f64,
    particles: Vec<Particle>,
}

impl CelebrationEffect {
    pub fn new<R: Rng + ?Sized>(kind: Celebration, rng: &mut R) -> Self {
        let (count, max_lifetime) = match kind {
            Celebration::Minor => (12, 0.8),
            Celebration::Major => (40, 2.0),
        };
        let particles = (0..count)
            .map(|_| Particle {
                x: rng.gen_range(0.0..1.0),
                y: rng.gen_range(0.0..0.3),
                vy: rng.gen_range(0.2..0.6),
                glyph: CONFETTI[rng.gen_range(0..CONFETTI.len())],
                color: COLORS[rng.gen_range(0..COLORS.len())],
            })
            .collect();
        Self {
            kind,
            lifetime: 0.0,
            max_lifetime,
            particles,
        }
    }

    /// Advance by `delta` seconds. Returns false once the effect is over.
    pub fn update(&mut self, delta: f64) -> bool {
        self.lifetime += delta;
        for p in &mut self.particles {
            p.y += p.vy * delta;
        }
        self.is_active()
    }

    pub fn is_active(&self) -> bool {
        self.lifetime <= self.max_lifetime
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if !self.is_active() || area.width == 0 || area.height == 0 {
            return;
        }
        for p in &self.particles {
            if !(0.0..1.0).contains(&p.y) {
                continue;
            }
            let x = area.x + (p.x * f64::from(area.width)) as u16;
            let y = area.y + (p.y * f64::from(area.height)) as u16;
            let cell = Rect::new(x.min(area.right() - 1), y.min(area.bottom() - 1), 1, 1);
            let span = Span::styled(p.glyph, Style::default().fg(p.color));
            frame.render_widget(Paragraph::new(span), cell);
        }
    }
}

/// Active effects, fed from `App::take_celebrations`.
#[derive(Debug, Clone, Default)]
pub struct Celebrations {
    effects: Vec<CelebrationEffect>,
}

impl Celebrations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger<R: Rng + ?Sized>(&mut self, signals: Vec<Celebration>, rng: &mut R) {
        for kind in signals {
            self.effects.push(CelebrationEffect::new(kind, rng));
        }
    }

    pub fn update(&mut self, delta: f64) {
        self.effects.retain_mut(|e| e.update(delta));
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        for effect in &self.effects {
            effect.render(frame, area);
        }
    }
}
