//! Damped harmonic oscillator used by spring animations.

/// Integration step used between frames. Long frames are split into several
/// steps of at most this length so stiff springs stay stable.
pub(crate) const SPRING_TIMESTEP_SECS: f32 = 0.016;

/// Spring animation configuration.
///
/// Parameters follow the physical model directly: `damping` is the
/// viscous coefficient `c`, so the damping ratio is `c / (2 * sqrt(k * m))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Viscous damping coefficient.
    pub damping: f32,
    /// Stiffness constant. Higher values = faster animation.
    pub stiffness: f32,
    /// Mass attached to the spring.
    pub mass: f32,
    /// Speed (units/s) under which the spring may come to rest.
    pub rest_speed_threshold: f32,
    /// Distance from target under which the spring may come to rest.
    pub rest_displacement_threshold: f32,
}

impl SpringSpec {
    /// Under-damped default: stiffness 100, mass 1, damping 10.
    pub fn default_spring() -> Self {
        Self {
            damping: 10.0,
            stiffness: 100.0,
            mass: 1.0,
            rest_speed_threshold: 2.0,
            rest_displacement_threshold: 0.01,
        }
    }

    /// Replace the damping coefficient, keeping the other parameters.
    pub fn with_damping(mut self, damping: f32) -> Self {
        self.damping = damping;
        self
    }

    /// 1.0 = critically damped, < 1.0 = bouncy, > 1.0 = over-damped.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Whether every parameter is finite and physically meaningful.
    pub fn is_valid(&self) -> bool {
        self.damping.is_finite()
            && self.damping >= 0.0
            && self.stiffness.is_finite()
            && self.stiffness > 0.0
            && self.mass.is_finite()
            && self.mass > 0.0
            && self.rest_speed_threshold.is_finite()
            && self.rest_speed_threshold >= 0.0
            && self.rest_displacement_threshold.is_finite()
            && self.rest_displacement_threshold >= 0.0
    }

    /// Advance `(value, velocity)` toward `target` by `dt` seconds using
    /// semi-implicit Euler in fixed sub-steps.
    pub fn advance(&self, value: f32, velocity: f32, target: f32, dt: f32) -> (f32, f32) {
        let mut value = value;
        let mut velocity = velocity;
        let mut elapsed = 0.0f32;
        while elapsed < dt {
            let step = SPRING_TIMESTEP_SECS.min(dt - elapsed);
            let displacement = value - target;
            let force = -self.stiffness * displacement - self.damping * velocity;
            velocity += force / self.mass * step;
            value += velocity * step;
            elapsed += step;
        }
        (value, velocity)
    }

    /// Whether a spring at `(value, velocity)` is close enough to settle.
    pub fn is_at_rest(&self, value: f32, velocity: f32, target: f32) -> bool {
        velocity.abs() < self.rest_speed_threshold
            && (value - target).abs() < self.rest_displacement_threshold
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}
