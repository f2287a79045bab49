use rand::Rng;

// Spring constants tuned for the card pop-in.
const SPRING_STIFFNESS: f64 = 0.12;
const SPRING_DAMPING: f64 = 0.82;
const SPRING_REST_THRESHOLD: f64 = 0.001;

pub const CARD_SCALE_FROM: f64 = 0.3;
pub const CARD_FADE_MS: f64 = 250.0;

pub const GLOW_MIN_OPACITY: f64 = 0.25;
pub const GLOW_MAX_OPACITY: f64 = 0.8;
pub const GLOW_PERIOD_MS: f64 = 700.0;
pub const GLOW_ITERATIONS: u32 = 3;

pub const PARTICLE_COUNT: usize = 30;
/// Every particle, delay included, is done inside this bound.
pub const BURST_MAX_DURATION_MS: f64 = 1500.0;

const PARTICLE_MIN_DISTANCE: f64 = 60.0;
const PARTICLE_MAX_DISTANCE: f64 = 160.0;
const PARTICLE_MIN_FALL: f64 = 40.0;
const PARTICLE_MAX_FALL: f64 = 90.0;
const PARTICLE_MIN_DURATION_MS: f64 = 900.0;
const PARTICLE_MAX_DURATION_MS: f64 = 1400.0;
const PARTICLE_MAX_DELAY_MS: f64 = 100.0;
const PARTICLE_MIN_SIZE: f64 = 4.0;
const PARTICLE_MAX_SIZE: f64 = 10.0;

/// Damped spring integrated once per animation frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub position: f64,
    pub velocity: f64,
    pub target: f64,
    pub stiffness: f64,
    pub damping: f64,
}

impl Spring {
    pub fn new(position: f64, target: f64, stiffness: f64, damping: f64) -> Self {
        Self {
            position,
            velocity: 0.0,
            target,
            stiffness,
            damping,
        }
    }

    /// The card pop-in: scale 0.3 toward 1.0.
    pub fn scale_in() -> Self {
        Self::new(CARD_SCALE_FROM, 1.0, SPRING_STIFFNESS, SPRING_DAMPING)
    }

    /// Advance one frame. Returns true while still in motion; snaps to the
    /// target once both distance and velocity fall under the rest threshold.
    pub fn update(&mut self) -> bool {
        let force = (self.target - self.position) * self.stiffness;
        self.velocity = (self.velocity + force) * self.damping;
        self.position += self.velocity;

        let distance = (self.target - self.position).abs();
        if distance < SPRING_REST_THRESHOLD && self.velocity.abs() < SPRING_REST_THRESHOLD {
            self.position = self.target;
            self.velocity = 0.0;
            return false;
        }
        true
    }
}

/// Halo opacity `t_ms` after reveal entry. Oscillates between the two bounds
/// for a fixed number of iterations, then rests at the lower bound.
pub fn glow_opacity(t_ms: f64) -> f64 {
    let total = GLOW_PERIOD_MS * f64::from(GLOW_ITERATIONS);
    if t_ms <= 0.0 || t_ms >= total {
        return GLOW_MIN_OPACITY;
    }
    let phase = (t_ms % GLOW_PERIOD_MS) / GLOW_PERIOD_MS;
    let swing = (phase * std::f64::consts::TAU).sin().abs();
    GLOW_MIN_OPACITY + (GLOW_MAX_OPACITY - GLOW_MIN_OPACITY) * swing
}

pub fn glow_finished(t_ms: f64) -> bool {
    t_ms >= GLOW_PERIOD_MS * f64::from(GLOW_ITERATIONS)
}

/// One celebration particle. Positions are precomputed offsets from the burst
/// origin; the renderer only has to interpolate toward `peak` and then let the
/// gravity `fall` pull the particle down while it rotates and fades.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub angle_rad: f64,
    pub distance: f64,
    pub peak_x: f64,
    pub peak_y: f64,
    pub fall: f64,
    pub rotation_deg: f64,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub size: f64,
}

/// Burst of independent one-shot particles: random direction, randomized
/// outward distance, gravity drop after the peak, spin and fade. Particles are
/// never reused across bursts.
pub fn burst_particles<R: Rng>(rng: &mut R) -> Vec<Particle> {
    (0..PARTICLE_COUNT)
        .map(|_| {
            let angle_rad = rng.gen_range(0.0..std::f64::consts::TAU);
            let distance = rng.gen_range(PARTICLE_MIN_DISTANCE..PARTICLE_MAX_DISTANCE);
            let delay_ms = rng.gen_range(0.0..PARTICLE_MAX_DELAY_MS);
            let longest = BURST_MAX_DURATION_MS - delay_ms;
            let duration_ms =
                rng.gen_range(PARTICLE_MIN_DURATION_MS..PARTICLE_MAX_DURATION_MS.min(longest));

            Particle {
                angle_rad,
                distance,
                peak_x: angle_rad.cos() * distance,
                peak_y: angle_rad.sin() * distance,
                fall: rng.gen_range(PARTICLE_MIN_FALL..PARTICLE_MAX_FALL),
                rotation_deg: rng.gen_range(-180.0..180.0),
                duration_ms,
                delay_ms,
                size: rng.gen_range(PARTICLE_MIN_SIZE..PARTICLE_MAX_SIZE),
            }
        })
        .collect()
}

/// Frame-sampled state of the reveal choreography. A render loop calls
/// `step` once per frame and paints the result; dropping the loop mid-flight
/// is the only cancellation there is, and is harmless.
#[derive(Debug, Clone, PartialEq)]
pub struct RevealAnimation {
    spring: Spring,
    elapsed_ms: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealFrame {
    pub scale: f64,
    pub opacity: f64,
    pub glow_opacity: f64,
}

impl RevealAnimation {
    pub fn new() -> Self {
        Self {
            spring: Spring::scale_in(),
            elapsed_ms: 0.0,
        }
    }

    pub fn step(&mut self, dt_ms: f64) -> RevealFrame {
        self.elapsed_ms += dt_ms.max(0.0);
        self.spring.update();

        RevealFrame {
            scale: self.spring.position,
            opacity: (self.elapsed_ms / CARD_FADE_MS).clamp(0.0, 1.0),
            glow_opacity: glow_opacity(self.elapsed_ms),
        }
    }

    /// Everything has settled; the render loop can stop scheduling frames.
    pub fn is_finished(&self) -> bool {
        self.spring.position == self.spring.target
            && self.spring.velocity == 0.0
            && self.elapsed_ms >= CARD_FADE_MS
            && glow_finished(self.elapsed_ms)
    }
}

impl Default for RevealAnimation {
    fn default() -> Self {
        Self::new()
    }
}
