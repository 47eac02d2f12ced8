use serde::{Deserialize, Serialize};

/// One sinusoidal term of the displacement field
///
/// Evaluates to `amplitude * sin(coordinate * frequency + t * speed)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveTerm {
    /// Spatial frequency applied to the planar coordinate
    pub frequency: f32,
    /// Phase speed in radians per second
    pub speed: f32,
    /// Vertical amplitude in world units
    pub amplitude: f32,
}

impl WaveTerm {
    pub const fn new(frequency: f32, speed: f32, amplitude: f32) -> Self {
        Self {
            frequency,
            speed,
            amplitude,
        }
    }

    #[inline]
    fn evaluate(&self, coordinate: f32, t: f32) -> f32 {
        (coordinate * self.frequency + t * self.speed).sin() * self.amplitude
    }
}

/// Coefficients of the three-term displacement field
///
/// One term runs along x, one along y, one along the diagonal (x + y).
/// The mix of distinct frequencies and phase speeds keeps the motion from
/// reading as periodic. Pure data - `displace` has no hidden state, so the
/// same (x, y, t) always produces the same height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WavePreset {
    pub x: WaveTerm,
    pub y: WaveTerm,
    pub diagonal: WaveTerm,
}

impl WavePreset {
    /// Landing-page surface: larger swells, faster diagonal travel
    pub const HERO: Self = Self {
        x: WaveTerm::new(0.8, 0.6, 0.15),
        y: WaveTerm::new(0.6, 0.4, 0.12),
        diagonal: WaveTerm::new(0.5, 0.8, 0.08),
    };

    /// Sign-in panel surface: calmer amplitudes, slower diagonal
    pub const PANEL: Self = Self {
        x: WaveTerm::new(0.8, 0.5, 0.12),
        y: WaveTerm::new(0.6, 0.4, 0.10),
        diagonal: WaveTerm::new(0.4, 0.7, 0.07),
    };

    /// Vertical offset at planar position (x, y) and elapsed time t
    #[inline]
    pub fn displace(&self, x: f32, y: f32, t: f32) -> f32 {
        self.x.evaluate(x, t) + self.y.evaluate(y, t) + self.diagonal.evaluate(x + y, t)
    }

    /// Largest possible |height| the field can produce
    pub fn max_amplitude(&self) -> f32 {
        self.x.amplitude.abs() + self.y.amplitude.abs() + self.diagonal.amplitude.abs()
    }

    /// Upper bound on |d height / dt| at any point
    ///
    /// Bounds how far a vertex can move between two samples: for a time step
    /// dt the per-vertex height delta never exceeds `max_rate() * dt`.
    pub fn max_rate(&self) -> f32 {
        (self.x.amplitude * self.x.speed).abs()
            + (self.y.amplitude * self.y.speed).abs()
            + (self.diagonal.amplitude * self.diagonal.speed).abs()
    }
}
