//! Animation framework for the portfolio UI
//!
//! Tick-driven decorative effects: typewriter reveals, count-up numbers,
//! the matrix rain wallpaper, and pulse accents. Each animation owns its
//! own small state, terminates on its own (where finite), and never
//! coordinates with another — the event loop just feeds ticks.

use std::time::{Duration, Instant};

// ============================================================================
// Animation Trait
// ============================================================================

/// Trait for tick-driven terminal effects
pub trait Animation: Send + Sync {
    /// Generate the frame for a given tick
    fn frame(&self, tick: u64) -> String;

    /// Check if the animation has completed (for finite animations)
    fn is_complete(&self, tick: u64) -> bool {
        let _ = tick;
        false // Most animations loop indefinitely
    }

    /// Get the recommended frame rate (FPS)
    fn frame_rate(&self) -> u32 {
        10
    }
}

// ============================================================================
// Frame Presets
// ============================================================================

/// Pulse frames for the status dot in the top panel
pub const PULSE_FRAMES: &[&str] = &["●", "◉", "○", "◉"];

/// Block progress characters (light to dark)
pub const PROGRESS_BLOCKS: &[char] = &['░', '▒', '▓', '█'];

/// Characters the matrix rain draws from
pub const RAIN_GLYPHS: &[char] = &[
    '0', '1', 'ﾊ', 'ﾐ', 'ﾋ', 'ｰ', 'ｳ', 'ｼ', 'ﾅ', 'ﾓ', 'ﾆ', 'ｻ', 'ﾜ', 'ﾂ', 'ｵ', 'ﾘ',
];

// ============================================================================
// Animator Controller
// ============================================================================

/// Animation controller with timing
pub struct Animator {
    frame_rate: u32,
    last_frame: Instant,
    tick: u64,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new(10)
    }
}

impl Animator {
    /// Create a new animator with the given frame rate
    pub fn new(frame_rate: u32) -> Self {
        Self {
            frame_rate,
            last_frame: Instant::now(),
            tick: 0,
        }
    }

    /// Check if it's time to advance and return the new frame
    pub fn update(&mut self) -> Option<u64> {
        let frame_duration = Duration::from_millis(1000 / self.frame_rate as u64);
        if self.last_frame.elapsed() >= frame_duration {
            self.last_frame = Instant::now();
            self.tick += 1;
            Some(self.tick)
        } else {
            None
        }
    }

    /// Get the current tick
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Reset the animator
    pub fn reset(&mut self) {
        self.tick = 0;
        self.last_frame = Instant::now();
    }
}

// ============================================================================
// Typewriter
// ============================================================================

/// Reveals a string one character per tick, then holds.
pub struct Typewriter {
    text: String,
    chars_per_tick: usize,
}

impl Typewriter {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            chars_per_tick: 1,
        }
    }

    pub fn with_speed(mut self, chars_per_tick: usize) -> Self {
        self.chars_per_tick = chars_per_tick.max(1);
        self
    }
}

impl Animation for Typewriter {
    fn frame(&self, tick: u64) -> String {
        let visible = (tick as usize).saturating_mul(self.chars_per_tick);
        self.text.chars().take(visible).collect()
    }

    fn is_complete(&self, tick: u64) -> bool {
        (tick as usize).saturating_mul(self.chars_per_tick) >= self.text.chars().count()
    }
}

// ============================================================================
// Count-Up
// ============================================================================

/// Animates a number from zero to a target, then stops on the target.
///
/// The terminal stand-in for the dashboard's requestAnimationFrame
/// count-ups: self-terminating once the target is reached.
pub struct CountUp {
    target: u64,
    ticks_to_target: u64,
}

impl CountUp {
    pub fn new(target: u64, ticks_to_target: u64) -> Self {
        Self {
            target,
            ticks_to_target: ticks_to_target.max(1),
        }
    }

    /// Current value at a tick, clamped to the target.
    pub fn value(&self, tick: u64) -> u64 {
        if tick >= self.ticks_to_target {
            return self.target;
        }
        self.target * tick / self.ticks_to_target
    }
}

impl Animation for CountUp {
    fn frame(&self, tick: u64) -> String {
        self.value(tick).to_string()
    }

    fn is_complete(&self, tick: u64) -> bool {
        tick >= self.ticks_to_target
    }
}

// ============================================================================
// Matrix Rain
// ============================================================================

/// One falling column of the matrix wallpaper.
#[derive(Debug, Clone)]
struct RainColumn {
    x: u16,
    head: i32,
    length: u16,
    speed: u8,
}

/// The matrix-theme wallpaper: glyph columns falling at random speeds.
///
/// Columns respawn at the top with fresh geometry once they leave the
/// bottom of the area; no state is shared between columns.
pub struct MatrixRain {
    columns: Vec<RainColumn>,
    width: u16,
    height: u16,
}

impl MatrixRain {
    pub fn new(width: u16, height: u16) -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        let count = (width / 3).max(1);
        let columns = (0..count)
            .map(|_| RainColumn {
                x: rng.random_range(0..width.max(1)),
                head: -(rng.random_range(0..height.max(1) as i32 + 1)),
                length: rng.random_range(3..(height / 2).max(4)),
                speed: rng.random_range(1..4),
            })
            .collect();
        Self {
            columns,
            width,
            height,
        }
    }

    /// Resize the field, respawning the columns.
    pub fn resize(&mut self, width: u16, height: u16) {
        if width != self.width || height != self.height {
            *self = MatrixRain::new(width, height);
        }
    }

    /// Advance one tick and return the visible glyph cells as
    /// `(x, y, glyph, is_head)`.
    pub fn advance(&mut self, tick: u64) -> Vec<(u16, u16, char, bool)> {
        use rand::Rng;
        let mut rng = rand::rng();
        let mut cells = Vec::new();
        for column in &mut self.columns {
            if tick % column.speed as u64 == 0 {
                column.head += 1;
            }
            if column.head - column.length as i32 > self.height as i32 {
                column.head = 0;
                column.x = rng.random_range(0..self.width.max(1));
                column.length = rng.random_range(3..(self.height / 2).max(4));
                column.speed = rng.random_range(1..4);
            }
            for offset in 0..column.length {
                let y = column.head - offset as i32;
                if y >= 0 && y < self.height as i32 {
                    let glyph = RAIN_GLYPHS[rng.random_range(0..RAIN_GLYPHS.len())];
                    cells.push((column.x, y as u16, glyph, offset == 0));
                }
            }
        }
        cells
    }
}
