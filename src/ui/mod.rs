//! UI building blocks shared by the desktop and compact shells.

pub mod animations;
pub mod boot;
pub mod theme;

pub use animations::{Animation, Animator, CountUp, MatrixRain, Typewriter};
pub use boot::{BootSequence, BOOT_STEPS};
pub use theme::{current_theme, current_theme_id, set_theme, ThemeColors, ThemeId};
