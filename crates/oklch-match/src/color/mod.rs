//! Color types and the hex → OKLCH conversion pipeline
//!
//! Every step of the pipeline has its own type so a value can only be fed to
//! the next stage it is valid for:
//!
//! ```text
//! "#4f46e5" -> Rgb -> LinearRgb -> Xyz -> Oklab -> Oklch
//! ```
//!
//! # Example
//!
//! ```
//! use oklch_match::color::{hex_to_oklch, hex_to_rgb, Rgb};
//!
//! let rgb = hex_to_rgb("#4F46E5").unwrap();
//! assert_eq!(rgb, Rgb::new(0x4f, 0x46, 0xe5));
//!
//! let oklch = hex_to_oklch("4f46e5").unwrap();
//! assert!(oklch.l > 0.5 && oklch.l < 0.6);
//! ```
//!
//! Nothing in this module touches a catalog, logs, or performs I/O.

mod error;
mod linear_rgb;
mod oklab;
mod oklch;
mod rgb;
mod xyz;

pub use error::{ParseColorError, ParseOklchError};
pub use linear_rgb::LinearRgb;
pub use oklab::Oklab;
pub use oklch::Oklch;
pub use rgb::Rgb;
pub use xyz::Xyz;

/// Parse a 6-digit hex color (`#rrggbb` or `rrggbb`, any case).
///
/// Returns `None` for anything else, so callers can treat an unparseable
/// color as "infinitely far away" instead of handling an error.
#[inline]
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    hex.parse().ok()
}

/// Convert 8-bit sRGB channels to OKLCH.
///
/// Total for every input: black and white come out with zero chroma.
#[inline]
pub fn rgb_to_oklch(r: u8, g: u8, b: u8) -> Oklch {
    Oklch::from(Rgb::new(r, g, b))
}

/// Parse a hex color and convert it to OKLCH in one step.
#[inline]
pub fn hex_to_oklch(hex: &str) -> Option<Oklch> {
    hex_to_rgb(hex).map(Oklch::from)
}

/// Replace lightness and chroma of `base`, keeping its hue untouched.
///
/// Moods use this to retarget a color: the hue family the user picked must
/// survive the transform, so `h` is copied bit for bit.
#[inline]
pub fn adjust_oklch(base: Oklch, chroma: f64, lightness: f64) -> Oklch {
    Oklch {
        l: lightness,
        c: chroma,
        h: base.h,
    }
}
