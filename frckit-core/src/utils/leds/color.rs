//! Color construction helpers for addressable LEDs.
//!
//! Channels are accepted either as `0.0..=1.0` fractions or as 8-bit
//! integers. Fractional HSV inputs are scaled by 255 and truncated toward
//! zero before conversion; the on-robot color tuning depends on that exact
//! behavior, so do not change it to rounding.

use smart_leds::hsv::{hsv2rgb, Hsv};
use smart_leds_trait::RGB8;

/// All channels off.
pub const OFF: RGB8 = RGB8 { r: 0, g: 0, b: 0 };
/// All channels full.
pub const WHITE: RGB8 = RGB8 {
    r: 255,
    g: 255,
    b: 255,
};
/// Full red.
pub const RED: RGB8 = RGB8 { r: 255, g: 0, b: 0 };
/// Full green.
pub const GREEN: RGB8 = RGB8 { r: 0, g: 255, b: 0 };
/// Full blue.
pub const BLUE: RGB8 = RGB8 { r: 0, g: 0, b: 255 };
/// Red plus green.
pub const YELLOW: RGB8 = RGB8 {
    r: 255,
    g: 255,
    b: 0,
};
/// Green plus blue.
pub const CYAN: RGB8 = RGB8 {
    r: 0,
    g: 255,
    b: 255,
};
/// Red plus blue.
pub const MAGENTA: RGB8 = RGB8 {
    r: 255,
    g: 0,
    b: 255,
};

/// Color from fractional RGB channels in `0.0..=1.0`, rounded to 8 bits.
pub fn rgb(r: f32, g: f32, b: f32) -> RGB8 {
    RGB8 {
        r: channel(r),
        g: channel(g),
        b: channel(b),
    }
}

/// Color from 8-bit RGB channels.
pub fn rgb8(r: u8, g: u8, b: u8) -> RGB8 {
    RGB8 { r, g, b }
}

/// Color from fractional HSV channels in `0.0..=1.0`.
///
/// Each channel is scaled by 255 and truncated toward zero, so
/// `hsv(0.5, 1.0, 1.0)` is exactly `hsv8(127, 255, 255)`.
pub fn hsv(h: f32, s: f32, v: f32) -> RGB8 {
    hsv8((h * 255.0) as u8, (s * 255.0) as u8, (v * 255.0) as u8)
}

/// Color from 8-bit HSV channels; hue covers a full turn over `0..=255`.
pub fn hsv8(h: u8, s: u8, v: u8) -> RGB8 {
    hsv2rgb(Hsv {
        hue: h,
        sat: s,
        val: v,
    })
}

fn channel(fraction: f32) -> u8 {
    (fraction * 255.0 + 0.5) as u8
}
