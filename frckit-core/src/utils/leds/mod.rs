//! LED pattern abstraction for addressable strips.
//!
//! A pattern is a pure per-frame computation: given a pixel index and the
//! elapsed time it produces a color, with nothing retained between calls.
//! `LedStrip` runs the active pattern over a frame buffer and flushes it
//! through a `SmartLedsWrite` driver.

pub mod color;

use alloc::{boxed::Box, vec, vec::Vec};

use smart_leds_trait::{SmartLedsWrite, RGB8};

/// Per-frame color source for one strip.
pub enum LedPattern {
    /// Every pixel is the same fixed color.
    Solid(RGB8),
    /// Color recomputed from `(pixel index, elapsed seconds)` on every call.
    Dynamic(Box<dyn Fn(usize, f32) -> RGB8 + Send>),
}

impl LedPattern {
    /// Pattern showing a single fixed color.
    pub fn solid(color: RGB8) -> Self {
        LedPattern::Solid(color)
    }

    /// Pattern evaluating `f` per pixel per frame.
    pub fn dynamic(f: impl Fn(usize, f32) -> RGB8 + Send + 'static) -> Self {
        LedPattern::Dynamic(Box::new(f))
    }

    /// Evaluate the pattern for the pixel at `index` after `elapsed` seconds.
    pub fn color_at(&self, index: usize, elapsed: f32) -> RGB8 {
        match self {
            LedPattern::Solid(c) => *c,
            LedPattern::Dynamic(f) => f(index, elapsed),
        }
    }

    /// Write the color for one pixel into the frame buffer at `index`.
    pub fn process_into(&self, frame: &mut [RGB8], index: usize, elapsed: f32) {
        frame[index] = self.color_at(index, elapsed);
    }
}

/// Runs a pattern over a fixed-size frame and an addressable LED driver.
pub struct LedStrip<Driver> {
    driver: Driver,
    frame: Vec<RGB8>,
    pattern: LedPattern,
}

impl<Driver, E> LedStrip<Driver>
where
    Driver: SmartLedsWrite<Color = RGB8, Error = E>,
{
    /// Create a strip of `len` pixels over the given driver, initially off.
    pub fn new(driver: Driver, len: usize) -> Self {
        Self {
            driver,
            frame: vec![color::OFF; len],
            pattern: LedPattern::Solid(color::OFF),
        }
    }

    /// Number of pixels in the strip.
    pub fn len(&self) -> usize {
        self.frame.len()
    }

    /// Whether the strip has zero pixels.
    pub fn is_empty(&self) -> bool {
        self.frame.is_empty()
    }

    /// Swap the active pattern; takes effect on the next `tick`.
    pub fn set_pattern(&mut self, pattern: LedPattern) {
        self.pattern = pattern;
    }

    /// The currently active pattern.
    pub fn pattern(&self) -> &LedPattern {
        &self.pattern
    }

    /// The underlying LED driver.
    pub fn driver(&self) -> &Driver {
        &self.driver
    }

    /// Recompute every pixel for `elapsed` seconds and flush to the driver.
    pub fn tick(&mut self, elapsed: f32) -> Result<(), E> {
        for index in 0..self.frame.len() {
            self.pattern.process_into(&mut self.frame, index, elapsed);
        }
        self.driver.write(self.frame.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingDriver {
        frames: Vec<Vec<RGB8>>,
    }

    impl SmartLedsWrite for RecordingDriver {
        type Color = RGB8;
        type Error = core::convert::Infallible;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            self.frames.push(iterator.into_iter().map(Into::into).collect());
            Ok(())
        }
    }

    #[test]
    fn solid_pattern_writes_one_slot() {
        let pattern = LedPattern::solid(color::rgb8(10, 20, 30));
        let mut frame = [color::OFF; 4];
        pattern.process_into(&mut frame, 2, 1.5);
        assert_eq!(frame[2], color::rgb8(10, 20, 30));
        assert_eq!(frame[0], color::OFF);
    }

    #[test]
    fn dynamic_pattern_sees_index_and_time() {
        let pattern = LedPattern::dynamic(|index, elapsed| {
            color::rgb8(index as u8, elapsed as u8, 0)
        });
        assert_eq!(pattern.color_at(3, 7.0), color::rgb8(3, 7, 0));
        assert_eq!(pattern.color_at(3, 9.0), color::rgb8(3, 9, 0));
    }

    #[test]
    fn tick_flushes_the_whole_frame() {
        let mut strip = LedStrip::new(RecordingDriver { frames: Vec::new() }, 3);
        strip.set_pattern(LedPattern::dynamic(|index, _| color::rgb8(index as u8, 0, 0)));
        strip.tick(0.0).unwrap();
        strip.set_pattern(LedPattern::solid(color::WHITE));
        strip.tick(1.0).unwrap();

        let frames = &strip.driver.frames;
        assert_eq!(frames.len(), 2);
        assert_eq!(
            frames[0],
            vec![color::rgb8(0, 0, 0), color::rgb8(1, 0, 0), color::rgb8(2, 0, 0)]
        );
        assert_eq!(frames[1], vec![color::WHITE; 3]);
    }
}
