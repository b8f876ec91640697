//! # Output Module
//!
//! Writes rendered pixels as a plain-text PPM (P3) image to any byte sink.
//!
//! The format is a three line header (`P3`, `<width> <height>`, `255`)
//! followed by one `r g b` line per pixel in row-major order. Channels are
//! clamped to [0.0, 1.0] and scaled to integers with `floor(255.999 * c)`.
//!
//! Write errors from the sink are returned as-is; the caller decides whether
//! to abort, and the renderer always does.

use std::io::{self, Write};

use crate::vec3::Colour;

/// Largest channel value written to the header.
pub const MAX_CHANNEL_VALUE: u32 = 255;

/// Streaming P3 writer over a byte sink.
#[derive(Debug)]
pub struct PpmWriter<W: Write> {
    inner: W,
}

impl<W: Write> PpmWriter<W> {
    /// Wrap a sink. Nothing is written until [`write_header`](Self::write_header).
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Write the `P3` header for an image of the given size.
    pub fn write_header(&mut self, width: u32, height: u32) -> io::Result<()> {
        writeln!(self.inner, "P3")?;
        writeln!(self.inner, "{width} {height}")?;
        writeln!(self.inner, "{MAX_CHANNEL_VALUE}")
    }

    /// Write one pixel as a `r g b` line.
    pub fn write_pixel(&mut self, colour: Colour) -> io::Result<()> {
        let [r, g, b] = to_rgb8(colour);
        writeln!(self.inner, "{r} {g} {b}")
    }

    /// Write a full row, left to right.
    pub fn write_row(&mut self, row: &[Colour]) -> io::Result<()> {
        row.iter().try_for_each(|&colour| self.write_pixel(colour))
    }

    /// Flush the sink and hand it back.
    pub fn finish(mut self) -> io::Result<W> {
        self.inner.flush()?;
        Ok(self.inner)
    }
}

/// Convert a linear colour to 8-bit channels, clamping out-of-range values.
pub fn to_rgb8(colour: Colour) -> [u8; 3] {
    [
        channel_to_u8(colour.r()),
        channel_to_u8(colour.g()),
        channel_to_u8(colour.b()),
    ]
}

fn channel_to_u8(c: f32) -> u8 {
    // NaN clamps to NaN and then casts to 0
    (255.999 * c.clamp(0.0, 1.0)) as u8
}
