//! Core utilities shared by the filters.
//!
//! - Channel quantization (float to 8-bit, two rounding rules)
//! - Row-parallel output rendering
//! - Circularly masked Gaussian kernel generation

use rayon::prelude::*;

use crate::bitmap::{Bitmap, CHANNELS};
use crate::error::{FilterError, Result};

/// Largest radius accepted by [`CircularKernel::new`].
pub const MAX_KERNEL_RADIUS: f64 = 512.0;

/// Quantize an explicitly rounded average to the 8-bit domain.
///
/// Rounds half up, then saturates: negatives become 0, anything past 255
/// becomes 255. NaN maps to 0. Used where a value is rounded before it is
/// stored (blur averages).
#[inline]
pub fn to_channel(v: f64) -> u8 {
    (v + 0.5).floor().clamp(0.0, 255.0) as u8
}

/// Store a raw float into a clamped byte.
///
/// Rounds to nearest with ties to even, then saturates; NaN maps to 0.
/// This is the conversion a canvas `ImageData` buffer applies on write, and
/// it is used by the pixel-wise filters that write unrounded products.
#[inline]
pub fn store_clamped(v: f64) -> u8 {
    v.round_ties_even().clamp(0.0, 255.0) as u8
}

/// Allocate a fresh bitmap and fill it row by row in parallel.
///
/// `fill(y, row)` receives the output row index and its `width * 4` bytes.
/// Each row is written by exactly one worker, so the result does not depend
/// on scheduling.
pub fn render_rows<F>(width: usize, height: usize, fill: F) -> Result<Bitmap>
where
    F: Fn(usize, &mut [u8]) + Sync + Send,
{
    let stride = width * CHANNELS;
    let mut pixels = vec![0u8; stride * height];
    pixels
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| fill(y, row));
    Bitmap::new(width, height, pixels)
}

/// Reject NaN and infinities for parameters that drive loop bounds or weights.
pub fn require_finite(name: &str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FilterError::InvalidParameter(format!(
            "{} must be finite, got {}",
            name, value
        )))
    }
}

/// One contributing sample of a [`CircularKernel`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tap {
    pub dx: isize,
    pub dy: isize,
    pub weight: f64,
}

/// Gaussian kernel with a circular footprint.
///
/// Built by scanning a square window of half-extent
/// `floor(radius) * 2 + 1` in row-major order (`dy` outer, `dx` inner) and
/// keeping only offsets with `dx² + dy² <= radius²`. Taps keep that scan
/// order so weighted sums accumulate in the same sequence as a direct scan.
///
/// Weights are the unnormalized 2D Gaussian
/// `exp(-d² / (2·r²)) / (2π·r²)` with sigma equal to the radius.
#[derive(Debug, Clone, PartialEq)]
pub struct CircularKernel {
    radius: f64,
    half_extent: isize,
    taps: Vec<Tap>,
}

impl CircularKernel {
    /// Build the kernel for a finite radius in `(0, MAX_KERNEL_RADIUS]`.
    pub fn new(radius: f64) -> Result<Self> {
        require_finite("blur radius", radius)?;
        if radius <= 0.0 || radius > MAX_KERNEL_RADIUS {
            return Err(FilterError::InvalidParameter(format!(
                "kernel radius must be in (0, {}], got {}",
                MAX_KERNEL_RADIUS, radius
            )));
        }

        let half_extent = radius.floor() as isize * 2 + 1;
        let radius_sq = radius * radius;
        let norm = std::f64::consts::PI * 2.0 * radius_sq;

        let mut taps = Vec::new();
        for dy in -half_extent..=half_extent {
            for dx in -half_extent..=half_extent {
                let dist_sq = (dx * dx + dy * dy) as f64;
                if dist_sq <= radius_sq {
                    let weight = (-dist_sq / (2.0 * radius_sq)).exp() / norm;
                    taps.push(Tap { dx, dy, weight });
                }
            }
        }

        Ok(CircularKernel {
            radius,
            half_extent,
            taps,
        })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Half-width of the square window scanned to build the mask.
    pub fn half_extent(&self) -> isize {
        self.half_extent
    }

    pub fn taps(&self) -> &[Tap] {
        &self.taps
    }
}
