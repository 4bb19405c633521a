//! Gaussian blur with a circular footprint.
//!
//! Every output pixel is the weighted average of the samples inside a disk
//! of the given radius, using clamp-to-edge lookups. All four channels,
//! alpha included, go through the same average.

use crate::bitmap::{Bitmap, CHANNELS};
use crate::error::Result;

use super::core::{render_rows, require_finite, to_channel, CircularKernel};

/// Apply Gaussian blur to an RGBA bitmap.
///
/// The kernel is the circularly masked Gaussian from [`CircularKernel`]
/// (sigma equal to the radius). Output channels are
/// `round(weighted_sum / weight_sum)`.
///
/// A radius of zero or below leaves only the center sample, so the source
/// is returned unchanged. Non-finite radii and radii above
/// [`MAX_KERNEL_RADIUS`](super::core::MAX_KERNEL_RADIUS) are rejected.
///
/// # Arguments
/// * `input` - Source bitmap
/// * `radius` - Mask radius in pixels
///
/// # Returns
/// Blurred bitmap with the same dimensions
pub fn gaussian_blur(input: &Bitmap, radius: f64) -> Result<Bitmap> {
    require_finite("blur radius", radius)?;
    if radius <= 0.0 {
        return Ok(input.clone());
    }

    let kernel = CircularKernel::new(radius)?;
    let taps = kernel.taps();

    render_rows(input.width(), input.height(), |y, row| {
        for (x, out) in row.chunks_exact_mut(CHANNELS).enumerate() {
            let mut sums = [0.0f64; CHANNELS];
            let mut weight_sum = 0.0f64;

            for tap in taps {
                let px = input.sample_clamped(x as isize + tap.dx, y as isize + tap.dy);
                for c in 0..CHANNELS {
                    sums[c] += px[c] as f64 * tap.weight;
                }
                weight_sum += tap.weight;
            }

            for c in 0..CHANNELS {
                out[c] = to_channel(sums[c] / weight_sum);
            }
        }
    })
}
