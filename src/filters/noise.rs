//! Median noise reduction.
//!
//! Removes salt-and-pepper noise with repeated 3×3 median passes over the
//! color channels. Alpha is never smoothed.

use crate::bitmap::{Bitmap, Channel, CHANNELS};
use crate::error::Result;

use super::core::render_rows;

/// Side length of the median window.
const WINDOW: isize = 3;

/// One 3×3 median pass.
///
/// R, G and B are gathered as three separate 9-sample sets with
/// clamp-to-edge lookups, sorted, and the middle element kept. Alpha is
/// copied from the same pixel of `input`.
pub fn median_round(input: &Bitmap) -> Result<Bitmap> {
    let half = WINDOW / 2;
    let samples = (WINDOW * WINDOW) as usize;

    render_rows(input.width(), input.height(), |y, row| {
        let mut channels = [[0u8; 9]; 3];

        for (x, out) in row.chunks_exact_mut(CHANNELS).enumerate() {
            let mut n = 0;
            for dy in -half..=half {
                for dx in -half..=half {
                    let px = input.sample_clamped(x as isize + dx, y as isize + dy);
                    for c in 0..3 {
                        channels[c][n] = px[c];
                    }
                    n += 1;
                }
            }

            for c in 0..3 {
                channels[c].sort_unstable();
                out[c] = channels[c][samples / 2];
            }
            out[3] = input.get(x, y, Channel::Alpha);
        }
    })
}

/// Apply `rounds` median passes, each reading the previous pass's output.
///
/// Always performs exactly `rounds` passes; there is no early exit when the
/// image stops changing. Zero rounds returns a copy of the input.
///
/// # Arguments
/// * `input` - Source bitmap
/// * `rounds` - Number of passes
///
/// # Returns
/// Filtered bitmap with the same dimensions
pub fn median(input: &Bitmap, rounds: usize) -> Result<Bitmap> {
    let mut current = input.clone();
    for _ in 0..rounds {
        current = median_round(&current)?;
    }
    Ok(current)
}
