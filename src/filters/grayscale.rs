//! Grayscale blend filter.
//!
//! Pulls each pixel toward its luminance, where luminance is the plain
//! average of R, G and B (no channel weighting, no gamma handling).
//! `amount` runs from 0 (untouched) to 255 (fully desaturated).

use crate::bitmap::{Bitmap, CHANNELS};
use crate::error::Result;

use super::core::{render_rows, require_finite, store_clamped};

/// Slider value giving full desaturation.
pub const FULL_GRAYSCALE: f64 = 255.0;

/// Blend RGB toward the unweighted channel average.
///
/// With `factor = amount / 255`, each color channel becomes
/// `channel * (1 - factor) + gray * factor`. Alpha is preserved.
/// Amounts outside `[0, 255]` extrapolate and saturate. Results are stored
/// with [`store_clamped`] (ties to even).
///
/// # Arguments
/// * `input` - Source bitmap
/// * `amount` - Blend amount on the 0-255 slider scale
///
/// # Returns
/// New bitmap with the same dimensions
pub fn grayscale_blend(input: &Bitmap, amount: f64) -> Result<Bitmap> {
    require_finite("grayscale amount", amount)?;
    let factor = amount / FULL_GRAYSCALE;
    let keep = 1.0 - factor;

    render_rows(input.width(), input.height(), |y, row| {
        for (x, out) in row.chunks_exact_mut(CHANNELS).enumerate() {
            let px = input.pixel(x, y);
            let r = px[0] as f64;
            let g = px[1] as f64;
            let b = px[2] as f64;
            let gray = (r + g + b) / 3.0;

            out[0] = store_clamped(r * keep + gray * factor);
            out[1] = store_clamped(g * keep + gray * factor);
            out[2] = store_clamped(b * keep + gray * factor);
            out[3] = px[3];
        }
    })
}
