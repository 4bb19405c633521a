//! Channel isolation: scale R, G and B by independent percentages.
//!
//! Pixel-wise, no spatial context. Alpha is preserved unchanged.
//! Percentages are not range-checked; values past 100 brighten a channel
//! until it saturates at 255 and negative values drive it to 0.

use crate::bitmap::{Bitmap, CHANNELS};
use crate::error::Result;

use super::core::{render_rows, store_clamped};

/// Scale each color channel by a percentage.
///
/// `out = channel * pct / 100` for R, G and B, stored with
/// [`store_clamped`] (ties to even). `(100, 100, 100)` is the identity.
///
/// # Arguments
/// * `input` - Source bitmap
/// * `red_pct`, `green_pct`, `blue_pct` - Per-channel scale in percent
///
/// # Returns
/// New bitmap with the same dimensions
pub fn isolate_channels(
    input: &Bitmap,
    red_pct: f64,
    green_pct: f64,
    blue_pct: f64,
) -> Result<Bitmap> {
    let pcts = [red_pct, green_pct, blue_pct];

    render_rows(input.width(), input.height(), |y, row| {
        for (x, out) in row.chunks_exact_mut(CHANNELS).enumerate() {
            let px = input.pixel(x, y);
            for c in 0..3 {
                out[c] = store_clamped(px[c] as f64 * pcts[c] / 100.0);
            }
            out[3] = px[3];
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_isolate_half() {
        let img = Bitmap::new(1, 1, vec![200, 100, 50, 255]).unwrap();
        let result = isolate_channels(&img, 50.0, 50.0, 50.0).unwrap();
        assert_eq!(result.pixel(0, 0), [100, 50, 25, 255]);
    }

    #[test]
    fn test_isolate_exact_ties_round_to_even() {
        // 201 * 50 / 100 = 100.5, 50 * 29 / 100 = 14.5, 3 * 50 / 100 = 1.5
        let img = Bitmap::new(1, 1, vec![201, 50, 3, 255]).unwrap();
        let result = isolate_channels(&img, 50.0, 29.0, 50.0).unwrap();
        assert_eq!(result.pixel(0, 0), [100, 14, 2, 255]);
    }

    #[test]
    fn test_isolate_identity() {
        let img = Bitmap::new(2, 1, vec![1, 2, 3, 4, 250, 128, 0, 77]).unwrap();
        let result = isolate_channels(&img, 100.0, 100.0, 100.0).unwrap();
        assert_eq!(result, img);
    }

    #[test]
    fn test_isolate_single_channel() {
        let img = Bitmap::filled(2, 2, [90, 180, 30, 200]).unwrap();
        let result = isolate_channels(&img, 0.0, 100.0, 0.0).unwrap();
        assert_eq!(result.pixel(1, 1), [0, 180, 0, 200]);
    }

    #[test]
    fn test_isolate_saturates_instead_of_wrapping() {
        let img = Bitmap::new(1, 1, vec![200, 100, 50, 10]).unwrap();

        let boosted = isolate_channels(&img, 150.0, 300.0, 100.0).unwrap();
        assert_eq!(boosted.pixel(0, 0), [255, 255, 50, 10]);

        let negative = isolate_channels(&img, -50.0, 100.0, -1.0).unwrap();
        assert_eq!(negative.pixel(0, 0), [0, 100, 0, 10]);
    }

    #[test]
    fn test_isolate_does_not_touch_input() {
        let img = Bitmap::filled(3, 3, [10, 20, 30, 40]).unwrap();
        let copy = img.clone();
        let _ = isolate_channels(&img, 0.0, 0.0, 0.0).unwrap();
        assert_eq!(img, copy);
    }
}
