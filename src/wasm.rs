//! WebAssembly exports.
//!
//! These functions are exposed to JavaScript via wasm-bindgen and take the
//! flat RGBA bytes of a canvas `ImageData` (length = width * height * 4).
//! Shape or parameter errors are thrown as JS `Error`s.

use wasm_bindgen::prelude::*;

use crate::bitmap::Bitmap;
use crate::filters;
use crate::pipeline::{FilterConfiguration, FilterPipeline};

// ============================================================================
// Pipeline
// ============================================================================

/// Run the full pipeline on an `ImageData` buffer.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `apply_median` / `apply_blur` - Stage toggles
/// * `grayscale_amount` - 0-255, 0 disables grayscale blending
/// * `red_percent`, `green_percent`, `blue_percent` - Channel scales
///
/// # Returns
/// Flat array of filtered RGBA bytes
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn apply_filters_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    apply_median: bool,
    apply_blur: bool,
    grayscale_amount: f64,
    red_percent: f64,
    green_percent: f64,
    blue_percent: f64,
) -> Result<Vec<u8>, JsError> {
    let config = FilterConfiguration {
        apply_median,
        apply_blur,
        grayscale_amount,
        red_percent,
        green_percent,
        blue_percent,
    };
    Ok(FilterPipeline::new().run_rgba(data, width, height, &config)?)
}

// ============================================================================
// Individual filters
// ============================================================================

/// Scale R, G, B by percentages.
#[wasm_bindgen]
pub fn isolate_channels_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    red_percent: f64,
    green_percent: f64,
    blue_percent: f64,
) -> Result<Vec<u8>, JsError> {
    let source = Bitmap::new(width, height, data.to_vec())?;
    let result = filters::isolate_channels(&source, red_percent, green_percent, blue_percent)?;
    Ok(result.into_raw())
}

/// Blend toward the RGB average, amount 0-255.
#[wasm_bindgen]
pub fn grayscale_blend_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    amount: f64,
) -> Result<Vec<u8>, JsError> {
    let source = Bitmap::new(width, height, data.to_vec())?;
    Ok(filters::grayscale_blend(&source, amount)?.into_raw())
}

/// Circularly masked Gaussian blur.
#[wasm_bindgen]
pub fn gaussian_blur_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    radius: f64,
) -> Result<Vec<u8>, JsError> {
    let source = Bitmap::new(width, height, data.to_vec())?;
    Ok(filters::gaussian_blur(&source, radius)?.into_raw())
}

/// Repeated 3x3 median.
#[wasm_bindgen]
pub fn median_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    rounds: usize,
) -> Result<Vec<u8>, JsError> {
    let source = Bitmap::new(width, height, data.to_vec())?;
    Ok(filters::median(&source, rounds)?.into_raw())
}
