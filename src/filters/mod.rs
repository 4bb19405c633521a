//! Filter modules for the RGBA pipeline.
//!
//! ## Format
//!
//! Every filter takes a borrowed [`Bitmap`](crate::Bitmap) (8-bit RGBA,
//! row-major) and returns a freshly allocated one of the same size. Inputs
//! are never mutated.
//!
//! ## Architecture
//!
//! - **Clamp-to-edge** - Neighbourhood filters read through
//!   [`Bitmap::sample_clamped`](crate::Bitmap::sample_clamped)
//! - **Saturate, never wrap** - Pixel-wise products are stored with
//!   [`core::store_clamped`] (ties to even); blur averages are rounded half
//!   up with [`core::to_channel`]
//! - **Thread-safe** - Output rows are rendered in parallel with rayon
//!
//! ## Filters
//!
//! - **Pixel-wise**: channel isolation, grayscale blend
//! - **Neighbourhood**: Gaussian blur (alpha blurred), median (alpha kept)

pub mod core;
pub mod color_adjust;
pub mod grayscale;
pub mod blur;
pub mod noise;

pub use blur::gaussian_blur;
pub use color_adjust::isolate_channels;
pub use grayscale::grayscale_blend;
pub use noise::{median, median_round};
