//! In-memory RGBA raster.
//!
//! A [`Bitmap`] wraps an `ndarray` of shape `(height, width, 4)` in standard
//! row-major layout, which is byte-for-byte the layout of a canvas
//! `ImageData` buffer: top-left origin, four channel bytes per pixel.

use ndarray::{Array3, ArrayView3};

use crate::error::{FilterError, Result};

/// Channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// One of the four per-pixel components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

impl Channel {
    /// Offset of this channel inside a pixel record.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
            Channel::Alpha => 3,
        }
    }
}

/// Map a possibly out-of-range coordinate onto `[0, len - 1]`.
///
/// This is the single edge policy used by every neighbourhood filter:
/// lookups past a border re-sample the nearest edge pixel.
#[inline]
pub fn clamp_coord(v: isize, len: usize) -> usize {
    v.clamp(0, len as isize - 1) as usize
}

/// RGBA image with positive dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    data: Array3<u8>,
}

impl Bitmap {
    /// Build a bitmap from row-major RGBA bytes.
    ///
    /// # Errors
    /// * `InvalidParameter` if either dimension is zero or the byte length
    ///   overflows `usize`
    /// * `ShapeMismatch` if `pixels.len() != width * height * 4`
    pub fn new(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self> {
        let expected = byte_len(width, height)?;
        if pixels.len() != expected {
            return Err(FilterError::ShapeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        let data = Array3::from_shape_vec((height, width, CHANNELS), pixels).map_err(|_| {
            FilterError::ShapeMismatch {
                expected,
                actual: expected,
            }
        })?;
        Ok(Bitmap { data })
    }

    /// Bitmap where every pixel is `rgba`.
    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> Result<Self> {
        let len = byte_len(width, height)?;
        let mut pixels = Vec::new();
        pixels.try_reserve_exact(len).map_err(|e| {
            FilterError::InvalidParameter(format!(
                "cannot allocate {}x{} bitmap: {}",
                width, height, e
            ))
        })?;
        for _ in 0..width * height {
            pixels.extend_from_slice(&rgba);
        }
        Bitmap::new(width, height, pixels)
    }

    /// Adopt an `(height, width, 4)` array.
    ///
    /// Non-standard layouts (e.g. transposed views made owned) are copied
    /// into row-major order first.
    pub fn from_array(data: Array3<u8>) -> Result<Self> {
        let (height, width, channels) = data.dim();
        check_dimensions(width, height)?;
        if channels != CHANNELS {
            return Err(FilterError::ShapeMismatch {
                expected: width * height * CHANNELS,
                actual: data.len(),
            });
        }
        let data = if data.is_standard_layout() {
            data
        } else {
            data.as_standard_layout().into_owned()
        };
        Ok(Bitmap { data })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    /// Read one channel byte. Panics if `(x, y)` is outside the image.
    #[inline]
    pub fn get(&self, x: usize, y: usize, channel: Channel) -> u8 {
        self.data[[y, x, channel.index()]]
    }

    /// Write one channel byte. Panics if `(x, y)` is outside the image.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, channel: Channel, value: u8) {
        self.data[[y, x, channel.index()]] = value;
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        [
            self.data[[y, x, 0]],
            self.data[[y, x, 1]],
            self.data[[y, x, 2]],
            self.data[[y, x, 3]],
        ]
    }

    pub fn set_pixel(&mut self, x: usize, y: usize, rgba: [u8; 4]) {
        for (c, v) in rgba.into_iter().enumerate() {
            self.data[[y, x, c]] = v;
        }
    }

    /// Read a pixel with clamp-to-edge addressing on both axes.
    #[inline]
    pub fn sample_clamped(&self, x: isize, y: isize) -> [u8; 4] {
        let sx = clamp_coord(x, self.width());
        let sy = clamp_coord(y, self.height());
        self.pixel(sx, sy)
    }

    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.data.view()
    }

    pub fn into_array(self) -> Array3<u8> {
        self.data
    }

    /// Flat row-major RGBA bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data.into_raw_vec_and_offset().0
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(FilterError::InvalidParameter(format!(
            "bitmap dimensions must be positive, got {}x{}",
            width, height
        )));
    }
    Ok(())
}

/// `width * height * 4`, rejecting zero dimensions and overflow.
fn byte_len(width: usize, height: usize) -> Result<usize> {
    check_dimensions(width, height)?;
    width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or_else(|| {
            FilterError::InvalidParameter(format!(
                "bitmap dimensions {}x{} overflow the byte length",
                width, height
            ))
        })
}
