//! pixelchain
//!
//! RGBA filter pipeline: optional median noise reduction, optional
//! Gaussian blur, optional grayscale blending and mandatory per-channel
//! scaling, applied in that fixed order. Python bindings via PyO3 and WASM
//! bindings for JavaScript are available behind the `python` and `wasm`
//! features.
//!
//! ## Image Format
//! A [`Bitmap`] is 8-bit RGBA, row-major, top-left origin, four bytes per
//! pixel: the same layout as a canvas `ImageData` buffer or a numpy array
//! of shape `(height, width, 4)`.
//!
//! ## Pipeline
//! ```
//! use pixelchain::{Bitmap, FilterConfiguration, FilterPipeline};
//!
//! let source = Bitmap::new(1, 1, vec![200, 100, 50, 255])?;
//! let config = FilterConfiguration::default().with_channels(50.0, 50.0, 50.0);
//! let result = FilterPipeline::new().run(&source, &config)?;
//! assert_eq!(result.pixel(0, 0), [100, 50, 25, 255]);
//! # Ok::<(), pixelchain::FilterError>(())
//! ```

pub mod bitmap;
pub mod error;
pub mod filters;
pub mod pipeline;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use bitmap::{Bitmap, Channel};
pub use error::{FilterError, Result};
pub use pipeline::{FilterConfiguration, FilterPipeline, Stage, BLUR_RADIUS, MEDIAN_ROUNDS};

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::bitmap::Bitmap;
    use crate::error::FilterError;
    use crate::filters;
    use crate::pipeline::{FilterConfiguration, FilterPipeline};

    impl From<FilterError> for PyErr {
        fn from(err: FilterError) -> PyErr {
            PyValueError::new_err(err.to_string())
        }
    }

    fn to_bitmap(image: &PyReadonlyArray3<'_, u8>) -> Result<Bitmap, FilterError> {
        Bitmap::from_array(image.as_array().to_owned())
    }

    // ========================================================================
    // Filters
    // ========================================================================

    /// Scale R, G, B by percentages (alpha preserved).
    #[pyfunction]
    pub fn isolate_channels<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        red: f64,
        green: f64,
        blue: f64,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = filters::isolate_channels(&to_bitmap(&image)?, red, green, blue)?;
        Ok(result.into_array().into_pyarray(py))
    }

    /// Blend toward the unweighted RGB average, amount 0-255.
    #[pyfunction]
    pub fn grayscale_blend<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        amount: f64,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = filters::grayscale_blend(&to_bitmap(&image)?, amount)?;
        Ok(result.into_array().into_pyarray(py))
    }

    /// Circularly masked Gaussian blur (alpha blurred too).
    #[pyfunction]
    #[pyo3(signature = (image, radius=5.0))]
    pub fn gaussian_blur<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        radius: f64,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = filters::gaussian_blur(&to_bitmap(&image)?, radius)?;
        Ok(result.into_array().into_pyarray(py))
    }

    /// Repeated 3x3 median (alpha preserved).
    #[pyfunction]
    #[pyo3(signature = (image, rounds=5))]
    pub fn median<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        rounds: usize,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = filters::median(&to_bitmap(&image)?, rounds)?;
        Ok(result.into_array().into_pyarray(py))
    }

    // ========================================================================
    // Pipeline
    // ========================================================================

    /// Run the full pipeline with the given control values.
    #[pyfunction]
    #[pyo3(signature = (
        image,
        apply_median=false,
        apply_blur=false,
        grayscale_amount=0.0,
        red=100.0,
        green=100.0,
        blue=100.0,
    ))]
    #[allow(clippy::too_many_arguments)]
    pub fn apply_filters<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        apply_median: bool,
        apply_blur: bool,
        grayscale_amount: f64,
        red: f64,
        green: f64,
        blue: f64,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let config = FilterConfiguration {
            apply_median,
            apply_blur,
            grayscale_amount,
            red_percent: red,
            green_percent: green,
            blue_percent: blue,
        };
        let source = to_bitmap(&image)?;
        let result = py.allow_threads(|| FilterPipeline::new().run(&source, &config))?;
        Ok(result.into_array().into_pyarray(py))
    }

    /// pixelchain extension module
    #[pymodule]
    pub fn pixelchain(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(isolate_channels, m)?)?;
        m.add_function(wrap_pyfunction!(grayscale_blend, m)?)?;
        m.add_function(wrap_pyfunction!(gaussian_blur, m)?)?;
        m.add_function(wrap_pyfunction!(median, m)?)?;
        m.add_function(wrap_pyfunction!(apply_filters, m)?)?;
        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::pixelchain;
