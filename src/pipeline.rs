//! Fixed-order filter pipeline.
//!
//! `Source → [median] → [blur] → [grayscale] → channel isolation → Result`
//!
//! Which optional stages run is decided by a [`FilterConfiguration`]
//! snapshot taken before the run. Each stage consumes the previous stage's
//! bitmap and allocates a new one; the caller's source is never modified.

use std::fmt;
use std::time::Instant;

use crate::bitmap::Bitmap;
use crate::error::Result;
use crate::filters;

/// Median passes per run when median filtering is enabled.
pub const MEDIAN_ROUNDS: usize = 5;

/// Blur radius used when blurring is enabled.
pub const BLUR_RADIUS: f64 = 5.0;

/// Control values for one pipeline run.
///
/// The default is the identity pipeline: no median, no blur, no grayscale,
/// all channels at 100%. Percentages and the grayscale amount are not
/// clamped; out-of-range values saturate the output.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct FilterConfiguration {
    pub apply_median: bool,
    pub apply_blur: bool,
    /// 0-255; 0 disables the grayscale stage
    pub grayscale_amount: f64,
    pub red_percent: f64,
    pub green_percent: f64,
    pub blue_percent: f64,
}

impl Default for FilterConfiguration {
    fn default() -> Self {
        FilterConfiguration {
            apply_median: false,
            apply_blur: false,
            grayscale_amount: 0.0,
            red_percent: 100.0,
            green_percent: 100.0,
            blue_percent: 100.0,
        }
    }
}

impl FilterConfiguration {
    pub fn with_median(mut self, enabled: bool) -> Self {
        self.apply_median = enabled;
        self
    }

    pub fn with_blur(mut self, enabled: bool) -> Self {
        self.apply_blur = enabled;
        self
    }

    pub fn with_grayscale(mut self, amount: f64) -> Self {
        self.grayscale_amount = amount;
        self
    }

    pub fn with_channels(mut self, red: f64, green: f64, blue: f64) -> Self {
        self.red_percent = red;
        self.green_percent = green;
        self.blue_percent = blue;
        self
    }
}

/// One step of a planned run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Stage {
    Median { rounds: usize },
    GaussianBlur { radius: f64 },
    GrayscaleBlend { amount: f64 },
    ChannelIsolation { red: f64, green: f64, blue: f64 },
}

impl Stage {
    fn apply(&self, input: &Bitmap) -> Result<Bitmap> {
        match *self {
            Stage::Median { rounds } => filters::median(input, rounds),
            Stage::GaussianBlur { radius } => filters::gaussian_blur(input, radius),
            Stage::GrayscaleBlend { amount } => filters::grayscale_blend(input, amount),
            Stage::ChannelIsolation { red, green, blue } => {
                filters::isolate_channels(input, red, green, blue)
            }
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Median { rounds } => write!(f, "median({} rounds)", rounds),
            Stage::GaussianBlur { radius } => write!(f, "gaussian_blur(r={})", radius),
            Stage::GrayscaleBlend { amount } => write!(f, "grayscale({})", amount),
            Stage::ChannelIsolation { red, green, blue } => {
                write!(f, "isolate({}%, {}%, {}%)", red, green, blue)
            }
        }
    }
}

/// Runs the filters in their fixed order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilterPipeline;

impl FilterPipeline {
    pub fn new() -> Self {
        FilterPipeline
    }

    /// Stages `config` selects, in execution order. Channel isolation is
    /// always last and always present.
    pub fn plan(&self, config: &FilterConfiguration) -> Vec<Stage> {
        let mut stages = Vec::with_capacity(4);
        if config.apply_median {
            stages.push(Stage::Median {
                rounds: MEDIAN_ROUNDS,
            });
        }
        if config.apply_blur {
            stages.push(Stage::GaussianBlur {
                radius: BLUR_RADIUS,
            });
        }
        if config.grayscale_amount > 0.0 {
            stages.push(Stage::GrayscaleBlend {
                amount: config.grayscale_amount,
            });
        }
        stages.push(Stage::ChannelIsolation {
            red: config.red_percent,
            green: config.green_percent,
            blue: config.blue_percent,
        });
        stages
    }

    /// Run the planned stages against `source`.
    ///
    /// Pure: identical inputs give bit-identical output. The first failing
    /// stage aborts the run and its error is returned.
    pub fn run(&self, source: &Bitmap, config: &FilterConfiguration) -> Result<Bitmap> {
        let stages = self.plan(config);
        log::debug!(
            "filtering {}x{} bitmap through {} stage(s)",
            source.width(),
            source.height(),
            stages.len()
        );

        let mut current: Option<Bitmap> = None;
        for stage in &stages {
            let input = current.as_ref().unwrap_or(source);
            current = Some(run_stage(stage, input)?);
        }
        Ok(current.unwrap_or_else(|| source.clone()))
    }

    /// [`run`](Self::run) over flat row-major RGBA bytes, as held by a
    /// canvas `ImageData`.
    ///
    /// # Errors
    /// * `ShapeMismatch` if `data.len() != width * height * 4`
    /// * `InvalidParameter` for zero or overflowing dimensions, or a failing
    ///   stage
    pub fn run_rgba(
        &self,
        data: &[u8],
        width: usize,
        height: usize,
        config: &FilterConfiguration,
    ) -> Result<Vec<u8>> {
        let source = Bitmap::new(width, height, data.to_vec())?;
        Ok(self.run(&source, config)?.into_raw())
    }
}

fn run_stage(stage: &Stage, input: &Bitmap) -> Result<Bitmap> {
    let start = Instant::now();
    let output = stage.apply(input)?;
    log::trace!("{} finished in {:?}", stage, start.elapsed());
    Ok(output)
}

/// Shorthand for `FilterPipeline::new().run(source, config)`.
pub fn run(source: &Bitmap, config: &FilterConfiguration) -> Result<Bitmap> {
    FilterPipeline::new().run(source, config)
}
