use pixelchain::filters::{gaussian_blur, grayscale_blend, isolate_channels, median, median_round};
use pixelchain::{Bitmap, FilterConfiguration, FilterError, FilterPipeline};
use proptest::prelude::*;

fn bitmap_strategy() -> impl Strategy<Value = Bitmap> {
    (1usize..7, 1usize..7)
        .prop_flat_map(|(w, h)| {
            (
                Just(w),
                Just(h),
                prop::collection::vec(any::<u8>(), w * h * 4),
            )
        })
        .prop_map(|(w, h, pixels)| Bitmap::new(w, h, pixels).unwrap())
}

fn config_strategy() -> impl Strategy<Value = FilterConfiguration> {
    (
        any::<bool>(),
        any::<bool>(),
        0.0f64..=255.0,
        0.0f64..=100.0,
        0.0f64..=100.0,
        0.0f64..=100.0,
    )
        .prop_map(|(median, blur, gray, r, g, b)| {
            FilterConfiguration::default()
                .with_median(median)
                .with_blur(blur)
                .with_grayscale(gray)
                .with_channels(r, g, b)
        })
}

proptest! {
    #[test]
    fn isolation_at_full_percent_is_identity(img in bitmap_strategy()) {
        let result = isolate_channels(&img, 100.0, 100.0, 100.0).unwrap();
        prop_assert_eq!(result, img);
    }

    #[test]
    fn grayscale_zero_is_identity(img in bitmap_strategy()) {
        prop_assert_eq!(grayscale_blend(&img, 0.0).unwrap(), img);
    }

    #[test]
    fn grayscale_full_equalizes_channels(img in bitmap_strategy()) {
        let result = grayscale_blend(&img, 255.0).unwrap();
        for y in 0..img.height() {
            for x in 0..img.width() {
                let src = img.pixel(x, y);
                let out = result.pixel(x, y);
                let avg = (src[0] as f64 + src[1] as f64 + src[2] as f64) / 3.0;
                let expected = avg.round_ties_even() as u8;
                prop_assert_eq!(out, [expected, expected, expected, src[3]]);
            }
        }
    }

    #[test]
    fn blur_zero_radius_is_identity(img in bitmap_strategy()) {
        prop_assert_eq!(gaussian_blur(&img, 0.0).unwrap(), img);
    }

    #[test]
    fn median_on_uniform_is_unchanged(
        w in 1usize..9,
        h in 1usize..9,
        rgba in any::<[u8; 4]>(),
    ) {
        let img = Bitmap::filled(w, h, rgba).unwrap();
        prop_assert_eq!(median(&img, 5).unwrap(), img);
    }

    #[test]
    fn single_salt_pixel_is_removed_in_one_round(
        w in 3usize..9,
        h in 3usize..9,
        background in any::<[u8; 3]>(),
        salt in any::<[u8; 3]>(),
        fx in 0.0f64..1.0,
        fy in 0.0f64..1.0,
    ) {
        let bg = [background[0], background[1], background[2], 255];
        let mut img = Bitmap::filled(w, h, bg).unwrap();
        let x = (fx * w as f64) as usize;
        let y = (fy * h as f64) as usize;
        img.set_pixel(x, y, [salt[0], salt[1], salt[2], 255]);

        let result = median_round(&img).unwrap();
        prop_assert_eq!(result, Bitmap::filled(w, h, bg).unwrap());
    }

    #[test]
    fn pipeline_is_deterministic_and_shape_preserving(
        img in bitmap_strategy(),
        config in config_strategy(),
    ) {
        let pipeline = FilterPipeline::new();
        let first = pipeline.run(&img, &config).unwrap();
        let second = pipeline.run(&img, &config).unwrap();
        prop_assert_eq!(first.width(), img.width());
        prop_assert_eq!(first.height(), img.height());
        prop_assert_eq!(first, second);
    }
}

#[test]
fn salt_on_black_three_by_three() {
    let mut img = Bitmap::filled(3, 3, [0, 0, 0, 255]).unwrap();
    img.set_pixel(1, 1, [255, 255, 255, 255]);
    let result = median_round(&img).unwrap();
    assert_eq!(result, Bitmap::filled(3, 3, [0, 0, 0, 255]).unwrap());
}

#[test]
fn single_pixel_scenarios() {
    let img = Bitmap::new(1, 1, vec![200, 100, 50, 255]).unwrap();
    assert_eq!(
        isolate_channels(&img, 50.0, 50.0, 50.0).unwrap().pixel(0, 0),
        [100, 50, 25, 255]
    );
    assert_eq!(
        grayscale_blend(&img, 255.0).unwrap().pixel(0, 0),
        [117, 117, 117, 255]
    );
}

#[test]
fn pipeline_grayscale_then_isolation() {
    let img = Bitmap::new(1, 1, vec![200, 100, 50, 255]).unwrap();
    let config = FilterConfiguration::default()
        .with_grayscale(255.0)
        .with_channels(100.0, 50.0, 0.0);
    let result = FilterPipeline::new().run(&img, &config).unwrap();
    // 117 * 50 / 100 = 58.5, the tie goes to even
    assert_eq!(result.pixel(0, 0), [117, 58, 0, 255]);
}

#[test]
fn pipeline_median_and_blur_smooth_noise() {
    let mut img = Bitmap::filled(12, 12, [90, 90, 90, 255]).unwrap();
    img.set_pixel(5, 5, [255, 0, 255, 255]);
    img.set_pixel(9, 2, [0, 255, 0, 255]);

    let config = FilterConfiguration::default()
        .with_median(true)
        .with_blur(true);
    let result = FilterPipeline::new().run(&img, &config).unwrap();
    assert_eq!(result, Bitmap::filled(12, 12, [90, 90, 90, 255]).unwrap());
}

#[test]
fn pipeline_propagates_stage_errors() {
    let img = Bitmap::filled(2, 2, [0, 0, 0, 255]).unwrap();
    assert!(matches!(
        gaussian_blur(&img, f64::NAN),
        Err(FilterError::InvalidParameter(_))
    ));
    // Out-of-range percentages are not an error class
    let config = FilterConfiguration::default().with_channels(-20.0, 400.0, 100.0);
    assert!(FilterPipeline::new().run(&img, &config).is_ok());
}

#[test]
fn bitmap_shape_errors() {
    assert_eq!(
        Bitmap::new(3, 2, vec![0; 23]).unwrap_err(),
        FilterError::ShapeMismatch {
            expected: 24,
            actual: 23
        }
    );
}
