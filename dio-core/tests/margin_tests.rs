// dio-core/tests/margin_tests.rs

use dio_core::processing::margin::{CornerSampling, CropBox, MarginDetector, detect};
use dio_core::{CoreError, HomogeneityError};
use image::{Rgb, RgbImage};

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

// Fills the half-open rectangle [x0, x1) x [y0, y1) with `color`.
fn fill(image: &mut RgbImage, (x0, y0, x1, y1): (u32, u32, u32, u32), color: Rgb<u8>) {
    for y in y0..y1 {
        for x in x0..x1 {
            image.put_pixel(x, y, color);
        }
    }
}

fn framed(width: u32, height: u32, border: Rgb<u8>, inner: Rgb<u8>, rect: (u32, u32, u32, u32)) -> RgbImage {
    let mut image = RgbImage::from_pixel(width, height, border);
    fill(&mut image, rect, inner);
    image
}

fn margins(crop: &CropBox, width: u32, height: u32) -> [u32; 4] {
    [crop.left, crop.top, width - crop.right, height - crop.bottom]
}

#[test]
fn test_uniform_image_keeps_everything() {
    for (w, h, color) in [(100, 100, BLACK), (64, 20, Rgb([17, 200, 90])), (7, 9, WHITE)] {
        let image = RgbImage::from_pixel(w, h, color);
        let crop = detect(&image, 3.0).unwrap();
        assert_eq!(crop, CropBox::full(w, h), "uniform {w}x{h}");
    }
}

#[test]
fn test_centered_square_scenario() {
    let image = framed(100, 100, BLACK, WHITE, (30, 30, 70, 70));
    let crop = detect(&image, 3.0).unwrap();
    assert_eq!(
        crop,
        CropBox {
            left: 30,
            top: 30,
            right: 70,
            bottom: 70
        }
    );
}

#[test]
fn test_framed_region_is_isolated() {
    // Center half of an 80x60 image in a different color.
    let border = Rgb([230, 228, 225]);
    let inner = Rgb([40, 90, 160]);
    let image = framed(80, 60, border, inner, (20, 15, 60, 45));
    let crop = detect(&image, 3.0).unwrap();

    let expected = [20i64, 15, 60, 45];
    let got = [crop.left, crop.top, crop.right, crop.bottom].map(i64::from);
    for (g, e) in got.iter().zip(expected) {
        assert!((g - e).abs() <= 1, "got {crop}, expected {expected:?}");
    }
}

#[test]
fn test_noisy_border_within_threshold() {
    // Border alternates between 100 and 104 (std 2), content is far away.
    let mut image = RgbImage::from_fn(60, 60, |x, y| {
        let v = if (x + y) % 2 == 0 { 100 } else { 104 };
        Rgb([v, v, v])
    });
    fill(&mut image, (10, 12, 50, 40), Rgb([250, 10, 10]));

    let crop = detect(&image, 3.0).unwrap();
    assert_eq!(
        crop,
        CropBox {
            left: 10,
            top: 12,
            right: 50,
            bottom: 40
        }
    );

    // The same noise is too much for a strict threshold.
    assert!(matches!(detect(&image, 1.0), Err(CoreError::Homogeneity(_))));
}

#[test]
fn test_margins_grow_with_stdmax() {
    // Black background, a faint full-width band at rows 10..20 and bright
    // content at (30..70, 30..70). The band is cut at low thresholds only.
    let mut image = RgbImage::from_pixel(100, 100, BLACK);
    fill(&mut image, (0, 10, 100, 20), Rgb([8, 8, 8]));
    fill(&mut image, (30, 30, 70, 70), WHITE);

    let mut previous = [0u32; 4];
    for stdmax in [0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 10.0, 20.0] {
        let crop = detect(&image, stdmax).unwrap();
        let current = margins(&crop, 100, 100);
        for side in 0..4 {
            assert!(
                current[side] >= previous[side],
                "margin {side} shrank at stdmax {stdmax}: {previous:?} -> {current:?}"
            );
        }
        previous = current;
    }

    assert_eq!(detect(&image, 3.0).unwrap().top, 10);
    assert_eq!(detect(&image, 5.0).unwrap().top, 30);
}

#[test]
fn test_corner_mismatch_is_an_error() {
    let mut image = RgbImage::from_pixel(100, 100, BLACK);
    fill(&mut image, (95, 0, 100, 5), Rgb([200, 0, 0]));

    match detect(&image, 3.0) {
        Err(CoreError::Homogeneity(HomogeneityError { deviation, stdmax })) => {
            assert_eq!(stdmax, 3.0);
            assert!(deviation[0] > 3.0);
            assert_eq!(deviation[1], 0.0);
            assert_eq!(deviation[2], 0.0);
        }
        other => panic!("expected homogeneity error, got {other:?}"),
    }
}

#[test]
fn test_detection_is_idempotent() {
    let image = framed(120, 80, Rgb([12, 12, 12]), Rgb([180, 140, 90]), (13, 7, 101, 66));
    let detector = MarginDetector::new(3.0);
    let first = detector.detect(&image).unwrap();
    let second = detector.detect(&image).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_sampling_modes_agree_on_clean_borders() {
    let image = framed(90, 70, WHITE, BLACK, (25, 10, 60, 50));
    let four = MarginDetector::new(3.0).detect(&image).unwrap();
    let legacy = MarginDetector::new(3.0)
        .with_sampling(CornerSampling::Legacy)
        .detect(&image)
        .unwrap();
    assert_eq!(four, legacy);
    assert_eq!(four.to_ffmpeg_filter(), "crop=35:40:25:10");
}

#[test]
fn test_content_touching_one_edge() {
    // Content reaches the right edge but avoids the corners.
    let image = framed(100, 100, BLACK, WHITE, (40, 20, 100, 80));
    let crop = detect(&image, 3.0).unwrap();
    assert_eq!(
        crop,
        CropBox {
            left: 40,
            top: 20,
            right: 100,
            bottom: 80
        }
    );
}
