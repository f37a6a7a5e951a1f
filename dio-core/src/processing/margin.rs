//! Homogeneous margin (border) detection for still images.
//!
//! The detector estimates the border color from square samples taken at the
//! image corners and then scans inward from each edge, one row or column at
//! a time. A line belongs to the margin while the line's pixels together
//! with the corner sample stay within the per-channel standard deviation
//! threshold (`stdmax`). The first line that breaks the threshold marks the
//! edge of the content.
//!
//! All four scans are judged against the same corner sample, computed once
//! per call. When an axis never breaks the threshold the margin on that side
//! is 0, so a fully uniform image comes back uncropped.

use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::DEFAULT_STDMAX;
use crate::error::{CoreError, CoreResult, HomogeneityError};

/// Rectangle to keep after the margins are removed, in pixel coordinates.
///
/// `left`/`top` are inclusive, `right`/`bottom` exclusive, matching the
/// box convention of image cropping APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CropBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropBox {
    /// Box covering the whole image.
    #[must_use]
    pub fn full(width: u32, height: u32) -> Self {
        Self {
            left: 0,
            top: 0,
            right: width,
            bottom: height,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Returns true if the box leaves an image of the given size untouched.
    #[must_use]
    pub fn is_full(&self, width: u32, height: u32) -> bool {
        *self == Self::full(width, height)
    }

    /// Renders the box as an ffmpeg crop filter (`crop=w:h:x:y`).
    #[must_use]
    pub fn to_ffmpeg_filter(&self) -> String {
        format!(
            "crop={}:{}:{}:{}",
            self.width(),
            self.height(),
            self.left,
            self.top
        )
    }
}

impl fmt::Display for CropBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.left, self.top, self.right, self.bottom)
    }
}

/// Which corner blocks make up the reference sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CornerSampling {
    /// Top-left, top-right, bottom-left and bottom-right.
    #[default]
    FourCorners,
    /// Top-left, top-right, bottom-right and top-right again. Bottom-left is
    /// never looked at. Kept for compatibility with crops produced by
    /// earlier releases of the tool.
    Legacy,
}

/// Side length of each square corner block: `floor(sqrt((W + H) / 8))`.
#[must_use]
pub fn corner_size(width: u32, height: u32) -> u32 {
    ((f64::from(width) + f64::from(height)) / 8.0).sqrt() as u32
}

/// Running per-channel sums of a pixel set.
///
/// Variance is evaluated from exact integer sums, so a perfectly uniform set
/// has a deviation of exactly zero and passes even with `stdmax == 0`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ChannelStats {
    count: u64,
    sum: [u64; 3],
    sum_sq: [u64; 3],
}

impl ChannelStats {
    fn push(&mut self, pixel: Rgb<u8>) {
        self.count += 1;
        for (c, &value) in pixel.0.iter().enumerate() {
            let value = u64::from(value);
            self.sum[c] += value;
            self.sum_sq[c] += value * value;
        }
    }

    /// `count² · variance` for one channel.
    fn scaled_variance(&self, channel: usize) -> u128 {
        let n = u128::from(self.count);
        let sum = u128::from(self.sum[channel]);
        (n * u128::from(self.sum_sq[channel])).saturating_sub(sum * sum)
    }

    /// Population standard deviation per channel.
    fn std_dev(&self) -> [f64; 3] {
        if self.count == 0 {
            return [0.0; 3];
        }
        let n = self.count as f64;
        [0, 1, 2].map(|c| (self.scaled_variance(c) as f64).sqrt() / n)
    }

    fn within(&self, stdmax: f64) -> bool {
        if self.count == 0 {
            return true;
        }
        let n = self.count as f64;
        let limit = stdmax * stdmax * n * n;
        stdmax >= 0.0 && (0..3).all(|c| self.scaled_variance(c) as f64 <= limit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Rows,
    Columns,
}

impl Axis {
    fn line_count(self, image: &RgbImage) -> u32 {
        match self {
            Axis::Rows => image.height(),
            Axis::Columns => image.width(),
        }
    }

    fn line_len(self, image: &RgbImage) -> u32 {
        match self {
            Axis::Rows => image.width(),
            Axis::Columns => image.height(),
        }
    }

    fn pixel(self, image: &RgbImage, line: u32, k: u32) -> Rgb<u8> {
        match self {
            Axis::Rows => *image.get_pixel(k, line),
            Axis::Columns => *image.get_pixel(line, k),
        }
    }
}

/// Margin detector configured with a threshold and a corner sampling mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarginDetector {
    stdmax: f64,
    sampling: CornerSampling,
}

impl Default for MarginDetector {
    fn default() -> Self {
        Self::new(DEFAULT_STDMAX)
    }
}

impl MarginDetector {
    #[must_use]
    pub fn new(stdmax: f64) -> Self {
        Self {
            stdmax,
            sampling: CornerSampling::default(),
        }
    }

    #[must_use]
    pub fn with_sampling(mut self, sampling: CornerSampling) -> Self {
        self.sampling = sampling;
        self
    }

    #[must_use]
    pub fn stdmax(&self) -> f64 {
        self.stdmax
    }

    #[must_use]
    pub fn sampling(&self) -> CornerSampling {
        self.sampling
    }

    /// Detects the homogeneous margins of `image` and returns the box to keep.
    ///
    /// # Errors
    ///
    /// * `CoreError::InvalidImage` if the image has zero width or height.
    /// * `CoreError::Homogeneity` if the corner sample itself exceeds
    ///   `stdmax`, i.e. the image has no uniform border to detect.
    ///
    /// Images too small to yield a corner block (`n == 0`, or `n` larger
    /// than a side) are returned whole.
    pub fn detect(&self, image: &RgbImage) -> CoreResult<CropBox> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(CoreError::InvalidImage(format!(
                "image has no pixels ({width}x{height})"
            )));
        }

        let n = corner_size(width, height);
        if n == 0 || n > width || n > height {
            log::debug!(
                "Corner block size {n} unusable for {width}x{height} image, keeping whole image"
            );
            return Ok(CropBox::full(width, height));
        }

        let corners = self.corner_sample(image, n);
        if !corners.within(self.stdmax) {
            return Err(HomogeneityError {
                deviation: corners.std_dev(),
                stdmax: self.stdmax,
            }
            .into());
        }

        let top = self.measure(image, Axis::Rows, false, &corners);
        let bottom = height - self.measure(image, Axis::Rows, true, &corners);
        let left = self.measure(image, Axis::Columns, false, &corners);
        let right = width - self.measure(image, Axis::Columns, true, &corners);

        let crop = CropBox {
            left,
            top,
            right,
            bottom,
        };
        log::trace!(
            "Detected crop box {crop} for {width}x{height} image (n={n}, stdmax={})",
            self.stdmax
        );
        Ok(crop)
    }

    fn corner_sample(&self, image: &RgbImage, n: u32) -> ChannelStats {
        let tail_x = image.width() - n;
        let tail_y = image.height() - n;
        let origins = match self.sampling {
            CornerSampling::FourCorners => [(0, 0), (tail_x, 0), (0, tail_y), (tail_x, tail_y)],
            CornerSampling::Legacy => [(0, 0), (tail_x, 0), (tail_x, tail_y), (tail_x, 0)],
        };

        let mut stats = ChannelStats::default();
        for (x0, y0) in origins {
            for y in y0..y0 + n {
                for x in x0..x0 + n {
                    stats.push(*image.get_pixel(x, y));
                }
            }
        }
        stats
    }

    /// Index of the first line, counted from the scanned edge, that breaks
    /// homogeneity together with the corner sample. 0 if none does.
    fn measure(&self, image: &RgbImage, axis: Axis, reverse: bool, corners: &ChannelStats) -> u32 {
        let count = axis.line_count(image);
        let len = axis.line_len(image);
        for i in 0..count {
            let line = if reverse { count - 1 - i } else { i };
            let mut stats = *corners;
            for k in 0..len {
                stats.push(axis.pixel(image, line, k));
            }
            if !stats.within(self.stdmax) {
                return i;
            }
        }
        0
    }
}

/// Detects margins with the default corner sampling.
///
/// Shorthand for `MarginDetector::new(stdmax).detect(image)`.
pub fn detect(image: &RgbImage, stdmax: f64) -> CoreResult<CropBox> {
    MarginDetector::new(stdmax).detect(image)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_of(values: &[u8]) -> ChannelStats {
        let mut stats = ChannelStats::default();
        for &v in values {
            stats.push(Rgb([v, v, v]));
        }
        stats
    }

    #[test]
    fn test_corner_size() {
        assert_eq!(corner_size(100, 100), 5);
        assert_eq!(corner_size(1920, 1080), 19);
        assert_eq!(corner_size(3, 4), 0);
        assert_eq!(corner_size(4, 4), 1);
    }

    #[test]
    fn test_channel_stats_uniform_is_exact() {
        let stats = stats_of(&[200; 50]);
        assert_eq!(stats.std_dev(), [0.0; 3]);
        assert!(stats.within(0.0));
    }

    #[test]
    fn test_channel_stats_population_deviation() {
        // Population std of {0, 8} is 4.
        let stats = stats_of(&[0, 8]);
        assert_eq!(stats.std_dev(), [4.0; 3]);
        assert!(stats.within(4.0));
        assert!(!stats.within(3.99));
    }

    #[test]
    fn test_channel_stats_checks_each_channel() {
        let mut stats = ChannelStats::default();
        stats.push(Rgb([10, 10, 0]));
        stats.push(Rgb([10, 10, 100]));
        assert!(!stats.within(3.0));
        assert!(stats.within(50.0));
    }

    #[test]
    fn test_negative_stdmax_never_passes() {
        assert!(!stats_of(&[1, 1, 1]).within(-1.0));
    }

    #[test]
    fn test_crop_box_filter_string() {
        let crop = CropBox {
            left: 10,
            top: 20,
            right: 110,
            bottom: 70,
        };
        assert_eq!(crop.width(), 100);
        assert_eq!(crop.height(), 50);
        assert_eq!(crop.to_ffmpeg_filter(), "crop=100:50:10:20");
        assert_eq!(crop.to_string(), "10,20,110,70");
    }

    #[test]
    fn test_legacy_sampling_skips_bottom_left() {
        let mut image = RgbImage::from_pixel(100, 100, Rgb([0, 0, 0]));
        for y in 95..100 {
            for x in 0..5 {
                image.put_pixel(x, y, Rgb([255, 255, 255]));
            }
        }

        let four = MarginDetector::new(3.0).detect(&image);
        assert!(matches!(four, Err(CoreError::Homogeneity(_))));

        let legacy = MarginDetector::new(3.0)
            .with_sampling(CornerSampling::Legacy)
            .detect(&image)
            .unwrap();
        assert_eq!(
            legacy,
            CropBox {
                left: 0,
                top: 95,
                right: 5,
                bottom: 100
            }
        );
    }

    #[test]
    fn test_degenerate_sizes_keep_whole_image() {
        let tiny = RgbImage::from_pixel(3, 3, Rgb([1, 2, 3]));
        assert_eq!(detect(&tiny, 3.0).unwrap(), CropBox::full(3, 3));

        // n = 11 exceeds the single column.
        let sliver = RgbImage::from_pixel(1, 1000, Rgb([9, 9, 9]));
        assert_eq!(detect(&sliver, 3.0).unwrap(), CropBox::full(1, 1000));
    }

    #[test]
    fn test_empty_image_is_rejected() {
        let empty = RgbImage::new(0, 10);
        assert!(matches!(detect(&empty, 3.0), Err(CoreError::InvalidImage(_))));
    }
}
