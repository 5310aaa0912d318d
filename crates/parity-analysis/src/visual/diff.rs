//! VisualDiffEngine: per-pixel screenshot comparison.

use std::io::Cursor;
use std::time::Instant;

use image::{ImageFormat, RgbaImage};
use parity_core::config::VisualConfig;
use parity_core::errors::{ImageSide, VisualDiffError};
use rayon::prelude::*;

use super::types::{DiffImage, PaddingInfo, VisualDiffResult};

const DIFF_PIXEL: [u8; 4] = [255, 0, 0, 255];
/// Share of the original luminance kept in unchanged pixels; the rest is white.
const FADE: f32 = 0.3;

/// Compares two encoded screenshots at a per-channel tolerance.
#[derive(Debug, Clone)]
pub struct VisualDiffEngine {
    threshold: f64,
}

impl Default for VisualDiffEngine {
    fn default() -> Self {
        Self::new(&VisualConfig::default())
    }
}

impl VisualDiffEngine {
    pub fn new(config: &VisualConfig) -> Self {
        Self {
            threshold: config.effective_threshold(),
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Decode both buffers and compare at the configured threshold.
    pub fn compare(
        &self,
        design: &[u8],
        implementation: &[u8],
    ) -> Result<VisualDiffResult, VisualDiffError> {
        self.compare_with_threshold(design, implementation, self.threshold)
    }

    pub fn compare_with_threshold(
        &self,
        design: &[u8],
        implementation: &[u8],
        threshold: f64,
    ) -> Result<VisualDiffResult, VisualDiffError> {
        check_threshold(threshold)?;
        let design = decode(design, ImageSide::Design)?;
        let implementation = decode(implementation, ImageSide::Implementation)?;
        compare_images(&design, &implementation, threshold)
    }
}

fn check_threshold(threshold: f64) -> Result<(), VisualDiffError> {
    if threshold.is_finite() && (0.0..=1.0).contains(&threshold) {
        Ok(())
    } else {
        Err(VisualDiffError::InvalidThreshold(threshold))
    }
}

fn decode(bytes: &[u8], side: ImageSide) -> Result<RgbaImage, VisualDiffError> {
    if bytes.is_empty() {
        return Err(VisualDiffError::Decode {
            side,
            reason: "zero-byte buffer".to_string(),
        });
    }
    let image = image::load_from_memory(bytes)
        .map_err(|e| VisualDiffError::Decode {
            side,
            reason: e.to_string(),
        })?
        .to_rgba8();
    check_dimensions(&image, side)?;
    Ok(image)
}

fn check_dimensions(image: &RgbaImage, side: ImageSide) -> Result<(), VisualDiffError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(VisualDiffError::DegenerateDimensions {
            side,
            width,
            height,
        });
    }
    Ok(())
}

/// Place `image` at the top-left of a transparent `width`×`height` canvas.
fn pad(image: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if image.dimensions() == (width, height) {
        return image.clone();
    }
    let mut canvas = RgbaImage::new(width, height);
    image::imageops::replace(&mut canvas, image, 0, 0);
    canvas
}

/// Compare two decoded images.
///
/// Both are padded to the larger width and height. A pixel differs when any
/// channel moves by more than `threshold` of its range.
pub fn compare_images(
    design: &RgbaImage,
    implementation: &RgbaImage,
    threshold: f64,
) -> Result<VisualDiffResult, VisualDiffError> {
    check_threshold(threshold)?;
    check_dimensions(design, ImageSide::Design)?;
    check_dimensions(implementation, ImageSide::Implementation)?;
    let started = Instant::now();

    let (dw, dh) = design.dimensions();
    let (iw, ih) = implementation.dimensions();
    let (width, height) = (dw.max(iw), dh.max(ih));
    let padding = ((dw, dh) != (iw, ih)).then_some(PaddingInfo {
        design_width: dw,
        design_height: dh,
        implementation_width: iw,
        implementation_height: ih,
        canvas_width: width,
        canvas_height: height,
    });
    if let Some(p) = &padding {
        tracing::debug!(?p, "screenshots padded to a shared canvas");
    }

    let a = pad(design, width, height);
    let b = pad(implementation, width, height);
    let row_len = width as usize * 4;
    let limit = threshold * 255.0;
    let mut out = vec![0u8; row_len * height as usize];

    let differing: u64 = out
        .par_chunks_mut(row_len)
        .zip(a.as_raw().par_chunks(row_len))
        .zip(b.as_raw().par_chunks(row_len))
        .map(|((out_row, row_a), row_b)| diff_row(out_row, row_a, row_b, limit))
        .sum();

    let diff = RgbaImage::from_raw(width, height, out)
        .ok_or_else(|| VisualDiffError::Encode("diff buffer size mismatch".to_string()))?;
    let mut png = Cursor::new(Vec::new());
    diff.write_to(&mut png, ImageFormat::Png)
        .map_err(|e| VisualDiffError::Encode(e.to_string()))?;

    let total = u64::from(width) * u64::from(height);
    let pixel_difference_percent = differing as f64 / total as f64 * 100.0;
    tracing::debug!(
        width,
        height,
        differing,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "visual diff computed"
    );

    Ok(VisualDiffResult {
        similarity_percent: 100.0 - pixel_difference_percent,
        pixel_difference_percent,
        differing_pixels: differing,
        total_pixels: total,
        width,
        height,
        threshold_used: threshold,
        diff_image_ref: None,
        padding,
        diff_image: Some(DiffImage {
            width,
            height,
            png: png.into_inner(),
        }),
    })
}

/// Diff one row into `out`, returning the number of differing pixels.
fn diff_row(out: &mut [u8], a: &[u8], b: &[u8], limit: f64) -> u64 {
    let mut count = 0;
    for ((px_out, px_a), px_b) in out
        .chunks_exact_mut(4)
        .zip(a.chunks_exact(4))
        .zip(b.chunks_exact(4))
    {
        let differs = px_a
            .iter()
            .zip(px_b)
            .any(|(x, y)| f64::from(x.abs_diff(*y)) > limit);
        if differs {
            count += 1;
            px_out.copy_from_slice(&DIFF_PIXEL);
        } else {
            let luma = 0.299 * f32::from(px_a[0])
                + 0.587 * f32::from(px_a[1])
                + 0.114 * f32::from(px_a[2]);
            let gray = (luma * FADE + 255.0 * (1.0 - FADE)).round().clamp(0.0, 255.0) as u8;
            px_out.copy_from_slice(&[gray, gray, gray, 255]);
        }
    }
    count
}
