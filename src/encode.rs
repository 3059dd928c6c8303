//! Source of QR module matrices.
//!
//! Symbol construction is the `qrcode` crate's job; this module adapts it
//! behind the [`Encoder`] trait so the pipeline can be exercised against a
//! fake module source in tests.

use std::path::Path;

use image::{ImageBuffer, Luma};
use log::debug;
use qrcode::{Color, EcLevel, QrCode};

use crate::error::Error;
use crate::matrix::add_border;

/// Quiet zone width in modules for raster output. Raster mode only toggles
/// the quiet zone on or off; it does not take a numeric width.
const RASTER_BORDER: usize = 4;

/// Capability to turn text into QR modules, either in memory or on disk.
pub trait Encoder {
    /// Encodes `text` into a square module matrix.
    fn encode(&self, text: &str) -> Result<Vec<Vec<bool>>, Error>;

    /// Encodes `text` and writes it as a grayscale image to `path`, with
    /// `pixels_per_module` pixels per module and an optional quiet zone.
    fn write_raster(
        &self,
        text: &str,
        pixels_per_module: u32,
        path: &Path,
        include_border: bool,
    ) -> Result<(), Error>;
}

/// Production module source backed by the `qrcode` crate, encoding at
/// medium error correction.
pub struct QrModuleSource;

impl Encoder for QrModuleSource {
    fn encode(&self, text: &str) -> Result<Vec<Vec<bool>>, Error> {
        let qr = QrCode::with_error_correction_level(text, EcLevel::M)?;
        let width = qr.width();
        let matrix = qr
            .to_colors()
            .chunks(width)
            .map(|row| row.iter().map(|&color| color == Color::Dark).collect())
            .collect();
        Ok(matrix)
    }

    fn write_raster(
        &self,
        text: &str,
        pixels_per_module: u32,
        path: &Path,
        include_border: bool,
    ) -> Result<(), Error> {
        let mut matrix = self.encode(text)?;
        if include_border {
            matrix = add_border(matrix, RASTER_BORDER);
        }

        let size = matrix.len() as u32 * pixels_per_module;
        let mut img = ImageBuffer::new(size, size);

        for (x, y, pixel) in img.enumerate_pixels_mut() {
            let module_x = (x / pixels_per_module) as usize;
            let module_y = (y / pixels_per_module) as usize;
            *pixel = if matrix[module_y][module_x] {
                Luma([0u8]) // Black
            } else {
                Luma([255u8]) // White
            };
        }

        debug!("writing {}x{} raster to {}", size, size, path.display());
        img.save(path)?;
        Ok(())
    }
}
