//! # qrterm
//!
//! Encode text into a QR code and render it as Unicode block characters in
//! a terminal, or save it as a PNG image.
//!
//! Symbol construction (segment encoding, error correction, masking) is
//! delegated to the `qrcode` crate. This crate owns the geometric
//! post-processing around it: detecting the terminal's usable drawing area,
//! nearest-neighbor rescaling of the module matrix, quiet-zone padding, and
//! rendering as text or pixels.
//!
//! ## Features
//!
//! - Render QR codes as two-character Unicode blocks per module.
//! - Size levels 1-10 mapped to valid symbol versions, or automatic sizing
//!   from the terminal's cell geometry.
//! - Save QR codes as grayscale PNG images via the `image` crate.
//! - Read the text to encode from a flag or from standard input.
//!
//! ## Example
//!
//! Render a symbol into printable lines:
//!
//! ```rust
//! use qrterm::encode::{Encoder, QrModuleSource};
//! use qrterm::render::render_lines;
//!
//! let matrix = QrModuleSource.encode("https://example.com").unwrap();
//! for line in render_lines(matrix, 25, 2) {
//!     println!("{}", line);
//! }
//! ```
//!
//! ## Modules
//!
//! - [`matrix`]: scaling and quiet-zone padding of module matrices.
//! - [`encode`]: the module source backed by the `qrcode` crate.
//! - [`render`]: block-character rendering.
//! - [`term`]: terminal geometry detection.
//! - [`cli`]: command-line configuration and the pipeline driver.
//! - [`error`]: the pipeline's error type.

pub mod cli;
pub mod encode;
pub mod error;
pub mod matrix;
pub mod render;
pub mod term;
