//! LSB (Least Significant Bit) steganography for images.
//!
//! Hides data in the least significant bit of each colour channel.
//! Output must be saved losslessly (PNG); any recompression destroys it.
//!
//! Format: [message bytes] + [delimiter bytes], expanded MSB first.
//! Pixels are visited in row-major order, channels R, G, B within a pixel,
//! one bit per channel.

use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, ImageFormat, RgbImage};
use tracing::debug;

use crate::capacity;
use crate::error::{Result, StegoError};
use crate::stego::payload::{bits_to_bytes, bytes_to_bits};

/// Colour channels used per pixel.
const CHANNELS: usize = 3;

/// Writes `bits` into the LSBs of `pixels`, in raster order.
///
/// Channels past the last bit are left untouched. Bits beyond the image's
/// capacity are ignored; callers validate capacity first.
pub fn embed_bits(bits: &[bool], pixels: &mut RgbImage) {
    let mut remaining = bits.iter();

    'outer: for pixel in pixels.pixels_mut() {
        for channel in 0..CHANNELS {
            let Some(&bit) = remaining.next() else {
                break 'outer;
            };
            // Clear LSB and set new bit
            pixel.0[channel] = (pixel.0[channel] & 0xFE) | u8::from(bit);
        }
    }
}

/// Reads the LSB of every channel of every pixel, in raster order.
pub fn extract_bits(pixels: &RgbImage) -> Vec<bool> {
    let (width, height) = pixels.dimensions();
    let mut bits = Vec::with_capacity((width as usize) * (height as usize) * CHANNELS);
    for pixel in pixels.pixels() {
        bits.extend(pixel.0.iter().map(|&value| value & 1 == 1));
    }
    bits
}

/// Returns the bytes preceding the first occurrence of `delimiter`.
fn split_at_delimiter<'a>(bytes: &'a [u8], delimiter: &[u8]) -> Option<&'a [u8]> {
    if delimiter.is_empty() {
        return None;
    }
    bytes
        .windows(delimiter.len())
        .position(|window| window == delimiter)
        .map(|end| &bytes[..end])
}

/// Image steganography handler.
#[derive(Debug, Clone)]
pub struct ImageStego {
    image: RgbImage,
}

impl ImageStego {
    /// Creates a new ImageStego from a file path.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let image = image::open(path).map_err(|e| StegoError::ImageLoad(e.to_string()))?;
        Ok(Self::from_image(image))
    }

    /// Creates a new ImageStego from encoded image bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let image =
            image::load_from_memory(bytes).map_err(|e| StegoError::ImageLoad(e.to_string()))?;
        Ok(Self::from_image(image))
    }

    /// Creates a new ImageStego from a DynamicImage. Alpha is dropped.
    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            image: image.to_rgb8(),
        }
    }

    /// Creates a new ImageStego from a decoded pixel grid.
    pub fn from_pixels(image: RgbImage) -> Self {
        Self { image }
    }

    /// Number of pixels.
    pub fn pixel_count(&self) -> usize {
        let (width, height) = self.image.dimensions();
        (width as usize) * (height as usize)
    }

    /// Capacity in bytes, delimiter included.
    pub fn capacity(&self) -> usize {
        capacity::image_capacity(self.pixel_count())
    }

    /// Hides `data` followed by `delimiter`.
    ///
    /// The check runs before any pixel is copied or changed.
    pub fn hide(&self, data: &[u8], delimiter: &str) -> Result<Self> {
        let mut full_data = Vec::with_capacity(data.len() + delimiter.len());
        full_data.extend_from_slice(data);
        full_data.extend_from_slice(delimiter.as_bytes());

        capacity::check_image(full_data.len(), self.pixel_count())?;

        let bits = bytes_to_bits(&full_data);
        let mut output = self.image.clone();
        embed_bits(&bits, &mut output);

        debug!(
            bytes = full_data.len(),
            bits = bits.len(),
            pixels = self.pixel_count(),
            "embedded payload into image"
        );
        Ok(Self { image: output })
    }

    /// Extracts the bytes hidden before the first `delimiter`.
    ///
    /// Fails with [`StegoError::DelimiterNotFound`] if the image carries no
    /// delimited message.
    pub fn extract(&self, delimiter: &str) -> Result<Vec<u8>> {
        let bytes = bits_to_bytes(&extract_bits(&self.image));
        let message = split_at_delimiter(&bytes, delimiter.as_bytes())
            .ok_or(StegoError::DelimiterNotFound)?;

        debug!(
            scanned = bytes.len(),
            message = message.len(),
            "found delimiter in image"
        );
        Ok(message.to_vec())
    }

    /// Saves the image as PNG, whatever the file extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.image
            .save_with_format(path, ImageFormat::Png)
            .map_err(|e| StegoError::ImageSave(e.to_string()))
    }

    /// Returns the image as PNG bytes.
    pub fn to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| StegoError::ImageSave(e.to_string()))?;
        Ok(bytes)
    }

    /// Returns a reference to the pixel grid.
    pub fn pixels(&self) -> &RgbImage {
        &self.image
    }

    /// Consumes self and returns the pixel grid.
    pub fn into_pixels(self) -> RgbImage {
        self.image
    }
}
