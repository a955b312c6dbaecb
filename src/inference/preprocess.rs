//! Image preprocessing: decode, resize, tensor reshape.
//!
//! The numeric contract here is pinned to what the classifier artifact was
//! trained on and is not a free parameter:
//! - resize: bilinear interpolation, exact 256x256, aspect ratio discarded
//! - layout: NHWC, single-item batch `(1, 256, 256, 3)`
//! - channels: BGR order, raw pixel values in `0.0..=255.0` (no
//!   normalization; the artifact consumes OpenCV-style decoded frames)

use image::{imageops::FilterType, DynamicImage, RgbImage};
use ndarray::Array4;

use crate::error::{Error, Result};
use crate::IMAGE_SIZE;

/// Decode raw JPEG/PNG bytes into a pixel grid.
pub fn decode_image(raw: &[u8]) -> Result<DynamicImage> {
    if raw.is_empty() {
        return Err(Error::Decode("empty image buffer".to_string()));
    }
    image::load_from_memory(raw).map_err(|e| Error::Decode(e.to_string()))
}

/// Resize a decoded image to the classifier's input dimensions.
/// Bilinear, deterministic; the same input always yields the same grid.
pub fn resize_to_input(image: &DynamicImage) -> RgbImage {
    image
        .resize_exact(IMAGE_SIZE as u32, IMAGE_SIZE as u32, FilterType::Triangle)
        .to_rgb8()
}

/// Reshape a resized grid into a single-item NHWC batch with BGR channels.
pub fn to_input_tensor(image: &RgbImage) -> Result<Array4<f32>> {
    let (width, height) = image.dimensions();
    if width as usize != IMAGE_SIZE || height as usize != IMAGE_SIZE {
        return Err(Error::Shape(format!(
            "resized grid is {}x{}, expected {}x{}",
            width, height, IMAGE_SIZE, IMAGE_SIZE
        )));
    }

    let mut tensor = Array4::<f32>::zeros((1, IMAGE_SIZE, IMAGE_SIZE, 3));
    for (x, y, pixel) in image.enumerate_pixels() {
        let (x, y) = (x as usize, y as usize);
        // BGR channel order
        tensor[[0, y, x, 0]] = pixel[2] as f32;
        tensor[[0, y, x, 1]] = pixel[1] as f32;
        tensor[[0, y, x, 2]] = pixel[0] as f32;
    }

    if tensor.dim() != (1, IMAGE_SIZE, IMAGE_SIZE, 3) {
        return Err(Error::Shape(format!(
            "input batch has shape {:?}, expected (1, {}, {}, 3)",
            tensor.dim(),
            IMAGE_SIZE,
            IMAGE_SIZE
        )));
    }

    Ok(tensor)
}

/// Full preprocessing chain from uploaded bytes to the model input batch.
pub fn image_to_tensor(raw: &[u8]) -> Result<Array4<f32>> {
    let decoded = decode_image(raw)?;
    let resized = resize_to_input(&decoded);
    to_input_tensor(&resized)
}
