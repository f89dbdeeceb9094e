use facedet_core::{DetectError, Result};

/// Decode an uploaded byte buffer into an 8-bit grayscale image.
///
/// Format detection is the decoder's own content sniffing; no whitelist is
/// enforced on top of it.
pub fn decode_gray(data: &[u8]) -> Result<image::GrayImage> {
    if data.is_empty() {
        return Err(DetectError::EmptyInput);
    }

    let img = image::load_from_memory(data)
        .map_err(|e| DetectError::ImageDecode(e.to_string()))?;

    Ok(img.to_luma8())
}
