//! Emoji Image Pipeline
//!
//! decode → resize → encode. The network half lives in
//! [`MisskeyApi::fetch_image`](crate::api::MisskeyApi::fetch_image); this
//! module is the CPU half and is run on a blocking worker by the scheduler.

use image::imageops::{self, FilterType};
use thiserror::Error;

use super::sixel;

/// Edge length of a rendered emoji, in pixels
pub const EMOJI_SIZE: u32 = 16;

/// Failures turning downloaded bytes into a graphics blob
#[derive(Debug, Error)]
pub enum ImageError {
    /// The bytes are not a supported raster image
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// The bitmap could not be encoded
    #[error("failed to encode sixel: {0}")]
    Encode(String),
}

/// Decode a PNG/JPEG/GIF/WebP image, scale it to 16x16 with Catmull-Rom and
/// encode it as sixel
pub fn encode_emoji(bytes: &[u8]) -> Result<Vec<u8>, ImageError> {
    let source = image::load_from_memory(bytes)?.to_rgba8();
    let resized = imageops::resize(&source, EMOJI_SIZE, EMOJI_SIZE, FilterType::CatmullRom);
    sixel::encode(&resized)
}
