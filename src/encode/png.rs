use std::io::Cursor;

use base64::{Engine as _, engine::general_purpose};

use crate::{
    foundation::core::Canvas,
    foundation::error::{FaviconError, FaviconResult},
    foundation::math::unpremultiply_rgba8_in_place,
    render::cpu::CloudSurface,
};

/// Prefix shared by every published icon `href`.
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Turns the drawing surface into an icon `href`.
///
/// Encoding is the only fallible step of publishing; the animator treats an error as "skip this
/// publication".
pub trait IconEncoder {
    /// Encode the current surface contents.
    fn encode(&mut self, surface: &CloudSurface) -> FaviconResult<String>;
}

/// Default encoder producing `data:image/png;base64,...`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PngDataUriEncoder;

impl IconEncoder for PngDataUriEncoder {
    fn encode(&mut self, surface: &CloudSurface) -> FaviconResult<String> {
        let png = encode_png(surface.pixels(), surface.canvas())?;
        Ok(png_data_uri(&png))
    }
}

/// Encode premultiplied RGBA8 pixels as a straight-alpha PNG.
pub fn encode_png(premul_rgba: &[u8], canvas: Canvas) -> FaviconResult<Vec<u8>> {
    if premul_rgba.len() != canvas.rgba_len() {
        return Err(FaviconError::encode(format!(
            "expected {} bytes for {}x{}, got {}",
            canvas.rgba_len(),
            canvas.width,
            canvas.height,
            premul_rgba.len()
        )));
    }
    let mut straight = premul_rgba.to_vec();
    unpremultiply_rgba8_in_place(&mut straight);

    let img = image::RgbaImage::from_raw(
        u32::from(canvas.width),
        u32::from(canvas.height),
        straight,
    )
    .ok_or_else(|| FaviconError::encode("pixel buffer does not match canvas size"))?;

    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .map_err(|e| FaviconError::encode(format!("png encode failed: {e}")))?;
    Ok(buf)
}

/// Wrap PNG bytes in a base64 data URI.
pub fn png_data_uri(png: &[u8]) -> String {
    let mut out = String::with_capacity(PNG_DATA_URI_PREFIX.len() + png.len().div_ceil(3) * 4);
    out.push_str(PNG_DATA_URI_PREFIX);
    general_purpose::STANDARD.encode_string(png, &mut out);
    out
}

/// Extract the PNG bytes from a URI produced by [`png_data_uri`].
pub fn decode_png_data_uri(uri: &str) -> FaviconResult<Vec<u8>> {
    let payload = uri
        .strip_prefix(PNG_DATA_URI_PREFIX)
        .ok_or_else(|| FaviconError::encode("not a base64 PNG data URI"))?;
    general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| FaviconError::encode(format!("invalid base64 payload: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
