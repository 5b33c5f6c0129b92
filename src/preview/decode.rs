use image::imageops::FilterType;

/// Decoded RGBA8 pixels ready to hand to the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

/// Decode encoded image bytes, downscaling to fit `max_side` when given
///
/// Images already smaller than `max_side` are left at their native size.
pub fn decode(bytes: &[u8], max_side: Option<u32>) -> Result<Decoded, image::ImageError> {
    let mut img = image::load_from_memory(bytes)?;

    if let Some(side) = max_side {
        if img.width() > side || img.height() > side {
            img = img.resize(side, side, FilterType::Lanczos3);
        }
    }

    let rgba = img.to_rgba8();
    Ok(Decoded {
        width: rgba.width(),
        height: rgba.height(),
        pixels: rgba.into_raw(),
    })
}
