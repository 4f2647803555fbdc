use anyhow::{Context, Result, bail};
use snip_types::CaptureRegion;
use xcap::Monitor;

mod hotkey;

pub use hotkey::HotkeyManager;

/// Extent of the primary monitor, used to size the selection overlay.
pub fn primary_monitor_size() -> Result<(u32, u32)> {
    let monitors = Monitor::all().context("Failed to get monitors")?;
    let monitor = monitors.first().context("No monitor found")?;
    Ok((monitor.width(), monitor.height()))
}

/// Capture the entire primary monitor as PNG bytes.
pub fn capture_primary_screen() -> Result<Vec<u8>> {
    let monitors = Monitor::all().context("Failed to get monitors")?;
    let monitor = monitors.first().context("No monitor found")?;

    let image = monitor.capture_image().context("Failed to capture screen")?;
    encode_png(&image)
}

/// Capture a region of the screen as PNG bytes.
///
/// The monitor containing the region is captured and cropped; a region that
/// lies outside every monitor falls back to the primary one.
pub fn capture_screen_region(region: CaptureRegion) -> Result<Vec<u8>> {
    if region.is_empty() {
        bail!("empty capture region");
    }

    let monitors = Monitor::all().context("Failed to get monitors")?;

    let monitor = monitors
        .iter()
        .find(|m| {
            region.x >= m.x()
                && region.y >= m.y()
                && region.x + region.width as i32 <= m.x() + m.width() as i32
                && region.y + region.height as i32 <= m.y() + m.height() as i32
        })
        .or(monitors.first())
        .context("No monitor found")?;

    let image = monitor.capture_image().context("Failed to capture screen")?;

    // Clamp the crop to the captured frame; the fallback monitor may not
    // actually contain the region.
    let x = (region.x - monitor.x()).max(0) as u32;
    let y = (region.y - monitor.y()).max(0) as u32;
    let width = region.width.min(image.width().saturating_sub(x));
    let height = region.height.min(image.height().saturating_sub(y));
    if width == 0 || height == 0 {
        bail!("capture region lies outside the screen");
    }

    let cropped = xcap::image::imageops::crop_imm(&image, x, y, width, height).to_image();

    tracing::debug!(
        "captured {}x{} region at ({}, {})",
        width,
        height,
        region.x,
        region.y
    );

    encode_png(&cropped)
}

fn encode_png(image: &xcap::image::RgbaImage) -> Result<Vec<u8>> {
    use xcap::image::ImageEncoder;
    let mut buffer = Vec::new();
    xcap::image::codecs::png::PngEncoder::new(&mut buffer)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            xcap::image::ExtendedColorType::Rgba8,
        )
        .context("Failed to encode PNG")?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_region_is_rejected_before_touching_the_screen() {
        let err = capture_screen_region(CaptureRegion {
            x: 10,
            y: 10,
            width: 0,
            height: 5,
        })
        .unwrap_err();
        assert!(err.to_string().contains("empty capture region"));
    }
}
