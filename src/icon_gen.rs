use crate::star::{create_glow_layer, create_star_layer, Star, DEFAULT_STARS};
use anyhow::{Context, Result};
use image::{DynamicImage, GrayImage, ImageBuffer, Luma, Rgb, RgbImage, RgbaImage};
use std::{
    f64::consts::SQRT_2,
    path::{Path, PathBuf},
};

/// Width and height of the generated icon
pub const SIZE: u32 = 1024;

/// Corner radius of the rounded-square background
pub const RADIUS: u32 = 200;

/// Where the icon lands when no output path is given
pub const DEFAULT_OUTPUT: &str = "assets/icon/app_icon.png";

/// Colors of the background gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub top_left: Rgb<u8>,
    pub top_right: Rgb<u8>,
    pub bottom_left: Rgb<u8>,
    pub bottom_right: Rgb<u8>,
    /// Color the middle of the icon is pulled toward
    pub center: Rgb<u8>,
}

impl Default for Palette {
    /// Bright blue in the top-left fading into deep purple in the bottom-right
    fn default() -> Self {
        Self {
            top_left: Rgb([0x4A, 0x9F, 0xFF]),
            top_right: Rgb([0x5C, 0x7F, 0xFF]),
            bottom_left: Rgb([0x5E, 0x6A, 0xF0]),
            bottom_right: Rgb([0x5B, 0x52, 0xE0]),
            center: Rgb([0x6C, 0x63, 0xFF]),
        }
    }
}

/// Everything that determines the rendered icon
#[derive(Debug, Clone)]
pub struct IconConfig {
    pub size: u32,
    pub radius: u32,
    pub palette: Palette,
    pub stars: Vec<Star>,
    pub output: PathBuf,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            size: SIZE,
            radius: RADIUS,
            palette: Palette::default(),
            stars: DEFAULT_STARS.to_vec(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

pub fn generate_icon(config: &IconConfig) -> Result<()> {
    let icon = render_icon(config);

    save_png(&icon, &config.output)?;

    println!("✓ Generated {}", config.output.display());
    println!("  Size: {}x{}, Mode: RGBA", icon.width(), icon.height());
    Ok(())
}

/// Run the whole layer pipeline in memory
///
/// Background, glow and crisp stars are each clipped by the same rounded
/// mask, then stacked bottom to top.
pub fn render_icon(config: &IconConfig) -> RgbaImage {
    let size = config.size;

    println!("Creating rounded gradient background...");
    let gradient = create_gradient(size, &config.palette);
    let mask = create_rounded_rect_mask(size, config.radius);
    let mut icon = apply_mask(&DynamicImage::ImageRgb8(gradient).to_rgba8(), &mask);

    println!("Creating star glow effect...");
    let glow = create_glow_layer(size, &config.stars);
    alpha_composite(&mut icon, &apply_mask(&glow, &mask));

    println!("Drawing crisp stars...");
    let stars = create_star_layer(size, &config.stars);
    alpha_composite(&mut icon, &apply_mask(&stars, &mask));

    icon
}

/// Create the opaque background gradient
///
/// The four corners are blended bilinearly, then the result is pulled toward
/// the palette's center color by up to 50% as pixels approach the middle.
pub fn create_gradient(size: u32, palette: &Palette) -> RgbImage {
    let span = size.saturating_sub(1).max(1) as f64;

    ImageBuffer::from_fn(size, size, |x, y| {
        let tx = x as f64 / span;
        let ty = y as f64 / span;

        let dx = (tx - 0.5) * 2.0;
        let dy = (ty - 0.5) * 2.0;
        let dist = (dx * dx + dy * dy).sqrt() / SQRT_2;
        let center_weight = (1.0 - dist).max(0.0) * 0.5;

        let mut pixel = [0u8; 3];
        for (c, channel) in pixel.iter_mut().enumerate() {
            let bilinear = (1.0 - tx) * (1.0 - ty) * palette.top_left[c] as f64
                + tx * (1.0 - ty) * palette.top_right[c] as f64
                + (1.0 - tx) * ty * palette.bottom_left[c] as f64
                + tx * ty * palette.bottom_right[c] as f64;
            let value =
                bilinear * (1.0 - center_weight) + palette.center[c] as f64 * center_weight;
            *channel = value as u8;
        }

        Rgb(pixel)
    })
}

/// Create a mask that is 255 inside a rounded rectangle covering the canvas
pub fn create_rounded_rect_mask(size: u32, radius: u32) -> GrayImage {
    let far = size.saturating_sub(1);
    let radius = radius.min(far / 2);
    let radius_sq = (radius as u64).pow(2);

    ImageBuffer::from_fn(size, size, |x, y| {
        // Distance to the nearest point of the inner rectangle the corner
        // circles are centered on
        let dx = x.abs_diff(x.clamp(radius, far - radius)) as u64;
        let dy = y.abs_diff(y.clamp(radius, far - radius)) as u64;

        if dx * dx + dy * dy <= radius_sq {
            Luma([255])
        } else {
            Luma([0])
        }
    })
}

/// Gate a layer's opacity with a mask
///
/// Alpha is scaled by `mask / 255`, so a binary mask keeps the layer where
/// the mask is set and leaves full transparency everywhere else.
pub fn apply_mask(layer: &RgbaImage, mask: &GrayImage) -> RgbaImage {
    debug_assert_eq!(layer.dimensions(), mask.dimensions());
    let mut masked = layer.clone();

    for (pixel, gate) in masked.pixels_mut().zip(mask.pixels()) {
        match gate[0] {
            255 => {}
            0 => pixel.0 = [0, 0, 0, 0],
            m => pixel[3] = ((pixel[3] as u32 * m as u32 + 127) / 255) as u8,
        }
    }

    masked
}

/// Composite `layer` over `base` in place (source-over)
///
/// Integer arithmetic keeps opaque results at exactly 255 alpha and lets a
/// fully opaque layer pixel replace whatever lies beneath it.
pub fn alpha_composite(base: &mut RgbaImage, layer: &RgbaImage) {
    debug_assert_eq!(base.dimensions(), layer.dimensions());
    for (bottom, top) in base.pixels_mut().zip(layer.pixels()) {
        let src_a = top[3] as u32;
        match src_a {
            0 => continue,
            255 => {
                *bottom = *top;
                continue;
            }
            _ => {}
        }

        // Both terms are scaled by 255
        let under = bottom[3] as u32 * (255 - src_a);
        let out_a = src_a * 255 + under;

        for c in 0..3 {
            let value = top[c] as u32 * src_a * 255 + bottom[c] as u32 * under;
            bottom[c] = ((value + out_a / 2) / out_a) as u8;
        }
        bottom[3] = ((out_a + 127) / 255) as u8;
    }
}

pub fn save_png(image: &RgbaImage, path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create PNG file: {}", path.display()))?;
    image
        .write_to(&mut file, image::ImageOutputFormat::Png)
        .context("Failed to write PNG")?;
    Ok(())
}
