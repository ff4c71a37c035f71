//! Four-pointed sparkle stars and the layers built from them
//!
//! A star is an 8-vertex polygon alternating between the four axis-aligned
//! tips and four diagonal waist points. The glow layer is an enlarged,
//! translucent, blurred copy of the stars; the star layer is the crisp
//! opaque version drawn on top of it.

use image::{Rgba, Rgba32FImage, RgbaImage};
use imageproc::{drawing::draw_polygon_mut, filter::separable_filter_equal, point::Point};

/// Linear scale applied to every star in the glow layer
pub const GLOW_SCALE: f32 = 1.5;

/// Fill color of the glow source before blurring
pub const GLOW_COLOR: Rgba<u8> = Rgba([255, 255, 255, 60]);

/// Fill color of the crisp stars
pub const STAR_COLOR: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Sigmas of the sequential blur passes that turn the glow source into a halo
pub const GLOW_BLUR_SIGMAS: [f32; 2] = [25.0, 15.0];

/// The stars on the default icon: one large, one medium, one small.
/// Arm width is roughly 17% of arm length.
pub const DEFAULT_STARS: [Star; 3] = [
    Star::new(380, 380, 160, 27),
    Star::new(620, 280, 80, 14),
    Star::new(560, 560, 50, 9),
];

/// A 4-pointed star centered at (cx, cy)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Star {
    pub cx: i32,
    pub cy: i32,
    /// Distance from the center to each tip
    pub arm_length: i32,
    /// Offset of the waist points along both axes
    pub arm_width: i32,
}

impl Star {
    pub const fn new(cx: i32, cy: i32, arm_length: i32, arm_width: i32) -> Self {
        Self {
            cx,
            cy,
            arm_length,
            arm_width,
        }
    }

    /// Same center with arm length and width multiplied by `factor`, truncated
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            arm_length: (self.arm_length as f32 * factor) as i32,
            arm_width: (self.arm_width as f32 * factor) as i32,
            ..*self
        }
    }

    /// Polygon vertices, clockwise starting at the top tip
    pub fn points(&self) -> [Point<i32>; 8] {
        let Self {
            cx,
            cy,
            arm_length: l,
            arm_width: w,
        } = *self;

        [
            Point::new(cx, cy - l),
            Point::new(cx + w, cy - w),
            Point::new(cx + l, cy),
            Point::new(cx + w, cy + w),
            Point::new(cx, cy + l),
            Point::new(cx - w, cy + w),
            Point::new(cx - l, cy),
            Point::new(cx - w, cy - w),
        ]
    }
}

/// Fill a star into the canvas, overwriting the pixels it covers
pub fn draw_star(canvas: &mut RgbaImage, star: &Star, color: Rgba<u8>) {
    // A degenerate star collapses every vertex onto the center, which the
    // polygon filler rejects.
    if star.arm_length == 0 && star.arm_width == 0 {
        return;
    }
    draw_polygon_mut(canvas, &star.points(), color);
}

/// Build the soft halo that sits beneath the crisp stars
pub fn create_glow_layer(size: u32, stars: &[Star]) -> RgbaImage {
    let mut glow = RgbaImage::new(size, size);

    for star in stars {
        draw_star(&mut glow, &star.scaled(GLOW_SCALE), GLOW_COLOR);
    }

    gaussian_blur(&glow, &GLOW_BLUR_SIGMAS)
}

/// Blur every channel independently with one Gaussian pass per sigma
///
/// Passes run in `f32` and are rounded back to `u8` once at the end, so a
/// flat layer keeps its exact color.
pub fn gaussian_blur(layer: &RgbaImage, sigmas: &[f32]) -> RgbaImage {
    let (width, height) = layer.dimensions();
    let wide = Rgba32FImage::from_fn(width, height, |x, y| {
        Rgba(layer.get_pixel(x, y).0.map(f32::from))
    });

    // Two smaller passes stand in for one wide kernel
    let blurred = sigmas.iter().fold(wide, |pass, &sigma| {
        let kernel = gaussian_kernel(sigma);
        separable_filter_equal(&pass, &kernel)
    });

    RgbaImage::from_fn(width, height, |x, y| {
        Rgba(
            blurred
                .get_pixel(x, y)
                .0
                .map(|c| c.round().clamp(0.0, 255.0) as u8),
        )
    })
}

/// Gaussian weights out to 3 sigma on each side, normalized to sum to 1
fn gaussian_kernel(sigma: f32) -> Vec<f32> {
    let radius = (3.0 * sigma).ceil().max(1.0) as i32;
    let denom = 2.0 * sigma * sigma;

    let weights: Vec<f32> = (-radius..=radius)
        .map(|i| (-((i * i) as f32) / denom).exp())
        .collect();
    let sum: f32 = weights.iter().sum();

    weights.into_iter().map(|w| w / sum).collect()
}

/// Build the sharp, fully opaque star layer
pub fn create_star_layer(size: u32, stars: &[Star]) -> RgbaImage {
    let mut layer = RgbaImage::new(size, size);

    for star in stars {
        draw_star(&mut layer, star, STAR_COLOR);
    }

    layer
}
