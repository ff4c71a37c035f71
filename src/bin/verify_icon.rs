use app_icon_gen::{icon_gen::DEFAULT_OUTPUT, star::DEFAULT_STARS};
use image::io::Reader as ImageReader;

fn main() {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let img = ImageReader::open(&path)
        .expect("Failed to open image")
        .decode()
        .expect("Failed to decode image");

    let rgba_img = img.to_rgba8();
    let width = img.width();
    let height = img.height();

    println!("Checking icon: {}", path);
    println!("Image dimensions: {}x{}", width, height);
    println!("Color type: {:?}", img.color());

    // Outside the rounded corners nothing should be painted
    let corners = [
        (0, 0),
        (width - 1, 0),
        (0, height - 1),
        (width - 1, height - 1),
    ];
    let mut clear_corners = 0;

    println!("\nCorner alpha:");
    for (x, y) in corners {
        let alpha = rgba_img.get_pixel(x, y)[3];
        println!("  ({}, {}): {}", x, y, alpha);
        if alpha == 0 {
            clear_corners += 1;
        }
    }

    let mut white_centers = 0;

    println!("\nStar centers:");
    for star in DEFAULT_STARS {
        let (x, y) = (star.cx as u32, star.cy as u32);
        if x >= width || y >= height {
            println!("  ({}, {}): outside the image", x, y);
            continue;
        }

        let p = rgba_img.get_pixel(x, y);
        println!("  ({}, {}): RGBA [{}, {}, {}, {}]", x, y, p[0], p[1], p[2], p[3]);
        if p.0 == [255, 255, 255, 255] {
            white_centers += 1;
        }
    }

    if clear_corners == corners.len() && white_centers == DEFAULT_STARS.len() {
        println!("\n✓ Icon looks right!");
    } else {
        println!("\n⚠ Icon may not have rendered correctly");
    }
}
