use anyhow::{ensure, Context};
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use trichrome::Color;

/// Draw one square swatch per color, left to right.
pub fn render_strip(colors: &[Color], size: u32) -> anyhow::Result<RgbImage> {
    ensure!(size > 0, "swatches must be at least one pixel wide");
    ensure!(!colors.is_empty(), "there are no colors to draw");

    let width = u32::try_from(colors.len())
        .ok()
        .and_then(|count| count.checked_mul(size))
        .and_then(|width| i32::try_from(width).ok().map(|_| width))
        .with_context(|| format!("{} swatches of {size} pixels do not fit an image", colors.len()))?;

    let mut img = RgbImage::new(width, size);

    for (index, color) in colors.iter().enumerate() {
        // The width fits an i32, so every offset does too.
        let x = (index as u32 * size) as i32;
        draw_filled_rect_mut(
            &mut img,
            Rect::at(x, 0).of_size(size, size),
            Rgb([color.red, color.green, color.blue]),
        );
    }

    Ok(img)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_swatch_per_color() {
        let colors = [Color::new(100, 100, 200), Color::new(0, 0, 0), Color::new(255, 1, 2)];
        let img = render_strip(&colors, 8).unwrap();

        assert_eq!(img.dimensions(), (24, 8));
        assert_eq!(img.get_pixel(0, 0), &Rgb([100, 100, 200]));
        assert_eq!(img.get_pixel(7, 7), &Rgb([100, 100, 200]));
        assert_eq!(img.get_pixel(8, 0), &Rgb([0, 0, 0]));
        assert_eq!(img.get_pixel(23, 4), &Rgb([255, 1, 2]));
    }

    #[test]
    fn degenerate_sizes_are_errors() {
        let colors = [Color::new(1, 2, 3)];
        assert!(render_strip(&colors, 0).is_err());
        assert!(render_strip(&[], 8).is_err());

        let many = vec![Color::default(); 3];
        assert!(render_strip(&many, u32::MAX / 2).is_err());
    }
}
