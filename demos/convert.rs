use trichrome::{Channels, Color, Rgb};

pub fn main() {
    let color: Color = "#6464c8".parse().unwrap();
    let rgb = Rgb::from(color);

    // 0.12752978, 0.12752978, 0.58597298
    let linear = rgb.to_linear_light();
    dbg!(linear);

    // 52, 40, 146
    let xyz = rgb.to_xyz();
    println!("xyz sliders = {:?}", xyz.to_slider_values());

    // 127, 127, 0, 55
    let cmyk = rgb.to_cmyk();
    println!("cmyk sliders = {:?}", cmyk.to_slider_values());

    // Both come back to the same color, give or take quantization.
    println!("from xyz = {}", xyz.to_rgb().to_color());
    println!("from cmyk = {}", cmyk.to_rgb().to_color());
}
