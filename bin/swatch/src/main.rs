use image::{Rgba, RgbaImage};
use pigment::Color;

const WIDTH: u32 = 1000;
const HEIGHT_PER_RAMP: u32 = 100;

fn main() {
    let mut args = std::env::args().skip(1);
    let from: Color = args
        .next()
        .unwrap_or_else(|| String::from("steelblue"))
        .parse()
        .expect("unrecognized color");
    let to: Color = args
        .next()
        .unwrap_or_else(|| String::from("tomato"))
        .parse()
        .expect("unrecognized color");

    let ramps: [Box<dyn Fn(f64) -> Color>; 4] = [
        Box::new(move |t| from.blend(&to, t * 100.0)),
        Box::new(move |t| from.darken(50.0).lighten(t * 100.0)),
        Box::new(move |t| from.desaturate(t * 100.0)),
        Box::new(move |t| from.blend(&to, t * 100.0).invert()),
    ];

    let height = ramps.len() as u32 * HEIGHT_PER_RAMP;
    let mut img = RgbaImage::new(WIDTH, height);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let t = f64::from(x) / f64::from(WIDTH);
        let ramp = &ramps[(y / HEIGHT_PER_RAMP) as usize];
        *pixel = Rgba(ramp(t).to_array());
    }

    img.save("swatch.png")
        .expect("could not write image to swatch.png");
}
