use tileable_noise::{generate_gradient_field, ChannelSpec, GradientParams};

fn main() {
    let params = GradientParams {
        width: 512,
        height: 512,
        period: 64.0,
        seed: 1,
        channels: ChannelSpec::RGB,
        absolute: false,
    };

    let raster = generate_gradient_field(&params).unwrap();
    let pixels = raster.to_rgba();

    let mut image_buf = image::RgbaImage::new(params.width, params.height);
    for iy in 0..params.height {
        for ix in 0..params.width {
            let base = ((iy * params.width + ix) * 4) as usize;
            let channel = |c: usize| (pixels[base + c] * 255.0).round() as u8;
            image_buf.put_pixel(
                ix,
                iy,
                image::Rgba([channel(0), channel(1), channel(2), channel(3)]),
            );
        }
    }

    image_buf.save("out/gradient.png").unwrap();
}
