use tileable_noise::{generate_turbulence_field, ChannelSpec, TurbulenceParams};

fn main() {
    let params = TurbulenceParams {
        width: 512,
        height: 512,
        period: 128.0,
        seed: 7,
        depth: 5,
        lacunarity: 2.0,
        atten: 0.6,
        channels: ChannelSpec::GRAYSCALE,
        absolute: true,
    };

    let raster = generate_turbulence_field(&params).unwrap();
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

    image_buf.save("out/turbulence.png").unwrap();
}
