use tileable_noise::{generate_cellular_field, CellMetric, CellularParams, ChannelSpec};

fn main() {
    let params = CellularParams {
        width: 512,
        height: 512,
        frequency: 8.0,
        seed: 5,
        metric: CellMetric::EuclideanF2F1,
        channels: ChannelSpec::GRAYSCALE,
        smoothness: 0.0,
        randomness: 1.0,
        minkowski_exponent: 3.0,
    };

    let field = generate_cellular_field(&params).unwrap();
    let pixels = field.raster.to_rgba();

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

    image_buf.save("out/cellular.png").unwrap();
}
