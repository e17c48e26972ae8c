use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgb};
use pixveil_core::{encode, CodecOptions, Password, RgbImage};

fn prepare_image(width: u32, height: u32, salt: u32) -> RgbImage {
    ImageBuffer::from_fn(width, height, |x, y| {
        Rgb([(x ^ salt) as u8, (y ^ salt) as u8, (x + y) as u8])
    })
}

pub fn image_encoding(c: &mut Criterion) {
    let cover = prepare_image(512, 512, 0x55);
    let secret = prepare_image(512, 512, 0xAA);
    let options = CodecOptions::default();

    c.bench_function("Image Encoding", |b| {
        b.iter(|| encode(&cover, &secret, &options, &Password::default()).expect("Cannot encode"))
    });

    let password: Password = "SuperSecret42".into();
    c.bench_function("Image Encoding with password", |b| {
        b.iter(|| encode(&cover, &secret, &options, &password).expect("Cannot encode"))
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
