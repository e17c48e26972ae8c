use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgb};
use pixveil_core::{decode, CodecOptions, Password};

pub fn image_decoding(c: &mut Criterion) {
    let image_with_secret = ImageBuffer::from_fn(512, 512, |x, y| {
        Rgb([x as u8, y as u8, (x * y) as u8])
    });
    let options = CodecOptions::default();

    c.bench_function("Image Decoding", |b| {
        b.iter(|| decode(&image_with_secret, &options, &Password::default()))
    });

    let password: Password = "SuperSecret42".into();
    c.bench_function("Image Decoding with password", |b| {
        b.iter(|| decode(&image_with_secret, &options, &password))
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
