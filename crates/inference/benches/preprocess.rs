use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use inference::processing::pre::Preprocessor;
use schema::ColorFormat;

fn benchmark_letterbox(c: &mut Criterion) {
    let mut group = c.benchmark_group("letterbox");

    let resolutions = [(1280u32, 720u32, "hd"), (1920, 1080, "full_hd")];

    for (width, height, label) in resolutions.iter() {
        let pixels = vec![127u8; (*width * *height * 3) as usize];
        let mut pre = Preprocessor::new((640, 640));

        group.bench_with_input(BenchmarkId::new("rgb", label), &pixels, |b, pixels| {
            b.iter(|| {
                let out = pre
                    .run(black_box(pixels), *width, *height, ColorFormat::RGB)
                    .unwrap();
                black_box(out.tensor);
            });
        });

        group.bench_with_input(BenchmarkId::new("bgr", label), &pixels, |b, pixels| {
            b.iter(|| {
                let out = pre
                    .run(black_box(pixels), *width, *height, ColorFormat::BGR)
                    .unwrap();
                black_box(out.tensor);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_letterbox);
criterion_main!(benches);
