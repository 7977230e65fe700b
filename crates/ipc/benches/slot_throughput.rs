use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ipc::{Detection, DetectionWriter, FrameReader, FrameWriter};
use schema::ColorFormat;
use tempfile::tempdir;

fn benchmark_frame_publish(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_publish");

    let resolutions = [(640u32, 480u32, "vga"), (1920, 1080, "full_hd")];

    for (width, height, label) in resolutions.iter() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bench_frame.mmap");
        let size = (*width as usize) * (*height as usize) * 3 + 8192;

        let mut writer = FrameWriter::build_with_path(path.to_str().unwrap(), size).unwrap();
        let pixels = vec![128u8; (*width * *height * 3) as usize];
        let mut frame_number = 0u64;

        group.bench_with_input(BenchmarkId::new("write", label), &pixels, |b, pixels| {
            b.iter(|| {
                frame_number += 1;
                writer
                    .write(
                        frame_number,
                        frame_number * 1_000,
                        0,
                        *width,
                        *height,
                        ColorFormat::RGB,
                        black_box(pixels),
                    )
                    .unwrap();
            });
        });
    }

    group.finish();
}

fn benchmark_frame_read(c: &mut Criterion) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bench_frame_read.mmap");
    let path_str = path.to_str().unwrap();

    let mut writer = FrameWriter::build_with_path(path_str, 2 * 1024 * 1024).unwrap();
    let pixels = vec![42u8; 640 * 480 * 3];
    writer
        .write(1, 1_000, 0, 640, 480, ColorFormat::RGB, &pixels)
        .unwrap();

    let reader = FrameReader::with_path(path_str).unwrap();

    c.bench_function("frame_read_verified", |b| {
        b.iter(|| {
            let frame = reader.get_frame().unwrap();
            black_box(frame.frame_number());
        });
    });
}

fn benchmark_detection_publish(c: &mut Criterion) {
    let mut group = c.benchmark_group("detection_publish");

    for count in [1usize, 10, 100] {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bench_detection.mmap");

        let mut writer =
            DetectionWriter::build_with_path(path.to_str().unwrap(), 1024 * 1024).unwrap();

        let detections: Vec<Detection> = (0..count)
            .map(|i| Detection {
                x1: i as f32,
                y1: i as f32,
                x2: i as f32 + 50.0,
                y2: i as f32 + 80.0,
                confidence: 0.9,
                class_id: (i % 80) as u32,
            })
            .collect();
        let mut frame_number = 0u64;

        group.bench_with_input(
            BenchmarkId::new("write", count),
            &detections,
            |b, detections| {
                b.iter(|| {
                    frame_number += 1;
                    writer
                        .write(frame_number, frame_number, 0, black_box(detections))
                        .unwrap();
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_frame_publish,
    benchmark_frame_read,
    benchmark_detection_publish
);
criterion_main!(benches);
