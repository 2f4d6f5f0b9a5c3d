use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// Import the crate functions we want to benchmark
use magento_static_regen::fsops::{FsDriver, LocalFs};

/// Create a test directory structure with N files
fn create_test_files(dir: &TempDir, count: usize) -> PathBuf {
    let root = dir.path().join("var").join("cache");
    fs::create_dir_all(&root).unwrap();

    for i in 0..count {
        let subdir = root.join(format!("dir{}", i % 10));
        fs::create_dir_all(&subdir).unwrap();
        let file = subdir.join(format!("file{}.txt", i));
        fs::write(&file, format!("content {}", i)).unwrap();
    }

    root
}

/// Benchmark clearing a directory's contents with different file counts
fn bench_clear_directory(c: &mut Criterion) {
    let mut group = c.benchmark_group("clear_directory");

    for file_count in [100, 500, 1000].iter() {
        group.throughput(Throughput::Elements(*file_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(file_count),
            file_count,
            |b, count| {
                b.iter_batched(
                    || {
                        let temp = TempDir::new().unwrap();
                        let root = create_test_files(&temp, *count);
                        (temp, root)
                    },
                    |(_temp, root)| LocalFs.clear_directory(black_box(&root)).unwrap(),
                    criterion::BatchSize::SmallInput,
                )
            },
        );
    }

    group.finish();
}

/// Benchmark recursive permission changes with different file counts
fn bench_chmod_recursive(c: &mut Criterion) {
    let mut group = c.benchmark_group("chmod_recursive");

    for file_count in [100, 500, 1000].iter() {
        let temp = TempDir::new().unwrap();
        let root = create_test_files(&temp, *file_count);

        group.throughput(Throughput::Elements(*file_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(file_count),
            file_count,
            |b, _| {
                b.iter(|| {
                    LocalFs
                        .chmod_recursive(black_box(&root), black_box(0o750), black_box(0o640))
                        .unwrap()
                })
            },
        );
    }

    group.finish();
}

/// Benchmark listing immediate children of a wide directory
fn bench_list_children(c: &mut Criterion) {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("pub").join("static");
    fs::create_dir_all(&root).unwrap();

    for i in 0..500 {
        fs::write(root.join(format!("entry{}.js", i)), "x").unwrap();
    }

    c.bench_function("list_children_500", |b| {
        b.iter(|| LocalFs.list_children(black_box(&root)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_clear_directory,
    bench_chmod_recursive,
    bench_list_children,
);
criterion_main!(benches);
