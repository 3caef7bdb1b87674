use criterion::{Criterion, criterion_group, criterion_main};
use graverobber::collect::{collect, normalize_content};
use graverobber::policy::ExclusionPolicy;
use graverobber::tree::render;
use std::fs;
use std::hint::black_box;
use std::path::PathBuf;
use tempfile::tempdir;

fn create_source_text(lines: usize) -> String {
    let mut text = String::new();
    for i in 0..lines {
        text.push_str(&format!("fn item_{i}() {{\n    let value = {i};\n}}\n\n"));
    }
    text
}

fn benchmark_policy_matching(c: &mut Criterion) {
    let policy = ExclusionPolicy::new(vec![PathBuf::from("/project/report.txt")]);
    let paths = [
        PathBuf::from("/project/src/main.rs"),
        PathBuf::from("/project/assets/logo.svg"),
        PathBuf::from("/project/node_modules/pkg/index.js"),
        PathBuf::from("/project/deep/nested/path/to/a/source/file.txt"),
        PathBuf::from("/project/yarn.lock"),
    ];

    c.bench_function("policy_matching", |b| {
        b.iter(|| {
            for path in &paths {
                black_box(policy.is_ignored(black_box(path)));
            }
        })
    });
}

fn benchmark_normalization(c: &mut Criterion) {
    let small = create_source_text(10);
    let medium = create_source_text(100);
    let large = create_source_text(1000);

    let mut group = c.benchmark_group("normalize_content");

    group.bench_function("small_file", |b| {
        b.iter(|| normalize_content(black_box(&small)))
    });

    group.bench_function("medium_file", |b| {
        b.iter(|| normalize_content(black_box(&medium)))
    });

    group.bench_function("large_file", |b| {
        b.iter(|| normalize_content(black_box(&large)))
    });

    group.finish();
}

fn benchmark_full_scan(c: &mut Criterion) {
    let dir = tempdir().unwrap();
    for d in 0..10 {
        let sub = dir.path().join(format!("module_{d}"));
        fs::create_dir(&sub).unwrap();
        for f in 0..10 {
            fs::write(sub.join(format!("file_{f}.rs")), create_source_text(20)).unwrap();
        }
    }
    let policy = ExclusionPolicy::new(Vec::new());

    let mut group = c.benchmark_group("full_scan");

    group.bench_function("tree_render", |b| {
        b.iter(|| render(black_box(dir.path()), black_box(&policy)).unwrap())
    });

    group.bench_function("collect", |b| {
        b.iter(|| collect(black_box(dir.path()), black_box(&policy)).unwrap())
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_policy_matching,
    benchmark_normalization,
    benchmark_full_scan
);
criterion_main!(benches);
