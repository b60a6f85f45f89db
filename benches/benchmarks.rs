//! Performance benchmarks for dirlog

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use dirlog::test_utils::TestTree;
use dirlog::{
    CancelFlag, DirectoryLogger, LogDocument, LoggerConfig, OutputFormat, PathWalker, Progress,
    WalkerConfig,
};
use dirlog::events::{MemorySink, Reporter};
use tempfile::TempDir;

/// Tree with 4 levels, 3 subdirectories and 10 files per directory.
fn create_test_tree() -> TestTree {
    let tree = TestTree::new();
    tree.populate(3, 3, 10);
    tree
}

fn walk(tree: &TestTree, workers: usize) -> LogDocument {
    let config = WalkerConfig {
        workers,
        ..Default::default()
    };
    let cancel = CancelFlag::new();
    let progress = Progress::new();
    let sink = MemorySink::new();
    PathWalker::new(&config, &cancel, &progress, Reporter::new(&sink, false))
        .walk(tree.path())
        .unwrap()
}

fn bench_counting_pass(c: &mut Criterion) {
    let tree = create_test_tree();
    let config = WalkerConfig::default();
    let cancel = CancelFlag::new();
    let progress = Progress::new();
    let sink = MemorySink::new();
    let walker = PathWalker::new(&config, &cancel, &progress, Reporter::new(&sink, false));

    c.bench_function("count_400_files", |b| {
        b.iter(|| walker.count(black_box(tree.path())).unwrap())
    });
}

fn bench_walk(c: &mut Criterion) {
    let tree = create_test_tree();
    let mut group = c.benchmark_group("walk");

    group.bench_function("sequential", |b| b.iter(|| walk(black_box(&tree), 1)));
    group.bench_function("four_workers", |b| b.iter(|| walk(black_box(&tree), 4)));
    group.bench_function("auto_workers", |b| b.iter(|| walk(black_box(&tree), 0)));

    group.finish();
}

fn bench_encoders(c: &mut Criterion) {
    let tree = create_test_tree();
    let doc = walk(&tree, 0);
    let mut group = c.benchmark_group("encode");

    for format in OutputFormat::ALL {
        group.bench_function(format.as_str(), |b| {
            b.iter(|| format.encode_to_vec(black_box(&doc)).unwrap())
        });
    }

    group.finish();
}

fn bench_full_run(c: &mut Criterion) {
    let tree = create_test_tree();
    let out = TempDir::new().unwrap();
    let logger = DirectoryLogger::new(LoggerConfig {
        format: OutputFormat::Json,
        ..LoggerConfig::new(tree.path(), out.path().join("log.json"))
    })
    .with_event_sink(std::sync::Arc::new(MemorySink::new()));

    c.bench_function("run_json", |b| {
        b.iter(|| logger.run_with_console(&mut Vec::new()).unwrap())
    });
}

criterion_group!(
    benches,
    bench_counting_pass,
    bench_walk,
    bench_encoders,
    bench_full_run,
);
criterion_main!(benches);
