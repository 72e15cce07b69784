//! Throughput Benchmark for redlet
//!
//! This benchmark measures the performance of the keyspace and the RESP
//! parser under various workloads.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use redlet::protocol::parse_message;
use redlet::storage::Keyspace;
use std::sync::Arc;
use std::time::Duration;

/// Benchmark SET operations
fn bench_set(c: &mut Criterion) {
    let keyspace = Arc::new(Keyspace::new());

    let mut group = c.benchmark_group("set");
    group.throughput(Throughput::Elements(1));

    group.bench_function("set_small", |b| {
        let mut i = 0u64;
        b.iter(|| {
            let args = vec![format!("key:{}", i), "small_value".to_string()];
            keyspace.set(&args).unwrap();
            i += 1;
        });
    });

    group.bench_function("set_with_expiry", |b| {
        let mut i = 0u64;
        b.iter(|| {
            let args = vec![
                format!("key:{}", i),
                "value".to_string(),
                "PX".to_string(),
                "3600000".to_string(),
            ];
            keyspace.set(&args).unwrap();
            i += 1;
        });
    });

    group.bench_function("set_medium", |b| {
        let mut i = 0u64;
        let value = "x".repeat(1024); // 1KB value
        b.iter(|| {
            let args = vec![format!("key:{}", i), value.clone()];
            keyspace.set(&args).unwrap();
            i += 1;
        });
    });

    group.finish();
}

/// Benchmark GET operations
fn bench_get(c: &mut Criterion) {
    let keyspace = Arc::new(Keyspace::new());

    // Pre-populate with data
    for i in 0..100_000 {
        let args = vec![format!("key:{}", i), format!("value:{}", i)];
        keyspace.set(&args).unwrap();
    }

    let mut group = c.benchmark_group("get");
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_existing", |b| {
        let mut i = 0u64;
        b.iter(|| {
            let key = format!("key:{}", i % 100_000);
            black_box(keyspace.get(&key));
            i += 1;
        });
    });

    group.bench_function("get_missing", |b| {
        let mut i = 0u64;
        b.iter(|| {
            let key = format!("missing:{}", i);
            black_box(keyspace.get(&key));
            i += 1;
        });
    });

    group.finish();
}

/// Benchmark mixed workload (80% reads, 20% writes)
fn bench_mixed(c: &mut Criterion) {
    let keyspace = Arc::new(Keyspace::new());

    // Pre-populate
    for i in 0..10_000 {
        let args = vec![format!("key:{}", i), format!("value:{}", i)];
        keyspace.set(&args).unwrap();
    }

    let mut group = c.benchmark_group("mixed");
    group.throughput(Throughput::Elements(1));

    group.bench_function("80_read_20_write", |b| {
        let mut i = 0u64;
        b.iter(|| {
            if i % 5 == 0 {
                // 20% writes
                let args = vec![format!("new:{}", i), "value".to_string()];
                keyspace.set(&args).unwrap();
            } else {
                // 80% reads
                let key = format!("key:{}", i % 10_000);
                black_box(keyspace.get(&key));
            }
            i += 1;
        });
    });

    group.finish();
}

/// Benchmark concurrent access
fn bench_concurrent(c: &mut Criterion) {
    use std::thread;

    let mut group = c.benchmark_group("concurrent");
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("4_threads_mixed", |b| {
        b.iter(|| {
            let keyspace = Arc::new(Keyspace::new());
            let handles: Vec<_> = (0..4)
                .map(|t| {
                    let keyspace = Arc::clone(&keyspace);
                    thread::spawn(move || {
                        for i in 0..10_000 {
                            let key = format!("key:{}:{}", t, i);
                            let args = vec![key.clone(), "value".to_string()];
                            keyspace.set(&args).unwrap();
                            keyspace.get(&key);
                        }
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }

            black_box(keyspace.len());
        });
    });

    group.finish();
}

/// Benchmark RESP parsing
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Elements(1));

    let set_cmd = b"*3\r\n$3\r\nSET\r\n$8\r\nuser:101\r\n$5\r\nhello\r\n";
    group.bench_function("parse_set_command", |b| {
        b.iter(|| {
            black_box(parse_message(set_cmd).unwrap().unwrap());
        });
    });

    let large_value = format!("*3\r\n$3\r\nSET\r\n$3\r\nkey\r\n${}\r\n{}\r\n", 4096, "x".repeat(4096));
    group.bench_function("parse_large_bulk", |b| {
        b.iter(|| {
            black_box(parse_message(large_value.as_bytes()).unwrap().unwrap());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_set, bench_get, bench_mixed, bench_concurrent, bench_parse);

criterion_main!(benches);
