//! # Ban-Sentry Benchmarks
//!
//! | Area | Operation | Target |
//! |------|-----------|--------|
//! | bs-01 Checksum | Comment checksum | < 10μs |
//! | bs-01 Checksum | Credential digest | < 5μs |
//! | bs-02 Registry | Safety check on populated store | < 50μs |
//! | bs-02 Registry | Ban record with index rewrite | < 50μs |

use bs_01_checksum::{credential_digest, level_comment_checksum, profile_comment_checksum};
use bs_02_ban_registry::{BanRegistryApi, SafetyGateApi};
use bs_tests::benchmarks::registry::{populated_registry, random_host};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

// ============================================================================
// BS-01: Checksum Benchmarks
// ============================================================================

fn bench_checksums(c: &mut Criterion) {
    let mut group = c.benchmark_group("bs-01-checksum");

    group.bench_function("credential_digest", |b| {
        b.iter(|| black_box(credential_digest(black_box(b"pw123"))))
    });

    group.bench_function("profile_comment", |b| {
        b.iter(|| black_box(profile_comment_checksum("alice", black_box("SGVsbG8gd29ybGQ="))))
    });

    for len in [16usize, 256, 4096] {
        let content = "A".repeat(len);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("level_comment", len), &content, |b, c| {
            b.iter(|| black_box(level_comment_checksum("alice", c, 128, 42)))
        });
    }

    group.finish();
}

// ============================================================================
// BS-02: Registry Benchmarks
// ============================================================================

fn bench_safety_gate(c: &mut Criterion) {
    let mut group = c.benchmark_group("bs-02-safety-gate");
    group.measurement_time(Duration::from_secs(5));

    for accounts in [100usize, 1_000, 10_000] {
        let registry = populated_registry(accounts, 2);
        let probe = format!("bot{}", accounts / 2);

        group.bench_with_input(
            BenchmarkId::new("check_safety_banned", accounts),
            &probe,
            |b, name| b.iter(|| black_box(registry.check_safety(name, "203.0.113.9"))),
        );
        group.bench_with_input(
            BenchmarkId::new("check_safety_clean", accounts),
            &accounts,
            |b, _| b.iter(|| black_box(registry.check_safety("fresh", "203.0.113.9"))),
        );
    }

    group.finish();
}

fn bench_record_ban(c: &mut Criterion) {
    let mut group = c.benchmark_group("bs-02-record-ban");
    let registry = populated_registry(1_000, 1);
    let mut rng = rand::thread_rng();

    group.bench_function("record_ban_new_host", |b| {
        b.iter(|| {
            let host = random_host(&mut rng);
            black_box(registry.record_ban("1_60_spam (bench)", None, &host))
        })
    });

    group.bench_function("record_ban_overwrite", |b| {
        b.iter(|| black_box(registry.record_ban("1_60_spam (bench)", None, "198.51.100.7")))
    });

    group.finish();
}

criterion_group!(benches, bench_checksums, bench_safety_gate, bench_record_ban);
criterion_main!(benches);
