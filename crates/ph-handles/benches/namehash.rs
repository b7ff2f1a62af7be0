//! # Project Handles Benchmarks
//!
//! ```bash
//! cargo bench --package ph-handles --bench namehash
//! ```
//!
//! Covers node derivation for bare and subdomain names, and a full
//! `handle_of` lookup against in-memory adapters.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ph_handles::prelude::*;
use std::sync::Arc;

fn bench_namehash(c: &mut Criterion) {
    let mut group = c.benchmark_group("namehash");

    for len in [4usize, 32, 256] {
        let name = "a".repeat(len);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("bare", len), &name, |b, name| {
            b.iter(|| namehash(black_box(name), black_box("")))
        });
        group.bench_with_input(BenchmarkId::new("subdomain", len), &name, |b, name| {
            b.iter(|| namehash(black_box(name), black_box("proj")))
        });
    }

    group.finish();
}

fn bench_handle_of(c: &mut Criterion) {
    let owner = Address::new([1; 20]);
    let registry = Arc::new(InMemoryProjectRegistry::new());
    let resolver = Arc::new(InMemoryTextResolver::new());
    let service = ProjectHandlesService::new(
        registry.clone(),
        InMemoryPermissionStore::new(),
        resolver.clone(),
        InMemoryClaimStore::new(),
        InMemoryHandleEventBus::new(),
    );

    let verified = registry.create(owner);
    let spoofed = registry.create(owner);
    let unset = registry.create(owner);

    let _ = service.set_name_with_subdomain(owner, verified, "alice", "proj");
    let _ = service.set_name(owner, spoofed, "bob");
    resolver.set_text_for_name("alice", "proj", TEXT_KEY, verified.to_string());
    resolver.set_text_for_name("bob", "", TEXT_KEY, verified.to_string());

    let mut group = c.benchmark_group("handle_of");
    for (label, id) in [("verified", verified), ("mismatch", spoofed), ("unset", unset)] {
        group.bench_function(label, |b| b.iter(|| service.handle_of(black_box(id))));
    }
    group.finish();
}

criterion_group!(benches, bench_namehash, bench_handle_of);
criterion_main!(benches);
