// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Benchmarks for sorted insertion and cached lookup

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use repolist::prelude::*;
use std::path::{Path, PathBuf};

struct NoDirs;

impl ScanSource for NoDirs {
    fn patterns(&self) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    fn root(&self) -> PathBuf {
        PathBuf::from("/")
    }
}

struct InMemory;

impl RepoOpener for InMemory {
    fn open(&self, path: &Path, param: &str) -> Result<Repo> {
        Ok(Repo::new(path, param))
    }
}

fn paths(count: usize) -> Vec<PathBuf> {
    (0..count)
        .map(|i| PathBuf::from(format!("/srv/group{}/repo{}", i % 17, i)))
        .collect()
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add");
    for count in [100, 1_000, 5_000] {
        let paths = paths(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &paths, |b, paths| {
            b.iter(|| {
                let mut registry = Registry::with_opener(NoDirs, InMemory);
                for path in paths {
                    registry.add(path);
                }
                black_box(registry.len())
            });
        });
    }
    group.finish();
}

fn bench_cached_find(c: &mut Criterion) {
    let mut registry = Registry::with_opener(NoDirs, InMemory);
    for path in paths(1_000) {
        registry.add(&path);
    }

    c.bench_function("find_cached", |b| {
        b.iter(|| black_box(registry.find("repo777").map(|r| r.group.len())));
    });
}

criterion_group!(benches, bench_add, bench_cached_find);
criterion_main!(benches);
