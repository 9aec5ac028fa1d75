extern crate equilibre;

use std::{collections::BTreeMap, hint::black_box};

use criterion::{Criterion, criterion_group, criterion_main};

fn insert(c: &mut Criterion) {
    c.bench_function("equilibre_insert", |b| {
        b.iter(|| {
            let mut tree = equilibre::AvlTree::new();
            for k in 0..100i64 {
                let _ = tree.insert(k, k.to_string());
            }
            black_box(tree)
        })
    });
    c.bench_function("rbtree_insert", |b| {
        b.iter(|| {
            let mut tree = rbtree::RBTree::<i64, String>::new();
            for k in 0..100i64 {
                tree.insert(k, k.to_string());
            }
            black_box(tree)
        })
    });
    c.bench_function("btreemap_insert", |b| {
        b.iter(|| {
            let mut tree = BTreeMap::<i64, String>::new();
            for k in 0..100i64 {
                tree.insert(k, k.to_string());
            }
            black_box(tree)
        })
    });
}

fn get(c: &mut Criterion) {
    let mut tree = equilibre::AvlTree::new();
    for k in 0..1000i64 {
        let _ = tree.insert(k, k.to_string());
    }
    c.bench_function("equilibre_get", |b| {
        b.iter(|| {
            for k in 0..1000i64 {
                black_box(tree.get(k));
            }
        })
    });
    let mut tree = rbtree::RBTree::<i64, String>::new();
    for k in 0..1000i64 {
        tree.insert(k, k.to_string());
    }
    c.bench_function("rbtree_get", |b| {
        b.iter(|| {
            for k in 0..1000i64 {
                black_box(tree.get(&k));
            }
        })
    });
}

fn remove(c: &mut Criterion) {
    let mut full = equilibre::AvlTree::new();
    for k in 0..100i64 {
        let _ = full.insert(k, k.to_string());
    }
    c.bench_function("equilibre_remove", |b| {
        b.iter(|| {
            let mut tree = full.clone();
            for k in (0..100i64).rev() {
                black_box(tree.remove(k));
            }
        })
    });
}

criterion_group!(benches, insert, get, remove);
criterion_main!(benches);
