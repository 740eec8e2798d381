//! End-to-end builder scenarios.
//!
//! These run whole build cycles through the public API: sizing, growth,
//! finalize outcomes, and the representation each element type lands in.

use std::sync::Arc;

use stow_builder::{GrowableBuilder, Snapshot};
use stow_core::{BuilderConfig, ElementType, PrimitiveKind};
use stow_storage::{EmptySnapshotCache, Storage, StorageFactory};

fn isolated<T: std::any::Any + Send + Sync>(
    cache: &Arc<EmptySnapshotCache>,
) -> GrowableBuilder<T> {
    GrowableBuilder::with_factory(
        StorageFactory::new(Arc::clone(cache)),
        BuilderConfig::default(),
    )
    .unwrap()
}

#[test]
fn sized_build_of_ten_ints() {
    let mut builder = GrowableBuilder::<i32>::new();
    builder.size_hint(10);
    for i in 0..10 {
        builder.append(i);
    }
    assert_eq!(builder.capacity(), 10);
    assert_eq!(builder.stats().allocations, 1);

    let snap = builder.finalize();
    assert_eq!(snap.len(), 10);
    assert_eq!(snap.as_slice(), Some(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9][..]));
    // Exactly full, so the hinted allocation became the snapshot.
    assert_eq!(builder.stats().transfers, 1);
}

#[test]
fn twenty_appends_grow_to_thirty_two() {
    let mut builder = GrowableBuilder::<i32>::new();
    let mut seen_capacities = vec![builder.capacity()];
    for i in 0..20 {
        builder.append(i);
        if seen_capacities.last() != Some(&builder.capacity()) {
            seen_capacities.push(builder.capacity());
        }
    }
    assert_eq!(seen_capacities, vec![0, 16, 32]);
    assert_eq!(builder.len(), 20);
    assert_eq!(builder.capacity(), 32);

    let snap = builder.finalize();
    assert_eq!(snap.len(), 20);
    assert_eq!(snap.storage().len(), 20);
    assert_eq!(builder.stats().copies, 1);
    assert_eq!(builder.capacity(), 32);
}

#[test]
fn immediate_finalize_is_empty_of_matching_kind() {
    let snap = GrowableBuilder::<f64>::new().finalize();
    assert!(snap.is_empty());
    assert_eq!(snap.kind(), PrimitiveKind::Double);

    let snap = GrowableBuilder::<String>::new().finalize();
    assert!(snap.is_empty());
    assert_eq!(snap.kind(), PrimitiveKind::Reference);
}

#[test]
fn independent_builders_share_the_empty_instance() {
    let cache = EmptySnapshotCache::new().into_shared();
    let a = isolated::<char>(&cache).finalize();
    let b = isolated::<char>(&cache).finalize();
    assert!(a.shares_storage_with(&b));
    assert_eq!(cache.len(), 1);
    assert!(cache.contains(&ElementType::of::<char>()));
}

#[test]
fn global_builders_agree_on_empty_kind() {
    let a = GrowableBuilder::<bool>::new().finalize();
    let b = GrowableBuilder::<bool>::new().finalize();
    assert!(a.is_empty() && b.is_empty());
    assert_eq!(a.kind(), b.kind());
    assert_eq!(a, b);
}

#[test]
fn zero_copy_finalize_keeps_the_allocation() {
    let mut builder = GrowableBuilder::<f32>::new();
    for i in 0..16 {
        builder.append(i as f32);
    }
    let ptr = builder.storage().map(Storage::data_ptr);
    let snap = builder.finalize();
    assert_eq!(Some(snap.storage().data_ptr()), ptr);
    assert_eq!(builder.capacity(), 0);

    // The next build must not write into the handed-off storage.
    for i in 0..16 {
        builder.append(-(i as f32));
    }
    assert_eq!(snap.get(3), Some(&3.0));
    assert_ne!(builder.storage().map(Storage::data_ptr), ptr);
}

fn assert_packed<T>(values: Vec<T>, kind: PrimitiveKind)
where
    T: std::any::Any + Send + Sync + Clone + PartialEq + std::fmt::Debug,
{
    let mut builder = GrowableBuilder::<T>::new();
    for v in values.iter().cloned() {
        builder.append(v);
    }
    let snap: Snapshot<T> = builder.finalize();
    assert_eq!(snap.kind(), kind);
    assert!(kind.is_packed());
    assert_eq!(snap.as_slice(), Some(values.as_slice()));
    assert_eq!(snap.storage().memory_bytes(), values.len() * kind.slot_bytes());
}

#[test]
fn every_primitive_kind_stays_packed() {
    assert_packed(vec![1u8, 2, 255], PrimitiveKind::Byte);
    assert_packed(vec![-1i16, 300], PrimitiveKind::Short);
    assert_packed(vec![i32::MIN, 0, i32::MAX], PrimitiveKind::Int);
    assert_packed(vec![i64::MAX; 20], PrimitiveKind::Long);
    assert_packed(vec![0.5f32, -2.0], PrimitiveKind::Float);
    assert_packed(vec![std::f64::consts::PI], PrimitiveKind::Double);
    assert_packed(vec!['a', 'é', '€'], PrimitiveKind::Char);
    assert_packed(vec![true, false, true], PrimitiveKind::Boolean);
    assert_packed(vec![(); 33], PrimitiveKind::Unit);
}

#[test]
fn non_primitive_types_are_references() {
    #[derive(Clone, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    let mut builder = GrowableBuilder::<Point>::new();
    builder.append(Point { x: 1, y: 2 });
    builder.append(Point { x: 3, y: 4 });
    let snap = builder.finalize();
    assert_eq!(snap.kind(), PrimitiveKind::Reference);
    assert!(snap.as_slice().is_none());
    assert_eq!(snap.get(1), Some(&Point { x: 3, y: 4 }));

    let mut wide = GrowableBuilder::<u64>::new();
    wide.append(1);
    assert_eq!(wide.finalize().kind(), PrimitiveKind::Reference);
}

#[test]
fn snapshots_cross_threads() {
    let mut builder = GrowableBuilder::<String>::new();
    for word in ["alpha", "beta", "gamma"] {
        builder.append(word.to_string());
    }
    let snap = builder.finalize();
    let joined = std::thread::spawn(move || {
        snap.iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(",")
    })
    .join()
    .unwrap();
    assert_eq!(joined, "alpha,beta,gamma");
}

#[test]
fn concurrent_empty_finalizes_share_one_instance() {
    let cache = EmptySnapshotCache::new().into_shared();
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cache = Arc::clone(&cache);
            std::thread::spawn(move || isolated::<i16>(&cache).finalize())
        })
        .collect();
    let snaps: Vec<Snapshot<i16>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    for snap in &snaps {
        assert!(snap.is_empty());
        assert!(snap.shares_storage_with(&snaps[0]));
    }
    assert_eq!(cache.len(), 1);
}

#[test]
fn one_builder_many_builds() {
    let mut builder = GrowableBuilder::<i64>::new();
    let mut outputs = Vec::new();
    for round in 0..5i64 {
        builder.clear();
        for i in 0..(round * 7) {
            builder.append(round * 100 + i);
        }
        outputs.push(builder.finalize());
    }
    for (round, snap) in outputs.iter().enumerate() {
        let round = round as i64;
        let expected: Vec<i64> = (0..round * 7).map(|i| round * 100 + i).collect();
        assert_eq!(snap.to_vec(), expected);
    }
    assert_eq!(builder.stats().finalizations(), 5);
}
