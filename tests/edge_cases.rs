use pradix::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn identity(v: &u32) -> u32 {
    *v
}

#[test]
fn test_empty() {
    let mut data: Vec<u32> = vec![];
    sort_in_place(&mut data, identity, ByKey(identity), 100, 4).unwrap();
    assert!(data.is_empty());

    let mut out: Vec<u32> = vec![];
    sort_copy(&data, &mut out, identity, ByKey(identity), 100, 4).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_single_element() {
    let mut data = vec![42u32];
    sort_in_place(&mut data, identity, ByKey(identity), 42, 4).unwrap();
    assert_eq!(data, vec![42]);

    let mut out = vec![0u32];
    sort_copy(&data, &mut out, identity, ByKey(identity), 42, 4).unwrap();
    assert_eq!(out, vec![42]);
}

#[test]
fn test_all_equal_keys() {
    let mut rng = StdRng::seed_from_u64(42);
    // 10k records with one key: a single bucket resolved by the comparator.
    let input: Vec<(u32, i64)> = (0..10_000).map(|_| (77, rng.random())).collect();
    let mut expected = input.clone();
    expected.sort();

    let hash = |p: &(u32, i64)| p.0;
    let cmp = |a: &(u32, i64), b: &(u32, i64)| a.cmp(b);

    let mut data = input.clone();
    sort_in_place(&mut data, hash, cmp, 77, 3).unwrap();
    assert_eq!(data, expected);

    let mut out = vec![(0, 0); input.len()];
    sort_copy(&input, &mut out, hash, cmp, 77, 3).unwrap();
    assert_eq!(out, expected);
}

#[test]
fn test_max_key_zero() {
    let input: Vec<(u8, i32)> = (0..5_000).rev().map(|i| (0, i)).collect();
    let hash = |p: &(u8, i32)| p.0;
    let cmp = |a: &(u8, i32), b: &(u8, i32)| a.1.cmp(&b.1);

    let mut data = input.clone();
    sort_in_place(&mut data, hash, cmp, 0, 2).unwrap();
    assert!(data.windows(2).all(|w| w[0].1 < w[1].1));

    let mut out = vec![(0, 0); input.len()];
    sort_copy(&input, &mut out, hash, cmp, 0, 2).unwrap();
    assert_eq!(out, data);
}

#[test]
fn test_more_threads_than_buckets() {
    let mut rng = StdRng::seed_from_u64(1);
    // max_key 3 gives four top-level buckets.
    let input: Vec<u32> = (0..20_000).map(|_| rng.random_range(0..4)).collect();
    let mut expected = input.clone();
    expected.sort();

    let mut data = input.clone();
    sort_in_place(&mut data, identity, ByKey(identity), 3, 32).unwrap();
    assert_eq!(data, expected);

    let mut out = vec![0; input.len()];
    sort_copy(&input, &mut out, identity, ByKey(identity), 3, 32).unwrap();
    assert_eq!(out, expected);
}

#[test]
fn test_more_threads_than_records() {
    let input = vec![9u32, 2, 5];
    let mut out = vec![0; 3];
    sort_copy(&input, &mut out, identity, ByKey(identity), 9, 16).unwrap();
    assert_eq!(out, vec![2, 5, 9]);
}

#[test]
fn test_reversed_and_sorted() {
    let sorted: Vec<u32> = (0..8_000).collect();
    let reversed: Vec<u32> = sorted.iter().rev().copied().collect();

    let mut data = reversed.clone();
    sort_in_place(&mut data, identity, ByKey(identity), 7_999, 4).unwrap();
    assert_eq!(data, sorted);

    let mut data = sorted.clone();
    sort_in_place(&mut data, identity, ByKey(identity), 7_999, 4).unwrap();
    assert_eq!(data, sorted);
}

#[test]
fn test_key_above_bound_is_rejected() {
    let mut data = vec![1u32, 2, 300, 4];
    let before = data.clone();
    let err = sort_in_place(&mut data, identity, ByKey(identity), 255, 2).unwrap_err();
    assert!(matches!(err, SortError::KeyOutOfRange { index: 2, key: 300, max: 255 }));
    assert_eq!(data, before);
    assert_eq!(
        err.to_string(),
        "key 300 at index 2 exceeds the declared maximum 255"
    );
}

#[test]
fn test_short_destination_is_rejected() {
    let input = vec![3u32, 1, 2];
    let mut out = vec![0u32; 1];
    let err = sort_copy(&input, &mut out, identity, ByKey(identity), 3, 1).unwrap_err();
    assert!(matches!(err, SortError::DestinationTooSmall { required: 3, actual: 1 }));
    assert_eq!(out, vec![0]);
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut data = vec![3u32, 1, 2];
    let config = SortConfig::default().with_radix_bits(12);
    let err = sort_in_place_with(&mut data, identity, ByKey(identity), 3, &config).unwrap_err();
    assert!(matches!(err, SortError::InvalidConfig(_)));
    assert_eq!(data, vec![3, 1, 2]);

    let err = sort_copy(&data.clone(), &mut data, identity, ByKey(identity), 3, 0).unwrap_err();
    assert!(matches!(err, SortError::InvalidConfig(_)));
}

#[test]
#[should_panic(expected = "comparator gave up")]
fn test_worker_panic_reaches_caller() {
    let mut data: Vec<u32> = (0..10_000).rev().collect();
    let cmp = |a: &u32, b: &u32| {
        if *a == 5_000 || *b == 5_000 {
            panic!("comparator gave up");
        }
        a.cmp(b)
    };
    let _ = sort_in_place(&mut data, |v: &u32| *v >> 8, cmp, 9_999 >> 8, 4);
}
