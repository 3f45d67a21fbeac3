// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{SimpleVector, SimpleVectorBehaviour, SimpleVectorError, simple_vector};

fn failing<T>(mut vec: SimpleVector<T>) -> SimpleVector<T> {
    vec.change_behaviour(SimpleVectorBehaviour::FailAtAllocation);
    vec
}

#[test]
fn test_default_behaviour_is_none() {
    assert_eq!(SimpleVectorBehaviour::default(), SimpleVectorBehaviour::None);
}

// =============================================================================
// try_push_back()
// =============================================================================

#[test]
fn test_push_back_allocation_failure_leaves_state_unchanged() {
    let mut vec = failing(simple_vector![1, 2]);
    let block = vec.as_ptr();

    let result = vec.try_push_back(3).err();

    assert_eq!(result, Some(SimpleVectorError::AllocationFailed { capacity: 4 }));
    assert_eq!(vec, [1, 2]);
    assert_eq!(vec.capacity(), 2);
    assert_eq!(vec.as_ptr(), block);
}

#[test]
fn test_push_back_within_capacity_ignores_behaviour() {
    let mut vec = SimpleVector::with_capacity(2);
    vec.change_behaviour(SimpleVectorBehaviour::FailAtAllocation);

    vec.try_push_back(1).expect("Failed to try_push_back(..)");

    assert_eq!(vec, [1]);
}

#[test]
fn test_behaviour_is_sticky_until_reset() {
    let mut vec: SimpleVector<u8> = failing(SimpleVector::new());

    assert!(vec.try_push_back(1).is_err());
    assert!(vec.try_push_back(1).is_err());

    vec.change_behaviour(SimpleVectorBehaviour::None);

    vec.try_push_back(1).expect("Failed to try_push_back(..)");
    assert_eq!(vec, [1]);
}

// =============================================================================
// try_insert()
// =============================================================================

#[test]
fn test_insert_growth_failure_leaves_state_unchanged() {
    let mut vec = failing(simple_vector![1, 2, 3]);

    let result = vec.try_insert(1, 9);

    assert_eq!(result, Err(SimpleVectorError::AllocationFailed { capacity: 6 }));
    assert_eq!(vec, [1, 2, 3]);
    assert_eq!(vec.capacity(), 3);
}

#[test]
fn test_insert_in_place_does_not_allocate() {
    let mut vec = SimpleVector::with_capacity(4);
    vec.push_back(1);
    vec.push_back(3);
    vec.change_behaviour(SimpleVectorBehaviour::FailAtAllocation);

    assert_eq!(vec.try_insert(1, 2), Ok(1));
    assert_eq!(vec, [1, 2, 3]);
}

// =============================================================================
// try_reserve(), try_resize()
// =============================================================================

#[test]
fn test_reserve_failure_leaves_state_unchanged() {
    let mut vec = failing(simple_vector![1, 2]);

    assert_eq!(
        vec.try_reserve(10),
        Err(SimpleVectorError::AllocationFailed { capacity: 10 })
    );
    assert_eq!(vec.capacity(), 2);
    assert_eq!(vec, [1, 2]);
}

#[test]
fn test_reserve_not_growing_never_fails() {
    let mut vec = failing(simple_vector![1, 2]);

    assert_eq!(vec.try_reserve(2), Ok(()));
}

#[test]
fn test_resize_failure_leaves_state_unchanged() {
    let mut vec = failing(simple_vector![1, 2]);

    assert_eq!(
        vec.try_resize(3),
        Err(SimpleVectorError::AllocationFailed { capacity: 4 })
    );
    assert_eq!(vec, [1, 2]);

    assert_eq!(vec.try_resize(1), Ok(()));
    assert_eq!(vec, [1]);
}

// =============================================================================
// behaviour is per instance
// =============================================================================

#[test]
fn test_copy_does_not_inherit_behaviour() {
    let source = failing(simple_vector![1]);
    let mut copy = SimpleVector::new();

    copy.try_assign(&source).expect("Failed to try_assign(..)");
    copy.try_push_back(2).expect("Failed to try_push_back(..)");

    assert_eq!(copy, [1, 2]);
}

// =============================================================================
// try_clone(), try_assign()
// =============================================================================

#[test]
fn test_try_clone_allocation_failure() {
    let mut vec = SimpleVector::with_capacity(4);
    vec.extend([1, 2]);
    let vec = failing(vec);

    assert_eq!(
        vec.try_clone().err(),
        Some(SimpleVectorError::AllocationFailed { capacity: 4 })
    );
    assert_eq!(vec, [1, 2]);
}

#[test]
fn test_try_clone_of_unallocated_never_fails() {
    let vec: SimpleVector<u64> = failing(SimpleVector::new());

    let copy = vec.try_clone().expect("Failed to try_clone(..)");

    assert!(!copy.is_allocated());
}

#[test]
fn test_try_assign_allocation_failure_leaves_target_untouched() {
    let mut target = failing(simple_vector![5, 6]);
    let block = target.as_ptr();
    let source = simple_vector![1, 2, 3];

    assert_eq!(
        target.try_assign(&source),
        Err(SimpleVectorError::AllocationFailed { capacity: 3 })
    );
    assert_eq!(target, [5, 6]);
    assert_eq!(target.capacity(), 2);
    assert_eq!(target.as_ptr(), block);
    assert_eq!(source, [1, 2, 3]);
}

#[test]
fn test_try_assign_keeps_target_behaviour() {
    let mut target = failing(simple_vector![5]);

    target.try_assign(&SimpleVector::new()).expect("Failed to try_assign(..)");
    assert!(target.is_empty());

    assert!(target.try_push_back(1).is_err());
}
