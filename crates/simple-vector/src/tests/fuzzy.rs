// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::SimpleVector;

#[derive(Debug, Clone)]
enum Op {
    PushBack(u32),
    Insert(usize, u32),
    Erase(usize),
    PopBack,
    Resize(usize),
    Reserve(usize),
    Clear,
    TakeFrom,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => any::<u32>().prop_map(Op::PushBack),
        3 => (any::<usize>(), any::<u32>()).prop_map(|(seed, value)| Op::Insert(seed, value)),
        2 => any::<usize>().prop_map(Op::Erase),
        1 => Just(Op::PopBack),
        1 => (0..48usize).prop_map(Op::Resize),
        1 => (0..96usize).prop_map(Op::Reserve),
        1 => Just(Op::Clear),
        1 => Just(Op::TakeFrom),
    ]
}

fn apply(vec: &mut SimpleVector<u32>, model: &mut Vec<u32>, op: Op) {
    match op {
        Op::PushBack(value) => {
            vec.push_back(value);
            model.push(value);
        }
        Op::Insert(seed, value) => {
            let index = seed % (model.len() + 1);
            assert_eq!(vec.insert(index, value), index);
            model.insert(index, value);
        }
        Op::Erase(seed) => {
            if !model.is_empty() {
                let index = seed % model.len();
                assert_eq!(vec.erase(index), index);
                model.remove(index);
            }
        }
        Op::PopBack => {
            if model.pop().is_some() {
                vec.pop_back();
            }
        }
        Op::Resize(len) => {
            let capacity = vec.capacity();
            vec.resize(len);
            model.resize(len, 0);
            assert!(vec.capacity() >= capacity);
        }
        Op::Reserve(capacity) => {
            let before = vec.capacity();
            vec.reserve(capacity);
            assert_eq!(vec.capacity(), before.max(capacity));
        }
        Op::Clear => {
            vec.clear();
            model.clear();
        }
        Op::TakeFrom => {
            let taken = SimpleVector::take_from(vec);
            assert_eq!(vec.len(), 0);
            assert_eq!(vec.capacity(), 0);
            *vec = taken;
        }
    }
}

fn vec_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(0u8..4, 0..6)
}

proptest! {
    #[test]
    fn random_operations_match_model_and_keep_invariants(
        ops in prop::collection::vec(op_strategy(), 0..64)
    ) {
        let mut vec = SimpleVector::new();
        let mut model = Vec::new();

        for op in ops {
            apply(&mut vec, &mut model, op);

            prop_assert!(vec.len() <= vec.capacity());
            prop_assert_eq!(vec.capacity() == 0, !vec.is_allocated());
            prop_assert_eq!(vec.as_slice(), model.as_slice());
        }
    }

    #[test]
    fn append_growth_is_logarithmic(count in 1..2_000usize) {
        let mut vec = SimpleVector::new();
        let mut growths = 0u32;
        let mut capacity = vec.capacity();

        for value in 0..count {
            vec.push_back(value);
            if vec.capacity() != capacity {
                growths += 1;
                capacity = vec.capacity();
            }
        }

        let bound = usize::BITS - count.leading_zeros() + 1;
        prop_assert!(growths <= bound);
        prop_assert!(vec.capacity() >= count);
        prop_assert!(vec.capacity() < 2 * count);
    }

    #[test]
    fn insert_then_erase_restores_sequence(
        values in prop::collection::vec(any::<i64>(), 0..32),
        seed in any::<usize>(),
        inserted in any::<i64>()
    ) {
        let original = SimpleVector::from_slice(&values);
        let mut vec = original.clone();
        let index = seed % (values.len() + 1);

        let position = vec.insert(index, inserted);
        prop_assert_eq!(vec[position], inserted);

        vec.erase(position);
        prop_assert_eq!(&vec, &original);
    }

    #[test]
    fn ordering_is_trichotomous(lhs in vec_strategy(), rhs in vec_strategy()) {
        let x = SimpleVector::from_slice(&lhs);
        let y = SimpleVector::from_slice(&rhs);

        let relations = [x < y, x == y, y < x];
        prop_assert_eq!(relations.iter().filter(|holds| **holds).count(), 1);
        prop_assert_eq!(x <= y, !(y < x));
        prop_assert_eq!(x >= y, !(x < y));
        prop_assert_eq!(x > y, y < x);
        prop_assert_eq!(x < y, lhs < rhs);
    }

    #[test]
    fn float_ordering_derives_from_less(
        lhs in prop::collection::vec(prop_oneof![Just(f64::NAN), (0u8..3).prop_map(f64::from)], 0..5),
        rhs in prop::collection::vec(prop_oneof![Just(f64::NAN), (0u8..3).prop_map(f64::from)], 0..5)
    ) {
        let x = SimpleVector::from_slice(&lhs);
        let y = SimpleVector::from_slice(&rhs);

        prop_assert!(!(x < y && y < x));
        prop_assert_eq!(x <= y, !(y < x));
        prop_assert_eq!(x >= y, !(x < y));
        prop_assert_eq!(x > y, y < x);
    }

    #[test]
    fn extend_growth_is_logarithmic(count in 1..2_000usize, chunk in 1..4usize) {
        let mut vec = SimpleVector::new();
        let mut growths = 0u32;
        let mut capacity = vec.capacity();

        for start in (0..count).step_by(chunk) {
            vec.extend(start..(start + chunk).min(count));
            if vec.capacity() != capacity {
                growths += 1;
                capacity = vec.capacity();
            }
        }

        let bound = usize::BITS - count.leading_zeros() + 1;
        prop_assert_eq!(vec.len(), count);
        prop_assert!(growths <= bound);
    }

    #[test]
    fn copies_are_independent(
        values in prop::collection::vec(any::<u16>(), 1..32),
        seed in any::<usize>()
    ) {
        let original = SimpleVector::from_slice(&values);
        let mut copy = original.clone();
        prop_assert_eq!(&copy, &original);

        let index = seed % values.len();
        copy[index] = copy[index].wrapping_add(1);
        copy.push_back(0);

        prop_assert_eq!(original.as_slice(), values.as_slice());
        prop_assert_ne!(&copy, &original);
    }

    #[test]
    fn checked_access_boundary(len in 0..64usize, k in 0..64usize) {
        let vec: SimpleVector<u8> = SimpleVector::with_len(len);

        prop_assert!(vec.at(len).is_err());
        prop_assert!(vec.at(len + k).is_err());
        if len > 0 {
            prop_assert!(vec.at(len - 1).is_ok());
        }
    }
}
