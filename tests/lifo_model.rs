//! Random push/pop/peek sequences, checked against a `Vec` model.

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rpn_calc::{Stack, StackError};

fn check_against_model<const N: usize>(seed: u64, steps: usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut stack: Stack<N> = Stack::new();
    let mut model: Vec<f32> = Vec::with_capacity(N);

    for _ in 0..steps {
        match rng.gen_range(0..4) {
            // Bias towards pushing so the stack actually fills up.
            0 | 1 => {
                let value: f32 = rng.gen_range(-1e6..1e6);
                let result = stack.push(value);
                if model.len() < N {
                    assert_eq!(result, Ok(()));
                    model.push(value);
                } else {
                    assert_eq!(result, Err(StackError::Overflow));
                }
            }
            2 => {
                let expected = model.pop().ok_or(StackError::Underflow);
                assert_eq!(stack.pop(), expected);
            }
            _ => {
                let expected = model.last().copied().ok_or(StackError::Underflow);
                assert_eq!(stack.peek(), expected);
            }
        }

        assert_eq!(stack.as_slice(), &model[..]);
        assert_eq!(stack.len(), model.len());
        assert_eq!(stack.is_empty(), model.is_empty());
        assert_eq!(stack.is_full(), model.len() == N);
    }
}

#[test]
fn default_capacity_matches_model() {
    for seed in 0..16 {
        check_against_model::<20>(seed, 500);
    }
}

#[test]
fn tiny_capacities_match_model() {
    for seed in 0..8 {
        check_against_model::<1>(seed, 100);
        check_against_model::<3>(seed, 200);
    }
}

#[test]
fn fill_then_drain_is_reversed() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let values: Vec<f32> = (0..20).map(|_| rng.gen()).collect();

    let mut stack: Stack = Stack::new();
    for &v in &values {
        stack.push(v).unwrap();
    }
    assert!(stack.is_full());
    assert_eq!(stack.push(0.0), Err(StackError::Overflow));

    let drained: Vec<f32> = std::iter::from_fn(|| stack.pop().ok()).collect();
    let reversed: Vec<f32> = values.into_iter().rev().collect();
    assert_eq!(drained, reversed);
    assert!(stack.is_empty());
}
