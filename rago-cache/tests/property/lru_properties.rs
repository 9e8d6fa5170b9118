use rago_cache::LruBox;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Get(u8),
    Put(u8, u32),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..16).prop_map(Op::Get),
        (0u8..16, any::<u32>()).prop_map(|(k, v)| Op::Put(k, v)),
    ]
}

/// Reference model: a Vec ordered most → least recently used.
fn apply_model(model: &mut Vec<(u8, u32)>, cap: usize, op: &Op) -> Option<u32> {
    match *op {
        Op::Get(k) => {
            let pos = model.iter().position(|(mk, _)| *mk == k)?;
            let entry = model.remove(pos);
            model.insert(0, entry);
            Some(entry.1)
        }
        Op::Put(k, v) => {
            if let Some(pos) = model.iter().position(|(mk, _)| *mk == k) {
                model.remove(pos);
            } else if model.len() == cap {
                model.pop();
            }
            model.insert(0, (k, v));
            None
        }
    }
}

proptest! {
    #[test]
    fn size_never_exceeds_capacity(cap in 1usize..8, ops in prop::collection::vec(op(), 0..200)) {
        let mut lru = LruBox::new(cap).unwrap();
        for op in &ops {
            match *op {
                Op::Get(k) => { lru.get(&k); }
                Op::Put(k, v) => { lru.put(k, v); }
            }
            prop_assert!(lru.len() <= cap);
        }
    }

    #[test]
    fn matches_reference_model(cap in 1usize..8, ops in prop::collection::vec(op(), 0..200)) {
        let mut lru = LruBox::new(cap).unwrap();
        let mut model: Vec<(u8, u32)> = Vec::new();
        for op in &ops {
            let expected = apply_model(&mut model, cap, op);
            match *op {
                Op::Get(k) => prop_assert_eq!(lru.get(&k).copied(), expected),
                Op::Put(k, v) => { lru.put(k, v); }
            }
            let resident: Vec<(u8, u32)> = lru.iter().map(|(k, v)| (*k, *v)).collect();
            prop_assert_eq!(&resident, &model);
        }
    }

    #[test]
    fn resident_keys_are_most_recent_distinct_puts(cap in 1usize..8, keys in prop::collection::vec(0u8..32, 0..100)) {
        let mut lru = LruBox::new(cap).unwrap();
        for &k in &keys {
            lru.put(k, 0u32);
        }
        let mut expected: Vec<u8> = Vec::new();
        for &k in keys.iter().rev() {
            if !expected.contains(&k) {
                expected.push(k);
            }
            if expected.len() == cap {
                break;
            }
        }
        let resident: Vec<u8> = lru.keys().copied().collect();
        prop_assert_eq!(resident, expected);
    }
}
