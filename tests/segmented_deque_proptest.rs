use proptest::prelude::*;
use segdeque::SegmentedDeque;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
enum Operation {
    PushBack(u16),
    PushFront(u16),
    PopBack,
    PopFront,
    Insert(usize, u16),
    EraseAt(usize),
    EraseRange(usize, usize),
    Set(usize, u16),
    Get(usize),
}

fn operation() -> impl Strategy<Value = Operation> {
    prop_oneof![
        3 => any::<u16>().prop_map(Operation::PushBack),
        3 => any::<u16>().prop_map(Operation::PushFront),
        1 => Just(Operation::PopBack),
        1 => Just(Operation::PopFront),
        3 => (any::<usize>(), any::<u16>()).prop_map(|(p, v)| Operation::Insert(p, v)),
        2 => any::<usize>().prop_map(Operation::EraseAt),
        1 => (any::<usize>(), 0usize..12).prop_map(|(p, n)| Operation::EraseRange(p, n)),
        1 => (any::<usize>(), any::<u16>()).prop_map(|(p, v)| Operation::Set(p, v)),
        1 => any::<usize>().prop_map(Operation::Get),
    ]
}

/// Scales a raw index into `[0, bound]`, with a small chance of landing out of range.
fn pick(raw: usize, bound: usize) -> usize {
    raw % (bound + 2)
}

proptest! {
    #[test]
    fn test_segmented_deque_matches_vecdeque(ops in proptest::collection::vec(operation(), 1..400)) {
        let mut model: VecDeque<u16> = VecDeque::new();
        let mut dq: SegmentedDeque<u16, 4> = SegmentedDeque::new();

        for op in ops {
            match op {
                Operation::PushBack(v) => {
                    model.push_back(v);
                    dq.push_back(v);
                }
                Operation::PushFront(v) => {
                    model.push_front(v);
                    dq.push_front(v);
                }
                Operation::PopBack => prop_assert_eq!(dq.pop_back(), model.pop_back()),
                Operation::PopFront => prop_assert_eq!(dq.pop_front(), model.pop_front()),
                Operation::Insert(raw, v) => {
                    let pos = pick(raw, model.len());
                    if pos <= model.len() {
                        model.insert(pos, v);
                    }
                    dq.insert(pos, v);
                }
                Operation::EraseAt(raw) => {
                    let pos = pick(raw, model.len());
                    prop_assert_eq!(dq.erase_at(pos), model.remove(pos));
                }
                Operation::EraseRange(raw, n) => {
                    let first = pick(raw, model.len());
                    let last = first + n;
                    if first < last && last <= model.len() {
                        model.drain(first..last);
                    }
                    dq.erase_range(first, last);
                }
                Operation::Set(raw, v) => {
                    let pos = pick(raw, model.len());
                    let expected = match model.get_mut(pos) {
                        Some(slot) => {
                            *slot = v;
                            true
                        }
                        None => false,
                    };
                    prop_assert_eq!(dq.set(pos, v).is_ok(), expected);
                }
                Operation::Get(raw) => {
                    let pos = pick(raw, model.len());
                    prop_assert_eq!(dq.get(pos), model.get(pos));
                }
            }
            prop_assert_eq!(dq.len(), model.len());
            prop_assert!(dq.is_well_formed(), "layout broken after {:?}", dq);
        }

        prop_assert!(dq.iter().eq(model.iter()));
        prop_assert!(dq.iter().rev().eq(model.iter().rev()));
    }

    #[test]
    fn test_erase_range_then_insert_back_is_identity(
        len in 1usize..120,
        a in any::<usize>(),
        b in any::<usize>(),
    ) {
        let baseline: SegmentedDeque<usize, 8> = (0..len).collect();
        let (mut first, mut last) = (a % (len + 1), b % (len + 1));
        if first > last {
            core::mem::swap(&mut first, &mut last);
        }

        let mut dq = baseline.clone();
        dq.erase_range(first, last);
        prop_assert_eq!(dq.len(), len - (last - first));
        prop_assert!(dq.is_well_formed());

        for (k, v) in (first..last).enumerate() {
            dq.insert(first + k, v);
        }
        prop_assert_eq!(dq, baseline);
    }
}
