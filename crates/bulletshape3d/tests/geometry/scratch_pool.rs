use bulletshape3d::utils::{with_traversal_stack, ScratchSlot, ScratchStack};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

#[test]
fn random_frames_keep_live_values_intact() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut stack = ScratchStack::<u64>::new();
    let mut open: Vec<Vec<(ScratchSlot, u64)>> = Vec::new();
    let mut peak = 0;

    for _ in 0..2000 {
        match rng.gen_range(0..4) {
            0 => {
                stack.push();
                open.push(Vec::new());
            }
            1 if !open.is_empty() => {
                stack.pop();
                let _ = open.pop();
            }
            _ if !open.is_empty() => {
                let value = rng.gen::<u64>();
                let slot = stack.get_with(value);
                open.last_mut().unwrap().push((slot, value));
            }
            _ => {}
        }

        let live: Vec<_> = open.iter().flatten().collect();
        peak = peak.max(live.len());
        assert_eq!(stack.depth(), open.len());
        assert_eq!(stack.in_use(), live.len());

        let ids: HashSet<_> = live.iter().map(|(slot, _)| slot.checkout_id()).collect();
        assert_eq!(ids.len(), live.len());

        for (slot, value) in live {
            assert_eq!(stack.get_ref(*slot), value);
        }
    }

    assert_eq!(stack.allocated(), peak);
}

#[test]
fn recycled_buffers_keep_their_capacity() {
    let mut stack = ScratchStack::<Vec<u32>>::new();

    stack.push();
    let slot = stack.get();
    stack.get_mut(slot).extend(0..100);
    stack.pop();

    stack.push();
    let slot = stack.get();
    assert!(stack.get_ref(slot).capacity() >= 100);
    stack.pop();

    assert_eq!(stack.allocated(), 1);
}

#[test]
fn values_escape_frames_through_pop_returning() {
    let mut stack = ScratchStack::<Vec<u32>>::new();
    stack.push();
    let outer = stack.get_with(vec![1]);

    stack.push();
    let inner = stack.get_with(vec![2, 3]);
    let escaped = stack.pop_returning(inner);

    assert_eq!(escaped, vec![2, 3]);
    assert_eq!(stack.get_ref(outer), &vec![1]);
    stack.pop();
    assert_eq!(stack.depth(), 0);
}

#[test]
#[should_panic(expected = "belongs to an outer frame")]
fn pop_returning_an_outer_slot_panics() {
    let mut stack = ScratchStack::<Vec<u32>>::new();
    stack.push();
    let outer = stack.get();
    stack.push();
    let _ = stack.pop_returning(outer);
}

#[test]
fn traversal_stacks_are_per_thread() {
    let handles: Vec<_> = (0..4u32)
        .map(|i| {
            std::thread::spawn(move || {
                (0..100)
                    .map(|_| {
                        with_traversal_stack(|stack| {
                            assert!(stack.is_empty());
                            stack.extend(0..i + 1);
                            with_traversal_stack(|inner| {
                                assert!(inner.is_empty());
                                inner.push(i);
                            });
                            stack.len()
                        })
                    })
                    .sum::<usize>()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap(), 100 * (i + 1));
    }
}
