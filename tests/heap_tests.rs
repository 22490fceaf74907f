use markov_sssp::data_structures::{IndexedMinHeap, PathRecord};
use markov_sssp::Error;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn record(vertex: usize, priority: f64) -> PathRecord<f64> {
    PathRecord::new(vertex, priority, None)
}

#[test]
fn test_new_heap_is_empty() {
    let heap: IndexedMinHeap<f64> = IndexedMinHeap::with_capacity(4);
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.capacity(), 4);
    assert!(heap.check_invariants());
}

#[test]
fn test_empty_heap_reports_empty_queue() {
    let mut heap: IndexedMinHeap<f64> = IndexedMinHeap::with_capacity(3);
    assert_eq!(heap.peek_min().unwrap_err(), Error::EmptyQueue);
    assert_eq!(heap.extract_min().unwrap_err(), Error::EmptyQueue);
}

#[test]
fn test_zero_capacity_rejects_every_insert() {
    let mut heap: IndexedMinHeap<f64> = IndexedMinHeap::with_capacity(0);
    for vertex in 0..3 {
        assert_eq!(
            heap.insert_or_decrease(record(vertex, 1.0)).unwrap_err(),
            Error::CapacityExceeded { capacity: 0 }
        );
    }
    assert!(heap.is_empty());
}

#[test]
fn test_vertex_outside_capacity_is_rejected() {
    let mut heap = IndexedMinHeap::with_capacity(2);
    assert_eq!(
        heap.insert_or_decrease(record(5, 1.0)).unwrap_err(),
        Error::InvalidVertex(5)
    );
    assert!(heap.check_invariants());
}

#[test]
fn test_extracts_in_priority_order() {
    let mut heap = IndexedMinHeap::with_capacity(6);
    for (vertex, priority) in [(0, 4.0), (1, 1.5), (2, 9.0), (3, 0.5), (4, 3.0), (5, 2.0)] {
        assert!(heap.insert_or_decrease(record(vertex, priority)).unwrap());
    }
    assert_eq!(heap.peek_min().unwrap().vertex, 3);

    let order: Vec<usize> = std::iter::from_fn(|| heap.extract_min().ok())
        .map(|r| r.vertex)
        .collect();
    assert_eq!(order, vec![3, 1, 5, 4, 0, 2]);
    assert!(heap.is_empty());
}

#[test]
fn test_decrease_key_moves_entry_up() {
    let mut heap = IndexedMinHeap::with_capacity(4);
    heap.insert_or_decrease(PathRecord::new(0, 1.0, None)).unwrap();
    heap.insert_or_decrease(PathRecord::new(1, 5.0, Some(0))).unwrap();
    heap.insert_or_decrease(PathRecord::new(2, 3.0, None)).unwrap();

    assert!(heap
        .insert_or_decrease(PathRecord::new(1, 0.5, Some(2)))
        .unwrap());
    assert_eq!(heap.len(), 3);
    assert_eq!(heap.priority_of(1), Some(0.5));

    let min = heap.extract_min().unwrap();
    assert_eq!(min.vertex, 1);
    assert_eq!(min.predecessor, Some(2));
    assert!(heap.check_invariants());
}

#[test]
fn test_insert_never_increases_a_key() {
    let mut heap = IndexedMinHeap::with_capacity(2);
    heap.insert_or_decrease(PathRecord::new(0, 2.0, Some(1))).unwrap();

    assert!(!heap.insert_or_decrease(PathRecord::new(0, 7.0, None)).unwrap());
    assert!(!heap.insert_or_decrease(PathRecord::new(0, 2.0, None)).unwrap());

    let stored = heap.peek_min().unwrap();
    assert_eq!(stored.priority, 2.0);
    assert_eq!(stored.predecessor, Some(1));
}

#[test]
fn test_left_child_wins_ties_when_sifting_down() {
    let mut heap = IndexedMinHeap::with_capacity(4);
    heap.insert_or_decrease(record(0, 0.0)).unwrap();
    heap.insert_or_decrease(record(1, 5.0)).unwrap();
    heap.insert_or_decrease(record(2, 5.0)).unwrap();
    heap.insert_or_decrease(record(3, 9.0)).unwrap();

    heap.extract_min().unwrap();
    assert_eq!(heap.peek_min().unwrap().vertex, 1);
    assert_eq!(heap.entries()[1].vertex, 3);
    assert_eq!(heap.entries()[2].vertex, 2);
}

#[test]
fn test_extracted_vertex_can_be_reinserted() {
    let mut heap = IndexedMinHeap::with_capacity(1);
    heap.insert_or_decrease(record(0, 1.0)).unwrap();
    assert!(heap.insert_or_decrease(record(0, 0.5)).unwrap());
    assert_eq!(heap.len(), 1);

    heap.extract_min().unwrap();
    assert!(!heap.contains(0));
    assert!(heap.insert_or_decrease(record(0, 3.0)).unwrap());
    assert!(heap.contains(0));
}

#[test]
fn test_random_operations_preserve_invariants() {
    const CAPACITY: usize = 64;

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut heap = IndexedMinHeap::with_capacity(CAPACITY);
        let mut model: Vec<Option<f64>> = vec![None; CAPACITY];

        for _ in 0..2_000 {
            if rng.gen_bool(0.6) {
                let vertex = rng.gen_range(0..CAPACITY);
                let priority = rng.gen_range(0.0..100.0);
                let stored = heap.insert_or_decrease(record(vertex, priority)).unwrap();

                let expected = match model[vertex] {
                    Some(current) => priority < current,
                    None => true,
                };
                assert_eq!(stored, expected, "seed {} vertex {}", seed, vertex);
                if expected {
                    model[vertex] = Some(priority);
                }
            } else {
                let live_min = model.iter().flatten().copied().fold(f64::INFINITY, f64::min);
                match heap.extract_min() {
                    Ok(min) => {
                        assert_eq!(min.priority, live_min, "seed {}", seed);
                        assert_eq!(model[min.vertex], Some(min.priority));
                        model[min.vertex] = None;
                    }
                    Err(err) => {
                        assert_eq!(err, Error::EmptyQueue);
                        assert!(model.iter().all(Option::is_none));
                    }
                }
            }

            assert!(heap.check_invariants(), "seed {}", seed);
            assert_eq!(heap.len(), model.iter().flatten().count());
            for (vertex, expected) in model.iter().enumerate() {
                assert_eq!(heap.priority_of(vertex), *expected);
            }
        }
    }
}
