//! Basic tests for ownvec-core

use std::cell::Cell;
use std::rc::Rc;

use ownvec_core::*;
use proptest::prelude::*;

/// Element type that records constructions and destructions
#[derive(Debug)]
struct Counted {
    value: i32,
    stats: Rc<Stats>,
}

#[derive(Debug, Default)]
struct Stats {
    created: Cell<usize>,
    dropped: Cell<usize>,
}

impl Stats {
    fn live(&self) -> usize {
        self.created.get() - self.dropped.get()
    }
}

impl Counted {
    fn new(value: i32, stats: &Rc<Stats>) -> Result<Self> {
        if value < 0 {
            return Err(Error::invalid_argument("value must not be negative"));
        }
        stats.created.set(stats.created.get() + 1);
        Ok(Self {
            value,
            stats: Rc::clone(stats),
        })
    }
}

impl Drop for Counted {
    fn drop(&mut self) {
        self.stats.dropped.set(self.stats.dropped.get() + 1);
    }
}

#[test]
fn test_emplace_access_clear_scenario() {
    let stats = Rc::new(Stats::default());
    let mut array = OwningArray::new();

    for value in [10, 20, 30] {
        array.try_emplace(|| Counted::new(value, &stats)).unwrap();
    }
    assert_eq!(array.len(), 3);
    assert_eq!(array.get(1).unwrap().value, 20);

    match array.get(10) {
        Err(Error::IndexOutOfRange { index, size }) => {
            assert_eq!(index, 10);
            assert_eq!(size, 3);
        }
        other => panic!("expected IndexOutOfRange, got {:?}", other.map(|c| c.value)),
    }

    array.clear();
    assert_eq!(array.len(), 0);
    assert_eq!(stats.dropped.get(), 3);
    assert_eq!(stats.created.get(), stats.dropped.get());
}

#[test]
fn test_rejected_constructor_leaves_array_unchanged() {
    let stats = Rc::new(Stats::default());
    let mut array = OwningArray::new();
    array.try_emplace(|| Counted::new(1, &stats)).unwrap();

    let err = array.try_emplace(|| Counted::new(-5, &stats)).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert_eq!(array.len(), 1);
    assert_eq!(stats.live(), 1);
}

#[test]
fn test_adopt_null_is_invalid_argument() {
    let mut array: OwningArray<String> = OwningArray::new();
    let err = array.adopt(None).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument { .. }));
    assert!(!err.is_domain());
    assert!(array.is_empty());
}

#[test]
fn test_move_transfer() {
    let stats = Rc::new(Stats::default());
    let mut source = OwningArray::with_capacity(4);
    for value in [1, 2, 3] {
        source.try_emplace(|| Counted::new(value, &stats)).unwrap();
    }

    let target = source.take();
    assert_eq!(target.len(), 3);
    let values: Vec<i32> = target.iter().map(|c| c.value).collect();
    assert_eq!(values, vec![1, 2, 3]);
    assert_eq!(source.len(), 0);
    assert_eq!(stats.live(), 3);

    source.try_emplace(|| Counted::new(4, &stats)).unwrap();
    assert_eq!(source.get(0).unwrap().value, 4);

    drop(target);
    drop(source);
    assert_eq!(stats.live(), 0);
}

#[test]
fn test_plain_move_keeps_contents() {
    let mut source = OwningArray::new();
    source.emplace("kept");
    let target = source;
    assert_eq!(target.get(0), Ok(&"kept"));
}

#[test]
fn test_domain_errors_catch_narrow_and_broad() {
    fn raise(kind: DomainError) -> Result<()> {
        Err(kind.into())
    }

    for kind in DomainError::ALL {
        let err = raise(kind).unwrap_err();
        assert!(err.is_domain());
        assert_eq!(err.domain_kind(), Some(kind));
        assert_eq!(err.to_string(), kind.message());
    }

    let err = raise(DomainError::InsufficientPrivileges).unwrap_err();
    assert!(matches!(
        err,
        Error::Domain(DomainError::InsufficientPrivileges)
    ));
}

#[derive(Debug, Clone)]
enum Op {
    Emplace(i32),
    Adopt(Option<i32>),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..1000i32).prop_map(Op::Emplace),
        2 => proptest::option::of(0..1000i32).prop_map(Op::Adopt),
        1 => Just(Op::Clear),
    ]
}

proptest! {
    #[test]
    fn prop_live_count_tracks_len(ops in proptest::collection::vec(op_strategy(), 0..64)) {
        let stats = Rc::new(Stats::default());
        {
            let mut array = OwningArray::new();
            for op in ops {
                match op {
                    Op::Emplace(value) => {
                        array.try_emplace(|| Counted::new(value, &stats)).unwrap();
                    }
                    Op::Adopt(Some(value)) => {
                        let boxed = Box::new(Counted::new(value, &stats).unwrap());
                        array.adopt(Some(boxed)).unwrap();
                    }
                    Op::Adopt(None) => {
                        let before = array.len();
                        prop_assert!(array.adopt(None).is_err());
                        prop_assert_eq!(array.len(), before);
                    }
                    Op::Clear => array.clear(),
                }
                prop_assert_eq!(stats.live(), array.len());
            }
        }
        prop_assert_eq!(stats.created.get(), stats.dropped.get());
    }

    #[test]
    fn prop_access_succeeds_iff_in_bounds(len in 0usize..32, index in 0usize..64) {
        let mut array = OwningArray::new();
        for value in 0..len {
            array.emplace(value);
        }

        match array.get(index) {
            Ok(value) => {
                prop_assert!(index < len);
                prop_assert_eq!(*value, index);
            }
            Err(err) => {
                prop_assert!(index >= len);
                prop_assert_eq!(err, Error::IndexOutOfRange { index, size: len });
            }
        }
        prop_assert_eq!(array.try_get(index).is_some(), index < len);
    }
}
