use super::*;

use crate::error::Error;
use proptest::prelude::*;
use std::collections::{BTreeMap, HashSet};

fn labels_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[A-Za-z0-9]{1,8}", 1..=12)
        .prop_map(|set| set.into_iter().collect())
}

#[derive(Debug, Clone)]
enum Op {
    /// Insert into the category at this index (modulo set size)
    Insert(usize, u32),
    /// Insert under a label that is not in the set
    InsertUnknown(u32),
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        9 => (any::<usize>(), any::<u32>()).prop_map(|(i, v)| Op::Insert(i, v)),
        1 => any::<u32>().prop_map(Op::InsertUnknown),
    ];
    prop::collection::vec(op, 0..=500)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_resolve_is_bijective(labels in labels_strategy()) {
        let set = CategorySet::new(labels.clone()).unwrap();
        let registry = SlotRegistry::new(&set);

        let mut seen = HashSet::new();
        for label in &labels {
            let slot = registry.resolve(label).unwrap();
            prop_assert!(slot < labels.len());
            prop_assert!(seen.insert(slot), "slot {} assigned twice", slot);
            prop_assert_eq!(registry.label(slot), Some(label.as_str()));
        }
        prop_assert_eq!(seen.len(), labels.len());
    }

    #[test]
    fn prop_unknown_labels_rejected(labels in labels_strategy(), probe in "[a-z_]{9,12}") {
        // Generated labels are at most 8 chars, so the probe is never a member.
        let set = CategorySet::new(labels).unwrap();
        let registry = SlotRegistry::new(&set);
        let mut store: BucketedStore<u32> = BucketedStore::new(&set);

        prop_assert!(matches!(registry.resolve(&probe), Err(Error::InvalidCategory(_))));
        prop_assert!(matches!(store.insert(&probe, 0), Err(Error::InvalidCategory(_))));
        prop_assert!(store.is_empty());
    }

    #[test]
    fn prop_store_matches_model(labels in labels_strategy(), ops in ops_strategy()) {
        let set = CategorySet::new(labels.clone()).unwrap();
        let mut store = BucketedStore::new(&set);
        let mut model: BTreeMap<String, Vec<u32>> = BTreeMap::new();
        let mut accepted = 0usize;

        for op in ops {
            match op {
                Op::Insert(i, value) => {
                    let label = &labels[i % labels.len()];
                    store.insert(label, value).unwrap();
                    model.entry(label.clone()).or_default().push(value);
                    accepted += 1;
                }
                Op::InsertUnknown(value) => {
                    prop_assert!(store.insert("not-a-category", value).is_err());
                }
            }
        }

        prop_assert_eq!(store.len(), accepted);
        let total: usize = store.counts().iter().map(|(_, n)| n).sum();
        prop_assert_eq!(total, accepted);

        for label in &labels {
            let expected = model.get(label).cloned().unwrap_or_default();
            prop_assert_eq!(store.bucket(label).unwrap(), expected.as_slice());
        }
    }

    #[test]
    fn prop_map_item_is_pure(idx in any::<usize>(), a in any::<i64>(), b in any::<f64>()) {
        let set = CategorySet::combined();
        let registry = SlotRegistry::new(&set);
        let store: BucketedStore<u32> = BucketedStore::new(&set);
        let label = set.get(idx % set.len()).unwrap();

        let first = registry.map_item(label, a, b).unwrap();
        let second = registry.map_item(label, a, b).unwrap();
        prop_assert_eq!(first.slot, second.slot);
        prop_assert_eq!(first.attr1, a);
        prop_assert_eq!(first.attr2.to_bits(), b.to_bits());
        prop_assert_eq!(second.attr2.to_bits(), b.to_bits());
        prop_assert!(store.is_empty());
    }

    #[test]
    fn prop_resorting_list_sorted(values in prop::collection::vec(any::<i32>(), 0..=200)) {
        let mut list = ResortingList::new();
        for &v in &values {
            list.insert(v);
        }

        let mut expected = values;
        expected.sort();
        prop_assert_eq!(list.as_slice(), expected.as_slice());
    }
}
