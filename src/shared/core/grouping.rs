use std::collections::HashMap;
use std::hash::Hash;

/// Groups items by a derived key, preserving the first-seen order of keys.
/// Every input item lands in exactly one group.
pub fn group_by<T, K, F>(items: Vec<T>, mut key_fn: F) -> Vec<(K, Vec<T>)>
where
    K: Eq + Hash + Clone,
    F: FnMut(&T) -> K,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<T>)> = Vec::new();
    for item in items {
        let key = key_fn(&item);
        match index.get(&key) {
            Some(&at) => groups[at].1.push(item),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![item]));
            }
        }
    }
    groups
}

/// Second ordering pass over the groups produced by [`group_by`]. Name keys
/// sort alphabetically, week keys numerically; the comparator decides. The
/// underlying sort is stable.
pub fn sort_groups_by<T, K, F>(groups: &mut [(K, Vec<T>)], mut compare: F)
where
    F: FnMut(&K, &K) -> std::cmp::Ordering,
{
    groups.sort_by(|a, b| compare(&a.0, &b.0));
}

#[cfg(test)]
mod grouping_tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn entries() -> Vec<(&'static str, u32)> {
        vec![
            ("beta", 30),
            ("alfa", 60),
            ("beta", 90),
            ("gamma", 15),
            ("alfa", 45),
        ]
    }

    #[rstest]
    fn it_should_preserve_first_seen_key_order(entries: Vec<(&'static str, u32)>) {
        let groups = group_by(entries, |e| e.0);
        let keys: Vec<_> = groups.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["beta", "alfa", "gamma"]);
    }

    #[rstest]
    fn it_should_place_every_item_in_exactly_one_group(entries: Vec<(&'static str, u32)>) {
        let total = entries.len();
        let groups = group_by(entries, |e| e.0);
        let grouped: usize = groups.iter().map(|(_, items)| items.len()).sum();
        assert_eq!(grouped, total);
    }

    #[rstest]
    fn it_should_keep_item_order_within_a_group(entries: Vec<(&'static str, u32)>) {
        let groups = group_by(entries, |e| e.0);
        let beta = &groups[0].1;
        assert_eq!(beta.iter().map(|e| e.1).collect::<Vec<_>>(), vec![30, 90]);
    }

    #[rstest]
    fn it_should_sort_groups_with_the_supplied_comparator(entries: Vec<(&'static str, u32)>) {
        let mut groups = group_by(entries, |e| e.0);
        sort_groups_by(&mut groups, |a, b| a.cmp(b));
        let keys: Vec<_> = groups.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, vec!["alfa", "beta", "gamma"]);
    }

    #[rstest]
    fn it_should_return_no_groups_for_empty_input() {
        let groups = group_by(Vec::<(&str, u32)>::new(), |e| e.0);
        assert!(groups.is_empty());
    }
}
