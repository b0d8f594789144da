//! Free-function mirrors of every [`Seq`] operation, for callers who do not
//! want to wrap their data in the type.
//!
//! Transformation operations take the source last (`map(f, xs)`), matching
//! their curried builders in [`curried`]; aggregation operations take the
//! source first (`max_by(xs, selector)`).

use std::{
    any::Any,
    collections::{BTreeSet, HashMap, HashSet},
    fmt,
    hash::Hash,
    iter,
    ops::Add,
    vec,
};

use rand::Rng;

use crate::seq::adapters::{Chunked, Distinct, DistinctBy, FilterIsInstance};
use crate::seq::error::Result;
use crate::seq::Seq;

pub mod curried;

pub fn filter<S, P>(predicate: P, source: S) -> Seq<iter::Filter<S::IntoIter, P>>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    Seq::new(source).filter(predicate)
}

pub fn filter_not_none<S, R>(source: S) -> Seq<iter::Flatten<S::IntoIter>>
where
    S: IntoIterator<Item = Option<R>>,
{
    Seq::new(source).filter_not_none()
}

pub fn filter_is_instance<R, S>(source: S) -> Seq<FilterIsInstance<S::IntoIter, R>>
where
    S: IntoIterator<Item = Box<dyn Any>>,
    R: Any,
{
    Seq::new(source).filter_is_instance::<R>()
}

pub fn map<S, R, F>(f: F, source: S) -> Seq<iter::Map<S::IntoIter, F>>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> R,
{
    Seq::new(source).map(f)
}

pub fn map_not_none<S, R, F>(f: F, source: S) -> Seq<iter::FilterMap<S::IntoIter, F>>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> Option<R>,
{
    Seq::new(source).map_not_none(f)
}

pub fn flat_map<S, U, F>(f: F, source: S) -> Seq<iter::FlatMap<S::IntoIter, U, F>>
where
    S: IntoIterator,
    U: IntoIterator,
    F: FnMut(S::Item) -> U,
{
    Seq::new(source).flat_map(f)
}

pub fn flatten<S>(source: S) -> Seq<iter::Flatten<S::IntoIter>>
where
    S: IntoIterator,
    S::Item: IntoIterator,
{
    Seq::new(source).flatten()
}

pub fn drop<S>(n: usize, source: S) -> Seq<iter::Skip<S::IntoIter>>
where
    S: IntoIterator,
{
    Seq::new(source).drop(n)
}

pub fn drop_while<S, P>(predicate: P, source: S) -> Seq<iter::SkipWhile<S::IntoIter, P>>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    Seq::new(source).drop_while(predicate)
}

pub fn take<S>(n: usize, source: S) -> Seq<iter::Take<S::IntoIter>>
where
    S: IntoIterator,
{
    Seq::new(source).take(n)
}

pub fn take_while<S, P>(predicate: P, source: S) -> Seq<iter::TakeWhile<S::IntoIter, P>>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    Seq::new(source).take_while(predicate)
}

pub fn sorted<S>(source: S) -> Seq<vec::IntoIter<S::Item>>
where
    S: IntoIterator,
    S::Item: Ord,
{
    Seq::new(source).sorted()
}

pub fn sorted_by<S, K, F>(key_selector: F, source: S) -> Seq<vec::IntoIter<S::Item>>
where
    S: IntoIterator,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    Seq::new(source).sorted_by(key_selector)
}

pub fn sorted_desc<S>(source: S) -> Seq<vec::IntoIter<S::Item>>
where
    S: IntoIterator,
    S::Item: Ord,
{
    Seq::new(source).sorted_desc()
}

pub fn sorted_by_desc<S, K, F>(key_selector: F, source: S) -> Seq<vec::IntoIter<S::Item>>
where
    S: IntoIterator,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    Seq::new(source).sorted_by_desc(key_selector)
}

/// # Panics
///
/// Panics immediately if `size` is zero.
pub fn chunked<S>(size: usize, source: S) -> Seq<Chunked<S::IntoIter>>
where
    S: IntoIterator,
{
    Seq::new(source).chunked(size)
}

pub fn enumerate<S>(source: S) -> Seq<iter::Enumerate<S::IntoIter>>
where
    S: IntoIterator,
{
    Seq::new(source).enumerate()
}

pub fn shuffled<S>(source: S) -> Seq<vec::IntoIter<S::Item>>
where
    S: IntoIterator,
{
    Seq::new(source).shuffled()
}

pub fn shuffled_with<S, R>(rng: &mut R, source: S) -> Seq<vec::IntoIter<S::Item>>
where
    S: IntoIterator,
    R: Rng + ?Sized,
{
    Seq::new(source).shuffled_with(rng)
}

pub fn distinct<S>(source: S) -> Seq<Distinct<S::IntoIter>>
where
    S: IntoIterator,
    S::Item: Eq + Hash + Clone,
{
    Seq::new(source).distinct()
}

pub fn distinct_by<S, K, F>(key_selector: F, source: S) -> Seq<DistinctBy<S::IntoIter, F, K>>
where
    S: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&S::Item) -> K,
{
    Seq::new(source).distinct_by(key_selector)
}

pub fn partition<S, P>(predicate: P, source: S) -> (Vec<S::Item>, Vec<S::Item>)
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool,
{
    Seq::new(source).partition(predicate)
}

pub fn to_vec<S>(source: S) -> Vec<S::Item>
where
    S: IntoIterator,
{
    Seq::new(source).to_vec()
}

pub fn to_set<S>(source: S) -> HashSet<S::Item>
where
    S: IntoIterator,
    S::Item: Eq + Hash,
{
    Seq::new(source).to_set()
}

pub fn to_btree_set<S>(source: S) -> BTreeSet<S::Item>
where
    S: IntoIterator,
    S::Item: Ord,
{
    Seq::new(source).to_btree_set()
}

pub fn extend_into<S, C>(source: S, target: &mut C)
where
    S: IntoIterator,
    C: Extend<S::Item>,
{
    Seq::new(source).extend_into(target);
}

pub fn associate<S, K, V, F>(source: S, f: F) -> HashMap<K, V>
where
    S: IntoIterator,
    K: Eq + Hash,
    F: FnMut(S::Item) -> (K, V),
{
    Seq::new(source).associate(f)
}

pub fn associate_by<S, K, F>(source: S, key_selector: F) -> HashMap<K, S::Item>
where
    S: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&S::Item) -> K,
{
    Seq::new(source).associate_by(key_selector)
}

pub fn associate_with<S, V, F>(source: S, value_selector: F) -> HashMap<S::Item, V>
where
    S: IntoIterator,
    S::Item: Eq + Hash,
    F: FnMut(&S::Item) -> V,
{
    Seq::new(source).associate_with(value_selector)
}

pub fn group_by<S, K, F>(source: S, key_selector: F) -> HashMap<K, Vec<S::Item>>
where
    S: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&S::Item) -> K,
{
    Seq::new(source).group_by(key_selector)
}

pub fn all_by<S, P>(source: S, predicate: P) -> bool
where
    S: IntoIterator,
    P: FnMut(S::Item) -> bool,
{
    Seq::new(source).all(predicate)
}

pub fn any_by<S, P>(source: S, predicate: P) -> bool
where
    S: IntoIterator,
    P: FnMut(S::Item) -> bool,
{
    Seq::new(source).any(predicate)
}

pub fn none_by<S, P>(source: S, predicate: P) -> bool
where
    S: IntoIterator,
    P: FnMut(S::Item) -> bool,
{
    Seq::new(source).none(predicate)
}

pub fn max<S>(source: S) -> Result<S::Item>
where
    S: IntoIterator,
    S::Item: Ord,
{
    Seq::new(source).max()
}

pub fn max_or_none<S>(source: S) -> Option<S::Item>
where
    S: IntoIterator,
    S::Item: Ord,
{
    Seq::new(source).max_or_none()
}

pub fn max_by<S, K, F>(source: S, selector: F) -> Result<S::Item>
where
    S: IntoIterator,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    Seq::new(source).max_by(selector)
}

pub fn max_by_or_none<S, K, F>(source: S, selector: F) -> Option<S::Item>
where
    S: IntoIterator,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    Seq::new(source).max_by_or_none(selector)
}

pub fn min<S>(source: S) -> Result<S::Item>
where
    S: IntoIterator,
    S::Item: Ord,
{
    Seq::new(source).min()
}

pub fn min_or_none<S>(source: S) -> Option<S::Item>
where
    S: IntoIterator,
    S::Item: Ord,
{
    Seq::new(source).min_or_none()
}

pub fn min_by<S, K, F>(source: S, selector: F) -> Result<S::Item>
where
    S: IntoIterator,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    Seq::new(source).min_by(selector)
}

pub fn min_by_or_none<S, K, F>(source: S, selector: F) -> Option<S::Item>
where
    S: IntoIterator,
    K: Ord,
    F: FnMut(&S::Item) -> K,
{
    Seq::new(source).min_by_or_none(selector)
}

pub fn single<S>(source: S) -> Result<S::Item>
where
    S: IntoIterator,
{
    Seq::new(source).single()
}

pub fn single_or_none<S>(source: S) -> Option<S::Item>
where
    S: IntoIterator,
{
    Seq::new(source).single_or_none()
}

pub fn first<S>(source: S) -> Result<S::Item>
where
    S: IntoIterator,
{
    Seq::new(source).first()
}

pub fn first_or_none<S>(source: S) -> Option<S::Item>
where
    S: IntoIterator,
{
    Seq::new(source).first_or_none()
}

pub fn last<S>(source: S) -> Result<S::Item>
where
    S: IntoIterator,
{
    Seq::new(source).last()
}

pub fn last_or_none<S>(source: S) -> Option<S::Item>
where
    S: IntoIterator,
{
    Seq::new(source).last_or_none()
}

pub fn reduce<S, F>(source: S, operation: F) -> Result<S::Item>
where
    S: IntoIterator,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    Seq::new(source).reduce(operation)
}

pub fn reduce_or_none<S, F>(source: S, operation: F) -> Option<S::Item>
where
    S: IntoIterator,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    Seq::new(source).reduce_or_none(operation)
}

pub fn sum<S>(source: S) -> Result<S::Item>
where
    S: IntoIterator,
    S::Item: Add<Output = S::Item>,
{
    Seq::new(source).sum()
}

pub fn sum_or_none<S>(source: S) -> Option<S::Item>
where
    S: IntoIterator,
    S::Item: Add<Output = S::Item>,
{
    Seq::new(source).sum_or_none()
}

pub fn for_each<S, F>(source: S, action: F)
where
    S: IntoIterator,
    F: FnMut(S::Item),
{
    Seq::new(source).for_each(action);
}

pub fn join_to_string<S>(source: S, separator: &str, prefix: &str, suffix: &str) -> String
where
    S: IntoIterator,
    S::Item: fmt::Display,
{
    Seq::new(source).join_to_string(separator, prefix, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::error::SeqError;

    #[test]
    fn transformations_agree_with_the_method_forms() {
        let seq = vec![1, 2, 3, 4, 5];
        assert_eq!(
            filter(|&x: &i32| x % 2 == 0, seq.clone()).to_vec(),
            Seq::new(seq.clone()).filter(|&x| x % 2 == 0).to_vec()
        );
        assert_eq!(
            map(|x: i32| x * x, seq.clone()).to_vec(),
            Seq::new(seq.clone()).map(|x| x * x).to_vec()
        );
        assert_eq!(
            flat_map(|x: i32| [x, x * 10], seq.clone()).to_vec(),
            Seq::new(seq.clone()).flat_map(|x| [x, x * 10]).to_vec()
        );
        assert_eq!(drop(2, seq.clone()).to_vec(), vec![3, 4, 5]);
        assert_eq!(take(2, seq.clone()).to_vec(), vec![1, 2]);
        assert_eq!(
            drop_while(|&x: &i32| x < 3, seq.clone()).to_vec(),
            vec![3, 4, 5]
        );
        assert_eq!(
            take_while(|&x: &i32| x < 3, seq.clone()).to_vec(),
            vec![1, 2]
        );
        assert_eq!(
            chunked(2, seq.clone()).to_vec(),
            vec![vec![1, 2], vec![3, 4], vec![5]]
        );
        assert_eq!(sorted(vec![3, 1, 2]).to_vec(), vec![1, 2, 3]);
        assert_eq!(sorted_desc(vec![3, 1, 2]).to_vec(), vec![3, 2, 1]);
        assert_eq!(
            sorted_by(|w: &&str| w.len(), vec!["bcd", "a", "ef"]).to_vec(),
            vec!["a", "ef", "bcd"]
        );
        assert_eq!(
            sorted_by_desc(|w: &&str| w.len(), vec!["bcd", "a", "ef"]).to_vec(),
            vec!["bcd", "ef", "a"]
        );
        assert_eq!(enumerate(vec!["a", "b"]).to_vec(), vec![(0, "a"), (1, "b")]);
        assert_eq!(distinct(vec![1, 2, 1, 3]).to_vec(), vec![1, 2, 3]);
        assert_eq!(
            distinct_by(|w: &&str| w.chars().next(), vec!["apple", "banana", "pear", "apricot"])
                .to_vec(),
            vec!["apple", "banana", "pear"]
        );
        assert_eq!(
            partition(|&x: &i32| x % 2 == 0, seq),
            (vec![2, 4], vec![1, 3, 5])
        );
    }

    #[test]
    fn option_filters_agree_with_the_method_forms() {
        assert_eq!(
            filter_not_none(vec![Some(1), None, Some(2)]).to_vec(),
            vec![1, 2]
        );
        assert_eq!(
            map_not_none(
                |x: i32| if x % 2 == 0 { Some(x * 2) } else { None },
                vec![1, 2, 3, 4]
            )
            .to_vec(),
            vec![4, 8]
        );
        assert_eq!(
            flatten(vec![vec![1, 2], vec![3]]).to_vec(),
            vec![1, 2, 3]
        );

        let mixed: Vec<Box<dyn std::any::Any>> =
            vec![Box::new(1_i32), Box::new("two".to_string())];
        assert_eq!(filter_is_instance::<i32, _>(mixed).to_vec(), vec![1]);
    }

    #[test]
    fn aggregations_take_the_source_first() -> anyhow::Result<()> {
        let seq = vec![1, 2, 3, 4, 5];
        assert_eq!(to_vec(seq.clone()), seq);
        assert!(all_by(seq.clone(), |x| x > 0));
        assert!(any_by(seq.clone(), |x| x > 4));
        assert!(none_by(seq.clone(), |x| x > 5));
        assert_eq!(max(seq.clone())?, 5);
        assert_eq!(min(seq.clone())?, 1);
        assert_eq!(max_or_none(seq.clone()), Some(5));
        assert_eq!(min_or_none(seq.clone()), Some(1));
        assert_eq!(max_by_or_none(vec!["a", "bcd", "ef"], |w| w.len()), Some("bcd"));
        assert_eq!(min_by(vec!["a", "bcd", "ef"], |w| w.len())?, "a");
        assert_eq!(first(seq.clone())?, 1);
        assert_eq!(last(seq.clone())?, 5);
        assert_eq!(single(vec![9])?, 9);
        assert_eq!(single_or_none(seq.clone()), None);
        assert_eq!(reduce(seq.clone(), |a, b| a + b)?, 15);
        assert_eq!(sum(seq.clone())?, 15);
        assert_eq!(sum_or_none(Vec::<i32>::new()), None);
        assert_eq!(join_to_string(seq.clone(), ", ", "[", "]"), "[1, 2, 3, 4, 5]");

        let squares = associate(seq.clone(), |x| (x, x * x));
        assert_eq!(squares[&4], 16);
        let by_len = associate_by(vec!["a", "bc"], |w| w.len());
        assert_eq!(by_len[&2], "bc");
        let lengths = associate_with(vec!["a", "bc"], |w| w.len());
        assert_eq!(lengths["bc"], 2);
        let groups = group_by(seq.clone(), |x| x % 2);
        assert_eq!(groups[&1], vec![1, 3, 5]);

        let mut visited = Vec::new();
        for_each(seq, |x| visited.push(x));
        assert_eq!(visited, vec![1, 2, 3, 4, 5]);
        Ok(())
    }

    #[test]
    fn strict_free_functions_report_empty_input() {
        let empty = Vec::<i32>::new();
        assert_eq!(first(empty.clone()), Err(SeqError::empty_sequence("first")));
        assert_eq!(max(empty.clone()), Err(SeqError::empty_sequence("max")));
        assert_eq!(single(empty), Err(SeqError::empty_sequence("single")));
    }

    #[test]
    fn shuffled_forms_are_permutations() {
        use rand::SeedableRng;
        let mut rng = rand_chacha::ChaCha8Rng::seed_from_u64(42);
        let mut seeded = shuffled_with(&mut rng, vec![1, 2, 3, 4, 5]).to_vec();
        seeded.sort();
        assert_eq!(seeded, vec![1, 2, 3, 4, 5]);

        let mut unseeded = shuffled(vec![1, 2, 3, 4, 5]).to_vec();
        unseeded.sort();
        assert_eq!(unseeded, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn collection_conversions() {
        let seq = vec![3, 1, 2, 3];
        assert_eq!(to_set(seq.clone()).len(), 3);
        assert_eq!(
            to_btree_set(seq.clone()).into_iter().collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
        let mut target = vec![0];
        extend_into(seq, &mut target);
        assert_eq!(target, vec![0, 3, 1, 2, 3]);
    }
}
