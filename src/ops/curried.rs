//! Curried builders for the transformation operations: each takes the
//! non-source arguments and returns a reusable closure from a source to the
//! result, ready to be threaded through any left-to-right pipe combinator.
//!
//! Captured functions are bounded `Clone` so one builder can be applied to
//! any number of sources.

use std::{any::Any, hash::Hash, iter, vec};

use crate::seq::adapters::{self, Chunked, Distinct, DistinctBy, FilterIsInstance};
use crate::seq::Seq;

pub fn filter<S, P>(predicate: P) -> impl Fn(S) -> Seq<iter::Filter<S::IntoIter, P>>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool + Clone,
{
    move |source| super::filter(predicate.clone(), source)
}

pub fn filter_not_none<S, R>() -> impl Fn(S) -> Seq<iter::Flatten<S::IntoIter>>
where
    S: IntoIterator<Item = Option<R>>,
{
    super::filter_not_none::<S, R>
}

pub fn filter_is_instance<R, S>() -> impl Fn(S) -> Seq<FilterIsInstance<S::IntoIter, R>>
where
    S: IntoIterator<Item = Box<dyn Any>>,
    R: Any,
{
    super::filter_is_instance::<R, S>
}

pub fn map<S, R, F>(f: F) -> impl Fn(S) -> Seq<iter::Map<S::IntoIter, F>>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> R + Clone,
{
    move |source| super::map(f.clone(), source)
}

pub fn map_not_none<S, R, F>(f: F) -> impl Fn(S) -> Seq<iter::FilterMap<S::IntoIter, F>>
where
    S: IntoIterator,
    F: FnMut(S::Item) -> Option<R> + Clone,
{
    move |source| super::map_not_none(f.clone(), source)
}

pub fn flat_map<S, U, F>(f: F) -> impl Fn(S) -> Seq<iter::FlatMap<S::IntoIter, U, F>>
where
    S: IntoIterator,
    U: IntoIterator,
    F: FnMut(S::Item) -> U + Clone,
{
    move |source| super::flat_map(f.clone(), source)
}

pub fn drop<S>(n: usize) -> impl Fn(S) -> Seq<iter::Skip<S::IntoIter>>
where
    S: IntoIterator,
{
    move |source| super::drop(n, source)
}

pub fn drop_while<S, P>(predicate: P) -> impl Fn(S) -> Seq<iter::SkipWhile<S::IntoIter, P>>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool + Clone,
{
    move |source| super::drop_while(predicate.clone(), source)
}

pub fn take<S>(n: usize) -> impl Fn(S) -> Seq<iter::Take<S::IntoIter>>
where
    S: IntoIterator,
{
    move |source| super::take(n, source)
}

pub fn take_while<S, P>(predicate: P) -> impl Fn(S) -> Seq<iter::TakeWhile<S::IntoIter, P>>
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool + Clone,
{
    move |source| super::take_while(predicate.clone(), source)
}

pub fn sorted_by<S, K, F>(key_selector: F) -> impl Fn(S) -> Seq<vec::IntoIter<S::Item>>
where
    S: IntoIterator,
    K: Ord,
    F: FnMut(&S::Item) -> K + Clone,
{
    move |source| super::sorted_by(key_selector.clone(), source)
}

pub fn sorted_by_desc<S, K, F>(key_selector: F) -> impl Fn(S) -> Seq<vec::IntoIter<S::Item>>
where
    S: IntoIterator,
    K: Ord,
    F: FnMut(&S::Item) -> K + Clone,
{
    move |source| super::sorted_by_desc(key_selector.clone(), source)
}

/// # Panics
///
/// Panics at build time if `size` is zero, before any source is supplied.
pub fn chunked<S>(size: usize) -> impl Fn(S) -> Seq<Chunked<S::IntoIter>>
where
    S: IntoIterator,
{
    adapters::assert_chunk_size(size);
    move |source| super::chunked(size, source)
}

pub fn distinct<S>() -> impl Fn(S) -> Seq<Distinct<S::IntoIter>>
where
    S: IntoIterator,
    S::Item: Eq + Hash + Clone,
{
    super::distinct::<S>
}

pub fn distinct_by<S, K, F>(key_selector: F) -> impl Fn(S) -> Seq<DistinctBy<S::IntoIter, F, K>>
where
    S: IntoIterator,
    K: Eq + Hash,
    F: FnMut(&S::Item) -> K + Clone,
{
    move |source| super::distinct_by(key_selector.clone(), source)
}

pub fn partition<S, P>(predicate: P) -> impl Fn(S) -> (Vec<S::Item>, Vec<S::Item>)
where
    S: IntoIterator,
    P: FnMut(&S::Item) -> bool + Clone,
{
    move |source| super::partition(predicate.clone(), source)
}
