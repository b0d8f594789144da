//! The lazy sequence wrapper and its operation surface, in the style of
//! Kotlin's `Sequence` type.
//!
//! Intermediate operations return a new [`Seq`] without touching the source;
//! terminal operations drive the pipeline and produce a concrete value.

use std::{
    any::Any,
    cmp::Reverse,
    collections::{BTreeSet, HashMap, HashSet},
    fmt,
    hash::Hash,
    iter,
    ops::Add,
    vec,
};

use rand::{seq::SliceRandom, Rng};

pub mod adapters;
pub mod error;

use adapters::{Chunked, Distinct, DistinctBy, FilterIsInstance};
use error::{Result, SeqError};

/// A lazily evaluated sequence over an iteration source.
///
/// Construction never pulls an element. Intermediate operations consume the
/// sequence and wrap it in a new one; nothing upstream runs until a terminal
/// operation asks for elements, and short-circuiting terminals stop pulling
/// as soon as their answer is decided.
///
/// A `Seq` takes its source by value, so each instance is traversed at most
/// once. To traverse a reusable collection again, wrap it again
/// (`Seq::new(&items)` borrows, `Seq::new(items)` moves).
#[derive(Clone)]
pub struct Seq<I> {
    iter: I,
}

impl<I> Seq<I>
where
    I: Iterator,
{
    /// Wraps any iteration source without consuming or inspecting it.
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<IntoIter = I>,
    {
        Seq {
            iter: source.into_iter(),
        }
    }

    /// Keeps the elements satisfying `predicate`.
    pub fn filter<P>(self, predicate: P) -> Seq<iter::Filter<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Seq {
            iter: self.iter.filter(predicate),
        }
    }

    /// Transforms each element with `f`.
    pub fn map<R, F>(self, f: F) -> Seq<iter::Map<I, F>>
    where
        F: FnMut(I::Item) -> R,
    {
        Seq {
            iter: self.iter.map(f),
        }
    }

    /// Transforms each element, dropping the `None` results.
    pub fn map_not_none<R, F>(self, f: F) -> Seq<iter::FilterMap<I, F>>
    where
        F: FnMut(I::Item) -> Option<R>,
    {
        Seq {
            iter: self.iter.filter_map(f),
        }
    }

    /// Maps each element to a sub-sequence and concatenates them in order.
    pub fn flat_map<U, F>(self, f: F) -> Seq<iter::FlatMap<I, U, F>>
    where
        U: IntoIterator,
        F: FnMut(I::Item) -> U,
    {
        Seq {
            iter: self.iter.flat_map(f),
        }
    }

    /// Concatenates a sequence of sequences in order.
    pub fn flatten(self) -> Seq<iter::Flatten<I>>
    where
        I::Item: IntoIterator,
    {
        Seq {
            iter: self.iter.flatten(),
        }
    }

    /// Skips the first `n` elements; `drop(0)` is a no-op.
    #[allow(clippy::should_implement_trait)]
    pub fn drop(self, n: usize) -> Seq<iter::Skip<I>> {
        Seq {
            iter: self.iter.skip(n),
        }
    }

    /// Skips a prefix while `predicate` holds, then yields the first failing
    /// element and everything after it. The predicate is never evaluated
    /// again once it has returned false.
    pub fn drop_while<P>(self, predicate: P) -> Seq<iter::SkipWhile<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Seq {
            iter: self.iter.skip_while(predicate),
        }
    }

    /// Yields at most the first `n` elements, pulling no more than `n` from
    /// the source.
    pub fn take(self, n: usize) -> Seq<iter::Take<I>> {
        Seq {
            iter: self.iter.take(n),
        }
    }

    /// Yields elements while `predicate` holds; the first failing element
    /// ends the sequence.
    pub fn take_while<P>(self, predicate: P) -> Seq<iter::TakeWhile<I, P>>
    where
        P: FnMut(&I::Item) -> bool,
    {
        Seq {
            iter: self.iter.take_while(predicate),
        }
    }

    /// Materializes the sequence and sorts it ascending. The sort is stable.
    pub fn sorted(self) -> Seq<vec::IntoIter<I::Item>>
    where
        I::Item: Ord,
    {
        let mut elements: Vec<_> = self.iter.collect();
        elements.sort();
        Seq {
            iter: elements.into_iter(),
        }
    }

    /// Materializes and sorts ascending by a derived key. Elements with equal
    /// keys keep their encounter order.
    pub fn sorted_by<K, F>(self, key_selector: F) -> Seq<vec::IntoIter<I::Item>>
    where
        K: Ord,
        F: FnMut(&I::Item) -> K,
    {
        let mut elements: Vec<_> = self.iter.collect();
        elements.sort_by_key(key_selector);
        Seq {
            iter: elements.into_iter(),
        }
    }

    /// Materializes and sorts descending. The sort is stable.
    pub fn sorted_desc(self) -> Seq<vec::IntoIter<I::Item>>
    where
        I::Item: Ord,
    {
        let mut elements: Vec<_> = self.iter.collect();
        elements.sort_by(|a, b| b.cmp(a));
        Seq {
            iter: elements.into_iter(),
        }
    }

    /// Materializes and sorts descending by a derived key. Elements with
    /// equal keys keep their encounter order.
    pub fn sorted_by_desc<K, F>(self, mut key_selector: F) -> Seq<vec::IntoIter<I::Item>>
    where
        K: Ord,
        F: FnMut(&I::Item) -> K,
    {
        let mut elements: Vec<_> = self.iter.collect();
        elements.sort_by_key(|element| Reverse(key_selector(element)));
        Seq {
            iter: elements.into_iter(),
        }
    }

    /// Groups elements into `Vec`s of `size` elements; the final chunk may be
    /// shorter.
    ///
    /// # Panics
    ///
    /// Panics immediately if `size` is zero, whether or not the result is
    /// ever consumed.
    pub fn chunked(self, size: usize) -> Seq<Chunked<I>> {
        Seq {
            iter: Chunked::new(self.iter, size),
        }
    }

    /// Pairs each element with its zero-based index.
    pub fn enumerate(self) -> Seq<iter::Enumerate<I>> {
        Seq {
            iter: self.iter.enumerate(),
        }
    }

    /// Materializes the sequence and shuffles a private copy with the thread
    /// RNG. Not reproducible; see [`Seq::shuffled_with`] for seeded use.
    pub fn shuffled(self) -> Seq<vec::IntoIter<I::Item>> {
        self.shuffled_with(&mut rand::rng())
    }

    /// Materializes the sequence and shuffles a private copy. The permutation
    /// is fully determined by `rng`, so a seeded generator makes it
    /// reproducible.
    pub fn shuffled_with<R>(self, rng: &mut R) -> Seq<vec::IntoIter<I::Item>>
    where
        R: Rng + ?Sized,
    {
        let mut elements: Vec<_> = self.iter.collect();
        elements.shuffle(rng);
        Seq {
            iter: elements.into_iter(),
        }
    }

    /// Yields each value only the first time it occurs, in first-seen order.
    pub fn distinct(self) -> Seq<Distinct<I>>
    where
        I::Item: Eq + Hash + Clone,
    {
        Seq {
            iter: Distinct::new(self.iter),
        }
    }

    /// Yields each element whose derived key has not been seen before, in
    /// first-seen order.
    pub fn distinct_by<K, F>(self, key_selector: F) -> Seq<DistinctBy<I, F, K>>
    where
        K: Eq + Hash,
        F: FnMut(&I::Item) -> K,
    {
        Seq {
            iter: DistinctBy::new(self.iter, key_selector),
        }
    }

    pub fn to_vec(self) -> Vec<I::Item> {
        self.iter.collect()
    }

    pub fn to_set(self) -> HashSet<I::Item>
    where
        I::Item: Eq + Hash,
    {
        self.iter.collect()
    }

    /// Materializes into an ordered set, the closest analogue of a frozen
    /// set: unlike a `HashSet`, the result can itself be hashed and used as a
    /// map key.
    pub fn to_btree_set(self) -> BTreeSet<I::Item>
    where
        I::Item: Ord,
    {
        self.iter.collect()
    }

    /// Materializes into any collection type.
    pub fn collect<C>(self) -> C
    where
        C: FromIterator<I::Item>,
    {
        self.iter.collect()
    }

    /// Drains the sequence into an existing collection.
    pub fn extend_into<C>(self, target: &mut C)
    where
        C: Extend<I::Item>,
    {
        target.extend(self.iter);
    }

    /// Maps each element to a key-value pair and collects them into a map.
    /// Later pairs silently overwrite earlier ones on key collision.
    pub fn associate<K, V, F>(self, f: F) -> HashMap<K, V>
    where
        K: Eq + Hash,
        F: FnMut(I::Item) -> (K, V),
    {
        self.iter.map(f).collect()
    }

    /// Builds a map from a derived key to the element itself. Later elements
    /// overwrite earlier ones on key collision.
    pub fn associate_by<K, F>(self, mut key_selector: F) -> HashMap<K, I::Item>
    where
        K: Eq + Hash,
        F: FnMut(&I::Item) -> K,
    {
        self.iter
            .map(|element| (key_selector(&element), element))
            .collect()
    }

    /// Builds a map from the element itself to a derived value.
    pub fn associate_with<V, F>(self, mut value_selector: F) -> HashMap<I::Item, V>
    where
        I::Item: Eq + Hash,
        F: FnMut(&I::Item) -> V,
    {
        self.iter
            .map(|element| {
                let value = value_selector(&element);
                (element, value)
            })
            .collect()
    }

    /// Groups all elements by a derived key; each group keeps encounter
    /// order.
    pub fn group_by<K, F>(self, mut key_selector: F) -> HashMap<K, Vec<I::Item>>
    where
        K: Eq + Hash,
        F: FnMut(&I::Item) -> K,
    {
        let mut groups: HashMap<K, Vec<I::Item>> = HashMap::new();
        for element in self.iter {
            groups.entry(key_selector(&element)).or_default().push(element);
        }
        groups
    }

    /// True if every element satisfies `predicate`; vacuously true on an
    /// empty sequence. Short-circuits on the first failure.
    pub fn all<P>(mut self, predicate: P) -> bool
    where
        P: FnMut(I::Item) -> bool,
    {
        self.iter.all(predicate)
    }

    /// True if at least one element satisfies `predicate`; false on an empty
    /// sequence. Short-circuits on the first success.
    pub fn any<P>(mut self, predicate: P) -> bool
    where
        P: FnMut(I::Item) -> bool,
    {
        self.iter.any(predicate)
    }

    /// True if no element satisfies `predicate`.
    pub fn none<P>(self, predicate: P) -> bool
    where
        P: FnMut(I::Item) -> bool,
    {
        !self.any(predicate)
    }

    pub fn max(self) -> Result<I::Item>
    where
        I::Item: Ord,
    {
        self.max_or_none().ok_or(SeqError::empty_sequence("max"))
    }

    pub fn max_or_none(self) -> Option<I::Item>
    where
        I::Item: Ord,
    {
        self.reduce_or_none(|best, candidate| if candidate > best { candidate } else { best })
    }

    pub fn min(self) -> Result<I::Item>
    where
        I::Item: Ord,
    {
        self.min_or_none().ok_or(SeqError::empty_sequence("min"))
    }

    pub fn min_or_none(self) -> Option<I::Item>
    where
        I::Item: Ord,
    {
        self.reduce_or_none(|best, candidate| if candidate < best { candidate } else { best })
    }

    pub fn max_by<K, F>(self, selector: F) -> Result<I::Item>
    where
        K: Ord,
        F: FnMut(&I::Item) -> K,
    {
        self.max_by_or_none(selector)
            .ok_or(SeqError::empty_sequence("max_by"))
    }

    /// The element with the largest derived key, or `None` on an empty
    /// sequence. When two elements produce an equal key, the
    /// later-encountered one wins: the accumulator is only kept while its key
    /// is strictly greater.
    pub fn max_by_or_none<K, F>(mut self, mut selector: F) -> Option<I::Item>
    where
        K: Ord,
        F: FnMut(&I::Item) -> K,
    {
        let mut best = self.iter.next()?;
        let mut best_key = selector(&best);
        for candidate in self.iter {
            let key = selector(&candidate);
            if best_key > key {
                continue;
            }
            best_key = key;
            best = candidate;
        }
        Some(best)
    }

    pub fn min_by<K, F>(self, selector: F) -> Result<I::Item>
    where
        K: Ord,
        F: FnMut(&I::Item) -> K,
    {
        self.min_by_or_none(selector)
            .ok_or(SeqError::empty_sequence("min_by"))
    }

    /// The element with the smallest derived key, or `None` on an empty
    /// sequence. When two elements produce an equal key, the
    /// earlier-encountered one wins: the accumulator is only replaced by a
    /// strictly smaller key.
    pub fn min_by_or_none<K, F>(mut self, mut selector: F) -> Option<I::Item>
    where
        K: Ord,
        F: FnMut(&I::Item) -> K,
    {
        let mut best = self.iter.next()?;
        let mut best_key = selector(&best);
        for candidate in self.iter {
            let key = selector(&candidate);
            if key < best_key {
                best_key = key;
                best = candidate;
            }
        }
        Some(best)
    }

    /// The sole element of the sequence. Errs on an empty sequence and on a
    /// sequence with more than one element.
    pub fn single(mut self) -> Result<I::Item> {
        let value = self
            .iter
            .next()
            .ok_or(SeqError::empty_sequence("single"))?;
        match self.iter.next() {
            None => Ok(value),
            Some(_) => Err(SeqError::MultipleElements),
        }
    }

    /// The sole element, or `None` when the sequence is empty or has more
    /// than one element.
    pub fn single_or_none(mut self) -> Option<I::Item> {
        let value = self.iter.next()?;
        match self.iter.next() {
            None => Some(value),
            Some(_) => None,
        }
    }

    pub fn first(mut self) -> Result<I::Item> {
        self.iter.next().ok_or(SeqError::empty_sequence("first"))
    }

    pub fn first_or_none(mut self) -> Option<I::Item> {
        self.iter.next()
    }

    /// The last element. Delegates to the source's own `last`, so sources
    /// with a cheaper-than-linear implementation keep it.
    pub fn last(self) -> Result<I::Item> {
        self.iter.last().ok_or(SeqError::empty_sequence("last"))
    }

    pub fn last_or_none(self) -> Option<I::Item> {
        self.iter.last()
    }

    /// Seedless left fold: the first element is the initial accumulator.
    /// Errs on an empty sequence, which offers no identity to fall back on.
    pub fn reduce<F>(self, operation: F) -> Result<I::Item>
    where
        F: FnMut(I::Item, I::Item) -> I::Item,
    {
        self.reduce_or_none(operation)
            .ok_or(SeqError::empty_sequence("reduce"))
    }

    pub fn reduce_or_none<F>(mut self, operation: F) -> Option<I::Item>
    where
        F: FnMut(I::Item, I::Item) -> I::Item,
    {
        let first = self.iter.next()?;
        Some(self.iter.fold(first, operation))
    }

    /// Folds the elements with `+`. No zero value is assumed, so an empty
    /// sequence errs rather than producing one.
    pub fn sum(self) -> Result<I::Item>
    where
        I::Item: Add<Output = I::Item>,
    {
        self.sum_or_none().ok_or(SeqError::empty_sequence("sum"))
    }

    pub fn sum_or_none(self) -> Option<I::Item>
    where
        I::Item: Add<Output = I::Item>,
    {
        self.reduce_or_none(|accumulator, element| accumulator + element)
    }

    /// Runs `action` on every element, in order.
    pub fn for_each<F>(self, action: F)
    where
        F: FnMut(I::Item),
    {
        self.iter.for_each(action);
    }

    /// Renders every element with its `Display` form, interleaved with
    /// `separator` and wrapped in `prefix`/`suffix`.
    pub fn join_to_string(self, separator: &str, prefix: &str, suffix: &str) -> String
    where
        I::Item: fmt::Display,
    {
        let mut rendered = String::from(prefix);
        for (position, element) in self.iter.enumerate() {
            if position > 0 {
                rendered.push_str(separator);
            }
            rendered.push_str(&element.to_string());
        }
        rendered.push_str(suffix);
        rendered
    }

    /// Splits into the elements satisfying `predicate` and those failing it,
    /// both in encounter order, in a single traversal.
    pub fn partition<P>(self, mut predicate: P) -> (Vec<I::Item>, Vec<I::Item>)
    where
        P: FnMut(&I::Item) -> bool,
    {
        let mut matching = Vec::new();
        let mut rest = Vec::new();
        for element in self.iter {
            if predicate(&element) {
                matching.push(element);
            } else {
                rest.push(element);
            }
        }
        (matching, rest)
    }
}

impl<I, R> Seq<I>
where
    I: Iterator<Item = Option<R>>,
{
    /// Keeps the `Some` payloads, dropping every `None`.
    pub fn filter_not_none(self) -> Seq<iter::Flatten<I>> {
        Seq {
            iter: self.iter.flatten(),
        }
    }
}

impl<I> Seq<I>
where
    I: Iterator<Item = Box<dyn Any>>,
{
    /// Keeps the elements whose concrete type is `R`, narrowing the item type
    /// along the way.
    pub fn filter_is_instance<R>(self) -> Seq<FilterIsInstance<I, R>>
    where
        R: Any,
    {
        Seq {
            iter: FilterIsInstance::new(self.iter),
        }
    }
}

impl<I> Iterator for Seq<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}
