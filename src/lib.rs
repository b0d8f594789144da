//! Lazy sequence combinators in the style of Kotlin's `Sequence` type.
//!
//! [`Seq`] wraps any iteration source and chains transformations without
//! producing a single element until a terminal operation runs. The [`ops`]
//! module mirrors every operation as a free function, with curried builders
//! in [`ops::curried`] for point-free composition.

pub mod ops;
pub mod seq;

pub use seq::error::{Result, SeqError};
pub use seq::Seq;

#[cfg(test)]
mod tests {
    use crate::Seq;

    #[test]
    fn basic_pipeline() {
        let squares_of_evens = Seq::new(1..=10)
            .filter(|&x| x % 2 == 0)
            .map(|x| x * x)
            .to_vec();
        assert_eq!(squares_of_evens, vec![4, 16, 36, 64, 100]);
    }
}
