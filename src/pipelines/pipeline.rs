//! Pipeline trait.
use crate::error::Error;

/// Implemented by each runnable pipeline. Generic over the return type so
/// pipelines that produce a value can use the trait as well.
pub trait Pipeline<T> {
    fn run(&self) -> Result<T, Error>;
}
