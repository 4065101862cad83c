/*! Corpus balancing.

The balancing stage merges the per-language source files into a handful of
output files where every language contributes the identical number of
characters:

- [baseline] caps the per-language budget at the scarcest language,
- [allocate] splits one language's budget across its two sources,
- [source] loads capped character prefixes from disk,
- [interleave] mixes the two prefixes chunk by chunk,
- [assemble] wraps, shuffles and writes the per-split file.
!*/
pub mod allocate;
pub mod assemble;
pub mod baseline;
pub mod interleave;
pub mod source;

pub use allocate::{plan_allocation, AllocationPlan, AllocationResult, Allocator};
pub use assemble::{assemble_split, BalancedFile};
pub use baseline::{derive_budget, Budget, SplitConfig, SplitPlan, DEFAULT_SPLITS};
pub use interleave::{interleave, CHUNK_SIZE};
pub use source::read_capped;
