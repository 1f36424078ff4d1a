#[doc(inline)]
pub use sorted_multiset::{self, *};
