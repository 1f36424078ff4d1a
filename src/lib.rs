//! Ordered indices over totally-ordered keys.

#[doc(inline)]
pub use ds::{self, *};
#[doc(inline)]
pub use naive::{self, *};
