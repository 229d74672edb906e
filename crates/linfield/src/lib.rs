#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use linfield_algebra as algebra;

#[doc(inline)]
pub use linfield_matrix as matrix;

#[doc(inline)]
pub use linfield_lup as lup;
