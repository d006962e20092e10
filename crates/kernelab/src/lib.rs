#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use kernelab_grid as grid;

#[doc(inline)]
pub use kernelab_filter as filter;
