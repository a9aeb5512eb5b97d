pub mod price;

pub use price::{format_brl, format_price};
