//! Order lifecycle
//!
//! - [`checkout`] - stock reservation and order creation
//! - [`redemption`] - single-use PAID -> REDEEMED transition
//! - [`money`] - decimal arithmetic for prices and totals

pub mod checkout;
pub mod money;
pub mod redemption;

pub use checkout::{CheckoutOptions, checkout};
pub use redemption::{OrderIdInput, redeem};
