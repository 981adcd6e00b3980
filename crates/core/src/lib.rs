#![forbid(unsafe_code)]

pub mod dealer;
pub mod model;
pub mod time;

pub use dealer::Dealer;
pub use time::Clock;
