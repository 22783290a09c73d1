pub mod filter;
pub mod location;
pub mod restaurant;
pub mod session;
