//! User aggregate, its credential record and refresh tokens
//!
//! Password hashing and token minting live behind ports; the aggregates
//! here only hold the results and decide state transitions.

mod account;
mod refresh_token;
mod user;

pub use account::Account;
pub use refresh_token::RefreshToken;
pub use user::User;
