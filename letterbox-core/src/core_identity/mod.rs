//! Accounts and profiles
//!
//! An [`Account`] is the private top-level identity of a user. It never
//! appears in discussions directly; instead it mints one [`Profile`] per
//! [`Space`](crate::core_space::Space), and profiles are what letters and
//! replies are attributed to.

pub mod account;
pub mod profile;
pub mod types;

pub use account::Account;
pub use profile::Profile;
pub use types::{AccountId, ProfileId};
