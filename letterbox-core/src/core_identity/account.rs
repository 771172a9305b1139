//! Account data structure and operations

use super::profile::Profile;
use super::types::{AccountId, ProfileId};
use crate::core_space::Space;
use std::sync::Arc;
use tracing::debug;

/// An Account is a user's top-level identity, owning one profile per space
#[derive(Debug, Clone)]
pub struct Account {
    id: AccountId,

    /// Profiles owned by this account, fixed at construction
    profiles: Vec<Arc<Profile>>,

    is_banned: bool,
}

impl Account {
    /// Create an unbanned account from its persisted profiles
    pub fn new(id: AccountId, profiles: Vec<Arc<Profile>>) -> Self {
        Self::restore(id, profiles, false)
    }

    /// Rebuild a stored account, ban state included
    pub fn restore(id: AccountId, profiles: Vec<Arc<Profile>>, is_banned: bool) -> Self {
        Account {
            id,
            profiles,
            is_banned,
        }
    }

    pub fn id(&self) -> &AccountId {
        &self.id
    }

    /// Profiles owned by this account
    ///
    /// This accessor performs no access check. Only the account owner may
    /// see which profiles belong together; route reads through
    /// [`crate::core_policy::Guard::view_profiles`] wherever the caller is not
    /// already known to be the owner.
    pub fn profiles(&self) -> &[Arc<Profile>] {
        &self.profiles
    }

    /// Mint a new profile for this account inside `space`
    ///
    /// The profile is *not* added to [`Account::profiles`]. Persisting the
    /// association (and rebuilding the account with it) is the caller's job,
    /// as is making sure `profile_id` does not collide with an existing one.
    pub fn create_profile(&self, profile_id: ProfileId, space: Arc<Space>) -> Profile {
        debug!(
            account = %self.id,
            profile = %profile_id,
            space = %space.id,
            "Creating profile"
        );
        Profile::new(profile_id, space)
    }

    pub fn is_banned(&self) -> bool {
        self.is_banned
    }

    /// Ban the account. Returns `true` if the flag changed.
    ///
    /// Banning an already banned account is a no-op.
    pub fn ban(&mut self) -> bool {
        let changed = !self.is_banned;
        self.is_banned = true;
        changed
    }

    /// Lift a ban. Returns `true` if the flag changed.
    pub fn unban(&mut self) -> bool {
        let changed = self.is_banned;
        self.is_banned = false;
        changed
    }
}
