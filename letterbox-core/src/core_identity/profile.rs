//! Profile data structure

use super::types::ProfileId;
use crate::core_space::Space;
use std::sync::Arc;

/// A Profile is an account's pseudonymous identity inside one Space
///
/// The same account may hold many profiles, but each profile belongs to
/// exactly one space. Keeping at most one profile per space per account is
/// left to whoever persists accounts.
#[derive(Debug, Clone)]
pub struct Profile {
    /// Unique identifier
    pub id: ProfileId,

    /// Space this profile is scoped to
    pub space: Arc<Space>,
}

impl Profile {
    pub fn new(id: ProfileId, space: Arc<Space>) -> Self {
        Profile { id, space }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_space::SpaceId;

    #[test]
    fn test_profiles_share_space_handle() {
        let space = Arc::new(Space::new(SpaceId::new("s1"), "Books"));
        let p1 = Profile::new(ProfileId::new("p1"), Arc::clone(&space));
        let p2 = Profile::new(ProfileId::new("p2"), Arc::clone(&space));

        assert!(Arc::ptr_eq(&p1.space, &p2.space));
        assert_eq!(Arc::strong_count(&space), 3);
    }
}
