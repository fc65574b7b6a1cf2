//! Role enumeration and staff/creator resolution.
//!
//! Role names must match the seed data in
//! `20260301000001_create_roles_table.sql`. The role set is authoritative
//! server-side: the api crate re-resolves it from the database on every
//! gated request, never from a client-supplied claim.

use serde::{Deserialize, Serialize};

pub const ROLE_CREATOR: &str = "creator";
pub const ROLE_MANAGER: &str = "manager";
pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_CHAT_TEAM: &str = "chat_team";
pub const ROLE_STUDIO_TEAM: &str = "studio_team";
pub const ROLE_MARKETING_TEAM: &str = "marketing_team";

/// All valid role names, in seed order.
pub const VALID_ROLES: &[&str] = &[
    ROLE_CREATOR,
    ROLE_MANAGER,
    ROLE_ADMIN,
    ROLE_CHAT_TEAM,
    ROLE_STUDIO_TEAM,
    ROLE_MARKETING_TEAM,
];

/// A role assignable to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Creator,
    Manager,
    Admin,
    ChatTeam,
    StudioTeam,
    MarketingTeam,
}

impl Role {
    /// Parse a database role name. Returns `None` for unknown names so
    /// callers fail closed rather than erroring on stale seed data.
    pub fn from_str_value(s: &str) -> Option<Self> {
        match s {
            ROLE_CREATOR => Some(Self::Creator),
            ROLE_MANAGER => Some(Self::Manager),
            ROLE_ADMIN => Some(Self::Admin),
            ROLE_CHAT_TEAM => Some(Self::ChatTeam),
            ROLE_STUDIO_TEAM => Some(Self::StudioTeam),
            ROLE_MARKETING_TEAM => Some(Self::MarketingTeam),
            _ => None,
        }
    }

    /// The database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Creator => ROLE_CREATOR,
            Self::Manager => ROLE_MANAGER,
            Self::Admin => ROLE_ADMIN,
            Self::ChatTeam => ROLE_CHAT_TEAM,
            Self::StudioTeam => ROLE_STUDIO_TEAM,
            Self::MarketingTeam => ROLE_MARKETING_TEAM,
        }
    }

    /// Whether this role grants staff privileges (approve, delete, push to
    /// the external platform, view other creators' data).
    pub fn is_staff(&self) -> bool {
        !matches!(self, Self::Creator)
    }
}

/// The resolved role set for an identity, plus the two derived booleans
/// every gated screen and handler consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRoles {
    /// Sorted, de-duplicated role set.
    pub roles: Vec<Role>,
    /// True if any role is manager/admin/chat_team/studio_team/marketing_team.
    pub is_staff: bool,
    /// True if the creator role is held.
    pub is_creator: bool,
}

impl ResolvedRoles {
    /// An empty resolution: no identity, no roles, nothing granted.
    pub fn none() -> Self {
        Self {
            roles: Vec::new(),
            is_staff: false,
            is_creator: false,
        }
    }

    /// Resolve a set of role names into a [`ResolvedRoles`].
    ///
    /// Unknown names are ignored (fail closed). Pure and infallible: an
    /// empty iterator yields [`ResolvedRoles::none`], never an error.
    pub fn resolve<'a, I>(names: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut roles: Vec<Role> = names
            .into_iter()
            .filter_map(Role::from_str_value)
            .collect();
        roles.sort();
        roles.dedup();

        let is_staff = roles.iter().any(Role::is_staff);
        let is_creator = roles.contains(&Role::Creator);

        Self {
            roles,
            is_staff,
            is_creator,
        }
    }

    /// Whether the admin role specifically is held.
    pub fn is_admin(&self) -> bool {
        self.roles.contains(&Role::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_roles_resolves_to_nothing() {
        let resolved = ResolvedRoles::resolve([]);
        assert_eq!(resolved, ResolvedRoles::none());
        assert!(!resolved.is_staff);
        assert!(!resolved.is_creator);
    }

    #[test]
    fn test_creator_only_is_not_staff() {
        let resolved = ResolvedRoles::resolve(["creator"]);
        assert!(resolved.is_creator);
        assert!(!resolved.is_staff);
        assert!(!resolved.is_admin());
    }

    #[test]
    fn test_every_elevated_role_is_staff() {
        for name in ["manager", "admin", "chat_team", "studio_team", "marketing_team"] {
            let resolved = ResolvedRoles::resolve([name]);
            assert!(resolved.is_staff, "{name} must resolve as staff");
            assert!(!resolved.is_creator);
        }
    }

    #[test]
    fn test_unknown_roles_are_ignored() {
        // Fail closed: an unrecognized name must never grant anything.
        let resolved = ResolvedRoles::resolve(["superuser", "root", ""]);
        assert_eq!(resolved, ResolvedRoles::none());
    }

    #[test]
    fn test_mixed_roles_dedup_and_both_flags() {
        let resolved = ResolvedRoles::resolve(["creator", "manager", "manager"]);
        assert_eq!(resolved.roles, vec![Role::Creator, Role::Manager]);
        assert!(resolved.is_staff);
        assert!(resolved.is_creator);
    }

    #[test]
    fn test_role_round_trip() {
        for name in VALID_ROLES {
            let role = Role::from_str_value(name).expect("seeded name must parse");
            assert_eq!(role.as_str(), *name);
        }
    }
}
