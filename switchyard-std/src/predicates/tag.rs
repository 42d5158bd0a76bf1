//! Role-tag and variant membership.

use switchyard_core::{Discriminant, Predicate, Role, RoleSet, Tagged};

/// A predicate matching subjects whose role tag is in a [`RoleSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleIn {
    roles: RoleSet,
}

impl RoleIn {
    /// Create a new role-membership predicate.
    pub fn new(roles: RoleSet) -> Self {
        Self { roles }
    }

    /// The accepted roles.
    pub fn roles(&self) -> RoleSet {
        self.roles
    }
}

impl<S: Tagged> Predicate<S> for RoleIn {
    fn test(&self, subject: &S) -> bool {
        subject.role().is_some_and(|role| self.roles.includes(role))
    }
}

/// Match subjects tagged with exactly `role`.
pub fn role_is(role: Role) -> RoleIn {
    RoleIn::new(RoleSet::from(role))
}

/// Match subjects tagged with any role in `roles`.
pub fn role_in(roles: RoleSet) -> RoleIn {
    RoleIn::new(roles)
}

/// A predicate matching subjects of one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindIs<K> {
    kind: K,
}

impl<S, K> Predicate<S> for KindIs<K>
where
    S: Discriminant<Kind = K>,
    K: PartialEq + Send + Sync + 'static,
{
    fn test(&self, subject: &S) -> bool {
        subject.kind() == self.kind
    }
}

/// Match subjects whose variant discriminator equals `kind`.
pub fn kind_is<K>(kind: K) -> KindIs<K> {
    KindIs { kind }
}
