use hotelier_auth::{Principal, PrincipalId, Role};

/// Principal context for a request (authenticated identity + roles).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrincipalContext {
    principal_id: PrincipalId,
    roles: Vec<Role>,
}

impl PrincipalContext {
    pub fn new(principal_id: PrincipalId, roles: Vec<Role>) -> Self {
        Self { principal_id, roles }
    }

    /// Stand-in principal used when admin auth is disabled.
    pub fn unauthenticated_admin() -> Self {
        Self::new(PrincipalId::new(), vec![Role::ADMIN])
    }

    pub fn to_principal(&self) -> Principal {
        Principal::from_roles(self.principal_id, self.roles.clone())
    }
}
