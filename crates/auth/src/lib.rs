//! `hotelier-auth`: server-side admin authentication.
//!
//! This crate is intentionally decoupled from HTTP and storage: it issues and
//! validates admin tokens and answers "may this principal do X?".

pub mod authorize;
pub mod claims;
pub mod permissions;
pub mod principal;
pub mod roles;
pub mod token;

pub use authorize::{AuthzError, Principal, authorize, permissions_from_roles};
pub use claims::{AdminClaims, TokenValidationError, validate_claims};
pub use permissions::Permission;
pub use principal::PrincipalId;
pub use roles::Role;
pub use token::{Hs256Jwt, IssuedToken, JwtValidator, TokenError, password_matches};
