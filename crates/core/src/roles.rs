//! Well-known role name constants.
//!
//! These must match the values stored in the `user_roles` table.

pub const ROLE_ADMIN: &str = "admin";
