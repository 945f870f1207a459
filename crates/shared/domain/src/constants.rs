//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Roles
// =============================================================================

/// Administrator role
pub const ROLE_ADMIN: &str = "ADMIN";

/// Guest role, assigned when nothing else is specified
pub const ROLE_GUEST: &str = "GUEST";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum todo title length
pub const MAX_TODO_TITLE_LENGTH: usize = 255;
