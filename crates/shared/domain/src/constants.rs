//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Roles
// =============================================================================

/// Back-office administrator role
pub const ROLE_ADMIN: &str = "Admin";

/// Role assigned to accounts provisioned for a facility
pub const ROLE_FACILITY: &str = "Facility";

/// Role assigned to accounts provisioned for a placement executive
pub const ROLE_PLACEMENT_EXECUTIVE: &str = "PlacementExecutive";

/// Role assigned to accounts provisioned for a student
pub const ROLE_STUDENT: &str = "Student";

/// Roles inserted when the schema is created
pub const DEFAULT_ROLES: &[&str] = &[
    ROLE_ADMIN,
    ROLE_FACILITY,
    ROLE_PLACEMENT_EXECUTIVE,
    ROLE_STUDENT,
];

// =============================================================================
// Accounts
// =============================================================================

/// Status of an account that can log in
pub const ACCOUNT_STATUS_ACTIVE: &str = "active";

/// Status of a disabled account
pub const ACCOUNT_STATUS_INACTIVE: &str = "inactive";

/// JSON field name of the login identifier, used in conflict messages
pub const LOGIN_ID_FIELD: &str = "userID";

/// Maximum login identifier length
pub const MAX_LOGIN_ID_LENGTH: u64 = 255;

// =============================================================================
// Password hashing
// =============================================================================

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Argon2id memory cost in KiB
pub const ARGON2_MEMORY_KIB: u32 = 19 * 1024;

/// Argon2id iteration count
pub const ARGON2_ITERATIONS: u32 = 2;

/// Argon2id degree of parallelism
pub const ARGON2_LANES: u32 = 1;

// =============================================================================
// Authentication
// =============================================================================

/// Default JWT token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 24;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Seconds per hour (for token expiration calculation)
pub const SECONDS_PER_HOUR: i64 = 3600;

/// Authorization header prefix for Bearer tokens
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// JWT token type identifier
pub const TOKEN_TYPE_BEARER: &str = "Bearer";
