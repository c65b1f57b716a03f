//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Protocol-level constants are defined in `hsa_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "hsa.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "hsa";

/// Environment variable prefix for configuration (`HSA__SECTION__KEY`)
pub const CONFIG_ENV_PREFIX: &str = "HSA";

/// Separator between the prefix and nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// KEY MATERIAL CONSTANTS
// ============================================================================

/// Environment variable holding the active signing secret
pub const JWT_CURRENT_SECRET_ENV: &str = "JWT_CURRENT_SECRET";

/// Environment variable holding the active key identifier
pub const JWT_CURRENT_KID_ENV: &str = "JWT_CURRENT_KID";

/// Environment variable holding the Redis connection URL
pub const REDIS_URL_ENV: &str = "REDIS_URL";

/// Random bytes in a generated HS512 secret
pub const GENERATED_SECRET_BYTES: usize = 64;

/// Random bytes in a generated key identifier
pub const GENERATED_KID_BYTES: usize = 12;

// ============================================================================
// AUTHENTICATION CONSTANTS
// ============================================================================

/// Default token issuer
pub const JWT_DEFAULT_ISSUER: &str = "https://hsa.localhost";

/// Default token audience
pub const JWT_DEFAULT_AUDIENCE: &str = "hybrid-session-auth";

/// Random bytes in a token identifier
pub const JTI_RANDOM_BYTES: usize = 16;

/// Token type header value
pub const JWT_TYPE: &str = "JWT";

/// Argon2 memory cost in KiB
pub const ARGON2_MEMORY_KIB: u32 = 19_456;

/// Argon2 iterations
pub const ARGON2_ITERATIONS: u32 = 2;

/// Argon2 lanes
pub const ARGON2_PARALLELISM: u32 = 1;

/// Argon2 output length in bytes
pub const ARGON2_OUTPUT_LEN: usize = 32;

// ============================================================================
// SERVER CONSTANTS
// ============================================================================

/// Default bind address
pub const DEFAULT_HTTP_HOST: &str = "127.0.0.1";

/// Default HTTP port
pub const DEFAULT_HTTP_PORT: u16 = 3000;

// ============================================================================
// REVOCATION STORE CONSTANTS
// ============================================================================

/// Global key prefix applied by the store adapter
pub const STORE_DEFAULT_NAMESPACE: &str = "hsa::";

/// Client timeout for a single store round trip
pub const STORE_DEFAULT_TIMEOUT_MS: u64 = 2_000;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_ENV_VAR: &str = "HSA_LOG";

/// Default log file name stem
pub const DEFAULT_LOG_FILE_STEM: &str = "hsa";
