//! Shared constants for media-tracker.

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Connection string used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "postgresql://localhost:5432/movie_tracker";

/// OMDb endpoint used when `OMDB_BASE_URL` is not set.
pub const DEFAULT_OMDB_BASE_URL: &str = "http://www.omdbapi.com";

/// Listening port used when `PORT` is not set.
pub const DEFAULT_PORT: u16 = 4000;

/// Bind address used when `HOST` is not set.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Base URL the UI client talks to when `API_BASE_URL` is not set.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000";

/// Poster value the lookup source uses for "no image".
pub const NO_POSTER: &str = "N/A";

/// Highest value a personal rating may take.
pub const MAX_RATING: i32 = 5;

/// Error message for writes and searches without a title.
pub const TITLE_REQUIRED: &str = "Title is required";

/// Fixed message returned when the lookup source cannot be reached or parsed.
pub const LOOKUP_FAILED: &str = "Failed to fetch from lookup source";
