/// Environment variable selecting the backend base URL.
pub const API_URL_ENV: &str = "INVESTDESK_API_URL";

/// Backend base URL used when the environment does not provide one.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Route the shell redirects to after a global de-authentication.
pub const LOGIN_ROUTE: &str = "/login";

/// Routes that never trigger the unauthorized redirect.
pub const PUBLIC_ROUTES: &[&str] = &[LOGIN_ROUTE, "/register"];

/// Number of per-client statistics computations run concurrently.
pub const STATS_BATCH_SIZE: usize = 5;

/// Page size used when fetching a client's movement history.
pub const MOVEMENTS_PAGE_LIMIT: usize = 100;

/// Seconds to wait after a backend downgrade before probing health again.
pub const REPROBE_COOLDOWN_SECS: u64 = 300;
