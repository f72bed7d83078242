/// Most candidate days a single expansion will scan (five years of days).
pub const MAX_SCAN_DAYS: usize = 365 * 5;

/// Most occurrences a single expansion will return.
pub const MAX_OCCURRENCES: usize = 365;

/// Default Gemini model used for task suggestions.
pub const DEFAULT_SUGGEST_MODEL: &str = "gemini-2.0-flash";

/// Default base URL of the Generative Language API.
pub const DEFAULT_SUGGEST_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default request timeout for suggestion calls, in seconds.
pub const DEFAULT_SUGGEST_TIMEOUT_SECS: u64 = 30;
