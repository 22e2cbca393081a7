pub mod auth {
    /// Lifetime of an issued bearer token.
    pub const TOKEN_TTL_DAYS: i64 = 182;

    pub const DEFAULT_BCRYPT_COST: u32 = 10;

    pub const MIN_PASSWORD_LENGTH: usize = 6;

    /// bcrypt only reads this many bytes of its input.
    pub const MAX_PASSWORD_BYTES: usize = 72;

    pub const PHONE_DIGITS: usize = 10;

    pub const BEARER_PREFIX: &str = "Bearer ";
}

pub mod messages {
    pub const ACCESS_DENIED: &str = "Access denied, Please Login";

    pub const INVALID_TOKEN: &str = "Invalid or expired token";

    pub const INVALID_CREDENTIALS: &str = "Invalid email or password.";

    pub const MISSING_CREDENTIALS: &str = "Email and password are required.";

    pub const REGISTERED: &str = "User registered successfully.";

    pub const LOGGED_IN: &str = "Login successful.";

    pub const PROFILE_FETCHED: &str = "User profile fetched successfully";
}

pub mod db {
    use std::time::Duration;

    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    pub const IDLE_TIMEOUT: Duration = Duration::from_secs(300);

    pub const MAX_LIFETIME: Duration = Duration::from_secs(600);
}
