/// Standard date format used for display: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Binary and config directory name
pub(crate) const APP_NAME: &str = "literal-shelf";

/// Dotenv file read for credentials when no path is configured
pub(crate) const DEFAULT_ENV_FILE: &str = ".env";

pub(crate) const EMAIL_VAR: &str = "LITERAL_EMAIL";
pub(crate) const PASSWORD_VAR: &str = "LITERAL_PASSWORD";
