/// Role name for teachers (default for new accounts).
pub const ROLE_TEACHER: &str = "teacher";

/// Role name for administrators.
pub const ROLE_ADMIN: &str = "admin";
