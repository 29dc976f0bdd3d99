// Route path constants - single source of truth for all API paths

pub const HEALTH: &str = "/health";
pub const DEMO_USER: &str = "/user";
pub const USERS: &str = "/users";
pub const USER_ITEM: &str = "/users/{id}";
pub const OPENAPI_JSON: &str = "/swagger.json";
pub const DOCS: &str = "/docs";
