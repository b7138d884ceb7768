use rbac::table::pagination::DEFAULT_PER_PAGE;

#[derive(Clone)]
pub struct Config {
    pub api_server: String,
    pub api_base_url: String,
    pub default_per_page: u32,
}

const DEFAULT_API_SERVER: &str = "http://localhost:8000";
const API_PREFIX: &str = "/api/rbac/v1";

impl Config {
    pub fn from_env() -> Self {
        let api_server =
            std::env::var("RBAC_API_SERVER").unwrap_or_else(|_| DEFAULT_API_SERVER.to_string());

        let default_per_page = std::env::var("RBAC_DEFAULT_PER_PAGE")
            .ok()
            .and_then(|v| v.parse().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_PER_PAGE);

        let api_base_url = format!("{}{}", api_server, API_PREFIX);
        Self {
            api_server,
            api_base_url,
            default_per_page,
        }
    }
}
