//! Drinks API routes relative to the configured API server

use crate::record::EnvironmentConfig;
use serde::Serialize;
use std::fmt;

/// Auth0 permission a route requires in the access token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Permission {
    #[serde(rename = "get:drinks-detail")]
    GetDrinksDetail,
    #[serde(rename = "post:drinks")]
    PostDrinks,
    #[serde(rename = "patch:drinks")]
    PatchDrinks,
    #[serde(rename = "delete:drinks")]
    DeleteDrinks,
}

impl Permission {
    pub const ALL: [Permission; 4] = [
        Permission::GetDrinksDetail,
        Permission::PostDrinks,
        Permission::PatchDrinks,
        Permission::DeleteDrinks,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Permission::GetDrinksDetail => "get:drinks-detail",
            Permission::PostDrinks => "post:drinks",
            Permission::PatchDrinks => "patch:drinks",
            Permission::DeleteDrinks => "delete:drinks",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single API route resolved against the API server
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiRoute {
    pub method: &'static str,
    pub url: String,
    /// `None` for public routes
    pub permission: Option<Permission>,
}

/// Resolves drinks API routes against `api_server_url`
#[derive(Debug, Clone)]
pub struct ApiEndpoints {
    base: String,
}

impl ApiEndpoints {
    pub fn new(config: &EnvironmentConfig) -> Self {
        Self {
            base: config.api_server_url().trim_end_matches('/').to_string(),
        }
    }

    /// Join `path` onto the API base URL, keeping any base path prefix
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    /// `GET /drinks`, public short representation
    pub fn list_drinks(&self) -> ApiRoute {
        self.route("GET", "drinks".to_string(), None)
    }

    /// `GET /drinks-detail`, long representation
    pub fn drinks_detail(&self) -> ApiRoute {
        self.route("GET", "drinks-detail".to_string(), Some(Permission::GetDrinksDetail))
    }

    pub fn create_drink(&self) -> ApiRoute {
        self.route("POST", "drinks".to_string(), Some(Permission::PostDrinks))
    }

    pub fn update_drink(&self, id: u64) -> ApiRoute {
        self.route("PATCH", format!("drinks/{id}"), Some(Permission::PatchDrinks))
    }

    pub fn delete_drink(&self, id: u64) -> ApiRoute {
        self.route("DELETE", format!("drinks/{id}"), Some(Permission::DeleteDrinks))
    }

    /// Every route, with `{id}` left as a template segment
    pub fn routes(&self) -> Vec<ApiRoute> {
        vec![
            self.list_drinks(),
            self.drinks_detail(),
            self.create_drink(),
            self.route("PATCH", "drinks/{id}".to_string(), Some(Permission::PatchDrinks)),
            self.route("DELETE", "drinks/{id}".to_string(), Some(Permission::DeleteDrinks)),
        ]
    }

    fn route(
        &self,
        method: &'static str,
        path: String,
        permission: Option<Permission>,
    ) -> ApiRoute {
        ApiRoute {
            method,
            url: self.url(&path),
            permission,
        }
    }
}
