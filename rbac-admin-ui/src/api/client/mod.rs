use crate::config::Config;
use dioxus::prelude::{info, warn};
use rbac::access::{Principal, RoleSummary};
use rbac::table::{FetchDescriptor, ListPage};
use rbac::{RbacError, Result};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use shared_http::api::{
    CreateRoleRequest, ErrorResponse, ListResponse, PermissionResponse, PrincipalResponse,
    RoleResponse,
};

const PERMISSIONS_PAGE_LIMIT: u32 = 1000;

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    config: Config,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            config: Config::from_env(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

impl ApiClient {
    pub async fn fetch_roles(&self, descriptor: &FetchDescriptor) -> Result<ListPage<RoleSummary>> {
        let page: ListResponse<RoleResponse> = self.list("/roles/", descriptor).await?;
        Ok(into_page(page, descriptor))
    }

    pub async fn fetch_principals(
        &self,
        descriptor: &FetchDescriptor,
    ) -> Result<ListPage<Principal>> {
        let page: ListResponse<PrincipalResponse> = self.list("/principals/", descriptor).await?;
        Ok(into_page(page, descriptor))
    }

    pub async fn list_permissions(&self) -> Result<Vec<PermissionResponse>> {
        let descriptor = FetchDescriptor::default().with_limit(PERMISSIONS_PAGE_LIMIT);
        let page: ListResponse<PermissionResponse> =
            self.list("/permissions/", &descriptor).await?;
        Ok(page.data)
    }

    pub async fn create_role(&self, request: CreateRoleRequest) -> Result<RoleSummary> {
        let url = format!("{}/roles/", self.config.api_base_url);
        info!("Creating role {} at URL: {}", request.name, url);
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!("Create role request failed: {}", e);
                RbacError::from(ErrorResponse::new("Create role request failed"))
            })?;
        let role: RoleResponse = read_json(response).await?;
        Ok(role.into())
    }

    async fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        descriptor: &FetchDescriptor,
    ) -> Result<ListResponse<T>> {
        let url = format!("{}{}", self.config.api_base_url, path);
        info!("Listing {} with {:?}", url, descriptor.query_pairs());
        let response = self
            .client
            .get(&url)
            .query(&descriptor.query_pairs())
            .send()
            .await
            .map_err(|e| {
                warn!("List request to {} failed: {}", url, e);
                RbacError::from(ErrorResponse::new("List request failed"))
            })?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status == StatusCode::OK || status == StatusCode::CREATED {
        return response.json().await.map_err(|e| {
            warn!("Malformed response body: {}", e);
            RbacError::Serialization(e.to_string())
        });
    }

    warn!("Request failed with status {}", status);
    let error = response
        .json::<ErrorResponse>()
        .await
        .unwrap_or_else(|_| ErrorResponse::new(format!("Unexpected status {}", status)));
    Err(error.into())
}

fn into_page<T, R: From<T>>(page: ListResponse<T>, descriptor: &FetchDescriptor) -> ListPage<R> {
    let limit = match page.meta.limit {
        0 => descriptor.limit,
        limit => limit as u32,
    };
    ListPage::new(
        page.data.into_iter().map(R::from).collect(),
        page.meta.count as u32,
        limit,
        page.meta.offset as u32,
    )
}
