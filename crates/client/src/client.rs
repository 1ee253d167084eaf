//! HTTP client for the Catalog Service.

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

use catalog_core::{BrandId, TypeId};
use catalog_products::{
    Brand, NewBrand, NewProductType, ProductEditRequest, ProductType, validate_name,
};

use crate::config::ClientConfig;
use crate::error::ClientError;

const PRODUCT_TYPES: Resource = Resource {
    path: "/api/LoaiSanPham",
    create_failed: "could not create product type",
    update_failed: "could not update product type",
    delete_failed: "could not delete product type",
};

const BRANDS: Resource = Resource {
    path: "/api/ThuongHieu",
    create_failed: "could not create brand",
    update_failed: "could not update brand",
    delete_failed: "could not delete brand: it may still have products",
};

const EDIT_PRODUCT_PATH: &str = "/api/SanPham/EditSanPham";

/// A CRUD collection on the service plus the messages used when the service
/// fails without explaining why.
struct Resource {
    path: &'static str,
    create_failed: &'static str,
    update_failed: &'static str,
    delete_failed: &'static str,
}

/// Result of an update: the service either echoes the entity or answers
/// `204 No Content`, in which case the caller should re-fetch the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Updated<T> {
    Entity(T),
    NoContent,
}

/// Where a validated product edit is sent.
#[async_trait]
pub trait ProductSink: Send + Sync {
    async fn edit_product(&self, request: &ProductEditRequest) -> Result<(), ClientError>;
}

#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl CatalogClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // -------------------------
    // Product types
    // -------------------------

    pub async fn list_product_types(&self, keyword: &str) -> Result<Vec<ProductType>, ClientError> {
        self.list(&PRODUCT_TYPES, keyword).await
    }

    pub async fn create_product_type(&self, name: &str) -> Result<ProductType, ClientError> {
        let name = validate_name(name)?;
        let body = NewProductType {
            name: name.to_string(),
        };
        self.create(&PRODUCT_TYPES, &body).await
    }

    pub async fn update_product_type(
        &self,
        id: TypeId,
        name: &str,
    ) -> Result<Updated<ProductType>, ClientError> {
        let name = validate_name(name)?;
        let body = ProductType {
            id,
            name: name.to_string(),
        };
        self.update(&PRODUCT_TYPES, id, &body).await
    }

    pub async fn delete_product_type(&self, id: TypeId) -> Result<(), ClientError> {
        self.delete(&PRODUCT_TYPES, id).await
    }

    // -------------------------
    // Brands
    // -------------------------

    pub async fn list_brands(&self, keyword: &str) -> Result<Vec<Brand>, ClientError> {
        self.list(&BRANDS, keyword).await
    }

    pub async fn create_brand(&self, name: &str) -> Result<Brand, ClientError> {
        let name = validate_name(name)?;
        let body = NewBrand {
            name: name.to_string(),
        };
        self.create(&BRANDS, &body).await
    }

    pub async fn update_brand(&self, id: BrandId, name: &str) -> Result<Updated<Brand>, ClientError> {
        let name = validate_name(name)?;
        let body = Brand {
            id,
            name: name.to_string(),
        };
        self.update(&BRANDS, id, &body).await
    }

    pub async fn delete_brand(&self, id: BrandId) -> Result<(), ClientError> {
        self.delete(&BRANDS, id).await
    }

    // -------------------------
    // Products
    // -------------------------

    /// Send the whole edit as one batch (one item per color).
    ///
    /// The endpoint's error body is not meaningful; any non-2xx becomes a
    /// generic failure.
    pub async fn edit_product(&self, request: &ProductEditRequest) -> Result<(), ClientError> {
        let items = request.to_items();
        tracing::debug!(
            product_id = %request.product_id,
            colors = items.len(),
            "submitting product edit"
        );
        let resp = self.send(self.post(EDIT_PRODUCT_PATH).json(&items)).await?;
        if !resp.status().is_success() {
            return Err(ClientError::Api(
                resp.status().as_u16(),
                "product update failed".to_string(),
            ));
        }
        Ok(())
    }

    // -------------------------
    // Plumbing
    // -------------------------

    async fn list<T: DeserializeOwned>(
        &self,
        resource: &Resource,
        keyword: &str,
    ) -> Result<Vec<T>, ClientError> {
        let req = self.get(resource.path).query(&[("keyword", keyword)]);
        let resp = self.send(req).await?;
        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let text = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api(status, text));
        }
        Ok(resp.json().await?)
    }

    async fn create<B: Serialize, T: DeserializeOwned>(
        &self,
        resource: &Resource,
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self.send(self.post(resource.path).json(body)).await?;
        let resp = ensure_success(resp, resource.create_failed).await?;
        Ok(resp.json().await?)
    }

    async fn update<B: Serialize, T: DeserializeOwned>(
        &self,
        resource: &Resource,
        id: impl core::fmt::Display,
        body: &B,
    ) -> Result<Updated<T>, ClientError> {
        let path = format!("{}/{}", resource.path, id);
        let resp = self.send(self.request(reqwest::Method::PUT, &path).json(body)).await?;
        let resp = ensure_success(resp, resource.update_failed).await?;
        if resp.status() == StatusCode::NO_CONTENT {
            return Ok(Updated::NoContent);
        }
        Ok(Updated::Entity(resp.json().await?))
    }

    async fn delete(
        &self,
        resource: &Resource,
        id: impl core::fmt::Display,
    ) -> Result<(), ClientError> {
        let path = format!("{}/{}", resource.path, id);
        let resp = self.send(self.request(reqwest::Method::DELETE, &path)).await?;
        ensure_success(resp, resource.delete_failed).await?;
        Ok(())
    }

    fn get(&self, path: &str) -> RequestBuilder {
        self.request(reqwest::Method::GET, path)
    }

    fn post(&self, path: &str) -> RequestBuilder {
        self.request(reqwest::Method::POST, path)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.base_url(), path);
        let mut req = self.http.request(method, url);
        if let Some(token) = &self.config.token {
            req = req.bearer_auth(token);
        }
        req
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response, ClientError> {
        let resp = req.send().await.map_err(|e| {
            tracing::warn!(error = %e, "catalog service unreachable");
            ClientError::Network(e.to_string())
        })?;
        tracing::debug!(status = resp.status().as_u16(), url = %resp.url(), "catalog service responded");
        Ok(resp)
    }
}

#[async_trait]
impl ProductSink for CatalogClient {
    async fn edit_product(&self, request: &ProductEditRequest) -> Result<(), ClientError> {
        CatalogClient::edit_product(self, request).await
    }
}

/// Turn a non-2xx response into `ClientError::Api`, using the body text as
/// the message, or `fallback` when the body is empty.
async fn ensure_success(resp: Response, fallback: &str) -> Result<Response, ClientError> {
    if resp.status().is_success() {
        return Ok(resp);
    }
    let status = resp.status().as_u16();
    let text = resp.text().await.unwrap_or_default();
    let message = if text.trim().is_empty() {
        fallback.to_string()
    } else {
        text
    };
    Err(ClientError::Api(status, message))
}
