// Copyright (c) 2025 Grosz contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::models::{
    Ack, Category, LoginResponse, NewTransaction, Product, Transaction, Wallet,
};
use crate::session::Session;

const UA: &str = concat!(
    "grosz/",
    env!("CARGO_PKG_VERSION"),
    " (+https://github.com/grosz-cli/grosz)"
);

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/v1";

/// Failures surfaced by the backend client. Validation errors never reach
/// this type; they are raised locally before any request is built.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("not logged in or session expired; run `grosz login`")]
    Unauthorized,
    #[error("server returned {status}: {message}")]
    Api { status: StatusCode, message: String },
}

/// Blocking client for the tracker's raw CRUD endpoints. The session is
/// injected at construction; a 401 from any endpoint invalidates it.
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: Session) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .user_agent(UA)
            .build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http,
            base_url,
            session,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn send(&self, req: RequestBuilder) -> Result<Response, ApiError> {
        let req = match self.session.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        };
        let resp = req.send()?;
        if resp.status() == StatusCode::UNAUTHORIZED {
            self.session.invalidate();
            return Err(ApiError::Unauthorized);
        }
        if !resp.status().is_success() {
            let status = resp.status();
            let message = resp.text().unwrap_or_default();
            return Err(ApiError::Api { status, message });
        }
        Ok(resp)
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let resp = self.send(self.http.get(self.url(path)).query(query))?;
        Ok(resp.json()?)
    }

    // --- auth ---

    pub fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let resp = self.send(
            self.http
                .post(self.url("/auth/login"))
                .form(&[("username", username), ("password", password)]),
        )?;
        let login: LoginResponse = resp.json().map_err(ApiError::from)?;
        self.session.store(&login.access_token)?;
        Ok(login)
    }

    pub fn logout(&self) {
        self.session.clear();
    }

    // --- transactions ---

    /// Transactions in the inclusive range, starting at `skip`. Soft-deleted
    /// rows are dropped before the limit is applied; the server is trusted to
    /// honour skip but not limit.
    pub fn transactions_in_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        skip: usize,
        limit: Option<usize>,
    ) -> Result<Vec<Transaction>, ApiError> {
        let raw: Vec<Transaction> = self.get_json(
            "/transactions/",
            &[
                ("start_date", start.to_rfc3339()),
                ("end_date", end.to_rfc3339()),
                ("skip", skip.to_string()),
            ],
        )?;
        let live = live_rows(raw, limit);
        debug!(count = live.len(), skip, ?limit, "fetched transactions");
        Ok(live)
    }

    pub fn transaction(&self, id: &str) -> Result<Transaction, ApiError> {
        self.get_json(&format!("/transactions/id/{}", id), &[])
    }

    pub fn create_transaction(&self, tx: &NewTransaction) -> Result<Ack, ApiError> {
        let resp = self.send(self.http.post(self.url("/transactions/")).json(tx))?;
        Ok(resp.json()?)
    }

    pub fn delete_transaction(&self, id: &str) -> Result<Ack, ApiError> {
        let resp = self.send(self.http.delete(self.url(&format!("/transactions/id/{}", id))))?;
        Ok(resp.json()?)
    }

    // --- categories ---

    pub fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let raw: Vec<Category> = self.get_json("/categories/", &[])?;
        Ok(raw.into_iter().filter(|c| !c.is_deleted).collect())
    }

    pub fn create_category(&self, name: &str) -> Result<Ack, ApiError> {
        let resp = self.send(
            self.http
                .post(self.url("/categories"))
                .query(&[("name", name)]),
        )?;
        Ok(resp.json()?)
    }

    pub fn update_category(&self, id: &str, name: &str) -> Result<Ack, ApiError> {
        let resp = self.send(
            self.http
                .put(self.url(&format!("/categories/{}", id)))
                .query(&[("name", name)]),
        )?;
        Ok(resp.json()?)
    }

    pub fn delete_category(&self, id: &str) -> Result<Ack, ApiError> {
        let resp = self.send(self.http.delete(self.url(&format!("/categories/id/{}", id))))?;
        Ok(resp.json()?)
    }

    // --- products ---

    pub fn products(&self) -> Result<Vec<Product>, ApiError> {
        let raw: Vec<Product> = self.get_json("/products/", &[])?;
        Ok(raw.into_iter().filter(|p| !p.is_deleted).collect())
    }

    pub fn create_product(&self, name: &str, category_id: Option<&str>) -> Result<Ack, ApiError> {
        let mut query = vec![("name", name.to_string())];
        if let Some(cat) = category_id {
            query.push(("category_id", cat.to_string()));
        }
        let resp = self.send(self.http.post(self.url("/products/")).query(&query))?;
        Ok(resp.json()?)
    }

    pub fn update_product(&self, id: &str, name: &str) -> Result<Ack, ApiError> {
        let resp = self.send(
            self.http
                .put(self.url(&format!("/products/id/{}", id)))
                .json(&serde_json::json!({ "name": name })),
        )?;
        Ok(resp.json()?)
    }

    pub fn delete_product(&self, id: &str) -> Result<Ack, ApiError> {
        let resp = self.send(self.http.delete(self.url(&format!("/products/{}", id))))?;
        Ok(resp.json()?)
    }

    // --- wallet ---

    pub fn wallet(&self) -> Result<Wallet, ApiError> {
        self.get_json("/wallets/", &[])
    }
}

/// Post-fetch step for a transaction page: soft-deleted rows are dropped
/// first, then the page is truncated to `limit`. Filtering before truncation
/// means a page can come back shorter than `limit` even when more live rows
/// exist further into the stream.
pub fn live_rows(raw: Vec<Transaction>, limit: Option<usize>) -> Vec<Transaction> {
    let mut live: Vec<Transaction> = raw.into_iter().filter(|t| !t.is_deleted).collect();
    if let Some(limit) = limit {
        live.truncate(limit);
    }
    live
}
