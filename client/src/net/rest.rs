//! Table queries against the hosted REST data API.
//!
//! DESIGN
//! ======
//! [`TableQuery`] is a small PostgREST-style builder
//! (`from_table(..).select(..).eq(..).order(..)`) that renders to an endpoint
//! plus ordered query pairs, so the URL shape is testable without a browser.
//! The fetch helpers send it with the anon key and the signed-in user's token;
//! row-level policies on the backend decide what comes back.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "rest_test.rs"]
mod rest_test;

use serde::de::DeserializeOwned;
use session::BackendError;

use super::config::BackendConfig;
use super::hosted_auth::HostedAuth;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableQuery {
    table: String,
    select: String,
    filters: Vec<(String, String)>,
    order: Option<(String, SortOrder)>,
    limit: Option<usize>,
}

impl TableQuery {
    #[must_use]
    pub fn from_table(table: &str) -> Self {
        Self { table: table.to_owned(), select: "*".to_owned(), filters: Vec::new(), order: None, limit: None }
    }

    #[must_use]
    pub fn select(mut self, columns: &str) -> Self {
        columns.clone_into(&mut self.select);
        self
    }

    /// `column = value` filter.
    #[must_use]
    pub fn eq(mut self, column: &str, value: impl std::fmt::Display) -> Self {
        self.filters.push((column.to_owned(), format!("eq.{value}")));
        self
    }

    #[must_use]
    pub fn order(mut self, column: &str, order: SortOrder) -> Self {
        self.order = Some((column.to_owned(), order));
        self
    }

    #[must_use]
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    #[must_use]
    pub fn table(&self) -> &str {
        &self.table
    }

    #[must_use]
    pub fn endpoint(&self, config: &BackendConfig) -> String {
        config.rest_url(&self.table)
    }

    /// Query pairs for a read: `select`, filters in insertion order, `order`, `limit`.
    #[must_use]
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::with_capacity(self.filters.len() + 3);
        pairs.push(("select".to_owned(), self.select.clone()));
        pairs.extend(self.filter_pairs());
        if let Some((column, order)) = &self.order {
            pairs.push(("order".to_owned(), format!("{column}.{}", order.as_str())));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_owned(), limit.to_string()));
        }
        pairs
    }

    /// Query pairs for a write: filters only.
    #[must_use]
    pub fn filter_pairs(&self) -> Vec<(String, String)> {
        self.filters.clone()
    }
}

/// Fetch all rows matching `query`.
///
/// # Errors
///
/// Returns an error if the request fails, the backend rejects it, or the rows
/// do not decode as `T`.
pub async fn fetch_rows<T: DeserializeOwned>(auth: &HostedAuth, query: &TableQuery) -> Result<Vec<T>, BackendError> {
    #[cfg(feature = "hydrate")]
    {
        let config = auth.config();
        let pairs = query.query_pairs();
        let resp = gloo_net::http::Request::get(&query.endpoint(config))
            .query(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .header("apikey", &config.anon_key)
            .header("Authorization", &auth.authorization())
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(BackendError::Status(resp.status()));
        }
        resp.json::<Vec<T>>().await.map_err(|e| BackendError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, query);
        Err(BackendError::Unavailable("not available on server"))
    }
}

/// Fetch the first row matching `query`, if any.
///
/// # Errors
///
/// See [`fetch_rows`].
pub async fn fetch_one<T: DeserializeOwned>(auth: &HostedAuth, query: &TableQuery) -> Result<Option<T>, BackendError> {
    let query = query.clone().limit(1);
    Ok(fetch_rows(auth, &query).await?.into_iter().next())
}

/// Apply `patch` to every row matching the filters of `query`.
///
/// # Errors
///
/// Returns an error if the request fails or the backend rejects it.
pub async fn patch_rows(auth: &HostedAuth, query: &TableQuery, patch: &serde_json::Value) -> Result<(), BackendError> {
    #[cfg(feature = "hydrate")]
    {
        let config = auth.config();
        let pairs = query.filter_pairs();
        let resp = gloo_net::http::Request::patch(&query.endpoint(config))
            .query(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .header("apikey", &config.anon_key)
            .header("Authorization", &auth.authorization())
            .header("Prefer", "return=minimal")
            .json(patch)
            .map_err(|e| BackendError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| BackendError::Request(e.to_string()))?;
        if !resp.ok() {
            return Err(BackendError::Status(resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (auth, query, patch);
        Err(BackendError::Unavailable("not available on server"))
    }
}
