//! The seam the filter store fetches through.

use std::sync::Arc;

use async_trait::async_trait;
use rpt_model::FiltersData;
use rpt_model::catalog;

use crate::error::Result;
use crate::service::FiltersService;

/// Anything that can produce the available filter options.
#[async_trait]
pub trait FilterSource: Send + Sync {
    /// Fetch the available filter options.
    async fn get_filters(&self) -> Result<FiltersData>;
}

#[async_trait]
impl FilterSource for FiltersService {
    async fn get_filters(&self) -> Result<FiltersData> {
        FiltersService::get_filters(self).await
    }
}

#[async_trait]
impl<T: FilterSource + ?Sized> FilterSource for Arc<T> {
    async fn get_filters(&self) -> Result<FiltersData> {
        (**self).get_filters().await
    }
}

/// Serves a fixed set of filter options without any I/O.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticFilterSource {
    filters: FiltersData,
}

impl StaticFilterSource {
    /// Serve `filters` on every call.
    pub fn new(filters: FiltersData) -> Self {
        Self { filters }
    }
}

impl Default for StaticFilterSource {
    /// Serves the built-in month and operator catalog.
    fn default() -> Self {
        Self::new(catalog::default_filters())
    }
}

#[async_trait]
impl FilterSource for StaticFilterSource {
    async fn get_filters(&self) -> Result<FiltersData> {
        Ok(self.filters.clone())
    }
}
