//! Catalog management service

use crate::models::{record::CreateRecord, Record};

use super::SharedCatalog;

#[derive(Clone)]
pub struct CatalogService {
    catalog: SharedCatalog,
}

impl CatalogService {
    pub fn new(catalog: SharedCatalog) -> Self {
        Self { catalog }
    }

    /// Add a record at the end of the catalog
    pub async fn add_record(&self, record: CreateRecord) -> Record {
        let mut catalog = self.catalog.lock().await;
        let created = catalog
            .add(record.title, record.author, record.id, record.total_copies)
            .clone();
        tracing::info!("Catalog add: id={} [{}] ({} records)", created.id, created, catalog.len());
        created
    }

    /// All records in insertion order
    pub async fn list_records(&self) -> Vec<Record> {
        self.catalog.lock().await.list_all().to_vec()
    }

    pub async fn count_records(&self) -> usize {
        self.catalog.lock().await.len()
    }

    pub async fn search_by_title(&self, query: &str) -> Vec<Record> {
        let catalog = self.catalog.lock().await;
        let found: Vec<Record> = catalog.search_by_title(query).into_iter().cloned().collect();
        tracing::debug!("Title search {:?}: {} match(es)", query, found.len());
        found
    }

    pub async fn search_by_author(&self, query: &str) -> Vec<Record> {
        let catalog = self.catalog.lock().await;
        let found: Vec<Record> = catalog.search_by_author(query).into_iter().cloned().collect();
        tracing::debug!("Author search {:?}: {} match(es)", query, found.len());
        found
    }
}
