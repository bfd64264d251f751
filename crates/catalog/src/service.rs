use sewna_common::{AppConfig, Result, SewnaError};
use sewna_vector::{MatchEngine, MatchResult};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use crate::seed::sample_designers;
use crate::store::CatalogStore;
use crate::types::{DesignerProfile, DesignerRecord, DesignerSummary};

/// Designer matching, seeding and reset over a shared catalog
#[derive(Clone)]
pub struct DesignerService {
    engine: MatchEngine,
    store: Arc<RwLock<CatalogStore>>,
}

impl DesignerService {
    pub fn new(engine: MatchEngine, store: CatalogStore) -> Self {
        Self {
            engine,
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// Open the configured catalog and build the match engine
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let engine = MatchEngine::from_config(config)?;
        let store = CatalogStore::load(&config.catalog_path)?;
        Ok(Self::new(engine, store))
    }

    /// Rank the catalog against a free-text description
    pub async fn find_matching_designers(
        &self,
        description: &str,
        limit: usize,
    ) -> Result<Vec<MatchResult<DesignerRecord>>> {
        if description.is_empty() {
            return Err(SewnaError::invalid_input("Description is required"));
        }

        debug!("Matching designers for: {}", description);

        let catalog: Vec<(DesignerRecord, Vec<f64>)> = {
            let store = self.store.read().await;
            info!("Found {} designers in catalog", store.len());
            store
                .records()
                .iter()
                .map(|r| (r.clone(), r.embedding.clone()))
                .collect()
        };

        let all = self.engine.rank(description, catalog, usize::MAX).await;
        for result in &all {
            debug!(
                "Similarity with {}: {:.1}%",
                result.entity.name,
                result.similarity * 100.0
            );
        }

        let top: Vec<_> = all.into_iter().take(limit).collect();
        for (rank, result) in top.iter().enumerate() {
            info!(
                "{}. {}: {:.1}%",
                rank + 1,
                result.entity.name,
                result.similarity * 100.0
            );
        }

        Ok(top)
    }

    /// Seed the built-in designers when the catalog is empty
    ///
    /// Returns how many designers were created.
    pub async fn initialize_sample_designers(&self) -> Result<usize> {
        let mut store = self.store.write().await;
        if !store.is_empty() {
            info!(
                "Catalog already contains {} designers, skipping initialization",
                store.len()
            );
            return Ok(0);
        }

        info!("Initializing sample designers with semantic embeddings...");
        let mut created = 0;
        for profile in sample_designers() {
            let record = self.embed_profile(&profile);
            match store.insert(record) {
                Ok(()) => {
                    created += 1;
                    info!("Created designer: {}", profile.name);
                }
                Err(e) => error!("Failed to create designer {}: {}", profile.name, e),
            }
        }

        info!("Sample designers created: {}", created);
        Ok(created)
    }

    /// Delete every designer and seed again
    pub async fn reset_designers(&self) -> Result<usize> {
        let removed = self.store.write().await.clear()?;
        info!("Deleted {} designers, reinitializing", removed);
        self.initialize_sample_designers().await
    }

    /// All designers without embeddings
    pub async fn list_designers(&self) -> Vec<DesignerSummary> {
        self.store
            .read()
            .await
            .records()
            .iter()
            .map(DesignerRecord::summary)
            .collect()
    }

    fn embed_profile(&self, profile: &DesignerProfile) -> DesignerRecord {
        let embedding = self
            .engine
            .synthesizer()
            .generate_from_weights(&profile.weights, &profile.name);
        DesignerRecord::from_profile(profile, embedding)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sewna_vector::{l2_norm, EMBEDDING_DIMENSION};

    fn service(dir: &tempfile::TempDir) -> DesignerService {
        let store = CatalogStore::load(&dir.path().join("designers.json")).unwrap();
        DesignerService::new(MatchEngine::offline(), store)
    }

    #[tokio::test]
    async fn test_initialize_seeds_once() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);

        assert_eq!(service.initialize_sample_designers().await.unwrap(), 6);
        assert_eq!(service.initialize_sample_designers().await.unwrap(), 0);
        assert_eq!(service.store.read().await.len(), 6);
    }

    #[tokio::test]
    async fn test_seeded_embeddings_are_unit_vectors() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);
        service.initialize_sample_designers().await.unwrap();

        let store = service.store.read().await;
        for record in store.records() {
            assert_eq!(record.embedding.len(), EMBEDDING_DIMENSION);
            assert!((l2_norm(&record.embedding) - 1.0).abs() < 1e-9);
        }
    }

    #[tokio::test]
    async fn test_reset_is_idempotent_with_seeding() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);
        service.initialize_sample_designers().await.unwrap();
        let before: Vec<_> = {
            let store = service.store.read().await;
            store.records().iter().map(|r| (r.name.clone(), r.embedding.clone())).collect()
        };

        assert_eq!(service.reset_designers().await.unwrap(), 6);

        let after: Vec<_> = {
            let store = service.store.read().await;
            store.records().iter().map(|r| (r.name.clone(), r.embedding.clone())).collect()
        };
        assert_eq!(before, after);
    }

    #[tokio::test]
    async fn test_sustainable_query_matches_sustainable_designers() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);
        service.initialize_sample_designers().await.unwrap();

        let matches = service
            .find_matching_designers("I want a minimalist, sustainable designer", 3)
            .await
            .unwrap();

        assert_eq!(matches.len(), 3);
        let top_two: Vec<_> = matches[..2].iter().map(|m| m.entity.name.as_str()).collect();
        assert!(top_two.contains(&"Emma Richardson"));
        assert!(top_two.contains(&"Alex Thompson"));
        assert!(matches[0].similarity >= matches[1].similarity);
        assert!(matches[1].similarity >= matches[2].similarity);
    }

    #[tokio::test]
    async fn test_streetwear_query() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);
        service.initialize_sample_designers().await.unwrap();

        let matches = service
            .find_matching_designers("urban streetwear for everyday", 1)
            .await
            .unwrap();
        assert_eq!(matches[0].entity.name, "David Park");
    }

    #[tokio::test]
    async fn test_empty_description_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);
        let err = service.find_matching_designers("", 3).await.unwrap_err();
        assert!(matches!(err, SewnaError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_whitespace_description_still_ranks() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);
        service.initialize_sample_designers().await.unwrap();

        let matches = service.find_matching_designers("   ", 3).await.unwrap();
        assert_eq!(matches.len(), 3);
    }

    #[tokio::test]
    async fn test_seed_failure_keeps_catalog_empty_and_retries() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a directory").unwrap();
        let store = CatalogStore::load(&blocker.join("designers.json")).unwrap();
        let service = DesignerService::new(MatchEngine::offline(), store);

        assert_eq!(service.initialize_sample_designers().await.unwrap(), 0);
        assert!(service.store.read().await.is_empty());

        // Unblock the path: the next call seeds for real
        std::fs::remove_file(&blocker).unwrap();
        assert_eq!(service.initialize_sample_designers().await.unwrap(), 6);
        assert!(blocker.join("designers.json").exists());
    }

    #[tokio::test]
    async fn test_empty_catalog_returns_no_matches() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);
        let matches = service
            .find_matching_designers("bohemian", 3)
            .await
            .unwrap();
        assert!(matches.is_empty());
    }

    #[tokio::test]
    async fn test_list_designers() {
        let dir = tempfile::tempdir().unwrap();
        let service = service(&dir);
        service.initialize_sample_designers().await.unwrap();

        let list = service.list_designers().await;
        assert_eq!(list.len(), 6);
        assert_eq!(list[0].name, "Emma Richardson");
    }
}
