//! Collection operations scoped to the calling user.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use nestor_core::error::AppError;
use nestor_database::store::CollectionStore;
use nestor_entity::collection::{Collection, CreateCollection};

use crate::context::RequestContext;

/// Manages the caller's collections.
#[derive(Clone)]
pub struct CollectionService {
    /// Collection store.
    collections: Arc<dyn CollectionStore>,
}

impl std::fmt::Debug for CollectionService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionService").finish_non_exhaustive()
    }
}

/// Request to create a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCollectionRequest {
    /// Collection name, unique per owner.
    pub name: String,
}

impl CollectionService {
    /// Creates a new collection service.
    pub fn new(collections: Arc<dyn CollectionStore>) -> Self {
        Self { collections }
    }

    /// Creates a collection owned by the caller.
    pub async fn create_collection(
        &self,
        ctx: &RequestContext,
        req: CreateCollectionRequest,
    ) -> Result<Collection, AppError> {
        if req.name.is_empty() {
            return Err(AppError::incomplete_input());
        }

        if self
            .collections
            .find_by_user_and_name(ctx.user_id, &req.name)
            .await?
            .is_some()
        {
            return Err(AppError::duplicate_collection_name(&req.name));
        }

        let collection = self
            .collections
            .create(&CreateCollection {
                user_id: ctx.user_id,
                name: req.name,
            })
            .await?;

        info!(
            user_id = %ctx.user_id,
            collection_id = %collection.id,
            name = %collection.name,
            "Collection created"
        );

        Ok(collection)
    }

    /// Lists the caller's collections in creation order.
    pub async fn list_collections(&self, ctx: &RequestContext) -> Result<Vec<Collection>, AppError> {
        self.collections.find_by_user(ctx.user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nestor_core::error::ErrorKind;

    use crate::testing::Harness;

    fn named(name: &str) -> CreateCollectionRequest {
        CreateCollectionRequest {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_list() {
        let h = Harness::new();
        let alice = h.login("alice").await;
        let bob = h.login("bob").await;

        let first = h.collections.create_collection(&alice, named("first")).await.unwrap();
        let second = h.collections.create_collection(&alice, named("second")).await.unwrap();
        h.collections.create_collection(&bob, named("first")).await.unwrap();

        let listed = h.collections.list_collections(&alice).await.unwrap();
        let ids: Vec<_> = listed.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
        assert!(listed.iter().all(|c| c.is_owned_by(alice.user_id)));
    }

    #[tokio::test]
    async fn test_duplicate_name_for_same_owner() {
        let h = Harness::new();
        let alice = h.login("alice").await;

        h.collections.create_collection(&alice, named("first")).await.unwrap();
        let err = h
            .collections
            .create_collection(&alice, named("first"))
            .await
            .unwrap_err();
        assert_eq!(err.kind, ErrorKind::DuplicateCollectionName);
        assert_eq!(err.message, "A collection named 'first' already exists.");
    }

    #[tokio::test]
    async fn test_empty_name() {
        let h = Harness::new();
        let alice = h.login("alice").await;
        let err = h.collections.create_collection(&alice, named("")).await.unwrap_err();
        assert_eq!(err.kind, ErrorKind::IncompleteInput);
        assert!(h.collections.list_collections(&alice).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_concurrent_creation_admits_one() {
        let h = Harness::new();
        let alice = h.login("alice").await;

        let mut handles = Vec::new();
        for _ in 0..8 {
            let service = h.collections.clone();
            let ctx = alice.clone();
            handles.push(tokio::spawn(async move {
                service.create_collection(&ctx, named("race")).await
            }));
        }

        let mut created = 0;
        for handle in handles {
            match handle.await.unwrap() {
                Ok(_) => created += 1,
                Err(e) => assert_eq!(e.kind, ErrorKind::DuplicateCollectionName),
            }
        }
        assert_eq!(created, 1);
    }
}
