//! Key operations. Every key lives in a collection owned by the same user.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use nestor_core::error::AppError;
use nestor_core::types::CollectionId;
use nestor_database::store::{CollectionStore, KeyStore};
use nestor_entity::collection::Collection;
use nestor_entity::key::{CreateKey, Key};

use crate::context::RequestContext;

/// Manages the caller's keys.
#[derive(Clone)]
pub struct KeyService {
    /// Collection store, for ownership checks.
    collections: Arc<dyn CollectionStore>,
    /// Key store.
    keys: Arc<dyn KeyStore>,
}

impl std::fmt::Debug for KeyService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyService").finish_non_exhaustive()
    }
}

/// Request to create a key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateKeyRequest {
    /// Target collection id, as supplied by the client.
    pub collection: String,
    /// Key name, unique across all of the owner's collections.
    pub name: String,
    /// Opaque key value.
    pub value: String,
}

impl KeyService {
    /// Creates a new key service.
    pub fn new(collections: Arc<dyn CollectionStore>, keys: Arc<dyn KeyStore>) -> Self {
        Self { collections, keys }
    }

    /// Files a new key under one of the caller's collections.
    pub async fn create_key(
        &self,
        ctx: &RequestContext,
        req: CreateKeyRequest,
    ) -> Result<Key, AppError> {
        if req.name.is_empty() || req.value.is_empty() || req.collection.is_empty() {
            return Err(AppError::incomplete_input());
        }

        let collection = self.owned_collection(ctx, &req.collection).await?;

        if self
            .keys
            .find_by_user_and_name(ctx.user_id, &req.name)
            .await?
            .is_some()
        {
            return Err(AppError::duplicate_key_name(&req.name));
        }

        let key = self
            .keys
            .create(&CreateKey {
                user_id: ctx.user_id,
                collection_id: collection.id,
                name: req.name,
                value: req.value,
            })
            .await?;

        // The value is a secret; only the name is logged.
        info!(
            user_id = %ctx.user_id,
            collection_id = %collection.id,
            key_id = %key.id,
            name = %key.name,
            "Key created"
        );

        Ok(key)
    }

    /// Lists the caller's keys, optionally only those in one collection.
    ///
    /// An empty filter is the same as no filter.
    pub async fn list_keys(
        &self,
        ctx: &RequestContext,
        collection: Option<&str>,
    ) -> Result<Vec<Key>, AppError> {
        match collection.filter(|c| !c.is_empty()) {
            Some(raw) => {
                let collection = self.owned_collection(ctx, raw).await?;
                self.keys.find_by_collection(collection.id).await
            }
            None => self.keys.find_by_user(ctx.user_id).await,
        }
    }

    /// Resolves a client-supplied collection id and checks the caller owns it.
    async fn owned_collection(
        &self,
        ctx: &RequestContext,
        raw: &str,
    ) -> Result<Collection, AppError> {
        let id: CollectionId = raw
            .parse()
            .map_err(|_| AppError::collection_not_found())?;

        let collection = self
            .collections
            .find_by_id(id)
            .await?
            .ok_or_else(AppError::collection_not_found)?;

        if !collection.is_owned_by(ctx.user_id) {
            warn!(
                user_id = %ctx.user_id,
                collection_id = %collection.id,
                "Access to foreign collection denied"
            );
            return Err(AppError::forbidden());
        }

        Ok(collection)
    }
}
