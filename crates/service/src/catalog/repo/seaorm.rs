use sea_orm::{DatabaseConnection, EntityTrait};

use crate::catalog::domain::Bird;
use crate::catalog::errors::StoreError;
use crate::catalog::repository::BirdStore;

/// `BirdStore` backed by the `birds` table. Owns the connection pool for the
/// lifetime of the process.
pub struct SeaOrmBirdStore {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl BirdStore for SeaOrmBirdStore {
    async fn create_bird(&self, bird: &Bird) -> Result<(), StoreError> {
        // The inserted row itself is of no interest, only whether it landed.
        models::bird::create(&self.db, &bird.species, &bird.description)
            .await
            .map(|_| ())
            .map_err(|e| StoreError::Persistence(e.to_string()))
    }

    async fn get_birds(&self) -> Result<Vec<Bird>, StoreError> {
        // A decode failure on any row fails the whole call; no partial list.
        let rows = models::bird::Entity::find()
            .all(&self.db)
            .await
            .map_err(|e| StoreError::Persistence(e.to_string()))?;
        Ok(rows
            .into_iter()
            .map(|row| Bird { species: row.species, description: row.description })
            .collect())
    }
}
