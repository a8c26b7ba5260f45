use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::errors;

/// Row in the `birds` table. The id column only exists so the table has a
/// primary key; it is never exposed to callers.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "birds")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip)]
    pub id: i32,
    pub species: String,
    pub description: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert one bird. Values are bound parameters, never interpolated into the
/// query text. Duplicates are allowed; no field validation happens here.
pub async fn create(db: &DatabaseConnection, species: &str, description: &str) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        species: Set(species.to_string()),
        description: Set(description.to_string()),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}
