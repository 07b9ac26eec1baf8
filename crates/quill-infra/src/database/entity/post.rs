//! Post entity for SeaORM.
//!
//! Expected table:
//!
//! ```sql
//! CREATE TABLE posts (
//!     id          BIGSERIAL PRIMARY KEY,
//!     title       TEXT NOT NULL,
//!     content     TEXT NOT NULL,
//!     category    TEXT,
//!     tags        TEXT,
//!     "createdAt" TEXT NOT NULL,
//!     "updatedAt" TEXT NOT NULL
//! );
//! ```

use sea_orm::entity::prelude::*;

use quill_core::domain::{Post, tags};
use quill_core::error::CodecError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub category: Option<String>,
    /// JSON string array, NULL when the post has no tags.
    #[sea_orm(column_type = "Text")]
    pub tags: Option<String>,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: String,
    #[sea_orm(column_name = "updatedAt")]
    pub updated_at: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from a stored row to the domain Post. Fails when the tags
/// column does not hold a JSON string array.
impl TryFrom<Model> for Post {
    type Error = CodecError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let tags = tags::decode(model.tags.as_deref())?;
        Ok(Self {
            id: model.id,
            title: model.title,
            content: model.content,
            category: model.category,
            tags,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
