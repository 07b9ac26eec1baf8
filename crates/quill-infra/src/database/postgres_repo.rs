//! PostgreSQL repository implementation.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, ExprTrait, Func};
use sea_orm::{ColumnTrait, Condition, DbConn, DbErr, EntityTrait, QueryFilter, Set};

use quill_core::domain::{Post, PostDraft, PostPatch, tags, timestamp};
use quill_core::error::RepoError;
use quill_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> RepoError {
    let err_str = e.to_string();
    if err_str.contains("duplicate") || err_str.contains("unique") {
        RepoError::Constraint(err_str)
    } else {
        RepoError::Query(err_str)
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, draft: PostDraft) -> Result<Post, RepoError> {
        let stamp = timestamp::now();
        let model = post::ActiveModel {
            title: Set(draft.title.clone()),
            content: Set(draft.content.clone()),
            category: Set(draft.category.clone()),
            tags: Set(tags::encode(draft.tags.as_deref())),
            created_at: Set(stamp.clone()),
            updated_at: Set(stamp.clone()),
            ..Default::default()
        };

        let result = PostEntity::insert(model)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        // Echo the draft plus the assigned id; no read-back on create.
        Ok(Post {
            id: result.last_insert_id,
            title: draft.title,
            content: draft.content,
            category: draft.category,
            tags: draft.tags,
            created_at: stamp.clone(),
            updated_at: stamp,
        })
    }

    async fn update(&self, id: i64, patch: PostPatch) -> Result<Post, RepoError> {
        let mut model = post::ActiveModel {
            updated_at: Set(timestamp::now()),
            ..Default::default()
        };
        if let Some(title) = patch.title {
            model.title = Set(title);
        }
        if let Some(content) = patch.content {
            model.content = Set(content);
        }
        if let Some(category) = patch.category {
            model.category = Set(Some(category));
        }
        if let Some(tag_list) = patch.tags {
            model.tags = Set(tags::encode(Some(&tag_list)));
        }

        let result = PostEntity::update_many()
            .set(model)
            .filter(post::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        // Read back so the caller sees the stored row, tags decoded.
        let row = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(RepoError::NotFound)?;

        Ok(row.try_into()?)
    }

    async fn delete(&self, id: i64) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, RepoError> {
        let row = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        row.map(Post::try_from).transpose().map_err(RepoError::from)
    }

    async fn list(&self) -> Result<Vec<Post>, RepoError> {
        let rows = PostEntity::find().all(&self.db).await.map_err(map_db_err)?;

        rows.into_iter()
            .map(|row| row.try_into().map_err(RepoError::from))
            .collect()
    }

    async fn search(&self, term: &str) -> Result<Vec<Post>, RepoError> {
        // Lower-cased and wildcard-wrapped here, bound as a value below; the
        // term never lands in the SQL text itself.
        let pattern = format!("%{}%", term.to_lowercase());
        let matches = Condition::any()
            .add(
                Expr::expr(Func::lower(Expr::col((post::Entity, post::Column::Title))))
                    .like(pattern.as_str()),
            )
            .add(
                Expr::expr(Func::lower(Expr::col((post::Entity, post::Column::Content))))
                    .like(pattern.as_str()),
            )
            .add(
                Expr::expr(Func::lower(Expr::col((post::Entity, post::Column::Category))))
                    .like(pattern.as_str()),
            );

        let rows = PostEntity::find()
            .filter(matches)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        rows.into_iter()
            .map(|row| row.try_into().map_err(RepoError::from))
            .collect()
    }
}
