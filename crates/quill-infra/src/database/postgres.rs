//! PostgreSQL post repository.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DbErr, EntityTrait, FromQueryResult,
    IntoActiveModel, QueryFilter, QueryOrder, QuerySelect, Set,
    prelude::DateTimeWithTimeZone,
};

use quill_core::domain::{Post, PostSummary};
use quill_core::error::RepoError;
use quill_core::ports::{PostChanges, PostRepository};

use super::connection::DatabaseHandle;
use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository. Holds the lazy connection handle; every
/// operation goes through [`DatabaseHandle::conn`], so the first request
/// after startup (or after a connection failure) triggers the connect.
pub struct PostgresPostRepository {
    db: Arc<DatabaseHandle>,
}

impl PostgresPostRepository {
    pub fn new(db: Arc<DatabaseHandle>) -> Self {
        Self { db }
    }
}

/// Escape LIKE wildcards so user input only ever matches as a literal
/// substring.
fn like_pattern(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for ch in fragment.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    format!("%{escaped}%")
}

fn map_write_err(e: DbErr) -> RepoError {
    let err_str = e.to_string();
    if err_str.contains("duplicate") || err_str.contains("unique") {
        RepoError::Constraint("A post with this slug already exists".to_string())
    } else {
        RepoError::Query(err_str)
    }
}

/// Row shape for the summary projection used by list queries.
#[derive(Debug, FromQueryResult)]
struct SummaryRow {
    title: String,
    slug: String,
    created_at: DateTimeWithTimeZone,
    updated_at: DateTimeWithTimeZone,
}

impl From<SummaryRow> for PostSummary {
    fn from(row: SummaryRow) -> Self {
        Self {
            title: row.title,
            slug: row.slug,
            created_at: row.created_at.into(),
            updated_at: row.updated_at.into(),
        }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Post>, RepoError> {
        let conn = self.db.conn().await?;

        let result = PostEntity::find()
            .filter(post::Column::Slug.eq(slug))
            .one(conn)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn search_by_slug(&self, fragment: &str) -> Result<Vec<Post>, RepoError> {
        let conn = self.db.conn().await?;

        let result = PostEntity::find()
            .filter(Expr::col(post::Column::Slug).ilike(like_pattern(fragment)))
            .order_by_desc(post::Column::CreatedAt)
            .all(conn)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn list(&self, keyword: Option<&str>) -> Result<Vec<PostSummary>, RepoError> {
        let conn = self.db.conn().await?;

        let mut query = PostEntity::find()
            .select_only()
            .column(post::Column::Title)
            .column(post::Column::Slug)
            .column(post::Column::CreatedAt)
            .column(post::Column::UpdatedAt)
            .order_by_desc(post::Column::CreatedAt);

        if let Some(kw) = keyword {
            let pattern = like_pattern(kw);
            query = query.filter(
                Condition::any()
                    .add(Expr::col(post::Column::Title).ilike(pattern.clone()))
                    .add(Expr::col(post::Column::Content).ilike(pattern)),
            );
        }

        let rows = query
            .into_model::<SummaryRow>()
            .all(conn)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, new_post: Post) -> Result<Post, RepoError> {
        let conn = self.db.conn().await?;

        let model = post::ActiveModel::from(new_post)
            .insert(conn)
            .await
            .map_err(map_write_err)?;

        Ok(model.into())
    }

    async fn update(&self, slug: &str, changes: PostChanges) -> Result<Post, RepoError> {
        let conn = self.db.conn().await?;

        let existing = PostEntity::find()
            .filter(post::Column::Slug.eq(slug))
            .one(conn)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?
            .ok_or(RepoError::NotFound)?;

        let mut active = existing.into_active_model();
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(content) = changes.content {
            active.content = Set(content);
        }
        if let Some(new_slug) = changes.slug {
            active.slug = Set(new_slug);
        }
        if let Some(meta_title) = changes.meta_title {
            active.meta_title = Set(meta_title);
        }
        if let Some(meta_description) = changes.meta_description {
            active.meta_description = Set(meta_description);
        }
        active.updated_at = Set(changes.updated_at.into());

        let model = active.update(conn).await.map_err(map_write_err)?;
        Ok(model.into())
    }

    async fn delete_by_slug(&self, slug: &str) -> Result<bool, RepoError> {
        let conn = self.db.conn().await?;

        let result = PostEntity::delete_many()
            .filter(post::Column::Slug.eq(slug))
            .exec(conn)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }
}
