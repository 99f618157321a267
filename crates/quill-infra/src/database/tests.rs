#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use quill_core::domain::Post;
    use quill_core::ports::PostRepository;

    use crate::database::connection::DatabaseHandle;
    use crate::database::entity::post;
    use crate::database::postgres::PostgresPostRepository;

    fn model(title: &str, slug: &str) -> post::Model {
        let now = chrono::Utc::now();
        post::Model {
            id: uuid::Uuid::new_v4(),
            title: title.to_owned(),
            content: "<p>Content</p>".to_owned(),
            slug: slug.to_owned(),
            meta_title: title.to_owned(),
            meta_description: "Content".to_owned(),
            created_at: now.into(),
            updated_at: now.into(),
        }
    }

    #[tokio::test]
    async fn test_find_post_by_slug() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![model("Test Post", "test-post")]])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(DatabaseHandle::from_conn(db)));

        let result: Option<Post> = repo.find_by_slug("test-post").await.unwrap();

        assert!(result.is_some());
        let found = result.unwrap();
        assert_eq!(found.title, "Test Post");
        assert_eq!(found.slug, "test-post");
    }

    #[tokio::test]
    async fn test_find_post_by_slug_missing() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(DatabaseHandle::from_conn(db)));

        let result = repo.find_by_slug("missing").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_search_by_slug_maps_all_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                model("Newer Post", "rust-newer"),
                model("Older Post", "rust-older"),
            ]])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(DatabaseHandle::from_conn(db)));

        let result = repo.search_by_slug("rust").await.unwrap();
        let slugs: Vec<_> = result.iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["rust-newer", "rust-older"]);
    }

    #[tokio::test]
    async fn test_delete_by_slug_reports_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();

        let repo = PostgresPostRepository::new(Arc::new(DatabaseHandle::from_conn(db)));

        assert!(repo.delete_by_slug("some-post").await.unwrap());
        assert!(!repo.delete_by_slug("some-post").await.unwrap());
    }
}
