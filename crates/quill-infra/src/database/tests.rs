#[cfg(test)]
mod tests {
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    use quill_core::domain::PostPatch;
    use quill_core::error::RepoError;
    use quill_core::ports::PostRepository;

    use crate::database::entity::post;
    use crate::database::postgres_repo::PostgresPostRepository;

    fn row(id: i64, title: &str, tags: Option<&str>) -> post::Model {
        post::Model {
            id,
            title: title.to_owned(),
            content: "Content".to_owned(),
            category: Some("tech".to_owned()),
            tags: tags.map(str::to_owned),
            created_at: "2026-01-02 03:04:05".to_owned(),
            updated_at: "2026-01-02 03:04:05".to_owned(),
        }
    }

    #[tokio::test]
    async fn find_by_id_decodes_stored_tags() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row(7, "Test Post", Some(r#"["rust","web"]"#))]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let post = repo.find_by_id(7).await.unwrap().unwrap();
        assert_eq!(post.id, 7);
        assert_eq!(post.title, "Test Post");
        assert_eq!(
            post.tags,
            Some(vec!["rust".to_string(), "web".to_string()])
        );
    }

    #[tokio::test]
    async fn find_by_id_miss_is_none() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<post::Model>::new()])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        assert!(repo.find_by_id(99).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_by_id_with_corrupt_tags_is_a_codec_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row(7, "Test Post", Some("not json"))]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let result = repo.find_by_id(7).await;
        assert!(matches!(result, Err(RepoError::Codec(_))));
    }

    #[tokio::test]
    async fn update_with_zero_affected_rows_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let patch = PostPatch {
            title: Some("new".to_string()),
            ..Default::default()
        };
        let result = repo.update(42, patch).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn update_reads_the_row_back() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .append_query_results(vec![vec![row(42, "patched title", None)]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let patch = PostPatch {
            title: Some("patched title".to_string()),
            ..Default::default()
        };
        let post = repo.update(42, patch).await.unwrap();
        assert_eq!(post.id, 42);
        assert_eq!(post.title, "patched title");
        assert_eq!(post.tags, None);
    }

    #[tokio::test]
    async fn delete_with_zero_affected_rows_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        assert!(matches!(repo.delete(99).await, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn delete_with_one_affected_row_succeeds() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        assert!(repo.delete(7).await.is_ok());
    }

    #[tokio::test]
    async fn list_shapes_every_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                row(1, "first", None),
                row(2, "second", Some("[]")),
            ]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let all = repo.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].tags, None);
        assert_eq!(all[1].tags, Some(vec![]));
    }

    #[tokio::test]
    async fn search_returns_the_matched_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![row(3, "Alpha Release", None)]])
            .into_connection();

        let repo = PostgresPostRepository::new(db);

        let hits = repo.search("Alpha").await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Alpha Release");
    }
}
