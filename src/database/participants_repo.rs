use serde_json::Value;
use sqlx::types::Json;
use sqlx::SqlitePool;

// The collection keeps each participant as one JSON document. The email
// index is the identity constraint; nothing else is enforced.
const SQL_CREATE_COLLECTION: &str = r#"
CREATE TABLE IF NOT EXISTS studyjams (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  document TEXT NOT NULL CHECK (json_valid(document))
)
"#;

const SQL_CREATE_EMAIL_INDEX: &str = r#"
CREATE UNIQUE INDEX IF NOT EXISTS idx_studyjams_user_email
ON studyjams (json_extract(document, '$."User Email"'))
"#;

const SQL_LIST_DOCUMENTS: &str = r#"
SELECT document
FROM studyjams
ORDER BY id ASC
"#;

const SQL_FIND_DOCUMENT_BY_EMAIL: &str = r#"
SELECT document
FROM studyjams
WHERE json_extract(document, '$."User Email"') = ?1
LIMIT 1
"#;

const SQL_REPLACE_DOCUMENT: &str = r#"
INSERT OR REPLACE INTO studyjams (document)
VALUES (?1)
"#;

const SQL_COUNT_DOCUMENTS: &str = r#"
SELECT COUNT(*) FROM studyjams
"#;

pub async fn ensure_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    sqlx::query(SQL_CREATE_COLLECTION).execute(pool).await?;
    sqlx::query(SQL_CREATE_EMAIL_INDEX).execute(pool).await?;
    Ok(())
}

pub async fn list_documents(pool: &SqlitePool) -> sqlx::Result<Vec<Value>> {
    let rows = sqlx::query_scalar::<_, Json<Value>>(SQL_LIST_DOCUMENTS)
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().map(|Json(doc)| doc).collect())
}

pub async fn find_document_by_email(pool: &SqlitePool, email: &str) -> sqlx::Result<Option<Value>> {
    let row = sqlx::query_scalar::<_, Json<Value>>(SQL_FIND_DOCUMENT_BY_EMAIL)
        .bind(email)
        .fetch_optional(pool)
        .await?;

    Ok(row.map(|Json(doc)| doc))
}

/// Inserts a document, replacing any existing one with the same email.
/// Only the import tool writes; the HTTP surface never does.
pub async fn replace_document(pool: &SqlitePool, document: &Value) -> sqlx::Result<()> {
    sqlx::query(SQL_REPLACE_DOCUMENT)
        .bind(Json(document))
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn count_documents(pool: &SqlitePool) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>(SQL_COUNT_DOCUMENTS)
        .fetch_one(pool)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connect_in_memory;
    use serde_json::json;

    #[tokio::test]
    async fn replace_keeps_one_document_per_email() {
        let pool = connect_in_memory().await.unwrap();

        let doc = json!({ "User Email": "a@x.io", "# of Skill Badges Completed": 1 });
        replace_document(&pool, &doc).await.unwrap();
        let doc = json!({ "User Email": "a@x.io", "# of Skill Badges Completed": 4 });
        replace_document(&pool, &doc).await.unwrap();

        assert_eq!(count_documents(&pool).await.unwrap(), 1);
        let doc = find_document_by_email(&pool, "a@x.io").await.unwrap().unwrap();
        assert_eq!(doc["# of Skill Badges Completed"], 4);
    }

    #[tokio::test]
    async fn lookup_is_exact() {
        let pool = connect_in_memory().await.unwrap();
        replace_document(&pool, &json!({ "User Email": "a@x.io" }))
            .await
            .unwrap();

        assert!(find_document_by_email(&pool, "A@X.IO").await.unwrap().is_none());
        assert!(find_document_by_email(&pool, "a@x").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_preserves_unknown_keys_and_order() {
        let pool = connect_in_memory().await.unwrap();
        replace_document(&pool, &json!({ "_id": "1", "User Email": "b@x.io" }))
            .await
            .unwrap();
        replace_document(&pool, &json!({ "_id": "2", "User Email": "a@x.io" }))
            .await
            .unwrap();

        let docs = list_documents(&pool).await.unwrap();
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0]["_id"], "1");
        assert_eq!(docs[1]["User Email"], "a@x.io");
    }
}
