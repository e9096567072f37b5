use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::future::Future;
use std::pin::Pin;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;

/// 경매 앱 스키마
pub const AUCTIONS_SCHEMA: &str = include_str!("../../sql/auctions.sql");

/// 네트워크 앱 스키마
pub const NETWORK_SCHEMA: &str = include_str!("../../sql/network.sql");

pub struct DatabaseManager {
    pub pool: Arc<SqlitePool>,
}

impl DatabaseManager {
    /// 데이터베이스 매니저 생성
    ///
    /// `sqlite::memory:` 는 커넥션마다 별도 DB 이므로 `max_connections` 를 1로 둔다.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        info!("{:<12} --> 데이터베이스 연결: {}", "Database", database_url);
        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// 트랜잭션 실행
    pub async fn transaction<F, R, E>(&self, f: F) -> Result<R, E>
    where
        F: for<'c> FnOnce(
            &'c mut sqlx::Transaction<'_, sqlx::Sqlite>,
        ) -> Pin<Box<dyn Future<Output = Result<R, E>> + Send + 'c>>,
        E: From<sqlx::Error>,
    {
        let mut tx = self.pool.begin().await?;
        let result = f(&mut tx).await;
        match result {
            Ok(r) => {
                tx.commit().await?;
                Ok(r)
            }
            Err(e) => {
                tx.rollback().await?;
                Err(e)
            }
        }
    }

    /// 데이터베이스 초기화
    pub async fn initialize_database(&self, schema: &str) -> Result<(), sqlx::Error> {
        self.execute_multi_query(schema).await
    }

    /// 여러 쿼리 실행
    async fn execute_multi_query(&self, sql: &str) -> Result<(), sqlx::Error> {
        for query in sql.split(';') {
            let query = query.trim();
            if !query.is_empty() {
                sqlx::query(query).execute(&*self.pool).await?;
            }
        }
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn memory_db(schema: &str) -> DatabaseManager {
        let db = DatabaseManager::connect("sqlite::memory:", 1).await.unwrap();
        db.initialize_database(schema).await.unwrap();
        db
    }

    #[tokio::test]
    async fn schemas_apply_twice() {
        for schema in [AUCTIONS_SCHEMA, NETWORK_SCHEMA] {
            let db = memory_db(schema).await;
            db.initialize_database(schema).await.unwrap();
            let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
                .fetch_one(db.pool())
                .await
                .unwrap();
            assert_eq!(count, 0);
        }
    }

    #[tokio::test]
    async fn transaction_rolls_back_on_error() {
        let db = memory_db(NETWORK_SCHEMA).await;
        let result: Result<(), sqlx::Error> = db
            .transaction(|tx| {
                Box::pin(async move {
                    sqlx::query(
                        "INSERT INTO users (username, email, password_hash, date_joined) \
                         VALUES ('a', 'a@x', 'h', '2024-01-01T00:00:00Z')",
                    )
                    .execute(&mut **tx)
                    .await?;
                    Err(sqlx::Error::RowNotFound)
                })
            })
            .await;
        assert!(result.is_err());

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
