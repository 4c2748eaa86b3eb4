use crate::db::models::{DbItem, ItemCreate};
use crate::db::schema::SQLITE_INIT;
use crate::error::BazaarError;
use chrono::Utc;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};
use tracing::info;

#[derive(Debug)]
pub enum DbActorMessage {
    /// Insert an item row and return its id.
    CreateItem(ItemCreate, RpcReplyPort<Result<i64, BazaarError>>),

    /// Get an item by id; `None` when the id is unknown.
    GetItemById(i64, RpcReplyPort<Result<Option<DbItem>, BazaarError>>),

    /// List all items ordered by id.
    ListItems(RpcReplyPort<Result<Vec<DbItem>, BazaarError>>),
}

#[derive(Clone)]
pub struct DbActorHandle {
    actor: ActorRef<DbActorMessage>,
}

impl DbActorHandle {
    pub async fn create_item(&self, create: ItemCreate) -> Result<i64, BazaarError> {
        ractor::call!(self.actor, DbActorMessage::CreateItem, create)
            .map_err(|e| BazaarError::RactorError(format!("DbActor CreateItem RPC failed: {e}")))?
    }

    pub async fn get_item_by_id(&self, id: i64) -> Result<Option<DbItem>, BazaarError> {
        ractor::call!(self.actor, DbActorMessage::GetItemById, id)
            .map_err(|e| BazaarError::RactorError(format!("DbActor GetItemById RPC failed: {e}")))?
    }

    pub async fn list_items(&self) -> Result<Vec<DbItem>, BazaarError> {
        ractor::call!(self.actor, DbActorMessage::ListItems)
            .map_err(|e| BazaarError::RactorError(format!("DbActor ListItems RPC failed: {e}")))?
    }
}

struct DbActorState {
    pool: SqlitePool,
}

struct DbActor;

#[ractor::async_trait]
impl Actor for DbActor {
    type Msg = DbActorMessage;
    type State = DbActorState;
    type Arguments = String;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        database_url: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        let connect_opts = SqliteConnectOptions::from_str(database_url.as_str())
            .map_err(|e| ActorProcessingErr::from(format!("invalid database url: {e}")))?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .connect_with(connect_opts)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db connect failed: {e}")))?;

        apply_schema(&pool)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db schema init failed: {e}")))?;

        info!("DbActor initialized");
        Ok(DbActorState { pool })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            DbActorMessage::CreateItem(create, reply) => {
                let res = self.create_item(&state.pool, create).await;
                let _ = reply.send(res);
            }
            DbActorMessage::GetItemById(id, reply) => {
                let res = self.get_item_by_id(&state.pool, id).await;
                let _ = reply.send(res);
            }
            DbActorMessage::ListItems(reply) => {
                let res = self.list_items(&state.pool).await;
                let _ = reply.send(res);
            }
        }
        Ok(())
    }
}

impl DbActor {
    async fn create_item(&self, pool: &SqlitePool, create: ItemCreate) -> Result<i64, BazaarError> {
        let now = Utc::now();
        let id: i64 = sqlx::query_scalar(
            r#"
        INSERT INTO items (name, category, image_name, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id
        "#,
        )
        .bind(create.name)
        .bind(create.category)
        .bind(create.image_name)
        .bind(now)
        .bind(now)
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    async fn get_item_by_id(
        &self,
        pool: &SqlitePool,
        id: i64,
    ) -> Result<Option<DbItem>, BazaarError> {
        let row = sqlx::query_as::<_, DbItem>(
            r#"
        SELECT id, name, category, image_name, created_at, updated_at
        FROM items
        WHERE id = ?
        "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(row)
    }

    async fn list_items(&self, pool: &SqlitePool) -> Result<Vec<DbItem>, BazaarError> {
        let rows = sqlx::query_as::<_, DbItem>(
            r#"
        SELECT id, name, category, image_name, created_at, updated_at
        FROM items
        ORDER BY id
        "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}

/// Spawn the database actor and return a cloneable handle.
///
/// The actor is unnamed so multiple instances can coexist in one process
/// (each against its own database), which test binaries rely on.
pub async fn spawn(database_url: &str) -> DbActorHandle {
    let (actor, _jh) = ractor::Actor::spawn(None, DbActor, database_url.to_string())
        .await
        .expect("failed to spawn DbActor");

    DbActorHandle { actor }
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), BazaarError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}
