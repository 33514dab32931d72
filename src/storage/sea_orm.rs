use sea_orm::{
    ActiveModelTrait, ConnectOptions, Database, DatabaseConnection, EntityTrait, PaginatorTrait,
};
use tracing::{info, warn};

use crate::errors::{LeadgateError, Result};
use crate::storage::{Inquiry, NewInquiry, NewVisit, Visit};

use migration::{Migrator, MigratorTrait, entities::inquiry, entities::visit};

/// sea-orm backed record store. Supports SQLite, MySQL and PostgreSQL from a
/// single database URL.
#[derive(Clone)]
pub struct SeaOrmStorage {
    db: DatabaseConnection,
    backend_name: String,
}

impl SeaOrmStorage {
    pub async fn new(database_url: &str) -> Result<Self> {
        if database_url.is_empty() {
            return Err(LeadgateError::database_config("database.url is not set"));
        }

        let backend_name = Self::backend_from_url(database_url)?;

        let db = if backend_name == "sqlite" {
            Self::connect_sqlite(database_url).await?
        } else {
            Self::connect_generic(database_url, &backend_name).await?
        };

        let storage = SeaOrmStorage { db, backend_name };

        storage.run_migrations().await?;

        info!(
            "{} record store initialized",
            storage.backend_name.to_uppercase()
        );
        Ok(storage)
    }

    fn backend_from_url(database_url: &str) -> Result<String> {
        // `sqlite::memory:` carries no `//`, so split on the first colon
        let scheme = database_url.split(':').next().unwrap_or_default();
        match scheme {
            "sqlite" => Ok("sqlite".to_string()),
            "mysql" => Ok("mysql".to_string()),
            "postgres" | "postgresql" => Ok("postgres".to_string()),
            other => Err(LeadgateError::database_config(format!(
                "Unsupported database scheme: '{}'",
                other
            ))),
        }
    }

    /// Connect to SQLite with auto-create and WAL
    async fn connect_sqlite(database_url: &str) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::SqlitePool;
        use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqliteSynchronous};
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(database_url)
            .map_err(|e| {
                LeadgateError::database_config(format!("SQLite URL parse failed: {}", e))
            })?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(std::time::Duration::from_secs(5));

        let pool = SqlitePool::connect_with(opt).await.map_err(|e| {
            LeadgateError::database_connection(format!("Cannot connect to SQLite: {}", e))
        })?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// Connect to MySQL/PostgreSQL with pooling
    async fn connect_generic(database_url: &str, backend_name: &str) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(database_url.to_owned());
        opt.max_connections(20)
            .min_connections(1)
            .connect_timeout(std::time::Duration::from_secs(8))
            .acquire_timeout(std::time::Duration::from_secs(8))
            .sqlx_logging(false);

        Database::connect(opt).await.map_err(|e| {
            LeadgateError::database_connection(format!(
                "Cannot connect to {} database: {}",
                backend_name.to_uppercase(),
                e
            ))
        })
    }

    async fn run_migrations(&self) -> Result<()> {
        Migrator::up(&self.db, None)
            .await
            .map_err(|e| LeadgateError::database_operation(format!("Migration failed: {}", e)))?;

        info!("Database migrations completed");
        Ok(())
    }

    pub fn backend_name(&self) -> &str {
        &self.backend_name
    }

    /// Insert one inquiry row, returning it with the assigned id and timestamp
    pub async fn create_inquiry(&self, record: NewInquiry) -> Result<Inquiry> {
        use sea_orm::ActiveValue::Set;

        let active = inquiry::ActiveModel {
            name: Set(record.name),
            phone: Set(record.phone),
            postcode: Set(record.postcode),
            email: Set(record.email),
            selected_model: Set(record.selected_model.map(|m| m.to_string())),
            ref_code: Set(record.ref_code),
            epc: Set(record.epc),
            source: Set(record.source),
            notes: Set(record.notes),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let model = active.insert(&self.db).await.map_err(|e| {
            warn!("Inquiry insert failed: {}", e);
            LeadgateError::database_operation(format!("Inquiry insert failed: {}", e))
        })?;

        Ok(Self::inquiry_from_model(model))
    }

    /// Insert one visit row, returning it with the assigned id and timestamp
    pub async fn create_visit(&self, record: NewVisit) -> Result<Visit> {
        use sea_orm::ActiveValue::Set;

        let active = visit::ActiveModel {
            ref_code: Set(record.ref_code),
            epc: Set(record.epc),
            page: Set(record.page),
            user_agent: Set(record.user_agent),
            ip: Set(record.ip),
            created_at: Set(chrono::Utc::now()),
            ..Default::default()
        };

        let model = active.insert(&self.db).await.map_err(|e| {
            warn!("Visit insert failed: {}", e);
            LeadgateError::database_operation(format!("Visit insert failed: {}", e))
        })?;

        Ok(Self::visit_from_model(model))
    }

    /// Row count, used by the health endpoint and tests
    pub async fn count_inquiries(&self) -> Result<u64> {
        Ok(inquiry::Entity::find().count(&self.db).await?)
    }

    pub async fn count_visits(&self) -> Result<u64> {
        Ok(visit::Entity::find().count(&self.db).await?)
    }

    fn inquiry_from_model(model: inquiry::Model) -> Inquiry {
        Inquiry {
            id: model.id,
            name: model.name,
            phone: model.phone,
            postcode: model.postcode,
            email: model.email,
            selected_model: model.selected_model,
            notes: model.notes,
            ref_code: model.ref_code,
            epc: model.epc,
            source: model.source,
            created_at: model.created_at,
        }
    }

    fn visit_from_model(model: visit::Model) -> Visit {
        Visit {
            id: model.id,
            ref_code: model.ref_code,
            epc: model.epc,
            page: model.page,
            user_agent: model.user_agent,
            ip: model.ip,
            created_at: model.created_at,
        }
    }
}
