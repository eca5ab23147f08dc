use sqlx::{postgres::PgPoolOptions, PgPool};

/// Backing table for the lead collection. `id` is the primary key, so point
/// lookup and delete-by-id need no secondary index.
const CREATE_LEADS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS leads (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT,
    company TEXT,
    source TEXT NOT NULL,
    notes TEXT,
    opt_in BOOLEAN NOT NULL,
    status TEXT NOT NULL,
    qualification TEXT NOT NULL,
    interest TEXT NOT NULL,
    assigned_to TEXT NOT NULL,
    city TEXT,
    passout_year INTEGER,
    heard_from TEXT,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
)
"#;

pub struct Database {
    pub pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        sqlx::query(CREATE_LEADS_TABLE).execute(&pool).await?;

        Ok(Self { pool })
    }
}
