use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::errors::{AppError, ResultExt};
use crate::models::{Interest, Lead, LeadSource, LeadStatus, NewLead, Qualification};

/// Database storage service for the lead collection.
pub struct LeadStorage {
    pool: PgPool,
}

/// Raw `leads` row. Enumeration columns come back as TEXT and are decoded
/// through the same `from_wire` tables the validation engine uses.
#[derive(Debug, FromRow)]
struct LeadRow {
    id: Uuid,
    name: String,
    email: String,
    phone: Option<String>,
    company: Option<String>,
    source: String,
    notes: Option<String>,
    opt_in: bool,
    status: String,
    qualification: String,
    interest: String,
    assigned_to: String,
    city: Option<String>,
    passout_year: Option<i32>,
    heard_from: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<LeadRow> for Lead {
    type Error = AppError;

    fn try_from(row: LeadRow) -> Result<Self, AppError> {
        // Every stored row passed validation on the way in, so an unknown
        // enum value means the table was modified out of band.
        let source = LeadSource::from_wire(&row.source).ok_or_else(|| {
            AppError::InternalError(format!("lead {} has unknown source '{}'", row.id, row.source))
        })?;
        let status = LeadStatus::from_wire(&row.status).ok_or_else(|| {
            AppError::InternalError(format!("lead {} has unknown status '{}'", row.id, row.status))
        })?;
        let qualification = Qualification::from_wire(&row.qualification).ok_or_else(|| {
            AppError::InternalError(format!(
                "lead {} has unknown qualification '{}'",
                row.id, row.qualification
            ))
        })?;
        let interest = Interest::from_wire(&row.interest).ok_or_else(|| {
            AppError::InternalError(format!(
                "lead {} has unknown interest '{}'",
                row.id, row.interest
            ))
        })?;

        Ok(Lead {
            id: row.id,
            name: row.name,
            email: row.email,
            phone: row.phone,
            company: row.company,
            source,
            notes: row.notes,
            opt_in: row.opt_in,
            status,
            qualification,
            interest,
            assigned_to: row.assigned_to,
            city: row.city,
            passout_year: row.passout_year,
            heard_from: row.heard_from,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

impl LeadStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Persist a validated lead, assigning a fresh id and timestamps.
    ///
    /// The UUID primary key makes id collisions impossible across concurrent
    /// inserts; the returned record is the stored one, generated fields
    /// included.
    pub async fn insert(&self, new_lead: &NewLead) -> Result<Lead, AppError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO leads (
                id, name, email, phone, company, source, notes, opt_in,
                status, qualification, interest, assigned_to, city,
                passout_year, heard_from, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            "#,
        )
        .bind(id)
        .bind(&new_lead.name)
        .bind(&new_lead.email)
        .bind(&new_lead.phone)
        .bind(&new_lead.company)
        .bind(new_lead.source.as_str())
        .bind(&new_lead.notes)
        .bind(new_lead.opt_in)
        .bind(new_lead.status.as_str())
        .bind(new_lead.qualification.as_str())
        .bind(new_lead.interest.as_str())
        .bind(&new_lead.assigned_to)
        .bind(&new_lead.city)
        .bind(new_lead.passout_year)
        .bind(&new_lead.heard_from)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .context("Failed to insert lead")?;

        tracing::info!("Stored lead {} ({})", id, new_lead.email);

        Ok(Lead {
            id,
            name: new_lead.name.clone(),
            email: new_lead.email.clone(),
            phone: new_lead.phone.clone(),
            company: new_lead.company.clone(),
            source: new_lead.source,
            notes: new_lead.notes.clone(),
            opt_in: new_lead.opt_in,
            status: new_lead.status,
            qualification: new_lead.qualification,
            interest: new_lead.interest,
            assigned_to: new_lead.assigned_to.clone(),
            city: new_lead.city.clone(),
            passout_year: new_lead.passout_year,
            heard_from: new_lead.heard_from.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    /// All stored leads, newest first. The id tiebreak keeps the order
    /// stable for rows sharing a timestamp.
    pub async fn list_all(&self) -> Result<Vec<Lead>, AppError> {
        let rows = sqlx::query_as::<_, LeadRow>(
            "SELECT * FROM leads ORDER BY created_at DESC, id",
        )
        .fetch_all(&self.pool)
        .await
        .context("Failed to list leads")?;

        rows.into_iter().map(Lead::try_from).collect()
    }

    /// Point lookup by id.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Lead>, AppError> {
        let row = sqlx::query_as::<_, LeadRow>("SELECT * FROM leads WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .context("Failed to fetch lead")?;

        row.map(Lead::try_from).transpose()
    }

    /// Remove a lead; `false` means the id was not present, which is not a
    /// storage failure.
    pub async fn delete_by_id(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM leads WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete lead")?;

        Ok(result.rows_affected() > 0)
    }
}
