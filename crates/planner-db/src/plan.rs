//! Weekly plan storage, keyed by account and week start.

use chrono::NaiveDate;
use sqlx::SqlitePool;
use tracing::debug;

use crate::models::PlanFields;
use crate::Result;

/// Get the plan for an account and week.
///
/// A week with no saved plan yields [`PlanFields::default`].
pub async fn get_plan(
    pool: &SqlitePool,
    account_id: &str,
    week_start: NaiveDate,
) -> Result<PlanFields> {
    let record = sqlx::query_as::<_, PlanFields>(
        r#"
        SELECT objectives, actions, objections, recap
        FROM weekly_plans
        WHERE account_id = ? AND week_start = ?
        LIMIT 1
        "#,
    )
    .bind(account_id)
    .bind(week_start)
    .fetch_optional(pool)
    .await?;

    Ok(record.unwrap_or_default())
}

/// Create or replace the plan for an account and week.
///
/// All four fields are overwritten, including with `None`.
pub async fn upsert_plan(
    pool: &SqlitePool,
    account_id: &str,
    week_start: NaiveDate,
    fields: &PlanFields,
) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO weekly_plans (account_id, week_start, objectives, actions, objections, recap)
        VALUES (?, ?, ?, ?, ?, ?)
        ON CONFLICT(account_id, week_start) DO UPDATE SET
            objectives = excluded.objectives,
            actions = excluded.actions,
            objections = excluded.objections,
            recap = excluded.recap,
            updated_at = datetime('now')
        "#,
    )
    .bind(account_id)
    .bind(week_start)
    .bind(&fields.objectives)
    .bind(&fields.actions)
    .bind(&fields.objections)
    .bind(&fields.recap)
    .execute(pool)
    .await?;

    debug!(account_id, %week_start, "Saved weekly plan");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seed_account, test_db};
    use crate::week;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fields(objectives: &str, actions: &str, objections: &str, recap: &str) -> PlanFields {
        PlanFields {
            objectives: Some(objectives.to_string()),
            actions: Some(actions.to_string()),
            objections: Some(objections.to_string()),
            recap: Some(recap.to_string()),
        }
    }

    async fn row_count(pool: &SqlitePool, account_id: &str, week_start: NaiveDate) -> i64 {
        sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM weekly_plans WHERE account_id = ? AND week_start = ?",
        )
        .bind(account_id)
        .bind(week_start)
        .fetch_one(pool)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_get_plan_missing_is_empty() {
        let db = test_db().await;
        let plan = get_plan(db.pool(), "A1", date(2024, 1, 1)).await.unwrap();
        assert_eq!(plan, PlanFields::default());
    }

    #[tokio::test]
    async fn test_save_and_load_scenario() {
        let db = test_db().await;
        seed_account(db.pool(), "A1", "Acme Grocers").await;
        let week_start = week::normalize(Some("2024-01-01"), date(2024, 6, 1));

        let plan = get_plan(db.pool(), "A1", week_start).await.unwrap();
        assert_eq!(plan, PlanFields::default());

        let saved = fields("grow pipeline", "call weekly", "price objection", "");
        upsert_plan(db.pool(), "A1", week_start, &saved).await.unwrap();

        let plan = get_plan(db.pool(), "A1", week_start).await.unwrap();
        assert_eq!(plan, saved);
    }

    #[tokio::test]
    async fn test_upsert_is_idempotent() {
        let db = test_db().await;
        let week_start = date(2024, 1, 8);
        let saved = fields("a", "b", "c", "d");

        upsert_plan(db.pool(), "A1", week_start, &saved).await.unwrap();
        upsert_plan(db.pool(), "A1", week_start, &saved).await.unwrap();

        assert_eq!(row_count(db.pool(), "A1", week_start).await, 1);
        assert_eq!(get_plan(db.pool(), "A1", week_start).await.unwrap(), saved);
    }

    #[tokio::test]
    async fn test_upsert_replaces_all_fields() {
        let db = test_db().await;
        let week_start = date(2024, 1, 8);

        upsert_plan(db.pool(), "A1", week_start, &fields("a", "b", "c", "d"))
            .await
            .unwrap();

        // No merge: absent fields clear what was there.
        let replacement = PlanFields {
            objectives: Some("new objective".to_string()),
            ..Default::default()
        };
        upsert_plan(db.pool(), "A1", week_start, &replacement)
            .await
            .unwrap();

        assert_eq!(row_count(db.pool(), "A1", week_start).await, 1);
        assert_eq!(
            get_plan(db.pool(), "A1", week_start).await.unwrap(),
            replacement
        );
    }

    #[tokio::test]
    async fn test_weeks_and_accounts_are_isolated() {
        let db = test_db().await;
        let week_one = date(2024, 1, 1);
        let week_two = date(2024, 1, 8);

        upsert_plan(db.pool(), "A1", week_one, &fields("a", "b", "c", "d"))
            .await
            .unwrap();

        assert_eq!(
            get_plan(db.pool(), "A1", week_two).await.unwrap(),
            PlanFields::default()
        );
        assert_eq!(
            get_plan(db.pool(), "A2", week_one).await.unwrap(),
            PlanFields::default()
        );
    }

    #[tokio::test]
    async fn test_upsert_refreshes_updated_at() {
        let db = test_db().await;
        let week_start = date(2024, 1, 1);
        upsert_plan(db.pool(), "A1", week_start, &fields("a", "b", "c", "d"))
            .await
            .unwrap();

        sqlx::query("UPDATE weekly_plans SET updated_at = '2000-01-01 00:00:00'")
            .execute(db.pool())
            .await
            .unwrap();

        upsert_plan(db.pool(), "A1", week_start, &fields("e", "f", "g", "h"))
            .await
            .unwrap();

        let updated_at = sqlx::query_scalar::<_, String>(
            "SELECT updated_at FROM weekly_plans WHERE account_id = 'A1'",
        )
        .fetch_one(db.pool())
        .await
        .unwrap();
        assert_ne!(updated_at, "2000-01-01 00:00:00");
    }
}
