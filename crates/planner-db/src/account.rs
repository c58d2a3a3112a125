//! Read-only access to the account directory.

use sqlx::SqlitePool;

use crate::models::Account;
use crate::Result;

/// List all accounts, ordered by name.
pub async fn list_accounts(pool: &SqlitePool) -> Result<Vec<Account>> {
    let accounts = sqlx::query_as::<_, Account>(
        r#"
        SELECT id, name
        FROM accounts
        ORDER BY name ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(accounts)
}

/// Get an account by ID. Returns `None` if the directory has no such account.
pub async fn get_account(pool: &SqlitePool, id: &str) -> Result<Option<Account>> {
    let account = sqlx::query_as::<_, Account>(
        r#"
        SELECT id, name
        FROM accounts
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(account)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{seed_account, test_db};

    #[tokio::test]
    async fn test_list_accounts_sorted_by_name() {
        let db = test_db().await;
        seed_account(db.pool(), "a2", "Zephyr Foods").await;
        seed_account(db.pool(), "a1", "Acme Grocers").await;

        let accounts = list_accounts(db.pool()).await.unwrap();
        let names: Vec<&str> = accounts.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Acme Grocers", "Zephyr Foods"]);
    }

    #[tokio::test]
    async fn test_get_account() {
        let db = test_db().await;
        seed_account(db.pool(), "A1", "Acme Grocers").await;

        let account = get_account(db.pool(), "A1").await.unwrap().unwrap();
        assert_eq!(account.name, "Acme Grocers");

        assert!(get_account(db.pool(), "missing").await.unwrap().is_none());
    }
}
