//! Contact storage. Contacts are append-only.

use sqlx::SqlitePool;
use tracing::debug;
use uuid::Uuid;

use crate::models::{Contact, NewContact};
use crate::Result;

/// List an account's contacts, newest first.
pub async fn list_contacts(pool: &SqlitePool, account_id: &str) -> Result<Vec<Contact>> {
    let contacts = sqlx::query_as::<_, Contact>(
        r#"
        SELECT id, account_id, name, role, phone, email, notes, created_at
        FROM contacts
        WHERE account_id = ?
        ORDER BY created_at DESC, rowid DESC
        "#,
    )
    .bind(account_id)
    .fetch_all(pool)
    .await?;

    Ok(contacts)
}

/// Append a contact to an account and return its generated ID.
///
/// The role is stored as given; callers coerce raw input with
/// [`ContactRole::from_input`](crate::ContactRole::from_input).
pub async fn add_contact(pool: &SqlitePool, account_id: &str, contact: &NewContact) -> Result<String> {
    let id = Uuid::new_v4().to_string();

    sqlx::query(
        r#"
        INSERT INTO contacts (id, account_id, name, role, phone, email, notes)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&id)
    .bind(account_id)
    .bind(&contact.name)
    .bind(contact.role.as_str())
    .bind(&contact.phone)
    .bind(&contact.email)
    .bind(&contact.notes)
    .execute(pool)
    .await?;

    debug!(account_id, contact_id = %id, role = %contact.role, "Added contact");
    Ok(id)
}
