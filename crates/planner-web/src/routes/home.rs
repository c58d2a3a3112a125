//! Account directory routes.

use askama::Template;
use axum::extract::State;
use axum::Json;
use planner_db::{account, week, Account};

use crate::error::Result;
use crate::routes::path_segment;
use crate::state::AppState;

/// Home page template: pick an account and a week.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub accounts: Vec<AccountLink>,
    pub default_week_start: String,
}

/// An account with its id encoded for use in links.
pub struct AccountLink {
    pub path_id: String,
    pub name: String,
}

impl From<Account> for AccountLink {
    fn from(account: Account) -> Self {
        Self {
            path_id: path_segment(&account.id),
            name: account.name,
        }
    }
}

/// Render the account picker.
pub async fn index_page(State(state): State<AppState>) -> Result<IndexTemplate> {
    let accounts = account::list_accounts(state.db.pool()).await?;
    Ok(IndexTemplate {
        accounts: accounts.into_iter().map(AccountLink::from).collect(),
        default_week_start: week::format(week::this_week()),
    })
}

/// List accounts as JSON.
pub async fn accounts_api(State(state): State<AppState>) -> Result<Json<Vec<Account>>> {
    let accounts = account::list_accounts(state.db.pool()).await?;
    Ok(Json(accounts))
}
