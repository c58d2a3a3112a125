//! Per-account planning routes: the weekly plan form and contact list.

use askama::Template;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Redirect, Response};
use axum::Form;
use chrono::NaiveDate;
use planner_db::{account, contact, plan, week, Account, Contact, ContactRole, NewContact, PlanFields};
use serde::Deserialize;
use tracing::info;

use crate::error::Result;
use crate::routes::path_segment;
use crate::state::AppState;

/// Account page template.
#[derive(Template)]
#[template(path = "account.html")]
pub struct AccountTemplate {
    pub account: Account,
    /// Account id encoded for links and form actions.
    pub path_id: String,
    pub week_start: String,
    /// Omitted at the edges of the representable calendar.
    pub previous_week: Option<String>,
    pub next_week: Option<String>,
    pub plan: PlanView,
    pub contacts: Vec<ContactView>,
    pub roles: Vec<&'static str>,
}

/// Plan fields flattened for form inputs.
pub struct PlanView {
    pub objectives: String,
    pub actions: String,
    pub objections: String,
    pub recap: String,
}

impl From<PlanFields> for PlanView {
    fn from(fields: PlanFields) -> Self {
        Self {
            objectives: fields.objectives.unwrap_or_default(),
            actions: fields.actions.unwrap_or_default(),
            objections: fields.objections.unwrap_or_default(),
            recap: fields.recap.unwrap_or_default(),
        }
    }
}

/// A contact row as displayed.
pub struct ContactView {
    pub name: String,
    pub role: String,
    pub phone: String,
    pub email: String,
    pub notes: String,
}

impl From<Contact> for ContactView {
    fn from(contact: Contact) -> Self {
        Self {
            name: contact.name,
            role: contact.role,
            phone: contact.phone.unwrap_or_default(),
            email: contact.email.unwrap_or_default(),
            notes: contact.notes.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct WeekQuery {
    pub week_start: Option<String>,
}

/// Weekly plan form submission.
#[derive(Debug, Deserialize)]
pub struct PlanForm {
    pub week_start: Option<String>,
    pub objectives: Option<String>,
    pub actions: Option<String>,
    pub objections: Option<String>,
    pub recap: Option<String>,
}

/// New contact form submission.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub week_start: Option<String>,
    pub name: String,
    pub role: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub notes: Option<String>,
}

/// Render the plan and contacts for one account and week.
///
/// Unknown accounts redirect to the account picker.
pub async fn account_page(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
    Query(query): Query<WeekQuery>,
) -> Result<Response> {
    let week_start = week::normalize(query.week_start.as_deref(), week::today());
    let pool = state.db.pool();

    let Some(account) = account::get_account(pool, &account_id).await? else {
        return Ok(Redirect::to("/ui").into_response());
    };

    let plan = plan::get_plan(pool, &account_id, week_start).await?;
    let contacts = contact::list_contacts(pool, &account_id).await?;

    let (previous_week, next_week) = week::adjacent(week_start);

    Ok(AccountTemplate {
        path_id: path_segment(&account.id),
        account,
        week_start: week::format(week_start),
        previous_week: previous_week.map(week::format),
        next_week: next_week.map(week::format),
        plan: plan.into(),
        contacts: contacts.into_iter().map(ContactView::from).collect(),
        roles: ContactRole::ALL.iter().map(ContactRole::as_str).collect(),
    }
    .into_response())
}

/// Save the weekly plan, replacing whatever was stored for that week.
pub async fn save_plan(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
    Form(form): Form<PlanForm>,
) -> Result<Redirect> {
    let week_start = week::normalize(form.week_start.as_deref(), week::today());
    let fields = PlanFields {
        objectives: form.objectives,
        actions: form.actions,
        objections: form.objections,
        recap: form.recap,
    };

    plan::upsert_plan(state.db.pool(), &account_id, week_start, &fields).await?;
    info!(account_id = %account_id, week_start = %week_start, "Weekly plan saved");

    Ok(account_redirect(&account_id, week_start))
}

/// Append a contact to the account.
pub async fn add_contact(
    State(state): State<AppState>,
    Path(account_id): Path<String>,
    Form(form): Form<ContactForm>,
) -> Result<Redirect> {
    let new_contact = NewContact {
        name: form.name,
        role: ContactRole::from_input(form.role.as_deref().unwrap_or_default()),
        phone: form.phone,
        email: form.email,
        notes: form.notes,
    };

    contact::add_contact(state.db.pool(), &account_id, &new_contact).await?;
    info!(account_id = %account_id, role = %new_contact.role, "Contact added");

    let week_start = week::normalize(form.week_start.as_deref(), week::today());
    Ok(account_redirect(&account_id, week_start))
}

fn account_redirect(account_id: &str, week_start: NaiveDate) -> Redirect {
    Redirect::to(&format!(
        "/ui/account/{}?week_start={}",
        path_segment(account_id),
        week::format(week_start)
    ))
}
