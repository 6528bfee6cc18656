//! Handler for the contact form.
//!
//! A submission is stored, then announced by email. Both steps are
//! best-effort: neither failure turns into an error response. The caller
//! always gets a 200 with a [`ContactReceipt`] describing what happened.

use axum::extract::State;
use axum::Json;
use folio_core::contact::{ContactMessage, ContactNotification, ContactReceipt, PersistOutcome};
use folio_db::DocumentStore;

use crate::extract::ValidatedJson;
use crate::state::AppState;

/// POST /api/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    ValidatedJson(message): ValidatedJson<ContactMessage>,
) -> Json<ContactReceipt> {
    let persisted = persist(&state, &message).await;

    let notification = ContactNotification::compose(&message);
    let delivery = folio_mail::deliver(state.mailer.as_deref(), &notification).await;

    let receipt = ContactReceipt::from_outcomes(&persisted, &delivery);
    tracing::info!(
        status = ?receipt.status,
        saved = receipt.id.is_some(),
        "Contact submission handled"
    );

    Json(receipt)
}

async fn persist(state: &AppState, message: &ContactMessage) -> PersistOutcome {
    let Some(pool) = state.pool.as_ref() else {
        tracing::warn!("Contact message not stored: database not configured");
        return PersistOutcome::Failed("Database not configured".to_string());
    };

    match DocumentStore::insert_one(pool, message).await {
        Ok(id) => PersistOutcome::Saved(id.to_string()),
        Err(err) => {
            tracing::warn!(error = %err, "Contact message not stored");
            PersistOutcome::Failed(err.to_string())
        }
    }
}
