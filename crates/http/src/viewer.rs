//! Server-rendered viewer page at `/`.
//!
//! Shows the search form, any search result and both saved lists. Query
//! parameters `title`, `list`, `type`, `year` and `edit` drive search, filters
//! and which card is open for editing. The card forms post to `/view/...`,
//! which run the same card actions as a client would and redirect back on
//! success. A failed action re-renders the page with the card's notice.

use std::sync::Arc;

use axum::Form;
use axum::extract::{Path, Query, State};
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Redirect, Response};
use media_tracker_core::{ListKind, TITLE_REQUIRED};
use media_tracker_ui::{App, CardOutcome, render};

use crate::AppState;
use crate::api_error::ApiError;
use crate::handlers::collections::{parse_id, parse_kind};
use crate::query_types::{AddResultForm, EditEntryForm, ViewerQuery};
use crate::service_api::ServiceMediaApi;

async fn loaded(state: Arc<AppState>) -> (ServiceMediaApi, App) {
    let api = ServiceMediaApi::new(state);
    let mut app = App::new();
    if let Err(e) = app.load(&api).await {
        tracing::warn!(error = %e, "viewer could not load saved lists");
    }
    (api, app)
}

fn html_page(app: &App) -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, "text/html; charset=utf-8")], Html(render::page(app)))
        .into_response()
}

fn after(outcome: CardOutcome, kind: ListKind, app: &App) -> Response {
    match outcome {
        CardOutcome::Refresh => Redirect::to(&format!("/?list={kind}")).into_response(),
        CardOutcome::Unchanged => html_page(app),
    }
}

fn card_not_found(kind: ListKind) -> ApiError {
    ApiError::NotFound(format!("{} not found", kind.rules().label))
}

pub async fn serve_viewer(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ViewerQuery>,
) -> Response {
    let (api, mut app) = loaded(state).await;

    let kind = query
        .list
        .as_deref()
        .and_then(|l| l.parse::<ListKind>().ok())
        .unwrap_or(ListKind::Favorites);
    let list = app.saved_mut(kind);
    list.filters.set_media_type(query.media_type.as_deref().unwrap_or_default());
    list.filters.set_year(query.year.as_deref().unwrap_or_default());
    if let Some(card) = query
        .edit
        .as_deref()
        .and_then(|id| id.parse::<i32>().ok())
        .and_then(|id| list.card_mut(id))
    {
        card.begin_edit();
    }

    if let Some(title) = query.title.as_deref() {
        app.search.set_query(title);
        app.search(&api).await;
    }

    html_page(&app)
}

/// Save a search hit posted from a result card to `kind`.
pub async fn add_result(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
    Form(form): Form<AddResultForm>,
) -> Result<Response, ApiError> {
    let kind = parse_kind(&kind)?;
    let record = form.into_record();
    if record.title.is_empty() {
        return Err(ApiError::BadRequest(TITLE_REQUIRED.to_owned()));
    }
    let (api, mut app) = loaded(state).await;
    app.show_results(vec![record]);
    let outcome = app.save_result(&api, 0, kind).await;
    Ok(after(outcome, kind, &app))
}

/// Apply the drafts posted from an editing card.
pub async fn save_entry(
    State(state): State<Arc<AppState>>,
    Path((kind, id)): Path<(String, String)>,
    Form(form): Form<EditEntryForm>,
) -> Result<Response, ApiError> {
    let kind = parse_kind(&kind)?;
    let id = parse_id(kind, &id)?;
    let (api, mut app) = loaded(state).await;
    let card = app.saved_mut(kind).card_mut(id).ok_or_else(|| card_not_found(kind))?;
    card.begin_edit();
    card.set_draft_notes(form.notes.as_deref().unwrap_or_default());
    if let Some(star) = form.rating.as_deref().and_then(|r| r.trim().parse::<i32>().ok()) {
        card.rate(star);
    }
    let outcome = app.save_card(&api, kind, id).await;
    Ok(after(outcome, kind, &app))
}

pub async fn remove_entry(
    State(state): State<Arc<AppState>>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<Response, ApiError> {
    let kind = parse_kind(&kind)?;
    let id = parse_id(kind, &id)?;
    let (api, mut app) = loaded(state).await;
    if app.saved_mut(kind).card_mut(id).is_none() {
        return Err(card_not_found(kind));
    }
    let outcome = app.delete_card(&api, kind, id).await;
    Ok(after(outcome, kind, &app))
}
