//! HTML page controller: roster list, detail page and the add/edit forms

use axum::{
    extract::{Path, RawForm, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use url::form_urlencoded;

use crate::application::{ApplicationError, SubmitAddDeveloper, SubmitEditDeveloper};
use crate::domain::{Developer, DeveloperId, DomainError};
use crate::forms::FormStore;
use crate::presentation::controllers::AppState;
use crate::presentation::views::{self, FieldKind, PROFILE_FIELDS, SKILL_FIELDS};

/// Rating prefilled for every skill on the add form
const DEFAULT_SKILL_RATING: &str = "55";

pub async fn list_page(State(app_state): State<AppState>) -> Result<Html<String>, ApplicationError> {
    let developers = app_state.developer_service.list_developers().await?;
    Ok(Html(views::developer_list_page(&developers)))
}

pub async fn detail_page(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApplicationError> {
    match find_developer(&app_state, &id).await? {
        Some(developer) => Ok(Html(views::developer_detail_page(&developer)).into_response()),
        None => Ok(not_found(&id)),
    }
}

pub async fn add_form_page() -> Html<String> {
    let form = add_form();
    Html(views::developer_form_page(
        "Add Developer",
        "/devs/add",
        form.snapshot(),
        None,
    ))
}

pub async fn submit_add_form(State(app_state): State<AppState>, RawForm(body): RawForm) -> Response {
    let mut form = add_form();
    form.apply_submission(form_urlencoded::parse(&body));

    let use_case = SubmitAddDeveloper::new(app_state.developer_service.clone());
    match use_case.execute(&form.submit()).await {
        Ok(developer) => {
            tracing::info!(id = %developer.id, "Developer added from form");
            Redirect::to("/").into_response()
        }
        Err(error) => rerender("Add Developer", "/devs/add", form, error),
    }
}

pub async fn edit_form_page(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApplicationError> {
    let Some(developer) = find_developer(&app_state, &id).await? else {
        return Ok(not_found(&id));
    };
    let form = edit_form(&developer);
    let page = views::developer_form_page(
        "Edit Developer",
        &edit_action(&developer.id),
        form.snapshot(),
        None,
    );
    Ok(Html(page).into_response())
}

pub async fn submit_edit_form(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    RawForm(body): RawForm,
) -> Result<Response, ApplicationError> {
    let Some(developer) = find_developer(&app_state, &id).await? else {
        return Ok(not_found(&id));
    };
    let mut form = edit_form(&developer);
    form.apply_submission(form_urlencoded::parse(&body));

    let use_case = SubmitEditDeveloper::new(app_state.developer_service.clone());
    let response = match use_case.execute(&developer.id, &form.submit()).await {
        Ok(updated) => {
            tracing::info!(id = %updated.id, "Developer updated from form");
            Redirect::to("/").into_response()
        }
        Err(error) => rerender("Edit Developer", &edit_action(&developer.id), form, error),
    };
    Ok(response)
}

async fn find_developer(
    app_state: &AppState,
    id: &str,
) -> Result<Option<Developer>, ApplicationError> {
    match DeveloperId::new(id) {
        Ok(id) => app_state.developer_service.get_developer(&id).await,
        Err(_) => Ok(None),
    }
}

fn not_found(id: &str) -> Response {
    (StatusCode::NOT_FOUND, Html(views::not_found_page(id))).into_response()
}

fn edit_action(id: &DeveloperId) -> String {
    format!("/devs/{}/edit", id)
}

/// Empty profile fields and the default skill ratings
fn add_form() -> FormStore {
    let mut form = FormStore::new("AddDeveloper");
    for field in PROFILE_FIELDS.iter().filter(|f| f.kind != FieldKind::Hidden) {
        form.add_field(field.name, "", "");
    }
    for field in &SKILL_FIELDS {
        form.add_field(field.name, DEFAULT_SKILL_RATING, DEFAULT_SKILL_RATING);
    }
    form
}

/// Every field prefilled from the stored developer, including the hidden id
fn edit_form(developer: &Developer) -> FormStore {
    let mut form = FormStore::new("EditDeveloper");
    let profile = [
        ("id", developer.id.to_string()),
        ("name", developer.name.clone()),
        ("imageUrl", developer.image_url.clone()),
        ("location", developer.location.clone()),
        ("position", developer.position.clone()),
        ("experienceYears", developer.experience_years.to_string()),
    ];
    for (name, value) in profile {
        form.add_field(name, value.clone(), value);
    }
    for (skill, rating) in developer.skills.iter() {
        let rating = rating.to_string();
        form.add_field(skill.as_str(), rating.clone(), rating);
    }
    form
}

/// Show the submitted values again with the error, without navigating away
fn rerender(title: &str, action: &str, mut form: FormStore, error: ApplicationError) -> Response {
    tracing::debug!(form = form.id(), error = %error, "Form submission rejected");

    let visible_field = error
        .field()
        .filter(|name| {
            PROFILE_FIELDS
                .iter()
                .chain(SKILL_FIELDS.iter())
                .any(|f| f.name == *name && f.kind != FieldKind::Hidden)
        })
        .map(str::to_string);

    let banner = match visible_field {
        Some(field) => {
            let message = match &error {
                ApplicationError::Domain(DomainError::InvalidInput { message, .. }) => {
                    message.clone()
                }
                other => other.to_string(),
            };
            form.set_error(&field, message);
            None
        }
        None => Some(error.to_string()),
    };

    let page = views::developer_form_page(title, action, form.snapshot(), banner.as_deref());
    (error.status_code(), Html(page)).into_response()
}
