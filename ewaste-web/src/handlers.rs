//! Request handlers for the survey pages and the JSON API.

use axum::{
    Form, Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use ewaste_core::{EstimateReport, EwasteService, ReferenceData, SurveyInput};
use serde_json::json;

use crate::form::SurveyForm;
use crate::views;

#[derive(thiserror::Error, Debug)]
/// Errors returned by the JSON API.
pub enum ApiError {
    /// The request body is not a valid survey.
    #[error("Invalid survey: {0}")]
    InvalidSurvey(#[from] JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidSurvey(rejection) => rejection.status(),
        };
        tracing::debug!(%status, error = %self, "Rejected API request");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

pub(crate) async fn index() -> Html<String> {
    Html(views::survey_page())
}

pub(crate) async fn calculate(
    State(service): State<EwasteService>,
    Form(form): Form<SurveyForm>,
) -> Html<String> {
    let input = form.into_input();
    let report = service.report(&input);
    Html(views::result_page(&input, &report))
}

pub(crate) async fn api_estimate(
    State(service): State<EwasteService>,
    payload: Result<Json<SurveyInput>, JsonRejection>,
) -> Result<Json<EstimateReport>, ApiError> {
    let Json(input) = payload?;
    Ok(Json(service.report(&input)))
}

pub(crate) async fn api_reference(State(service): State<EwasteService>) -> Json<ReferenceData> {
    Json(service.reference().clone())
}

pub(crate) async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
