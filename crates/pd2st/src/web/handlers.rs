use super::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{Html, IntoResponse, Response},
    Form, Json,
};
use pd2st_core::convert::{ConversionRequest, Notice, NoticeLevel};
use pd2st_core::page::{render_page, PageState};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct GenerateForm {
    #[serde(default)]
    pub pandas_code: String,
    #[serde(default)]
    pub change_request: String,
}

fn notice_status(notice: &Notice) -> StatusCode {
    match notice.level {
        NoticeLevel::Warning => StatusCode::UNPROCESSABLE_ENTITY,
        NoticeLevel::Error => StatusCode::BAD_GATEWAY,
    }
}

pub async fn index() -> Html<String> {
    Html(render_page(&PageState::default()))
}

pub async fn generate(
    State(state): State<AppState>,
    Form(form): Form<GenerateForm>,
) -> Html<String> {
    let request = ConversionRequest::new(
        form.pandas_code.clone(),
        Some(form.change_request.clone()),
    );

    let mut page = PageState {
        pandas_code: form.pandas_code,
        change_request: form.change_request,
        ..Default::default()
    };

    match crate::convert::generate(&state.settings, &state.http, &request).await {
        Ok(artifact) => page.artifact = Some(artifact),
        Err(notice) => page.notice = Some(notice),
    }

    Html(render_page(&page))
}

pub async fn api_convert(
    State(state): State<AppState>,
    Json(request): Json<ConversionRequest>,
) -> Response {
    match crate::convert::generate(&state.settings, &state.http, &request).await {
        Ok(artifact) => Json(artifact).into_response(),
        Err(notice) => (notice_status(&notice), Json(notice)).into_response(),
    }
}

pub async fn download(
    State(state): State<AppState>,
    Json(request): Json<ConversionRequest>,
) -> Response {
    match crate::convert::generate(&state.settings, &state.http, &request).await {
        Ok(artifact) => (
            [
                (header::CONTENT_TYPE, artifact.mime.clone()),
                (header::CONTENT_DISPOSITION, artifact.content_disposition()),
            ],
            artifact.content,
        )
            .into_response(),
        Err(notice) => (notice_status(&notice), Json(notice)).into_response(),
    }
}
