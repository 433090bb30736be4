use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use core_rtx::{RobotsError, TracingSink, generate};

use crate::state::AppState;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// GET /robots.txt - Generate robots.txt from the current configuration
pub async fn get_robots_txt(State(state): State<AppState>) -> Result<impl IntoResponse, RobotsTxtError> {
    let content = generate(&state.config, &state.site_href, &TracingSink)?;
    Ok((StatusCode::OK, [(header::CONTENT_TYPE, TEXT_PLAIN)], content))
}

/// Generation failed; the configuration has to be fixed before robots.txt can be served.
#[derive(Debug)]
pub struct RobotsTxtError(RobotsError);

impl From<RobotsError> for RobotsTxtError {
    fn from(err: RobotsError) -> Self {
        Self(err)
    }
}

impl IntoResponse for RobotsTxtError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, TEXT_PLAIN)],
            self.0.to_string(),
        )
            .into_response()
    }
}
