//! HTTP Handlers
//!
//! Every handler sits behind `require_user` and reads the player from the
//! [`CurrentUser`] extension it inserts.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{HeaderMap, Uri, header, uri::PathAndQuery};
use axum::response::{IntoResponse, Response};
use axum::{Extension, Form, Json};

use auth::CurrentUser;
use kernel::id::GameId;
use platform::view::{SharedRenderer, found, render_view};

use crate::application::{
    GameConfig, GameDetailUseCase, HistoryUseCase, StartRoundUseCase, SubmitGuessUseCase,
};
use crate::domain::entities::GameRecord;
use crate::domain::repository::{GameRecordRepository, RoundStateRepository};
use crate::presentation::dto::{
    DetailQuery, GuessForm, GuessResultView, HistoryView, IndexView, TitleView,
};

pub const INDEX_VIEW: &str = "index";
pub const START_VIEW: &str = "start";
pub const GUESS_FORM_VIEW: &str = "guessForm";
pub const HISTORY_VIEW: &str = "history";
pub const SUCCESS_VIEW: &str = "success";

pub const START_PATH: &str = "/start";
pub const SUCCESS_PATH: &str = "/success";

/// Shared state for game handlers
#[derive(Clone)]
pub struct GameAppState<R>
where
    R: GameRecordRepository + RoundStateRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<GameConfig>,
    pub renderer: SharedRenderer,
}

impl<R> GameAppState<R>
where
    R: GameRecordRepository + RoundStateRepository + Clone + Send + Sync + 'static,
{
    fn title_view(&self) -> TitleView {
        TitleView {
            title: self.config.title.clone(),
        }
    }
}

/// GET /
pub async fn index<R>(
    State(state): State<GameAppState<R>>,
    Extension(user): Extension<CurrentUser>,
) -> Response
where
    R: GameRecordRepository + RoundStateRepository + Clone + Send + Sync + 'static,
{
    let model = IndexView {
        title: state.config.title.clone(),
        user_name: user.user_name,
    };
    render_view(state.renderer.as_ref(), INDEX_VIEW, &model)
}

/// GET /start
pub async fn start<R>(
    State(state): State<GameAppState<R>>,
    Extension(user): Extension<CurrentUser>,
) -> Response
where
    R: GameRecordRepository + RoundStateRepository + Clone + Send + Sync + 'static,
{
    let use_case = StartRoundUseCase::new(state.repo.clone());

    match use_case.execute(user.session_id).await {
        Ok(_) => render_view(state.renderer.as_ref(), START_VIEW, &state.title_view()),
        Err(e) => e.into_response(),
    }
}

/// POST /guess
///
/// A guess posted from the start page gets a page back: a redirect to the success
/// page on a hit, the annotated guess form otherwise. Anything else gets the result
/// as JSON.
pub async fn guess<R>(
    State(state): State<GameAppState<R>>,
    Extension(user): Extension<CurrentUser>,
    headers: HeaderMap,
    Form(form): Form<GuessForm>,
) -> Response
where
    R: GameRecordRepository + RoundStateRepository + Clone + Send + Sync + 'static,
{
    let use_case = SubmitGuessUseCase::new(state.repo.clone(), state.repo.clone());

    let output = match use_case.execute(user.session_id, &form.guess).await {
        Ok(output) => output,
        Err(e) => return e.into_response(),
    };

    let model = GuessResultView {
        title: state.config.title.clone(),
        guess: output.guess,
        result: output.outcome.result_text(),
        class: output.outcome.display_class(),
    };

    match referer(&headers).filter(|uri| uri.path() == START_PATH) {
        Some(from_start) if output.outcome.is_success() => {
            found(&success_location(&from_start).unwrap_or_else(|| SUCCESS_PATH.to_string()))
        }
        Some(_) => render_view(state.renderer.as_ref(), GUESS_FORM_VIEW, &model),
        None => Json(model).into_response(),
    }
}

/// GET /history
pub async fn history<R>(State(state): State<GameAppState<R>>) -> Response
where
    R: GameRecordRepository + RoundStateRepository + Clone + Send + Sync + 'static,
{
    let history = match HistoryUseCase::new(state.repo.clone()).execute().await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load game history");
            Vec::new()
        }
    };

    let model = HistoryView {
        title: state.config.title.clone(),
        history,
    };
    render_view(state.renderer.as_ref(), HISTORY_VIEW, &model)
}

/// GET /detail?gameid=
///
/// Answers `null` when the id is malformed, unknown, or the lookup fails.
pub async fn detail<R>(
    State(state): State<GameAppState<R>>,
    Query(query): Query<DetailQuery>,
) -> Json<Option<GameRecord>>
where
    R: GameRecordRepository + RoundStateRepository + Clone + Send + Sync + 'static,
{
    let Some(id) = query.gameid.as_deref().and_then(|raw| raw.parse::<GameId>().ok()) else {
        tracing::debug!(gameid = ?query.gameid, "Detail requested without a valid game id");
        return Json(None);
    };

    match GameDetailUseCase::new(state.repo.clone()).execute(id).await {
        Ok(record) => Json(record),
        Err(e) => {
            tracing::error!(game_id = %id, error = %e, "Failed to load game record");
            Json(None)
        }
    }
}

/// GET /success
pub async fn success<R>(State(state): State<GameAppState<R>>) -> Response
where
    R: GameRecordRepository + RoundStateRepository + Clone + Send + Sync + 'static,
{
    render_view(state.renderer.as_ref(), SUCCESS_VIEW, &state.title_view())
}

fn referer(headers: &HeaderMap) -> Option<Uri> {
    headers
        .get(header::REFERER)?
        .to_str()
        .ok()?
        .parse::<Uri>()
        .ok()
}

/// `referer` with its path swapped for the success page; scheme, host and query kept
fn success_location(referer: &Uri) -> Option<String> {
    let path_and_query = match referer.query() {
        Some(query) => format!("{SUCCESS_PATH}?{query}"),
        None => SUCCESS_PATH.to_string(),
    };

    let mut parts = referer.clone().into_parts();
    parts.path_and_query = Some(path_and_query.parse::<PathAndQuery>().ok()?);
    Uri::from_parts(parts).ok().map(|uri| uri.to_string())
}
