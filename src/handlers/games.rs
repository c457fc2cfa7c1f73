// src/handlers/games.rs

use std::sync::Mutex;

use axum::{Json, extract::State};

use crate::{
    content,
    error::AppError,
    games::{
        GameError, GameQuestion, GameSession, MatchResult, MatchingRound, SessionView,
        board::with_slot, matching::MatchingView,
    },
    models::question::{AnswerRequest, PlaceMatchRequest, QuizQuestion, TrueFalseQuestion},
    services::daily_selection::{QUIZ_CACHE, TRUE_FALSE_CACHE},
    state::AppState,
};

type QuizView = SessionView<<QuizQuestion as GameQuestion>::View, usize>;
type TrueFalseView = SessionView<<TrueFalseQuestion as GameQuestion>::View, bool>;

type Slot<Q> = Mutex<Option<GameSession<Q>>>;

// Shared session plumbing for the linear games.

fn begin<Q: GameQuestion>(slot: &Slot<Q>, questions: Vec<Q>) -> SessionView<Q::View, Q::Answer> {
    with_slot(slot, |game| game.insert(GameSession::new(questions)).view())
}

fn current<Q: GameQuestion>(slot: &Slot<Q>) -> Result<SessionView<Q::View, Q::Answer>, GameError> {
    with_slot(slot, |game| {
        game.as_ref()
            .map(GameSession::view)
            .ok_or(GameError::NotStarted)
    })
}

fn answer<Q: GameQuestion>(
    slot: &Slot<Q>,
    answer: Q::Answer,
) -> Result<SessionView<Q::View, Q::Answer>, GameError> {
    with_slot(slot, |game| {
        let session = game.as_mut().ok_or(GameError::NotStarted)?;
        session.answer(answer)?;
        Ok::<_, GameError>(session.view())
    })
}

fn advance<Q: GameQuestion>(slot: &Slot<Q>) -> Result<SessionView<Q::View, Q::Answer>, GameError> {
    with_slot(slot, |game| {
        let session = game.as_mut().ok_or(GameError::NotStarted)?;
        session.advance()?;
        Ok::<_, GameError>(session.view())
    })
}

// --- Quiz ---

/// Starts a quiz over today's questions. Calling it again the same day
/// replays the same list.
pub async fn start_quiz(State(state): State<AppState>) -> Json<QuizView> {
    let questions = state.daily.select(
        content::quiz::questions(),
        QUIZ_CACHE,
        state.config.daily_question_limit,
    );
    Json(begin(&state.games.quiz, questions))
}

/// Discards today's quiz selection and starts over with a fresh draw.
pub async fn play_again_quiz(State(state): State<AppState>) -> Json<QuizView> {
    let questions = state.daily.reset(
        content::quiz::questions(),
        QUIZ_CACHE,
        state.config.daily_question_limit,
    );
    Json(begin(&state.games.quiz, questions))
}

pub async fn get_quiz(State(state): State<AppState>) -> Result<Json<QuizView>, AppError> {
    Ok(Json(current(&state.games.quiz)?))
}

pub async fn answer_quiz(
    State(state): State<AppState>,
    Json(payload): Json<AnswerRequest<usize>>,
) -> Result<Json<QuizView>, AppError> {
    Ok(Json(answer(&state.games.quiz, payload.answer)?))
}

pub async fn next_quiz(State(state): State<AppState>) -> Result<Json<QuizView>, AppError> {
    Ok(Json(advance(&state.games.quiz)?))
}

// --- True / false ---

pub async fn start_true_false(State(state): State<AppState>) -> Json<TrueFalseView> {
    let questions = state.daily.select(
        content::true_false::questions(),
        TRUE_FALSE_CACHE,
        state.config.daily_question_limit,
    );
    Json(begin(&state.games.true_false, questions))
}

pub async fn play_again_true_false(State(state): State<AppState>) -> Json<TrueFalseView> {
    let questions = state.daily.reset(
        content::true_false::questions(),
        TRUE_FALSE_CACHE,
        state.config.daily_question_limit,
    );
    Json(begin(&state.games.true_false, questions))
}

pub async fn get_true_false(State(state): State<AppState>) -> Result<Json<TrueFalseView>, AppError> {
    Ok(Json(current(&state.games.true_false)?))
}

pub async fn answer_true_false(
    State(state): State<AppState>,
    Json(payload): Json<AnswerRequest<bool>>,
) -> Result<Json<TrueFalseView>, AppError> {
    Ok(Json(answer(&state.games.true_false, payload.answer)?))
}

pub async fn next_true_false(State(state): State<AppState>) -> Result<Json<TrueFalseView>, AppError> {
    Ok(Json(advance(&state.games.true_false)?))
}

// --- Matching ---

/// Deals a fresh matching round. Not pinned to the day.
pub async fn start_matching(State(state): State<AppState>) -> Json<MatchingView> {
    let round = MatchingRound::draw(
        content::terms::terms(),
        state.config.daily_question_limit,
        &mut rand::thread_rng(),
    );
    Json(with_slot(&state.games.matching, |slot| slot.insert(round).view()))
}

pub async fn get_matching(State(state): State<AppState>) -> Result<Json<MatchingView>, AppError> {
    let view = with_slot(&state.games.matching, |slot| {
        slot.as_ref().map(MatchingRound::view).ok_or(GameError::NotStarted)
    })?;
    Ok(Json(view))
}

pub async fn place_match(
    State(state): State<AppState>,
    Json(payload): Json<PlaceMatchRequest>,
) -> Result<Json<MatchingView>, AppError> {
    let view = with_slot(&state.games.matching, |slot| {
        let round = slot.as_mut().ok_or(GameError::NotStarted)?;
        round.place(payload.term_id, payload.definition_id)?;
        Ok::<_, GameError>(round.view())
    })?;
    Ok(Json(view))
}

pub async fn submit_matching(State(state): State<AppState>) -> Result<Json<MatchResult>, AppError> {
    let result = with_slot(&state.games.matching, |slot| {
        slot.as_mut()
            .map(MatchingRound::submit)
            .ok_or(GameError::NotStarted)
    })?;
    Ok(Json(result))
}
