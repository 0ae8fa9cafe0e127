use crate::{client_management::lock_match, GameView, InvalidMove, Match, RoundResult};

use actix_web::{
    web::{Data, Json},
    HttpResponse,
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::sync::Mutex;

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct MoveRequest {
    pub index: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MoveResponse {
    pub result: RoundResult,
    pub view: GameView,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorResponse {
    pub error: InvalidMove,
    pub message: String,
    pub view: GameView,
}

pub async fn get_game(game: Data<Mutex<Match>>) -> Result<Json<GameView>, actix_web::Error> {
    let game = lock_match(&game)?;
    Ok(Json(game.view()))
}

pub async fn play_move(
    game: Data<Mutex<Match>>,
    body: Json<MoveRequest>,
) -> Result<HttpResponse, actix_web::Error> {
    let mut game = lock_match(&game)?;
    let index = body.into_inner().index;
    match game.try_play_round(index) {
        Ok(result) => Ok(HttpResponse::Ok().json(MoveResponse {
            result,
            view: game.view(),
        })),
        Err(error) => {
            debug!("rejected move at index {}: {}", index, error);
            Ok(HttpResponse::Conflict().json(ErrorResponse {
                error,
                message: error.to_string(),
                view: game.view(),
            }))
        }
    }
}

pub async fn reset_game(game: Data<Mutex<Match>>) -> Result<Json<GameView>, actix_web::Error> {
    let mut game = lock_match(&game)?;
    game.reset();
    Ok(Json(game.view()))
}
