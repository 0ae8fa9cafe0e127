use actix_web::web::{get, post, ServiceConfig};

mod v1;
pub use v1::{ErrorResponse, MoveRequest, MoveResponse};
use v1::{get_game, play_move, reset_game};

/*
Endpoints:
* GET  /api/v1/game        -> Match::view
* POST /api/v1/game/moves  -> Match::try_play_round(body.index)
* POST /api/v1/game/reset  -> Match::reset

The match itself is expected as `Data<Mutex<Match>>` app data.
*/

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.route("/api/v1/game", get().to(get_game))
        .route("/api/v1/game/moves", post().to(play_move))
        .route("/api/v1/game/reset", post().to(reset_game));
}
