use crate::{client_management::lock_match, GameView, Match};
use actix_web::{
    http::header::{ContentType, LOCATION},
    web::{get, post, Data, Path, ServiceConfig},
    HttpResponse,
};
use log::debug;
use serde::Deserialize;
use std::sync::Mutex;

/*
The page the players click on:
* GET  /               -> the board, the status message and a restart button
* POST /cells/{index}  -> Match::play_round(index), then back to /
* POST /restart        -> Match::reset, then back to /

Every button is a plain form, so the page works without any scripting.
*/

pub fn configure(cfg: &mut ServiceConfig) {
    cfg.route("/", get().to(show_page))
        .route("/cells/{index}", post().to(select_cell))
        .route("/restart", post().to(restart));
}

#[derive(Deserialize)]
pub struct CellSelector {
    index: usize,
}

pub async fn show_page(game: Data<Mutex<Match>>) -> Result<HttpResponse, actix_web::Error> {
    let view = lock_match(&game)?.view();
    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_page(&view)))
}

pub async fn select_cell(
    path: Path<CellSelector>,
    game: Data<Mutex<Match>>,
) -> Result<HttpResponse, actix_web::Error> {
    let result = lock_match(&game)?.play_round(path.index);
    debug!("cell {} selected: {:?}", path.index, result);
    Ok(back_to_page())
}

pub async fn restart(game: Data<Mutex<Match>>) -> Result<HttpResponse, actix_web::Error> {
    lock_match(&game)?.reset();
    Ok(back_to_page())
}

fn back_to_page() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, "/"))
        .finish()
}

pub fn render_page(view: &GameView) -> String {
    let mut cells = String::new();
    for (index, cell) in view.board.iter().enumerate() {
        cells.push_str(&format!(
            r#"
      <form method="post" action="/cells/{index}">
        <button type="submit" class="cell" data-index="{index}">{cell}</button>
      </form>"#,
            index = index,
            cell = cell,
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="utf-8">
    <title>Tic-Tac-Toe</title>
    <link rel="stylesheet" href="/static/style.css">
  </head>
  <body>
    <h1>Tic-Tac-Toe</h1>
    <div class="board">{cells}
    </div>
    <p id="message">{message}</p>
    <form method="post" action="/restart">
      <button type="submit" id="restart">Restart</button>
    </form>
  </body>
</html>
"#,
        cells = cells,
        message = escape_html(&view.message),
    )
}

/// Player names come from the environment, so they are escaped before they
/// end up in the page. Only used for element text, where quotes are safe.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
