use std::{fmt::Debug, future::Future};

use crate::Match;
use actix_web::error::ErrorInternalServerError;
use std::sync::{Mutex, MutexGuard};

pub mod page;
pub mod rest_api;
pub mod server;
pub mod r#static;

pub use server::GameServer;

pub trait Server: Sized {
    type ErrorKind: Debug;
    const DEFAULT_PORT: u16 = 3000;
    const DEFAULT_HOST: &'static str = "127.0.0.1";

    fn new(host: String, port: u16, game: Match) -> Self;

    fn start(&mut self) -> impl Future<Output = Result<(), Self::ErrorKind>> + Send;

    fn get_address(&self) -> String;

    fn default() -> Self;

    fn with_match(game: Match) -> Self;

    // loads environment variables or uses default values if not set
    fn from_env(game: Match) -> Self;
}

/// Locks the match shared between request handlers. A poisoned lock turns
/// into a 500 instead of taking the worker down.
pub(crate) fn lock_match(game: &Mutex<Match>) -> Result<MutexGuard<'_, Match>, actix_web::Error> {
    game.lock()
        .map_err(|_| ErrorInternalServerError("the match state is unavailable"))
}
