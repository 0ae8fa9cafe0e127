use crate::{
    client_management::{page, r#static::StaticFiles, rest_api},
    Match, Server,
};
use actix_web::{web::Data, App, HttpServer};
use log::{debug, info};
use std::{
    fmt::Display,
    net::{SocketAddr, ToSocketAddrs},
    sync::Mutex,
};

#[derive(Debug)]
pub enum ErrorKind {
    InvalidAddress,
    ErrorListening(std::io::Error),
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::InvalidAddress => write!(f, "invalid address"),
            ErrorKind::ErrorListening(e) => write!(f, "error listening: {}", e),
        }
    }
}

/// Serves the page, the JSON api and the static assets for a single match
/// shared by every request.
#[derive(Clone)]
pub struct GameServer {
    pub port: u16,
    pub host: String,
    pub game: Data<Mutex<Match>>,
    pub static_files: StaticFiles,
}

impl Server for GameServer {
    type ErrorKind = ErrorKind;

    fn new(host: String, port: u16, game: Match) -> Self {
        Self {
            port,
            host,
            game: Data::new(Mutex::new(game)),
            static_files: StaticFiles::default(),
        }
    }

    fn default() -> Self {
        Self::with_match(Match::default())
    }

    fn get_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn with_match(game: Match) -> Self {
        Self::new(Self::DEFAULT_HOST.to_string(), Self::DEFAULT_PORT, game)
    }

    fn from_env(game: Match) -> Self {
        let host =
            std::env::var("WEBSERVER_HOST").unwrap_or_else(|_| Self::DEFAULT_HOST.to_string());
        let port = std::env::var("WEBSERVER_PORT")
            .ok()
            .and_then(|x| x.parse().ok())
            .unwrap_or(Self::DEFAULT_PORT);

        Self {
            static_files: StaticFiles::from_env(),
            ..Self::new(host, port, game)
        }
    }

    async fn start(&mut self) -> Result<(), Self::ErrorKind> {
        let addr = self.get_address();
        let socket_addrs: Vec<SocketAddr> = addr
            .to_socket_addrs()
            .map_err(|_| ErrorKind::InvalidAddress)?
            .collect();
        if socket_addrs.is_empty() {
            return Err(ErrorKind::InvalidAddress);
        }

        let game = self.game.clone();
        let static_files = self.static_files.clone();
        debug!("Starting game server on {}", addr);

        let server = HttpServer::new(move || {
            App::new()
                .app_data(game.clone())
                .configure(page::configure)
                .configure(rest_api::configure)
                .service(static_files.service())
        })
        .bind(&socket_addrs[..])
        .map_err(ErrorKind::ErrorListening)?;

        info!("Listening on http://{}", addr);
        server.run().await.map_err(ErrorKind::ErrorListening)
    }
}
