use std::process::ExitCode;

use env_logger::Env;
use log::{error, info};
use tictactoe_web::{GameServer, Match, MatchArgs, Server};

#[actix_web::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = MatchArgs::from_env();
    let game = match Match::from_args(args.clone()) {
        Ok(game) => game,
        Err(e) => {
            error!("Invalid player configuration {:?}: {}", args, e);
            return ExitCode::FAILURE;
        }
    };
    info!(
        "Starting match: {} (X) against {} (O)",
        args.player_one_name, args.player_two_name
    );

    let mut server = GameServer::from_env(game);
    if let Err(e) = server.start().await {
        error!("Game server on {} stopped: {}", server.get_address(), e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
