//! Access to the chess server's HTTP endpoints.

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::protocol::{
    BoardResponse, BoardSnapshot, MoveOutcome, MoveRequest, MoveStatus, RawMoveResponse,
    RawMoveStatus, ScoreResponse,
};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// The four server calls the client depends on.
///
/// The server is the sole authority on game state; implementations only
/// move data, they never interpret chess.
#[async_trait]
pub trait ChessApi {
    /// `GET /board`: the current board.
    async fn fetch_board(&self) -> Result<BoardSnapshot, ClientError>;

    /// `POST /move`: proposes a move.
    async fn submit_move(&self, request: MoveRequest) -> Result<MoveOutcome, ClientError>;

    /// `GET /move`: the board and game-over flag after an accepted move.
    async fn fetch_move_status(&self) -> Result<MoveStatus, ClientError>;

    /// `GET /score`: both sides' scores.
    async fn fetch_score(&self) -> Result<ScoreResponse, ClientError>;
}

/// reqwest-backed [`ChessApi`].
#[derive(Debug, Clone)]
pub struct HttpChessApi {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpChessApi {
    /// Creates a client for the server described by `config`.
    #[instrument(skip(config), fields(server_url = %config.server_url()))]
    pub fn new(config: ClientConfig) -> Self {
        info!("Creating HTTP chess client");
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl ChessApi for HttpChessApi {
    #[instrument(skip(self))]
    async fn fetch_board(&self) -> Result<BoardSnapshot, ClientError> {
        let url = self.config.endpoint(self.config.board_path());
        debug!(url = %url, "Fetching board");
        let response: BoardResponse = self.client.get(&url).send().await?.json().await?;
        debug!(squares = response.board_info.len(), "Received board");
        Ok(response.board_info)
    }

    #[instrument(skip(self), fields(target = %request.target, destination = %request.destination))]
    async fn submit_move(&self, request: MoveRequest) -> Result<MoveOutcome, ClientError> {
        let url = self.config.endpoint(self.config.move_path());
        info!(url = %url, "Submitting move");
        let response: RawMoveResponse = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await?
            .json()
            .await?;
        debug!(code = %response.code, message = ?response.message, "Move response");
        Ok(response.into_outcome())
    }

    #[instrument(skip(self))]
    async fn fetch_move_status(&self) -> Result<MoveStatus, ClientError> {
        let url = self.config.endpoint(self.config.move_path());
        debug!(url = %url, "Fetching move status");
        let response: RawMoveStatus = self.client.get(&url).send().await?.json().await?;
        Ok(response.into_status())
    }

    #[instrument(skip(self))]
    async fn fetch_score(&self) -> Result<ScoreResponse, ClientError> {
        let url = self.config.endpoint(self.config.score_path());
        debug!(url = %url, "Fetching score");
        let score: ScoreResponse = self.client.get(&url).send().await?.json().await?;
        debug!(white = score.white_score, black = score.black_score, "Received score");
        Ok(score)
    }
}
