mod cli;
mod infra;
mod routes;
mod score;
mod server;

use triage_desk::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
