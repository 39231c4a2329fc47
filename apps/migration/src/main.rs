//! Migration CLI tool.
//!
//! Reads `DATABASE_URL` and runs `up`, `down`, `status`, `fresh` and friends.

use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // run_cli installs its own tracing subscriber.
    cli::run_cli(migration::Migrator).await;
}
