use crate::commandline::Commandline;
use crate::error::ChatDuoError;
use clap::Parser;

mod commandline;
mod configuration;
mod context;
mod error;
mod room;
mod server;
mod utils;

#[tokio::main]
async fn main() -> Result<(), ChatDuoError> {
	Commandline::parse().run().await
}
