//! A small REPL demonstrating how to use `cross-intelligence` as a
//! library.

use std::env;
use std::io::Write as _;
use std::process::ExitCode;

use cross_intelligence::{ModelId, SessionBuilder, client_for};
use tokio::io::{self, AsyncBufReadExt, BufReader};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let raw_id = env::var("CROSS_INTELLIGENCE_MODEL")
        .unwrap_or_else(|_| "openai:gpt-4o".to_owned());
    let id: ModelId = match raw_id.parse() {
        Ok(id) => id,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };
    let client = match client_for(&id) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut session = SessionBuilder::new()
        .with_instructions("You are a helpful assistant.")
        .build_with_client(client);

    let mut lines = BufReader::new(io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush().ok();
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::FAILURE;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match session.respond(line).await {
            Ok(answer) => println!("{answer}"),
            Err(err) => eprintln!("error: {err}"),
        }
    }
    ExitCode::SUCCESS
}
