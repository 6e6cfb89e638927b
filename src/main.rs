use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    sector_chat_lib::run().await
}
