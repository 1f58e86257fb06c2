use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::net::TcpListener;

use fms_registration::modules::registration::adapters::outbound::page_effects_console::ConsolePageEffects;
use fms_registration::modules::registration::core::request::RegistrationRequest;
use fms_registration::modules::registration::use_cases::submit_registration::outcome::SubmissionOutcome;
use fms_registration::shell::config::{Args, Command};
use fms_registration::shell::state::AppState;
use fms_registration::shell::{http, submit, telemetry};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let _ = dotenvy::dotenv();
    telemetry::init();

    match Args::parse().command {
        Command::Serve { listen } => {
            serve(&listen).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Submit {
            base_url,
            name,
            email,
            password,
        } => {
            let request = RegistrationRequest::new(name, email, password);
            let outcome = submit::run(&base_url, &request, Arc::new(ConsolePageEffects)).await?;
            Ok(match outcome {
                SubmissionOutcome::Registered => ExitCode::SUCCESS,
                SubmissionOutcome::Rejected { .. } | SubmissionOutcome::Failed { .. } => {
                    ExitCode::FAILURE
                }
            })
        }
    }
}

async fn serve(listen: &str) -> Result<()> {
    let listener = TcpListener::bind(listen).await?;
    let app = http::router(AppState::in_memory());

    tracing::info!("registration endpoint: http://{}/register", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
