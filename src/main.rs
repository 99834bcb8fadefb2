use std::time::Duration;

use stepform::cli::CliView;
use stepform::config::WizardConfig;
use stepform::submit::{SubmitBackend, SubmitConfig, create_submitter};
use stepform::wizard::WizardController;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // With an endpoint configured the form posts for real; otherwise the
    // submission is simulated locally.
    let submit_url = std::env::var("STEPFORM_SUBMIT_URL").ok();

    let delay_ms: u64 = std::env::var("STEPFORM_SUBMIT_DELAY_MS")
        .unwrap_or_else(|_| "1500".to_string())
        .parse()
        .unwrap_or(1500);

    let failure_rate: f64 = std::env::var("STEPFORM_FAIL_RATE")
        .unwrap_or_else(|_| "0.0".to_string())
        .parse()
        .unwrap_or(0.0);

    let auth_token = std::env::var("STEPFORM_AUTH_TOKEN")
        .ok()
        .map(secrecy::SecretString::from);

    let backend = if submit_url.is_some() {
        SubmitBackend::Http
    } else {
        SubmitBackend::Simulated
    };

    eprintln!("📝 stepform v{}", env!("CARGO_PKG_VERSION"));
    match submit_url {
        Some(ref url) => eprintln!("   Submitter: http ({url})"),
        None => eprintln!("   Submitter: simulated ({delay_ms} ms)"),
    }
    eprintln!("   回答を入力して Enter。/quit で終了します。");

    let submit_config = SubmitConfig {
        backend,
        endpoint: submit_url,
        auth_token,
        delay: Duration::from_millis(delay_ms),
        failure_rate,
    };
    let submitter = create_submitter(&submit_config)?;

    let controller = WizardController::new(&WizardConfig::default(), submitter);
    CliView::new(controller).run().await?;

    Ok(())
}
