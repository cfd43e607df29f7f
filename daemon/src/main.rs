//! Ventus daemon: CLI front end for the photo verification service.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use ventus_notify::SmsClient;
use ventus_providers::EngineClient;
use ventus_service::{
    init_logging, ServiceConfig, VerificationResponse, VerificationService,
};
use ventus_types::{PhotoRef, VerificationRequest};

#[derive(Parser)]
#[command(name = "ventus-daemon", about = "Ventus photo verification daemon")]
struct Cli {
    /// Base URL of the vision engine.
    #[arg(long, env = "VENTUS_ENGINE_URL")]
    engine_url: Option<String>,

    /// Base URL of the SMS gateway.
    #[arg(long, env = "VENTUS_SMS_GATEWAY_URL")]
    sms_gateway_url: Option<String>,

    /// Sender number for accountability notifications.
    #[arg(long, env = "VENTUS_SMS_FROM")]
    sms_from: Option<String>,

    /// Bearer token for the SMS gateway.
    #[arg(long, env = "VENTUS_SMS_TOKEN")]
    sms_token: Option<String>,

    /// Require a detected face in addition to the outdoor check.
    #[arg(long, env = "VENTUS_REQUIRE_FACE")]
    require_face: bool,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, default_value = "info", env = "VENTUS_LOG_LEVEL")]
    log_level: String,

    /// Log format: "human" or "json".
    #[arg(long, default_value = "human", env = "VENTUS_LOG_FORMAT")]
    log_format: String,

    /// Path to a TOML configuration file. If provided, file settings
    /// are used as the base; CLI flags and env vars override them.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Subcommand.
    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Verify a single photo and print the response as JSON.
    Verify {
        /// Photo location as a URI ("https://..." or "file:///...").
        #[arg(long, conflicts_with_all = ["bucket", "key"])]
        photo: Option<String>,

        /// Storage bucket holding the photo.
        #[arg(long, requires = "key")]
        bucket: Option<String>,

        /// Object key within the bucket.
        #[arg(long, requires = "bucket")]
        key: Option<String>,

        /// Phone number to notify when verification fails.
        #[arg(long)]
        contact_phone: Option<String>,

        /// Name substituted into the notification message.
        #[arg(long)]
        user_name: Option<String>,

        /// Notification template with an optional {username} placeholder.
        #[arg(long)]
        message_template: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let format = cli.log_format.parse().map_err(anyhow::Error::msg)?;
    init_logging(format, &cli.log_level);

    let file_config: Option<ServiceConfig> = if let Some(ref config_path) = cli.config {
        match std::fs::read_to_string(config_path) {
            Ok(contents) => match toml::from_str::<ServiceConfig>(&contents) {
                Ok(cfg) => {
                    tracing::info!("Loaded config from {}", config_path.display());
                    Some(cfg)
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config file: {e}, using CLI defaults");
                    None
                }
            },
            Err(e) => {
                tracing::warn!(
                    "Failed to read config file {}: {e}, using CLI defaults",
                    config_path.display()
                );
                None
            }
        }
    } else {
        None
    };

    let base = file_config.unwrap_or_default();
    let config = ServiceConfig {
        engine_url: cli.engine_url.unwrap_or(base.engine_url),
        sms_gateway_url: cli.sms_gateway_url.unwrap_or(base.sms_gateway_url),
        sms_from: cli.sms_from.unwrap_or(base.sms_from),
        sms_token: cli.sms_token.or(base.sms_token),
        require_face: cli.require_face || base.require_face,
        log_level: cli.log_level,
        log_format: cli.log_format,
        ..base
    };
    config.validate()?;

    match cli.command {
        Command::Verify {
            photo,
            bucket,
            key,
            contact_phone,
            user_name,
            message_template,
        } => {
            let photo_ref = match (photo, bucket, key) {
                (Some(uri), None, None) => PhotoRef::uri(uri),
                (None, Some(bucket), Some(key)) => PhotoRef::s3(bucket, key),
                _ => anyhow::bail!("either --photo or --bucket with --key is required"),
            };

            let engine = Arc::new(
                EngineClient::new(&config.engine_url)
                    .with_max_labels(config.engine_max_labels)
                    .with_min_confidence(config.engine_min_confidence),
            );
            let mut sms = SmsClient::new(&config.sms_gateway_url);
            if let Some(token) = &config.sms_token {
                sms = sms.with_auth_token(token.as_str());
            }

            let service = VerificationService::new(
                config.verifier()?,
                engine.clone(),
                engine,
                Arc::new(sms),
            );

            tracing::info!(
                engine = %config.engine_url,
                threshold = config.confidence_threshold,
                min_matches = config.min_matches,
                require_face = config.require_face,
                "Starting photo verification"
            );

            let mut request = VerificationRequest::new(photo_ref);
            if let Some(phone) = contact_phone {
                request = request.with_contact_phone(phone);
            }
            if let Some(name) = user_name {
                request = request.with_user_name(name);
            }
            if let Some(template) = message_template {
                request = request.with_message_template(template);
            }

            let outcome = service.verify_photo(&request).await?;
            let response = VerificationResponse::from(&outcome.verdict);
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}
