use anyhow::Context;
use mandrill_mailer::configuration::get_configuration;
use mandrill_mailer::domain::{Address, Email};
use mandrill_mailer::startup::build_transport;
use mandrill_mailer::telemetry::{get_subscriber, init_subscriber};
use mandrill_mailer::transport::Transport;
use tokio::io::AsyncReadExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("mandrill-send".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let mut args = std::env::args().skip(1);
    let (recipient, subject) = match (args.next(), args.next()) {
        (Some(recipient), Some(subject)) => (recipient, subject),
        _ => anyhow::bail!("Usage: mandrill-send <recipient> <subject> < body.txt"),
    };

    let configuration = get_configuration().context("Failed to read configuration")?;
    let transport = build_transport(&configuration.mandrill)?;
    let sender = configuration
        .mandrill
        .sender()
        .map_err(|e| anyhow::anyhow!(e))
        .context("Invalid sender address")?;
    let recipient = Address::plain(&recipient)
        .map_err(|e| anyhow::anyhow!(e))
        .context("Invalid recipient address")?;

    let mut body = String::new();
    tokio::io::stdin()
        .read_to_string(&mut body)
        .await
        .context("Failed to read the message body from stdin")?;

    let email = Email::new()
        .from(sender)
        .to(recipient)
        .subject(&subject)
        .text(&body);

    transport.send(&email, None).await?;
    tracing::info!("Message accepted by Mandrill");
    Ok(())
}
