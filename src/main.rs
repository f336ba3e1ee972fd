use dragroute::{DragConfig, DragEvent, DragSession};

use log::{info, warn};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> dragroute::Result<()> {
    // Create the logger first.
    #[cfg(feature = "tracing")]
    dragroute::trace::initialize_tracer();
    #[cfg(not(feature = "tracing"))]
    env_logger::init();

    let config = DragConfig::from_env()?;
    config.log();

    let mut session = DragSession::headless(&config)?;

    // Drags are read from the start, the startup pass does not hold them back.
    let (sender, events) = mpsc::channel(16);
    let reader = tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line.parse::<DragEvent>() {
                Ok(event) => {
                    if sender.send(event).await.is_err() {
                        break;
                    }
                }
                Err(err) => warn!("{err}"),
            }
        }

        Ok::<_, std::io::Error>(())
    });

    info!("Reading drags from stdin");
    session.bootstrap();
    session.run(events).await;
    reader.await??;

    match session.presenter().displayed() {
        Some(route) => info!("Final route {}: {}", route.query, route.summary()),
        None => info!("No route displayed"),
    }

    Ok(())
}
