mod event;

pub use self::event::EventHandler;

use crate::{domain::response::Frame, state::AppState};
use anyhow::{Context, Result};
use std::future::Future;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

pub struct EventLoop;

impl EventLoop {
    /// Applies events from `input` one at a time until end of input or ctrl-c.
    pub async fn serve<R, W>(state: AppState, input: R, output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        Self::serve_until(state, input, output, shutdown_signal()).await
    }

    pub async fn serve_until<R, W, S>(state: AppState, input: R, mut output: W, shutdown: S) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
        S: Future<Output = ()>,
    {
        let handler = EventHandler::new(state);
        let mut lines = input.lines();

        write_frame(&mut output, &handler.current_frame().await).await?;

        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    info!("Shutdown signal received");
                    break;
                }
                line = lines.next_line() => {
                    match line.context("Failed to read event")? {
                        Some(line) if line.trim().is_empty() => continue,
                        Some(line) => {
                            let frame = handler.handle_line(&line).await;
                            write_frame(&mut output, &frame).await?;
                        }
                        None => {
                            debug!("Event input closed");
                            break;
                        }
                    }
                }
            }
        }

        Ok(())
    }
}

async fn write_frame<W>(output: &mut W, frame: &Frame) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    let mut json = serde_json::to_string(frame).context("Failed to encode frame")?;
    json.push('\n');
    output
        .write_all(json.as_bytes())
        .await
        .context("Failed to write frame")?;
    output.flush().await.context("Failed to flush frame")?;
    Ok(())
}

pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install ctrl-c handler: {e}");
        std::future::pending::<()>().await;
    }
}
