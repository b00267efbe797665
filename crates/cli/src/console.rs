//! Terminal output. Everything the session prints goes through one writer so
//! timer notifications never split the prompt.

use tokio::io::{AsyncWrite, AsyncWriteExt};

const PROMPT: &str = "> ";

pub struct Console<W> {
    out: W,
}

impl<W: AsyncWrite + Unpin> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Print a line of text as-is.
    pub async fn line(&mut self, text: &str) -> std::io::Result<()> {
        self.out.write_all(text.as_bytes()).await?;
        self.out.write_all(b"\n").await?;
        self.out.flush().await
    }

    pub async fn prompt(&mut self) -> std::io::Result<()> {
        self.out.write_all(PROMPT.as_bytes()).await?;
        self.out.flush().await
    }

    /// Print command output. Blank output prints nothing.
    pub async fn output(&mut self, text: &str) -> std::io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }
        self.line(text).await
    }

    /// Print a notification that arrived while the prompt was showing, then
    /// draw the prompt again.
    pub async fn notify(&mut self, text: &str) -> std::io::Result<()> {
        self.out.write_all(b"\n").await?;
        self.line(text).await?;
        self.prompt().await
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}
