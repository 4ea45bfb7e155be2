use std::sync::Arc;

use tokio::sync::watch;

/// Owner side of a cancellation signal.
///
/// The server holds one source for its whole lifetime and fires it on shutdown;
/// every backend call receives a [`CancelToken`] taken from it.
#[derive(Clone, Debug)]
pub struct CancelSource {
    tx: Arc<watch::Sender<bool>>,
}

impl CancelSource {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn token(&self) -> CancelToken {
        CancelToken { rx: self.tx.subscribe() }
    }

    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }
}

impl Default for CancelSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving side handed to each call.
#[derive(Clone, Debug)]
pub struct CancelToken {
    rx: watch::Receiver<bool>,
}

impl CancelToken {
    /// A token that never fires. Used by one-shot CLI commands.
    pub fn never() -> Self {
        let (tx, rx) = watch::channel(false);
        drop(tx);
        Self { rx }
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once the source fires. Pends forever if the source is dropped
    /// without firing.
    pub async fn cancelled(&self) {
        let mut rx = self.rx.clone();
        if rx.wait_for(|cancelled| *cancelled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn token_resolves_after_cancel() {
        let source = CancelSource::new();
        let token = source.token();
        assert!(!token.is_cancelled());
        source.cancel();
        tokio::time::timeout(Duration::from_secs(1), token.cancelled())
            .await
            .expect("token should resolve once cancelled");
        assert!(token.is_cancelled());
    }

    #[tokio::test]
    async fn tokens_taken_after_cancel_are_already_cancelled() {
        let source = CancelSource::new();
        source.cancel();
        assert!(source.token().is_cancelled());
    }

    #[tokio::test]
    async fn never_token_stays_pending() {
        let token = CancelToken::never();
        let waited = tokio::time::timeout(Duration::from_millis(50), token.cancelled()).await;
        assert!(waited.is_err());
        assert!(!token.is_cancelled());
    }
}
