use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// A single resettable timer. Each `schedule` call cancels the pending
/// delivery and starts the delay over, so only the last value scheduled
/// within one delay window reaches the receiver.
pub struct Debouncer<T> {
    delay: Duration,
    tx: mpsc::UnboundedSender<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration) -> (Self, mpsc::UnboundedReceiver<T>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (
            Self {
                delay,
                tx,
                pending: None,
            },
            rx,
        )
    }

    pub fn schedule(&mut self, value: T) {
        self.cancel();
        let tx = self.tx.clone();
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Receiver gone means the session ended.
            let _ = tx.send(value);
        }));
    }

    /// Whether a scheduled value has yet to be delivered.
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }

    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take()
            && !handle.is_finished()
        {
            handle.abort();
        }
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_only_last_value_delivered() {
        let (mut debouncer, mut rx) = Debouncer::new(Duration::from_millis(300));
        debouncer.schedule("e");
        debouncer.schedule("em");
        debouncer.schedule("emi");

        assert_eq!(rx.recv().await, Some("emi"));

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_values_outside_window_both_delivered() {
        let (mut debouncer, mut rx) = Debouncer::new(Duration::from_millis(300));
        debouncer.schedule(1);
        tokio::time::sleep(Duration::from_millis(400)).await;
        debouncer.schedule(2);

        assert_eq!(rx.recv().await, Some(1));
        assert_eq!(rx.recv().await, Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_restarts_delay() {
        let (mut debouncer, mut rx) = Debouncer::new(Duration::from_millis(300));
        debouncer.schedule(1);
        tokio::time::sleep(Duration::from_millis(200)).await;
        debouncer.schedule(2);
        tokio::time::sleep(Duration::from_millis(200)).await;
        // 400ms after the first schedule, but only 200ms after the reset.
        assert!(rx.try_recv().is_err());

        assert_eq!(rx.recv().await, Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel() {
        let (mut debouncer, mut rx) = Debouncer::new(Duration::from_millis(300));
        debouncer.schedule(1);
        assert!(debouncer.is_pending());
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(rx.try_recv().is_err());
    }
}
