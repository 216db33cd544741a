//! Deferred evaluation result.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use tokio::sync::oneshot;

use crate::checker::CheckerError;
use crate::status::Evaluation;

type Outcome = Result<Evaluation, CheckerError>;

/// Single-resolution future over one evaluation.
///
/// Returned by [`StrengthChecker::test_deferred`](crate::StrengthChecker::test_deferred)
/// already settled, so awaiting it never waits.
#[derive(Debug)]
pub struct Deferred {
    rx: oneshot::Receiver<Outcome>,
    taken: bool,
}

impl Deferred {
    pub(crate) fn settled(outcome: Outcome) -> Self {
        let (tx, rx) = oneshot::channel();
        // The receiver is alive, send cannot fail
        let _ = tx.send(outcome);
        Self { rx, taken: false }
    }

    /// Takes the result without awaiting.
    ///
    /// Returns `None` if it was already taken. Awaiting after a take
    /// yields [`CheckerError::AlreadyTaken`].
    pub fn try_take(&mut self) -> Option<Outcome> {
        if self.taken {
            return None;
        }
        self.taken = true;
        self.rx.try_recv().ok()
    }
}

impl Future for Deferred {
    type Output = Outcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if self.taken {
            return Poll::Ready(Err(CheckerError::AlreadyTaken));
        }
        let outcome = Pin::new(&mut self.rx).poll(cx);
        if outcome.is_ready() {
            self.taken = true;
        }
        outcome.map(|received| received.unwrap_or(Err(CheckerError::AlreadyTaken)))
    }
}

#[cfg(all(test, feature = "async"))]
mod async_tests {
    use crate::memory::MemoryMount;
    use crate::status::Status;
    use crate::{CheckerError, Settings, StrengthChecker};
    use secrecy::SecretString;

    fn secret(value: &str) -> SecretString {
        SecretString::new(value.to_string().into())
    }

    fn checker() -> StrengthChecker<MemoryMount> {
        StrengthChecker::new(Settings::default(), Some(MemoryMount::new()), None)
    }

    #[tokio::test]
    async fn test_deferred_resolves_passing() {
        let mut checker = checker();
        let evaluation = checker.test_deferred(Some(&secret("2%9ddiaA")), true).await.unwrap();
        assert_eq!(evaluation.settle(), Some(Ok("passing".to_string())));
    }

    #[tokio::test]
    async fn test_deferred_rejects_failing() {
        let mut checker = checker();
        let evaluation = checker.test_deferred(Some(&secret("foo")), true).await.unwrap();
        assert_eq!(evaluation.settle(), Some(Err("failing".to_string())));
    }

    #[tokio::test]
    async fn test_deferred_settles_on_empty_value() {
        let mut checker = checker();
        let evaluation = checker.test_deferred(Some(&secret("")), true).await.unwrap();
        assert_eq!(evaluation.status, Status::Untested);
        assert_eq!(evaluation.message, "untested");
    }

    #[tokio::test]
    async fn test_deferred_not_mounted() {
        let mut checker: StrengthChecker<MemoryMount> =
            StrengthChecker::new(Settings::default(), None, None);
        let outcome = checker.test_deferred(Some(&secret("foo")), true).await;
        assert_eq!(outcome, Err(CheckerError::NotMounted));
    }

    #[test]
    fn test_deferred_is_settled_on_return() {
        let mut checker = checker();
        let mut deferred = checker.test_deferred(Some(&secret("password")), true);

        let evaluation = deferred.try_take().expect("settled").unwrap();
        assert!(evaluation.is_failing());
        assert!(deferred.try_take().is_none());
    }

    #[tokio::test]
    async fn test_deferred_await_after_take() {
        let mut checker = checker();
        let mut deferred = checker.test_deferred(Some(&secret("foo")), true);

        assert!(deferred.try_take().is_some());
        assert_eq!((&mut deferred).await, Err(CheckerError::AlreadyTaken));
    }

    #[tokio::test]
    async fn test_deferred_take_after_await() {
        let mut checker = checker();
        let mut deferred = checker.test_deferred(Some(&secret("foo")), true);

        let outcome = (&mut deferred).await;
        assert!(outcome.unwrap().is_failing());
        assert!(deferred.try_take().is_none());
        assert_eq!((&mut deferred).await, Err(CheckerError::AlreadyTaken));
    }
}
