use std::{
    future::Future,
    pin::Pin,
    sync::{Arc, Mutex, PoisonError},
    task::{Context, Poll, Waker},
};

#[derive(Debug, Default)]
pub(crate) struct WaitState {
    resolved: bool,
    wakers: Vec<Waker>,
}

impl WaitState {
    pub(crate) fn resolve(state: &Arc<Mutex<WaitState>>) {
        let mut s = state.lock().unwrap_or_else(PoisonError::into_inner);
        s.resolved = true;
        for waker in s.wakers.drain(..) {
            waker.wake();
        }
    }
}

/// Cooperative wait-for-completion handle. Resolved by the tick loop the
/// moment playback transitions out of `Playing`; never blocks. Usable as a
/// plain poll (`is_resolved`) or as a `Future` under any executor.
#[derive(Clone, Debug)]
pub struct WaitForCompletion {
    state: Arc<Mutex<WaitState>>,
}

impl WaitForCompletion {
    pub(crate) fn new(resolved: bool) -> Self {
        Self {
            state: Arc::new(Mutex::new(WaitState {
                resolved,
                wakers: Vec::new(),
            })),
        }
    }

    pub(crate) fn shared(&self) -> Arc<Mutex<WaitState>> {
        Arc::clone(&self.state)
    }

    pub fn is_resolved(&self) -> bool {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .resolved
    }
}

impl Future for WaitForCompletion {
    type Output = ();

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        let mut s = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        if s.resolved {
            return Poll::Ready(());
        }
        if !s.wakers.iter().any(|w| w.will_wake(cx.waker())) {
            s.wakers.push(cx.waker().clone());
        }
        Poll::Pending
    }
}
