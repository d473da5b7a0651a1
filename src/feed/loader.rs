use super::FeedError;
use crate::model::Question;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

type FeedResult = Result<Vec<Question>, FeedError>;

/// Petición en segundo plano cuyo resultado se recoge desde el bucle de la UI.
pub struct FeedLoader {
    rx: Receiver<FeedResult>,
    cancelled: Arc<AtomicBool>,
    finished: bool,
}

struct Delivery {
    tx: Sender<FeedResult>,
    cancelled: Arc<AtomicBool>,
}

impl Delivery {
    fn send(self, result: FeedResult) {
        if self.cancelled.load(Ordering::Acquire) {
            log::warn!("Dropping question feed result: loader was cancelled");
            return;
        }
        if self.tx.send(result).is_err() {
            log::debug!("Dropping question feed result: nobody is polling anymore");
        }
    }
}

impl FeedLoader {
    fn channel() -> (Self, Delivery) {
        let (tx, rx) = mpsc::channel();
        let cancelled = Arc::new(AtomicBool::new(false));
        let loader = Self {
            rx,
            cancelled: Arc::clone(&cancelled),
            finished: false,
        };
        (loader, Delivery { tx, cancelled })
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn start(base_url: &str) -> Self {
        let base_url = base_url.to_string();
        log::info!("Fetching questions from {}", super::questions_url(&base_url));
        Self::spawn_with(move || super::fetch_questions(&base_url))
    }

    #[cfg(target_arch = "wasm32")]
    pub fn start(base_url: &str) -> Self {
        let base_url = base_url.to_string();
        log::info!("Fetching questions from {}", super::questions_url(&base_url));
        let (loader, delivery) = Self::channel();
        wasm_bindgen_futures::spawn_local(async move {
            let result = super::fetch_questions(&base_url).await;
            delivery.send(result);
        });
        loader
    }

    /// Ejecuta `job` en un hilo aparte; se llama una sola vez.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn spawn_with<F>(job: F) -> Self
    where
        F: FnOnce() -> FeedResult + Send + 'static,
    {
        let (loader, delivery) = Self::channel();
        std::thread::spawn(move || {
            let result = job();
            delivery.send(result);
        });
        loader
    }

    /// Loader ya resuelto, sin hilo.
    pub fn ready(result: FeedResult) -> Self {
        let (loader, delivery) = Self::channel();
        delivery.send(result);
        loader
    }

    pub fn poll(&mut self) -> Option<FeedResult> {
        if self.finished || self.is_cancelled() {
            return None;
        }
        match self.rx.try_recv() {
            Ok(result) => {
                self.finished = true;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.finished = true;
                Some(Err(FeedError::Interrupted))
            }
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

impl Drop for FeedLoader {
    fn drop(&mut self) {
        self.cancel();
    }
}
