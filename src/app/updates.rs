use super::*;

impl QuizApp {
    /// Recoge el resultado de la petición si ya llegó. Devuelve `true` si el estado cambió.
    pub fn poll_feed(&mut self) -> bool {
        if !self.feed.is_loading() {
            return false;
        }
        let Some(result) = self.loader.as_mut().and_then(|l| l.poll()) else {
            return false;
        };
        self.loader = None;

        self.feed = match result {
            Ok(questions) => {
                log::info!("Loaded {} questions", questions.len());
                FeedState::Ready(questions)
            }
            Err(err) => {
                log::error!("Fetch error: {err}");
                FeedState::Failed(err.user_message().to_string())
            }
        };
        true
    }

    pub fn is_fetch_pending(&self) -> bool {
        self.feed.is_loading() && self.loader.as_ref().is_some_and(|l| !l.is_cancelled())
    }

    /// Cancela la petición en curso; un resultado tardío se descarta.
    pub fn shutdown(&mut self) {
        if let Some(loader) = &self.loader {
            if self.feed.is_loading() {
                log::info!("Cancelling pending question fetch");
            }
            loader.cancel();
        }
    }
}

impl Drop for QuizApp {
    fn drop(&mut self) {
        self.shutdown();
    }
}
