mod helpers;
pub mod layout;
pub mod theme;
pub mod views;

use crate::app::QuizApp;
use crate::model::FeedState;
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Duration;

impl App for QuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Recoge el resultado de la petición antes de pintar
        self.poll_feed();
        if self.is_fetch_pending() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        top_panel(ctx);
        bottom_panel(ctx);

        match &self.feed {
            FeedState::Loading => views::loading::ui_loading(ctx),
            FeedState::Failed(message) => views::failed::ui_failed(ctx, message),
            FeedState::Ready(_) => views::questions::ui_questions(self, ctx),
        }
    }
}
