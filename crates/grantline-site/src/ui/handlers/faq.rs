//! FAQ accordion handler

use iced::Task;

use super::super::app::SiteApp;
use super::super::message::Message;

impl SiteApp {
    pub fn handle_toggle_faq(&mut self, index: usize) -> Task<Message> {
        if index < self.content.faq.entries.len() {
            self.faq.toggle(index);
        } else {
            log::warn!("FAQ: no entry at index {}", index);
        }
        Task::none()
    }
}
