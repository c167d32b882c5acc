//! Main application state and iced implementation

use std::sync::LazyLock;
use std::time::{Duration, Instant};

use chrono::Datelike;
use grantline_core::content::SiteContent;
use grantline_widgets::with_modal_overlay;
use iced::widget::{column, scrollable, stack, Id};
use iced::{time, window, Element, Length, Subscription, Task, Theme};

use super::message::Message;
use super::reveal::RevealView;
use super::sections;
use super::state::{DemoState, FaqState, LegalState, NavState, PageReveals};
use crate::config::SiteConfig;

/// Scrollable ID of the page (used for anchor navigation)
pub static PAGE_SCROLL_ID: LazyLock<Id> = LazyLock::new(Id::unique);

/// Redraw cadence while something on the page is animating
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// The landing page
pub struct SiteApp {
    pub(crate) config: SiteConfig,
    pub(crate) content: SiteContent,
    pub(crate) nav: NavState,
    pub(crate) demo: DemoState,
    pub(crate) faq: FaqState,
    pub(crate) legal: LegalState,
    pub(crate) reveals: PageReveals,
    /// Timestamp used to render reveal progress
    pub(crate) frame_now: Instant,
    pub(crate) copyright_year: i32,
}

impl SiteApp {
    /// Create the page; the returned task runs the page-load routine
    pub fn new(config: SiteConfig, content: SiteContent) -> (Self, Task<Message>) {
        let nav = NavState::new(config.window.size());
        let reveals = PageReveals::new(nav.layout(), &content);
        let demo = DemoState::new(config.transport);

        log::info!(
            "SiteApp: {} sections, {} reveal targets, demo track {:.0}s",
            grantline_core::SectionId::COUNT,
            reveals.tracker().len(),
            demo.config().duration_secs
        );

        let app = Self {
            config,
            content,
            nav,
            demo,
            faq: FaqState::default(),
            legal: LegalState::default(),
            reveals,
            frame_now: Instant::now(),
            copyright_year: chrono::Local::now().year(),
        };

        (app, Task::done(Message::PageLoaded))
    }

    pub fn title(&self) -> String {
        format!("{} | {}", self.content.company.name, self.content.company.tagline)
    }

    /// Update state based on message
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            // Page lifecycle
            Message::PageLoaded => self.handle_page_loaded(),
            Message::PageScrolled {
                offset_y,
                viewport_height,
            } => self.handle_page_scrolled(offset_y, viewport_height),
            Message::WindowResized(size) => self.handle_window_resized(size),
            Message::Frame(now) => self.handle_frame(now),

            // Navigation
            Message::Navigate(href) => self.handle_navigate(&href),
            Message::ScrollToTop => self.handle_scroll_to_top(),
            Message::ToggleMenu => {
                self.nav.toggle_menu();
                Task::none()
            }
            Message::ExternalLink(url) => {
                log::info!("External link requested: {}", url);
                Task::none()
            }

            // Demo player
            Message::TogglePlayback => self.handle_toggle_playback(),
            Message::TransportTick(generation) => self.handle_transport_tick(generation),

            // FAQ
            Message::ToggleFaq(index) => self.handle_toggle_faq(index),

            // Legal modals
            Message::OpenLegal(modal) => self.handle_open_legal(modal),
            Message::CloseLegal => self.handle_close_legal(),
        }
    }

    /// Render the page
    pub fn view(&self) -> Element<'_, Message> {
        let reveal = RevealView::new(self.reveals.tracker(), self.frame_now);

        let page = column![
            sections::hero::view(&self.content.hero, &self.reveals, reveal),
            sections::problem::view(&self.content.problem, &self.reveals, reveal),
            sections::demo::view(&self.content.demo, &self.demo, &self.reveals, reveal),
            sections::features::view(&self.content.features, &self.reveals, reveal),
            sections::pricing::view(&self.content.pricing, &self.reveals, reveal),
            sections::faq::view(&self.content.faq, &self.faq, &self.reveals, reveal),
            sections::footer::view(&self.content, self.copyright_year),
        ];

        let page = scrollable(page)
            .id(PAGE_SCROLL_ID.clone())
            .on_scroll(|viewport| Message::PageScrolled {
                offset_y: viewport.absolute_offset().y,
                viewport_height: viewport.bounds().height,
            })
            .width(Length::Fill)
            .height(Length::Fill);

        let base: Element<'_, Message> =
            stack![page, sections::navbar::view(&self.content, &self.nav)].into();

        match self.legal.current() {
            Some(modal) => with_modal_overlay(
                base,
                sections::legal::view(modal.document(&self.content), &self.content.company),
                Message::CloseLegal,
            ),
            None => base,
        }
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    /// Timer, frame and resize subscriptions
    ///
    /// The transport tick only exists while the demo is advancing, so
    /// pausing or completing drops the timer. Keying it by generation gives
    /// every play session a fresh timer.
    pub fn subscription(&self) -> Subscription<Message> {
        let mut subscriptions = vec![window::resize_events().map(|(_id, size)| Message::WindowResized(size))];

        if self.demo.is_playing() {
            subscriptions.push(
                time::every(self.demo.config().tick_interval())
                    .with(self.demo.generation())
                    .map(|(generation, _at)| Message::TransportTick(generation)),
            );
        }

        if self.demo.is_playing()
            || self.nav.is_smooth_scrolling()
            || self.reveals.is_animating(self.frame_now)
        {
            subscriptions.push(time::every(FRAME_INTERVAL).map(Message::Frame));
        }

        Subscription::batch(subscriptions)
    }
}
