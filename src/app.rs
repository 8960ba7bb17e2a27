use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::animation::FrameRequest;
use crate::config::{key_matches, Bindings, Config};
use crate::error::BarSwapResult;
use crate::event::{Event, Scheduler};
use crate::view::BarSwapView;

// ── Application State ─────────────────────────────────────────────────

pub struct App {
    pub view: BarSwapView,
    pub keys: Bindings,
    pub mouse: bool,
    pub show_status_bar: bool,
    pub should_quit: bool,
    scheduler: Scheduler,
}

impl App {
    pub fn new(config: &Config, scheduler: Scheduler) -> BarSwapResult<Self> {
        Ok(Self {
            view: BarSwapView::new(config.tick_delay(), config.appearance.background),
            keys: config.keys.resolve()?,
            mouse: config.appearance.mouse,
            show_status_bar: config.appearance.show_status_bar,
            should_quit: false,
            scheduler,
        })
    }

    /// Dispatch one event from the loop
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Tap { column, row } => {
                if self.mouse {
                    debug!("tap at ({column}, {row})");
                    self.tap();
                }
            }
            Event::Frame => {
                self.scheduler.acknowledge();
                let request = self.view.on_frame();
                self.schedule(request);
            }
            // Next draw picks up the new size
            Event::Resize(w, h) => debug!("resized to {w}x{h}"),
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            _ if key_matches(self.keys.quit, &key) => self.should_quit = true,
            _ if key_matches(self.keys.tap, &key) => self.tap(),
            _ => {}
        }
    }

    fn tap(&mut self) {
        let request = self.view.handle_tap();
        self.schedule(request);
    }

    fn schedule(&self, request: Option<FrameRequest>) {
        if let Some(request) = request {
            self.scheduler.request(request);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn app() -> (App, mpsc::UnboundedReceiver<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let app = App::new(&Config::default(), Scheduler::new(tx)).unwrap();
        (app, rx)
    }

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[tokio::test]
    async fn tap_key_posts_first_frame() {
        let (mut app, mut rx) = app();
        app.handle_event(press(KeyCode::Char(' ')));
        assert!(app.view.is_running());
        assert!(matches!(rx.try_recv(), Ok(Event::Frame)));
    }

    #[tokio::test]
    async fn mouse_tap_respects_config() {
        let (mut app, mut rx) = app();
        app.mouse = false;
        app.handle_event(Event::Tap { column: 3, row: 4 });
        assert!(!app.view.is_running());
        assert!(rx.try_recv().is_err());

        app.mouse = true;
        app.handle_event(Event::Tap { column: 3, row: 4 });
        assert!(app.view.is_running());
    }

    #[tokio::test]
    async fn frames_drive_the_swap_to_completion() {
        let (mut app, mut rx) = app();
        app.handle_event(press(KeyCode::Char(' ')));
        assert!(matches!(rx.try_recv(), Ok(Event::Frame)));

        let mut frames = 0;
        while app.view.is_running() {
            app.handle_event(Event::Frame);
            frames += 1;
            assert!(frames < 1_000);
        }
        assert_eq!(app.view.snapshot().node, 1);
    }

    #[tokio::test]
    async fn quit_keys() {
        for event in [
            press(KeyCode::Char('q')),
            press(KeyCode::Esc),
            Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        ] {
            let (mut app, _rx) = app();
            app.handle_event(event);
            assert!(app.should_quit);
        }
    }

    #[tokio::test]
    async fn other_keys_are_ignored() {
        let (mut app, mut rx) = app();
        app.handle_event(press(KeyCode::Char('x')));
        app.handle_event(Event::Resize(80, 24));
        assert!(!app.should_quit);
        assert!(!app.view.is_running());
        assert!(rx.try_recv().is_err());
    }
}
