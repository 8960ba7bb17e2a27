use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::theme;
use crate::app::App;
use crate::view::ViewSnapshot;

/// Render the bottom status bar: keybinding hints plus the active node
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = hints(app);
    spans.extend(node_status(&app.view.snapshot()));

    let para = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(para, area);
}

fn hints(app: &App) -> Vec<Span<'static>> {
    let mut spans = vec![key(app.keys.tap_label.clone()), desc("Swap ")];
    if app.mouse {
        spans.push(key("Click".to_string()));
        spans.push(desc("Swap "));
    }
    spans.push(key(app.keys.quit_label.clone()));
    spans.push(desc("Quit  "));
    spans
}

fn node_status(snapshot: &ViewSnapshot) -> Vec<Span<'static>> {
    let heading = if snapshot.forward { "→" } else { "←" };
    let activity = if snapshot.running { "swapping" } else { "idle" };
    vec![
        Span::styled("■ ", theme::style_swatch(snapshot.node)),
        Span::styled(
            format!("node {} {heading} ", snapshot.node),
            theme::style_default(),
        ),
        Span::styled(
            format!("{:>3.0}% {activity}", snapshot.scale * 100.0),
            theme::style_dim(),
        ),
    ]
}

fn key(k: String) -> Span<'static> {
    Span::styled(format!(" [{k}] "), theme::style_key_hint())
}

fn desc(d: &'static str) -> Span<'static> {
    Span::styled(d, theme::style_key_desc())
}
