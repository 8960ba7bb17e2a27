pub mod bars;
pub mod canvas;
pub mod status_bar;
pub mod surface;
pub mod theme;

use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

use crate::app::App;
use canvas::PixelCanvas;

/// Top-level draw function: bars fill the screen, status bar optional at the bottom
pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();
    let [bars_area, status_area] = if app.show_status_bar {
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(area)
    } else {
        [area, ratatui::layout::Rect::default()]
    };

    let mut canvas = PixelCanvas::new(bars_area.width, bars_area.height);
    app.view.render(&mut canvas);
    f.render_widget(&canvas, bars_area);

    if app.show_status_bar {
        status_bar::render(f, app, status_area);
    }
}
