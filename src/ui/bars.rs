use ratatui::style::Color;

use super::surface::{translated, RectF, Surface};
use super::theme;
use crate::animation::easing::{divide_scale, sinify};
use crate::animation::chain::Node;
use crate::animation::BARS;

/// Paint the stacked bars for a node at progress `scale`.
///
/// The first half of the sine-eased progress widens every bar; the second
/// half walks the rows one after another into their new slots.
pub fn draw_positional_bar_swap<S: Surface + ?Sized>(
    surface: &mut S,
    scale: f32,
    w: f32,
    h: f32,
    color: Color,
) {
    let sf = sinify(scale);
    let sf1 = divide_scale(sf, 0, 2);
    let sf2 = divide_scale(sf, 1, 2);
    let h_gap = h / (2 * BARS + 1) as f32;
    let y_start = h_gap;
    let bar = RectF::new(0.0, 0.0, w * sf1, h_gap);

    let mut y = y_start;
    for j in 1..BARS {
        let sf2j = divide_scale(sf2, j, BARS - 1);
        y += 2.0 * h_gap * sf2j;
        let offset = y_start + 2.0 * h_gap * j as f32 - 2.0 * h_gap * sf2j;
        translated(&mut *surface, 0.0, offset, |s| s.fill_rect(bar, color));
    }
    translated(&mut *surface, 0.0, y, |s| s.fill_rect(bar, color));
}

/// Paint a node in its palette color across the whole surface
pub fn draw_node<S: Surface + ?Sized>(surface: &mut S, node: &Node) {
    let (w, h) = surface.size();
    let color = theme::palette_color(node.index);
    draw_positional_bar_swap(surface, node.state.scale, w, h, color);
}
