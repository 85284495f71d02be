use super::model::{DialModel, Face};
use super::{CENTER_CIRCLE_FACTOR, FOCUS_MARK_RADIUS, ICON_INACTIVE_ALPHA, ICON_SIZE, RING_WIDTH};
use crate::gui::theme::ThemeColors;
use cairo::Context;
use gdk_pixbuf::Pixbuf;
use gdk4::prelude::*;
use palette::Srgba;
use rondo_dial::{ButtonSlot, Navigator, Point};
use std::f64::consts::PI;

struct SlotRenderer<'a> {
    face: &'a Face,
    slot: &'a ButtonSlot,
}

impl<'a> SlotRenderer<'a> {
    fn new(face: &'a Face, slot: &'a ButtonSlot) -> Self {
        Self { face, slot }
    }

    fn draw(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        self.draw_disc(cr, colors)?;
        self.draw_content(cr, colors)
    }

    fn draw_disc(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        let color = if self.slot.is_focused {
            colors.focused
        } else {
            colors.default
        };
        set_color(cr, color);
        cr.arc(
            self.slot.position.x,
            self.slot.position.y,
            self.slot.radius,
            0.0,
            2.0 * PI,
        );
        cr.fill()
    }

    fn draw_content(&self, cr: &Context, colors: &ThemeColors) -> Result<(), cairo::Error> {
        match &self.face.pixbuf {
            Some(pixbuf) => self.draw_icon(cr, pixbuf),
            None => self.draw_text(cr, colors, &self.face.label),
        }
    }

    fn draw_icon(&self, cr: &Context, pixbuf: &Pixbuf) -> Result<(), cairo::Error> {
        let icon_scale = (self.slot.radius * 2.0 * 0.7) / ICON_SIZE as f64;
        let (iw, ih) = (
            pixbuf.width() as f64 * icon_scale,
            pixbuf.height() as f64 * icon_scale,
        );

        cr.save()?;
        cr.translate(self.slot.position.x - iw / 2.0, self.slot.position.y - ih / 2.0);
        cr.scale(icon_scale, icon_scale);

        if self.slot.is_focused {
            cr.set_source_pixbuf(pixbuf, 0.0, 0.0);
            cr.paint()?;
        } else {
            cr.push_group();
            cr.set_source_pixbuf(pixbuf, 0.0, 0.0);
            cr.paint()?;
            cr.pop_group_to_source()?;
            cr.paint_with_alpha(ICON_INACTIVE_ALPHA)?;
        }
        cr.restore()
    }

    fn draw_text(&self, cr: &Context, colors: &ThemeColors, text: &str) -> Result<(), cairo::Error> {
        set_color(cr, colors.label);
        cr.select_font_face("Sans", cairo::FontSlant::Normal, cairo::FontWeight::Bold);
        cr.set_font_size((self.slot.radius * 0.4).clamp(9.0, 16.0));
        if let Ok(ext) = cr.text_extents(text) {
            cr.move_to(
                self.slot.position.x - ext.width() / 2.0 - ext.x_bearing(),
                self.slot.position.y + ext.height() / 2.0,
            );
            cr.show_text(text)?;
        }
        Ok(())
    }
}

fn set_color(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

/// Paints the dial around `center`: ring, hub, focus mark, then one disc per
/// button at its current orbit position.
pub fn draw<N: Navigator>(
    cr: &Context,
    model: &DialModel<N>,
    center: Point,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    let radius = model.controller.config().circle_radius;
    draw_ring(cr, center, radius, colors)?;
    draw_center_circle(cr, center, radius, colors)?;
    draw_focus_mark(cr, center, radius, colors)?;

    for slot in model.controller.slots(center) {
        if let Some(face) = model.faces.get(slot.index) {
            SlotRenderer::new(face, &slot).draw(cr, colors)?;
        }
    }
    Ok(())
}

fn draw_ring(
    cr: &Context,
    center: Point,
    radius: f64,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    set_color(cr, colors.ring);
    cr.set_line_width(RING_WIDTH);
    cr.arc(center.x, center.y, radius, 0.0, 2.0 * PI);
    cr.stroke()
}

fn draw_center_circle(
    cr: &Context,
    center: Point,
    radius: f64,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    set_color(cr, colors.center_circle);
    cr.arc(
        center.x,
        center.y,
        radius * CENTER_CIRCLE_FACTOR,
        0.0,
        2.0 * PI,
    );
    cr.fill()
}

// Marks the 12 o'clock position where the selected button comes to rest.
fn draw_focus_mark(
    cr: &Context,
    center: Point,
    radius: f64,
    colors: &ThemeColors,
) -> Result<(), cairo::Error> {
    set_color(cr, colors.focused);
    cr.arc(center.x, center.y - radius, FOCUS_MARK_RADIUS, 0.0, 2.0 * PI);
    cr.fill()
}
