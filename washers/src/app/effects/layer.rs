use super::{
    super::{
        message::Message,
        theme::{BANNER_TEXT, BORDER_WIDTH, CARD_RADIUS, Palette},
    },
    Effects,
    celebration::Shape,
};
use iced::{
    Color, Pixels, Point, Rectangle, Renderer, Size, Theme, Vector,
    alignment::{Horizontal, Vertical},
    border::Radius,
    mouse,
    widget::canvas::{self, Frame, Geometry, Path, Stroke, event},
};

/// Draws the wash banner and celebration on top of the scoreboard
pub struct EffectLayer<'a> {
    pub effects: &'a Effects,
    pub palette: Palette,
}

impl EffectLayer<'_> {
    fn banner_bounds(&self, window: Size) -> Option<Rectangle> {
        let wash = self.effects.wash()?;
        let elapsed = self.effects.now().saturating_duration_since(wash.started);
        Some(wash.animation.banner_bounds(elapsed, window))
    }

    fn draw_banner(&self, frame: &mut Frame) {
        let Some(bounds) = self.banner_bounds(frame.size()) else {
            return;
        };

        let banner = Path::rounded_rectangle(bounds.position(), bounds.size(), CARD_RADIUS);
        frame.fill(&banner, self.palette.accent);
        frame.stroke(
            &banner,
            Stroke::default()
                .with_color(self.palette.glow)
                .with_width(BORDER_WIDTH),
        );
        frame.fill_text(canvas::Text {
            content: "WASH!".to_string(),
            position: bounds.center(),
            color: self.palette.background,
            size: Pixels(BANNER_TEXT),
            horizontal_alignment: Horizontal::Center,
            vertical_alignment: Vertical::Center,
            ..Default::default()
        });
    }

    fn draw_celebration(&self, frame: &mut Frame) {
        let Some(active) = self.effects.celebration() else {
            return;
        };
        let elapsed = self.effects.now().saturating_duration_since(active.started);
        let window = frame.size();

        for particle in &active.celebration.particles {
            if let Some((center, radius, alpha)) = particle.state_at(elapsed, window) {
                frame.fill(
                    &Path::circle(center, radius),
                    Color {
                        a: alpha,
                        ..particle.color
                    },
                );
            }
        }

        for piece in &active.celebration.confetti {
            let Some((center, angle)) = piece.state_at(elapsed, window) else {
                continue;
            };
            let size = piece.size;
            frame.with_save(|frame| {
                frame.translate(Vector::new(center.x, center.y));
                frame.rotate(angle);
                let path = match piece.shape {
                    Shape::Circle => Path::circle(Point::ORIGIN, size / 2.0),
                    Shape::Rounded => Path::rounded_rectangle(
                        Point::new(-size / 2.0, -size / 4.0),
                        Size::new(size, size / 2.0),
                        Radius::from(size / 8.0),
                    ),
                    Shape::Square => Path::rectangle(
                        Point::new(-size / 2.0, -size / 2.0),
                        Size::new(size, size),
                    ),
                };
                frame.fill(&path, piece.color);
            });
        }
    }
}

impl canvas::Program<Message> for EffectLayer<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: canvas::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> (event::Status, Option<Message>) {
        if let canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            if let (Some(banner), Some(position)) =
                (self.banner_bounds(bounds.size()), cursor.position_in(bounds))
            {
                if banner.contains(position) {
                    return (event::Status::Captured, Some(Message::DismissWash));
                }
            }
        }
        (event::Status::Ignored, None)
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        self.draw_celebration(&mut frame);
        self.draw_banner(&mut frame);
        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        match (self.banner_bounds(bounds.size()), cursor.position_in(bounds)) {
            (Some(banner), Some(position)) if banner.contains(position) => {
                mouse::Interaction::Pointer
            }
            _ => mouse::Interaction::default(),
        }
    }
}
