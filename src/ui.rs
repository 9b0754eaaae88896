// src/ui.rs

use std::time::Instant;

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect, Sense, Stroke};
use rand::Rng;

use segment_intersect::{Board, Point, SearchOutcome};

/// A found intersection and the color it is circled in.
pub struct Marker {
    pub point: Point,
    pub color: Color32,
}

#[derive(Default)]
pub struct CanvasState {
    pub board: Board,
    pub markers: Vec<Marker>,
}

impl CanvasState {
    pub fn clear(&mut self) {
        self.board.clear();
        self.markers.clear();
    }

    fn find_intersections(&mut self, now: Instant) {
        self.markers.clear();
        if let SearchOutcome::Found(crossings) = self.board.find_intersections(now) {
            let mut rng = rand::thread_rng();
            self.markers = crossings
                .into_iter()
                .map(|crossing| Marker {
                    point: crossing.point,
                    color: Color32::from_rgb(rng.gen(), rng.gen(), rng.gen()),
                })
                .collect();
        }
    }
}

pub fn build_ui(ctx: &egui::Context, canvas: &mut CanvasState, now: Instant) {
    if canvas.board.tick(now) {
        canvas.markers.clear();
    }

    egui::TopBottomPanel::top("controls").show(ctx, |ui| {
        ui.horizontal(|ui| {
            if ui.button("Clear Canvas").clicked() {
                canvas.clear();
            }
            if ui.button("Find Intersections").clicked() {
                canvas.find_intersections(now);
            }
            ui.separator();
            ui.label(format!(
                "{} points, {} segments",
                canvas.board.points().len(),
                canvas.board.segments().len()
            ));
        });
    });

    egui::CentralPanel::default()
        .frame(egui::Frame::none().fill(Color32::WHITE))
        .show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::click());
            let rect = response.rect;
            if response.clicked() {
                if let Some(pos) = response.interact_pointer_pos() {
                    let local = pos - rect.min;
                    canvas.board.add_point(Point::new(local.x as f64, local.y as f64));
                }
            }
            paint_canvas(&painter, rect, canvas);
        });
}

fn to_screen(rect: Rect, point: Point) -> Pos2 {
    rect.min + egui::vec2(point.x as f32, point.y as f32)
}

fn paint_canvas(painter: &Painter, rect: Rect, canvas: &CanvasState) {
    let point_radius = (rect.width() / 150.0).max(5.0);
    for point in canvas.board.points() {
        painter.circle_filled(to_screen(rect, *point), point_radius, Color32::BLACK);
    }

    let line_stroke = Stroke::new(2.0, Color32::BLACK);
    for segment in canvas.board.segments() {
        painter.line_segment(
            [to_screen(rect, segment.point1()), to_screen(rect, segment.point2())],
            line_stroke,
        );
    }

    let marker_radius = (rect.width() / 130.0).max(8.0);
    for marker in &canvas.markers {
        painter.circle_stroke(
            to_screen(rect, marker.point),
            marker_radius,
            Stroke::new(2.0, marker.color),
        );
    }

    if let Some(message) = canvas.board.message() {
        painter.text(
            rect.min + egui::vec2(rect.width() / 2.75, rect.height() - 20.0),
            Align2::LEFT_BOTTOM,
            message,
            FontId::proportional(20.0),
            Color32::BLACK,
        );
    }
}
