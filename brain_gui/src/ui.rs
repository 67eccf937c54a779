// ui.rs - egui front end: controls, circle grid, census

use eframe::egui;
use egui::{Color32, Rect, Vec2};
use std::time::{Duration, Instant};

use brians_brain::patterns;
use brians_brain::render::{self, Layout, Point};
use brians_brain::Cell;

use crate::{BrainApp, BrainInterface};

/// Space past the last circle, on the right and at the bottom.
const CANVAS_MARGIN: f32 = 20.0;

/// Painter size for a `rows x cols` grid.
pub fn canvas_size(layout: &Layout, rows: usize, cols: usize) -> Vec2 {
    Vec2::new(layout.width(cols) + CANVAS_MARGIN, layout.height(rows) + CANVAS_MARGIN)
}

impl eframe::App for BrainApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Auto-update if running
        if self.is_running && self.last_update.elapsed() >= self.update_interval {
            self.update_generation();
            self.last_update = Instant::now();
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Brian's Brain");

            // Controls
            ui.horizontal(|ui| {
                let button_text = if self.is_running { "⏸ Pause" } else { "▶ Start" };
                if ui.button(button_text).clicked() {
                    self.is_running = !self.is_running;
                    if self.is_running {
                        self.status.clear();
                        self.last_update = Instant::now();
                    }
                }

                if ui.add_enabled(!self.is_running, egui::Button::new("⏭ Step")).clicked() {
                    self.update_generation();
                }

                if ui.button("🎲 Random").clicked() {
                    self.is_running = false;
                    self.randomize();
                }

                ui.separator();

                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(patterns::PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in patterns::PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Apply Pattern").clicked() {
                    self.is_running = false;
                    self.apply_selected_pattern();
                }

                ui.separator();

                ui.label(format!("Generation: {}", self.engine.generation()));
                if !self.status.is_empty() {
                    ui.label(&self.status);
                }
            });

            ui.separator();

            // Speed and colours
            ui.horizontal(|ui| {
                ui.label("Speed:");
                let mut speed = 1000.0 / self.update_interval.as_millis().max(1) as f32;
                if ui.add(egui::Slider::new(&mut speed, 0.5..=60.0).suffix(" gen/sec")).changed() {
                    self.update_interval = Duration::from_millis((1000.0 / speed) as u64);
                }

                ui.separator();

                ui.label("Ready:");
                ui.color_edit_button_srgba(&mut self.colors[0]);
                ui.label("Firing:");
                ui.color_edit_button_srgba(&mut self.colors[1]);
                ui.label("Refractory:");
                ui.color_edit_button_srgba(&mut self.colors[2]);
            });

            ui.separator();

            let Ok(grid) = self.engine.current_generation() else {
                ui.label("No grid");
                return;
            };

            let layout = self.layout;
            let start_pos = ui.cursor().min;
            let total_size = canvas_size(&layout, grid.rows(), grid.cols());

            let (response, painter) = ui.allocate_painter(total_size, egui::Sense::hover());

            painter.rect_filled(
                Rect::from_min_size(start_pos, total_size),
                0.0,
                Color32::from_gray(24),
            );

            for point in render::points(grid) {
                let (cx, cy) = layout.centre(&point);
                painter.circle_filled(
                    start_pos + Vec2::new(cx, cy),
                    layout.radius,
                    self.color_of(point.state),
                );
            }

            // Hovered cell
            let hovered = response.hover_pos().and_then(|pos| {
                let offset = pos - start_pos;
                let col = ((offset.x - layout.left) / layout.pitch()).round();
                let row = ((offset.y - layout.top) / layout.pitch()).round();
                if row < 0.0 || col < 0.0 {
                    return None;
                }
                let (x, y) = (row as usize, col as usize);
                grid.get(x, y).map(|state| Point { x, y, state })
            });

            ui.separator();

            let census = grid.census();
            let total = census.total() as f32;
            ui.horizontal(|ui| {
                ui.label(format!("Ready: {}", census.ready));
                ui.label(format!("Firing: {} ({:.1}%)", census.firing, census.firing as f32 / total * 100.0));
                ui.label(format!("Refractory: {}", census.refractory));
                if let Some(point) = hovered {
                    ui.separator();
                    ui.label(format!("[{}][{}] {}", point.x, point.y, state_name(point.state)));
                }
            });
        });

        // Keep ticking while running
        if self.is_running {
            ctx.request_repaint_after(self.update_interval);
        }
    }
}

fn state_name(cell: Cell) -> &'static str {
    match cell {
        Cell::Ready      => "ready",
        Cell::Firing     => "firing",
        Cell::Refractory => "refractory",
    }
}
