// ui.rs - Widgets, canvas painting and the per-frame tick pump

use std::time::{Duration, Instant};

use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};

use crate::LifeApp;
use conway::PATTERNS;

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Fire whatever ticks came due since the last frame
        let now = Instant::now();
        for token in self.controller.scheduler_mut().take_due(now) {
            self.controller.tick(token);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Controls
            ui.horizontal(|ui| {
                ui.label("Fill rate:");
                ui.add(egui::TextEdit::singleline(&mut self.fill_rate_text).desired_width(50.0));

                if ui.button("Set random state").clicked() {
                    let result = self.controller.set_random_state_from_input(&self.fill_rate_text);
                    self.report(result);
                }
                if ui.button("Clear window").clicked() {
                    self.controller.clear_window();
                    self.status = None;
                }
                if ui.button("▶ Run animation").clicked() {
                    self.controller.begin_animation();
                }
                if ui.button("⏸ Stop animation").clicked() {
                    self.controller.stop_animation();
                }
                if ui.button("Take one step").clicked() {
                    self.controller.take_one_step();
                }
            });

            ui.horizontal(|ui| {
                // Pattern dropdown
                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });

                if ui.button("Seed pattern").clicked() {
                    let result = self.controller.seed_named_pattern(PATTERNS[self.selected_pattern].name);
                    self.report(result);
                }

                ui.separator();

                ui.label("Speed:");
                let mut speed = 1.0 / self.controller.tick_delay().as_secs_f32().max(0.001);
                let slider = egui::Slider::new(&mut speed, 1.0..=1000.0)
                    .logarithmic(true)
                    .suffix(" gen/sec");
                if ui.add(slider).changed() {
                    self.controller.set_tick_delay(Duration::from_secs_f32(1.0 / speed));
                }

                ui.separator();

                ui.label("Live:");
                ui.color_edit_button_srgba(&mut self.live_color);
                ui.label("Dead:");
                ui.color_edit_button_srgba(&mut self.dead_color);
            });

            ui.separator();
            self.paint_cells(ui);
            ui.separator();

            let grid = self.controller.grid();
            let total = grid.width() * grid.height();
            let live_cells = grid.live_count();
            ui.horizontal(|ui| {
                ui.label(format!("Generation: {}", self.controller.generation()));
                ui.label(format!("Live cells: {}", live_cells));
                ui.label(format!("Dead cells: {}", total - live_cells));
                ui.label(format!("Population: {:.1}%", live_cells as f32 / total as f32 * 100.0));
            });

            if let Some(status) = &self.status {
                ui.colored_label(Color32::RED, status);
            }
        });

        // Wake up again for the next scheduled tick
        if let Some(deadline) = self.controller.scheduler().next_deadline() {
            ctx.request_repaint_after(deadline.saturating_duration_since(Instant::now()));
        }
    }
}

impl LifeApp {
    fn paint_cells(&mut self, ui: &mut egui::Ui) {
        let cell_size = self.config.cell_size;
        let (width, height) = self.config.canvas_size();
        let (response, painter) = ui.allocate_painter(Vec2::new(width, height), egui::Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, self.dead_color);
        painter.rect_stroke(response.rect, 0.0, Stroke::new(2.0, Color32::from_gray(60)));

        // Only the cells the controller drew
        for (row, col) in self.controller.surface().cells() {
            let rect = Rect::from_min_size(
                origin + Vec2::new(col as f32 * cell_size, row as f32 * cell_size),
                Vec2::splat(cell_size),
            );
            painter.rect_filled(rect, 0.0, self.live_color);
        }

        // Clicking toggles a cell while the animation is stopped
        if !self.controller.is_running() && response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let offset = pos - origin;
                if let Some((row, col)) = self.config.cell_at(offset.x, offset.y) {
                    let result = self.controller.toggle_cell(row, col);
                    self.report(result);
                }
            }
        }
    }
}
