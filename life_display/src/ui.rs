// ui.rs - eframe window acting as the frame host for the simulation

use eframe::egui;
use egui::{Align2, Color32, FontId, Key, Pos2, Rect, Vec2};
use std::time::{Duration, Instant};

use life_core::{DrawList, FrameController, FrameHost, InputEdges, LifeError, Rgb};

// Board units visible in the window, matching the 320x240 screen the board was laid out for
pub const SCREEN_WD: f32 = 320.0;
pub const SCREEN_HT: f32 = 240.0;

const QUAD_SIZE: f32 = 4.0;                           // Board units per drawn square
const MAX_CATCH_UP: usize = 8;                        // Due frames run per update at most

/// Collects input edges and the last presented draw list between updates.
#[derive(Default)]
struct WindowHost {
    due_after: usize,          // Frames still due after the one being run
    edges: InputEdges,
    presented: Option<DrawList>,
}

impl FrameHost for WindowHost {
    fn pending_frames(&self) -> usize {
        self.due_after
    }

    fn poll_input(&mut self) -> InputEdges {
        std::mem::take(&mut self.edges)
    }

    fn submit_frame(&mut self, frame: &DrawList) {
        match &mut self.presented {
            Some(list) => list.clone_from(frame),
            None => self.presented = Some(frame.clone()),
        }
    }
}

pub struct LifeApp {
    controller: FrameController,
    host: WindowHost,
    frame_interval: Duration,
    last_frame: Instant,
    scale: f32,
    debug_overlay: bool,
    halted: Option<LifeError>,
}

impl LifeApp {
    pub fn new(controller: FrameController, fps: u32, scale: f32, debug_overlay: bool) -> Self {
        Self {
            controller,
            host: WindowHost::default(),
            frame_interval: Duration::from_secs(1) / fps.max(1),
            last_frame: Instant::now(),
            scale,
            debug_overlay,
            halted: None,
        }
    }

    /// Number of fixed-rate frames that elapsed since the last update.
    fn due_frames(&mut self, now: Instant) -> usize {
        let mut due = 0;
        while now.duration_since(self.last_frame) >= self.frame_interval {
            if due == MAX_CATCH_UP {
                // Too far behind; drop the rest of the backlog
                self.last_frame = now;
                break;
            }
            self.last_frame += self.frame_interval;
            due += 1;
        }
        due
    }

    fn collect_input(&mut self, ctx: &egui::Context) {
        let (reset, toggle) = ctx.input(|i| {
            (
                i.key_pressed(Key::R) || i.key_pressed(Key::A),
                i.key_pressed(Key::C) || i.key_pressed(Key::B),
            )
        });
        // Edges wait for the next frame if none is due this update
        self.host.edges.reset |= reset;
        self.host.edges.toggle_color |= toggle;
    }

    fn run_due_frames(&mut self, ctx: &egui::Context) {
        let due = self.due_frames(Instant::now());
        for remaining in (0..due).rev() {
            self.host.due_after = remaining;
            if let Err(err) = self.controller.run_frame(&mut self.host) {
                log::error!("simulation halted: {err}");
                self.halted = Some(err);
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                break;
            }
        }
    }

    fn paint(&self, ui: &mut egui::Ui) {
        let Some(list) = &self.host.presented else { return };
        let rect = ui.max_rect();
        let painter = ui.painter();
        painter.rect_filled(rect, 0.0, to_color32(list.clear));

        let center = rect.center();
        let size = Vec2::splat(QUAD_SIZE * self.scale);
        for quad in list.quads() {
            // Board y points up
            let pos = Pos2::new(
                center.x + quad.x as f32 * self.scale,
                center.y - quad.y as f32 * self.scale,
            );
            painter.rect_filled(Rect::from_center_size(pos, size), 0.0, to_color32(quad.rgb));
        }

        if self.debug_overlay {
            let state = self.controller.state();
            let text = format!(
                "frame={}\nticks={}\nalive={}",
                state.frame,
                state.ticks,
                list.quads().len()
            );
            let ink = if list.clear == Rgb::BLACK { Color32::WHITE } else { Color32::BLACK };
            painter.text(
                rect.left_top() + Vec2::splat(8.0),
                Align2::LEFT_TOP,
                text,
                FontId::monospace(12.0),
                ink,
            );
        }
    }
}

fn to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.halted.is_none() {
            self.collect_input(ctx);
            self.run_due_frames(ctx);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| self.paint(ui));

        // Keep the fixed-rate loop going
        ctx.request_repaint();
    }
}
