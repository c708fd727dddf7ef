//! Interactive particle background built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the particle field, the
//! headline typing effect and the stat counters, and implements
//! [`eframe::App`] to drive and draw them.

use crate::surface::{PainterSurface, to_surface};
use eframe::App;
use field_core::{
    config::{FieldConfig, LinkMode, SceneConfig},
    counter::CounterAnimation,
    frame_loop::FrameLoop,
    simulator::ParticleSimulator,
    surface::Surface,
    typing::TypingEffect,
};
use log::{error, warn};
use rand::{SeedableRng, rngs::StdRng};

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(10, 10, 15);

/// Main application state for the viewer.
///
/// The particle simulator needs the size of its surface, which is only
/// known once the central panel has been laid out, so it is created on the
/// first frame and re-created by "Reset".
///
/// ### Fields
/// - `scene` - Scene configuration; the field part is edited live.
/// - `sim` - Particle field, `None` until the first frame.
/// - `frame_loop` - Drives `sim`; once stopped no further frames are drawn.
/// - `typing` - Headline effect, `None` if the scene has no phrases.
/// - `counters` - Labelled count-up animations, started on first display.
/// - `rng` - Source for particle placement.
pub struct Viewer {
    scene: SceneConfig,
    sim: Option<ParticleSimulator>,
    frame_loop: FrameLoop,
    typing: Option<TypingEffect>,
    counters: Vec<(String, CounterAnimation)>,
    rng: StdRng,
}

impl Viewer {
    pub fn new(scene: SceneConfig, seed: Option<u64>) -> Self {
        let typing = match TypingEffect::new(scene.typing.clone()) {
            Ok(t) => Some(t),
            Err(err) => {
                warn!("headline disabled: {err}");
                None
            }
        };
        let counters = scene
            .counters
            .iter()
            .map(|c| (c.label.clone(), CounterAnimation::from_config(c)))
            .collect();
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Self {
            scene,
            sim: None,
            frame_loop: FrameLoop::new(),
            typing,
            counters,
            rng,
        }
    }

    /// Creates the simulator on first use and forwards size changes.
    fn sync_surface(&mut self, surface: &impl Surface) {
        match &mut self.sim {
            Some(sim) => {
                if surface.size() != Some(sim.bounds()) {
                    if let Err(err) = sim.on_resize(surface) {
                        warn!("ignoring resize: {err}");
                    }
                }
            }
            None => match ParticleSimulator::new(surface, self.scene.field, &mut self.rng) {
                Ok(sim) => self.sim = Some(sim),
                Err(err) => error!("cannot start particle field: {err}"),
            },
        }
    }

    /// Replaces the particle pool with a fresh one from the current config.
    fn reset(&mut self) {
        self.sim = None;
        self.frame_loop = FrameLoop::new();
    }

    /// Advances the text effects by `dt` seconds.
    fn update_text(&mut self, dt: f64) {
        if let Some(typing) = &mut self.typing {
            typing.update(dt);
        }
        for (_, counter) in &mut self.counters {
            counter.update(dt);
        }
    }

    fn text_animating(&self) -> bool {
        self.typing.as_ref().is_some_and(|t| !t.is_done())
            || self.counters.iter().any(|(_, c)| !c.is_finished())
    }

    fn set_field_config(&mut self, cfg: FieldConfig) {
        self.scene.field = cfg;
        if let Some(sim) = &mut self.sim {
            sim.set_config(cfg);
        }
    }

    /// Helper to draw a labeled `f32` [`egui::DragValue`].
    fn labeled_drag_f32(
        ui: &mut egui::Ui,
        label: &str,
        value: &mut f32,
        range: std::ops::RangeInclusive<f32>,
        speed: f64,
    ) {
        ui.horizontal(|ui| {
            ui.label(label);
            ui.add(egui::DragValue::new(value).range(range).speed(speed));
        });
    }

    /// Builds the bottom status bar (frames, particles, links, pointer).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let stats = self.frame_loop.last_stats();
                ui.label(format!("frames = {}", self.frame_loop.frames()));
                ui.label(format!("links = {}", stats.links));
                ui.label(format!("pulled = {}", stats.pulled));
                if let Some(sim) = &self.sim {
                    ui.separator();
                    ui.label(format!("particles = {}", sim.particles().len()));
                    if let Some(p) = sim.pointer() {
                        ui.label(format!("pointer = ({:.0}, {:.0})", p.x, p.y));
                    }
                }
                if !self.frame_loop.is_running() {
                    ui.colored_label(egui::Color32::RED, "stopped");
                }
            });
        });
    }

    /// Builds the right-hand panel for the live field tunables.
    fn ui_config_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::right("config_panel")
            .resizable(true)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.heading("Field");
                let mut cfg = self.scene.field;

                ui.separator();
                ui.label("Interaction");
                Self::labeled_drag_f32(
                    ui,
                    "proximity_radius:",
                    &mut cfg.proximity_radius,
                    1.0..=400.0,
                    1.0,
                );
                Self::labeled_drag_f32(
                    ui,
                    "pointer_strength:",
                    &mut cfg.pointer_strength,
                    -0.1..=0.1,
                    0.001,
                );

                ui.separator();
                ui.label("Links");
                Self::labeled_drag_f32(ui, "link_alpha:", &mut cfg.link_alpha, 0.0..=1.0, 0.01);
                Self::labeled_drag_f32(ui, "link_width:", &mut cfg.link_width, 0.1..=5.0, 0.05);
                ui.horizontal(|ui| {
                    ui.selectable_value(&mut cfg.link_mode, LinkMode::UniquePairs, "Unique");
                    ui.selectable_value(&mut cfg.link_mode, LinkMode::AllPairs, "All pairs");
                });

                if cfg != self.scene.field {
                    self.set_field_config(cfg);
                }

                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("Reset field").clicked() {
                        self.reset();
                    }
                    if ui.button("Default cfg").clicked() {
                        self.set_field_config(FieldConfig::default());
                    }
                });
            });
    }

    /// Builds the central panel where the particle field is drawn.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new())
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;
                let painter = ui.painter_at(rect);
                let mut surface = PainterSurface::new(&painter, rect, BACKGROUND);

                self.sync_surface(&surface);

                let Some(sim) = &mut self.sim else {
                    return;
                };
                if let Some(pos) = ctx.input(|i| i.pointer.latest_pos()) {
                    let p = to_surface(pos, rect);
                    sim.set_pointer(p.x, p.y);
                }
                if self.frame_loop.tick(sim, &mut surface) {
                    ctx.request_repaint();
                }
            });
    }

    /// Draws the typed headline and counters over the field.
    fn ui_hero(&mut self, ctx: &egui::Context) {
        egui::Area::new("hero".into())
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .interactable(false)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    if let Some(typing) = &self.typing {
                        ui.label(
                            egui::RichText::new(format!("{}|", typing.visible_text()))
                                .size(32.0)
                                .color(egui::Color32::WHITE),
                        );
                    }
                    ui.add_space(12.0);
                    ui.horizontal(|ui| {
                        for (label, counter) in &mut self.counters {
                            counter.start();
                            ui.vertical(|ui| {
                                ui.label(
                                    egui::RichText::new(counter.value().to_string())
                                        .size(24.0)
                                        .color(egui::Color32::from_rgb(6, 182, 212)),
                                );
                                ui.label(label.as_str());
                            });
                            ui.add_space(16.0);
                        }
                    });
                });
            });
    }
}

impl App for Viewer {
    /// eframe callback that advances the text effects and builds all panels.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dt = f64::from(ctx.input(|i| i.stable_dt));
        self.update_text(dt);

        self.ui_status_bar(ctx);
        self.ui_config_panel(ctx);
        self.ui_central_panel(ctx);
        self.ui_hero(ctx);

        if self.text_animating() {
            ctx.request_repaint();
        }
    }
}
