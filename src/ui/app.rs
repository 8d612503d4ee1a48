//! Main application for the tic-tac-toe GUI

use std::time::Instant;

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::debug;

use super::board_view::BoardView;
use super::theme::*;
use crate::config::GameConfig;
use crate::game::{GameEvent, GameMode, Session};
use crate::rules::Outcome;
use crate::Cell;

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    config: GameConfig,
    session: Session,
    board_view: BoardView,
    /// Set while the finished board is held on screen
    pause_until: Option<Instant>,
    show_debug: bool,
}

impl TicTacToeApp {
    /// Create a new app with the given configuration
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self::with_config(config)
    }

    fn with_config(config: GameConfig) -> Self {
        Self {
            config,
            session: Session::new(&config),
            board_view: BoardView::default(),
            pause_until: None,
            show_debug: false,
        }
    }

    /// Hand events to the renderer and act on the driver's share
    fn dispatch(&mut self, events: Vec<GameEvent>) {
        for event in events {
            self.board_view.apply(&event);
            if let GameEvent::Pause { duration } = event {
                debug!("holding finished board for {duration:?}");
                self.pause_until = Some(Instant::now() + duration);
            }
        }
    }

    fn new_round(&mut self) {
        self.pause_until = None;
        let events = self.session.start_next_round();
        self.dispatch(events);
    }

    /// Start a fresh session in another mode
    fn switch_mode(&mut self, mode: GameMode) {
        let config = self.config.with_mode(mode);
        *self = Self {
            show_debug: self.show_debug,
            ..Self::with_config(config)
        };
    }

    fn is_paused(&self) -> bool {
        self.pause_until.is_some()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (vs Computer as O)").clicked() {
                        self.switch_mode(GameMode::SinglePlayer { ai: Cell::O });
                        ui.close_menu();
                    }
                    if ui.button("New Game (vs Computer as X)").clicked() {
                        self.switch_mode(GameMode::SinglePlayer { ai: Cell::X });
                        ui.close_menu();
                    }
                    if ui.button("New Game (Two Players)").clicked() {
                        self.switch_mode(GameMode::TwoPlayer);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("New Round (N)").clicked() {
                        self.new_round();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.session.mode() {
                        GameMode::SinglePlayer { ai } => {
                            format!("vs Computer - You: {}", ai.opponent().symbol())
                        }
                        GameMode::TwoPlayer => "Two Players".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.board_view.canvas().outcome() {
                    ui.add_space(10.0);
                    self.render_round_over_card(ui, outcome);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("X").size(22.0).strong().color(PLAYER_X));
            ui.label(RichText::new("O").size(22.0).strong().color(PLAYER_O));
            ui.add_space(4.0);
            ui.label(RichText::new("TIC-TAC-TOE").size(20.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.session.state().turn();

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(40.0, 40.0), egui::Sense::hover());
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    turn.symbol(),
                    egui::FontId::proportional(32.0),
                    mark_color(turn),
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.label(
                        RichText::new(format!("Round {}", self.session.round()))
                            .size(16.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if self.session.state().is_over() {
                        ("Round over", WIN_HIGHLIGHT)
                    } else if self.session.is_ai_turn() {
                        ("Computer to move", STATUS_THINKING)
                    } else {
                        ("Your turn", STATUS_READY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_score_card(&self, ui: &mut egui::Ui) {
        let scores = self.session.scores();
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            for mark in [Cell::X, Cell::O] {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(mark.symbol()).size(16.0).strong().color(mark_color(mark)));
                    ui.label(RichText::new(scores.wins(mark).to_string()).size(16.0).color(TEXT_PRIMARY));
                });
            }
            ui.label(RichText::new(format!("Draws: {}", scores.draws)).size(12.0).color(TEXT_SECONDARY));
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let btn_frame = Frame::new()
                .fill(egui::Color32::from_rgb(50, 53, 58))
                .corner_radius(CornerRadius::same(6))
                .inner_margin(8.0);

            btn_frame.show(ui, |ui| {
                let label = egui::Label::new(RichText::new("New Round").size(12.0).color(TEXT_PRIMARY))
                    .sense(egui::Sense::click());
                if ui.add(label).clicked() {
                    self.new_round();
                }
            });

            ui.add_space(8.0);
            let moves = 9 - self.session.state().moves_left();
            ui.label(RichText::new(format!("Move #{moves}")).size(11.0).color(TEXT_SECONDARY));
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(result) = self.session.last_ai_result() {
                ui.label(
                    RichText::new(format!("{:?}", result.search_type))
                        .size(11.0)
                        .strong()
                        .color(STATUS_READY),
                );
                ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                ui.label(
                    RichText::new(format!("{} nodes, {}ms", result.nodes, result.time_ms))
                        .size(10.0)
                        .color(TEXT_MUTED),
                );
                ui.label(
                    RichText::new(format!("-> {}", result.best_move))
                        .size(12.0)
                        .strong()
                        .color(WIN_HIGHLIGHT),
                );
            } else {
                ui.label(RichText::new("No computer move yet").size(10.0).color(TEXT_MUTED));
            }
        });
    }

    fn render_round_over_card(&self, ui: &mut egui::Ui, outcome: Outcome) {
        let (headline, color) = match outcome {
            Outcome::Win { winner, .. } => (format!("{} WINS!", winner.symbol()), mark_color(winner)),
            Outcome::Draw => ("DRAW".to_string(), TEXT_PRIMARY),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("ROUND OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(6.0);
                    ui.label(RichText::new(headline).size(20.0).strong().color(color));
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("{} opens next", self.session.next_first().symbol()))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                });
            });
    }

    /// Render the main board and take the human's click
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let accepting = !self.is_paused() && self.session.is_human_turn();
            let preview = accepting.then(|| self.session.state().turn());
            let input = self.board_view.show(ui, preview);

            if accepting {
                let events = self.session.poll_pointer(&input, input.width, input.height);
                self.dispatch(events);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (toggle_debug, new_round) =
            ctx.input(|i| (i.key_pressed(egui::Key::D), i.key_pressed(egui::Key::N)));

        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if new_round {
            self.new_round();
        }
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // Round-end pause, then a fresh board
        if let Some(deadline) = self.pause_until {
            let now = Instant::now();
            if now >= deadline {
                self.new_round();
            } else {
                ctx.request_repaint_after(deadline - now);
            }
        }

        // Computer move, computed inline once per frame
        if !self.is_paused() {
            let events = self.session.step();
            self.dispatch(events);
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.session.is_ai_turn() {
            ctx.request_repaint();
        }
    }
}
