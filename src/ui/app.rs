//! Main application for the checkers GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::{BoardConfig, Side};
use super::board_view::BoardView;
use super::game_state::{GameResult, GameState, WinType};
use super::theme::*;

/// Main checkers application
pub struct CheckersApp {
    state: GameState,
    board_view: BoardView,
}

impl CheckersApp {
    /// Create the app around an already set up session
    pub fn new(state: GameState) -> Self {
        Self {
            state,
            board_view: BoardView::default(),
        }
    }

    /// Replace the session with a fresh game on `config`
    fn new_game(&mut self, config: BoardConfig) {
        match GameState::new(config) {
            Ok(state) => self.state = state,
            Err(err) => self.state.message = Some(err.to_string()),
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (8x8)").clicked() {
                        self.new_game(BoardConfig::english());
                        ui.close_menu();
                    }
                    if ui.button("New Game (10x10)").clicked() {
                        self.new_game(BoardConfig::international());
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Restart").clicked() {
                        self.new_game(self.state.board.config());
                        ui.close_menu();
                    }
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let size = self.state.board.size();
                    ui.label(format!("{size}x{size} - Hotseat"));
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new("CHECKERS").size(22.0).strong().color(TEXT_PRIMARY));
                });
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_captures_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if let Some(result) = self.state.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &result);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
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

    fn side_fill(side: Side) -> egui::Color32 {
        match side {
            Side::Black => BLACK_PIECE,
            Side::White => WHITE_PIECE,
        }
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let side = self.state.current_turn;
            let fill = Self::side_fill(side);

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(40.0, 40.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 18.0, fill);

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(2.0);
                    ui.label(RichText::new(side.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.game_over.is_some() {
                        ("Game over", WIN_HIGHLIGHT)
                    } else if self.state.selected.is_some() {
                        ("Pick a destination", TEXT_SECONDARY)
                    } else {
                        ("Pick a piece", TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render captures card
    fn render_captures_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("CAPTURED").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let board = &self.state.board;
            for side in [Side::Black, Side::White] {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(side.name()).size(13.0).color(TEXT_PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let text = format!("{} lost / {} left", board.captured(side), board.piece_count(side));
                        ui.label(RichText::new(text).size(12.0).color(TEXT_SECONDARY));
                    });
                });
            }
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("New Game (N)").clicked() {
                    self.new_game(self.state.board.config());
                }
                if ui.button("Deselect (Esc)").clicked() {
                    self.state.deselect();
                }
            });

            ui.add_space(8.0);
            ui.label(RichText::new(format!("Move #{}", self.state.move_count)).size(11.0).color(TEXT_SECONDARY));
        });
    }

    /// Render game over card
    fn render_game_over_card(&self, ui: &mut egui::Ui, result: &GameResult) {
        let reason = match result.win_type {
            WinType::AllCaptured => "all pieces captured",
            WinType::Blocked => "no moves left",
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(format!("{} WINS!", result.winner.name().to_uppercase())).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(format!("by {reason}")).size(11.0).color(TEXT_SECONDARY));
                });
            });
    }

    /// Render status message card
    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let last_move = self.state.last_move.map(|m| (m.from, m.to));

            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                self.state.selected,
                last_move,
                self.state.game_over.is_some(),
            );

            if let Some(pos) = clicked {
                if let Err(err) = self.state.click(pos) {
                    log::debug!("click at {pos} refused: {err}");
                    self.state.message = Some(err.to_string());
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (new_game, deselect) =
            ctx.input(|i| (i.key_pressed(egui::Key::N), i.key_pressed(egui::Key::Escape)));

        if new_game {
            self.new_game(self.state.board.config());
        }
        if deselect {
            self.state.deselect();
        }
    }
}

impl eframe::App for CheckersApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
