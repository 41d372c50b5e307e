//! Main application for the connect-K GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::board::{MAX_SIZE, MIN_RUN_LENGTH, MIN_SIZE};
use crate::config::max_run_length;
use crate::rules::Outcome;
use crate::{GameConfig, Player, Symbol};

use super::board_view::BoardView;
use super::session::GameSession;
use super::theme::*;

/// Main connect-K application
pub struct ConnectKApp {
    session: GameSession,
    board_view: BoardView,
    show_debug: bool,
    /// Settings being edited in the new game window, if it is open
    pending_config: Option<GameConfig>,
}

impl ConnectKApp {
    /// Create the app for a validated configuration
    pub fn new(_cc: &eframe::CreationContext<'_>, session: GameSession) -> Self {
        Self {
            session,
            board_view: BoardView::default(),
            show_debug: true,
            pending_config: None,
        }
    }

    fn start_new_game(&mut self, config: GameConfig) {
        match GameSession::new(&config) {
            Ok(session) => self.session = session,
            Err(err) => self.session.message = Some(err.to_string()),
        }
    }

    fn open_new_game_window(&mut self) {
        self.pending_config = Some(self.session.config());
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("Restart (N)").clicked() {
                        self.session.reset();
                        ui.close_menu();
                    }
                    if ui.button("New Game...").clicked() {
                        self.open_new_game_window();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo (U)").clicked() {
                        self.session.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let config = self.session.config();
                    ui.label(format!(
                        "{}x{}, {} in a row, you: {}",
                        config.size, config.size, config.run_length, config.human_symbol
                    ));
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                if let Some(line) = self.session.commentary() {
                    self.render_commentary_card(ui, line);
                    ui.add_space(10.0);
                }

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if self.session.is_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, self.session.outcome);
                }

                if let Some(msg) = self.session.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
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

    fn symbol_color(symbol: Symbol) -> egui::Color32 {
        match symbol {
            Symbol::X => X_MARK,
            Symbol::O => O_MARK,
        }
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        let config = self.session.config();
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("X").size(20.0).strong().color(X_MARK));
            ui.label(RichText::new("O").size(20.0).strong().color(O_MARK));
            ui.add_space(4.0);
            ui.label(RichText::new(format!("CONNECT {}", config.run_length)).size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new(format!("{0}x{0} board", config.size)).size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.session.current_turn;
            let symbol = self.session.state.symbol_of(turn);

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, PANEL_BG);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    symbol.as_char(),
                    egui::FontId::proportional(28.0),
                    Self::symbol_color(symbol),
                );

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(turn.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.session.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if self.session.is_over() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.session.is_human_turn() {
                        ("Your turn", TIMER_NORMAL)
                    } else {
                        ("Waiting for AI", TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render timer card
    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.session.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 1.0 {
                    TIMER_NORMAL
                } else if secs < 5.0 {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{:.2}s", secs)).size(28.0).strong().color(color));
            } else {
                let elapsed = self.session.move_timer.elapsed();
                ui.label(RichText::new(format!("{:.1}s", elapsed.as_secs_f32())).size(24.0).color(TEXT_PRIMARY));
            }

            if let Some(ai_time) = self.session.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32())).size(10.0).color(TEXT_SECONDARY));
            }
        });
    }

    fn render_commentary_card(&self, ui: &mut egui::Ui, line: &str) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI SAYS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.label(RichText::new(format!("\"{}\"", line)).size(12.0).italics().color(TEXT_PRIMARY));
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Undo").clicked() {
                    self.session.undo();
                }
                if ui.button("Restart").clicked() {
                    self.session.reset();
                }
                if ui.button("New Game...").clicked() {
                    self.open_new_game_window();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.session.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render debug card
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(result) = &self.session.last_ai_result {
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(format!("{:?}", result.search_type)).size(11.0).strong().color(TIMER_NORMAL));
                        ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                            ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                        });
                    });
                });

                if let Some(pos) = result.best_move {
                    ui.add_space(4.0);
                    ui.label(RichText::new(format!("-> {}", pos)).size(12.0).strong().color(WIN_HIGHLIGHT));
                }
            } else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
            }
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: Outcome) {
        let headline = match outcome {
            Outcome::Win(Player::Human) if self.session.resigned => "AI resigned. YOU WIN!".to_string(),
            Outcome::Win(Player::Human) => "YOU WIN!".to_string(),
            Outcome::Win(Player::Comp) => "COMPUTER WINS".to_string(),
            Outcome::Draw => "DRAW".to_string(),
            Outcome::InProgress => return,
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);

                    if ui.button(RichText::new("Play Again").size(14.0).strong()).clicked() {
                        self.session.reset();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the new game settings window
    fn render_new_game_window(&mut self, ctx: &Context) {
        let Some(mut config) = self.pending_config else {
            return;
        };
        let mut open = true;
        let mut start = false;

        egui::Window::new("New Game")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                egui::Grid::new("new_game_grid").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
                    ui.label("Board size");
                    ui.add(egui::Slider::new(&mut config.size, MIN_SIZE..=MAX_SIZE));
                    ui.end_row();

                    let max = max_run_length(config.size);
                    config.run_length = config.run_length.clamp(MIN_RUN_LENGTH, max);
                    ui.label("Run length");
                    ui.add_enabled(max > MIN_RUN_LENGTH, egui::Slider::new(&mut config.run_length, MIN_RUN_LENGTH..=max));
                    ui.end_row();

                    ui.label("Your symbol");
                    ui.horizontal(|ui| {
                        ui.radio_value(&mut config.human_symbol, Symbol::X, "X");
                        ui.radio_value(&mut config.human_symbol, Symbol::O, "O");
                    });
                    ui.end_row();

                    ui.label("First move");
                    ui.horizontal(|ui| {
                        ui.radio_value(&mut config.human_first, true, "You");
                        ui.radio_value(&mut config.human_first, false, "Computer");
                    });
                    ui.end_row();
                });

                ui.add_space(8.0);
                start = ui.button("Start").clicked();
            });

        if start {
            self.pending_config = None;
            self.start_new_game(config);
        } else if open {
            self.pending_config = Some(config);
        } else {
            self.pending_config = None;
        }
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let accepts_input =
                self.session.is_human_turn() && !self.session.is_over() && self.pending_config.is_none();
            let winning_line = self.session.winning_line();

            let clicked = self.board_view.show(
                ui,
                &self.session.state,
                self.session.last_move,
                winning_line,
                accepts_input,
            );

            if let Some(pos) = clicked {
                if let Err(msg) = self.session.try_place(pos) {
                    self.session.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        // Shortcuts are off while the settings window has focus
        if self.pending_config.is_some() {
            return;
        }

        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // U - Undo
            if i.key_pressed(egui::Key::U) {
                self.session.undo();
            }

            // N - New game with the same settings
            if i.key_pressed(egui::Key::N) {
                self.session.reset();
            }
        });
    }
}

impl eframe::App for ConnectKApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.session.check_ai_result();
        self.session.start_ai_thinking();

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
        self.render_new_game_window(ctx);

        // Keep the timers ticking
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
        if self.session.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
