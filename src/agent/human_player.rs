//! Human player reading coordinate moves from a text stream.
//!
//! Each line is one answer: a ply such as `e2e4` or `e7e8n`, or `resign`.
//! A line that doesn't parse, or names a move the position doesn't allow, is
//! reported and the player is asked again. End of input counts as
//! resignation. Two players at the same terminal share one reader through
//! [`HumanPlayer::shared`].
//!
//! # Examples
//!
//! ```rust
//! use std::io::Cursor;
//! use chess_opponent::agent::{HumanPlayer, Player};
//! use chess_opponent::game_repr::Game;
//!
//! let game = Game::default();
//! let mut player = HumanPlayer::new(Cursor::new("e9e4\ne2e4\n"), Vec::new(), "Alice".into());
//! let ply = player.choose_move(game.game_state()).unwrap().unwrap();
//! assert_eq!(ply.to_string(), "e2e4");
//! ```

use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;

use crate::error::{ChessError, Result};
use crate::game_repr::{GameState, Move, Ply};

use super::player::Player;

pub struct HumanPlayer<R, W> {
    input: Rc<RefCell<R>>,
    output: W,
    name: String,
}

impl<R: BufRead, W: Write> HumanPlayer<R, W> {
    pub fn new(input: R, output: W, name: String) -> Self {
        Self::shared(Rc::new(RefCell::new(input)), output, name)
    }

    /// Player reading from an input other players may also read from
    pub fn shared(input: Rc<RefCell<R>>, output: W, name: String) -> Self {
        Self { input, output, name }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(&mut self, state: &GameState) {
        // Output is best effort; a closed terminal shows up as EOF on input
        let _ = write!(self.output, "{} ({:?}) > ", self.name, state.current_player);
        let _ = self.output.flush();
    }

    fn complain(&mut self, message: &str) {
        let _ = writeln!(self.output, "{}", message);
    }

    /// Is `ply` one of the legal plies in `state`? A promotion without an
    /// explicit piece matches the queen promotion.
    fn is_legal(state: &GameState, ply: Ply) -> bool {
        let wanted = Ply {
            promotion: ply.promotion.or_else(|| {
                let promotes = state
                    .board
                    .legal_moves(ply.from)
                    .iter()
                    .any(|m| m.to == ply.to && m.is_promotion);
                promotes.then_some(crate::game_repr::PieceType::Queen)
            }),
            ..ply
        };
        state.board.all_legal_plies(state.current_player).contains(&wanted)
    }
}

impl<R: BufRead, W: Write> Player for HumanPlayer<R, W> {
    fn choose_move(&mut self, state: &GameState) -> Result<Option<Ply>> {
        loop {
            self.prompt(state);
            let mut line = String::new();
            let read = self
                .input
                .borrow_mut()
                .read_line(&mut line)
                .map_err(|e| ChessError::InvalidNotation(e.to_string()))?;
            if read == 0 {
                return Ok(None);
            }

            let text = line.trim();
            if text.eq_ignore_ascii_case("resign") {
                return Ok(None);
            }
            match text.parse::<Ply>() {
                Ok(ply) if Self::is_legal(state, ply) => return Ok(Some(ply)),
                Ok(ply) => self.complain(&format!("{} is not legal here", ply)),
                Err(e) => self.complain(&e.to_string()),
            }
        }
    }

    fn opponent_moved(&mut self, mv: &Move) {
        let _ = writeln!(self.output, "opponent played {}", mv.notation);
    }

    fn name(&self) -> &str {
        &self.name
    }
}
