//! The game record kept by whoever hosts a match: who sits on which side, a
//! display name, whether the match has ended, and the [`Game`] itself.
//! Every action returns the [`Message`]s a host would send to the players.

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use crate::{color::Color, error::InvalidMove, game::Game, movement::Move};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Message {
    LoadGame(Game),
    Error(String),
    Notification(String),
}
impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Message::LoadGame(_) => write!(f, "game updated")?,
            Message::Error(message) => write!(f, "Error: {message}")?,
            Message::Notification(message) => write!(f, "{message}")?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordError {
    GameOver,
    Observer,
    SeatTaken(Color),
    NotYourTurn,
    InvalidMove(InvalidMove),
}
impl From<InvalidMove> for RecordError {
    fn from(value: InvalidMove) -> Self {
        RecordError::InvalidMove(value)
    }
}
impl Display for RecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::GameOver => write!(f, "the game is over")?,
            RecordError::Observer => write!(f, "observers cannot do that")?,
            RecordError::SeatTaken(color) => write!(f, "{color} is already taken")?,
            RecordError::NotYourTurn => write!(f, "not your turn")?,
            RecordError::InvalidMove(err) => write!(f, "{err}")?,
        }
        Ok(())
    }
}
impl Error for RecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RecordError::InvalidMove(err) => Some(err),
            _ => None,
        }
    }
}
impl From<RecordError> for Message {
    fn from(value: RecordError) -> Self {
        Message::Error(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameRecord {
    pub id: u32,
    pub white: Option<String>,
    pub black: Option<String>,
    pub name: String,
    pub game: Game,
    pub over: bool,
}
impl GameRecord {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        GameRecord {
            id,
            white: None,
            black: None,
            name: name.into(),
            game: Game::new(),
            over: false,
        }
    }
    fn seat(&self, color: Color) -> Option<&str> {
        match color {
            Color::White => self.white.as_deref(),
            Color::Black => self.black.as_deref(),
        }
    }
    fn seat_mut(&mut self, color: Color) -> &mut Option<String> {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }
    pub fn seat_of(&self, user: &str) -> Option<Color> {
        Color::ALL
            .into_iter()
            .find(|color| self.seat(*color) == Some(user))
    }
    /// Seat holder's name, or the color when the seat is open.
    fn display_name(&self, color: Color) -> String {
        self.seat(color)
            .map_or_else(|| color.to_string(), str::to_string)
    }
    pub fn join(&mut self, user: &str, color: Color) -> Result<Vec<Message>, RecordError> {
        match self.seat(color) {
            Some(holder) if holder != user => return Err(RecordError::SeatTaken(color)),
            _ => {}
        }
        *self.seat_mut(color) = Some(user.to_string());
        Ok(vec![
            Message::LoadGame(self.game),
            Message::Notification(format!("{user} joined the game as {color}")),
        ])
    }
    /// Lets `user` follow the game without a seat.
    pub fn observe(&self, user: &str) -> Vec<Message> {
        vec![
            Message::LoadGame(self.game),
            Message::Notification(format!("{user} joined the game as an observer")),
        ]
    }
    pub fn leave(&mut self, user: &str) -> Vec<Message> {
        if let Some(color) = self.seat_of(user) {
            *self.seat_mut(color) = None;
        }
        vec![Message::Notification(format!("{user} left the game"))]
    }
    pub fn resign(&mut self, user: &str) -> Result<Vec<Message>, RecordError> {
        if self.over {
            return Err(RecordError::GameOver);
        }
        if self.seat_of(user).is_none() {
            return Err(RecordError::Observer);
        }
        self.over = true;
        Ok(vec![Message::Notification(format!("{user} resigned"))])
    }
    /// Plays `movement` on behalf of `user` and reports what changed.
    pub fn play(&mut self, user: &str, movement: Move) -> Result<Vec<Message>, RecordError> {
        if self.over {
            return Err(RecordError::GameOver);
        }
        let color = self.game.turn();
        if self.seat(color) != Some(user) {
            return Err(match self.seat_of(user) {
                Some(_) => RecordError::NotYourTurn,
                None => RecordError::Observer,
            });
        }
        self.game.make_move(movement)?;

        let mut messages = vec![
            Message::LoadGame(self.game),
            Message::Notification(format!("{user} made a move: {movement}")),
        ];
        let opponent = !color;
        let name = self.display_name(opponent);
        if self.game.is_in_checkmate(opponent) {
            self.over = true;
            messages.push(Message::Notification(format!("{name} is in checkmate")));
        } else if self.game.is_in_check(opponent) {
            messages.push(Message::Notification(format!("{name} is in check")));
        } else if self.game.is_in_stalemate(opponent) {
            self.over = true;
            messages.push(Message::Notification("stalemate".to_string()));
        }
        Ok(messages)
    }
}
