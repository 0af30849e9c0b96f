use std::{
    error::Error,
    fmt::{self, Display, Formatter, Write as _},
    io::{self, BufRead, Write, stderr, stdin, stdout},
    str::FromStr,
};

use crate::{
    board_display::BoardDisplay,
    color::Color,
    fen::{Fen, ParseFenError},
    game::Game,
    movement::{Move, ParseMoveError},
    piece::{PieceKind, PieceKind::Pawn},
    position::{Position, pawn_promotion_row},
    record::{GameRecord, Message},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Input {
    Help,
    Flip,
    Restart,
    Quit,
    Import(Fen),
    ExportFen,
    Resign,
    Position(Position),
    Move(Move),
}
fn strip_prefix_token<'a>(src: &'a str, search: &str) -> Option<&'a str> {
    src.strip_prefix(search)
        .filter(|src| src.chars().next().is_none_or(<char>::is_whitespace))
        .map(<str>::trim_start)
}
impl FromStr for Input {
    type Err = ParseInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "help" => Ok(Input::Help),
            "flip" => Ok(Input::Flip),
            "restart" => Ok(Input::Restart),
            "quit" | "exit" => Ok(Input::Quit),
            "fen" => Ok(Input::ExportFen),
            "resign" => Ok(Input::Resign),
            s => {
                if let Some(s) = strip_prefix_token(s, "import") {
                    Ok(Input::Import(s.parse()?))
                } else if let Ok(position) = s.parse() {
                    Ok(Input::Position(position))
                } else {
                    Ok(Input::Move(s.parse()?))
                }
            }
        }
    }
}
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseInputError {
    Fen(ParseFenError),
    Move(ParseMoveError),
}
impl From<ParseFenError> for ParseInputError {
    fn from(value: ParseFenError) -> Self {
        ParseInputError::Fen(value)
    }
}
impl From<ParseMoveError> for ParseInputError {
    fn from(value: ParseMoveError) -> Self {
        ParseInputError::Move(value)
    }
}
impl Display for ParseInputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseInputError::Fen(err) => write!(f, "{err}")?,
            ParseInputError::Move(err) => write!(f, "{err}")?,
        }
        Ok(())
    }
}
impl Error for ParseInputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseInputError::Fen(err) => Some(err),
            ParseInputError::Move(err) => Some(err),
        }
    }
}
/// A pawn move onto the last row typed without a piece promotes to a queen.
fn with_default_promotion(game: &Game, movement: Move) -> Move {
    match game.board()[movement.start] {
        Some(piece)
            if piece.kind == Pawn
                && movement.promotion.is_none()
                && movement.end.row() == pawn_promotion_row(piece.color) =>
        {
            Move {
                promotion: Some(PieceKind::Queen),
                ..movement
            }
        }
        _ => movement,
    }
}
fn new_record() -> GameRecord {
    let mut record = GameRecord::new(1, "hot seat");
    record.white = Some(Color::White.to_string());
    record.black = Some(Color::Black.to_string());
    record
}
/// Hot-seat play on one terminal; whoever is to move types the next command.
#[allow(
    clippy::too_many_lines,
    reason = "the state and procedure are very clearly defined; no need to decompose these into separate functions"
)]
pub fn repl() -> io::Result<()> {
    let input = stdin().lock();
    let mut output = stdout().lock();
    let mut error = stderr().lock();

    let mut lines = input.lines();

    let mut record = new_record();
    let mut info = String::new();
    let mut messages: Vec<Message> = Vec::new();
    let mut origin = None;
    let mut highlighted = Vec::new();
    let mut update = true;
    let mut view = Color::White;
    let mut first_time = true;
    loop {
        if update {
            info.clear();
            for message in messages.drain(..) {
                if !matches!(message, Message::LoadGame(_)) {
                    writeln!(&mut info, "{message}").unwrap();
                }
            }
            if record.over {
                writeln!(&mut info, "the game is over").unwrap();
            } else if let Some(end_state) = record.game.end_state() {
                writeln!(&mut info, "{end_state}").unwrap();
            } else {
                writeln!(&mut info, "{} plays", record.game.turn()).unwrap();
            }
        }
        if first_time {
            writeln!(&mut info, "type `help` for instructions").unwrap();
            first_time = false;
        }
        update = false;
        writeln!(
            output,
            "{}",
            BoardDisplay {
                board: record.game.board(),
                view,
                show_coordinates: true,
                origin,
                highlighted: &highlighted,
                info: &info,
            },
        )?;
        loop {
            write!(output, "> ")?;
            output.flush()?;
            let Some(text) = lines.next() else {
                return Ok(());
            };
            let input = match text?.trim().parse() {
                Ok(input) => input,
                Err(err) => {
                    writeln!(error, "Error: {err}")?;
                    writeln!(error, "for available command, enter `help`")?;
                    continue;
                }
            };
            match input {
                Input::Help => {
                    writeln!(output, "flip           - flip the board")?;
                    writeln!(output, "restart        - reset to starting position")?;
                    writeln!(output, "quit           - quit the game")?;
                    writeln!(output, "import <fen>   - import a position")?;
                    writeln!(output, "fen            - export the position as fen")?;
                    writeln!(output, "resign         - resign for the side to move")?;
                    writeln!(output, "e2             - view valid moves")?;
                    writeln!(output, "e2e4           - play the move")?;
                    writeln!(output, "e7e8n          - move and promote")?;
                    continue;
                }
                Input::Flip => {
                    view = !view;
                }
                Input::Restart => {
                    record = new_record();
                    update = true;
                    origin = None;
                    highlighted.clear();
                }
                Input::Quit => return Ok(()),
                Input::Import(fen) => {
                    record.game = fen.into();
                    record.over = false;
                    update = true;
                    origin = None;
                    highlighted.clear();
                }
                Input::ExportFen => {
                    writeln!(output, "{}", Fen::from(&record.game))?;
                    continue;
                }
                Input::Resign => {
                    let user = record.game.turn().to_string();
                    match record.resign(&user) {
                        Ok(resigned) => messages = resigned,
                        Err(err) => {
                            writeln!(error, "Error: {err}")?;
                            continue;
                        }
                    }
                    update = true;
                }
                Input::Position(position) => {
                    let Some(valid_moves) = record.game.valid_moves(position) else {
                        writeln!(error, "Error: No piece found on {position}")?;
                        continue;
                    };
                    origin = Some(position);
                    highlighted.clear();
                    highlighted.extend(valid_moves.into_iter().map(|movement| movement.end));
                }
                Input::Move(movement) => {
                    let movement = with_default_promotion(&record.game, movement);
                    let user = record.game.turn().to_string();
                    match record.play(&user, movement) {
                        Ok(played) => messages = played,
                        Err(err) => {
                            writeln!(error, "Error: {err}")?;
                            continue;
                        }
                    }
                    origin = Some(movement.start);
                    highlighted.clear();
                    highlighted.push(movement.end);
                    update = true;
                }
            }
            break;
        }
    }
}
