use tictactoe_engine::GameError;
use tictactoe_engine::tictactoe::{
    BOARD_CELLS, BOARD_SIDE, Board, MatchController, MatchState, Opponent, Outcome, Position,
    ScoreBoard, WinPattern,
};

pub const HELP_TEXT: &str = "\
Commands:
  1-9            place a mark (cells numbered like a phone keypad)
  r              restart, scores are kept
  n <opponent>   new match: human, easy, medium, hard
  s              reset scores
  h              show this help
  q              quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    Restart,
    NewMatch(Opponent),
    ResetScores,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Err("Type a cell number or 'h' for help".to_string());
    };

    if let Ok(number) = first.parse::<usize>() {
        if (1..=BOARD_CELLS).contains(&number) {
            return Ok(Command::Place(number - 1));
        }
        return Err(format!("Cell must be between 1 and {}", BOARD_CELLS));
    }

    match first.to_ascii_lowercase().as_str() {
        "r" | "restart" => Ok(Command::Restart),
        "s" | "scores" => Ok(Command::ResetScores),
        "h" | "help" | "?" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        "n" | "new" => {
            let opponent = words
                .next()
                .ok_or_else(|| "Usage: n <human|easy|medium|hard>".to_string())?;
            opponent.parse().map(Command::NewMatch)
        }
        other => Err(format!("Unknown command '{}'", other)),
    }
}

pub fn render_board(board: &Board, winning: Option<WinPattern>) -> String {
    let winning_cells = winning.map(|pattern| pattern.cells()).unwrap_or_default();
    let is_winning = |cell: usize| winning.is_some() && winning_cells.contains(&cell);

    let rows: Vec<String> = (0..BOARD_SIDE)
        .map(|row| {
            (0..BOARD_SIDE)
                .map(|column| {
                    let cell = row * BOARD_SIDE + column;
                    match board.mark_at(cell) {
                        Some(mark) if is_winning(cell) => format!("[{}]", mark),
                        Some(mark) => format!(" {} ", mark),
                        None => format!(" {} ", cell + 1),
                    }
                })
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect();

    rows.join("\n---+---+---\n")
}

pub fn mode_label(opponent: Opponent) -> String {
    match opponent {
        Opponent::Human => "Two Players".to_string(),
        Opponent::Computer(kind) => format!("Vs Computer ({})", kind.difficulty_label()),
    }
}

pub fn score_line(scores: &ScoreBoard) -> String {
    format!(
        "X : {}  O : {}  Draws : {}",
        scores.x_wins, scores.o_wins, scores.draws
    )
}

pub fn status_line(controller: &MatchController) -> String {
    match controller.state() {
        MatchState::AwaitingMove(mark) if controller.is_computer(mark) => {
            format!("Computer ({}) is thinking...", mark)
        }
        MatchState::AwaitingMove(mark) => format!("Player {}'s turn", mark),
        MatchState::Terminal(Outcome::Win { mark, pattern }) => format!(
            "Player {} wins! {} to {}",
            mark,
            describe_position(pattern.start()),
            describe_position(pattern.end())
        ),
        MatchState::Terminal(_) => "It's a draw!".to_string(),
    }
}

fn describe_position(position: Position) -> String {
    format!("(row {}, column {})", position.row + 1, position.column + 1)
}

pub fn describe_rejection(error: &GameError) -> String {
    if error.is_invalid_move() {
        format!("{}. Pick an empty cell from 1 to {}", error, BOARD_CELLS)
    } else {
        error.to_string()
    }
}

pub fn render_screen(controller: &MatchController) -> String {
    let winning = match controller.outcome() {
        Outcome::Win { pattern, .. } => Some(pattern),
        _ => None,
    };

    format!(
        "{}    {}\n\n{}\n\n{}",
        score_line(&controller.scores()),
        mode_label(controller.opponent()),
        render_board(controller.board(), winning),
        status_line(controller),
    )
}
