use super::types::{BOARD_CELLS, Mark, Outcome, WIN_PATTERNS, WinPattern};

pub fn check_win(cells: &[Option<Mark>; BOARD_CELLS]) -> Option<Mark> {
    check_win_with_pattern(cells).map(|(mark, _)| mark)
}

pub fn check_win_with_pattern(cells: &[Option<Mark>; BOARD_CELLS]) -> Option<(Mark, WinPattern)> {
    for pattern in WIN_PATTERNS {
        let [a, b, c] = pattern.cells();
        let Some(mark) = cells[a] else {
            continue;
        };
        if cells[b] == Some(mark) && cells[c] == Some(mark) {
            return Some((mark, pattern));
        }
    }
    None
}

pub fn classify(cells: &[Option<Mark>; BOARD_CELLS]) -> Outcome {
    if let Some((mark, pattern)) = check_win_with_pattern(cells) {
        return Outcome::Win { mark, pattern };
    }

    if cells.iter().all(|cell| cell.is_some()) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
