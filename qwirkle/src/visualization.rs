use crate::Board;

pub fn visualize_board(board: &Board) -> String {
    // Column indices above the box
    let mut header = String::from("    ");
    for col in 0..board.cols() {
        header += &format!("{:<3}", col);
    }
    let mut result = String::from(header.trim_end());

    // Draw the top of the box
    result += "\n   ╭";
    for _ in 0..board.cols() {
        result += "───";
    }
    result += "╮\n";

    for (row_idx, row) in board.grid().iter().enumerate() {
        result += &format!("{:>2} │", row_idx);
        for cell in row {
            match cell {
                Some(tile) => result += &format!("{} ", tile),
                None => result += "   ",
            }
        }
        result += "│\n";
    }

    // Draw the bottom of the box
    result += "   ╰";
    for _ in 0..board.cols() {
        result += "───";
    }
    result += "╯";
    result
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", visualize_board(self))
    }
}
