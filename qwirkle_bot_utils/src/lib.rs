use qwirkle::{Board, PlayTurnResponse, Request, Tile};
use tracing::debug;

/// A trait to simplify writing bots.
pub trait Bot {
    /// Chooses the tiles to place.
    ///
    /// The board is built from the request's grid, and the positions of the
    /// response must refer to that grid.
    fn play_turn(&mut self, hand: Vec<Tile>, board: Board) -> PlayTurnResponse;

    /// Answers a single request. Returns `None` if the bot should shut down.
    fn respond(&mut self, req: Request) -> anyhow::Result<Option<PlayTurnResponse>> {
        match req {
            Request::PlayTurn { hand, grid } => {
                let board = Board::from_grid(grid)?;
                debug!("Playing a turn with {} tiles on\n{}", hand.len(), board);
                Ok(Some(self.play_turn(hand, board)))
            }
            Request::Bye => Ok(None),
        }
    }

    fn run(&mut self) -> anyhow::Result<()> {
        // Communication happens through stdin/stdout.
        // Stderr can be used for logging.
        let mut stdin = std::io::stdin().lock();
        let mut stdout = std::io::stdout().lock();
        let mut buf = String::new();

        loop {
            // Read the next line into buf
            buf.clear(); // because stdin.read_line() appends to the buffer
            use std::io::BufRead;
            let num_bytes_read = stdin.read_line(&mut buf)?;
            if num_bytes_read == 0 {
                // 0 bytes read means EOF - whoever sent the requests has exited.
                break Ok(());
            }

            let req = serde_json::from_str::<Request>(buf.trim_end())?;
            match self.respond(req)? {
                Some(response) => serde_json::to_writer(&mut stdout, &response)?,
                None => break Ok(()),
            }
            use std::io::Write;
            writeln!(stdout)?;
            stdout.flush()?;
        }
    }
}
