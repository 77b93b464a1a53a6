use super::Engine;
use crate::rules::Neighbourhood;

impl Engine {
    /// Advances the board by one generation.
    pub fn update(&mut self) {
        let size = self.board.size();
        let mut counts = vec![vec![0u32; size]; size];
        for (x, column) in counts.iter_mut().enumerate() {
            for (y, count) in column.iter_mut().enumerate() {
                *count = self.count_alive_neighbours(x, y);
            }
        }

        let alive = self.rules.cell.saturating_sub(1);
        let survival = self.rules.survival;
        let birth = self.rules.birth;
        for (column, counts) in self.board.rows_mut().iter_mut().zip(&counts) {
            for (state, &count) in column.iter_mut().zip(counts) {
                if *state != 0 {
                    if !survival.contains(count) {
                        *state -= 1;
                    }
                } else if *state != alive && birth.contains(count) {
                    *state = alive;
                }
            }
        }
    }

    // A full Moore neighbourhood at the largest range holds more than u16::MAX cells.
    fn count_alive_neighbours(&self, x: usize, y: usize) -> u32 {
        let range = self.rules.range;
        let alive = self.rules.cell.saturating_sub(1);
        let last = self.board.size() - 1;
        let lower = |p: usize| p.saturating_sub(range);
        let upper = |p: usize| p.saturating_add(range).min(last);

        let mut count = 0;
        for nx in lower(x)..=upper(x) {
            for ny in lower(y)..=upper(y) {
                if (nx, ny) == (x, y) || self.board[nx][ny] != alive {
                    continue;
                }
                let within = match self.rules.neighbourhood {
                    Neighbourhood::Moore => true,
                    Neighbourhood::VonNeumann => nx.abs_diff(x) + ny.abs_diff(y) <= range,
                };
                if within {
                    count += 1;
                }
            }
        }
        count
    }
}
