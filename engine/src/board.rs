use csv::{ReaderBuilder, Trim};
use rand::Rng;
use rand::distributions::Uniform;
use std::io;
use std::num::ParseIntError;
use std::ops::Index;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("could not read board file: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid cell value {value:?} on line {line}")]
    InvalidCell {
        line: u64,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("board has {rows} rows but row {line} has {columns} cells")]
    NotSquare {
        rows: usize,
        line: usize,
        columns: usize,
    },
    #[error("board file contains no cells")]
    Empty,
}

/// Square grid of cell states, indexed as `board[x][y]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Vec<u8>>,
}

impl Board {
    pub fn new(cells: Vec<Vec<u8>>) -> Board {
        Board { cells }
    }

    /// Fills a `size`×`size` board with states drawn uniformly from `0..cell`.
    pub fn random<R: Rng + ?Sized>(size: usize, cell: u8, rng: &mut R) -> Board {
        let states = Uniform::new(0, cell.max(1));
        let cells = (0..size)
            .map(|_| (0..size).map(|_| rng.sample(&states)).collect())
            .collect();
        Board { cells }
    }

    /// Parses CSV text whose first line is a header row.
    pub fn from_csv(text: &str) -> Result<Board, BoardError> {
        Board::from_reader(text.as_bytes())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Board, BoardError> {
        let reader = Board::reader_builder().from_path(path)?;
        Board::collect(reader)
    }

    fn from_reader<R: io::Read>(input: R) -> Result<Board, BoardError> {
        Board::collect(Board::reader_builder().from_reader(input))
    }

    // Row length is checked by `collect` so uneven rows report as NotSquare.
    fn reader_builder() -> ReaderBuilder {
        let mut builder = ReaderBuilder::new();
        builder.has_headers(true).flexible(true).trim(Trim::All);
        builder
    }

    fn collect<R: io::Read>(mut reader: csv::Reader<R>) -> Result<Board, BoardError> {
        let mut cells = Vec::new();
        for record in reader.records() {
            let record = record?;
            let line = record.position().map_or(0, |position| position.line());
            let row = record
                .iter()
                .map(|field| {
                    field.parse::<u8>().map_err(|source| BoardError::InvalidCell {
                        line,
                        value: field.to_string(),
                        source,
                    })
                })
                .collect::<Result<Vec<u8>, _>>()?;
            cells.push(row);
        }

        if cells.is_empty() {
            return Err(BoardError::Empty);
        }
        let rows = cells.len();
        if let Some((line, row)) = cells.iter().enumerate().find(|(_, row)| row.len() != rows) {
            return Err(BoardError::NotSquare {
                rows,
                line: line + 2,
                columns: row.len(),
            });
        }

        Ok(Board { cells })
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.cells
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Vec<u8>] {
        &mut self.cells
    }

    /// Highest cell state present, 0 for an empty or all-dead board.
    pub fn max_state(&self) -> u8 {
        self.cells
            .iter()
            .flat_map(|column| column.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

impl Index<usize> for Board {
    type Output = [u8];

    fn index(&self, x: usize) -> &[u8] {
        &self.cells[x]
    }
}
