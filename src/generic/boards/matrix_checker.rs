use crate::{Cell, Symbol};
use ndarray::{s, Array2, ArrayView1};

/// Checks if `symbol` fills a complete row, column or diagonal of the matrix.
///
/// Usage:
/// ```
/// use ndarray::array;
/// use tictactoe_web::{has_line, Cell, Symbol};
///
/// let x = Cell::Occupied { symbol: Symbol::X };
/// let o = Cell::Occupied { symbol: Symbol::O };
///
/// // O X X
/// // O O O <-- O owns the middle row
/// // X O X
/// let matrix = array![[o, x, x], [o, o, o], [x, o, x]];
///
/// assert!(has_line(&matrix, Symbol::O));
/// assert!(!has_line(&matrix, Symbol::X));
/// ```
pub fn has_line(matrix: &Array2<Cell>, symbol: Symbol) -> bool {
    let owned = |line: ArrayView1<'_, Cell>| line.iter().all(|cell| cell.symbol() == Some(symbol));

    owned(matrix.diag())
        || owned(matrix.slice(s![..;-1, ..]).diag())
        || matrix.rows().into_iter().any(owned)
        || matrix.columns().into_iter().any(owned)
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::array;

    const X: Cell = Cell::Occupied { symbol: Symbol::X };
    const O: Cell = Cell::Occupied { symbol: Symbol::O };
    const E: Cell = Cell::Empty;

    #[test]
    fn middle_row() {
        // O X X
        // O O O
        // X O X
        let matrix = array![[O, X, X], [O, O, O], [X, O, X]];
        assert!(has_line(&matrix, Symbol::O));
        assert!(!has_line(&matrix, Symbol::X));
    }

    #[test]
    fn every_line_is_detected() {
        let lines: [[(usize, usize); 3]; 8] = [
            [(0, 0), (0, 1), (0, 2)],
            [(1, 0), (1, 1), (1, 2)],
            [(2, 0), (2, 1), (2, 2)],
            [(0, 0), (1, 0), (2, 0)],
            [(0, 1), (1, 1), (2, 1)],
            [(0, 2), (1, 2), (2, 2)],
            [(0, 0), (1, 1), (2, 2)],
            [(0, 2), (1, 1), (2, 0)],
        ];
        for (line_index, line) in lines.iter().enumerate() {
            let mut matrix = Array2::from_elem((3, 3), E);
            for coordinates in line {
                matrix[*coordinates] = X;
            }
            assert!(
                has_line(&matrix, Symbol::X),
                "line {} was not detected",
                line_index
            );
            assert!(!has_line(&matrix, Symbol::O));
        }
    }

    #[test]
    fn full_matrix_without_line() {
        // X O X
        // O X O
        // O X O
        let matrix = array![[X, O, X], [O, X, O], [O, X, O]];
        assert!(!has_line(&matrix, Symbol::X));
        assert!(!has_line(&matrix, Symbol::O));
    }

    #[test]
    fn two_in_a_row_is_not_a_line() {
        let matrix = array![[X, X, E], [O, O, E], [E, E, E]];
        assert!(!has_line(&matrix, Symbol::X));
        assert!(!has_line(&matrix, Symbol::O));
    }

    #[test]
    fn empty_matrix() {
        let matrix = Array2::from_elem((3, 3), E);
        assert!(!has_line(&matrix, Symbol::X));
        assert!(!has_line(&matrix, Symbol::O));
    }
}
