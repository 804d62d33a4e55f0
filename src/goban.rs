//! The Go board: stone placement, group bookkeeping, liberties and captures.
//!
//! The board is a row-major array of `size * size` optional stones, indexed
//! `row * size + col`. Every stone carries the [`GroupId`] of the chain it
//! belongs to, and the board owns the arena of live groups, so stones and
//! groups never reference each other directly.
//!
//! A placement runs in one step: legality check, a singleton group for the new
//! stone, a union-by-size merge with adjacent friendly groups, then removal of
//! any adjacent enemy group left without liberties.

use std::collections::BTreeMap;
use std::fmt;

use crate::constants::{ALPHABET, GLYPH_EMPTY, MAX_SIZE};
use crate::coord::Position;
use crate::error::{BoardError, LegalityError};
use crate::group::{Group, GroupId};
use crate::stone::{Color, Stone};

#[derive(Clone, Debug)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Stone>>,
    groups: BTreeMap<GroupId, Group>,
    next_group: usize,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Errors
    /// `InvalidSize` if `size` is even or larger than [`MAX_SIZE`].
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size % 2 == 0 || size > MAX_SIZE {
            return Err(BoardError::InvalidSize(size));
        }
        Ok(Self {
            size,
            cells: vec![None; size * size],
            groups: BTreeMap::new(),
            next_group: 0,
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// The coordinate symbols valid on this board, in axis order.
    pub fn alphabet(&self) -> &'static [u8] {
        &ALPHABET[..self.size]
    }

    fn symbol_value(&self, symbol: char) -> Result<usize, BoardError> {
        let upper = symbol.to_ascii_uppercase();
        self.alphabet()
            .iter()
            .position(|&b| b as char == upper)
            .ok_or(BoardError::UnknownSymbol(symbol))
    }

    /// Translate a position to its cell index (`row * size + col`).
    pub fn index_of(&self, position: Position) -> Result<usize, BoardError> {
        let col = self.symbol_value(position.col)?;
        let row = self.symbol_value(position.row)?;
        Ok(row * self.size + col)
    }

    /// Translate a cell index back to its position.
    ///
    /// # Panics
    /// If `index` is not a cell of this board.
    pub fn position_of(&self, index: usize) -> Position {
        assert!(index < self.cells.len(), "cell index {index} out of range");
        let col = ALPHABET[index % self.size] as char;
        let row = ALPHABET[index / self.size] as char;
        Position::new(col, row)
    }

    /// Orthogonal neighbors of a cell (N, S, E, W), clipped at the edges.
    ///
    /// Rows and columns are checked explicitly, so the west neighbor of a
    /// leftmost cell never wraps to the end of the previous row.
    pub fn neighbors(&self, index: usize) -> impl Iterator<Item = usize> + use<> {
        let s = self.size;
        let (row, col) = (index / s, index % s);
        let north = (row > 0).then(|| index - s);
        let south = (row + 1 < s).then(|| index + s);
        let east = (col + 1 < s).then(|| index + 1);
        let west = (col > 0).then(|| index - 1);
        [north, south, east, west].into_iter().flatten()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Color of the stone at `position`. Symbols outside the alphabet read as empty.
    pub fn get(&self, position: Position) -> Option<Color> {
        self.index_of(position)
            .ok()
            .and_then(|index| self.color_at(index))
    }

    pub fn stone_at(&self, index: usize) -> Option<&Stone> {
        self.cells.get(index)?.as_ref()
    }

    pub fn color_at(&self, index: usize) -> Option<Color> {
        self.stone_at(index).map(Stone::color)
    }

    pub fn group_of(&self, index: usize) -> Option<GroupId> {
        self.stone_at(index).map(Stone::group)
    }

    pub fn group_at(&self, position: Position) -> Result<Option<GroupId>, BoardError> {
        Ok(self.group_of(self.index_of(position)?))
    }

    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(&id)
    }

    /// All live groups in creation order.
    pub fn groups(&self) -> impl Iterator<Item = (GroupId, &Group)> {
        self.groups.iter().map(|(&id, group)| (id, group))
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Every cell in row-major order with its contents.
    ///
    /// Each call starts a fresh pass over the board.
    pub fn cell_iter(&self) -> impl Iterator<Item = (Position, Option<Color>)> + '_ {
        (0..self.cells.len()).map(move |index| (self.position_of(index), self.color_at(index)))
    }

    // =========================================================================
    // Liberties
    // =========================================================================

    /// Distinct empty cells adjacent to the group, in ascending order.
    ///
    /// A group id that is no longer live has none.
    pub fn liberty_points(&self, id: GroupId) -> Vec<usize> {
        let Some(group) = self.groups.get(&id) else {
            return Vec::new();
        };
        let mut seen = vec![false; self.cells.len()];
        let mut points = Vec::new();
        for &member in group.members() {
            for n in self.neighbors(member) {
                if self.cells[n].is_none() && !seen[n] {
                    seen[n] = true;
                    points.push(n);
                }
            }
        }
        points.sort_unstable();
        points
    }

    pub fn liberties(&self, id: GroupId) -> usize {
        self.liberty_points(id).len()
    }

    pub fn is_captured(&self, id: GroupId) -> bool {
        self.liberties(id) == 0
    }

    // =========================================================================
    // Moves
    // =========================================================================

    /// Check whether `color` may play at `index`.
    ///
    /// A move with an empty neighbor is always legal. With every neighbor
    /// occupied, it is legal only if it joins a friendly group that keeps
    /// another liberty, or fills the last liberty of an enemy group.
    ///
    /// # Panics
    /// If `index` is not a cell of this board.
    pub fn check_legal(&self, color: Color, index: usize) -> Result<(), LegalityError> {
        if self.cells[index].is_some() {
            return Err(LegalityError::Occupied);
        }
        let mut relieved = false;
        for n in self.neighbors(index) {
            let Some(stone) = self.cells[n] else {
                return Ok(());
            };
            let libs = self.liberties(stone.group);
            let keeps_liberty = stone.color() == color && libs > 1;
            let captures = stone.color() != color && libs == 1;
            if keeps_liberty || captures {
                relieved = true;
            }
        }
        if relieved {
            Ok(())
        } else {
            Err(LegalityError::Suicide)
        }
    }

    pub fn is_legal(&self, color: Color, index: usize) -> bool {
        self.check_legal(color, index).is_ok()
    }

    /// Place a stone at a position.
    ///
    /// Returns the id of the group the new stone ends up in.
    pub fn place(&mut self, color: Color, position: Position) -> Result<GroupId, BoardError> {
        let index = self.index_of(position)?;
        Ok(self.place_at(color, index)?)
    }

    /// Place a stone at a cell index. Nothing changes if the move is illegal.
    ///
    /// # Panics
    /// If `index` is not a cell of this board.
    pub fn place_at(&mut self, color: Color, index: usize) -> Result<GroupId, LegalityError> {
        self.check_legal(color, index)?;

        let id = GroupId(self.next_group);
        self.next_group += 1;
        self.cells[index] = Some(Stone::new(color, id));
        self.groups.insert(id, Group::singleton(color, index));

        let mut linked = vec![id];
        for n in self.neighbors(index) {
            if let Some(stone) = self.cells[n] {
                if stone.color() == color && !linked.contains(&stone.group) {
                    linked.push(stone.group);
                }
            }
        }
        let id = self.merge(&linked).unwrap_or(id);

        self.capture_check(index);
        Ok(id)
    }

    /// Unify groups into the largest of them.
    ///
    /// The first group of maximal size survives; every stone of the others is
    /// repointed to it and the absorbed groups leave the arena. Ids that are
    /// not live are ignored.
    ///
    /// Returns `None`, changing nothing, if no id is live or the live groups
    /// do not form one connected chain of a single color.
    pub fn merge(&mut self, ids: &[GroupId]) -> Option<GroupId> {
        let mut live: Vec<GroupId> = Vec::with_capacity(ids.len());
        for &id in ids {
            if self.groups.contains_key(&id) && !live.contains(&id) {
                live.push(id);
            }
        }
        if !self.forms_one_chain(&live) {
            return None;
        }

        let (target, _) = live
            .iter()
            .filter_map(|id| self.groups.get(id).map(|g| (*id, g.size())))
            .fold(None, |best: Option<(GroupId, usize)>, (id, size)| match best {
                Some((_, best_size)) if best_size >= size => best,
                _ => Some((id, size)),
            })?;

        for id in live {
            if id == target {
                continue;
            }
            let Some(absorbed) = self.groups.remove(&id) else {
                continue;
            };
            for &member in absorbed.members() {
                if let Some(stone) = self.cells[member].as_mut() {
                    stone.group = target;
                }
            }
            if let Some(survivor) = self.groups.get_mut(&target) {
                survivor.absorb(absorbed);
            }
        }
        Some(target)
    }

    /// True if the groups share one color and their members are orthogonally connected.
    fn forms_one_chain(&self, ids: &[GroupId]) -> bool {
        let groups: Vec<&Group> = ids.iter().filter_map(|id| self.groups.get(id)).collect();
        let Some(first) = groups.first() else {
            return false;
        };
        if groups.iter().any(|g| g.color() != first.color()) {
            return false;
        }
        let Some(&start) = first.members().first() else {
            return false;
        };

        let mut in_union = vec![false; self.cells.len()];
        let mut total = 0;
        for group in &groups {
            for &member in group.members() {
                in_union[member] = true;
                total += 1;
            }
        }

        let mut seen = vec![false; self.cells.len()];
        let mut stack = vec![start];
        let mut reached = 0;
        while let Some(pt) = stack.pop() {
            if seen[pt] {
                continue;
            }
            seen[pt] = true;
            reached += 1;
            for n in self.neighbors(pt) {
                if in_union[n] && !seen[n] {
                    stack.push(n);
                }
            }
        }
        reached == total
    }

    /// Remove every enemy group next to `index` that has no liberties left.
    ///
    /// Returns the number of stones removed.
    pub fn capture_check(&mut self, index: usize) -> usize {
        let Some(color) = self.color_at(index) else {
            return 0;
        };
        let mut captured = 0;
        for n in self.neighbors(index) {
            let Some(stone) = self.cells[n] else {
                continue;
            };
            if stone.color() != color && self.is_captured(stone.group) {
                captured += self.remove_group(stone.group);
            }
        }
        captured
    }

    fn remove_group(&mut self, id: GroupId) -> usize {
        let Some(group) = self.groups.remove(&id) else {
            return 0;
        };
        for &member in group.members() {
            self.cells[member] = None;
        }
        group.size()
    }

    // =========================================================================
    // Highlighting
    // =========================================================================

    /// Mark the group at `position` for display, clearing any earlier mark.
    ///
    /// Only rendering changes; colors, groups and liberties are untouched.
    /// Returns the highlighted group, or `None` if the cell is empty.
    pub fn highlight(&mut self, position: Position) -> Result<Option<GroupId>, BoardError> {
        let index = self.index_of(position)?;
        self.clear_highlight();
        let Some(id) = self.group_of(index) else {
            return Ok(None);
        };
        if let Some(group) = self.groups.get(&id) {
            for &member in group.members() {
                if let Some(stone) = self.cells[member].as_mut() {
                    stone.highlighted = true;
                }
            }
        }
        Ok(Some(id))
    }

    pub fn clear_highlight(&mut self) {
        for stone in self.cells.iter_mut().flatten() {
            stone.highlighted = false;
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, " ")?;
        for &symbol in self.alphabet() {
            write!(f, " {}", symbol as char)?;
        }
        writeln!(f)?;
        for (index, (position, _)) in self.cell_iter().enumerate() {
            if index % self.size == 0 {
                write!(f, "{}", position.row)?;
            }
            let glyph = self
                .stone_at(index)
                .map_or(GLYPH_EMPTY, |stone| stone.appearance().glyph());
            write!(f, " {glyph}")?;
            if index % self.size == self.size - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(s: &str) -> Position {
        s.parse().unwrap()
    }

    fn board_with(size: usize, moves: &[(Color, &str)]) -> Board {
        let mut board = Board::new(size).unwrap();
        for &(color, p) in moves {
            board.place(color, pos(p)).unwrap();
        }
        board
    }

    #[test]
    fn test_new_rejects_bad_sizes() {
        assert_eq!(Board::new(8).unwrap_err(), BoardError::InvalidSize(8));
        assert_eq!(Board::new(37).unwrap_err(), BoardError::InvalidSize(37));
        assert!(Board::new(35).is_ok());
        assert!(Board::new(1).is_ok());
    }

    #[test]
    fn test_index_of_unknown_symbol() {
        let board = Board::new(9).unwrap();
        assert_eq!(board.index_of(pos("19")), Err(BoardError::UnknownSymbol('9')));
        assert_eq!(board.index_of(pos("84")), Ok(4 * 9 + 8));
    }

    #[test]
    fn test_neighbors_do_not_wrap() {
        let board = Board::new(5).unwrap();
        // Leftmost cell of row 2
        let mut n: Vec<usize> = board.neighbors(10).collect();
        n.sort_unstable();
        assert_eq!(n, vec![5, 11, 15]);
        // Rightmost cell of row 1
        let mut n: Vec<usize> = board.neighbors(9).collect();
        n.sort_unstable();
        assert_eq!(n, vec![4, 8, 14]);
        assert_eq!(board.neighbors(0).count(), 2);
        assert_eq!(board.neighbors(24).count(), 2);
        assert_eq!(board.neighbors(12).count(), 4);
    }

    #[test]
    fn test_shared_liberty_counted_once() {
        // L-shape: 11, 21, 22 share the liberty at 12
        let board = board_with(9, &[(Color::Black, "11"), (Color::Black, "21"), (Color::Black, "22")]);
        let id = board.group_at(pos("11")).unwrap().unwrap();
        assert_eq!(board.group(id).unwrap().size(), 3);
        assert_eq!(board.liberties(id), 7);
    }

    #[test]
    fn test_merge_keeps_largest_group() {
        let mut board = board_with(9, &[(Color::Black, "00"), (Color::Black, "01"), (Color::Black, "21")]);
        let west = board.group_at(pos("00")).unwrap().unwrap();
        let east = board.group_at(pos("21")).unwrap().unwrap();
        assert_ne!(west, east);

        let merged = board.place(Color::Black, pos("11")).unwrap();
        assert_eq!(merged, west);
        assert!(board.group(east).is_none());
        assert_eq!(board.group(merged).unwrap().size(), 4);
        assert_eq!(board.group_count(), 1);
        for p in ["00", "01", "11", "21"] {
            assert_eq!(board.group_at(pos(p)).unwrap(), Some(merged));
        }
    }

    #[test]
    fn test_merge_tie_keeps_first() {
        // Three singletons: the new stone at 10 is listed first and survives
        let mut board = board_with(9, &[(Color::Black, "00"), (Color::Black, "20")]);
        let west = board.group_at(pos("00")).unwrap().unwrap();
        let east = board.group_at(pos("20")).unwrap().unwrap();
        let merged = board.place(Color::Black, pos("10")).unwrap();
        assert_ne!(merged, west);
        assert_ne!(merged, east);
        assert!(board.group(west).is_none());
        assert!(board.group(east).is_none());
        assert_eq!(board.group(merged).unwrap().size(), 3);
    }

    #[test]
    fn test_merge_rejects_mixed_colors() {
        let mut board = board_with(9, &[(Color::Black, "44"), (Color::White, "45")]);
        let black = board.group_at(pos("44")).unwrap().unwrap();
        let white = board.group_at(pos("45")).unwrap().unwrap();
        assert_eq!(board.merge(&[black, white]), None);
        assert_eq!(board.group(black).unwrap().members(), &[40]);
        assert_eq!(board.group(white).unwrap().members(), &[49]);
        assert_eq!(board.group_of(49), Some(white));
    }

    #[test]
    fn test_merge_rejects_disconnected_groups() {
        let mut board = board_with(9, &[(Color::White, "33"), (Color::White, "55")]);
        let a = board.group_at(pos("33")).unwrap().unwrap();
        let b = board.group_at(pos("55")).unwrap().unwrap();
        assert_eq!(board.merge(&[b, a]), None);
        assert_eq!(board.group_count(), 2);
        assert_eq!(board.group(a).unwrap().size(), 1);
        assert_eq!(board.group(b).unwrap().size(), 1);
    }

    #[test]
    fn test_merge_single_and_dead_ids() {
        let mut board = board_with(5, &[(Color::White, "00"), (Color::Black, "10")]);
        let white = board.group_at(pos("00")).unwrap().unwrap();
        board.place(Color::Black, pos("01")).unwrap();
        assert!(board.group(white).is_none());

        let black = board.group_at(pos("10")).unwrap().unwrap();
        assert_eq!(board.merge(&[white, black, black]), Some(black));
        assert_eq!(board.merge(&[white]), None);
        assert_eq!(board.merge(&[]), None);
    }

    #[test]
    fn test_occupied() {
        let mut board = board_with(9, &[(Color::Black, "44")]);
        assert_eq!(
            board.place(Color::White, pos("44")),
            Err(BoardError::Illegal(LegalityError::Occupied))
        );
        assert_eq!(board.get(pos("44")), Some(Color::Black));
        assert_eq!(board.stone_count(), 1);
    }

    #[test]
    fn test_suicide_rejected() {
        let mut board = board_with(
            9,
            &[(Color::Black, "43"), (Color::Black, "34"), (Color::Black, "54"), (Color::Black, "45")],
        );
        let index = board.index_of(pos("44")).unwrap();
        assert_eq!(board.check_legal(Color::White, index), Err(LegalityError::Suicide));
        assert_eq!(board.place_at(Color::White, index), Err(LegalityError::Suicide));
        assert_eq!(board.get(pos("44")), None);
        // Black may fill its own eye: the joined group keeps liberties
        assert!(board.is_legal(Color::Black, index));
    }

    #[test]
    fn test_single_stone_on_one_by_one_is_suicide() {
        let mut board = Board::new(1).unwrap();
        assert_eq!(board.place_at(Color::Black, 0), Err(LegalityError::Suicide));
    }

    #[test]
    fn test_capture_single_stone() {
        let mut board = board_with(
            9,
            &[(Color::White, "44"), (Color::Black, "43"), (Color::Black, "34"), (Color::Black, "54")],
        );
        let white = board.group_at(pos("44")).unwrap().unwrap();
        assert_eq!(board.liberties(white), 1);
        board.place(Color::Black, pos("45")).unwrap();
        assert_eq!(board.get(pos("44")), None);
        assert!(board.group(white).is_none());
        assert_eq!(board.stone_count(), 4);
    }

    #[test]
    fn test_capture_in_corner() {
        let mut board = board_with(5, &[(Color::White, "00"), (Color::Black, "10")]);
        board.place(Color::Black, pos("01")).unwrap();
        assert_eq!(board.get(pos("00")), None);
        assert_eq!(board.group_count(), 2);
    }

    #[test]
    fn test_highlight_is_render_only() {
        let mut board = board_with(9, &[(Color::Black, "22"), (Color::Black, "23"), (Color::White, "33")]);
        let id = board.highlight(pos("22")).unwrap();
        assert_eq!(id, board.group_at(pos("23")).unwrap());
        let index = board.index_of(pos("23")).unwrap();
        assert!(board.stone_at(index).unwrap().is_highlighted());
        assert_eq!(board.get(pos("23")), Some(Color::Black));

        // A highlighted group still merges with plain stones of its color
        let merged = board.place(Color::Black, pos("24")).unwrap();
        assert_eq!(board.group(merged).unwrap().size(), 3);

        assert_eq!(board.highlight(pos("33")).unwrap(), board.group_at(pos("33")).unwrap());
        assert!(!board.stone_at(index).unwrap().is_highlighted());
        assert_eq!(board.highlight(pos("88")).unwrap(), None);
        assert!(board.highlight(pos("Z0")).is_err());
    }

    #[test]
    fn test_display() {
        let mut board = board_with(3, &[(Color::Black, "00"), (Color::White, "21")]);
        assert_eq!(board.to_string(), "  0 1 2\n0 o . .\n1 . . *\n2 . . .\n");
        board.highlight(pos("00")).unwrap();
        assert_eq!(board.to_string(), "  0 1 2\n0 @ . .\n1 . . *\n2 . . .\n");
    }
}
