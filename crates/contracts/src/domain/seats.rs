//! Seats-distribution editing model.
//!
//! A distribution describes how many seats each row-group of the cabin has
//! across its width, e.g. `"3-3-3"` for a 9-across layout. The editor works
//! on an ordered map from row position to an optional seat count: a row with
//! no count yet (`None`) exists in the editor but cannot be submitted.

use std::collections::BTreeMap;

use thiserror::Error;

/// Maximum number of row-groups a distribution may have.
pub const MAX_ROWS: usize = 8;

/// Allowed seat count per row-group.
pub const MIN_SEATS_PER_ROW: u32 = 1;
pub const MAX_SEATS_PER_ROW: u32 = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SeatsError {
    #[error("la distribución de asientos está vacía")]
    Empty,

    #[error("valor no numérico '{token}' en la fila {index}")]
    MalformedToken { token: String, index: usize },

    #[error(
        "el número de asientos por fila debe estar entre {MIN_SEATS_PER_ROW} y \
         {MAX_SEATS_PER_ROW}, se recibió {count}"
    )]
    CountOutOfRange { count: u32 },

    #[error("una distribución no puede tener más de {MAX_ROWS} filas, se recibieron {rows}")]
    TooManyRows { rows: usize },

    #[error("hay filas sin número de asientos")]
    Incomplete,
}

/// Ordered seats-per-row mapping.
///
/// Positions are assigned incrementally (`max + 1` on append) and never
/// renumbered on removal, so the position space may contain gaps after
/// deletions. Iteration is always by ascending position — a structural
/// guarantee of the `BTreeMap`, not an accident of insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatsLayout {
    rows: BTreeMap<u32, Option<u32>>,
}

impl Default for SeatsLayout {
    /// A fresh layout for the create flow: one row of one seat.
    fn default() -> Self {
        let mut rows = BTreeMap::new();
        rows.insert(0, Some(MIN_SEATS_PER_ROW));
        Self { rows }
    }
}

impl SeatsLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a layout from a stored `seatsDistribution` string (edit flow).
    ///
    /// Tokens get contiguous positions `0..n-1`. A malformed or out-of-range
    /// token rejects the whole record: a stored distribution that does not
    /// round-trip is corrupt data, not something to patch over with a
    /// sentinel.
    pub fn parse(raw: &str) -> Result<Self, SeatsError> {
        if raw.is_empty() {
            return Err(SeatsError::Empty);
        }

        let tokens: Vec<&str> = raw.split('-').collect();
        if tokens.len() > MAX_ROWS {
            return Err(SeatsError::TooManyRows { rows: tokens.len() });
        }

        let mut rows = BTreeMap::new();
        for (index, token) in tokens.iter().enumerate() {
            let count: u32 = token.parse().map_err(|_| SeatsError::MalformedToken {
                token: (*token).to_string(),
                index,
            })?;
            if !(MIN_SEATS_PER_ROW..=MAX_SEATS_PER_ROW).contains(&count) {
                return Err(SeatsError::CountOutOfRange { count });
            }
            rows.insert(index as u32, Some(count));
        }

        Ok(Self { rows })
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_full(&self) -> bool {
        self.rows.len() >= MAX_ROWS
    }

    pub fn is_single(&self) -> bool {
        self.rows.len() == 1
    }

    /// Rows in ascending position order.
    pub fn rows(&self) -> impl Iterator<Item = (u32, Option<u32>)> + '_ {
        self.rows.iter().map(|(pos, count)| (*pos, *count))
    }

    /// Append a row of one seat at `max(positions) + 1`.
    ///
    /// Returns `false` without modifying anything once the layout already
    /// has [`MAX_ROWS`] rows.
    pub fn add_row(&mut self) -> bool {
        if self.is_full() {
            return false;
        }
        let next = self.rows.keys().next_back().map_or(0, |max| max + 1);
        self.rows.insert(next, Some(MIN_SEATS_PER_ROW));
        true
    }

    /// Store the raw input of the row at `position`.
    ///
    /// The empty string clears the row back to "present but unfilled".
    /// Anything else must parse as an integer in
    /// `[MIN_SEATS_PER_ROW, MAX_SEATS_PER_ROW]`; otherwise the stored value
    /// stays untouched and the error is returned. An unknown position is a
    /// silent no-op — the UI only ever edits rows it renders.
    pub fn set_count(&mut self, position: u32, raw: &str) -> Result<(), SeatsError> {
        if !self.rows.contains_key(&position) {
            return Ok(());
        }

        if raw.is_empty() {
            self.rows.insert(position, None);
            return Ok(());
        }

        let count: u32 = raw.parse().map_err(|_| SeatsError::MalformedToken {
            token: raw.to_string(),
            index: position as usize,
        })?;
        if !(MIN_SEATS_PER_ROW..=MAX_SEATS_PER_ROW).contains(&count) {
            return Err(SeatsError::CountOutOfRange { count });
        }

        self.rows.insert(position, Some(count));
        Ok(())
    }

    /// Delete the row at `position`, keeping the remaining positions as-is.
    ///
    /// Returns `false` without modifying anything while only one row is
    /// left: a distribution always has at least one row.
    pub fn remove_row(&mut self, position: u32) -> bool {
        if self.is_single() {
            return false;
        }
        self.rows.remove(&position).is_some()
    }

    /// True iff every row has a concrete count — the submit precondition.
    pub fn is_complete(&self) -> bool {
        self.rows.values().all(Option::is_some)
    }

    /// The wire form: counts in ascending position order joined with `-`.
    ///
    /// Fails on an incomplete layout; callers gate submission on
    /// [`is_complete`](Self::is_complete) and surface the error otherwise.
    pub fn encode(&self) -> Result<String, SeatsError> {
        let counts: Vec<String> = self
            .rows
            .values()
            .map(|count| count.map(|c| c.to_string()).ok_or(SeatsError::Incomplete))
            .collect::<Result<_, _>>()?;
        Ok(counts.join("-"))
    }

    /// Display form with `X` standing in for unfilled rows. Never submitted.
    pub fn preview(&self) -> String {
        self.rows
            .values()
            .map(|count| match count {
                Some(c) => c.to_string(),
                None => "X".to_string(),
            })
            .collect::<Vec<_>>()
            .join("-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_single_row_of_one() {
        let layout = SeatsLayout::new();
        assert_eq!(layout.row_count(), 1);
        assert_eq!(layout.rows().collect::<Vec<_>>(), vec![(0, Some(1))]);
        assert!(layout.is_complete());
    }

    #[test]
    fn parse_then_encode_round_trips() {
        let layout = SeatsLayout::parse("2-4-2").unwrap();
        assert_eq!(layout.encode().unwrap(), "2-4-2");
        assert_eq!(layout.row_count(), 3);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(SeatsLayout::parse(""), Err(SeatsError::Empty));
        assert_eq!(
            SeatsLayout::parse("3-x-3"),
            Err(SeatsError::MalformedToken {
                token: "x".to_string(),
                index: 1
            })
        );
        assert_eq!(
            SeatsLayout::parse("3--3"),
            Err(SeatsError::MalformedToken {
                token: "".to_string(),
                index: 1
            })
        );
        assert_eq!(
            SeatsLayout::parse("3-11"),
            Err(SeatsError::CountOutOfRange { count: 11 })
        );
        assert_eq!(
            SeatsLayout::parse("3-0"),
            Err(SeatsError::CountOutOfRange { count: 0 })
        );
        assert_eq!(
            SeatsLayout::parse("1-1-1-1-1-1-1-1-1"),
            Err(SeatsError::TooManyRows { rows: 9 })
        );
    }

    #[test]
    fn add_row_appends_one_seat() {
        let mut layout = SeatsLayout::new();
        assert!(layout.add_row());
        assert_eq!(layout.encode().unwrap(), "1-1");
    }

    #[test]
    fn add_row_is_a_no_op_at_capacity() {
        let mut layout = SeatsLayout::new();
        for _ in 0..MAX_ROWS - 1 {
            assert!(layout.add_row());
        }
        assert_eq!(layout.row_count(), MAX_ROWS);

        let before = layout.clone();
        assert!(!layout.add_row());
        assert_eq!(layout, before);
    }

    #[test]
    fn set_count_stores_parsed_value() {
        let mut layout = SeatsLayout::new();
        layout.add_row();
        layout.set_count(1, "5").unwrap();
        assert_eq!(layout.encode().unwrap(), "1-5");
    }

    #[test]
    fn empty_input_clears_the_row() {
        let mut layout = SeatsLayout::new();
        layout.add_row();
        layout.set_count(1, "").unwrap();
        assert!(!layout.is_complete());
        assert_eq!(layout.encode(), Err(SeatsError::Incomplete));
        assert_eq!(layout.preview(), "1-X");
    }

    #[test]
    fn set_count_enforces_bounds_and_keeps_previous_value() {
        let mut layout = SeatsLayout::parse("3-4").unwrap();
        assert_eq!(
            layout.set_count(1, "12"),
            Err(SeatsError::CountOutOfRange { count: 12 })
        );
        assert_eq!(
            layout.set_count(1, "abc"),
            Err(SeatsError::MalformedToken {
                token: "abc".to_string(),
                index: 1
            })
        );
        assert_eq!(layout.encode().unwrap(), "3-4");
    }

    #[test]
    fn set_count_ignores_unknown_positions() {
        let mut layout = SeatsLayout::new();
        layout.set_count(7, "5").unwrap();
        assert_eq!(layout.encode().unwrap(), "1");
    }

    #[test]
    fn remove_row_keeps_the_last_row() {
        let mut layout = SeatsLayout::parse("4").unwrap();
        assert!(!layout.remove_row(0));
        assert_eq!(layout.encode().unwrap(), "4");
    }

    #[test]
    fn removal_leaves_gaps_and_append_continues_past_them() {
        let mut layout = SeatsLayout::parse("3-2-4").unwrap();
        assert!(layout.remove_row(1));
        assert_eq!(layout.encode().unwrap(), "3-4");
        assert_eq!(
            layout.rows().map(|(pos, _)| pos).collect::<Vec<_>>(),
            vec![0, 2]
        );

        // New rows take max+1 over what is left, not the freed slot.
        assert!(layout.add_row());
        assert_eq!(
            layout.rows().map(|(pos, _)| pos).collect::<Vec<_>>(),
            vec![0, 2, 3]
        );
        assert_eq!(layout.encode().unwrap(), "3-4-1");
    }

    #[test]
    fn row_count_stays_within_bounds_across_operation_sequences() {
        let mut layout = SeatsLayout::new();
        for _ in 0..20 {
            layout.add_row();
        }
        assert_eq!(layout.row_count(), MAX_ROWS);

        let positions: Vec<u32> = layout.rows().map(|(pos, _)| pos).collect();
        for pos in positions {
            layout.remove_row(pos);
        }
        assert_eq!(layout.row_count(), 1);
    }
}
