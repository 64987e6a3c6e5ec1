//! Q-table implementation for temporal difference learning

use std::collections::HashMap;

use crate::types::{Direction, Position};

/// Q-table mapping (position, direction) pairs to learned utilities.
///
/// Unseen pairs read as `q_init`, so the table behaves as if every reachable
/// pair were initialized to the baseline without materializing the full grid.
#[derive(Debug, Clone)]
pub struct QTable {
    /// Q-values: (position, direction) -> utility
    q_values: HashMap<(Position, Direction), f64>,
    /// Learning rate α
    learning_rate: f64,
    /// Discount factor γ
    discount_factor: f64,
    /// Baseline Q-value for unseen state-action pairs
    q_init: f64,
}

impl QTable {
    /// Create a new Q-table
    pub fn new(learning_rate: f64, discount_factor: f64, q_init: f64) -> Self {
        Self {
            q_values: HashMap::new(),
            learning_rate,
            discount_factor,
            q_init,
        }
    }

    /// Get the utility for a (position, direction) pair
    pub fn get(&self, position: Position, direction: Direction) -> f64 {
        *self
            .q_values
            .get(&(position, direction))
            .unwrap_or(&self.q_init)
    }

    /// Set the utility for a (position, direction) pair
    pub fn set(&mut self, position: Position, direction: Direction, value: f64) {
        self.q_values.insert((position, direction), value);
    }

    /// Maximum utility over all four directions at `position`
    pub fn max_q(&self, position: Position) -> f64 {
        Direction::ALL
            .iter()
            .map(|&direction| self.get(position, direction))
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Q-learning update for a valid move: off-policy TD control
    ///
    /// Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
    ///
    /// Returns the updated utility.
    pub fn update(
        &mut self,
        position: Position,
        direction: Direction,
        reward: f64,
        next_position: Position,
    ) -> f64 {
        let current_q = self.get(position, direction);
        let td_target = reward + self.discount_factor * self.max_q(next_position);
        let td_error = td_target - current_q;
        let new_q = current_q + self.learning_rate * td_error;
        self.set(position, direction, new_q);
        new_q
    }

    /// Update for an invalid move: the agent does not transition, so the rule
    /// carries no successor term
    ///
    /// Q(s,a) ← Q(s,a) + α[penalty - Q(s,a)]
    ///
    /// Returns the updated utility.
    pub fn penalty_update(&mut self, position: Position, direction: Direction, penalty: f64) -> f64 {
        let current_q = self.get(position, direction);
        let new_q = current_q + self.learning_rate * (penalty - current_q);
        self.set(position, direction, new_q);
        new_q
    }

    /// Number of pairs with an explicitly stored utility
    pub fn len(&self) -> usize {
        self.q_values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.q_values.is_empty()
    }

    /// Iterate over all stored (position, direction, utility) entries
    pub fn iter(&self) -> impl Iterator<Item = (Position, Direction, f64)> + '_ {
        self.q_values
            .iter()
            .map(|(&(position, direction), &value)| (position, direction, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unseen_pairs_read_the_baseline() {
        let qtable = QTable::new(0.5, 0.9, 0.0);
        assert_eq!(qtable.get(Position::new(0, 0), Direction::Up), 0.0);

        let optimistic = QTable::new(0.5, 0.9, 1.0);
        assert_eq!(optimistic.get(Position::new(0, 0), Direction::Up), 1.0);
    }

    #[test]
    fn set_then_get_round_trips() {
        let mut qtable = QTable::new(0.5, 0.9, 0.0);
        qtable.set(Position::new(1, 2), Direction::Right, 1.5);
        assert_eq!(qtable.get(Position::new(1, 2), Direction::Right), 1.5);
        assert_eq!(qtable.len(), 1);
    }

    #[test]
    fn max_q_spans_all_four_directions() {
        let mut qtable = QTable::new(0.5, 0.9, 0.0);
        let pos = Position::new(1, 1);
        qtable.set(pos, Direction::Up, 0.5);
        qtable.set(pos, Direction::Left, 2.0);
        qtable.set(pos, Direction::Down, -1.0);
        assert_eq!(qtable.max_q(pos), 2.0);
    }

    #[test]
    fn update_applies_the_q_learning_rule() {
        let mut qtable = QTable::new(0.5, 0.9, 0.0);
        let s = Position::new(0, 0);
        let s_next = Position::new(1, 0);
        qtable.set(s_next, Direction::Right, 2.0);

        // Q(s,a) = 0.0 + 0.5 * (1.0 + 0.9 * 2.0 - 0.0) = 1.4
        let updated = qtable.update(s, Direction::Right, 1.0, s_next);
        assert!((updated - 1.4).abs() < 1e-9);
        assert!((qtable.get(s, Direction::Right) - 1.4).abs() < 1e-9);
    }

    #[test]
    fn penalty_update_moves_toward_the_penalty() {
        let mut qtable = QTable::new(0.5, 0.9, 0.0);
        let s = Position::new(0, 0);

        let before = qtable.get(s, Direction::Up);
        let after = qtable.penalty_update(s, Direction::Up, -10.0);
        assert!(after < before);
        assert!((after - (-5.0)).abs() < 1e-9);

        // Repeated penalties converge toward the penalty value.
        let again = qtable.penalty_update(s, Direction::Up, -10.0);
        assert!(again < after);
        assert!(again > -10.0);
    }

    #[test]
    fn penalty_update_has_no_successor_term() {
        let mut qtable = QTable::new(1.0, 0.9, 0.0);
        let s = Position::new(0, 0);
        // A high-value neighbor must not leak into the invalid-move update.
        qtable.set(Position::new(0, -1), Direction::Up, 100.0);

        let after = qtable.penalty_update(s, Direction::Up, -10.0);
        assert!((after - (-10.0)).abs() < 1e-9);
    }

    #[test]
    fn iter_yields_all_entries() {
        let mut qtable = QTable::new(0.5, 0.9, 0.0);
        qtable.set(Position::new(0, 0), Direction::Up, 1.0);
        qtable.set(Position::new(1, 0), Direction::Down, 2.0);

        let mut entries: Vec<_> = qtable.iter().collect();
        entries.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], (Position::new(0, 0), Direction::Up, 1.0));
    }
}
