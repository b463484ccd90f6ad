//! Conway's B3/S23 rule.

const BIRTH: usize = 3;
const SURVIVE: [usize; 2] = [2, 3];

/// Whether a cell is alive in the next generation, given its current state and live neighbor count.
pub fn next_state(alive: bool, live_neighbors: usize) -> bool {
    if alive {
        SURVIVE.contains(&live_neighbors)
    } else {
        live_neighbors == BIRTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_cells_need_two_or_three_neighbors() {
        let survivors = (0..=8).filter(|n| next_state(true, *n)).collect::<Vec<_>>();

        assert_eq!(survivors, vec![2, 3]);
    }

    #[test]
    fn dead_cells_need_exactly_three_neighbors() {
        let births = (0..=8).filter(|n| next_state(false, *n)).collect::<Vec<_>>();

        assert_eq!(births, vec![3]);
    }
}
