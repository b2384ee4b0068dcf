//! Food placement.

use crate::rng::SimpleRng;
use crate::snake::Snake;
use crate::types::{FieldSize, Position};

/// Picks food cells uniformly among the cells the snake does not cover.
///
/// Keeps an occupancy grid between calls so respawning does not allocate once
/// the grid has been sized for the field.
#[derive(Debug, Clone, Default)]
pub struct FoodSpawner {
    occupied: Vec<bool>,
}

impl FoodSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose a free cell, or `None` when the snake fills the whole field.
    pub fn spawn(
        &mut self,
        rng: &mut SimpleRng,
        field: FieldSize,
        snake: &Snake,
    ) -> Option<Position> {
        self.occupied.clear();
        self.occupied.resize(field.cells(), false);

        let mut taken = 0usize;
        for seg in snake.segments() {
            let i = field.index_of(seg);
            if !self.occupied[i] {
                self.occupied[i] = true;
                taken += 1;
            }
        }

        let free = field.cells() - taken;
        if free == 0 {
            return None;
        }

        let mut k = rng.next_range(free as u32) as usize;
        for (i, &occ) in self.occupied.iter().enumerate() {
            if occ {
                continue;
            }
            if k == 0 {
                return Some(field.position_at(i));
            }
            k -= 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction;

    #[test]
    fn never_lands_on_the_snake() {
        let field = FieldSize::new(8, 8).unwrap();
        let snake = Snake::new_centered(field);
        let mut rng = SimpleRng::new(3);
        let mut spawner = FoodSpawner::new();
        for _ in 0..500 {
            let food = spawner.spawn(&mut rng, field, &snake).unwrap();
            assert!(field.contains(food));
            assert!(!snake.occupies(food));
        }
    }

    #[test]
    fn picks_the_only_free_cell() {
        let field = FieldSize::new(8, 8).unwrap();
        // Snake covering every cell except (7, 7), walking rows boustrophedon.
        let mut segs = Vec::new();
        for y in 0..8u16 {
            let xs: Vec<u16> = if y % 2 == 0 {
                (0..8).collect()
            } else {
                (0..8).rev().collect()
            };
            for x in xs {
                segs.push(Position::new(x, y));
            }
        }
        segs.retain(|&p| p != Position::new(7, 7));
        let snake = Snake::from_segments(&segs, Direction::Right).unwrap();

        let mut rng = SimpleRng::new(11);
        let mut spawner = FoodSpawner::new();
        assert_eq!(spawner.spawn(&mut rng, field, &snake), Some(Position::new(7, 7)));
    }

    #[test]
    fn full_field_yields_none() {
        let field = FieldSize::new(8, 8).unwrap();
        let segs: Vec<_> = (0..field.cells()).map(|i| field.position_at(i)).collect();
        let snake = Snake::from_segments(&segs, Direction::Right).unwrap();
        let mut spawner = FoodSpawner::new();
        assert_eq!(spawner.spawn(&mut SimpleRng::new(1), field, &snake), None);
    }

    #[test]
    fn spreads_over_the_field() {
        let field = FieldSize::new(8, 8).unwrap();
        let snake = Snake::new_centered(field);
        let mut rng = SimpleRng::new(5);
        let mut spawner = FoodSpawner::new();
        let mut hits = vec![0u32; field.cells()];
        for _ in 0..6000 {
            let p = spawner.spawn(&mut rng, field, &snake).unwrap();
            hits[field.index_of(p)] += 1;
        }
        let free_hit = hits
            .iter()
            .enumerate()
            .filter(|(i, _)| !snake.occupies(field.position_at(*i)))
            .all(|(_, &n)| n > 0);
        assert!(free_hit);
    }

    #[test]
    fn last_free_cell_is_reachable_on_large_fields() {
        let field = FieldSize::new(300, 300).unwrap();
        let snake = Snake::new_centered(field);
        let free = (field.cells() - snake.len()) as u32;

        // A seed whose first draw picks the highest free index.
        let seed = (1..20_000_000u32)
            .find(|&s| SimpleRng::new(s).next_range(free) == free - 1)
            .expect("some seed selects the last free cell");

        let mut spawner = FoodSpawner::new();
        let food = spawner.spawn(&mut SimpleRng::new(seed), field, &snake);
        assert_eq!(food, Some(Position::new(299, 299)));
    }
}
