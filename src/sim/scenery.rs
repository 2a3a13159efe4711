//! Scrolling neighbourhood backdrop
//!
//! Purely decorative: houses, trees and clouds that scroll with the session
//! speed. Uses its own RNG stream so it never shifts gameplay randomness.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::Serialize;

use crate::consts::SCROLL_SPEED;

const HOUSE_COUNT: usize = 5;
const HOUSE_SPACING: f32 = 250.0;
const HOUSE_RECYCLE_X: f32 = -200.0;
const TREE_COUNT: usize = 6;
const TREE_SPACING: f32 = 200.0;
const TREE_RECYCLE_X: f32 = -50.0;
const CLOUD_COUNT: usize = 4;
const CLOUD_SPEED: f32 = 0.5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct House {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub roof_height: f32,
    pub windows: u8,
    pub has_chimney: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tree {
    pub x: f32,
    pub y: f32,
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Cloud {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Scenery {
    pub houses: Vec<House>,
    pub trees: Vec<Tree>,
    pub clouds: Vec<Cloud>,
    /// Total scroll distance (drives ground tufts)
    pub ground_offset: f32,
    #[serde(skip)]
    rng: Pcg32,
    #[serde(skip)]
    seed: u64,
    canvas_width: f32,
    ground_y: f32,
}

impl Scenery {
    pub fn new(seed: u64, canvas_width: f32, ground_y: f32) -> Self {
        let mut scenery = Self {
            houses: Vec::with_capacity(HOUSE_COUNT),
            trees: Vec::with_capacity(TREE_COUNT),
            clouds: Vec::with_capacity(CLOUD_COUNT),
            ground_offset: 0.0,
            rng: Pcg32::seed_from_u64(seed),
            seed,
            canvas_width,
            ground_y,
        };
        scenery.populate();
        scenery
    }

    /// Rebuild the initial backdrop (same layout every session)
    pub fn reset(&mut self) {
        self.rng = Pcg32::seed_from_u64(self.seed);
        self.houses.clear();
        self.trees.clear();
        self.clouds.clear();
        self.ground_offset = 0.0;
        self.populate();
    }

    fn populate(&mut self) {
        for i in 0..HOUSE_COUNT {
            let house = self.make_house(i as f32 * HOUSE_SPACING);
            self.houses.push(house);
        }
        for _ in 0..CLOUD_COUNT {
            let cloud = Cloud {
                x: self.rng.random_range(0.0..self.canvas_width),
                y: self.rng.random_range(30.0..130.0),
                width: self.rng.random_range(60.0..100.0),
                height: 30.0,
            };
            self.clouds.push(cloud);
        }
        for i in 0..TREE_COUNT {
            let tree = self.make_tree(i as f32 * TREE_SPACING + 100.0);
            self.trees.push(tree);
        }
    }

    fn make_house(&mut self, x: f32) -> House {
        House {
            x,
            y: self.ground_y - 100.0,
            width: self.rng.random_range(80.0..120.0),
            height: self.rng.random_range(80.0..120.0),
            roof_height: self.rng.random_range(30.0..50.0),
            windows: self.rng.random_range(2..5),
            has_chimney: self.rng.random_bool(0.5),
        }
    }

    fn make_tree(&mut self, x: f32) -> Tree {
        Tree {
            x,
            y: self.ground_y - 60.0,
            height: self.rng.random_range(50.0..80.0),
        }
    }

    /// Scroll everything left by the session speed, recycling off-screen props
    pub fn advance(&mut self, speed: f32) {
        let scroll = SCROLL_SPEED * speed;
        self.ground_offset += scroll;

        for house in &mut self.houses {
            house.x -= scroll;
        }
        self.houses.retain(|h| h.x > HOUSE_RECYCLE_X);
        while self.houses.len() < HOUSE_COUNT {
            let x = self.houses.last().map_or(0.0, |h| h.x) + HOUSE_SPACING;
            let house = self.make_house(x);
            self.houses.push(house);
        }

        for cloud in &mut self.clouds {
            cloud.x -= CLOUD_SPEED * speed;
            if cloud.x < -cloud.width {
                cloud.x = self.canvas_width;
            }
        }

        for tree in &mut self.trees {
            tree.x -= scroll;
        }
        self.trees.retain(|t| t.x > TREE_RECYCLE_X);
        while self.trees.len() < TREE_COUNT {
            let x = self.trees.last().map_or(0.0, |t| t.x) + TREE_SPACING;
            let tree = self.make_tree(x);
            self.trees.push(tree);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_stay_constant_while_scrolling() {
        let mut scenery = Scenery::new(1, 800.0, 450.0);
        for _ in 0..2000 {
            scenery.advance(1.6);
            assert_eq!(scenery.houses.len(), HOUSE_COUNT);
            assert_eq!(scenery.trees.len(), TREE_COUNT);
            assert_eq!(scenery.clouds.len(), CLOUD_COUNT);
        }
        assert!(scenery.houses.iter().all(|h| h.x > HOUSE_RECYCLE_X));
    }

    #[test]
    fn test_reset_restores_layout() {
        let mut scenery = Scenery::new(9, 800.0, 450.0);
        let initial = scenery.houses.clone();
        for _ in 0..500 {
            scenery.advance(1.0);
        }
        scenery.reset();
        assert_eq!(scenery.houses, initial);
        assert_eq!(scenery.ground_offset, 0.0);
    }
}
