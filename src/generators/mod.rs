use rand::{Rng, SeedableRng, rngs::StdRng};

mod binary_tree;
mod origin_shift;
mod recur_backtrack;

pub use binary_tree::BinaryTree;
pub use origin_shift::{OriginShift, ParentTree};
pub use recur_backtrack::Backtracking;

use crate::{error::Result, maze::Maze};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// A strategy that turns grid dimensions into a perfect maze.
pub trait MazeAlgorithm {
    /// Generate a maze drawing all randomness from `rng`.
    /// The same algorithm, parameters and rng state always yield the same maze.
    fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Maze>;

    /// Generate a maze using the thread-local random source.
    fn generate(&self) -> Result<Maze> {
        self.generate_with(&mut rand::rng())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    OriginShift,
    Backtracking,
    BinaryTree,
}

impl Generator {
    /// Available maze generators
    pub const ALL: [Generator; 3] = [
        Generator::OriginShift,
        Generator::Backtracking,
        Generator::BinaryTree,
    ];

    /// Pick one of the available generators uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Generator {
        Generator::ALL[rng.random_range(0..Generator::ALL.len())]
    }
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::OriginShift => write!(f, "Origin Shift"),
            Generator::Backtracking => write!(f, "Recursive Backtracking"),
            Generator::BinaryTree => write!(f, "Binary Tree"),
        }
    }
}

/// Generate a `width` x `height` maze with the chosen generator, using default parameters.
pub fn generate_maze(
    generator: Generator,
    width: u16,
    height: u16,
    seed: Option<u64>,
) -> Result<Maze> {
    let mut rng = get_rng(seed);
    generate_maze_with(generator, width, height, None, &mut rng)
}

/// Like [`generate_maze`], with an explicit random source and an optional origin-shift
/// step count (ignored by the other generators).
pub fn generate_maze_with<R: Rng + ?Sized>(
    generator: Generator,
    width: u16,
    height: u16,
    steps: Option<u64>,
    rng: &mut R,
) -> Result<Maze> {
    match generator {
        Generator::OriginShift => OriginShift::new(width, height)
            .with_steps(steps)
            .generate_with(rng),
        Generator::Backtracking => Backtracking::new(width, height).generate_with(rng),
        Generator::BinaryTree => BinaryTree::new(width, height).generate_with(rng),
    }
}
