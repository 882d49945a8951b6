pub mod config;
pub mod renderer;

use std::{
    io::Write,
    time::{Duration, Instant},
};

use crate::{
    error::Result,
    generators::{Generator, generate_maze_with, get_rng},
};
use config::Config;
use renderer::{WallRenderer, open_entrance_and_exit};

/// Drives maze generation and rendering for the command line.
pub struct App {
    config: Config,
    renderer: WallRenderer,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl App {
    pub fn new(config: Config) -> Self {
        let renderer = WallRenderer::new(!config.no_color);
        Self { config, renderer }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Generate `count` mazes and draw each one to `out`, preceded by a header line.
    pub fn run(&self, out: &mut impl Write) -> Result<()> {
        self.config.validate()?;
        let Config {
            width,
            height,
            algorithm,
            steps,
            seed,
            count,
            ..
        } = self.config;

        let mut rng = get_rng(seed);
        tracing::info!(width, height, ?algorithm, count, ?seed, "Started generating mazes");

        for i in 0..count {
            let generator = algorithm.pick(&mut rng);
            tracing::info!("{} of {}: {}", i + 1, count, generator);
            writeln!(out, "{} of {}: {}", i + 1, count, generator)?;

            let maze = generate_maze_with(generator, width, height, steps, &mut rng)?;
            let mut walls = maze.wall_graph()?;
            open_entrance_and_exit(&mut walls, maze.width(), maze.height());
            self.renderer
                .render(out, &walls, maze.width(), maze.height())?;
        }

        tracing::info!("Finished generating mazes");
        Ok(())
    }

    /// Time `num_iters` generations of every algorithm on a `width` x `height` grid and
    /// report the mean duration of each.
    pub fn profile(
        &self,
        out: &mut impl Write,
        width: u16,
        height: u16,
        num_iters: Option<usize>,
    ) -> Result<Vec<(Generator, Duration)>> {
        let num_iters = num_iters.unwrap_or(10).max(1);
        let mut rng = get_rng(self.config.seed);
        let mut results = Vec::with_capacity(Generator::ALL.len());

        for generator in Generator::ALL {
            let start = Instant::now();
            for _ in 0..num_iters {
                generate_maze_with(generator, width, height, self.config.steps, &mut rng)?;
            }
            let mean = mean_duration(start.elapsed(), num_iters);
            tracing::info!(%generator, width, height, num_iters, ?mean, "profiled generator");
            writeln!(out, "{generator}: {mean:?} per {width}x{height} maze ({num_iters} runs)")?;
            results.push((generator, mean));
        }

        Ok(results)
    }
}

/// Average a total over `runs` runs; zero runs give zero.
fn mean_duration(total: Duration, runs: usize) -> Duration {
    match u32::try_from(runs) {
        Ok(0) => Duration::ZERO,
        Ok(runs) => total / runs,
        Err(_) => total.div_f64(runs as f64),
    }
}
