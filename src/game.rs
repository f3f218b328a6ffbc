use crate::pos::{Dir, Pos};
use ahash::AHashSet;
use anyhow::{bail, ensure};
use log::{debug, trace};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;

/// Why a game stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum End {
    Wall,
    Body,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Running,
    Terminated(End),
}

/// Result of a single tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Moved,
    Ate,
    Ended(End),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Dir),
    Quit,
}

pub struct Game {
    width: i32,
    height: i32,
    snake: VecDeque<Pos>,
    // Mirrors `snake` for constant-time self collision checks.
    occupied: AHashSet<Pos>,
    dir: Dir,
    food: Pos,
    score: u32,
    state: State,
    rng: SmallRng,
}

impl Game {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_rng(width, height, SmallRng::from_entropy())
    }

    /// Starts a one-cell snake in the middle of the grid, heading right.
    pub fn with_rng(width: u32, height: u32, rng: SmallRng) -> Self {
        let width = width as i32;
        let height = height as i32;
        let start = Pos::new(width / 2, height / 2);

        let mut g = Self {
            width,
            height,
            snake: VecDeque::from([start]),
            occupied: AHashSet::from_iter([start]),
            dir: Dir::Right,
            food: start,
            score: 0,
            state: State::Running,
            rng,
        };
        g.place_food();
        g
    }

    /// Builds a running game from an explicit body (head first), heading and food cell.
    pub fn from_parts(
        width: u32,
        height: u32,
        body: &[Pos],
        dir: Dir,
        food: Pos,
        rng: SmallRng,
    ) -> anyhow::Result<Self> {
        let (w, h) = (width as i32, height as i32);
        ensure!(!body.is_empty(), "snake body must have at least one cell");
        ensure!(food.within(w, h), "food {food:?} lies outside the {width}x{height} grid");

        let mut occupied = AHashSet::with_capacity(body.len());
        for &p in body {
            if !p.within(w, h) {
                bail!("body cell {p:?} lies outside the {width}x{height} grid");
            }
            if !occupied.insert(p) {
                bail!("body cell {p:?} appears twice");
            }
        }

        Ok(Self {
            width: w,
            height: h,
            snake: body.iter().copied().collect(),
            occupied,
            dir,
            food,
            score: 0,
            state: State::Running,
            rng,
        })
    }

    pub fn snake(&self) -> &VecDeque<Pos> {
        &self.snake
    }

    pub fn head(&self) -> Pos {
        self.snake[0]
    }

    pub fn dir(&self) -> Dir {
        self.dir
    }

    pub fn food(&self) -> Pos {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == State::Running
    }

    pub fn snake_contains(&self, p: Pos) -> bool {
        self.occupied.contains(&p)
    }

    // Uniform over the whole grid; the body is not excluded.
    fn place_food(&mut self) {
        let x = self.rng.gen_range(0..self.width);
        let y = self.rng.gen_range(0..self.height);
        self.food = Pos::new(x, y);
    }

    pub fn apply(&mut self, cmd: Command) {
        match cmd {
            Command::Turn(dir) => self.change_dir(dir),
            Command::Quit => self.quit(),
        }
    }

    /// Sets the heading for the next move unless it would reverse the snake.
    pub fn change_dir(&mut self, new_dir: Dir) {
        if new_dir == self.dir.opposite() {
            trace!("ignoring reversal {:?} -> {:?}", self.dir, new_dir);
            return;
        }
        self.dir = new_dir;
    }

    pub fn quit(&mut self) {
        if self.is_running() {
            self.state = State::Terminated(End::Quit);
        }
    }

    pub fn step(&mut self) -> Outcome {
        if let State::Terminated(end) = self.state {
            return Outcome::Ended(end);
        }

        let new_head = self.head().step(self.dir);

        if !new_head.within(self.width, self.height) {
            return self.terminate(End::Wall);
        }

        // The tail has not moved yet, so its cell counts.
        if self.snake_contains(new_head) {
            return self.terminate(End::Body);
        }

        self.snake.push_front(new_head);
        self.occupied.insert(new_head);

        if new_head == self.food {
            self.score += 1;
            self.place_food();
            debug!("ate at {:?}, score {}, next food {:?}", new_head, self.score, self.food);
            Outcome::Ate
        } else {
            if let Some(tail) = self.snake.pop_back() {
                self.occupied.remove(&tail);
            }
            Outcome::Moved
        }
    }

    fn terminate(&mut self, end: End) -> Outcome {
        self.state = State::Terminated(end);
        Outcome::Ended(end)
    }
}
