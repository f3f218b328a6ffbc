#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`.
    pub fn step(self, dir: Dir) -> Self {
        let (dx, dy) = dir.offset();
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn within(self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.x < width && self.y >= 0 && self.y < height
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dir {
    Up,
    Down,
    Left,
    Right,
}

impl Dir {
    pub fn offset(self) -> (i32, i32) {
        match self {
            Dir::Up => (0, -1),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
            Dir::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
            Dir::Right => Dir::Left,
        }
    }
}

#[cfg(test)]
impl Dir {
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Down, Dir::Left, Dir::Right];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_unit_vectors() {
        for dir in Dir::ALL {
            let (dx, dy) = dir.offset();
            assert_eq!(dx.abs() + dy.abs(), 1);
            let (ox, oy) = dir.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn step_moves_one_cell() {
        let p = Pos::new(4, 7);
        assert_eq!(p.step(Dir::Up), Pos::new(4, 6));
        assert_eq!(p.step(Dir::Down), Pos::new(4, 8));
        assert_eq!(p.step(Dir::Left), Pos::new(3, 7));
        assert_eq!(p.step(Dir::Right), Pos::new(5, 7));
    }

    #[test]
    fn within_is_half_open() {
        assert!(Pos::new(0, 0).within(30, 20));
        assert!(Pos::new(29, 19).within(30, 20));
        assert!(!Pos::new(30, 5).within(30, 20));
        assert!(!Pos::new(5, 20).within(30, 20));
        assert!(!Pos::new(-1, 5).within(30, 20));
        assert!(!Pos::new(5, -1).within(30, 20));
    }
}
