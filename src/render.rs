use crate::config::{BLACK, GRID_SIZE, HEIGHT, WHITE, WIDTH};
use crate::game::Game;
use crate::pos::Pos;

type Rgb = (u8, u8, u8);

/// Paints the board: black background, white snake and food.
pub fn draw(frame: &mut [u8], game: &Game) {
    clear(frame, BLACK);
    for &p in game.snake() {
        fill_cell(frame, p, WHITE);
    }
    fill_cell(frame, game.food(), WHITE);
}

pub fn clear(frame: &mut [u8], (r, g, b): Rgb) {
    for px in frame.chunks_exact_mut(4) {
        px.copy_from_slice(&[r, g, b, 0xff]);
    }
}

pub fn fill_cell(frame: &mut [u8], p: Pos, col: Rgb) {
    if p.x < 0 || p.y < 0 {
        return;
    }
    let x = (p.x as u32).saturating_mul(GRID_SIZE);
    let y = (p.y as u32).saturating_mul(GRID_SIZE);
    fill_rect(frame, x, y, GRID_SIZE, GRID_SIZE, col);
}

fn fill_rect(frame: &mut [u8], x: u32, y: u32, w: u32, h: u32, (r, g, b): Rgb) {
    let x2 = x.saturating_add(w).min(WIDTH);
    let y2 = y.saturating_add(h).min(HEIGHT);
    for py in y..y2 {
        for px in x..x2 {
            let idx = ((py * WIDTH + px) * 4) as usize;
            if let Some(dst) = frame.get_mut(idx..idx + 4) {
                dst.copy_from_slice(&[r, g, b, 0xff]);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos::Dir;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn frame() -> Vec<u8> {
        vec![0x55; (WIDTH * HEIGHT * 4) as usize]
    }

    fn pixel(frame: &[u8], x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * WIDTH + x) * 4) as usize;
        [frame[idx], frame[idx + 1], frame[idx + 2], frame[idx + 3]]
    }

    #[test]
    fn snake_and_food_are_white_on_black() {
        let body = [Pos::new(3, 4), Pos::new(2, 4)];
        let game = Game::from_parts(30, 20, &body, Dir::Right, Pos::new(10, 10), SmallRng::seed_from_u64(0)).unwrap();
        let mut f = frame();
        draw(&mut f, &game);

        let white = [255, 255, 255, 255];
        let black = [0, 0, 0, 255];
        assert_eq!(pixel(&f, 3 * 20 + 10, 4 * 20 + 10), white);
        assert_eq!(pixel(&f, 2 * 20, 4 * 20), white);
        assert_eq!(pixel(&f, 10 * 20 + 19, 10 * 20 + 19), white);
        assert_eq!(pixel(&f, 0, 0), black);
        assert_eq!(pixel(&f, 4 * 20, 4 * 20), black);
        assert_eq!(pixel(&f, WIDTH - 1, HEIGHT - 1), black);
    }

    #[test]
    fn cells_off_the_frame_are_clipped() {
        let mut f = frame();
        clear(&mut f, BLACK);
        fill_cell(&mut f, Pos::new(-1, 0), WHITE);
        fill_cell(&mut f, Pos::new(40, 40), WHITE);
        assert!(f.chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
    }
}
