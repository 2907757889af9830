//! アナログ文字盤の ASCII 描画
//!
//! 目盛りと 3 本の針を文字グリッドに打つ。端末の文字は縦長なので横半径を縦の約 2 倍にする。

use crate::domain::clock_face::{self, ClockDisplay};

pub const WIDTH: usize = 31;
pub const HEIGHT: usize = 15;

const HAND_STEPS: usize = 24;

struct Grid {
    cells: Vec<Vec<char>>,
}

impl Grid {
    fn new() -> Self {
        Self {
            cells: vec![vec![' '; WIDTH]; HEIGHT],
        }
    }

    fn center() -> (f64, f64) {
        ((WIDTH / 2) as f64, (HEIGHT / 2) as f64)
    }

    /// 12 時方向 0 度・時計回りの角度 angle、半径比 r（0–1）の位置に ch を置く
    fn plot(&mut self, angle: f64, r: f64, ch: char) {
        let (cx, cy) = Self::center();
        let rad = angle.to_radians();
        let x = (cx + r * cx * rad.sin()).round();
        let y = (cy - r * cy * rad.cos()).round();
        if x < 0.0 || y < 0.0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if y < HEIGHT && x < WIDTH {
            self.cells[y][x] = ch;
        }
    }

    fn hand(&mut self, angle: f64, length: f64, ch: char) {
        for step in 1..=HAND_STEPS {
            self.plot(angle, length * step as f64 / HAND_STEPS as f64, ch);
        }
    }

    fn into_lines(self) -> Vec<String> {
        self.cells
            .into_iter()
            .map(|row| row.into_iter().collect::<String>().trim_end().to_string())
            .collect()
    }
}

/// 文字盤を HEIGHT 行の文字列にする
pub fn draw(display: &ClockDisplay) -> Vec<String> {
    let mut grid = Grid::new();
    let markers = clock_face::markers();
    for m in markers.iter().filter(|m| !m.major) {
        grid.plot(m.angle, 1.0, '.');
    }
    for m in markers.iter().filter(|m| m.major) {
        grid.plot(m.angle, 1.0, 'o');
    }

    // 短い針ほど上に重ねる
    grid.hand(display.second_angle, 0.85, ':');
    grid.hand(display.minute_angle, 0.75, '+');
    grid.hand(display.hour_angle, 0.5, '#');

    let (cx, cy) = Grid::center();
    grid.cells[cy as usize][cx as usize] = 'O';
    grid.into_lines()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock_face::render;
    use chrono::NaiveDate;
    use common::domain::Timestamp;

    fn dial_at(hour: u32, minute: u32, second: u32) -> Vec<Vec<char>> {
        let date = NaiveDate::from_ymd_opt(2026, 10, 17).unwrap();
        let display = render(&Timestamp::new(date, hour, minute, second).unwrap());
        draw(&display)
            .into_iter()
            .map(|line| format!("{:width$}", line, width = WIDTH).chars().collect())
            .collect()
    }

    #[test]
    fn test_dial_size_and_center() {
        let grid = dial_at(10, 10, 30);
        assert_eq!(grid.len(), HEIGHT);
        assert!(grid.iter().all(|row| row.len() == WIDTH));
        assert_eq!(grid[HEIGHT / 2][WIDTH / 2], 'O');
    }

    #[test]
    fn test_dial_hour_marks() {
        let grid = dial_at(10, 10, 30);
        // 12 時・6 時・3 時・9 時の時目盛り
        assert_eq!(grid[0][WIDTH / 2], 'o');
        assert_eq!(grid[HEIGHT - 1][WIDTH / 2], 'o');
        assert_eq!(grid[HEIGHT / 2][WIDTH - 1], 'o');
        assert_eq!(grid[HEIGHT / 2][0], 'o');
    }

    #[test]
    fn test_dial_hands_point_in_their_direction() {
        // 3:00:30 → 時針は右、分針は上、秒針は下
        let grid = dial_at(3, 0, 30);
        let (cx, cy) = (WIDTH / 2, HEIGHT / 2);
        assert!(grid[cy][cx + 1..WIDTH - 1].contains(&'#'));
        assert!((1..cy).any(|y| grid[y][cx] == '+'));
        assert!((cy + 1..HEIGHT - 1).any(|y| grid[y][cx] == ':'));
        assert!(!grid[cy][..cx].contains(&'#'));
    }
}
