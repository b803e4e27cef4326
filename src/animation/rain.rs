// src/animation/rain.rs
use super::ticker::{AnimationHandle, Ticker};
use crate::core::constants::{RAIN_CHARSET, RAIN_RESET_THRESHOLD};
use crate::ui::color::AppColor;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};
use std::time::Duration;

// Frames a glyph survives; mirrors the 4% alpha wash of the canvas version.
const FULL_INTENSITY: u8 = 24;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct RainCell {
    glyph: char,
    intensity: u8,
}

/// Matrix-style background rain, one drop per terminal column.
#[derive(Debug)]
pub struct MatrixRain {
    width: u16,
    height: u16,
    drops: Vec<u32>,
    cells: Vec<RainCell>,
    charset: Vec<char>,
    ticker: Ticker,
    rng: fastrand::Rng,
    handle: AnimationHandle,
}

impl MatrixRain {
    pub fn new(width: u16, height: u16, interval: Duration, handle: AnimationHandle) -> Self {
        Self::with_rng(width, height, interval, handle, fastrand::Rng::new())
    }

    pub fn with_seed(
        width: u16,
        height: u16,
        interval: Duration,
        handle: AnimationHandle,
        seed: u64,
    ) -> Self {
        Self::with_rng(width, height, interval, handle, fastrand::Rng::with_seed(seed))
    }

    fn with_rng(
        width: u16,
        height: u16,
        interval: Duration,
        handle: AnimationHandle,
        rng: fastrand::Rng,
    ) -> Self {
        let mut rain = Self {
            width: 0,
            height: 0,
            drops: Vec::new(),
            cells: Vec::new(),
            charset: RAIN_CHARSET.chars().collect(),
            ticker: Ticker::new(interval),
            rng,
            handle,
        };
        rain.reset(width, height);
        rain
    }

    /// Rebuilds the columns for a new size with every drop back at the top.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.handle.is_cancelled() {
            return;
        }
        self.reset(width, height);
        log::trace!("Matrix rain resized to {}x{}", width, height);
    }

    fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.drops = vec![1; width as usize];
        self.cells = vec![RainCell::default(); width as usize * height as usize];
    }

    pub fn advance(&mut self, elapsed: Duration) {
        if self.handle.is_cancelled() {
            return;
        }
        // Past one full screen of steps the picture no longer changes much.
        let steps = self.ticker.advance(elapsed).min(u32::from(self.height.max(1)));
        for _ in 0..steps {
            self.draw();
        }
    }

    /// One frame: fade everything, paint a glyph under each drop, move drops down.
    pub fn draw(&mut self) {
        for cell in &mut self.cells {
            cell.intensity = cell.intensity.saturating_sub(1);
        }

        let height = u32::from(self.height);
        for column in 0..self.drops.len() {
            let glyph = self.charset[self.rng.usize(..self.charset.len())];
            let row = self.drops[column].saturating_sub(1);
            if row < height {
                let idx = row as usize * self.width as usize + column;
                self.cells[idx] = RainCell {
                    glyph,
                    intensity: FULL_INTENSITY,
                };
            }

            if self.drops[column] > height && self.rng.f64() > RAIN_RESET_THRESHOLD {
                self.drops[column] = 0;
            }
            self.drops[column] += 1;
        }
    }

    pub fn stop(&self) {
        self.handle.cancel();
    }

    pub fn drops(&self) -> &[u32] {
        &self.drops
    }

    pub fn glyph_at(&self, x: u16, y: u16) -> Option<char> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let cell = self.cells[y as usize * self.width as usize + x as usize];
        (cell.intensity > 0).then_some(cell.glyph)
    }

    pub fn widget(&self, color: AppColor) -> RainWidget<'_> {
        RainWidget { rain: self, color }
    }
}

pub struct RainWidget<'a> {
    rain: &'a MatrixRain,
    color: AppColor,
}

impl Widget for RainWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bright = Style::default().fg(self.color.into());
        let faded = Style::default().fg(self.color.dimmed().into());

        for y in 0..area.height.min(self.rain.height) {
            for x in 0..area.width.min(self.rain.width) {
                let cell = self.rain.cells[y as usize * self.rain.width as usize + x as usize];
                if cell.intensity == 0 {
                    continue;
                }
                let style = if cell.intensity > FULL_INTENSITY / 2 {
                    bright
                } else {
                    faded
                };
                buf.get_mut(area.x + x, area.y + y)
                    .set_char(cell.glyph)
                    .set_style(style);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rain(width: u16, height: u16) -> MatrixRain {
        MatrixRain::with_seed(width, height, Duration::from_millis(35), AnimationHandle::new(), 7)
    }

    #[test]
    fn drops_start_at_one_and_fall() {
        let mut rain = rain(4, 3);
        assert_eq!(rain.drops(), &[1, 1, 1, 1]);
        rain.draw();
        assert_eq!(rain.drops(), &[2, 2, 2, 2]);
        for x in 0..4 {
            assert!(rain.glyph_at(x, 0).is_some());
            assert!(rain.glyph_at(x, 1).is_none());
        }
    }

    #[test]
    fn glyphs_come_from_the_charset() {
        let mut rain = rain(8, 4);
        rain.draw();
        for x in 0..8 {
            let glyph = rain.glyph_at(x, 0).expect("painted");
            assert!(RAIN_CHARSET.contains(glyph));
        }
    }

    #[test]
    fn trails_fade_out() {
        let mut rain = rain(1, 1);
        rain.draw();
        assert!(rain.glyph_at(0, 0).is_some());
        // Drop is past the bottom now; without a reset nothing repaints row 0.
        let mut faded = false;
        for _ in 0..FULL_INTENSITY {
            rain.drops[0] = 5;
            rain.draw();
            if rain.glyph_at(0, 0).is_none() {
                faded = true;
                break;
            }
        }
        assert!(faded);
    }

    #[test]
    fn drops_past_the_bottom_eventually_reset() {
        let mut rain = rain(3, 2);
        for _ in 0..2000 {
            rain.draw();
        }
        assert!(rain.drops().iter().all(|&d| d < 2000));
    }

    #[test]
    fn resize_rebuilds_columns() {
        let mut rain = rain(2, 2);
        rain.draw();
        rain.resize(5, 3);
        assert_eq!(rain.drops(), &[1; 5]);
        assert!(rain.glyph_at(4, 2).is_none());
        assert!(rain.glyph_at(5, 0).is_none());
    }

    #[test]
    fn stopped_rain_ignores_ticks_and_resizes() {
        let mut rain = rain(2, 2);
        rain.stop();
        rain.advance(Duration::from_secs(1));
        rain.resize(9, 9);
        assert_eq!(rain.drops(), &[1, 1]);
    }

    #[test]
    fn widget_paints_into_buffer() {
        let mut rain = rain(3, 2);
        rain.draw();
        let area = Rect::new(0, 0, 3, 2);
        let mut buf = Buffer::empty(area);
        rain.widget(AppColor::default()).render(area, &mut buf);
        let expected = rain.glyph_at(1, 0).expect("painted").to_string();
        assert_eq!(buf.get(1, 0).symbol(), expected);
        assert_eq!(buf.get(1, 1).symbol(), " ");
    }
}
