use crate::constants::{OFFSET_STEP, ROTATION_INTERVAL};
use crate::renderer::Renderer;
use crate::ticker::Ticker;

// Owns the slide collection and the current index. The collection is captured
// once at construction; membership never changes afterwards.
pub struct Rotator<E> {
    slides: Vec<E>,
    current_index: usize,
    ticker: Ticker,
    running: bool,
}

impl<E> Rotator<E> {
    pub fn new(slides: Vec<E>) -> Rotator<E> {
        Rotator {
            slides,
            current_index: 0,
            ticker: Ticker::new(ROTATION_INTERVAL),
            running: false,
        }
    }

    // "Content ready": position everything for the current index and let the
    // timer run from here on.
    pub fn start(&mut self, renderer: &mut impl Renderer<E>) {
        self.show(self.current_index, renderer);
        self.running = true;
    }

    // The original never cancels its timer; stop exists so embedders and
    // tests can halt rotation without tearing the rotator down.
    pub fn stop(&mut self) {
        self.running = false;
    }

    // Every slide receives the same offset. Slot i naturally sits at
    // i * 100% of the strip, so the slide whose slot matches the offset is
    // the one that lands in the viewport.
    pub fn show(&mut self, index: usize, renderer: &mut impl Renderer<E>) {
        let offset_percent = -(index as f32 * OFFSET_STEP);
        for slide in self.slides.iter_mut() {
            renderer.apply_offset(slide, offset_percent);
        }
    }

    pub fn advance(&mut self, renderer: &mut impl Renderer<E>) {
        if self.slides.is_empty() {
            return; // nothing to rotate, and (0 + 1) % 0 must never run
        }
        self.current_index = (self.current_index + 1) % self.slides.len();
        self.show(self.current_index, renderer);
    }

    // Pump from the frame loop. Each firing runs to completion before the
    // next, so the index mutation and the repositioning are atomic.
    pub fn update(&mut self, dt: f32, renderer: &mut impl Renderer<E>) {
        if !self.running {
            return;
        }
        for _ in 0..self.ticker.advance(dt) {
            self.advance(renderer);
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn slides(&self) -> &[E] {
        &self.slides
    }
}
