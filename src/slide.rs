use raylib::prelude::*;
use crate::constants::*;
use crate::renderer::Renderer;

pub struct Slide {
    texture: Texture2D,
    pub offset_percent: f32,
    scale: f32,
}

impl Slide {
    pub fn new(texture: Texture2D) -> Slide {
        // Fit oversized images into the slot, never upscale small ones
        let fit_w = RENDER_WIDTH as f32 * 0.9 / texture.width() as f32;
        let fit_h = RENDER_HEIGHT as f32 * 0.9 / texture.height() as f32;
        let scale = fit_w.min(fit_h).min(1.0);

        Slide {
            texture,
            offset_percent: 0.0,
            scale,
        }
    }

    // Slot `slot` naturally sits at slot * 100% of the strip; the shared
    // offset then translates the whole strip so the matching slot lands in
    // the viewport. Off-screen slots draw harmlessly outside the framebuffer.
    pub fn draw(&self, d: &mut RaylibDrawHandle, slot: usize) {
        let slot_width = RENDER_WIDTH as f32;
        let translation = self.offset_percent / 100.0 * slot_width;

        let scaled_width = self.texture.width() as f32 * self.scale;
        let scaled_height = self.texture.height() as f32 * self.scale;

        // Center the image within its slot
        let position = Vector2::new(
            slot as f32 * slot_width + translation + (slot_width - scaled_width) * 0.5,
            (RENDER_HEIGHT as f32 - scaled_height) * 0.5,
        );

        d.draw_texture_ex(&self.texture, position, 0.0, self.scale, Color::WHITE);
    }
}

// Production renderer: the offset becomes the slide's transform, which the
// draw pass turns into pixels.
pub struct StripRenderer;

impl Renderer<Slide> for StripRenderer {
    fn apply_offset(&mut self, slide: &mut Slide, offset_percent: f32) {
        slide.offset_percent = offset_percent;
    }
}
