// The only channel through which the rotator touches visual state. The
// production renderer writes a translation onto strip slides; tests drop in
// a double that records the calls instead.
pub trait Renderer<E> {
    fn apply_offset(&mut self, element: &mut E, offset_percent: f32);
}
