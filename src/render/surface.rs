use crate::{
    color::codec::Rgb,
    compose::composite::{Composite, Label},
    foundation::core::{Point, Size},
    scene::primitive::Primitive,
};

/// A drawing target for composites. Primitive coordinates are local to the open panel.
pub trait Surface {
    fn begin(&mut self, size: Size, background: Rgb);
    fn begin_panel(&mut self, origin: Point, size: Size);
    fn primitive(&mut self, primitive: &Primitive);
    fn end_panel(&mut self);
    /// Labels are always in composite coordinates.
    fn label(&mut self, label: &Label);
}

/// Walk `composite` into `surface`: panels in order, each panel's items by ascending z, then
/// labels.
pub fn draw_composite(composite: &Composite, surface: &mut dyn Surface) {
    surface.begin(composite.size, composite.background);
    for panel in &composite.panels {
        surface.begin_panel(panel.origin, panel.scene.size());
        for item in panel.scene.draw_order() {
            surface.primitive(&item.primitive);
        }
        surface.end_panel();
    }
    for label in &composite.labels {
        surface.label(label);
    }
}

/// One call made against a [`RecordingSurface`].
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Begin { size: Size, background: Rgb },
    BeginPanel { origin: Point, size: Size },
    Primitive(Primitive),
    EndPanel,
    Label(Label),
}

/// Surface that keeps every call in memory.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.calls.iter().filter_map(|call| match call {
            DrawCall::Primitive(p) => Some(p),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn begin(&mut self, size: Size, background: Rgb) {
        self.calls.push(DrawCall::Begin { size, background });
    }

    fn begin_panel(&mut self, origin: Point, size: Size) {
        self.calls.push(DrawCall::BeginPanel { origin, size });
    }

    fn primitive(&mut self, primitive: &Primitive) {
        self.calls.push(DrawCall::Primitive(primitive.clone()));
    }

    fn end_panel(&mut self) {
        self.calls.push(DrawCall::EndPanel);
    }

    fn label(&mut self, label: &Label) {
        self.calls.push(DrawCall::Label(label.clone()));
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
