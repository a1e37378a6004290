use eframe::egui;

use crate::model::{Category, ClothingItem, Color};

/// Square preview of a clothing item: its thumbnail when one could be
/// loaded, otherwise a swatch of the item's color with a category letter.
pub struct ItemTile<'a> {
    pub item: &'a ClothingItem,
    pub texture: Option<egui::TextureId>,
    pub size: f32,
}

impl<'a> ItemTile<'a> {
    pub fn new(item: &'a ClothingItem, texture: Option<egui::TextureId>, size: f32) -> Self {
        Self { item, texture, size }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(egui::vec2(self.size, self.size), egui::Sense::hover());

        if ui.is_rect_visible(rect) {
            let painter = ui.painter();
            match self.texture {
                Some(texture) => {
                    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                    painter.image(texture, rect, uv, egui::Color32::WHITE);
                }
                None => {
                    let fill = swatch(self.item.color);
                    painter.rect_filled(rect, 4.0, fill);
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        glyph(self.item.category),
                        egui::FontId::proportional(self.size * 0.5),
                        contrast(fill),
                    );
                }
            }
            painter.rect_stroke(rect, 4.0, egui::Stroke::new(1.0, egui::Color32::from_gray(120)));
        }

        response.on_hover_text(self.item.name.as_str())
    }
}

fn glyph(category: Category) -> &'static str {
    match category {
        Category::Top => "T",
        Category::Bottom => "B",
        Category::Shoes => "S",
        Category::Accessories => "A",
    }
}

pub(crate) fn swatch(color: Color) -> egui::Color32 {
    match color {
        Color::Black => egui::Color32::from_rgb(30, 30, 30),
        Color::White => egui::Color32::from_rgb(245, 245, 245),
        Color::Red => egui::Color32::from_rgb(200, 40, 40),
        Color::Blue => egui::Color32::from_rgb(40, 90, 200),
        Color::Green => egui::Color32::from_rgb(40, 150, 70),
        Color::Yellow => egui::Color32::from_rgb(240, 210, 50),
        Color::Pink => egui::Color32::from_rgb(240, 150, 190),
        Color::Purple => egui::Color32::from_rgb(130, 60, 170),
        Color::Orange => egui::Color32::from_rgb(240, 140, 40),
        Color::Brown => egui::Color32::from_rgb(120, 80, 40),
        Color::Gray => egui::Color32::from_rgb(128, 128, 128),
        Color::Navy => egui::Color32::from_rgb(20, 30, 90),
        Color::Beige => egui::Color32::from_rgb(225, 205, 170),
    }
}

fn contrast(fill: egui::Color32) -> egui::Color32 {
    let luma = 0.299 * fill.r() as f32 + 0.587 * fill.g() as f32 + 0.114 * fill.b() as f32;
    if luma > 150.0 {
        egui::Color32::BLACK
    } else {
        egui::Color32::WHITE
    }
}
