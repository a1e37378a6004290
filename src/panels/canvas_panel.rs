use eframe::egui;

use super::sidebar::DraggedItem;
use crate::components::ItemTile;
use crate::model::{ClothingItem, Slot};
use crate::state::ClosetStore;
use crate::suggestion::SuggestionRule;
use crate::thumbnails::ThumbnailCache;

/// Tags given to outfits saved from the canvas
pub const SAVED_OUTFIT_TAGS: [&str; 1] = ["outfit"];

#[derive(Debug, Default)]
pub struct CanvasPanelState {
    /// Name being typed while the save dialog is open
    save_name: Option<String>,
}

pub fn canvas_panel(
    ctx: &egui::Context,
    store: &mut ClosetStore,
    state: &mut CanvasPanelState,
    thumbnails: &mut ThumbnailCache,
) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("Outfit Canvas");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("Clear").clicked() {
                    store.clear_canvas();
                }
                let can_save = !store.current_outfit().is_empty();
                if ui.add_enabled(can_save, egui::Button::new("Save outfit")).clicked() {
                    state.save_name = Some(String::new());
                }
            });
        });
        ui.separator();

        ui.columns(2, |columns| {
            egui::ScrollArea::vertical()
                .id_salt("canvas_slots")
                .show(&mut columns[0], |ui| {
                    for slot in Slot::ALL {
                        slot_zone(ui, store, slot, thumbnails);
                        ui.add_space(6.0);
                    }
                });
            egui::ScrollArea::vertical()
                .id_salt("suggestions")
                .show(&mut columns[1], |ui| {
                    suggestions_view(ui, store, thumbnails);
                });
        });
    });

    save_dialog(ctx, store, state);
}

fn slot_title(slot: Slot) -> &'static str {
    match slot {
        Slot::Top => "Top",
        Slot::Bottom => "Bottom",
        Slot::Shoes => "Shoes",
        Slot::Accessories => "Accessories",
    }
}

fn slot_hint(slot: Slot) -> &'static str {
    match slot {
        Slot::Top => "Drop a top here",
        Slot::Bottom => "Drop bottoms here",
        Slot::Shoes => "Drop shoes here",
        Slot::Accessories => "Drop accessories here",
    }
}

fn slot_zone(ui: &mut egui::Ui, store: &mut ClosetStore, slot: Slot, thumbnails: &mut ThumbnailCache) {
    let placed: Vec<ClothingItem> = store.current_outfit().slot(slot).into_iter().cloned().collect();
    let mut removed = None;

    let frame = egui::Frame::group(ui.style()).inner_margin(8.0);
    let (_, dropped) = ui.dnd_drop_zone::<DraggedItem, ()>(frame, |ui| {
        ui.set_min_width(ui.available_width());
        ui.strong(slot_title(slot));

        if placed.is_empty() {
            ui.weak(slot_hint(slot));
        }
        for item in &placed {
            let texture = thumbnails.texture_for(ui.ctx(), item);
            ui.horizontal(|ui| {
                ItemTile::new(item, texture, 56.0).show(ui);
                ui.label(item.name.as_str());
                if ui.small_button("✖").on_hover_text("Take off").clicked() {
                    removed = Some(item.id.clone());
                }
            });
        }
    });

    if let Some(id) = removed {
        store.remove_from_slot(slot, Some(&id));
    }
    if let Some(payload) = dropped {
        store.place_in_slot(slot, payload.0.clone());
    }
}

fn rule_label(rule: SuggestionRule) -> String {
    match rule {
        SuggestionRule::Color(color) => format!("all {}", color.as_str()),
        SuggestionRule::Tagged(tag) => tag.to_owned(),
    }
}

fn suggestions_view(ui: &mut egui::Ui, store: &mut ClosetStore, thumbnails: &mut ThumbnailCache) {
    ui.heading("Outfit Suggestions");

    let suggestions = store.suggestions();
    if suggestions.is_empty() {
        ui.weak("Add more items to your closet to get outfit suggestions!");
        return;
    }

    let mut chosen = None;
    for (index, suggestion) in suggestions.iter().enumerate() {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.set_min_width(ui.available_width());
            ui.label(format!("Suggestion {} ({})", index + 1, rule_label(suggestion.rule)));
            ui.horizontal_wrapped(|ui| {
                for item in &suggestion.items {
                    let texture = thumbnails.texture_for(ui.ctx(), item);
                    ItemTile::new(item, texture, 32.0).show(ui);
                    ui.small(item.name.as_str());
                }
            });
            if ui.button("Apply This Outfit").clicked() {
                chosen = Some(index);
            }
        });
        ui.add_space(4.0);
    }

    if let Some(index) = chosen {
        log::info!("Applying suggestion {}", index + 1);
        store.apply_suggestion(&suggestions[index]);
    }
}

fn save_dialog(ctx: &egui::Context, store: &mut ClosetStore, state: &mut CanvasPanelState) {
    let Some(name) = state.save_name.as_mut() else {
        return;
    };

    let mut save = false;
    let mut cancel = false;
    egui::Window::new("Save Outfit")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label("Outfit name");
            let response = ui.text_edit_singleline(name);
            let valid = !name.trim().is_empty();
            let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    cancel = true;
                }
                if ui.add_enabled(valid, egui::Button::new("Save")).clicked() || (valid && submitted) {
                    save = true;
                }
            });
        });

    if save {
        let name = name.trim().to_owned();
        let tags = SAVED_OUTFIT_TAGS.iter().map(|tag| tag.to_string()).collect();
        let id = store.save_current_outfit(name, tags);
        log::info!("Saved outfit {}", id);
        state.save_name = None;
    } else if cancel {
        state.save_name = None;
    }
}
