use eframe::egui;

use crate::components::ItemTile;
use crate::model::{Outfit, Slot};
use crate::state::ClosetStore;
use crate::thumbnails::ThumbnailCache;

#[derive(Debug, Default)]
pub struct GalleryState {
    viewing: Option<String>,
    pending_delete: Option<String>,
}

/// Saved-outfit gallery. Returns true when an outfit was put back on the
/// canvas, so the caller can switch over to it.
pub fn gallery_panel(
    ctx: &egui::Context,
    store: &mut ClosetStore,
    state: &mut GalleryState,
    thumbnails: &mut ThumbnailCache,
) -> bool {
    let mut worn = false;

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("My Outfits");
        ui.label(format!("{} saved outfit(s)", store.outfits().len()));
        ui.separator();

        if store.outfits().is_empty() {
            ui.weak("No outfits yet. Put one together on the closet tab and save it.");
            return;
        }

        let outfits = store.outfits().to_vec();
        egui::ScrollArea::vertical().id_salt("gallery").show(ui, |ui| {
            for outfit in &outfits {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.strong(outfit.name.as_str());
                        ui.weak(outfit.date_created.format("%Y-%m-%d %H:%M").to_string());
                    });
                    ui.horizontal_wrapped(|ui| {
                        for item in outfit.items.items() {
                            let texture = thumbnails.texture_for(ui.ctx(), item);
                            ItemTile::new(item, texture, 48.0).show(ui);
                        }
                    });
                    if !outfit.tags.is_empty() {
                        ui.small(outfit.tags.join(", "));
                    }
                    ui.horizontal(|ui| {
                        if ui.button("View").clicked() {
                            state.viewing = Some(outfit.id.clone());
                        }
                        if ui.button("Wear").on_hover_text("Load onto the canvas").clicked() {
                            store.set_canvas(outfit.items.clone());
                            worn = true;
                        }
                        if ui.button("🗑 Delete").clicked() {
                            state.pending_delete = Some(outfit.id.clone());
                        }
                    });
                });
                ui.add_space(4.0);
            }
        });
    });

    outfit_viewer(ctx, store, state, thumbnails);
    delete_confirmation(ctx, store, state);
    worn
}

fn outfit_viewer(ctx: &egui::Context, store: &ClosetStore, state: &mut GalleryState, thumbnails: &mut ThumbnailCache) {
    let Some(id) = state.viewing.clone() else {
        return;
    };
    let Some(outfit) = store.find_outfit(&id).cloned() else {
        state.viewing = None;
        return;
    };

    let mut open = true;
    egui::Window::new(outfit.name.as_str())
        .id(egui::Id::new("outfit_viewer"))
        .open(&mut open)
        .collapsible(false)
        .show(ctx, |ui| outfit_details(ui, &outfit, thumbnails));

    if !open {
        state.viewing = None;
    }
}

fn outfit_details(ui: &mut egui::Ui, outfit: &Outfit, thumbnails: &mut ThumbnailCache) {
    for slot in Slot::ALL {
        for item in outfit.items.slot(slot) {
            let texture = thumbnails.texture_for(ui.ctx(), item);
            ui.horizontal(|ui| {
                ItemTile::new(item, texture, 72.0).show(ui);
                ui.vertical(|ui| {
                    ui.strong(item.name.as_str());
                    ui.small(format!("{} · {} · {}", slot, item.color, item.season));
                });
            });
        }
    }
    ui.separator();
    ui.small(format!("Created {}", outfit.date_created.format("%Y-%m-%d %H:%M")));
}

fn delete_confirmation(ctx: &egui::Context, store: &mut ClosetStore, state: &mut GalleryState) {
    let Some(id) = state.pending_delete.clone() else {
        return;
    };
    let name = store
        .find_outfit(&id)
        .map(|outfit| outfit.name.clone())
        .unwrap_or_default();

    let mut confirmed = false;
    let mut cancelled = false;
    egui::Window::new("Delete outfit?")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!("Are you sure you want to delete \"{}\"?", name));
            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    cancelled = true;
                }
                if ui.button("Delete").clicked() {
                    confirmed = true;
                }
            });
        });

    if confirmed {
        store.remove_outfit(&id);
        if state.viewing.as_deref() == Some(id.as_str()) {
            state.viewing = None;
        }
        state.pending_delete = None;
    } else if cancelled {
        state.pending_delete = None;
    }
}
