use eframe::egui;

use crate::components::ItemTile;
use crate::model::{
    Category, CategoryFilter, ClothingItem, Color, ColorFilter, FilterUpdate, NewClothingItem, Season, Slot,
};
use crate::state::ClosetStore;
use crate::thumbnails::ThumbnailCache;

/// Payload carried while a catalog item is dragged toward the canvas
#[derive(Debug, Clone)]
pub struct DraggedItem(pub ClothingItem);

/// Contents of the "add item" form
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub name: String,
    pub category: Category,
    pub color: Color,
    pub season: Season,
    /// Comma separated
    pub tags: String,
    pub image: String,
}

impl Default for ItemDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: Category::Top,
            color: Color::Black,
            season: Season::All,
            tags: String::new(),
            image: String::new(),
        }
    }
}

impl ItemDraft {
    /// `None` until the draft has a non-blank name
    pub fn to_new_item(&self) -> Option<NewClothingItem> {
        let name = self.name.trim();
        if name.is_empty() {
            return None;
        }
        Some(
            NewClothingItem::new(name, self.category, self.color)
                .with_season(self.season)
                .with_tags(parse_tags(&self.tags))
                .with_image(self.image.trim()),
        )
    }
}

pub fn parse_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect()
}

#[derive(Debug, Default)]
pub struct SidebarState {
    pub draft: ItemDraft,
    pub show_add_form: bool,
}

impl SidebarState {
    /// A file dropped onto the window becomes the draft's image
    pub fn take_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        if let Some(path) = dropped.iter().find_map(|file| file.path.as_ref()) {
            log::info!("Using dropped file as item image: {}", path.display());
            self.draft.image = path.display().to_string();
            self.show_add_form = true;
        }
    }
}

pub fn sidebar_panel(
    ctx: &egui::Context,
    store: &mut ClosetStore,
    sidebar: &mut SidebarState,
    thumbnails: &mut ThumbnailCache,
) {
    egui::SidePanel::left("closet_sidebar")
        .resizable(true)
        .default_width(300.0)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("My Closet");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = if sidebar.show_add_form { "Close" } else { "Add item" };
                    if ui.button(label).clicked() {
                        sidebar.show_add_form = !sidebar.show_add_form;
                    }
                });
            });

            if sidebar.show_add_form {
                ui.separator();
                if add_item_form(ui, store, &mut sidebar.draft) {
                    sidebar.show_add_form = false;
                }
            }

            ui.separator();
            filter_controls(ui, store);
            ui.separator();
            item_list(ui, store, thumbnails);
        });
}

fn filter_controls(ui: &mut egui::Ui, store: &mut ClosetStore) {
    let current = store.filter().clone();
    let mut category = current.category;
    let mut color = current.color;
    let mut search = current.search.clone();

    ui.horizontal(|ui| {
        ui.label("Search");
        ui.text_edit_singleline(&mut search);
    });

    egui::ComboBox::from_label("Category")
        .selected_text(match category {
            CategoryFilter::All => "All Categories",
            CategoryFilter::Only(c) => c.label(),
        })
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut category, CategoryFilter::All, "All Categories");
            for c in Category::ALL {
                ui.selectable_value(&mut category, CategoryFilter::Only(c), c.label());
            }
        });

    egui::ComboBox::from_label("Color")
        .selected_text(match color {
            ColorFilter::All => "All Colors",
            ColorFilter::Only(c) => c.label(),
        })
        .show_ui(ui, |ui| {
            ui.selectable_value(&mut color, ColorFilter::All, "All Colors");
            for c in Color::ALL {
                ui.selectable_value(&mut color, ColorFilter::Only(c), c.label());
            }
        });

    let mut update = FilterUpdate::new();
    if category != current.category {
        update = update.category(category);
    }
    if color != current.color {
        update = update.color(color);
    }
    if search != current.search {
        update = update.search(search);
    }
    if update != FilterUpdate::default() {
        store.set_filter(update);
    }
}

/// Returns true once an item was added
fn add_item_form(ui: &mut egui::Ui, store: &mut ClosetStore, draft: &mut ItemDraft) -> bool {
    egui::Grid::new("add_item_grid")
        .num_columns(2)
        .spacing([8.0, 4.0])
        .show(ui, |ui| {
            ui.label("Name");
            ui.text_edit_singleline(&mut draft.name);
            ui.end_row();

            ui.label("Category");
            egui::ComboBox::from_id_salt("draft_category")
                .selected_text(draft.category.label())
                .show_ui(ui, |ui| {
                    for c in Category::ALL {
                        ui.selectable_value(&mut draft.category, c, c.label());
                    }
                });
            ui.end_row();

            ui.label("Color");
            egui::ComboBox::from_id_salt("draft_color")
                .selected_text(draft.color.label())
                .show_ui(ui, |ui| {
                    for c in Color::ALL {
                        ui.selectable_value(&mut draft.color, c, c.label());
                    }
                });
            ui.end_row();

            ui.label("Season");
            egui::ComboBox::from_id_salt("draft_season")
                .selected_text(draft.season.as_str())
                .show_ui(ui, |ui| {
                    for s in Season::ALL {
                        ui.selectable_value(&mut draft.season, s, s.as_str());
                    }
                });
            ui.end_row();

            ui.label("Tags");
            ui.text_edit_singleline(&mut draft.tags)
                .on_hover_text("Comma separated, e.g. casual, summer");
            ui.end_row();

            ui.label("Image");
            ui.text_edit_singleline(&mut draft.image)
                .on_hover_text("Path to an image file or a data: URI, or drop a file onto the window");
            ui.end_row();
        });

    let new_item = draft.to_new_item();
    let clicked = ui
        .add_enabled(new_item.is_some(), egui::Button::new("Add to closet"))
        .clicked();
    match new_item {
        Some(item) if clicked => {
            let id = store.add_clothing_item(item);
            log::info!("Added clothing item {}", id);
            *draft = ItemDraft::default();
            true
        }
        _ => false,
    }
}

fn item_list(ui: &mut egui::Ui, store: &mut ClosetStore, thumbnails: &mut ThumbnailCache) {
    let items = store.filtered_items();
    ui.label(format!(
        "Showing {} of {} item(s)",
        items.len(),
        store.clothing_items().len()
    ));

    if items.is_empty() {
        ui.weak("No items match the current filters.");
        return;
    }

    let mut to_wear = None;
    let mut to_remove = None;

    egui::ScrollArea::vertical().id_salt("closet_items").show(ui, |ui| {
        for item in &items {
            let texture = thumbnails.texture_for(ui.ctx(), item);
            ui.horizontal(|ui| {
                ui.dnd_drag_source(
                    egui::Id::new(("closet_item", item.id.as_str())),
                    DraggedItem(item.clone()),
                    |ui| {
                        ItemTile::new(item, texture, 40.0).show(ui);
                    },
                );
                ui.vertical(|ui| {
                    ui.strong(item.name.as_str());
                    ui.small(format!("{} · {} · {}", item.category, item.color, item.season));
                    if !item.tags.is_empty() {
                        ui.small(item.tags.join(", "));
                    }
                });
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("🗑").on_hover_text("Remove from closet").clicked() {
                        to_remove = Some(item.id.clone());
                    }
                    if ui.small_button("Wear").on_hover_text("Put on the canvas").clicked() {
                        to_wear = Some(item.clone());
                    }
                });
            });
        }
    });

    if let Some(item) = to_wear {
        store.place_in_slot(Slot::from(item.category), item);
    }
    if let Some(id) = to_remove {
        store.remove_clothing_item(&id);
        thumbnails.retain(|id| store.find_item(id).is_some());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_are_split_and_trimmed() {
        assert_eq!(parse_tags(" casual, summer ,,linen "), ["casual", "summer", "linen"]);
        assert!(parse_tags("  ").is_empty());
    }

    #[test]
    fn test_blank_name_gives_no_item() {
        let draft = ItemDraft {
            name: "   ".to_owned(),
            ..ItemDraft::default()
        };
        assert!(draft.to_new_item().is_none());
    }

    #[test]
    fn test_draft_becomes_new_item() {
        let draft = ItemDraft {
            name: " Wool Coat ".to_owned(),
            category: Category::Top,
            color: Color::Gray,
            season: Season::Winter,
            tags: "formal, warm".to_owned(),
            image: " /tmp/coat.png ".to_owned(),
        };
        let item = draft.to_new_item().unwrap();
        assert_eq!(item.name, "Wool Coat");
        assert_eq!(item.tags, ["formal", "warm"]);
        assert_eq!(item.image, "/tmp/coat.png");
        assert_eq!(item.season, Season::Winter);
    }
}
