use crate::config::ClosetConfig;
use crate::panels::{self, CanvasPanelState, GalleryState, SidebarState};
use crate::sample_data;
use crate::state::{ClosetStore, KeyValueStore};
use crate::thumbnails::ThumbnailCache;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub enum Tab {
    #[default]
    Closet,
    Outfits,
}

/// UI preferences restored through eframe's own storage. The closet data
/// itself lives in the store's records, not here.
#[derive(Debug, Default, serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct UiPrefs {
    pub tab: Tab,
}

pub struct ClosetApp {
    store: ClosetStore,
    prefs: UiPrefs,
    sidebar: SidebarState,
    canvas: CanvasPanelState,
    gallery: GalleryState,
    thumbnails: ThumbnailCache,
}

impl ClosetApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: ClosetConfig) -> Self {
        let prefs = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        let mut store = ClosetStore::open(open_storage(&config), config.keys.clone());
        if config.seed_sample_data {
            sample_data::seed_if_empty(&mut store);
        }

        Self::with_store(store, prefs)
    }

    pub fn with_store(store: ClosetStore, prefs: UiPrefs) -> Self {
        Self {
            store,
            prefs,
            sidebar: SidebarState::default(),
            canvas: CanvasPanelState::default(),
            gallery: GalleryState::default(),
            thumbnails: ThumbnailCache::default(),
        }
    }

    pub fn store(&self) -> &ClosetStore {
        &self.store
    }

    pub fn tab(&self) -> Tab {
        self.prefs.tab
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn open_storage(config: &ClosetConfig) -> Box<dyn KeyValueStore> {
    log::info!("Keeping closet records in {}", config.data_dir.display());
    Box::new(crate::state::FileStorage::new(config.data_dir.clone()))
}

#[cfg(target_arch = "wasm32")]
fn open_storage(_config: &ClosetConfig) -> Box<dyn KeyValueStore> {
    match crate::state::LocalStorage::new() {
        Some(storage) => Box::new(storage),
        None => {
            log::warn!("localStorage unavailable, closet will not survive a reload");
            Box::new(crate::state::MemoryStorage::new())
        }
    }
}

impl eframe::App for ClosetApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.prefs);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sidebar.take_dropped_files(ctx);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Virtual Closet");
                ui.separator();
                ui.selectable_value(&mut self.prefs.tab, Tab::Closet, "Closet");
                ui.selectable_value(&mut self.prefs.tab, Tab::Outfits, "Outfits");
            });
        });

        panels::sidebar_panel(ctx, &mut self.store, &mut self.sidebar, &mut self.thumbnails);

        match self.prefs.tab {
            Tab::Closet => {
                panels::canvas_panel(ctx, &mut self.store, &mut self.canvas, &mut self.thumbnails);
            }
            Tab::Outfits => {
                let worn = panels::gallery_panel(ctx, &mut self.store, &mut self.gallery, &mut self.thumbnails);
                if worn {
                    self.prefs.tab = Tab::Closet;
                }
            }
        }
    }
}
