mod canvas_panel;
mod gallery;
mod sidebar;

pub use canvas_panel::{canvas_panel, CanvasPanelState, SAVED_OUTFIT_TAGS};
pub use gallery::{gallery_panel, GalleryState};
pub use sidebar::{parse_tags, sidebar_panel, DraggedItem, ItemDraft, SidebarState};
