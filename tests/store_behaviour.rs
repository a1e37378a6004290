use virtual_closet::{
    Category, CategoryFilter, ClosetStore, ClothingItem, Color, ColorFilter, FilterUpdate, MemoryStorage,
    NewClothingItem, NewOutfit, OutfitCanvas, RecordKeys, Slot,
};

fn add(store: &mut ClosetStore, name: &str, category: Category, color: Color, tags: &[&str]) -> ClothingItem {
    let id = store.add_clothing_item(NewClothingItem::new(name, category, color).with_tags(tags.iter().copied()));
    store.find_item(&id).cloned().unwrap()
}

fn names(items: &[ClothingItem]) -> Vec<&str> {
    items.iter().map(|item| item.name.as_str()).collect()
}

#[test]
fn test_removing_unknown_ids_changes_nothing() {
    let mut store = ClosetStore::in_memory();
    add(&mut store, "Tee", Category::Top, Color::White, &[]);
    add(&mut store, "Jeans", Category::Bottom, Color::Blue, &[]);
    let top = store.clothing_items()[0].clone();
    store.save_current_outfit("Empty", vec![]);
    store.place_in_slot(Slot::Top, top);
    store.save_current_outfit("Just a tee", vec![]);

    let before = store.snapshot();

    store.remove_clothing_item("no-such-item");
    store.remove_outfit("no-such-outfit");

    assert_eq!(store.snapshot(), before);
}

#[test]
fn test_updating_unknown_id_is_a_no_op() {
    let mut store = ClosetStore::in_memory();
    let mut tee = add(&mut store, "Tee", Category::Top, Color::White, &[]);
    let before = store.snapshot();

    tee.id = "somebody-else".to_owned();
    tee.name = "Renamed".to_owned();
    store.update_clothing_item(tee);

    assert_eq!(store.snapshot(), before);
}

#[test]
fn test_update_replaces_in_place() {
    let mut store = ClosetStore::in_memory();
    add(&mut store, "Tee", Category::Top, Color::White, &[]);
    let mut jeans = add(&mut store, "Jeans", Category::Bottom, Color::Blue, &[]);
    add(&mut store, "Boots", Category::Shoes, Color::Brown, &[]);

    jeans.name = "Raw denim".to_owned();
    jeans.tags = vec!["casual".to_owned()];
    store.update_clothing_item(jeans.clone());

    // Position in the catalog is kept
    assert_eq!(names(store.clothing_items()), vec!["Tee", "Raw denim", "Boots"]);
    assert_eq!(store.find_item(&jeans.id), Some(&jeans));
}

#[test]
fn test_filter_requires_every_criterion() {
    let mut store = ClosetStore::in_memory();
    // Satisfies all three
    add(&mut store, "Navy blazer", Category::Top, Color::Navy, &["work"]);
    // Wrong category
    add(&mut store, "Navy chinos", Category::Bottom, Color::Navy, &["work"]);
    // Wrong color
    add(&mut store, "Grey blazer", Category::Top, Color::Gray, &["work"]);
    // No search match
    add(&mut store, "Navy polo", Category::Top, Color::Navy, &["weekend"]);

    store.set_filter(
        FilterUpdate::new()
            .category(CategoryFilter::Only(Category::Top))
            .color(ColorFilter::Only(Color::Navy))
            .search("WORK"),
    );

    assert_eq!(names(&store.filtered_items()), vec!["Navy blazer"]);
}

#[test]
fn test_filter_updates_merge_and_reset() {
    let mut store = ClosetStore::in_memory();
    add(&mut store, "Tee", Category::Top, Color::White, &[]);
    add(&mut store, "Jeans", Category::Bottom, Color::Blue, &[]);

    store.set_filter(FilterUpdate::new().category(CategoryFilter::Only(Category::Bottom)));
    store.set_filter(FilterUpdate::new().search("jea"));
    assert_eq!(store.filter().category, CategoryFilter::Only(Category::Bottom));
    assert_eq!(names(&store.filtered_items()), vec!["Jeans"]);

    store.set_filter(FilterUpdate::new().category(CategoryFilter::All).search(""));
    assert_eq!(names(&store.filtered_items()), vec!["Tee", "Jeans"]);
}

#[test]
fn test_search_ignores_letter_case_in_tags() {
    let mut store = ClosetStore::in_memory();
    add(&mut store, "Sneakers", Category::Shoes, Color::White, &["Casual"]);

    store.set_filter(FilterUpdate::new().search("cAsUaL"));

    assert_eq!(names(&store.filtered_items()), vec!["Sneakers"]);
}

#[test]
fn test_second_top_replaces_first() {
    let mut store = ClosetStore::in_memory();
    let tee = add(&mut store, "Tee", Category::Top, Color::White, &[]);
    let shirt = add(&mut store, "Shirt", Category::Top, Color::Blue, &[]);

    store.place_in_slot(Slot::Top, tee);
    store.place_in_slot(Slot::Top, shirt.clone());

    assert_eq!(store.current_outfit().slot(Slot::Top), vec![&shirt]);
}

#[test]
fn test_accessories_accumulate_and_remove_by_id() {
    let mut store = ClosetStore::in_memory();
    let watch = add(&mut store, "Watch", Category::Accessories, Color::Black, &[]);
    let scarf = add(&mut store, "Scarf", Category::Accessories, Color::Red, &[]);
    let belt = add(&mut store, "Belt", Category::Accessories, Color::Brown, &[]);

    for accessory in [&watch, &scarf, &belt] {
        store.place_in_slot(Slot::Accessories, accessory.clone());
    }
    assert_eq!(store.current_outfit().accessories, vec![watch.clone(), scarf.clone(), belt.clone()]);

    store.remove_from_slot(Slot::Accessories, Some(&scarf.id));
    assert_eq!(store.current_outfit().accessories, vec![watch, belt]);
}

#[test]
fn test_canvas_slots_clear_independently() {
    let mut store = ClosetStore::in_memory();
    let tee = add(&mut store, "Tee", Category::Top, Color::White, &[]);
    let boots = add(&mut store, "Boots", Category::Shoes, Color::Brown, &[]);
    store.place_in_slot(Slot::Top, tee);
    store.place_in_slot(Slot::Shoes, boots.clone());

    store.remove_from_slot(Slot::Top, None);
    assert!(store.current_outfit().top.is_none());
    assert_eq!(store.current_outfit().shoes, Some(boots));

    store.clear_canvas();
    assert!(store.current_outfit().is_empty());
}

#[test]
fn test_work_look_is_a_snapshot() {
    let mut store = ClosetStore::in_memory();
    let top = add(&mut store, "Oxford shirt", Category::Top, Color::White, &["formal"]);
    let bottom = add(&mut store, "Trousers", Category::Bottom, Color::Gray, &["formal"]);
    let shoes = add(&mut store, "Loafers", Category::Shoes, Color::Brown, &["formal"]);
    let accessory = add(&mut store, "Tie", Category::Accessories, Color::Navy, &[]);

    store.place_in_slot(Slot::Top, top.clone());
    store.place_in_slot(Slot::Bottom, bottom);
    store.place_in_slot(Slot::Shoes, shoes);
    store.place_in_slot(Slot::Accessories, accessory);
    let canvas = store.current_outfit().clone();

    let first = store.save_current_outfit("Work Look", vec!["outfit".to_owned()]);
    let second = store.save_current_outfit("Work Look", vec!["outfit".to_owned()]);
    assert_ne!(first, second);

    let outfit = store.find_outfit(&first).cloned().unwrap();
    assert_eq!(outfit.name, "Work Look");
    assert_eq!(outfit.items, canvas);
    assert!(outfit.date_created <= chrono::Utc::now());

    // Saving leaves the canvas alone
    assert_eq!(store.current_outfit(), &canvas);

    // Editing and then deleting the catalog entry does not reach the outfit
    let mut renamed = top.clone();
    renamed.name = "Stained shirt".to_owned();
    store.update_clothing_item(renamed);
    store.remove_clothing_item(&top.id);

    assert!(store.find_item(&top.id).is_none());
    assert_eq!(store.find_outfit(&first).unwrap().items.top, Some(top));
}

#[test]
fn test_wearing_a_saved_outfit_restores_the_canvas() {
    let mut store = ClosetStore::in_memory();
    let tee = add(&mut store, "Tee", Category::Top, Color::White, &[]);
    store.place_in_slot(Slot::Top, tee);
    let id = store.save_current_outfit("Basic", vec![]);
    store.clear_canvas();

    let saved = store.find_outfit(&id).unwrap().items.clone();
    store.set_canvas(saved.clone());

    assert_eq!(store.current_outfit(), &saved);
}

#[test]
fn test_update_outfit_keeps_position_and_persists() {
    let storage = MemoryStorage::new();
    let mut store = ClosetStore::open(Box::new(storage.clone()), RecordKeys::default());
    let tee = add(&mut store, "Tee", Category::Top, Color::White, &[]);
    let jeans = add(&mut store, "Jeans", Category::Bottom, Color::Blue, &[]);
    store.add_outfit(NewOutfit::new("Monday", OutfitCanvas::new(), vec![]));
    let tuesday = store.add_outfit(NewOutfit::new("Tuesday", OutfitCanvas::new(), vec![]));
    store.add_outfit(NewOutfit::new("Wednesday", OutfitCanvas::new(), vec![]));

    let mut edited = store.find_outfit(&tuesday).cloned().unwrap();
    edited.name = "Casual Tuesday".to_owned();
    edited.items.place(Slot::Top, tee);
    edited.items.place(Slot::Bottom, jeans);
    edited.tags = vec!["casual".to_owned()];
    store.update_outfit(edited.clone());

    let names: Vec<_> = store.outfits().iter().map(|o| o.name.as_str()).collect();
    assert_eq!(names, ["Monday", "Casual Tuesday", "Wednesday"]);
    assert_eq!(store.find_outfit(&tuesday), Some(&edited));

    // The replacement is what a reopened store sees
    let reopened = ClosetStore::open(Box::new(storage), RecordKeys::default());
    assert_eq!(reopened.find_outfit(&tuesday), Some(&edited));
}

#[test]
fn test_load_data_replaces_both_collections() {
    let storage = MemoryStorage::new();
    let mut source = ClosetStore::in_memory();
    let tee = add(&mut source, "Tee", Category::Top, Color::White, &[]);
    source.place_in_slot(Slot::Top, tee);
    source.save_current_outfit("Basic", vec![]);

    let mut store = ClosetStore::open(Box::new(storage.clone()), RecordKeys::default());
    add(&mut store, "Old scarf", Category::Accessories, Color::Red, &[]);
    store.load_data(source.clothing_items().to_vec(), source.outfits().to_vec());

    assert_eq!(store.clothing_items(), source.clothing_items());
    assert_eq!(store.outfits(), source.outfits());

    let reopened = ClosetStore::open(Box::new(storage), RecordKeys::default());
    assert_eq!(reopened.clothing_items(), source.clothing_items());
    assert_eq!(reopened.outfits(), source.outfits());
}
