use uuid::Uuid;

// Random v4 ids, unique even for items created in the same instant
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
