use uuid::Uuid;

/// Returns a random (v4) UUID, hyphenated unless `without_hyphens` is set.
pub fn new_uuid(without_hyphens: bool) -> String {
    let id = Uuid::new_v4();

    if without_hyphens {
        id.simple().to_string()
    } else {
        id.hyphenated().to_string()
    }
}
