use uuid::Uuid;

/// Identifies entities that expose a stable unique identifier.
pub trait Identifiable {
    fn id(&self) -> &str;
}

/// Takes the first record whose id equals `id`.
pub fn find_by_id<T: Identifiable>(records: Vec<T>, id: &str) -> Option<T> {
    records.into_iter().find(|record| record.id() == id)
}

/// Generates a fresh opaque identifier for a stored record.
pub fn generate_id() -> String {
    Uuid::new_v4().simple().to_string()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    struct Tagged(&'static str, u8);

    impl Identifiable for Tagged {
        fn id(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn generated_ids_are_unique_and_hyphenless() {
        let ids: HashSet<String> = (0..1_000).map(|_| generate_id()).collect();
        assert_eq!(ids.len(), 1_000);
        assert!(ids.iter().all(|id| id.len() == 32 && !id.contains('-')));
    }

    #[test]
    fn find_by_id_returns_first_match() {
        let records = vec![Tagged("a", 1), Tagged("b", 2), Tagged("b", 3)];
        assert_eq!(find_by_id(records, "b").map(|r| r.1), Some(2));
        assert!(find_by_id(vec![Tagged("a", 1)], "z").is_none());
    }
}
