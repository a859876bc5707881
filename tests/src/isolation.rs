use std::sync::atomic::{AtomicU32, Ordering};

/// Generates unique table prefixes so tests sharing one database never touch
/// each other's tables.
///
/// Prefixes have the form `test_{process_id}_{test_counter}_`.
#[derive(Clone)]
#[allow(dead_code)] // Only used when the mysql feature is enabled
pub struct TestIsolation {
    process_id: u32,
    test_counter: u32,
}

#[allow(dead_code)]
static TEST_COUNTER: AtomicU32 = AtomicU32::new(0);

#[allow(dead_code)]
impl TestIsolation {
    pub fn new() -> Self {
        Self {
            process_id: std::process::id(),
            test_counter: TEST_COUNTER.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn table_prefix(&self) -> String {
        format!("test_{}_{}_", self.process_id, self.test_counter)
    }

    pub fn owns_table(&self, table_name: &str) -> bool {
        table_name.starts_with(&self.table_prefix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_are_unique() {
        let first = TestIsolation::new();
        let second = TestIsolation::new();

        assert_ne!(first.table_prefix(), second.table_prefix());
        assert!(first.table_prefix().starts_with("test_"));
    }

    #[test]
    fn owns_only_its_tables() {
        let isolation = TestIsolation::new();
        let table = format!("{}users", isolation.table_prefix());

        assert!(isolation.owns_table(&table));
        assert!(!TestIsolation::new().owns_table(&table));
    }
}
