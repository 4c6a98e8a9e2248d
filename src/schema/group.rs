use std::collections::HashMap;

/// Table names that are identical except for letter case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    /// Lowercased table name shared by every variant.
    pub key: String,
    /// Distinct spellings in first-seen order. Always at least two.
    pub variants: Vec<String>,
}

/// Group table names by their lowercase form and keep only real duplicates.
///
/// Groups come back in order of first encounter, variants in first-seen
/// order. A spelling that was already seen is not recorded twice, so a table
/// declared twice with the exact same name does not form a group on its own.
pub fn find_duplicates(tables: &[String]) -> Vec<DuplicateGroup> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<DuplicateGroup> = Vec::new();

    for table in tables {
        let key = table.to_lowercase();
        match index.get(&key).copied() {
            Some(i) => {
                let variants = &mut groups[i].variants;
                if !variants.contains(table) {
                    variants.push(table.clone());
                }
            }
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(DuplicateGroup {
                    key,
                    variants: vec![table.clone()],
                });
            }
        }
    }

    groups.retain(|g| g.variants.len() > 1);
    groups
}

/// Sort groups lexicographically by key. Variant order is left untouched.
pub fn sorted_by_key(mut groups: Vec<DuplicateGroup>) -> Vec<DuplicateGroup> {
    groups.sort_by(|a, b| a.key.cmp(&b.key));
    groups
}
