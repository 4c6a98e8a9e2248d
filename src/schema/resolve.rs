use super::group::DuplicateGroup;

/// A duplicate group together with the variant chosen to keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedGroup {
    pub key: String,
    pub variants: Vec<String>,
    pub primary: String,
}

impl ResolvedGroup {
    /// Variants to drop, in first-seen order.
    pub fn to_drop(&self) -> impl Iterator<Item = &str> {
        self.variants
            .iter()
            .map(String::as_str)
            .filter(move |v| *v != self.primary)
    }

    pub fn is_primary(&self, variant: &str) -> bool {
        variant == self.primary
    }
}

/// Pick the variant to keep.
///
/// The first variant starting with `prefix` wins; otherwise the first
/// variant. An empty list yields an empty name.
pub fn determine_primary<'a>(variants: &'a [String], prefix: &str) -> &'a str {
    variants
        .iter()
        .find(|v| v.starts_with(prefix))
        .or_else(|| variants.first())
        .map_or("", String::as_str)
}

pub fn resolve(group: DuplicateGroup, prefix: &str) -> ResolvedGroup {
    let primary = determine_primary(&group.variants, prefix).to_string();
    ResolvedGroup {
        key: group.key,
        variants: group.variants,
        primary,
    }
}
