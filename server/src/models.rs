//! Shapes shared with the frontend.
//!
//! Field names serialize camelCase to match the document store.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category label used for files that carry none.
pub const UNCATEGORIZED: &str = "Other";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaqItem {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub display_expanded: bool,
    pub order_index: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Display order among siblings follows `order_index`. The sort is
/// stable, so items sharing an index keep their incoming order.
pub fn sort_faq_items(items: &mut [FaqItem]) {
    items.sort_by_key(|item| item.order_index);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Pdf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    pub id: String,
    pub name: String,
    pub updated_at: String,
    #[serde(rename = "type")]
    pub kind: FileKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Files grouped by category label. Categories appear in first-seen
/// order and files keep their insertion order within each category;
/// both orders are display-relevant.
#[derive(Debug, Default)]
pub struct ProjectFilesByCategory {
    categories: Vec<(String, Vec<ProjectFile>)>,
}

impl ProjectFilesByCategory {
    pub fn group(files: Vec<ProjectFile>) -> Self {
        let mut categories: Vec<(String, Vec<ProjectFile>)> = Vec::new();

        for file in files {
            let label = file
                .category
                .clone()
                .unwrap_or_else(|| UNCATEGORIZED.to_string());

            match categories.iter_mut().find(|(name, _)| *name == label) {
                Some((_, group)) => group.push(file),
                None => categories.push((label, vec![file])),
            }
        }

        Self { categories }
    }

    pub fn get(&self, category: &str) -> Option<&[ProjectFile]> {
        self.categories
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, group)| group.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ProjectFile])> {
        self.categories
            .iter()
            .map(|(name, group)| (name.as_str(), group.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faq(id: &str, order_index: u32) -> FaqItem {
        FaqItem {
            id: id.to_string(),
            question: format!("question {id}"),
            answer: format!("answer {id}"),
            display_expanded: false,
            order_index,
            created_at: None,
            updated_at: None,
        }
    }

    fn file(id: &str, category: Option<&str>) -> ProjectFile {
        ProjectFile {
            id: id.to_string(),
            name: format!("{id}.pdf"),
            updated_at: "2026-08-01".to_string(),
            kind: FileKind::Pdf,
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn faq_items_sort_by_order_index() {
        let mut items = vec![faq("c", 3), faq("a", 1), faq("b", 2)];

        sort_faq_items(&mut items);

        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn faq_sort_is_stable_for_equal_indexes() {
        let mut items = vec![faq("first", 1), faq("second", 1), faq("zero", 0)];

        sort_faq_items(&mut items);

        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["zero", "first", "second"]);
    }

    #[test]
    fn faq_serializes_camel_case() {
        let json = serde_json::to_value(faq("a", 2)).unwrap();

        assert_eq!(json["orderIndex"], 2);
        assert_eq!(json["displayExpanded"], false);
        assert!(json.get("createdAt").is_none());
    }

    #[test]
    fn file_type_tag_is_pdf() {
        let json = serde_json::to_value(file("report", None)).unwrap();

        assert_eq!(json["type"], "pdf");
        assert_eq!(json["updatedAt"], "2026-08-01");
    }

    #[test]
    fn grouping_preserves_first_seen_category_order() {
        let grouped = ProjectFilesByCategory::group(vec![
            file("a", Some("Contracts")),
            file("b", Some("Reports")),
            file("c", Some("Contracts")),
        ]);

        let categories: Vec<&str> = grouped.iter().map(|(name, _)| name).collect();
        assert_eq!(categories, ["Contracts", "Reports"]);

        let contracts: Vec<&str> = grouped
            .get("Contracts")
            .unwrap()
            .iter()
            .map(|f| f.id.as_str())
            .collect();
        assert_eq!(contracts, ["a", "c"]);
    }

    #[test]
    fn uncategorized_files_share_the_fallback_label() {
        let grouped = ProjectFilesByCategory::group(vec![
            file("a", None),
            file("b", Some("Reports")),
            file("c", None),
        ]);

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped.get(UNCATEGORIZED).unwrap().len(), 2);
    }

    #[test]
    fn empty_input_groups_to_nothing() {
        assert!(ProjectFilesByCategory::group(Vec::new()).is_empty());
    }
}
