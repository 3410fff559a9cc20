//! Free-text search over dashboard records.

use crate::data::{CampaignTableRow, User};

/// A record that can be matched against a lowercase search needle.
pub trait Searchable {
    /// Returns true if any searchable field contains `needle`.
    /// `needle` is already lowercased.
    fn matches(&self, needle: &str) -> bool;
}

impl Searchable for CampaignTableRow {
    fn matches(&self, needle: &str) -> bool {
        contains_folded(self.campaign, needle) || contains_folded(self.status.as_ref(), needle)
    }
}

impl Searchable for User {
    fn matches(&self, needle: &str) -> bool {
        contains_folded(self.name, needle)
            || contains_folded(self.email, needle)
            || contains_folded(self.role.as_ref(), needle)
    }
}

fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

/// Filter `items` by a case-insensitive substring query.
///
/// An empty query matches everything. Order is preserved.
pub fn filter<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return items.iter().collect();
    }
    items.iter().filter(|item| item.matches(&needle)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{CAMPAIGN_TABLE, USERS};

    #[test]
    fn test_empty_query_matches_all_rows() {
        assert_eq!(filter(CAMPAIGN_TABLE, "").len(), CAMPAIGN_TABLE.len());
        assert_eq!(filter(USERS, "").len(), USERS.len());
    }

    #[test]
    fn test_rows_match_campaign_or_status_case_insensitively() {
        for query in ["sale", "ACTIVE", "aus", "o", "special", "xyz", "Dr"] {
            let needle = query.to_lowercase();
            let matched = filter(CAMPAIGN_TABLE, query);
            for row in &matched {
                assert!(
                    row.campaign.to_lowercase().contains(&needle)
                        || row.status.to_string().to_lowercase().contains(&needle),
                    "{} should not match {query}",
                    row.campaign
                );
            }
            let expected = CAMPAIGN_TABLE
                .iter()
                .filter(|row| {
                    row.campaign.to_lowercase().contains(&needle)
                        || row.status.to_string().to_lowercase().contains(&needle)
                })
                .count();
            assert_eq!(matched.len(), expected, "query {query}");
        }
    }

    #[test]
    fn test_status_query_matches_status_label() {
        let paused = filter(CAMPAIGN_TABLE, "paused");
        assert_eq!(paused.len(), 1);
        assert_eq!(paused[0].campaign, "Black Friday Deals");
    }

    #[test]
    fn test_man_matches_only_the_manager() {
        let matched = filter(USERS, "man");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Mike Johnson");
    }

    #[test]
    fn test_user_query_matches_email() {
        let matched = filter(USERS, "JANE@");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Jane Smith");
    }

    #[test]
    fn test_filter_preserves_order() {
        let active: Vec<_> = filter(CAMPAIGN_TABLE, "active")
            .into_iter()
            .map(|row| row.id)
            .collect();
        assert_eq!(active, vec!["1", "3", "5"]);
    }
}
