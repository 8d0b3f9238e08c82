// SPDX-FileCopyrightText: 2026 Leadpanel Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pure view derivation: follow-up filtering and fixed-size pagination.
//!
//! Everything here is a function of `(leads, filter_active, page)` and is
//! recomputed on every read -- nothing is cached across filter or page
//! changes. Snapshot order is preserved; no sort is applied.

use leadpanel_core::Lead;

/// Leads shown per page.
pub const PAGE_SIZE: usize = 15;

/// The filtered view of a snapshot: all leads, or only those with at
/// least one recorded follow-up attempt when the filter is active.
pub fn filtered(leads: &[Lead], filter_active: bool) -> Vec<&Lead> {
    leads
        .iter()
        .filter(|lead| !filter_active || lead.needs_follow_up())
        .collect()
}

/// Size of the filtered view without materializing it.
pub fn filtered_count(leads: &[Lead], filter_active: bool) -> usize {
    if filter_active {
        leads.iter().filter(|lead| lead.needs_follow_up()).count()
    } else {
        leads.len()
    }
}

/// Number of pages the filtered view spans. An empty view still has one
/// (empty) page, so `current_page` always has a valid home.
pub fn total_pages(filtered_count: usize) -> usize {
    filtered_count.div_ceil(PAGE_SIZE).max(1)
}

/// The slice of the filtered view visible on `page` (1-based): zero-based
/// offsets `[(page-1)*15, page*15)`.
pub fn page(leads: &[Lead], filter_active: bool, page: usize) -> Vec<&Lead> {
    let start = page.saturating_sub(1) * PAGE_SIZE;
    filtered(leads, filter_active)
        .into_iter()
        .skip(start)
        .take(PAGE_SIZE)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leadpanel_test_utils::fixtures;
    use proptest::prelude::*;

    /// 20 leads, the first `zero_follow_ups` of them with no follow-up yet.
    fn snapshot(total: usize, zero_follow_ups: usize) -> Vec<Lead> {
        (0..total)
            .map(|i| {
                let mut lead = fixtures::lead(i as i64 + 1);
                lead.follow_up_count = if i < zero_follow_ups { 0 } else { 1 + (i % 3) as u32 };
                lead
            })
            .collect()
    }

    #[test]
    fn inactive_filter_passes_everything_through() {
        let leads = snapshot(20, 3);
        assert_eq!(filtered_count(&leads, false), 20);
        assert_eq!(filtered(&leads, false).len(), 20);
    }

    #[test]
    fn active_filter_keeps_leads_with_follow_ups() {
        let leads = snapshot(20, 3);
        assert_eq!(filtered_count(&leads, true), 17);
        assert!(filtered(&leads, true).iter().all(|l| l.follow_up_count >= 1));
    }

    #[test]
    fn filter_preserves_snapshot_order() {
        let leads = snapshot(20, 3);
        let view = filtered(&leads, true);
        let ids: Vec<i64> = view.iter().map(|l| l.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted, "filter must not reorder the snapshot");
    }

    #[test]
    fn total_pages_is_never_zero() {
        assert_eq!(total_pages(0), 1);
        assert_eq!(total_pages(1), 1);
        assert_eq!(total_pages(15), 1);
        assert_eq!(total_pages(16), 2);
        assert_eq!(total_pages(17), 2);
        assert_eq!(total_pages(30), 2);
        assert_eq!(total_pages(31), 3);
    }

    #[test]
    fn second_page_of_seventeen_has_two_items() {
        let leads = snapshot(20, 3);
        assert_eq!(total_pages(filtered_count(&leads, true)), 2);
        let second = page(&leads, true, 2);
        assert_eq!(second.len(), 2);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let leads = snapshot(20, 3);
        assert!(page(&leads, true, 3).is_empty());
    }

    #[test]
    fn first_page_is_the_first_fifteen() {
        let leads = snapshot(20, 0);
        let first = page(&leads, false, 1);
        assert_eq!(first.len(), PAGE_SIZE);
        assert_eq!(first[0].id, 1);
        assert_eq!(first[14].id, 15);
    }

    proptest! {
        #[test]
        fn filtered_never_grows(total in 0usize..60, zeroes in 0usize..60, active: bool) {
            let zeroes = zeroes.min(total);
            let leads = snapshot(total, zeroes);
            let count = filtered_count(&leads, active);
            prop_assert!(count <= leads.len());
            // Equality exactly when the filter is off or nothing is filtered out.
            let all_followed = leads.iter().all(|l| l.follow_up_count >= 1);
            prop_assert_eq!(count == leads.len(), !active || all_followed);
        }

        #[test]
        fn every_page_fits_the_page_size(total in 0usize..100, p in 1usize..10) {
            let leads = snapshot(total, 0);
            prop_assert!(page(&leads, false, p).len() <= PAGE_SIZE);
        }
    }
}
