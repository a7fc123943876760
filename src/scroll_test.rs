use super::*;

// --- chrome_engaged ---

#[test]
fn resting_at_top_of_page() {
    assert!(!chrome_engaged(0.0));
}

#[test]
fn threshold_itself_keeps_resting_chrome() {
    assert!(!chrome_engaged(100.0));
}

#[test]
fn just_past_threshold_engages() {
    assert!(chrome_engaged(100.000_1));
    assert!(chrome_engaged(101.0));
}

#[test]
fn deep_scroll_stays_engaged() {
    assert!(chrome_engaged(25_000.0));
}

#[test]
fn negative_overscroll_is_resting() {
    assert!(!chrome_engaged(-40.0));
}

// --- anchor_scroll_top ---

#[test]
fn anchor_target_leaves_header_room() {
    assert_eq!(anchor_scroll_top(500.0), 420.0);
}

#[test]
fn anchor_near_page_top_may_go_negative() {
    assert_eq!(anchor_scroll_top(30.0), -50.0);
}
