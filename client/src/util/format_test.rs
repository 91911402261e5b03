use super::*;

// =============================================================
// format_count
// =============================================================

#[test]
fn small_counts_are_plain() {
    assert_eq!(format_count(0), "0");
    assert_eq!(format_count(999), "999");
}

#[test]
fn thousands_use_k_suffix() {
    assert_eq!(format_count(1_000), "1k");
    assert_eq!(format_count(12_340), "12.3k");
    assert_eq!(format_count(999_000), "999k");
}

#[test]
fn millions_use_m_suffix() {
    assert_eq!(format_count(1_000_000), "1M");
    assert_eq!(format_count(4_560_000), "4.6M");
}

// =============================================================
// percent_change / format_change
// =============================================================

#[test]
fn percent_change_needs_a_baseline() {
    assert_eq!(percent_change(0, 10), None);
    assert_eq!(percent_change(200, 250), Some(25.0));
    assert_eq!(percent_change(200, 150), Some(-25.0));
}

#[test]
fn format_change_is_signed() {
    assert_eq!(format_change(12.46), "+12.5%");
    assert_eq!(format_change(-3.0), "-3.0%");
    assert_eq!(format_change(0.0), "0.0%");
    assert_eq!(format_change(-0.01), "0.0%");
}

// =============================================================
// Names and greetings
// =============================================================

#[test]
fn first_name_takes_first_word() {
    assert_eq!(first_name("Jordan Avery"), "Jordan");
    assert_eq!(first_name("  Sam  "), "Sam");
    assert_eq!(first_name(""), "there");
}

#[test]
fn greeting_tracks_time_of_day() {
    assert_eq!(greeting_for_hour(8), "Good morning");
    assert_eq!(greeting_for_hour(13), "Good afternoon");
    assert_eq!(greeting_for_hour(22), "Good evening");
    assert_eq!(greeting_for_hour(2), "Good evening");
}
