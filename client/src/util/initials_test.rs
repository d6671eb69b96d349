use super::*;

#[test]
fn initials_two_words() {
    assert_eq!(initials("Jane Doe"), "JD");
}

#[test]
fn initials_single_word() {
    assert_eq!(initials("jane"), "J");
}

#[test]
fn initials_empty_name() {
    assert_eq!(initials(""), "");
}

#[test]
fn initials_double_space_skips_empty_token() {
    assert_eq!(initials("Jane  Doe"), "JD");
}

#[test]
fn initials_leading_and_trailing_spaces() {
    assert_eq!(initials("  ann lee  "), "AL");
}

#[test]
fn initials_only_spaces() {
    assert_eq!(initials("   "), "");
}

#[test]
fn initials_truncates_to_two() {
    assert_eq!(initials("Mary Ann Lee"), "MA");
}

#[test]
fn initials_non_ascii_first_letters() {
    assert_eq!(initials("élodie össi"), "ÉÖ");
}

#[test]
fn initials_uppercase_expansion_is_truncated() {
    // 'ß' upper-cases to "SS", which already fills both slots.
    assert_eq!(initials("ßa Lee"), "SS");
}
