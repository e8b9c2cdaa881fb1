use super::*;

#[test]
fn stored_preference_outranks_the_system_signal() {
    assert_eq!(resolve_initial(Some("dark"), Some(true)), ThemeMode::Dark);
    assert_eq!(resolve_initial(Some("light"), Some(false)), ThemeMode::Light);
}

#[test]
fn system_signal_decides_when_nothing_is_stored() {
    assert_eq!(resolve_initial(None, Some(true)), ThemeMode::Light);
    assert_eq!(resolve_initial(None, Some(false)), ThemeMode::Dark);
}

#[test]
fn garbage_in_storage_falls_through_to_the_system_signal() {
    assert_eq!(resolve_initial(Some("solarized"), Some(true)), ThemeMode::Light);
    assert_eq!(resolve_initial(Some(""), Some(false)), ThemeMode::Dark);
}

#[test]
fn no_signal_at_all_defaults_to_dark() {
    assert_eq!(resolve_initial(None, None), ThemeMode::Dark);
}

#[test]
fn string_form_round_trips() {
    assert_eq!(ThemeMode::parse(ThemeMode::Light.as_str()), Some(ThemeMode::Light));
    assert_eq!(ThemeMode::parse(ThemeMode::Dark.as_str()), Some(ThemeMode::Dark));
    assert_eq!(ThemeMode::parse("LIGHT"), None);
}

#[test]
fn toggle_flips_between_the_two_modes() {
    assert_eq!(ThemeMode::Light.opposite(), ThemeMode::Dark);
    assert_eq!(ThemeMode::Dark.opposite(), ThemeMode::Light);
}

#[test]
fn toggle_control_names_the_mode_a_click_leads_to() {
    assert_eq!(ThemeMode::Light.toggle_label(), "Dark mode");
    assert_eq!(ThemeMode::Dark.toggle_label(), "Light mode");
    assert!(ThemeMode::Light.is_light());
    assert!(!ThemeMode::Dark.is_light());
}
