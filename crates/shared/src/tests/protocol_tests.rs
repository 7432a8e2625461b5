use super::*;

#[test]
fn parses_menu_choices_after_trimming() {
    assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::CompleteTask));
    assert_eq!(MenuChoice::parse(" 2 "), Some(MenuChoice::CheckStatus));
    assert_eq!(MenuChoice::parse("3\n"), Some(MenuChoice::ResetTarget));
    assert_eq!(MenuChoice::parse("\t4"), Some(MenuChoice::Exit));
}

#[test]
fn rejects_unknown_menu_choices() {
    for input in ["", "0", "5", "one", "1 2", "01"] {
        assert_eq!(MenuChoice::parse(input), None, "input {input:?}");
    }
}

#[test]
fn play_decision_is_case_insensitive_and_trimmed() {
    assert_eq!(PlayDecision::from_input("play"), PlayDecision::Play);
    assert_eq!(PlayDecision::from_input("  PLAY \n"), PlayDecision::Play);
    assert_eq!(PlayDecision::from_input("Play"), PlayDecision::Play);
}

#[test]
fn anything_else_skips() {
    for input in ["", "\n", "skip", "yes", "play now", "p"] {
        assert_eq!(PlayDecision::from_input(input), PlayDecision::Skip);
    }
}

#[test]
fn log_lines_name_the_target() {
    assert_eq!(log_new_target(4), "New target set to 4 tasks.");
    assert_eq!(log_manual_target(9), "Target manually reset to 9 tasks.");
}

#[test]
fn disabled_feature_messages_name_the_enabling_flag() {
    assert_eq!(
        STATUS_DISABLED,
        "Display status is not enabled. Please enable it with --show-status.\n"
    );
    assert_eq!(
        TARGET_LOCKED,
        "Target is not changeable. Please enable it with --target-changeable.\n"
    );
    assert_eq!(
        PLAY_ACKNOWLEDGMENT[0],
        "Launching League of Legends is up to you, this tracker won't do it automatically."
    );
}
