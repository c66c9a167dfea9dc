use crate::{resolve, Gesture, PLAYABLE};

#[test]
fn resolves_known_labels_case_insensitively() {
    assert_eq!(resolve("rock"), Gesture::Rock);
    assert_eq!(resolve("Paper"), Gesture::Paper);
    assert_eq!(resolve("SCISSORS"), Gesture::Scissors);
    assert_eq!(resolve("sCiSsOrS"), Gesture::Scissors);
}

#[test]
fn anything_else_is_unknown() {
    for label in [
        "",
        " ",
        "rock ",
        " paper",
        "scissor",
        "rocks",
        "unknown",
        "lizard",
        "spock",
        "null",
        "✊",
        "r\u{0}ock",
    ] {
        assert_eq!(resolve(label), Gesture::Unknown, "label {label:?}");
    }
}

#[test]
fn tags_roundtrip_through_resolve() {
    for g in PLAYABLE {
        assert_eq!(resolve(g.as_str()), g);
        assert_eq!(resolve(&g.to_string().to_uppercase()), g);
    }
}

#[test]
fn dominance_is_a_cycle() {
    for g in PLAYABLE {
        let beaten = g.beats().unwrap();
        assert_ne!(beaten, g);
        // The gesture g beats never beats g back.
        assert_ne!(beaten.beats(), Some(g));
    }
    assert_eq!(Gesture::Unknown.beats(), None);
}

#[test]
fn ordinal_order_is_rock_paper_scissors_unknown() {
    let mut all = Gesture::ALL;
    all.sort();
    assert_eq!(all, Gesture::ALL);
    assert!(Gesture::Rock < Gesture::Unknown);
}

#[test]
fn serde_uses_lowercase_tags() {
    let s = serde_yaml::to_string(&Gesture::Scissors).unwrap();
    assert_eq!(s.trim(), "scissors");
    let g: Gesture = serde_yaml::from_str("unknown").unwrap();
    assert_eq!(g, Gesture::Unknown);
}
