use wordle_ranker::{filter, parse_dictionary, CandidateSet, Constraint, Feedback, SolverError, Word};

const SAMPLE: &str = include_str!("../data/words.txt");

fn word(s: &str) -> Word {
    Word::parse(s).unwrap()
}

fn fb(s: &str) -> Feedback {
    Feedback::parse(s).unwrap()
}

fn set(words: &[&str]) -> CandidateSet {
    CandidateSet::from_words(words.iter().map(|w| word(w)).collect()).unwrap()
}

fn sample() -> CandidateSet {
    CandidateSet::from_words(parse_dictionary(SAMPLE, 5).unwrap()).unwrap()
}

fn names(set: &CandidateSet) -> Vec<&str> {
    set.iter().map(|w| w.as_str()).collect()
}

#[test]
fn test_all_green_leaves_only_the_guess() {
    let candidates = set(&["crane", "trace", "grape", "plane"]);
    let result = filter(&candidates, &word("crane"), &fb("ggggg")).unwrap();
    assert_eq!(names(&result), ["crane"]);
}

#[test]
fn test_green_mismatch_eliminates() {
    let candidates = set(&["crane", "trace"]);
    let result = filter(&candidates, &word("trace"), &fb("gbbgg")).unwrap();
    assert!(!result.contains(&word("crane")));
    assert!(result.len() < candidates.len());
}

#[test]
fn test_yellow_and_black_on_same_letter() {
    let candidates = set(&["elbow", "eagle"]);
    // 'e' is yellow once and black once, so exactly one more 'e' remains.
    for feedback in ["bbybb", "bbbyb"] {
        let result = filter(&candidates, &word("speed"), &fb(feedback)).unwrap();
        assert_eq!(names(&result), ["elbow"], "feedback {feedback}");
    }
}

#[test]
fn test_yellow_only_sets_a_lower_bound() {
    let candidates = set(&["elbow", "geese", "brick"]);
    let result = filter(&candidates, &word("adieu"), &fb("bbbyb")).unwrap();
    assert_eq!(names(&result), ["elbow", "geese"]);
}

#[test]
fn test_black_only_forbids_the_letter() {
    let candidates = set(&["crane", "brick", "think"]);
    let result = filter(&candidates, &word("rouge"), &fb("bbbbb")).unwrap();
    assert_eq!(names(&result), ["think"]);
}

#[test]
fn test_green_occurrence_not_counted_against_black() {
    // One 'e' is green; the black 'e' only forbids further ones.
    let candidates = set(&["those", "geese", "theme"]);
    let result = filter(&candidates, &word("eerie"), &fb("bbbbg")).unwrap();
    assert_eq!(names(&result), ["those"]);
}

#[test]
fn test_position_exclusion() {
    let candidates = set(&["stare", "arise"]);
    // Yellow 'a' at position 0 rules out words starting with 'a'.
    let result = filter(&candidates, &word("adieu"), &fb("ybbbb")).unwrap();
    assert!(result.is_empty());
    let result = filter(&candidates, &word("about"), &fb("ybbby")).unwrap();
    assert_eq!(names(&result), ["stare"]);
}

#[test]
fn test_empty_result_is_not_an_error() {
    let candidates = set(&["crane", "trace"]);
    let result = filter(&candidates, &word("zzzzz"), &fb("ggggg")).unwrap();
    assert!(result.is_empty());
    assert_eq!(result.word_len(), 5);
}

#[test]
fn test_preserves_order() {
    let candidates = set(&["toast", "roast", "crane", "coast"]);
    let result = filter(&candidates, &word("least"), &fb("bbggg")).unwrap();
    assert_eq!(names(&result), ["toast", "roast", "coast"]);
}

#[test]
fn test_shape_mismatch() {
    let candidates = set(&["crane", "trace"]);
    assert!(matches!(
        filter(&candidates, &word("cranes"), &fb("gggggg")),
        Err(SolverError::ShapeMismatch {
            expected: 5,
            found: 6
        })
    ));
    assert!(matches!(
        filter(&candidates, &word("crane"), &fb("gggg")),
        Err(SolverError::ShapeMismatch {
            expected: 5,
            found: 4
        })
    ));
    assert!(CandidateSet::from_words(vec![word("crane"), word("cranes")]).is_err());
}

#[test]
fn test_constraint_bounds() {
    let constraint = Constraint::new(&word("speed"), &fb("bbybb")).unwrap();
    let e = constraint.bound('e').unwrap();
    assert_eq!((e.min, e.max), (1, Some(1)));
    let s = constraint.bound('s').unwrap();
    assert_eq!((s.min, s.max), (0, Some(0)));
    assert!(constraint.bound('z').is_none());

    let constraint = Constraint::new(&word("speed"), &fb("bbyyb")).unwrap();
    let e = constraint.bound('e').unwrap();
    assert_eq!((e.min, e.max), (2, None));
}

#[test]
fn test_idempotent() {
    let candidates = sample();
    for (guess, feedback) in [("crane", "bybbg"), ("speed", "bbybb"), ("adieu", "ybbgb")] {
        let once = filter(&candidates, &word(guess), &fb(feedback)).unwrap();
        let twice = filter(&once, &word(guess), &fb(feedback)).unwrap();
        assert_eq!(once, twice);
    }
}

#[test]
fn test_never_grows() {
    let candidates = sample();
    for guess in ["crane", "geese", "fuzzy"] {
        for secret in ["those", "creep", "beast"] {
            let feedback = Feedback::compute(&word(guess), &word(secret)).unwrap();
            let result = filter(&candidates, &word(guess), &feedback).unwrap();
            assert!(result.len() <= candidates.len());
            assert!(result.iter().all(|w| candidates.contains(w)));
        }
    }
}

#[test]
fn test_turn_order_does_not_matter() {
    let candidates = sample();
    let secret = word("there");
    let first = word("crane");
    let second = word("those");
    let f1 = Feedback::compute(&first, &secret).unwrap();
    let f2 = Feedback::compute(&second, &secret).unwrap();

    let a = filter(&filter(&candidates, &first, &f1).unwrap(), &second, &f2).unwrap();
    let b = filter(&filter(&candidates, &second, &f2).unwrap(), &first, &f1).unwrap();
    assert_eq!(a, b);
    assert!(a.contains(&secret));
}

#[test]
fn test_secret_survives_its_own_feedback() {
    let candidates = sample();
    for guess in ["crane", "geese", "eerie", "speed", "stare"] {
        let guess = word(guess);
        for secret in candidates.iter().step_by(7) {
            let feedback = Feedback::compute(&guess, secret).unwrap();
            let result = filter(&candidates, &guess, &feedback).unwrap();
            assert!(result.contains(secret), "{guess} {feedback:?} dropped {secret}");
        }
    }
}

#[test]
fn test_agrees_with_standard_feedback() {
    let candidates = sample();
    for guess in ["sores", "geese", "eagle"] {
        let guess = word(guess);
        for secret in candidates.iter().step_by(11) {
            let feedback = Feedback::compute(&guess, secret).unwrap();
            let result = filter(&candidates, &guess, &feedback).unwrap();
            let expected: Vec<Word> = candidates
                .iter()
                .filter(|w| Feedback::compute(&guess, w).unwrap() == feedback)
                .copied()
                .collect();
            assert_eq!(result.words(), expected.as_slice(), "{guess} against {secret}");
        }
    }
}
