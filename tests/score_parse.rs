use beatloom::gen::score::{parse, ScoreError};
use beatloom::gen::Tune;

#[test]
fn keeps_numeric_rows_and_strips_comments() {
    let parsed = parse("1 0 0\n0 1 0 // comment\n\n0 0 1").expect("three ticks");
    assert_eq!(
        parsed.ticks,
        vec![vec![1, 0, 0], vec![0, 1, 0], vec![0, 0, 1]]
    );
    assert_eq!(parsed.track_count, 3);
}

#[test]
fn comment_only_input_is_an_empty_score() {
    assert_eq!(parse("// only comments\n   \n"), Err(ScoreError::Empty));
    assert_eq!(parse(""), Err(ScoreError::Empty));
    assert_eq!(parse("no numbers here\nnone at all"), Err(ScoreError::Empty));
}

#[test]
fn comment_can_start_mid_line() {
    let parsed = parse("1 0// tail 1 1 1\n0 1").expect("two ticks");
    assert_eq!(parsed.ticks, vec![vec![1, 0], vec![0, 1]]);
}

#[test]
fn non_numeric_tokens_are_dropped() {
    let parsed = parse("1 x 0 two 1\nkick snare\n0 1").expect("two ticks");
    assert_eq!(parsed.ticks, vec![vec![1, 0, 1], vec![0, 1]]);
    assert_eq!(parsed.track_count, 3);
}

#[test]
fn short_rows_are_not_padded() {
    let parsed = parse("1\n0 0 1 1").expect("two ticks");
    assert_eq!(parsed.track_count, 4);
    assert_eq!(parsed.ticks[0].len(), 1);

    let tune = Tune {
        ticks: parsed.ticks,
        track_count: parsed.track_count,
    };
    assert_eq!(tune.velocity_at(0, 0), 1);
    assert_eq!(tune.velocity_at(0, 3), 0);
    assert_eq!(tune.velocity_at(1, 3), 1);
    assert_eq!(tune.velocity_at(9, 0), 0);
}

#[test]
fn velocities_keep_their_integer_values() {
    let parsed = parse("2 -1 0").expect("one tick");
    assert_eq!(parsed.ticks, vec![vec![2, -1, 0]]);
}
