use voterfile::{ProgressLine, VoterFileError, render_bar, write_progress};

use crate::utils::capture_frames;

#[test]
fn test_halfway_frame() {
    let frames = capture_frames(|sink| write_progress(sink, 30, 60, Some("halfway")));
    assert_eq!(frames.len(), 1);
    let frame = &frames[0];
    assert_eq!(frame.matches('=').count(), 30);
    assert_eq!(frame.matches('-').count(), 30);
    assert!(frame.ends_with("] 50.0% ...halfway"));
}

#[test]
fn test_frames_overwrite_in_place() {
    let frames = capture_frames(|sink| {
        for count in 0..=4 {
            write_progress(sink, count, 4, None)?;
        }
        Ok(())
    });
    assert_eq!(frames.len(), 5);
    assert!(frames.iter().all(|f| f.starts_with('[') && &f[61..62] == "]"));
    assert!(frames.iter().all(|f| !f.contains('\n')));
    assert!(frames[4].contains("100.0%"));
    assert!(frames[0].contains("] 0.0% ..."));
}

#[test]
fn test_same_inputs_same_bar() {
    let first = render_bar(7, 9, Some("voters"), 60).unwrap();
    let second = render_bar(7, 9, Some("voters"), 60).unwrap();
    assert_eq!(first, second);
    assert!(first.contains("77.8%"));
}

#[test]
fn test_percent_rounds_like_one_decimal_round() {
    // 63.75 and 61.25 are exact ties; they round to the even digit
    let up = render_bar(51, 80, Some("x"), 60).unwrap();
    assert!(up.contains("63.8%"), "{up}");
    assert_eq!(up.matches('=').count(), 38);

    let down = render_bar(49, 80, Some("x"), 60).unwrap();
    assert!(down.contains("61.2%"), "{down}");
    assert_eq!(down.matches('=').count(), 37);
}

#[test]
fn test_bar_width() {
    for count in 0..=13 {
        let line = render_bar(count, 13, None, 60).unwrap();
        let bar = &line[1..61];
        assert_eq!(bar.len(), 60);
        assert!(bar.chars().all(|c| c == '=' || c == '-'));
        assert_eq!(&line[61..62], "]");
    }
}

#[test]
fn test_progress_line_finish() {
    let mut line = ProgressLine::new(Vec::new(), 2).unwrap();
    assert_eq!(line.total(), 2);
    line.update(1, Some("first")).unwrap();
    line.update(2, Some("second")).unwrap();
    let text = String::from_utf8(line.finish().unwrap()).unwrap();
    assert!(text.ends_with("...second\r\n"));
    assert_eq!(text.matches('\r').count(), 2);
}

#[test]
fn test_zero_total() {
    let err = render_bar(1, 0, None, 60).unwrap_err();
    assert!(matches!(err, VoterFileError::InvalidProgress(_)));
}
