use super::*;
use crate::config::Config;
use std::io::Cursor;

fn run_script(script: &str) -> Vec<String> {
    let config = Config::default();
    let mut session = Session::new(&config);
    let mut output = Vec::new();
    session
        .run(Cursor::new(script), &mut output)
        .expect("session runs");
    String::from_utf8(output)
        .expect("utf8 output")
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn fresh_session_reports_default_pen() {
    let lines = run_script("state\n");
    assert_eq!(lines, vec!["[black] [3.0px] [pen] strokes=0 undo=no redo=no"]);
}

#[test]
fn stroke_undo_redo_cycle() {
    let lines = run_script("stroke 0,0 10,10\nundo\nredo\nquit\n");
    assert_eq!(
        lines,
        vec![
            "[black] [3.0px] [pen] strokes=1 undo=yes redo=no",
            "[black] [3.0px] [pen] strokes=0 undo=no redo=yes",
            "[black] [3.0px] [pen] strokes=1 undo=yes redo=no",
        ]
    );
}

#[test]
fn pen_command_sets_color_and_width() {
    let lines = run_script("pen blue 4.5\nstate\n");
    assert_eq!(lines[0], "[blue] [4.5px] [pen] strokes=0 undo=no redo=no");
    assert_eq!(lines[1], lines[0]);
}

#[test]
fn eraser_toggles_and_restores_pen() {
    let lines = run_script("pen red 6\neraser\neraser\n");
    assert_eq!(
        lines,
        vec![
            "[red] [6.0px] [pen] strokes=0 undo=no redo=no",
            "[eraser] strokes=0 undo=no redo=no",
            "[red] [6.0px] [pen] strokes=0 undo=no redo=no",
        ]
    );
}

#[test]
fn stale_undo_is_a_quiet_noop() {
    let lines = run_script("undo\nredo\n");
    assert_eq!(lines[0], "[black] [3.0px] [pen] strokes=0 undo=no redo=no");
    assert_eq!(lines[1], lines[0]);
}

#[test]
fn new_stroke_clears_the_redo_future() {
    let lines = run_script("stroke 0,0 1,1\nundo\nstroke 2,2 3,3\n");
    assert_eq!(
        lines.last().unwrap(),
        "[black] [3.0px] [pen] strokes=1 undo=yes redo=no"
    );
}

#[test]
fn swatch_and_width_presets_follow_config_order() {
    // Default palette: black, blue, red, ...; widths: 1.5, 3.0, 4.5, 6.0
    let lines = run_script("swatch 2\nwidth 3\n");
    assert_eq!(
        lines,
        vec![
            "[blue] [3.0px] [pen] strokes=0 undo=no redo=no",
            "[blue] [4.5px] [pen] strokes=0 undo=no redo=no",
        ]
    );
}

#[test]
fn out_of_range_indices_report_errors() {
    let lines = run_script("swatch 9\nwidth 9\n");
    assert_eq!(
        lines,
        vec![
            "error: swatch 9 out of range (6 swatches)",
            "error: width 9 out of range (4 presets)",
        ]
    );
}

#[test]
fn parse_errors_do_not_end_the_session() {
    let lines = run_script("zoom 2\nstate\n");
    assert_eq!(lines[0], "error: unknown command 'zoom' (try 'help')");
    assert_eq!(lines[1], "[black] [3.0px] [pen] strokes=0 undo=no redo=no");
}

#[test]
fn eraser_strokes_count_in_history() {
    let lines = run_script("stroke 0,0 10,0\neraser\nstroke 5,0 5,10\nundo\n");
    assert_eq!(lines[2], "[eraser] strokes=2 undo=yes redo=no");
    assert_eq!(lines[3], "[eraser] strokes=1 undo=yes redo=yes");
}

#[test]
fn scroll_is_reported_and_clamped() {
    let lines = run_script("scroll 100\nstroke 0,2000 10,2000\nscroll 100\nscroll -5000\n");
    assert_eq!(lines[0], "scroll=0 height=600");
    assert_eq!(lines[2], "scroll=100 height=2024");
    assert_eq!(lines[3], "scroll=0 height=2024");
}
