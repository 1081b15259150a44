// tests/integration_tests/report_test.rs
use super::common::{histogram_of, line_percentage, report_lines};
use anyhow::Result;
use charhist::{Histogram, ReportConfig};

#[test]
fn test_hello_world_report() {
    let histogram = histogram_of(&["Hello World"]);
    let expected = [
        format!("L: {} 30.00%", "#".repeat(30)),
        format!("O: {} 20.00%", "#".repeat(20)),
        format!("W: {} 10.00%", "#".repeat(10)),
        format!("R: {} 10.00%", "#".repeat(10)),
        format!("H: {} 10.00%", "#".repeat(10)),
        format!("E: {} 10.00%", "#".repeat(10)),
        format!("D: {} 10.00%", "#".repeat(10)),
    ];
    assert_eq!(histogram.to_string(), expected.join("\n"));
}

#[test]
fn test_aabbbcccc_report() {
    let histogram = histogram_of(&["aabbbcccc"]);
    let lines = report_lines(&histogram);
    assert_eq!(
        lines,
        vec![
            format!("C: {} 44.44%", "#".repeat(44)),
            format!("B: {} 33.33%", "#".repeat(33)),
            format!("A: {} 22.22%", "#".repeat(22)),
        ]
    );
}

#[test]
fn test_tie_break_descending_alphabetical() {
    let histogram = histogram_of(&["ababababab"]);
    let firsts: Vec<char> = histogram.entries().iter().map(|e| e.character).collect();
    assert_eq!(firsts, vec!['B', 'A']);
    assert!(histogram.render().starts_with("B: "));
}

#[test]
fn test_no_line_below_threshold() -> Result<()> {
    // 'Z' appears 1 in 150 times (0.67%), 'Y' 2 in 150 (1.33%).
    let text = format!("{}YYZ", "X".repeat(147));
    let histogram = histogram_of(&[&text]);
    let lines = report_lines(&histogram);

    assert_eq!(lines.len(), 2);
    for line in &lines {
        assert!(line_percentage(line)? >= 1.0, "{line}");
    }
    assert!(lines.iter().all(|line| !line.starts_with("Z:")));
    assert_eq!(histogram.count('Z'), 1);
    Ok(())
}

#[test]
fn test_empty_input_report() {
    assert_eq!(Histogram::new().to_string(), "");
    assert_eq!(histogram_of(&["", "", ""]).to_string(), "");
    assert!(histogram_of(&[""]).entries().is_empty());
}

#[test]
fn test_report_is_repeatable() {
    let histogram = histogram_of(&["Repeatable output"]);
    assert_eq!(histogram.render(), histogram.render());
    assert_eq!(histogram.to_string(), histogram.render());
}

#[test]
fn test_report_has_no_trailing_newline() {
    let report = histogram_of(&["ab\n"]).render();
    assert!(!report.ends_with('\n'));
    assert_eq!(report.lines().count(), 2);
}

#[test]
fn test_higher_threshold_filters_more() {
    let mut histogram = Histogram::with_config(ReportConfig::new(25.0, '#'));
    histogram.add("Hello World");
    let lines = report_lines(&histogram);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("L: "));
}

#[test]
fn test_exact_half_percentage_rounds_up() {
    let text = format!("{}{}", "a".repeat(791), "b".repeat(9));
    let histogram = histogram_of(&[&text]);
    let lines = report_lines(&histogram);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], format!("A: {} 98.88%", "#".repeat(99)));
    assert_eq!(lines[1], "B: # 1.13%");
}
