//! Fixed-width text layout for ability arrays

use crate::core::types::Score;

/// Scores right-aligned to width 2, single-space separated: `15 13 12 11 11 11`
pub fn score_line(scores: &[Score]) -> String {
    scores
        .iter()
        .map(|score| format!("{:>2}", score))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Ability labels for generate mode: ` STR DEX CON INT WIS CHA`
pub fn label_header(labels: &[&str]) -> String {
    labels.iter().map(|label| format!(" {:>3}", label)).collect()
}

/// One generated array, aligned under `label_header`
pub fn score_row(scores: &[Score]) -> String {
    scores.iter().map(|score| format!(" {:>3}", score)).collect()
}

/// Numbered choose-mode option, 1-based
pub fn menu_line(number: usize, scores: &[Score]) -> String {
    format!("  {})  {}", number, score_line(scores))
}

/// Final `label  score` line after a selection
pub fn assignment_line(label: &str, score: Score) -> String {
    format!("  {:>3}  {:>2}", label, score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_line() {
        assert_eq!(score_line(&[15, 13, 12, 11, 11, 8]), "15 13 12 11 11  8");
    }

    #[test]
    fn test_header_and_row_align() {
        let header = label_header(&["STR", "DEX"]);
        let row = score_row(&[15, 8]);
        assert_eq!(header, " STR DEX");
        assert_eq!(row, "  15   8");
        assert_eq!(header.len(), row.len());
    }

    #[test]
    fn test_menu_and_assignment_lines() {
        assert_eq!(menu_line(2, &[15, 8]), "  2)  15  8");
        assert_eq!(assignment_line("WIS", 9), "  WIS   9");
    }
}
