use serde::Serialize;

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct AgendaItem {
    pub id: i64,
    pub meeting_id: i64,
    pub title: String,
    pub is_completed: bool,
}

/// Split a multi-line agenda block into one title per non-blank line, trimmed, in order.
pub fn split_agenda_text(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_blank_and_whitespace_lines() {
        assert_eq!(split_agenda_text("A\n\nB\n  \nC"), vec!["A", "B", "C"]);
    }

    #[test]
    fn trims_and_handles_crlf() {
        assert_eq!(
            split_agenda_text("  Opening remarks \r\nBudget\r\n\r\n"),
            vec!["Opening remarks", "Budget"]
        );
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(split_agenda_text("").is_empty());
        assert!(split_agenda_text("\n \n\t\n").is_empty());
    }
}
