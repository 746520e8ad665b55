//! Plain-text rendering of a solved workbook for the terminal.

use tutor_engine::Solved;

pub fn render_text(solved: &Solved) -> String {
    let mut out = String::new();
    for section in &solved.sections {
        out.push_str(&format!("== {} ==\n", section.title));
        for row in &section.rows {
            out.push_str(&format!("  {}: {}\n", row.label, row.value));
        }
        out.push('\n');
    }
    if let Some(diagram) = &solved.diagram {
        out.push_str(&format!("[diagram: {:?}", diagram.kind));
        for (name, value) in &diagram.measures {
            out.push_str(&format!(" {name}={value}"));
        }
        out.push_str("]\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tutor_engine::{SolveRequest, Tutor};

    #[test]
    fn test_render_contains_sections_and_answer() {
        let tutor = Tutor::default();
        let solved = tutor
            .solve(&SolveRequest::for_text(
                "Find the area of a triangle with base 6 and height 8.",
            ))
            .unwrap();
        let text = render_text(&solved);
        assert!(text.contains("== Problem Statement =="));
        assert!(text.contains("== Solution Steps =="));
        assert!(text.contains("24"));
        assert!(text.contains("[diagram: Triangle"));
    }
}
