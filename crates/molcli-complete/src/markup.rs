//! Rich-text snippets used in candidate annotations
//!
//! Annotations use the small HTML subset understood by typical popup
//! widgets. The engine never renders them itself.

/// Text in a given color
pub fn colored(text: &str, color: &str) -> String {
    format!("<font color=\"{}\">{}</font>", color, text)
}

/// Italic type label in parentheses, e.g. `(<i>enum</i>)`
pub fn type_label(label: &str) -> String {
    format!("(<i>{}</i>)", label)
}

/// Italic text
pub fn italic(text: &str) -> String {
    format!("<i>{}</i>", text)
}

/// Bold text
pub fn bold(text: &str) -> String {
    format!("<b>{}</b>", text)
}

/// Struck-through text
pub fn strike(text: &str) -> String {
    format!("<s>{}</s>", text)
}

/// A solid block in the given color
pub fn swatch(color: &str) -> String {
    colored("\u{2589}", color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markup() {
        assert_eq!(colored("protein A", "green"), "<font color=\"green\">protein A</font>");
        assert_eq!(type_label("enum"), "(<i>enum</i>)");
        assert_eq!(bold(&italic("x")), "<b><i>x</i></b>");
        assert_eq!(swatch("#FF0000"), "<font color=\"#FF0000\">\u{2589}</font>");
    }
}
