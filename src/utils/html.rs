/// Escapa texto para interpolarlo en HTML (contenido y atributos)
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_markup_and_quotes() {
        assert_eq!(
            html_escape(r#"<img src="x" onerror='y'>&"#),
            "&lt;img src=&quot;x&quot; onerror=&#x27;y&#x27;&gt;&amp;"
        );
        assert_eq!(html_escape("Lyon 3e"), "Lyon 3e");
    }
}
