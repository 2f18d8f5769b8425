use crate::utils::VIEWING_TIMES;

/// Opciones `<option>` con los horarios de visita del modal de reserva
pub fn render_viewing_time_options() -> String {
    VIEWING_TIMES
        .iter()
        .map(|time| format!(r#"<option value="{0}">{0}</option>"#, time))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_follow_viewing_times() {
        let html = render_viewing_time_options();
        assert_eq!(html.matches("<option").count(), VIEWING_TIMES.len());
        assert!(html.starts_with(r#"<option value="09:00">09:00</option>"#));
        assert!(html.ends_with(r#"<option value="15:30">15:30</option>"#));
        assert!(!html.contains("12:00"));
    }
}
