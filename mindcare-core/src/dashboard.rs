//! Чистые помощники личного кабинета: приветствие, мотивация дня,
//! короткие превью записей.

/// Мотивационные цитаты; одна выбирается случайно при каждом заходе.
pub const MOTIVATIONS: [&str; 5] = [
    "Taking care of your mental health is an act of self-love. Every small step you take today is a victory worth celebrating.",
    "You are stronger than you know. Embrace your journey with kindness and patience.",
    "Mental peace begins with a single breath. Take a moment for yourself today.",
    "Your mind deserves rest. Allow yourself to pause and recharge.",
    "Every challenge you face is a chance to grow. You’ve got this!",
];

/// Приветствие по местному часу.
pub fn greeting_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "Good morning"
    } else if hour < 18 {
        "Good afternoon"
    } else {
        "Good evening"
    }
}

/// Строка заголовка кабинета.
pub fn greeting_line(hour: u32, full_name: &str) -> String {
    format!("{}, {}!", greeting_for_hour(hour), full_name)
}

/// Выбирает цитату по случайному значению из `[0, 1)`.
pub fn pick_motivation(roll: f64) -> &'static str {
    let count = MOTIVATIONS.len();
    let index = ((roll * count as f64) as usize).min(count - 1);
    MOTIVATIONS[index]
}

/// Обрезает текст до `max_chars` символов, добавляя многоточие.
pub fn preview(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_switches_at_noon_and_six() {
        assert_eq!(greeting_for_hour(0), "Good morning");
        assert_eq!(greeting_for_hour(11), "Good morning");
        assert_eq!(greeting_for_hour(12), "Good afternoon");
        assert_eq!(greeting_for_hour(17), "Good afternoon");
        assert_eq!(greeting_for_hour(18), "Good evening");
        assert_eq!(greeting_for_hour(23), "Good evening");
    }

    #[test]
    fn greeting_line_addresses_the_user() {
        assert_eq!(greeting_line(9, "Alice"), "Good morning, Alice!");
    }

    #[test]
    fn motivation_roll_maps_to_quote_index() {
        assert_eq!(pick_motivation(0.0), MOTIVATIONS[0]);
        assert_eq!(pick_motivation(0.21), MOTIVATIONS[1]);
        assert_eq!(pick_motivation(0.999), MOTIVATIONS[4]);
        // Math.random никогда не возвращает 1.0, но выход за край не роняет выбор.
        assert_eq!(pick_motivation(1.0), MOTIVATIONS[4]);
        assert_eq!(pick_motivation(-0.5), MOTIVATIONS[0]);
    }

    #[test]
    fn short_text_is_left_untouched() {
        assert_eq!(preview("hello", 80), "hello");
        let exact = "x".repeat(80);
        assert_eq!(preview(&exact, 80), exact);
    }

    #[test]
    fn long_text_is_cut_with_ellipsis() {
        let long = "y".repeat(81);
        let cut = preview(&long, 80);
        assert_eq!(cut.len(), 83);
        assert!(cut.ends_with("..."));
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        let text = "ддддд";
        assert_eq!(preview(text, 5), text);
        assert_eq!(preview(text, 4), "дддд...");
    }
}
