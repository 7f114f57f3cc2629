/// Canonicalize a currency display name as published by the feed.
///
/// The feed writes names as "short form, qualifier" (e.g. "dalur,
/// bandarískur"); reorder that to "bandarískur dalur". Names without a
/// comma pass through unchanged apart from capitalization.
pub fn format_currency_name(provided: &str) -> String {
    let parts: Vec<&str> = provided.split(',').collect();
    let mut value = if parts.len() > 1 {
        // Extra comma-delimited parts beyond the second are discarded.
        format!("{} {}", parts[1].trim(), parts[0].trim())
    } else {
        parts[0].to_string()
    };

    // Some reordered names end up with the short form doubled, e.g.
    // "sterlingspund pund pund". Only the trailing token is ever affected,
    // so only that case is collapsed.
    let tokens: Vec<&str> = value.split(' ').collect();
    if tokens.len() >= 2 && tokens[tokens.len() - 1] == tokens[tokens.len() - 2] {
        value = tokens[..tokens.len() - 1].join(" ");
    }

    let mut chars = value.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reorders_comma_separated_qualifier() {
        assert_eq!(format_currency_name("dollar, american"), "American dollar");
        assert_eq!(format_currency_name("dalur, bandarískur"), "Bandarískur dalur");
    }

    #[test]
    fn no_comma_only_capitalizes() {
        assert_eq!(format_currency_name("dollar"), "Dollar");
        assert_eq!(format_currency_name("evra"), "Evra");
    }

    #[test]
    fn collapses_doubled_trailing_word() {
        assert_eq!(format_currency_name("pund, sterlingspund pund"), "Sterlingspund pund");
        assert_eq!(format_currency_name("sterlingspund pund pund"), "Sterlingspund pund");
    }

    #[test]
    fn leaves_non_doubled_names_alone() {
        assert_eq!(format_currency_name("norsk króna"), "Norsk króna");
    }

    #[test]
    fn doubled_word_earlier_in_name_is_kept() {
        assert_eq!(format_currency_name("pund pund sterling"), "Pund pund sterling");
    }

    #[test]
    fn extra_commas_use_first_two_parts() {
        assert_eq!(format_currency_name("dollar, american, extra"), "American dollar");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert_eq!(format_currency_name(""), "");
    }

    #[test]
    fn uppercases_non_ascii_first_letter() {
        assert_eq!(format_currency_name("íslensk króna"), "Íslensk króna");
    }
}
