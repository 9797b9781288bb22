//! Property-based tests for input validation

#[cfg(test)]
mod tests {
    use crate::core::validation::*;
    use crate::menu::MenuChoice;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_any_i32_round_trips_with_padding(id in any::<i32>(), pad in " {0,3}") {
            let input = format!("{pad}{id}{pad}");
            prop_assert_eq!(parse_member_id("ID", &input).unwrap(), id);
        }

        #[test]
        fn test_parse_member_id_never_panics(s in ".*") {
            let _ = parse_member_id("ID", &s);
        }

        #[test]
        fn test_letters_are_rejected(s in "[a-zA-Z]{1,10}") {
            let err = parse_member_id("ID", &s).unwrap_err();
            prop_assert!(err.is_recoverable());
        }

        #[test]
        fn test_menu_accepts_only_single_digit_one_to_seven(s in ".{0,4}") {
            let accepted = MenuChoice::parse(&s).is_ok();
            let expected = s.len() == 1 && ('1'..='7').contains(&s.chars().next().unwrap());
            prop_assert_eq!(accepted, expected);
        }
    }
}
