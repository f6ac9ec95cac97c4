//! Event audit bitmask <-> label table

pub const NO_AUDITING: &str = "No auditing";
pub const SUCCESS: &str = "Success";
pub const FAILURE: &str = "Failure";
pub const SUCCESS_FAILURE: &str = "Success,Failure";

/// Labels accepted as desired values
pub const EVENT_TYPES: [&str; 4] = [SUCCESS_FAILURE, SUCCESS, FAILURE, NO_AUDITING];

/// Raw bitmask to label. Unknown codes read as not audited.
pub fn label_for_code(raw: &str) -> &'static str {
    match raw.trim() {
        "3" => SUCCESS_FAILURE,
        "2" => FAILURE,
        "1" => SUCCESS,
        _ => NO_AUDITING,
    }
}

/// Label to raw bitmask. Unknown labels pass through unchanged so numeric
/// overrides still reach the import file.
pub fn code_for_label(label: &str) -> String {
    match label {
        SUCCESS_FAILURE => "3".to_string(),
        FAILURE => "2".to_string(),
        SUCCESS => "1".to_string(),
        NO_AUDITING => "0".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_table() {
        assert_eq!(label_for_code("3"), "Success,Failure");
        assert_eq!(label_for_code("2"), "Failure");
        assert_eq!(label_for_code("1"), "Success");
        assert_eq!(label_for_code("0"), "No auditing");
        assert_eq!(label_for_code(""), "No auditing");
        assert_eq!(label_for_code("17"), "No auditing");
    }

    #[test]
    fn test_encode_table() {
        assert_eq!(code_for_label("Success,Failure"), "3");
        assert_eq!(code_for_label("No auditing"), "0");
        assert_eq!(code_for_label("4"), "4");
    }

    #[test]
    fn test_round_trip() {
        for label in EVENT_TYPES {
            assert_eq!(label_for_code(&code_for_label(label)), label);
        }
    }
}
