/// Suffix Spring-style controllers append to their resource paths.
const CONTROLLER_SUFFIX: &str = "-controller";

/// Derive a tag name from an API reference path.
///
/// Takes the final path segment and strips a trailing `-controller`.
pub fn tag_name(reference_path: &str) -> String {
    let segment = reference_path.rsplit('/').next().unwrap_or(reference_path);
    segment
        .strip_suffix(CONTROLLER_SUFFIX)
        .unwrap_or(segment)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_controller_suffix() {
        assert_eq!(tag_name("/pet-controller"), "pet");
    }

    #[test]
    fn test_uses_last_segment() {
        assert_eq!(tag_name("/v1/admin/user-controller"), "user");
    }

    #[test]
    fn test_plain_path() {
        assert_eq!(tag_name("/store"), "store");
    }

    #[test]
    fn test_suffix_only_stripped_at_end() {
        assert_eq!(tag_name("/pet-controller-v2"), "pet-controller-v2");
    }

    #[test]
    fn test_trailing_slash_gives_empty_segment() {
        assert_eq!(tag_name("/pet/"), "");
    }
}
