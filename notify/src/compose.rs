//! Notification text composition.

/// Name substituted when the request carries no usable user name.
pub const FALLBACK_NAME: &str = "Your friend";

/// Placeholder token replaced with the resolved name in custom templates.
pub const USERNAME_PLACEHOLDER: &str = "{username}";

/// Composes the notification body for a failed verification.
///
/// The resolved name is `user_name` unless it is absent or empty, in which
/// case [`FALLBACK_NAME`] stands in. With a template, every literal
/// `{username}` is substituted in a single pass and the rest of the template
/// passes through verbatim, unknown placeholders included. Without one, the
/// fixed default text is used. This never fails: a malformed template just
/// comes back with its unmatched pieces untouched.
pub fn compose_notification(template: Option<&str>, user_name: Option<&str>) -> String {
    let name = match user_name {
        Some(n) if !n.is_empty() => n,
        _ => FALLBACK_NAME,
    };

    match template {
        Some(t) => t.replace(USERNAME_PLACEHOLDER, name),
        None => format!("{name} missed their Ventus alarm this morning! Time to check in on them"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_message_uses_resolved_name() {
        assert_eq!(
            compose_notification(None, Some("Alex")),
            "Alex missed their Ventus alarm this morning! Time to check in on them"
        );
    }

    #[test]
    fn default_message_falls_back_without_name() {
        assert_eq!(
            compose_notification(None, None),
            "Your friend missed their Ventus alarm this morning! Time to check in on them"
        );
    }

    #[test]
    fn empty_name_counts_as_missing() {
        assert_eq!(
            compose_notification(None, Some("")),
            "Your friend missed their Ventus alarm this morning! Time to check in on them"
        );
        assert_eq!(
            compose_notification(Some("{username}!"), Some("")),
            "Your friend!"
        );
    }

    #[test]
    fn template_substitutes_every_occurrence() {
        assert_eq!(
            compose_notification(Some("{username}, wake up! {username}!"), Some("Sam")),
            "Sam, wake up! Sam!"
        );
    }

    #[test]
    fn template_without_placeholder_passes_through() {
        assert_eq!(
            compose_notification(Some("no placeholder here"), Some("Sam")),
            "no placeholder here"
        );
    }

    #[test]
    fn template_with_fallback_name() {
        assert_eq!(
            compose_notification(Some("Wake up {username}!"), None),
            "Wake up Your friend!"
        );
    }

    #[test]
    fn unknown_placeholders_are_left_alone() {
        assert_eq!(
            compose_notification(Some("{username} at {time} in {place}"), Some("Ira")),
            "Ira at {time} in {place}"
        );
    }

    #[test]
    fn substitution_is_single_pass() {
        // A name that itself contains the placeholder must not be re-expanded.
        assert_eq!(
            compose_notification(Some("hi {username}"), Some("{username}")),
            "hi {username}"
        );
    }

    #[test]
    fn malformed_templates_never_fail() {
        assert_eq!(compose_notification(Some("{username"), Some("Sam")), "{username");
        assert_eq!(compose_notification(Some("username}"), Some("Sam")), "username}");
        assert_eq!(compose_notification(Some("{}{{}}"), Some("Sam")), "{}{{}}");
        assert_eq!(compose_notification(Some(""), Some("Sam")), "");
    }
}
