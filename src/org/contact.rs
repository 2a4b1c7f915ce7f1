use super::EmployeeNode;

const AVATAR_PLACEHOLDER_BASE: &str = "https://api.dicebear.com/7.x/avataaars/svg?seed=";

/// Explicit avatar reference, or a placeholder seeded by the node id.
pub fn avatar_url(node: &EmployeeNode) -> String {
    match node.image_ref.as_deref().map(str::trim) {
        Some(image_ref) if !image_ref.is_empty() => image_ref.to_owned(),
        _ => format!("{AVATAR_PLACEHOLDER_BASE}{}", node.id),
    }
}

/// The email is passed through verbatim; it is never validated.
pub fn mailto_uri(email: &str) -> String {
    format!("mailto:{email}")
}

pub fn schedule_uri(template: &str, email: &str) -> String {
    if template.contains("{email}") {
        template.replace("{email}", email)
    } else {
        format!("{template}{email}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_is_deterministic_per_id() {
        let a = EmployeeNode::new("vp-hr", "Grace", "VP", "HR");
        let b = EmployeeNode::new("vp-hr", "Someone Else", "Other", "Other");
        let c = EmployeeNode::new("cfo", "Grace", "VP", "HR");

        assert_eq!(avatar_url(&a), avatar_url(&b));
        assert_ne!(avatar_url(&a), avatar_url(&c));
        assert!(avatar_url(&a).ends_with("seed=vp-hr"));
    }

    #[test]
    fn blank_image_ref_falls_back_to_placeholder() {
        let mut node = EmployeeNode::new("ceo", "Dana", "CEO", "Executive");
        node.image_ref = Some("   ".to_owned());
        assert!(avatar_url(&node).ends_with("seed=ceo"));

        node.image_ref = Some("https://cdn.example/dana.png".to_owned());
        assert_eq!(avatar_url(&node), "https://cdn.example/dana.png");
    }

    #[test]
    fn mailto_keeps_malformed_addresses() {
        assert_eq!(mailto_uri("not an email"), "mailto:not an email");
    }

    #[test]
    fn schedule_template_substitutes_email() {
        assert_eq!(
            schedule_uri("https://cal.example/new?to={email}", "a@b.c"),
            "https://cal.example/new?to=a@b.c"
        );
        assert_eq!(schedule_uri("webcal:", "a@b.c"), "webcal:a@b.c");
    }
}
