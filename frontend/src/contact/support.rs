use rand::Rng;

pub const SUBMIT_DELAY_MS: u32 = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SupportKind {
    Bug,
    Technical,
    Feature,
}

impl SupportKind {
    pub const ALL: [SupportKind; 3] = [SupportKind::Bug, SupportKind::Technical, SupportKind::Feature];

    pub fn title(self) -> &'static str {
        match self {
            SupportKind::Bug => "Bug Report",
            SupportKind::Technical => "Technical Support",
            SupportKind::Feature => "Feature Request",
        }
    }

    pub fn subject_prefix(self) -> String {
        format!("{}: ", self.title())
    }

    pub fn blurb(self) -> &'static str {
        match self {
            SupportKind::Bug => "Found something broken in one of my apps? Let me know.",
            SupportKind::Technical => "Need help integrating or running an app you bought?",
            SupportKind::Feature => "Have an idea that would make an app better?",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SupportKind::Bug => "fas fa-bug",
            SupportKind::Technical => "fas fa-tools",
            SupportKind::Feature => "fas fa-lightbulb",
        }
    }
}

pub fn ticket_confirmation<R: Rng>(rng: &mut R) -> String {
    format!(
        "Support request submitted successfully! Ticket #{} created.",
        rng.gen_range(0..10_000)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn subjects_are_prefixed_with_the_title() {
        assert_eq!(SupportKind::Bug.subject_prefix(), "Bug Report: ");
        assert_eq!(SupportKind::Technical.subject_prefix(), "Technical Support: ");
        assert_eq!(SupportKind::Feature.subject_prefix(), "Feature Request: ");
    }

    #[test]
    fn ticket_numbers_stay_below_ten_thousand() {
        let mut rng = SmallRng::seed_from_u64(9);
        for _ in 0..100 {
            let message = ticket_confirmation(&mut rng);
            let number: u32 = message
                .split('#')
                .nth(1)
                .and_then(|rest| rest.split(' ').next())
                .and_then(|n| n.parse().ok())
                .unwrap();
            assert!(number < 10_000);
        }
    }
}
