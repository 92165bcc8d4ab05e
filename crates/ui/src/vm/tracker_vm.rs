/// The "Learn More" impact blurb, with singular/plural handled.
#[must_use]
pub fn impact_line(trees: u32) -> String {
    let noun = if trees == 1 { "tree" } else { "trees" };
    format!("Your efforts are equivalent to planting {trees} {noun}!")
}

#[must_use]
pub fn streak_line(streak: u32) -> String {
    let noun = if streak == 1 { "day" } else { "days" };
    format!("Streak: {streak} {noun}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pluralizes_trees() {
        assert_eq!(
            impact_line(1),
            "Your efforts are equivalent to planting 1 tree!"
        );
        assert_eq!(
            impact_line(10),
            "Your efforts are equivalent to planting 10 trees!"
        );
    }

    #[test]
    fn pluralizes_streak_days() {
        assert_eq!(streak_line(1), "Streak: 1 day");
        assert_eq!(streak_line(0), "Streak: 0 days");
    }
}
