//! Static community-forum listing. Placeholder content only; the forum is
//! a passive rendering surface with no operations.

/// One forum topic card.
#[derive(Clone, Debug)]
pub struct ForumTopic {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub author: &'static str,
    pub date: &'static str,
    pub replies: u32,
    pub tags: &'static [&'static str],
}

/// The seeded placeholder topics.
#[must_use]
pub fn seed_topics() -> Vec<ForumTopic> {
    vec![
        ForumTopic {
            id: "1",
            title: "Best practices for estimating concrete costs?",
            description: "Looking for advice on accurately estimating costs for a large concrete pour. \
                          What factors should I consider beyond material and labor?",
            author: "BuildMasterPro",
            date: "2 days ago",
            replies: 15,
            tags: &["concrete", "estimation", "best practices"],
        },
        ForumTopic {
            id: "2",
            title: "Fluctuations in steel prices - how to budget?",
            description: "Steel prices seem to be all over the place. How are you all budgeting for \
                          steel in long-term projects?",
            author: "SteelHeart77",
            date: "5 days ago",
            replies: 8,
            tags: &["steel", "budgeting", "market trends"],
        },
        ForumTopic {
            id: "3",
            title: "Sustainable building materials - cost vs. benefit",
            description: "Exploring sustainable building materials for a new commercial project. What \
                          are the upfront cost differences and long-term benefits?",
            author: "EcoConstructor",
            date: "1 week ago",
            replies: 22,
            tags: &["sustainability", "green building", "materials"],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_topics_have_unique_ids() {
        let topics = seed_topics();
        assert_eq!(topics.len(), 3);
        let mut ids: Vec<&str> = topics.iter().map(|t| t.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }
}
